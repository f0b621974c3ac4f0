//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bloomwriter - a private journal that notices your patterns
#[derive(Parser)]
#[command(name = "bloomwriter")]
#[command(about = "Private journaling with sentiment, prompts, and weekly insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Journal store file (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a new journal entry
    Write {
        /// Entry text (reads stdin when omitted)
        #[arg(short, long)]
        text: Option<String>,

        /// Mood on a 1-5 scale
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        mood: u8,
    },

    /// List recent entries
    List {
        /// Maximum number of entries to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show one entry in full
    Show {
        /// Entry id (a unique prefix is enough)
        id: String,
    },

    /// Delete an entry
    Delete {
        /// Entry id (a unique prefix is enough)
        id: String,
    },

    /// Suggest writing prompts based on recent entries
    Prompts {
        /// Current mood on a 1-5 scale
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        mood: Option<u8>,
    },

    /// Weekly insight report
    Insights {
        /// Week start date (YYYY-MM-DD); defaults to last week's Monday
        #[arg(long)]
        week_start: Option<String>,

        /// Emit the insight as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Export all journal data as JSON
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print current settings
    Show,

    /// Set a settings key
    ///
    /// Keys: local-only, e2ee, daily-reminder, privacy-mode (true/false),
    /// reminder-time (HH:MM or "none")
    Set {
        key: String,
        value: String,
    },
}
