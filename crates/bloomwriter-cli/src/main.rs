//! Bloomwriter CLI - private journal with weekly insights
//!
//! Usage:
//!   bloomwriter write --mood 4 --text "..."   Save an entry
//!   bloomwriter prompts --mood 2              Suggest writing prompts
//!   bloomwriter insights                      Last week's insight report
//!   bloomwriter export --out backup.json      Export everything

mod cli;
mod commands;


use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let file = cli.file.as_deref();

    match cli.command {
        Commands::Write { text, mood } => {
            let text = match text {
                Some(t) => t,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("reading entry text from stdin")?;
                    buf
                }
            };
            let mut store = commands::open_store(file)?;
            commands::cmd_write(&mut store, &text, mood)
        }
        Commands::List { limit } => {
            let store = commands::open_store(file)?;
            commands::cmd_list(&store, limit)
        }
        Commands::Show { id } => {
            let store = commands::open_store(file)?;
            commands::cmd_show(&store, &id)
        }
        Commands::Delete { id } => {
            let mut store = commands::open_store(file)?;
            commands::cmd_delete(&mut store, &id)
        }
        Commands::Prompts { mood } => {
            let store = commands::open_store(file)?;
            commands::cmd_prompts(&store, mood)
        }
        Commands::Insights { week_start, json } => {
            let store = commands::open_store(file)?;
            commands::cmd_insights(&store, week_start.as_deref(), json)
        }
        Commands::Settings { action } => match action {
            SettingsAction::Show => {
                let store = commands::open_store(file)?;
                commands::cmd_settings_show(&store)
            }
            SettingsAction::Set { key, value } => {
                let mut store = commands::open_store(file)?;
                commands::cmd_settings_set(&mut store, &key, &value)
            }
        },
        Commands::Export { out } => {
            let store = commands::open_store(file)?;
            commands::cmd_export(&store, out.as_deref())
        }
    }
}
