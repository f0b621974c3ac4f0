//! Bloomwriter Core Library
//!
//! Shared functionality for the Bloomwriter private journaling tool:
//! - Keyword lexicons for sentiment, themes, activities, and growth language
//! - Sentiment analyzer (score, matched keywords, theme tags)
//! - Contextual writing-prompt generator with injected randomness
//! - Weekly insight engine with pluggable pattern detectors
//! - Flat JSON journal store with settings and export
//!
//! The analytics are pure, synchronous functions over in-memory entry
//! collections; only the store touches the filesystem.

pub mod error;
pub mod insights;
pub mod lexicon;
pub mod models;
pub mod prompts;
pub mod sentiment;
pub mod store;

pub use error::{Error, Result};
pub use insights::{
    last_week_start, InsightEngine, InsightPattern, PatternDetector, PatternType, WeekContext,
    WeeklyInsight,
};
pub use models::{AppSettings, JournalEntry, JournalPrompt, PromptCategory};
pub use prompts::{contextual_prompts, known_prompt_ids, random_prompt, TimeOfDay};
pub use sentiment::{analyze, SentimentAnalysis, SentimentBand};
pub use store::{ExportData, JournalStore};
