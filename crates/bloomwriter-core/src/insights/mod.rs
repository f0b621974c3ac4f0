//! Weekly insight engine
//!
//! Turns a week of journal entries into a readable report: aggregate stats,
//! detected behavioral patterns, quoted growth moments, actionable
//! suggestions, and a celebration line. Four independent detectors each
//! contribute at most one pattern per week:
//!
//! - **Time pattern** - which part of the day carries the best mood
//! - **Mood-activity** - activities that correlate with high moods
//! - **Theme correlation** - themes whose entries read most positive
//! - **Growth trend** - growth/learning language across recent entries
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bloomwriter_core::insights::{last_week_start, InsightEngine};
//!
//! let engine = InsightEngine::new();
//! let week = last_week_start(chrono::Utc::now().date_naive());
//! let insight = engine.generate_weekly_insights(&entries, week);
//! ```
//!
//! Everything here is a pure, synchronous function over in-memory entries;
//! the same inputs always produce the same insight.

pub mod engine;
pub mod growth_trend;
pub mod mood_activity;
pub mod theme_correlation;
pub mod time_pattern;
pub mod types;

pub use engine::{last_week_start, InsightEngine, PatternDetector, WeekContext};
pub use growth_trend::GrowthTrendDetector;
pub use mood_activity::MoodActivityDetector;
pub use theme_correlation::ThemeCorrelationDetector;
pub use time_pattern::TimePatternDetector;
pub use types::{InsightPattern, PatternType, WeeklyInsight};
