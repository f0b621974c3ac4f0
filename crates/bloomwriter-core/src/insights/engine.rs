//! Insight engine - orchestrates the weekly pattern detectors

use chrono::{Datelike, Duration, NaiveDate};

use crate::lexicon::growth_moment_patterns;
use crate::models::JournalEntry;

use super::types::{InsightPattern, WeeklyInsight};
use super::{
    GrowthTrendDetector, MoodActivityDetector, PatternType, ThemeCorrelationDetector,
    TimePatternDetector,
};

/// Maximum number of top themes in a weekly insight
const MAX_TOP_THEMES: usize = 5;
/// Maximum number of quoted growth moments
const MAX_GROWTH_MOMENTS: usize = 3;
/// Maximum number of actionable suggestions
const MAX_SUGGESTIONS: usize = 3;
/// Sentences shorter than this never count as growth moments
const GROWTH_MOMENT_MIN_LEN: usize = 20;
/// Growth moments longer than this are truncated with an ellipsis
const GROWTH_MOMENT_MAX_LEN: usize = 100;

/// Fallback suggestions for a week with no entries. The suggestions list is
/// never empty.
const EMPTY_WEEK_SUGGESTIONS: [&str; 3] = [
    "This week is a fresh start - try writing about one small thing you're grateful for.",
    "Consider setting a gentle reminder to check in with yourself each day.",
    "Remember: even a few sentences can be a meaningful journal entry.",
];

/// Context handed to each pattern detector.
///
/// `all_entries` must be sorted newest-first (the store's order); the
/// growth-trend detector slices the newest 30 from it.
pub struct WeekContext<'a> {
    /// Entries whose creation date falls inside the target week
    pub week_entries: &'a [JournalEntry],
    /// Every entry, newest-first
    pub all_entries: &'a [JournalEntry],
}

/// Trait for weekly pattern detectors.
///
/// Each detector contributes at most one pattern per week; insufficient
/// data is expressed by returning `None`, never by an error.
pub trait PatternDetector: Send + Sync {
    /// Which pattern kind this detector produces
    fn id(&self) -> PatternType;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Inspect the week and maybe produce a pattern
    fn detect(&self, ctx: &WeekContext<'_>) -> Option<InsightPattern>;
}

/// The main insight engine that runs the detectors and aggregates the
/// weekly report.
pub struct InsightEngine {
    detectors: Vec<Box<dyn PatternDetector>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in detectors, in their fixed
    /// reporting order.
    pub fn new() -> Self {
        let mut engine = Self { detectors: vec![] };

        engine.register(Box::new(TimePatternDetector));
        engine.register(Box::new(MoodActivityDetector));
        engine.register(Box::new(ThemeCorrelationDetector));
        engine.register(Box::new(GrowthTrendDetector));

        engine
    }

    /// Register a pattern detector
    pub fn register(&mut self, detector: Box<dyn PatternDetector>) {
        self.detectors.push(detector);
    }

    /// Get the list of registered pattern types
    pub fn pattern_types(&self) -> Vec<PatternType> {
        self.detectors.iter().map(|d| d.id()).collect()
    }

    /// Run every detector over the week, in registration order.
    pub fn detect_all(&self, ctx: &WeekContext<'_>) -> Vec<InsightPattern> {
        let mut patterns = Vec::new();

        for detector in &self.detectors {
            match detector.detect(ctx) {
                Some(pattern) => {
                    tracing::debug!(
                        detector = detector.id().as_str(),
                        confidence = pattern.confidence,
                        "Pattern detected"
                    );
                    patterns.push(pattern);
                }
                None => {
                    tracing::debug!(detector = detector.id().as_str(), "No pattern this week");
                }
            }
        }

        patterns
    }

    /// Generate the weekly insight for the 7-day span starting at
    /// `week_start` (inclusive of `week_start + 6 days`).
    ///
    /// Deterministic: identical inputs produce structurally identical
    /// output. A week with no entries returns the fixed empty-week insight.
    pub fn generate_weekly_insights(
        &self,
        all_entries: &[JournalEntry],
        week_start: NaiveDate,
    ) -> WeeklyInsight {
        let week_end = week_start + Duration::days(6);

        let week_entries: Vec<JournalEntry> = all_entries
            .iter()
            .filter(|e| {
                let date = e.created_at.date_naive();
                date >= week_start && date <= week_end
            })
            .cloned()
            .collect();

        if week_entries.is_empty() {
            return empty_week_insight(week_start, week_end);
        }

        let total = week_entries.len();
        let average_mood = week_entries.iter().map(|e| e.mood as f64).sum::<f64>() / total as f64;
        let average_sentiment = week_entries.iter().map(|e| e.sentiment).sum::<f64>() / total as f64;

        let top_themes = top_themes(&week_entries, MAX_TOP_THEMES);

        let ctx = WeekContext {
            week_entries: &week_entries,
            all_entries,
        };
        let patterns = self.detect_all(&ctx);

        let growth_moments = growth_moments(&week_entries);
        let suggestions = suggestions(&patterns, average_mood, &top_themes);
        let celebrate_text = Some(celebration_text(total, average_mood));

        tracing::debug!(
            total_entries = total,
            patterns = patterns.len(),
            "Weekly insight generated"
        );

        WeeklyInsight {
            week_start,
            week_end,
            total_entries: total,
            average_mood,
            average_sentiment,
            top_themes,
            patterns,
            growth_moments,
            suggestions,
            celebrate_text,
        }
    }
}

/// Monday of the week before the one containing `today`. The dashboard
/// summarizes the most recent completed week.
pub fn last_week_start(today: NaiveDate) -> NaiveDate {
    let days_into_week = today.weekday().num_days_from_monday() as i64;
    today - Duration::days(days_into_week + 7)
}

fn empty_week_insight(week_start: NaiveDate, week_end: NaiveDate) -> WeeklyInsight {
    WeeklyInsight {
        week_start,
        week_end,
        total_entries: 0,
        average_mood: 0.0,
        average_sentiment: 0.0,
        top_themes: vec![],
        patterns: vec![],
        growth_moments: vec![],
        suggestions: EMPTY_WEEK_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        celebrate_text: None,
    }
}

/// Most frequent themes first; ties keep first-encountered order.
fn top_themes(entries: &[JournalEntry], limit: usize) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for entry in entries {
        for tag in &entry.tags {
            match counts.iter_mut().find(|(t, _)| t == tag) {
                Some((_, n)) => *n += 1,
                None => counts.push((tag.clone(), 1)),
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1)); // stable: ties stay first-seen
    counts.into_iter().take(limit).map(|(t, _)| t).collect()
}

/// Collect up to 3 quoted sentences that read as growth moments: a sentence
/// qualifies when it matches one of the first-person growth patterns and is
/// longer than 20 characters.
fn growth_moments(entries: &[JournalEntry]) -> Vec<String> {
    let patterns = growth_moment_patterns();
    let mut moments = Vec::new();

    for entry in entries {
        for sentence in entry.text.split(['.', '!', '?']) {
            let sentence = sentence.trim();
            if sentence.is_empty() {
                continue;
            }
            let qualifies = sentence.chars().count() > GROWTH_MOMENT_MIN_LEN
                && patterns.iter().any(|p| p.is_match(sentence));
            if qualifies {
                moments.push(format!("\"{}\"", truncate_moment(sentence)));
            }
        }
    }

    moments.truncate(MAX_GROWTH_MOMENTS);
    moments
}

fn truncate_moment(sentence: &str) -> String {
    if sentence.chars().count() > GROWTH_MOMENT_MAX_LEN {
        let prefix: String = sentence.chars().take(GROWTH_MOMENT_MAX_LEN).collect();
        format!("{}...", prefix)
    } else {
        sentence.to_string()
    }
}

/// Pattern actionables in detector order, then mood-based suggestions, then
/// a theme-based one; capped at 3.
fn suggestions(patterns: &[InsightPattern], avg_mood: f64, themes: &[String]) -> Vec<String> {
    let mut suggestions: Vec<String> = patterns
        .iter()
        .filter_map(|p| p.actionable.clone())
        .collect();

    if avg_mood < 3.0 {
        suggestions.push(
            "Consider reaching out to a friend or family member - connection can lift your spirits."
                .to_string(),
        );
        suggestions
            .push("Try a 5-minute mindfulness exercise when you feel overwhelmed.".to_string());
    } else if avg_mood > 4.0 {
        suggestions.push(
            "You're in a positive space - this might be a good time to tackle a challenge you've been putting off."
                .to_string(),
        );
    }

    if themes.iter().any(|t| t == "work") && !themes.iter().any(|t| t == "rest") {
        suggestions.push(
            "You've been thinking about work a lot. Make sure to schedule some dedicated rest time."
                .to_string(),
        );
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Exactly one celebration applies, in this priority order: entry volume,
/// consistency, positive mood, effort.
fn celebration_text(entry_count: usize, avg_mood: f64) -> String {
    if entry_count >= 5 {
        format!(
            "Amazing dedication! You journaled {} times this week. That's real commitment to your wellbeing. 🌟",
            entry_count
        )
    } else if entry_count >= 3 {
        format!(
            "Great consistency! {} entries this week shows you're building a healthy habit. 💪",
            entry_count
        )
    } else if avg_mood >= 4.0 {
        "Your positive energy this week has been wonderful to witness. Keep shining! ✨".to_string()
    } else {
        "Thank you for taking time to reflect, even when things felt challenging. That takes real courage. 💙"
            .to_string()
    }
}
