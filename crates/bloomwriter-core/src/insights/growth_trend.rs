//! Growth-trend detector
//!
//! Unlike the other detectors this one looks beyond the target week: it
//! scans the newest 30 entries overall for growth/learning language and
//! reports what share of recent journaling is growth-oriented.

use serde_json::json;

use crate::lexicon::GROWTH_KEYWORDS;
use crate::models::JournalEntry;

use super::engine::{PatternDetector, WeekContext};
use super::types::{InsightPattern, PatternType};

/// How many of the newest entries to scan
const WINDOW: usize = 30;
/// Minimum entries before the trend is evaluated at all
const MIN_ENTRIES: usize = 10;
/// Minimum growth-oriented entries to report a trend
const MIN_GROWTH_ENTRIES: usize = 3;
const CONFIDENCE: f64 = 0.9;

pub struct GrowthTrendDetector;

impl PatternDetector for GrowthTrendDetector {
    fn id(&self) -> PatternType {
        PatternType::GrowthTrend
    }

    fn name(&self) -> &'static str {
        "Growth Trend"
    }

    fn detect(&self, ctx: &WeekContext<'_>) -> Option<InsightPattern> {
        let recent = &ctx.all_entries[..ctx.all_entries.len().min(WINDOW)];
        if recent.len() < MIN_ENTRIES {
            return None;
        }

        let growth_count = recent.iter().filter(|e| is_growth_entry(e)).count();
        if growth_count < MIN_GROWTH_ENTRIES {
            return None;
        }

        let growth_rate = growth_count as f64 / recent.len() as f64;

        Some(
            InsightPattern::new(
                PatternType::GrowthTrend,
                "You're in a growth mindset",
                format!(
                    "{:.0}% of your recent entries mention learning or personal development.",
                    growth_rate * 100.0
                ),
                CONFIDENCE,
            )
            .with_actionable(
                "Keep nurturing this growth mindset - it's a powerful foundation for positive change.",
            )
            .with_data(json!({
                "windowEntries": recent.len(),
                "growthEntries": growth_count,
            })),
        )
    }
}

/// Case-insensitive substring match against the growth keyword list
fn is_growth_entry(entry: &JournalEntry) -> bool {
    let text = entry.text.to_lowercase();
    GROWTH_KEYWORDS.iter().any(|k| text.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::SentimentAnalysis;
    use chrono::Utc;

    fn entry(text: &str) -> JournalEntry {
        let analysis = SentimentAnalysis {
            score: 0.0,
            keywords: vec![],
            themes: vec![],
        };
        JournalEntry::new(text, 3, &analysis).with_created_at(Utc::now())
    }

    fn detect(all_entries: &[JournalEntry]) -> Option<InsightPattern> {
        GrowthTrendDetector.detect(&WeekContext {
            week_entries: &[],
            all_entries,
        })
    }

    #[test]
    fn test_requires_ten_entries() {
        let entries: Vec<JournalEntry> =
            (0..9).map(|_| entry("trying to improve every day")).collect();
        assert!(detect(&entries).is_none());
    }

    #[test]
    fn test_requires_three_growth_entries() {
        let mut entries: Vec<JournalEntry> = (0..10).map(|_| entry("an ordinary day")).collect();
        entries[0] = entry("working toward a new goal");
        entries[1] = entry("I want to learn the piano");
        assert!(detect(&entries).is_none());
    }

    #[test]
    fn test_reports_percentage_of_window() {
        let mut entries: Vec<JournalEntry> = (0..10).map(|_| entry("an ordinary day")).collect();
        for e in entries.iter_mut().take(3) {
            *e = entry("slow progress on the garden project");
        }

        let pattern = detect(&entries).unwrap();
        assert_eq!(pattern.confidence, 0.9);
        assert!(pattern.description.contains("30%"));
        assert_eq!(pattern.data["growthEntries"], 3);
    }

    #[test]
    fn test_matches_are_substrings_case_insensitive() {
        // "Learning" contains "learn"; case is ignored
        assert!(is_growth_entry(&entry("Learning to cook has been fun")));
        assert!(is_growth_entry(&entry("I OVERCAME my hesitation")));
        assert!(!is_growth_entry(&entry("dinner with friends")));
    }

    #[test]
    fn test_window_caps_at_thirty_entries() {
        // Growth mentions only beyond the newest 30 are ignored
        let mut entries: Vec<JournalEntry> = (0..30).map(|_| entry("an ordinary day")).collect();
        entries.extend((0..5).map(|_| entry("real progress toward my goal")));
        assert!(detect(&entries).is_none());
    }
}
