//! Mood-activity correlation detector
//!
//! Looks for activities (exercise, social, creative, nature, rest) that
//! co-occur with high moods this week. An entry "has" an activity when any
//! of its tokens exactly matches one of the activity's keywords, so an
//! entry mentioning "walk" counts toward both exercise and nature.

use serde_json::json;

use crate::lexicon::ACTIVITY_KEYWORDS;
use crate::models::JournalEntry;

use super::engine::{PatternDetector, WeekContext};
use super::types::{InsightPattern, PatternType};

/// An activity needs at least this many mentioning entries to qualify
const MIN_INSTANCES: usize = 2;
/// Mean mood gate for reporting
const MOOD_THRESHOLD: f64 = 3.5;
/// Instance count at which confidence saturates at 1.0
const FULL_CONFIDENCE_COUNT: f64 = 5.0;

pub struct MoodActivityDetector;

impl PatternDetector for MoodActivityDetector {
    fn id(&self) -> PatternType {
        PatternType::MoodActivity
    }

    fn name(&self) -> &'static str {
        "Mood-Activity Correlation"
    }

    fn detect(&self, ctx: &WeekContext<'_>) -> Option<InsightPattern> {
        // Moods of mentioning entries, per activity, in lexicon order
        let mut correlations: Vec<(&str, Vec<f64>)> = ACTIVITY_KEYWORDS
            .iter()
            .map(|(activity, _)| (*activity, Vec::new()))
            .collect();

        for entry in ctx.week_entries {
            let words: Vec<String> = entry
                .text
                .to_lowercase()
                .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .map(|w| w.to_string())
                .collect();

            for (i, (_, keywords)) in ACTIVITY_KEYWORDS.iter().enumerate() {
                if keywords.iter().any(|k| words.iter().any(|w| w == k)) {
                    correlations[i].1.push(entry.mood as f64);
                }
            }
        }

        let mut best: Option<(&str, f64, usize)> = None;
        for (activity, moods) in &correlations {
            if moods.len() < MIN_INSTANCES {
                continue;
            }
            let avg = moods.iter().sum::<f64>() / moods.len() as f64;
            // Strict comparison: the earlier activity wins ties
            if best.map_or(true, |(_, best_avg, _)| avg > best_avg) {
                best = Some((activity, avg, moods.len()));
            }
        }

        let (activity, avg_mood, count) = best?;
        if avg_mood <= MOOD_THRESHOLD {
            return None;
        }

        Some(
            InsightPattern::new(
                PatternType::MoodActivity,
                format!("{} boosts your mood", activity),
                format!(
                    "When you mentioned {} in your entries, your average mood was {:.1}/5 ({} times this week).",
                    activity, avg_mood, count
                ),
                (count as f64 / FULL_CONFIDENCE_COUNT).min(1.0),
            )
            .with_actionable(format!(
                "Try to incorporate more {} into your routine for better wellbeing.",
                activity
            ))
            .with_data(json!({
                "activity": activity,
                "averageMood": avg_mood,
                "instances": count,
            })),
        )
    }
}
