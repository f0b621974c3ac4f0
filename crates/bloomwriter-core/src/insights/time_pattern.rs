//! Time-of-day pattern detector
//!
//! Buckets the week's entries into morning/afternoon/evening by creation
//! hour and reports when one part of the day carries a clearly better mood.

use chrono::Timelike;
use serde_json::json;

use crate::models::JournalEntry;
use crate::prompts::TimeOfDay;

use super::engine::{PatternDetector, WeekContext};
use super::types::{InsightPattern, PatternType};

/// The best bucket must average above this to be worth reporting
const BEST_MOOD_THRESHOLD: f64 = 3.2;
/// ...and the spread between best and worst must exceed this
const SPREAD_THRESHOLD: f64 = 0.5;
const CONFIDENCE: f64 = 0.8;

pub struct TimePatternDetector;

impl PatternDetector for TimePatternDetector {
    fn id(&self) -> PatternType {
        PatternType::TimePattern
    }

    fn name(&self) -> &'static str {
        "Time Pattern"
    }

    fn detect(&self, ctx: &WeekContext<'_>) -> Option<InsightPattern> {
        let slots = [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening];

        let averages: Vec<(TimeOfDay, f64)> = slots
            .iter()
            .map(|&slot| (slot, slot_average(ctx.week_entries, slot)))
            .collect();

        // On ties the later slot wins, for both best and worst.
        let best = averages[1..]
            .iter()
            .fold(&averages[0], |a, b| if a.1 > b.1 { a } else { b });
        let worst = averages[1..]
            .iter()
            .fold(&averages[0], |a, b| if a.1 < b.1 { a } else { b });

        if best.1 > BEST_MOOD_THRESHOLD && best.1 - worst.1 > SPREAD_THRESHOLD {
            let pattern = InsightPattern::new(
                PatternType::TimePattern,
                format!("Your {} energy", best.0),
                format!(
                    "You tend to feel most positive during {} hours (average mood: {:.1}/5).",
                    best.0, best.1
                ),
                CONFIDENCE,
            )
            .with_actionable(format!(
                "Consider scheduling important activities or self-care during your {} energy peak.",
                best.0
            ))
            .with_data(json!({
                "bestSlot": best.0.as_str(),
                "worstSlot": worst.0.as_str(),
                "averages": averages
                    .iter()
                    .map(|(slot, avg)| (slot.as_str().to_string(), *avg))
                    .collect::<std::collections::BTreeMap<_, _>>(),
            }));
            return Some(pattern);
        }

        None
    }
}

/// Average mood of entries created in the given slot; 0 when the slot is
/// empty.
fn slot_average(entries: &[JournalEntry], slot: TimeOfDay) -> f64 {
    let moods: Vec<f64> = entries
        .iter()
        .filter(|e| TimeOfDay::from_hour(e.created_at.hour()) == slot)
        .map(|e| e.mood as f64)
        .collect();

    if moods.is_empty() {
        0.0
    } else {
        moods.iter().sum::<f64>() / moods.len() as f64
    }
}
