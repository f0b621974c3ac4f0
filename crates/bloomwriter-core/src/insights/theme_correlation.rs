//! Theme-sentiment correlation detector
//!
//! Groups the week's sentiment scores by entry tag and reports the theme
//! whose entries carry the most positive average sentiment.

use serde_json::json;

use crate::sentiment::SentimentBand;

use super::engine::{PatternDetector, WeekContext};
use super::types::{InsightPattern, PatternType};

/// A theme needs at least this many tagged entries to qualify
const MIN_OCCURRENCES: usize = 2;
/// Mean sentiment gate for reporting
const SENTIMENT_THRESHOLD: f64 = 0.3;
const CONFIDENCE: f64 = 0.7;

pub struct ThemeCorrelationDetector;

impl PatternDetector for ThemeCorrelationDetector {
    fn id(&self) -> PatternType {
        PatternType::ThemeCorrelation
    }

    fn name(&self) -> &'static str {
        "Theme-Sentiment Correlation"
    }

    fn detect(&self, ctx: &WeekContext<'_>) -> Option<InsightPattern> {
        // Sentiment samples per tag, in first-encountered order
        let mut theme_data: Vec<(String, Vec<f64>)> = Vec::new();
        for entry in ctx.week_entries {
            for tag in &entry.tags {
                match theme_data.iter_mut().find(|(t, _)| t == tag) {
                    Some((_, scores)) => scores.push(entry.sentiment),
                    None => theme_data.push((tag.clone(), vec![entry.sentiment])),
                }
            }
        }

        let mut best: Option<(&str, f64, usize)> = None;
        for (theme, scores) in &theme_data {
            if scores.len() < MIN_OCCURRENCES {
                continue;
            }
            let avg = scores.iter().sum::<f64>() / scores.len() as f64;
            // Strict comparison: the first-encountered theme wins ties
            if best.map_or(true, |(_, best_avg, _)| avg > best_avg) {
                best = Some((theme, avg, scores.len()));
            }
        }

        let (theme, avg_sentiment, occurrences) = best?;
        if avg_sentiment <= SENTIMENT_THRESHOLD {
            return None;
        }

        Some(
            InsightPattern::new(
                PatternType::ThemeCorrelation,
                format!("{} brings you joy", theme),
                format!(
                    "Your entries about {} show consistently positive sentiment ({}).",
                    theme,
                    SentimentBand::from_score(avg_sentiment).label()
                ),
                CONFIDENCE,
            )
            .with_actionable(format!(
                "Consider exploring more opportunities related to {}.",
                theme
            ))
            .with_data(json!({
                "theme": theme,
                "averageSentiment": avg_sentiment,
                "occurrences": occurrences,
            })),
        )
    }
}
