//! Keyword-lexicon sentiment analysis
//!
//! Scores free text on a -1 to 1 scale by counting positive and negative
//! lexicon hits, and tags the text with matching theme categories. This is
//! a deliberately simple classifier: the score is the hit balance divided
//! by the token count, amplified by a fixed sensitivity factor so that a
//! small fraction of sentiment words can saturate the scale.

use serde::{Deserialize, Serialize};

use crate::lexicon::{NEGATIVE_WORDS, POSITIVE_WORDS, THEME_KEYWORDS};

/// Sensitivity tuning constant: amplifies the raw hit ratio before clamping.
const SCORE_AMPLIFICATION: f64 = 5.0;

/// Result of analyzing one piece of text. Transient: consumed immediately
/// to build a [`crate::models::JournalEntry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    /// Sentiment score in [-1, 1], rounded to 2 decimal places
    pub score: f64,
    /// Matched sentiment lexicon words, de-duplicated, first-seen order
    pub keywords: Vec<String>,
    /// Matched theme categories, de-duplicated, lexicon order
    pub themes: Vec<String>,
}

/// Split text into lowercase tokens on non-word-character runs, discarding
/// tokens of length <= 2.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|w| w.chars().count() > 2)
        .map(|w| w.to_string())
        .collect()
}

/// Analyze free text for sentiment and themes.
///
/// Empty text yields a zero score and empty keyword/theme lists; there are
/// no error conditions.
pub fn analyze(text: &str) -> SentimentAnalysis {
    let words = tokenize(text);

    let mut positive = 0usize;
    let mut negative = 0usize;
    let mut keywords: Vec<String> = Vec::new();

    // A word may count toward both lists if the lexicons ever overlapped;
    // no mutual exclusion is enforced.
    for word in &words {
        if POSITIVE_WORDS.contains(&word.as_str()) {
            positive += 1;
            if !keywords.contains(word) {
                keywords.push(word.clone());
            }
        }
        if NEGATIVE_WORDS.contains(&word.as_str()) {
            negative += 1;
            if !keywords.contains(word) {
                keywords.push(word.clone());
            }
        }
    }

    let mut themes: Vec<String> = Vec::new();
    for (theme, theme_words) in THEME_KEYWORDS {
        if words.iter().any(|w| theme_words.contains(&w.as_str())) {
            themes.push((*theme).to_string());
        }
    }

    let total = words.len().max(1) as f64;
    let raw = (positive as f64 - negative as f64) / total;
    let score = (raw * SCORE_AMPLIFICATION).clamp(-1.0, 1.0);
    let score = (score * 100.0).round() / 100.0;

    SentimentAnalysis {
        score,
        keywords,
        themes,
    }
}

/// The five sentiment bands exposed to the presentation layer.
///
/// Bands are a total step function over the score with strict `>` cutoffs
/// at 0.5, 0.2, -0.2 and -0.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentBand {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

impl SentimentBand {
    pub fn from_score(score: f64) -> Self {
        if score > 0.5 {
            Self::VeryPositive
        } else if score > 0.2 {
            Self::Positive
        } else if score > -0.2 {
            Self::Neutral
        } else if score > -0.5 {
            Self::Negative
        } else {
            Self::VeryNegative
        }
    }

    /// Human-readable label for the band
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryPositive => "Very Positive",
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
            Self::VeryNegative => "Very Negative",
        }
    }

    /// Ordinal mood level 5..1 for presentation (color scale is the
    /// presentation layer's concern; the core only exposes the level).
    pub fn mood_level(&self) -> u8 {
        match self {
            Self::VeryPositive => 5,
            Self::Positive => 4,
            Self::Neutral => 3,
            Self::Negative => 2,
            Self::VeryNegative => 1,
        }
    }
}

impl std::fmt::Display for SentimentBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_neutral() {
        let analysis = analyze("");
        assert_eq!(analysis.score, 0.0);
        assert!(analysis.keywords.is_empty());
        assert!(analysis.themes.is_empty());
    }

    #[test]
    fn test_happy_grateful_entry() {
        let analysis = analyze("I feel happy and grateful today");
        assert!(analysis.score > 0.0);
        assert!(analysis.themes.contains(&"gratitude".to_string()));
        assert!(analysis.keywords.contains(&"happy".to_string()));
        assert!(analysis.keywords.contains(&"grateful".to_string()));
    }

    #[test]
    fn test_score_is_bounded_and_rounded() {
        for text in [
            "happy happy happy happy happy",
            "terrible awful horrible sad angry",
            "the quick brown fox jumps over the lazy dog",
            "happy but also sad and tired though grateful",
        ] {
            let score = analyze(text).score;
            assert!((-1.0..=1.0).contains(&score), "score {} out of range", score);
            let scaled = score * 100.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-9,
                "score {} not rounded to 2 decimals",
                score
            );
        }
    }

    #[test]
    fn test_amplification_saturates_quickly() {
        // 1 positive hit in 5 tokens: raw 0.2, amplified to 1.0
        let analysis = analyze("today felt wonderful after everything");
        assert_eq!(analysis.score, 1.0);
    }

    #[test]
    fn test_short_tokens_discarded() {
        // "joy" has 3 chars and counts; "up" style 2-char tokens do not
        let analysis = analyze("so it is my joy");
        assert_eq!(analysis.keywords, vec!["joy".to_string()]);
    }

    #[test]
    fn test_keywords_deduplicated() {
        let analysis = analyze("happy happy sad sad happy");
        assert_eq!(
            analysis.keywords,
            vec!["happy".to_string(), "sad".to_string()]
        );
    }

    #[test]
    fn test_negative_entry() {
        let analysis = analyze("completely exhausted and stressed and overwhelmed");
        assert!(analysis.score < 0.0);
        assert!(analysis.keywords.contains(&"exhausted".to_string()));
    }

    #[test]
    fn test_theme_reported_once_regardless_of_match_count() {
        let analysis = analyze("meeting after meeting at the office about the project");
        let work_count = analysis.themes.iter().filter(|t| *t == "work").count();
        assert_eq!(work_count, 1);
    }

    #[test]
    fn test_band_boundaries_are_strict() {
        assert_eq!(SentimentBand::from_score(0.51), SentimentBand::VeryPositive);
        assert_eq!(SentimentBand::from_score(0.5), SentimentBand::Positive);
        assert_eq!(SentimentBand::from_score(0.2), SentimentBand::Neutral);
        assert_eq!(SentimentBand::from_score(-0.2), SentimentBand::Negative);
        assert_eq!(SentimentBand::from_score(-0.5), SentimentBand::VeryNegative);
    }

    #[test]
    fn test_band_labels_and_levels() {
        assert_eq!(SentimentBand::from_score(0.8).label(), "Very Positive");
        assert_eq!(SentimentBand::from_score(0.8).mood_level(), 5);
        assert_eq!(SentimentBand::from_score(0.0).label(), "Neutral");
        assert_eq!(SentimentBand::from_score(0.0).mood_level(), 3);
        assert_eq!(SentimentBand::from_score(-0.9).mood_level(), 1);
    }
}
