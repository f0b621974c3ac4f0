//! Core types for the weekly insight engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of behavioral patterns the detectors can surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternType {
    /// Correlation between mentioned activities and mood
    MoodActivity,
    /// Time-of-day mood differences
    TimePattern,
    /// Themes whose entries carry consistently positive sentiment
    ThemeCorrelation,
    /// Sustained growth/learning mentions across recent entries
    GrowthTrend,
}

impl PatternType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternType::MoodActivity => "mood-activity",
            PatternType::TimePattern => "time-pattern",
            PatternType::ThemeCorrelation => "theme-correlation",
            PatternType::GrowthTrend => "growth-trend",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PatternType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mood-activity" => Ok(PatternType::MoodActivity),
            "time-pattern" => Ok(PatternType::TimePattern),
            "theme-correlation" => Ok(PatternType::ThemeCorrelation),
            "growth-trend" => Ok(PatternType::GrowthTrend),
            _ => Err(format!("Unknown pattern type: {}", s)),
        }
    }
}

/// A detected weekly behavioral pattern.
///
/// Produced fresh on every insight generation call; never persisted on its
/// own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightPattern {
    #[serde(rename = "type")]
    pub pattern_type: PatternType,
    pub title: String,
    pub description: String,
    /// Detector confidence in [0, 1]
    pub confidence: f64,
    /// Suggested action derived from the pattern
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actionable: Option<String>,
    /// Detector-specific supporting data
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: serde_json::Value,
}

impl InsightPattern {
    pub fn new(
        pattern_type: PatternType,
        title: impl Into<String>,
        description: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            pattern_type,
            title: title.into(),
            description: description.into(),
            confidence,
            actionable: None,
            data: serde_json::Value::Null,
        }
    }

    /// Add an actionable recommendation
    pub fn with_actionable(mut self, actionable: impl Into<String>) -> Self {
        self.actionable = Some(actionable.into());
        self
    }

    /// Add structured supporting data
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }
}

/// The aggregated weekly report: stats, detected patterns, growth moments,
/// suggestions, and a celebration line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyInsight {
    pub week_start: NaiveDate,
    /// Inclusive end of the 7-day span (week_start + 6 days)
    pub week_end: NaiveDate,
    pub total_entries: usize,
    /// 0 when the week has no entries
    pub average_mood: f64,
    pub average_sentiment: f64,
    /// Most frequent themes first, at most 5
    pub top_themes: Vec<String>,
    /// At most one pattern per detector, in detector order
    pub patterns: Vec<InsightPattern>,
    /// Up to 3 quoted sentences that read as growth moments
    pub growth_moments: Vec<String>,
    /// Up to 3 actionable suggestions; never empty
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub celebrate_text: Option<String>,
}
