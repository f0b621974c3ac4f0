//! Domain models for Bloomwriter

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sentiment::SentimentAnalysis;

/// A single journal entry.
///
/// Entries are value objects: they are constructed once at save time by
/// combining user input (text, mood) with analyzer output (tags, sentiment),
/// and "update" replaces the entry wholesale by id. The analytics never
/// mutate a caller-supplied entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Opaque unique id, generated at creation and immutable thereafter
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub text: String,
    /// Mood on a 1-5 scale (validated by the presentation layer)
    pub mood: u8,
    /// Theme tags derived by the sentiment analyzer
    pub tags: Vec<String>,
    /// Sentiment score on a -1 to 1 scale
    pub sentiment: f64,
}

impl JournalEntry {
    /// Build a new entry from user input and analyzer output.
    pub fn new(text: impl Into<String>, mood: u8, analysis: &SentimentAnalysis) -> Self {
        let text = text.into();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            text: text.trim().to_string(),
            mood,
            tags: analysis.themes.clone(),
            sentiment: analysis.score,
        }
    }

    /// Override the creation timestamp (used by imports and tests).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// User-facing application settings.
///
/// All fields have defaults applied when a stored value is absent, so old
/// store files keep loading as new flags are added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppSettings {
    pub local_only: bool,
    pub e2ee_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passphrase_salt: Option<String>,
    pub daily_reminder: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,
    pub privacy_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            local_only: true,
            e2ee_enabled: false,
            passphrase_salt: None,
            daily_reminder: false,
            reminder_time: None,
            privacy_mode: true,
        }
    }
}

/// Categories a writing prompt can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptCategory {
    Reflection,
    Mood,
    Gratitude,
    Growth,
    Stress,
    Relationships,
    Creativity,
}

impl PromptCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reflection => "reflection",
            Self::Mood => "mood",
            Self::Gratitude => "gratitude",
            Self::Growth => "growth",
            Self::Stress => "stress",
            Self::Relationships => "relationships",
            Self::Creativity => "creativity",
        }
    }
}

impl std::str::FromStr for PromptCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reflection" => Ok(Self::Reflection),
            "mood" => Ok(Self::Mood),
            "gratitude" => Ok(Self::Gratitude),
            "growth" => Ok(Self::Growth),
            "stress" => Ok(Self::Stress),
            "relationships" => Ok(Self::Relationships),
            "creativity" => Ok(Self::Creativity),
            _ => Err(format!("Unknown prompt category: {}", s)),
        }
    }
}

impl std::fmt::Display for PromptCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A suggested writing prompt, either from the static catalog or derived
/// from recent-entry analysis.
///
/// Prompts are stateless and regenerated on every call; the id is stable so
/// callers can de-duplicate and correlate selections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalPrompt {
    pub id: String,
    pub text: String,
    pub category: PromptCategory,
    /// Why this prompt was surfaced (e.g., "Recent work mentions")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// True when derived from recent-entry analysis rather than the catalog
    #[serde(default)]
    pub follow_up: bool,
}

impl JournalPrompt {
    pub fn new(id: impl Into<String>, text: impl Into<String>, category: PromptCategory) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category,
            context: None,
            follow_up: false,
        }
    }

    /// Attach the reason this prompt was surfaced
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Mark as derived from recent-entry analysis
    pub fn as_follow_up(mut self) -> Self {
        self.follow_up = true;
        self
    }
}
