//! Contextual writing-prompt generation
//!
//! Builds a candidate pool from static catalogs (time of day, current mood)
//! and follow-ups derived from recent entries (recurring themes, sentiment
//! trend, journaling gaps), then shuffles and caps the pool. Randomness is
//! injected so callers control determinism: the CLI passes a thread rng,
//! tests pass a seeded one.

use chrono::{DateTime, Timelike, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{JournalEntry, JournalPrompt, PromptCategory};

/// Maximum number of prompts returned per call
const MAX_PROMPTS: usize = 4;
/// Probability of appending a random creative prompt to the pool
const CREATIVE_PROMPT_CHANCE: f64 = 0.3;
/// Days of silence before the welcome-back prompt is surfaced
const WELCOME_BACK_GAP_DAYS: i64 = 3;
/// Sentiment difference that counts as a trend rather than noise
const TREND_THRESHOLD: f64 = 0.1;

type CatalogEntry = (&'static str, &'static str, PromptCategory);

const MORNING_PROMPTS: &[CatalogEntry] = &[
    (
        "morning_intention",
        "What's one thing you're looking forward to today?",
        PromptCategory::Reflection,
    ),
    (
        "morning_energy",
        "How are you feeling as you start this day? What's contributing to that feeling?",
        PromptCategory::Mood,
    ),
    (
        "morning_gratitude",
        "What's something small that you're grateful for right now?",
        PromptCategory::Gratitude,
    ),
];

const EVENING_PROMPTS: &[CatalogEntry] = &[
    (
        "evening_highlight",
        "What was the highlight of your day? Why did it stand out?",
        PromptCategory::Reflection,
    ),
    (
        "evening_growth",
        "What's one thing you learned about yourself today?",
        PromptCategory::Growth,
    ),
    (
        "evening_release",
        "What would you like to let go of from today?",
        PromptCategory::Stress,
    ),
];

const STRESSED_PROMPTS: &[CatalogEntry] = &[
    (
        "stress_coping",
        "When you felt overwhelmed today, what helped you find your center?",
        PromptCategory::Stress,
    ),
    (
        "stress_support",
        "Who or what brought you comfort when things felt difficult?",
        PromptCategory::Relationships,
    ),
    (
        "stress_breathing",
        "Take three deep breaths. How does your body feel right now?",
        PromptCategory::Mood,
    ),
];

const HAPPY_PROMPTS: &[CatalogEntry] = &[
    (
        "happy_share",
        "Your energy feels positive today! What's bringing you joy?",
        PromptCategory::Mood,
    ),
    (
        "happy_spread",
        "How did you share your good mood with others today?",
        PromptCategory::Relationships,
    ),
    (
        "happy_savor",
        "What moment from today do you want to remember and savor?",
        PromptCategory::Gratitude,
    ),
];

const CREATIVE_PROMPTS: &[CatalogEntry] = &[
    (
        "creative_inspiration",
        "What sparked your imagination today?",
        PromptCategory::Creativity,
    ),
    (
        "creative_expression",
        "If you could create something to capture today's feeling, what would it be?",
        PromptCategory::Creativity,
    ),
];

fn catalog(entry: &CatalogEntry) -> JournalPrompt {
    JournalPrompt::new(entry.0, entry.1, entry.2)
}

/// Ids a contextual-prompts call can ever return. Useful for callers that
/// persist selections keyed by id.
pub fn known_prompt_ids() -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = MORNING_PROMPTS
        .iter()
        .chain(EVENING_PROMPTS)
        .chain(STRESSED_PROMPTS)
        .chain(HAPPY_PROMPTS)
        .chain(CREATIVE_PROMPTS)
        .map(|(id, _, _)| *id)
        .collect();
    ids.extend([
        "first_time",
        "work_followup",
        "relationship_check",
        "momentum_positive",
        "support_gentle",
        "welcome_back",
    ]);
    ids
}

/// Coarse time-of-day buckets shared with the time-pattern detector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Morning before 12h, afternoon before 18h, evening otherwise
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            Self::Morning
        } else if hour < 18 {
            Self::Afternoon
        } else {
            Self::Evening
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SentimentTrend {
    Improving,
    Declining,
    Stable,
}

/// Generate up to 4 contextual prompts, de-duplicated by id.
///
/// `entries` must be sorted newest-first (the store's order). `now` is the
/// caller's current moment; `rng` drives the shuffle, the cap, and the
/// occasional creative prompt. Degrades gracefully to the static catalogs
/// when entries are sparse.
pub fn contextual_prompts<R: Rng + ?Sized>(
    entries: &[JournalEntry],
    current_mood: Option<u8>,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<JournalPrompt> {
    let mut pool: Vec<JournalPrompt> = Vec::new();
    let recent = &entries[..entries.len().min(7)];

    // Time-based prompts. The afternoon bucket contributes none; that gap
    // is intentional.
    match TimeOfDay::from_hour(now.hour()) {
        TimeOfDay::Morning => pool.extend(MORNING_PROMPTS[..2].iter().map(catalog)),
        TimeOfDay::Evening => pool.extend(EVENING_PROMPTS[..2].iter().map(catalog)),
        TimeOfDay::Afternoon => {}
    }

    // Mood-based prompts
    if let Some(mood) = current_mood {
        if mood <= 2 {
            pool.extend(STRESSED_PROMPTS[..2].iter().map(catalog));
        } else if mood >= 4 {
            pool.extend(HAPPY_PROMPTS[..2].iter().map(catalog));
        }
    }

    pool.extend(context_aware_prompts(recent, now));

    // Occasionally sprinkle in a creative prompt
    if rng.gen::<f64>() < CREATIVE_PROMPT_CHANCE {
        let pick = rng.gen_range(0..CREATIVE_PROMPTS.len());
        pool.push(catalog(&CREATIVE_PROMPTS[pick]));
    }

    // De-duplicate by id (first occurrence wins), shuffle, cap
    let mut unique: Vec<JournalPrompt> = Vec::new();
    for prompt in pool {
        if !unique.iter().any(|p| p.id == prompt.id) {
            unique.push(prompt);
        }
    }
    unique.shuffle(rng);
    unique.truncate(MAX_PROMPTS);

    tracing::debug!(count = unique.len(), "Generated contextual prompts");
    unique
}

/// One random prompt from the general catalogs (morning, evening, creative).
pub fn random_prompt<R: Rng + ?Sized>(rng: &mut R) -> JournalPrompt {
    let all: Vec<&CatalogEntry> = MORNING_PROMPTS
        .iter()
        .chain(EVENING_PROMPTS)
        .chain(CREATIVE_PROMPTS)
        .collect();
    catalog(all[rng.gen_range(0..all.len())])
}

fn context_aware_prompts(entries: &[JournalEntry], now: DateTime<Utc>) -> Vec<JournalPrompt> {
    if entries.is_empty() {
        return vec![JournalPrompt::new(
            "first_time",
            "Welcome to your journaling journey! What brings you here today?",
            PromptCategory::Reflection,
        )
        .with_context("First-time user")];
    }

    let mut prompts = Vec::new();
    let themes = recurring_themes(entries);

    if themes.iter().any(|t| t == "work" || t == "job") {
        prompts.push(
            JournalPrompt::new(
                "work_followup",
                "You've been thinking about work lately. How has your work-life balance felt this week?",
                PromptCategory::Stress,
            )
            .with_context("Recent work mentions")
            .as_follow_up(),
        );
    }

    if themes.iter().any(|t| t == "relationships" || t == "family") {
        prompts.push(
            JournalPrompt::new(
                "relationship_check",
                "I notice you've been reflecting on relationships. Which connection brought you the most joy recently?",
                PromptCategory::Relationships,
            )
            .with_context("Recent relationship focus")
            .as_follow_up(),
        );
    }

    match sentiment_trend(entries) {
        SentimentTrend::Improving => prompts.push(
            JournalPrompt::new(
                "momentum_positive",
                "Your recent entries show growing positivity. What's been helping you feel more optimistic?",
                PromptCategory::Growth,
            )
            .with_context("Improving sentiment trend")
            .as_follow_up(),
        ),
        SentimentTrend::Declining => prompts.push(
            JournalPrompt::new(
                "support_gentle",
                "It seems like things have been challenging lately. What's one small thing that brought you comfort today?",
                PromptCategory::Stress,
            )
            .with_context("Declining sentiment trend")
            .as_follow_up(),
        ),
        SentimentTrend::Stable => {}
    }

    let gap_days = (now - entries[0].created_at).num_days();
    if gap_days > WELCOME_BACK_GAP_DAYS {
        prompts.push(
            JournalPrompt::new(
                "welcome_back",
                "Welcome back! What's been on your mind since you last wrote?",
                PromptCategory::Reflection,
            )
            .with_context("Returning after break"),
        );
    }

    prompts
}

/// Tags appearing at least twice among the newest 5 entries
fn recurring_themes(entries: &[JournalEntry]) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for entry in &entries[..entries.len().min(5)] {
        for tag in &entry.tags {
            match counts.iter_mut().find(|(t, _)| t == tag) {
                Some((_, n)) => *n += 1,
                None => counts.push((tag.clone(), 1)),
            }
        }
    }
    counts
        .into_iter()
        .filter(|(_, n)| *n >= 2)
        .map(|(t, _)| t)
        .collect()
}

/// Compare the average sentiment of the newest 3 entries against the 3
/// before them. Fewer than 3 entries total reads as stable.
fn sentiment_trend(entries: &[JournalEntry]) -> SentimentTrend {
    if entries.len() < 3 {
        return SentimentTrend::Stable;
    }

    let recent: Vec<f64> = entries[..3].iter().map(|e| e.sentiment).collect();
    let older: Vec<f64> = entries[3..entries.len().min(6)]
        .iter()
        .map(|e| e.sentiment)
        .collect();

    let recent_avg = recent.iter().sum::<f64>() / recent.len() as f64;
    let older_avg = if older.is_empty() {
        recent_avg
    } else {
        older.iter().sum::<f64>() / older.len() as f64
    };

    let difference = recent_avg - older_avg;
    if difference > TREND_THRESHOLD {
        SentimentTrend::Improving
    } else if difference < -TREND_THRESHOLD {
        SentimentTrend::Declining
    } else {
        SentimentTrend::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::SentimentAnalysis;
    use chrono::{Duration, TimeZone};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entry_at(
        hours_ago: i64,
        text: &str,
        mood: u8,
        tags: &[&str],
        sentiment: f64,
        now: DateTime<Utc>,
    ) -> JournalEntry {
        let analysis = SentimentAnalysis {
            score: sentiment,
            keywords: vec![],
            themes: tags.iter().map(|t| t.to_string()).collect(),
        };
        JournalEntry::new(text, mood, &analysis).with_created_at(now - Duration::hours(hours_ago))
    }

    fn morning_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap()
    }

    fn afternoon_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 14, 0, 0).unwrap()
    }

    #[test]
    fn test_returns_at_most_four_unique_prompts() {
        let now = morning_now();
        let entries: Vec<JournalEntry> = (0..7)
            .map(|i| entry_at(i, "work meeting again", 2, &["work"], -0.4, now))
            .collect();
        let mut rng = StdRng::seed_from_u64(7);

        let prompts = contextual_prompts(&entries, Some(1), now, &mut rng);
        assert!(prompts.len() <= 4);
        let mut ids: Vec<&str> = prompts.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), prompts.len());
    }

    #[test]
    fn test_ids_are_subset_of_known_set() {
        let known = known_prompt_ids();
        let now = morning_now();
        let entries: Vec<JournalEntry> = (0..7)
            .map(|i| entry_at(i * 24, "family dinner", 4, &["relationships"], 0.5, now))
            .collect();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            for prompts in [
                contextual_prompts(&entries, Some(5), now, &mut rng),
                contextual_prompts(&[], None, now, &mut rng),
            ] {
                for p in prompts {
                    assert!(known.contains(&p.id.as_str()), "unknown id {}", p.id);
                }
            }
        }
    }

    #[test]
    fn test_no_entries_yields_onboarding_prompt() {
        // Afternoon + neutral mood leaves only the onboarding candidate
        let mut rng = StdRng::seed_from_u64(1);
        let prompts = contextual_prompts(&[], Some(3), afternoon_now(), &mut rng);

        assert!(prompts.iter().any(|p| p.id == "first_time"));
        assert!(prompts.len() <= 2); // onboarding, plus maybe a creative roll
    }

    #[test]
    fn test_afternoon_contributes_no_static_prompts() {
        let mut rng = StdRng::seed_from_u64(2);
        let prompts = contextual_prompts(&[], None, afternoon_now(), &mut rng);
        for p in &prompts {
            assert!(!p.id.starts_with("morning_"));
            assert!(!p.id.starts_with("evening_"));
        }
    }

    #[test]
    fn test_low_mood_adds_stressed_prompts() {
        let mut rng = StdRng::seed_from_u64(3);
        let prompts = contextual_prompts(&[], Some(1), afternoon_now(), &mut rng);
        assert!(prompts
            .iter()
            .any(|p| p.id == "stress_coping" || p.id == "stress_support"));
    }

    #[test]
    fn test_recurring_work_theme_adds_followup() {
        let now = afternoon_now();
        let entries: Vec<JournalEntry> = (0..3)
            .map(|i| entry_at(i, "long day at work", 3, &["work"], 0.0, now))
            .collect();

        let prompts = context_aware_prompts(&entries, now);
        let work = prompts.iter().find(|p| p.id == "work_followup").unwrap();
        assert!(work.follow_up);
        assert_eq!(work.category, PromptCategory::Stress);
    }

    #[test]
    fn test_trend_prompts_are_mutually_exclusive() {
        let now = afternoon_now();
        // Newest 3 strongly positive, older 3 strongly negative: improving
        let mut entries = Vec::new();
        for i in 0..3 {
            entries.push(entry_at(i, "fine", 4, &[], 0.8, now));
        }
        for i in 3..6 {
            entries.push(entry_at(i, "fine", 2, &[], -0.6, now));
        }

        let prompts = context_aware_prompts(&entries, now);
        assert!(prompts.iter().any(|p| p.id == "momentum_positive"));
        assert!(!prompts.iter().any(|p| p.id == "support_gentle"));
    }

    #[test]
    fn test_declining_trend_adds_gentle_support() {
        let now = afternoon_now();
        let mut entries = Vec::new();
        for i in 0..3 {
            entries.push(entry_at(i, "fine", 2, &[], -0.6, now));
        }
        for i in 3..6 {
            entries.push(entry_at(i, "fine", 4, &[], 0.8, now));
        }

        let prompts = context_aware_prompts(&entries, now);
        assert!(prompts.iter().any(|p| p.id == "support_gentle"));
        assert!(!prompts.iter().any(|p| p.id == "momentum_positive"));
    }

    #[test]
    fn test_fewer_than_three_entries_reads_stable() {
        let now = afternoon_now();
        let entries = vec![
            entry_at(0, "fine", 3, &[], 0.9, now),
            entry_at(24, "fine", 3, &[], -0.9, now),
        ];
        assert_eq!(sentiment_trend(&entries), SentimentTrend::Stable);
    }

    #[test]
    fn test_journaling_gap_adds_welcome_back() {
        let now = afternoon_now();
        let entries = vec![
            entry_at(24 * 5, "a while ago", 3, &[], 0.0, now),
            entry_at(24 * 6, "longer ago", 3, &[], 0.0, now),
            entry_at(24 * 7, "even longer", 3, &[], 0.0, now),
        ];

        let prompts = context_aware_prompts(&entries, now);
        assert!(prompts.iter().any(|p| p.id == "welcome_back"));
    }

    #[test]
    fn test_same_seed_same_prompts() {
        let now = morning_now();
        let entries: Vec<JournalEntry> = (0..5)
            .map(|i| entry_at(i, "garden walk outside", 5, &["nature"], 0.6, now))
            .collect();

        let a = contextual_prompts(&entries, Some(5), now, &mut StdRng::seed_from_u64(42));
        let b = contextual_prompts(&entries, Some(5), now, &mut StdRng::seed_from_u64(42));
        let ids_a: Vec<&str> = a.iter().map(|p| p.id.as_str()).collect();
        let ids_b: Vec<&str> = b.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn test_random_prompt_comes_from_general_catalogs() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let p = random_prompt(&mut rng);
            assert!(
                p.id.starts_with("morning_")
                    || p.id.starts_with("evening_")
                    || p.id.starts_with("creative_")
            );
        }
    }
}
