//! Integration tests for bloomwriter-core
//!
//! These tests exercise the full write -> store -> analyze workflow:
//! entries are built the way the presentation layer builds them (text +
//! mood through the analyzer), saved, and then fed to the prompt and
//! insight generators.

use bloomwriter_core::{
    contextual_prompts, insights::InsightEngine, known_prompt_ids, sentiment, JournalEntry,
    JournalStore, PatternType, SentimentBand,
};
use chrono::{Datelike, Duration, NaiveDate, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

/// Build an entry the way a save operation does: analyze, then combine.
fn write_entry(text: &str, mood: u8) -> JournalEntry {
    let analysis = sentiment::analyze(text);
    JournalEntry::new(text, mood, &analysis)
}

fn at(date: NaiveDate, hour: u32, entry: JournalEntry) -> JournalEntry {
    entry.with_created_at(
        Utc.with_ymd_and_hms(date.year(), date.month(), date.day(), hour, 0, 0)
            .unwrap(),
    )
}

// A Monday, used as the target week throughout
fn week() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

#[test]
fn test_full_week_workflow() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("journal.json");
    let mut store = JournalStore::open(&path).unwrap();

    let ws = week();
    let days = [
        (0, 9, "Went for a walk in the garden, feeling grateful and peaceful", 5),
        (1, 10, "Another morning walk outside. I realized how much the fresh start helps me", 5),
        (2, 9, "Quiet morning, wonderful coffee with a friend", 4),
        (3, 20, "Long day at the office, the deadline has me stressed and tired", 2),
        (4, 21, "Exhausted after work again, the project is overwhelming", 2),
    ];

    for (day, hour, text, mood) in days {
        let entry = at(ws + Duration::days(day), hour, write_entry(text, mood));
        store.save_entry(entry).unwrap();
    }

    // Reload from disk to prove the analytics run over persisted data
    let store = JournalStore::open(&path).unwrap();
    assert_eq!(store.entries().len(), 5);

    let engine = InsightEngine::new();
    let insight = engine.generate_weekly_insights(store.entries(), ws);

    assert_eq!(insight.total_entries, 5);
    assert!(insight.average_mood > 3.0);
    assert!(insight.top_themes.len() <= 5);
    assert!(insight.top_themes.contains(&"work".to_string()));

    // Five entries: the dedication celebration with the count
    let celebrate = insight.celebrate_text.unwrap();
    assert!(celebrate.contains("5"));

    // Mornings averaged 4.7, evenings 2.0: the time pattern fires
    let time_pattern = insight
        .patterns
        .iter()
        .find(|p| p.pattern_type == PatternType::TimePattern)
        .expect("time pattern expected");
    assert!(time_pattern.title.contains("morning"));

    // Two walk mentions with mood 5: exercise correlation at 2/5 confidence
    let activity = insight
        .patterns
        .iter()
        .find(|p| p.pattern_type == PatternType::MoodActivity)
        .expect("mood-activity pattern expected");
    assert!(activity.title.contains("exercise"));
    assert_eq!(activity.confidence, 0.4);

    // Patterns arrive in fixed detector order
    let order: Vec<PatternType> = insight.patterns.iter().map(|p| p.pattern_type).collect();
    let mut sorted = order.clone();
    sorted.sort_by_key(|t| match t {
        PatternType::TimePattern => 0,
        PatternType::MoodActivity => 1,
        PatternType::ThemeCorrelation => 2,
        PatternType::GrowthTrend => 3,
    });
    assert_eq!(order, sorted);

    // Suggestions are capped and non-empty
    assert!(!insight.suggestions.is_empty());
    assert!(insight.suggestions.len() <= 3);

    // "I realized how much the fresh start helps me" is a growth moment
    assert!(insight
        .growth_moments
        .iter()
        .any(|m| m.contains("I realized")));
}

#[test]
fn test_analyzer_output_flows_into_entry_tags() {
    let entry = write_entry("Grateful for my family and our garden outside", 4);
    assert!(entry.tags.contains(&"gratitude".to_string()));
    assert!(entry.tags.contains(&"relationships".to_string()));
    assert!(entry.tags.contains(&"nature".to_string()));
    assert!(entry.sentiment > 0.0);
    assert_eq!(
        SentimentBand::from_score(entry.sentiment),
        SentimentBand::VeryPositive
    );
}

#[test]
fn test_prompts_reflect_stored_history() {
    let mut store = JournalStore::in_memory();
    let now = Utc.with_ymd_and_hms(2026, 3, 8, 14, 0, 0).unwrap();

    // A week of work-heavy entries ending 4 days before "now"
    for i in 0..5 {
        let entry = write_entry("Meetings all day at work, another project deadline", 2)
            .with_created_at(now - Duration::days(4 + i));
        store.save_entry(entry).unwrap();
    }

    let known = known_prompt_ids();
    let mut rng = StdRng::seed_from_u64(11);
    let prompts = contextual_prompts(store.entries(), Some(2), now, &mut rng);

    assert!(!prompts.is_empty());
    assert!(prompts.len() <= 4);
    for p in &prompts {
        assert!(known.contains(&p.id.as_str()));
    }

    // The pool must contain the work follow-up and the welcome-back prompt;
    // across seeds at least one of them survives the cap. With a fixed seed
    // the selection is reproducible, so pin the observable property: the
    // candidate generation is driven by the stored history.
    let pool_ids: Vec<String> = (0..50)
        .flat_map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            contextual_prompts(store.entries(), Some(2), now, &mut rng)
                .into_iter()
                .map(|p| p.id)
        })
        .collect();
    assert!(pool_ids.iter().any(|id| id == "work_followup"));
    assert!(pool_ids.iter().any(|id| id == "welcome_back"));
}

#[test]
fn test_empty_store_yields_empty_week_and_onboarding_prompt() {
    let store = JournalStore::in_memory();
    let engine = InsightEngine::new();

    let insight = engine.generate_weekly_insights(store.entries(), week());
    assert_eq!(insight.total_entries, 0);
    assert_eq!(insight.suggestions.len(), 3);

    let now = Utc.with_ymd_and_hms(2026, 3, 8, 14, 0, 0).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let prompts = contextual_prompts(store.entries(), None, now, &mut rng);
    assert!(prompts.iter().any(|p| p.id == "first_time"));
}

#[test]
fn test_analytics_do_not_mutate_entries() {
    let ws = week();
    let entries: Vec<JournalEntry> = (0..3)
        .map(|i| {
            at(
                ws + Duration::days(i),
                9,
                write_entry("a walk outside, feeling grateful", 5),
            )
        })
        .collect();
    let snapshot = serde_json::to_value(&entries).unwrap();

    let engine = InsightEngine::new();
    let _ = engine.generate_weekly_insights(&entries, ws);
    let mut rng = StdRng::seed_from_u64(3);
    let now = Utc.with_ymd_and_hms(2026, 3, 8, 9, 0, 0).unwrap();
    let _ = contextual_prompts(&entries, Some(4), now, &mut rng);

    assert_eq!(serde_json::to_value(&entries).unwrap(), snapshot);
}
