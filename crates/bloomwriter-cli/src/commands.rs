//! Command implementations for the Bloomwriter CLI

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};

use bloomwriter_core::insights::{last_week_start, InsightEngine};
use bloomwriter_core::sentiment::{self, SentimentBand};
use bloomwriter_core::{contextual_prompts, JournalEntry, JournalStore};

/// Open the store at the given path, or the default location.
pub fn open_store(file: Option<&Path>) -> Result<JournalStore> {
    let path: PathBuf = match file {
        Some(p) => p.to_path_buf(),
        None => JournalStore::default_path().context("resolving default store path")?,
    };
    tracing::debug!(path = %path.display(), "Opening journal store");
    JournalStore::open(&path).with_context(|| format!("opening journal store {}", path.display()))
}

/// Find an entry by id or unique id prefix.
fn resolve_entry_id(store: &JournalStore, id: &str) -> Result<String> {
    let matches: Vec<&JournalEntry> = store
        .entries()
        .iter()
        .filter(|e| e.id.starts_with(id))
        .collect();

    match matches.len() {
        0 => bail!("No entry matches id '{}'", id),
        1 => Ok(matches[0].id.clone()),
        n => bail!("Id prefix '{}' is ambiguous ({} matches)", id, n),
    }
}

pub fn cmd_write(store: &mut JournalStore, text: &str, mood: u8) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        bail!("Entry text is empty - write something before saving");
    }

    let analysis = sentiment::analyze(text);
    let entry = JournalEntry::new(text, mood, &analysis);
    let band = SentimentBand::from_score(entry.sentiment);

    println!();
    println!("✓ Entry saved ({})", &entry.id[..8]);
    println!("  Sentiment: {} ({:+.2})", band.label(), entry.sentiment);
    if !entry.tags.is_empty() {
        println!("  Themes:    {}", entry.tags.join(", "));
    }
    println!();

    store.save_entry(entry)?;
    Ok(())
}

pub fn cmd_list(store: &JournalStore, limit: usize) -> Result<()> {
    let entries = store.entries();
    if entries.is_empty() {
        println!("No entries yet. Start with: bloomwriter write --mood 3 --text \"...\"");
        return Ok(());
    }

    println!();
    for entry in entries.iter().take(limit) {
        let preview: String = entry.text.chars().take(56).collect();
        let ellipsis = if entry.text.chars().count() > 56 { "…" } else { "" };
        println!(
            "{}  {}  mood {}/5  {}{}",
            &entry.id[..8],
            entry.created_at.format("%Y-%m-%d %H:%M"),
            entry.mood,
            preview,
            ellipsis
        );
    }
    if entries.len() > limit {
        println!("  … and {} more", entries.len() - limit);
    }
    println!();
    Ok(())
}

pub fn cmd_show(store: &JournalStore, id: &str) -> Result<()> {
    let id = resolve_entry_id(store, id)?;
    let entry = store
        .get_entry(&id)
        .context("entry disappeared while resolving id")?;
    let band = SentimentBand::from_score(entry.sentiment);

    println!();
    println!("Entry {}", entry.id);
    println!("  Written:   {}", entry.created_at.format("%Y-%m-%d %H:%M UTC"));
    println!("  Mood:      {}/5", entry.mood);
    println!("  Sentiment: {} ({:+.2})", band.label(), entry.sentiment);
    if !entry.tags.is_empty() {
        println!("  Themes:    {}", entry.tags.join(", "));
    }
    println!();
    println!("{}", entry.text);
    println!();
    Ok(())
}

pub fn cmd_delete(store: &mut JournalStore, id: &str) -> Result<()> {
    let id = resolve_entry_id(store, id)?;
    if store.delete_entry(&id)? {
        println!("Deleted entry {}", &id[..8]);
    }
    Ok(())
}

pub fn cmd_prompts(store: &JournalStore, mood: Option<u8>) -> Result<()> {
    let mut rng = rand::thread_rng();
    let prompts = contextual_prompts(store.entries(), mood, Utc::now(), &mut rng);

    println!();
    println!("✍️  Some prompts for you:");
    println!();
    for prompt in &prompts {
        println!("  • {}", prompt.text);
        if let Some(context) = &prompt.context {
            println!("    ({})", context);
        }
    }
    println!();
    Ok(())
}

pub fn cmd_insights(store: &JournalStore, week_start: Option<&str>, json: bool) -> Result<()> {
    let week_start = match week_start {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("invalid week start '{}', expected YYYY-MM-DD", s))?,
        None => last_week_start(Utc::now().date_naive()),
    };

    let engine = InsightEngine::new();
    let insight = engine.generate_weekly_insights(store.entries(), week_start);

    if json {
        println!("{}", serde_json::to_string_pretty(&insight)?);
        return Ok(());
    }

    println!();
    println!(
        "🌱 Week of {} - {}",
        insight.week_start.format("%b %-d"),
        insight.week_end.format("%b %-d, %Y")
    );
    println!("   ─────────────────────────────────────────────");

    if insight.total_entries == 0 {
        println!("   No entries this week.");
    } else {
        println!("   Entries:   {}", insight.total_entries);
        println!("   Avg mood:  {:.1}/5", insight.average_mood);
        println!(
            "   Sentiment: {} ({:+.2})",
            SentimentBand::from_score(insight.average_sentiment).label(),
            insight.average_sentiment
        );
        if !insight.top_themes.is_empty() {
            println!("   Themes:    {}", insight.top_themes.join(", "));
        }
    }

    if !insight.patterns.is_empty() {
        println!();
        println!("   Patterns:");
        for pattern in &insight.patterns {
            println!(
                "   • {} ({:.0}% confidence)",
                pattern.title,
                pattern.confidence * 100.0
            );
            println!("     {}", pattern.description);
        }
    }

    if !insight.growth_moments.is_empty() {
        println!();
        println!("   Growth moments:");
        for moment in &insight.growth_moments {
            println!("   • {}", moment);
        }
    }

    println!();
    println!("   Suggestions:");
    for suggestion in &insight.suggestions {
        println!("   • {}", suggestion);
    }

    if let Some(celebrate) = &insight.celebrate_text {
        println!();
        println!("   {}", celebrate);
    }
    println!();
    Ok(())
}

pub fn cmd_settings_show(store: &JournalStore) -> Result<()> {
    let settings = store.settings();
    println!();
    println!("Settings:");
    println!("  local-only:     {}", settings.local_only);
    println!("  e2ee:           {}", settings.e2ee_enabled);
    println!("  daily-reminder: {}", settings.daily_reminder);
    println!(
        "  reminder-time:  {}",
        settings.reminder_time.as_deref().unwrap_or("none")
    );
    println!("  privacy-mode:   {}", settings.privacy_mode);
    println!();
    Ok(())
}

pub fn cmd_settings_set(store: &mut JournalStore, key: &str, value: &str) -> Result<()> {
    let mut settings = store.settings().clone();

    match key {
        "local-only" => settings.local_only = parse_bool(value)?,
        "e2ee" => settings.e2ee_enabled = parse_bool(value)?,
        "daily-reminder" => settings.daily_reminder = parse_bool(value)?,
        "privacy-mode" => settings.privacy_mode = parse_bool(value)?,
        "reminder-time" => {
            settings.reminder_time = if value.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(value.to_string())
            };
        }
        _ => bail!(
            "Unknown settings key '{}' (expected local-only, e2ee, daily-reminder, privacy-mode, or reminder-time)",
            key
        ),
    }

    store.update_settings(settings)?;
    println!("Set {} = {}", key, value);
    Ok(())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "yes" => Ok(true),
        "false" | "off" | "no" => Ok(false),
        _ => bail!("Expected a boolean value, got '{}'", value),
    }
}

pub fn cmd_export(store: &JournalStore, out: Option<&Path>) -> Result<()> {
    let export = store.export_data();
    let json = serde_json::to_string_pretty(&export)?;

    match out {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("writing export to {}", path.display()))?;
            println!(
                "Exported {} entries to {}",
                export.entries.len(),
                path.display()
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}
