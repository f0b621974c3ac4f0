//! Flat JSON journal store
//!
//! The store is deliberately not a database: one JSON document holding the
//! entry array and the settings record, read and written wholesale. Writes
//! go through a temp file in the same directory and are renamed into place,
//! so a crash mid-write never leaves a half-written journal.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{AppSettings, JournalEntry};

/// The on-disk document
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct StoreDocument {
    entries: Vec<JournalEntry>,
    settings: AppSettings,
}

/// Everything the store holds, in one exportable payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    pub entries: Vec<JournalEntry>,
    pub settings: AppSettings,
    pub export_date: DateTime<Utc>,
}

/// The journal entry store: append/update/delete by id plus settings.
pub struct JournalStore {
    /// None for an in-memory store (tests)
    path: Option<PathBuf>,
    doc: StoreDocument,
}

impl JournalStore {
    /// Open (or create) a store at `path`. A missing file yields an empty
    /// store with default settings; a present but unreadable file is an
    /// error rather than silent data loss.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let doc = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            let mut doc: StoreDocument = serde_json::from_str(&raw)?;
            // Keep the newest-first ordering the analytics rely on, even if
            // the file was edited by hand.
            doc.entries
                .sort_by(|a, b| b.created_at.cmp(&a.created_at));
            debug!(
                path = %path.display(),
                entries = doc.entries.len(),
                "Loaded journal store"
            );
            doc
        } else {
            StoreDocument::default()
        };

        Ok(Self {
            path: Some(path),
            doc,
        })
    }

    /// In-memory store for tests; nothing is persisted.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            doc: StoreDocument::default(),
        }
    }

    /// Default store location under the platform data directory
    /// (e.g. ~/.local/share/bloomwriter/journal.json).
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::data_dir()
            .ok_or_else(|| Error::Store("Could not determine data directory".to_string()))?;
        Ok(base.join("bloomwriter").join("journal.json"))
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.doc.entries
    }

    pub fn get_entry(&self, id: &str) -> Option<&JournalEntry> {
        self.doc.entries.iter().find(|e| e.id == id)
    }

    /// Insert or replace (by id) an entry, keeping newest-first order.
    pub fn save_entry(&mut self, entry: JournalEntry) -> Result<()> {
        match self.doc.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => *existing = entry,
            None => self.doc.entries.push(entry),
        }
        self.doc
            .entries
            .sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.persist()
    }

    /// Remove an entry by id. Returns false when no entry matched.
    pub fn delete_entry(&mut self, id: &str) -> Result<bool> {
        let before = self.doc.entries.len();
        self.doc.entries.retain(|e| e.id != id);
        if self.doc.entries.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    pub fn settings(&self) -> &AppSettings {
        &self.doc.settings
    }

    pub fn update_settings(&mut self, settings: AppSettings) -> Result<()> {
        self.doc.settings = settings;
        self.persist()
    }

    /// Snapshot of everything the store holds, stamped with the export time.
    pub fn export_data(&self) -> ExportData {
        ExportData {
            entries: self.doc.entries.clone(),
            settings: self.doc.settings.clone(),
            export_date: Utc::now(),
        }
    }

    /// Drop all entries and reset settings to defaults.
    pub fn clear_all(&mut self) -> Result<()> {
        self.doc = StoreDocument::default();
        self.persist()?;
        info!("Cleared journal store");
        Ok(())
    }

    /// Write the whole document atomically: temp file in the target
    /// directory, then rename over the store path.
    fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(()); // in-memory
        };

        let dir = path
            .parent()
            .filter(|d| !d.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let json = serde_json::to_string_pretty(&self.doc)?;
        let tmp = tempfile::NamedTempFile::new_in(dir)?;
        fs::write(tmp.path(), json)?;
        tmp.persist(path).map_err(|e| Error::Io(e.error))?;

        debug!(path = %path.display(), "Persisted journal store");
        Ok(())
    }
}
