//! Bounded, deduplicated, persisted lookup history.
//!
//! The store keeps the five most recent successful lookups, newest first,
//! with at most one entry per source URL. Every mutation persists before it
//! returns, so the slot on disk and the in-memory list never diverge within
//! a process, and the slot is the sole source of truth across restarts.

mod storage;

pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};

use serde::{Deserialize, Serialize};

use crate::lookup::LookupResult;

/// Maximum number of entries kept in history.
pub const MAX_ENTRIES: usize = 5;

/// A persisted record of one successful lookup, keyed by `source_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub title: String,
    pub artist: Option<String>,
    pub thumbnail: Option<String>,
    /// Canonical form of the submitted link; the store's identity key, so
    /// tracking params never split one track across entries
    pub source_url: String,
    /// RFC 3339 timestamp of the lookup
    pub timestamp: String,
}

impl HistoryEntry {
    /// Build an entry from a lookup result and the canonical track URL.
    pub fn from_lookup(result: &LookupResult, source_url: impl Into<String>) -> Self {
        Self {
            title: result.title.clone(),
            artist: result.artist.clone(),
            thumbnail: result.thumbnail_url.clone(),
            source_url: source_url.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// History of past successful lookups over an injected storage slot.
pub struct HistoryStore {
    storage: Box<dyn Storage>,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Load history from `storage`.
    ///
    /// An absent or unparsable slot yields an empty store - startup never
    /// fails on bad history, it just logs and moves on.
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let entries = match storage.get() {
            Some(contents) => match serde_json::from_str::<Vec<HistoryEntry>>(&contents) {
                Ok(mut entries) => {
                    entries.truncate(MAX_ENTRIES);
                    entries
                }
                Err(e) => {
                    tracing::warn!("Discarding unparsable history: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Self { storage, entries }
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Record a successful lookup.
    ///
    /// Evicts any older entry for the same `source_url`, prepends, truncates
    /// to [`MAX_ENTRIES`] and persists before returning the updated list.
    pub fn record(&mut self, entry: HistoryEntry) -> &[HistoryEntry] {
        self.entries.retain(|e| e.source_url != entry.source_url);
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_ENTRIES);
        self.persist();
        &self.entries
    }

    /// Erase all history, in memory and on disk.
    pub fn clear(&mut self) -> &[HistoryEntry] {
        self.entries.clear();
        if let Err(e) = self.storage.remove() {
            tracing::error!("Failed to clear history slot: {}", e);
        }
        &self.entries
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize history: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(&json) {
            tracing::error!("Failed to persist history: {}", e);
        }
    }
}
