use chrono::Utc;
use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::models::SearchHistoryEntry;
use crate::store::HistoryStore;

/// Maximum number of search history entries to keep
pub const MAX_HISTORY_ENTRIES: usize = 50;

/// Storage key for the serialized history blob
pub const HISTORY_KEY: &str = "sentinela_search_history";

/// Bounded history of past searches, oldest first.
///
/// Entries are keyed by exact string equality of the trimmed query; repeating
/// a query refreshes its timestamp and increments its count in place instead
/// of duplicating it. The history is rewritten to the store after every
/// mutation; store failures downgrade it to an in-memory cache.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchHistory {
    entries: Vec<SearchHistoryEntry>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the persisted history. A malformed blob is logged and replaced
    /// with an empty history; it never propagates to the caller.
    pub fn load(store: &dyn HistoryStore) -> Self {
        let raw = match store.get(HISTORY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::new(),
            Err(e) => {
                warn!("failed to read search history: {e}");
                return Self::new();
            }
        };

        match serde_json::from_str::<Vec<SearchHistoryEntry>>(&raw) {
            Ok(entries) => Self { entries },
            Err(e) => {
                warn!("discarding corrupt search history: {e}");
                Self::new()
            }
        }
    }

    /// Persist the full history. Failures are logged and swallowed; history
    /// is a best-effort cache, not a transactional log.
    pub fn save(&self, store: &mut dyn HistoryStore) {
        let raw = match serde_json::to_string(&self.entries) {
            Ok(raw) => raw,
            Err(e) => {
                error!("failed to serialize search history: {e}");
                return;
            }
        };
        if let Err(e) = store.set(HISTORY_KEY, &raw) {
            error!("failed to save search history: {e}");
        }
    }

    /// Record a query. Whitespace is trimmed; empty queries are ignored.
    pub fn record(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        if let Some(entry) = self.entries.iter_mut().find(|e| e.query == query) {
            entry.timestamp = Utc::now();
            entry.count += 1;
        } else {
            self.entries.push(SearchHistoryEntry {
                query: query.to_string(),
                timestamp: Utc::now(),
                count: 1,
            });
        }

        // Drop oldest entries from the front once over the cap.
        if self.entries.len() > MAX_HISTORY_ENTRIES {
            let excess = self.entries.len() - MAX_HISTORY_ENTRIES;
            self.entries.drain(..excess);
        }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[SearchHistoryEntry] {
        &self.entries
    }

    /// Most recent entries first, limited to `count`.
    pub fn recent(&self, count: usize) -> Vec<SearchHistoryEntry> {
        self.entries.iter().rev().take(count).cloned().collect()
    }

    /// Most recent queries containing `partial_lower` (case-insensitive),
    /// limited to `limit`.
    pub fn matching(&self, partial_lower: &str, limit: usize) -> Vec<String> {
        self.entries
            .iter()
            .rev()
            .filter(|e| e.query.to_lowercase().contains(partial_lower))
            .map(|e| e.query.clone())
            .take(limit)
            .collect()
    }

    /// Remove the entry with exactly this query, if present.
    pub fn remove(&mut self, query: &str) {
        self.entries.retain(|e| e.query != query);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_record_and_entries() {
        let mut history = SearchHistory::new();
        history.record("lgpd");

        assert_eq!(history.len(), 1);
        assert_eq!(history.entries()[0].query, "lgpd");
        assert_eq!(history.entries()[0].count, 1);
    }

    #[test]
    fn test_repeat_updates_in_place() {
        let mut history = SearchHistory::new();
        history.record("lgpd");
        history.record("ia");
        history.record("lgpd");

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].query, "lgpd");
        assert_eq!(history.entries()[0].count, 2);
        assert_eq!(history.entries()[1].count, 1);
    }

    #[test]
    fn test_trims_whitespace_before_keying() {
        let mut history = SearchHistory::new();
        history.record("  lgpd  ");
        history.record("lgpd");

        assert_eq!(history.len(), 1);
        assert_eq!(history.entries()[0].count, 2);
    }

    #[test]
    fn test_case_is_preserved_and_distinct() {
        // Duplicate detection is exact, not case-folded.
        let mut history = SearchHistory::new();
        history.record("LGPD");
        history.record("lgpd");

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].query, "LGPD");
    }

    #[test]
    fn test_bounded_at_50_keeping_newest() {
        let mut history = SearchHistory::new();
        for i in 0..60 {
            history.record(&format!("query{}", i));
        }

        assert_eq!(history.len(), MAX_HISTORY_ENTRIES);
        assert_eq!(history.entries()[0].query, "query10");
        assert_eq!(history.entries()[49].query, "query59");
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut history = SearchHistory::new();
        history.record("a");
        history.record("b");
        history.record("c");

        let recent = history.recent(2);
        assert_eq!(recent[0].query, "c");
        assert_eq!(recent[1].query, "b");
    }

    #[test]
    fn test_load_replaces_corrupt_blob() {
        let store = MemoryStore::with_entry(HISTORY_KEY, "{not json");
        let history = SearchHistory::load(&store);
        assert!(history.is_empty());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let mut store = MemoryStore::new();
        let mut history = SearchHistory::new();
        history.record("lgpd");
        history.record("lgpd");
        history.save(&mut store);

        let loaded = SearchHistory::load(&store);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.entries()[0].count, 2);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut history = SearchHistory::new();
        history.record("a");
        history.record("b");

        history.remove("a");
        assert_eq!(history.len(), 1);

        history.clear();
        assert!(history.is_empty());
    }
}
