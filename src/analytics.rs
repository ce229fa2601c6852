//! Search analytics: a bounded, persisted log of executed searches with
//! their filter snapshots, for the site's "popular searches" reporting.

use chrono::{DateTime, Utc};
use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::models::SearchFilters;
use crate::store::HistoryStore;

/// Maximum number of analytics events to keep
pub const MAX_ANALYTICS_EVENTS: usize = 1000;

/// Storage key for the serialized analytics blob
pub const ANALYTICS_KEY: &str = "sentinela_search_analytics";

/// One executed search.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SearchEvent {
    pub id: String,
    pub query: String,
    pub result_count: usize,
    pub filters: SearchFilters,
    pub timestamp: DateTime<Utc>,
}

/// Bounded log of search events, oldest first. Like the history, it is
/// best-effort: load and save failures are logged and absorbed.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchAnalytics {
    events: Vec<SearchEvent>,
}

impl SearchAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(store: &dyn HistoryStore) -> Self {
        let raw = match store.get(ANALYTICS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::new(),
            Err(e) => {
                warn!("failed to read search analytics: {e}");
                return Self::new();
            }
        };

        match serde_json::from_str::<Vec<SearchEvent>>(&raw) {
            Ok(events) => Self { events },
            Err(e) => {
                warn!("discarding corrupt search analytics: {e}");
                Self::new()
            }
        }
    }

    pub fn save(&self, store: &mut dyn HistoryStore) {
        let raw = match serde_json::to_string(&self.events) {
            Ok(raw) => raw,
            Err(e) => {
                error!("failed to serialize search analytics: {e}");
                return;
            }
        };
        if let Err(e) = store.set(ANALYTICS_KEY, &raw) {
            error!("failed to save search analytics: {e}");
        }
    }

    /// Record an executed search with a snapshot of the filters in effect.
    pub fn record(&mut self, query: &str, result_count: usize, filters: &SearchFilters) {
        let timestamp = Utc::now();
        self.events.push(SearchEvent {
            id: timestamp.timestamp_millis().to_string(),
            query: query.to_string(),
            result_count,
            filters: filters.clone(),
            timestamp,
        });

        if self.events.len() > MAX_ANALYTICS_EVENTS {
            let excess = self.events.len() - MAX_ANALYTICS_EVENTS;
            self.events.drain(..excess);
        }
    }

    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_record_keeps_filter_snapshot() {
        let mut analytics = SearchAnalytics::new();
        let filters = SearchFilters {
            category: Some("ia".to_string()),
            ..Default::default()
        };

        analytics.record("lgpd", 3, &filters);

        assert_eq!(analytics.len(), 1);
        let event = &analytics.events()[0];
        assert_eq!(event.query, "lgpd");
        assert_eq!(event.result_count, 3);
        assert_eq!(event.filters.category.as_deref(), Some("ia"));
    }

    #[test]
    fn test_bounded_at_1000_dropping_oldest() {
        let mut analytics = SearchAnalytics::new();
        let filters = SearchFilters::default();
        for i in 0..1010 {
            analytics.record(&format!("q{i}"), 0, &filters);
        }

        assert_eq!(analytics.len(), MAX_ANALYTICS_EVENTS);
        assert_eq!(analytics.events()[0].query, "q10");
        assert_eq!(analytics.events()[999].query, "q1009");
    }

    #[test]
    fn test_save_load_roundtrip() {
        let mut store = MemoryStore::new();
        let mut analytics = SearchAnalytics::new();
        analytics.record("lgpd", 1, &SearchFilters::default());
        analytics.save(&mut store);

        let loaded = SearchAnalytics::load(&store);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.events()[0].query, "lgpd");
    }

    #[test]
    fn test_corrupt_blob_replaced() {
        let store = MemoryStore::with_entry(ANALYTICS_KEY, "not-json");
        let analytics = SearchAnalytics::load(&store);
        assert!(analytics.is_empty());
    }
}
