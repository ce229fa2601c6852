//! Search functionality
//!
//! This module provides the search core:
//! - Substring matching and weighted relevance scoring
//! - Category and date filters, four sort modes
//! - Bounded, persisted search history
//! - Query suggestions from the topic catalog and history
//! - Result excerpts

mod filters;
mod history;
mod scoring;
mod snippet;
mod suggest;

pub use filters::{apply_filters, sort_results};
pub use history::{SearchHistory, HISTORY_KEY, MAX_HISTORY_ENTRIES};
pub use scoring::{count_occurrences, matches_query, relevance_score};
pub use snippet::{excerpt, EXCERPT_LENGTH};
pub use suggest::{suggest, CATALOG_TERMS, MAX_HISTORY_SUGGESTIONS, MAX_SUGGESTIONS};

use chrono::Utc;
use log::debug;
use rayon::prelude::*;

use crate::analytics::SearchAnalytics;
use crate::error::SearchError;
use crate::models::{Article, SearchFilters, SearchHistoryEntry, SearchResult};
use crate::store::HistoryStore;

/// The search engine: scoring and filtering over a caller-supplied corpus,
/// plus the process-wide history and analytics state behind it.
///
/// Constructed once at startup and handed to consumers; mutating calls take
/// `&mut self`, so in a threaded host the engine goes behind the host's lock
/// and the history read-modify-write stays a single critical section.
pub struct SearchEngine {
    store: Box<dyn HistoryStore>,
    history: SearchHistory,
    analytics: SearchAnalytics,
}

impl SearchEngine {
    /// Create an engine over a durable store, loading whatever history and
    /// analytics it already holds. Corrupt blobs are discarded with a log
    /// line, never an error.
    pub fn new(store: Box<dyn HistoryStore>) -> Self {
        let history = SearchHistory::load(store.as_ref());
        let analytics = SearchAnalytics::load(store.as_ref());
        Self {
            store,
            history,
            analytics,
        }
    }

    /// Run a search over `corpus`.
    ///
    /// The query is recorded into history as a side effect, then matching
    /// articles are scored, filtered, and sorted per `filters`. An empty
    /// result list is a valid outcome; an empty or whitespace-only query is
    /// rejected before any state changes.
    pub fn search(
        &mut self,
        query: &str,
        corpus: &[Article],
        filters: &SearchFilters,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        self.record_query(query);

        let query_lower = query.to_lowercase();

        // Match and score in parallel; rayon's collect preserves corpus
        // order, which the stable sorts below rely on.
        let results: Vec<SearchResult> = corpus
            .par_iter()
            .filter(|article| matches_query(article, &query_lower))
            .map(|article| SearchResult {
                article: article.clone(),
                score: relevance_score(article, &query_lower),
            })
            .collect();

        let mut results = apply_filters(results, filters, Utc::now());
        sort_results(&mut results, filters.sort_by);

        debug!(
            "search '{}' matched {} of {} articles",
            query,
            results.len(),
            corpus.len()
        );

        self.analytics.record(query, results.len(), filters);
        self.analytics.save(self.store.as_mut());

        Ok(results)
    }

    /// Record a query into history and persist it. Persistence failures are
    /// logged and swallowed.
    pub fn record_query(&mut self, query: &str) {
        self.history.record(query);
        self.history.save(self.store.as_mut());
    }

    /// Suggestions for a partial query; see [`suggest`]. Callers gate on
    /// input length (the site waits for 2 characters), not this method.
    pub fn suggest(&self, partial: &str, catalog_terms: &[&str]) -> Vec<String> {
        suggest(partial, catalog_terms, &self.history)
    }

    /// All history entries, oldest first.
    pub fn history(&self) -> &[SearchHistoryEntry] {
        self.history.entries()
    }

    /// Most recent searches first, limited to `count`.
    pub fn recent_searches(&self, count: usize) -> Vec<SearchHistoryEntry> {
        self.history.recent(count)
    }

    /// Remove one query from history.
    pub fn remove_from_history(&mut self, query: &str) {
        self.history.remove(query);
        self.history.save(self.store.as_mut());
    }

    /// Drop the whole history.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.history.save(self.store.as_mut());
    }

    /// The analytics log, oldest first.
    pub fn analytics(&self) -> &SearchAnalytics {
        &self.analytics
    }
}
