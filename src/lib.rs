//! Search and ranking core for the Sentinela de Dados news site.
//!
//! The site's pages hand a query, an article corpus, and a filter/sort
//! configuration to [`SearchEngine`], which returns scored, ordered results
//! and maintains a bounded search history behind a durable key-value store.
//!
//! ## Modules
//! - **`search`**: matching, relevance scoring, filtering, sorting, history,
//!   suggestions, and excerpts.
//! - **`models`**: articles, results, history entries, and filter config.
//! - **`store`**: the durable key-value seam (in-memory and SQLite).
//! - **`repository`**: corpus providers behind a plain query-filter trait.
//! - **`analytics`**: bounded log of executed searches.
//! - **`categories`**: category slugs and display names.

pub mod analytics;
pub mod categories;
pub mod error;
pub mod models;
pub mod repository;
pub mod search;
pub mod store;

pub use error::{SearchError, StoreError};
pub use models::{Article, DateRange, SearchFilters, SearchHistoryEntry, SearchResult, SortBy};
pub use repository::{ArticleOrdering, ArticleRepository, InMemoryRepository, QueryFilter};
pub use search::SearchEngine;
pub use store::{HistoryStore, MemoryStore, SqliteStore};
