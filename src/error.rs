use thiserror::Error;

/// Errors surfaced by the search engine.
///
/// Corrupt persisted history and persistence write failures are deliberately
/// not represented here: both are logged and absorbed so that search keeps
/// working with a best-effort history.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The query was empty or whitespace-only. Callers should prompt the
    /// user instead of running the search.
    #[error("search query is empty")]
    EmptyQuery,
}

/// Errors from the durable key-value store backing history and analytics.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
