use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A published article, as stored in the site's document collections.
///
/// Serialized camelCase to stay byte-compatible with the JSON documents the
/// frontend and the proxy exchange.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub views: u32,
}

/// Search result: the matched article plus its relevance score.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SearchResult {
    pub article: Article,
    pub score: f32,
}

/// Search history entry. `query` is the trimmed search string and acts as the
/// entry's key; repeats bump `count` and refresh `timestamp` in place.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SearchHistoryEntry {
    pub query: String,
    pub timestamp: DateTime<Utc>,
    pub count: u32,
}

/// Filter and sort configuration for a search. Replaced wholesale on each
/// change, so there are no partial-update rules.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    /// Restrict results to one category slug; `None` means all categories.
    pub category: Option<String>,
    pub date_range: DateRange,
    pub sort_by: SortBy,
}

/// Publication date window, counted back from the moment of the search.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    #[default]
    All,
    Week,
    Month,
    Year,
}

impl DateRange {
    /// Oldest `published_at` still inside the window, or `None` for `All`.
    pub fn cutoff(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let days = match self {
            DateRange::All => return None,
            DateRange::Week => 7,
            DateRange::Month => 30,
            DateRange::Year => 365,
        };
        Some(now - Duration::days(days))
    }
}

/// Result ordering.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Relevance,
    Newest,
    Oldest,
    Popular,
}
