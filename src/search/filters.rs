use chrono::{DateTime, Utc};

use crate::models::{SearchFilters, SearchResult, SortBy};

/// Apply category and date filters to scored results. Pure restriction: it
/// only ever removes results, never reorders or rescores them.
pub fn apply_filters(
    results: Vec<SearchResult>,
    filters: &SearchFilters,
    now: DateTime<Utc>,
) -> Vec<SearchResult> {
    let cutoff = filters.date_range.cutoff(now);

    results
        .into_iter()
        .filter(|r| {
            if let Some(ref category) = filters.category {
                if r.article.category != *category {
                    return false;
                }
            }

            if let Some(cutoff) = cutoff {
                if r.article.published_at < cutoff {
                    return false;
                }
            }

            true
        })
        .collect()
}

/// Order results according to the sort mode. All sorts are stable, so ties
/// keep their original relative order.
pub fn sort_results(results: &mut [SearchResult], sort_by: SortBy) {
    match sort_by {
        SortBy::Newest => {
            results.sort_by(|a, b| b.article.published_at.cmp(&a.article.published_at));
        }
        SortBy::Oldest => {
            results.sort_by(|a, b| a.article.published_at.cmp(&b.article.published_at));
        }
        SortBy::Popular => {
            results.sort_by(|a, b| b.article.likes.cmp(&a.article.likes));
        }
        SortBy::Relevance => {
            results.sort_by(|a, b| {
                b.score
                    .partial_cmp(&a.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
    }
}
