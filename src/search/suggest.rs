use rustc_hash::FxHashSet;

use crate::search::history::SearchHistory;

/// Maximum number of suggestions returned
pub const MAX_SUGGESTIONS: usize = 8;
/// Maximum number of history-sourced suggestions
pub const MAX_HISTORY_SUGGESTIONS: usize = 3;

/// The site's static topic catalog, used as the primary suggestion source.
pub const CATALOG_TERMS: &[&str] = &[
    "inteligência artificial",
    "machine learning",
    "deep learning",
    "LGPD",
    "cibersegurança",
    "big data",
    "data science",
    "blockchain",
    "internet das coisas",
    "computação em nuvem",
    "privacidade de dados",
    "algoritmos",
    "redes neurais",
    "automação",
    "transformação digital",
];

/// Suggestions for a partial query: catalog terms containing it
/// (case-insensitive, catalog order) followed by up to the 3 most recent
/// matching history queries, de-duplicated, capped at 8.
///
/// No minimum-length check happens here; the usual 2-character threshold is
/// the caller's input-debounce guard, and shorter partials simply return
/// whatever substring matches exist.
pub fn suggest(partial: &str, catalog_terms: &[&str], history: &SearchHistory) -> Vec<String> {
    let partial_lower = partial.to_lowercase();

    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut suggestions: Vec<String> = Vec::new();

    for term in catalog_terms {
        if term.to_lowercase().contains(&partial_lower) && seen.insert(term.to_string()) {
            suggestions.push(term.to_string());
        }
    }

    for query in history.matching(&partial_lower, MAX_HISTORY_SUGGESTIONS) {
        if seen.insert(query.clone()) {
            suggestions.push(query);
        }
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
