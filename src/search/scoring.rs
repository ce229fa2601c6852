use crate::models::Article;

/// Weight for a query hit in the title
const TITLE_WEIGHT: f32 = 10.0;
/// Weight for a query hit in the category slug
const CATEGORY_WEIGHT: f32 = 5.0;
/// Weight per tag containing the query
const TAG_WEIGHT: f32 = 3.0;
/// Engagement bonuses
const LIKE_WEIGHT: f32 = 0.1;
const VIEW_WEIGHT: f32 = 0.01;

/// Whether an article matches the query at all: the lowercased query must be
/// a substring of the lowercased title, content, category, or any tag. Pure
/// containment, no tokenization or fuzzy matching.
pub fn matches_query(article: &Article, query_lower: &str) -> bool {
    article.title.to_lowercase().contains(query_lower)
        || article.content.to_lowercase().contains(query_lower)
        || article.category.to_lowercase().contains(query_lower)
        || article
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(query_lower))
}

/// Relevance score for a matching article:
///
/// `10·[title] + 5·[category] + 3·(matching tags) + (content occurrences)
///  + 0.1·likes + 0.01·views`
///
/// Content occurrences are case-insensitive and non-overlapping. Engagement
/// counts are unnormalized, so a heavily viewed article can outrank an exact
/// but unpopular title match; that mirrors the site's live ranking and is
/// intentional.
pub fn relevance_score(article: &Article, query_lower: &str) -> f32 {
    let mut score = 0.0;

    if article.title.to_lowercase().contains(query_lower) {
        score += TITLE_WEIGHT;
    }
    if article.category.to_lowercase().contains(query_lower) {
        score += CATEGORY_WEIGHT;
    }
    for tag in &article.tags {
        if tag.to_lowercase().contains(query_lower) {
            score += TAG_WEIGHT;
        }
    }

    score += count_occurrences(&article.content.to_lowercase(), query_lower) as f32;

    score += article.likes as f32 * LIKE_WEIGHT;
    score += article.views as f32 * VIEW_WEIGHT;

    score
}

/// Count non-overlapping occurrences of `needle` in `haystack`. Both inputs
/// are expected to be lowercased already.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.match_indices(needle).count()
}
