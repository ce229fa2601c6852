//! Corpus providers.
//!
//! The engine never owns the article corpus; a repository supplies it per
//! call. `QueryFilter` is the plain-data replacement for the hosted document
//! database's chainable `where`/`orderBy`/`limit` query surface — backends
//! translate it to whatever their storage understands.

use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::models::Article;

/// Server-side restriction applied before articles reach the search engine.
#[derive(Debug, Clone, Default)]
pub struct QueryFilter {
    /// Equality filter on the category slug.
    pub category: Option<String>,
    pub order_by: Option<ArticleOrdering>,
    pub limit: Option<usize>,
}

/// Orderings a backend is expected to support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleOrdering {
    NewestFirst,
    OldestFirst,
    MostLiked,
    MostViewed,
}

/// Source of articles for the search engine and the listing pages.
pub trait ArticleRepository {
    fn fetch_articles(&self, filter: &QueryFilter) -> Result<Vec<Article>, StoreError>;
}

/// In-memory repository. Default-constructed it holds the site's sample
/// articles, which is what the frontend falls back to when no backend is
/// reachable; hosts with a real store construct it from their own data.
#[derive(Debug)]
pub struct InMemoryRepository {
    articles: Vec<Article>,
}

impl InMemoryRepository {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new(sample_articles())
    }
}

impl ArticleRepository for InMemoryRepository {
    fn fetch_articles(&self, filter: &QueryFilter) -> Result<Vec<Article>, StoreError> {
        let mut articles: Vec<Article> = self
            .articles
            .iter()
            .filter(|a| match &filter.category {
                Some(category) => a.category == *category,
                None => true,
            })
            .cloned()
            .collect();

        match filter.order_by {
            Some(ArticleOrdering::NewestFirst) => {
                articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
            }
            Some(ArticleOrdering::OldestFirst) => {
                articles.sort_by(|a, b| a.published_at.cmp(&b.published_at));
            }
            Some(ArticleOrdering::MostLiked) => {
                articles.sort_by(|a, b| b.likes.cmp(&a.likes));
            }
            Some(ArticleOrdering::MostViewed) => {
                articles.sort_by(|a, b| b.views.cmp(&a.views));
            }
            None => {}
        }

        if let Some(limit) = filter.limit {
            articles.truncate(limit);
        }

        Ok(articles)
    }
}

fn parse_date(value: &str) -> DateTime<Utc> {
    value
        .parse::<DateTime<Utc>>()
        .unwrap_or_else(|_| Utc::now())
}

/// The demonstration corpus shipped with the site.
pub fn sample_articles() -> Vec<Article> {
    vec![
        Article {
            id: "1".to_string(),
            title: "O Futuro da Inteligência Artificial no Brasil".to_string(),
            content: "A inteligência artificial está transformando diversos setores da economia brasileira...".to_string(),
            category: "ia".to_string(),
            author: "João Silva".to_string(),
            tags: vec![
                "ia".to_string(),
                "brasil".to_string(),
                "tecnologia".to_string(),
                "futuro".to_string(),
            ],
            published_at: parse_date("2024-01-15T10:00:00Z"),
            likes: 45,
            views: 1250,
        },
        Article {
            id: "2".to_string(),
            title: "LGPD: Como Proteger Dados Pessoais na Era Digital".to_string(),
            content: "A Lei Geral de Proteção de Dados trouxe mudanças significativas...".to_string(),
            category: "legislacao".to_string(),
            author: "Maria Santos".to_string(),
            tags: vec![
                "lgpd".to_string(),
                "privacidade".to_string(),
                "dados".to_string(),
                "legislacao".to_string(),
            ],
            published_at: parse_date("2024-01-10T14:30:00Z"),
            likes: 32,
            views: 890,
        },
        Article {
            id: "3".to_string(),
            title: "Cibersegurança: Principais Ameaças de 2024".to_string(),
            content: "As ameaças cibernéticas evoluem constantemente...".to_string(),
            category: "ciberseguranca".to_string(),
            author: "Carlos Oliveira".to_string(),
            tags: vec![
                "ciberseguranca".to_string(),
                "ameacas".to_string(),
                "seguranca".to_string(),
                "2024".to_string(),
            ],
            published_at: parse_date("2024-01-05T09:15:00Z"),
            likes: 67,
            views: 1580,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_repository_serves_samples() {
        let repo = InMemoryRepository::default();
        let articles = repo.fetch_articles(&QueryFilter::default()).unwrap();
        assert_eq!(articles.len(), 3);
    }

    #[test]
    fn test_category_filter() {
        let repo = InMemoryRepository::default();
        let filter = QueryFilter {
            category: Some("legislacao".to_string()),
            ..Default::default()
        };

        let articles = repo.fetch_articles(&filter).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].id, "2");
    }

    #[test]
    fn test_ordering_and_limit() {
        let repo = InMemoryRepository::default();
        let filter = QueryFilter {
            order_by: Some(ArticleOrdering::MostLiked),
            limit: Some(2),
            ..Default::default()
        };

        let articles = repo.fetch_articles(&filter).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].id, "3");
        assert_eq!(articles[1].id, "1");
    }

    #[test]
    fn test_newest_first() {
        let repo = InMemoryRepository::default();
        let filter = QueryFilter {
            order_by: Some(ArticleOrdering::NewestFirst),
            ..Default::default()
        };

        let articles = repo.fetch_articles(&filter).unwrap();
        let ids: Vec<&str> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}
