//! The site's category slugs and their Portuguese display names.

/// Known category slugs, in the site's navigation order.
pub const CATEGORY_SLUGS: &[&str] = &["ia", "bigdata", "ciberseguranca", "legislacao", "humor"];

/// Display name for a category slug. Unknown slugs fall through unchanged so
/// newly added collections render something sensible.
pub fn display_name(slug: &str) -> &str {
    match slug {
        "ia" => "Inteligência Artificial",
        "bigdata" => "Big Data",
        "ciberseguranca" => "Cibersegurança",
        "legislacao" => "Legislação",
        "humor" => "Humor",
        other => other,
    }
}
