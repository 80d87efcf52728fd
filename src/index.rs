//! Article ordering and category partitioning.
//!
//! The global list is sorted newest-first; category indexes are a partition
//! of that list, never re-sorted, so every view of an article collection
//! agrees on relative order.

use crate::article::Article;
use std::collections::BTreeMap;

/// Sort articles reverse-chronologically.
///
/// The sort is stable: articles sharing a timestamp keep their
/// directory-traversal encounter order, which keeps runs reproducible.
pub fn sort_articles(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Partition an already-sorted article list by category.
///
/// Uncategorized articles are skipped; they appear only on the global index.
/// Keys are sorted, so iteration order is deterministic.
pub fn split_categories(articles: &[Article]) -> BTreeMap<&str, Vec<&Article>> {
    let mut categories: BTreeMap<&str, Vec<&Article>> = BTreeMap::new();
    for article in articles {
        if !article.category.is_empty() {
            categories
                .entry(article.category.as_str())
                .or_default()
                .push(article);
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::dialect::Dialect;
    use std::path::Path;

    fn article(rel_path: &str, date: &str) -> Article {
        let text = format!("Title: {rel_path}\nDate: {date}\n\nBody.");
        crate::article::build_article(
            Path::new(rel_path),
            &text,
            &Dialect::new(),
            &SiteConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn articles_sort_newest_first() {
        let mut articles = vec![
            article("a.md", "2024-01-01 10:00"),
            article("b.md", "2024-03-01 10:00"),
            article("c.md", "2024-02-01 10:00"),
        ];
        sort_articles(&mut articles);
        let dates: Vec<&str> = articles.iter().map(|a| a.date_str.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-02-01", "2024-01-01"]);
    }

    #[test]
    fn equal_dates_keep_encounter_order() {
        let mut articles = vec![
            article("first.md", "2024-01-01 10:00"),
            article("second.md", "2024-01-01 10:00"),
            article("third.md", "2024-01-01 10:00"),
        ];
        sort_articles(&mut articles);
        let slugs: Vec<&str> = articles.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["first", "second", "third"]);
    }

    #[test]
    fn partition_groups_by_category_in_global_order() {
        let mut articles = vec![
            article("tech/old.md", "2024-01-01 10:00"),
            article("tech/new.md", "2024-03-01 10:00"),
            article("rootfile.md", "2024-02-01 10:00"),
        ];
        sort_articles(&mut articles);
        let categories = split_categories(&articles);

        assert_eq!(categories.len(), 1);
        let tech = &categories["tech"];
        assert_eq!(tech.len(), 2);
        assert_eq!(tech[0].slug, "new");
        assert_eq!(tech[1].slug, "old");
    }

    #[test]
    fn uncategorized_articles_never_form_a_key() {
        let articles = vec![article("rootfile.md", "2024-02-01 10:00")];
        let categories = split_categories(&articles);
        assert!(categories.is_empty());
    }
}
