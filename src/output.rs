//! CLI output formatting.
//!
//! The post-scan inventory is information-centric: articles are listed under
//! their category with date and title, uncategorized articles first. Each
//! stage has a `format_*` function (returns lines) for testability and a
//! `print_*` wrapper that writes to stdout. Format functions are pure — no
//! I/O, no side effects.

use crate::article::Article;
use crate::index;

/// Format the content inventory for a scanned (sorted) article collection.
///
/// ```text
/// Articles (3)
///     2024-02-01 Welcome
/// tech (2)
///     2024-03-01 Second post
///     2024-02-15 First post
/// ```
pub fn format_scan_output(articles: &[Article]) -> Vec<String> {
    let mut lines = vec![format!("Articles ({})", articles.len())];
    for article in articles.iter().filter(|a| a.category.is_empty()) {
        lines.push(article_line(article));
    }
    for (name, list) in &index::split_categories(articles) {
        lines.push(format!("{} ({})", name, list.len()));
        for article in list {
            lines.push(article_line(article));
        }
    }
    lines
}

fn article_line(article: &Article) -> String {
    format!("    {} {}", article.date_str, article.title)
}

pub fn print_scan_output(articles: &[Article]) {
    for line in format_scan_output(articles) {
        println!("{line}");
    }
}

/// One-line summary of what a generate run wrote.
pub fn format_generate_summary(article_count: usize, category_count: usize) -> String {
    format!(
        "Generated {article_count} article pages, {category_count} category indexes, 1 main index"
    )
}
