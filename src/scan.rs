//! Pages-tree scanning.
//!
//! Walks the pages directory and builds the article collection. Every
//! regular file is one article; the first directory level under the root is
//! the category:
//!
//! ```text
//! pages/
//! ├── config.toml          # Site configuration (optional, not an article)
//! ├── welcome.md           # Uncategorized (global index only)
//! ├── tech/
//! │   ├── first-post.md    # Category `tech`
//! │   └── second-post.md
//! └── media/
//!     └── trip-report.md   # Category `media`
//! ```
//!
//! The walk is file-name ordered so encounter order — the tiebreak for
//! articles sharing a timestamp — is reproducible across runs. The first
//! article that fails acceptance aborts the scan; this generator has no
//! partial-success mode.

use crate::article::{self, Article, ArticleError};
use crate::config::SiteConfig;
use crate::dialect::Dialect;
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error(transparent)]
    Article(#[from] ArticleError),
}

/// Read every article under `root`, in deterministic encounter order.
pub fn scan(root: &Path, config: &SiteConfig) -> Result<Vec<Article>, ScanError> {
    let dialect = Dialect::new();
    let mut articles = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        // Skip hidden files and the site config
        if name.starts_with('.') || name == "config.toml" {
            continue;
        }
        let rel = entry.path().strip_prefix(root).unwrap();
        let text = fs::read_to_string(entry.path())?;
        articles.push(article::build_article(rel, &text, &dialect, config)?);
    }

    Ok(articles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_article(root: &Path, rel: &str, title: &str, date: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, format!("Title: {title}\nDate: {date}\n\nBody.\n")).unwrap();
    }

    #[test]
    fn scan_finds_all_articles() {
        let tmp = TempDir::new().unwrap();
        write_article(tmp.path(), "welcome.md", "Welcome", "2024-01-01 10:00");
        write_article(tmp.path(), "tech/first.md", "First", "2024-02-01 10:00");
        write_article(tmp.path(), "tech/second.md", "Second", "2024-03-01 10:00");

        let articles = scan(tmp.path(), &SiteConfig::default()).unwrap();
        assert_eq!(articles.len(), 3);
    }

    #[test]
    fn categories_derive_from_directories() {
        let tmp = TempDir::new().unwrap();
        write_article(tmp.path(), "welcome.md", "Welcome", "2024-01-01 10:00");
        write_article(tmp.path(), "tech/first.md", "First", "2024-02-01 10:00");

        let articles = scan(tmp.path(), &SiteConfig::default()).unwrap();
        let welcome = articles.iter().find(|a| a.slug == "welcome").unwrap();
        let first = articles.iter().find(|a| a.slug == "first").unwrap();
        assert_eq!(welcome.category, "");
        assert_eq!(first.category, "tech");
        assert_eq!(first.url, "tech/first");
    }

    #[test]
    fn config_and_dotfiles_are_not_articles() {
        let tmp = TempDir::new().unwrap();
        write_article(tmp.path(), "welcome.md", "Welcome", "2024-01-01 10:00");
        fs::write(tmp.path().join("config.toml"), "title = \"t\"\n").unwrap();
        fs::write(tmp.path().join(".hidden"), "not an article").unwrap();

        let articles = scan(tmp.path(), &SiteConfig::default()).unwrap();
        assert_eq!(articles.len(), 1);
    }

    #[test]
    fn encounter_order_is_file_name_sorted() {
        let tmp = TempDir::new().unwrap();
        write_article(tmp.path(), "b.md", "B", "2024-01-01 10:00");
        write_article(tmp.path(), "a.md", "A", "2024-01-01 10:00");
        write_article(tmp.path(), "c.md", "C", "2024-01-01 10:00");

        let articles = scan(tmp.path(), &SiteConfig::default()).unwrap();
        let slugs: Vec<&str> = articles.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b", "c"]);
    }

    #[test]
    fn first_bad_article_aborts_the_scan() {
        let tmp = TempDir::new().unwrap();
        write_article(tmp.path(), "good.md", "Good", "2024-01-01 10:00");
        fs::write(tmp.path().join("bad.md"), "Date: 2024-01-01 10:00\n\nNo title.\n").unwrap();

        let result = scan(tmp.path(), &SiteConfig::default());
        assert!(matches!(
            result,
            Err(ScanError::Article(ArticleError::MalformedHeader { .. }))
        ));
    }

    #[test]
    fn forbidden_category_aborts_the_scan() {
        let tmp = TempDir::new().unwrap();
        write_article(tmp.path(), "img/shot.md", "Shot", "2024-01-01 10:00");

        let result = scan(tmp.path(), &SiteConfig::default());
        assert!(matches!(
            result,
            Err(ScanError::Article(ArticleError::ForbiddenCategory { .. }))
        ));
    }
}
