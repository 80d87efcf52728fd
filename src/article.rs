//! Article construction and acceptance.
//!
//! One source file becomes one [`Article`]: header fields from the metadata
//! block, category and slug from the file's position in the pages tree, and
//! both body renderings from the markdown dialect. Articles are built once
//! during the parse phase and immutable afterwards.
//!
//! Acceptance is fail-fast: a missing title or date, or a reserved category,
//! aborts the whole run. The offending source path is carried in every error
//! so the operator knows which file to fix.

use crate::config::SiteConfig;
use crate::cut;
use crate::dialect::Dialect;
use crate::header::{self, HeaderError};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArticleError {
    #[error("article {path}: missing required header field `{field}`")]
    MalformedHeader { path: PathBuf, field: &'static str },
    #[error("article {path}: category `{category}` is reserved and cannot be published")]
    ForbiddenCategory { path: PathBuf, category: String },
    #[error("article {path}: {source}")]
    Header {
        path: PathBuf,
        #[source]
        source: HeaderError,
    },
}

/// One parsed source file: metadata plus both rendered body variants.
#[derive(Debug, Clone)]
pub struct Article {
    pub title: String,
    pub date: NaiveDateTime,
    /// Date portion of the header value, as written.
    pub date_str: String,
    /// Time portion of the header value, as written.
    pub time_str: String,
    pub description: Option<String>,
    pub image: Option<String>,
    /// First path segment under the pages root; empty means uncategorized.
    pub category: String,
    /// Source filename stem.
    pub slug: String,
    /// `category/slug`, or just `slug` for uncategorized articles.
    pub url: String,
    pub body_html: String,
    pub teaser_html: String,
    pub has_cut: bool,
    /// Prebuilt share-intent link carrying the canonical URL and title.
    pub share_link: String,
}

/// Build one article from its path relative to the pages root and its raw
/// text.
pub fn build_article(
    rel_path: &Path,
    text: &str,
    dialect: &Dialect,
    config: &SiteConfig,
) -> Result<Article, ArticleError> {
    let (raw, raw_body) = header::parse_header(text).map_err(|source| ArticleError::Header {
        path: rel_path.to_path_buf(),
        source,
    })?;

    let slug = rel_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let category = category_of(rel_path);

    if raw.title.is_empty() {
        return Err(ArticleError::MalformedHeader {
            path: rel_path.to_path_buf(),
            field: "title",
        });
    }
    let date = raw.date.ok_or_else(|| ArticleError::MalformedHeader {
        path: rel_path.to_path_buf(),
        field: "date",
    })?;
    if config.is_forbidden(&category) {
        return Err(ArticleError::ForbiddenCategory {
            path: rel_path.to_path_buf(),
            category,
        });
    }

    let url = if category.is_empty() {
        slug.clone()
    } else {
        format!("{category}/{slug}")
    };
    let share_link = share_link(&url, &raw.title, config);
    let rendered = cut::split_and_render(&raw_body, dialect);

    Ok(Article {
        title: raw.title,
        date,
        date_str: raw.date_str,
        time_str: raw.time_str,
        description: raw.description,
        image: raw.image,
        category,
        slug,
        url,
        body_html: rendered.body_html,
        teaser_html: rendered.teaser_html,
        has_cut: rendered.has_cut,
        share_link,
    })
}

/// The first path segment under the pages root, or empty for files directly
/// at the root.
fn category_of(rel_path: &Path) -> String {
    let mut components = rel_path.components();
    match (components.next(), components.next()) {
        (Some(first), Some(_)) => first.as_os_str().to_string_lossy().into_owned(),
        _ => String::new(),
    }
}

/// Share-intent link: canonical article URL, via handle, article title, each
/// percent-encoded.
fn share_link(url: &str, title: &str, config: &SiteConfig) -> String {
    format!(
        "https://twitter.com/intent/tweet?url={}&via={}&text={}",
        urlencoding::encode(&format!("{}{}", config.base_url, url)),
        urlencoding::encode(&config.share_via),
        urlencoding::encode(title),
    )
}
