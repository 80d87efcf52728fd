//! HTML site generation.
//!
//! Takes the sorted article collection and the category partition and writes
//! the final static site:
//!
//! ```text
//! output/
//! ├── index.html               # Global index, every article newest-first
//! ├── welcome.html             # Uncategorized article page
//! └── tech/
//!     ├── index.html           # Category index
//!     ├── first-post.html      # Article pages
//!     └── second-post.html
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Page chrome (titles, nav, descriptions) goes through maud's automatic
//! escaping; rendered markdown bodies are inserted with `PreEscaped` since
//! the dialect already produced HTML.
//!
//! The category list and site config are plain arguments into every render
//! call — there is no process-wide state, so re-running on unchanged input
//! produces a byte-identical tree.

use crate::article::Article;
use crate::config::SiteConfig;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/style.css");

/// Category partition of the sorted article list, as built by
/// [`crate::index::split_categories`].
pub type Categories<'a> = BTreeMap<&'a str, Vec<&'a Article>>;

/// Write the complete output tree: one page per article, one index per
/// category, one global index.
pub fn generate(
    articles: &[Article],
    categories: &Categories<'_>,
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<(), GenerateError> {
    fs::create_dir_all(output_dir)?;

    for article in articles {
        if !article.category.is_empty() {
            fs::create_dir_all(output_dir.join(&article.category))?;
        }
        let page = render_article_page(article, categories, config);
        let out_path = output_dir.join(format!("{}.html", article.url));
        fs::write(out_path, page.into_string())?;
    }

    for (&name, list) in categories {
        let title = format!("{} // {}", name, config.title);
        let page = render_index_page(&title, list, categories, config);
        fs::write(
            output_dir.join(name).join("index.html"),
            page.into_string(),
        )?;
    }

    let all: Vec<&Article> = articles.iter().collect();
    let page = render_index_page(&config.title, &all, categories, config);
    fs::write(output_dir.join("index.html"), page.into_string())?;

    Ok(())
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure.
fn base_document(
    title: &str,
    description: &str,
    image: Option<&str>,
    categories: &Categories<'_>,
    config: &SiteConfig,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @if !description.is_empty() {
                    meta name="description" content=(description);
                    meta property="og:description" content=(description);
                }
                @if let Some(image) = image {
                    meta property="og:image" content=(image);
                }
                style { (CSS) }
            }
            body {
                (site_header(categories, config))
                main { (content) }
                footer.site-footer {
                    p { (config.description) }
                }
            }
        }
    }
}

/// Renders the site header: title link plus category navigation.
fn site_header(categories: &Categories<'_>, config: &SiteConfig) -> Markup {
    html! {
        header.site-header {
            a.site-title href=(config.site_url) { (config.title) }
            nav.category-nav {
                ul {
                    @for name in categories.keys() {
                        li {
                            a href={ (config.site_url) (name) "/" } { (name) }
                        }
                    }
                }
            }
        }
    }
}

/// Renders one article entry: header, body, optional read-more link.
///
/// Shared between article pages (full body) and index pages (teaser).
fn article_entry(article: &Article, teaser: bool, config: &SiteConfig) -> Markup {
    let body = if teaser {
        article.teaser_html.as_str()
    } else {
        article.body_html.as_str()
    };
    html! {
        article.post {
            header.post-header {
                @if teaser {
                    h2.post-title {
                        a href={ (config.site_url) (article.url) ".html" } { (article.title) }
                    }
                } @else {
                    h1.post-title { (article.title) }
                }
                p.post-date {
                    (article.date_str) " " (article.time_str)
                    @if !article.category.is_empty() {
                        " · "
                        a href={ (config.site_url) (article.category) "/" } { (article.category) }
                    }
                }
            }
            div.post-body { (PreEscaped(body)) }
            @if teaser && article.has_cut {
                p.read-more {
                    a href={ (config.site_url) (article.url) ".html" } { "Read more" }
                }
            }
            @if !teaser {
                footer.post-footer {
                    a.share-link href=(article.share_link) rel="noopener" { "Share" }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders a single article page.
fn render_article_page(
    article: &Article,
    categories: &Categories<'_>,
    config: &SiteConfig,
) -> Markup {
    let page_title = format!("{} // {}", article.title, config.title);
    let description = article
        .description
        .as_deref()
        .unwrap_or(&config.description);
    let content = article_entry(article, false, config);
    base_document(
        &page_title,
        description,
        article.image.as_deref(),
        categories,
        config,
        content,
    )
}

/// Renders an index page: teasers for the given articles, newest first.
///
/// Serves both the global index (every article) and category indexes (the
/// category's partition slice).
fn render_index_page(
    title: &str,
    articles: &[&Article],
    categories: &Categories<'_>,
    config: &SiteConfig,
) -> Markup {
    let content = html! {
        @for article in articles {
            (article_entry(article, true, config))
        }
    };
    base_document(title, &config.description, None, categories, config, content)
}

// ============================================================================
// Tests
// ============================================================================
