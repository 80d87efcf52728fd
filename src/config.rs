//! Site configuration.
//!
//! Loaded from a single `config.toml` at the root of the pages directory.
//! The file is optional; stock defaults produce a working site. Config files
//! are sparse — override just the values you want:
//!
//! ```toml
//! title = "wandering notes"
//! base_url = "https://example.org/notes/"
//! share_via = "example_handle"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title, shown in page chrome and appended to page titles.
    pub title: String,
    /// Site description, used as the default page description.
    pub description: String,
    /// Absolute URL the weblog is published at. Share links point here.
    pub base_url: String,
    /// Root-relative prefix for internal links.
    pub site_url: String,
    /// Account handle attached to share links.
    pub share_via: String,
    /// Categories that must never appear on a published article.
    pub forbidden_categories: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "weblog".to_string(),
            description: String::new(),
            base_url: "https://example.org/weblog/".to_string(),
            site_url: "/".to_string(),
            share_via: String::new(),
            // `img` is reserved for image assets living inside the pages tree
            forbidden_categories: vec!["img".to_string()],
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "base_url must end with a trailing slash".into(),
            ));
        }
        if !self.site_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "site_url must end with a trailing slash".into(),
            ));
        }
        Ok(())
    }

    /// Whether a category is on the reserved list.
    pub fn is_forbidden(&self, category: &str) -> bool {
        self.forbidden_categories.iter().any(|c| c == category)
    }
}

/// Load `config.toml` from the pages root, falling back to stock defaults
/// when the file does not exist.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join("config.toml");
    let config = if path.exists() {
        toml::from_str(&fs::read_to_string(&path)?)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// A stock `config.toml` with every option documented, for `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r#"# miniblog site configuration.
# All options are optional - defaults shown below.

# Site title, shown in page chrome and appended to page titles.
title = "weblog"

# Site description, used as the default page description.
description = ""

# Absolute URL the weblog is published at. Share links point here.
# Must end with a trailing slash.
base_url = "https://example.org/weblog/"

# Root-relative prefix for internal links. Must end with a trailing slash.
site_url = "/"

# Account handle attached to share links.
share_via = ""

# Categories that must never appear on a published article. An article filed
# under one of these aborts the whole run.
forbidden_categories = ["img"]
"#
}
