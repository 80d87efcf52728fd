//! # miniblog
//!
//! A minimal static weblog generator. Your filesystem is the data source:
//! every file under the pages directory is one article, the directory it
//! sits in is its category, and a small `key: value` header above the
//! markdown body carries the metadata.
//!
//! # Architecture: One-Way Pipeline
//!
//! A run is a full rebuild flowing strictly one direction:
//!
//! ```text
//! pages/  →  scan (header + dialect + cut)  →  index  →  generate  →  output/
//! ```
//!
//! No component depends on rendered output, there is no cache and no partial
//! rebuild. The whole run is sequential and fail-fast: the first article
//! that fails acceptance (missing title or date, reserved category) aborts
//! generation of every page, which is the right trade for a low-volume
//! personal weblog — a broken article should never silently publish a broken
//! site.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`header`] | `key: value` metadata block parsing, fixed date format |
//! | [`dialect`] | Markdown dialect — block-rule table over `pulldown-cmark`, figure blocks |
//! | [`cut`] | `---CUT---` teaser/full splitting, each half rendered independently |
//! | [`article`] | Article construction: category, slug, URL, share link, acceptance checks |
//! | [`index`] | Reverse-chronological sort and category partition |
//! | [`scan`] | Pages-tree walk producing the article collection |
//! | [`generate`] | Maud page templates and output-tree writing |
//! | [`config`] | `config.toml` site configuration |
//! | [`output`] | CLI inventory formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than a runtime template engine:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: page chrome is auto-escaped; only rendered
//!   markdown bodies pass through as `PreEscaped`.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Dialect as a Rule Table
//!
//! The custom figure construct (`$$path|caption$$`) is not wired into a
//! forked markdown engine. [`dialect::Dialect`] holds an ordered list of
//! block recognizer/renderer pairs that get first refusal at every block
//! boundary; whatever they leave goes to `pulldown-cmark` unchanged. New
//! constructs are one more entry in the list, testable without the base
//! engine.
//!
//! ## Determinism Over Cleverness
//!
//! Output must be byte-identical across runs on unchanged input. The walk is
//! file-name ordered, the article sort is stable (encounter order breaks
//! timestamp ties), category keys are `BTreeMap`-sorted, and every piece of
//! state a render needs is passed in as an argument.

pub mod article;
pub mod config;
pub mod cut;
pub mod dialect;
pub mod generate;
pub mod header;
pub mod index;
pub mod output;
pub mod scan;
