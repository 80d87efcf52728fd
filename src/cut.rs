//! Teaser/full body splitting on the `---CUT---` marker.
//!
//! Index pages show a shortened preview of each article. Authors mark the
//! cut point with a literal `---CUT---` line; everything before it becomes
//! the teaser. Both renderings go through the markdown dialect independently,
//! never by truncating HTML, so a list or quote spanning the cut point
//! renders correctly in the full version and terminates cleanly in the
//! teaser.

use crate::dialect::Dialect;
use regex::Regex;
use std::sync::OnceLock;

/// Literal separator between teaser and remainder.
pub const CUT_MARKER: &str = "---CUT---";

/// Both renderings of one raw article body.
#[derive(Debug, Clone)]
pub struct RenderedBody {
    pub body_html: String,
    /// Equals `body_html` when the body has no cut marker.
    pub teaser_html: String,
    pub has_cut: bool,
}

fn footnote_ref_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[\^.*\]").expect("valid regex"))
}

/// Render the full body and the teaser from one raw body.
///
/// The full rendering removes every occurrence of the marker, not just the
/// first, so the sentinel can never leak into output. The teaser is the text
/// before the first marker, with `[^...]` footnote-style references stripped
/// first; that cleanup applies to the teaser only.
pub fn split_and_render(raw_body: &str, dialect: &Dialect) -> RenderedBody {
    let (teaser_raw, has_cut) = match raw_body.split_once(CUT_MARKER) {
        Some((before, _)) => (before, true),
        None => (raw_body, false),
    };

    let body_html = dialect.render(&raw_body.replace(CUT_MARKER, ""));
    let teaser_html = if has_cut {
        let cleaned = footnote_ref_regex().replace_all(teaser_raw, "");
        dialect.render(&cleaned)
    } else {
        body_html.clone()
    };

    RenderedBody {
        body_html,
        teaser_html,
        has_cut,
    }
}
