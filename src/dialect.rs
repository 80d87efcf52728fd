//! The weblog markdown dialect.
//!
//! Standard markdown is handled by [`pulldown_cmark`]. On top of it sits a
//! small table of block-level rules that get first refusal at every block
//! boundary, before the base engine sees the text. The only custom rule today
//! is the figure block:
//!
//! ```text
//! $$media/museum.jpg|The west wing, before opening$$
//! ```
//!
//! which renders to a `<figure>` element with the caption doubling as the
//! image's alt text. Adding another construct means pushing another
//! [`BlockRule`] onto the table; the base engine needs no changes and each
//! rule is testable on its own.

use pulldown_cmark::{Parser, html as md_html};
use regex::Regex;
use std::sync::OnceLock;

/// One recognized custom block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockToken {
    /// `$$path|caption$$` — image with caption.
    Figure { src: String, caption: String },
}

/// A block-level grammar rule: a recognizer/renderer pair.
///
/// `recognize` is offered the text at a block boundary and returns the token
/// it claims plus the byte length consumed; `render` turns that token into
/// HTML. Rules never see text the base engine has already buffered.
pub struct BlockRule {
    pub recognize: fn(&str) -> Option<(BlockToken, usize)>,
    pub render: fn(&BlockToken) -> String,
}

/// Markdown processor with custom block rules checked ahead of the standard
/// rule set.
pub struct Dialect {
    rules: Vec<BlockRule>,
}

impl Dialect {
    /// The weblog dialect: the figure rule prepended to the standard rules.
    pub fn new() -> Self {
        Self {
            rules: vec![BlockRule {
                recognize: recognize_figure,
                render: render_figure,
            }],
        }
    }

    /// Render markdown to HTML.
    ///
    /// Custom rules are tried at every block boundary: the start of input,
    /// after a blank line, and directly after a consumed custom block.
    /// Unclaimed lines are buffered and flushed through the base engine
    /// unchanged, so captures inside a custom block are never reprocessed.
    pub fn render(&self, input: &str) -> String {
        let mut out = String::new();
        let mut pending = String::new();
        let mut at_boundary = true;

        for line in input.lines() {
            let mut rest = line;
            while at_boundary {
                match self.recognize(rest) {
                    Some((rule, token, len)) => {
                        flush_base(&mut out, &mut pending);
                        out.push_str(&(rule.render)(&token));
                        rest = &rest[len..];
                    }
                    None => break,
                }
            }
            if rest.is_empty() && !line.is_empty() {
                // Line fully claimed by custom rules; still at a boundary.
                continue;
            }
            at_boundary = rest.trim().is_empty();
            pending.push_str(rest);
            pending.push('\n');
        }
        flush_base(&mut out, &mut pending);
        out
    }

    fn recognize(&self, text: &str) -> Option<(&BlockRule, BlockToken, usize)> {
        self.rules
            .iter()
            .find_map(|rule| (rule.recognize)(text).map(|(token, len)| (rule, token, len)))
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::new()
    }
}

/// Hand buffered standard-markdown text to the base engine.
fn flush_base(out: &mut String, pending: &mut String) {
    if pending.is_empty() {
        return;
    }
    md_html::push_html(out, Parser::new(pending));
    pending.clear();
}

fn figure_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Non-greedy: the first `|` splits path from caption, the first `$$`
    // after it terminates the construct.
    RE.get_or_init(|| Regex::new(r"^\$\$(.*?)\|(.*?)\$\$").expect("valid regex"))
}

fn recognize_figure(text: &str) -> Option<(BlockToken, usize)> {
    let caps = figure_regex().captures(text)?;
    let token = BlockToken::Figure {
        src: caps[1].to_string(),
        caption: caps[2].to_string(),
    };
    Some((token, caps.get(0).map(|m| m.end()).unwrap_or(0)))
}

/// Fixed output shape. Path and caption pass through verbatim, matching the
/// legacy renderer byte for byte.
fn render_figure(token: &BlockToken) -> String {
    let BlockToken::Figure { src, caption } = token;
    format!("<figure><img src=\"{src}\" alt=\"{caption}\"><figcaption>{caption}</figcaption></figure>\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(input: &str) -> String {
        Dialect::new().render(input)
    }

    #[test]
    fn figure_renders_byte_for_byte() {
        assert_eq!(
            render("$$a.png|A caption$$"),
            "<figure><img src=\"a.png\" alt=\"A caption\"><figcaption>A caption</figcaption></figure>\n"
        );
    }

    #[test]
    fn figure_between_paragraphs() {
        let html = render("Before.\n\n$$a.png|Cap$$\n\nAfter.");
        assert!(html.contains("<p>Before.</p>"));
        assert!(html.contains("<figure><img src=\"a.png\" alt=\"Cap\">"));
        assert!(html.contains("<p>After.</p>"));
        // Figure output sits between the two paragraphs
        let fig = html.find("<figure>").unwrap();
        assert!(html.find("Before").unwrap() < fig);
        assert!(fig < html.find("After").unwrap());
    }

    #[test]
    fn first_pipe_splits_path_from_caption() {
        let html = render("$$a.png|one|two$$");
        assert!(html.contains("src=\"a.png\""));
        assert!(html.contains("<figcaption>one|two</figcaption>"));
    }

    #[test]
    fn captures_are_not_reprocessed_as_markdown() {
        let html = render("$$a.png|*not emphasis*$$");
        assert!(html.contains("<figcaption>*not emphasis*</figcaption>"));
        assert!(!html.contains("<em>"));
    }

    #[test]
    fn caption_is_not_escaped() {
        // Legacy behavior, preserved deliberately: captures pass through raw.
        let html = render("$$a.png|a <b> & c$$");
        assert!(html.contains("<figcaption>a <b> & c</figcaption>"));
    }

    #[test]
    fn consecutive_figures_each_match() {
        let html = render("$$a.png|A$$\n$$b.png|B$$");
        assert!(html.contains("src=\"a.png\""));
        assert!(html.contains("src=\"b.png\""));
    }

    #[test]
    fn two_figures_on_one_line() {
        let html = render("$$a.png|A$$$$b.png|B$$");
        assert!(html.contains("src=\"a.png\""));
        assert!(html.contains("src=\"b.png\""));
    }

    #[test]
    fn trailing_text_falls_through_to_base_engine() {
        let html = render("$$a.png|A$$ tail");
        assert!(html.contains("<figure>"));
        assert!(html.contains("<p>tail</p>"));
    }

    #[test]
    fn mid_paragraph_dollar_line_is_plain_text() {
        // Not at a block boundary, so the paragraph rule keeps it.
        let html = render("A paragraph line\n$$a.png|Cap$$");
        assert!(!html.contains("<figure>"));
    }

    #[test]
    fn unterminated_figure_is_plain_text() {
        let html = render("$$a.png|no closing");
        assert!(!html.contains("<figure>"));
    }

    #[test]
    fn standard_markdown_untouched() {
        let html = render("# Heading\n\nSome *emphasis* and `code`.");
        assert!(html.contains("<h1>Heading</h1>"));
        assert!(html.contains("<em>emphasis</em>"));
        assert!(html.contains("<code>code</code>"));
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render(""), "");
    }
}
