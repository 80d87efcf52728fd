//! Article metadata header parsing.
//!
//! Every article file starts with a contiguous run of `key: value` lines,
//! terminated by the first blank line:
//!
//! ```text
//! Title: A day at the museum
//! Date: 2024-03-01 10:00
//! Description: Notes from the exhibition
//! Image: media/museum.jpg
//!
//! Body starts here...
//! ```
//!
//! Recognized keys are `Title:`, `Date:`, `Description:` and `Image:`,
//! matched case-insensitively. Unknown keys are skipped without complaint so
//! an older binary keeps working when newer content grows extra fields.
//! Everything after the blank line is the raw markdown body.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The one accepted `Date:` value format.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("header line `{0}` has no value")]
    MalformedLine(String),
    #[error("invalid date `{0}` (expected YYYY-MM-DD HH:MM)")]
    InvalidDate(String),
}

/// Structured header fields, before acceptance checks.
///
/// `title` may still be empty and `date` absent at this stage; the article
/// builder decides whether that is fatal.
#[derive(Debug, Clone, Default)]
pub struct RawHeader {
    pub title: String,
    pub date: Option<NaiveDateTime>,
    /// Date portion of the `Date:` value as written (`2024-03-01`).
    pub date_str: String,
    /// Time portion of the `Date:` value as written (`10:00`).
    pub time_str: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Split raw article text into header fields and the raw body.
///
/// The header is the leading run of non-blank lines (blank = empty after
/// trailing-whitespace trim); the body is everything after the first blank
/// line, trimmed. A file with no blank line is all header and has an empty
/// body.
pub fn parse_header(text: &str) -> Result<(RawHeader, String), HeaderError> {
    let mut header = RawHeader::default();
    let mut rest = text;

    loop {
        let (line, after) = rest.split_once('\n').unwrap_or((rest, ""));
        rest = after;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        parse_line(line, &mut header)?;
    }

    Ok((header, rest.trim().to_string()))
}

/// Parse one `key: value` line into the header, splitting on the first
/// whitespace run.
fn parse_line(line: &str, header: &mut RawHeader) -> Result<(), HeaderError> {
    let (key, value) = line
        .split_once(char::is_whitespace)
        .ok_or_else(|| HeaderError::MalformedLine(line.to_string()))?;
    let value = value.trim_start();

    match key.to_ascii_lowercase().as_str() {
        "title:" => header.title = value.to_string(),
        "date:" => {
            let (date_part, time_part) = value.split_once(' ').unwrap_or((value, ""));
            header.date_str = date_part.to_string();
            header.time_str = time_part.to_string();
            header.date = Some(
                NaiveDateTime::parse_from_str(value, DATE_FORMAT)
                    .map_err(|_| HeaderError::InvalidDate(value.to_string()))?,
            );
        }
        "description:" => header.description = Some(value.to_string()),
        "image:" => header.image = Some(value.to_string()),
        // Unknown keys are ignored for forward compatibility
        _ => {}
    }

    Ok(())
}
