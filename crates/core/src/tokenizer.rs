// crates/core/src/tokenizer.rs
use std::io::Read;

use crate::error::{Result, StatError};

/// Integers parsed from the input, plus every token that was not one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Integers<'a> {
    pub values: Vec<i64>,
    /// Rejected tokens in input order.
    pub skipped: Vec<&'a str>,
}

/// Read the whole input into memory.
///
/// Invalid UTF-8 is replaced rather than rejected, so binary noise in a
/// text file still yields a report.
///
/// # Errors
/// Returns [`StatError::Read`] if the underlying reader fails.
pub fn read_text<R: Read>(mut input: R) -> Result<String> {
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .map_err(|source| StatError::Read { source })?;

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}

/// Split on whitespace and parse each token as an `i64`.
#[must_use]
pub fn integers(text: &str) -> Integers<'_> {
    let mut batch = Integers::default();
    for token in text.split_whitespace() {
        match token.parse::<i64>() {
            Ok(value) => batch.values.push(value),
            Err(err) => {
                tracing::debug!(token, %err, "token is not a long");
                batch.skipped.push(token);
            }
        }
    }
    batch
}

/// Contiguous runs of non-whitespace characters.
#[must_use]
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Characters that end a line; `\r\n` counts as one break.
const LINE_BREAKS: [char; 5] = ['\n', '\r', '\u{2028}', '\u{2029}', '\u{85}'];

/// Lines with their terminator stripped. `\n`, `\r\n`, a lone `\r`, U+2028,
/// U+2029 and U+0085 all end a line. Empty lines are kept; a trailing
/// terminator does not start an extra line.
#[must_use]
pub fn lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let Some(at) = rest.find(LINE_BREAKS) else {
            lines.push(rest);
            break;
        };
        lines.push(&rest[..at]);

        let tail = &rest[at..];
        let width = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[width..];
    }
    lines
}
