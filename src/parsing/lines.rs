//! Line merging and classification.
//!
//! A message that contains line breaks is exported as several physical
//! lines, and only the first carries the timestamp prefix. This module glues
//! such lines back together and labels every logical line as a user message
//! or a system event.

use tracing::trace;

use super::patterns::{MESSAGE, SYSTEM};

/// One logical line of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// `true` when the line is a chat-client event without an author.
    pub is_system: bool,
    /// Full text, continuation lines joined with `\n`.
    pub text: String,
}

impl RawLine {
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            is_system: false,
            text: text.into(),
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self {
            is_system: true,
            text: text.into(),
        }
    }
}

/// Splits raw export text into physical lines.
///
/// `\r\n`, `\r` and `\n` are all accepted. A single trailing line break does
/// not produce a final empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text
        .split("\r\n")
        .flat_map(|chunk| chunk.split(['\r', '\n']))
        .collect();

    if lines.len() > 1 && lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines
}

/// Merges continuation lines and classifies the result.
///
/// Each physical line is tested against the message pattern first, then the
/// system pattern. A line matching neither is appended to the previous
/// logical line, keeping that line's classification. Leading lines with
/// nothing to attach to are dropped.
///
/// # Example
///
/// ```rust
/// use tonalchat::parsing::lines::merge_lines;
///
/// let lines = merge_lines([
///     "[20.06.19, 16:03:07] Emily: Come on...",
///     "don't be so mysterious!",
///     "[20.06.19, 16:04:00] Loris added John",
/// ]);
///
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].text, "[20.06.19, 16:03:07] Emily: Come on...\ndon't be so mysterious!");
/// assert!(lines[1].is_system);
/// ```
pub fn merge_lines<'a, I>(lines: I) -> Vec<RawLine>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .fold(Vec::new(), |mut acc: Vec<RawLine>, (number, line)| {
            if MESSAGE.is_match(line) {
                acc.push(RawLine::message(line));
            } else if SYSTEM.is_match(line) {
                acc.push(RawLine::system(line));
            } else if let Some(previous) = acc.last_mut() {
                previous.text.push('\n');
                previous.text.push_str(line);
            } else {
                trace!(line = number + 1, "dropping line with no message to continue");
            }
            acc
        })
}
