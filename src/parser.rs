//! End-to-end chat-log parsing.
//!
//! Parsing runs in two phases:
//!
//! - **collect** ([`collect`]): split lines, merge continuations, extract
//!   fields, strip tone tags, interpolate missing timestamps and split each
//!   span into raw date and time. Nothing is interpreted as a calendar date
//!   yet.
//! - **finalize** ([`finalize`]): with the day order settled for the whole
//!   export, normalize every date and time and build the [`Message`]s.
//!
//! The day order sits between the two: taken from [`ParseOptions::days_first`]
//! when supplied, otherwise inferred from every distinct raw date.
//!
//! # Example
//!
//! ```rust
//! use tonalchat::parser::ChatParser;
//! use tonalchat::tone::Tone;
//!
//! let chat = "[20.06.19, 15:58:47] Messages to this group are now secured with end-to-end encryption.
//! [20.06.19, 16:03:07] Emily: Come on...
//! don't be so mysterious!
//! [20.06.19, 16:04:18] Emily: Sounds good man, I like it! /pos";
//!
//! let messages = ChatParser::new().parse_str(chat)?;
//!
//! assert_eq!(messages.len(), 3);
//! assert!(messages[0].is_system());
//! assert_eq!(messages[1].body, "Come on...\ndon't be so mysterious!");
//! assert_eq!(messages[2].tone, Some(Tone::Positive));
//! # Ok::<(), tonalchat::TonalchatError>(())
//! ```

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use tracing::{debug, trace};

use crate::config::ParseOptions;
use crate::error::{Result, TonalchatError};
use crate::message::Message;
use crate::parsing::annotations::{apply_tone, parse_attachment};
use crate::parsing::date::{DayOrder, assemble_timestamp, infer_day_order, resolve_date};
use crate::parsing::fields::{DecomposedTimestamp, decompose_timestamp, extract_fields};
use crate::parsing::interpolate::{TimestampSource, interpolate_timestamps};
use crate::parsing::lines::{merge_lines, split_lines};
use crate::parsing::time::normalize_time;
use crate::tone::Tone;

/// Parser for chat exports.
///
/// # Example
///
/// ```rust
/// use tonalchat::config::ParseOptions;
/// use tonalchat::parser::ChatParser;
///
/// let parser = ChatParser::with_config(ParseOptions::new().with_days_first(false));
/// let messages = parser.parse_str("[6/12/19, 3:58:53 PM] John: Hey")?;
///
/// assert_eq!(messages[0].timestamp.to_string(), "2019-06-12 15:58:53");
/// # Ok::<(), tonalchat::TonalchatError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChatParser {
    config: ParseOptions,
}

impl ChatParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParseOptions) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParseOptions {
        &self.config
    }

    /// Reads and parses an export file.
    pub fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parses export text, using the local wall clock for messages whose
    /// timestamp cannot be recovered.
    pub fn parse_str(&self, text: &str) -> Result<Vec<Message>> {
        self.parse_str_at(text, Local::now().naive_local())
    }

    /// Parses export text with an explicit fallback time.
    pub fn parse_str_at(&self, text: &str, now: NaiveDateTime) -> Result<Vec<Message>> {
        let pending = collect(text, now)?;
        let order = self.day_order(&pending);
        finalize(pending, order, self.config.parse_attachments)
    }

    /// The configured day order, or the one inferred from the export.
    fn day_order(&self, pending: &[PendingMessage]) -> DayOrder {
        if let Some(days_first) = self.config.days_first {
            let order = DayOrder::from_days_first(days_first);
            debug!(%order, "using supplied day order");
            return order;
        }

        let order = infer_day_order(pending.iter().filter_map(|msg| match &msg.timestamp {
            PendingTimestamp::Decomposed(ts) => Some(ts.raw_date.as_str()),
            PendingTimestamp::WallClock(_) => None,
        }));
        debug!(%order, "inferred day order");
        order
    }
}

/// Parses export text with the given options.
///
/// Shorthand for `ChatParser::with_config(options.clone()).parse_str(text)`.
pub fn parse_str(text: &str, options: &ParseOptions) -> Result<Vec<Message>> {
    ChatParser::with_config(options.clone()).parse_str(text)
}

/// A message whose timestamp has not been normalized yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMessage {
    pub author: String,
    pub body: String,
    pub tone: Option<Tone>,
    pub timestamp: PendingTimestamp,
}

/// Timestamp state between the collect and finalize phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingTimestamp {
    /// Raw parts awaiting the export-wide day order.
    Decomposed(DecomposedTimestamp),
    /// Already concrete (wall-clock fallback).
    WallClock(NaiveDateTime),
}

/// Collect phase: raw text to messages with undecided dates.
pub fn collect(text: &str, now: NaiveDateTime) -> Result<Vec<PendingMessage>> {
    let physical = split_lines(text);
    let logical = merge_lines(physical.iter().copied());
    debug!(
        physical = physical.len(),
        logical = logical.len(),
        "merged export lines"
    );

    let fields = logical
        .iter()
        .enumerate()
        .map(|(index, line)| extract_fields(index, line).map(apply_tone))
        .collect::<Result<Vec<_>>>()?;

    interpolate_timestamps(fields, now)
        .into_iter()
        .map(|(fields, source)| -> Result<PendingMessage> {
            let timestamp = match source {
                TimestampSource::Span(span) => {
                    let decomposed = decompose_timestamp(&span)?;
                    trace!(%span, layout = ?decomposed.layout, "decomposed timestamp");
                    PendingTimestamp::Decomposed(decomposed)
                }
                TimestampSource::WallClock(at) => {
                    trace!(author = %fields.author, "no later timestamp, using wall clock");
                    PendingTimestamp::WallClock(at)
                }
            };

            Ok(PendingMessage {
                author: fields.author,
                body: fields.body,
                tone: fields.tone,
                timestamp,
            })
        })
        .collect()
}

/// Finalize phase: normalize every timestamp under one day order.
pub fn finalize(
    pending: Vec<PendingMessage>,
    order: DayOrder,
    parse_attachments: bool,
) -> Result<Vec<Message>> {
    pending
        .into_iter()
        .map(|msg| -> Result<Message> {
            let timestamp = match &msg.timestamp {
                PendingTimestamp::Decomposed(ts) => resolve_timestamp(ts, order)?,
                PendingTimestamp::WallClock(at) => *at,
            };

            let attachment = if parse_attachments {
                parse_attachment(&msg.body)
            } else {
                None
            };

            Ok(Message {
                author: msg.author,
                body: msg.body,
                timestamp,
                tone: msg.tone,
                attachment,
            })
        })
        .collect()
}

fn resolve_timestamp(ts: &DecomposedTimestamp, order: DayOrder) -> Result<NaiveDateTime> {
    let unrecognized = || TonalchatError::unrecognized_timestamp(format!("{} {}", ts.raw_date, ts.raw_time));

    let date = resolve_date(&ts.raw_date, order).ok_or_else(unrecognized)?;
    let time = normalize_time(&ts.raw_time, ts.ampm.as_deref()).ok_or_else(unrecognized)?;

    assemble_timestamp(date, time).ok_or_else(|| TonalchatError::TimestampOutOfRange {
        year: date.year,
        month: date.month,
        day: date.day,
        time: time.to_string(),
    })
}
