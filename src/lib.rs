//! # tonalchat
//!
//! Parses plain-text chat-app exports into structured message records:
//! author, body, wall-clock timestamp, optional tone tag and optional
//! attachment reference.
//!
//! ## Overview
//!
//! An export is a sequence of lines like:
//!
//! ```text
//! [20.06.19, 15:58:50] Loris added Emily
//! [20.06.19, 16:03:07] Emily: Come on...
//! don't be so mysterious!
//! [20.06.19, 16:04:18] Emily: Sounds good man, I like it! /pos
//! ```
//!
//! The parser handles:
//! - bracketed and unbracketed timestamps, `-` and `:` separators
//! - date-time and time-date layouts, 12- and 24-hour clocks
//! - day/month order, detected per export or supplied by the caller
//! - multi-line messages, system events and trailing tone tags
//!
//! ## Quick Start
//!
//! ```rust
//! use tonalchat::prelude::*;
//!
//! let chat = "[6/12/19, 3:58:53 PM] John: Hey /gen\n[6/13/19, 9:01 AM] Emily: Hi!";
//! let messages = ChatParser::new().parse_str(chat)?;
//!
//! assert_eq!(messages[0].tone, Some(Tone::Genuine));
//! assert_eq!(messages[1].timestamp.to_string(), "2019-06-13 09:01:00");
//! # Ok::<(), TonalchatError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ChatParser`](parser::ChatParser), the end-to-end pipeline
//! - [`parsing`] - individual stages (line merging, field extraction,
//!   tone tags, interpolation, date and time normalization)
//! - [`message`] - [`Message`] and [`Attachment`](message::Attachment)
//! - [`tone`] - the [`Tone`](tone::Tone) vocabulary
//! - [`config`] - [`ParseOptions`](config::ParseOptions), [`OutputConfig`](config::OutputConfig)
//! - [`output`] / [`format`] - CSV, JSON and JSONL writers
//! - [`error`] - [`TonalchatError`], [`Result`]

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod message;
pub mod output;
pub mod parser;
pub mod parsing;
pub mod tone;

pub use error::{Result, TonalchatError};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use tonalchat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;
    pub use crate::config::{OutputConfig, ParseOptions};
    pub use crate::error::{Result, TonalchatError};
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
    pub use crate::message::{Attachment, SYSTEM_AUTHOR};
    pub use crate::parser::{ChatParser, parse_str};
    pub use crate::tone::Tone;

    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, to_jsonl, write_json, write_jsonl};
}
