//! Field extraction and timestamp decomposition.

use crate::error::{Result, TonalchatError};
use crate::message::SYSTEM_AUTHOR;
use crate::tone::Tone;

use super::lines::RawLine;
use super::patterns::{DATE_TIME, MESSAGE, SYSTEM, TIME_DATE};

/// Fields captured from one logical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    /// Raw date and time as written, e.g. `"20.06.19, 15:58:53"`.
    ///
    /// Empty when the line had no timestamp prefix.
    pub timestamp_span: String,
    /// Author name, or `"System"` for system lines.
    pub author: String,
    /// Message text.
    pub body: String,
    /// Tone tag, filled in by [`apply_tone`](super::annotations::apply_tone).
    pub tone: Option<Tone>,
}

impl ExtractedFields {
    pub fn new(
        timestamp_span: impl Into<String>,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp_span: timestamp_span.into(),
            author: author.into(),
            body: body.into(),
            tone: None,
        }
    }
}

/// Re-applies the classifying pattern to a logical line.
///
/// `index` identifies the line in error reports. A line that its own
/// classifier accepted but its extractor rejects is an internal fault.
pub fn extract_fields(index: usize, line: &RawLine) -> Result<ExtractedFields> {
    if line.is_system {
        let caps = SYSTEM
            .captures(&line.text)
            .ok_or_else(|| TonalchatError::classification_mismatch(index, "system"))?;

        Ok(ExtractedFields::new(&caps[1], SYSTEM_AUTHOR, &caps[2]))
    } else {
        let caps = MESSAGE
            .captures(&line.text)
            .ok_or_else(|| TonalchatError::classification_mismatch(index, "message"))?;

        Ok(ExtractedFields::new(&caps[1], &caps[2], &caps[3]))
    }
}

/// Which half of a timestamp span comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `20.06.19, 15:58:53`
    DateTime,
    /// `15:58:53, 20.06.19`
    TimeDate,
}

/// A timestamp span split into its raw parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecomposedTimestamp {
    /// Three numeric components in export order, e.g. `"20.06.19"`.
    pub raw_date: String,
    /// Time as written, e.g. `"3:58:53"`.
    pub raw_time: String,
    /// 12-hour clock marker as written, e.g. `"PM"` or `"p.m."`.
    pub ampm: Option<String>,
    /// Layout the span was recognized as.
    pub layout: Layout,
}

/// Splits a timestamp span into date, time and AM/PM marker.
///
/// The date-time layout is tried first, then time-date.
///
/// # Example
///
/// ```rust
/// use tonalchat::parsing::fields::{Layout, decompose_timestamp};
///
/// let ts = decompose_timestamp("6/20/19, 3:58:53 PM").unwrap();
/// assert_eq!(ts.raw_date, "6/20/19");
/// assert_eq!(ts.raw_time, "3:58:53");
/// assert_eq!(ts.ampm.as_deref(), Some("PM"));
/// assert_eq!(ts.layout, Layout::DateTime);
/// ```
pub fn decompose_timestamp(span: &str) -> Result<DecomposedTimestamp> {
    let marker = |raw: &str| {
        let raw = raw.trim();
        (!raw.is_empty()).then(|| raw.to_string())
    };

    if let Some(caps) = DATE_TIME.captures(span) {
        return Ok(DecomposedTimestamp {
            raw_date: caps[1].to_string(),
            raw_time: caps[2].to_string(),
            ampm: marker(&caps[3]),
            layout: Layout::DateTime,
        });
    }

    if let Some(caps) = TIME_DATE.captures(span) {
        return Ok(DecomposedTimestamp {
            raw_date: caps[3].to_string(),
            raw_time: caps[1].to_string(),
            ampm: marker(&caps[2]),
            layout: Layout::TimeDate,
        });
    }

    Err(TonalchatError::unrecognized_timestamp(span))
}
