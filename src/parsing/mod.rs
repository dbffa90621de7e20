//! Building blocks of the chat-log parser.
//!
//! Each stage is a pure function over owned data; [`crate::parser`] chains
//! them into the full pipeline:
//!
//! 1. [`lines`]: merge continuation lines, classify message vs system
//! 2. [`fields`]: extract timestamp span, author, body
//! 3. [`annotations`]: strip tone tags, detect attachments
//! 4. [`interpolate`]: fill missing timestamps from later lines
//! 5. [`date`] / [`time`]: normalize once the day order is known

pub mod annotations;
pub mod date;
pub mod fields;
pub mod interpolate;
pub mod lines;
pub mod patterns;
pub mod time;

pub use annotations::{apply_tone, parse_attachment, split_tone};
pub use date::{DayOrder, infer_day_order, resolve_date};
pub use fields::{DecomposedTimestamp, ExtractedFields, Layout, decompose_timestamp, extract_fields};
pub use interpolate::{TimestampSource, interpolate_timestamps};
pub use lines::{RawLine, merge_lines, split_lines};
pub use time::{ClockTime, normalize_time};
