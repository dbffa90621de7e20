//! Output format writers.
//!
//! - [`write_csv`] / [`to_csv`] - semicolon-delimited CSV - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - pretty JSON array - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one JSON object per line - requires `json-output` feature
//!
//! Author and body are always written. Timestamp, tone and attachment
//! columns are switched on through [`OutputConfig`](crate::config::OutputConfig).
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> tonalchat::Result<()> {
//! use tonalchat::config::OutputConfig;
//! use tonalchat::output::{to_csv, write_json};
//! use tonalchat::parser::ChatParser;
//!
//! let messages = ChatParser::new().parse_str("[20.06.19, 15:58:53] John: Hey /gen")?;
//! let config = OutputConfig::new().with_timestamps().with_tones();
//!
//! write_json(&messages, "chat.json", &config)?;
//! let csv = to_csv(&messages, &config)?;
//! assert!(csv.contains("2019-06-20T15:58:53;John;Hey;gen"));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

/// Timestamp layout used by every writer. No zone suffix: exports carry
/// local wall-clock time only.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
