//! Unified error types for tonalchat.
//!
//! Parsing a chat export is almost entirely infallible: unparseable lines are
//! merged into the previous message, ambiguous dates are resolved by a
//! heuristic and missing timestamps are interpolated. The only parse-time
//! errors are internal-consistency faults, which abort the whole parse.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get a distinct family ([`TonalchatError::is_internal`]) for
//!   invariant violations that indicate a bug rather than bad input

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for tonalchat operations.
///
/// # Example
///
/// ```rust
/// use tonalchat::error::Result;
/// use tonalchat::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, TonalchatError>;

/// The error type for all tonalchat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TonalchatError {
    /// An I/O error occurred while reading an export or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A logical line was classified by one pattern but the extractor for
    /// that pattern rejected it.
    ///
    /// The classifier and the extractor share their patterns, so this means
    /// the two have drifted apart. It is never caused by user input.
    #[error("Internal error: logical line {line} was classified as {pattern} but could not be extracted")]
    ClassificationMismatch {
        /// Zero-based index of the logical line
        line: usize,
        /// Which pattern classified the line ("message" or "system")
        pattern: &'static str,
    },

    /// A captured timestamp span matched neither the date-time nor the
    /// time-date layout.
    #[error("Internal error: timestamp span '{span}' matches no known layout")]
    UnrecognizedTimestamp {
        /// The raw span as captured from the line
        span: String,
    },

    /// The normalized date/time components do not describe a representable
    /// point in time.
    #[error("Timestamp out of range: {year:04}-{month:02}-{day:02} {time}")]
    TimestampOutOfRange {
        /// Normalized four-digit year
        year: i32,
        /// Month as written in the export
        month: u32,
        /// Day as written in the export
        day: u32,
        /// Normalized `HH:MM:SS` time
        time: String,
    },

    /// The requested output format is unknown.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output bytes were not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for TonalchatError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        TonalchatError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl TonalchatError {
    /// Creates a classification mismatch error.
    pub fn classification_mismatch(line: usize, pattern: &'static str) -> Self {
        TonalchatError::ClassificationMismatch { line, pattern }
    }

    /// Creates an unrecognized timestamp error.
    pub fn unrecognized_timestamp(span: impl Into<String>) -> Self {
        TonalchatError::UnrecognizedTimestamp { span: span.into() }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        TonalchatError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, TonalchatError::Io(_))
    }

    /// Returns `true` if this error signals a broken internal invariant
    /// rather than a problem with the input or the environment.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            TonalchatError::ClassificationMismatch { .. }
                | TonalchatError::UnrecognizedTimestamp { .. }
        )
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, TonalchatError::InvalidFormat { .. })
    }
}
