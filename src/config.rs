//! Configuration types for parsing and output.
//!
//! Configuration is passed at call time; nothing here is global.
//!
//! # Example
//!
//! ```rust
//! use tonalchat::config::ParseOptions;
//! use tonalchat::parser::ChatParser;
//!
//! let options = ParseOptions::new()
//!     .with_days_first(true)
//!     .with_parse_attachments(true);
//!
//! let parser = ChatParser::with_config(options);
//! ```

use serde::{Deserialize, Serialize};

/// Options for parsing a chat export.
///
/// # Example
///
/// ```rust
/// use tonalchat::config::ParseOptions;
///
/// let options = ParseOptions::default();
/// assert_eq!(options.days_first, None);
/// assert!(!options.parse_attachments);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Whether dates start with the day (`true`) or the month (`false`).
    ///
    /// `None` lets the parser infer the order from the whole export. A
    /// supplied value is never overridden.
    #[serde(default)]
    pub days_first: Option<bool>,

    /// Detect attachment references in message bodies (default: false).
    #[serde(default)]
    pub parse_attachments: bool,
}

impl ParseOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces the date component order.
    #[must_use]
    pub fn with_days_first(mut self, days_first: bool) -> Self {
        self.days_first = Some(days_first);
        self
    }

    /// Enables or disables attachment detection.
    #[must_use]
    pub fn with_parse_attachments(mut self, enabled: bool) -> Self {
        self.parse_attachments = enabled;
        self
    }
}

/// Controls which optional columns the output writers emit.
///
/// Author and body are always written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Include timestamps in output
    pub include_timestamps: bool,
    /// Include tone codes in output
    pub include_tones: bool,
    /// Include attachment file names in output
    pub include_attachments: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables every optional column.
    pub fn all() -> Self {
        Self {
            include_timestamps: true,
            include_tones: true,
            include_attachments: true,
        }
    }

    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamps = true;
        self
    }

    #[must_use]
    pub fn with_tones(mut self) -> Self {
        self.include_tones = true;
        self
    }

    #[must_use]
    pub fn with_attachments(mut self) -> Self {
        self.include_attachments = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_default() {
        let options = ParseOptions::new();
        assert_eq!(options.days_first, None);
        assert!(!options.parse_attachments);
    }

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .with_days_first(false)
            .with_parse_attachments(true);
        assert_eq!(options.days_first, Some(false));
        assert!(options.parse_attachments);
    }

    #[test]
    fn test_parse_options_deserialize_partial() {
        let options: ParseOptions = serde_json::from_str(r#"{"parse_attachments":true}"#).unwrap();
        assert_eq!(options.days_first, None);
        assert!(options.parse_attachments);
    }

    #[test]
    fn test_output_config_builders() {
        let config = OutputConfig::new().with_timestamps().with_tones();
        assert!(config.include_timestamps);
        assert!(config.include_tones);
        assert!(!config.include_attachments);
        assert_eq!(OutputConfig::all(), config.with_attachments());
    }
}
