//! Command-line interface definition using clap.
//!
//! - [`Args`] - CLI argument structure
//! - [`OutputFormat`] - `--format` values, convertible into
//!   [`format::OutputFormat`](crate::format::OutputFormat)
//!
//! ```rust
//! use clap::Parser;
//! use tonalchat::cli::Args;
//!
//! let args = Args::parse_from(["tonalchat", "chat.txt", "--months-first", "-t"]);
//! assert_eq!(args.parse_options().days_first, Some(false));
//! assert!(args.output_config().include_timestamps);
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{OutputConfig, ParseOptions};

/// Default output path; its extension follows `--format`.
pub const DEFAULT_OUTPUT: &str = "chat.csv";

/// Turn plain-text chat exports into structured records with timestamps,
/// authors and tone tags.
#[derive(Parser, Debug, Clone)]
#[command(name = "tonalchat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    tonalchat _chat.txt
    tonalchat _chat.txt -o messages.json -f json -t --tones
    tonalchat export.txt --months-first --attachments -f jsonl -o -")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: String,

    /// Path to output file, or `-` for stdout
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Read dates as day/month (skips day-order detection)
    #[arg(long, conflicts_with = "months_first")]
    pub days_first: bool,

    /// Read dates as month/day (skips day-order detection)
    #[arg(long)]
    pub months_first: bool,

    /// Detect attachment references in message bodies
    #[arg(short = 'a', long)]
    pub attachments: bool,

    /// Include timestamps in output
    #[arg(short = 't', long)]
    pub timestamps: bool,

    /// Include tone codes in output
    #[arg(long)]
    pub tones: bool,

    /// Log parser decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parser options derived from the flags.
    pub fn parse_options(&self) -> ParseOptions {
        let mut options = ParseOptions::new().with_parse_attachments(self.attachments);
        if self.days_first {
            options = options.with_days_first(true);
        } else if self.months_first {
            options = options.with_days_first(false);
        }
        options
    }

    /// Writer columns derived from the flags.
    pub fn output_config(&self) -> OutputConfig {
        let mut config = OutputConfig::new();
        if self.timestamps {
            config = config.with_timestamps();
        }
        if self.tones {
            config = config.with_tones();
        }
        if self.attachments {
            config = config.with_attachments();
        }
        config
    }

    /// Output path with the extension matching `--format` when the default
    /// path is in use.
    pub fn output_path(&self) -> String {
        if self.output != DEFAULT_OUTPUT {
            return self.output.clone();
        }
        let format: crate::format::OutputFormat = self.format.into();
        format!("chat.{}", format.extension())
    }

    /// Whether records go to stdout instead of a file.
    pub fn writes_to_stdout(&self) -> bool {
        self.output == "-"
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,
    /// JSON array of messages
    Json,
    /// JSON Lines, one object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["tonalchat", "chat.txt"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let args = args(&[]);
        assert_eq!(args.format, OutputFormat::Csv);
        assert_eq!(args.output_path(), "chat.csv");
        assert_eq!(args.parse_options(), ParseOptions::default());
        assert_eq!(args.output_config(), OutputConfig::new());
        assert!(!args.writes_to_stdout());
    }

    #[test]
    fn test_day_order_flags() {
        assert_eq!(args(&["--days-first"]).parse_options().days_first, Some(true));
        assert_eq!(args(&["--months-first"]).parse_options().days_first, Some(false));
        assert!(Args::try_parse_from(["tonalchat", "x.txt", "--days-first", "--months-first"]).is_err());
    }

    #[test]
    fn test_output_extension_follows_format() {
        assert_eq!(args(&["-f", "jsonl"]).output_path(), "chat.jsonl");
        assert_eq!(args(&["-f", "json", "-o", "out.txt"]).output_path(), "out.txt");
        assert!(args(&["-o", "-"]).writes_to_stdout());
    }

    #[test]
    fn test_attachments_flag_enables_parsing_and_column() {
        let args = args(&["--attachments", "--tones"]);
        assert!(args.parse_options().parse_attachments);
        assert!(args.output_config().include_attachments);
        assert!(args.output_config().include_tones);
    }

    #[test]
    fn test_format_conversion() {
        let lib: crate::format::OutputFormat = OutputFormat::Jsonl.into();
        assert_eq!(lib, crate::format::OutputFormat::Jsonl);
    }
}
