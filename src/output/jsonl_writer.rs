//! JSON Lines output writer.
//!
//! One JSON object per line, no enclosing array. Each line can be
//! processed on its own, which suits line-oriented ingestion pipelines.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::Message;
use crate::config::OutputConfig;
use crate::error::Result;

use super::json_writer::OutputRecord;

/// Writes messages to a JSONL file.
///
/// # Format
/// ```text
/// {"author":"John","body":"Hey"}
/// {"author":"Emily","body":"Hi","tone":"pos"}
/// ```
pub fn write_jsonl(messages: &[Message], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_lines(messages, BufWriter::new(file), config)
}

/// Converts messages to a JSONL string.
pub fn to_jsonl(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(messages, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(messages: &[Message], mut writer: W, config: &OutputConfig) -> Result<()> {
    for msg in messages {
        let line = serde_json::to_string(&OutputRecord::from_message(msg, config))?;
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}
