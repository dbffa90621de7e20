//! JSON output writer.

use std::fs::File;
use std::io::Write;

use serde::Serialize;

use crate::Message;
use crate::config::OutputConfig;
use crate::error::Result;

use super::TIMESTAMP_FORMAT;

/// Output shape of one message.
/// Only includes the optional fields enabled in `OutputConfig`.
#[derive(Serialize)]
pub(super) struct OutputRecord<'a> {
    author: &'a str,
    body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tone: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachment: Option<&'a str>,
}

impl<'a> OutputRecord<'a> {
    pub(super) fn from_message(msg: &'a Message, config: &OutputConfig) -> Self {
        Self {
            author: &msg.author,
            body: &msg.body,
            timestamp: config
                .include_timestamps
                .then(|| msg.timestamp.format(TIMESTAMP_FORMAT).to_string()),
            tone: if config.include_tones {
                msg.tone.map(|t| t.code())
            } else {
                None
            },
            attachment: if config.include_attachments {
                msg.attachment.as_ref().map(|a| a.file_name.as_str())
            } else {
                None
            },
        }
    }
}

/// Writes messages to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"author": "John", "body": "Hey"},
///   {"author": "Emily", "body": "Hi", "tone": "pos"}
/// ]
/// ```
pub fn write_json(messages: &[Message], output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_json(messages, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts messages to a pretty-printed JSON array.
pub fn to_json(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let records: Vec<OutputRecord<'_>> = messages
        .iter()
        .map(|msg| OutputRecord::from_message(msg, config))
        .collect();

    Ok(serde_json::to_string_pretty(&records)?)
}
