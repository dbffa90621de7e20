//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::Message;
use crate::config::OutputConfig;
use crate::error::Result;

use super::TIMESTAMP_FORMAT;

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `[Timestamp;]Author;Body[;Tone][;Attachment]`
/// - Messages without a tone or attachment get an empty cell
/// - Encoding: UTF-8
pub fn write_csv(messages: &[Message], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(messages, file, config)
}

/// Converts messages to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(messages, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(messages: &[Message], sink: W, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(build_header(config))?;
    for msg in messages {
        writer.write_record(build_record(msg, config))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();

    if config.include_timestamps {
        header.push("Timestamp");
    }

    header.push("Author");
    header.push("Body");

    if config.include_tones {
        header.push("Tone");
    }
    if config.include_attachments {
        header.push("Attachment");
    }

    header
}

fn build_record(msg: &Message, config: &OutputConfig) -> Vec<String> {
    let mut record = Vec::new();

    if config.include_timestamps {
        record.push(msg.timestamp.format(TIMESTAMP_FORMAT).to_string());
    }

    record.push(msg.author.clone());
    record.push(msg.body.clone());

    if config.include_tones {
        record.push(msg.tone.map(|t| t.code().to_string()).unwrap_or_default());
    }
    if config.include_attachments {
        record.push(
            msg.attachment
                .as_ref()
                .map(|a| a.file_name.clone())
                .unwrap_or_default(),
        );
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Attachment;
    use crate::tone::Tone;
    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    fn msg(author: &str, body: &str) -> Message {
        let ts = NaiveDate::from_ymd_opt(2019, 6, 20)
            .unwrap()
            .and_hms_opt(15, 58, 53)
            .unwrap();
        Message::new(author, body, ts)
    }

    #[test]
    fn test_write_csv_basic() {
        let messages = vec![msg("John", "Hey"), msg("Loris", "Hi there")];

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_csv(&messages, path, &OutputConfig::new()).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("Author;Body\n"));
        assert!(content.contains("John;Hey\n"));
        assert!(content.contains("Loris;Hi there\n"));
    }

    #[test]
    fn test_csv_all_columns() {
        let messages = vec![
            msg("Emily", "look").with_attachment(Attachment::new("IMG-001.jpg")),
            msg("John", "cool").with_tone(Tone::Genuine),
        ];

        let csv = to_csv(&messages, &OutputConfig::all()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Timestamp;Author;Body;Tone;Attachment");
        assert_eq!(lines[1], "2019-06-20T15:58:53;Emily;look;;IMG-001.jpg");
        assert_eq!(lines[2], "2019-06-20T15:58:53;John;cool;gen;");
    }

    #[test]
    fn test_csv_multiline_body_is_quoted() {
        let csv = to_csv(&[msg("Emily", "Come on...\nreally")], &OutputConfig::new()).unwrap();
        assert!(csv.contains("Emily;\"Come on...\nreally\""));
    }
}
