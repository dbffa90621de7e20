//! Tone tags and attachment references embedded in message bodies.

use crate::message::Attachment;
use crate::tone::Tone;

use super::fields::ExtractedFields;
use super::patterns::{ATTACHMENT, TONE};

/// Splits a trailing tone tag off a body.
///
/// The tag must be separated from the text by whitespace and be the last
/// thing in the body (trailing whitespace is allowed). Codes are matched
/// case-sensitively against the closed vocabulary.
///
/// Returns the body without the tag, and the tone.
///
/// # Example
///
/// ```rust
/// use tonalchat::parsing::annotations::split_tone;
/// use tonalchat::tone::Tone;
///
/// assert_eq!(
///     split_tone("Sounds good man, I like it! /pos"),
///     Some(("Sounds good man, I like it!", Tone::Positive))
/// );
/// assert_eq!(split_tone("and/or"), None);
/// ```
pub fn split_tone(body: &str) -> Option<(&str, Tone)> {
    let caps = TONE.captures(body)?;
    let text = caps.get(1)?.as_str();
    let tone = Tone::from_code(caps.get(2)?.as_str())?;
    Some((text, tone))
}

/// Strips a trailing tone tag from the body and records it.
///
/// Bodies without a tag are left untouched.
pub fn apply_tone(mut fields: ExtractedFields) -> ExtractedFields {
    if let Some((text, tone)) = split_tone(&fields.body) {
        fields.body = text.to_string();
        fields.tone = Some(tone);
    }
    fields
}

/// Finds the first attachment reference in a body.
///
/// Recognizes `<attached: 00000012-PHOTO.jpg>` style markers and bare
/// `IMG-20190620-WA0001.jpg (file attached)` references. The file name is
/// trimmed.
///
/// # Example
///
/// ```rust
/// use tonalchat::parsing::annotations::parse_attachment;
///
/// let attachment = parse_attachment("<attached: 00000012-PHOTO.jpg>").unwrap();
/// assert_eq!(attachment.file_name, "00000012-PHOTO.jpg");
/// assert!(parse_attachment("just text").is_none());
/// ```
pub fn parse_attachment(body: &str) -> Option<Attachment> {
    let caps = ATTACHMENT.captures(body)?;
    let file_name = caps.get(1).or_else(|| caps.get(2))?.as_str().trim();
    Some(Attachment::new(file_name))
}
