//! Parsed message records.
//!
//! [`Message`] is the output unit of the parser: one record per logical line
//! of the export, in export order.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use tonalchat::Message;
//! use tonalchat::tone::Tone;
//!
//! let ts = NaiveDate::from_ymd_opt(2019, 6, 20)
//!     .unwrap()
//!     .and_hms_opt(16, 4, 18)
//!     .unwrap();
//!
//! let msg = Message::new("Emily", "Sounds good man, I like it!", ts)
//!     .with_tone(Tone::Positive);
//!
//! assert_eq!(msg.author(), "Emily");
//! assert_eq!(msg.tone_code_or_placeholder(), "pos");
//! assert!(!msg.is_system());
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::tone::Tone;

/// Author assigned to chat-client events (group created, member added, ...).
pub const SYSTEM_AUTHOR: &str = "System";

/// A file referenced by a message.
///
/// Only the name is recorded; the file itself is not part of a text export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// The file name, including the extension.
    pub file_name: String,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

/// A single parsed chat message.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `author` | `String` | Display name, or [`SYSTEM_AUTHOR`] for client events |
/// | `body` | `String` | Text with any trailing tone tag removed; may span lines |
/// | `timestamp` | `NaiveDateTime` | Wall-clock time as written in the export |
/// | `tone` | `Option<Tone>` | Trailing tone tag, if one was present |
/// | `attachment` | `Option<Attachment>` | Referenced file, when attachment parsing is enabled |
///
/// The timestamp carries no time zone: exports record local wall-clock time
/// and it is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the author, or `"System"`.
    pub author: String,

    /// Message text. Continuation lines are joined with `\n`.
    pub body: String,

    /// When the message was sent.
    pub timestamp: NaiveDateTime,

    /// Tone tag stripped from the end of the body.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub tone: Option<Tone>,

    /// Attachment referenced by the body.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub attachment: Option<Attachment>,
}

impl Message {
    /// Creates a message without tone or attachment.
    pub fn new(author: impl Into<String>, body: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
            timestamp,
            tone: None,
            attachment: None,
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    #[must_use]
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn tone(&self) -> Option<Tone> {
        self.tone
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    /// Returns `true` for chat-client events rather than user messages.
    pub fn is_system(&self) -> bool {
        self.author == SYSTEM_AUTHOR
    }

    /// The tone code, or [`Tone::PLACEHOLDER`] when no tone is set.
    pub fn tone_code_or_placeholder(&self) -> &'static str {
        self.tone.map_or(Tone::PLACEHOLDER, Tone::code)
    }
}
