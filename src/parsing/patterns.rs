//! Regular expressions shared by the line classifier and the extractors.
//!
//! The classifier and the extractors must agree on what a message line and a
//! system line look like, so both sides use the statics defined here.
//!
//! Supported prefixes (all optionally preceded by LRM/RLM marks):
//! - `[20.06.19, 15:58:53] John: Hey`
//! - `20/06/2019, 15:58 - John: Hey`
//! - `[6/20/19, 3:58:53 PM] John: Hey`
//! - `[15:58, 20.06.2019] John: Hey`

use std::sync::LazyLock;

use regex::Regex;

use crate::tone::Tone;

/// Any run of left-to-right / right-to-left marks.
const TEXT_DIRECTION: &str = r"[\x{200E}\x{200F}]*";
/// Three numeric components joined by `/`, `.` or `-`, optionally followed by a space.
const DATE: &str = r"[0-9]{1,4}[/.\-] ?[0-9]{1,4}[/.\-] ?[0-9]{1,4}";
/// Comma or dot, a space, then at most two short connecting words ("um", "à").
const DATE_TIME_SEPARATOR: &str = r"[,.]? (?:\p{L}{1,5}\.? ){0,2}";
const TIME: &str = r"[0-9]{1,2}[.:][0-9]{1,2}(?:[.:][0-9]{1,2})?";
const AM_PM: &str = r"[ap]\.?\s?m\.?";
const MESSAGE_SEPARATOR: &str = r"(?: -|:)? ?";
const NAME: &str = r"(.+?):";
const TEXT: &str = r"((?s:.*))";

fn date_or_time() -> String {
    format!(
        "(?:{DATE}{DATE_TIME_SEPARATOR}{TIME}(?: {AM_PM})?)|(?:{TIME}(?: {AM_PM})?{DATE_TIME_SEPARATOR}{DATE})"
    )
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

/// A user message: optional timestamp, separator, `Name: ` and text.
///
/// Captures: 1 = timestamp span (possibly empty), 2 = author, 3 = body.
pub static MESSAGE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)^{TEXT_DIRECTION}\[?((?:{})?)\]?{MESSAGE_SEPARATOR}{NAME} {TEXT}",
        date_or_time()
    ))
});

/// A system event: timestamp, separator and free text.
///
/// Unlike [`MESSAGE`] the timestamp is mandatory, otherwise every line would
/// qualify and no line could ever continue the previous one.
///
/// Captures: 1 = timestamp span, 2 = body.
pub static SYSTEM: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)^{TEXT_DIRECTION}\[?((?:{}))\]?{MESSAGE_SEPARATOR}{TEXT}",
        date_or_time()
    ))
});

/// Date before time. Captures: 1 = date, 2 = time, 3 = AM/PM marker (possibly empty).
pub static DATE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)^({DATE}){DATE_TIME_SEPARATOR}({TIME})((?: {AM_PM})?)$"
    ))
});

/// Time before date. Captures: 1 = time, 2 = AM/PM marker (possibly empty), 3 = date.
pub static TIME_DATE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)^({TIME})((?: {AM_PM})?){DATE_TIME_SEPARATOR}({DATE})$"
    ))
});

/// Text followed by whitespace and a known tone tag at the very end.
///
/// Captures: 1 = text without the tag, 2 = tone code.
pub static TONE: LazyLock<Regex> = LazyLock::new(|| {
    let mut codes: Vec<&str> = Tone::ALL.iter().map(|t| t.code()).collect();
    codes.sort_by_key(|code| std::cmp::Reverse(code.len()));
    let alternatives = codes
        .iter()
        .map(|code| regex::escape(code))
        .collect::<Vec<_>>()
        .join("|");
    compile(&format!(r"(?s)^(.*?)\s+/({alternatives})\s*$"))
});

/// `<attached: file>` style, or a bare `IMG-0001.jpg (caption)` reference.
///
/// Captures: 1 = file of the angle-bracket form, 2 = file of the bare form.
pub static ATTACHMENT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"<.+:(.+)>|([A-Z0-9-]+\.\w+)\s\(.+\)"));
