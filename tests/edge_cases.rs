//! Edge case tests for tonalchat
//!
//! Boundary conditions of real exports: odd line endings, stray lines,
//! locale-specific timestamps and tone tags in unusual places.

use chrono::{NaiveDate, NaiveDateTime};

use tonalchat::Message;
use tonalchat::parser::ChatParser;
use tonalchat::tone::Tone;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

fn parse(text: &str) -> Vec<Message> {
    ChatParser::new()
        .parse_str_at(text, at(2026, 10, 19, 12, 0))
        .unwrap()
}

// =========================================================================
// Empty and malformed input
// =========================================================================

#[test]
fn test_empty_input() {
    assert!(parse("").is_empty());
    assert!(parse("\n").is_empty());
}

#[test]
fn test_only_unclassifiable_lines() {
    assert!(parse("hello\nthis is not an export\n\n").is_empty());
}

#[test]
fn test_leading_garbage_dropped() {
    let messages = parse("exported by some tool\n[20.06.19, 15:58:53] John: Hey");

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].body, "Hey");
}

// =========================================================================
// Line endings
// =========================================================================

#[test]
fn test_line_endings_equivalent() {
    let lf = parse("[20.06.19, 16:03:07] Emily: Come on...\ndon't be so mysterious!\n[20.06.19, 16:04:18] John: ok");
    let crlf = parse("[20.06.19, 16:03:07] Emily: Come on...\r\ndon't be so mysterious!\r\n[20.06.19, 16:04:18] John: ok");
    let cr = parse("[20.06.19, 16:03:07] Emily: Come on...\rdon't be so mysterious!\r[20.06.19, 16:04:18] John: ok");

    assert_eq!(lf.len(), 2);
    assert_eq!(lf, crlf);
    assert_eq!(lf, cr);
}

#[test]
fn test_trailing_newline_not_appended() {
    let messages = parse("[20.06.19, 15:58:53] John: Hey\n");
    assert_eq!(messages[0].body, "Hey");
}

#[test]
fn test_blank_line_inside_message_kept() {
    let messages = parse("[20.06.19, 15:58:53] John: first\n\nsecond");
    assert_eq!(messages[0].body, "first\n\nsecond");
}

// =========================================================================
// Prefix variants
// =========================================================================

#[test]
fn test_direction_marks_before_timestamp() {
    let messages = parse("\u{200e}\u{200f}[20.06.19, 15:58:53] John: Hey");

    assert_eq!(messages[0].author, "John");
    assert_eq!(messages[0].timestamp, at(2019, 6, 20, 15, 58) + chrono::Duration::seconds(53));
}

#[test]
fn test_lowercase_dotted_meridiem() {
    let messages = parse("[6/20/19, 3:58 p.m.] John: Hey");
    assert_eq!(messages[0].timestamp, at(2019, 6, 20, 15, 58));
}

#[test]
fn test_connecting_word_between_date_and_time() {
    let messages = parse("[20.06.19 um 15:58] John: Hallo");
    assert_eq!(messages[0].timestamp, at(2019, 6, 20, 15, 58));
}

#[test]
fn test_date_led_continuation_stays_in_body() {
    let messages = parse(
        "[20.06.19, 16:00:00] Emily: agenda\n12.05.2020 - meeting moved to 10:30\nthanks",
    );
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].author, "Emily");
    assert_eq!(
        messages[0].body,
        "agenda\n12.05.2020 - meeting moved to 10:30\nthanks"
    );
    assert_eq!(messages[0].timestamp, at(2019, 6, 20, 16, 0));
}

#[test]
fn test_year_first_date() {
    let messages = parse("2019-06-20, 15:58 - John: Hey");
    assert_eq!(messages[0].timestamp, at(2019, 6, 20, 15, 58));
}

#[test]
fn test_author_with_spaces_and_emoji() {
    let messages = parse("[20.06.19, 15:58:53] Anna 🌸 Müller: Hallo");
    assert_eq!(messages[0].author, "Anna 🌸 Müller");
}

#[test]
fn test_colon_in_body() {
    let messages = parse("[20.06.19, 15:58:53] John: note: bring snacks");

    assert_eq!(messages[0].author, "John");
    assert_eq!(messages[0].body, "note: bring snacks");
}

#[test]
fn test_wrapped_line_shaped_like_a_message() {
    // A wrapped line of the form `Name: text` starts a message of its own and
    // borrows the next timestamp.
    let messages = parse("[20.06.19, 10:00] John: agenda\nRe: the plan\n[20.06.19, 10:05] Emily: ok");

    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].author, "Re");
    assert_eq!(messages[1].timestamp, at(2019, 6, 20, 10, 5));
}

// =========================================================================
// Calendar arithmetic
// =========================================================================

#[test]
fn test_day_overflow_rolls_into_next_month() {
    let messages = parse("[31.04.19, 10:00] John: hi");
    assert_eq!(messages[0].timestamp, at(2019, 5, 1, 10, 0));
}

#[test]
fn test_hour_24_rolls_into_next_day() {
    let messages = parse("[20.06.19, 24:00] John: hi");
    assert_eq!(messages[0].timestamp, at(2019, 6, 21, 0, 0));
}

#[test]
fn test_order_not_sorted_by_timestamp() {
    let messages = parse("[20.06.19, 12:00] John: later\n[20.06.19, 09:00] John: earlier");

    assert_eq!(messages[0].body, "later");
    assert!(messages[0].timestamp > messages[1].timestamp);
}

// =========================================================================
// Tone tags
// =========================================================================

#[test]
fn test_unknown_tone_code_kept_in_body() {
    let messages = parse("[20.06.19, 15:58:53] John: see /xyz");

    assert_eq!(messages[0].body, "see /xyz");
    assert_eq!(messages[0].tone, None);
}

#[test]
fn test_tone_codes_are_case_sensitive() {
    let messages = parse("[20.06.19, 15:58:53] John: great /POS");
    assert_eq!(messages[0].tone, None);
}

#[test]
fn test_tone_only_at_end() {
    let messages = parse("[20.06.19, 15:58:53] John: this /j is fine");

    assert_eq!(messages[0].tone, None);
    assert_eq!(messages[0].body, "this /j is fine");
}

#[test]
fn test_tone_on_multiline_message() {
    let messages = parse("[20.06.19, 15:58:53] John: line one\nline two /srs  ");

    assert_eq!(messages[0].body, "line one\nline two");
    assert_eq!(messages[0].tone, Some(Tone::Serious));
}

#[test]
fn test_tone_on_system_line() {
    let messages = parse("[20.06.19, 15:58:53] Loris changed the subject to party /hyp");

    assert!(messages[0].is_system());
    assert_eq!(messages[0].tone, Some(Tone::Hyperbole));
}
