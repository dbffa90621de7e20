//! Time-of-day normalization.
//!
//! Exports write times as `15:58`, `15.58.53`, `3:58 PM`, `3:58 p. m.` and so
//! on. Everything is reduced to a 24-hour [`ClockTime`] that displays as a
//! fixed-width `HH:MM:SS`.

use std::fmt;

/// Half of the day named by a 12-hour clock marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Normalizes a raw marker such as `"PM"`, `" p.m."` or `"a. m."`.
    ///
    /// Everything except the letters `a`, `p` and `m` is dropped before the
    /// comparison, case-insensitively.
    pub fn from_marker(raw: &str) -> Option<Self> {
        let letters: String = raw
            .chars()
            .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'p' | 'm'))
            .map(|c| c.to_ascii_uppercase())
            .collect();

        match letters.as_str() {
            "AM" => Some(Meridiem::Am),
            "PM" => Some(Meridiem::Pm),
            _ => None,
        }
    }
}

/// A normalized 24-hour time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Splits `H:MM[:SS]` (colons or dots) into its numeric fields.
///
/// Seconds default to zero. Returns `None` unless there are two or three
/// purely numeric fields.
fn split_time(raw: &str) -> Option<(u32, u32, u32)> {
    let mut fields = raw.trim().split([':', '.']).map(|part| part.parse::<u32>().ok());

    let hour = fields.next()??;
    let minute = fields.next()??;
    let second = match fields.next() {
        Some(second) => second?,
        None => 0,
    };

    if fields.next().is_some() {
        return None;
    }

    Some((hour, minute, second))
}

/// Converts a 12-hour reading to 24 hours.
///
/// `12` becomes `0` first, then PM adds twelve, so `12 AM` is midnight and
/// `12 PM` is noon.
pub fn convert_12_to_24(hour: u32, meridiem: Meridiem) -> u32 {
    let hour = if hour == 12 { 0 } else { hour };
    match meridiem {
        Meridiem::Am => hour,
        Meridiem::Pm => hour + 12,
    }
}

/// Normalizes a raw time and an optional AM/PM marker.
///
/// # Example
///
/// ```rust
/// use tonalchat::parsing::time::normalize_time;
///
/// assert_eq!(normalize_time("3:58", Some(" PM")).unwrap().to_string(), "15:58:00");
/// assert_eq!(normalize_time("12.05.09", Some("a.m.")).unwrap().to_string(), "00:05:09");
/// assert_eq!(normalize_time("7:5", None).unwrap().to_string(), "07:05:00");
/// ```
pub fn normalize_time(raw_time: &str, ampm: Option<&str>) -> Option<ClockTime> {
    let (hour, minute, second) = split_time(raw_time)?;

    let hour = match ampm.and_then(Meridiem::from_marker) {
        Some(meridiem) => convert_12_to_24(hour, meridiem),
        None => hour,
    };

    Some(ClockTime::new(hour, minute, second))
}
