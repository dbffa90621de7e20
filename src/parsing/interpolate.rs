//! Backward interpolation of missing timestamps.
//!
//! A logical line can end up without a timestamp span when an author line
//! appears without its prefix. Such a line is understood to precede the next
//! correctly timestamped line, so it borrows that line's span.

use chrono::NaiveDateTime;

use super::fields::ExtractedFields;

/// Where a message's timestamp comes from after interpolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampSource {
    /// A raw span, either the line's own or borrowed from a later line.
    Span(String),
    /// No later line had a span; the parse-time wall clock is used.
    WallClock(NaiveDateTime),
}

/// Fills empty spans from the nearest later line that has one.
///
/// The sequence is folded in reverse, carrying the last seen span. Lines
/// after the final timestamped line fall back to `now`. Order is preserved.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDateTime;
/// use tonalchat::parsing::fields::ExtractedFields;
/// use tonalchat::parsing::interpolate::{TimestampSource, interpolate_timestamps};
///
/// let now = NaiveDateTime::default();
/// let resolved = interpolate_timestamps(
///     vec![
///         ExtractedFields::new("", "PS", "one more thing"),
///         ExtractedFields::new("20.06.19, 16:03:07", "Emily", "ok"),
///     ],
///     now,
/// );
///
/// assert_eq!(resolved[0].1, TimestampSource::Span("20.06.19, 16:03:07".into()));
/// ```
pub fn interpolate_timestamps(
    fields: Vec<ExtractedFields>,
    now: NaiveDateTime,
) -> Vec<(ExtractedFields, TimestampSource)> {
    let capacity = fields.len();

    let (_, mut resolved) = fields.into_iter().rev().fold(
        (TimestampSource::WallClock(now), Vec::with_capacity(capacity)),
        |(last, mut acc), line| {
            let source = if line.timestamp_span.is_empty() {
                last
            } else {
                TimestampSource::Span(line.timestamp_span.clone())
            };
            acc.push((line, source.clone()));
            (source, acc)
        },
    );

    resolved.reverse();
    resolved
}
