//! Date normalization and day/month order detection.
//!
//! A raw date such as `20.06.19`, `6/20/2019` or `2019-06-20` is three numeric
//! components whose meaning depends on the locale that produced the export.
//! The components are first put in export order with the year last
//! ([`order_date_components`]). Whether the remaining two are `day, month` or
//! `month, day` is then decided once for the whole export ([`infer_day_order`]).

use std::collections::BTreeSet;
use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use super::time::ClockTime;

/// Century added to years written with fewer than four digits.
pub const CENTURY_PIVOT: i32 = 2000;

/// Order of the day and month components within an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayOrder {
    /// `DD/MM/YYYY`
    #[default]
    DayFirst,
    /// `MM/DD/YYYY`
    MonthFirst,
}

impl DayOrder {
    pub fn from_days_first(days_first: bool) -> Self {
        if days_first {
            DayOrder::DayFirst
        } else {
            DayOrder::MonthFirst
        }
    }
}

impl fmt::Display for DayOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayOrder::DayFirst => write!(f, "day-first"),
            DayOrder::MonthFirst => write!(f, "month-first"),
        }
    }
}

/// Splits a raw date into its three components and moves the year last.
///
/// The longest component is taken to be the year. When the last component is
/// (one of) the longest, export order is kept. Otherwise the longest one is
/// moved to the end and the other two keep their relative order, so
/// `2019-06-20` becomes `["06", "20", "2019"]`.
///
/// Returns `None` unless there are exactly three non-empty components.
pub fn order_date_components(raw: &str) -> Option<[&str; 3]> {
    let mut parts = raw.split(['/', '.', '-']).map(str::trim);
    let (a, b, c) = (parts.next()?, parts.next()?, parts.next()?);

    if parts.next().is_some() || [a, b, c].iter().any(|p| p.is_empty()) {
        return None;
    }

    let longest = a.len().max(b.len()).max(c.len());
    if c.len() == longest {
        Some([a, b, c])
    } else if b.len() == longest {
        Some([a, c, b])
    } else {
        Some([b, c, a])
    }
}

/// Decides the day/month order from the numeric components of every
/// distinct date in an export.
///
/// A first component above 12 cannot be a month, so it proves day-first. A
/// second component above 12 proves month-first. Without evidence either
/// way the result is day-first.
pub fn days_before_months(numeric_dates: &[[u32; 3]]) -> DayOrder {
    if numeric_dates.iter().any(|date| date[0] > 12) {
        return DayOrder::DayFirst;
    }

    if numeric_dates.iter().any(|date| date[1] > 12) {
        return DayOrder::MonthFirst;
    }

    DayOrder::DayFirst
}

/// Runs [`days_before_months`] over the distinct raw dates of an export.
///
/// # Example
///
/// ```rust
/// use tonalchat::parsing::date::{DayOrder, infer_day_order};
///
/// assert_eq!(infer_day_order(["01/02/2020", "13/02/2020"]), DayOrder::DayFirst);
/// assert_eq!(infer_day_order(["02/01/2020", "02/13/2020"]), DayOrder::MonthFirst);
/// assert_eq!(infer_day_order(["01/02/2020"]), DayOrder::DayFirst);
/// ```
pub fn infer_day_order<'a, I>(raw_dates: I) -> DayOrder
where
    I: IntoIterator<Item = &'a str>,
{
    let distinct: BTreeSet<&str> = raw_dates.into_iter().collect();

    let numeric: Vec<[u32; 3]> = distinct
        .into_iter()
        .filter_map(order_date_components)
        .filter_map(|[a, b, c]| Some([a.parse().ok()?, b.parse().ok()?, c.parse().ok()?]))
        .collect();

    days_before_months(&numeric)
}

/// A normalized calendar date.
///
/// Month and day are kept as written; they are not checked against the
/// calendar here (see [`assemble_timestamp`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Normalizes raw year, month and day strings.
///
/// Years written with fewer than four digits are offset by [`CENTURY_PIVOT`],
/// so `"19"` is 2019 and `"9"` is 2009.
pub fn normalize_date(year: &str, month: &str, day: &str) -> Option<CalendarDate> {
    let digits = year.len();
    let mut year: i32 = year.parse().ok()?;
    if digits < 4 {
        year += CENTURY_PIVOT;
    }

    Some(CalendarDate {
        year,
        month: month.parse().ok()?,
        day: day.parse().ok()?,
    })
}

/// Orders, assigns and normalizes a raw date under the given day order.
///
/// # Example
///
/// ```rust
/// use tonalchat::parsing::date::{DayOrder, resolve_date};
///
/// let date = resolve_date("20.06.19", DayOrder::DayFirst).unwrap();
/// assert_eq!(date.to_string(), "2019-06-20");
///
/// let date = resolve_date("6/20/2019", DayOrder::MonthFirst).unwrap();
/// assert_eq!(date.to_string(), "2019-06-20");
/// ```
pub fn resolve_date(raw: &str, order: DayOrder) -> Option<CalendarDate> {
    let [first, second, year] = order_date_components(raw)?;
    let (day, month) = match order {
        DayOrder::DayFirst => (first, second),
        DayOrder::MonthFirst => (second, first),
    };
    normalize_date(year, month, day)
}

/// Builds a concrete point in time from a normalized date and time.
///
/// Out-of-range fields carry into the next larger unit instead of being
/// rejected: month 13 is January of the following year, `31.04.` is the first
/// of May, hour 24 is midnight of the next day. Returns `None` only when the
/// result falls outside chrono's representable range.
pub fn assemble_timestamp(date: CalendarDate, time: ClockTime) -> Option<NaiveDateTime> {
    let total_months = i64::from(date.year) * 12 + i64::from(date.month) - 1;
    let year = i32::try_from(total_months.div_euclid(12)).ok()?;
    let month = u32::try_from(total_months.rem_euclid(12) + 1).ok()?;

    let start_of_month = NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?;
    let offset = Duration::days(i64::from(date.day) - 1)
        + Duration::hours(i64::from(time.hour))
        + Duration::minutes(i64::from(time.minute))
        + Duration::seconds(i64::from(time.second));

    start_of_month.checked_add_signed(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_order_keeps_year_last() {
        assert_eq!(order_date_components("20.06.19"), Some(["20", "06", "19"]));
        assert_eq!(order_date_components("6/20/2019"), Some(["6", "20", "2019"]));
        assert_eq!(order_date_components("20. 06. 19"), Some(["20", "06", "19"]));
    }

    #[test]
    fn test_order_moves_leading_year() {
        assert_eq!(order_date_components("2019-06-20"), Some(["06", "20", "2019"]));
    }

    #[test]
    fn test_order_moves_middle_year() {
        assert_eq!(order_date_components("6/2019/20"), Some(["6", "20", "2019"]));
    }

    #[test]
    fn test_order_rejects_malformed() {
        assert_eq!(order_date_components("20.06"), None);
        assert_eq!(order_date_components("1.2.3.4"), None);
        assert_eq!(order_date_components("1..3"), None);
    }

    #[test]
    fn test_heuristic_first_above_12() {
        assert_eq!(
            days_before_months(&[[1, 2, 2020], [13, 2, 2020]]),
            DayOrder::DayFirst
        );
    }

    #[test]
    fn test_heuristic_second_above_12() {
        assert_eq!(
            days_before_months(&[[2, 1, 2020], [2, 13, 2020]]),
            DayOrder::MonthFirst
        );
    }

    #[test]
    fn test_heuristic_first_evidence_wins() {
        assert_eq!(
            days_before_months(&[[13, 1, 2020], [1, 13, 2020]]),
            DayOrder::DayFirst
        );
    }

    #[test]
    fn test_heuristic_ambiguous_defaults_to_day_first() {
        assert_eq!(days_before_months(&[[1, 2, 2020], [3, 4, 2020]]), DayOrder::DayFirst);
        assert_eq!(days_before_months(&[]), DayOrder::DayFirst);
    }

    #[test]
    fn test_infer_iso_dates_month_first() {
        assert_eq!(
            infer_day_order(["2020-01-13", "2020-01-14"]),
            DayOrder::MonthFirst
        );
    }

    #[test]
    fn test_normalize_date_pivot() {
        let date = normalize_date("19", "6", "2").unwrap();
        assert_eq!(date.to_string(), "2019-06-02");
        assert_eq!(normalize_date("9", "1", "1").unwrap().year, 2009);
        assert_eq!(normalize_date("1999", "1", "1").unwrap().year, 1999);
    }

    #[test]
    fn test_resolve_date_both_orders() {
        let day_first = resolve_date("03/04/2020", DayOrder::DayFirst).unwrap();
        let month_first = resolve_date("03/04/2020", DayOrder::MonthFirst).unwrap();
        assert_eq!((day_first.month, day_first.day), (4, 3));
        assert_eq!((month_first.month, month_first.day), (3, 4));
    }

    #[test]
    fn test_assemble_regular() {
        let date = CalendarDate { year: 2019, month: 6, day: 20 };
        assert_eq!(
            assemble_timestamp(date, ClockTime::new(15, 58, 53)),
            Some(ymd_hms(2019, 6, 20, 15, 58, 53))
        );
    }

    #[test]
    fn test_assemble_carries_overflow() {
        let date = CalendarDate { year: 2020, month: 4, day: 31 };
        assert_eq!(
            assemble_timestamp(date, ClockTime::new(0, 0, 0)),
            Some(ymd_hms(2020, 5, 1, 0, 0, 0))
        );

        let date = CalendarDate { year: 2020, month: 13, day: 1 };
        assert_eq!(
            assemble_timestamp(date, ClockTime::new(24, 0, 0)),
            Some(ymd_hms(2021, 1, 2, 0, 0, 0))
        );

        let date = CalendarDate { year: 2020, month: 1, day: 0 };
        assert_eq!(
            assemble_timestamp(date, ClockTime::new(12, 0, 0)),
            Some(ymd_hms(2019, 12, 31, 12, 0, 0))
        );
    }

    #[test]
    fn test_day_order_conversions() {
        assert_eq!(DayOrder::from_days_first(true), DayOrder::DayFirst);
        assert_eq!(DayOrder::from_days_first(false), DayOrder::MonthFirst);
        assert_eq!(DayOrder::MonthFirst.to_string(), "month-first");
        assert_eq!(DayOrder::default().to_string(), "day-first");
    }
}
