//! Month-bucket date arithmetic.
//!
//! This module provides the calendar-month helpers shared by the tenure
//! and scenario calculations: whole-month differences, month anchors, and
//! month-end boundaries.

use chrono::{Datelike, Months, NaiveDate};

/// Number of whole calendar months between two dates.
///
/// Partial months truncate toward zero: a span of 45 days is 1 month, not
/// 1.5. The result is negative when `end` is before `start`.
///
/// # Examples
///
/// ```
/// use workforce_engine::calculation::months_between;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// assert_eq!(months_between(start, end), 1);
///
/// let full = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
/// assert_eq!(months_between(start, full), 2);
/// ```
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let mut months = (i64::from(end.year()) - i64::from(start.year())) * 12
        + (i64::from(end.month()) - i64::from(start.month()));
    if end.day() < start.day() {
        months -= 1;
    }
    months
}

/// First day of the calendar month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).expect("first of month is always valid")
}

/// Last day of the calendar month containing `date`.
///
/// # Examples
///
/// ```
/// use workforce_engine::calculation::end_of_month;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
/// assert_eq!(end_of_month(date), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let next_month = month_start(date)
        .checked_add_months(Months::new(1))
        .expect("month arithmetic stays in range");
    next_month
        .pred_opt()
        .expect("day before the first of a month is always valid")
}

/// Adds a number of calendar months, clamping the day to the target
/// month's length (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .expect("month arithmetic stays in range")
}

/// First day of the month `index` months after the month containing `now`.
///
/// Index 0 is the month containing `now` itself; this is the anchor for
/// simulation month buckets.
pub fn month_anchor(now: NaiveDate, index: u32) -> NaiveDate {
    add_months(month_start(now), index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_months_between_same_day_of_month() {
        assert_eq!(months_between(date(2025, 1, 15), date(2025, 4, 15)), 3);
    }

    #[test]
    fn test_months_between_truncates_partial_month() {
        // 45 days is one whole month, not one and a half
        assert_eq!(months_between(date(2025, 1, 1), date(2025, 2, 15)), 1);
    }

    #[test]
    fn test_months_between_day_before_anniversary() {
        assert_eq!(months_between(date(2025, 1, 15), date(2025, 2, 14)), 0);
    }

    #[test]
    fn test_months_between_same_date_is_zero() {
        assert_eq!(months_between(date(2025, 6, 1), date(2025, 6, 1)), 0);
    }

    #[test]
    fn test_months_between_across_year_boundary() {
        assert_eq!(months_between(date(2023, 11, 20), date(2025, 1, 20)), 14);
    }

    #[test]
    fn test_months_between_negative_when_reversed() {
        assert_eq!(months_between(date(2025, 4, 15), date(2025, 1, 15)), -3);
    }

    #[test]
    fn test_months_between_end_of_month_start() {
        // Jan 31 -> Feb 28 is not yet a whole month under truncation
        assert_eq!(months_between(date(2025, 1, 31), date(2025, 2, 28)), 0);
        assert_eq!(months_between(date(2025, 1, 31), date(2025, 3, 31)), 2);
    }

    #[test]
    fn test_month_start() {
        assert_eq!(month_start(date(2025, 9, 17)), date(2025, 9, 1));
        assert_eq!(month_start(date(2025, 9, 1)), date(2025, 9, 1));
    }

    #[test]
    fn test_end_of_month_regular() {
        assert_eq!(end_of_month(date(2025, 9, 17)), date(2025, 9, 30));
        assert_eq!(end_of_month(date(2025, 12, 1)), date(2025, 12, 31));
    }

    #[test]
    fn test_end_of_month_february_leap_year() {
        assert_eq!(end_of_month(date(2024, 2, 1)), date(2024, 2, 29));
        assert_eq!(end_of_month(date(2025, 2, 1)), date(2025, 2, 28));
    }

    #[test]
    fn test_add_months_clamps_day() {
        assert_eq!(add_months(date(2025, 1, 31), 1), date(2025, 2, 28));
        assert_eq!(add_months(date(2025, 1, 31), 2), date(2025, 3, 31));
    }

    #[test]
    fn test_month_anchor_sequence() {
        let now = date(2025, 11, 20);
        assert_eq!(month_anchor(now, 0), date(2025, 11, 1));
        assert_eq!(month_anchor(now, 1), date(2025, 12, 1));
        assert_eq!(month_anchor(now, 2), date(2026, 1, 1));
        assert_eq!(month_anchor(now, 14), date(2027, 1, 1));
    }
}
