//! Calendar alignment utilities.
//!
//! Pure functions over `NaiveDate`: snap a date to the start of its
//! containing week/month/year, and add signed multiples of a calendar
//! unit. All functions are total — every valid date input maps to a
//! valid date output, so there are no error paths here.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;

/// A calendar unit at day granularity or coarser.
///
/// Sub-day units are out of scope for this crate; the proleptic
/// Gregorian calendar is the only supported calendar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarUnit {
    Day,
    Week,
    Month,
    Year,
}

/// First day of the year containing `d`.
pub fn start_of_year(d: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(d.year(), 1, 1).unwrap_or(d)
}

/// First day of the month containing `d`.
pub fn start_of_month(d: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(d.year(), d.month(), 1).unwrap_or(d)
}

/// Most recent Sunday on or before `d`. If `d` is itself a Sunday,
/// returns `d` unchanged.
pub fn start_of_week(d: NaiveDate) -> NaiveDate {
    d - Duration::days(i64::from(d.weekday().num_days_from_sunday()))
}

/// Add `n` (possibly negative) multiples of `unit` to `d`.
///
/// Month and year arithmetic clamps the day-of-month into the target
/// month's valid range: Jan 31 + 1 month = Feb 28 (Feb 29 in leap
/// years), and Feb 29 + 1 year = Feb 28.
///
/// A shift whose result would leave chrono's representable year range
/// falls back to `d` unchanged; use [`checked_add_units`] where that
/// case must be detected.
pub fn add_units(d: NaiveDate, unit: CalendarUnit, n: i32) -> NaiveDate {
    checked_add_units(d, unit, n).unwrap_or(d)
}

/// Fallible variant of [`add_units`]: returns `None` when the shifted
/// date would leave chrono's representable year range.
pub fn checked_add_units(d: NaiveDate, unit: CalendarUnit, n: i32) -> Option<NaiveDate> {
    match unit {
        CalendarUnit::Day => d.checked_add_signed(Duration::days(i64::from(n))),
        CalendarUnit::Week => d.checked_add_signed(Duration::days(7 * i64::from(n))),
        CalendarUnit::Month => checked_shift_months(d, i64::from(n)),
        CalendarUnit::Year => checked_shift_months(d, 12 * i64::from(n)),
    }
}

/// Signed month shift with end-of-month clamping (via `chrono::Months`).
/// The month count is widened to `i64` so year shifts cannot overflow
/// before the range check.
fn checked_shift_months(d: NaiveDate, n: i64) -> Option<NaiveDate> {
    let months = Months::new(u32::try_from(n.unsigned_abs()).ok()?);
    if n >= 0 {
        d.checked_add_months(months)
    } else {
        d.checked_sub_months(months)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_start_of_year() {
        assert_eq!(start_of_year(d(2022, 7, 19)), d(2022, 1, 1));
        assert_eq!(start_of_year(d(2022, 1, 1)), d(2022, 1, 1));
    }

    #[test]
    fn test_start_of_month() {
        assert_eq!(start_of_month(d(2022, 7, 19)), d(2022, 7, 1));
        assert_eq!(start_of_month(d(2022, 7, 1)), d(2022, 7, 1));
    }

    #[test]
    fn test_start_of_week_mid_week() {
        // 2022-01-01 is a Saturday; the Sunday on/before is 2021-12-26
        assert_eq!(start_of_week(d(2022, 1, 1)), d(2021, 12, 26));
    }

    #[test]
    fn test_start_of_week_on_sunday_is_identity() {
        // 2022-01-02 is a Sunday
        assert_eq!(start_of_week(d(2022, 1, 2)), d(2022, 1, 2));
    }

    #[test]
    fn test_add_days() {
        assert_eq!(add_units(d(2022, 1, 30), CalendarUnit::Day, 3), d(2022, 2, 2));
        assert_eq!(add_units(d(2022, 1, 1), CalendarUnit::Day, -1), d(2021, 12, 31));
    }

    #[test]
    fn test_add_weeks() {
        assert_eq!(add_units(d(2022, 1, 1), CalendarUnit::Week, 2), d(2022, 1, 15));
        assert_eq!(add_units(d(2022, 1, 1), CalendarUnit::Week, -1), d(2021, 12, 25));
    }

    #[test]
    fn test_add_months_plain() {
        assert_eq!(add_units(d(2022, 1, 15), CalendarUnit::Month, 1), d(2022, 2, 15));
        assert_eq!(add_units(d(2022, 11, 15), CalendarUnit::Month, 2), d(2023, 1, 15));
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        assert_eq!(add_units(d(2022, 1, 31), CalendarUnit::Month, 1), d(2022, 2, 28));
        // Leap year keeps the 29th
        assert_eq!(add_units(d(2024, 1, 31), CalendarUnit::Month, 1), d(2024, 2, 29));
    }

    #[test]
    fn test_subtract_months_across_year() {
        assert_eq!(add_units(d(2022, 1, 15), CalendarUnit::Month, -2), d(2021, 11, 15));
    }

    #[test]
    fn test_add_years() {
        assert_eq!(add_units(d(2022, 3, 15), CalendarUnit::Year, 3), d(2025, 3, 15));
        assert_eq!(add_units(d(2022, 3, 15), CalendarUnit::Year, -2), d(2020, 3, 15));
    }

    #[test]
    fn test_add_years_clamps_leap_day() {
        // 2025 is not a leap year, so Feb 29 clamps to Feb 28
        assert_eq!(add_units(d(2024, 2, 29), CalendarUnit::Year, 1), d(2025, 2, 28));
    }

    #[test]
    fn test_checked_add_units_detects_out_of_range() {
        assert!(checked_add_units(d(2022, 1, 1), CalendarUnit::Week, i32::MAX).is_none());
        assert!(checked_add_units(d(2022, 1, 1), CalendarUnit::Day, i32::MIN).is_none());
        assert!(checked_add_units(d(2022, 1, 1), CalendarUnit::Year, -1_000_000).is_none());
        assert_eq!(
            checked_add_units(d(2022, 1, 31), CalendarUnit::Month, 1),
            Some(d(2022, 2, 28))
        );
    }

    #[test]
    fn test_add_units_falls_back_to_input_out_of_range() {
        assert_eq!(add_units(d(2022, 1, 1), CalendarUnit::Week, i32::MAX), d(2022, 1, 1));
    }
}
