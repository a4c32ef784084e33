//! Relative date resolution.
//!
//! Translates a date-value expression ("yesterday", "3_months_ago",
//! "2022-11-14", ...) into an absolute calendar date. The reference
//! date is always an explicit parameter — the resolver never reads the
//! system clock, so results are deterministic and testable.

use chrono::NaiveDate;

use crate::align::{self, CalendarUnit};
use crate::error::CadenceError;
use crate::render;

/// Resolve a date-value expression against the reference date `today`.
///
/// # Supported expressions
///
/// | expression | result |
/// |---|---|
/// | `today` | `today` |
/// | `yesterday` | `today` − 1 day |
/// | `N_days_ago` | `today` − N days |
/// | `last_week` | Sunday on/before `today`, − 7 days |
/// | `this_week` | Sunday on/before `today` |
/// | `N_weeks_ago` | `today` − 7·N days (no weekday snap) |
/// | `last_month` / `N_months_ago` | first day of the month N months back |
/// | `this_month` | first day of `today`'s month |
/// | `last_year` | January 1 of the previous year |
/// | `this_year` | January 1 of `today`'s year |
/// | `N_years_ago` | `today` shifted back N years (no snap) |
/// | anything else | literal parse with `date_format` |
///
/// `last_week` snaps to the week boundary while `N_weeks_ago` does not,
/// and likewise for `last_year` vs `N_years_ago`. The asymmetry is
/// deliberate: callers expect `2_weeks_ago` to keep `today`'s weekday.
///
/// # Errors
///
/// Returns [`CadenceError::InvalidExpression`] when the string matches
/// no relative pattern and fails the literal parse.
pub fn resolve_date(
    expr: &str,
    today: NaiveDate,
    date_format: &str,
) -> Result<NaiveDate, CadenceError> {
    let normalized = expr.trim().to_lowercase();

    let resolved = match normalized.as_str() {
        "today" => Some(today),
        "yesterday" => Some(align::add_units(today, CalendarUnit::Day, -1)),
        "last_week" => Some(align::add_units(
            align::start_of_week(today),
            CalendarUnit::Day,
            -7,
        )),
        "this_week" => Some(align::start_of_week(today)),
        "last_month" => Some(align::start_of_month(align::add_units(
            today,
            CalendarUnit::Month,
            -1,
        ))),
        "this_month" => Some(align::start_of_month(today)),
        "last_year" => Some(align::add_units(
            align::start_of_year(today),
            CalendarUnit::Year,
            -1,
        )),
        "this_year" => Some(align::start_of_year(today)),
        _ => try_units_ago(&normalized, today),
    };

    match resolved {
        Some(date) => Ok(date),
        None => render::parse_date(expr.trim(), date_format),
    }
}

/// Try the `N_unit[s]_ago` form. Returns `None` on any mismatch,
/// including offsets whose result would leave chrono's representable
/// year range — those then fail the literal parse and surface as
/// `InvalidExpression` instead of panicking or answering wrongly.
fn try_units_ago(s: &str, today: NaiveDate) -> Option<NaiveDate> {
    let mut parts = s.split('_');
    let (count, unit, ago) = (parts.next()?, parts.next()?, parts.next()?);
    if ago != "ago" || parts.next().is_some() {
        return None;
    }
    let n: i32 = count.parse().ok()?;
    if n < 0 {
        return None;
    }

    let date = match unit.strip_suffix('s').unwrap_or(unit) {
        "day" => align::checked_add_units(today, CalendarUnit::Day, -n)?,
        "week" => align::checked_add_units(today, CalendarUnit::Week, -n)?,
        "month" => {
            align::start_of_month(align::checked_add_units(today, CalendarUnit::Month, -n)?)
        }
        "year" => align::checked_add_units(today, CalendarUnit::Year, -n)?,
        _ => return None,
    };
    Some(date)
}

// ── Tests ───────────────────────────────────────────────────────────────────
