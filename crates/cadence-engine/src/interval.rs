//! Interval rule resolution.
//!
//! Parses an interval specification string ("monthly", "3_week", ...)
//! into a structured [`IntervalRule`] and applies its alignment policy
//! to a start date. Bare keyword forms always imply calendar alignment;
//! `N_unit` forms imply alignment only for month.

use chrono::NaiveDate;
use serde::Serialize;

use crate::align::{self, CalendarUnit};
use crate::error::CadenceError;

/// How an interval rule snaps the raw start date before iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    None,
    StartOfWeek,
    StartOfMonth,
    StartOfYear,
}

/// A parsed interval specification: unit, multiplier, alignment policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntervalRule {
    pub unit: CalendarUnit,
    pub multiplier: u32,
    pub alignment: Alignment,
}

impl IntervalRule {
    /// Parse an interval specification string.
    ///
    /// Accepted forms (case-insensitive, whitespace-trimmed):
    ///
    /// - bare keywords: `day`/`daily`, `week`/`weekly`, `month`/`monthly`,
    ///   `year`/`yearly` — multiplier 1, calendar-aligned (day has no
    ///   calendar boundary to snap to, so its alignment is none);
    /// - `N_unit` / `N_units`: e.g. `3_month`, `2_weeks` — multiplier N,
    ///   aligned only for month. A space may stand in for the underscore.
    ///
    /// # Errors
    ///
    /// Returns [`CadenceError::UnknownInterval`] for anything else,
    /// including a zero multiplier.
    pub fn parse(spec: &str) -> Result<Self, CadenceError> {
        let normalized = spec.trim().to_lowercase().replace(' ', "_");

        let rule = match normalized.as_str() {
            "day" | "daily" => Self {
                unit: CalendarUnit::Day,
                multiplier: 1,
                alignment: Alignment::None,
            },
            "week" | "weekly" => Self {
                unit: CalendarUnit::Week,
                multiplier: 1,
                alignment: Alignment::StartOfWeek,
            },
            "month" | "monthly" => Self {
                unit: CalendarUnit::Month,
                multiplier: 1,
                alignment: Alignment::StartOfMonth,
            },
            "year" | "yearly" => Self {
                unit: CalendarUnit::Year,
                multiplier: 1,
                alignment: Alignment::StartOfYear,
            },
            _ => Self::parse_multiple(&normalized).ok_or_else(|| {
                CadenceError::UnknownInterval(format!("'{}'", spec.trim()))
            })?,
        };
        Ok(rule)
    }

    /// Parse the `N_unit[s]` form. Returns `None` on any mismatch.
    /// The multiplier must fit `i32` so stepping can never wrap negative.
    fn parse_multiple(s: &str) -> Option<Self> {
        let (count, unit_str) = s.split_once('_')?;
        let multiplier: u32 = count.parse().ok()?;
        if multiplier == 0 || i32::try_from(multiplier).is_err() {
            return None;
        }
        let (unit, alignment) = match unit_str.strip_suffix('s').unwrap_or(unit_str) {
            "day" => (CalendarUnit::Day, Alignment::None),
            "week" => (CalendarUnit::Week, Alignment::None),
            "month" => (CalendarUnit::Month, Alignment::StartOfMonth),
            "year" => (CalendarUnit::Year, Alignment::None),
            _ => return None,
        };
        Some(Self {
            unit,
            multiplier,
            alignment,
        })
    }

    /// Snap `start` to this rule's alignment anchor. Identity when the
    /// alignment policy is none.
    pub fn anchor(&self, start: NaiveDate) -> NaiveDate {
        match self.alignment {
            Alignment::None => start,
            Alignment::StartOfWeek => align::start_of_week(start),
            Alignment::StartOfMonth => align::start_of_month(start),
            Alignment::StartOfYear => align::start_of_year(start),
        }
    }

    /// Advance `cursor` by one full step (multiplier × unit).
    pub fn step(&self, cursor: NaiveDate) -> NaiveDate {
        align::add_units(cursor, self.unit, self.multiplier as i32)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
