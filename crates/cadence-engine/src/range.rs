//! Date-range bucketing.
//!
//! Walks an anchored start date toward an end date in steps of one
//! interval rule, lazily yielding contiguous (start, end) bucket pairs.
//! Bucket ends are stored exclusive; the `end_inclusive` flag only
//! changes the text rendered for a bucket's end, never the cursor
//! arithmetic.
//!
//! All errors surface at construction time (expression resolution,
//! interval parsing, range validation). Iteration itself is infallible.

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::align::{self, CalendarUnit};
use crate::error::CadenceError;
use crate::interval::IntervalRule;
use crate::render::format_date;
use crate::resolve::resolve_date;

/// One contiguous sub-range of the requested date range.
///
/// `start < end` always; `end` is the exclusive boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BucketPair {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Lazy, single-pass iterator over bucket pairs.
///
/// Emits while the cursor has not passed the requested end date, so the
/// final bucket always covers it: for end 2022-01-03 and a daily
/// interval the last pair is (2022-01-03, 2022-01-04) — the overshoot
/// never exceeds one full step. State is a single monotonically
/// advancing cursor; buckets are produced one at a time, never buffered.
#[derive(Debug, Clone)]
pub struct Buckets {
    rule: IntervalRule,
    cursor: NaiveDate,
    end: NaiveDate,
}

impl Iterator for Buckets {
    type Item = BucketPair;

    fn next(&mut self) -> Option<BucketPair> {
        if self.cursor > self.end {
            return None;
        }
        let next = self.rule.step(self.cursor);
        // A step that cannot advance the cursor (the shifted date would
        // leave chrono's representable year range) ends iteration rather
        // than emit a degenerate bucket.
        if next <= self.cursor {
            return None;
        }
        let pair = BucketPair {
            start: self.cursor,
            end: next,
        };
        self.cursor = next;
        Some(pair)
    }
}

/// [`Buckets`] with each endpoint rendered as text.
#[derive(Debug, Clone)]
pub struct RenderedBuckets {
    inner: Buckets,
    time_format: String,
    end_inclusive: bool,
}

impl Iterator for RenderedBuckets {
    type Item = (String, String);

    fn next(&mut self) -> Option<(String, String)> {
        let pair = self.inner.next()?;
        let end = if self.end_inclusive {
            align::add_units(pair.end, CalendarUnit::Day, -1)
        } else {
            pair.end
        };
        Some((
            format_date(pair.start, &self.time_format),
            format_date(end, &self.time_format),
        ))
    }
}

// ── Handler entry point ─────────────────────────────────────────────────────

/// Composable access to the resolution and iteration machinery, for
/// callers building custom pipelines: resolve the interval only,
/// resolve relative dates only, or drive the bucket iterator manually.
#[derive(Debug, Clone)]
pub struct DateRangeHandler {
    rule: IntervalRule,
    time_format: String,
    end_inclusive: bool,
}

impl DateRangeHandler {
    /// Parse `interval` and build a handler that renders (and parses
    /// literal date strings) with `time_format`.
    ///
    /// # Errors
    ///
    /// Returns [`CadenceError::UnknownInterval`] if `interval` is not a
    /// recognized specification.
    pub fn new(interval: &str, time_format: &str) -> Result<Self, CadenceError> {
        Ok(Self {
            rule: IntervalRule::parse(interval)?,
            time_format: time_format.to_string(),
            end_inclusive: false,
        })
    }

    /// Render each bucket's end as its last covered day instead of the
    /// exclusive boundary. Affects rendered text only; the stored pairs
    /// and the cursor arithmetic are untouched.
    pub fn end_inclusive(mut self, yes: bool) -> Self {
        self.end_inclusive = yes;
        self
    }

    /// The parsed interval rule.
    pub fn rule(&self) -> &IntervalRule {
        &self.rule
    }

    /// Resolve a date-value expression against `today`, using this
    /// handler's time format for literal date strings.
    ///
    /// # Errors
    ///
    /// Returns [`CadenceError::InvalidExpression`] for unrecognized
    /// expressions.
    pub fn resolve(&self, expr: &str, today: NaiveDate) -> Result<NaiveDate, CadenceError> {
        resolve_date(expr, today, &self.time_format)
    }

    /// Snap `start` to the rule's alignment anchor.
    pub fn anchor(&self, start: NaiveDate) -> NaiveDate {
        self.rule.anchor(start)
    }

    /// Bucket iterator over resolved absolute dates.
    ///
    /// # Errors
    ///
    /// Returns [`CadenceError::InvalidRange`] unless `start < end`.
    pub fn buckets(&self, start: NaiveDate, end: NaiveDate) -> Result<Buckets, CadenceError> {
        if start >= end {
            return Err(CadenceError::InvalidRange(format!(
                "start {start} is not before end {end}"
            )));
        }
        Ok(Buckets {
            rule: self.rule,
            cursor: self.rule.anchor(start),
            end,
        })
    }

    /// Bucket iterator with both endpoints rendered as text.
    ///
    /// # Errors
    ///
    /// Returns [`CadenceError::InvalidRange`] unless `start < end`.
    pub fn rendered(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RenderedBuckets, CadenceError> {
        Ok(RenderedBuckets {
            inner: self.buckets(start, end)?,
            time_format: self.time_format.clone(),
            end_inclusive: self.end_inclusive,
        })
    }
}

// ── Functional entry point ──────────────────────────────────────────────────

/// Iterate formatted date-range buckets, resolving relative expressions
/// against the current UTC date.
///
/// Convenience wrapper over [`date_range_iterator_from`] — prefer that
/// function when determinism matters (tests, replay).
///
/// # Errors
///
/// Same as [`date_range_iterator_from`].
pub fn date_range_iterator(
    start_date: &str,
    end_date: &str,
    interval: &str,
    end_inclusive: bool,
    time_format: &str,
) -> Result<RenderedBuckets, CadenceError> {
    date_range_iterator_from(
        Utc::now().date_naive(),
        start_date,
        end_date,
        interval,
        end_inclusive,
        time_format,
    )
}

/// Iterate formatted date-range buckets with an explicit reference date.
///
/// `start_date` and `end_date` accept either literal dates (parsed with
/// `time_format`) or date-value expressions ("yesterday",
/// "3_months_ago", ...), resolved once against `today` before iteration
/// begins — never re-evaluated mid-iteration.
///
/// # Errors
///
/// Returns [`CadenceError::UnknownInterval`] for an unrecognized
/// interval, [`CadenceError::InvalidExpression`] for an unresolvable
/// date expression, and [`CadenceError::InvalidRange`] if the resolved
/// start is not strictly before the resolved end.
///
/// # Examples
///
/// ```
/// use cadence_engine::date_range_iterator_from;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2022, 6, 1).unwrap();
/// let buckets: Vec<_> =
///     date_range_iterator_from(today, "2022-01-01", "2022-01-03", "day", false, "%Y-%m-%d")
///         .unwrap()
///         .collect();
/// assert_eq!(buckets[0], ("2022-01-01".into(), "2022-01-02".into()));
/// assert_eq!(buckets[2], ("2022-01-03".into(), "2022-01-04".into()));
/// ```
pub fn date_range_iterator_from(
    today: NaiveDate,
    start_date: &str,
    end_date: &str,
    interval: &str,
    end_inclusive: bool,
    time_format: &str,
) -> Result<RenderedBuckets, CadenceError> {
    let handler = DateRangeHandler::new(interval, time_format)?.end_inclusive(end_inclusive);
    let start = handler.resolve(start_date, today)?;
    let end = handler.resolve(end_date, today)?;
    handler.rendered(start, end)
}

// ── Tests ───────────────────────────────────────────────────────────────────
