//! # cadence-engine
//!
//! Deterministic date-range bucketing.
//!
//! Given a start date, an end date, and a small interval-rule language
//! ("daily", "monthly", "3_week", ...), cadence-engine computes the
//! sequence of contiguous calendar buckets spanning the range. Bare
//! keyword intervals snap the start to its calendar boundary (first of
//! month/year, the Sunday of the week); start and end may be given as
//! relative date expressions ("yesterday", "3_months_ago") resolved
//! against an explicit reference date — no system clock access inside
//! the core, so every computation is reproducible.
//!
//! ## Modules
//!
//! - [`align`] — calendar alignment: start of week/month/year, signed unit arithmetic
//! - [`resolve`] — date-value expression → absolute calendar date
//! - [`interval`] — interval specification string → [`IntervalRule`]
//! - [`range`] — the bucket iterator and the public entry points
//! - [`render`] — strftime-style date formatting
//! - [`error`] — error types

pub mod align;
pub mod error;
pub mod interval;
pub mod range;
pub mod render;
pub mod resolve;

pub use align::{
    add_units, checked_add_units, start_of_month, start_of_week, start_of_year, CalendarUnit,
};
pub use error::CadenceError;
pub use interval::{Alignment, IntervalRule};
pub use range::{
    date_range_iterator, date_range_iterator_from, BucketPair, Buckets, DateRangeHandler,
    RenderedBuckets,
};
pub use render::format_date;
pub use resolve::resolve_date;
