//! Core domain logic for timecards.
//!
//! This crate contains the fundamental types and logic for:
//! - Timecard: a `[start, end)` interval of epoch seconds
//! - Interval arithmetic: duration, shift, extend, intersection, overlap
//! - Rounding: hour conversion and ceiling to an arbitrary resolution
//! - Instant parsing: resolving text like `2026-01-15T10:30:00Z` or
//!   `2 hours ago` to epoch seconds

mod error;
pub mod parse;
pub mod rounding;
mod timecard;
pub mod unit;

pub use error::TimecardError;
pub use parse::{DateTimeParser, InstantInput, InstantParser};
pub use rounding::{DEFAULT_HOURS_PRECISION, round_to, seconds_to_hours, seconds_to_hours_default};
pub use timecard::{Offset, Timecard};
pub use unit::{Measure, Unit};
