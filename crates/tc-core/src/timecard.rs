//! The timecard value type and its interval arithmetic.
//!
//! A [`Timecard`] covers the half-open range `[start, end)` of epoch seconds.
//! Two timecards that only touch (`a.end == b.start`) do not overlap.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::parse::{DateTimeParser, InstantInput, InstantParser};
use crate::rounding::seconds_to_hours_default;
use crate::{Measure, TimecardError, Unit};

/// A whole number of seconds to move a timecard by.
///
/// Integers convert infallibly. Floats and text convert only when they hold
/// an integral value, otherwise with [`TimecardError::TypeMismatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset(i64);

impl Offset {
    /// Offset in seconds.
    pub const fn seconds(self) -> i64 {
        self.0
    }
}

impl From<i64> for Offset {
    fn from(seconds: i64) -> Self {
        Self(seconds)
    }
}

impl From<i32> for Offset {
    fn from(seconds: i32) -> Self {
        Self(i64::from(seconds))
    }
}

impl TryFrom<f64> for Offset {
    type Error = TimecardError;

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        reason = "value is checked integral and in range before the cast"
    )]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        // i64::MAX as f64 rounds up to 2^63, which is out of range
        let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
        if value.is_finite() && value.fract() == 0.0 && in_range {
            Ok(Self(value as i64))
        } else {
            Err(TimecardError::TypeMismatch {
                value: value.to_string(),
            })
        }
    }
}

impl FromStr for Offset {
    type Err = TimecardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(seconds) = trimmed.parse::<i64>() {
            return Ok(Self(seconds));
        }

        let mismatch = || TimecardError::TypeMismatch {
            value: s.to_string(),
        };
        let value: f64 = trimmed.parse().map_err(|_| mismatch())?;
        Self::try_from(value).map_err(|_| mismatch())
    }
}

impl TryFrom<&str> for Offset {
    type Error = TimecardError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// An interval between two instants, in seconds since the Unix epoch.
///
/// Construction guarantees `end >= start`. [`Timecard::shift`] keeps that
/// guarantee; [`Timecard::extend`] does not re-check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimecard")]
pub struct Timecard {
    start: i64,
    end: i64,
}

/// Unvalidated serde shape of a [`Timecard`].
#[derive(Deserialize)]
struct RawTimecard {
    start: i64,
    end: i64,
}

impl TryFrom<RawTimecard> for Timecard {
    type Error = TimecardError;

    fn try_from(raw: RawTimecard) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl Timecard {
    /// Creates a timecard from epoch seconds.
    ///
    /// Fails with [`TimecardError::InvalidInterval`] if `end < start`. A
    /// zero-length timecard (`end == start`) is allowed.
    pub fn new(start: i64, end: i64) -> Result<Self, TimecardError> {
        if end < start {
            tracing::debug!(start, end, "rejected inverted timecard");
            return Err(TimecardError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a timecard from integers or text, resolving text with `parser`.
    pub fn resolve<P>(
        start: impl Into<InstantInput>,
        end: impl Into<InstantInput>,
        parser: &P,
    ) -> Result<Self, TimecardError>
    where
        P: InstantParser + ?Sized,
    {
        let start = start.into().resolve(parser)?;
        let end = end.into().resolve(parser)?;
        Self::new(start, end)
    }

    /// Creates a timecard from integers or text, resolving text relative to now.
    pub fn from_inputs(
        start: impl Into<InstantInput>,
        end: impl Into<InstantInput>,
    ) -> Result<Self, TimecardError> {
        Self::resolve(start, end, &DateTimeParser::current())
    }

    pub const fn start(&self) -> i64 {
        self.start
    }

    pub const fn end(&self) -> i64 {
        self.end
    }

    /// Start as a UTC datetime, if representable.
    pub fn start_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.start, 0)
    }

    /// End as a UTC datetime, if representable.
    pub fn end_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.end, 0)
    }

    /// Moves both endpoints by `offset` seconds.
    ///
    /// Fails without modifying the timecard if the offset is not a whole
    /// number of seconds or either endpoint would overflow.
    pub fn shift<O>(&mut self, offset: O) -> Result<(), TimecardError>
    where
        O: TryInto<Offset>,
        TimecardError: From<O::Error>,
    {
        let offset = offset.try_into()?.seconds();
        let start = offset_instant(self.start, offset)?;
        let end = offset_instant(self.end, offset)?;

        tracing::trace!(offset, start, end, "shifted timecard");
        self.start = start;
        self.end = end;
        Ok(())
    }

    /// Moves only the end by `offset` seconds.
    ///
    /// The result is not re-validated: a negative offset larger than the
    /// current duration leaves `end < start`, and [`Timecard::duration`]
    /// then reports a negative length. Callers that need the invariant must
    /// check it themselves.
    pub fn extend<O>(&mut self, offset: O) -> Result<(), TimecardError>
    where
        O: TryInto<Offset>,
        TimecardError: From<O::Error>,
    {
        let offset = offset.try_into()?.seconds();
        let end = offset_instant(self.end, offset)?;

        if end < self.start {
            tracing::debug!(start = self.start, end, "extend produced inverted timecard");
        }
        self.end = end;
        Ok(())
    }

    /// Length in `unit`. Hours are rounded to one decimal.
    pub fn duration(&self, unit: impl Into<Unit>) -> Measure {
        unit.into().measure(self.duration_seconds())
    }

    /// Length in seconds.
    ///
    /// Saturates at the `i64` bounds: a timecard wider than `i64::MAX`
    /// seconds, such as `[i64::MIN, i64::MAX)`, reports `i64::MAX`.
    pub const fn duration_seconds(&self) -> i64 {
        self.end.saturating_sub(self.start)
    }

    /// Length in hours, rounded to one decimal.
    pub fn duration_hours(&self) -> f64 {
        seconds_to_hours_default(self.duration_seconds())
    }

    /// Whether `instant` falls in `[start, end)`.
    pub const fn contains(&self, instant: i64) -> bool {
        instant >= self.start && instant < self.end
    }

    /// Length of the intersection with `other`, in `unit`.
    ///
    /// Zero when the timecards do not intersect.
    pub fn overlap(&self, other: &Self, unit: impl Into<Unit>) -> Measure {
        let unit = unit.into();
        self.intersect(other)
            .map_or_else(|| unit.measure(0), |shared| shared.duration(unit))
    }

    /// The timecard covered by both `self` and `other`, if any.
    ///
    /// The timecards intersect when either one starts inside the other, with
    /// the end instant exclusive, so touching timecards do not intersect. The
    /// result is a new value spanning the later start to the earlier end.
    /// It is not re-validated: an operand left inverted by
    /// [`Timecard::extend`] can yield an inverted intersection, whose
    /// duration is negative.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let starts_inside_other = self.start >= other.start && self.start < other.end;
        let other_starts_inside = other.start >= self.start && other.start < self.end;
        if !(starts_inside_other || other_starts_inside) {
            return None;
        }

        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        Some(Self { start, end })
    }
}

fn offset_instant(instant: i64, offset: i64) -> Result<i64, TimecardError> {
    instant
        .checked_add(offset)
        .ok_or(TimecardError::Overflow { instant, offset })
}

impl fmt::Display for Timecard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
