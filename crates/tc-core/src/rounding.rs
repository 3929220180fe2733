//! Rounding helpers.
//!
//! Two distinct behaviors live here and must not be mixed up:
//! - [`seconds_to_hours`] rounds half away from zero to a number of decimals.
//! - [`round_to`] always rounds *up* to a multiple of an arbitrary resolution.

use crate::TimecardError;

/// Seconds in one hour.
const SECONDS_PER_HOUR: i128 = 3600;

/// Decimal places used when a duration is reported in hours.
pub const DEFAULT_HOURS_PRECISION: i32 = 1;

/// Convert seconds to hours, rounded to `round_to` decimal places.
///
/// Halfway values round away from zero, decided on the exact decimal value
/// rather than its binary approximation (522s is 0.145h and rounds to 0.15).
/// A negative `round_to` rounds to tens, hundreds, and so on. A precision
/// too large to scale in 128 bits returns the unrounded hours.
#[expect(
    clippy::cast_precision_loss,
    reason = "rounding is exact in i128; only the final value becomes a float"
)]
pub fn seconds_to_hours(seconds: i64, round_to: i32) -> f64 {
    let seconds = i128::from(seconds);
    let Some(scale) = 10_i128.checked_pow(round_to.unsigned_abs()) else {
        return if round_to > 0 {
            seconds as f64 / SECONDS_PER_HOUR as f64
        } else {
            0.0
        };
    };

    if round_to >= 0 {
        seconds.checked_mul(scale).map_or_else(
            || seconds as f64 / SECONDS_PER_HOUR as f64,
            |scaled| div_round_half_away(scaled, SECONDS_PER_HOUR) as f64 / scale as f64,
        )
    } else {
        SECONDS_PER_HOUR.checked_mul(scale).map_or(0.0, |divisor| {
            (div_round_half_away(seconds, divisor) * scale) as f64
        })
    }
}

/// Integer division of `numerator` by a positive `divisor`, halves away from zero.
fn div_round_half_away(numerator: i128, divisor: i128) -> i128 {
    let quotient = numerator / divisor;
    let remainder = (numerator % divisor).abs();
    if remainder >= divisor - remainder {
        quotient + numerator.signum()
    } else {
        quotient
    }
}

/// Convert seconds to hours with [`DEFAULT_HOURS_PRECISION`].
pub fn seconds_to_hours_default(seconds: i64) -> f64 {
    seconds_to_hours(seconds, DEFAULT_HOURS_PRECISION)
}

/// Round `number` up to the nearest multiple of `to`.
///
/// Works with any positive resolution, e.g. `1`, `0.1`, `2`, `2.5`.
pub fn round_to(number: f64, to: f64) -> Result<f64, TimecardError> {
    if !to.is_finite() || to <= 0.0 {
        return Err(TimecardError::InvalidResolution { to });
    }

    let inverse = 1.0 / to;
    Ok((number * inverse).ceil() / inverse)
}
