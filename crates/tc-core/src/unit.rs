//! Output units for durations and overlaps.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rounding::seconds_to_hours_default;

/// Unit a duration is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    #[default]
    Seconds,
    Hours,
}

impl Unit {
    /// Map a unit label to a unit.
    ///
    /// Only `"hours"` selects hours. Any other label, including typos and the
    /// empty string, falls back to seconds.
    pub fn from_label(label: &str) -> Self {
        match label {
            "hours" => Self::Hours,
            _ => Self::Seconds,
        }
    }

    /// String representation used in config files and JSON output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Hours => "hours",
        }
    }

    /// Express a number of seconds in this unit.
    pub fn measure(self, seconds: i64) -> Measure {
        match self {
            Self::Seconds => Measure::Seconds(seconds),
            Self::Hours => Measure::Hours(seconds_to_hours_default(seconds)),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Unit {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl Serialize for Unit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_label(&s))
    }
}

/// A duration expressed in a [`Unit`].
///
/// Seconds stay integral; hours are rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Measure {
    Seconds(i64),
    Hours(f64),
}

impl Measure {
    /// The unit this measure is expressed in.
    pub const fn unit(&self) -> Unit {
        match self {
            Self::Seconds(_) => Unit::Seconds,
            Self::Hours(_) => Unit::Hours,
        }
    }

    /// The numeric value as a float.
    #[expect(
        clippy::cast_precision_loss,
        reason = "seconds beyond 2^53 are far outside any real timecard"
    )]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Seconds(seconds) => seconds as f64,
            Self::Hours(hours) => hours,
        }
    }

    /// Whether the measured duration is zero.
    pub fn is_zero(&self) -> bool {
        match *self {
            Self::Seconds(seconds) => seconds == 0,
            Self::Hours(hours) => hours == 0.0,
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(seconds) => write!(f, "{seconds}"),
            Self::Hours(hours) => write!(f, "{hours:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels() {
        assert_eq!(Unit::from_label("seconds"), Unit::Seconds);
        assert_eq!(Unit::from_label("hours"), Unit::Hours);
    }

    #[test]
    fn unknown_labels_fall_back_to_seconds() {
        for label in ["minutes", "HOURS", "", "hour", "fortnights"] {
            assert_eq!(Unit::from_label(label), Unit::Seconds, "label {label:?}");
        }
    }

    #[test]
    fn unit_deserializes_permissively() {
        let unit: Unit = serde_json::from_str(r#""hours""#).unwrap();
        assert_eq!(unit, Unit::Hours);
        let unit: Unit = serde_json::from_str(r#""minutes""#).unwrap();
        assert_eq!(unit, Unit::Seconds);
    }

    #[test]
    fn measure_in_each_unit() {
        assert_eq!(Unit::Seconds.measure(5400), Measure::Seconds(5400));
        assert_eq!(Unit::Hours.measure(5400), Measure::Hours(1.5));
        assert_eq!(Unit::Hours.measure(5400).unit(), Unit::Hours);
    }

    #[test]
    fn measure_serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&Measure::Seconds(50)).unwrap(), "50");
        assert_eq!(serde_json::to_string(&Measure::Hours(1.5)).unwrap(), "1.5");
    }

    #[test]
    fn measure_display() {
        assert_eq!(Measure::Seconds(90).to_string(), "90");
        assert_eq!(Measure::Hours(2.5).to_string(), "2.5");
        assert_eq!(Measure::Hours(1.0).to_string(), "1.0");
        assert!(Measure::Hours(0.0).is_zero());
        assert!(!Measure::Seconds(1).is_zero());
    }
}
