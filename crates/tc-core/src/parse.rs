//! Resolving timecard endpoints from integers or text.
//!
//! A timecard endpoint is either an epoch-seconds integer or text that has to
//! be resolved to one. Resolution goes through the [`InstantParser`] trait so
//! callers can plug in their own calendar rules; [`DateTimeParser`] covers the
//! common forms.

use std::sync::LazyLock;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

use crate::TimecardError;

/// Resolves text to an instant in epoch seconds.
pub trait InstantParser {
    /// Parse `text` into seconds since the Unix epoch.
    fn parse_instant(&self, text: &str) -> Result<i64, TimecardError>;
}

impl<F> InstantParser for F
where
    F: Fn(&str) -> Result<i64, TimecardError>,
{
    fn parse_instant(&self, text: &str) -> Result<i64, TimecardError> {
        self(text)
    }
}

/// One endpoint as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstantInput {
    /// Seconds since the Unix epoch.
    Seconds(i64),
    /// Text to resolve with an [`InstantParser`].
    Text(String),
}

impl InstantInput {
    /// Classify a command-line style argument.
    ///
    /// Anything that parses as an integer is taken as epoch seconds.
    pub fn from_arg(arg: &str) -> Self {
        arg.trim()
            .parse::<i64>()
            .map_or_else(|_| Self::Text(arg.to_string()), Self::Seconds)
    }

    /// Resolve to epoch seconds, consulting `parser` for text.
    pub fn resolve<P: InstantParser + ?Sized>(&self, parser: &P) -> Result<i64, TimecardError> {
        match self {
            Self::Seconds(seconds) => Ok(*seconds),
            Self::Text(text) => parser.parse_instant(text),
        }
    }
}

impl From<i64> for InstantInput {
    fn from(seconds: i64) -> Self {
        Self::Seconds(seconds)
    }
}

impl From<&str> for InstantInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for InstantInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<DateTime<Utc>> for InstantInput {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Seconds(dt.timestamp())
    }
}

/// Pre-compiled regex for "N units ago".
static AGO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s+(second|minute|hour|day|week)s?\s+ago$").expect("valid regex")
});

/// Pre-compiled regex for "+N units" / "-N units".
static SIGNED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-])\s*(\d+)\s+(second|minute|hour|day|week)s?$").expect("valid regex")
});

/// Naive date-time layouts, read as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Default instant parser.
///
/// Supports:
/// - RFC 3339: "2026-01-15T10:30:00Z", "2026-01-15T10:30:00+02:00"
/// - Naive UTC: "2026-01-15 10:30:00", "2026-01-15T10:30", "2026-01-15"
/// - Epoch literal: "@1700000000"
/// - Keywords: "now", "today", "yesterday", "tomorrow"
/// - Relative: "2 hours ago", "+30 minutes", "-1 week"
///
/// Keywords and relative forms are anchored at `now`.
#[derive(Debug, Clone, Copy)]
pub struct DateTimeParser {
    pub now: DateTime<Utc>,
}

impl DateTimeParser {
    /// Parser anchored at a fixed reference time.
    pub const fn anchored_at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Parser anchored at the current time.
    pub fn current() -> Self {
        Self::anchored_at(Utc::now())
    }

    fn parse_absolute(text: &str) -> Option<i64> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(dt.timestamp());
        }

        if let Some(seconds) = text.strip_prefix('@') {
            return seconds.parse().ok();
        }

        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
                return Some(naive.and_utc().timestamp());
            }
        }

        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight| midnight.and_utc().timestamp())
    }

    fn parse_relative(&self, text: &str) -> Option<i64> {
        let today = self.now.date_naive().and_hms_opt(0, 0, 0)?.and_utc();

        match text {
            "now" => return Some(self.now.timestamp()),
            "today" => return Some(today.timestamp()),
            "yesterday" => return Some((today - Duration::days(1)).timestamp()),
            "tomorrow" => return Some((today + Duration::days(1)).timestamp()),
            _ => {}
        }

        let (negative, amount, unit) = if let Some(caps) = AGO_RE.captures(text) {
            (true, caps.get(1)?.as_str(), caps.get(2)?.as_str())
        } else if let Some(caps) = SIGNED_RE.captures(text) {
            (
                &caps[1] == "-",
                caps.get(2)?.as_str(),
                caps.get(3)?.as_str(),
            )
        } else {
            return None;
        };

        let amount: i64 = amount.parse().ok()?;
        let seconds = amount.checked_mul(unit_seconds(unit)?)?;
        let offset = if negative { -seconds } else { seconds };
        self.now.timestamp().checked_add(offset)
    }
}

impl Default for DateTimeParser {
    fn default() -> Self {
        Self::current()
    }
}

impl InstantParser for DateTimeParser {
    fn parse_instant(&self, text: &str) -> Result<i64, TimecardError> {
        let trimmed = text.trim();
        let parsed = Self::parse_absolute(trimmed)
            .or_else(|| self.parse_relative(&trimmed.to_ascii_lowercase()));

        if let Some(seconds) = parsed {
            tracing::trace!(input = text, seconds, "parsed instant");
            Ok(seconds)
        } else {
            tracing::debug!(input = text, "unparsable instant");
            Err(TimecardError::ParseFailure {
                input: text.to_string(),
            })
        }
    }
}

/// Seconds in one relative-time unit.
fn unit_seconds(unit: &str) -> Option<i64> {
    match unit {
        "second" => Some(1),
        "minute" => Some(60),
        "hour" => Some(3600),
        "day" => Some(86_400),
        "week" => Some(604_800),
        _ => None,
    }
}
