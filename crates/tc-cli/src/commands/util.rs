//! Shared utilities for CLI commands.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use clap::Args;
use serde::Serialize;
use tc_core::{InstantInput, InstantParser, Timecard, Unit};

use crate::Config;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub const fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

/// A timecard given as two positional instants.
#[derive(Debug, Args)]
pub struct TimecardArgs {
    /// Start instant (epoch seconds or date/time text).
    #[arg(allow_hyphen_values = true)]
    pub start: String,

    /// End instant (epoch seconds or date/time text).
    #[arg(allow_hyphen_values = true)]
    pub end: String,
}

impl TimecardArgs {
    /// Resolve both instants and build the timecard.
    pub fn resolve<P: InstantParser + ?Sized>(&self, parser: &P) -> Result<Timecard> {
        resolve_timecard(&self.start, &self.end, parser)
    }
}

/// Build a timecard from two command-line instants.
///
/// Integer arguments are epoch seconds; anything else goes through `parser`.
pub fn resolve_timecard<P: InstantParser + ?Sized>(
    start: &str,
    end: &str,
    parser: &P,
) -> Result<Timecard> {
    Timecard::resolve(
        InstantInput::from_arg(start),
        InstantInput::from_arg(end),
        parser,
    )
    .with_context(|| format!("invalid timecard: {start} .. {end}"))
}

/// Pick the output unit: the `--unit` label if given, else the configured default.
pub fn resolve_unit(label: Option<&str>, config: &Config) -> Unit {
    label.map_or(config.default_unit, Unit::from_label)
}

/// Render a timecard with its UTC datetimes when they are representable.
pub fn format_timecard(timecard: &Timecard) -> String {
    match (timecard.start_datetime(), timecard.end_datetime()) {
        (Some(start), Some(end)) => format!(
            "{timecard} {} .. {}",
            start.to_rfc3339_opts(SecondsFormat::Secs, true),
            end.to_rfc3339_opts(SecondsFormat::Secs, true)
        ),
        _ => timecard.to_string(),
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    writeln!(writer, "{json}")?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn test_parser() -> tc_core::DateTimeParser {
    use chrono::{TimeZone, Utc};

    // 2026-01-15T10:30:00Z
    tc_core::DateTimeParser::anchored_at(Utc.with_ymd_and_hms(2026, 1, 15, 10, 30, 0).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_integer_and_text_instants() {
        let tc = resolve_timecard("1768435200", "2026-01-15T10:30:00Z", &test_parser()).unwrap();
        assert_eq!(tc.duration_seconds(), 37_800);

        let tc = resolve_timecard("2 hours ago", "now", &test_parser()).unwrap();
        assert_eq!(tc.duration_seconds(), 7200);
    }

    #[test]
    fn inverted_timecard_error_has_context() {
        let err = resolve_timecard("100", "50", &test_parser()).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "invalid timecard: 100 .. 50: end time 50 is before start time 100"
        );
    }

    #[test]
    fn unparsable_instant_error_has_context() {
        let err = resolve_timecard("soon", "50", &test_parser()).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "invalid timecard: soon .. 50: could not parse instant from \"soon\""
        );
    }

    #[test]
    fn unit_flag_overrides_config() {
        let config = Config {
            default_unit: Unit::Hours,
            ..Config::default()
        };
        assert_eq!(resolve_unit(None, &config), Unit::Hours);
        assert_eq!(resolve_unit(Some("seconds"), &config), Unit::Seconds);
        assert_eq!(resolve_unit(Some("minutes"), &config), Unit::Seconds);
    }

    #[test]
    fn format_timecard_includes_datetimes() {
        let tc = Timecard::new(0, 3600).unwrap();
        assert_eq!(
            format_timecard(&tc),
            "[0, 3600) 1970-01-01T00:00:00Z .. 1970-01-01T01:00:00Z"
        );

        let tc = Timecard::new(i64::MIN, 0).unwrap();
        assert_eq!(format_timecard(&tc), format!("[{}, 0)", i64::MIN));
    }
}
