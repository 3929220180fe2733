//! Hours and round commands for the rounding helpers.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tc_core::{round_to, seconds_to_hours};

use super::util::{self, OutputFormat};
use crate::Config;

#[derive(Debug, Args)]
pub struct HoursArgs {
    /// Seconds to convert.
    #[arg(allow_negative_numbers = true)]
    pub seconds: i64,

    /// Decimal places to round to (half away from zero).
    #[arg(short, long, allow_negative_numbers = true)]
    pub precision: Option<i32>,
}

#[derive(Debug, Args)]
pub struct RoundArgs {
    /// Number to round up.
    #[arg(allow_negative_numbers = true)]
    pub number: f64,

    /// Resolution to round up to, e.g. 1, 0.5, 2.5.
    pub to: f64,
}

#[derive(Debug, Serialize)]
struct HoursOutput {
    seconds: i64,
    precision: i32,
    hours: f64,
}

#[derive(Debug, Serialize)]
struct RoundOutput {
    number: f64,
    to: f64,
    rounded: f64,
}

/// Runs the hours command.
pub fn run_hours<W: Write>(
    writer: &mut W,
    args: &HoursArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let precision = args.precision.unwrap_or(config.hours_precision);
    let hours = seconds_to_hours(args.seconds, precision);

    match format {
        OutputFormat::Text => writeln!(writer, "{hours:?}")?,
        OutputFormat::Json => util::write_json(
            writer,
            &HoursOutput {
                seconds: args.seconds,
                precision,
                hours,
            },
        )?,
    }
    Ok(())
}

/// Runs the round command.
pub fn run_round<W: Write>(writer: &mut W, args: &RoundArgs, format: OutputFormat) -> Result<()> {
    let rounded = round_to(args.number, args.to)
        .with_context(|| format!("failed to round {} to {}", args.number, args.to))?;

    match format {
        OutputFormat::Text => writeln!(writer, "{rounded:?}")?,
        OutputFormat::Json => util::write_json(
            writer,
            &RoundOutput {
                number: args.number,
                to: args.to,
                rounded,
            },
        )?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    fn hours(seconds: i64, precision: Option<i32>, config: &Config) -> String {
        let mut output = Vec::new();
        let args = HoursArgs { seconds, precision };
        run_hours(&mut output, &args, config, OutputFormat::Text).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn round(number: f64, to: f64, format: OutputFormat) -> String {
        let mut output = Vec::new();
        run_round(&mut output, &RoundArgs { number, to }, format).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn hours_default_precision() {
        assert_snapshot!(hours(5400, None, &Config::default()), @"1.5");
        assert_snapshot!(hours(1000, None, &Config::default()), @"0.3");
    }

    #[test]
    fn hours_precision_from_flag_and_config() {
        assert_snapshot!(hours(1000, Some(2), &Config::default()), @"0.28");

        let config = Config {
            hours_precision: 3,
            ..Config::default()
        };
        assert_snapshot!(hours(1000, None, &config), @"0.278");
    }

    #[test]
    fn hours_exact_ties_round_away_from_zero() {
        assert_snapshot!(hours(522, Some(2), &Config::default()), @"0.15");
        assert_snapshot!(hours(-522, Some(2), &Config::default()), @"-0.15");
    }

    #[test]
    fn hours_huge_precision_is_unrounded() {
        assert_snapshot!(hours(3600, Some(400), &Config::default()), @"1.0");
    }

    #[test]
    fn hours_json() {
        let mut output = Vec::new();
        let args = HoursArgs {
            seconds: 3600,
            precision: None,
        };
        run_hours(&mut output, &args, &Config::default(), OutputFormat::Json).unwrap();
        assert_snapshot!(String::from_utf8(output).unwrap(), @r#"
        {
          "seconds": 3600,
          "precision": 1,
          "hours": 1.0
        }
        "#);
    }

    #[test]
    fn round_rounds_up() {
        assert_snapshot!(round(1.1, 1.0, OutputFormat::Text), @"2.0");
        assert_snapshot!(round(1.0, 1.0, OutputFormat::Text), @"1.0");
        assert_snapshot!(round(2.3, 0.5, OutputFormat::Text), @"2.5");
    }

    #[test]
    fn round_json() {
        assert_snapshot!(round(3.0, 2.0, OutputFormat::Json), @r#"
        {
          "number": 3.0,
          "to": 2.0,
          "rounded": 4.0
        }
        "#);
    }

    #[test]
    fn round_rejects_zero_resolution() {
        let mut output = Vec::new();
        let err = run_round(
            &mut output,
            &RoundArgs {
                number: 1.0,
                to: 0.0,
            },
            OutputFormat::Text,
        )
        .unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "failed to round 1 to 0: rounding resolution must be a positive number, got 0"
        );
    }
}
