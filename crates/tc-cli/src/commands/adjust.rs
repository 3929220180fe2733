//! Shift and extend commands for moving timecard endpoints.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tc_core::{InstantParser, Timecard};

use super::util::{self, OutputFormat, TimecardArgs};

/// Which endpoints an adjustment moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Move start and end.
    Shift,
    /// Move only the end.
    Extend,
}

#[derive(Debug, Args)]
pub struct AdjustArgs {
    #[command(flatten)]
    pub timecard: TimecardArgs,

    /// Whole seconds to move by; may be negative.
    #[arg(allow_hyphen_values = true)]
    pub offset: String,
}

#[derive(Debug, Serialize)]
struct AdjustOutput {
    before: Timecard,
    after: Timecard,
}

pub fn run<W: Write, P: InstantParser + ?Sized>(
    writer: &mut W,
    adjustment: Adjustment,
    args: &AdjustArgs,
    parser: &P,
    format: OutputFormat,
) -> Result<()> {
    let before = args.timecard.resolve(parser)?;
    let mut after = before;
    let offset = args.offset.as_str();

    match adjustment {
        Adjustment::Shift => after
            .shift(offset)
            .with_context(|| format!("failed to shift {before} by {offset}"))?,
        Adjustment::Extend => after
            .extend(offset)
            .with_context(|| format!("failed to extend {before} by {offset}"))?,
    }
    tracing::debug!(?adjustment, %before, %after, "adjusted timecard");

    match format {
        OutputFormat::Text => writeln!(writer, "{}", util::format_timecard(&after))?,
        OutputFormat::Json => util::write_json(writer, &AdjustOutput { before, after })?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    use crate::commands::util::test_parser;

    fn args(start: &str, end: &str, offset: &str) -> AdjustArgs {
        AdjustArgs {
            timecard: TimecardArgs {
                start: start.to_string(),
                end: end.to_string(),
            },
            offset: offset.to_string(),
        }
    }

    fn render(adjustment: Adjustment, args: &AdjustArgs, format: OutputFormat) -> String {
        let mut output = Vec::new();
        run(&mut output, adjustment, args, &test_parser(), format).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn shift_moves_both_ends() {
        let output = render(Adjustment::Shift, &args("0", "3600", "1800"), OutputFormat::Text);
        assert_snapshot!(output, @"[1800, 5400) 1970-01-01T00:30:00Z .. 1970-01-01T01:30:00Z");
    }

    #[test]
    fn shift_backwards() {
        let output = render(Adjustment::Shift, &args("today", "now", "-86400"), OutputFormat::Text);
        assert_snapshot!(output, @"[1768348800, 1768386600) 2026-01-14T00:00:00Z .. 2026-01-14T10:30:00Z");
    }

    #[test]
    fn extend_moves_only_end() {
        let output = render(Adjustment::Extend, &args("0", "3600", "600"), OutputFormat::Json);
        assert_snapshot!(output, @r#"
        {
          "before": {
            "start": 0,
            "end": 3600
          },
          "after": {
            "start": 0,
            "end": 4200
          }
        }
        "#);
    }

    #[test]
    fn extend_can_invert() {
        let output = render(Adjustment::Extend, &args("100", "200", "-300"), OutputFormat::Text);
        assert_snapshot!(output, @"[100, -100) 1970-01-01T00:01:40Z .. 1969-12-31T23:58:20Z");
    }

    #[test]
    fn fractional_offset_is_rejected() {
        let mut output = Vec::new();
        let err = run(
            &mut output,
            Adjustment::Shift,
            &args("0", "100", "1.5"),
            &test_parser(),
            OutputFormat::Text,
        )
        .unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "failed to shift [0, 100) by 1.5: offset must be a whole number of seconds, got 1.5"
        );
        assert!(output.is_empty());
    }

    #[test]
    fn non_numeric_offset_is_rejected() {
        let mut output = Vec::new();
        let err = run(
            &mut output,
            Adjustment::Extend,
            &args("0", "100", "soon"),
            &test_parser(),
            OutputFormat::Text,
        )
        .unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "failed to extend [0, 100) by soon: offset must be a whole number of seconds, got soon"
        );
    }
}
