//! Overlap and intersect commands for comparing two timecards.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tc_core::{InstantParser, Measure, Timecard, Unit};

use super::util::{self, OutputFormat, TimecardArgs};
use crate::Config;

/// Two timecards given as four positional instants.
#[derive(Debug, Args)]
pub struct PairArgs {
    #[command(flatten)]
    pub timecard: TimecardArgs,

    /// Start instant of the other timecard.
    #[arg(allow_hyphen_values = true)]
    pub other_start: String,

    /// End instant of the other timecard.
    #[arg(allow_hyphen_values = true)]
    pub other_end: String,
}

impl PairArgs {
    fn resolve<P: InstantParser + ?Sized>(&self, parser: &P) -> Result<(Timecard, Timecard)> {
        let timecard = self.timecard.resolve(parser)?;
        let other = util::resolve_timecard(&self.other_start, &self.other_end, parser)?;
        Ok((timecard, other))
    }
}

#[derive(Debug, Args)]
pub struct OverlapArgs {
    #[command(flatten)]
    pub pair: PairArgs,

    /// Output unit: "seconds" or "hours". Unrecognized units mean seconds.
    #[arg(short, long)]
    pub unit: Option<String>,
}

#[derive(Debug, Serialize)]
struct OverlapOutput {
    timecard: Timecard,
    other: Timecard,
    unit: Unit,
    overlap: Measure,
}

#[derive(Debug, Serialize)]
struct IntersectOutput {
    timecard: Timecard,
    other: Timecard,
    intersection: Option<Timecard>,
}

/// Runs the overlap command.
pub fn run_overlap<W: Write, P: InstantParser + ?Sized>(
    writer: &mut W,
    args: &OverlapArgs,
    config: &Config,
    parser: &P,
    format: OutputFormat,
) -> Result<()> {
    let (timecard, other) = args.pair.resolve(parser)?;
    let unit = util::resolve_unit(args.unit.as_deref(), config);
    let overlap = timecard.overlap(&other, unit);
    tracing::debug!(%timecard, %other, %overlap, "computed overlap");

    match format {
        OutputFormat::Text => writeln!(writer, "{overlap} {unit}")?,
        OutputFormat::Json => util::write_json(
            writer,
            &OverlapOutput {
                timecard,
                other,
                unit,
                overlap,
            },
        )?,
    }
    Ok(())
}

/// Runs the intersect command.
pub fn run_intersect<W: Write, P: InstantParser + ?Sized>(
    writer: &mut W,
    args: &PairArgs,
    parser: &P,
    format: OutputFormat,
) -> Result<()> {
    let (timecard, other) = args.resolve(parser)?;
    let intersection = timecard.intersect(&other);
    tracing::debug!(%timecard, %other, found = intersection.is_some(), "computed intersection");

    match format {
        OutputFormat::Text => match &intersection {
            Some(shared) => writeln!(writer, "{}", util::format_timecard(shared))?,
            None => writeln!(writer, "no intersection")?,
        },
        OutputFormat::Json => util::write_json(
            writer,
            &IntersectOutput {
                timecard,
                other,
                intersection,
            },
        )?,
    }
    Ok(())
}
