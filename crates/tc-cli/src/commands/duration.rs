//! Duration command for measuring a single timecard.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tc_core::{InstantParser, Measure, Timecard, Unit};

use super::util::{self, OutputFormat, TimecardArgs};
use crate::Config;

#[derive(Debug, Args)]
pub struct DurationArgs {
    #[command(flatten)]
    pub timecard: TimecardArgs,

    /// Output unit: "seconds" or "hours". Unrecognized units mean seconds.
    #[arg(short, long)]
    pub unit: Option<String>,
}

#[derive(Debug, Serialize)]
struct DurationOutput {
    timecard: Timecard,
    unit: Unit,
    duration: Measure,
}

pub fn run<W: Write, P: InstantParser + ?Sized>(
    writer: &mut W,
    args: &DurationArgs,
    config: &Config,
    parser: &P,
    format: OutputFormat,
) -> Result<()> {
    let timecard = args.timecard.resolve(parser)?;
    let unit = util::resolve_unit(args.unit.as_deref(), config);
    let duration = timecard.duration(unit);
    tracing::debug!(%timecard, %unit, %duration, "computed duration");

    match format {
        OutputFormat::Text => writeln!(writer, "{duration} {unit}")?,
        OutputFormat::Json => util::write_json(
            writer,
            &DurationOutput {
                timecard,
                unit,
                duration,
            },
        )?,
    }
    Ok(())
}
