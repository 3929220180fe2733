//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{adjust, duration, overlap, rounding};

/// Timecard arithmetic.
///
/// Measures, shifts, and intersects `[start, end)` intervals. Instants are
/// epoch seconds or text such as `2026-01-15T10:30:00Z` or `2 hours ago`.
#[derive(Debug, Parser)]
#[command(name = "tc", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Length of a timecard.
    Duration(duration::DurationArgs),

    /// Length of the overlap between two timecards.
    Overlap(overlap::OverlapArgs),

    /// The timecard covered by both inputs.
    Intersect(overlap::PairArgs),

    /// Move both ends of a timecard.
    Shift(adjust::AdjustArgs),

    /// Move the end of a timecard.
    Extend(adjust::AdjustArgs),

    /// Convert seconds to hours.
    Hours(rounding::HoursArgs),

    /// Round a number up to a multiple of a resolution.
    Round(rounding::RoundArgs),
}
