//! CLI subcommand implementations.

pub mod adjust;
pub mod duration;
pub mod overlap;
pub mod rounding;
pub mod util;
