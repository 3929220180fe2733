use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tc_cli::commands::util::OutputFormat;
use tc_cli::commands::{adjust, duration, overlap, rounding};
use tc_cli::{Cli, Commands, Config};
use tc_core::DateTimeParser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so stdout stays parseable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let parser = DateTimeParser::current();
    let format = OutputFormat::from_json_flag(cli.json);
    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Some(Commands::Duration(args)) => {
            duration::run(&mut stdout, args, &config, &parser, format)?;
        }
        Some(Commands::Overlap(args)) => {
            overlap::run_overlap(&mut stdout, args, &config, &parser, format)?;
        }
        Some(Commands::Intersect(args)) => {
            overlap::run_intersect(&mut stdout, args, &parser, format)?;
        }
        Some(Commands::Shift(args)) => {
            adjust::run(&mut stdout, adjust::Adjustment::Shift, args, &parser, format)?;
        }
        Some(Commands::Extend(args)) => {
            adjust::run(&mut stdout, adjust::Adjustment::Extend, args, &parser, format)?;
        }
        Some(Commands::Hours(args)) => {
            rounding::run_hours(&mut stdout, args, &config, format)?;
        }
        Some(Commands::Round(args)) => {
            rounding::run_round(&mut stdout, args, format)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
