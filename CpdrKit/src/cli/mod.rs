//! `CpdrKit` CLI - Command-line interface for the WordPress export tools

pub mod commands;
pub mod progress;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use commands::Commands;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "cpdrkit", version)]
#[command(
    about = "CpdrKit: WordPress export tools for the Cultural Property Disputes Resource",
    long_about = None
)]
struct Cli {
    /// Config file (TOML) with default paths and filter settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log to stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Run the `CpdrKit` CLI
///
/// Failures are printed, not returned: the process exits normally after a
/// reported error.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match Config::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            progress::print_error(&e.to_string());
            return Ok(());
        }
    };

    if let Err(e) = cli.command.execute(&config) {
        tracing::debug!("Command failed: {e:?}");
        progress::print_error(&format!("{e:#}"));
    }

    Ok(())
}

// Logs go to stderr; stdout carries the snippet
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}
