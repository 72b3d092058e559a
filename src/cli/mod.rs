//! langdat CLI - command-line interface for language file conversion

pub mod commands;
pub mod progress;

use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::prelude::*;

use commands::Commands;

/// Append-only log file receiving a copy of all diagnostics
const LOG_FILE: &str = "langdat.log";

#[derive(Parser)]
#[command(name = "langdat")]
#[command(about = "langdat: FlatOut language DAT/TXT conversion", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the langdat CLI
///
/// # Errors
/// Returns an error if the selected command fails.
pub fn run_cli() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}

/// Route diagnostics to stdout and, when it can be opened, to the
/// append-only log file.
fn init_logging() {
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_target(false)
        .without_time();
    let file_layer = OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE)
        .ok()
        .map(|file| {
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_target(false)
                .with_ansi(false)
        });
    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .init();
}
