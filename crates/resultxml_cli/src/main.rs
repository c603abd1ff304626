//! resultxml CLI
//!
//! Writes test execution results as output XML.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Write {
            input,
            output,
            format,
            rpa,
            suite_only,
        } => commands::write::run_write(
            cli,
            &commands::write::WriteArgs {
                input,
                output: output.as_deref(),
                format: *format,
                rpa: *rpa,
                suite_only: *suite_only,
            },
        ),
        Commands::Init { force } => commands::init::run_init(*force),
    }
}
