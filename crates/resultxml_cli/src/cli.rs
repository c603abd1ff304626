//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use resultxml_core::FormatKind;

/// resultxml - Writes test execution results as output XML
#[derive(Parser)]
#[command(name = "rxml")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a result tree as output XML
    Write {
        /// Result tree in JSON format
        input: PathBuf,

        /// Output file, or NONE to discard the output
        #[arg(short, long)]
        output: Option<String>,

        /// Output schema (current, legacy)
        #[arg(short, long)]
        format: Option<FormatKind>,

        /// Mark the run as an RPA run
        #[arg(long)]
        rpa: bool,

        /// Write only the suite tree
        #[arg(long)]
        suite_only: bool,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}
