//! Write command implementation

use std::path::Path;

use miette::{IntoDiagnostic, Result};
use resultxml_core::{FormatKind, OutputConfig, OutputError, XmlLogger};
use resultxml_model::ExecutionResult;
use tracing::{debug, info};

use crate::cli::Cli;

/// Options of the `write` subcommand that override configuration.
pub struct WriteArgs<'a> {
    pub input: &'a Path,
    pub output: Option<&'a str>,
    pub format: Option<FormatKind>,
    pub rpa: bool,
    pub suite_only: bool,
}

pub fn run_write(cli: &Cli, args: &WriteArgs<'_>) -> Result<()> {
    let mut config = if let Some(ref path) = cli.config {
        OutputConfig::from_file(path).into_diagnostic()?
    } else {
        find_config()?
    };
    apply_overrides(&mut config, args);

    let result = ExecutionResult::from_json_file(args.input)
        .map_err(OutputError::from)
        .into_diagnostic()?;
    debug!(
        "Loaded {} tests from {}",
        result.suite.test_count(),
        args.input.display()
    );

    let options = config.logger_options(result.rpa);
    let format = config.format.strategy();

    if config.discards_output() {
        let mut logger = XmlLogger::discarding(format, options).into_diagnostic()?;
        logger.serialize(&result).into_diagnostic()?;
        println!("Output:  NONE");
    } else {
        let path = config.output_path();
        let mut logger = XmlLogger::to_file(&path, format, options).into_diagnostic()?;
        logger.serialize(&result).into_diagnostic()?;
        println!("Output:  {}", path.display());
    }
    info!("Wrote {} output", config.format);

    Ok(())
}

/// Command line values take precedence over the configuration file.
fn apply_overrides(config: &mut OutputConfig, args: &WriteArgs<'_>) {
    if let Some(output) = args.output {
        config.output = output.to_string();
        // Command line paths are relative to the working directory.
        config.base_dir = None;
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    if args.rpa {
        config.rpa = Some(true);
    }
    if args.suite_only {
        config.suite_only = true;
    }
}

fn find_config() -> Result<OutputConfig> {
    if let Some(path) = OutputConfig::discover(".") {
        info!("Using config: {}", path.display());
        return OutputConfig::from_file(&path).into_diagnostic();
    }

    debug!("No config file found, using defaults");
    Ok(OutputConfig::new())
}
