//! Serializer configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::logger::{LoggerOptions, default_generator};
use crate::{FormatKind, OutputError};

use jsonschema::Validator;
use std::sync::OnceLock;

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Validator> = OnceLock::new();

/// Output path that selects the discarding serializer.
pub const DISCARD_OUTPUT: &str = "NONE";

/// Configuration for producing an output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Schema generation to write.
    #[serde(default)]
    pub format: FormatKind,

    /// Output file, or `NONE` to discard.
    #[serde(default = "default_output")]
    pub output: String,

    /// Overrides the RPA flag stored in the result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpa: Option<bool>,

    /// Write only the suite tree.
    #[serde(default)]
    pub suite_only: bool,

    /// Overrides the root `generator` attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,

    /// Base directory for resolving a relative output path.
    /// This is usually the directory containing the configuration file.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

fn default_output() -> String {
    "output.xml".to_string()
}

impl OutputConfig {
    /// Configuration file names looked up in the working directory.
    pub const CONFIG_FILES: &'static [&'static str] = &[".resultxml.json"];

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            format: FormatKind::default(),
            output: default_output(),
            rpa: None,
            suite_only: false,
            generator: None,
            base_dir: None,
        }
    }

    /// Finds the first configuration file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, OutputError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| OutputError::config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::from_json(&content)?;

        if let Some(parent) = path.parent() {
            config.base_dir = Some(parent.to_path_buf());
        }

        Ok(config)
    }

    /// Parses configuration from JSON string with schema validation.
    pub fn from_json(json: &str) -> Result<Self, OutputError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| OutputError::config(format!("Invalid JSON: {}", e)))?;

        let schema = CONFIG_SCHEMA.get_or_init(|| {
            let schema_json: serde_json::Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded config schema");
            Validator::new(&schema_json).expect("Invalid config schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            let error_msg = format!("{} at {}", e, e.instance_path());
            return Err(OutputError::config(format!(
                "Config validation failed: {}",
                error_msg
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| OutputError::config(format!("Invalid config: {}", e)))
    }

    /// Whether output is discarded instead of written.
    pub fn discards_output(&self) -> bool {
        self.output.eq_ignore_ascii_case(DISCARD_OUTPUT)
    }

    /// Output path with a relative path resolved against `base_dir`.
    pub fn output_path(&self) -> PathBuf {
        let output = PathBuf::from(&self.output);
        match &self.base_dir {
            Some(base) if output.is_relative() => base.join(output),
            _ => output,
        }
    }

    /// Logger options for a run whose result carries `result_rpa`.
    pub fn logger_options(&self, result_rpa: bool) -> LoggerOptions {
        LoggerOptions {
            rpa: self.rpa.unwrap_or(result_rpa),
            suite_only: self.suite_only,
            generator: self.generator.clone().unwrap_or_else(default_generator),
            generated: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new()
    }
}
