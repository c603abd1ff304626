//! # resultxml_core
//!
//! Output XML serializer for resultxml.
//!
//! This crate provides:
//! - The [`XmlLogger`] visitor that streams a result tree as XML
//! - Schema generations selected through [`FormatKind`]
//! - Markup writers, including a discarding one
//! - Configuration loading
//!
//! ## Example
//!
//! ```rust,ignore
//! use resultxml_core::{FormatKind, LoggerOptions, XmlLogger};
//! use resultxml_model::ExecutionResult;
//!
//! let result = ExecutionResult::from_json_file("result.json")?;
//! let mut logger = XmlLogger::to_file(
//!     "output.xml",
//!     FormatKind::Current.strategy(),
//!     LoggerOptions { rpa: result.rpa, ..Default::default() },
//! )?;
//! logger.serialize(&result)?;
//! ```

mod config;
mod error;
pub mod format;
mod logger;
pub mod writer;

pub use config::{DISCARD_OUTPUT, OutputConfig};
pub use error::OutputError;
pub use format::{CurrentFormat, FormatKind, LegacyFormat, OutputFormat};
pub use logger::{LoggerOptions, XmlLogger, default_generator};
pub use writer::{Attributes, MarkupWriter, NullMarkupWriter, XmlWriter};
