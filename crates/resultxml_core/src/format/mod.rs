//! Output schema generations.
//!
//! The serializer walks the same tree for every schema; an [`OutputFormat`]
//! decides how individual nodes map to attributes and text. Formats are
//! stateless and selected at run time through [`FormatKind`].

mod current;
mod legacy;
pub mod timestamp;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use resultxml_model::{ItemKind, Keyword, Message, Status};
use serde::{Deserialize, Serialize};

pub use current::CurrentFormat;
pub use legacy::LegacyFormat;

use crate::writer::Attributes;

/// Mapping from result tree nodes to schema specific attributes.
pub trait OutputFormat: fmt::Debug + Send + Sync {
    /// Value of the root `schemaversion` attribute.
    fn schema_version(&self) -> u8;

    /// Renders a timestamp in this schema's notation.
    fn timestamp(&self, ts: NaiveDateTime) -> String;

    /// Attributes of the root element.
    fn root_attrs(&self, generator: &str, generated: NaiveDateTime, rpa: bool) -> Attributes {
        Attributes::new()
            .with("generator", generator)
            .with("generated", self.timestamp(generated))
            .with("rpa", if rpa { "true" } else { "false" })
            .with("schemaversion", self.schema_version().to_string())
    }

    /// Attributes of a `kw` start tag.
    fn keyword_attrs(&self, kw: &Keyword) -> Attributes;

    /// Attributes of a `status` element.
    fn status_attrs(&self, status: &Status) -> Attributes;

    /// Text of a `status` element for an item of the given kind.
    fn status_message<'a>(&self, kind: ItemKind, status: &'a Status) -> &'a str;

    /// Attributes of a `msg` element.
    fn message_attrs(&self, msg: &Message) -> Attributes;
}

/// Selectable schema generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    /// Schema version 5.
    #[default]
    Current,
    /// Schema version 4.
    Legacy,
}

impl FormatKind {
    /// Returns the strategy implementing this schema.
    pub fn strategy(self) -> Box<dyn OutputFormat> {
        match self {
            FormatKind::Current => Box::new(CurrentFormat),
            FormatKind::Legacy => Box::new(LegacyFormat),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            FormatKind::Current => "current",
            FormatKind::Legacy => "legacy",
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "current" | "5" => Ok(FormatKind::Current),
            "legacy" | "4" => Ok(FormatKind::Legacy),
            other => Err(format!(
                "Unknown output format '{}', expected 'current' or 'legacy'",
                other
            )),
        }
    }
}
