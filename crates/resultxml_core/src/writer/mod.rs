//! Streaming markup writers.
//!
//! - [`MarkupWriter`] - Tag emitting capability used by the serializer
//! - [`XmlWriter`] - Writes XML to any [`std::io::Write`]
//! - [`NullMarkupWriter`] - Accepts every call and writes nothing

mod null;
mod xml;

pub use null::NullMarkupWriter;
pub use xml::XmlWriter;

use crate::OutputError;

/// Ordered element attributes.
///
/// A `None` value is absent and never written unless the caller forces
/// emission of empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(&'static str, Option<String>)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a present attribute.
    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.entries.push((name, Some(value.into())));
        self
    }

    /// Adds an attribute that may be absent.
    pub fn with_opt<S: Into<String>>(mut self, name: &'static str, value: Option<S>) -> Self {
        self.entries.push((name, value.map(Into::into)));
        self
    }

    pub fn push(&mut self, name: &'static str, value: Option<String>) {
        self.entries.push((name, value));
    }

    /// Looks up an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Returns the attributes that are written out.
    ///
    /// Absent and empty values are dropped unless `write_empty` is set, in
    /// which case absent values are written as empty strings.
    pub fn visible(&self, write_empty: bool) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().filter_map(move |(name, value)| {
            let value = value.as_deref().unwrap_or("");
            (write_empty || !value.is_empty()).then_some((*name, value))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(&'static str, String)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (&'static str, String)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name, Some(value)))
                .collect(),
        }
    }
}

/// Streaming tag emitter.
///
/// Callers are responsible for well-nested `start`/`end` pairs; writers do
/// not validate nesting.
pub trait MarkupWriter {
    /// Human readable name of the sink, used in error messages and logs.
    fn destination(&self) -> &str;

    /// Opens an element.
    fn start(
        &mut self,
        tag: &str,
        attrs: &Attributes,
        write_empty: bool,
    ) -> Result<(), OutputError>;

    /// Writes a complete element with text content.
    ///
    /// Unless `write_empty` is set, the element is skipped entirely when the
    /// text and every attribute are empty or absent.
    fn element(
        &mut self,
        tag: &str,
        text: &str,
        attrs: &Attributes,
        write_empty: bool,
    ) -> Result<(), OutputError>;

    /// Closes the most recently opened element.
    fn end(&mut self, tag: &str) -> Result<(), OutputError>;

    /// Flushes and releases the underlying sink.
    fn close(&mut self) -> Result<(), OutputError>;

    /// Writes a text-only element, skipped when `text` is empty.
    fn text_element(&mut self, tag: &str, text: &str) -> Result<(), OutputError> {
        self.element(tag, text, &Attributes::new(), false)
    }
}
