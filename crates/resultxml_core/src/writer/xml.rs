//! XML writer.

use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use quick_xml::Writer;
use quick_xml::escape::{escape, partial_escape};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;

use super::{Attributes, MarkupWriter};
use crate::OutputError;

/// Writes XML markup, one start tag, leaf element or end tag per line.
pub struct XmlWriter<W: Write> {
    writer: Writer<W>,
    destination: String,
    closed: bool,
}

impl XmlWriter<BufWriter<File>> {
    /// Creates (or truncates) the file at `path` and writes the preamble
    /// when requested.
    pub fn create(path: impl AsRef<Path>, preamble: bool) -> Result<Self, OutputError> {
        let path = path.as_ref();
        let destination = path.display().to_string();
        let file = File::create(path).map_err(|e| OutputError::sink(&destination, e))?;
        debug!("Opened output file {}", destination);
        Self::new(BufWriter::new(file), destination, preamble)
    }
}

impl<W: Write> XmlWriter<W> {
    /// Wraps an arbitrary sink.
    pub fn new(
        out: W,
        destination: impl Into<String>,
        preamble: bool,
    ) -> Result<Self, OutputError> {
        let mut writer = Self {
            writer: Writer::new(out),
            destination: destination.into(),
            closed: false,
        };
        if preamble {
            writer.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
            writer.line_end()?;
        }
        Ok(writer)
    }

    /// Returns the underlying sink.
    pub fn get_ref(&self) -> &W {
        self.writer.get_ref()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn write(&mut self, event: Event<'_>) -> Result<(), OutputError> {
        self.writer
            .write_event(event)
            .map_err(|e| OutputError::sink(&self.destination, io::Error::other(e)))
    }

    fn line_end(&mut self) -> Result<(), OutputError> {
        self.writer
            .get_mut()
            .write_all(b"\n")
            .map_err(|e| OutputError::sink(&self.destination, e))
    }

    fn open_tag<'a>(tag: &'a str, attrs: &Attributes, write_empty: bool) -> BytesStart<'a> {
        let mut start = BytesStart::new(tag);
        for (name, value) in attrs.visible(write_empty) {
            let value = escape_attribute(value);
            start.push_attribute((name.as_bytes(), value.as_bytes()));
        }
        start
    }
}

impl<W: Write> fmt::Debug for XmlWriter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XmlWriter")
            .field("destination", &self.destination)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

impl<W: Write> MarkupWriter for XmlWriter<W> {
    fn destination(&self) -> &str {
        &self.destination
    }

    fn start(
        &mut self,
        tag: &str,
        attrs: &Attributes,
        write_empty: bool,
    ) -> Result<(), OutputError> {
        let start = Self::open_tag(tag, attrs, write_empty);
        self.write(Event::Start(start))?;
        self.line_end()
    }

    fn element(
        &mut self,
        tag: &str,
        text: &str,
        attrs: &Attributes,
        write_empty: bool,
    ) -> Result<(), OutputError> {
        let start = Self::open_tag(tag, attrs, write_empty);
        if !text.is_empty() {
            let text = xml_chars(text);
            self.write(Event::Start(start))?;
            self.write(Event::Text(BytesText::from_escaped(partial_escape(&*text))))?;
            self.write(Event::End(BytesEnd::new(tag)))?;
        } else if write_empty || attrs.visible(false).next().is_some() {
            self.write(Event::Empty(start))?;
        } else {
            return Ok(());
        }
        self.line_end()
    }

    fn end(&mut self, tag: &str) -> Result<(), OutputError> {
        self.write(Event::End(BytesEnd::new(tag)))?;
        self.line_end()
    }

    fn close(&mut self) -> Result<(), OutputError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.writer
            .get_mut()
            .flush()
            .map_err(|e| OutputError::sink(&self.destination, e))?;
        debug!("Closed output {}", self.destination);
        Ok(())
    }
}

/// Whether `c` matches the XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t'
            | '\n'
            | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Drops characters that cannot appear in an XML document, such as the
/// escape sequences of coloured console output.
fn xml_chars(value: &str) -> Cow<'_, str> {
    if value.chars().all(is_xml_char) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(value.chars().filter(|&c| is_xml_char(c)).collect())
    }
}

/// Escapes an attribute value, including whitespace that attribute value
/// normalization would otherwise collapse.
fn escape_attribute(value: &str) -> String {
    escape(&*xml_chars(value))
        .replace('\n', "&#10;")
        .replace('\r', "&#13;")
        .replace('\t', "&#9;")
}
