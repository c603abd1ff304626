use super::{Attributes, MarkupWriter};
use crate::OutputError;

/// Writer that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMarkupWriter;

impl MarkupWriter for NullMarkupWriter {
    fn destination(&self) -> &str {
        "NONE"
    }

    fn start(
        &mut self,
        _tag: &str,
        _attrs: &Attributes,
        _write_empty: bool,
    ) -> Result<(), OutputError> {
        Ok(())
    }

    fn element(
        &mut self,
        _tag: &str,
        _text: &str,
        _attrs: &Attributes,
        _write_empty: bool,
    ) -> Result<(), OutputError> {
        Ok(())
    }

    fn end(&mut self, _tag: &str) -> Result<(), OutputError> {
        Ok(())
    }

    fn close(&mut self) -> Result<(), OutputError> {
        Ok(())
    }
}
