//! Result tree to XML serializer.

use std::fs::File;
use std::io::BufWriter;
use std::ops::ControlFlow;
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use resultxml_model::visitor::{ResultVisitor, VisitResult, walk_result, walk_suite};
use resultxml_model::{
    Break, Continue, Error, Executable, ExecutionErrors, ExecutionResult, For, ForIteration,
    Group, If, IfBranch, Keyword, Message, Return, Stat, Statistics, TestCase, TestSuite, Try,
    TryBranch, TryBranchType, Var, While, WhileIteration,
};
use tracing::{debug, info, trace, warn};

use crate::OutputError;
use crate::format::OutputFormat;
use crate::writer::{Attributes, MarkupWriter, NullMarkupWriter, XmlWriter};

const ROOT: &str = "robot";

/// Default value of the root `generator` attribute.
pub fn default_generator() -> String {
    format!("resultxml {}", env!("CARGO_PKG_VERSION"))
}

/// Document level options of an [`XmlLogger`].
#[derive(Debug, Clone)]
pub struct LoggerOptions {
    /// Marks the run as robotic process automation.
    pub rpa: bool,

    /// Write only the suite tree: no preamble, no root element, no
    /// statistics or errors. Used for partial documents that are combined
    /// later.
    pub suite_only: bool,

    pub generator: String,

    /// Generation time; defaults to now.
    pub generated: Option<NaiveDateTime>,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            rpa: false,
            suite_only: false,
            generator: default_generator(),
            generated: None,
        }
    }
}

/// Serializes a result tree through a [`MarkupWriter`].
///
/// The logger is a [`ResultVisitor`]: the `walk_*` functions drive it and
/// every callback turns one node into writer calls. Schema differences are
/// delegated to the [`OutputFormat`] it was built with, so the same logger
/// writes either schema and, with a [`NullMarkupWriter`], nothing at all.
///
/// A logger is single-use. The writer is owned by the logger and closed by
/// [`XmlLogger::close`], by [`XmlLogger::serialize`] on every exit path, or
/// at the latest when the logger is dropped.
#[derive(Debug)]
pub struct XmlLogger<W: MarkupWriter> {
    writer: W,
    format: Box<dyn OutputFormat>,
    root_written: bool,
    closed: bool,
    nodes: usize,
}

impl XmlLogger<XmlWriter<BufWriter<File>>> {
    /// Opens `path` for writing and starts the document.
    pub fn to_file(
        path: impl AsRef<Path>,
        format: Box<dyn OutputFormat>,
        options: LoggerOptions,
    ) -> Result<Self, OutputError> {
        let writer = XmlWriter::create(path, !options.suite_only)?;
        Self::new(writer, format, options)
    }
}

impl XmlLogger<NullMarkupWriter> {
    /// Logger that walks trees exactly like a real one but writes nothing.
    pub fn discarding(
        format: Box<dyn OutputFormat>,
        options: LoggerOptions,
    ) -> Result<Self, OutputError> {
        Self::new(NullMarkupWriter, format, options)
    }
}

impl<W: MarkupWriter> XmlLogger<W> {
    /// Starts the document on `writer`.
    ///
    /// Unless `suite_only` is set, the root element is written immediately.
    pub fn new(
        writer: W,
        format: Box<dyn OutputFormat>,
        options: LoggerOptions,
    ) -> Result<Self, OutputError> {
        let mut logger = Self {
            writer,
            format,
            root_written: false,
            closed: false,
            nodes: 0,
        };
        debug!(
            "Writing schema version {} to {}",
            logger.format.schema_version(),
            logger.writer.destination()
        );
        if !options.suite_only {
            let generated = options
                .generated
                .unwrap_or_else(|| Local::now().naive_local());
            let attrs = logger
                .format
                .root_attrs(&options.generator, generated, options.rpa);
            logger.writer.start(ROOT, &attrs, false)?;
            logger.root_written = true;
        }
        Ok(logger)
    }

    /// Serializes `result` and closes the writer.
    ///
    /// In suite-only mode only the suite tree is written. The writer is
    /// closed even when writing fails; the first error is returned.
    pub fn serialize(&mut self, result: &ExecutionResult) -> Result<(), OutputError> {
        let flow = if self.root_written {
            walk_result(self, result)
        } else {
            walk_suite(self, &result.suite)
        };
        let closed = self.close();
        if let ControlFlow::Break(err) = flow {
            return Err(err);
        }
        closed?;
        info!(
            "Serialized {} nodes to {}",
            self.nodes,
            self.writer.destination()
        );
        Ok(())
    }

    /// Ends the root element, if one was written, and closes the writer.
    ///
    /// Calling this more than once has no further effect.
    pub fn close(&mut self) -> Result<(), OutputError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        let ended = if self.root_written {
            self.writer.end(ROOT)
        } else {
            Ok(())
        };
        let closed = self.writer.close();
        ended.and(closed)
    }

    /// Number of nodes visited so far.
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn start(&mut self, tag: &str, attrs: Attributes) -> Result<(), OutputError> {
        self.nodes += 1;
        trace!("<{}>", tag);
        self.writer.start(tag, &attrs, false)
    }

    fn end(&mut self, tag: &str) -> Result<(), OutputError> {
        self.writer.end(tag)
    }

    fn write_list(&mut self, tag: &str, items: &[String]) -> Result<(), OutputError> {
        for item in items {
            self.writer.text_element(tag, item)?;
        }
        Ok(())
    }

    fn write_timeout(&mut self, timeout: Option<&str>) -> Result<(), OutputError> {
        if let Some(timeout) = timeout {
            let attrs = Attributes::new().with("value", timeout);
            self.writer.element("timeout", "", &attrs, false)?;
        }
        Ok(())
    }

    fn write_status(&mut self, item: &dyn Executable) -> Result<(), OutputError> {
        let status = item.status();
        let attrs = self.format.status_attrs(status);
        let message = self.format.status_message(item.kind(), status);
        self.writer.element("status", message, &attrs, false)
    }

    fn write_message(&mut self, msg: &Message) -> Result<(), OutputError> {
        self.nodes += 1;
        let attrs = self.format.message_attrs(msg);
        self.writer.element("msg", &msg.message, &attrs, false)
    }

    fn end_with_status(&mut self, tag: &str, item: &dyn Executable) -> Result<(), OutputError> {
        self.write_status(item)?;
        self.end(tag)
    }

    fn write_suite_start(&mut self, suite: &TestSuite) -> Result<(), OutputError> {
        let attrs = Attributes::new()
            .with("id", suite.id.as_str())
            .with("name", suite.name.as_str())
            .with_opt("source", suite.source.as_ref().map(|p| p.display().to_string()));
        self.start("suite", attrs)
    }

    fn write_suite_end(&mut self, suite: &TestSuite) -> Result<(), OutputError> {
        self.writer.text_element("doc", &suite.doc)?;
        for (name, value) in &suite.metadata {
            let attrs = Attributes::new().with("name", name.as_str());
            self.writer.element("meta", value, &attrs, false)?;
        }
        self.end_with_status("suite", suite)
    }

    fn write_test_start(&mut self, test: &TestCase) -> Result<(), OutputError> {
        let line = test
            .lineno
            .filter(|&l| l != 0)
            .map(|l| l.to_string())
            .unwrap_or_default();
        let attrs = Attributes::new()
            .with("id", test.id.as_str())
            .with("name", test.name.as_str())
            .with("line", line);
        self.start("test", attrs)
    }

    fn write_test_end(&mut self, test: &TestCase) -> Result<(), OutputError> {
        self.writer.text_element("doc", &test.doc)?;
        self.write_list("tag", &test.tags)?;
        self.write_timeout(test.timeout.as_deref())?;
        self.end_with_status("test", test)
    }

    fn write_keyword_end(&mut self, kw: &Keyword) -> Result<(), OutputError> {
        self.write_list("var", &kw.assign)?;
        self.write_list("arg", &kw.args)?;
        self.write_list("tag", &kw.tags)?;
        self.writer.text_element("doc", &kw.doc)?;
        self.write_timeout(kw.timeout.as_deref())?;
        self.end_with_status("kw", kw)
    }

    fn write_for_start(&mut self, for_: &For) -> Result<(), OutputError> {
        let attrs = Attributes::new()
            .with("flavor", for_.flavor.as_str())
            .with_opt("start", for_.start.as_deref())
            .with_opt("mode", for_.mode.as_deref())
            .with_opt("fill", for_.fill.as_deref());
        self.start("for", attrs)
    }

    fn write_for_end(&mut self, for_: &For) -> Result<(), OutputError> {
        self.write_list("var", &for_.assign)?;
        self.write_list("value", &for_.values)?;
        self.end_with_status("for", for_)
    }

    fn write_for_iteration_end(&mut self, iteration: &ForIteration) -> Result<(), OutputError> {
        for (name, value) in &iteration.assign {
            let attrs = Attributes::new().with("name", name.as_str());
            self.writer.element("var", value, &attrs, false)?;
        }
        self.end_with_status("iter", iteration)
    }

    fn write_try_branch_start(&mut self, branch: &TryBranch) -> Result<(), OutputError> {
        if branch.branch_type == TryBranchType::Except {
            let attrs = Attributes::new()
                .with("type", TryBranchType::Except.as_str())
                .with_opt("pattern_type", branch.pattern_type.as_deref())
                .with_opt("assign", branch.assign.as_deref());
            self.start("branch", attrs)?;
            self.write_list("pattern", &branch.patterns)
        } else {
            let attrs = Attributes::new().with("type", branch.branch_type.as_str());
            self.start("branch", attrs)
        }
    }

    fn write_while_start(&mut self, while_: &While) -> Result<(), OutputError> {
        let attrs = Attributes::new()
            .with_opt("condition", while_.condition.as_deref())
            .with_opt("limit", while_.limit.as_deref())
            .with_opt("on_limit", while_.on_limit.as_deref())
            .with_opt("on_limit_message", while_.on_limit_message.as_deref());
        self.start("while", attrs)
    }

    /// VAR always writes its attributes, even empty ones.
    fn write_var_start(&mut self, var: &Var) -> Result<(), OutputError> {
        let mut attrs = Attributes::new().with("name", var.name.as_str());
        if let Some(scope) = &var.scope {
            attrs.push("scope", Some(scope.clone()));
        }
        if let Some(separator) = &var.separator {
            attrs.push("separator", Some(separator.clone()));
        }
        self.nodes += 1;
        trace!("<variable>");
        self.writer.start("variable", &attrs, true)
    }

    fn write_var_end(&mut self, var: &Var) -> Result<(), OutputError> {
        self.write_list("var", &var.value)?;
        self.end_with_status("variable", var)
    }

    fn write_values_end(
        &mut self,
        tag: &str,
        values: &[String],
        item: &dyn Executable,
    ) -> Result<(), OutputError> {
        self.write_list("value", values)?;
        self.end_with_status(tag, item)
    }

    fn write_stat(&mut self, stat: &Stat) -> Result<(), OutputError> {
        self.nodes += 1;
        let attrs: Attributes = stat.attributes().into_iter().collect();
        self.writer.element("stat", &stat.name, &attrs, false)
    }
}

impl<W: MarkupWriter> Drop for XmlLogger<W> {
    fn drop(&mut self) {
        if !self.closed {
            warn!(
                "Output {} dropped without being closed",
                self.writer.destination()
            );
            if let Err(e) = self.close() {
                warn!("Failed to close output: {}", e);
            }
        }
    }
}

fn flow(result: Result<(), OutputError>) -> VisitResult<OutputError> {
    match result {
        Ok(()) => ControlFlow::Continue(()),
        Err(err) => ControlFlow::Break(err),
    }
}

impl<W: MarkupWriter> ResultVisitor for XmlLogger<W> {
    type Break = OutputError;

    fn start_suite(&mut self, suite: &TestSuite) -> VisitResult<OutputError> {
        flow(self.write_suite_start(suite))
    }

    fn end_suite(&mut self, suite: &TestSuite) -> VisitResult<OutputError> {
        flow(self.write_suite_end(suite))
    }

    fn start_test(&mut self, test: &TestCase) -> VisitResult<OutputError> {
        flow(self.write_test_start(test))
    }

    fn end_test(&mut self, test: &TestCase) -> VisitResult<OutputError> {
        flow(self.write_test_end(test))
    }

    fn start_keyword(&mut self, kw: &Keyword) -> VisitResult<OutputError> {
        let attrs = self.format.keyword_attrs(kw);
        flow(self.start("kw", attrs))
    }

    fn end_keyword(&mut self, kw: &Keyword) -> VisitResult<OutputError> {
        flow(self.write_keyword_end(kw))
    }

    fn start_if(&mut self, _if: &If) -> VisitResult<OutputError> {
        flow(self.start("if", Attributes::new()))
    }

    fn end_if(&mut self, if_: &If) -> VisitResult<OutputError> {
        flow(self.end_with_status("if", if_))
    }

    fn start_if_branch(&mut self, branch: &IfBranch) -> VisitResult<OutputError> {
        let attrs = Attributes::new()
            .with("type", branch.branch_type.as_str())
            .with_opt("condition", branch.condition.as_deref());
        flow(self.start("branch", attrs))
    }

    fn end_if_branch(&mut self, branch: &IfBranch) -> VisitResult<OutputError> {
        flow(self.end_with_status("branch", branch))
    }

    fn start_for(&mut self, for_: &For) -> VisitResult<OutputError> {
        flow(self.write_for_start(for_))
    }

    fn end_for(&mut self, for_: &For) -> VisitResult<OutputError> {
        flow(self.write_for_end(for_))
    }

    fn start_for_iteration(&mut self, _iteration: &ForIteration) -> VisitResult<OutputError> {
        flow(self.start("iter", Attributes::new()))
    }

    fn end_for_iteration(&mut self, iteration: &ForIteration) -> VisitResult<OutputError> {
        flow(self.write_for_iteration_end(iteration))
    }

    fn start_try(&mut self, _try: &Try) -> VisitResult<OutputError> {
        flow(self.start("try", Attributes::new()))
    }

    fn end_try(&mut self, try_: &Try) -> VisitResult<OutputError> {
        flow(self.end_with_status("try", try_))
    }

    fn start_try_branch(&mut self, branch: &TryBranch) -> VisitResult<OutputError> {
        flow(self.write_try_branch_start(branch))
    }

    fn end_try_branch(&mut self, branch: &TryBranch) -> VisitResult<OutputError> {
        flow(self.end_with_status("branch", branch))
    }

    fn start_while(&mut self, while_: &While) -> VisitResult<OutputError> {
        flow(self.write_while_start(while_))
    }

    fn end_while(&mut self, while_: &While) -> VisitResult<OutputError> {
        flow(self.end_with_status("while", while_))
    }

    fn start_while_iteration(&mut self, _iteration: &WhileIteration) -> VisitResult<OutputError> {
        flow(self.start("iter", Attributes::new()))
    }

    fn end_while_iteration(&mut self, iteration: &WhileIteration) -> VisitResult<OutputError> {
        flow(self.end_with_status("iter", iteration))
    }

    fn start_group(&mut self, group: &Group) -> VisitResult<OutputError> {
        let attrs = Attributes::new().with("name", group.name.as_str());
        flow(self.start("group", attrs))
    }

    fn end_group(&mut self, group: &Group) -> VisitResult<OutputError> {
        flow(self.end_with_status("group", group))
    }

    fn start_var(&mut self, var: &Var) -> VisitResult<OutputError> {
        flow(self.write_var_start(var))
    }

    fn end_var(&mut self, var: &Var) -> VisitResult<OutputError> {
        flow(self.write_var_end(var))
    }

    fn start_return(&mut self, _return: &Return) -> VisitResult<OutputError> {
        flow(self.start("return", Attributes::new()))
    }

    fn end_return(&mut self, return_: &Return) -> VisitResult<OutputError> {
        flow(self.write_values_end("return", &return_.values, return_))
    }

    fn start_continue(&mut self, _continue: &Continue) -> VisitResult<OutputError> {
        flow(self.start("continue", Attributes::new()))
    }

    fn end_continue(&mut self, continue_: &Continue) -> VisitResult<OutputError> {
        flow(self.end_with_status("continue", continue_))
    }

    fn start_break(&mut self, _break: &Break) -> VisitResult<OutputError> {
        flow(self.start("break", Attributes::new()))
    }

    fn end_break(&mut self, break_: &Break) -> VisitResult<OutputError> {
        flow(self.end_with_status("break", break_))
    }

    fn start_error(&mut self, _error: &Error) -> VisitResult<OutputError> {
        flow(self.start("error", Attributes::new()))
    }

    fn end_error(&mut self, error: &Error) -> VisitResult<OutputError> {
        flow(self.write_values_end("error", &error.values, error))
    }

    fn visit_message(&mut self, msg: &Message) -> VisitResult<OutputError> {
        flow(self.write_message(msg))
    }

    fn start_statistics(&mut self, _stats: &Statistics) -> VisitResult<OutputError> {
        flow(self.start("statistics", Attributes::new()))
    }

    fn end_statistics(&mut self, _stats: &Statistics) -> VisitResult<OutputError> {
        flow(self.end("statistics"))
    }

    fn start_total_statistics(&mut self, _stats: &[Stat]) -> VisitResult<OutputError> {
        flow(self.start("total", Attributes::new()))
    }

    fn end_total_statistics(&mut self, _stats: &[Stat]) -> VisitResult<OutputError> {
        flow(self.end("total"))
    }

    fn start_tag_statistics(&mut self, _stats: &[Stat]) -> VisitResult<OutputError> {
        flow(self.start("tag", Attributes::new()))
    }

    fn end_tag_statistics(&mut self, _stats: &[Stat]) -> VisitResult<OutputError> {
        flow(self.end("tag"))
    }

    fn start_suite_statistics(&mut self, _stats: &[Stat]) -> VisitResult<OutputError> {
        flow(self.start("suite", Attributes::new()))
    }

    fn end_suite_statistics(&mut self, _stats: &[Stat]) -> VisitResult<OutputError> {
        flow(self.end("suite"))
    }

    fn visit_stat(&mut self, stat: &Stat) -> VisitResult<OutputError> {
        flow(self.write_stat(stat))
    }

    fn start_errors(&mut self, _errors: &ExecutionErrors) -> VisitResult<OutputError> {
        flow(self.start("errors", Attributes::new()))
    }

    fn end_errors(&mut self, _errors: &ExecutionErrors) -> VisitResult<OutputError> {
        flow(self.end("errors"))
    }
}
