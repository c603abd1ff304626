//! Execution status attached to every executable node.

use std::fmt;
use std::time::Duration;

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// Outcome code of an executed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusCode {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
    #[serde(rename = "SKIP")]
    Skip,
    #[serde(rename = "NOT RUN")]
    NotRun,
    #[default]
    #[serde(rename = "NOT SET")]
    NotSet,
}

impl StatusCode {
    /// Returns the code as written into the output document.
    pub const fn as_str(&self) -> &'static str {
        match self {
            StatusCode::Pass => "PASS",
            StatusCode::Fail => "FAIL",
            StatusCode::Skip => "SKIP",
            StatusCode::NotRun => "NOT RUN",
            StatusCode::NotSet => "NOT SET",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome, timing and message of an executed item.
///
/// Timing is stored as recorded by the execution engine: a start time plus
/// either an end time, an elapsed duration, or both. Derived values are
/// computed by [`Status::elapsed_time`] and [`Status::end_time`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Status {
    pub status: StatusCode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveDateTime>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveDateTime>,

    /// Elapsed time in seconds.
    #[serde(
        default,
        rename = "elapsed_time",
        with = "crate::serde_duration",
        skip_serializing_if = "Option::is_none"
    )]
    pub elapsed: Option<Duration>,

    #[serde(default)]
    pub message: String,
}

impl Status {
    /// Creates a status with the given code and no timing information.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn with_start(mut self, start: NaiveDateTime) -> Self {
        self.start_time = Some(start);
        self
    }

    pub fn with_end(mut self, end: NaiveDateTime) -> Self {
        self.end_time = Some(end);
        self
    }

    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = Some(elapsed);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Elapsed time: the recorded duration if present, otherwise the
    /// difference between end and start, otherwise zero.
    pub fn elapsed_time(&self) -> Duration {
        if let Some(elapsed) = self.elapsed {
            return elapsed;
        }
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => (end - start).to_std().unwrap_or_default(),
            _ => Duration::ZERO,
        }
    }

    /// End time: the recorded end if present, otherwise start plus elapsed.
    pub fn end_time(&self) -> Option<NaiveDateTime> {
        if self.end_time.is_some() {
            return self.end_time;
        }
        let start = self.start_time?;
        let elapsed = TimeDelta::from_std(self.elapsed?).ok()?;
        start.checked_add_signed(elapsed)
    }
}
