//! Test suites and test cases.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{BodyItem, Keyword, Status};

/// An executed test suite.
///
/// Children are visited in the order setup, child suites, tests, teardown.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TestSuite {
    /// Position based identifier such as `s1-s2`.
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    #[serde(default)]
    pub doc: String,

    /// Free-form metadata in definition order.
    #[serde(default)]
    pub metadata: Vec<(String, String)>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup: Option<Keyword>,

    #[serde(default)]
    pub suites: Vec<TestSuite>,

    #[serde(default)]
    pub tests: Vec<TestCase>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teardown: Option<Keyword>,

    #[serde(default)]
    pub status: Status,
}

impl TestSuite {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Total number of tests in this suite and all of its child suites.
    pub fn test_count(&self) -> usize {
        self.tests.len() + self.suites.iter().map(TestSuite::test_count).sum::<usize>()
    }
}

/// An executed test case (a task in RPA mode).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TestCase {
    pub id: String,

    pub name: String,

    /// Line number in the source file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lineno: Option<u32>,

    #[serde(default)]
    pub doc: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup: Option<Keyword>,

    #[serde(default)]
    pub body: Vec<BodyItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teardown: Option<Keyword>,

    #[serde(default)]
    pub status: Status,
}

impl TestCase {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}
