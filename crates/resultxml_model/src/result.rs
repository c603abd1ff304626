//! The root of a result tree.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Message, ModelError, Statistics, TestSuite};

/// Errors and warnings logged outside of any test.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExecutionErrors {
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// Everything recorded about one completed run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub suite: TestSuite,

    #[serde(default)]
    pub statistics: Statistics,

    #[serde(default)]
    pub errors: ExecutionErrors,

    /// Whether the run was a robotic process automation run (tasks, not tests).
    #[serde(default)]
    pub rpa: bool,
}

impl ExecutionResult {
    pub fn new(suite: TestSuite) -> Self {
        Self {
            suite,
            ..Self::default()
        }
    }

    /// Parses a result tree from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(ModelError::from)
    }

    /// Reads and parses a result tree from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_minimal() {
        let result =
            ExecutionResult::from_json(r#"{"suite": {"id": "s1", "name": "Root"}}"#).unwrap();

        assert_eq!(result.suite.name, "Root");
        assert!(!result.rpa);
        assert!(result.errors.messages.is_empty());
        assert!(result.statistics.total.is_empty());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = ExecutionResult::from_json(r#"{"suite": 1}"#).unwrap_err();
        assert!(matches!(err, ModelError::Json(_)));
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = ExecutionResult::from_json_file("/nonexistent/result.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/result.json"));
    }
}
