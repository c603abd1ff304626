//! # resultxml_model
//!
//! Result tree definitions for resultxml.
//!
//! A result tree is the immutable record of one completed test run: the
//! suite hierarchy, every executed keyword and control structure with its
//! status, the log messages they produced, aggregated statistics and
//! execution errors.
//!
//! ## Architecture
//!
//! - Plain owned structs, built once by the execution engine and only read afterwards
//! - [`BodyItem`] is a closed enum over everything that can appear in a body
//! - [`visitor`] drives depth-first traversal through [`visitor::ResultVisitor`]
//! - All types are serde (de)serializable so trees can be loaded from JSON
//!
//! ## Example
//!
//! ```rust
//! use resultxml_model::{ExecutionResult, StatusCode};
//!
//! let json = r#"{"suite": {"id": "s1", "name": "Root", "status": {"status": "PASS"}}}"#;
//! let result = ExecutionResult::from_json(json).unwrap();
//! assert_eq!(result.suite.status.status, StatusCode::Pass);
//! ```

mod body;
mod error;
mod kind;
mod message;
mod result;
mod serde_duration;
mod statistics;
mod status;
mod suite;
pub mod visitor;

pub use body::{
    Break, BodyItem, Continue, Error, For, ForIteration, Group, If, IfBranch, IfBranchType,
    Keyword, KeywordType, Return, Try, TryBranch, TryBranchType, Var, While, WhileIteration,
};
pub use error::ModelError;
pub use kind::{Executable, ItemKind};
pub use message::{LogLevel, Message};
pub use result::{ExecutionErrors, ExecutionResult};
pub use statistics::{Stat, StatKind, Statistics};
pub use status::{Status, StatusCode};
pub use suite::{TestCase, TestSuite};

// Re-export commonly used visitor items for convenience
pub use visitor::{ResultVisitor, VisitResult};
