//! Visitor pattern for result tree traversal.
//!
//! # Overview
//!
//! - [`ResultVisitor`] - Callbacks for every node kind
//! - [`walk_result`] - Traverse a whole run: suites, statistics, errors
//! - [`walk_suite`] - Traverse a suite and everything below it
//!
//! The walk functions own the traversal order; visitors only react to it.
//! Returning [`ControlFlow::Break`](std::ops::ControlFlow::Break) from any
//! callback stops the walk and the break value is returned to the caller.
//!
//! # Example
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use resultxml_model::{Keyword, KeywordType, TestCase, TestSuite};
//! use resultxml_model::visitor::{ResultVisitor, VisitResult, walk_suite};
//!
//! #[derive(Default)]
//! struct KeywordCounter {
//!     count: usize,
//! }
//!
//! impl ResultVisitor for KeywordCounter {
//!     type Break = ();
//!
//!     fn start_keyword(&mut self, _kw: &Keyword) -> VisitResult {
//!         self.count += 1;
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let mut test = TestCase::new("s1-t1", "Example");
//! test.body = vec![Keyword::new("Log", KeywordType::Keyword).into()];
//! let mut suite = TestSuite::new("s1", "Suite");
//! suite.tests = vec![test];
//!
//! let mut counter = KeywordCounter::default();
//! let _ = walk_suite(&mut counter, &suite);
//! assert_eq!(counter.count, 1);
//! ```

mod visit;
mod walk;

pub use visit::{ResultVisitor, VisitResult};
pub use walk::{
    walk_body, walk_body_item, walk_errors, walk_keyword, walk_result, walk_statistics,
    walk_suite, walk_test,
};
