//! Read-only result tree visitor.

use std::ops::ControlFlow;

use crate::{
    Break, Continue, Error, ExecutionErrors, For, ForIteration, Group, If, IfBranch, Keyword,
    Message, Return, Stat, Statistics, TestCase, TestSuite, Try, TryBranch, Var, While,
    WhileIteration,
};

/// Result of a visitor callback.
///
/// `Continue(())` keeps walking, `Break(b)` stops the whole traversal and
/// hands `b` back to the caller of the walk function.
pub type VisitResult<B = ()> = ControlFlow<B>;

macro_rules! container_callbacks {
    ($($start:ident, $end:ident => $ty:ty;)*) => {
        $(
            fn $start(&mut self, _node: &$ty) -> VisitResult<Self::Break> {
                ControlFlow::Continue(())
            }

            fn $end(&mut self, _node: &$ty) -> VisitResult<Self::Break> {
                ControlFlow::Continue(())
            }
        )*
    };
}

/// Callbacks invoked by the `walk_*` functions.
///
/// Every container node gets a `start_*` call before its children and a
/// matching `end_*` call after them. Leaf nodes (messages and statistic
/// counters) get a single `visit_*` call. All callbacks default to doing
/// nothing, so implementors only override what they need.
pub trait ResultVisitor {
    /// Value carried out of the traversal when a callback breaks.
    type Break;

    container_callbacks! {
        start_suite, end_suite => TestSuite;
        start_test, end_test => TestCase;
        start_keyword, end_keyword => Keyword;
        start_if, end_if => If;
        start_if_branch, end_if_branch => IfBranch;
        start_for, end_for => For;
        start_for_iteration, end_for_iteration => ForIteration;
        start_try, end_try => Try;
        start_try_branch, end_try_branch => TryBranch;
        start_while, end_while => While;
        start_while_iteration, end_while_iteration => WhileIteration;
        start_group, end_group => Group;
        start_var, end_var => Var;
        start_return, end_return => Return;
        start_continue, end_continue => Continue;
        start_break, end_break => Break;
        start_error, end_error => Error;
        start_statistics, end_statistics => Statistics;
        start_total_statistics, end_total_statistics => [Stat];
        start_tag_statistics, end_tag_statistics => [Stat];
        start_suite_statistics, end_suite_statistics => [Stat];
        start_errors, end_errors => ExecutionErrors;
    }

    fn visit_message(&mut self, _msg: &Message) -> VisitResult<Self::Break> {
        ControlFlow::Continue(())
    }

    fn visit_stat(&mut self, _stat: &Stat) -> VisitResult<Self::Break> {
        ControlFlow::Continue(())
    }
}
