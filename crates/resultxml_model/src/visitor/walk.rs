//! Depth-first traversal driving a [`ResultVisitor`].

use std::ops::ControlFlow;

use super::{ResultVisitor, VisitResult};
use crate::{
    BodyItem, ExecutionErrors, ExecutionResult, For, If, Keyword, Statistics, TestCase,
    TestSuite, Try, While,
};

/// Walks the suite tree, then statistics, then execution errors.
pub fn walk_result<V>(visitor: &mut V, result: &ExecutionResult) -> VisitResult<V::Break>
where
    V: ResultVisitor + ?Sized,
{
    walk_suite(visitor, &result.suite)?;
    walk_statistics(visitor, &result.statistics)?;
    walk_errors(visitor, &result.errors)
}

/// Walks a suite: setup, child suites, tests, teardown.
pub fn walk_suite<V>(visitor: &mut V, suite: &TestSuite) -> VisitResult<V::Break>
where
    V: ResultVisitor + ?Sized,
{
    visitor.start_suite(suite)?;
    if let Some(setup) = &suite.setup {
        walk_keyword(visitor, setup)?;
    }
    for child in &suite.suites {
        walk_suite(visitor, child)?;
    }
    for test in &suite.tests {
        walk_test(visitor, test)?;
    }
    if let Some(teardown) = &suite.teardown {
        walk_keyword(visitor, teardown)?;
    }
    visitor.end_suite(suite)
}

/// Walks a test: setup, body, teardown.
pub fn walk_test<V>(visitor: &mut V, test: &TestCase) -> VisitResult<V::Break>
where
    V: ResultVisitor + ?Sized,
{
    visitor.start_test(test)?;
    if let Some(setup) = &test.setup {
        walk_keyword(visitor, setup)?;
    }
    walk_body(visitor, &test.body)?;
    if let Some(teardown) = &test.teardown {
        walk_keyword(visitor, teardown)?;
    }
    visitor.end_test(test)
}

pub fn walk_keyword<V>(visitor: &mut V, kw: &Keyword) -> VisitResult<V::Break>
where
    V: ResultVisitor + ?Sized,
{
    visitor.start_keyword(kw)?;
    walk_body(visitor, &kw.body)?;
    visitor.end_keyword(kw)
}

/// Walks body items in their original order.
pub fn walk_body<V>(visitor: &mut V, body: &[BodyItem]) -> VisitResult<V::Break>
where
    V: ResultVisitor + ?Sized,
{
    for item in body {
        walk_body_item(visitor, item)?;
    }
    ControlFlow::Continue(())
}

pub fn walk_body_item<V>(visitor: &mut V, item: &BodyItem) -> VisitResult<V::Break>
where
    V: ResultVisitor + ?Sized,
{
    match item {
        BodyItem::Keyword(kw) => walk_keyword(visitor, kw),
        BodyItem::If(if_) => walk_if(visitor, if_),
        BodyItem::For(for_) => walk_for(visitor, for_),
        BodyItem::Try(try_) => walk_try(visitor, try_),
        BodyItem::While(while_) => walk_while(visitor, while_),
        BodyItem::Group(group) => {
            visitor.start_group(group)?;
            walk_body(visitor, &group.body)?;
            visitor.end_group(group)
        }
        BodyItem::Var(var) => {
            visitor.start_var(var)?;
            walk_body(visitor, &var.body)?;
            visitor.end_var(var)
        }
        BodyItem::Return(return_) => {
            visitor.start_return(return_)?;
            walk_body(visitor, &return_.body)?;
            visitor.end_return(return_)
        }
        BodyItem::Continue(continue_) => {
            visitor.start_continue(continue_)?;
            walk_body(visitor, &continue_.body)?;
            visitor.end_continue(continue_)
        }
        BodyItem::Break(break_) => {
            visitor.start_break(break_)?;
            walk_body(visitor, &break_.body)?;
            visitor.end_break(break_)
        }
        BodyItem::Error(error) => {
            visitor.start_error(error)?;
            walk_body(visitor, &error.body)?;
            visitor.end_error(error)
        }
        BodyItem::Message(msg) => visitor.visit_message(msg),
    }
}

fn walk_if<V>(visitor: &mut V, if_: &If) -> VisitResult<V::Break>
where
    V: ResultVisitor + ?Sized,
{
    visitor.start_if(if_)?;
    for branch in &if_.branches {
        visitor.start_if_branch(branch)?;
        walk_body(visitor, &branch.body)?;
        visitor.end_if_branch(branch)?;
    }
    visitor.end_if(if_)
}

fn walk_for<V>(visitor: &mut V, for_: &For) -> VisitResult<V::Break>
where
    V: ResultVisitor + ?Sized,
{
    visitor.start_for(for_)?;
    for iteration in &for_.iterations {
        visitor.start_for_iteration(iteration)?;
        walk_body(visitor, &iteration.body)?;
        visitor.end_for_iteration(iteration)?;
    }
    visitor.end_for(for_)
}

fn walk_try<V>(visitor: &mut V, try_: &Try) -> VisitResult<V::Break>
where
    V: ResultVisitor + ?Sized,
{
    visitor.start_try(try_)?;
    for branch in &try_.branches {
        visitor.start_try_branch(branch)?;
        walk_body(visitor, &branch.body)?;
        visitor.end_try_branch(branch)?;
    }
    visitor.end_try(try_)
}

fn walk_while<V>(visitor: &mut V, while_: &While) -> VisitResult<V::Break>
where
    V: ResultVisitor + ?Sized,
{
    visitor.start_while(while_)?;
    for iteration in &while_.iterations {
        visitor.start_while_iteration(iteration)?;
        walk_body(visitor, &iteration.body)?;
        visitor.end_while_iteration(iteration)?;
    }
    visitor.end_while(while_)
}

/// Walks total, tag and suite statistics, in that order.
pub fn walk_statistics<V>(visitor: &mut V, stats: &Statistics) -> VisitResult<V::Break>
where
    V: ResultVisitor + ?Sized,
{
    visitor.start_statistics(stats)?;

    visitor.start_total_statistics(&stats.total)?;
    for stat in &stats.total {
        visitor.visit_stat(stat)?;
    }
    visitor.end_total_statistics(&stats.total)?;

    visitor.start_tag_statistics(&stats.tags)?;
    for stat in &stats.tags {
        visitor.visit_stat(stat)?;
    }
    visitor.end_tag_statistics(&stats.tags)?;

    visitor.start_suite_statistics(&stats.suite)?;
    for stat in &stats.suite {
        visitor.visit_stat(stat)?;
    }
    visitor.end_suite_statistics(&stats.suite)?;

    visitor.end_statistics(stats)
}

pub fn walk_errors<V>(visitor: &mut V, errors: &ExecutionErrors) -> VisitResult<V::Break>
where
    V: ResultVisitor + ?Sized,
{
    visitor.start_errors(errors)?;
    for msg in &errors.messages {
        visitor.visit_message(msg)?;
    }
    visitor.end_errors(errors)
}
