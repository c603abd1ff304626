//! Node kinds of executable items.

use crate::{
    Break, Continue, Error, For, ForIteration, Group, If, IfBranch, Keyword, KeywordType,
    Return, Status, TestCase, TestSuite, Try, TryBranch, Var, While, WhileIteration,
};

/// Closed set of executable node kinds.
///
/// Keywords carry their [`KeywordType`] because some output formats treat
/// setups and teardowns differently from ordinary keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Suite,
    Test,
    Keyword(KeywordType),
    If,
    IfBranch,
    For,
    ForIteration,
    Try,
    TryBranch,
    While,
    WhileIteration,
    Group,
    Var,
    Return,
    Continue,
    Break,
    Error,
}

/// An item that has been executed and therefore has a [`Status`].
pub trait Executable {
    fn kind(&self) -> ItemKind;

    fn status(&self) -> &Status;
}

macro_rules! impl_executable {
    ($($ty:ty => $kind:expr),* $(,)?) => {
        $(
            impl Executable for $ty {
                fn kind(&self) -> ItemKind {
                    $kind
                }

                fn status(&self) -> &Status {
                    &self.status
                }
            }
        )*
    };
}

impl_executable! {
    TestSuite => ItemKind::Suite,
    TestCase => ItemKind::Test,
    If => ItemKind::If,
    IfBranch => ItemKind::IfBranch,
    For => ItemKind::For,
    ForIteration => ItemKind::ForIteration,
    Try => ItemKind::Try,
    TryBranch => ItemKind::TryBranch,
    While => ItemKind::While,
    WhileIteration => ItemKind::WhileIteration,
    Group => ItemKind::Group,
    Var => ItemKind::Var,
    Return => ItemKind::Return,
    Continue => ItemKind::Continue,
    Break => ItemKind::Break,
    Error => ItemKind::Error,
}

impl Executable for Keyword {
    fn kind(&self) -> ItemKind {
        ItemKind::Keyword(self.kw_type)
    }

    fn status(&self) -> &Status {
        &self.status
    }
}
