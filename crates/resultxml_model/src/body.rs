//! Keywords, control structures and the body items they contain.

use serde::{Deserialize, Serialize};

use crate::{Message, Status};

/// Role a keyword plays in its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KeywordType {
    #[default]
    Keyword,
    Setup,
    Teardown,
}

impl KeywordType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            KeywordType::Keyword => "KEYWORD",
            KeywordType::Setup => "SETUP",
            KeywordType::Teardown => "TEARDOWN",
        }
    }
}

/// An executed keyword.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Keyword {
    pub name: String,

    /// Library or resource file the keyword belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(default, rename = "type")]
    pub kw_type: KeywordType,

    /// Original name of an embedded-argument keyword.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,

    #[serde(default)]
    pub assign: Vec<String>,

    #[serde(default)]
    pub args: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub doc: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,

    #[serde(default)]
    pub status: Status,

    #[serde(default)]
    pub body: Vec<BodyItem>,
}

impl Keyword {
    pub fn new(name: impl Into<String>, kw_type: KeywordType) -> Self {
        Self {
            name: name.into(),
            kw_type,
            ..Self::default()
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_body(mut self, body: Vec<BodyItem>) -> Self {
        self.body = body;
        self
    }
}

/// IF/ELSE IF/ELSE structure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct If {
    #[serde(default)]
    pub branches: Vec<IfBranch>,

    #[serde(default)]
    pub status: Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IfBranchType {
    #[default]
    #[serde(rename = "IF")]
    If,
    #[serde(rename = "ELSE IF")]
    ElseIf,
    #[serde(rename = "ELSE")]
    Else,
}

impl IfBranchType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            IfBranchType::If => "IF",
            IfBranchType::ElseIf => "ELSE IF",
            IfBranchType::Else => "ELSE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IfBranch {
    #[serde(default, rename = "type")]
    pub branch_type: IfBranchType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    #[serde(default)]
    pub body: Vec<BodyItem>,

    #[serde(default)]
    pub status: Status,
}

/// FOR loop.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct For {
    /// Loop flavor such as `IN`, `IN RANGE`, `IN ENUMERATE` or `IN ZIP`.
    #[serde(default = "default_flavor")]
    pub flavor: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,

    #[serde(default)]
    pub assign: Vec<String>,

    #[serde(default)]
    pub values: Vec<String>,

    #[serde(default)]
    pub iterations: Vec<ForIteration>,

    #[serde(default)]
    pub status: Status,
}

fn default_flavor() -> String {
    "IN".to_string()
}

/// One round of a FOR loop with the loop variables it bound.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForIteration {
    /// Variable name to value, in assignment order.
    #[serde(default)]
    pub assign: Vec<(String, String)>,

    #[serde(default)]
    pub body: Vec<BodyItem>,

    #[serde(default)]
    pub status: Status,
}

/// TRY/EXCEPT/ELSE/FINALLY structure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Try {
    #[serde(default)]
    pub branches: Vec<TryBranch>,

    #[serde(default)]
    pub status: Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TryBranchType {
    #[default]
    Try,
    Except,
    Else,
    Finally,
}

impl TryBranchType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TryBranchType::Try => "TRY",
            TryBranchType::Except => "EXCEPT",
            TryBranchType::Else => "ELSE",
            TryBranchType::Finally => "FINALLY",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TryBranch {
    #[serde(default, rename = "type")]
    pub branch_type: TryBranchType,

    /// Error patterns of an EXCEPT branch.
    #[serde(default)]
    pub patterns: Vec<String>,

    /// How patterns are matched, e.g. `GLOB` or `REGEXP`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_type: Option<String>,

    /// Variable the caught error is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assign: Option<String>,

    #[serde(default)]
    pub body: Vec<BodyItem>,

    #[serde(default)]
    pub status: Status,
}

/// WHILE loop.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct While {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_limit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_limit_message: Option<String>,

    #[serde(default)]
    pub iterations: Vec<WhileIteration>,

    #[serde(default)]
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WhileIteration {
    #[serde(default)]
    pub body: Vec<BodyItem>,

    #[serde(default)]
    pub status: Status,
}

/// Named GROUP block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub body: Vec<BodyItem>,

    #[serde(default)]
    pub status: Status,
}

/// VAR statement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Var {
    pub name: String,

    #[serde(default)]
    pub value: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,

    #[serde(default)]
    pub body: Vec<BodyItem>,

    #[serde(default)]
    pub status: Status,
}

/// RETURN statement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Return {
    #[serde(default)]
    pub values: Vec<String>,

    #[serde(default)]
    pub body: Vec<BodyItem>,

    #[serde(default)]
    pub status: Status,
}

/// CONTINUE statement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Continue {
    #[serde(default)]
    pub body: Vec<BodyItem>,

    #[serde(default)]
    pub status: Status,
}

/// BREAK statement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Break {
    #[serde(default)]
    pub body: Vec<BodyItem>,

    #[serde(default)]
    pub status: Status,
}

/// Invalid syntax encountered at run time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Error {
    #[serde(default)]
    pub values: Vec<String>,

    #[serde(default)]
    pub body: Vec<BodyItem>,

    #[serde(default)]
    pub status: Status,
}

/// Anything that can appear in the body of a test, keyword or control
/// structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyItem {
    Keyword(Keyword),
    If(If),
    For(For),
    Try(Try),
    While(While),
    Group(Group),
    Var(Var),
    Return(Return),
    Continue(Continue),
    Break(Break),
    Error(Error),
    Message(Message),
}

impl From<Keyword> for BodyItem {
    fn from(kw: Keyword) -> Self {
        BodyItem::Keyword(kw)
    }
}

impl From<Message> for BodyItem {
    fn from(msg: Message) -> Self {
        BodyItem::Message(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LogLevel, StatusCode};

    #[test]
    fn test_keyword_defaults_to_keyword_type() {
        let kw: Keyword = serde_json::from_str(r#"{"name": "Log"}"#).unwrap();
        assert_eq!(kw.kw_type, KeywordType::Keyword);
        assert!(kw.owner.is_none());
        assert!(kw.body.is_empty());
    }

    #[test]
    fn test_body_item_externally_tagged() {
        let json = r#"[
            {"keyword": {"name": "Log", "owner": "BuiltIn", "type": "TEARDOWN"}},
            {"message": {"message": "hello", "level": "WARN"}},
            {"if": {"branches": [{"type": "ELSE IF", "condition": "$x"}]}}
        ]"#;

        let body: Vec<BodyItem> = serde_json::from_str(json).unwrap();

        assert_eq!(body.len(), 3);
        match &body[0] {
            BodyItem::Keyword(kw) => {
                assert_eq!(kw.kw_type, KeywordType::Teardown);
                assert_eq!(kw.owner.as_deref(), Some("BuiltIn"));
            }
            other => panic!("Expected keyword, got {:?}", other),
        }
        assert!(matches!(&body[1], BodyItem::Message(m) if m.level == LogLevel::Warn));
        match &body[2] {
            BodyItem::If(if_) => {
                assert_eq!(if_.branches[0].branch_type, IfBranchType::ElseIf);
                assert_eq!(if_.branches[0].condition.as_deref(), Some("$x"));
                assert_eq!(if_.status.status, StatusCode::NotSet);
            }
            other => panic!("Expected if, got {:?}", other),
        }
    }

    #[test]
    fn test_for_iteration_assign_keeps_order() {
        let json = r#"{"assign": [["${b}", "2"], ["${a}", "1"]]}"#;
        let iteration: ForIteration = serde_json::from_str(json).unwrap();

        assert_eq!(
            iteration.assign,
            vec![
                ("${b}".to_string(), "2".to_string()),
                ("${a}".to_string(), "1".to_string())
            ]
        );
    }

    #[test]
    fn test_for_flavor_default() {
        let for_: For = serde_json::from_str("{}").unwrap();
        assert_eq!(for_.flavor, "IN");
    }
}
