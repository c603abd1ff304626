//! Aggregated pass/fail/skip counters.

use serde::{Deserialize, Serialize};

/// Statistics of a whole run, grouped the way they are written out.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub total: Vec<Stat>,

    #[serde(default)]
    pub tags: Vec<Stat>,

    #[serde(default)]
    pub suite: Vec<Stat>,
}

/// A named counter with a pass/fail/skip breakdown.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,

    #[serde(default)]
    pub pass: u32,

    #[serde(default)]
    pub fail: u32,

    #[serde(default)]
    pub skip: u32,

    #[serde(default)]
    pub kind: StatKind,
}

/// Group-specific information carried by a [`Stat`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    #[default]
    Total,
    Tag {
        #[serde(default)]
        doc: String,
        /// `(title, url)` pairs.
        #[serde(default)]
        links: Vec<(String, String)>,
        /// Pattern of a combined tag statistic, e.g. `smokeANDfast`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        combined: Option<String>,
    },
    Suite {
        id: String,
        /// Short name; the stat's own `name` is the full name.
        name: String,
    },
}

impl Stat {
    pub fn new(name: impl Into<String>, pass: u32, fail: u32, skip: u32) -> Self {
        Self {
            name: name.into(),
            pass,
            fail,
            skip,
            kind: StatKind::Total,
        }
    }

    pub fn with_kind(mut self, kind: StatKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn total(&self) -> u32 {
        self.pass + self.fail + self.skip
    }

    /// Attributes of this stat with every value rendered as a string.
    ///
    /// Counters always come first; group-specific values follow and are left
    /// out when empty.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("pass", self.pass.to_string()),
            ("fail", self.fail.to_string()),
            ("skip", self.skip.to_string()),
        ];
        match &self.kind {
            StatKind::Total => {}
            StatKind::Tag {
                doc,
                links,
                combined,
            } => {
                let links = links
                    .iter()
                    .map(|(title, url)| format!("{}:{}", title, url))
                    .collect::<Vec<_>>()
                    .join(":::");
                let info = if combined.is_some() { "combined" } else { "" };
                attrs.push(("doc", doc.clone()));
                attrs.push(("links", links));
                attrs.push(("info", info.to_string()));
                attrs.push(("combined", combined.clone().unwrap_or_default()));
            }
            StatKind::Suite { id, name } => {
                attrs.push(("id", id.clone()));
                attrs.push(("name", name.clone()));
            }
        }
        attrs.retain(|(_, value)| !value.is_empty());
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn owned(attrs: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
        attrs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_total_stat_attributes_are_strings() {
        let stat = Stat::new("All Tests", 3, 0, 1);
        assert_eq!(
            stat.attributes(),
            owned(&[("pass", "3"), ("fail", "0"), ("skip", "1")])
        );
        assert_eq!(stat.total(), 4);
    }

    #[test]
    fn test_tag_stat_drops_empty_values() {
        let stat = Stat::new("smoke", 2, 1, 0).with_kind(StatKind::Tag {
            doc: String::new(),
            links: vec![],
            combined: None,
        });
        assert_eq!(
            stat.attributes(),
            owned(&[("pass", "2"), ("fail", "1"), ("skip", "0")])
        );
    }

    #[test]
    fn test_combined_tag_stat() {
        let stat = Stat::new("smoke AND fast", 1, 0, 0).with_kind(StatKind::Tag {
            doc: "Quick ones".to_string(),
            links: vec![
                ("Issue".to_string(), "http://x/1".to_string()),
                ("Wiki".to_string(), "http://y".to_string()),
            ],
            combined: Some("smokeANDfast".to_string()),
        });
        assert_eq!(
            stat.attributes(),
            owned(&[
                ("pass", "1"),
                ("fail", "0"),
                ("skip", "0"),
                ("doc", "Quick ones"),
                ("links", "Issue:http://x/1:::Wiki:http://y"),
                ("info", "combined"),
                ("combined", "smokeANDfast"),
            ])
        );
    }

    #[test]
    fn test_suite_stat_attributes() {
        let stat = Stat::new("Root.Child", 0, 2, 0).with_kind(StatKind::Suite {
            id: "s1-s1".to_string(),
            name: "Child".to_string(),
        });
        assert_eq!(
            stat.attributes(),
            owned(&[
                ("pass", "0"),
                ("fail", "2"),
                ("skip", "0"),
                ("id", "s1-s1"),
                ("name", "Child"),
            ])
        );
    }
}
