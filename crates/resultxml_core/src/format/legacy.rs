use chrono::NaiveDateTime;
use resultxml_model::{ItemKind, Keyword, KeywordType, Message, Status};

use super::{OutputFormat, timestamp};
use crate::writer::Attributes;

/// Schema version 4.
///
/// Differs from [`CurrentFormat`](super::CurrentFormat) in notation only:
/// compact timestamps, `library`/`sourcename` keyword attributes, explicit
/// start and end times on statuses and a `timestamp` message attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyFormat;

impl OutputFormat for LegacyFormat {
    fn schema_version(&self) -> u8 {
        4
    }

    fn timestamp(&self, ts: NaiveDateTime) -> String {
        timestamp::compact(ts)
    }

    fn keyword_attrs(&self, kw: &Keyword) -> Attributes {
        let mut attrs = Attributes::new()
            .with("name", kw.name.as_str())
            .with_opt("library", kw.owner.as_deref());
        if kw.kw_type != KeywordType::Keyword {
            attrs.push("type", Some(kw.kw_type.as_str().to_string()));
        }
        if let Some(source_name) = &kw.source_name {
            attrs.push("sourcename", Some(source_name.clone()));
        }
        attrs
    }

    fn status_attrs(&self, status: &Status) -> Attributes {
        Attributes::new()
            .with("status", status.status.as_str())
            .with_opt("starttime", status.start_time.map(timestamp::compact))
            .with_opt("endtime", status.end_time().map(timestamp::compact))
    }

    /// Schema 4 readers only expect messages on suites, tests and teardowns.
    fn status_message<'a>(&self, kind: ItemKind, status: &'a Status) -> &'a str {
        match kind {
            ItemKind::Suite | ItemKind::Test | ItemKind::Keyword(KeywordType::Teardown) => {
                &status.message
            }
            ItemKind::Keyword(KeywordType::Keyword | KeywordType::Setup)
            | ItemKind::If
            | ItemKind::IfBranch
            | ItemKind::For
            | ItemKind::ForIteration
            | ItemKind::Try
            | ItemKind::TryBranch
            | ItemKind::While
            | ItemKind::WhileIteration
            | ItemKind::Group
            | ItemKind::Var
            | ItemKind::Return
            | ItemKind::Continue
            | ItemKind::Break
            | ItemKind::Error => "",
        }
    }

    fn message_attrs(&self, msg: &Message) -> Attributes {
        let attrs = Attributes::new()
            .with_opt("timestamp", msg.timestamp.map(timestamp::compact))
            .with("level", msg.level.as_str());
        if msg.html {
            attrs.with("html", "true")
        } else {
            attrs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use resultxml_model::{LogLevel, StatusCode};
    use rstest::rstest;
    use std::time::Duration;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_milli_opt(3, 4, 5, 123)
            .unwrap()
    }

    #[test]
    fn test_keyword_attribute_names() {
        let mut kw = Keyword::new("Close", KeywordType::Setup).with_owner("Browser");
        kw.source_name = Some("Close ${x}".to_string());
        let attrs = LegacyFormat.keyword_attrs(&kw);

        assert_eq!(attrs.get("library"), Some("Browser"));
        assert_eq!(attrs.get("owner"), None);
        assert_eq!(attrs.get("sourcename"), Some("Close ${x}"));
        assert_eq!(attrs.get("source_name"), None);
        assert_eq!(attrs.get("type"), Some("SETUP"));
    }

    #[test]
    fn test_status_attrs_start_and_end() {
        let status = Status::new(StatusCode::Pass)
            .with_start(start())
            .with_elapsed(Duration::from_millis(1_000));
        let attrs = LegacyFormat.status_attrs(&status);

        assert_eq!(attrs.get("starttime"), Some("20240102 03:04:05.123"));
        assert_eq!(attrs.get("endtime"), Some("20240102 03:04:06.123"));
        assert_eq!(attrs.get("elapsed"), None);
    }

    #[test]
    fn test_status_attrs_absent_times() {
        let attrs = LegacyFormat.status_attrs(&Status::new(StatusCode::NotRun));
        assert_eq!(attrs.get("status"), Some("NOT RUN"));
        assert_eq!(attrs.get("starttime"), None);
        assert_eq!(attrs.get("endtime"), None);
    }

    #[rstest]
    #[case::suite(ItemKind::Suite, "some message")]
    #[case::test(ItemKind::Test, "some message")]
    #[case::teardown(ItemKind::Keyword(KeywordType::Teardown), "some message")]
    #[case::setup(ItemKind::Keyword(KeywordType::Setup), "")]
    #[case::keyword(ItemKind::Keyword(KeywordType::Keyword), "")]
    #[case::if_branch(ItemKind::IfBranch, "")]
    #[case::for_loop(ItemKind::For, "")]
    #[case::var(ItemKind::Var, "")]
    fn test_status_message_only_for_suite_test_and_teardown(
        #[case] kind: ItemKind,
        #[case] expected: &str,
    ) {
        let status = Status::new(StatusCode::Pass).with_message("some message");
        assert_eq!(LegacyFormat.status_message(kind, &status), expected);
    }

    #[test]
    fn test_message_attrs() {
        let msg = Message::new("hello", LogLevel::Info).at(start());
        let attrs = LegacyFormat.message_attrs(&msg);

        assert_eq!(attrs.get("timestamp"), Some("20240102 03:04:05.123"));
        assert_eq!(attrs.get("time"), None);
        assert_eq!(attrs.get("html"), None);
    }
}
