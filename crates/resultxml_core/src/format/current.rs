use chrono::NaiveDateTime;
use resultxml_model::{ItemKind, Keyword, KeywordType, Message, Status};

use super::{OutputFormat, timestamp};
use crate::writer::Attributes;

/// Schema version 5.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentFormat;

impl OutputFormat for CurrentFormat {
    fn schema_version(&self) -> u8 {
        5
    }

    fn timestamp(&self, ts: NaiveDateTime) -> String {
        timestamp::iso(ts)
    }

    fn keyword_attrs(&self, kw: &Keyword) -> Attributes {
        let mut attrs = Attributes::new()
            .with("name", kw.name.as_str())
            .with_opt("owner", kw.owner.as_deref());
        if kw.kw_type != KeywordType::Keyword {
            attrs.push("type", Some(kw.kw_type.as_str().to_string()));
        }
        if let Some(source_name) = &kw.source_name {
            attrs.push("source_name", Some(source_name.clone()));
        }
        attrs
    }

    fn status_attrs(&self, status: &Status) -> Attributes {
        Attributes::new()
            .with("status", status.status.as_str())
            .with_opt("start", status.start_time.map(timestamp::iso))
            .with("elapsed", timestamp::seconds(status.elapsed_time()))
    }

    fn status_message<'a>(&self, _kind: ItemKind, status: &'a Status) -> &'a str {
        &status.message
    }

    fn message_attrs(&self, msg: &Message) -> Attributes {
        let attrs = Attributes::new()
            .with_opt("time", msg.timestamp.map(timestamp::iso))
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
    use std::time::Duration;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_milli_opt(3, 4, 5, 123)
            .unwrap()
    }

    #[test]
    fn test_keyword_type_omitted_for_plain_keywords() {
        let kw = Keyword::new("Log", KeywordType::Keyword).with_owner("BuiltIn");
        let attrs = CurrentFormat.keyword_attrs(&kw);

        assert_eq!(attrs.get("name"), Some("Log"));
        assert_eq!(attrs.get("owner"), Some("BuiltIn"));
        assert_eq!(attrs.get("type"), None);
        assert_eq!(attrs.get("source_name"), None);
    }

    #[test]
    fn test_keyword_type_and_source_name() {
        let mut kw = Keyword::new("Close", KeywordType::Teardown);
        kw.source_name = Some("Close ${what}".to_string());
        let attrs = CurrentFormat.keyword_attrs(&kw);

        assert_eq!(attrs.get("type"), Some("TEARDOWN"));
        assert_eq!(attrs.get("source_name"), Some("Close ${what}"));
        assert_eq!(attrs.get("owner"), None);
    }

    #[test]
    fn test_status_attrs_use_elapsed() {
        let status = Status::new(StatusCode::Pass)
            .with_start(start())
            .with_elapsed(Duration::from_millis(42));
        let attrs = CurrentFormat.status_attrs(&status);

        assert_eq!(attrs.get("status"), Some("PASS"));
        assert_eq!(attrs.get("start"), Some("2024-01-02T03:04:05.123000"));
        assert_eq!(attrs.get("elapsed"), Some("0.042000"));
    }

    #[test]
    fn test_status_without_start() {
        let attrs = CurrentFormat.status_attrs(&Status::new(StatusCode::NotRun));
        assert_eq!(attrs.get("start"), None);
        assert_eq!(attrs.get("elapsed"), Some("0.000000"));
    }

    #[test]
    fn test_status_message_kept_for_every_kind() {
        let status = Status::new(StatusCode::Fail).with_message("boom");
        for kind in [
            ItemKind::Keyword(KeywordType::Setup),
            ItemKind::If,
            ItemKind::Suite,
        ] {
            assert_eq!(CurrentFormat.status_message(kind, &status), "boom");
        }
    }

    #[test]
    fn test_message_attrs() {
        let msg = Message::new("<b>hi</b>", LogLevel::Warn).at(start()).html();
        let attrs = CurrentFormat.message_attrs(&msg);

        assert_eq!(attrs.get("time"), Some("2024-01-02T03:04:05.123000"));
        assert_eq!(attrs.get("level"), Some("WARN"));
        assert_eq!(attrs.get("html"), Some("true"));
    }
}
