//! Integration tests for CLI behavior
//!
//! These tests verify the external behavior of the CLI tool,
//! following behavior-driven testing principles.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a command for the rxml CLI
fn rxml_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rxml"))
}

/// Helper to get fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        rxml_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }

    #[test]
    fn shows_version_with_flag() {
        rxml_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod write_command {
    use super::*;

    #[test]
    fn writes_current_schema_by_default() {
        let temp_dir = TempDir::new().unwrap();

        rxml_cmd()
            .current_dir(temp_dir.path())
            .arg("write")
            .arg(fixtures_dir().join("result.json"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Output:  output.xml"));

        let xml = fs::read_to_string(temp_dir.path().join("output.xml")).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<robot "));
        assert!(xml.contains("schemaversion=\"5\""));
        assert!(xml.contains("rpa=\"true\""));
        assert!(xml.contains("<kw name=\"Log\" owner=\"BuiltIn\">\n"));
        assert!(xml.contains("<stat pass=\"1\" fail=\"0\" skip=\"0\">All Tasks</stat>"));
        assert!(xml.ends_with("</robot>\n"));
    }

    #[test]
    fn writes_legacy_schema_to_given_output() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("legacy.xml");

        rxml_cmd()
            .arg("write")
            .arg(fixtures_dir().join("result.json"))
            .arg("--format")
            .arg("legacy")
            .arg("--output")
            .arg(&output)
            .assert()
            .success();

        let xml = fs::read_to_string(&output).unwrap();
        assert!(xml.contains("schemaversion=\"4\""));
        assert!(xml.contains("<kw name=\"Log\" library=\"BuiltIn\">\n"));
        assert!(xml.contains(
            "<status status=\"PASS\" starttime=\"20240102 03:04:05.000\" endtime=\"20240102 03:04:05.001\"/>"
        ));
    }

    #[test]
    fn writes_suite_only_documents() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("partial.xml");

        rxml_cmd()
            .arg("write")
            .arg(fixtures_dir().join("result.json"))
            .arg("--suite-only")
            .arg("-o")
            .arg(&output)
            .assert()
            .success();

        let xml = fs::read_to_string(&output).unwrap();
        assert!(xml.starts_with("<suite id=\"s1\" name=\"Tasks\">\n"));
        assert!(!xml.contains("<robot"));
        assert!(!xml.contains("<statistics>"));
    }

    #[test]
    fn discards_output_with_none() {
        let temp_dir = TempDir::new().unwrap();

        rxml_cmd()
            .current_dir(temp_dir.path())
            .arg("write")
            .arg(fixtures_dir().join("result.json"))
            .arg("--output")
            .arg("None")
            .assert()
            .success()
            .stdout(predicate::str::contains("Output:  NONE"));

        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn rejects_unknown_format() {
        rxml_cmd()
            .arg("write")
            .arg(fixtures_dir().join("result.json"))
            .arg("--format")
            .arg("xunit")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown output format"));
    }

    #[test]
    fn fails_for_missing_input() {
        let temp_dir = TempDir::new().unwrap();

        rxml_cmd()
            .current_dir(temp_dir.path())
            .arg("write")
            .arg("missing.json")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("missing.json"));
    }

    #[test]
    fn fails_for_invalid_input() {
        let temp_dir = TempDir::new().unwrap();

        rxml_cmd()
            .current_dir(temp_dir.path())
            .arg("write")
            .arg(fixtures_dir().join("invalid_result.json"))
            .assert()
            .code(2);

        assert!(!temp_dir.path().join("output.xml").exists());
    }

    #[test]
    fn fails_for_unwritable_output() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("missing").join("output.xml");

        rxml_cmd()
            .arg("write")
            .arg(fixtures_dir().join("result.json"))
            .arg("--output")
            .arg(&output)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Writing output file"));
    }
}

mod config_file {
    use super::*;

    #[test]
    fn uses_discovered_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".resultxml.json"),
            r#"{ "format": "legacy", "output": "from-config.xml", "generator": "Custom" }"#,
        )
        .unwrap();

        rxml_cmd()
            .current_dir(temp_dir.path())
            .arg("write")
            .arg(fixtures_dir().join("result.json"))
            .assert()
            .success();

        let xml = fs::read_to_string(temp_dir.path().join("from-config.xml")).unwrap();
        assert!(xml.contains("<robot generator=\"Custom\" "));
        assert!(xml.contains("schemaversion=\"4\""));
    }

    #[test]
    fn command_line_overrides_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("custom.json");
        fs::write(&config, r#"{ "format": "legacy", "rpa": false }"#).unwrap();
        let output = temp_dir.path().join("out.xml");

        rxml_cmd()
            .arg("--config")
            .arg(&config)
            .arg("write")
            .arg(fixtures_dir().join("result.json"))
            .arg("--format")
            .arg("current")
            .arg("--rpa")
            .arg("-o")
            .arg(&output)
            .assert()
            .success();

        let xml = fs::read_to_string(&output).unwrap();
        assert!(xml.contains("rpa=\"true\" schemaversion=\"5\""));
    }

    #[test]
    fn config_rpa_overrides_result() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".resultxml.json"), r#"{ "rpa": false }"#).unwrap();

        rxml_cmd()
            .current_dir(temp_dir.path())
            .arg("write")
            .arg(fixtures_dir().join("result.json"))
            .assert()
            .success();

        let xml = fs::read_to_string(temp_dir.path().join("output.xml")).unwrap();
        assert!(xml.contains("rpa=\"false\""));
    }

    #[test]
    fn reports_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".resultxml.json"),
            r#"{ "format": "xunit" }"#,
        )
        .unwrap();

        rxml_cmd()
            .current_dir(temp_dir.path())
            .arg("write")
            .arg(fixtures_dir().join("result.json"))
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Config validation failed"));
    }
}

mod init_command {
    use super::*;

    #[test]
    fn creates_new_config_file() {
        let temp_dir = TempDir::new().unwrap();

        rxml_cmd()
            .current_dir(temp_dir.path())
            .arg("init")
            .assert()
            .success()
            .stderr(predicate::str::contains("Created .resultxml.json"));

        let content = fs::read_to_string(temp_dir.path().join(".resultxml.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["format"], "current");
        assert_eq!(value["output"], "output.xml");
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".resultxml.json");
        fs::write(&config_path, "{}").unwrap();

        rxml_cmd()
            .current_dir(temp_dir.path())
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));

        assert_eq!(fs::read_to_string(&config_path).unwrap(), "{}");
    }

    #[test]
    fn overwrites_with_force() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".resultxml.json");
        fs::write(&config_path, "{}").unwrap();

        rxml_cmd()
            .current_dir(temp_dir.path())
            .arg("init")
            .arg("--force")
            .assert()
            .success();

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("\"format\": \"current\""));
    }

    #[test]
    fn written_config_is_accepted() {
        let temp_dir = TempDir::new().unwrap();

        rxml_cmd()
            .current_dir(temp_dir.path())
            .arg("init")
            .assert()
            .success();

        rxml_cmd()
            .current_dir(temp_dir.path())
            .arg("write")
            .arg(fixtures_dir().join("result.json"))
            .assert()
            .success();

        assert!(temp_dir.path().join("output.xml").exists());
    }
}
