//! Tests for config loading and logger construction from config.

use purrlog::config::Config;
use purrlog::{Decorations, Error, Logger};
use std::fs;
use tempfile::TempDir;

#[test]
fn empty_config_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.general.subsystem, None);
    assert_eq!(config.general.category, "general");
    assert_eq!(config.general.backend, "syslog");
    assert_eq!(config.syslog.socket, "/dev/log");
    assert_eq!(config.parse_diagnostics().unwrap(), None);
    assert_eq!(config.decorations(), Decorations::default());
}

#[test]
fn missing_file_is_not_an_error() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.general.backend, "syslog");
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("bad.toml");
    fs::write(&path, "[general\nbackend = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn partial_decoration_override_keeps_other_defaults() {
    let config = Config::parse(
        r#"
[decorations.error]
prefix = "!! "

[separators]
line = ":"
show_column = true
"#,
    )
    .unwrap();

    let decorations = config.decorations();
    let defaults = Decorations::default();
    assert_eq!(decorations.error.prefix, "!! ");
    assert_eq!(decorations.error.postfix, defaults.error.postfix);
    assert_eq!(decorations.debug, defaults.debug);
    assert_eq!(decorations.separators.line, ":");
    assert_eq!(decorations.separators.message, " ☞ ");
    assert!(decorations.separators.show_column);
}

#[test]
fn diagnostics_threshold_parses() {
    let config = Config::parse("[general]\ndiagnostics = \"error\"").unwrap();
    assert_eq!(
        config.parse_diagnostics().unwrap(),
        Some(purrlog::Level::Error)
    );

    let config = Config::parse("[general]\ndiagnostics = \"off\"").unwrap();
    assert_eq!(config.parse_diagnostics().unwrap(), None);
}

#[test]
fn unknown_diagnostics_level_is_rejected() {
    let config = Config::parse("[general]\ndiagnostics = \"loud\"").unwrap();
    assert!(matches!(
        config.parse_diagnostics(),
        Err(Error::InvalidLevel(ref level)) if level == "loud"
    ));
}

#[test]
fn unknown_backend_is_rejected() {
    let config = Config::parse("[general]\nbackend = \"carrier-pigeon\"").unwrap();
    let err = config.backend().err().unwrap();
    assert!(matches!(err, Error::InvalidBackend(name) if name == "carrier-pigeon"));
}

#[test]
fn logger_from_config_applies_names_and_decorations() {
    let tmp_dir = TempDir::new().unwrap();
    let log_path = tmp_dir.path().join("out.jsonl");
    let config = Config::parse(&format!(
        r#"
[general]
subsystem = "com.example.app"
category = "db"
backend = "jsonl"

[jsonl]
path = "{}"

[decorations.info]
prefix = "> "
postfix = ""
"#,
        log_path.display()
    ))
    .unwrap();

    let logger = Logger::from_config_with(&config);
    assert_eq!(logger.subsystem(), "com.example.app");
    assert_eq!(logger.category(), "db");
    assert_eq!(logger.backend_name(), "jsonl");
    assert!(logger.is_structured());
    assert_eq!(logger.decorations().info.prefix, "> ");

    purrlog::info!(logger, "configured");
    let content = fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("> configured"));
}
