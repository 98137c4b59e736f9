//! Tests for log level functionality.

use purrlog::Level;

#[test]
fn level_ordering() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Error);
    assert!(Level::Error < Level::Fault);
}

#[test]
fn level_display() {
    assert_eq!(Level::Debug.to_string(), "debug");
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Error.to_string(), "error");
    assert_eq!(Level::Fault.to_string(), "fault");
}

#[test]
fn level_from_str() {
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("critical".parse::<Level>().unwrap(), Level::Fault);
}

#[test]
fn verbose_is_info() {
    assert_eq!("verbose".parse::<Level>().unwrap(), Level::Info);
}

#[test]
fn level_from_str_invalid() {
    assert!("warn".parse::<Level>().is_err());
}

#[test]
fn syslog_severities() {
    let codes: Vec<u8> = Level::all().iter().map(|l| l.syslog_severity()).collect();
    assert_eq!(codes, vec![7, 6, 3, 2]);
}
