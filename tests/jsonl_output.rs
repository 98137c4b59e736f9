//! Tests for the JSON lines backend.

use purrlog::{CallSite, JsonlBackend, Logger};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn site() -> CallSite<'static> {
    CallSite::new("sync", "src/store.rs", 9)
}

#[test]
fn writes_one_object_per_call() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("nested").join("log.jsonl");

    let logger = Logger::builder()
        .subsystem("com.example.app")
        .category("io")
        .backend(JsonlBackend::new().path(&path))
        .build();
    assert!(logger.is_structured());

    logger.error("write failed", &site());
    logger.debug_template("{} bytes", &128, &site());

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);

    assert_eq!(lines[0]["level"], "error");
    assert_eq!(lines[0]["subsystem"], "com.example.app");
    assert_eq!(lines[0]["category"], "io");
    assert_eq!(
        lines[0]["msg"],
        "‼️😿‼️ write failed ☞ sync 🗄store.rs➸9 ‼️😿‼️"
    );
    assert_eq!(lines[1]["level"], "debug");
    assert_eq!(lines[1]["msg"], "128 bytes ☞ sync 🗄store.rs➸9");
    assert_ne!(lines[0]["id"], lines[1]["id"]);
    assert!(lines[0]["ts"].as_str().is_some());
}

#[test]
fn appends_across_loggers() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("log.jsonl");

    for category in ["a", "b"] {
        let logger = Logger::builder()
            .subsystem("s")
            .category(category)
            .backend(JsonlBackend::new().path(&path))
            .build();
        logger.info("hello", &site());
    }

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn unusable_path_leaves_logger_unstructured() {
    let tmp_dir = TempDir::new().unwrap();
    let blocker = tmp_dir.path().join("file");
    fs::write(&blocker, "").unwrap();

    // A regular file where a directory is needed.
    let logger = Logger::builder()
        .subsystem("s")
        .backend(JsonlBackend::new().path(blocker.join("log.jsonl")))
        .build();

    assert!(!logger.is_structured());
    logger.info("goes to stderr", &site());
}
