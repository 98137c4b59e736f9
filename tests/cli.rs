#![cfg(feature = "cli")]

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn run(config: &std::path::Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_purrlog"))
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .expect("failed to run purrlog")
}

#[test]
fn logs_through_configured_backend() {
    let tmp_dir = TempDir::new().unwrap();
    let config = tmp_dir.path().join("purrlog.toml");
    let log = tmp_dir.path().join("out.jsonl");
    fs::write(
        &config,
        format!("[general]\nbackend = \"jsonl\"\n\n[jsonl]\npath = \"{}\"\n", log.display()),
    )
    .unwrap();

    let output = run(
        &config,
        &["-s", "com.example.cli", "--function", "backup", "--line", "7", "fault", "disk", "gone"],
    );
    assert!(output.status.success());

    let content = fs::read_to_string(&log).unwrap();
    assert!(content.contains("\"level\":\"fault\""));
    assert!(content.contains("\"subsystem\":\"com.example.cli\""));
    assert!(content.contains("🙀🙀‼️ disk gone ☞ backup 🗄-➸7 🙀🙀‼️"));
}

#[test]
fn verbose_is_accepted() {
    let tmp_dir = TempDir::new().unwrap();
    let config = tmp_dir.path().join("purrlog.toml");
    let log = tmp_dir.path().join("out.jsonl");
    fs::write(
        &config,
        format!("[general]\nbackend = \"jsonl\"\n\n[jsonl]\npath = \"{}\"\n", log.display()),
    )
    .unwrap();

    let output = run(&config, &["-s", "s", "verbose", "hi"]);
    assert!(output.status.success());
    assert!(fs::read_to_string(&log).unwrap().contains("\"level\":\"info\""));
}

#[test]
fn unknown_backend_exits_failure() {
    let tmp_dir = TempDir::new().unwrap();
    let config = tmp_dir.path().join("purrlog.toml");
    fs::write(&config, "[general]\nbackend = \"terminal\"\n").unwrap();

    let output = run(&config, &["--backend", "pigeon", "info", "x"]);
    assert!(!output.status.success());
}

#[test]
fn broken_config_exits_failure() {
    let tmp_dir = TempDir::new().unwrap();
    let config = tmp_dir.path().join("purrlog.toml");
    fs::write(&config, "[general\n").unwrap();

    let output = run(&config, &["info", "x"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("parse error"));
}

#[test]
fn diagnostics_use_terminal_line_format() {
    let tmp_dir = TempDir::new().unwrap();
    let config = tmp_dir.path().join("purrlog.toml");
    fs::write(
        &config,
        "[general]\nbackend = \"terminal\"\ndiagnostics = \"debug\"\n",
    )
    .unwrap();

    let output = run(&config, &["-s", "s", "info", "x"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("purrlog[internal] <debug> INTERNAL: Diagnostics ready"),
        "{stderr}"
    );
}

#[test]
fn unknown_diagnostics_level_is_reported() {
    let tmp_dir = TempDir::new().unwrap();
    let config = tmp_dir.path().join("purrlog.toml");
    fs::write(
        &config,
        "[general]\nbackend = \"terminal\"\ndiagnostics = \"loud\"\n",
    )
    .unwrap();

    let output = run(&config, &["-s", "s", "info", "x"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("purrlog[internal] <error> CONFIG: diagnostics: invalid level: loud"),
        "{stderr}"
    );
    assert!(!stderr.contains("<debug> INTERNAL"));
}
