//! Tests for the logging macros and call-site capture.

use purrlog::{Level, Logger, MemoryBackend};

fn logger(backend: &MemoryBackend) -> Logger {
    Logger::builder()
        .subsystem("com.example.app")
        .backend(backend.clone())
        .build()
}

#[test]
fn macros_capture_function_file_and_line() {
    let backend = MemoryBackend::new();
    let logger = logger(&backend);

    let count = 3;
    let line = line!() + 1;
    purrlog::error!(logger, "{count} retries left");

    let expected = format!(
        "‼️😿‼️ 3 retries left ☞ macros_capture_function_file_and_line 🗄macros.rs➸{line} ‼️😿‼️"
    );
    assert_eq!(backend.entries()[0].message(), expected);
}

#[test]
fn each_macro_hits_its_level() {
    let backend = MemoryBackend::new();
    let logger = logger(&backend);

    purrlog::debug!(logger, "d");
    purrlog::info!(logger, "i");
    purrlog::error!(logger, "e");
    purrlog::fault!(logger, "f");
    purrlog::verbose!(logger, "v");
    purrlog::log!(logger, Level::Fault, "l");

    let levels: Vec<_> = backend.entries().iter().filter_map(|e| e.level()).collect();
    assert_eq!(
        levels,
        vec![
            Level::Debug,
            Level::Info,
            Level::Error,
            Level::Fault,
            Level::Info,
            Level::Fault
        ]
    );
}

#[test]
fn closures_report_enclosing_function() {
    let backend = MemoryBackend::new();
    let logger = logger(&backend);

    let emit = || purrlog::info!(logger, "inside");
    emit();

    assert!(
        backend.entries()[0]
            .message()
            .contains("☞ closures_report_enclosing_function 🗄")
    );
}

#[test]
fn call_site_macro_feeds_template_form() {
    let backend = MemoryBackend::new();
    let logger = logger(&backend);

    logger.fault_template("lost {} packets", &9, &purrlog::call_site!());

    let message = backend.entries()[0].message().to_string();
    assert!(message.starts_with("lost 9 packets ☞ call_site_macro_feeds_template_form 🗄macros.rs➸"));
}
