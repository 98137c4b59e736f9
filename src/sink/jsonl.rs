//! Append-only JSON lines file. Where there is no syslog daemon (containers, CI), one
//! JSON object per line still keeps level, subsystem and category as separate fields.

use super::{Backend, Primitive, Record};
use crate::internal;

use chrono::Local;
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use ulid::Ulid;

/// One line of the file.
#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    /// Time-sortable and unique even with several writers on one file.
    id: String,
    ts: String,
    level: &'a str,
    subsystem: &'a str,
    category: &'a str,
    msg: &'a str,
}

#[derive(Debug, Clone)]
pub struct JsonlBackend {
    file_path: PathBuf,
}

impl Default for JsonlBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonlBackend {
    /// XDG state directory, falling back to `purrlog.jsonl` in the working directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            file_path: default_path(),
        }
    }

    /// `~` is expanded at acquire time.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    fn resolve_path(&self) -> PathBuf {
        let path_str = self.file_path.to_string_lossy();
        let expanded = shellexpand::tilde(&path_str);
        PathBuf::from(expanded.as_ref())
    }
}

/// Shared with the config defaults so both agree on where the file lives.
pub(crate) fn default_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "purrlog").map_or_else(
        || PathBuf::from("purrlog.jsonl"),
        |dirs| {
            dirs.state_dir()
                .unwrap_or_else(|| dirs.data_dir())
                .join("purrlog.jsonl")
        },
    )
}

impl Backend for JsonlBackend {
    fn name(&self) -> &'static str {
        "jsonl"
    }

    fn acquire(&self, subsystem: &str, category: &str) -> Option<Box<dyn Primitive>> {
        let path = self.resolve_path();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            if let Err(e) = fs::create_dir_all(parent) {
                internal::error(
                    "JSONL",
                    &format!("Failed to create directory {}: {e}", parent.display()),
                );
                return None;
            }
            internal::debug("JSONL", &format!("Created directory: {}", parent.display()));
        }

        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                internal::debug("JSONL", &format!("Appending to {}", path.display()));
                Some(Box::new(JsonlPrimitive {
                    file: Mutex::new(file),
                    subsystem: subsystem.to_string(),
                    category: category.to_string(),
                }))
            }
            Err(e) => {
                internal::error(
                    "JSONL",
                    &format!("Failed to open {}: {e}", path.display()),
                );
                None
            }
        }
    }
}

struct JsonlPrimitive {
    file: Mutex<File>,
    subsystem: String,
    category: String,
}

impl Primitive for JsonlPrimitive {
    fn write(&self, record: &Record<'_>) -> Result<(), crate::Error> {
        let msg = record.message.render();
        let entry = JsonEntry {
            id: Ulid::new().to_string(),
            ts: Local::now().to_rfc3339(),
            level: record.level.as_str(),
            subsystem: &self.subsystem,
            category: &self.category,
            msg: &msg,
        };
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        // One write per line so concurrent appenders never interleave inside a record.
        let mut file = self
            .file
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}
