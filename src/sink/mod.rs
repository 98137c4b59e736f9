//! The seam between the façade and whatever actually records the log.
//!
//! A `Backend` is probed once per façade: `acquire` either binds a `Primitive` for a
//! (subsystem, category) pair or reports that none is available, in which case the
//! façade sends raw messages to `fallback` for the rest of its life.

mod jsonl;
mod memory;
mod syslog;
mod terminal;

pub use jsonl::JsonlBackend;
pub(crate) use jsonl::default_path as jsonl_default_path;
pub use memory::{Captured, MemoryBackend};
pub use syslog::SyslogBackend;
pub use terminal::TerminalBackend;

use crate::decor;
use crate::level::Level;
use chrono::Local;
use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

/// Message body handed to a primitive.
#[derive(Clone, Copy)]
pub enum Message<'a> {
    /// Fully composed and decorated text.
    Text(&'a str),
    /// Template with call-site suffix already appended; the primitive substitutes `arg`.
    Template {
        template: &'a str,
        arg: &'a dyn fmt::Display,
    },
}

impl Message<'_> {
    /// Final text with any template placeholder filled in.
    #[must_use]
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Template { template, arg } => Cow::Owned(decor::render_template(template, *arg)),
        }
    }
}

impl fmt::Debug for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Template { template, arg } => f
                .debug_struct("Template")
                .field("template", template)
                .field("arg", &arg.to_string())
                .finish(),
        }
    }
}

/// One write to a bound primitive.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub level: Level,
    pub message: Message<'a>,
}

/// Handle to a structured log destination, already bound to its subsystem and category.
pub trait Primitive: Send + Sync {
    /// # Errors
    /// I/O or serialization errors from the destination.
    fn write(&self, record: &Record<'_>) -> Result<(), crate::Error>;
}

/// Factory for primitives plus the unstructured sink used when none can be bound.
pub trait Backend: Send + Sync {
    /// Short name for diagnostics and config (`syslog`, `jsonl`, ...).
    fn name(&self) -> &'static str;

    /// Capability probe. `None` means the structured facility isn't usable here.
    fn acquire(&self, subsystem: &str, category: &str) -> Option<Box<dyn Primitive>>;

    /// Unstructured sink: no severity, no decoration, just the message.
    ///
    /// The default writes an `NSLog`-style line (timestamp, process, pid) to stderr.
    ///
    /// # Errors
    /// I/O errors writing to stderr.
    fn fallback(&self, message: &str) -> Result<(), crate::Error> {
        writeln!(io::stderr(), "{} {message}", fallback_header())?;
        Ok(())
    }
}

/// `2026-10-19 14:30:00.123 purrlog[4242]`
pub(crate) fn fallback_header() -> String {
    let process = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "unknown".to_string());
    format!(
        "{} {process}[{}]",
        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        std::process::id()
    )
}

/// Backend names accepted in config and on the command line.
pub const BACKEND_NAMES: [&str; 3] = ["syslog", "jsonl", "terminal"];
