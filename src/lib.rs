//! `purrlog` - decorated structured logging façade.
//!
//! Wraps a platform logging primitive (syslog on unix, or a JSON lines file, or stderr)
//! bound to a subsystem/category pair, and dresses every message with a per-level emoji
//! prefix/postfix plus the calling function, file and line:
//!
//! ```text
//! ‼️😿‼️ disk full ☞ save 🗄storage.rs➸42 ‼️😿‼️
//! ```
//!
//! When the primitive can't be acquired the logger keeps working, sending the raw
//! message to an unstructured fallback sink instead.
//!
//! # Example
//!
//! ```
//! use purrlog::{CallSite, Logger, MemoryBackend};
//!
//! let backend = MemoryBackend::new();
//! let logger = Logger::builder()
//!     .subsystem("com.example.app")
//!     .category("net")
//!     .backend(backend.clone())
//!     .build();
//!
//! logger.error("disk full", &CallSite::new("save()", "/a/b/Storage.ext", 42));
//! assert_eq!(
//!     backend.entries()[0].message(),
//!     "‼️😿‼️ disk full ☞ save() 🗄Storage.ext➸42 ‼️😿‼️"
//! );
//!
//! purrlog::debug!(logger, "retrying in {}s", 3);
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `purrlog` command-line front-end

pub mod config;
pub mod decor;
pub mod internal;
pub mod level;
pub mod logger;
pub mod sink;
pub mod subsystem;

mod error;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use decor::{CallSite, Decoration, Decorations, Separators};
pub use error::Error;
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use sink::{
    Backend, Captured, JsonlBackend, MemoryBackend, Message, Primitive, Record, SyslogBackend,
    TerminalBackend,
};
pub use subsystem::{Category, FALLBACK_SUBSYSTEM, Subsystem};
