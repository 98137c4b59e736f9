//! `format!`-style logging with the call site filled in.
//!
//! ```
//! use purrlog::{Logger, MemoryBackend};
//!
//! let logger = Logger::builder()
//!     .subsystem("com.example.app")
//!     .category("net")
//!     .backend(MemoryBackend::new())
//!     .build();
//!
//! let bytes = 512;
//! purrlog::info!(logger, "sent {bytes} bytes");
//! purrlog::error!(logger, "disk full");
//! ```

/// Plain-string log at an explicit level.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, &::std::format!($($arg)+), &$crate::call_site!())
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(&::std::format!($($arg)+), &$crate::call_site!())
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(&::std::format!($($arg)+), &$crate::call_site!())
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(&::std::format!($($arg)+), &$crate::call_site!())
    };
}

#[macro_export]
macro_rules! fault {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fault(&::std::format!($($arg)+), &$crate::call_site!())
    };
}

/// Alias of [`info!`].
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)+) => {
        $logger.verbose(&::std::format!($($arg)+), &$crate::call_site!())
    };
}
