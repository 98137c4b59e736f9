//! Severity levels understood by every primitive.
//!
//! There is no separate verbose level: `verbose` is accepted as a spelling of `Info`.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so internal diagnostics can compare against a configured threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Development-time detail.
    Debug = 0,
    /// Normal operational messages. Also what `verbose` maps to.
    #[default]
    Info = 1,
    /// A failure the caller handled but that someone should look at.
    Error = 2,
    /// A failure in the system itself: broken invariants, unrecoverable state.
    Fault = 3,
}

impl Level {
    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Error => "error",
            Self::Fault => "fault",
        }
    }

    /// Syslog severity code (RFC 5424 §6.2.1).
    #[must_use]
    pub const fn syslog_severity(self) -> u8 {
        match self {
            Self::Debug => 7,
            Self::Info => 6,
            Self::Error => 3,
            Self::Fault => 2,
        }
    }

    /// Convenience for iteration, used by tests and the CLI help text.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Debug, Self::Info, Self::Error, Self::Fault]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl From<ParseLevelError> for crate::Error {
    fn from(e: ParseLevelError) -> Self {
        Self::InvalidLevel(e.0)
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" | "verbose" => Ok(Self::Info),
            "error" | "err" => Ok(Self::Error),
            "fault" | "critical" | "crit" => Ok(Self::Fault),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
