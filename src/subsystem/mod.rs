//! Predefined subsystem and category names, and detection of the host identifier
//! that stands in for a subsystem when the caller doesn't name one.

use std::fmt;
use std::str::FromStr;

/// Used when neither the caller nor the host environment can name a subsystem.
pub const FALLBACK_SUBSYSTEM: &str = "purrlog.unidentified";

/// Overrides executable-name detection, e.g. `com.example.app`.
pub const HOST_ID_ENV: &str = "PURRLOG_HOST_ID";

/// Well-known subsystems. `Bundle` is not a name of its own: it asks for the host identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Subsystem {
    Default,
    #[default]
    Bundle,
    Core,
    Db,
    Net,
    Media,
    Io,
    Model,
    View,
    Controller,
}

impl Subsystem {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Bundle => "bundle",
            Self::Core => "core",
            Self::Db => "db",
            Self::Net => "net",
            Self::Media => "media",
            Self::Io => "io",
            Self::Model => "model",
            Self::View => "view",
            Self::Controller => "controller",
        }
    }

    /// The literal subsystem name, or `None` for `Bundle` which resolves at construction.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self {
            Self::Bundle => None,
            other => Some(other.as_str()),
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 10] {
        [
            Self::Default,
            Self::Bundle,
            Self::Core,
            Self::Db,
            Self::Net,
            Self::Media,
            Self::Io,
            Self::Model,
            Self::View,
            Self::Controller,
        ]
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subsystem {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ParseNameError(s.to_string()))
    }
}

/// Well-known categories within a subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    General,
    Params,
    ParamsController,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Params => "params",
            Self::ParamsController => "paramsController",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::General, Self::Params, Self::ParamsController]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ParseNameError(s.to_string()))
    }
}

/// Not one of the predefined names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNameError(String);

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a predefined name: '{}'", self.0)
    }
}

impl std::error::Error for ParseNameError {}

/// Identifier of the running program, the closest thing a process has to a bundle id.
///
/// `PURRLOG_HOST_ID` wins when set; otherwise the executable's file stem. Empty values
/// count as missing.
#[must_use]
pub fn host_identifier() -> Option<String> {
    if let Ok(id) = std::env::var(HOST_ID_ENV) {
        let id = id.trim();
        if !id.is_empty() {
            return Some(id.to_string());
        }
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_has_no_literal_name() {
        assert_eq!(Subsystem::Bundle.name(), None);
        assert_eq!(Subsystem::Net.name(), Some("net"));
    }

    #[test]
    fn names_round_trip() {
        for s in Subsystem::all() {
            assert_eq!(s.as_str().parse::<Subsystem>().unwrap(), s);
        }
        for c in Category::all() {
            assert_eq!(c.as_str().parse::<Category>().unwrap(), c);
        }
    }

    #[test]
    fn category_keeps_camel_case() {
        assert_eq!(Category::ParamsController.to_string(), "paramsController");
        assert!("paramscontroller".parse::<Category>().is_err());
    }
}
