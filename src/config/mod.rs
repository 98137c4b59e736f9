//! TOML configuration loading.
//!
//! Separated from struct definitions so that the loading logic (file I/O, path
//! discovery, override application) stays independent of the serde schema.

mod structs;

pub use structs::{
    DecorationConfig, DecorationsConfig, GeneralConfig, JsonlConfig, SeparatorsConfig,
    SyslogConfig, TerminalConfig,
};

use crate::decor::{Decoration, Decorations};
use crate::internal;
use crate::level::Level;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Points at a config file other than the default location.
pub const CONFIG_ENV: &str = "PURRLOG_CONFIG";

/// An empty file still produces a working logger: every section and field defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub syslog: SyslogConfig,
    pub jsonl: JsonlConfig,
    pub terminal: TerminalConfig,
    pub separators: SeparatorsConfig,
    pub decorations: DecorationsConfig,
}

impl Config {
    /// Loads from `PURRLOG_CONFIG` if set, otherwise `<config_dir>/purrlog/purrlog.toml`.
    /// A missing file is not an error.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let config_path = Self::get_config_path()?;
        let config = Self::load_from(&config_path)?;
        internal::info(
            "CONFIG",
            &format!("Config loaded from {}", config_path.display()),
        );
        Ok(config)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// # Errors
    /// TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        if let Ok(path) = std::env::var(CONFIG_ENV)
            && !path.trim().is_empty()
        {
            return Ok(PathBuf::from(shellexpand::tilde(path.trim()).as_ref()));
        }

        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("purrlog").join("purrlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Diagnostics threshold; `off`/`none`/empty disable them.
    ///
    /// # Errors
    /// `Error::InvalidLevel` for anything else that isn't a level name.
    pub fn parse_diagnostics(&self) -> Result<Option<Level>, crate::Error> {
        match self.general.diagnostics.trim().to_lowercase().as_str() {
            "off" | "none" | "" => Ok(None),
            other => Ok(Some(other.parse()?)),
        }
    }

    /// Built-in decorations with this config's overrides applied.
    #[must_use]
    pub fn decorations(&self) -> Decorations {
        let mut decorations = Decorations::default();

        for level in Level::all() {
            let overrides = match level {
                Level::Debug => &self.decorations.debug,
                Level::Info => &self.decorations.info,
                Level::Error => &self.decorations.error,
                Level::Fault => &self.decorations.fault,
            };
            apply(decorations.get_mut(level), overrides);
        }

        let sep = &mut decorations.separators;
        let overrides = &self.separators;
        if let Some(ref s) = overrides.message {
            sep.message.clone_from(s);
        }
        if let Some(ref s) = overrides.file {
            sep.file.clone_from(s);
        }
        if let Some(ref s) = overrides.line {
            sep.line.clone_from(s);
        }
        if let Some(ref s) = overrides.column {
            sep.column.clone_from(s);
        }
        if let Some(show) = overrides.show_column {
            sep.show_column = show;
        }

        decorations
    }
}

fn apply(decoration: &mut Decoration, overrides: &DecorationConfig) {
    if let Some(ref prefix) = overrides.prefix {
        decoration.prefix.clone_from(prefix);
    }
    if let Some(ref postfix) = overrides.postfix {
        decoration.postfix.clone_from(postfix);
    }
}
