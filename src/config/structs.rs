//! Configuration struct definitions.

use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Subsystem; the host identifier is used when absent.
    pub subsystem: Option<String>,
    /// Category within the subsystem.
    pub category: String,
    /// Backend name (syslog, jsonl, terminal).
    pub backend: String,
    /// Threshold for purrlog's own diagnostics, or "off".
    pub diagnostics: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            subsystem: None,
            category: "general".to_string(),
            backend: "syslog".to_string(),
            diagnostics: "off".to_string(),
        }
    }
}

/// Syslog backend configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SyslogConfig {
    /// Daemon socket path.
    pub socket: String,
    /// Facility code (0-23).
    pub facility: u8,
}

impl Default for SyslogConfig {
    fn default() -> Self {
        Self {
            socket: "/dev/log".to_string(),
            facility: 1,
        }
    }
}

/// JSON lines backend configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JsonlConfig {
    /// Path to the JSONL file.
    pub path: String,
}

impl Default for JsonlConfig {
    fn default() -> Self {
        Self {
            path: crate::sink::jsonl_default_path()
                .to_string_lossy()
                .into_owned(),
        }
    }
}

/// Terminal backend configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Timestamp format (chrono strftime).
    pub timestamp_format: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            timestamp_format: "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        }
    }
}

/// Separator overrides. Unset fields keep the built-in defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SeparatorsConfig {
    pub message: Option<String>,
    pub file: Option<String>,
    pub line: Option<String>,
    pub column: Option<String>,
    /// Append the column number after the line.
    pub show_column: Option<bool>,
}

/// Prefix/postfix overrides for one level.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DecorationConfig {
    pub prefix: Option<String>,
    pub postfix: Option<String>,
}

/// Per-level decoration overrides.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DecorationsConfig {
    pub debug: DecorationConfig,
    pub info: DecorationConfig,
    pub error: DecorationConfig,
    pub fault: DecorationConfig,
}
