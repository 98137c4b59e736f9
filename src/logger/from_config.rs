//! Logger construction from purrlog config files.

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;
use crate::sink::{Backend, JsonlBackend, SyslogBackend, TerminalBackend};
use std::sync::Arc;

impl Config {
    /// The backend named in `[general] backend`, set up from its own section.
    ///
    /// # Errors
    /// `Error::InvalidBackend` for names other than `syslog`, `jsonl` or `terminal`.
    pub fn backend(&self) -> Result<Arc<dyn Backend>, crate::Error> {
        self.backend_named(&self.general.backend)
    }

    /// Like [`backend`](Self::backend) but with the name supplied separately, for CLI overrides.
    ///
    /// # Errors
    /// `Error::InvalidBackend` for unknown names.
    pub fn backend_named(&self, name: &str) -> Result<Arc<dyn Backend>, crate::Error> {
        let backend: Arc<dyn Backend> = match name.to_lowercase().as_str() {
            "syslog" => Arc::new(
                SyslogBackend::new()
                    .socket(shellexpand::tilde(&self.syslog.socket).into_owned())
                    .facility(self.syslog.facility),
            ),
            "jsonl" | "json" => Arc::new(JsonlBackend::new().path(&self.jsonl.path)),
            "terminal" | "stderr" => Arc::new(
                TerminalBackend::new().timestamp_format(&self.terminal.timestamp_format),
            ),
            _ => return Err(crate::Error::InvalidBackend(name.to_string())),
        };
        Ok(backend)
    }
}

impl Logger {
    /// Creates a logger from the default config file, or built-in defaults if it is
    /// missing or unreadable.
    #[must_use]
    #[track_caller]
    pub fn from_config() -> Self {
        internal::debug("LOGGER", "Building logger from config");
        let config = Config::load().unwrap_or_else(|e| {
            internal::error("CONFIG", &format!("Ignoring config: {e}"));
            Config::default()
        });
        Self::from_config_with(&config)
    }

    /// Creates a logger from a given config.
    #[must_use]
    #[track_caller]
    pub fn from_config_with(config: &Config) -> Self {
        Self::config_builder(config).build()
    }

    /// Builder preloaded from `config`, for callers that still want to adjust it.
    #[must_use]
    pub fn config_builder(config: &Config) -> LoggerBuilder {
        let mut builder = LoggerBuilder::new()
            .category(&config.general.category)
            .decorations(config.decorations());

        if let Some(ref subsystem) = config.general.subsystem {
            builder = builder.subsystem(subsystem);
        }

        match config.backend() {
            Ok(backend) => builder.shared_backend(backend),
            Err(e) => {
                internal::error("LOGGER", &format!("{e}, using syslog"));
                builder.backend(SyslogBackend::new())
            }
        }
    }
}
