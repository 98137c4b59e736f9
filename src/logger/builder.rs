//! Logger builder pattern.

use super::Logger;
use crate::decor::{CallSite, Decorations};
use crate::internal;
use crate::sink::{Backend, SyslogBackend};
use crate::subsystem::{self, Category, FALLBACK_SUBSYSTEM, Subsystem};
use std::sync::Arc;

/// Where the subsystem comes from when the caller doesn't name one.
#[derive(Debug, Clone)]
enum HostLookup {
    Detect,
    Fixed(Option<String>),
}

impl HostLookup {
    fn resolve(self) -> Option<String> {
        match self {
            Self::Detect => subsystem::host_identifier(),
            Self::Fixed(id) => id.filter(|id| !id.is_empty()),
        }
    }
}

/// Everything is optional; `build` fills in host-derived subsystem, `general` and syslog.
pub struct LoggerBuilder {
    subsystem: Option<String>,
    category: String,
    backend: Option<Arc<dyn Backend>>,
    host: HostLookup,
    decorations: Decorations,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            subsystem: None,
            category: Category::General.as_str().to_string(),
            backend: None,
            host: HostLookup::Detect,
            decorations: Decorations::default(),
        }
    }

    /// An empty string counts as not given.
    #[must_use]
    pub fn subsystem(mut self, subsystem: impl Into<String>) -> Self {
        self.subsystem = Some(subsystem.into()).filter(|s| !s.is_empty());
        self
    }

    /// Defaults to `general`.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// `Subsystem::Bundle` leaves the subsystem to the host identifier.
    #[must_use]
    pub fn predefined(mut self, subsystem: Subsystem, category: Category) -> Self {
        self.subsystem = subsystem.name().map(ToString::to_string);
        self.category = category.as_str().to_string();
        self
    }

    /// Defaults to syslog at `/dev/log`.
    #[must_use]
    pub fn backend(mut self, backend: impl Backend + 'static) -> Self {
        self.backend = Some(Arc::new(backend));
        self
    }

    /// For backends already shared with other loggers.
    #[must_use]
    pub fn shared_backend(mut self, backend: Arc<dyn Backend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Skips detection and uses `id` as the host identifier.
    #[must_use]
    pub fn host_identifier(mut self, id: impl Into<String>) -> Self {
        self.host = HostLookup::Fixed(Some(id.into()));
        self
    }

    /// Behave as if the host had no identifier.
    #[must_use]
    pub fn without_host_identifier(mut self) -> Self {
        self.host = HostLookup::Fixed(None);
        self
    }

    /// Replaces the built-in emoji set and separators.
    #[must_use]
    pub fn decorations(mut self, decorations: Decorations) -> Self {
        self.decorations = decorations;
        self
    }

    /// Resolves the subsystem, probes the backend once and binds whatever it returns.
    ///
    /// When no subsystem can be found the logger uses `FALLBACK_SUBSYSTEM` and reports
    /// that through itself at error level, located at the caller of `build`.
    #[must_use]
    #[track_caller]
    pub fn build(self) -> Logger {
        let (subsystem, missing) = match self.subsystem {
            Some(subsystem) => (subsystem, false),
            None => self
                .host
                .resolve()
                .map_or_else(|| (FALLBACK_SUBSYSTEM.to_string(), true), |id| (id, false)),
        };

        let backend = self
            .backend
            .unwrap_or_else(|| Arc::new(SyslogBackend::new()));
        let primitive = backend.acquire(&subsystem, &self.category);
        if primitive.is_none() {
            internal::info(
                "LOGGER",
                &format!(
                    "{} unavailable for {subsystem}/{}, using fallback sink",
                    backend.name(),
                    self.category
                ),
            );
        }

        let logger = Logger {
            subsystem,
            category: self.category,
            primitive,
            backend,
            decorations: self.decorations,
        };

        if missing {
            logger.error(
                &format!("No subsystem identifier available, using {FALLBACK_SUBSYSTEM}"),
                &CallSite::caller("LoggerBuilder::build"),
            );
        }

        logger
    }
}
