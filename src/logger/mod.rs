//! The façade. A `Logger` is bound to one (subsystem, category) pair and, if the backend
//! could provide one, a structured primitive. Every call decorates and forwards to that
//! primitive, or hands the raw message to the backend's fallback sink when there is none.

mod builder;
mod from_config;
mod macros;

pub use builder::LoggerBuilder;

use crate::decor::{self, CallSite, Decorations};
use crate::internal;
use crate::level::Level;
use crate::sink::{Backend, Message, Primitive, Record};
use crate::subsystem::{Category, Subsystem};
use std::fmt;
use std::sync::Arc;

pub struct Logger {
    subsystem: String,
    category: String,
    /// Bound once by the builder and never replaced.
    primitive: Option<Box<dyn Primitive>>,
    backend: Arc<dyn Backend>,
    decorations: Decorations,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Host-derived subsystem, `general` category, default backend.
    #[must_use]
    #[track_caller]
    pub fn new() -> Self {
        Self::predefined(Subsystem::Bundle, Category::General)
    }

    /// Host-derived subsystem with the given category.
    #[must_use]
    #[track_caller]
    pub fn with_category(category: &str) -> Self {
        Self::builder().category(category).build()
    }

    /// `None` derives the subsystem from the host identifier.
    #[must_use]
    #[track_caller]
    pub fn with_subsystem(subsystem: Option<&str>, category: &str) -> Self {
        let builder = Self::builder().category(category);
        match subsystem {
            Some(subsystem) => builder.subsystem(subsystem),
            None => builder,
        }
        .build()
    }

    #[must_use]
    #[track_caller]
    pub fn predefined(subsystem: Subsystem, category: Category) -> Self {
        Self::builder().predefined(subsystem, category).build()
    }

    #[must_use]
    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Whether a structured primitive was bound. `false` means every call uses the fallback.
    #[must_use]
    pub const fn is_structured(&self) -> bool {
        self.primitive.is_some()
    }

    /// Name of the backend that was probed, bound or not.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    #[must_use]
    pub const fn decorations(&self) -> &Decorations {
        &self.decorations
    }

    /// Changes apply to every following call.
    pub const fn decorations_mut(&mut self) -> &mut Decorations {
        &mut self.decorations
    }

    /// Plain-string form: `<prefix><message> ☞ <function> 🗄<file>➸<line><postfix>` at `level`.
    /// Without a primitive, only `message` reaches the fallback.
    pub fn log(&self, level: Level, message: &str, site: &CallSite<'_>) {
        let Some(primitive) = &self.primitive else {
            self.fallback(message);
            return;
        };

        let decorated = self.decorations.decorate(level, message, site);
        self.write(
            primitive.as_ref(),
            &Record {
                level,
                message: Message::Text(&decorated),
            },
        );
    }

    /// Template form: the call-site suffix is appended to `template` and the primitive
    /// substitutes `arg` for the first `{}`. No prefix or postfix.
    pub fn log_template(
        &self,
        level: Level,
        template: &'static str,
        arg: &dyn fmt::Display,
        site: &CallSite<'_>,
    ) {
        let Some(primitive) = &self.primitive else {
            self.fallback(&decor::render_template(template, arg));
            return;
        };

        let composed = self.decorations.compose(template, site);
        self.write(
            primitive.as_ref(),
            &Record {
                level,
                message: Message::Template {
                    template: &composed,
                    arg,
                },
            },
        );
    }

    /// Development detail, usually filtered out by the daemon.
    pub fn debug(&self, message: &str, site: &CallSite<'_>) {
        self.log(Level::Debug, message, site);
    }

    /// Normal milestones worth keeping in the log.
    pub fn info(&self, message: &str, site: &CallSite<'_>) {
        self.log(Level::Info, message, site);
    }

    /// Something failed but the process carries on.
    pub fn error(&self, message: &str, site: &CallSite<'_>) {
        self.log(Level::Error, message, site);
    }

    /// Bugs and broken invariants; sent as syslog `crit`.
    pub fn fault(&self, message: &str, site: &CallSite<'_>) {
        self.log(Level::Fault, message, site);
    }

    /// Same as [`info`](Self::info); there is no separate verbose severity.
    pub fn verbose(&self, message: &str, site: &CallSite<'_>) {
        self.log(Level::Info, message, site);
    }

    /// Template variant of [`debug`](Self::debug).
    pub fn debug_template(
        &self,
        template: &'static str,
        arg: &dyn fmt::Display,
        site: &CallSite<'_>,
    ) {
        self.log_template(Level::Debug, template, arg, site);
    }

    /// Template variant of [`info`](Self::info).
    pub fn info_template(
        &self,
        template: &'static str,
        arg: &dyn fmt::Display,
        site: &CallSite<'_>,
    ) {
        self.log_template(Level::Info, template, arg, site);
    }

    /// Template variant of [`error`](Self::error).
    pub fn error_template(
        &self,
        template: &'static str,
        arg: &dyn fmt::Display,
        site: &CallSite<'_>,
    ) {
        self.log_template(Level::Error, template, arg, site);
    }

    /// Template variant of [`fault`](Self::fault).
    pub fn fault_template(
        &self,
        template: &'static str,
        arg: &dyn fmt::Display,
        site: &CallSite<'_>,
    ) {
        self.log_template(Level::Fault, template, arg, site);
    }

    /// Same as [`info_template`](Self::info_template).
    pub fn verbose_template(
        &self,
        template: &'static str,
        arg: &dyn fmt::Display,
        site: &CallSite<'_>,
    ) {
        self.log_template(Level::Info, template, arg, site);
    }

    /// Delivery is best effort: failures go to diagnostics, never to the caller.
    fn write(&self, primitive: &dyn Primitive, record: &Record<'_>) {
        if let Err(e) = primitive.write(record) {
            internal::error(
                "LOGGER",
                &format!(
                    "{} write for {}/{} failed: {e}",
                    self.backend.name(),
                    self.subsystem,
                    self.category
                ),
            );
        }
    }

    fn fallback(&self, message: &str) {
        if let Err(e) = self.backend.fallback(message) {
            internal::error("LOGGER", &format!("Fallback write failed: {e}"));
        }
    }
}

impl Default for Logger {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("subsystem", &self.subsystem)
            .field("category", &self.category)
            .field("backend", &self.backend.name())
            .field("structured", &self.is_structured())
            .field("decorations", &self.decorations)
            .finish()
    }
}
