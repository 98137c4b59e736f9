//! stderr, for development and for hosts without a log daemon. Always available.

use super::{Backend, Primitive, Record};

use chrono::Local;
use std::fmt::Write as _;
use std::io::{self, Write};

#[derive(Debug, Clone)]
pub struct TerminalBackend {
    timestamp_format: String,
}

impl Default for TerminalBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalBackend {
    #[must_use]
    pub fn new() -> Self {
        Self {
            timestamp_format: "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        }
    }

    /// chrono `strftime` syntax.
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }
}

impl Backend for TerminalBackend {
    fn name(&self) -> &'static str {
        "terminal"
    }

    fn acquire(&self, subsystem: &str, category: &str) -> Option<Box<dyn Primitive>> {
        Some(Box::new(TerminalPrimitive {
            label: format!("{subsystem}[{category}]"),
            timestamp_format: self.timestamp_format.clone(),
        }))
    }
}

struct TerminalPrimitive {
    label: String,
    timestamp_format: String,
}

impl TerminalPrimitive {
    fn format_line(&self, record: &Record<'_>, timestamp: &str) -> String {
        format!(
            "{timestamp} {} <{}> {}",
            self.label,
            record.level,
            record.message.render()
        )
    }
}

impl Primitive for TerminalPrimitive {
    fn write(&self, record: &Record<'_>) -> Result<(), crate::Error> {
        let now = Local::now();
        let mut timestamp = String::new();
        // A bad strftime pattern from config surfaces as fmt::Error, not a panic.
        if write!(timestamp, "{}", now.format(&self.timestamp_format)).is_err() {
            timestamp = now.to_rfc3339();
        }
        writeln!(io::stderr(), "{}", self.format_line(record, &timestamp))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::sink::Message;

    #[test]
    fn line_carries_subsystem_category_and_level() {
        let primitive = TerminalPrimitive {
            label: "app[net]".to_string(),
            timestamp_format: String::new(),
        };
        let record = Record {
            level: Level::Fault,
            message: Message::Template {
                template: "lost {} packets",
                arg: &3,
            },
        };
        assert_eq!(
            primitive.format_line(&record, "T"),
            "T app[net] <fault> lost 3 packets"
        );
    }
}
