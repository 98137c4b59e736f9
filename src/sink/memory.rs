//! In-process capture. Clones share one buffer, so a test keeps a handle while the
//! logger owns another.

use super::{Backend, Primitive, Record};
use crate::level::Level;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// What reached the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Captured {
    /// Went through a bound primitive.
    Structured {
        subsystem: String,
        category: String,
        level: Level,
        message: String,
    },
    /// Went through the fallback sink.
    Fallback { message: String },
}

impl Captured {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Structured { message, .. } | Self::Fallback { message } => message,
        }
    }

    #[must_use]
    pub const fn level(&self) -> Option<Level> {
        match self {
            Self::Structured { level, .. } => Some(*level),
            Self::Fallback { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MemoryBackend {
    entries: Arc<Mutex<Vec<Captured>>>,
    available: bool,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::default(),
            available: true,
        }
    }

    /// Refuses every `acquire`, so loggers built on it only ever use the fallback.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn entries(&self) -> Vec<Captured> {
        self.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Captured>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Backend for MemoryBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn acquire(&self, subsystem: &str, category: &str) -> Option<Box<dyn Primitive>> {
        if !self.available {
            return None;
        }
        Some(Box::new(MemoryPrimitive {
            entries: Arc::clone(&self.entries),
            subsystem: subsystem.to_string(),
            category: category.to_string(),
        }))
    }

    fn fallback(&self, message: &str) -> Result<(), crate::Error> {
        self.lock().push(Captured::Fallback {
            message: message.to_string(),
        });
        Ok(())
    }
}

struct MemoryPrimitive {
    entries: Arc<Mutex<Vec<Captured>>>,
    subsystem: String,
    category: String,
}

impl Primitive for MemoryPrimitive {
    fn write(&self, record: &Record<'_>) -> Result<(), crate::Error> {
        let captured = Captured::Structured {
            subsystem: self.subsystem.clone(),
            category: self.category.clone(),
            level: record.level,
            message: record.message.render().into_owned(),
        };
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(captured);
        Ok(())
    }
}
