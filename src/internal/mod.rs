//! purrlog's own diagnostics: failed probes, sink write errors, config loading.
//!
//! Written through a terminal primitive bound as `purrlog[internal]`, so diagnostics share
//! the terminal backend's timestamped line format. The primitive is used directly rather
//! than through a `Logger`, since a logger reports its own write failures here. Silent
//! until `init` sets a threshold, and `OnceLock` makes the first `init` win.

use crate::config::Config;
use crate::level::Level;
use crate::sink::{Backend, Message, Primitive, Record, TerminalBackend};
use std::sync::OnceLock;

struct Channel {
    threshold: Option<Level>,
    sink: Option<Box<dyn Primitive>>,
}

static CHANNEL: OnceLock<Channel> = OnceLock::new();

/// `None` keeps diagnostics off for the rest of the process.
pub fn init(threshold: Option<Level>) {
    if install(threshold, &TerminalBackend::new()) {
        debug("INTERNAL", "Diagnostics ready");
    }
}

/// Reuses an already-loaded config to avoid reading the file twice.
///
/// An unrecognised `diagnostics` value turns errors on and is reported as one.
pub fn init_with_config(config: &Config) {
    let backend = TerminalBackend::new().timestamp_format(&config.terminal.timestamp_format);
    let (threshold, invalid) = match config.parse_diagnostics() {
        Ok(threshold) => (threshold, None),
        Err(e) => (Some(Level::Error), Some(e)),
    };
    if !install(threshold, &backend) {
        return;
    }

    if let Some(e) = invalid {
        error("CONFIG", &format!("diagnostics: {e}, showing errors only"));
    }
    debug("INTERNAL", "Diagnostics ready");
    debug(
        "INTERNAL",
        &format!("Backend from config: {}", config.general.backend),
    );
}

fn install(threshold: Option<Level>, backend: &TerminalBackend) -> bool {
    let mut installed = false;
    CHANNEL.get_or_init(|| {
        installed = true;
        Channel {
            threshold,
            sink: threshold.and_then(|_| backend.acquire("purrlog", "internal")),
        }
    });
    installed
}

/// Current threshold, `None` when off or not yet initialised.
#[must_use]
pub fn threshold() -> Option<Level> {
    CHANNEL.get().and_then(|channel| channel.threshold)
}

fn passes(threshold: Option<Level>, level: Level) -> bool {
    threshold.is_some_and(|min| level >= min)
}

/// Pre-init calls silently vanish rather than crashing, safe during early startup.
fn log(level: Level, scope: &str, msg: &str) {
    let Some(channel) = CHANNEL.get() else {
        return;
    };
    if !passes(channel.threshold, level) {
        return;
    }
    if let Some(ref sink) = channel.sink {
        let text = format!("{scope}: {msg}");
        // Nowhere left to report a failing stderr.
        let _ = sink.write(&Record {
            level,
            message: Message::Text(&text),
        });
    }
}

/// Probe results and bindings.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

/// Fallback decisions a user may want to know about.
pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Sink failures and unusable config.
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_filters_lower_levels() {
        assert!(passes(Some(Level::Info), Level::Error));
        assert!(passes(Some(Level::Info), Level::Info));
        assert!(!passes(Some(Level::Info), Level::Debug));
        assert!(!passes(None, Level::Fault));
    }
}
