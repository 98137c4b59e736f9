//! Local syslog daemon over a unix datagram socket, framed as RFC 5424 by `fasyslog`.
//!
//! journald and rsyslog both listen on `/dev/log`, so this is the platform primitive on
//! Linux and the BSDs. Subsystem becomes APP-NAME and category becomes MSGID.

use super::{Backend, Primitive, Record};
use crate::internal;
#[cfg(unix)]
use crate::level::Level;
#[cfg(unix)]
use fasyslog::{Facility, Severity};
use std::path::{Path, PathBuf};

/// `user-level messages`.
const DEFAULT_FACILITY: u8 = 1;

#[derive(Debug, Clone)]
pub struct SyslogBackend {
    socket_path: PathBuf,
    facility: u8,
}

impl Default for SyslogBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SyslogBackend {
    #[must_use]
    pub fn new() -> Self {
        Self {
            socket_path: PathBuf::from("/dev/log"),
            facility: DEFAULT_FACILITY,
        }
    }

    /// Containers and test harnesses put the daemon socket somewhere else.
    #[must_use]
    pub fn socket(mut self, path: impl Into<PathBuf>) -> Self {
        self.socket_path = path.into();
        self
    }

    /// Facility code 0-23; out-of-range values are clamped to `local7`.
    #[must_use]
    pub fn facility(mut self, facility: u8) -> Self {
        self.facility = facility.min(23);
        self
    }

    #[must_use]
    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }
}

impl Backend for SyslogBackend {
    fn name(&self) -> &'static str {
        "syslog"
    }

    #[cfg(unix)]
    fn acquire(&self, subsystem: &str, category: &str) -> Option<Box<dyn Primitive>> {
        let sender = match fasyslog::sender::unix_datagram(&self.socket_path) {
            Ok(sender) => sender,
            Err(e) => {
                internal::debug(
                    "SYSLOG",
                    &format!("{} unavailable: {e}", self.socket_path.display()),
                );
                return None;
            }
        };

        let mut context = fasyslog::format::SyslogContext::default();
        context.facility(facility(self.facility));
        context.appname(subsystem);
        context.procid(std::process::id().to_string());

        internal::debug(
            "SYSLOG",
            &format!("Bound {subsystem}/{category} to {}", self.socket_path.display()),
        );
        Some(Box::new(SyslogPrimitive {
            sender: std::sync::Mutex::new(sender),
            context,
            msgid: category.to_string(),
        }))
    }

    #[cfg(not(unix))]
    fn acquire(&self, _subsystem: &str, _category: &str) -> Option<Box<dyn Primitive>> {
        internal::debug("SYSLOG", "No unix sockets on this platform");
        None
    }
}

#[cfg(unix)]
struct SyslogPrimitive {
    sender: std::sync::Mutex<fasyslog::sender::UnixDatagramSender>,
    context: fasyslog::format::SyslogContext,
    msgid: String,
}

#[cfg(unix)]
impl Primitive for SyslogPrimitive {
    fn write(&self, record: &Record<'_>) -> Result<(), crate::Error> {
        let message = record.message.render();
        let formatted = self
            .context
            .format_rfc5424(
                severity(record.level),
                Some(self.msgid.as_str()),
                Vec::new(),
                Some(&*message),
            )
            .to_string();

        let mut sender = self
            .sender
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        sender.send_formatted(formatted.as_bytes())?;
        Ok(())
    }
}

#[cfg(unix)]
const fn severity(level: Level) -> Severity {
    match level {
        Level::Debug => Severity::DEBUG,
        Level::Info => Severity::INFORMATIONAL,
        Level::Error => Severity::ERROR,
        Level::Fault => Severity::CRITICAL,
    }
}

/// Codes 12-15 differ between platforms and are sent as `user`.
#[cfg(unix)]
const fn facility(code: u8) -> Facility {
    match code {
        0 => Facility::KERN,
        2 => Facility::MAIL,
        3 => Facility::DAEMON,
        4 => Facility::AUTH,
        5 => Facility::SYSLOG,
        6 => Facility::LPR,
        7 => Facility::NEWS,
        8 => Facility::UUCP,
        9 => Facility::CRON,
        10 => Facility::AUTHPRIV,
        11 => Facility::FTP,
        16 => Facility::LOCAL0,
        17 => Facility::LOCAL1,
        18 => Facility::LOCAL2,
        19 => Facility::LOCAL3,
        20 => Facility::LOCAL4,
        21 => Facility::LOCAL5,
        22 => Facility::LOCAL6,
        23 => Facility::LOCAL7,
        _ => Facility::USER,
    }
}

