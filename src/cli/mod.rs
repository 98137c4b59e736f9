//! Command-line front-end: one decorated message per invocation, for shell scripts that
//! want the same log format as the programs they drive.

use crate::config::Config;
use crate::decor::CallSite;
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use clap::Parser;
use std::path::PathBuf;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Error,
    Fault,
    Verbose,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info | LogLevel::Verbose => Self::Info,
            LogLevel::Error => Self::Error,
            LogLevel::Fault => Self::Fault,
        }
    }
}

/// purrlog - send a decorated message to the system log.
#[derive(Debug, Parser)]
#[command(
    name = "purrlog",
    version,
    about = "Send a decorated message to the system log"
)]
pub struct Cli {
    /// Config file (default: $PURRLOG_CONFIG or <config_dir>/purrlog/purrlog.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Subsystem (default: from config, else the host identifier)
    #[arg(short, long)]
    pub subsystem: Option<String>,
    /// Category within the subsystem
    #[arg(short, long)]
    pub category: Option<String>,
    /// Backend: syslog, jsonl or terminal
    #[arg(short, long, value_parser = crate::sink::BACKEND_NAMES)]
    pub backend: Option<String>,
    /// Function name to report
    #[arg(long, default_value = "-")]
    pub function: String,
    /// File name to report
    #[arg(long, default_value = "-")]
    pub file: String,
    /// Line number to report
    #[arg(long, default_value_t = 0)]
    pub line: u32,
    /// Column number to report (also turns the column segment on)
    #[arg(long)]
    pub column: Option<u32>,
    /// Log level
    #[arg(value_enum)]
    pub level: LogLevel,
    /// Log message
    #[arg(required = true)]
    pub message: Vec<String>,
}

impl Cli {
    /// Loads config, applies the flag overrides and logs the message once.
    ///
    /// # Errors
    /// Config file that can't be read or parsed, or an unusable backend name.
    pub fn run(&self) -> Result<(), crate::Error> {
        let config = match self.config {
            Some(ref path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        internal::init_with_config(&config);

        let mut builder = Logger::config_builder(&config);
        if let Some(ref subsystem) = self.subsystem {
            builder = builder.subsystem(subsystem);
        }
        if let Some(ref category) = self.category {
            builder = builder.category(category);
        }
        if let Some(ref backend) = self.backend {
            builder = builder.shared_backend(config.backend_named(backend)?);
        }
        let mut logger = builder.build();

        let mut site = CallSite::new(&self.function, &self.file, self.line);
        if let Some(column) = self.column {
            site = site.with_column(column);
            logger.decorations_mut().separators.show_column = true;
        }

        logger.log(self.level.into(), &self.message.join(" "), &site);
        Ok(())
    }
}
