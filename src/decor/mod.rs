//! Message decoration: per-level prefix/postfix markers and the call-site suffix
//! (`☞ function 🗄file➸line`) appended to every message.

mod call_site;

pub use call_site::CallSite;

use crate::level::Level;
use std::fmt::{self, Write};

/// Markers wrapped around a composed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub prefix: String,
    pub postfix: String,
}

impl Decoration {
    #[must_use]
    pub fn new(prefix: impl Into<String>, postfix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            postfix: postfix.into(),
        }
    }
}

/// Strings placed between the message and each piece of call-site metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separators {
    /// Between the message and the function name.
    pub message: String,
    /// Between the function name and the file name.
    pub file: String,
    /// Between the file name and the line number.
    pub line: String,
    /// Between the line and column numbers.
    pub column: String,
    /// Column numbers are only written when this is set and the call site carries one.
    pub show_column: bool,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            message: " ☞ ".to_string(),
            file: " 🗄".to_string(),
            line: "➸".to_string(),
            column: ":".to_string(),
            show_column: false,
        }
    }
}

/// Everything the façade reads at call time to dress up a message.
///
/// Fields are public and may be changed at any point after construction; each log
/// call sees whatever is there at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorations {
    pub debug: Decoration,
    pub info: Decoration,
    pub error: Decoration,
    pub fault: Decoration,
    pub separators: Separators,
}

impl Default for Decorations {
    fn default() -> Self {
        Self {
            debug: Decoration::new("😺😺😺 ", " 😺😺😺"),
            info: Decoration::new("ℹ️😼ℹ️ ", " ℹ️😼ℹ️"),
            error: Decoration::new("‼️😿‼️ ", " ‼️😿‼️"),
            fault: Decoration::new("🙀🙀‼️ ", " 🙀🙀‼️"),
            separators: Separators::default(),
        }
    }
}

impl Decorations {
    /// Empty prefixes and postfixes; the call-site suffix stays.
    #[must_use]
    pub fn plain() -> Self {
        let none = Decoration::new("", "");
        Self {
            debug: none.clone(),
            info: none.clone(),
            error: none.clone(),
            fault: none,
            separators: Separators::default(),
        }
    }

    #[must_use]
    pub const fn get(&self, level: Level) -> &Decoration {
        match level {
            Level::Debug => &self.debug,
            Level::Info => &self.info,
            Level::Error => &self.error,
            Level::Fault => &self.fault,
        }
    }

    pub const fn get_mut(&mut self, level: Level) -> &mut Decoration {
        match level {
            Level::Debug => &mut self.debug,
            Level::Info => &mut self.info,
            Level::Error => &mut self.error,
            Level::Fault => &mut self.fault,
        }
    }

    /// `<prefix><message><suffix><postfix>` for the plain-string form.
    #[must_use]
    pub fn decorate(&self, level: Level, message: &str, site: &CallSite<'_>) -> String {
        let decoration = self.get(level);
        let mut out = String::with_capacity(
            decoration.prefix.len() + message.len() + decoration.postfix.len() + 64,
        );
        out.push_str(&decoration.prefix);
        out.push_str(message);
        self.push_suffix(&mut out, site);
        out.push_str(&decoration.postfix);
        out
    }

    /// `<message><suffix>` without markers, as handed to primitives for the template form.
    #[must_use]
    pub fn compose(&self, message: &str, site: &CallSite<'_>) -> String {
        let mut out = String::with_capacity(message.len() + 64);
        out.push_str(message);
        self.push_suffix(&mut out, site);
        out
    }

    fn push_suffix(&self, out: &mut String, site: &CallSite<'_>) {
        let sep = &self.separators;
        out.push_str(&sep.message);
        out.push_str(site.function);
        out.push_str(&sep.file);
        out.push_str(file_base_name(site.file));
        out.push_str(&sep.line);
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", site.line);
        if sep.show_column
            && let Some(column) = site.column
        {
            out.push_str(&sep.column);
            let _ = write!(out, "{column}");
        }
    }
}

/// Last component of a path, accepting both `/` and `\` and ignoring trailing separators.
#[must_use]
pub fn file_base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed)
}

/// Substitutes `arg` for the first `{}` in `template` and unescapes `{{`/`}}` as
/// `format!` does. Later placeholders are left as they are.
#[must_use]
pub fn render_template(template: &str, arg: &dyn fmt::Display) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut substituted = false;
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('{', Some('{')) | ('}', Some('}')) => {
                chars.next();
                out.push(c);
            }
            ('{', Some('}')) if !substituted => {
                chars.next();
                substituted = true;
                // Writing into a String cannot fail.
                let _ = write!(out, "{arg}");
            }
            _ => out.push(c),
        }
    }
    out
}
