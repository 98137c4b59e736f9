//! Where a log call came from.

/// Function, file, line and optionally column of a log call.
///
/// Normally produced by [`call_site!`](crate::call_site); wrappers that forward on
/// behalf of their own caller build one by hand to keep the original location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub function: &'a str,
    pub file: &'a str,
    pub line: u32,
    pub column: Option<u32>,
}

impl<'a> CallSite<'a> {
    #[must_use]
    pub const fn new(function: &'a str, file: &'a str, line: u32) -> Self {
        Self {
            function,
            file,
            line,
            column: None,
        }
    }

    #[must_use]
    pub const fn with_column(mut self, column: u32) -> Self {
        self.column = Some(column);
        self
    }

    /// File, line and column of whoever called the `#[track_caller]` chain that ends here.
    #[must_use]
    #[track_caller]
    pub fn caller(function: &'a str) -> Self {
        let location = std::panic::Location::caller();
        Self {
            function,
            file: location.file(),
            line: location.line(),
            column: Some(location.column()),
        }
    }

    /// Turns the type name of a probe fn nested in some function into that function's name.
    #[doc(hidden)]
    #[must_use]
    pub fn function_from_probe(probe: &'static str) -> &'static str {
        let mut path = probe.strip_suffix("::__purrlog_probe").unwrap_or(probe);
        while let Some(outer) = path.strip_suffix("::{{closure}}") {
            path = outer;
        }
        path.rsplit("::").next().unwrap_or(path)
    }
}

/// Name of the enclosing function, without its module path.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __purrlog_probe() {}
        $crate::decor::CallSite::function_from_probe(::core::any::type_name_of_val(
            &__purrlog_probe,
        ))
    }};
}

/// [`CallSite`](crate::decor::CallSite) of the macro invocation, column included.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::decor::CallSite::new($crate::function_name!(), ::core::file!(), ::core::line!())
            .with_column(::core::column!())
    };
}

#[cfg(test)]
mod tests {
    use super::CallSite;

    #[test]
    fn probe_name_reduces_to_function() {
        assert_eq!(
            CallSite::function_from_probe("app::store::save::__purrlog_probe"),
            "save"
        );
        assert_eq!(
            CallSite::function_from_probe("app::run::{{closure}}::{{closure}}::__purrlog_probe"),
            "run"
        );
    }

    #[test]
    fn macro_captures_enclosing_function() {
        let site = crate::call_site!();
        assert_eq!(site.function, "macro_captures_enclosing_function");
        assert!(site.file.ends_with("call_site.rs"));
        assert!(site.column.is_some());
    }

    #[test]
    fn caller_reads_location() {
        let site = CallSite::caller("here");
        assert_eq!(site.function, "here");
        assert!(site.file.ends_with("call_site.rs"));
        assert!(site.line > 0);
    }
}
