//! crates/logging/src/call_site.rs
//! Source location captured at each logging macro invocation.

use std::fmt;

/// Source location of a log call: directory, file name, function and line.
///
/// Values are normally produced by [`call_site!`](crate::call_site) inside the
/// logging macros, so callers never pass them by hand.
///
/// # Examples
///
/// ```
/// use logging::CallSite;
///
/// let site = CallSite::from_parts("src/net/socket.rs", "connect", 42);
/// assert_eq!(site.file_path(), "src/net");
/// assert_eq!(site.file_name(), "socket.rs");
/// assert_eq!(site.function(), "connect");
/// assert_eq!(site.line(), 42);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CallSite {
    file_path: &'static str,
    file_name: &'static str,
    function: &'static str,
    line: u32,
}

impl CallSite {
    /// Builds a call site by splitting `full_path` on its last separator.
    ///
    /// Both `/` and `\` are treated as separators so paths produced on either
    /// platform split the same way. A path without a separator yields an empty
    /// directory portion.
    #[must_use]
    pub fn from_parts(full_path: &'static str, function: &'static str, line: u32) -> Self {
        let (file_path, file_name) = match full_path.rfind(['/', '\\']) {
            Some(index) => (&full_path[..index], &full_path[index + 1..]),
            None => ("", full_path),
        };

        Self {
            file_path,
            file_name,
            function,
            line,
        }
    }

    /// Directory portion of the source path.
    #[must_use]
    pub const fn file_path(&self) -> &'static str {
        self.file_path
    }

    /// File name portion of the source path.
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        self.file_name
    }

    /// Unqualified name of the calling function.
    #[must_use]
    pub const fn function(&self) -> &'static str {
        self.function
    }

    /// Line number of the call.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.file_path.is_empty() {
            write!(f, "{}:{}", self.file_name, self.line)
        } else {
            write!(f, "{}/{}:{}", self.file_path, self.file_name, self.line)
        }
    }
}

/// Reduces a type path such as `crate::module::function::__f` to `function`.
///
/// Closure frames (`{{closure}}`) are skipped so a log call inside a closure
/// reports the enclosing function.
#[doc(hidden)]
#[must_use]
pub fn function_name_from_type_path(path: &'static str) -> &'static str {
    let mut path = path.strip_suffix("::__f").unwrap_or(path);
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    path.rsplit("::").next().unwrap_or(path)
}

/// Expands to the unqualified name of the enclosing function.
///
/// # Examples
///
/// ```
/// fn handshake() -> &'static str {
///     logging::function_name!()
/// }
///
/// assert_eq!(handshake(), "handshake");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __f() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::call_site::function_name_from_type_path(__type_name_of(__f))
    }};
}

/// Captures the current [`CallSite`].
///
/// # Examples
///
/// ```
/// use logging::{CallSite, call_site};
///
/// let site: CallSite = call_site!();
/// assert!(site.file_name().ends_with(".rs"));
/// assert!(site.line() > 0);
/// ```
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::from_parts(file!(), $crate::function_name!(), line!())
    };
}
