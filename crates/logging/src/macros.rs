//! crates/logging/src/macros.rs
//! Severity macros that capture the call site automatically.
//!
//! Each macro accepts a printf-style template followed by its arguments. By
//! default the line goes to the process-wide logger on standard output; a
//! leading `logger: <expr>,` sends it to a [`Logger`](crate::Logger) instead.
//! The macros evaluate to the [`Result`] of the call so tests can inspect it,
//! and discard it when used as statements.
//!
//! ```
//! use logging::{LogConfig, Logger, Severity};
//!
//! let mut logger = Logger::plain(Vec::new(), LogConfig::plain(Severity::All));
//! let _ = logging::info!(logger: &mut logger, "user %s logged in at %s", "alice", "09:00");
//! assert_eq!(logger.into_inner(), b"[INFO] user alice logged in at 09:00\n");
//! ```

/// Logs at an explicit [`Severity`](crate::Severity) and returns the outcome.
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $severity:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::Logger::log(
            $logger,
            $severity,
            &$crate::call_site!(),
            $template,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
    ($severity:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::log(
            $severity,
            &$crate::call_site!(),
            $template,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
}

/// Logs at [`Severity::Fatal`](crate::Severity::Fatal).
#[macro_export]
macro_rules! fatal {
    (logger: $logger:expr, $($rest:tt)+) => {
        {
            let _ = $crate::log!(logger: $logger, $crate::Severity::Fatal, $($rest)+);
        }
    };
    ($($rest:tt)+) => {
        {
            let _ = $crate::log!($crate::Severity::Fatal, $($rest)+);
        }
    };
}

/// Logs at [`Severity::Error`](crate::Severity::Error).
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($rest:tt)+) => {
        {
            let _ = $crate::log!(logger: $logger, $crate::Severity::Error, $($rest)+);
        }
    };
    ($($rest:tt)+) => {
        {
            let _ = $crate::log!($crate::Severity::Error, $($rest)+);
        }
    };
}

/// Logs at [`Severity::Warn`](crate::Severity::Warn).
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr, $($rest:tt)+) => {
        {
            let _ = $crate::log!(logger: $logger, $crate::Severity::Warn, $($rest)+);
        }
    };
    ($($rest:tt)+) => {
        {
            let _ = $crate::log!($crate::Severity::Warn, $($rest)+);
        }
    };
}

/// Logs at [`Severity::Info`](crate::Severity::Info).
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($rest:tt)+) => {
        {
            let _ = $crate::log!(logger: $logger, $crate::Severity::Info, $($rest)+);
        }
    };
    ($($rest:tt)+) => {
        {
            let _ = $crate::log!($crate::Severity::Info, $($rest)+);
        }
    };
}

/// Logs at [`Severity::Debug`](crate::Severity::Debug).
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($rest:tt)+) => {
        {
            let _ = $crate::log!(logger: $logger, $crate::Severity::Debug, $($rest)+);
        }
    };
    ($($rest:tt)+) => {
        {
            let _ = $crate::log!($crate::Severity::Debug, $($rest)+);
        }
    };
}

/// Logs at [`Severity::Trace`](crate::Severity::Trace).
#[macro_export]
macro_rules! trace {
    (logger: $logger:expr, $($rest:tt)+) => {
        {
            let _ = $crate::log!(logger: $logger, $crate::Severity::Trace, $($rest)+);
        }
    };
    ($($rest:tt)+) => {
        {
            let _ = $crate::log!($crate::Severity::Trace, $($rest)+);
        }
    };
}
