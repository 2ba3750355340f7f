//! crates/logging/src/error.rs
//! Error types reported by the formatter and the logger.

use std::io;

/// Template rendering failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// The number of placeholders differs from the number of arguments.
    #[error("malformed template: expected {expected} arguments, found {found}")]
    ArgumentCount {
        /// Placeholders in the template.
        expected: usize,
        /// Arguments supplied by the caller.
        found: usize,
    },
    /// An argument's `Display` implementation returned an error.
    #[error("malformed template: argument {position} failed to render")]
    Argument {
        /// Zero-based index of the argument.
        position: usize,
    },
}

/// Failure reported by [`Logger::log`](crate::Logger::log).
///
/// Neither variant prevents a line from being attempted: a format error still
/// emits a best-effort line. The logging macros discard these errors.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The template did not match its arguments.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// Writing to the output stream failed.
    #[error("failed to write log line: {0}")]
    Io(#[from] io::Error),
}

impl LogError {
    /// Returns the format error, if that is what this is.
    #[must_use]
    pub const fn as_format(&self) -> Option<&FormatError> {
        match self {
            Self::Format(err) => Some(err),
            Self::Io(_) => None,
        }
    }
}
