#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` writes level-filtered, color-coded diagnostic lines to a
//! terminal. Each line carries an optional decoration describing where it was
//! logged from, a severity tag and a message rendered from a printf-style
//! template:
//!
//! ```text
//! [src/service] [worker.rs] [poll] (Line: 88) [WARN] queue is 90% full
//! ```
//!
//! # Design
//!
//! - [`Severity`] orders the six message levels between the `Off` and `All`
//!   thresholds. A message is emitted when its rank is at most the
//!   configured threshold's rank.
//! - [`LogConfig`] holds the threshold and the four decoration toggles.
//! - [`Terminal`] shadows the last color attribute it wrote, and
//!   [`ColorGuard`] puts it back when a line is done, so a log call never
//!   leaves the terminal in its severity color.
//! - [`Logger`] pairs a configuration with a terminal over any
//!   [`io::Write`](std::io::Write). The [`global`] module keeps one
//!   process-wide default on standard output, which the severity macros use
//!   unless given a `logger:`.
//! - [`call_site!`] captures the file, function and line of the caller at
//!   compile time.
//!
//! # Errors
//!
//! Logging never panics on bad input. A template whose placeholder count does
//! not match its arguments still writes a best-effort line and is reported as
//! [`LogError::Format`]; a failing writer is reported as [`LogError::Io`].
//! The severity macros discard both.
//!
//! # Examples
//!
//! ```
//! use logging::{LogConfig, Logger, Severity};
//!
//! let mut logger = Logger::plain(Vec::new(), LogConfig::plain(Severity::Warn));
//! logging::error!(logger: &mut logger, "disk full");
//! logging::info!(logger: &mut logger, "started");
//!
//! assert_eq!(logger.into_inner(), b"[ERROR] disk full\n");
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Severity`] and [`LogConfig`].
//! - `tracing`: a `tracing-subscriber` layer that forwards events into the
//!   process-wide logger.

pub mod call_site;
mod color;
mod config;
mod error;
pub mod format;
pub mod global;
mod logger;
mod macros;
mod severity;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use call_site::CallSite;
pub use color::{Color, ColorAttribute, ColorGuard, ColorMode, Terminal};
pub use config::LogConfig;
pub use error::{FormatError, LogError};
pub use global::{
    hide_file_name, hide_function, hide_line, hide_path, init, is_file_name_showing,
    is_function_showing, is_line_showing, is_path_showing, level, set_color_mode, set_level,
    show_file_name, show_function, show_line, show_path,
};
pub use logger::{Emission, Logger};
pub use severity::{ParseSeverityError, Severity};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{WillogLayer, init_tracing, init_tracing_with_filter};
