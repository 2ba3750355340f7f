#![deny(unsafe_code)]
#![deny(missing_docs)]

//! # Overview
//!
//! `willog` bundles two small terminal facilities:
//!
//! - a level-filtered, color-coded console logger with call-site decoration
//!   and printf-style templates, re-exported from the `logging` crate;
//! - an in-place progress bar, re-exported from the `progress` crate.
//!
//! # Examples
//!
//! ```no_run
//! use willog::{ProgressBar, ProgressStyle, Severity};
//!
//! willog::init();
//! willog::set_level(Severity::Info);
//! willog::info!("user %s logged in at %s", "alice", "09:00");
//!
//! let mut bar = ProgressBar::new(20, ProgressStyle::Bars);
//! bar.display()?;
//! bar.set_progress(0.5);
//! bar.display()?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub use logging::{
    CallSite, Color, ColorAttribute, ColorGuard, ColorMode, Emission, FormatError, LogConfig,
    LogError, Logger, ParseSeverityError, Severity, Terminal, call_site, debug, error, fatal,
    format, function_name, global, hide_file_name, hide_function, hide_line, hide_path, info,
    init, is_file_name_showing, is_function_showing, is_line_showing, is_path_showing, level,
    log, set_color_mode, set_level, show_file_name, show_function, show_line, show_path, trace,
    warn,
};
#[cfg(feature = "tracing")]
pub use logging::{WillogLayer, init_tracing, init_tracing_with_filter};
pub use progress::{FirstPaint, ProgressBar, ProgressStyle, format_percent};
