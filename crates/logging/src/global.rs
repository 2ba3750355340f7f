//! crates/logging/src/global.rs
//! Process-wide default logger on standard output.
//!
//! The configuration is shared by every thread. It sits behind a lock only
//! because a `static` must be `Sync`; a log call copies it out and releases
//! the lock before formatting. The terminal state (the shadowed color
//! attribute over stdout) is kept per thread.
//!
//! # Concurrency
//!
//! Logging assumes a single logical writer. A line and its color escapes are
//! written as separate pieces, so threads logging at the same time can
//! interleave text and colors. Callers that log from several threads must
//! serialize those calls themselves, or give each thread its own
//! [`Logger`](crate::Logger).

use std::cell::RefCell;
use std::fmt::Display;
use std::io;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Once, PoisonError, RwLock};

use super::call_site::CallSite;
use super::color::{ColorMode, Terminal};
use super::config::LogConfig;
use super::error::LogError;
use super::logger::{Emission, emit};
use super::severity::Severity;

static CONFIG: RwLock<LogConfig> = RwLock::new(LogConfig::new());
static COLOR_MODE: AtomicU8 = AtomicU8::new(MODE_AUTO);
static INIT: Once = Once::new();

const MODE_AUTO: u8 = 0;
const MODE_ALWAYS: u8 = 1;
const MODE_NEVER: u8 = 2;

thread_local! {
    static TERMINAL: RefCell<Terminal<io::Stdout>> = RefCell::new(Terminal::stdout(color_mode()));
}

/// Prepares the process for console logging.
///
/// On Windows this switches the console output code page to UTF-8 and turns
/// on escape-sequence processing; if the latter is unavailable colors are
/// disabled. Elsewhere the platform step is a no-op. Only the first call has
/// any effect.
pub fn init() {
    INIT.call_once(|| {
        platform::console::enable_utf8_output();
        if platform::console::enable_virtual_terminal().is_err() {
            set_color_mode(ColorMode::Never);
        }
    });
}

/// Returns the color mode applied to terminals created from now on.
#[must_use]
pub fn color_mode() -> ColorMode {
    match COLOR_MODE.load(Ordering::Relaxed) {
        MODE_ALWAYS => ColorMode::Always,
        MODE_NEVER => ColorMode::Never,
        _ => ColorMode::Auto,
    }
}

/// Sets the color mode and re-resolves it for the calling thread's terminal.
///
/// Other threads pick the mode up the first time they log.
pub fn set_color_mode(mode: ColorMode) {
    let raw = match mode {
        ColorMode::Auto => MODE_AUTO,
        ColorMode::Always => MODE_ALWAYS,
        ColorMode::Never => MODE_NEVER,
    };
    COLOR_MODE.store(raw, Ordering::Relaxed);
    TERMINAL.with(|terminal| {
        if let Ok(mut terminal) = terminal.try_borrow_mut() {
            terminal.set_colors_enabled(mode.enabled_for_stdout());
        }
    });
}

/// Returns a copy of the process-wide configuration.
#[must_use]
pub fn config() -> LogConfig {
    *CONFIG.read().unwrap_or_else(PoisonError::into_inner)
}

/// Replaces the process-wide configuration.
pub fn set_config(config: LogConfig) {
    *CONFIG.write().unwrap_or_else(PoisonError::into_inner) = config;
}

fn update(f: impl FnOnce(&mut LogConfig)) {
    let mut config = CONFIG.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut *config);
}

/// Sets the minimum severity that is emitted.
pub fn set_level(level: Severity) {
    update(|config| config.set_level(level));
}

/// Returns the minimum severity that is emitted.
#[must_use]
pub fn level() -> Severity {
    config().level()
}

/// Shows the directory portion of the source path.
pub fn show_path() {
    update(LogConfig::show_path);
}

/// Hides the directory portion of the source path.
pub fn hide_path() {
    update(LogConfig::hide_path);
}

/// Reports whether the directory portion of the source path is shown.
#[must_use]
pub fn is_path_showing() -> bool {
    config().is_path_showing()
}

/// Shows the source file name.
pub fn show_file_name() {
    update(LogConfig::show_file_name);
}

/// Hides the source file name.
pub fn hide_file_name() {
    update(LogConfig::hide_file_name);
}

/// Reports whether the source file name is shown.
#[must_use]
pub fn is_file_name_showing() -> bool {
    config().is_file_name_showing()
}

/// Shows the calling function's name.
pub fn show_function() {
    update(LogConfig::show_function);
}

/// Hides the calling function's name.
pub fn hide_function() {
    update(LogConfig::hide_function);
}

/// Reports whether the calling function's name is shown.
#[must_use]
pub fn is_function_showing() -> bool {
    config().is_function_showing()
}

/// Shows the source line number.
pub fn show_line() {
    update(LogConfig::show_line);
}

/// Hides the source line number.
pub fn hide_line() {
    update(LogConfig::hide_line);
}

/// Reports whether the source line number is shown.
#[must_use]
pub fn is_line_showing() -> bool {
    config().is_line_showing()
}

/// Logs through the process-wide default onto standard output.
///
/// A re-entrant call on the same thread (for example from a `Display`
/// implementation that itself logs) is dropped rather than panicking.
pub fn log(
    severity: Severity,
    site: &CallSite,
    template: &str,
    args: &[&dyn Display],
) -> Result<Emission, LogError> {
    let config = config();
    if !config.check_level(severity) {
        return Ok(Emission::Gated);
    }

    TERMINAL.with(|terminal| match terminal.try_borrow_mut() {
        Ok(mut terminal) => emit(&config, &mut terminal, severity, site, template, args),
        Err(_) => Ok(Emission::Gated),
    })
}
