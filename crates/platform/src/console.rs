//! Console preparation for UTF-8 text and ANSI escape sequences.
//!
//! Unix terminals interpret escapes and UTF-8 natively, so both functions do
//! nothing there. On Windows they switch the output code page and enable
//! virtual terminal processing on the standard output handle.

use thiserror::Error;

/// UTF-8 code page identifier.
pub const CP_UTF8: u32 = 65001;

/// Failure to configure the console.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ConsoleError {
    /// A console API call failed.
    #[error("{operation} failed (code {code:#x})")]
    Call {
        /// Name of the failing API.
        operation: &'static str,
        /// Raw error code reported by the OS.
        code: i32,
    },
}

impl ConsoleError {
    /// Returns the name of the API that failed.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Call { operation, .. } => operation,
        }
    }
}

/// Switches console output to the UTF-8 code page.
///
/// Failure is ignored: text still reaches the console, only non-ASCII
/// symbols may render incorrectly.
pub fn enable_utf8_output() {
    #[cfg(windows)]
    windows_impl::set_output_code_page(CP_UTF8);
}

/// Enables interpretation of ANSI escape sequences on standard output.
///
/// Returns an error when standard output is not a console or the console
/// does not support virtual terminal processing; callers should then stop
/// emitting color escapes.
pub fn enable_virtual_terminal() -> Result<(), ConsoleError> {
    #[cfg(windows)]
    {
        windows_impl::enable_virtual_terminal()
    }
    #[cfg(not(windows))]
    {
        Ok(())
    }
}

#[cfg(windows)]
#[allow(unsafe_code)]
mod windows_impl {
    use windows::Win32::System::Console::{
        CONSOLE_MODE, ENABLE_VIRTUAL_TERMINAL_PROCESSING, GetConsoleMode, GetStdHandle,
        STD_OUTPUT_HANDLE, SetConsoleMode, SetConsoleOutputCP,
    };

    use super::ConsoleError;

    fn call_error(operation: &'static str, err: &windows::core::Error) -> ConsoleError {
        ConsoleError::Call {
            operation,
            code: err.code().0,
        }
    }

    pub(super) fn set_output_code_page(code_page: u32) {
        // SAFETY: SetConsoleOutputCP takes no pointers and only affects this
        // process's console.
        let _ = unsafe { SetConsoleOutputCP(code_page) };
    }

    pub(super) fn enable_virtual_terminal() -> Result<(), ConsoleError> {
        // SAFETY: GetStdHandle has no preconditions; the returned handle is
        // owned by the process and must not be closed.
        let handle = unsafe { GetStdHandle(STD_OUTPUT_HANDLE) }
            .map_err(|err| call_error("GetStdHandle", &err))?;

        let mut mode = CONSOLE_MODE::default();
        // SAFETY: `mode` is a valid, writable CONSOLE_MODE for the duration
        // of the call.
        unsafe { GetConsoleMode(handle, &raw mut mode) }
            .map_err(|err| call_error("GetConsoleMode", &err))?;

        if mode.0 & ENABLE_VIRTUAL_TERMINAL_PROCESSING.0 != 0 {
            return Ok(());
        }

        let enabled = CONSOLE_MODE(mode.0 | ENABLE_VIRTUAL_TERMINAL_PROCESSING.0);
        // SAFETY: the handle came from GetStdHandle above and the mode value
        // only adds a flag to the one the console reported.
        unsafe { SetConsoleMode(handle, enabled) }
            .map_err(|err| call_error("SetConsoleMode", &err))
    }
}
