//! crates/logging/src/logger.rs
//! Instantiable logger pairing a [`LogConfig`] with a colored [`Terminal`].

use std::fmt::Display;
use std::io::{self, Write};

use super::call_site::CallSite;
use super::color::{ColorMode, Terminal};
use super::config::LogConfig;
use super::error::LogError;
use super::format::format_line;
use super::severity::Severity;

/// Outcome of a log call that did not fail.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Emission {
    /// The message was below the threshold; nothing happened.
    Gated,
    /// The line was written.
    Written,
}

impl Emission {
    /// Reports whether a line was written.
    #[must_use]
    pub const fn is_written(self) -> bool {
        matches!(self, Self::Written)
    }
}

/// Gates, colors, formats and writes one log line.
///
/// This is the single code path behind [`Logger`] and the process-wide
/// default. The gate is checked before any other work; a gated call touches
/// neither the terminal nor the formatter. Color is restored by a guard, so
/// it holds on every exit path including formatting errors and write
/// failures.
pub(crate) fn emit<W: Write>(
    config: &LogConfig,
    terminal: &mut Terminal<W>,
    severity: Severity,
    site: &CallSite,
    template: &str,
    args: &[&dyn Display],
) -> Result<Emission, LogError> {
    if !config.check_level(severity) {
        return Ok(Emission::Gated);
    }

    let mut guard = terminal.scoped_color(severity.color());
    let mut line = String::with_capacity(template.len() + 32);
    let formatted = format_line(&mut line, config, severity, site, template, args);

    let writer = guard.writer_mut();
    writer.write_all(line.as_bytes())?;
    writer.flush()?;
    drop(guard);

    formatted?;
    Ok(Emission::Written)
}

/// Console logger with its own configuration and output stream.
///
/// The logger is independent of the process-wide default, which makes it the
/// type to use in tests and in code that wants several differently configured
/// outputs. Calls take `&mut self`: the logger is a single writer, and sharing
/// it across threads requires external synchronization.
///
/// # Examples
///
/// ```
/// use logging::{CallSite, LogConfig, Logger, Severity};
///
/// let mut logger = Logger::plain(Vec::new(), LogConfig::plain(Severity::Warn));
/// let site = CallSite::from_parts("src/main.rs", "main", 3);
///
/// logger.error(&site, "disk full", &[]).unwrap();
/// logger.info(&site, "started", &[]).unwrap();
///
/// assert_eq!(logger.into_inner(), b"[ERROR] disk full\n");
/// ```
#[derive(Debug)]
pub struct Logger<W> {
    config: LogConfig,
    terminal: Terminal<W>,
}

impl Logger<io::Stdout> {
    /// Creates a logger on standard output.
    #[must_use]
    pub fn stdout(config: LogConfig, mode: ColorMode) -> Self {
        Self::new(Terminal::stdout(mode), config)
    }
}

impl<W> Logger<W> {
    /// Creates a logger from an existing terminal.
    #[must_use]
    pub const fn new(terminal: Terminal<W>, config: LogConfig) -> Self {
        Self { config, terminal }
    }

    /// Creates a logger that never writes color escapes.
    #[must_use]
    pub const fn plain(writer: W, config: LogConfig) -> Self {
        Self::new(Terminal::plain(writer), config)
    }

    /// Creates a logger that always writes color escapes.
    #[must_use]
    pub const fn colored(writer: W, config: LogConfig) -> Self {
        Self::new(Terminal::new(writer, true), config)
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Mutably borrows the configuration.
    pub fn config_mut(&mut self) -> &mut LogConfig {
        &mut self.config
    }

    /// Returns the terminal.
    #[must_use]
    pub const fn terminal(&self) -> &Terminal<W> {
        &self.terminal
    }

    /// Mutably borrows the terminal.
    pub fn terminal_mut(&mut self) -> &mut Terminal<W> {
        &mut self.terminal
    }

    /// Consumes the logger and returns the output writer.
    pub fn into_inner(self) -> W {
        self.terminal.into_inner()
    }
}

impl<W: Write> Logger<W> {
    /// Logs `template` at `severity`.
    ///
    /// Returns [`Emission::Gated`] when the threshold filters the message. A
    /// template/argument mismatch still writes a best-effort line and then
    /// returns [`LogError::Format`].
    pub fn log(
        &mut self,
        severity: Severity,
        site: &CallSite,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<Emission, LogError> {
        emit(
            &self.config,
            &mut self.terminal,
            severity,
            site,
            template,
            args,
        )
    }

    /// Logs at [`Severity::Fatal`].
    pub fn fatal(
        &mut self,
        site: &CallSite,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<Emission, LogError> {
        self.log(Severity::Fatal, site, template, args)
    }

    /// Logs at [`Severity::Error`].
    pub fn error(
        &mut self,
        site: &CallSite,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<Emission, LogError> {
        self.log(Severity::Error, site, template, args)
    }

    /// Logs at [`Severity::Warn`].
    pub fn warn(
        &mut self,
        site: &CallSite,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<Emission, LogError> {
        self.log(Severity::Warn, site, template, args)
    }

    /// Logs at [`Severity::Info`].
    pub fn info(
        &mut self,
        site: &CallSite,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<Emission, LogError> {
        self.log(Severity::Info, site, template, args)
    }

    /// Logs at [`Severity::Debug`].
    pub fn debug(
        &mut self,
        site: &CallSite,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<Emission, LogError> {
        self.log(Severity::Debug, site, template, args)
    }

    /// Logs at [`Severity::Trace`].
    pub fn trace(
        &mut self,
        site: &CallSite,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<Emission, LogError> {
        self.log(Severity::Trace, site, template, args)
    }
}
