//! crates/logging/src/severity.rs
//! Ordered severity levels and the gate comparison.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;

/// Urgency rank of a log message, also used as the configured threshold.
///
/// Lower ranks are more urgent. [`Severity::Off`] as a threshold admits
/// nothing and [`Severity::All`] admits every message; neither is a valid
/// severity for an individual message.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Severity {
    /// Threshold that suppresses all output.
    Off = 0,
    /// Unrecoverable failure.
    Fatal = 1,
    /// Recoverable failure.
    Error = 2,
    /// Unexpected but tolerated condition.
    Warn = 3,
    /// Normal progress information.
    Info = 4,
    /// Diagnostic detail for developers.
    Debug = 5,
    /// Fine-grained tracing detail.
    Trace = 6,
    /// Threshold that admits every message.
    #[default]
    All = 7,
}

impl Severity {
    /// Every severity in rank order, thresholds included.
    pub const ALL: [Self; 8] = [
        Self::Off,
        Self::Fatal,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Trace,
        Self::All,
    ];

    /// The six severities a message can be logged at.
    pub const MESSAGES: [Self; 6] = [
        Self::Fatal,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Trace,
    ];

    /// Returns the numeric urgency rank (`0` for [`Severity::Off`]).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Converts a numeric rank back into a severity.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::Off),
            1 => Some(Self::Fatal),
            2 => Some(Self::Error),
            3 => Some(Self::Warn),
            4 => Some(Self::Info),
            5 => Some(Self::Debug),
            6 => Some(Self::Trace),
            7 => Some(Self::All),
            _ => None,
        }
    }

    /// Returns the upper-case label rendered inside the severity tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert_eq!(Severity::Error.as_str(), "ERROR");
    /// assert_eq!(Severity::Warn.as_str(), "WARN");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
            Self::All => "ALL",
        }
    }

    /// Returns the bracketed tag that precedes every message, including the
    /// trailing space.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert_eq!(Severity::Info.tag(), "[INFO] ");
    /// ```
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Off => "[OFF] ",
            Self::Fatal => "[FATAL] ",
            Self::Error => "[ERROR] ",
            Self::Warn => "[WARN] ",
            Self::Info => "[INFO] ",
            Self::Debug => "[DEBUG] ",
            Self::Trace => "[TRACE] ",
            Self::All => "[ALL] ",
        }
    }

    /// Returns the foreground color used for lines at this severity.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Fatal | Self::Error => Color::Red,
            Self::Warn => Color::Yellow,
            Self::Debug => Color::Green,
            Self::Off | Self::Info | Self::Trace | Self::All => Color::White,
        }
    }

    /// Reports whether a message at `severity` passes this threshold.
    ///
    /// `Off` and `All` are thresholds only; a message logged at either of them
    /// is never admitted.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert!(Severity::Warn.admits(Severity::Error));
    /// assert!(!Severity::Warn.admits(Severity::Info));
    /// assert!(!Severity::Off.admits(Severity::Fatal));
    /// assert!(!Severity::Off.admits(Severity::Off));
    /// ```
    #[must_use]
    pub const fn admits(self, severity: Self) -> bool {
        severity.is_message() && severity.rank() <= self.rank()
    }

    /// Reports whether this is one of the six severities a message can carry.
    #[must_use]
    pub const fn is_message(self) -> bool {
        !matches!(self, Self::Off | Self::All)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognised log severity: {input:?}")]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if let Ok(rank) = trimmed.parse::<u8>() {
            return Self::from_rank(rank).ok_or_else(|| ParseSeverityError {
                input: input.to_owned(),
            });
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(Self::Off),
            "fatal" => Ok(Self::Fatal),
            "error" | "err" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            "all" => Ok(Self::All),
            _ => Err(ParseSeverityError {
                input: input.to_owned(),
            }),
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = ParseSeverityError;

    fn try_from(rank: u8) -> Result<Self, ParseSeverityError> {
        Self::from_rank(rank).ok_or_else(|| ParseSeverityError {
            input: rank.to_string(),
        })
    }
}
