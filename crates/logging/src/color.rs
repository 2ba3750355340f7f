//! crates/logging/src/color.rs
//! Foreground color control for the output terminal.
//!
//! ANSI terminals offer no way to read back the active attribute, so
//! [`Terminal`] shadows the attribute it last applied. Each change returns the
//! attribute that was current beforehand, which callers hand back to
//! [`Terminal::set_attribute`] to restore it. [`ColorGuard`] performs that
//! restoration on drop.
//!
//! When color is disabled (output redirected, or [`ColorMode::Never`]) both
//! operations are no-ops that return [`ColorAttribute::DEFAULT`], so a log line
//! degrades to plain text without any escape sequences.

use std::fmt;
use std::io::{self, Write};

use is_terminal::IsTerminal;

mod guard;

pub use guard::ColorGuard;

/// Named foreground colors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    /// Black.
    Black,
    /// Bright white.
    White,
    /// Bright blue.
    Blue,
    /// Bright green.
    Green,
    /// Bright cyan.
    Cyan,
    /// Bright red.
    Red,
    /// Bright magenta.
    Purple,
    /// Bright yellow.
    Yellow,
    /// Dark grey.
    Grey,
}

impl Color {
    /// Returns the SGR foreground code for this color.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Black => 30,
            Self::White => 97,
            Self::Blue => 94,
            Self::Green => 92,
            Self::Cyan => 96,
            Self::Red => 91,
            Self::Purple => 95,
            Self::Yellow => 93,
            Self::Grey => 90,
        }
    }

    /// Returns the opaque attribute selecting this color.
    #[must_use]
    pub const fn attribute(self) -> ColorAttribute {
        ColorAttribute(self.code())
    }
}

/// Opaque foreground attribute as previously returned by a [`Terminal`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ColorAttribute(u8);

impl ColorAttribute {
    /// The terminal's default foreground.
    pub const DEFAULT: Self = Self(39);

    /// Returns the SGR code carried by the attribute.
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Reports whether this is the terminal default.
    #[must_use]
    pub const fn is_default(self) -> bool {
        self.0 == Self::DEFAULT.0
    }
}

impl Default for ColorAttribute {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ColorAttribute {
    /// Renders the SGR escape sequence selecting the attribute.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", self.0)
    }
}

/// Selects whether color escapes are written.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorMode {
    /// Emit colors only when standard output is an interactive terminal.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorMode {
    /// Resolves the mode against the current standard output stream.
    #[must_use]
    pub fn enabled_for_stdout(self) -> bool {
        match self {
            Self::Auto => io::stdout().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Output stream paired with its foreground color state.
///
/// Writes of text go through [`Terminal::writer_mut`]; color changes write
/// escape sequences into the same stream so the two stay ordered. Escape
/// write failures are swallowed: a terminal that cannot be colored still
/// receives its text.
#[derive(Debug)]
pub struct Terminal<W> {
    writer: W,
    current: ColorAttribute,
    enabled: bool,
}

impl Terminal<io::Stdout> {
    /// Wraps standard output, resolving `mode` against it.
    #[must_use]
    pub fn stdout(mode: ColorMode) -> Self {
        Self::new(io::stdout(), mode.enabled_for_stdout())
    }
}

impl<W> Terminal<W> {
    /// Wraps `writer`; escape sequences are only written when `colors_enabled`.
    #[must_use]
    pub const fn new(writer: W, colors_enabled: bool) -> Self {
        Self {
            writer,
            current: ColorAttribute::DEFAULT,
            enabled: colors_enabled,
        }
    }

    /// Wraps `writer` with colors disabled.
    #[must_use]
    pub const fn plain(writer: W) -> Self {
        Self::new(writer, false)
    }

    /// Reports whether color escapes are written.
    #[must_use]
    pub const fn colors_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables color escapes.
    ///
    /// Disabling does not reset an attribute already applied; restore it first.
    pub fn set_colors_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns the attribute currently applied.
    ///
    /// Always [`ColorAttribute::DEFAULT`] while colors are disabled.
    #[must_use]
    pub const fn current(&self) -> ColorAttribute {
        if self.enabled {
            self.current
        } else {
            ColorAttribute::DEFAULT
        }
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the terminal and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Terminal<W> {
    /// Applies `color`, returning the attribute that was current before.
    pub fn set_color(&mut self, color: Color) -> ColorAttribute {
        self.set_attribute(color.attribute())
    }

    /// Applies a raw attribute, returning the attribute that was current before.
    pub fn set_attribute(&mut self, attribute: ColorAttribute) -> ColorAttribute {
        if !self.enabled {
            return ColorAttribute::DEFAULT;
        }

        let previous = self.current;
        if previous != attribute {
            // A failed escape leaves the shadow untouched.
            if write!(self.writer, "{attribute}").is_ok() {
                self.current = attribute;
            }
        }
        previous
    }

    /// Applies `color` and returns a guard restoring the previous attribute on drop.
    pub fn scoped_color(&mut self, color: Color) -> ColorGuard<'_, W> {
        let previous = self.set_color(color);
        ColorGuard::new(self, previous)
    }
}
