//! Glyph styles and redraw behavior.

/// Glyph pair used to draw a bar.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProgressStyle {
    /// `⬛` and `⬜`.
    #[default]
    Squares,
    /// `⣿` and `⣀`.
    Dots,
    /// `⚫` and `⚪`.
    Circles,
    /// `█` and `▁`.
    Bars,
}

impl ProgressStyle {
    /// Every style, in declaration order.
    pub const ALL: [Self; 4] = [Self::Squares, Self::Dots, Self::Circles, Self::Bars];

    /// Glyph for a completed position.
    #[must_use]
    pub const fn complete(self) -> &'static str {
        match self {
            Self::Squares => "⬛",
            Self::Dots => "⣿",
            Self::Circles => "⚫",
            Self::Bars => "█",
        }
    }

    /// Glyph for a position not yet reached.
    #[must_use]
    pub const fn incomplete(self) -> &'static str {
        match self {
            Self::Squares => "⬜",
            Self::Dots => "⣀",
            Self::Circles => "⚪",
            Self::Bars => "▁",
        }
    }

    /// Returns the glyph for 1-based `position` given `progress` glyphs done.
    #[must_use]
    pub const fn glyph(self, position: usize, progress: usize) -> &'static str {
        if position <= progress {
            self.complete()
        } else {
            self.incomplete()
        }
    }
}

/// Whether a bar with no progress starts with a carriage return.
///
/// Bars with any progress always return to the start of the line before
/// drawing so they overwrite the previous paint. At zero progress the line is
/// usually fresh, and [`FirstPaint::Bare`] leaves the carriage return out.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FirstPaint {
    /// No carriage return at zero progress.
    #[default]
    Bare,
    /// Always start with a carriage return.
    CarriageReturn,
}
