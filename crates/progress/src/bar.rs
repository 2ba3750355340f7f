//! Progress bar state and rendering.

use std::io::{self, Write};

use super::style::{FirstPaint, ProgressStyle};

/// Formats the completion percentage of `progress` out of `length` with
/// exactly two decimals.
///
/// The value is truncated, not rounded, so a bar reads `100.00` only when it
/// is actually complete. A zero-length bar counts as complete.
///
/// # Examples
///
/// ```
/// use progress::format_percent;
///
/// assert_eq!(format_percent(1, 2), "50.00");
/// assert_eq!(format_percent(2, 3), "66.66");
/// assert_eq!(format_percent(0, 0), "100.00");
/// ```
#[must_use]
pub fn format_percent(progress: usize, length: usize) -> String {
    if length == 0 {
        return "100.00".to_owned();
    }

    let percent = progress.min(length) as f64 / length as f64 * 100.0;
    let mut text = format!("{percent:.6}");
    if let Some(dot) = text.find('.') {
        text.truncate(dot + 3);
    }
    text
}

/// Fixed-width progress bar counted in glyphs.
///
/// The progress count always stays within `0..=length`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProgressBar {
    progress: usize,
    length: usize,
    style: ProgressStyle,
    first_paint: FirstPaint,
}

impl ProgressBar {
    /// Creates an empty bar `length` glyphs wide.
    #[must_use]
    pub const fn new(length: usize, style: ProgressStyle) -> Self {
        Self {
            progress: 0,
            length,
            style,
            first_paint: FirstPaint::Bare,
        }
    }

    /// Returns the bar with the given first-paint behavior.
    #[must_use]
    pub const fn with_first_paint(mut self, first_paint: FirstPaint) -> Self {
        self.first_paint = first_paint;
        self
    }

    /// Number of completed glyphs.
    #[must_use]
    pub const fn progress(&self) -> usize {
        self.progress
    }

    /// Total number of glyphs.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Glyph style.
    #[must_use]
    pub const fn style(&self) -> ProgressStyle {
        self.style
    }

    /// First-paint behavior.
    #[must_use]
    pub const fn first_paint(&self) -> FirstPaint {
        self.first_paint
    }

    /// Reports whether every glyph is complete.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.progress == self.length
    }

    /// Completed share of the bar in `0.0..=1.0`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.length == 0 {
            1.0
        } else {
            self.progress as f64 / self.length as f64
        }
    }

    /// Moves the bar by `delta` glyphs, backwards when negative.
    ///
    /// The result is clamped into `0..=length`.
    pub fn update_progress(&mut self, delta: isize) {
        let step = delta.unsigned_abs();
        self.progress = if delta < 0 {
            self.progress.saturating_sub(step)
        } else {
            self.progress.saturating_add(step).min(self.length)
        };
    }

    /// Sets the bar to `fraction` of its length, rounded to the nearest glyph.
    ///
    /// Fractions outside `0.0..=1.0` are clamped and NaN counts as zero.
    pub fn set_progress(&mut self, fraction: f64) {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let glyphs = (fraction * self.length as f64).round() as usize;
        self.progress = glyphs.min(self.length);
    }

    /// Renders the line written by [`display`](Self::display).
    #[must_use]
    pub fn render(&self) -> String {
        let glyph_bytes = self.style.complete().len().max(self.style.incomplete().len());
        let mut line = String::with_capacity(self.length * glyph_bytes + 12);

        if self.progress > 0 || self.first_paint == FirstPaint::CarriageReturn {
            line.push('\r');
        }
        for position in 1..=self.length {
            line.push_str(self.style.glyph(position, self.progress));
        }
        line.push(' ');
        line.push_str(&format_percent(self.progress, self.length));
        line.push('%');
        if self.is_complete() {
            line.push('\n');
        }
        line
    }

    /// Writes the rendered line to `writer` and flushes it.
    pub fn display_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.render().as_bytes())?;
        writer.flush()
    }

    /// Writes the rendered line to standard output and flushes it.
    pub fn display(&self) -> io::Result<()> {
        self.display_to(&mut io::stdout().lock())
    }
}
