use std::io::Write;

use super::{ColorAttribute, Terminal};

/// RAII guard that restores a [`Terminal`]'s previous foreground attribute.
///
/// Instances are created by [`Terminal::scoped_color`]. While the guard is
/// alive, writes issued through it use the scoped color. Dropping the guard
/// reinstates the attribute that was current before, on every exit path. The
/// guard implements [`Deref`](std::ops::Deref) and
/// [`DerefMut`](std::ops::DerefMut) so the terminal stays usable through it.
#[must_use = "dropping the guard immediately restores the previous color"]
pub struct ColorGuard<'a, W: Write> {
    terminal: Option<&'a mut Terminal<W>>,
    previous: ColorAttribute,
}

impl<'a, W: Write> ColorGuard<'a, W> {
    pub(crate) const fn new(terminal: &'a mut Terminal<W>, previous: ColorAttribute) -> Self {
        Self {
            terminal: Some(terminal),
            previous,
        }
    }

    /// Returns the attribute that will be restored when the guard is dropped.
    #[must_use]
    pub const fn previous_attribute(&self) -> ColorAttribute {
        self.previous
    }
}

impl<W: Write> Drop for ColorGuard<'_, W> {
    fn drop(&mut self) {
        if let Some(terminal) = self.terminal.take() {
            terminal.set_attribute(self.previous);
        }
    }
}

impl<W: Write> std::ops::Deref for ColorGuard<'_, W> {
    type Target = Terminal<W>;

    fn deref(&self) -> &Self::Target {
        self.terminal
            .as_deref()
            .expect("color guard remains active while borrowed")
    }
}

impl<W: Write> std::ops::DerefMut for ColorGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.terminal
            .as_deref_mut()
            .expect("color guard remains active while borrowed")
    }
}

#[cfg(test)]
mod tests {
    use super::super::Color;
    use super::*;

    #[test]
    fn drop_restores_previous_attribute() {
        let mut terminal = Terminal::new(Vec::new(), true);
        {
            let guard = terminal.scoped_color(Color::Purple);
            assert_eq!(guard.previous_attribute(), ColorAttribute::DEFAULT);
            assert_eq!(guard.current(), Color::Purple.attribute());
        }
        assert_eq!(terminal.current(), ColorAttribute::DEFAULT);
        assert_eq!(terminal.into_inner(), b"\x1b[95m\x1b[39m".to_vec());
    }

    #[test]
    fn nested_guards_unwind_in_order() {
        let mut terminal = Terminal::new(Vec::new(), true);
        {
            let mut outer = terminal.scoped_color(Color::Red);
            {
                let inner = outer.scoped_color(Color::Green);
                assert_eq!(inner.previous_attribute(), Color::Red.attribute());
            }
            assert_eq!(outer.current(), Color::Red.attribute());
        }
        assert_eq!(terminal.current(), ColorAttribute::DEFAULT);
    }

    #[test]
    fn writes_through_guard_land_between_escapes() {
        let mut terminal = Terminal::new(Vec::new(), true);
        {
            let mut guard = terminal.scoped_color(Color::Cyan);
            guard.writer_mut().extend_from_slice(b"text");
        }
        assert_eq!(terminal.into_inner(), b"\x1b[96mtext\x1b[39m".to_vec());
    }

    #[test]
    fn restores_after_panic_unwinds_through_guard() {
        let mut terminal = Terminal::new(Vec::new(), true);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = terminal.scoped_color(Color::Yellow);
            panic!("formatting failed");
        }));
        assert!(result.is_err());
        assert_eq!(terminal.current(), ColorAttribute::DEFAULT);
    }
}
