//! Property tests for progress clamping and line termination.

use progress::{FirstPaint, ProgressBar, ProgressStyle};
use proptest::prelude::*;

fn any_style() -> impl Strategy<Value = ProgressStyle> {
    prop::sample::select(ProgressStyle::ALL.to_vec())
}

proptest! {
    /// No sequence of updates leaves the bar outside `0..=length`.
    #[test]
    fn updates_stay_in_range(
        length in 0usize..200,
        deltas in prop::collection::vec(any::<isize>(), 0..32),
    ) {
        let mut bar = ProgressBar::new(length, ProgressStyle::Squares);
        for delta in deltas {
            bar.update_progress(delta);
            prop_assert!(bar.progress() <= bar.length());
        }
    }

    /// Any fraction, including non-finite ones, lands in range.
    #[test]
    fn set_progress_stays_in_range(length in 0usize..200, fraction in any::<f64>()) {
        let mut bar = ProgressBar::new(length, ProgressStyle::Dots);
        bar.set_progress(fraction);
        prop_assert!(bar.progress() <= length);
    }

    /// The line ends with a newline exactly when the bar is complete.
    #[test]
    fn newline_only_when_complete(
        length in 1usize..64,
        steps in 0usize..80,
        style in any_style(),
    ) {
        let mut bar = ProgressBar::new(length, style);
        bar.update_progress(steps as isize);
        let line = bar.render();
        prop_assert_eq!(line.ends_with('\n'), bar.progress() == length);
    }

    /// The bar always draws `length` glyphs.
    #[test]
    fn glyph_count_matches_length(length in 0usize..64, fraction in 0.0f64..=1.0, style in any_style()) {
        let mut bar = ProgressBar::new(length, style);
        bar.set_progress(fraction);
        let line = bar.render();
        let glyphs = line
            .trim_start_matches('\r')
            .split(' ')
            .next()
            .unwrap_or_default()
            .chars()
            .count();
        prop_assert_eq!(glyphs, length);
    }
}

#[test]
fn endpoints_of_set_progress() {
    let mut bar = ProgressBar::new(7, ProgressStyle::Circles);
    bar.set_progress(0.0);
    assert_eq!(bar.progress(), 0);
    bar.set_progress(1.0);
    assert_eq!(bar.progress(), 7);
    bar.set_progress(f64::INFINITY);
    assert_eq!(bar.progress(), 7);
    bar.set_progress(f64::NEG_INFINITY);
    assert_eq!(bar.progress(), 0);
}

#[test]
fn redraw_sequence() {
    let mut bar = ProgressBar::new(4, ProgressStyle::Bars);
    let mut frames = vec![bar.render()];
    for _ in 0..4 {
        bar.update_progress(1);
        frames.push(bar.render());
    }
    assert_eq!(
        frames,
        [
            "▁▁▁▁ 0.00%",
            "\r█▁▁▁ 25.00%",
            "\r██▁▁ 50.00%",
            "\r███▁ 75.00%",
            "\r████ 100.00%\n",
        ]
    );
}

#[test]
fn carriage_return_first_paint_redraws_from_the_start() {
    let bar = ProgressBar::new(2, ProgressStyle::Squares).with_first_paint(FirstPaint::CarriageReturn);
    assert!(bar.render().starts_with('\r'));
}
