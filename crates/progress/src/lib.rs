#![deny(unsafe_code)]
#![deny(missing_docs)]

//! # Overview
//!
//! `progress` draws a fixed-width bar of glyphs followed by a completion
//! percentage and redraws it in place with a carriage return:
//!
//! ```text
//! ⬛⬛⬛⬛⬛⬜⬜⬜⬜⬜ 50.00%
//! ```
//!
//! The bar counts progress in glyphs. Every mutation clamps the count into
//! `0..=length`, so no input is ever rejected. The line is terminated with a
//! newline once the bar is complete.
//!
//! # Examples
//!
//! ```
//! use progress::{ProgressBar, ProgressStyle};
//!
//! let mut bar = ProgressBar::new(10, ProgressStyle::Squares);
//! bar.set_progress(0.5);
//! assert_eq!(bar.render(), "\r⬛⬛⬛⬛⬛⬜⬜⬜⬜⬜ 50.00%");
//!
//! bar.update_progress(100);
//! assert!(bar.is_complete());
//! assert!(bar.render().ends_with("100.00%\n"));
//! ```

mod bar;
mod style;

pub use bar::{ProgressBar, format_percent};
pub use style::{FirstPaint, ProgressStyle};
