//! Scroll position generators (pure core).
//!
//! Two iterator building blocks drive the carousel window:
//! - [`Oscillator`] runs an offset back and forth across `[0, max]` forever
//! - [`PauseEvery`] repeats offsets that land on a cell boundary so the
//!   scroll dwells on each whole widget
//!
//! Both are plain state machines implementing [`Iterator`]; nothing here
//! touches the terminal or the clock.

mod dwell;
mod oscillator;

pub use dwell::{PauseEvery, PositionIterExt, DWELL_REPEATS};
pub use oscillator::{Direction, Oscillator};

/// Offset along the scroll axis, in terminal cells.
pub type Position = u16;
