//! Dwell filter: pause the scroll on cell boundaries.

use super::Position;
use std::num::NonZeroU16;

/// How many times a boundary value is emitted in a row.
pub const DWELL_REPEATS: usize = 20;

/// Iterator adapter that repeats every multiple of `interval`.
///
/// Values with `x % interval == 0` are yielded [`DWELL_REPEATS`] times before
/// the next source value is pulled; all others pass through once. Ends
/// quietly when the source ends.
#[derive(Debug, Clone)]
pub struct PauseEvery<I> {
    interval: NonZeroU16,
    source: I,
    held: Option<Position>,
    remaining: usize,
}

impl<I> PauseEvery<I>
where
    I: Iterator<Item = Position>,
{
    /// Wrap `source`, dwelling on multiples of `interval`.
    pub fn new(interval: NonZeroU16, source: I) -> Self {
        Self {
            interval,
            source,
            held: None,
            remaining: 0,
        }
    }
}

impl<I> Iterator for PauseEvery<I>
where
    I: Iterator<Item = Position>,
{
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.remaining > 0 {
            self.remaining -= 1;
            return self.held;
        }

        let value = self.source.next()?;
        if value % self.interval.get() == 0 {
            self.held = Some(value);
            self.remaining = DWELL_REPEATS - 1;
        } else {
            self.held = None;
        }
        Some(value)
    }
}

/// Extension for chaining the dwell filter onto any position iterator.
pub trait PositionIterExt: Iterator<Item = Position> + Sized {
    /// Dwell on multiples of `interval`; see [`PauseEvery`].
    fn pause_every(self, interval: NonZeroU16) -> PauseEvery<Self> {
        PauseEvery::new(interval, self)
    }
}

impl<I> PositionIterExt for I where I: Iterator<Item = Position> {}
