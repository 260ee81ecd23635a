//! Back-and-forth offset generator.

use super::Position;

/// Direction the oscillator is currently travelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Counting up towards `max`.
    #[default]
    Forward,
    /// Counting down towards 0.
    Backward,
}

/// Infinite back-and-forth sequence over `[0, max]`.
///
/// Yields `0, 1, ..., max-1` then `max, max-1, ..., 1`, and repeats.
/// Each endpoint appears once per half-cycle, never twice at the turn.
///
/// `max = 0` yields `0` forever.
///
/// # Example
///
/// ```
/// use hotspot_carousel::scroll::Oscillator;
///
/// let first: Vec<u16> = Oscillator::new(3).take(8).collect();
/// assert_eq!(first, vec![0, 1, 2, 3, 2, 1, 0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Oscillator {
    max: Position,
    current: Position,
    direction: Direction,
}

impl Oscillator {
    /// Start a fresh sequence at 0, heading forward.
    pub fn new(max: Position) -> Self {
        Self {
            max,
            current: 0,
            direction: Direction::Forward,
        }
    }

    /// Upper bound of the sweep.
    pub fn bound(&self) -> Position {
        self.max
    }

    /// Value the next call to `next()` will yield.
    pub fn current(&self) -> Position {
        self.current
    }

    /// Direction of travel for the next yielded value.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Iterator for Oscillator {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.max == 0 {
            return Some(0);
        }

        let value = self.current;
        match self.direction {
            Direction::Forward => {
                self.current += 1;
                if self.current == self.max {
                    self.direction = Direction::Backward;
                }
            }
            Direction::Backward => {
                self.current -= 1;
                if self.current == 0 {
                    self.direction = Direction::Forward;
                }
            }
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweeps_forward_then_backward() {
        let values: Vec<_> = Oscillator::new(4).take(8).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4, 3, 2, 1]);
    }

    #[test]
    fn repeats_after_full_cycle() {
        let values: Vec<_> = Oscillator::new(3).take(12).collect();
        assert_eq!(&values[..6], &values[6..]);
    }

    #[test]
    fn max_one_alternates() {
        let values: Vec<_> = Oscillator::new(1).take(6).collect();
        assert_eq!(values, vec![0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn max_zero_yields_zero_forever() {
        let values: Vec<_> = Oscillator::new(0).take(50).collect();
        assert!(values.iter().all(|&v| v == 0));
        assert_eq!(values.len(), 50);
    }

    #[test]
    fn turns_at_max() {
        let mut osc = Oscillator::new(2);
        assert_eq!(osc.direction(), Direction::Forward);
        osc.next();
        osc.next();
        assert_eq!(osc.direction(), Direction::Backward);
        assert_eq!(osc.current(), 2);
        assert_eq!(osc.next(), Some(2));
        assert_eq!(osc.next(), Some(1));
        assert_eq!(osc.direction(), Direction::Forward);
        assert_eq!(osc.current(), 0);
    }

    #[test]
    fn new_restarts_sequence() {
        let mut osc = Oscillator::new(5);
        osc.nth(6);
        assert_eq!(osc.bound(), 5);
        let fresh = Oscillator::new(osc.bound());
        assert_eq!(fresh.bound(), 5);
        assert_eq!(fresh.current(), 0);
        assert_eq!(fresh.direction(), Direction::Forward);
    }

    #[test]
    fn max_bound_does_not_overflow() {
        let values: Vec<_> = Oscillator::new(Position::MAX).skip(65_534).take(3).collect();
        assert_eq!(values, vec![65_534, 65_535, 65_534]);
    }
}
