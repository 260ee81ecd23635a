//! Interval-gated hotspot.

use super::hotspot::paste;
use super::{Hotspot, Render};
use crate::model::RenderError;
use ratatui::buffer::Buffer;
use std::time::{Duration, Instant};

/// Hotspot that only repaints once `interval` has passed since its last paste.
///
/// A snapshot that has never been drawn always wants a redraw. Between
/// redraws the canvas keeps showing the previous paint.
pub struct Snapshot<R> {
    width: u16,
    height: u16,
    render: R,
    interval: Duration,
    last_updated: Option<Instant>,
}

impl<R: Render> Snapshot<R> {
    /// Wrap `render` as a `width` x `height` hotspot refreshed every `interval`.
    pub fn new(width: u16, height: u16, render: R, interval: Duration) -> Self {
        Self {
            width,
            height,
            render,
            interval,
            last_updated: None,
        }
    }

    /// When the snapshot was last pasted, if ever.
    pub fn last_updated(&self) -> Option<Instant> {
        self.last_updated
    }
}

impl<R: Render> Hotspot for Snapshot<R> {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn should_redraw(&self, now: Instant) -> bool {
        match self.last_updated {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        }
    }

    fn paste_into(
        &mut self,
        canvas: &mut Buffer,
        xy: (u16, u16),
        now: Instant,
    ) -> Result<(), RenderError> {
        paste(&mut self.render, self.width, self.height, canvas, xy)?;
        self.last_updated = Some(now);
        Ok(())
    }
}
