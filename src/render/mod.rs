//! Buffer compositing: hotspots, snapshots and the scrolling viewport.
//!
//! Widgets draw into their own scratch [`Buffer`] and are pasted into a
//! larger virtual canvas. The [`Viewport`] owns that canvas, decides which
//! hotspots need repainting, and hands the visible window to a
//! [`Device`](crate::device::Device).

mod hotspot;
mod snapshot;
pub mod text;
mod viewport;

pub use hotspot::{blit, crop, FnHotspot};
pub use snapshot::Snapshot;
pub use viewport::Viewport;

use crate::model::RenderError;
use ratatui::{buffer::Buffer, layout::Rect};
use std::time::Instant;

/// Something that can paint itself into an area of a buffer.
///
/// Implemented for every `FnMut(&mut Buffer, Rect) -> Result<(), RenderError>`,
/// so plain closures work as draw functions.
pub trait Render {
    /// Paint into `area` of `buf`.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the data to draw is unavailable.
    fn render(&mut self, buf: &mut Buffer, area: Rect) -> Result<(), RenderError>;
}

impl<F> Render for F
where
    F: FnMut(&mut Buffer, Rect) -> Result<(), RenderError>,
{
    fn render(&mut self, buf: &mut Buffer, area: Rect) -> Result<(), RenderError> {
        self(buf, area)
    }
}

/// A fixed-size renderable registered at an offset inside a [`Viewport`].
pub trait Hotspot {
    /// Width in cells.
    fn width(&self) -> u16;

    /// Height in cells.
    fn height(&self) -> u16;

    /// Whether the hotspot wants to be repainted at `now`.
    fn should_redraw(&self, now: Instant) -> bool;

    /// Render into a blank scratch buffer and copy it into `canvas` at `xy`.
    ///
    /// # Errors
    ///
    /// Propagates the underlying render failure; the canvas is left untouched.
    fn paste_into(
        &mut self,
        canvas: &mut Buffer,
        xy: (u16, u16),
        now: Instant,
    ) -> Result<(), RenderError>;
}
