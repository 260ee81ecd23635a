//! Virtual canvas larger than the device, shown through a movable window.

use super::{crop, Hotspot};
use crate::device::Device;
use crate::model::ViewportError;
use ratatui::{buffer::Buffer, layout::Rect};
use std::time::Instant;
use tracing::trace;

/// Canvas with registered hotspots and a device-sized visible window.
///
/// On every refresh, hotspots that want a redraw *and* intersect the window
/// are repainted into the canvas; the window is then cropped out and sent to
/// the device. Off-window hotspots keep their last paint.
pub struct Viewport<D> {
    device: D,
    canvas: Buffer,
    position: (u16, u16),
    hotspots: Vec<(Box<dyn Hotspot>, (u16, u16))>,
}

impl<D: Device> Viewport<D> {
    /// Blank canvas of `width` x `height` cells with the window at the origin.
    ///
    /// # Errors
    ///
    /// `ViewportError::CanvasTooLarge` if either side exceeds `u16::MAX` or
    /// the cell count exceeds what a ratatui buffer can address.
    pub fn new(device: D, width: u32, height: u32) -> Result<Self, ViewportError> {
        let max = u32::from(u16::MAX);
        let too_large = ViewportError::CanvasTooLarge { width, height, max };
        let (w, h) = match (u16::try_from(width), u16::try_from(height)) {
            (Ok(w), Ok(h)) if width * height <= max => (w, h),
            _ => return Err(too_large),
        };
        Ok(Self {
            device,
            canvas: Buffer::empty(Rect::new(0, 0, w, h)),
            position: (0, 0),
            hotspots: Vec::new(),
        })
    }

    /// Canvas width.
    pub fn width(&self) -> u16 {
        self.canvas.area.width
    }

    /// Canvas height.
    pub fn height(&self) -> u16 {
        self.canvas.area.height
    }

    /// Current window position.
    pub fn position(&self) -> (u16, u16) {
        self.position
    }

    /// Number of registered hotspots.
    pub fn hotspot_count(&self) -> usize {
        self.hotspots.len()
    }

    /// The whole canvas as last painted.
    pub fn canvas(&self) -> &Buffer {
        &self.canvas
    }

    /// The device the window is shown on.
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Register `hotspot` with its top-left corner at `xy`.
    ///
    /// # Errors
    ///
    /// `ViewportError::HotspotOutOfBounds` unless the hotspot fits entirely
    /// inside the canvas.
    pub fn add_hotspot(
        &mut self,
        hotspot: Box<dyn Hotspot>,
        xy: (u16, u16),
    ) -> Result<(), ViewportError> {
        let (x, y) = xy;
        let fits_x = u32::from(x) + u32::from(hotspot.width()) <= u32::from(self.width());
        let fits_y = u32::from(y) + u32::from(hotspot.height()) <= u32::from(self.height());
        if !(fits_x && fits_y) {
            return Err(ViewportError::HotspotOutOfBounds {
                x,
                y,
                width: hotspot.width(),
                height: hotspot.height(),
                canvas_width: self.width(),
                canvas_height: self.height(),
            });
        }
        self.hotspots.push((hotspot, xy));
        Ok(())
    }

    /// Move the window to `xy` and refresh.
    ///
    /// # Errors
    ///
    /// See [`Viewport::refresh`].
    pub fn set_position(&mut self, xy: (u16, u16)) -> Result<(), ViewportError> {
        self.position = xy;
        self.refresh(Instant::now())
    }

    /// Repaint due, visible hotspots and display the window.
    ///
    /// # Errors
    ///
    /// `ViewportError::WindowOutOfBounds` if the window leaves the canvas,
    /// `ViewportError::Render` if a hotspot fails to draw, and
    /// `ViewportError::Device` if the device rejects the frame.
    pub fn refresh(&mut self, now: Instant) -> Result<(), ViewportError> {
        let window = self.window()?;

        let mut repainted = 0usize;
        for (hotspot, xy) in &mut self.hotspots {
            if hotspot.should_redraw(now) && overlaps(window, &**hotspot, *xy) {
                hotspot.paste_into(&mut self.canvas, *xy, now)?;
                repainted += 1;
            }
        }
        trace!(x = window.x, y = window.y, repainted, "Viewport refresh");

        let frame = crop(&self.canvas, window);
        self.device.display(&frame)?;
        Ok(())
    }

    /// Device-sized rectangle at the current position, checked against the canvas.
    fn window(&self) -> Result<Rect, ViewportError> {
        let (x, y) = self.position;
        let (width, height) = (self.device.width(), self.device.height());
        let inside = u32::from(x) + u32::from(width) <= u32::from(self.width())
            && u32::from(y) + u32::from(height) <= u32::from(self.height());
        if !inside {
            return Err(ViewportError::WindowOutOfBounds {
                x,
                y,
                width,
                height,
                canvas_width: self.width(),
                canvas_height: self.height(),
            });
        }
        Ok(Rect::new(x, y, width, height))
    }
}

/// Half-open interval overlap: `[a_min, a_max)` and `[b_min, b_max)`.
fn range_overlap(a_min: u32, a_max: u32, b_min: u32, b_max: u32) -> bool {
    a_min < b_max && b_min < a_max
}

fn overlaps(window: Rect, hotspot: &dyn Hotspot, (x, y): (u16, u16)) -> bool {
    let (l1, t1) = (u32::from(x), u32::from(y));
    let (r1, b1) = (l1 + u32::from(hotspot.width()), t1 + u32::from(hotspot.height()));
    let (l2, t2) = (u32::from(window.x), u32::from(window.y));
    let (r2, b2) = (l2 + u32::from(window.width), t2 + u32::from(window.height));
    range_overlap(l1, r1, l2, r2) && range_overlap(t1, b1, t2, b2)
}

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod tests;
