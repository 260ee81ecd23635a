//! Layout composer: the seven widgets as a scrolling strip.
//!
//! Widgets are laid side by side (or stacked, on rotated panels) on a
//! [`Viewport`] canvas two cells longer than the visible window. The window
//! then bounces across the strip, driven by the dwell filter wrapping the
//! oscillator, pausing whenever a widget lines up with the display edge.

pub mod layout;
pub mod select;

pub use layout::{Orientation, StripLayout};
pub use select::{first, intersect, select_interface};

use crate::device::Device;
use crate::metrics::MetricsProvider;
use crate::model::{AppError, ViewportError};
use crate::render::{Hotspot, Snapshot, Viewport};
use crate::scroll::{Oscillator, Position, PositionIterExt};
use crate::widgets::{self, CpuLoad};
use std::io;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, info};

/// Number of widgets on the strip.
pub const WIDGET_COUNT: u16 = 7;

/// Refresh interval of the fast-changing widgets (CPU, uptime, clock).
pub const FAST_REFRESH: Duration = Duration::from_secs(1);

/// Refresh interval of the remaining widgets.
pub const SLOW_REFRESH: Duration = Duration::from_secs(2);

/// Which network interface the network widget should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfacePreference {
    /// Candidate names; the first one present on the host wins.
    pub candidates: Vec<String>,
    /// Used when no candidate is present.
    pub fallback: String,
}

impl Default for InterfacePreference {
    fn default() -> Self {
        Self {
            candidates: vec!["eth0".to_string(), "en0".to_string()],
            fallback: "eth0".to_string(),
        }
    }
}

/// The widgets in strip order, each wrapped in a [`Snapshot`] of one cell.
///
/// Order: CPU load, uptime, clock, network, hostname, memory, disk. The
/// network interface is picked once, here, from the provider's interface
/// names.
pub fn build_widgets(
    layout: &StripLayout,
    metrics: &Rc<dyn MetricsProvider>,
    interfaces: &InterfacePreference,
) -> Vec<Box<dyn Hotspot>> {
    let (w, h) = layout.cell_size();
    let interface = select_interface(
        &metrics.net_if_names(),
        &interfaces.candidates,
        &interfaces.fallback,
    );
    debug!(interface = %interface, "Network interface selected");

    vec![
        Box::new(Snapshot::new(w, h, CpuLoad::new(Rc::clone(metrics)), FAST_REFRESH)),
        Box::new(Snapshot::new(
            w,
            h,
            widgets::uptime::render(Rc::clone(metrics)),
            FAST_REFRESH,
        )),
        Box::new(Snapshot::new(w, h, widgets::clock::render(), FAST_REFRESH)),
        Box::new(Snapshot::new(
            w,
            h,
            widgets::network::stats(Rc::clone(metrics), interface),
            SLOW_REFRESH,
        )),
        Box::new(Snapshot::new(
            w,
            h,
            widgets::hostname::render(Rc::clone(metrics)),
            SLOW_REFRESH,
        )),
        Box::new(Snapshot::new(
            w,
            h,
            widgets::memory::render(Rc::clone(metrics)),
            SLOW_REFRESH,
        )),
        Box::new(Snapshot::new(
            w,
            h,
            widgets::disk::render(Rc::clone(metrics)),
            SLOW_REFRESH,
        )),
    ]
}

/// A populated viewport plus the position sequence that drives it.
pub struct Carousel<D> {
    viewport: Viewport<D>,
    layout: StripLayout,
    positions: Box<dyn Iterator<Item = Position>>,
}

impl<D: Device> Carousel<D> {
    /// Lay out the widgets for `device` and register them on a fresh canvas.
    ///
    /// # Errors
    ///
    /// `ViewportError::CanvasTooLarge` if the strip does not fit in a
    /// buffer, or `HotspotOutOfBounds` if a widget does not fit its cell.
    pub fn new(
        device: D,
        metrics: Rc<dyn MetricsProvider>,
        interfaces: &InterfacePreference,
    ) -> Result<Self, ViewportError> {
        let layout = StripLayout::new(
            device.rotate(),
            device.width(),
            device.height(),
            WIDGET_COUNT,
        );
        let (canvas_width, canvas_height) = layout.canvas_size();
        let mut viewport = Viewport::new(device, canvas_width, canvas_height)?;

        for (index, hotspot) in (0..).zip(build_widgets(&layout, &metrics, interfaces)) {
            viewport.add_hotspot(hotspot, layout.offset(index))?;
        }

        // The canvas fits in a buffer, so the extent fits in a position.
        let extent = Position::try_from(layout.scroll_extent()).unwrap_or(Position::MAX);
        let oscillator = Oscillator::new(extent);
        let positions: Box<dyn Iterator<Item = Position>> = match layout.dwell_interval() {
            Some(interval) => Box::new(oscillator.pause_every(interval)),
            None => Box::new(oscillator),
        };

        info!(
            orientation = ?layout.orientation(),
            cell_width = layout.cell_size().0,
            cell_height = layout.cell_size().1,
            extent,
            "Carousel laid out"
        );

        Ok(Self {
            viewport,
            layout,
            positions,
        })
    }

    /// The strip geometry.
    pub fn layout(&self) -> &StripLayout {
        &self.layout
    }

    /// The underlying viewport.
    pub fn viewport(&self) -> &Viewport<D> {
        &self.viewport
    }

    /// Move the window to the next position and show it.
    ///
    /// Returns the scroll offset that was shown, or `None` if the position
    /// sequence has ended (it never does for a live carousel).
    ///
    /// # Errors
    ///
    /// Any widget, canvas or display failure from the refresh.
    pub fn step(&mut self) -> Result<Option<Position>, ViewportError> {
        let Some(p) = self.positions.next() else {
            return Ok(None);
        };
        self.viewport.set_position(self.layout.window_position(p))?;
        Ok(Some(p))
    }

    /// Show frames until `should_stop` says so or `frame_limit` frames are shown.
    ///
    /// `should_stop` runs after every frame and is expected to do the
    /// pacing, e.g. by waiting for input with a timeout. Returns the number
    /// of frames shown.
    ///
    /// # Errors
    ///
    /// The first refresh failure, or an I/O error from `should_stop`.
    pub fn drive<F>(&mut self, frame_limit: Option<u64>, mut should_stop: F) -> Result<u64, AppError>
    where
        F: FnMut() -> io::Result<bool>,
    {
        let mut frames = 0u64;
        while frame_limit.is_none_or(|limit| frames < limit) {
            if self.step()?.is_none() {
                break;
            }
            frames += 1;
            if should_stop()? {
                info!(frames, "Interrupted");
                break;
            }
        }
        Ok(frames)
    }
}
