//! Error types for the carousel.
//!
//! Errors are split by concern and compose into [`AppError`] through `From`
//! conversions, so every layer can propagate with `?`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level failure returned by [`crate::app::run`]
//!   - [`crate::config::ConfigError`] - unreadable or invalid configuration
//!   - [`crate::logging::LoggingError`] - log file or subscriber setup
//!   - [`ViewportError`] - canvas bounds, rendering and display failures
//!     - [`RenderError`] - a widget failed to draw
//!       - [`MetricsError`] - the metrics provider could not answer
//!     - [`DeviceError`] - the display rejected a frame
//!   - `std::io::Error` - terminal setup and input polling
//!
//! # Recovery Strategy
//!
//! There is none. A user interrupt is not an error; everything else ends the
//! program after the terminal has been restored.

use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialised.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Canvas, widget or display failure while driving the carousel.
    #[error("Viewport error: {0}")]
    Viewport(#[from] ViewportError),

    /// Display device failure outside a viewport refresh.
    #[error("Device error: {0}")]
    Device(#[from] DeviceError),

    /// Terminal setup, teardown or input polling failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failures of the display device.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The terminal backend failed to draw.
    #[error("Failed to draw to terminal: {0}")]
    Io(#[from] std::io::Error),

    /// The frame handed to the device does not match its logical size.
    #[error("Frame is {actual_width}x{actual_height}, device expects {width}x{height}")]
    FrameSize {
        /// Device logical width.
        width: u16,
        /// Device logical height.
        height: u16,
        /// Width of the rejected frame.
        actual_width: u16,
        /// Height of the rejected frame.
        actual_height: u16,
    },
}

/// Failures while rendering a widget.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The metrics the widget displays are unavailable.
    #[error("Metrics unavailable: {0}")]
    Metrics(#[from] MetricsError),
}

/// Failures reported by a metrics provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// The requested network interface does not exist on this host.
    #[error("Unknown network interface: {0}")]
    UnknownInterface(String),

    /// The host reports no mounted disks.
    #[error("No disks reported by the host")]
    NoDisks,

    /// The host name could not be determined.
    #[error("Host name unavailable")]
    HostnameUnavailable,
}

/// Failures of the virtual canvas.
#[derive(Debug, Error)]
pub enum ViewportError {
    /// A hotspot would extend past the canvas edge.
    #[error(
        "Hotspot {width}x{height} at ({x}, {y}) does not fit canvas {canvas_width}x{canvas_height}"
    )]
    HotspotOutOfBounds {
        /// Requested x offset.
        x: u16,
        /// Requested y offset.
        y: u16,
        /// Hotspot width.
        width: u16,
        /// Hotspot height.
        height: u16,
        /// Canvas width.
        canvas_width: u16,
        /// Canvas height.
        canvas_height: u16,
    },

    /// The visible window at the current position leaves the canvas.
    #[error("Window at ({x}, {y}) of {width}x{height} leaves canvas {canvas_width}x{canvas_height}")]
    WindowOutOfBounds {
        /// Window x position.
        x: u16,
        /// Window y position.
        y: u16,
        /// Window (device) width.
        width: u16,
        /// Window (device) height.
        height: u16,
        /// Canvas width.
        canvas_width: u16,
        /// Canvas height.
        canvas_height: u16,
    },

    /// The canvas has more cells than a ratatui buffer can address.
    #[error("Canvas {width}x{height} exceeds {max} cells")]
    CanvasTooLarge {
        /// Requested canvas width.
        width: u32,
        /// Requested canvas height.
        height: u32,
        /// Largest supported cell count.
        max: u32,
    },

    /// A hotspot failed to render.
    #[error("Render failed: {0}")]
    Render(#[from] RenderError),

    /// The device rejected the cropped frame.
    #[error("Display failed: {0}")]
    Device(#[from] DeviceError),
}
