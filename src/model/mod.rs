//! Domain types shared across the carousel.

pub mod error;
pub mod geometry;

pub use error::{AppError, DeviceError, MetricsError, RenderError, ViewportError};
pub use geometry::{InvalidRotation, PanelGeometry, Rotation};
