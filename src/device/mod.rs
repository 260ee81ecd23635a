//! Display devices (impure shell).
//!
//! A [`Device`] reports its logical size and rotation and shows finished
//! frames. [`TerminalDevice`] paints frames into a ratatui terminal;
//! [`DummyDevice`] keeps them in memory for tests and benchmarks.

mod dummy;
mod terminal;

pub use dummy::DummyDevice;
pub use terminal::{restore_terminal, TerminalDevice};

use crate::model::{DeviceError, Rotation};
use ratatui::buffer::Buffer;

/// A small fixed-size display.
pub trait Device {
    /// Mounting rotation.
    fn rotate(&self) -> Rotation;

    /// Logical width in cells, after rotation.
    fn width(&self) -> u16;

    /// Logical height in cells, after rotation.
    fn height(&self) -> u16;

    /// Show `frame`, which must be exactly `width()` x `height()`.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::FrameSize` for a mis-sized frame, or
    /// `DeviceError::Io` if the backend fails.
    fn display(&mut self, frame: &Buffer) -> Result<(), DeviceError>;
}

/// Reject frames whose size differs from the device's logical size.
pub(crate) fn check_frame_size<D: Device + ?Sized>(
    device: &D,
    frame: &Buffer,
) -> Result<(), DeviceError> {
    let area = frame.area;
    if area.width != device.width() || area.height != device.height() {
        return Err(DeviceError::FrameSize {
            width: device.width(),
            height: device.height(),
            actual_width: area.width,
            actual_height: area.height,
        });
    }
    Ok(())
}
