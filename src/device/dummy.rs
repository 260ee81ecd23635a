//! In-memory device.

use super::{check_frame_size, Device};
use crate::model::{DeviceError, PanelGeometry, Rotation};
use ratatui::buffer::Buffer;

/// Headless device that remembers the most recent frame.
#[derive(Debug, Clone)]
pub struct DummyDevice {
    panel: PanelGeometry,
    last_frame: Option<Buffer>,
    frames_shown: u64,
}

impl DummyDevice {
    /// Device with the given panel geometry.
    pub fn new(panel: PanelGeometry) -> Self {
        Self {
            panel,
            last_frame: None,
            frames_shown: 0,
        }
    }

    /// Last frame passed to [`Device::display`].
    pub fn last_frame(&self) -> Option<&Buffer> {
        self.last_frame.as_ref()
    }

    /// Number of frames displayed so far.
    pub fn frames_shown(&self) -> u64 {
        self.frames_shown
    }
}

impl Device for DummyDevice {
    fn rotate(&self) -> Rotation {
        self.panel.rotation()
    }

    fn width(&self) -> u16 {
        self.panel.width()
    }

    fn height(&self) -> u16 {
        self.panel.height()
    }

    fn display(&mut self, frame: &Buffer) -> Result<(), DeviceError> {
        check_frame_size(self, frame)?;
        self.last_frame = Some(frame.clone());
        self.frames_shown += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    #[test]
    fn reports_rotated_dimensions() {
        let device = DummyDevice::new(PanelGeometry::new(20, 6, Rotation::Quarter));
        assert_eq!(device.rotate(), Rotation::Quarter);
        assert_eq!((device.width(), device.height()), (6, 20));
    }

    #[test]
    fn keeps_last_frame_and_counts() {
        let mut device = DummyDevice::new(PanelGeometry::new(4, 2, Rotation::Normal));
        let frame = Buffer::empty(Rect::new(0, 0, 4, 2));
        device.display(&frame).unwrap();
        device.display(&frame).unwrap();
        assert_eq!(device.frames_shown(), 2);
        assert_eq!(device.last_frame(), Some(&frame));
    }

    #[test]
    fn rejects_mis_sized_frame() {
        let mut device = DummyDevice::new(PanelGeometry::new(4, 2, Rotation::Normal));
        let frame = Buffer::empty(Rect::new(0, 0, 3, 2));
        let err = device.display(&frame).unwrap_err();
        assert!(matches!(
            err,
            DeviceError::FrameSize {
                actual_width: 3,
                ..
            }
        ));
        assert_eq!(device.frames_shown(), 0);
    }
}
