//! Strip layout: orientation, cell size and scroll extent.

use crate::model::Rotation;
use crate::scroll::Position;
use std::num::NonZeroU16;

/// How widgets are stacked on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Side by side; the window scrolls along x.
    Horizontal,
    /// One above another; the window scrolls along y.
    Vertical,
}

impl Orientation {
    /// Horizontal for rotations 0 and 2, vertical for 1 and 3.
    pub fn from_rotation(rotation: Rotation) -> Self {
        match rotation {
            Rotation::Normal | Rotation::Half => Orientation::Horizontal,
            Rotation::Quarter | Rotation::ThreeQuarter => Orientation::Vertical,
        }
    }
}

/// Geometry of a strip of equally sized widget cells.
///
/// A horizontal strip uses cells of half the device width and full height;
/// a vertical strip uses full width and half height. Two cells are always
/// visible, so the window can travel `cell * (count - 2)` along the axis.
/// On an odd-sized axis the window is one cell longer than two cells, and
/// the canvas grows by that remainder so the last window still fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripLayout {
    orientation: Orientation,
    cell_width: u16,
    cell_height: u16,
    window_length: u16,
    count: u16,
}

impl StripLayout {
    /// Layout for `count` widgets on a device of logical `width` x `height`.
    pub fn new(rotation: Rotation, width: u16, height: u16, count: u16) -> Self {
        let orientation = Orientation::from_rotation(rotation);
        let (cell_width, cell_height, window_length) = match orientation {
            Orientation::Horizontal => (width / 2, height, width),
            Orientation::Vertical => (width, height / 2, height),
        };
        Self {
            orientation,
            cell_width,
            cell_height,
            window_length,
            count,
        }
    }

    /// Stacking direction.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Size of one widget cell.
    pub fn cell_size(&self) -> (u16, u16) {
        (self.cell_width, self.cell_height)
    }

    /// Number of widgets in the strip.
    pub fn count(&self) -> u16 {
        self.count
    }

    /// Cell length along the scroll axis.
    pub fn cell_along_axis(&self) -> u16 {
        match self.orientation {
            Orientation::Horizontal => self.cell_width,
            Orientation::Vertical => self.cell_height,
        }
    }

    /// Dwell interval for the scroll: one cell, or `None` for a zero-sized cell.
    pub fn dwell_interval(&self) -> Option<NonZeroU16> {
        NonZeroU16::new(self.cell_along_axis())
    }

    /// Canvas size holding every cell and every window position.
    ///
    /// Along the scroll axis this is `cell * count`, or `extent + window`
    /// when the window is longer than two cells.
    pub fn canvas_size(&self) -> (u32, u32) {
        let cells = u32::from(self.cell_along_axis()) * u32::from(self.count);
        let along = cells.max(self.scroll_extent() + u32::from(self.window_length));
        match self.orientation {
            Orientation::Horizontal => (along, u32::from(self.cell_height)),
            Orientation::Vertical => (u32::from(self.cell_width), along),
        }
    }

    /// Top-left corner of widget `index`.
    pub fn offset(&self, index: u16) -> (u16, u16) {
        let along = index.saturating_mul(self.cell_along_axis());
        self.window_position(along)
    }

    /// How far the window travels: `cell * (count - 2)`, 0 for fewer than 3 widgets.
    pub fn scroll_extent(&self) -> u32 {
        u32::from(self.cell_along_axis()) * u32::from(self.count.saturating_sub(2))
    }

    /// Window position for scroll offset `p`; the cross axis is always 0.
    pub fn window_position(&self, p: Position) -> (u16, u16) {
        match self.orientation {
            Orientation::Horizontal => (p, 0),
            Orientation::Vertical => (0, p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_rotations_are_horizontal() {
        assert_eq!(
            Orientation::from_rotation(Rotation::Normal),
            Orientation::Horizontal
        );
        assert_eq!(
            Orientation::from_rotation(Rotation::Half),
            Orientation::Horizontal
        );
    }

    #[test]
    fn odd_rotations_are_vertical() {
        assert_eq!(
            Orientation::from_rotation(Rotation::Quarter),
            Orientation::Vertical
        );
        assert_eq!(
            Orientation::from_rotation(Rotation::ThreeQuarter),
            Orientation::Vertical
        );
    }

    #[test]
    fn horizontal_256_by_64() {
        let layout = StripLayout::new(Rotation::Normal, 256, 64, 7);
        assert_eq!(layout.orientation(), Orientation::Horizontal);
        assert_eq!(layout.cell_size(), (128, 64));
        assert_eq!(layout.canvas_size(), (896, 64));
        assert_eq!(layout.scroll_extent(), 640);
        assert_eq!(layout.offset(3), (384, 0));
    }

    #[test]
    fn vertical_uses_half_height() {
        let layout = StripLayout::new(Rotation::Quarter, 64, 128, 7);
        assert_eq!(layout.cell_size(), (64, 64));
        assert_eq!(layout.canvas_size(), (64, 448));
        assert_eq!(layout.scroll_extent(), 320);
        assert_eq!(layout.offset(2), (0, 128));
        assert_eq!(layout.window_position(5), (0, 5));
    }

    #[test]
    fn odd_dimensions_floor() {
        let layout = StripLayout::new(Rotation::Normal, 65, 11, 7);
        assert_eq!(layout.cell_size(), (32, 11));
        let layout = StripLayout::new(Rotation::ThreeQuarter, 11, 65, 7);
        assert_eq!(layout.cell_size(), (11, 32));
    }

    #[test]
    fn odd_axis_canvas_fits_last_window() {
        let layout = StripLayout::new(Rotation::Normal, 65, 12, 7);
        assert_eq!(layout.scroll_extent(), 160);
        assert_eq!(layout.canvas_size(), (225, 12));

        let layout = StripLayout::new(Rotation::Quarter, 12, 65, 7);
        assert_eq!(layout.canvas_size(), (12, 225));
    }

    #[test]
    fn even_axis_canvas_is_exactly_the_cells() {
        let layout = StripLayout::new(Rotation::Half, 64, 12, 7);
        assert_eq!(layout.canvas_size(), (224, 12));
    }

    #[test]
    fn short_strip_canvas_covers_the_window() {
        let layout = StripLayout::new(Rotation::Normal, 21, 4, 1);
        assert_eq!(layout.canvas_size(), (21, 4));
    }

    #[test]
    fn zero_cell_has_no_dwell_interval() {
        let layout = StripLayout::new(Rotation::Normal, 1, 8, 7);
        assert_eq!(layout.dwell_interval(), None);
    }

    #[test]
    fn short_strip_has_no_extent() {
        let layout = StripLayout::new(Rotation::Normal, 20, 4, 2);
        assert_eq!(layout.scroll_extent(), 0);
    }
}
