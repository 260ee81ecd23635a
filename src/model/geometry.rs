//! Panel geometry: physical size and rotation of the display.

use serde::Deserialize;
use thiserror::Error;

/// Display rotation in quarter turns, as small-display drivers number it.
///
/// `0` and `2` keep the panel's native width and height; `1` and `3` swap
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Deserialize)]
#[serde(try_from = "u8")]
pub enum Rotation {
    /// No rotation.
    #[default]
    Normal,
    /// 90 degrees clockwise.
    Quarter,
    /// 180 degrees.
    Half,
    /// 270 degrees clockwise.
    ThreeQuarter,
}

impl Rotation {
    /// Numeric value `0..=3`.
    pub fn value(self) -> u8 {
        match self {
            Rotation::Normal => 0,
            Rotation::Quarter => 1,
            Rotation::Half => 2,
            Rotation::ThreeQuarter => 3,
        }
    }

    /// Whether the panel's width and height trade places.
    pub fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Quarter | Rotation::ThreeQuarter)
    }
}

/// Rejected rotation value.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("rotation must be 0, 1, 2 or 3 (got {0})")]
pub struct InvalidRotation(pub u8);

impl TryFrom<u8> for Rotation {
    type Error = InvalidRotation;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Rotation::Normal),
            1 => Ok(Rotation::Quarter),
            2 => Ok(Rotation::Half),
            3 => Ok(Rotation::ThreeQuarter),
            other => Err(InvalidRotation(other)),
        }
    }
}

/// Physical panel size in terminal cells plus its rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGeometry {
    width: u16,
    height: u16,
    rotation: Rotation,
}

impl PanelGeometry {
    /// Panel of native `width` x `height`, mounted with `rotation`.
    pub fn new(width: u16, height: u16, rotation: Rotation) -> Self {
        Self {
            width,
            height,
            rotation,
        }
    }

    /// Mounting rotation.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Width after rotation.
    pub fn width(&self) -> u16 {
        if self.rotation.swaps_axes() {
            self.height
        } else {
            self.width
        }
    }

    /// Height after rotation.
    pub fn height(&self) -> u16 {
        if self.rotation.swaps_axes() {
            self.width
        } else {
            self.height
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_round_trips_valid_values() {
        for v in 0..=3u8 {
            assert_eq!(Rotation::try_from(v).map(Rotation::value), Ok(v));
        }
    }

    #[test]
    fn rotation_rejects_four() {
        assert_eq!(Rotation::try_from(4), Err(InvalidRotation(4)));
    }

    #[test]
    fn invalid_rotation_message_names_the_value() {
        assert_eq!(
            InvalidRotation(9).to_string(),
            "rotation must be 0, 1, 2 or 3 (got 9)"
        );
    }

    #[test]
    fn even_rotations_keep_dimensions() {
        let panel = PanelGeometry::new(256, 64, Rotation::Half);
        assert_eq!((panel.width(), panel.height()), (256, 64));
    }

    #[test]
    fn odd_rotations_swap_dimensions() {
        for rotation in [Rotation::Quarter, Rotation::ThreeQuarter] {
            let panel = PanelGeometry::new(128, 32, rotation);
            assert_eq!((panel.width(), panel.height()), (32, 128));
        }
    }
}
