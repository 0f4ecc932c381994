//! A single grid cell: voxel id plus placement.

use serde::{Deserialize, Serialize};
use voxkit_geometry::{FlipOrientation, Orientation};

/// Reserved id for an empty cell. Any negative id is treated as air.
pub const AIR_ID: i32 = -1;

/// One voxel slot in a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Registry id; negative means air.
    pub id: i32,
    /// Yaw applied to the voxel's shape.
    pub orientation: Orientation,
    /// Vertical mirror applied to the voxel's shape.
    pub flip: FlipOrientation,
}

static_assertions::assert_eq_size!(Cell, [u8; 8]);

impl Cell {
    /// The empty cell.
    pub const AIR: Self = Self {
        id: AIR_ID,
        orientation: Orientation::PositiveX,
        flip: FlipOrientation::PositiveY,
    };

    /// Creates an unrotated, upright cell.
    pub fn new(id: i32) -> Self {
        Self {
            id,
            ..Self::AIR
        }
    }

    /// Creates a cell with an explicit placement.
    pub fn oriented(id: i32, orientation: Orientation, flip: FlipOrientation) -> Self {
        Self {
            id,
            orientation,
            flip,
        }
    }

    /// Returns `true` if the cell holds no voxel.
    pub fn is_air(&self) -> bool {
        self.id < 0
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::AIR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_air() {
        assert!(Cell::default().is_air());
        assert_eq!(Cell::default().id, AIR_ID);
    }

    #[test]
    fn test_any_negative_id_is_air() {
        assert!(Cell::new(-7).is_air());
        assert!(!Cell::new(0).is_air());
    }

    #[test]
    fn test_oriented_keeps_placement() {
        let cell = Cell::oriented(3, Orientation::NegativeZ, FlipOrientation::NegativeY);
        assert_eq!(cell.orientation, Orientation::NegativeZ);
        assert!(cell.flip.is_flipped());
    }
}
