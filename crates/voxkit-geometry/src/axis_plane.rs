//! The six axis-aligned sides of the unit voxel cube.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One of the six outward sides of a unit cube.
///
/// The `repr(u8)` discriminant doubles as the slot index in per-plane arrays
/// such as a shape's outer shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AxisPlane {
    /// The `x = 1` side.
    PosX = 0,
    /// The `x = 0` side.
    NegX = 1,
    /// The `y = 1` side.
    PosY = 2,
    /// The `y = 0` side.
    NegY = 3,
    /// The `z = 1` side.
    PosZ = 4,
    /// The `z = 0` side.
    NegZ = 5,
}

impl AxisPlane {
    /// All six planes in order.
    pub const ALL: [AxisPlane; 6] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    /// Returns the plane index (0–5).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the opposite side.
    pub fn opposite(self) -> Self {
        match self {
            Self::PosX => Self::NegX,
            Self::NegX => Self::PosX,
            Self::PosY => Self::NegY,
            Self::NegY => Self::PosY,
            Self::PosZ => Self::NegZ,
            Self::NegZ => Self::PosZ,
        }
    }

    /// Returns the neighbor cell coordinate across this side.
    pub fn offset(self, x: i32, y: i32, z: i32) -> (i32, i32, i32) {
        match self {
            Self::PosX => (x + 1, y, z),
            Self::NegX => (x - 1, y, z),
            Self::PosY => (x, y + 1, z),
            Self::NegY => (x, y - 1, z),
            Self::PosZ => (x, y, z + 1),
            Self::NegZ => (x, y, z - 1),
        }
    }

    /// Returns the outward unit normal.
    pub fn normal(self) -> Vec3 {
        match self {
            Self::PosX => Vec3::X,
            Self::NegX => Vec3::NEG_X,
            Self::PosY => Vec3::Y,
            Self::NegY => Vec3::NEG_Y,
            Self::PosZ => Vec3::Z,
            Self::NegZ => Vec3::NEG_Z,
        }
    }

    /// Axis the plane is perpendicular to: 0 = X, 1 = Y, 2 = Z.
    pub fn axis(self) -> usize {
        match self {
            Self::PosX | Self::NegX => 0,
            Self::PosY | Self::NegY => 1,
            Self::PosZ | Self::NegZ => 2,
        }
    }

    /// Returns `true` for the `+` sides, which sit at coordinate 1.
    pub fn is_positive(self) -> bool {
        matches!(self, Self::PosX | Self::PosY | Self::PosZ)
    }

    /// Coordinate of the plane along its axis in unit-cube space.
    pub fn coordinate(self) -> f32 {
        if self.is_positive() { 1.0 } else { 0.0 }
    }

    /// Turns a horizontal plane by `steps` quarter turns (+X goes to +Z).
    /// Vertical planes are unchanged.
    pub fn rotated(self, steps: i32) -> Self {
        const RING: [AxisPlane; 4] = [
            AxisPlane::PosX,
            AxisPlane::PosZ,
            AxisPlane::NegX,
            AxisPlane::NegZ,
        ];
        match RING.iter().position(|&p| p == self) {
            Some(i) => RING[(i as i32 + steps).rem_euclid(4) as usize],
            None => self,
        }
    }

    /// Swaps `PosY` and `NegY`; horizontal planes are unchanged.
    pub fn flipped_y(self) -> Self {
        match self {
            Self::PosY => Self::NegY,
            Self::NegY => Self::PosY,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for plane in AxisPlane::ALL {
            assert_eq!(plane.opposite().opposite(), plane);
            assert_ne!(plane.opposite(), plane);
        }
    }

    #[test]
    fn test_offset_pos_x() {
        assert_eq!(AxisPlane::PosX.offset(5, 10, 15), (6, 10, 15));
    }

    #[test]
    fn test_offset_negative_result() {
        assert_eq!(AxisPlane::NegY.offset(0, 0, 0), (0, -1, 0));
    }

    #[test]
    fn test_normal_matches_offset() {
        for plane in AxisPlane::ALL {
            let (x, y, z) = plane.offset(0, 0, 0);
            assert_eq!(plane.normal(), Vec3::new(x as f32, y as f32, z as f32));
        }
    }

    #[test]
    fn test_rotation_ring() {
        assert_eq!(AxisPlane::PosX.rotated(1), AxisPlane::PosZ);
        assert_eq!(AxisPlane::PosZ.rotated(1), AxisPlane::NegX);
        assert_eq!(AxisPlane::NegZ.rotated(1), AxisPlane::PosX);
        assert_eq!(AxisPlane::PosX.rotated(-1), AxisPlane::NegZ);
        assert_eq!(AxisPlane::PosY.rotated(3), AxisPlane::PosY);
    }

    #[test]
    fn test_flipped_y() {
        assert_eq!(AxisPlane::PosY.flipped_y(), AxisPlane::NegY);
        assert_eq!(AxisPlane::PosX.flipped_y(), AxisPlane::PosX);
    }
}
