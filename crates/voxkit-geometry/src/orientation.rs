//! Yaw orientation (four quarter turns) and vertical flip of a voxel instance.

use serde::{Deserialize, Serialize};

/// Quarter-turn yaw applied to a voxel about the vertical axis.
///
/// The `repr(u8)` discriminant is the number of 90° steps, so one step takes
/// the authored +X side of a shape to +Z.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// No rotation; the shape faces +X as authored.
    #[default]
    PositiveX = 0,
    /// One quarter turn: facing +Z.
    PositiveZ = 1,
    /// Two quarter turns: facing −X.
    NegativeX = 2,
    /// Three quarter turns: facing −Z.
    NegativeZ = 3,
}

impl Orientation {
    /// All four orientations in step order.
    pub const ALL: [Orientation; 4] = [
        Self::PositiveX,
        Self::PositiveZ,
        Self::NegativeX,
        Self::NegativeZ,
    ];

    /// Number of quarter turns (0–3).
    pub fn steps(self) -> u8 {
        self as u8
    }

    /// Builds an orientation from a step count, wrapping in both directions.
    pub fn from_steps(steps: i32) -> Self {
        Self::ALL[steps.rem_euclid(4) as usize]
    }

    /// Returns this orientation turned by `steps` further quarter turns.
    pub fn rotated(self, steps: i32) -> Self {
        Self::from_steps(self.steps() as i32 + steps)
    }

    /// The orientation that undoes this one.
    pub fn inverse(self) -> Self {
        Self::from_steps(-(self.steps() as i32))
    }
}

/// Vertical mirror state of a voxel instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FlipOrientation {
    /// Upright, as authored.
    #[default]
    PositiveY = 0,
    /// Mirrored about the horizontal mid-plane `y = 0.5`.
    NegativeY = 1,
}

impl FlipOrientation {
    /// Both flip states.
    pub const ALL: [FlipOrientation; 2] = [Self::PositiveY, Self::NegativeY];

    /// Returns `true` for [`FlipOrientation::NegativeY`].
    pub fn is_flipped(self) -> bool {
        self == Self::NegativeY
    }

    /// Returns the index (0–1), usable for per-flip arrays.
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_step_cycles_all_four() {
        let mut o = Orientation::PositiveX;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(o);
            o = o.rotated(1);
        }
        assert_eq!(o, Orientation::PositiveX);
        assert_eq!(seen, Orientation::ALL.to_vec());
    }

    #[test]
    fn test_negative_steps_wrap() {
        assert_eq!(Orientation::PositiveX.rotated(-1), Orientation::NegativeZ);
        assert_eq!(Orientation::from_steps(-6), Orientation::NegativeX);
    }

    #[test]
    fn test_inverse_composes_to_identity() {
        for o in Orientation::ALL {
            assert_eq!(o.rotated(o.inverse().steps() as i32), Orientation::PositiveX);
        }
        assert_eq!(Orientation::PositiveZ.inverse(), Orientation::NegativeZ);
        assert_eq!(Orientation::NegativeX.inverse(), Orientation::NegativeX);
    }

    #[test]
    fn test_flip_index() {
        assert_eq!(FlipOrientation::PositiveY.index(), 0);
        assert_eq!(FlipOrientation::NegativeY.index(), 1);
        assert!(FlipOrientation::NegativeY.is_flipped());
        assert!(!FlipOrientation::default().is_flipped());
    }
}
