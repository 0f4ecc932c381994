//! Named anchor points on top of a voxel, used by placement logic to stand
//! things on a shape (a slope's mid-ramp, a slab's half-height top).

use glam::Vec3;
use serde::{Deserialize, Serialize};
use voxkit_geometry::{FlipOrientation, Orientation, transform_point};

/// Which anchor of a [`CardinalPointSet`] to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CardinalPoint {
    /// Entry from the +X side.
    PositiveX = 0,
    /// Entry from the −X side.
    NegativeX = 1,
    /// Entry from the +Z side.
    PositiveZ = 2,
    /// Entry from the −Z side.
    NegativeZ = 3,
    /// Resting in place.
    Stationary = 4,
}

impl CardinalPoint {
    /// All five anchors.
    pub const ALL: [CardinalPoint; 5] = [
        Self::PositiveX,
        Self::NegativeX,
        Self::PositiveZ,
        Self::NegativeZ,
        Self::Stationary,
    ];
}

/// Five local-space anchor positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardinalPointSet {
    points: [Vec3; 5],
}

impl CardinalPointSet {
    /// Builds a set from its anchors in [`CardinalPoint::ALL`] order.
    pub fn new(
        positive_x: Vec3,
        negative_x: Vec3,
        positive_z: Vec3,
        negative_z: Vec3,
        stationary: Vec3,
    ) -> Self {
        Self {
            points: [positive_x, negative_x, positive_z, negative_z, stationary],
        }
    }

    /// Every anchor at the given point.
    pub fn uniform(point: Vec3) -> Self {
        Self { points: [point; 5] }
    }

    /// Every anchor at the top center of the cell.
    pub fn top_center() -> Self {
        Self::uniform(Vec3::new(0.5, 1.0, 0.5))
    }

    /// Edge midpoints and center at height `y`.
    pub fn level(y: f32) -> Self {
        Self::new(
            Vec3::new(1.0, y, 0.5),
            Vec3::new(0.0, y, 0.5),
            Vec3::new(0.5, y, 1.0),
            Vec3::new(0.5, y, 0.0),
            Vec3::new(0.5, y, 0.5),
        )
    }

    /// Reads one anchor.
    pub fn get(&self, which: CardinalPoint) -> Vec3 {
        self.points[which as usize]
    }

    /// Returns the set placed with `orientation`. Anchors describe the top of
    /// the cell as selected by flip, so no vertical mirror is applied.
    pub fn oriented(&self, orientation: Orientation) -> Self {
        Self {
            points: self
                .points
                .map(|p| transform_point(p, orientation, FlipOrientation::PositiveY)),
        }
    }
}

impl Default for CardinalPointSet {
    fn default() -> Self {
        Self::top_center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_top_center() {
        let set = CardinalPointSet::default();
        for which in CardinalPoint::ALL {
            assert_eq!(set.get(which), Vec3::new(0.5, 1.0, 0.5));
        }
    }

    #[test]
    fn test_oriented_rotates_edges() {
        let set = CardinalPointSet::level(0.5).oriented(Orientation::PositiveZ);
        assert!((set.get(CardinalPoint::PositiveX) - Vec3::new(0.5, 0.5, 1.0)).length() < 1e-6);
        assert!((set.get(CardinalPoint::Stationary) - Vec3::splat(0.5)).length() < 1e-6);
    }
}
