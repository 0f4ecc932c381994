//! The closed set of shape variants and the texture slots each one reads.
//!
//! A texture slot left as `None` builds with a zero-size UV rectangle.

use serde::{Deserialize, Serialize};
use voxkit_geometry::AxisPlane;

use crate::uv_rect::UvRect;

/// One texture per cube side. Used by cubes and slabs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeTextures {
    /// +X side.
    pub pos_x: Option<UvRect>,
    /// −X side.
    pub neg_x: Option<UvRect>,
    /// +Y side (the slab top).
    pub pos_y: Option<UvRect>,
    /// −Y side.
    pub neg_y: Option<UvRect>,
    /// +Z side.
    pub pos_z: Option<UvRect>,
    /// −Z side.
    pub neg_z: Option<UvRect>,
}

impl CubeTextures {
    /// Same texture on every side.
    pub fn uniform(rect: UvRect) -> Self {
        Self {
            pos_x: Some(rect),
            neg_x: Some(rect),
            pos_y: Some(rect),
            neg_y: Some(rect),
            pos_z: Some(rect),
            neg_z: Some(rect),
        }
    }

    /// Texture for one side.
    pub fn get(&self, plane: AxisPlane) -> Option<UvRect> {
        match plane {
            AxisPlane::PosX => self.pos_x,
            AxisPlane::NegX => self.neg_x,
            AxisPlane::PosY => self.pos_y,
            AxisPlane::NegY => self.neg_y,
            AxisPlane::PosZ => self.pos_z,
            AxisPlane::NegZ => self.neg_z,
        }
    }
}

/// Texture slots of a slope (ramp rising toward +Z).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlopeTextures {
    /// The +Z wall.
    pub back: Option<UvRect>,
    /// The −Y floor.
    pub bottom: Option<UvRect>,
    /// The ramp surface.
    pub slope: Option<UvRect>,
    /// The −X triangle.
    pub side_left: Option<UvRect>,
    /// The +X triangle.
    pub side_right: Option<UvRect>,
}

impl SlopeTextures {
    /// Same texture in every slot.
    pub fn uniform(rect: UvRect) -> Self {
        Self {
            back: Some(rect),
            bottom: Some(rect),
            slope: Some(rect),
            side_left: Some(rect),
            side_right: Some(rect),
        }
    }
}

/// Texture slots of a single-step stair (rising toward +Z).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StairTextures {
    /// The −Z lower front.
    pub front: Option<UvRect>,
    /// The +Z wall.
    pub back: Option<UvRect>,
    /// The −Y floor.
    pub bottom: Option<UvRect>,
    /// The −X silhouette.
    pub side_left: Option<UvRect>,
    /// The +X silhouette.
    pub side_right: Option<UvRect>,
    /// Both tread tops.
    pub step_top: Option<UvRect>,
    /// The riser between the treads.
    pub step_riser: Option<UvRect>,
}

impl StairTextures {
    /// Same texture in every slot.
    pub fn uniform(rect: UvRect) -> Self {
        Self {
            front: Some(rect),
            back: Some(rect),
            bottom: Some(rect),
            side_left: Some(rect),
            side_right: Some(rect),
            step_top: Some(rect),
            step_riser: Some(rect),
        }
    }
}

/// Shape variant of a voxel type, with its textures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Full unit cube.
    Cube(CubeTextures),
    /// Lower half of a cube.
    Slab(CubeTextures),
    /// Ramp from the bottom of the −Z side to the top of the +Z side.
    Slope(SlopeTextures),
    /// One step up toward +Z.
    Stair(StairTextures),
    /// Two crossed diagonal planes (foliage).
    CrossPlane(Option<UvRect>),
}

impl ShapeKind {
    /// Short lowercase variant name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cube(_) => "cube",
            Self::Slab(_) => "slab",
            Self::Slope(_) => "slope",
            Self::Stair(_) => "stair",
            Self::CrossPlane(_) => "cross_plane",
        }
    }

    /// Number of texture slots left empty.
    pub fn missing_textures(&self) -> usize {
        fn count(slots: &[Option<UvRect>]) -> usize {
            slots.iter().filter(|s| s.is_none()).count()
        }
        match self {
            Self::Cube(t) | Self::Slab(t) => {
                count(&[t.pos_x, t.neg_x, t.pos_y, t.neg_y, t.pos_z, t.neg_z])
            }
            Self::Slope(t) => count(&[t.back, t.bottom, t.slope, t.side_left, t.side_right]),
            Self::Stair(t) => count(&[
                t.front,
                t.back,
                t.bottom,
                t.side_left,
                t.side_right,
                t.step_top,
                t.step_riser,
            ]),
            Self::CrossPlane(t) => count(&[*t]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_textures() {
        assert_eq!(ShapeKind::Cube(CubeTextures::default()).missing_textures(), 6);
        assert_eq!(
            ShapeKind::Stair(StairTextures::uniform(UvRect::FULL)).missing_textures(),
            0
        );
        assert_eq!(ShapeKind::CrossPlane(None).missing_textures(), 1);
    }

    #[test]
    fn test_kind_parses_from_ron() {
        let kind: ShapeKind =
            ron::from_str("Slab((pos_y: Some((anchor: (0.5, 0.0), size: (0.5, 0.5)))))")
                .expect("parse");
        match kind {
            ShapeKind::Slab(t) => {
                assert_eq!(t.pos_y.map(|r| r.anchor.x), Some(0.5));
                assert!(t.neg_y.is_none());
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }
}
