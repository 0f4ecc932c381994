//! Full unit cube: six textured outer sides, no inner geometry.

use voxkit_geometry::{AxisPlane, Face, FlipOrientation};

use crate::authoring::{MASK_OFFSET, full_side, mask_top};
use crate::cardinal::CardinalPointSet;
use crate::face_set::FaceSet;
use crate::kind::CubeTextures;
use crate::uv_rect::UvRect;

pub(crate) fn render_faces(textures: &CubeTextures) -> FaceSet {
    let mut set = FaceSet::new();
    for plane in AxisPlane::ALL {
        set.set_outer(plane, full_side(plane, UvRect::or_degenerate(textures.get(plane))));
    }
    set
}

pub(crate) fn mask_faces(_flip: FlipOrientation) -> Vec<Face> {
    vec![mask_top(1.0 + MASK_OFFSET)]
}

pub(crate) fn cardinal_points(_flip: FlipOrientation) -> CardinalPointSet {
    CardinalPointSet::top_center()
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxkit_geometry::is_full_face;

    #[test]
    fn test_every_side_is_full() {
        let set = render_faces(&CubeTextures::uniform(UvRect::FULL));
        for plane in AxisPlane::ALL {
            let face = set.outer(plane).expect("side");
            assert!(is_full_face(face, plane), "{plane:?} is not full");
        }
        assert!(set.inner().is_empty());
    }

    #[test]
    fn test_missing_texture_still_builds_geometry() {
        let set = render_faces(&CubeTextures::default());
        let face = set.outer(AxisPlane::PosY).expect("top");
        assert!(face.polygons()[0].iter().all(|v| v.uv == glam::Vec2::ZERO));
    }
}
