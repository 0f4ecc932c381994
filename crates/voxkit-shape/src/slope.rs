//! Ramp rising from the bottom of the −Z side to the top of the +Z side.
//!
//! The shell has the floor, the back wall and two side triangles; the top
//! and front are open and covered by the inner ramp.

use glam::{Vec2, Vec3};
use voxkit_geometry::{AxisPlane, Face, FlipOrientation};

use crate::authoring::{MASK_OFFSET, full_side, mask_top, quad, rect_quad, rect_triangle};
use crate::cardinal::CardinalPointSet;
use crate::face_set::FaceSet;
use crate::kind::SlopeTextures;
use crate::uv_rect::UvRect;

pub(crate) fn render_faces(textures: &SlopeTextures) -> FaceSet {
    let mut set = FaceSet::new();

    set.push_inner(rect_quad(
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
        ],
        UvRect::or_degenerate(textures.slope),
    ));

    set.set_outer(
        AxisPlane::PosX,
        rect_triangle(
            [
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 1.0),
                Vec3::new(1.0, 1.0, 1.0),
            ],
            UvRect::or_degenerate(textures.side_right),
        ),
    );
    set.set_outer(
        AxisPlane::NegX,
        rect_triangle(
            [
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 1.0),
                Vec3::new(0.0, 0.0, 1.0),
            ],
            UvRect::or_degenerate(textures.side_left),
        ),
    );
    set.set_outer(
        AxisPlane::NegY,
        full_side(AxisPlane::NegY, UvRect::or_degenerate(textures.bottom)),
    );
    set.set_outer(
        AxisPlane::PosZ,
        full_side(AxisPlane::PosZ, UvRect::or_degenerate(textures.back)),
    );
    set
}

pub(crate) fn mask_faces(flip: FlipOrientation) -> Vec<Face> {
    match flip {
        FlipOrientation::PositiveY => {
            let y0 = MASK_OFFSET;
            let y1 = 1.0 + MASK_OFFSET;
            vec![quad(
                [
                    Vec3::new(0.0, y0, 0.0),
                    Vec3::new(1.0, y0, 0.0),
                    Vec3::new(1.0, y1, 1.0),
                    Vec3::new(0.0, y1, 1.0),
                ],
                [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y],
            )]
        }
        FlipOrientation::NegativeY => vec![mask_top(1.0 + MASK_OFFSET)],
    }
}

pub(crate) fn cardinal_points(flip: FlipOrientation) -> CardinalPointSet {
    match flip {
        FlipOrientation::PositiveY => CardinalPointSet::new(
            Vec3::new(1.0, 0.5, 0.5),
            Vec3::new(0.0, 0.5, 0.5),
            Vec3::new(0.5, 1.0, 1.0),
            Vec3::new(0.5, 0.0, 0.0),
            Vec3::new(0.5, 0.5, 0.5),
        ),
        FlipOrientation::NegativeY => CardinalPointSet::level(1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxkit_geometry::is_full_face;

    #[test]
    fn test_open_sides() {
        let set = render_faces(&SlopeTextures::uniform(UvRect::FULL));
        assert!(set.outer(AxisPlane::PosY).is_none());
        assert!(set.outer(AxisPlane::NegZ).is_none());
        assert_eq!(set.outer_faces().count(), 4);
        assert_eq!(set.inner().len(), 1);
    }

    #[test]
    fn test_side_triangles_are_partial() {
        let set = render_faces(&SlopeTextures::uniform(UvRect::FULL));
        let right = set.outer(AxisPlane::PosX).expect("right");
        assert_eq!(right.vertex_count(), 3);
        assert!(!is_full_face(right, AxisPlane::PosX));
        assert!(is_full_face(set.outer(AxisPlane::PosZ).expect("back"), AxisPlane::PosZ));
    }

    #[test]
    fn test_ramp_mask_follows_surface() {
        let ramp = &mask_faces(FlipOrientation::PositiveY)[0];
        for v in &ramp.polygons()[0] {
            assert!((v.position.y - (v.position.z + MASK_OFFSET)).abs() < 1e-6);
        }
    }
}
