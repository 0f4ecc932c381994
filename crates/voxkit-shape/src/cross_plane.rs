//! Two diagonal planes crossing through the cell, each double sided. Used for
//! foliage; never part of the outer shell, so it neither seals nor gets culled.

use glam::Vec3;
use voxkit_geometry::{Face, FlipOrientation, Vertex};

use crate::authoring::{MASK_OFFSET, mask_top, rect_quad};
use crate::cardinal::CardinalPointSet;
use crate::face_set::FaceSet;
use crate::uv_rect::UvRect;

/// Front quad of one diagonal plane and its reversed-winding back side.
fn double_sided(positions: [Vec3; 4], rect: UvRect) -> [Face; 2] {
    let front = rect_quad(positions, rect);
    let [a, b, c, d] = rect.corners();
    let back = Face::quad(
        Vertex::new(positions[0], a),
        Vertex::new(positions[3], d),
        Vertex::new(positions[2], c),
        Vertex::new(positions[1], b),
    );
    [front, back]
}

pub(crate) fn render_faces(texture: Option<UvRect>) -> FaceSet {
    let rect = UvRect::or_degenerate(texture);
    let mut set = FaceSet::new();
    let planes = [
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(0.0, 1.0, 0.0),
        ],
        [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(1.0, 1.0, 0.0),
        ],
    ];
    for positions in planes {
        for face in double_sided(positions, rect) {
            set.push_inner(face);
        }
    }
    set
}

pub(crate) fn mask_faces(_flip: FlipOrientation) -> Vec<Face> {
    vec![mask_top(1.0 + MASK_OFFSET)]
}

pub(crate) fn cardinal_points(_flip: FlipOrientation) -> CardinalPointSet {
    CardinalPointSet::level(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_inner_faces_no_shell() {
        let set = render_faces(Some(UvRect::FULL));
        assert_eq!(set.inner().len(), 4);
        assert_eq!(set.outer_faces().count(), 0);
    }

    #[test]
    fn test_back_faces_point_the_other_way() {
        let set = render_faces(Some(UvRect::FULL));
        let front = set.inner()[0].normal().expect("front");
        let back = set.inner()[1].normal().expect("back");
        assert!(front.dot(back) < 0.0);
    }
}
