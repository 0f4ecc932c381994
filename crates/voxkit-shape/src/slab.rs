//! Lower half of a cube. The top at `y = 0.5` is inside the cell, so it is
//! an inner face; the shell holds the floor and four half-height walls.

use glam::Vec3;
use voxkit_geometry::{AxisPlane, Face, FlipOrientation};

use crate::authoring::{MASK_OFFSET, full_side, mask_top, rect_quad};
use crate::cardinal::CardinalPointSet;
use crate::face_set::FaceSet;
use crate::kind::CubeTextures;
use crate::uv_rect::UvRect;

/// Height of the slab top.
pub const HEIGHT: f32 = 0.5;

pub(crate) fn render_faces(textures: &CubeTextures) -> FaceSet {
    let tex = |plane| UvRect::or_degenerate(textures.get(plane));
    let h = HEIGHT;
    let mut set = FaceSet::new();

    set.push_inner(rect_quad(
        [
            Vec3::new(0.0, h, 0.0),
            Vec3::new(1.0, h, 0.0),
            Vec3::new(1.0, h, 1.0),
            Vec3::new(0.0, h, 1.0),
        ],
        tex(AxisPlane::PosY),
    ));

    set.set_outer(
        AxisPlane::PosX,
        rect_quad(
            [
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 1.0),
                Vec3::new(1.0, h, 1.0),
                Vec3::new(1.0, h, 0.0),
            ],
            tex(AxisPlane::PosX).lower_half(),
        ),
    );
    set.set_outer(
        AxisPlane::NegX,
        rect_quad(
            [
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.0, h, 0.0),
                Vec3::new(0.0, h, 1.0),
                Vec3::new(0.0, 0.0, 1.0),
            ],
            tex(AxisPlane::NegX).lower_half(),
        ),
    );
    set.set_outer(AxisPlane::NegY, full_side(AxisPlane::NegY, tex(AxisPlane::NegY)));
    set.set_outer(
        AxisPlane::PosZ,
        rect_quad(
            [
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(0.0, h, 1.0),
                Vec3::new(1.0, h, 1.0),
                Vec3::new(1.0, 0.0, 1.0),
            ],
            tex(AxisPlane::PosZ).lower_half(),
        ),
    );
    set.set_outer(
        AxisPlane::NegZ,
        rect_quad(
            [
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, h, 0.0),
                Vec3::new(0.0, h, 0.0),
            ],
            tex(AxisPlane::NegZ).lower_half(),
        ),
    );
    set
}

pub(crate) fn mask_faces(flip: FlipOrientation) -> Vec<Face> {
    match flip {
        FlipOrientation::PositiveY => vec![mask_top(HEIGHT + MASK_OFFSET)],
        FlipOrientation::NegativeY => vec![mask_top(1.0 + MASK_OFFSET)],
    }
}

pub(crate) fn cardinal_points(flip: FlipOrientation) -> CardinalPointSet {
    match flip {
        FlipOrientation::PositiveY => CardinalPointSet::level(HEIGHT),
        FlipOrientation::NegativeY => CardinalPointSet::level(1.0),
    }
}
