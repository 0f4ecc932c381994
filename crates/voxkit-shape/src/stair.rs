//! Single step rising toward +Z: a lower tread over the front half and a
//! full-height back half.

use glam::{Vec2, Vec3};
use voxkit_geometry::{AxisPlane, Face, FlipOrientation, Vertex};

use crate::authoring::{MASK_OFFSET, full_side, mask_top, quad, rect_quad};
use crate::cardinal::CardinalPointSet;
use crate::face_set::FaceSet;
use crate::kind::StairTextures;
use crate::uv_rect::UvRect;

/// Height of the lower tread.
pub const STEP_HEIGHT: f32 = 0.5;
/// Depth of the lower tread along Z.
pub const STEP_DEPTH: f32 = 0.5;

/// Side silhouette: a low box under the tread and a full-height box behind it.
/// `x` is the side plane; `u` runs from `u_front` to `u_back` along Z.
fn side(x: f32, rect: UvRect, mirrored: bool) -> Face {
    let (h, d) = (STEP_HEIGHT, STEP_DEPTH);
    let u0 = rect.anchor.x;
    let u1 = rect.anchor.x + rect.size.x * 0.5;
    let u2 = rect.anchor.x + rect.size.x;
    let v0 = rect.anchor.y;
    let v1 = rect.anchor.y + rect.size.y * 0.5;
    let v2 = rect.anchor.y + rect.size.y;
    let p = |y: f32, z: f32, u: f32, v: f32| Vertex::new(Vec3::new(x, y, z), Vec2::new(u, v));

    let mut face = Face::new();
    if mirrored {
        face.add_polygon(vec![
            p(0.0, 0.0, u2, v0),
            p(h, 0.0, u2, v1),
            p(h, d, u1, v1),
            p(0.0, d, u1, v0),
        ]);
        face.add_polygon(vec![
            p(0.0, d, u1, v0),
            p(1.0, d, u1, v2),
            p(1.0, 1.0, u0, v2),
            p(0.0, 1.0, u0, v0),
        ]);
    } else {
        face.add_polygon(vec![
            p(0.0, 0.0, u2, v0),
            p(0.0, d, u1, v0),
            p(h, d, u1, v1),
            p(h, 0.0, u2, v1),
        ]);
        face.add_polygon(vec![
            p(0.0, d, u1, v0),
            p(0.0, 1.0, u0, v0),
            p(1.0, 1.0, u0, v2),
            p(1.0, d, u1, v2),
        ]);
    }
    face
}

pub(crate) fn render_faces(textures: &StairTextures) -> FaceSet {
    let (h, d) = (STEP_HEIGHT, STEP_DEPTH);
    let step_top = UvRect::or_degenerate(textures.step_top).upper_half();
    let mut set = FaceSet::new();

    set.push_inner(rect_quad(
        [
            Vec3::new(0.0, h, 0.0),
            Vec3::new(1.0, h, 0.0),
            Vec3::new(1.0, h, d),
            Vec3::new(0.0, h, d),
        ],
        step_top,
    ));
    set.push_inner(rect_quad(
        [
            Vec3::new(0.0, h, d),
            Vec3::new(1.0, h, d),
            Vec3::new(1.0, 1.0, d),
            Vec3::new(0.0, 1.0, d),
        ],
        UvRect::or_degenerate(textures.step_riser).lower_half(),
    ));

    set.set_outer(
        AxisPlane::PosX,
        side(1.0, UvRect::or_degenerate(textures.side_right), false),
    );
    set.set_outer(
        AxisPlane::NegX,
        side(0.0, UvRect::or_degenerate(textures.side_left), true),
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
            UvRect::or_degenerate(textures.front).lower_half(),
        ),
    );
    set.set_outer(
        AxisPlane::PosZ,
        full_side(AxisPlane::PosZ, UvRect::or_degenerate(textures.back)),
    );
    set.set_outer(
        AxisPlane::PosY,
        rect_quad(
            [
                Vec3::new(0.0, 1.0, d),
                Vec3::new(1.0, 1.0, d),
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(0.0, 1.0, 1.0),
            ],
            step_top,
        ),
    );
    set.set_outer(
        AxisPlane::NegY,
        full_side(AxisPlane::NegY, UvRect::or_degenerate(textures.bottom)),
    );
    set
}

pub(crate) fn mask_faces(flip: FlipOrientation) -> Vec<Face> {
    if flip.is_flipped() {
        return vec![mask_top(1.0 + MASK_OFFSET)];
    }

    const X_OVERHANG: f32 = 0.01;
    const RISER_INSET: f32 = 0.01;
    let band = 1.0 / 3.0;
    let upper_y = 1.0 + MASK_OFFSET;
    let lower_y = STEP_HEIGHT + MASK_OFFSET;
    let right = 1.0 + X_OVERHANG;
    let riser_z = STEP_DEPTH - RISER_INSET;

    let upper_top = quad(
        [
            Vec3::new(0.0, upper_y, STEP_DEPTH),
            Vec3::new(right, upper_y, STEP_DEPTH),
            Vec3::new(right, upper_y, 1.0),
            Vec3::new(0.0, upper_y, 1.0),
        ],
        [
            Vec2::new(0.0, band * 2.0),
            Vec2::new(1.0, band * 2.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ],
    );
    let riser = quad(
        [
            Vec3::new(0.0, lower_y, riser_z),
            Vec3::new(right, lower_y, riser_z),
            Vec3::new(right, upper_y, riser_z),
            Vec3::new(0.0, upper_y, riser_z),
        ],
        [
            Vec2::new(0.0, band),
            Vec2::new(1.0, band),
            Vec2::new(1.0, band * 2.0),
            Vec2::new(0.0, band * 2.0),
        ],
    );
    let lower_top = quad(
        [
            Vec3::new(0.0, lower_y, 0.0),
            Vec3::new(1.0, lower_y, 0.0),
            Vec3::new(1.0, lower_y, STEP_DEPTH),
            Vec3::new(0.0, lower_y, STEP_DEPTH),
        ],
        [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, band),
            Vec2::new(0.0, band),
        ],
    );
    vec![upper_top, riser, lower_top]
}

pub(crate) fn cardinal_points(flip: FlipOrientation) -> CardinalPointSet {
    match flip {
        FlipOrientation::PositiveY => CardinalPointSet::new(
            Vec3::new(1.0, 0.5, 0.5),
            Vec3::new(0.0, 0.5, 0.5),
            Vec3::new(0.5, 1.0, 0.75),
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(0.5, 0.5, 0.5),
        ),
        FlipOrientation::NegativeY => CardinalPointSet::level(1.0),
    }
}
