//! Small constructors shared by the shape builders.

use glam::{Vec2, Vec3};
use voxkit_geometry::{AxisPlane, Face, Vertex, full_outer_face};

use crate::uv_rect::UvRect;

/// Vertical lift applied to mask overlays so they do not z-fight the surface.
pub const MASK_OFFSET: f32 = 0.01;

/// Quad with explicit per-corner UVs.
pub fn quad(positions: [Vec3; 4], uvs: [Vec2; 4]) -> Face {
    Face::quad(
        Vertex::new(positions[0], uvs[0]),
        Vertex::new(positions[1], uvs[1]),
        Vertex::new(positions[2], uvs[2]),
        Vertex::new(positions[3], uvs[3]),
    )
}

/// Quad textured with `rect` in corner order anchor, +u, +u+v, +v.
pub fn rect_quad(positions: [Vec3; 4], rect: UvRect) -> Face {
    quad(positions, rect.corners())
}

/// Right triangle textured with the anchor, +u and +v corners of `rect`.
pub fn rect_triangle(positions: [Vec3; 3], rect: UvRect) -> Face {
    let [a, b, _, d] = rect.corners();
    Face::triangle(
        Vertex::new(positions[0], a),
        Vertex::new(positions[1], b),
        Vertex::new(positions[2], d),
    )
}

/// Whole cube side textured with `rect`.
pub fn full_side(plane: AxisPlane, rect: UvRect) -> Face {
    let uvs = rect.corners();
    let mut i = 0;
    full_outer_face(plane).map_vertices(false, |v| {
        let out = Vertex::new(v.position, uvs[i % 4]);
        i += 1;
        out
    })
}

/// Horizontal overlay quad covering the cell at height `y`, tile UVs in `[0, 1]`.
pub fn mask_top(y: f32) -> Face {
    rect_quad(
        [
            Vec3::new(0.0, y, 0.0),
            Vec3::new(1.0, y, 0.0),
            Vec3::new(1.0, y, 1.0),
            Vec3::new(0.0, y, 1.0),
        ],
        UvRect::FULL,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_side_keeps_reference_positions() {
        let side = full_side(AxisPlane::NegZ, UvRect::FULL);
        let reference = full_outer_face(AxisPlane::NegZ);
        for (a, b) in side.polygons()[0].iter().zip(&reference.polygons()[0]) {
            assert_eq!(a.position, b.position);
        }
        assert_eq!(side.polygons()[0][2].uv, Vec2::ONE);
    }

    #[test]
    fn test_rect_triangle_uvs() {
        let tri = rect_triangle([Vec3::ZERO, Vec3::X, Vec3::Y], UvRect::FULL);
        let uvs: Vec<Vec2> = tri.polygons()[0].iter().map(|v| v.uv).collect();
        assert_eq!(uvs, vec![Vec2::ZERO, Vec2::X, Vec2::Y]);
    }

    #[test]
    fn test_mask_top_height() {
        let face = mask_top(1.0 + MASK_OFFSET);
        assert!(face.polygons()[0].iter().all(|v| (v.position.y - 1.01).abs() < 1e-6));
    }
}
