//! Orientation/flip transform of points, faces and planes, plus the cube-side
//! reference quads used to decide whether a face seals a whole side.
//!
//! Rotation is applied first, then the flip. [`map_world_plane_to_local`] is
//! the exact inverse on planes, so a world-facing side can be looked up in a
//! shape's outer shell.

use glam::{Vec2, Vec3};

use crate::axis_plane::AxisPlane;
use crate::face::{Face, POINT_EPSILON, Vertex};
use crate::orientation::{FlipOrientation, Orientation};

/// Rotation pivot: the cube center.
const PIVOT: Vec3 = Vec3::splat(0.5);

/// Transforms a unit-cube point by `orientation` quarter turns about the
/// vertical axis through the cube center, then mirrors `y` about 0.5 when
/// `flip` is [`FlipOrientation::NegativeY`].
pub fn transform_point(p: Vec3, orientation: Orientation, flip: FlipOrientation) -> Vec3 {
    let mut q = p - PIVOT;
    for _ in 0..orientation.steps() {
        q = Vec3::new(-q.z, q.y, q.x);
    }
    let mut out = q + PIVOT;
    if flip.is_flipped() {
        out.y = 1.0 - out.y;
    }
    out
}

/// Transforms every vertex of `face`. A flip mirrors one axis, so polygon
/// winding is reversed to keep the facing consistent.
pub fn transform_face(face: &Face, orientation: Orientation, flip: FlipOrientation) -> Face {
    face.map_vertices(flip.is_flipped(), |v| {
        Vertex::new(transform_point(v.position, orientation, flip), v.uv)
    })
}

/// Returns the side of the untransformed shape that faces `world` once the
/// shape is placed with `orientation` and `flip`.
pub fn map_world_plane_to_local(
    world: AxisPlane,
    orientation: Orientation,
    flip: FlipOrientation,
) -> AxisPlane {
    let unflipped = if flip.is_flipped() {
        world.flipped_y()
    } else {
        world
    };
    unflipped.rotated(-(orientation.steps() as i32))
}

/// Forward counterpart of [`map_world_plane_to_local`].
pub fn local_plane_to_world(
    local: AxisPlane,
    orientation: Orientation,
    flip: FlipOrientation,
) -> AxisPlane {
    let rotated = local.rotated(orientation.steps() as i32);
    if flip.is_flipped() {
        rotated.flipped_y()
    } else {
        rotated
    }
}

/// Builds the quad covering an entire cube side.
pub fn full_outer_face(plane: AxisPlane) -> Face {
    let p = |x: f32, y: f32, z: f32| Vertex::new(Vec3::new(x, y, z), Vec2::ZERO);
    match plane {
        AxisPlane::PosX => Face::quad(p(1., 0., 0.), p(1., 0., 1.), p(1., 1., 1.), p(1., 1., 0.)),
        AxisPlane::NegX => Face::quad(p(0., 0., 0.), p(0., 1., 0.), p(0., 1., 1.), p(0., 0., 1.)),
        AxisPlane::PosY => Face::quad(p(0., 1., 0.), p(1., 1., 0.), p(1., 1., 1.), p(0., 1., 1.)),
        AxisPlane::NegY => Face::quad(p(0., 0., 0.), p(0., 0., 1.), p(1., 0., 1.), p(1., 0., 0.)),
        AxisPlane::PosZ => Face::quad(p(0., 0., 1.), p(0., 1., 1.), p(1., 1., 1.), p(1., 0., 1.)),
        AxisPlane::NegZ => Face::quad(p(0., 0., 0.), p(1., 0., 0.), p(1., 1., 0.), p(0., 1., 0.)),
    }
}

/// Returns `true` if every renderable vertex of `face` lies on the cube side
/// `plane`. Unrenderable faces are never coplanar.
pub fn is_coplanar_with_plane(face: &Face, plane: AxisPlane) -> bool {
    if !face.has_renderable_polygons() {
        return false;
    }
    let axis = plane.axis();
    let target = plane.coordinate();
    face.renderable_polygons()
        .flatten()
        .all(|v| (v.position[axis] - target).abs() <= POINT_EPSILON)
}

/// Returns `true` if `face` lies on `plane` and covers it exactly.
pub fn is_full_face(face: &Face, plane: AxisPlane) -> bool {
    if !is_coplanar_with_plane(face, plane) {
        return false;
    }
    let full = full_outer_face(plane);
    full.is_occluded_by(face) && face.is_occluded_by(&full)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    fn faces_congruent(a: &Face, b: &Face) -> bool {
        a.polygons().len() == b.polygons().len()
            && a.polygons().iter().zip(b.polygons()).all(|(pa, pb)| {
                pa.len() == pb.len()
                    && pa
                        .iter()
                        .zip(pb)
                        .all(|(va, vb)| approx(va.position, vb.position) && va.uv == vb.uv)
            })
    }

    fn ramp() -> Face {
        let v = |x: f32, y: f32, z: f32, u: f32, w: f32| Vertex::new(Vec3::new(x, y, z), Vec2::new(u, w));
        Face::quad(
            v(0.0, 0.0, 0.0, 0.0, 0.0),
            v(1.0, 0.0, 0.0, 1.0, 0.0),
            v(1.0, 1.0, 1.0, 1.0, 1.0),
            v(0.0, 1.0, 1.0, 0.0, 1.0),
        )
    }

    #[test]
    fn test_identity_transform() {
        let p = Vec3::new(0.2, 0.7, 0.9);
        assert_eq!(transform_point(p, Orientation::PositiveX, FlipOrientation::PositiveY), p);
    }

    #[test]
    fn test_one_step_sends_pos_x_to_pos_z() {
        let p = transform_point(Vec3::new(1.0, 0.5, 0.5), Orientation::PositiveZ, FlipOrientation::PositiveY);
        assert!(approx(p, Vec3::new(0.5, 0.5, 1.0)));
    }

    #[test]
    fn test_flip_mirrors_y() {
        let p = transform_point(Vec3::new(0.0, 0.25, 0.0), Orientation::PositiveX, FlipOrientation::NegativeY);
        assert!(approx(p, Vec3::new(0.0, 0.75, 0.0)));
    }

    #[test]
    fn test_flip_reverses_winding() {
        let face = ramp();
        let flipped = transform_face(&face, Orientation::PositiveX, FlipOrientation::NegativeY);
        let first = flipped.polygons()[0][0];
        assert!(approx(first.position, Vec3::new(0.0, 0.0, 1.0)));
        assert_eq!(first.uv, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_round_trip_every_combination() {
        let face = ramp();
        for o in Orientation::ALL {
            for f in FlipOrientation::ALL {
                let there = transform_face(&face, o, f);
                let back = transform_face(&there, o.inverse(), f);
                assert!(faces_congruent(&face, &back), "round trip failed for {o:?} {f:?}");
            }
        }
    }

    #[test]
    fn test_plane_mapping_inverts_vertex_transform() {
        for o in Orientation::ALL {
            for f in FlipOrientation::ALL {
                for local in AxisPlane::ALL {
                    let world = transform_face(&full_outer_face(local), o, f);
                    let world_plane = local_plane_to_world(local, o, f);
                    assert!(is_coplanar_with_plane(&world, world_plane));
                    assert_eq!(map_world_plane_to_local(world_plane, o, f), local);
                }
            }
        }
    }

    #[test]
    fn test_full_faces_are_full() {
        for plane in AxisPlane::ALL {
            assert!(is_full_face(&full_outer_face(plane), plane));
            assert!(!is_full_face(&full_outer_face(plane), plane.opposite()));
        }
    }

    #[test]
    fn test_triangle_is_not_full() {
        let p = |x: f32, y: f32, z: f32| Vertex::new(Vec3::new(x, y, z), Vec2::ZERO);
        let tri = Face::triangle(p(1.0, 0.0, 0.0), p(1.0, 0.0, 1.0), p(1.0, 1.0, 1.0));
        assert!(is_coplanar_with_plane(&tri, AxisPlane::PosX));
        assert!(!is_full_face(&tri, AxisPlane::PosX));
    }

    #[test]
    fn test_empty_face_is_not_coplanar() {
        assert!(!is_coplanar_with_plane(&Face::new(), AxisPlane::PosY));
    }
}
