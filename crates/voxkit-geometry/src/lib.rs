//! Local-space voxel geometry: orientations, axis planes, faces, the
//! orientation/flip transform and the face occlusion predicates built on top.
//!
//! Everything here is pure and allocation-light. Shapes author their faces in
//! the unit cube `[0, 1]³`; the mesher places them in a grid cell by applying
//! [`transform_face`] with the cell's [`Orientation`] and [`FlipOrientation`].

pub mod axis_plane;
pub mod face;
pub mod orientation;
pub mod polygon;
pub mod transform;

pub use axis_plane::AxisPlane;
pub use face::{Face, NORMAL_EPSILON, POINT_EPSILON, Vertex};
pub use orientation::{FlipOrientation, Orientation};
pub use transform::{
    full_outer_face, is_coplanar_with_plane, is_full_face, local_plane_to_world,
    map_world_plane_to_local, transform_face, transform_point,
};
