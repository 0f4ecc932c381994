//! A built shape: every face a shape variant authors, constructed once and
//! shared by `Arc`.

use std::sync::Arc;

use voxkit_geometry::{Face, FlipOrientation};

use crate::cardinal::CardinalPointSet;
use crate::face_set::FaceSet;
use crate::kind::ShapeKind;
use crate::{cross_plane, cube, slab, slope, stair};

/// Local-space geometry of one voxel type.
///
/// Cloning a `Shape` clones `Arc`s, so clones share face identity with the
/// original and hit the same transform-cache entries.
#[derive(Clone, Debug)]
pub struct Shape {
    kind: ShapeKind,
    render: FaceSet,
    collision: FaceSet,
    mask_faces: [Vec<Arc<Face>>; 2],
    cardinal_points: [Arc<CardinalPointSet>; 2],
}

impl Shape {
    /// Builds every channel of `kind`.
    pub fn build(kind: ShapeKind) -> Self {
        let render = match &kind {
            ShapeKind::Cube(t) => cube::render_faces(t),
            ShapeKind::Slab(t) => slab::render_faces(t),
            ShapeKind::Slope(t) => slope::render_faces(t),
            ShapeKind::Stair(t) => stair::render_faces(t),
            ShapeKind::CrossPlane(t) => cross_plane::render_faces(*t),
        };

        // Foliage has no shell to render but still fills its cell for collision.
        let collision = match &kind {
            ShapeKind::CrossPlane(_) => FaceSet::solid_cube(),
            _ => render.clone(),
        };

        let mask_faces: [Vec<Arc<Face>>; 2] = FlipOrientation::ALL.map(|flip| {
            let faces = match &kind {
                ShapeKind::Cube(_) => cube::mask_faces(flip),
                ShapeKind::Slab(_) => slab::mask_faces(flip),
                ShapeKind::Slope(_) => slope::mask_faces(flip),
                ShapeKind::Stair(_) => stair::mask_faces(flip),
                ShapeKind::CrossPlane(_) => cross_plane::mask_faces(flip),
            };
            faces.into_iter().map(Arc::new).collect()
        });

        let cardinal_points = FlipOrientation::ALL.map(|flip| {
            Arc::new(match &kind {
                ShapeKind::Cube(_) => cube::cardinal_points(flip),
                ShapeKind::Slab(_) => slab::cardinal_points(flip),
                ShapeKind::Slope(_) => slope::cardinal_points(flip),
                ShapeKind::Stair(_) => stair::cardinal_points(flip),
                ShapeKind::CrossPlane(_) => cross_plane::cardinal_points(flip),
            })
        });

        Self {
            kind,
            render,
            collision,
            mask_faces,
            cardinal_points,
        }
    }

    /// The variant and textures this shape was built from.
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Faces drawn by the render mesher.
    pub fn render(&self) -> &FaceSet {
        &self.render
    }

    /// Faces emitted by the collision mesher.
    pub fn collision(&self) -> &FaceSet {
        &self.collision
    }

    /// Overlay faces for a cell placed with `flip`.
    pub fn mask_faces(&self, flip: FlipOrientation) -> &[Arc<Face>] {
        &self.mask_faces[flip.index()]
    }

    /// Anchor points for a cell placed with `flip`.
    pub fn cardinal_points(&self, flip: FlipOrientation) -> &Arc<CardinalPointSet> {
        &self.cardinal_points[flip.index()]
    }
}
