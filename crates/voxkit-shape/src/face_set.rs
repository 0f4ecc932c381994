//! A shape's faces for one usage (render or collision), split into the outer
//! shell keyed by cube side and free-standing inner faces.

use std::sync::Arc;

use voxkit_geometry::{AxisPlane, Face};

/// Inner faces plus up to one outer face per [`AxisPlane`].
///
/// Outer faces are expressed in the shape's untransformed local space.
#[derive(Clone, Debug, Default)]
pub struct FaceSet {
    inner: Vec<Arc<Face>>,
    outer_shell: [Option<Arc<Face>>; 6],
}

impl FaceSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Six full cube sides with no texture, no inner faces.
    pub fn solid_cube() -> Self {
        let mut set = Self::new();
        for plane in AxisPlane::ALL {
            set.set_outer(plane, voxkit_geometry::full_outer_face(plane));
        }
        set
    }

    /// Adds an inner face.
    pub fn push_inner(&mut self, face: Face) {
        self.inner.push(Arc::new(face));
    }

    /// Sets the outer face lying on `plane`.
    pub fn set_outer(&mut self, plane: AxisPlane, face: Face) {
        self.outer_shell[plane.index()] = Some(Arc::new(face));
    }

    /// Inner faces.
    pub fn inner(&self) -> &[Arc<Face>] {
        &self.inner
    }

    /// Outer face on `plane`, if authored and renderable.
    pub fn outer(&self, plane: AxisPlane) -> Option<&Arc<Face>> {
        self.outer_shell[plane.index()]
            .as_ref()
            .filter(|f| f.has_renderable_polygons())
    }

    /// Iterates `(plane, face)` over the renderable outer faces.
    pub fn outer_faces(&self) -> impl Iterator<Item = (AxisPlane, &Arc<Face>)> {
        AxisPlane::ALL
            .into_iter()
            .filter_map(|plane| self.outer(plane).map(|f| (plane, f)))
    }

    /// Returns `true` if no face is authored at all.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty() && self.outer_faces().next().is_none()
    }
}
