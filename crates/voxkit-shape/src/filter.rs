//! Cell selection for the collision mesher.

use serde::{Deserialize, Serialize};

use crate::definition::Traversal;

/// Which voxel types take part in a collision mesh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoxelFilter {
    /// Every registered voxel.
    #[default]
    Any,
    /// Only voxels that block movement.
    Obstacle,
    /// Only voxels that can be walked on.
    Walkable,
}

impl VoxelFilter {
    /// Returns `true` if a voxel with `traversal` passes the filter.
    pub fn accepts(self, traversal: Traversal) -> bool {
        match self {
            Self::Any => true,
            Self::Obstacle => traversal == Traversal::Obstacle,
            Self::Walkable => traversal == Traversal::Walkable,
        }
    }
}
