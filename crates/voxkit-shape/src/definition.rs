//! Voxel type definition: display name, traversal class and built shape.

use serde::{Deserialize, Serialize};

use crate::kind::ShapeKind;
use crate::shape::Shape;

/// How units interact with a voxel type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Traversal {
    /// Blocks movement.
    #[default]
    Obstacle,
    /// Can be stood on and walked across.
    Walkable,
}

/// A registered voxel type.
#[derive(Clone, Debug)]
pub struct VoxelDefinition {
    /// Human-readable name.
    pub name: String,
    /// Traversal class, used by collision filtering.
    pub traversal: Traversal,
    shape: Shape,
}

impl VoxelDefinition {
    /// Creates a definition and builds its shape.
    pub fn new(name: impl Into<String>, traversal: Traversal, kind: ShapeKind) -> Self {
        let name = name.into();
        let missing = kind.missing_textures();
        if missing > 0 {
            tracing::debug!(
                "voxel '{}' ({}) has {} missing texture slot(s)",
                name,
                kind.name(),
                missing
            );
        }
        Self {
            name,
            traversal,
            shape: Shape::build(kind),
        }
    }

    /// The built shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::CubeTextures;

    #[test]
    fn test_default_traversal_is_obstacle() {
        assert_eq!(Traversal::default(), Traversal::Obstacle);
    }

    #[test]
    fn test_new_builds_shape() {
        let def = VoxelDefinition::new("stone", Traversal::Walkable, ShapeKind::Cube(CubeTextures::default()));
        assert_eq!(def.name, "stone");
        assert_eq!(def.shape().render().outer_faces().count(), 6);
    }
}
