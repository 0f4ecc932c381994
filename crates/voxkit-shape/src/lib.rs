//! Voxel shape catalog: authored local-space faces for each shape variant,
//! voxel definitions, and the id-keyed registry the meshers read from.
//!
//! A shape is built exactly once when its definition is created. Every face
//! it authors is wrapped in an `Arc` and shared by all cells of that type, so
//! transform caches can key on face identity.

pub mod authoring;
pub mod cardinal;
pub mod cross_plane;
pub mod cube;
pub mod definition;
pub mod face_set;
pub mod filter;
pub mod kind;
pub mod registry;
pub mod shape;
pub mod slab;
pub mod slope;
pub mod stair;
pub mod uv_rect;

pub use cardinal::{CardinalPoint, CardinalPointSet};
pub use definition::{Traversal, VoxelDefinition};
pub use face_set::FaceSet;
pub use filter::VoxelFilter;
pub use kind::{CubeTextures, ShapeKind, SlopeTextures, StairTextures};
pub use registry::{RegistryError, VoxelEntry, VoxelManifest, VoxelRegistry};
pub use shape::Shape;
pub use uv_rect::UvRect;
