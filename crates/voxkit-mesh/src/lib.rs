//! Meshing passes over a voxel grid: the render mesher with neighbour
//! occlusion, the collision mesher, the mask overlay mesher, and the
//! identity-keyed transform cache they share.

pub mod cache;
pub mod mesh_buffers;
pub mod mesher;
pub mod sprites;

pub use cache::TransformCache;
pub use mesh_buffers::MeshBuffers;
pub use mesher::Mesher;
pub use sprites::{MaskSpriteAtlas, MaskSpriteEntry, MaskSpriteSource, SpriteAtlasError};
pub use voxkit_shape::VoxelFilter;
