//! Dense voxel grids: per-cell id/orientation/flip storage, bounds-checked
//! access for the meshers, and the parallel mask-flag layer used for board
//! overlays.

pub mod cell;
pub mod grid;
pub mod mask;

pub use cell::{AIR_ID, Cell};
pub use grid::{CellSource, GridError, VoxelGrid};
pub use mask::{MaskLayer, MaskSet, MaskType};
