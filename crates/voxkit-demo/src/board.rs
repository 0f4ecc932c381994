//! Debug board: a walkable floor ringed by a wall of mixed shapes, with a
//! crossing row through the middle, and a handful of overlay masks.

use voxkit_config::BoardConfig;
use voxkit_grid::{Cell, GridError, MaskLayer, MaskType, VoxelGrid};

/// Floor voxel id.
pub const FLOOR_ID: i32 = 0;
/// Wall along `x = 0`.
pub const WEST_WALL_ID: i32 = 1;
/// Wall along `x = max`.
pub const EAST_WALL_ID: i32 = 2;
/// Wall along `z = 0`.
pub const SOUTH_WALL_ID: i32 = 3;
/// Wall along `z = max` and the crossing row.
pub const NORTH_WALL_ID: i32 = 4;
/// Z coordinate of the crossing row.
pub const CROSSING_ROW_Z: usize = 5;

/// Builds the board described by `config`.
///
/// # Errors
///
/// Returns [`GridError::InvalidDimensions`] if any dimension is zero.
pub fn generate(config: &BoardConfig) -> Result<VoxelGrid, GridError> {
    let mut grid = VoxelGrid::new_air(config.size_x, config.size_y, config.size_z)?;
    let (max_x, max_z) = (config.size_x - 1, config.size_z - 1);

    for z in 0..=max_z {
        for x in 0..=max_x {
            grid.set(x, 0, z, Cell::new(FLOOR_ID));
        }
    }
    if config.size_y < 2 {
        return Ok(grid);
    }

    // Later rows overwrite corners, so the order matters.
    for z in 0..=max_z {
        grid.set(0, 1, z, Cell::new(WEST_WALL_ID));
    }
    for z in 0..=max_z {
        grid.set(max_x, 1, z, Cell::new(EAST_WALL_ID));
    }
    for x in 0..=max_x {
        grid.set(x, 1, 0, Cell::new(SOUTH_WALL_ID));
    }
    for x in 0..=max_x {
        grid.set(x, 1, max_z, Cell::new(NORTH_WALL_ID));
    }
    if CROSSING_ROW_Z <= max_z {
        for x in 0..=max_x {
            grid.set(x, 1, CROSSING_ROW_Z, Cell::new(NORTH_WALL_ID));
        }
    }
    Ok(grid)
}

/// Marks a movement range around the board center, the selected center
/// cell and an attack range along the south wall.
///
/// # Errors
///
/// Returns [`GridError::InvalidDimensions`] if any dimension is zero.
pub fn debug_masks(grid: &VoxelGrid) -> Result<MaskLayer, GridError> {
    let (sx, sy, sz) = grid.dimensions();
    let mut masks = MaskLayer::new(sx, sy, sz)?;
    let (cx, cz) = (sx / 2, sz / 2);

    for z in cz.saturating_sub(1)..=(cz + 1).min(sz - 1) {
        for x in cx.saturating_sub(1)..=(cx + 1).min(sx - 1) {
            masks.add_mask(x, 0, z, MaskType::MovementRange);
        }
    }
    masks.add_mask(cx, 0, cz, MaskType::Selected);

    if sy > 1 {
        for x in 0..sx {
            masks.add_mask(x, 1, 0, MaskType::AttackRange);
        }
    }
    Ok(masks)
}
