//! Fixed-size dense 3D cell array with bounds-checked access.
//!
//! Cells are stored flat with x varying fastest:
//! `x + y * size_x + z * size_x * size_y`.

use thiserror::Error;

use crate::cell::Cell;

/// Errors raised when constructing a grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// One of the requested dimensions is zero.
    #[error("grid dimensions must be positive, got {x}x{y}x{z}")]
    InvalidDimensions {
        /// Requested size along X.
        x: usize,
        /// Requested size along Y.
        y: usize,
        /// Requested size along Z.
        z: usize,
    },
}

/// Read-only cell queries the meshers need.
pub trait CellSource {
    /// Grid extent as `(x, y, z)`.
    fn size(&self) -> (usize, usize, usize);

    /// Returns the cell at a signed coordinate, or `None` outside the grid or
    /// for air.
    fn cell_at(&self, x: i32, y: i32, z: i32) -> Option<Cell>;
}

/// A dense `size_x × size_y × size_z` grid of [`Cell`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelGrid {
    size_x: usize,
    size_y: usize,
    size_z: usize,
    cells: Vec<Cell>,
    /// Incremented on every mutation.
    version: u64,
}

impl VoxelGrid {
    /// Creates a grid filled with `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if any dimension is zero.
    pub fn new(size_x: usize, size_y: usize, size_z: usize, fill: Cell) -> Result<Self, GridError> {
        if size_x == 0 || size_y == 0 || size_z == 0 {
            return Err(GridError::InvalidDimensions {
                x: size_x,
                y: size_y,
                z: size_z,
            });
        }
        Ok(Self {
            size_x,
            size_y,
            size_z,
            cells: vec![fill; size_x * size_y * size_z],
            version: 0,
        })
    }

    /// Creates a grid of air.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if any dimension is zero.
    pub fn new_air(size_x: usize, size_y: usize, size_z: usize) -> Result<Self, GridError> {
        Self::new(size_x, size_y, size_z, Cell::AIR)
    }

    /// Grid extent as `(x, y, z)`.
    pub fn dimensions(&self) -> (usize, usize, usize) {
        (self.size_x, self.size_y, self.size_z)
    }

    /// Total number of cells.
    pub fn volume(&self) -> usize {
        self.cells.len()
    }

    /// Mutation counter, usable to decide when meshes are stale.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns `true` if the signed coordinate is inside the grid.
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.size_x
            && (y as usize) < self.size_y
            && (z as usize) < self.size_z
    }

    fn index(&self, x: usize, y: usize, z: usize) -> Option<usize> {
        (x < self.size_x && y < self.size_y && z < self.size_z)
            .then(|| x + y * self.size_x + z * self.size_x * self.size_y)
    }

    /// Returns the cell at `(x, y, z)`, air included, or `None` out of bounds.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<Cell> {
        self.index(x, y, z).map(|i| self.cells[i])
    }

    /// Writes a cell. Out-of-bounds writes are ignored with a warning.
    pub fn set(&mut self, x: usize, y: usize, z: usize, cell: Cell) {
        let Some(i) = self.index(x, y, z) else {
            tracing::warn!("VoxelGrid::set out of bounds: ({}, {}, {})", x, y, z);
            return;
        };
        self.cells[i] = cell;
        self.version += 1;
    }

    /// Overwrites every cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
        self.version += 1;
    }

    /// Iterates `((x, y, z), cell)` in storage order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize, usize), Cell)> + '_ {
        let (sx, sy) = (self.size_x, self.size_y);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| ((i % sx, (i / sx) % sy, i / (sx * sy)), cell))
    }

    /// Number of non-air cells.
    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_air()).count()
    }
}

impl CellSource for VoxelGrid {
    fn size(&self) -> (usize, usize, usize) {
        self.dimensions()
    }

    fn cell_at(&self, x: i32, y: i32, z: i32) -> Option<Cell> {
        if !self.contains(x, y, z) {
            return None;
        }
        self.get(x as usize, y as usize, z as usize)
            .filter(|c| !c.is_air())
    }
}
