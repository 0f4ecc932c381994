//! Per-cell overlay flags (placement, ranges, selection) stored beside a grid.

use serde::{Deserialize, Serialize};

use crate::grid::GridError;

/// Overlay flag kinds. Declaration order is draw priority: later wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum MaskType {
    /// Cell is a valid friendly placement spot.
    Placement = 0,
    /// Cell is an enemy placement spot.
    EnemyPlacement = 1,
    /// Cell is inside an attack range.
    AttackRange = 2,
    /// Cell is reachable this turn.
    MovementRange = 3,
    /// Cell is inside an area-of-effect preview.
    AreaOfEffect = 4,
    /// Cell is currently selected.
    Selected = 5,
}

impl MaskType {
    /// All mask types in priority order, lowest first.
    pub const ALL: [MaskType; 6] = [
        Self::Placement,
        Self::EnemyPlacement,
        Self::AttackRange,
        Self::MovementRange,
        Self::AreaOfEffect,
        Self::Selected,
    ];

    /// Returns the ordinal (0–5).
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Bitmask of active [`MaskType`]s on one cell.
///
/// Bit `n` is set when the mask with ordinal `n` is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MaskSet(pub u8);

impl MaskSet {
    /// No masks active.
    pub const NONE: Self = Self(0);

    /// Activates `mask`. Returns `false` if it was already active.
    pub fn add(&mut self, mask: MaskType) -> bool {
        let had = self.contains(mask);
        self.0 |= 1 << mask as u8;
        !had
    }

    /// Deactivates `mask`. Returns `false` if it was not active.
    pub fn remove(&mut self, mask: MaskType) -> bool {
        let had = self.contains(mask);
        self.0 &= !(1 << mask as u8);
        had
    }

    /// Returns `true` if `mask` is active.
    pub fn contains(self, mask: MaskType) -> bool {
        self.0 & (1 << mask as u8) != 0
    }

    /// Returns `true` if no mask is active.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Deactivates everything.
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Number of active masks.
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// The active mask with the highest priority.
    pub fn topmost(self) -> Option<MaskType> {
        MaskType::ALL.into_iter().rev().find(|&m| self.contains(m))
    }

    /// Iterates active masks, lowest priority first.
    pub fn iter(self) -> impl Iterator<Item = MaskType> {
        MaskType::ALL.into_iter().filter(move |&m| self.contains(m))
    }
}

/// A [`MaskSet`] per cell for a grid of fixed size.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskLayer {
    size_x: usize,
    size_y: usize,
    size_z: usize,
    masks: Vec<MaskSet>,
    version: u64,
}

impl MaskLayer {
    /// Creates an empty layer.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if any dimension is zero.
    pub fn new(size_x: usize, size_y: usize, size_z: usize) -> Result<Self, GridError> {
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
            masks: vec![MaskSet::NONE; size_x * size_y * size_z],
            version: 0,
        })
    }

    /// Layer extent as `(x, y, z)`.
    pub fn dimensions(&self) -> (usize, usize, usize) {
        (self.size_x, self.size_y, self.size_z)
    }

    /// Mutation counter.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn index(&self, x: usize, y: usize, z: usize) -> Option<usize> {
        (x < self.size_x && y < self.size_y && z < self.size_z)
            .then(|| x + y * self.size_x + z * self.size_x * self.size_y)
    }

    /// Mask set at `(x, y, z)`; empty out of bounds.
    pub fn get(&self, x: usize, y: usize, z: usize) -> MaskSet {
        self.index(x, y, z)
            .map_or(MaskSet::NONE, |i| self.masks[i])
    }

    /// Activates `mask` on a cell. Returns `true` if the cell changed.
    pub fn add_mask(&mut self, x: usize, y: usize, z: usize, mask: MaskType) -> bool {
        let Some(i) = self.index(x, y, z) else {
            tracing::warn!("MaskLayer::add_mask out of bounds: ({}, {}, {})", x, y, z);
            return false;
        };
        let changed = self.masks[i].add(mask);
        if changed {
            self.version += 1;
        }
        changed
    }

    /// Deactivates `mask` on a cell. Returns `true` if the cell changed.
    pub fn remove_mask(&mut self, x: usize, y: usize, z: usize, mask: MaskType) -> bool {
        let Some(i) = self.index(x, y, z) else {
            return false;
        };
        let changed = self.masks[i].remove(mask);
        if changed {
            self.version += 1;
        }
        changed
    }

    /// Returns `true` if `mask` is active on the cell.
    pub fn has_mask(&self, x: usize, y: usize, z: usize, mask: MaskType) -> bool {
        self.get(x, y, z).contains(mask)
    }

    /// Returns `true` if any mask is active on the cell.
    pub fn has_any_mask(&self, x: usize, y: usize, z: usize) -> bool {
        !self.get(x, y, z).is_empty()
    }

    /// Clears every mask on one cell.
    pub fn clear_masks(&mut self, x: usize, y: usize, z: usize) {
        if let Some(i) = self.index(x, y, z)
            && !self.masks[i].is_empty()
        {
            self.masks[i].clear();
            self.version += 1;
        }
    }

    /// Removes `mask` from every cell.
    pub fn clear_type(&mut self, mask: MaskType) {
        let mut changed = false;
        for set in &mut self.masks {
            changed |= set.remove(mask);
        }
        if changed {
            self.version += 1;
        }
    }

    /// Clears every mask on every cell.
    pub fn clear_all(&mut self) {
        self.masks.fill(MaskSet::NONE);
        self.version += 1;
    }

    /// Number of cells with at least one active mask.
    pub fn marked_count(&self) -> usize {
        self.masks.iter().filter(|m| !m.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rejects_duplicates() {
        let mut set = MaskSet::NONE;
        assert!(set.add(MaskType::Placement));
        assert!(!set.add(MaskType::Placement));
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn test_remove() {
        let mut set = MaskSet::NONE;
        set.add(MaskType::AttackRange);
        assert!(set.remove(MaskType::AttackRange));
        assert!(!set.remove(MaskType::AttackRange));
        assert!(set.is_empty());
    }

    #[test]
    fn test_topmost_is_highest_ordinal() {
        let mut set = MaskSet::NONE;
        assert_eq!(set.topmost(), None);
        set.add(MaskType::Selected);
        set.add(MaskType::Placement);
        set.add(MaskType::MovementRange);
        assert_eq!(set.topmost(), Some(MaskType::Selected));
        set.remove(MaskType::Selected);
        assert_eq!(set.topmost(), Some(MaskType::MovementRange));
    }

    #[test]
    fn test_iter_in_priority_order() {
        let mut set = MaskSet::NONE;
        set.add(MaskType::AreaOfEffect);
        set.add(MaskType::EnemyPlacement);
        let masks: Vec<_> = set.iter().collect();
        assert_eq!(masks, vec![MaskType::EnemyPlacement, MaskType::AreaOfEffect]);
    }

    #[test]
    fn test_layer_cell_operations() {
        let mut layer = MaskLayer::new(3, 2, 3).expect("layer");
        assert!(layer.add_mask(1, 1, 1, MaskType::Placement));
        assert!(layer.has_mask(1, 1, 1, MaskType::Placement));
        assert!(layer.has_any_mask(1, 1, 1));
        assert!(!layer.has_any_mask(0, 0, 0));
        layer.clear_masks(1, 1, 1);
        assert!(!layer.has_any_mask(1, 1, 1));
    }

    #[test]
    fn test_layer_out_of_bounds_is_empty() {
        let mut layer = MaskLayer::new(1, 1, 1).expect("layer");
        assert!(!layer.add_mask(4, 0, 0, MaskType::Selected));
        assert!(layer.get(4, 0, 0).is_empty());
    }

    #[test]
    fn test_clear_type_across_layer() {
        let mut layer = MaskLayer::new(2, 1, 2).expect("layer");
        layer.add_mask(0, 0, 0, MaskType::AttackRange);
        layer.add_mask(1, 0, 1, MaskType::AttackRange);
        layer.add_mask(1, 0, 1, MaskType::Selected);
        layer.clear_type(MaskType::AttackRange);
        assert_eq!(layer.marked_count(), 1);
        assert!(layer.has_mask(1, 0, 1, MaskType::Selected));
    }

    #[test]
    fn test_layer_rejects_zero_size() {
        assert!(MaskLayer::new(0, 1, 1).is_err());
    }
}
