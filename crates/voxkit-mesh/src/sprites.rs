//! Atlas rectangles for mask overlay sprites.

use std::path::Path;

use glam::Vec2;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use voxkit_grid::MaskType;
use voxkit_shape::UvRect;

/// Errors returned when loading a sprite atlas description.
#[derive(Debug, Error)]
pub enum SpriteAtlasError {
    /// I/O error reading the file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// RON deserialization error.
    #[error("ron parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Resolves the atlas sub-rectangle drawn for a mask type.
pub trait MaskSpriteSource {
    /// Rectangle for `mask`, or `None` if no sprite is assigned.
    fn uv_rect_for(&self, mask: MaskType) -> Option<UvRect>;
}

/// One sprite assignment in a RON atlas description.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaskSpriteEntry {
    /// Mask type the sprite is drawn for.
    pub mask: MaskType,
    /// Atlas rectangle.
    pub rect: UvRect,
}

#[derive(Deserialize)]
struct MaskSpriteManifest {
    sprites: Vec<MaskSpriteEntry>,
}

/// Map from mask type to sprite rectangle.
#[derive(Clone, Debug, Default)]
pub struct MaskSpriteAtlas {
    rects: FxHashMap<MaskType, UvRect>,
}

impl MaskSpriteAtlas {
    /// Creates an atlas with no sprites.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lays the mask types out in ordinal order, row by row, `tiles_per_row`
    /// to a row. The rows used fill the whole atlas height, so every tile
    /// stays inside `[0, 1]`.
    pub fn from_grid(tiles_per_row: u32) -> Self {
        let per_row = (tiles_per_row.max(1) as usize).min(MaskType::ALL.len());
        let rows = MaskType::ALL.len().div_ceil(per_row);
        let tile = Vec2::new(1.0 / per_row as f32, 1.0 / rows as f32);
        let mut atlas = Self::new();
        for mask in MaskType::ALL {
            let i = mask.index();
            let anchor = Vec2::new((i % per_row) as f32, (i / per_row) as f32) * tile;
            atlas.insert(mask, UvRect::new(anchor, tile));
        }
        atlas
    }

    /// Load an atlas description from a RON file.
    ///
    /// # Errors
    ///
    /// Returns [`SpriteAtlasError`] on I/O or parse failures.
    pub fn from_ron(path: &Path) -> Result<Self, SpriteAtlasError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Load an atlas description from a RON string. Later entries for the
    /// same mask type replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`SpriteAtlasError::Ron`] on parse failures.
    pub fn from_ron_str(ron_str: &str) -> Result<Self, SpriteAtlasError> {
        let manifest: MaskSpriteManifest = ron::from_str(ron_str)?;
        let mut atlas = Self::new();
        for entry in manifest.sprites {
            atlas.insert(entry.mask, entry.rect);
        }
        Ok(atlas)
    }

    /// Assigns a sprite, returning the one it replaced.
    pub fn insert(&mut self, mask: MaskType, rect: UvRect) -> Option<UvRect> {
        self.rects.insert(mask, rect)
    }

    /// Removes a sprite assignment.
    pub fn remove(&mut self, mask: MaskType) -> Option<UvRect> {
        self.rects.remove(&mask)
    }

    /// Number of assigned sprites.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Returns `true` if no sprite is assigned.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

impl MaskSpriteSource for MaskSpriteAtlas {
    fn uv_rect_for(&self, mask: MaskType) -> Option<UvRect> {
        self.rects.get(&mask).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_grid_layout() {
        let atlas = MaskSpriteAtlas::from_grid(4);
        assert_eq!(atlas.len(), MaskType::ALL.len());
        let selected = atlas.uv_rect_for(MaskType::Selected).expect("selected");
        assert_eq!(selected.anchor, Vec2::new(0.25, 0.5));
        assert_eq!(selected.size, Vec2::new(0.25, 0.5));
    }

    #[test]
    fn test_from_grid_zero_is_one_column() {
        let atlas = MaskSpriteAtlas::from_grid(0);
        let rows = MaskType::ALL.len() as f32;
        let rect = atlas.uv_rect_for(MaskType::AttackRange).expect("rect");
        assert_eq!(rect.anchor, Vec2::new(0.0, 2.0 / rows));
        assert_eq!(rect.size, Vec2::new(1.0, 1.0 / rows));
    }

    #[test]
    fn test_from_grid_tiles_stay_inside_atlas() {
        for per_row in 0..=8 {
            let atlas = MaskSpriteAtlas::from_grid(per_row);
            for mask in MaskType::ALL {
                let rect = atlas.uv_rect_for(mask).expect("rect");
                let far = rect.anchor + rect.size;
                assert!(rect.anchor.min_element() >= 0.0, "{per_row} {mask:?}");
                assert!(far.max_element() <= 1.0 + 1e-6, "{per_row} {mask:?}: {far}");
            }
        }
    }

    #[test]
    fn test_insert_replaces() {
        let mut atlas = MaskSpriteAtlas::new();
        assert!(atlas.insert(MaskType::Placement, UvRect::FULL).is_none());
        assert_eq!(atlas.insert(MaskType::Placement, UvRect::ZERO), Some(UvRect::FULL));
        assert_eq!(atlas.remove(MaskType::Placement), Some(UvRect::ZERO));
        assert!(atlas.is_empty());
    }

    #[test]
    fn test_from_ron_str() {
        let atlas = MaskSpriteAtlas::from_ron_str(
            r#"(sprites: [
                (mask: Placement, rect: (anchor: (0.0, 0.0), size: (0.5, 0.5))),
                (mask: Selected, rect: (anchor: (0.5, 0.5), size: (0.5, 0.5))),
            ])"#,
        )
        .expect("parse");
        assert_eq!(atlas.len(), 2);
        assert!(atlas.uv_rect_for(MaskType::AttackRange).is_none());
        assert_eq!(
            atlas.uv_rect_for(MaskType::Selected).map(|r| r.anchor),
            Some(Vec2::splat(0.5))
        );
    }

    #[test]
    fn test_from_ron_file_errors() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(b"(sprites: [").expect("write");
        assert!(matches!(
            MaskSpriteAtlas::from_ron(file.path()),
            Err(SpriteAtlasError::Ron(_))
        ));
        assert!(matches!(
            MaskSpriteAtlas::from_ron(Path::new("/nonexistent/sprites.ron")),
            Err(SpriteAtlasError::Io(_))
        ));
    }
}
