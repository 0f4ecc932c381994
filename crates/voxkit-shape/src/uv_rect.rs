//! Axis-aligned texture sub-rectangle (anchor + size) in atlas UV space.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A rectangle in normalized atlas space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UvRect {
    /// Lower-left corner.
    pub anchor: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl UvRect {
    /// Zero-size rectangle at the origin; what a missing texture resolves to.
    pub const ZERO: Self = Self {
        anchor: Vec2::ZERO,
        size: Vec2::ZERO,
    };

    /// The whole texture.
    pub const FULL: Self = Self {
        anchor: Vec2::ZERO,
        size: Vec2::ONE,
    };

    /// Creates a rectangle from its anchor and size.
    pub fn new(anchor: Vec2, size: Vec2) -> Self {
        Self { anchor, size }
    }

    /// Creates the bounding rectangle of a set of UVs (a sprite's corners).
    /// Returns `None` for an empty set.
    pub fn bounding(uvs: &[Vec2]) -> Option<Self> {
        let first = *uvs.first()?;
        let (min, max) = uvs
            .iter()
            .fold((first, first), |(lo, hi), &uv| (lo.min(uv), hi.max(uv)));
        Some(Self::new(min, max - min))
    }

    /// Resolves an optional texture, falling back to [`UvRect::ZERO`].
    pub fn or_degenerate(rect: Option<UvRect>) -> Self {
        rect.unwrap_or(Self::ZERO)
    }

    /// Returns `true` if the rectangle has no area.
    pub fn is_degenerate(&self) -> bool {
        self.size.x == 0.0 || self.size.y == 0.0
    }

    /// Maps a tile-local coordinate in `[0, 1]²` into the rectangle.
    pub fn map(&self, tile_uv: Vec2) -> Vec2 {
        self.anchor + tile_uv * self.size
    }

    /// Corners in quad order: anchor, +u, +u+v, +v.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.map(Vec2::new(0.0, 0.0)),
            self.map(Vec2::new(1.0, 0.0)),
            self.map(Vec2::new(1.0, 1.0)),
            self.map(Vec2::new(0.0, 1.0)),
        ]
    }

    /// Lower half (by v) of the rectangle.
    pub fn lower_half(&self) -> Self {
        Self::new(self.anchor, Vec2::new(self.size.x, self.size.y * 0.5))
    }

    /// Upper half (by v) of the rectangle.
    pub fn upper_half(&self) -> Self {
        Self::new(
            self.anchor + Vec2::new(0.0, self.size.y * 0.5),
            Vec2::new(self.size.x, self.size.y * 0.5),
        )
    }
}
