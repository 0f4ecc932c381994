//! Memoized face transforms, face-versus-face occlusion results and oriented
//! anchor sets.
//!
//! Keys use `Arc` pointer identity. Every entry keeps a clone of its source
//! `Arc`, so an address stays reserved for as long as the entry that names
//! it. Shapes must therefore be built once and shared, which the registry
//! guarantees.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use voxkit_geometry::{AxisPlane, Face, FlipOrientation, Orientation, full_outer_face, transform_face};
use voxkit_shape::CardinalPointSet;

type FaceKey = (usize, Orientation, FlipOrientation);
type PointsKey = (usize, Orientation);

fn identity<T>(value: &Arc<T>) -> usize {
    Arc::as_ptr(value) as usize
}

struct CachedFace {
    _source: Arc<Face>,
    transformed: Arc<Face>,
}

struct CachedOcclusion {
    _pair: (Arc<Face>, Arc<Face>),
    occluded: bool,
}

struct CachedPoints {
    _source: Arc<CardinalPointSet>,
    oriented: CardinalPointSet,
}

/// Transform and occlusion cache owned by one [`crate::Mesher`].
pub struct TransformCache {
    faces: FxHashMap<FaceKey, CachedFace>,
    occlusion: FxHashMap<(usize, usize), CachedOcclusion>,
    points: FxHashMap<PointsKey, CachedPoints>,
    full_faces: [Arc<Face>; 6],
    hits: u64,
    misses: u64,
}

impl TransformCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            faces: FxHashMap::default(),
            occlusion: FxHashMap::default(),
            points: FxHashMap::default(),
            full_faces: AxisPlane::ALL.map(|plane| Arc::new(full_outer_face(plane))),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns `face` placed with `orientation` and `flip`, computing it on
    /// first request.
    pub fn transformed(
        &mut self,
        face: &Arc<Face>,
        orientation: Orientation,
        flip: FlipOrientation,
    ) -> Arc<Face> {
        let key = (identity(face), orientation, flip);
        if let Some(entry) = self.faces.get(&key) {
            self.hits += 1;
            return Arc::clone(&entry.transformed);
        }
        self.misses += 1;
        let transformed = Arc::new(transform_face(face, orientation, flip));
        self.faces.insert(
            key,
            CachedFace {
                _source: Arc::clone(face),
                transformed: Arc::clone(&transformed),
            },
        );
        transformed
    }

    /// Memoized [`Face::is_occluded_by`].
    pub fn is_occluded(&mut self, face: &Arc<Face>, by: &Arc<Face>) -> bool {
        let key = (identity(face), identity(by));
        if let Some(entry) = self.occlusion.get(&key) {
            self.hits += 1;
            return entry.occluded;
        }
        self.misses += 1;
        let occluded = face.is_occluded_by(by);
        self.occlusion.insert(
            key,
            CachedOcclusion {
                _pair: (Arc::clone(face), Arc::clone(by)),
                occluded,
            },
        );
        occluded
    }

    /// Reference quad covering the whole cube side `plane`.
    pub fn full_face(&self, plane: AxisPlane) -> Arc<Face> {
        Arc::clone(&self.full_faces[plane.index()])
    }

    /// Returns `points` rotated by `orientation`.
    pub fn transformed_points(
        &mut self,
        points: &Arc<CardinalPointSet>,
        orientation: Orientation,
    ) -> CardinalPointSet {
        let key = (identity(points), orientation);
        if let Some(entry) = self.points.get(&key) {
            self.hits += 1;
            return entry.oriented;
        }
        self.misses += 1;
        let oriented = points.oriented(orientation);
        self.points.insert(
            key,
            CachedPoints {
                _source: Arc::clone(points),
                oriented,
            },
        );
        oriented
    }

    /// Number of cached entries of every kind.
    pub fn len(&self) -> usize {
        self.faces.len() + self.occlusion.len() + self.points.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that had to compute.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drops every entry and resets the counters. Call when the registry
    /// that owns the cached shapes is replaced.
    pub fn clear(&mut self) {
        self.faces.clear();
        self.occlusion.clear();
        self.points.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

impl Default for TransformCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn pos_x() -> Arc<Face> {
        Arc::new(full_outer_face(AxisPlane::PosX))
    }

    #[test]
    fn test_same_key_returns_same_arc() {
        let mut cache = TransformCache::new();
        let face = pos_x();
        let a = cache.transformed(&face, Orientation::PositiveZ, FlipOrientation::PositiveY);
        let b = cache.transformed(&face, Orientation::PositiveZ, FlipOrientation::PositiveY);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn test_equal_faces_with_distinct_identity_are_separate_entries() {
        let mut cache = TransformCache::new();
        let a = cache.transformed(&pos_x(), Orientation::PositiveX, FlipOrientation::PositiveY);
        let b = cache.transformed(&pos_x(), Orientation::PositiveX, FlipOrientation::PositiveY);
        assert_eq!(*a, *b);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_transformed_matches_direct_transform() {
        let mut cache = TransformCache::new();
        let face = pos_x();
        let cached = cache.transformed(&face, Orientation::NegativeX, FlipOrientation::NegativeY);
        assert_eq!(
            *cached,
            transform_face(&face, Orientation::NegativeX, FlipOrientation::NegativeY)
        );
    }

    #[test]
    fn test_occlusion_is_memoized() {
        let mut cache = TransformCache::new();
        let full = cache.full_face(AxisPlane::PosX);
        let face = pos_x();
        assert!(cache.is_occluded(&face, &full));
        assert!(cache.is_occluded(&face, &full));
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn test_points_rotate() {
        let mut cache = TransformCache::new();
        let set = Arc::new(CardinalPointSet::level(0.5));
        let rotated = cache.transformed_points(&set, Orientation::PositiveZ);
        assert!((rotated.get(voxkit_shape::CardinalPoint::PositiveX) - Vec3::new(0.5, 0.5, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_clear() {
        let mut cache = TransformCache::new();
        cache.transformed(&pos_x(), Orientation::PositiveX, FlipOrientation::PositiveY);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.misses(), 0);
    }
}
