//! Voxel registry: id → [`VoxelDefinition`] lookup shared read-only by the
//! meshers.
//!
//! Definitions can be registered in code or loaded from a RON manifest. Ids
//! below zero are air and never resolve.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::definition::{Traversal, VoxelDefinition};
use crate::kind::ShapeKind;
use crate::shape::Shape;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors returned while building a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The id is already registered.
    #[error("duplicate voxel id: {0}")]
    DuplicateId(i32),

    /// Negative ids are reserved for air and can never be resolved.
    #[error("invalid voxel id {0}: ids below 0 are reserved for air")]
    InvalidId(i32),

    /// I/O error reading the manifest file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// RON deserialization error.
    #[error("ron parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

// ---------------------------------------------------------------------------
// RON manifest types
// ---------------------------------------------------------------------------

/// Top-level RON manifest for voxel definitions.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VoxelManifest {
    /// Voxel entries.
    pub voxels: Vec<VoxelEntry>,
}

/// A single voxel entry in the RON manifest.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VoxelEntry {
    /// Id stored in grid cells.
    pub id: i32,
    /// Human-readable name.
    pub name: String,
    /// Traversal class; obstacle when omitted.
    #[serde(default)]
    pub traversal: Traversal,
    /// Shape variant and textures.
    pub shape: ShapeKind,
}

// ---------------------------------------------------------------------------
// VoxelRegistry
// ---------------------------------------------------------------------------

/// Id-keyed voxel definitions.
#[derive(Clone, Debug, Default)]
pub struct VoxelRegistry {
    definitions: FxHashMap<i32, VoxelDefinition>,
}

impl VoxelRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the registry from a RON manifest file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] on I/O, parse, or id failures.
    pub fn from_ron(path: &Path) -> Result<Self, RegistryError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Load the registry from a RON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] on parse or id failures.
    pub fn from_ron_str(ron_str: &str) -> Result<Self, RegistryError> {
        let manifest: VoxelManifest = ron::from_str(ron_str)?;
        let mut registry = Self::new();
        for entry in manifest.voxels {
            let def = VoxelDefinition::new(entry.name, entry.traversal, entry.shape);
            registry.register(entry.id, def)?;
        }
        tracing::info!("Loaded {} voxel definitions", registry.len());
        Ok(registry)
    }

    /// Adds a definition under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidId`] for a negative id and
    /// [`RegistryError::DuplicateId`] if `id` is taken; the existing
    /// definition is kept.
    pub fn register(&mut self, id: i32, definition: VoxelDefinition) -> Result<(), RegistryError> {
        if id < 0 {
            tracing::warn!(
                "VoxelRegistry::register rejected '{}': id {} is reserved for air",
                definition.name,
                id
            );
            return Err(RegistryError::InvalidId(id));
        }
        if self.definitions.contains_key(&id) {
            tracing::warn!(
                "VoxelRegistry::register rejected '{}': id {} already registered",
                definition.name,
                id
            );
            return Err(RegistryError::DuplicateId(id));
        }
        self.definitions.insert(id, definition);
        Ok(())
    }

    /// Definition for `id`. Air and unknown ids return `None`.
    pub fn get(&self, id: i32) -> Option<&VoxelDefinition> {
        if id < 0 {
            return None;
        }
        self.definitions.get(&id)
    }

    /// Shape for `id`. Air and unknown ids return `None`.
    pub fn shape_for(&self, id: i32) -> Option<&Shape> {
        self.get(id).map(VoxelDefinition::shape)
    }

    /// Returns `true` if `id` resolves to a definition.
    pub fn contains(&self, id: i32) -> bool {
        self.get(id).is_some()
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Removes every definition.
    pub fn clear(&mut self) {
        self.definitions.clear();
    }

    /// Iterates `(id, definition)` in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &VoxelDefinition)> {
        self.definitions.iter().map(|(&id, def)| (id, def))
    }
}
