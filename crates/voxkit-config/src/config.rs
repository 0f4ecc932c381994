//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use voxkit_shape::VoxelFilter;

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Debug board dimensions.
    pub board: BoardConfig,
    /// Which meshes to build.
    pub meshing: MeshingConfig,
    /// Asset manifest locations.
    pub assets: AssetsConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Size of the generated debug board, in cells.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    /// Extent along X.
    pub size_x: usize,
    /// Extent along Y (height).
    pub size_y: usize,
    /// Extent along Z.
    pub size_z: usize,
}

/// Meshing passes to run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MeshingConfig {
    /// Build the collision mesh.
    pub build_collision: bool,
    /// Cells included in the collision mesh.
    pub collision_filter: VoxelFilter,
    /// Build the mask overlay mesh.
    pub build_mask: bool,
}

/// Optional manifest paths. Built-in assets are used when unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssetsConfig {
    /// Voxel definition manifest.
    pub voxel_manifest: Option<PathBuf>,
    /// Mask sprite atlas description.
    pub mask_sprites: Option<PathBuf>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Also write a JSON log file in debug builds.
    pub log_to_file: bool,
}

// --- Default implementations ---

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size_x: 10,
            size_y: 3,
            size_z: 10,
        }
    }
}

impl Default for MeshingConfig {
    fn default() -> Self {
        Self {
            build_collision: true,
            collision_filter: VoxelFilter::Any,
            build_mask: true,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: true,
        }
    }
}

/// Platform config directory for voxkit, e.g. `~/.config/voxkit`.
/// Falls back to the working directory when the platform has none.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("voxkit"))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl BoardConfig {
    /// Rejects boards with a zero extent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size_x == 0 || self.size_y == 0 || self.size_z == 0 {
            return Err(ConfigError::EmptyBoard {
                x: self.size_x,
                y: self.size_y,
                z: self.size_z,
            });
        }
        Ok(())
    }
}

impl Config {
    /// Reads `config.ron` from `config_dir`, writing the defaults there first
    /// when the file does not exist yet. The loaded board is validated.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_dir.join(CONFIG_FILE);
        if !path.exists() {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Wrote default voxkit config to {}", path.display());
            return Ok(config);
        }

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        let config: Config = match ron::from_str(&contents) {
            Ok(config) => config,
            Err(source) => return Err(ConfigError::Parse { path, source }),
        };
        config.validate()?;
        log::info!(
            "Loaded voxkit config from {} (board {}x{}x{})",
            path.display(),
            config.board.size_x,
            config.board.size_y,
            config.board.size_z
        );
        Ok(config)
    }

    /// Writes the config to `config_dir/config.ron`, creating the directory.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized = ron::ser::to_string_pretty(self, pretty)?;

        let path = config_dir.join(CONFIG_FILE);
        std::fs::write(&path, serialized).map_err(|source| ConfigError::Write { path, source })
    }

    /// Checks every section that can hold an unusable value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()
    }
}
