//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use voxkit_shape::VoxelFilter;

use crate::{Config, ConfigError};

/// Parses a collision filter name, ignoring case.
fn parse_filter(value: &str) -> Result<VoxelFilter, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "any" => Ok(VoxelFilter::Any),
        "obstacle" => Ok(VoxelFilter::Obstacle),
        "walkable" => Ok(VoxelFilter::Walkable),
        _ => Err(ConfigError::UnknownFilter(value.to_string())),
    }
}

/// voxkit command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "voxkit", about = "Voxel board mesher")]
pub struct CliArgs {
    /// Board size along X.
    #[arg(long)]
    pub size_x: Option<usize>,

    /// Board height.
    #[arg(long)]
    pub size_y: Option<usize>,

    /// Board size along Z.
    #[arg(long)]
    pub size_z: Option<usize>,

    /// Collision filter (any, obstacle, walkable).
    #[arg(long, value_parser = parse_filter)]
    pub collision_filter: Option<VoxelFilter>,

    /// Skip the collision mesh.
    #[arg(long)]
    pub no_collision: bool,

    /// Skip the mask mesh.
    #[arg(long)]
    pub no_mask: bool,

    /// Voxel manifest (RON).
    #[arg(long)]
    pub voxels: Option<PathBuf>,

    /// Mask sprite atlas (RON).
    #[arg(long)]
    pub sprites: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config. Call [`Config::validate`]
    /// afterwards, since a size flag can empty the board.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(x) = args.size_x {
            self.board.size_x = x;
        }
        if let Some(y) = args.size_y {
            self.board.size_y = y;
        }
        if let Some(z) = args.size_z {
            self.board.size_z = z;
        }
        if let Some(filter) = args.collision_filter {
            self.meshing.collision_filter = filter;
        }
        if args.no_collision {
            self.meshing.build_collision = false;
        }
        if args.no_mask {
            self.meshing.build_mask = false;
        }
        if let Some(ref path) = args.voxels {
            self.assets.voxel_manifest = Some(path.clone());
        }
        if let Some(ref path) = args.sprites {
            self.assets.mask_sprites = Some(path.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
