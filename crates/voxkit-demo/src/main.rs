//! Demo binary: generates the debug board, meshes it, and logs statistics.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p voxkit-demo -- --size-x 16 --collision-filter walkable`.

mod board;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use voxkit_config::{CliArgs, Config, ConfigError, default_config_dir};
use voxkit_grid::{CellSource, GridError, MaskLayer, VoxelGrid};
use voxkit_mesh::{MaskSpriteAtlas, MeshBuffers, Mesher, SpriteAtlasError};
use voxkit_shape::{CardinalPoint, RegistryError, VoxelRegistry};

const BUILTIN_VOXELS: &str = include_str!("../assets/voxels.ron");
const BUILTIN_SPRITES: &str = include_str!("../assets/mask_sprites.ron");

/// Anything that stops the demo before all meshes are built.
#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("voxel manifest: {0}")]
    Registry(#[from] RegistryError),

    #[error("mask sprites: {0}")]
    Sprites(#[from] SpriteAtlasError),

    #[error("board: {0}")]
    Grid(#[from] GridError),
}

fn load_registry(config: &Config) -> Result<VoxelRegistry, RegistryError> {
    match &config.assets.voxel_manifest {
        Some(path) => {
            info!("Loading voxel manifest from {}", path.display());
            VoxelRegistry::from_ron(path)
        }
        None => VoxelRegistry::from_ron_str(BUILTIN_VOXELS),
    }
}

fn load_sprites(config: &Config) -> Result<MaskSpriteAtlas, SpriteAtlasError> {
    match &config.assets.mask_sprites {
        Some(path) => {
            info!("Loading mask sprites from {}", path.display());
            MaskSpriteAtlas::from_ron(path)
        }
        None => MaskSpriteAtlas::from_ron_str(BUILTIN_SPRITES),
    }
}

fn log_mesh(label: &str, mesh: &MeshBuffers) {
    info!(
        "{} mesh: {} vertices, {} triangles, {} bytes{}",
        label,
        mesh.vertex_count(),
        mesh.triangle_count(),
        mesh.position_bytes().len() + mesh.uv_bytes().len() + mesh.index_bytes().len(),
        if mesh.needs_wide_indices() {
            " (32-bit indices)"
        } else {
            ""
        }
    );
}

fn log_anchors(mesher: &mut Mesher, grid: &VoxelGrid, registry: &VoxelRegistry) {
    let (sx, _, sz) = grid.size();
    let samples = [(0, 1, (sz / 2) as i32), ((sx / 2) as i32, 0, (sz / 2) as i32)];
    for (x, y, z) in samples {
        if let Some(p) =
            mesher.cardinal_point(grid, registry, x, y, z, CardinalPoint::Stationary)
        {
            info!("Anchor of ({}, {}, {}): ({:.2}, {:.2}, {:.2})", x, y, z, p.x, p.y, p.z);
        }
    }
}

fn run(config: &Config) -> Result<(), DemoError> {
    config.validate()?;
    let registry = load_registry(config)?;
    let grid = board::generate(&config.board)?;
    info!(
        "Board {:?}: {} solid cells, {} voxel types",
        grid.dimensions(),
        grid.solid_count(),
        registry.len()
    );

    let mut mesher = Mesher::new();

    let render = mesher.build_render_mesh(&grid, &registry);
    log_mesh("Render", &render);

    if config.meshing.build_collision {
        let collision =
            mesher.build_collision_mesh(&grid, &registry, config.meshing.collision_filter);
        log_mesh(
            &format!("Collision ({:?})", config.meshing.collision_filter),
            &collision,
        );
    }

    if config.meshing.build_mask {
        let sprites = load_sprites(config)?;
        let masks: MaskLayer = board::debug_masks(&grid)?;
        info!("{} masked cells", masks.marked_count());
        let mask = mesher.build_mask_mesh(&grid, &masks, &registry, &sprites);
        log_mesh("Mask", &mask);
    }

    log_anchors(&mut mesher, &grid, &registry);

    let cache = mesher.cache();
    info!(
        "Transform cache: {} entries, {} hits, {} misses",
        cache.len(),
        cache.hits(),
        cache.misses()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    voxkit_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_assets_parse() {
        let registry = VoxelRegistry::from_ron_str(BUILTIN_VOXELS).expect("voxels");
        assert_eq!(registry.len(), 5);
        for id in 0..5 {
            assert_eq!(registry.get(id).map(|d| d.shape().kind().missing_textures()), Some(0));
        }
        let sprites = MaskSpriteAtlas::from_ron_str(BUILTIN_SPRITES).expect("sprites");
        assert_eq!(sprites.len(), 6);
    }

    #[test]
    fn test_default_board_meshes() {
        let config = Config::default();
        let registry = load_registry(&config).expect("registry");
        let grid = board::generate(&config.board).expect("board");
        let mut mesher = Mesher::new();
        let render = mesher.build_render_mesh(&grid, &registry);
        assert!(!render.is_empty());
        let masks = board::debug_masks(&grid).expect("masks");
        let sprites = load_sprites(&config).expect("sprites");
        let mask = mesher.build_mask_mesh(&grid, &masks, &registry, &sprites);
        assert!(!mask.is_empty());
        assert!(run(&config).is_ok());
    }

    #[test]
    fn test_run_reports_typed_errors() {
        let mut config = Config::default();
        config.board.size_x = 0;
        assert!(matches!(
            run(&config),
            Err(DemoError::Config(ConfigError::EmptyBoard { x: 0, .. }))
        ));

        let mut config = Config::default();
        config.assets.voxel_manifest = Some("/nonexistent/voxels.ron".into());
        let err = run(&config).unwrap_err();
        assert!(matches!(err, DemoError::Registry(RegistryError::Io(_))));
        assert!(err.to_string().starts_with("voxel manifest: "));
    }
}
