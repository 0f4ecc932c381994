//! Runtime configuration for the voxkit tools.
//!
//! Settings persist to disk as `config.ron`, tolerate missing and unknown
//! fields, and can be overridden from the command line.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{AssetsConfig, BoardConfig, Config, DebugConfig, MeshingConfig, default_config_dir};
pub use error::ConfigError;
