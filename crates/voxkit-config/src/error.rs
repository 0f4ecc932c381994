//! Errors raised while reading, writing or validating `config.ron`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `config.ron` exists but could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config directory or file could not be written.
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `config.ron` is not valid RON for [`Config`](crate::Config).
    #[error("malformed {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("cannot encode config as RON: {0}")]
    Serialize(#[from] ron::Error),

    /// A board extent is zero, so no grid can be generated.
    #[error("board must be at least 1x1x1 cells, got {x}x{y}x{z}")]
    EmptyBoard { x: usize, y: usize, z: usize },

    /// A collision filter name given on the command line is not recognised.
    #[error("unknown collision filter '{0}' (expected any, obstacle or walkable)")]
    UnknownFilter(String),
}
