//! Scene error types

use scrollscape_core::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration or setting up the choreographer
#[derive(Error, Debug)]
pub enum SceneError {
    /// Invalid configuration values
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Configuration file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for this schema
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration string is not valid TOML for this schema
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration could not be written out
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for scene operations
pub type Result<T> = std::result::Result<T, SceneError>;
