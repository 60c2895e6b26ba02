//! Theme error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading widget styles
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Style file could not be read
    #[error("Failed to read style file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Style document is not valid TOML for the expected schema
    #[error("Failed to parse style: {0}")]
    Parse(#[from] toml::de::Error),

    /// Style could not be serialized
    #[error("Failed to serialize style: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Radius must be a positive, finite number
    #[error("Invalid indicator radius: {0}")]
    InvalidRadius(f32),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
