//! Error types for web-icons
//!
//! Uses `thiserror` for library errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for generator operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Main error type for generator operations
#[derive(Error, Debug)]
pub enum GenerateError {
    /// A required image capability was not supplied at startup
    #[error("missing required capability: {name}")]
    MissingCapability { name: &'static str },

    /// Source icon does not exist
    #[error("source icon not found: {}", path.display())]
    MissingSource { path: PathBuf },

    /// Source icon exists but its bytes could not be read
    #[error("cannot read source icon {}: {message}", path.display())]
    UnreadableSource { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File system port error
    #[error("{0}")]
    Fs(#[from] FsError),

    /// Decoding, resizing or encoding a raster image failed
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Building the ICO container failed
    #[error("ICO encoding failed: {message}")]
    Ico { message: String },

    /// Manifest serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GenerateError {
    /// Fatal errors abort the run before any asset is written.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GenerateError::MissingCapability { .. } | GenerateError::MissingSource { .. }
        )
    }
}
