//! Error types for the gallery
//!
//! Nothing in the gallery is fatal. These errors are either folded into a
//! `PickerOutcome::Failed` message or logged and replaced by a default.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    Json(#[from] serde_json::Error),

    /// The picked file could not be read as an image
    #[error("not a readable image: {0}")]
    Decode(String),

    /// No storage directory on this platform, or the configured
    /// subdirectory would leave it
    #[error("no usable storage directory for picked images")]
    Storage,
}

pub type Result<T> = std::result::Result<T, GalleryError>;
