//! Device image library integration
//!
//! This module handles:
//! - The options a picker session is launched with
//! - The three possible outcomes of a session
//! - Launching the native dialog and importing the picked file (import.rs)

pub mod import;

use serde::{Deserialize, Serialize};

pub use import::launch_image_library;

/// Kind of media the picker offers
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Photo,
}

impl MediaKind {
    /// Filter label shown in the native dialog
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Photo => "Images",
        }
    }

    /// File extensions the dialog filters on
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            MediaKind::Photo => &["png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff"],
        }
    }
}

/// Where a picked file should be kept
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StorageHint {
    /// Keep copies out of backed-up locations (cache dir instead of data dir)
    pub skip_backup: bool,
    /// Subdirectory to copy picked files into; `None` keeps the original path
    pub path: Option<String>,
}

impl Default for StorageHint {
    fn default() -> Self {
        Self {
            skip_backup: true,
            path: Some("images".to_string()),
        }
    }
}

/// Configuration a picker session is launched with
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PickerOptions {
    pub media_kind: MediaKind,
    pub storage: StorageHint,
}

/// Result of one picker session. Exactly one is delivered per launch.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerOutcome {
    /// User closed the dialog without choosing anything
    Cancelled,
    /// The dialog or the import of the chosen file failed
    Failed { message: String },
    /// A file was chosen and is reachable through `uri`
    Succeeded { uri: String },
}
