//! Native dialog launch and import of the picked file
//!
//! A picked file is probed before it becomes a record, so a broken file
//! surfaces as `PickerOutcome::Failed` instead of an empty thumbnail.

use chrono::Utc;
use rfd::AsyncFileDialog;
use std::path::{Component, Path, PathBuf};
use tokio::task;

use super::{PickerOptions, PickerOutcome, StorageHint};
use crate::config::APP_NAME;
use crate::error::{GalleryError, Result};

/// Open the native image dialog and import whatever the user picks
pub async fn launch_image_library(options: PickerOptions) -> PickerOutcome {
    let picked = AsyncFileDialog::new()
        .set_title("Select Image")
        .add_filter(options.media_kind.label(), options.media_kind.extensions())
        .pick_file()
        .await;

    let Some(handle) = picked else {
        return PickerOutcome::Cancelled;
    };

    let root = storage_root(&options.storage);
    import_picked(handle.path().to_path_buf(), &options.storage, root).await
}

/// Turn a chosen file into an outcome.
///
/// `root` is the directory copies go under when the hint names a path.
pub async fn import_picked(path: PathBuf, hint: &StorageHint, root: Option<PathBuf>) -> PickerOutcome {
    match import(path, hint, root).await {
        Ok(uri) => PickerOutcome::Succeeded { uri },
        Err(e) => PickerOutcome::Failed {
            message: e.to_string(),
        },
    }
}

async fn import(path: PathBuf, hint: &StorageHint, root: Option<PathBuf>) -> Result<String> {
    probe(path.clone()).await?;

    let Some(subdir) = &hint.path else {
        return Ok(path_to_uri(&path));
    };

    if !is_relative_subdir(subdir) {
        return Err(GalleryError::Storage);
    }
    let target_dir = root.ok_or(GalleryError::Storage)?.join(subdir);
    tokio::fs::create_dir_all(&target_dir).await?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    // Stamp prefix keeps two picks of the same file apart
    let target = target_dir.join(format!("{}_{}", Utc::now().timestamp_millis(), file_name));
    tokio::fs::copy(&path, &target).await?;

    log::debug!("Copied {} to {}", path.display(), target.display());
    Ok(path_to_uri(&target))
}

/// Check the file decodes as an image (header only)
async fn probe(path: PathBuf) -> Result<(u32, u32)> {
    // Spawn blocking because image probing reads from disk synchronously
    task::spawn_blocking(move || {
        image::image_dimensions(&path).map_err(|e| GalleryError::Decode(e.to_string()))
    })
    .await
    .map_err(|e| GalleryError::Io(std::io::Error::other(e)))?
}

/// Directory copies of picked files live under.
/// Caches are excluded from backups, data directories are not.
pub fn storage_root(hint: &StorageHint) -> Option<PathBuf> {
    let base = if hint.skip_backup {
        dirs::cache_dir()
    } else {
        dirs::data_dir()
    };
    base.map(|dir| dir.join(APP_NAME))
}

/// Copies must stay under the storage root
fn is_relative_subdir(subdir: &str) -> bool {
    Path::new(subdir)
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

fn path_to_uri(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
