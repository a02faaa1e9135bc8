//! User settings, loaded from `settings.json` in the config directory:
//! - Linux: ~/.config/image-gallery/settings.json
//! - macOS: ~/Library/Application Support/image-gallery/settings.json
//! - Windows: %APPDATA%\image-gallery\settings.json
//!
//! Every field is optional. A missing or broken file gives the defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::picker::PickerOptions;

pub const APP_NAME: &str = "image-gallery";
const CONFIG_FILE: &str = "settings.json";

pub const DEFAULT_COLUMNS: usize = 3;
pub const DEFAULT_THUMBNAIL_SIZE: f32 = 100.0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    /// Heading shown above the grid
    pub title: String,
    /// Number of grid columns
    pub columns: usize,
    /// Edge length of a square thumbnail, in logical pixels
    pub thumbnail_size: f32,
    /// Optional image drawn behind the whole screen
    pub background: Option<PathBuf>,
    /// Options every picker session is launched with
    pub picker: PickerOptions,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "Image Gallery".to_string(),
            columns: DEFAULT_COLUMNS,
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
            background: None,
            picker: PickerOptions::default(),
        }
    }
}

impl GalleryConfig {
    /// Column count, never below one
    pub fn columns(&self) -> usize {
        self.columns.max(1)
    }

    /// Thumbnail edge, falling back to the default for non-positive values
    pub fn thumbnail_size(&self) -> f32 {
        if self.thumbnail_size.is_finite() && self.thumbnail_size > 0.0 {
            self.thumbnail_size
        } else {
            DEFAULT_THUMBNAIL_SIZE
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Load settings from the default location.
/// Never fails: problems are logged and the defaults are used.
pub fn load() -> GalleryConfig {
    match default_config_path() {
        Some(path) => load_or_default(&path),
        None => {
            log::debug!("No config directory on this platform, using defaults");
            GalleryConfig::default()
        }
    }
}

/// Settings at `path`, or the defaults when the file is missing or broken
pub fn load_or_default(path: &Path) -> GalleryConfig {
    if !path.exists() {
        log::debug!("No settings at {}, using defaults", path.display());
        return GalleryConfig::default();
    }

    match load_from_path(path) {
        Ok(config) => {
            log::info!("📁 Settings loaded from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("⚠️  Ignoring settings at {}: {}", path.display(), e);
            GalleryConfig::default()
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<GalleryConfig> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GalleryError;
    use tempfile::tempdir;

    fn save_to_path(config: &GalleryConfig, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(config)?)?;
        Ok(())
    }

    #[test]
    fn test_defaults() {
        let config = GalleryConfig::default();
        assert_eq!(config.columns(), 3);
        assert_eq!(config.thumbnail_size(), 100.0);
        assert_eq!(config.title, "Image Gallery");
        assert!(config.background.is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let config = GalleryConfig {
            columns: 5,
            background: Some(PathBuf::from("/tmp/bg.png")),
            ..GalleryConfig::default()
        };

        save_to_path(&config, &path).unwrap();
        let loaded = load_from_path(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "columns": 4 }"#).unwrap();

        let loaded = load_from_path(&path).unwrap();

        assert_eq!(loaded.columns(), 4);
        assert_eq!(loaded.thumbnail_size(), DEFAULT_THUMBNAIL_SIZE);
        assert_eq!(loaded.picker, PickerOptions::default());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "columns = 4").unwrap();

        assert!(matches!(load_from_path(&path), Err(GalleryError::Json(_))));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let loaded = load_or_default(&dir.path().join("settings.json"));

        assert_eq!(loaded, GalleryConfig::default());
    }

    #[test]
    fn test_broken_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ \"columns\": ").unwrap();

        assert_eq!(load_or_default(&path), GalleryConfig::default());
    }

    #[test]
    fn test_valid_file_is_used() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "title": "Holiday" }"#).unwrap();

        let loaded = load_or_default(&path);

        assert_eq!(loaded.title, "Holiday");
        assert_eq!(loaded.columns(), DEFAULT_COLUMNS);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let config = GalleryConfig {
            columns: 0,
            thumbnail_size: -3.0,
            ..GalleryConfig::default()
        };

        assert_eq!(config.columns(), 1);
        assert_eq!(config.thumbnail_size(), DEFAULT_THUMBNAIL_SIZE);
    }
}
