/// Application configuration
///
/// Loaded once at startup from `<config_dir>/fifty-shades/config.json`.
/// Every key is optional; a missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Display and preview sizing
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Longest edge of the image the filters are applied to
    pub preview_max_dimension: u32,
    /// Longest edge of the "Original Image" view
    pub original_max_dimension: u32,
    /// Gallery cell size in logical pixels
    pub cell_width: f32,
    pub cell_height: f32,
    /// Gap between gallery cells
    pub grid_spacing: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preview_max_dimension: 384,
            original_max_dimension: 1280,
            cell_width: 200.0,
            cell_height: 192.0,
            grid_spacing: 16.0,
        }
    }
}

impl AppConfig {
    /// Default location of the config file, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("fifty-shades");
            path.push("config.json");
            path
        })
    }

    /// Load from the default location, falling back to defaults on any error
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("⚠️  {}; using defaults", err);
                Self::default()
            }
        }
    }

    /// Load from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("📁 Loaded config from {}", path.display());
        Ok(config.sanitized())
    }

    /// Replace nonsensical sizes with their defaults
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.preview_max_dimension == 0 {
            self.preview_max_dimension = defaults.preview_max_dimension;
        }
        if self.original_max_dimension == 0 {
            self.original_max_dimension = defaults.original_max_dimension;
        }
        if !positive(self.cell_width) {
            self.cell_width = defaults.cell_width;
        }
        if !positive(self.cell_height) {
            self.cell_height = defaults.cell_height;
        }
        if !self.grid_spacing.is_finite() || self.grid_spacing < 0.0 {
            self.grid_spacing = defaults.grid_spacing;
        }
        self
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.json")).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "preview_max_dimension": 256, "grid_spacing": 8.0 }"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();

        assert_eq!(config.preview_max_dimension, 256);
        assert_eq!(config.grid_spacing, 8.0);
        assert_eq!(config.cell_width, AppConfig::default().cell_width);
    }

    #[test]
    fn test_zero_sizes_are_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "preview_max_dimension": 0, "cell_height": -4.0 }"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();

        assert_eq!(config.preview_max_dimension, 384);
        assert_eq!(config.cell_height, 192.0);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
