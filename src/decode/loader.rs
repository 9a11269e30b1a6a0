/// Image loader
///
/// Reads the chosen file, decodes it, and composites every catalog entry.
/// File I/O is async; decoding and filtering are CPU-bound and run on a
/// blocking worker so the window stays responsive.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task;

use super::preview;
use crate::compositor::{self, FilterError};
use crate::config::AppConfig;
use crate::state::catalog::FilterCatalog;
use crate::state::data::DecodedImage;

/// Why a selected file could not be turned into a gallery
///
/// Cloneable so it can travel inside UI messages.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("Failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },
    #[error("Failed to decode {file_name}: {message}")]
    Decode { file_name: String, message: String },
    #[error("Failed to apply filter: {0}")]
    Filter(#[from] FilterError),
    #[error("Background task failed: {0}")]
    Worker(String),
}

/// Sizes the loader needs from the config
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierSizes {
    pub original: u32,
    pub preview: u32,
}

impl From<&AppConfig> for TierSizes {
    fn from(config: &AppConfig) -> Self {
        Self {
            original: config.original_max_dimension,
            preview: config.preview_max_dimension,
        }
    }
}

/// Load an image file and render all catalog variants
pub async fn load_image(
    path: PathBuf,
    sizes: TierSizes,
    catalog: &'static FilterCatalog,
) -> Result<Arc<DecodedImage>, DecodeError> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| DecodeError::Read {
            path: path.clone(),
            message: e.to_string(),
        })?;

    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());

    // Spawn blocking because decoding and filtering are CPU-intensive
    task::spawn_blocking(move || decode_blocking(&path, &bytes, sizes, catalog))
        .await
        .map_err(|e| DecodeError::Worker(e.to_string()))?
        .map(Arc::new)
}

/// Blocking implementation of decode + composite
fn decode_blocking(
    path: &Path,
    bytes: &[u8],
    sizes: TierSizes,
    catalog: &FilterCatalog,
) -> Result<DecodedImage, DecodeError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let decoded = image::load_from_memory(bytes).map_err(|e| DecodeError::Decode {
        file_name: file_name.clone(),
        message: e.to_string(),
    })?;

    let (width, height) = (decoded.width(), decoded.height());
    let original = preview::fit_within(&decoded, sizes.original);
    let working = preview::fit_within(&decoded, sizes.preview);

    let variants = catalog
        .iter()
        .map(|descriptor| compositor::render(descriptor, &working).map(preview::to_handle))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(
        "📸 Decoded {} ({}x{}), rendered {} variants at {}x{}",
        file_name,
        width,
        height,
        variants.len(),
        working.width(),
        working.height(),
    );

    Ok(DecodedImage {
        file_name,
        width,
        height,
        original: preview::to_handle(original),
        variants,
    })
}
