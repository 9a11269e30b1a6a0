/// Image decoding module
///
/// This module handles:
/// - Reading the chosen file and decoding it off the UI thread (loader.rs)
/// - Building the original and preview size tiers (preview.rs)

pub mod loader;
pub mod preview;

pub use loader::{load_image, DecodeError};

/// Extensions offered by the file dialog
pub const IMAGE_EXTENSIONS: [&str; 10] = [
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "ico", "tga",
];
