/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the decoder and the UI layer.

use iced::widget::image::Handle;

/// A decoded image ready for display
///
/// Holds the original at display size plus one composited variant per
/// catalog entry, index-aligned with the catalog.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Filename only (e.g., "holiday.jpg")
    pub file_name: String,
    /// Width of the source image in pixels
    pub width: u32,
    /// Height of the source image in pixels
    pub height: u32,
    /// Original image, bounded by the configured original tier
    pub original: Handle,
    /// Filtered variants, bounded by the configured preview tier
    pub variants: Vec<Handle>,
}

impl DecodedImage {
    /// Variant handle for a catalog index
    pub fn variant(&self, index: usize) -> Option<&Handle> {
        self.variants.get(index)
    }
}
