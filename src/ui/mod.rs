/// Widgets for the main window
///
/// - `upload.rs` - file picking controls and status
/// - `gallery.rs` - original image plus the grid of 50 variants

pub mod gallery;
pub mod upload;
