/// State management module
///
/// This module handles all application state, including:
/// - The memoized filter catalog (catalog.rs)
/// - The selected image and its decode sequencing (selection.rs)
/// - The decoded payload shared with the gallery (data.rs)

pub mod catalog;
pub mod data;
pub mod selection;
