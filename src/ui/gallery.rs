/// Gallery of filtered variants
///
/// `layout` is the pure mapping from the selected image and the catalog to
/// what should be on screen; `view` turns that into widgets. Both run on
/// every redraw and read the memoized catalog without regenerating it.

use iced::widget::{column, container, image, text, tooltip, Column};
use iced::{Alignment, ContentFit, Element, Length, Pixels};
use iced_aw::Wrap;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::state::catalog::{FilterCatalog, FilterDescriptor};
use crate::state::data::DecodedImage;
use crate::state::selection::SelectedImage;
use crate::Message;

const PLACEHOLDER_TEXT: &str = "Please upload an image to see its 50 variations.";

/// What the gallery area shows
#[derive(Debug)]
pub enum GalleryView<'a> {
    /// No image yet; a prompt instead of the grid
    Placeholder,
    Grid {
        image: &'a Arc<DecodedImage>,
        cells: Vec<Cell<'a>>,
    },
}

/// One variant in the grid
#[derive(Debug)]
pub struct Cell<'a> {
    /// Position in the catalog
    pub index: usize,
    /// "Shade 1" .. "Shade 50"
    pub label: String,
    pub descriptor: &'a FilterDescriptor,
    pub image: &'a Arc<DecodedImage>,
}

/// Pair the selected image with every catalog entry
pub fn layout<'a>(
    selected: &'a SelectedImage<Arc<DecodedImage>>,
    catalog: &'a FilterCatalog,
) -> GalleryView<'a> {
    let SelectedImage::Loaded(image) = selected else {
        return GalleryView::Placeholder;
    };

    let cells = catalog
        .iter()
        .enumerate()
        .map(|(index, descriptor)| Cell {
            index,
            label: format!("Shade {}", index + 1),
            descriptor,
            image,
        })
        .collect();

    GalleryView::Grid { image, cells }
}

/// Build the widgets for a gallery layout
pub fn view<'a>(gallery: GalleryView<'a>, config: &AppConfig) -> Element<'a, Message> {
    match gallery {
        GalleryView::Placeholder => placeholder(),
        GalleryView::Grid { image, cells } => grid(image, cells, config),
    }
}

fn placeholder<'a>() -> Element<'a, Message> {
    container(
        column![text("🖼").size(64), text(PLACEHOLDER_TEXT).size(18)]
            .spacing(16)
            .align_x(Alignment::Center),
    )
    .padding(48)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .style(container::bordered_box)
    .into()
}

fn grid<'a>(
    decoded: &'a Arc<DecodedImage>,
    cells: Vec<Cell<'a>>,
    config: &AppConfig,
) -> Element<'a, Message> {
    let original = column![
        text("Original Image").size(24),
        image(decoded.original.clone())
            .height(Length::Fixed(384.0))
            .content_fit(ContentFit::Contain),
        text(format!(
            "{} ({}×{})",
            decoded.file_name, decoded.width, decoded.height
        ))
        .size(14),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    let elements = cells
        .into_iter()
        .filter_map(|cell| shade_cell(cell, config))
        .collect();

    let variations = Wrap::with_elements(elements)
        .spacing(Pixels(config.grid_spacing))
        .line_spacing(Pixels(config.grid_spacing));

    Column::new()
        .push(original)
        .push(text("50 Shades Variations").size(24))
        .push(variations)
        .spacing(24)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
}

fn shade_cell<'a>(cell: Cell<'a>, config: &AppConfig) -> Option<Element<'a, Message>> {
    let handle = cell.image.variant(cell.index)?.clone();

    let card = container(
        column![
            image(handle)
                .width(Length::Fixed(config.cell_width))
                .height(Length::Fixed(config.cell_height))
                .content_fit(ContentFit::Cover),
            text(cell.label).size(14),
        ]
        .spacing(8),
    )
    .padding(8)
    .style(container::rounded_box);

    let hint = container(text(cell.descriptor.as_str()).size(12))
        .padding(6)
        .style(container::rounded_box);

    Some(tooltip(card, hint, tooltip::Position::Bottom).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::{self, CATALOG_SIZE};
    use iced::widget::image::Handle;

    fn decoded() -> Arc<DecodedImage> {
        let pixel = || Handle::from_rgba(1, 1, vec![255u8, 0, 0, 255]);
        Arc::new(DecodedImage {
            file_name: "red.png".to_string(),
            width: 1,
            height: 1,
            original: pixel(),
            variants: (0..CATALOG_SIZE).map(|_| pixel()).collect(),
        })
    }

    #[test]
    fn test_empty_shows_placeholder() {
        let selected = SelectedImage::Empty;

        let view = layout(&selected, catalog::shared());

        assert!(matches!(view, GalleryView::Placeholder));
    }

    #[test]
    fn test_loaded_shows_fifty_labelled_cells() {
        let payload = decoded();
        let selected = SelectedImage::Loaded(payload.clone());
        let catalog = catalog::shared();

        let GalleryView::Grid { image, cells } = layout(&selected, catalog) else {
            panic!("expected a grid");
        };

        assert!(Arc::ptr_eq(image, &payload));
        assert_eq!(cells.len(), CATALOG_SIZE);
        assert_eq!(cells[0].label, "Shade 1");
        assert_eq!(cells[49].label, "Shade 50");

        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.index, i);
            assert_eq!(cell.label, format!("Shade {}", i + 1));
            assert_eq!(cell.descriptor, &catalog[i]);
            assert!(Arc::ptr_eq(cell.image, &payload));
        }
    }

    #[test]
    fn test_layout_is_recomputed_per_state() {
        let catalog = catalog::shared();
        let loaded = SelectedImage::Loaded(decoded());

        assert!(matches!(layout(&loaded, catalog), GalleryView::Grid { .. }));
        assert!(matches!(
            layout(&SelectedImage::Empty, catalog),
            GalleryView::Placeholder
        ));
    }
}
