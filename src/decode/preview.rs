/// Size tiers for decoded images
///
/// The original is shown once at a comfortable size; the 50 variants are
/// rendered from a smaller tier so compositing stays fast.

use image::{imageops::FilterType, DynamicImage, RgbaImage};
use iced::widget::image::Handle;

/// Downscale to fit within `max_dimension` on the longest edge
///
/// Aspect ratio is preserved and images are never upscaled.
pub fn fit_within(image: &DynamicImage, max_dimension: u32) -> RgbaImage {
    if image.width() <= max_dimension && image.height() <= max_dimension {
        return image.to_rgba8();
    }

    image
        .resize(max_dimension, max_dimension, FilterType::Triangle)
        .to_rgba8()
}

/// Wrap RGBA pixels in an iced image handle
pub fn to_handle(image: RgbaImage) -> Handle {
    let (width, height) = image.dimensions();
    Handle::from_rgba(width, height, image.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_image_is_bounded() {
        let image = DynamicImage::new_rgba8(1000, 500);
        let out = fit_within(&image, 384);

        assert_eq!(out.dimensions(), (384, 192));
    }

    #[test]
    fn test_portrait_keeps_aspect() {
        let image = DynamicImage::new_rgba8(300, 1200);
        let out = fit_within(&image, 400);

        assert_eq!(out.height(), 400);
        assert_eq!(out.width(), 100);
    }

    #[test]
    fn test_small_image_is_not_upscaled() {
        let image = DynamicImage::new_rgb8(64, 48);
        let out = fit_within(&image, 384);

        assert_eq!(out.dimensions(), (64, 48));
    }
}
