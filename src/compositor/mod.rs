/// Filter compositor
///
/// Interprets CSS `filter` descriptors and applies them to RGBA buffers.
/// This stands in for the compositor a browser would provide:
/// - `parse.rs` turns a descriptor into a list of [`FilterOp`]
/// - this module applies those operations in order
///
/// Pixel operations work on straight (non-premultiplied) sRGB values in
/// 0.0..=1.0 and clamp after every step, the same way each filter primitive
/// clamps its output.

pub mod parse;

pub use parse::parse;

use image::{imageops, RgbaImage};

use crate::color;
use crate::state::catalog::FilterDescriptor;

/// Result type for compositor operations
pub type FilterResult<T> = Result<T, FilterError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("Empty filter descriptor")]
    Empty,
    #[error("Malformed filter near `{0}`")]
    Malformed(String),
    #[error("Unknown filter function `{0}`")]
    UnknownFunction(String),
    #[error("Invalid argument `{argument}` for {function}()")]
    InvalidArgument { function: String, argument: String },
}

/// One parsed filter function with its resolved amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterOp {
    Brightness(f32),
    Contrast(f32),
    Saturate(f32),
    /// Degrees
    HueRotate(f32),
    Grayscale(f32),
    Sepia(f32),
    Invert(f32),
    Opacity(f32),
    /// Standard deviation in pixels
    Blur(f32),
}

/// Something that can be applied to an RGBA image
pub trait Effect {
    fn apply(&self, image: RgbaImage) -> RgbaImage;
}

impl Effect for FilterOp {
    fn apply(&self, mut image: RgbaImage) -> RgbaImage {
        match *self {
            FilterOp::Brightness(amount) => linear(&mut image, amount, 0.0),
            FilterOp::Contrast(amount) => linear(&mut image, amount, 0.5 - 0.5 * amount),
            FilterOp::Invert(amount) => linear(&mut image, 1.0 - 2.0 * amount, amount),
            FilterOp::Saturate(amount) => matrix(&mut image, &color::saturate(amount)),
            FilterOp::HueRotate(degrees) => matrix(&mut image, &color::hue_rotate(degrees)),
            FilterOp::Grayscale(amount) => matrix(&mut image, &color::grayscale(amount)),
            FilterOp::Sepia(amount) => matrix(&mut image, &color::sepia(amount)),
            FilterOp::Opacity(amount) => opacity(&mut image, amount),
            FilterOp::Blur(radius) => {
                if radius > 0.0 {
                    return imageops::blur(&image, radius);
                }
            }
        }
        image
    }
}

impl Effect for [FilterOp] {
    fn apply(&self, image: RgbaImage) -> RgbaImage {
        self.iter().fold(image, |image, op| op.apply(image))
    }
}

/// Parse a descriptor and apply it to a copy of `source`
pub fn render(descriptor: &FilterDescriptor, source: &RgbaImage) -> FilterResult<RgbaImage> {
    let ops = parse(descriptor.as_str())?;
    Ok(ops.apply(source.clone()))
}

/// Per-channel `c * slope + intercept` on RGB
fn linear(image: &mut RgbaImage, slope: f32, intercept: f32) {
    if slope == 1.0 && intercept == 0.0 {
        return;
    }

    for pixel in image.pixels_mut() {
        for channel in pixel.0.iter_mut().take(3) {
            let c = to_unit(*channel) * slope + intercept;
            *channel = from_unit(c);
        }
    }
}

fn matrix(image: &mut RgbaImage, m: &cgmath::Matrix3<f32>) {
    if color::is_identity_matrix(m) {
        return;
    }

    for pixel in image.pixels_mut() {
        let [r, g, b, _] = pixel.0;
        let out = color::transform(m, [to_unit(r), to_unit(g), to_unit(b)]);
        pixel.0[0] = from_unit(out[0]);
        pixel.0[1] = from_unit(out[1]);
        pixel.0[2] = from_unit(out[2]);
    }
}

fn opacity(image: &mut RgbaImage, amount: f32) {
    for pixel in image.pixels_mut() {
        pixel.0[3] = from_unit(to_unit(pixel.0[3]) * amount);
    }
}

fn to_unit(value: u8) -> f32 {
    value as f32 / 255.0
}

fn from_unit(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog;
    use image::Rgba;

    fn solid(rgba: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(4, 4, Rgba(rgba))
    }

    fn run(descriptor: &str, rgba: [u8; 4]) -> [u8; 4] {
        let out = render(&FilterDescriptor::new(descriptor), &solid(rgba)).unwrap();
        out.get_pixel(1, 1).0
    }

    #[test]
    fn test_every_catalog_entry_parses() {
        for descriptor in catalog::shared().iter() {
            let ops = parse(descriptor.as_str());
            assert!(ops.is_ok(), "{} failed: {:?}", descriptor, ops);
            assert!(!ops.unwrap().is_empty());
        }
    }

    #[test]
    fn test_brightness_scales_channels() {
        assert_eq!(run("brightness(0.5)", [200, 100, 50, 255]), [100, 50, 25, 255]);
        assert_eq!(run("brightness(2)", [200, 100, 50, 255]), [255, 200, 100, 255]);
    }

    #[test]
    fn test_contrast_pivots_on_mid_gray() {
        assert_eq!(run("contrast(0)", [10, 240, 128, 255]), [128, 128, 128, 255]);
        assert_eq!(run("contrast(1)", [10, 240, 128, 255]), [10, 240, 128, 255]);
        assert_eq!(run("contrast(2)", [0, 255, 60, 255]), [0, 255, 0, 255]);
    }

    #[test]
    fn test_invert() {
        assert_eq!(run("invert(100%)", [0, 255, 55, 255]), [255, 0, 200, 255]);
        assert_eq!(run("invert(0)", [0, 255, 55, 255]), [0, 255, 55, 255]);
    }

    #[test]
    fn test_grayscale_equalizes_channels() {
        let [r, g, b, a] = run("grayscale(100%)", [200, 30, 90, 255]);
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(a, 255);
    }

    #[test]
    fn test_zero_hue_rotation_is_identity() {
        assert_eq!(run("hue-rotate(0deg)", [12, 150, 230, 255]), [12, 150, 230, 255]);
    }

    #[test]
    fn test_hue_rotation_moves_red() {
        let [r, g, _, _] = run("hue-rotate(120deg)", [255, 0, 0, 255]);
        assert!(g > r, "red should rotate towards green");
    }

    #[test]
    fn test_opacity_only_touches_alpha() {
        assert_eq!(run("opacity(0.7)", [10, 20, 30, 200]), [10, 20, 30, 140]);
    }

    #[test]
    fn test_blur_spreads_a_single_pixel() {
        let mut image = RgbaImage::from_pixel(9, 9, Rgba([0, 0, 0, 255]));
        image.put_pixel(4, 4, Rgba([255, 255, 255, 255]));

        let out = render(&FilterDescriptor::new("blur(2px)"), &image).unwrap();

        assert_eq!(out.dimensions(), (9, 9));
        assert!(out.get_pixel(4, 4).0[0] < 255);
        assert!(out.get_pixel(5, 4).0[0] > 0);
    }

    #[test]
    fn test_composite_applies_in_order() {
        // Desaturate first, then darken: the result stays gray
        let [r, g, b, _] = run("saturate(0) brightness(0.8) contrast(1.5)", [220, 40, 90, 255]);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn test_render_does_not_touch_source() {
        let source = solid([100, 100, 100, 255]);
        let _ = render(&FilterDescriptor::new("invert(100%)"), &source).unwrap();
        assert_eq!(source.get_pixel(0, 0).0, [100, 100, 100, 255]);
    }

    #[test]
    fn test_invalid_descriptor_is_reported() {
        let result = render(&FilterDescriptor::new("sparkle(3)"), &solid([0, 0, 0, 255]));
        assert_eq!(result.err(), Some(FilterError::UnknownFunction("sparkle".to_string())));
    }
}
