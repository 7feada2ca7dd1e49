//! Conversion of slices into RGBA panels.
use super::classify::Classification;
use super::palette::Palette;
use super::{RasterImage, BLACK};
use crate::error::RenderError;
use crate::volume::slice::Slice;
use rgb::{RGB8, RGBA8};
use std::convert::TryFrom;

/// Rasterize a slice: palette colours for masks, min-max windowed grayscale
/// for continuous data. All pixels are fully opaque.
///
/// # Errors
///
/// - `RenderError::RenderFailed` if the slice is empty or too large for an
///   image.
pub fn rasterize(
    slice: &Slice,
    classification: &Classification,
    palette: &Palette,
) -> Result<RasterImage, RenderError> {
    if slice.is_empty() {
        return Err(RenderError::RenderFailed);
    }
    let width = u32::try_from(slice.width()).map_err(|_| RenderError::RenderFailed)?;
    let height = u32::try_from(slice.height()).map_err(|_| RenderError::RenderFailed)?;

    let pixels = if classification.is_mask() {
        colorize(slice.data(), palette)
    } else {
        grayscale(slice.data())
    };
    RasterImage::from_pixels(width, height, pixels)
}

/// Label `0` (and anything below 1) is opaque black.
fn colorize(data: &[f32], palette: &Palette) -> Vec<RGBA8> {
    data.iter()
        .map(|&v| match palette.color(v as i64) {
            Some(c) => opaque(c),
            None => BLACK,
        })
        .collect()
}

/// Extend a palette colour with full opacity.
pub fn opaque(color: RGB8) -> RGBA8 {
    RGBA8::new(color.r, color.g, color.b, 255)
}

/// A slice with a single value is black throughout.
fn grayscale(data: &[f32]) -> Vec<RGBA8> {
    let (min, max) = data
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        });
    if !(max > min) {
        return vec![BLACK; data.len()];
    }
    let range = max - min;
    data.iter()
        .map(|&v| {
            let gray = ((v - min) / range * 255.).clamp(0., 255.) as u8;
            RGBA8::new(gray, gray, gray, 255)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{opaque, rasterize};
    use crate::error::RenderError;
    use crate::render::classify::Classification;
    use crate::render::palette::Palette;
    use crate::volume::slice::Slice;
    use rgb::{RGB8, RGBA8};

    fn mask() -> Classification {
        Classification::Mask {
            labels: vec![1, 2, 3],
        }
    }

    #[test]
    fn mask_colours() {
        let palette = Palette::default();
        let slice = Slice::new(2, 2, vec![0., 1., 3., 21.]).unwrap();
        let image = rasterize(&slice, &mask(), &palette).unwrap();
        assert_eq!((image.width(), image.height()), (2, 2));
        assert_eq!(image.get_pixel(0, 0), Some(RGBA8::new(0, 0, 0, 255)));
        assert_eq!(image.get_pixel(1, 0), Some(opaque(palette.colors()[0])));
        assert_eq!(image.get_pixel(0, 1), Some(opaque(palette.colors()[2])));
        assert_eq!(image.get_pixel(1, 1), Some(opaque(palette.colors()[0])));
    }

    #[test]
    fn injected_palette() {
        let palette = Palette::new(vec![RGB8::new(1, 2, 3)]).unwrap();
        let slice = Slice::new(3, 1, vec![1., 2., 7.]).unwrap();
        let image = rasterize(&slice, &mask(), &palette).unwrap();
        assert!(image.pixels().iter().all(|&p| p == RGBA8::new(1, 2, 3, 255)));
    }

    #[test]
    fn grayscale_window() {
        let slice = Slice::new(3, 1, vec![-10., 0., 10.]).unwrap();
        let image = rasterize(&slice, &Classification::Continuous, &Palette::default()).unwrap();
        assert_eq!(image.get_pixel(0, 0), Some(RGBA8::new(0, 0, 0, 255)));
        assert_eq!(image.get_pixel(1, 0), Some(RGBA8::new(127, 127, 127, 255)));
        assert_eq!(image.get_pixel(2, 0), Some(RGBA8::new(255, 255, 255, 255)));
    }

    #[test]
    fn uniform_slice_is_black() {
        let slice = Slice::new(4, 4, vec![5.; 16]).unwrap();
        let image = rasterize(&slice, &Classification::Continuous, &Palette::default()).unwrap();
        assert!(image.pixels().iter().all(|&p| p == RGBA8::new(0, 0, 0, 255)));
    }

    #[test]
    fn empty_slice_fails() {
        let slice = Slice::new(0, 3, vec![]).unwrap();
        assert!(matches!(
            rasterize(&slice, &Classification::Continuous, &Palette::default()),
            Err(RenderError::RenderFailed)
        ));
    }
}
