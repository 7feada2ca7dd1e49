//! Preview rendering of decoded volumes.
//!
//! A 3D volume is shown as its three orthogonal mid-slices side by side,
//! under a title holding its size and, for masks, a colour legend; a 2D
//! volume is shown on its own. Volumes
//! classified as label masks are drawn with a discrete palette, anything
//! else as grayscale windowed to the slice's own range.

pub mod classify;
pub mod compose;
mod font;
pub mod options;
pub mod palette;
pub mod raster;

use self::classify::Classification;
use self::compose::{compose_panels, compose_single, legend_entries, Panel};
use self::options::RenderOptions;
use self::raster::rasterize;
use crate::error::RenderError;
use crate::volume::slice::{Orientation, Slice};
use crate::volume::NrrdVolume;
use log::debug;
use rgb::RGBA8;

pub(crate) const BLACK: RGBA8 = RGBA8 {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};
pub(crate) const GRAY: RGBA8 = RGBA8 {
    r: 127,
    g: 127,
    b: 127,
    a: 255,
};
pub(crate) const WHITE: RGBA8 = RGBA8 {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};

/// An RGBA8 bitmap, row-major. Every pixel this crate produces is fully
/// opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<RGBA8>,
}

impl RasterImage {
    /// Create an image of a single colour.
    ///
    /// # Errors
    ///
    /// - `RenderError::RenderFailed` if either side is zero or the pixel
    ///   count does not fit in memory.
    pub fn filled(width: u32, height: u32, color: RGBA8) -> Result<Self, RenderError> {
        let len = pixel_count(width, height)?;
        Ok(RasterImage {
            width,
            height,
            pixels: vec![color; len],
        })
    }

    /// Wrap a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// - `RenderError::RenderFailed` if the buffer length differs from
    ///   `width × height`, or either side is zero.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<RGBA8>) -> Result<Self, RenderError> {
        if pixel_count(width, height)? != pixels.len() {
            return Err(RenderError::RenderFailed);
        }
        Ok(RasterImage {
            width,
            height,
            pixels,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[RGBA8] {
        &self.pixels
    }

    /// The pixel buffer as interleaved RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Consume the image into interleaved RGBA bytes.
    pub fn into_raw(self) -> Vec<u8> {
        bytemuck::allocation::pod_collect_to_vec(&self.pixels)
    }

    /// The pixel at column `x` of row `y`.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<RGBA8> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Set a pixel; coordinates outside the image are ignored.
    pub(crate) fn put_pixel(&mut self, x: u32, y: u32, color: RGBA8) {
        if x < self.width && y < self.height {
            let i = self.index(x, y);
            self.pixels[i] = color;
        }
    }

    /// Fill the part of `rect` inside the image.
    pub(crate) fn fill_rect(&mut self, rect: Rect, color: RGBA8) {
        let x1 = rect.x.saturating_add(rect.w).min(self.width);
        let y1 = rect.y.saturating_add(rect.h).min(self.height);
        for y in rect.y..y1 {
            for x in rect.x..x1 {
                let i = self.index(x, y);
                self.pixels[i] = color;
            }
        }
    }
}

fn pixel_count(width: u32, height: u32) -> Result<usize, RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::RenderFailed);
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(RenderError::RenderFailed)
}

/// An axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Rect { x, y, w, h }
    }
}

/// Render a preview of `volume` at the requested size with the default
/// options.
///
/// # Example
///
/// ```
/// use nrrd_preview::{decode, render_preview};
///
/// let mut bytes = b"NRRD0004\ntype: uint8\nsizes: 4 4 2\n\n".to_vec();
/// bytes.extend((0..32u8).map(|i| i / 11));
/// let volume = decode(&bytes).unwrap();
/// let image = render_preview(&volume, 800, 600).unwrap();
/// assert_eq!((image.width(), image.height()), (800, 600));
/// ```
pub fn render_preview(
    volume: &NrrdVolume,
    width: u32,
    height: u32,
) -> Result<RasterImage, RenderError> {
    render_preview_with_options(volume, width, height, &RenderOptions::default())
}

/// Render a preview of `volume` at the requested size.
///
/// # Errors
///
/// - `RenderError::UnsupportedDimensionality` unless the volume is 2D or 3D.
/// - `RenderError::RenderFailed` if the target size is empty or no slice
///   could be rasterized.
pub fn render_preview_with_options(
    volume: &NrrdVolume,
    width: u32,
    height: u32,
    options: &RenderOptions,
) -> Result<RasterImage, RenderError> {
    let rank = volume.dimensionality();
    if rank != 2 && rank != 3 {
        return Err(RenderError::UnsupportedDimensionality(rank));
    }
    if width == 0 || height == 0 {
        return Err(RenderError::RenderFailed);
    }

    let classification = Classification::of(
        volume.samples(),
        options.get_max_labels(),
        options.get_label_limit(),
    );
    debug!(
        "rendering {:?} volume as {}",
        volume.dim(),
        if classification.is_mask() { "mask" } else { "grayscale" }
    );

    if rank == 2 {
        let slice = Slice::from_2d(volume).map_err(|_| RenderError::RenderFailed)?;
        let panel = rasterize(&slice, &classification, options.get_palette())?;
        return compose_single(&panel, width, height, options);
    }

    let panels: Vec<Panel> = Orientation::ALL
        .iter()
        .map(|&orientation| {
            let index = Slice::mid_index(volume, orientation).unwrap_or(0);
            let image = Slice::extract(volume, orientation, index)
                .ok()
                .and_then(|slice| rasterize(&slice, &classification, options.get_palette()).ok());
            Panel {
                image,
                caption: format!("{} {}={}", orientation, orientation.axis_name(), index),
            }
        })
        .collect();
    if panels.iter().all(|p| p.image.is_none()) {
        return Err(RenderError::RenderFailed);
    }

    let dim = volume.dim();
    let mut title = format!("{}x{}x{}", dim[0], dim[1], dim[2]);
    if classification.is_mask() {
        title.push_str(&format!("  {} labels", classification.labels().len()));
    }
    let legend = legend_entries(
        classification.labels(),
        options.get_palette(),
        options.get_max_legend_entries(),
    );
    compose_panels(&panels, &title, &legend, width, height, options)
}

#[cfg(test)]
mod tests {
    use super::{RasterImage, Rect, BLACK, WHITE};
    use crate::error::RenderError;

    #[test]
    fn raw_bytes() {
        let mut image = RasterImage::filled(2, 1, BLACK).unwrap();
        image.put_pixel(1, 0, WHITE);
        assert_eq!(image.as_bytes(), &[0, 0, 0, 255, 255, 255, 255, 255]);
        assert_eq!(image.into_raw(), vec![0, 0, 0, 255, 255, 255, 255, 255]);
    }

    #[test]
    fn clipped_drawing() {
        let mut image = RasterImage::filled(3, 3, BLACK).unwrap();
        image.put_pixel(5, 5, WHITE);
        image.fill_rect(Rect::new(2, 2, 10, 10), WHITE);
        let white: Vec<_> = image.pixels().iter().filter(|&&p| p == WHITE).collect();
        assert_eq!(white.len(), 1);
        assert_eq!(image.get_pixel(2, 2), Some(WHITE));
        assert_eq!(image.get_pixel(3, 0), None);
    }

    #[test]
    fn invalid_sizes() {
        assert!(matches!(
            RasterImage::filled(0, 4, BLACK),
            Err(RenderError::RenderFailed)
        ));
        assert!(matches!(
            RasterImage::from_pixels(2, 2, vec![BLACK; 3]),
            Err(RenderError::RenderFailed)
        ));
    }
}
