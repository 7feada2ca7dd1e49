//! Layout of rasterized panels into the final preview image.
use super::font::draw_text;
use super::options::RenderOptions;
use super::palette::Palette;
use super::raster::opaque;
use super::{RasterImage, Rect, BLACK, GRAY, WHITE};
use crate::error::RenderError;
use log::debug;
use rgb::RGBA8;

/// A rasterized slice and the caption drawn above it. Panels whose slice
/// could not be rasterized keep their caption and leave their area black.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// The rasterized slice, if any.
    pub image: Option<RasterImage>,
    /// Caption, such as `Axial z=12`.
    pub caption: String,
}

/// A colour swatch and its text in the legend of a mask preview.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    /// Swatch colour.
    pub color: RGBA8,
    /// Text drawn next to the swatch, such as `Label 3`.
    pub text: String,
}

/// Legend entries for the given labels, in order. Labels without a colour
/// (below 1) are left out. When more than `max_entries` labels remain, the
/// last entry summarizes the ones not shown.
pub fn legend_entries(labels: &[i64], palette: &Palette, max_entries: usize) -> Vec<LegendEntry> {
    let colored: Vec<(i64, RGBA8)> = labels
        .iter()
        .filter_map(|&label| palette.color(label).map(|c| (label, opaque(c))))
        .collect();
    if max_entries == 0 {
        return Vec::new();
    }

    let shown = if colored.len() > max_entries {
        max_entries - 1
    } else {
        colored.len()
    };
    let mut entries: Vec<LegendEntry> = colored[..shown]
        .iter()
        .map(|&(label, color)| LegendEntry {
            color,
            text: format!("Label {}", label),
        })
        .collect();
    if shown < colored.len() {
        entries.push(LegendEntry {
            color: GRAY,
            text: format!("... +{} more", colored.len() - shown),
        });
    }
    entries
}

/// Lay out panels left to right below a title band and, if `legend` is not
/// empty, a legend band.
///
/// Each column gets a caption band followed by a panel rectangle; the slice
/// is scaled with nearest-neighbour sampling to fit its rectangle, keeping
/// its aspect ratio, and centred in it.
pub fn compose_panels(
    panels: &[Panel],
    title: &str,
    legend: &[LegendEntry],
    width: u32,
    height: u32,
    options: &RenderOptions,
) -> Result<RasterImage, RenderError> {
    let mut canvas = RasterImage::filled(width, height, BLACK)?;
    let margin = options.get_margin();
    let label_height = options.get_label_height();

    let title_rect = Rect::new(0, margin, width, options.get_title_height());
    draw_text(&mut canvas, title, title_rect, WHITE);

    let legend_top = title_rect.y.saturating_add(title_rect.h);
    let legend_height = if legend.is_empty() {
        0
    } else {
        options.get_legend_height()
    };
    if !legend.is_empty() {
        let legend_rect = Rect::new(
            margin,
            legend_top,
            width.saturating_sub(margin.saturating_mul(2)),
            legend_height,
        );
        draw_legend(&mut canvas, legend, legend_rect);
    }

    let columns = (panels.len() as u32).max(1);
    let column_width = width.saturating_sub(margin.saturating_mul(columns.saturating_add(1))) / columns;
    let caption_top = legend_top.saturating_add(legend_height);
    let panel_top = caption_top.saturating_add(label_height);
    let panel_height = height.saturating_sub(panel_top.saturating_add(margin));
    debug!(
        "composing {} panels of {}x{} on a {}x{} canvas",
        panels.len(),
        column_width,
        panel_height,
        width,
        height
    );

    for (i, panel) in panels.iter().enumerate() {
        let x = margin.saturating_add(
            (i as u32).saturating_mul(column_width.saturating_add(margin)),
        );
        draw_text(
            &mut canvas,
            &panel.caption,
            Rect::new(x, caption_top, column_width, label_height),
            WHITE,
        );
        if let Some(image) = &panel.image {
            draw_fitted(
                &mut canvas,
                image,
                Rect::new(x, panel_top, column_width, panel_height),
                1.,
            );
        }
    }
    Ok(canvas)
}

/// Entries share the band width equally; each is a square swatch followed
/// by its text.
fn draw_legend(canvas: &mut RasterImage, legend: &[LegendEntry], rect: Rect) {
    let entry_width = rect.w / (legend.len() as u32).max(1);
    let swatch = (rect.h / 2).max(1);
    let swatch_y = rect.y.saturating_add((rect.h.saturating_sub(swatch)) / 2);
    for (i, entry) in legend.iter().enumerate() {
        let x = rect
            .x
            .saturating_add((i as u32).saturating_mul(entry_width));
        canvas.fill_rect(Rect::new(x, swatch_y, swatch, swatch), entry.color);
        let gap = swatch.saturating_add(swatch / 2);
        draw_text(
            canvas,
            &entry.text,
            Rect::new(
                x.saturating_add(gap),
                rect.y,
                entry_width.saturating_sub(gap),
                rect.h,
            ),
            WHITE,
        );
    }
}

/// Centre a single panel on the canvas, scaled to `fill_ratio` of the
/// largest size that fits.
pub fn compose_single(
    panel: &RasterImage,
    width: u32,
    height: u32,
    options: &RenderOptions,
) -> Result<RasterImage, RenderError> {
    let mut canvas = RasterImage::filled(width, height, BLACK)?;
    draw_fitted(
        &mut canvas,
        panel,
        Rect::new(0, 0, width, height),
        options.get_fill_ratio(),
    );
    Ok(canvas)
}

/// Size of `src` scaled uniformly to fit `rect`, times `ratio`.
fn fitted_size(src: &RasterImage, rect: Rect, ratio: f64) -> (u32, u32) {
    let sx = f64::from(rect.w) / f64::from(src.width());
    let sy = f64::from(rect.h) / f64::from(src.height());
    let scale = sx.min(sy) * ratio;
    let fit = |n: u32, limit: u32| ((f64::from(n) * scale + 1e-9).floor() as u32).min(limit);
    (fit(src.width(), rect.w), fit(src.height(), rect.h))
}

/// Nearest-neighbour blit of `src`, scaled to fit and centred in `rect`.
fn draw_fitted(canvas: &mut RasterImage, src: &RasterImage, rect: Rect, ratio: f64) {
    let (w, h) = fitted_size(src, rect, ratio);
    if w == 0 || h == 0 {
        return;
    }
    let x0 = rect.x.saturating_add((rect.w - w) / 2);
    let y0 = rect.y.saturating_add((rect.h - h) / 2);
    for dy in 0..h {
        let sy = (u64::from(dy) * u64::from(src.height()) / u64::from(h)) as u32;
        for dx in 0..w {
            let sx = (u64::from(dx) * u64::from(src.width()) / u64::from(w)) as u32;
            if let Some(p) = src.get_pixel(sx, sy) {
                canvas.put_pixel(x0.saturating_add(dx), y0.saturating_add(dy), p);
            }
        }
    }
}
