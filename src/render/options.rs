//! Preview rendering options.
use super::palette::Palette;

/// Rendering options
///
/// Controls the mask heuristic, the label colours and the layout of the
/// composite image. The defaults reproduce the stock preview.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Colours for mask labels.
    ///
    /// - Default value: 20 colours (tab10 followed by its light companions)
    palette: Palette,
    /// Most distinct non-zero values a mask may hold.
    ///
    /// - Default value: 50
    max_labels: usize,
    /// Exclusive upper bound on mask label values.
    ///
    /// - Default value: 1000
    label_limit: i64,
    /// Space around and between panels, in pixels.
    ///
    /// - Default value: 10
    margin: u32,
    /// Height of the title band, in pixels.
    ///
    /// - Default value: 30
    title_height: u32,
    /// Height of the caption band above each panel, in pixels.
    ///
    /// - Default value: 20
    label_height: u32,
    /// Height of the legend band of 3D mask previews, in pixels.
    ///
    /// - Default value: 20
    legend_height: u32,
    /// Most entries in the legend; longer legends end with a summary entry.
    ///
    /// - Default value: 15
    max_legend_entries: usize,
    /// Fraction of the canvas a single 2D panel fills.
    ///
    /// - Default value: 0.9
    fill_ratio: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            palette: Palette::default(),
            max_labels: 50,
            label_limit: 1000,
            margin: 10,
            title_height: 30,
            label_height: 20,
            legend_height: 20,
            max_legend_entries: 15,
            fill_ratio: 0.9,
        }
    }
}

impl RenderOptions {
    /// Get the label palette
    pub fn get_palette(&self) -> &Palette {
        &self.palette
    }
    /// Get the maximum number of mask labels
    pub const fn get_max_labels(&self) -> usize {
        self.max_labels
    }
    /// Get the exclusive upper bound on mask labels
    pub const fn get_label_limit(&self) -> i64 {
        self.label_limit
    }
    /// Get the panel margin
    pub const fn get_margin(&self) -> u32 {
        self.margin
    }
    /// Get the title band height
    pub const fn get_title_height(&self) -> u32 {
        self.title_height
    }
    /// Get the caption band height
    pub const fn get_label_height(&self) -> u32 {
        self.label_height
    }
    /// Get the legend band height
    pub const fn get_legend_height(&self) -> u32 {
        self.legend_height
    }
    /// Get the maximum number of legend entries
    pub const fn get_max_legend_entries(&self) -> usize {
        self.max_legend_entries
    }
    /// Get the fill ratio of 2D previews
    pub fn get_fill_ratio(&self) -> f64 {
        self.fill_ratio
    }

    /// Set the label palette
    pub fn set_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
    /// Set the maximum number of distinct labels a mask may hold
    pub fn set_max_labels(mut self, max_labels: usize) -> Self {
        self.max_labels = max_labels;
        self
    }
    /// Set the exclusive upper bound on mask label values
    pub fn set_label_limit(mut self, label_limit: i64) -> Self {
        self.label_limit = label_limit;
        self
    }
    /// Set the panel margin
    pub fn set_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }
    /// Set the title band height
    pub fn set_title_height(mut self, height: u32) -> Self {
        self.title_height = height;
        self
    }
    /// Set the caption band height
    pub fn set_label_height(mut self, height: u32) -> Self {
        self.label_height = height;
        self
    }
    /// Set the legend band height
    pub fn set_legend_height(mut self, height: u32) -> Self {
        self.legend_height = height;
        self
    }
    /// Set the maximum number of legend entries, 0 to leave the legend out
    pub fn set_max_legend_entries(mut self, max_entries: usize) -> Self {
        self.max_legend_entries = max_entries;
        self
    }
    /// Set the fill ratio of 2D previews, clamped to `(0, 1]`
    pub fn set_fill_ratio(mut self, ratio: f64) -> Self {
        self.fill_ratio = if ratio > 0. { ratio.min(1.) } else { 1. };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::RenderOptions;
    use crate::render::palette::Palette;

    #[test]
    fn defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.get_palette(), &Palette::default());
        assert_eq!(options.get_max_labels(), 50);
        assert_eq!(options.get_label_limit(), 1000);
        assert_eq!(options.get_margin(), 10);
        assert_eq!(options.get_title_height(), 30);
        assert_eq!(options.get_label_height(), 20);
        assert_eq!(options.get_legend_height(), 20);
        assert_eq!(options.get_max_legend_entries(), 15);
        assert_eq!(options.get_fill_ratio(), 0.9);
    }

    #[test]
    fn fill_ratio_is_clamped() {
        let options = RenderOptions::default();
        assert_eq!(options.clone().set_fill_ratio(0.5).get_fill_ratio(), 0.5);
        assert_eq!(options.clone().set_fill_ratio(3.).get_fill_ratio(), 1.);
        assert_eq!(options.set_fill_ratio(-1.).get_fill_ratio(), 1.);
    }
}
