//! Discrete colour tables for label masks.
use crate::error::RenderError;
use rgb::RGB8;

const TAB20: [RGB8; 20] = [
    RGB8 { r: 31, g: 119, b: 180 },
    RGB8 { r: 255, g: 127, b: 14 },
    RGB8 { r: 44, g: 160, b: 44 },
    RGB8 { r: 214, g: 39, b: 40 },
    RGB8 { r: 148, g: 103, b: 189 },
    RGB8 { r: 140, g: 86, b: 75 },
    RGB8 { r: 227, g: 119, b: 194 },
    RGB8 { r: 127, g: 127, b: 127 },
    RGB8 { r: 188, g: 189, b: 34 },
    RGB8 { r: 23, g: 190, b: 207 },
    RGB8 { r: 174, g: 199, b: 232 },
    RGB8 { r: 255, g: 187, b: 120 },
    RGB8 { r: 152, g: 223, b: 138 },
    RGB8 { r: 255, g: 152, b: 150 },
    RGB8 { r: 197, g: 176, b: 213 },
    RGB8 { r: 196, g: 156, b: 148 },
    RGB8 { r: 247, g: 182, b: 210 },
    RGB8 { r: 199, g: 199, b: 199 },
    RGB8 { r: 219, g: 219, b: 141 },
    RGB8 { r: 158, g: 218, b: 229 },
];

/// An ordered, non-empty list of label colours. Label `1` takes the first
/// colour, and labels beyond the end of the list wrap around. Background
/// (label `0`) is not part of the palette.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<RGB8>,
}

impl Palette {
    /// Create a palette from the given colours.
    ///
    /// # Errors
    ///
    /// - `RenderError::EmptyPalette` if `colors` is empty.
    pub fn new(colors: Vec<RGB8>) -> Result<Self, RenderError> {
        if colors.is_empty() {
            return Err(RenderError::EmptyPalette);
        }
        Ok(Palette { colors })
    }

    /// Number of colours.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; palettes hold at least one colour.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All colours, in label order.
    pub fn colors(&self) -> &[RGB8] {
        &self.colors
    }

    /// Colour of a label, `None` for background and negative labels.
    pub fn color(&self, label: i64) -> Option<RGB8> {
        if label < 1 {
            return None;
        }
        let index = ((label - 1) as u64 % self.colors.len() as u64) as usize;
        Some(self.colors[index])
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            colors: TAB20.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Palette;
    use crate::error::RenderError;
    use rgb::RGB8;

    #[test]
    fn label_lookup_wraps() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 20);
        assert_eq!(palette.color(0), None);
        assert_eq!(palette.color(-4), None);
        assert_eq!(palette.color(1), Some(palette.colors()[0]));
        assert_eq!(palette.color(3), Some(palette.colors()[2]));
        assert_eq!(palette.color(21), Some(palette.colors()[0]));
    }

    #[test]
    fn default_colours_are_distinct() {
        let palette = Palette::default();
        for (i, a) in palette.colors().iter().enumerate() {
            for b in &palette.colors()[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn custom_palette() {
        let red = RGB8::new(255, 0, 0);
        let blue = RGB8::new(0, 0, 255);
        let palette = Palette::new(vec![red, blue]).unwrap();
        assert_eq!(palette.color(2), Some(blue));
        assert_eq!(palette.color(3), Some(red));
        assert!(matches!(Palette::new(vec![]), Err(RenderError::EmptyPalette)));
    }
}
