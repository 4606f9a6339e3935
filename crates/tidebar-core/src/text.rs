//! Fonts and text measurement.
//!
//! The widget layer needs to know how much space a title occupies, but
//! rendering and glyph shaping belong to the host toolkit. [`TextMetrics`]
//! is the seam: the host supplies real shaping, and [`BoxMetrics`]
//! provides a deterministic default that is good enough for layout and
//! stable under test.

use crate::types::Size;

/// A font family selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontFamily {
    /// The platform's default sans-serif face.
    #[default]
    SansSerif,
    /// The platform's default serif face.
    Serif,
    /// The platform's default monospace face.
    Monospace,
    /// A specific family by name.
    Name(String),
}

/// A font description: family plus point size.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    size: f32,
}

impl Font {
    /// Create a font with the given family and point size.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self { family, size }
    }

    /// The system font at the default control size of 17 points.
    pub fn system() -> Self {
        Self::new(FontFamily::SansSerif, 17.0)
    }

    /// The font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// The point size.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Return the same font at a different point size.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system()
    }
}

/// Measures the space a run of text occupies in a given font.
pub trait TextMetrics {
    /// The bounding size of `text` laid out on a single line.
    ///
    /// Empty text measures as [`Size::ZERO`].
    fn measure(&self, text: &str, font: &Font) -> Size;
}

/// Deterministic fallback metrics.
///
/// Every glyph advances by a fixed fraction of the point size and the
/// line height is a fixed multiple of it. Proportional enough for
/// layout, and exactly reproducible in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxMetrics;

impl BoxMetrics {
    /// Horizontal advance per glyph, as a fraction of the point size.
    pub const ADVANCE: f32 = 0.6;
    /// Line height, as a multiple of the point size.
    pub const LINE_HEIGHT: f32 = 1.2;
}

impl TextMetrics for BoxMetrics {
    fn measure(&self, text: &str, font: &Font) -> Size {
        let glyphs = text.chars().count();
        if glyphs == 0 {
            return Size::ZERO;
        }
        Size::new(
            glyphs as f32 * font.size() * Self::ADVANCE,
            font.size() * Self::LINE_HEIGHT,
        )
    }
}

/// Measure `text` with the default [`BoxMetrics`].
pub fn measure_text(text: &str, font: &Font) -> Size {
    BoxMetrics.measure(text, font)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_measures_zero() {
        assert_eq!(measure_text("", &Font::system()), Size::ZERO);
    }

    #[test]
    fn measure_scales_with_length_and_size() {
        let font = Font::new(FontFamily::SansSerif, 10.0);
        let one = measure_text("a", &font);
        let four = measure_text("abcd", &font);
        assert_eq!(one.width * 4.0, four.width);
        assert_eq!(one.height, four.height);

        let doubled = measure_text("a", &font.clone().with_size(20.0));
        assert_eq!(doubled.width, one.width * 2.0);
    }

    #[test]
    fn measure_counts_chars_not_bytes() {
        let font = Font::system();
        assert_eq!(measure_text("éé", &font), measure_text("ee", &font));
    }
}
