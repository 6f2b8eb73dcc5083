//! Width measurement for rendered text.
//!
//! The renderer needs widths in exactly one place: sizing the head-indent
//! step of an ordered list so its widest ordinal ("10.") fits before the
//! body text. Real glyph advances depend on the display layer's fonts, so
//! measurement sits behind a trait; [`CellMetrics`] supplies a deterministic
//! approximation good enough for layout that a text engine later refines.

use unicode_width::UnicodeWidthStr;

use crate::style::ResolvedFont;

/// Measures rendered text width in device-independent units.
pub trait FontMetrics {
    /// Width of `text` when rendered with `font`.
    fn text_width(&self, text: &str, font: &ResolvedFont) -> f32;
}

/// Column-based width approximation.
///
/// Counts Unicode display columns (CJK and other wide characters take two)
/// and charges half an em per column, close to the tabular-figure advance of
/// common UI faces. Deterministic and font-file free.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMetrics;

/// Em width charged per display column.
const COLUMN_EM: f32 = 0.5;

impl FontMetrics for CellMetrics {
    fn text_width(&self, text: &str, font: &ResolvedFont) -> f32 {
        // Fast path for ASCII-only text
        let columns = if text.is_ascii() {
            text.len()
        } else {
            UnicodeWidthStr::width(text)
        };
        columns as f32 * COLUMN_EM * font.point_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{FontDescriptor, FontFamily};

    fn font(size: f32) -> ResolvedFont {
        FontDescriptor::new(FontFamily::SansSerif, size).resolve(1.0)
    }

    #[test]
    fn test_ascii_width_scales_with_point_size() {
        let metrics = CellMetrics;
        assert_eq!(metrics.text_width("10.", &font(15.0)), 22.5); // 3 * 0.5 * 15
        assert_eq!(metrics.text_width("10.", &font(30.0)), 45.0);
        assert_eq!(metrics.text_width("", &font(15.0)), 0.0);
    }

    #[test]
    fn test_wide_characters_take_two_columns() {
        let metrics = CellMetrics;
        let narrow = metrics.text_width("ab", &font(16.0));
        let wide = metrics.text_width("語", &font(16.0));
        assert_eq!(narrow, wide); // 2 columns each
    }

    #[test]
    fn test_longer_ordinals_measure_wider() {
        let metrics = CellMetrics;
        let f = font(15.0);
        assert!(metrics.text_width("10.", &f) > metrics.text_width("9.", &f));
    }
}
