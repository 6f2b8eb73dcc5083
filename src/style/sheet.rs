//! Style sheets: the typographic configuration a document renders against.

use crate::style::{Color, Em, FontDescriptor, FontFamily};

/// Typographic configuration for rendering.
///
/// A style sheet supplies the base font and colors plus a [`Measurements`]
/// bundle of relative values. It is read-only during rendering; the renderer
/// seeds its initial formatting state from it.
///
/// # Examples
///
/// ```
/// use galley::{Em, StyleSheet};
///
/// let mut sheet = StyleSheet::default();
/// sheet.base_font.size = 17.0;
/// sheet.measurements.paragraph_spacing = Em(0.8);
/// assert_eq!(sheet.heading_scale(1), Some(2.0));
/// assert_eq!(sheet.heading_scale(7), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    pub base_font: FontDescriptor,
    pub foreground_color: Color,
    /// Rule color for thematic breaks.
    pub separator_color: Color,
    pub measurements: Measurements,
}

impl StyleSheet {
    /// Scale factor for a 1-based heading level, if the sheet configures one.
    pub fn heading_scale(&self, level: u8) -> Option<f32> {
        let index = usize::from(level.checked_sub(1)?);
        self.measurements.heading_scales.get(index).copied()
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            base_font: FontDescriptor::new(FontFamily::SansSerif, 15.0),
            foreground_color: Color::BLACK,
            separator_color: Color::rgb(198, 198, 200),
            measurements: Measurements::default(),
        }
    }
}

/// Relative measurements applied while rendering.
///
/// All `Em` values are multiples of the current font's point size at the
/// moment a paragraph style is built, not the base font's.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurements {
    /// Space appended after a paragraph.
    pub paragraph_spacing: Em,
    /// How far block quotes, lists, and code blocks move the margin per
    /// nesting level.
    pub indent_step: Em,
    /// Gap between a list marker and the item body.
    pub marker_spacing: Em,
    /// Font scale for code blocks and code spans.
    pub code_font_scale: f32,
    /// Space appended after a heading, replacing the inherited spacing.
    pub heading_spacing: Em,
    /// Per-level font scales, index 0 = level 1. A heading whose level has
    /// no entry here fails rendering with [`Error::HeadingDepth`].
    ///
    /// [`Error::HeadingDepth`]: crate::Error::HeadingDepth
    pub heading_scales: Vec<f32>,
}

impl Default for Measurements {
    fn default() -> Self {
        Self {
            paragraph_spacing: Em(0.6),
            indent_step: Em(1.5),
            marker_spacing: Em(0.4),
            code_font_scale: 0.9,
            heading_spacing: Em(1.0),
            // The HTML user-agent ladder: h1 2em down to h6 0.67em.
            heading_scales: vec![2.0, 1.5, 1.17, 1.0, 0.83, 0.67],
        }
    }
}
