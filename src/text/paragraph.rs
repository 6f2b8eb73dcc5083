//! Paragraph-level formatting attached to rendered ranges.

use crate::style::{TextAlignment, WritingDirection};

/// Alignment of text arriving at a tab stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabAlignment {
    /// Text continues from the stop in the writing direction.
    #[default]
    Natural,
    /// Text before the next tab right-aligns ending at the stop; used to
    /// line up list markers just before the item body.
    Trailing,
}

/// A horizontal alignment point, located in absolute units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabStop {
    pub alignment: TabAlignment,
    pub location: f32,
}

impl TabStop {
    pub fn natural(location: f32) -> Self {
        Self {
            alignment: TabAlignment::Natural,
            location,
        }
    }

    pub fn trailing(location: f32) -> Self {
        Self {
            alignment: TabAlignment::Trailing,
            location,
        }
    }
}

/// Formatting for a whole paragraph.
///
/// All measurements are absolute (device-independent units): the builder in
/// the render module resolves the formatting state's em values against the
/// current font before constructing one of these. Attached over the entire
/// range of a rendered paragraph via
/// [`AttributedText::set_paragraph_style`](crate::AttributedText::set_paragraph_style).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParagraphStyle {
    pub alignment: TextAlignment,
    pub writing_direction: WritingDirection,
    pub line_spacing: f32,
    pub paragraph_spacing: f32,
    pub head_indent: f32,
    pub tail_indent: f32,
    pub tab_stops: Vec<TabStop>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_stop_constructors() {
        let stop = TabStop::trailing(24.0);
        assert_eq!(stop.alignment, TabAlignment::Trailing);
        assert_eq!(stop.location, 24.0);
        assert_eq!(TabStop::natural(0.0).alignment, TabAlignment::Natural);
    }

    #[test]
    fn test_default_style_is_zeroed() {
        let style = ParagraphStyle::default();
        assert_eq!(style.head_indent, 0.0);
        assert_eq!(style.tail_indent, 0.0);
        assert!(style.tab_stops.is_empty());
        assert_eq!(style.alignment, TextAlignment::Natural);
    }
}
