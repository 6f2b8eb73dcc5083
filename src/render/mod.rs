//! The tree-to-attributed-text renderer.
//!
//! Rendering is a single depth-first walk over the block tree. Each handler
//! receives an inherited [`RenderState`], derives a private copy for its
//! children, and returns a fully-formed attributed fragment that its caller
//! concatenates. Paragraph separators are appended at sibling boundaries by
//! the block that owns them, never by its parent, so the output never gains
//! a leading or trailing separator.
//!
//! Design notes:
//! - State flows down by value; a sibling never observes another sibling's
//!   formatting changes.
//! - Output flows up by concatenation; a handler owns its fragment until it
//!   returns it.
//! - Measurements stay in em units until a paragraph style is built, then
//!   resolve against the current font's point size in one place.

mod block;
mod environment;
mod inline;
mod state;

pub use environment::RenderEnvironment;
pub use state::{ListMarker, ParagraphEdit, RenderState};

use log::trace;

use crate::document::Document;
use crate::error::{Error, Result};
use crate::style::StyleSheet;
use crate::text::{AttributedText, ParagraphStyle, TabStop};

/// Render a parsed document into attributed text.
///
/// # Errors
///
/// Fails when the style sheet is misconfigured: a non-positive base font
/// size, or a heading level deeper than the heading-scale table.
///
/// # Examples
///
/// ```
/// use galley::{render_document, Document, RenderEnvironment, StyleSheet};
///
/// let doc = Document::from_markdown("# Title\n\nBody text.");
/// let text = render_document(&doc, &StyleSheet::default(), &RenderEnvironment::new())?;
/// assert_eq!(text.plain_text(), "Title\u{2029}Body text.");
/// # Ok::<(), galley::Error>(())
/// ```
pub fn render_document(
    document: &Document,
    sheet: &StyleSheet,
    environment: &RenderEnvironment,
) -> Result<AttributedText> {
    if sheet.base_font.size <= 0.0 {
        return Err(Error::InvalidFontSize(sheet.base_font.size));
    }
    trace!("rendering {} top-level blocks", document.blocks.len());

    let renderer = Renderer {
        sheet,
        env: environment,
    };
    let state = RenderState::new(sheet);
    renderer.render_blocks(&document.blocks, &state)
}

/// Read-only context shared by every handler in one render pass.
pub(crate) struct Renderer<'a> {
    pub(crate) sheet: &'a StyleSheet,
    pub(crate) env: &'a RenderEnvironment,
}

impl Renderer<'_> {
    /// Build the paragraph style for the current state.
    ///
    /// Em measurements resolve against the state's current font; alignment,
    /// writing direction, and line spacing copy verbatim from the
    /// environment.
    pub(crate) fn paragraph_style(&self, state: &RenderState) -> ParagraphStyle {
        let point_size = state.font.resolve(self.env.content_scale).point_size;
        ParagraphStyle {
            alignment: self.env.alignment,
            writing_direction: self.env.writing_direction,
            line_spacing: self.env.line_spacing,
            paragraph_spacing: state.paragraph_spacing.resolve(point_size),
            head_indent: state.head_indent.resolve(point_size),
            tail_indent: state.tail_indent.resolve(point_size),
            tab_stops: state
                .tab_stops()
                .iter()
                .map(|&(alignment, location)| TabStop {
                    alignment,
                    location: location.resolve(point_size),
                })
                .collect(),
        }
    }
}
