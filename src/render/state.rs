//! Inherited formatting state, threaded through the block walk.
//!
//! The state is a value: each structural block clones it, adjusts the copy,
//! and passes the copy down. Nothing a child does is visible to its parent
//! or siblings, so indentation and font changes unwind automatically when
//! the walk climbs back out of a subtree.

use smallvec::SmallVec;

use crate::style::{Color, Em, FontDescriptor, StyleSheet};
use crate::text::TabAlignment;

/// A list item marker: a bullet disc or an absolute ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    Bullet,
    /// Rendered as `{n}.` with no offset adjustment; the list renderer is
    /// responsible for computing the absolute value.
    Ordinal(usize),
}

impl ListMarker {
    /// The marker's paragraph text. The leading tab carries the marker to
    /// the trailing-aligned stop just before the item body; the trailing tab
    /// carries the body to its natural stop at the head indent.
    pub(crate) fn text(&self) -> String {
        match self {
            ListMarker::Bullet => "\t\u{2022}\t".to_owned(),
            ListMarker::Ordinal(n) => format!("\t{n}.\t"),
        }
    }
}

/// A pending edit applied to the front of the next rendered paragraph.
#[derive(Debug, Clone, PartialEq)]
pub enum ParagraphEdit {
    /// Emit `tabs` tab characters in the paragraph's own font.
    FirstLineIndent { tabs: usize },
    /// Emit a list marker in the font that was current when the marker was
    /// set, so a heading inside a list item does not inflate its marker.
    Marker {
        marker: ListMarker,
        font: FontDescriptor,
    },
}

/// Formatting inherited from enclosing blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    /// Font for body text at this nesting depth.
    pub font: FontDescriptor,
    /// Foreground color for body text.
    pub color: Color,
    /// Space after each paragraph, relative to its font size.
    pub paragraph_spacing: Em,
    /// Indentation of every line, relative to the font size.
    pub head_indent: Em,
    /// Indentation from the trailing edge.
    pub tail_indent: Em,
    tab_stops: SmallVec<[(TabAlignment, Em); 4]>,
    edits: SmallVec<[ParagraphEdit; 2]>,
}

impl RenderState {
    /// The root state a document starts from.
    pub fn new(sheet: &StyleSheet) -> Self {
        Self {
            font: sheet.base_font.clone(),
            color: sheet.foreground_color,
            paragraph_spacing: sheet.measurements.paragraph_spacing,
            head_indent: Em::ZERO,
            tail_indent: Em::ZERO,
            tab_stops: SmallVec::new(),
            edits: SmallVec::new(),
        }
    }

    /// Replace any pending marker with `marker`, bound to the current font.
    ///
    /// An already-pending marker downgrades to a plain two-unit indent, so
    /// at most one marker is ever pending. A nested list's first item keeps
    /// its parent item's indentation without repeating the parent's marker.
    /// Passing `None` performs only the downgrade.
    pub fn set_list_marker(&mut self, marker: Option<ListMarker>) {
        for edit in &mut self.edits {
            if matches!(edit, ParagraphEdit::Marker { .. }) {
                *edit = ParagraphEdit::FirstLineIndent { tabs: 2 };
            }
        }
        if let Some(marker) = marker {
            self.edits.push(ParagraphEdit::Marker {
                marker,
                font: self.font.clone(),
            });
        }
    }

    /// Queue a first-line indent of `tabs` tab characters.
    pub fn add_first_line_indent(&mut self, tabs: usize) {
        self.edits.push(ParagraphEdit::FirstLineIndent { tabs });
    }

    /// Register a tab stop at `location` from the leading margin.
    pub fn add_tab_stop(&mut self, alignment: TabAlignment, location: Em) {
        self.tab_stops.push((alignment, location));
    }

    /// Pending paragraph edits, in the order they will be emitted.
    pub fn edits(&self) -> &[ParagraphEdit] {
        &self.edits
    }

    /// Accumulated tab stops, innermost last.
    pub fn tab_stops(&self) -> &[(TabAlignment, Em)] {
        &self.tab_stops
    }
}
