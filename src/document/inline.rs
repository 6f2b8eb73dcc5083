//! Inline document structure: elements within flowing text.

/// An element within a paragraph, heading, or other flowing-text container.
///
/// Like [`Block`](crate::document::Block), the kind set is closed and
/// matched exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    /// A source line break that collapses to a single space.
    SoftBreak,
    /// A hard break: new line within the same paragraph.
    LineBreak,
    /// Code span.
    Code(String),
    /// Raw inline markup, rendered as its plain source text.
    Html(String),
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    Link {
        destination: String,
        /// Tooltip text; empty when the source supplied none.
        title: String,
        content: Vec<Inline>,
    },
    /// Image reference. Alt-text children are not carried; rendering
    /// substitutes a placeholder run for the resolved source.
    Image {
        source: String,
    },
}
