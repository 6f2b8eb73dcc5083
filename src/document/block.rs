//! Block-level document structure.

use crate::document::Inline;

/// A parsed Markdown document: an ordered sequence of top-level blocks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

/// A structural element occupying its own paragraph-like space.
///
/// The kind set is closed; the renderer dispatches with an exhaustive
/// `match`, so there is no "unknown block" case at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph {
        content: Vec<Inline>,
    },
    /// Section heading. CommonMark input produces levels 1-6; the level must
    /// have an entry in the style sheet's heading-scale table.
    Heading {
        level: u8,
        content: Vec<Inline>,
    },
    BlockQuote {
        content: Vec<Block>,
    },
    BulletList {
        items: Vec<ListItem>,
    },
    /// Ordered list. Ordinals are absolute: the list's own position among
    /// its siblings is the value of its first item, so a list opening a
    /// document numbers from 0 and a list after one paragraph numbers
    /// from 1.
    OrderedList {
        items: Vec<ListItem>,
    },
    /// Preformatted text, kept verbatim including its trailing newline.
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    /// Raw markup, rendered as plain text without interpretation.
    HtmlBlock {
        html: String,
    },
    /// Horizontal rule.
    ThematicBreak,
}

/// One item of a bullet or ordered list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListItem {
    pub blocks: Vec<Block>,
}

impl ListItem {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}
