//! # galley
//!
//! A library for rendering parsed Markdown into styled, attributed text.
//!
//! ## Features
//!
//! - Renders the CommonMark block set: paragraphs, headings, block quotes,
//!   nested bullet and ordered lists, code blocks, thematic breaks
//! - Typographic output: fonts, colors, indents, tab stops, paragraph
//!   spacing, links, image attachments
//! - Style-sheet driven, with em-relative measurements resolved to points
//!   at render time
//! - Deterministic: rendering is a pure function of document, style sheet,
//!   and environment
//!
//! ## Quick Start
//!
//! ```
//! use galley::{render_document, Document, RenderEnvironment, StyleSheet};
//!
//! let doc = Document::from_markdown("# Hello\n\nSome *styled* text.");
//! let text = render_document(&doc, &StyleSheet::default(), &RenderEnvironment::new())?;
//!
//! for run in text.runs() {
//!     println!("{:?} in {:?}", run.text, run.attrs.font.family);
//! }
//! # Ok::<(), galley::Error>(())
//! ```
//!
//! ## Output Model
//!
//! The result is a flat sequence of [`Run`]s, each carrying its complete
//! attributes. Paragraphs are separated by U+2029, forced line breaks use
//! U+2028, and paragraph-level formatting (indents, tab stops, spacing)
//! rides on every run of the paragraph it applies to:
//!
//! ```
//! use galley::{render_document, Document, RenderEnvironment, StyleSheet};
//!
//! let doc = Document::from_markdown("> quoted");
//! let text = render_document(&doc, &StyleSheet::default(), &RenderEnvironment::new())?;
//!
//! let style = text.runs()[0].attrs.paragraph.as_ref().unwrap();
//! assert!(style.head_indent > 0.0);
//! assert!(text.runs()[1].attrs.font.is_italic());
//! # Ok::<(), galley::Error>(())
//! ```

pub mod document;
pub mod error;
pub mod render;
pub mod style;
pub mod text;

pub use document::{Block, Document, Inline, ListItem};
pub use error::{Error, Result};
pub use render::{render_document, RenderEnvironment, RenderState};
pub use style::{Em, FontDescriptor, StyleSheet};
pub use text::{AttributedText, ParagraphStyle, Run};
