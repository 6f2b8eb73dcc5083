//! Attributed text output: runs, paragraph styles, and measurement.
//!
//! This module contains:
//! - AttributedText/Run/Attrs, the renderer's accumulation target
//! - ParagraphStyle and tab stops in resolved absolute units
//! - The FontMetrics measurement trait and its column-width default

mod attributed;
mod metrics;
mod paragraph;

// Re-export the sink types and separator characters
pub use attributed::{
    ATTACHMENT_CHAR, AttributedText, Attrs, LINE_SEPARATOR, LinkAttr, PARAGRAPH_SEPARATOR, Run,
};

// Re-export paragraph-level formatting
pub use paragraph::{ParagraphStyle, TabAlignment, TabStop};

// Re-export measurement
pub use metrics::{CellMetrics, FontMetrics};
