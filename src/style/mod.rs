//! Style system: value types, font descriptors, and style sheets.
//!
//! This module contains:
//! - Typographic value types (Color, FontWeight, Em, alignment enums)
//! - Abstract font descriptors and their resolution to point sizes
//! - The StyleSheet/Measurements bundle the renderer reads configuration from

mod font;
mod sheet;
mod types;

// Re-export value types
pub use types::{Color, Em, FontFamily, FontSlant, FontWeight, TextAlignment, WritingDirection};

// Re-export font descriptors
pub use font::{FontDescriptor, ResolvedFont};

// Re-export configuration types
pub use sheet::{Measurements, StyleSheet};
