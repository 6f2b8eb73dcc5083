//! Abstract font descriptors and their resolution to concrete metrics.
//!
//! The renderer never touches real font files. It carries a [`FontDescriptor`]
//! through the tree walk, derives variants of it (bold for strong text,
//! italic inside block quotes, monospace for code), and resolves it to a
//! [`ResolvedFont`] with a concrete point size only when a measurement or a
//! paragraph style needs one.

use crate::style::{FontFamily, FontSlant, FontWeight};

/// Describes a font abstractly: family, weight, slant, and an unscaled size.
///
/// The `size` field is in style-sheet units; the display's content scale is
/// applied in [`FontDescriptor::resolve`]. Derivation methods return a new
/// descriptor, leaving the receiver untouched, which is what lets formatting
/// state be copied freely down the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub slant: FontSlant,
    pub size: f32,
}

impl FontDescriptor {
    /// Create a descriptor with normal weight and slant.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            weight: FontWeight::NORMAL,
            slant: FontSlant::Normal,
            size,
        }
    }

    /// A copy of this descriptor with bold weight.
    pub fn bolded(&self) -> Self {
        Self {
            weight: FontWeight::BOLD,
            ..self.clone()
        }
    }

    /// A copy of this descriptor with italic slant.
    pub fn italicized(&self) -> Self {
        Self {
            slant: FontSlant::Italic,
            ..self.clone()
        }
    }

    /// A copy of this descriptor in the monospace family, keeping weight
    /// and slant.
    pub fn monospaced(&self) -> Self {
        Self {
            family: FontFamily::Monospace,
            ..self.clone()
        }
    }

    /// A copy of this descriptor with its size multiplied by `factor`.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            size: self.size * factor,
            ..self.clone()
        }
    }

    /// Check if this descriptor is bold (weight >= 700).
    #[inline]
    pub fn is_bold(&self) -> bool {
        self.weight.0 >= 700
    }

    /// Check if this descriptor is italic.
    #[inline]
    pub fn is_italic(&self) -> bool {
        self.slant == FontSlant::Italic
    }

    /// Check if this descriptor uses the monospace family.
    #[inline]
    pub fn is_monospace(&self) -> bool {
        self.family == FontFamily::Monospace
    }

    /// Resolve to concrete metrics under the given content scale.
    ///
    /// The point size rounds to the nearest whole unit, the same rule the
    /// paragraph-style builder applies to indents.
    pub fn resolve(&self, content_scale: f32) -> ResolvedFont {
        ResolvedFont {
            family: self.family.clone(),
            weight: self.weight,
            slant: self.slant,
            point_size: (self.size * content_scale).round(),
        }
    }
}

/// A font with a concrete point size, ready for measurement or display.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFont {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub slant: FontSlant,
    pub point_size: f32,
}
