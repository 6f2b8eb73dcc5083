//! Core style value types shared by the style sheet, the renderer, and the
//! attributed-text output.

use std::ops::{Add, AddAssign, Sub};

/// RGBA color (8 bits per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };

    /// Create a new opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color with alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Font weight (100-900, with named constants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const BOLD: FontWeight = FontWeight(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        FontWeight::NORMAL
    }
}

/// Font slant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
}

/// Abstract font family, resolved to a concrete face by the display layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    #[default]
    SansSerif,
    Serif,
    Monospace,
    Named(String),
}

/// Horizontal text alignment for a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlignment {
    /// Follows the writing direction.
    #[default]
    Natural,
    Left,
    Center,
    Right,
    Justified,
}

/// Base writing direction for a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WritingDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// A measurement relative to the current font's point size.
///
/// Indents, spacing, and tab-stop locations are carried in em units while
/// formatting state accumulates down the tree, and converted to absolute
/// units only when a paragraph style is built. [`Em::resolve`] is the single
/// place that conversion (and its rounding rule) lives.
///
/// # Examples
///
/// ```
/// use galley::Em;
///
/// assert_eq!(Em(1.5).resolve(16.0), 24.0);
/// assert_eq!(Em(0.4).resolve(17.0), 7.0); // 6.8 rounds to nearest
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Em(pub f32);

impl Em {
    pub const ZERO: Em = Em(0.0);

    /// Convert to absolute units for the given resolved point size,
    /// rounding to the nearest whole unit.
    #[inline]
    pub fn resolve(self, point_size: f32) -> f32 {
        (self.0 * point_size).round()
    }

    /// The larger of two measurements.
    #[inline]
    pub fn max(self, other: Em) -> Em {
        Em(self.0.max(other.0))
    }
}

impl Add for Em {
    type Output = Em;

    fn add(self, rhs: Em) -> Em {
        Em(self.0 + rhs.0)
    }
}

impl AddAssign for Em {
    fn add_assign(&mut self, rhs: Em) {
        self.0 += rhs.0;
    }
}

impl Sub for Em {
    type Output = Em;

    fn sub(self, rhs: Em) -> Em {
        Em(self.0 - rhs.0)
    }
}
