//! Error types for galley rendering.

use thiserror::Error;

/// Errors that can occur while rendering a document.
///
/// Both variants indicate a misconfigured style sheet rather than bad input:
/// any document tree renders, but the sheet it renders against must supply a
/// scale factor for every heading level in use and a positive base font size.
#[derive(Error, Debug)]
pub enum Error {
    #[error("heading level {level} has no scale factor (style sheet covers {configured} levels)")]
    HeadingDepth { level: u8, configured: usize },

    #[error("base font size must be positive, got {0}")]
    InvalidFontSize(f32),
}

pub type Result<T> = std::result::Result<T, Error>;
