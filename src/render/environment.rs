//! Display-level inputs to a render pass.

use std::fmt;

use url::Url;

use crate::style::{TextAlignment, WritingDirection};
use crate::text::{CellMetrics, FontMetrics};

/// Everything a render pass needs that is neither document nor style sheet:
/// where relative URLs point, which way text flows, and how large a point
/// currently is on screen.
pub struct RenderEnvironment {
    /// Base for resolving relative link and image destinations. Without a
    /// base, only destinations that are already absolute resolve.
    pub base_url: Option<Url>,
    /// Copied verbatim into every paragraph style.
    pub writing_direction: WritingDirection,
    /// Copied verbatim into every paragraph style.
    pub alignment: TextAlignment,
    /// Extra space between lines, in points, copied verbatim into every
    /// paragraph style.
    pub line_spacing: f32,
    /// Display multiplier applied whenever a font descriptor resolves to a
    /// concrete point size.
    pub content_scale: f32,
    /// Text measurement used to size ordered-list indent steps.
    pub metrics: Box<dyn FontMetrics>,
}

impl RenderEnvironment {
    /// An environment with no base URL, natural left-to-right text, no extra
    /// line spacing, unit scale, and fixed-cell measurement.
    pub fn new() -> Self {
        Self {
            base_url: None,
            writing_direction: WritingDirection::LeftToRight,
            alignment: TextAlignment::Natural,
            line_spacing: 0.0,
            content_scale: 1.0,
            metrics: Box::new(CellMetrics),
        }
    }

    /// Set the base URL for resolving relative destinations.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Resolve a link or image destination to an absolute URL.
    ///
    /// Relative destinations join against the base URL. Returns `None` when
    /// no absolute URL can be formed, in which case the caller drops the
    /// link or image rather than emitting a broken reference.
    pub fn resolve_url(&self, destination: &str) -> Option<Url> {
        match &self.base_url {
            Some(base) => base.join(destination).ok(),
            None => Url::parse(destination).ok(),
        }
    }
}

impl Default for RenderEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RenderEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderEnvironment")
            .field("base_url", &self.base_url)
            .field("writing_direction", &self.writing_direction)
            .field("alignment", &self.alignment)
            .field("line_spacing", &self.line_spacing)
            .field("content_scale", &self.content_scale)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_against_base() {
        let env = RenderEnvironment::new()
            .with_base_url(Url::parse("https://example.com/").unwrap());
        let url = env.resolve_url("path").unwrap();
        assert_eq!(url.as_str(), "https://example.com/path");
    }

    #[test]
    fn test_resolve_absolute_without_base() {
        let env = RenderEnvironment::new();
        let url = env.resolve_url("https://example.com/a/b").unwrap();
        assert_eq!(url.as_str(), "https://example.com/a/b");
    }

    #[test]
    fn test_resolve_relative_without_base_fails() {
        let env = RenderEnvironment::new();
        assert!(env.resolve_url("relative/path").is_none());
    }

    #[test]
    fn test_resolve_replaces_base_path() {
        let env = RenderEnvironment::new()
            .with_base_url(Url::parse("https://example.com/docs/guide.md").unwrap());
        let url = env.resolve_url("other.md").unwrap();
        assert_eq!(url.as_str(), "https://example.com/docs/other.md");
    }
}
