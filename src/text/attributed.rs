//! Attributed text: the renderer's output representation.
//!
//! An [`AttributedText`] is a flat sequence of [`Run`]s, each pairing a text
//! fragment with the full attribute set in effect over it. Fragments are
//! built bottom-up during rendering and concatenated by the caller, so the
//! operations here are append-oriented: push a run, append another fragment,
//! or apply an attribute across everything produced so far.

use url::Url;

use crate::style::{Color, FontDescriptor};
use crate::text::ParagraphStyle;

/// Separates paragraphs in rendered output (U+2029).
pub const PARAGRAPH_SEPARATOR: char = '\u{2029}';

/// Separates lines within one paragraph (U+2028), used for hard line breaks
/// and preformatted text.
pub const LINE_SEPARATOR: char = '\u{2028}';

/// Object replacement character (U+FFFC) standing in for an image run.
pub const ATTACHMENT_CHAR: char = '\u{FFFC}';

/// Hyperlink attribute: a resolved absolute URL plus an optional tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkAttr {
    pub url: Url,
    pub title: Option<String>,
}

/// The attribute set carried by a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct Attrs {
    pub font: FontDescriptor,
    pub color: Color,
    pub link: Option<LinkAttr>,
    /// Single-line strikethrough in the given color.
    pub strikethrough: Option<Color>,
    /// Resolved image URL; the run text is [`ATTACHMENT_CHAR`].
    pub attachment: Option<Url>,
    /// Present on every run of a paragraph once its style is attached.
    pub paragraph: Option<ParagraphStyle>,
}

impl Attrs {
    /// Attributes with just a font and color, everything else unset.
    pub fn new(font: FontDescriptor, color: Color) -> Self {
        Self {
            font,
            color,
            link: None,
            strikethrough: None,
            attachment: None,
            paragraph: None,
        }
    }
}

/// A maximal span of text sharing one attribute set.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub attrs: Attrs,
}

impl Run {
    pub fn new(text: impl Into<String>, attrs: Attrs) -> Self {
        Self {
            text: text.into(),
            attrs,
        }
    }

    /// Length of this run in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A flat sequence of attributed runs.
///
/// Appending preserves run boundaries: runs are never merged, so a fragment
/// keeps the exact structure the renderer produced. Empty runs are dropped
/// on push.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributedText {
    runs: Vec<Run>,
}

impl AttributedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Total length in characters across all runs.
    pub fn char_len(&self) -> usize {
        self.runs.iter().map(Run::char_len).sum()
    }

    /// Append a run, dropping it if its text is empty.
    pub fn push_run(&mut self, run: Run) {
        if !run.text.is_empty() {
            self.runs.push(run);
        }
    }

    /// Append another fragment, preserving its run boundaries.
    pub fn append(&mut self, other: AttributedText) {
        self.runs.extend(other.runs);
    }

    /// Attach a link attribute over every run produced so far.
    pub fn set_link(&mut self, link: LinkAttr) {
        for run in &mut self.runs {
            run.attrs.link = Some(link.clone());
        }
    }

    /// Attach a paragraph style over every run produced so far.
    pub fn set_paragraph_style(&mut self, style: &ParagraphStyle) {
        for run in &mut self.runs {
            run.attrs.paragraph = Some(style.clone());
        }
    }

    /// The text content with all attributes stripped.
    pub fn plain_text(&self) -> String {
        let mut out = String::with_capacity(self.runs.iter().map(|r| r.text.len()).sum());
        for run in &self.runs {
            out.push_str(&run.text);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{FontFamily, FontWeight};
    use proptest::prelude::*;

    fn attrs() -> Attrs {
        Attrs::new(
            FontDescriptor::new(FontFamily::SansSerif, 15.0),
            Color::BLACK,
        )
    }

    #[test]
    fn test_push_run_drops_empty() {
        let mut text = AttributedText::new();
        text.push_run(Run::new("", attrs()));
        assert!(text.is_empty());
        text.push_run(Run::new("a", attrs()));
        assert_eq!(text.runs().len(), 1);
    }

    #[test]
    fn test_append_preserves_run_boundaries() {
        let mut left = AttributedText::new();
        left.push_run(Run::new("foo", attrs()));

        let mut right = AttributedText::new();
        let mut bold = attrs();
        bold.font.weight = FontWeight::BOLD;
        right.push_run(Run::new("bar", bold));
        right.push_run(Run::new("baz", attrs()));

        left.append(right);
        assert_eq!(left.runs().len(), 3);
        assert_eq!(left.plain_text(), "foobarbaz");
        assert!(left.runs()[1].attrs.font.is_bold());
        assert!(!left.runs()[2].attrs.font.is_bold());
    }

    #[test]
    fn test_set_link_covers_every_run() {
        let mut text = AttributedText::new();
        text.push_run(Run::new("click ", attrs()));
        text.push_run(Run::new("here", attrs()));

        let url = Url::parse("https://example.com/docs").unwrap();
        text.set_link(LinkAttr {
            url: url.clone(),
            title: Some("docs".into()),
        });

        for run in text.runs() {
            let link = run.attrs.link.as_ref().unwrap();
            assert_eq!(link.url, url);
            assert_eq!(link.title.as_deref(), Some("docs"));
        }
    }

    #[test]
    fn test_char_len_counts_chars_not_bytes() {
        let mut text = AttributedText::new();
        text.push_run(Run::new("héllo", attrs()));
        assert_eq!(text.char_len(), 5);
    }

    proptest! {
        #[test]
        fn test_append_concatenates_plain_text(a in "\\PC{0,20}", b in "\\PC{0,20}") {
            let mut left = AttributedText::new();
            left.push_run(Run::new(a.clone(), attrs()));
            let mut right = AttributedText::new();
            right.push_run(Run::new(b.clone(), attrs()));

            let chars = left.char_len() + right.char_len();
            left.append(right);
            prop_assert_eq!(left.plain_text(), format!("{a}{b}"));
            prop_assert_eq!(left.char_len(), chars);
        }
    }
}
