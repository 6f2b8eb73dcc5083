//! Inline rendering: flowing-text nodes to attributed runs.

use log::debug;

use crate::document::Inline;
use crate::render::state::RenderState;
use crate::render::Renderer;
use crate::text::{AttributedText, Attrs, LinkAttr, Run, ATTACHMENT_CHAR, LINE_SEPARATOR};

impl Renderer<'_> {
    /// Render a sibling sequence of inline nodes under one state.
    pub(crate) fn render_inlines(&self, inlines: &[Inline], state: &RenderState) -> AttributedText {
        let mut out = AttributedText::new();
        for inline in inlines {
            out.append(self.render_inline(inline, state));
        }
        out
    }

    fn render_inline(&self, inline: &Inline, state: &RenderState) -> AttributedText {
        match inline {
            Inline::Text(text) => self.fragment(text.clone(), state),
            // A soft break is a source-line wrap, not a semantic break.
            Inline::SoftBreak => self.fragment(" ", state),
            // A hard break stays inside the paragraph, so it must not be
            // U+2029.
            Inline::LineBreak => self.fragment(String::from(LINE_SEPARATOR), state),
            Inline::Code(code) => {
                let mut code_state = state.clone();
                code_state.font = code_state
                    .font
                    .monospaced()
                    .scaled(self.sheet.measurements.code_font_scale);
                self.fragment(code.clone(), &code_state)
            }
            // Raw HTML passes through as literal text; there is no styling
            // to apply without an HTML engine.
            Inline::Html(html) => self.fragment(html.clone(), state),
            Inline::Emphasis(content) => {
                let mut em_state = state.clone();
                em_state.font = em_state.font.italicized();
                self.render_inlines(content, &em_state)
            }
            Inline::Strong(content) => {
                let mut strong_state = state.clone();
                strong_state.font = strong_state.font.bolded();
                self.render_inlines(content, &strong_state)
            }
            Inline::Link {
                destination,
                title,
                content,
            } => {
                let mut out = self.render_inlines(content, state);
                match self.env.resolve_url(destination) {
                    Some(url) => {
                        let title = (!title.is_empty()).then(|| title.clone());
                        out.set_link(LinkAttr { url, title });
                    }
                    None => {
                        debug!("dropping link with unresolvable destination {destination:?}");
                    }
                }
                out
            }
            Inline::Image { source } => match self.env.resolve_url(source) {
                Some(url) => {
                    let mut attrs = Attrs::new(state.font.clone(), state.color);
                    attrs.attachment = Some(url);
                    let mut out = AttributedText::new();
                    out.push_run(Run::new(String::from(ATTACHMENT_CHAR), attrs));
                    out
                }
                None => {
                    debug!("omitting image with unresolvable source {source:?}");
                    AttributedText::new()
                }
            },
        }
    }

    /// A single run of `text` in the state's font and color.
    fn fragment(&self, text: impl Into<String>, state: &RenderState) -> AttributedText {
        let mut out = AttributedText::new();
        out.push_run(Run::new(text, Attrs::new(state.font.clone(), state.color)));
        out
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;
    use crate::render::RenderEnvironment;
    use crate::style::{FontFamily, FontSlant, StyleSheet};

    fn render(inlines: &[Inline], env: &RenderEnvironment) -> AttributedText {
        let sheet = StyleSheet::default();
        let renderer = Renderer { sheet: &sheet, env };
        let state = RenderState::new(&sheet);
        renderer.render_inlines(inlines, &state)
    }

    #[test]
    fn test_breaks_stay_inside_paragraph() {
        let env = RenderEnvironment::new();
        let out = render(
            &[
                Inline::Text("foo".into()),
                Inline::SoftBreak,
                Inline::Text("bar".into()),
                Inline::LineBreak,
                Inline::Text("baz".into()),
            ],
            &env,
        );
        assert_eq!(out.plain_text(), "foo bar\u{2028}baz");
    }

    #[test]
    fn test_code_span_uses_scaled_monospace() {
        let env = RenderEnvironment::new();
        let out = render(&[Inline::Code("let x".into())], &env);
        let font = &out.runs()[0].attrs.font;
        assert_eq!(font.family, FontFamily::Monospace);
        assert_eq!(font.size, 15.0 * 0.9);
    }

    #[test]
    fn test_nested_emphasis_compounds() {
        let env = RenderEnvironment::new();
        let out = render(
            &[Inline::Emphasis(vec![
                Inline::Text("plain italic ".into()),
                Inline::Strong(vec![Inline::Text("bold italic".into())]),
            ])],
            &env,
        );
        let runs = out.runs();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].attrs.font.slant, FontSlant::Italic);
        assert!(!runs[0].attrs.font.is_bold());
        assert_eq!(runs[1].attrs.font.slant, FontSlant::Italic);
        assert!(runs[1].attrs.font.is_bold());
    }

    #[test]
    fn test_link_attaches_to_every_run() {
        let env = RenderEnvironment::new()
            .with_base_url(Url::parse("https://example.com/").unwrap());
        let out = render(
            &[Inline::Link {
                destination: "docs".into(),
                title: "Docs".into(),
                content: vec![
                    Inline::Text("see ".into()),
                    Inline::Strong(vec![Inline::Text("here".into())]),
                ],
            }],
            &env,
        );
        assert_eq!(out.runs().len(), 2);
        for run in out.runs() {
            let link = run.attrs.link.as_ref().unwrap();
            assert_eq!(link.url.as_str(), "https://example.com/docs");
            assert_eq!(link.title.as_deref(), Some("Docs"));
        }
    }

    #[test]
    fn test_unresolvable_link_keeps_text() {
        let env = RenderEnvironment::new();
        let out = render(
            &[Inline::Link {
                destination: "relative/only".into(),
                title: String::new(),
                content: vec![Inline::Text("click".into())],
            }],
            &env,
        );
        assert_eq!(out.plain_text(), "click");
        assert!(out.runs()[0].attrs.link.is_none());
    }

    #[test]
    fn test_empty_title_becomes_none() {
        let env = RenderEnvironment::new();
        let out = render(
            &[Inline::Link {
                destination: "https://example.com/".into(),
                title: String::new(),
                content: vec![Inline::Text("x".into())],
            }],
            &env,
        );
        assert!(out.runs()[0].attrs.link.as_ref().unwrap().title.is_none());
    }

    #[test]
    fn test_image_renders_attachment_placeholder() {
        let env = RenderEnvironment::new()
            .with_base_url(Url::parse("https://example.com/").unwrap());
        let out = render(
            &[Inline::Image {
                source: "cat.png".into(),
            }],
            &env,
        );
        assert_eq!(out.plain_text(), "\u{fffc}");
        let attachment = out.runs()[0].attrs.attachment.as_ref().unwrap();
        assert_eq!(attachment.as_str(), "https://example.com/cat.png");
    }

    #[test]
    fn test_unresolvable_image_renders_nothing() {
        let env = RenderEnvironment::new();
        let out = render(
            &[Inline::Image {
                source: "cat.png".into(),
            }],
            &env,
        );
        assert!(out.is_empty());
    }
}
