//! End-to-end rendering tests: Markdown source in, attributed runs out.

use galley::text::{LINE_SEPARATOR, PARAGRAPH_SEPARATOR};
use galley::{render_document, AttributedText, Document, RenderEnvironment, StyleSheet};

const SAMPLE_MD: &str = include_str!("fixtures/sample.md");

fn render(source: &str) -> AttributedText {
    let doc = Document::from_markdown(source);
    render_document(&doc, &StyleSheet::default(), &RenderEnvironment::new())
        .expect("default style sheet should render")
}

#[test]
fn test_paragraph_separators_at_sibling_boundaries() {
    let out = render("# H\n\npara\n\n> q1\n>\n> q2\n\nlast\n");

    // Three of the four top-level blocks have a successor, plus the first
    // of the two quoted paragraphs.
    let plain = out.plain_text();
    assert_eq!(plain.matches(PARAGRAPH_SEPARATOR).count(), 4);
    assert!(!plain.starts_with(PARAGRAPH_SEPARATOR));
    assert!(!plain.ends_with(PARAGRAPH_SEPARATOR));
}

#[test]
fn test_code_block_joins_lines_with_line_separator() {
    let out = render("```\nfoo\nbar\n```\n");
    let plain = out.plain_text();
    assert_eq!(plain, format!("\tfoo{LINE_SEPARATOR}bar"));
    assert_eq!(plain.matches(PARAGRAPH_SEPARATOR).count(), 0);
}

#[test]
fn test_rendering_is_deterministic() {
    let doc = Document::from_markdown(SAMPLE_MD);
    let sheet = StyleSheet::default();
    let env = RenderEnvironment::new();

    let first = render_document(&doc, &sheet, &env).expect("fixture should render");
    let second = render_document(&doc, &sheet, &env).expect("fixture should render");
    assert_eq!(first, second);
}

#[test]
fn test_parsing_is_deterministic() {
    assert_eq!(
        Document::from_markdown(SAMPLE_MD),
        Document::from_markdown(SAMPLE_MD)
    );
}

#[test]
fn test_heading_point_size_follows_scale_table() {
    let out = render("# Top");
    let resolved = out.runs()[0].attrs.font.resolve(1.0);
    assert_eq!(resolved.point_size, 30.0);

    // A fractional product rounds the same way paragraph measurements do.
    let mut sheet = StyleSheet::default();
    sheet.base_font.size = 17.0;
    let doc = Document::from_markdown("### Deep");
    let out = render_document(&doc, &sheet, &RenderEnvironment::new()).unwrap();
    // 17 x 1.17 = 19.89, rounded to the nearest whole point.
    assert_eq!(out.runs()[0].attrs.font.resolve(1.0).point_size, 20.0);
}

#[test]
fn test_environment_settings_reach_every_paragraph() {
    use galley::style::TextAlignment;

    let doc = Document::from_markdown(SAMPLE_MD);
    let mut env = RenderEnvironment::new();
    env.alignment = TextAlignment::Center;
    env.line_spacing = 2.0;

    let out = render_document(&doc, &StyleSheet::default(), &env).unwrap();
    let mut styled = 0;
    for run in out.runs() {
        if let Some(style) = &run.attrs.paragraph {
            styled += 1;
            assert_eq!(style.alignment, TextAlignment::Center);
            assert_eq!(style.line_spacing, 2.0);
        }
    }
    assert!(styled > 0, "expected styled runs in the fixture render");
}

#[test]
fn test_thematic_break_renders_struck_space() {
    let out = render("before\n\n---\n\nafter\n");
    let rule = out
        .runs()
        .iter()
        .find(|run| run.text == "\u{a0}")
        .expect("rule run");
    assert_eq!(
        rule.attrs.strikethrough,
        Some(StyleSheet::default().separator_color)
    );
}

#[test]
fn test_sample_document_renders_fully() {
    let out = render(SAMPLE_MD);
    let plain = out.plain_text();

    assert!(!out.is_empty());
    assert!(!plain.ends_with(PARAGRAPH_SEPARATOR));
    // Headings, bullets, ordinals, code, and the rule all made it through.
    assert!(plain.contains("Attributed Rendering"));
    assert!(plain.contains('\u{2022}'));
    assert!(plain.contains("1.\tordered inside a bullet"));
    assert!(plain.contains(&format!("fn main() {{{LINE_SEPARATOR}")));
    assert!(plain.contains('\u{a0}'));
}
