//! Block rendering: structural nodes to attributed paragraphs.
//!
//! Every handler has the same shape. It derives a state copy for its
//! children, emits any pending paragraph edits, renders its content,
//! attaches a paragraph style over the whole produced range, and appends
//! one paragraph separator when a sibling follows. Separators are appended
//! after content only, so there is never a leading or trailing separator
//! and never a doubled one.

use std::borrow::Cow;

use memchr::memchr;

use crate::document::{Block, Inline, ListItem};
use crate::error::{Error, Result};
use crate::render::state::{ListMarker, ParagraphEdit, RenderState};
use crate::render::Renderer;
use crate::style::Em;
use crate::text::{AttributedText, Attrs, Run, TabAlignment, PARAGRAPH_SEPARATOR};

impl Renderer<'_> {
    /// Render a sibling sequence of blocks. Each block learns its position
    /// (ordered lists number from it) and whether a successor follows.
    pub(crate) fn render_blocks(
        &self,
        blocks: &[Block],
        state: &RenderState,
    ) -> Result<AttributedText> {
        let mut out = AttributedText::new();
        for (index, block) in blocks.iter().enumerate() {
            let has_successor = index + 1 < blocks.len();
            out.append(self.render_block(block, index, has_successor, state)?);
        }
        Ok(out)
    }

    fn render_block(
        &self,
        block: &Block,
        index: usize,
        has_successor: bool,
        state: &RenderState,
    ) -> Result<AttributedText> {
        match block {
            Block::Paragraph { content } => self.render_paragraph(content, has_successor, state),
            Block::Heading { level, content } => {
                self.render_heading(*level, content, has_successor, state)
            }
            Block::BlockQuote { content } => self.render_block_quote(content, has_successor, state),
            Block::BulletList { items } => self.render_list(items, None, has_successor, state),
            Block::OrderedList { items } => {
                self.render_list(items, Some(index), has_successor, state)
            }
            Block::CodeBlock { code, .. } => self.render_code_block(code, has_successor, state),
            Block::HtmlBlock { html } => self.render_html_block(html, has_successor, state),
            Block::ThematicBreak => self.render_thematic_break(has_successor, state),
        }
    }

    fn render_paragraph(
        &self,
        content: &[Inline],
        has_successor: bool,
        state: &RenderState,
    ) -> Result<AttributedText> {
        let mut out = self.paragraph_prefix(state);
        out.append(self.render_inlines(content, state));
        out.set_paragraph_style(&self.paragraph_style(state));
        self.append_separator(&mut out, has_successor, state);
        Ok(out)
    }

    fn render_heading(
        &self,
        level: u8,
        content: &[Inline],
        has_successor: bool,
        state: &RenderState,
    ) -> Result<AttributedText> {
        let scale = self
            .sheet
            .heading_scale(level)
            .ok_or(Error::HeadingDepth {
                level,
                configured: self.sheet.measurements.heading_scales.len(),
            })?;

        // Edits emit with the outer state so a list marker in front of a
        // heading keeps the list's font.
        let mut out = self.paragraph_prefix(state);

        let mut body = state.clone();
        body.font = body.font.bolded().scaled(scale);
        body.paragraph_spacing = self.sheet.measurements.heading_spacing;
        out.append(self.render_inlines(content, &body));
        out.set_paragraph_style(&self.paragraph_style(&body));
        self.append_separator(&mut out, has_successor, state);
        Ok(out)
    }

    fn render_block_quote(
        &self,
        content: &[Block],
        has_successor: bool,
        state: &RenderState,
    ) -> Result<AttributedText> {
        let mut quoted = state.clone();
        quoted.font = quoted.font.italicized();
        quoted.head_indent += self.sheet.measurements.indent_step;
        quoted.tail_indent += self.sheet.measurements.indent_step;
        quoted.add_tab_stop(TabAlignment::Natural, quoted.head_indent);
        quoted.add_first_line_indent(1);

        let mut out = self.render_blocks(content, &quoted)?;
        self.append_separator(&mut out, has_successor, state);
        Ok(out)
    }

    /// Render a list. `ordinal_base` is `None` for bullet lists; for ordered
    /// lists it is the list's own position among its siblings, so item `i`
    /// renders the absolute ordinal `base + i`.
    fn render_list(
        &self,
        items: &[ListItem],
        ordinal_base: Option<usize>,
        has_successor: bool,
        state: &RenderState,
    ) -> Result<AttributedText> {
        let measurements = &self.sheet.measurements;

        // The indent step must fit the widest marker. Bullets always fit;
        // ordinals are measured as rendered, with the trailing period.
        let step = match ordinal_base {
            Some(base) if !items.is_empty() => {
                let widest = base + items.len() - 1;
                let font = state.font.resolve(self.env.content_scale);
                let width = self.env.metrics.text_width(&format!("{widest}."), &font);
                measurements
                    .indent_step
                    .max(Em(width / font.point_size) + measurements.marker_spacing)
            }
            _ => measurements.indent_step,
        };

        let parent_spacing = state.paragraph_spacing;

        let mut listed = state.clone();
        listed.head_indent += step;
        listed.add_tab_stop(TabAlignment::Trailing, listed.head_indent - measurements.marker_spacing);
        listed.add_tab_stop(TabAlignment::Natural, listed.head_indent);
        listed.set_list_marker(None);

        let mut out = AttributedText::new();
        for (offset, item) in items.iter().enumerate() {
            let marker = match ordinal_base {
                Some(base) => ListMarker::Ordinal(base + offset),
                None => ListMarker::Bullet,
            };
            let has_next_item = offset + 1 < items.len();
            out.append(self.render_list_item(item, marker, has_next_item, parent_spacing, &listed)?);
        }
        self.append_separator(&mut out, has_successor, state);
        Ok(out)
    }

    fn render_list_item(
        &self,
        item: &ListItem,
        marker: ListMarker,
        has_successor: bool,
        parent_spacing: Em,
        state: &RenderState,
    ) -> Result<AttributedText> {
        let mut out = AttributedText::new();
        let last = item.blocks.len().checked_sub(1);
        for (index, block) in item.blocks.iter().enumerate() {
            let mut child = state.clone();
            if index == 0 {
                child.set_list_marker(Some(marker));
            } else {
                // Continuation blocks align under the item body, not the
                // marker.
                child.add_first_line_indent(2);
            }
            // The last block of the last item closes the list; it takes the
            // surrounding rhythm's spacing if that is larger.
            if !has_successor && Some(index) == last {
                child.paragraph_spacing = child.paragraph_spacing.max(parent_spacing);
            }
            let block_has_successor = index + 1 < item.blocks.len();
            out.append(self.render_block(block, index, block_has_successor, &child)?);
        }
        self.append_separator(&mut out, has_successor, state);
        Ok(out)
    }

    fn render_code_block(
        &self,
        code: &str,
        has_successor: bool,
        state: &RenderState,
    ) -> Result<AttributedText> {
        let measurements = &self.sheet.measurements;
        let mut pre = state.clone();
        pre.font = pre.font.monospaced().scaled(measurements.code_font_scale);
        pre.head_indent += measurements.indent_step;
        pre.add_tab_stop(TabAlignment::Natural, pre.head_indent);
        pre.add_first_line_indent(1);

        let mut out = self.paragraph_prefix(&pre);
        out.push_run(Run::new(
            normalize_preformatted(code),
            Attrs::new(pre.font.clone(), pre.color),
        ));
        out.set_paragraph_style(&self.paragraph_style(&pre));
        self.append_separator(&mut out, has_successor, state);
        Ok(out)
    }

    fn render_html_block(
        &self,
        html: &str,
        has_successor: bool,
        state: &RenderState,
    ) -> Result<AttributedText> {
        let mut out = self.paragraph_prefix(state);
        out.push_run(Run::new(
            normalize_preformatted(html),
            Attrs::new(state.font.clone(), state.color),
        ));
        out.set_paragraph_style(&self.paragraph_style(state));
        self.append_separator(&mut out, has_successor, state);
        Ok(out)
    }

    /// A horizontal rule: one non-breaking space struck through in the
    /// separator color, so the strikethrough line draws the rule.
    fn render_thematic_break(
        &self,
        has_successor: bool,
        state: &RenderState,
    ) -> Result<AttributedText> {
        let mut out = self.paragraph_prefix(state);
        let mut attrs = Attrs::new(state.font.clone(), state.color);
        attrs.strikethrough = Some(self.sheet.separator_color);
        out.push_run(Run::new("\u{a0}", attrs));
        out.set_paragraph_style(&self.paragraph_style(state));
        self.append_separator(&mut out, has_successor, state);
        Ok(out)
    }

    /// Emit the state's pending paragraph edits. Indents use the state's
    /// current font; markers use the font bound when the marker was set.
    fn paragraph_prefix(&self, state: &RenderState) -> AttributedText {
        let mut out = AttributedText::new();
        for edit in state.edits() {
            match edit {
                ParagraphEdit::FirstLineIndent { tabs } => {
                    out.push_run(Run::new(
                        "\t".repeat(*tabs),
                        Attrs::new(state.font.clone(), state.color),
                    ));
                }
                ParagraphEdit::Marker { marker, font } => {
                    out.push_run(Run::new(marker.text(), Attrs::new(font.clone(), state.color)));
                }
            }
        }
        out
    }

    /// Append the paragraph separator when a sibling follows. The separator
    /// run carries the inherited font and color and no paragraph style.
    fn append_separator(&self, out: &mut AttributedText, has_successor: bool, state: &RenderState) {
        if has_successor {
            out.push_run(Run::new(
                String::from(PARAGRAPH_SEPARATOR),
                Attrs::new(state.font.clone(), state.color),
            ));
        }
    }
}

/// Normalize preformatted text for single-paragraph rendering: interior
/// newlines become line separators and the trailing newline is dropped.
fn normalize_preformatted(text: &str) -> Cow<'_, str> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    if memchr(b'\n', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace('\n', "\u{2028}"))
}
