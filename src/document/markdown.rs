//! CommonMark input adapter.
//!
//! Folds the pulldown-cmark event stream into the typed [`Document`] tree.
//! The parser runs strict CommonMark with no extensions, so tables,
//! footnotes, task lists, and math never appear in the stream.
//!
//! Design notes:
//! - Container nesting (quotes, lists, items) is tracked with an explicit
//!   scope stack rather than recursion, mirroring the event grammar.
//! - Tight list items carry bare inline content with no paragraph event
//!   pair; pending inlines are wrapped into an implicit paragraph whenever a
//!   block boundary is reached, so tight and loose items produce the same
//!   tree shape.
//! - Ordered-list `start` numbers are not represented: ordinals derive from
//!   each list's position in the tree at render time.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::document::{Block, Document, Inline, ListItem};

impl Document {
    /// Parse CommonMark text into a document tree.
    ///
    /// Never fails: any input yields a (possibly empty) document.
    ///
    /// # Examples
    ///
    /// ```
    /// use galley::{Block, Document};
    ///
    /// let document = Document::from_markdown("# Title\n\nBody text.");
    /// assert_eq!(document.blocks.len(), 2);
    /// assert!(matches!(document.blocks[0], Block::Heading { level: 1, .. }));
    /// ```
    pub fn from_markdown(input: &str) -> Document {
        let mut builder = TreeBuilder::default();
        for event in Parser::new_ext(input, Options::empty()) {
            builder.event(event);
        }
        builder.finish()
    }
}

/// An open block container, innermost last on the stack.
enum Scope {
    Quote(Vec<Block>),
    List { ordered: bool, items: Vec<ListItem> },
    Item(Vec<Block>),
}

/// An open inline container, innermost last on the stack.
struct SpanScope {
    kind: SpanKind,
    content: Vec<Inline>,
}

enum SpanKind {
    Emphasis,
    Strong,
    Link { destination: String, title: String },
    /// Alt-text children accumulate like any span but are dropped on close.
    Image { source: String },
}

impl SpanScope {
    fn new(kind: SpanKind) -> Self {
        Self {
            kind,
            content: Vec::new(),
        }
    }
}

/// A code block being accumulated across text events.
struct PendingCode {
    language: Option<String>,
    code: String,
}

#[derive(Default)]
struct TreeBuilder {
    document: Vec<Block>,
    scopes: Vec<Scope>,
    spans: Vec<SpanScope>,
    /// Inline content of the paragraph or heading being built, and the
    /// landing spot for the bare inlines of tight list items.
    inlines: Vec<Inline>,
    code: Option<PendingCode>,
    html: Option<String>,
}

impl TreeBuilder {
    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                if let Some(pending) = &mut self.code {
                    pending.code.push_str(&text);
                } else if let Some(html) = &mut self.html {
                    html.push_str(&text);
                } else {
                    self.push_inline(Inline::Text(text.into_string()));
                }
            }
            Event::Code(code) => self.push_inline(Inline::Code(code.into_string())),
            Event::InlineHtml(html) => self.push_inline(Inline::Html(html.into_string())),
            Event::Html(html) => {
                // Block-level HTML arrives in per-line chunks inside an
                // HtmlBlock scope.
                if let Some(buf) = &mut self.html {
                    buf.push_str(&html);
                } else {
                    self.push_block(Block::HtmlBlock {
                        html: html.into_string(),
                    });
                }
            }
            Event::SoftBreak => self.push_inline(Inline::SoftBreak),
            Event::HardBreak => self.push_inline(Inline::LineBreak),
            Event::Rule => {
                self.flush_paragraph();
                self.push_block(Block::ThematicBreak);
            }
            // Extension events cannot occur with `Options::empty()`.
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            // Inline content accumulates in `self.inlines` until the
            // matching end event.
            Tag::Paragraph | Tag::Heading { .. } => {}
            Tag::BlockQuote(_) => {
                self.flush_paragraph();
                self.scopes.push(Scope::Quote(Vec::new()));
            }
            Tag::List(first) => {
                self.flush_paragraph();
                self.scopes.push(Scope::List {
                    ordered: first.is_some(),
                    items: Vec::new(),
                });
            }
            Tag::Item => {
                self.flush_paragraph();
                self.scopes.push(Scope::Item(Vec::new()));
            }
            Tag::CodeBlock(kind) => {
                self.flush_paragraph();
                let language = match kind {
                    CodeBlockKind::Fenced(info) => {
                        let lang = info.split_whitespace().next().unwrap_or("");
                        (!lang.is_empty()).then(|| lang.to_string())
                    }
                    CodeBlockKind::Indented => None,
                };
                self.code = Some(PendingCode {
                    language,
                    code: String::new(),
                });
            }
            Tag::HtmlBlock => {
                self.flush_paragraph();
                self.html = Some(String::new());
            }
            Tag::Emphasis => self.spans.push(SpanScope::new(SpanKind::Emphasis)),
            Tag::Strong => self.spans.push(SpanScope::new(SpanKind::Strong)),
            Tag::Link {
                dest_url, title, ..
            } => self.spans.push(SpanScope::new(SpanKind::Link {
                destination: dest_url.into_string(),
                title: title.into_string(),
            })),
            Tag::Image { dest_url, .. } => {
                self.spans.push(SpanScope::new(SpanKind::Image {
                    source: dest_url.into_string(),
                }));
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                let content = std::mem::take(&mut self.inlines);
                self.push_block(Block::Paragraph { content });
            }
            TagEnd::Heading(level) => {
                let content = std::mem::take(&mut self.inlines);
                self.push_block(Block::Heading {
                    level: level as u8,
                    content,
                });
            }
            TagEnd::BlockQuote(_) => {
                self.flush_paragraph();
                if let Some(Scope::Quote(content)) = self.scopes.pop() {
                    self.push_block(Block::BlockQuote { content });
                }
            }
            TagEnd::List(_) => {
                self.flush_paragraph();
                if let Some(Scope::List { ordered, items }) = self.scopes.pop() {
                    let block = if ordered {
                        Block::OrderedList { items }
                    } else {
                        Block::BulletList { items }
                    };
                    self.push_block(block);
                }
            }
            TagEnd::Item => {
                self.flush_paragraph();
                if let Some(Scope::Item(blocks)) = self.scopes.pop()
                    && let Some(Scope::List { items, .. }) = self.scopes.last_mut()
                {
                    items.push(ListItem::new(blocks));
                }
            }
            TagEnd::CodeBlock => {
                if let Some(pending) = self.code.take() {
                    self.push_block(Block::CodeBlock {
                        language: pending.language,
                        code: pending.code,
                    });
                }
            }
            TagEnd::HtmlBlock => {
                if let Some(html) = self.html.take() {
                    self.push_block(Block::HtmlBlock { html });
                }
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Link | TagEnd::Image => self.close_span(),
            _ => {}
        }
    }

    /// Close the innermost inline span and push the wrapped inline into its
    /// parent.
    fn close_span(&mut self) {
        let Some(span) = self.spans.pop() else { return };
        let inline = match span.kind {
            SpanKind::Emphasis => Inline::Emphasis(span.content),
            SpanKind::Strong => Inline::Strong(span.content),
            SpanKind::Link { destination, title } => Inline::Link {
                destination,
                title,
                content: span.content,
            },
            SpanKind::Image { source } => Inline::Image { source },
        };
        self.push_inline(inline);
    }

    fn push_inline(&mut self, inline: Inline) {
        match self.spans.last_mut() {
            Some(span) => span.content.push(inline),
            None => self.inlines.push(inline),
        }
    }

    /// Wrap pending bare inlines into an implicit paragraph.
    fn flush_paragraph(&mut self) {
        if !self.inlines.is_empty() {
            let content = std::mem::take(&mut self.inlines);
            self.push_block(Block::Paragraph { content });
        }
    }

    fn push_block(&mut self, block: Block) {
        match self.scopes.last_mut() {
            Some(Scope::Quote(blocks)) | Some(Scope::Item(blocks)) => blocks.push(block),
            // Lists only ever receive items; the event grammar wraps every
            // child in an item scope.
            Some(Scope::List { .. }) | None => self.document.push(block),
        }
    }

    fn finish(mut self) -> Document {
        self.flush_paragraph();
        Document::new(self.document)
    }
}
