//! Reply rendering: a fixed-order pipeline from raw reply text to safe,
//! structured, displayable markup.
//!
//! Stage order matters. Escaping runs strictly first so no later stage can
//! introduce live markup from user content; fence extraction shields code
//! interiors from everything after it; inline emphasis runs before line
//! breaks; list grouping runs last over the line structure.

mod escape;
mod fence;
mod inline;
mod lists;

pub use escape::{escape_html, unescape_html};
pub use inline::Span;

use fence::Segment;
use std::fmt;

/// Sanitized structured content derived from one raw reply. Immutable once
/// built; its `Display` form is the markup string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    nodes: Vec<Node>,
}

/// One block-level piece of rendered content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Preformatted code container with its language tag.
    CodeBlock { language: String, body: String },
    /// Inline flow: text, code spans, emphasis, break markers.
    Spans(Vec<Span>),
    /// A maximal run of ordered list items, wrapped once.
    OrderedList(Vec<Vec<Span>>),
    /// A bare bullet item. Bullets are never wrapped in a container.
    BulletItem(Vec<Span>),
}

/// Transforms raw reply text into displayable markup.
///
/// Pure and total: there is no failure condition, and the worst case is
/// escaped but unformatted text.
pub fn render(raw: &str) -> Markup {
    let escaped = escape::escape_html(raw);
    let mut nodes = Vec::new();
    for segment in fence::split_fences(&escaped) {
        match segment {
            Segment::Code { language, body } => nodes.push(Node::CodeBlock { language, body }),
            Segment::Text(text) => nodes.extend(lists::fold_lists(inline::tokenize(&text))),
        }
    }
    Markup { nodes }
}

impl Markup {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            match node {
                Node::CodeBlock { language, body } => {
                    write!(f, "<pre><code class=\"language-{language}\">{body}</code></pre>")?;
                }
                Node::Spans(spans) => write_spans(f, spans)?,
                Node::OrderedList(items) => {
                    f.write_str("<ol>")?;
                    for item in items {
                        f.write_str("<li>")?;
                        write_spans(f, item)?;
                        f.write_str("</li>")?;
                    }
                    f.write_str("</ol>")?;
                }
                Node::BulletItem(item) => {
                    f.write_str("<li>")?;
                    write_spans(f, item)?;
                    f.write_str("</li>")?;
                }
            }
        }
        Ok(())
    }
}

fn write_spans(f: &mut fmt::Formatter<'_>, spans: &[Span]) -> fmt::Result {
    for span in spans {
        match span {
            Span::Text(text) => f.write_str(text)?,
            Span::Code(code) => write!(f, "<code>{code}</code>")?,
            Span::Strong(inner) => {
                f.write_str("<strong>")?;
                write_spans(f, inner)?;
                f.write_str("</strong>")?;
            }
            Span::Em(inner) => {
                f.write_str("<em>")?;
                write_spans(f, inner)?;
                f.write_str("</em>")?;
            }
            Span::Break => f.write_str("<br>")?,
        }
    }
    Ok(())
}
