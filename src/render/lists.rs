//! List line grouping, the final pipeline stage.
//!
//! Operates on the line structure the break pass produced. Ordered item
//! lines (`digits. text`) are collected into maximal runs and wrapped once;
//! the single break between two consecutive items is dropped so items render
//! contiguously. Bullet lines (`-` or `•`) become bare items with no
//! container, and mixed ordered/bullet content is never merged.

use super::Node;
use super::inline::Span;

enum LineKind {
    Ordered(Vec<Span>),
    Bullet(Vec<Span>),
    Plain(Vec<Span>),
}

/// Folds a span flow into display nodes, grouping list lines.
pub(crate) fn fold_lists(spans: Vec<Span>) -> Vec<Node> {
    let mut nodes: Vec<Node> = Vec::new();
    let mut flow: Vec<Span> = Vec::new();
    let mut run: Vec<Vec<Span>> = Vec::new();

    let mut first = true;
    for line in split_lines(spans) {
        let separator = !first;
        first = false;

        match classify(line) {
            LineKind::Ordered(content) => {
                if run.is_empty() {
                    if separator {
                        flow.push(Span::Break);
                    }
                    flush_flow(&mut nodes, &mut flow);
                }
                run.push(content);
            }
            LineKind::Bullet(content) => {
                flush_run(&mut nodes, &mut run);
                if separator {
                    flow.push(Span::Break);
                }
                flush_flow(&mut nodes, &mut flow);
                nodes.push(Node::BulletItem(content));
            }
            LineKind::Plain(content) => {
                flush_run(&mut nodes, &mut run);
                if separator {
                    flow.push(Span::Break);
                }
                flow.extend(content);
            }
        }
    }

    flush_run(&mut nodes, &mut run);
    flush_flow(&mut nodes, &mut flow);
    nodes
}

/// Splits the flow at top-level break markers. Breaks nested inside
/// emphasis spans stay where they are.
fn split_lines(spans: Vec<Span>) -> Vec<Vec<Span>> {
    let mut lines: Vec<Vec<Span>> = Vec::new();
    let mut current: Vec<Span> = Vec::new();
    for span in spans {
        if matches!(span, Span::Break) {
            lines.push(std::mem::take(&mut current));
        } else {
            current.push(span);
        }
    }
    lines.push(current);
    lines
}

fn classify(line: Vec<Span>) -> LineKind {
    if let Some(Span::Text(text)) = line.first() {
        if let Some(rest) = ordered_marker(text) {
            if let Some(content) = strip_marker(&line, rest) {
                return LineKind::Ordered(content);
            }
        } else if let Some(rest) = bullet_marker(text) {
            if let Some(content) = strip_marker(&line, rest) {
                return LineKind::Bullet(content);
            }
        }
    }
    LineKind::Plain(line)
}

/// `digits. ` at line start. Returns the text after the marker.
fn ordered_marker(text: &str) -> Option<&str> {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = text[digits..].strip_prefix('.')?;
    let trimmed = rest.trim_start_matches([' ', '\t']);
    (trimmed.len() < rest.len()).then_some(trimmed)
}

/// `- ` or `• ` at line start. Returns the text after the marker.
fn bullet_marker(text: &str) -> Option<&str> {
    let rest = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('•'))?;
    let trimmed = rest.trim_start_matches([' ', '\t']);
    (trimmed.len() < rest.len()).then_some(trimmed)
}

/// Rebuilds the line without its marker. A marker with nothing after it is
/// not an item; the caller keeps the line as plain text.
fn strip_marker(line: &[Span], rest: &str) -> Option<Vec<Span>> {
    let mut content: Vec<Span> = Vec::with_capacity(line.len());
    if !rest.is_empty() {
        content.push(Span::Text(rest.to_string()));
    }
    content.extend(line[1..].iter().cloned());
    if content.is_empty() { None } else { Some(content) }
}

fn flush_flow(nodes: &mut Vec<Node>, flow: &mut Vec<Span>) {
    if !flow.is_empty() {
        nodes.push(Node::Spans(std::mem::take(flow)));
    }
}

fn flush_run(nodes: &mut Vec<Node>, run: &mut Vec<Vec<Span>>) {
    if !run.is_empty() {
        nodes.push(Node::OrderedList(std::mem::take(run)));
    }
}
