//! Inline span tokenization: code spans, strong, emphasis, line breaks.
//!
//! Each pass consumes the previous pass's spans. Delimiters live only in
//! `Text` spans; completed spans from an earlier pass may sit inside a later
//! match (`**a `b` c**` bolds across the code span, `***x***` nests strong
//! inside emphasis). Unmatched delimiters stay literal.

use std::collections::VecDeque;

/// One inline element of a rendered reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Plain (escaped) text.
    Text(String),
    /// Single-backtick code span.
    Code(String),
    /// Double-asterisk strong emphasis.
    Strong(Vec<Span>),
    /// Single-asterisk emphasis.
    Em(Vec<Span>),
    /// Explicit line-break marker.
    Break,
}

/// Runs the inline passes in their fixed order over one text segment.
pub(crate) fn tokenize(text: &str) -> Vec<Span> {
    let spans = code_spans(text);
    let spans = emphasis_pass(spans, Emphasis::Strong);
    let spans = emphasis_pass(spans, Emphasis::Em);
    line_breaks(spans)
}

/// Splits single-backtick spans out of the text. Empty spans and unmatched
/// backticks stay literal.
fn code_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while let Some(open) = rest.find('`') {
        let after = &rest[open + 1..];
        match after.find('`') {
            Some(close) if close > 0 => {
                plain.push_str(&rest[..open]);
                push_text(&mut spans, std::mem::take(&mut plain));
                spans.push(Span::Code(after[..close].to_string()));
                rest = &after[close + 1..];
            }
            _ => {
                plain.push_str(&rest[..open + 1]);
                rest = after;
            }
        }
    }

    plain.push_str(rest);
    push_text(&mut spans, plain);
    spans
}

#[derive(Debug, Clone, Copy)]
enum Emphasis {
    Strong,
    Em,
}

impl Emphasis {
    fn delim(self) -> &'static str {
        match self {
            Emphasis::Strong => "**",
            Emphasis::Em => "*",
        }
    }

    fn wrap(self, inner: Vec<Span>) -> Span {
        match self {
            Emphasis::Strong => Span::Strong(inner),
            Emphasis::Em => Span::Em(inner),
        }
    }
}

/// Matches one emphasis kind at every nesting level. Children first, so the
/// single-asterisk pass sees inside spans the double-asterisk pass built.
fn emphasis_pass(spans: Vec<Span>, kind: Emphasis) -> Vec<Span> {
    let spans = spans
        .into_iter()
        .map(|span| match span {
            Span::Strong(inner) => Span::Strong(emphasis_pass(inner, kind)),
            Span::Em(inner) => Span::Em(emphasis_pass(inner, kind)),
            other => other,
        })
        .collect();
    match_level(spans, kind)
}

fn match_level(spans: Vec<Span>, kind: Emphasis) -> Vec<Span> {
    let delim = kind.delim();
    let mut out: Vec<Span> = Vec::new();
    let mut queue: VecDeque<Span> = spans.into_iter().collect();

    while let Some(span) = queue.pop_front() {
        let text = match span {
            Span::Text(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };
        let Some(open) = text.find(delim) else {
            push_text(&mut out, text);
            continue;
        };

        let tail = &text[open + delim.len()..];
        match close_emphasis(tail, &queue, delim) {
            Some((inner, remainder, consumed)) => {
                queue.drain(..consumed);
                push_text(&mut out, text[..open].to_string());
                out.push(kind.wrap(inner));
                if !remainder.is_empty() {
                    queue.push_front(Span::Text(remainder));
                }
            }
            None => {
                // Failed opener: step past one character and rescan, the way
                // a regex engine advances after a failed match position.
                let step = text[open..].chars().next().map_or(1, char::len_utf8);
                push_text(&mut out, text[..open + step].to_string());
                let rest = text[open + step..].to_string();
                if !rest.is_empty() {
                    queue.push_front(Span::Text(rest));
                }
            }
        }
    }
    out
}

/// Finds the closing delimiter for an opener whose content must hold no
/// literal `*`. Completed spans between opener and closer join the content.
/// Returns the inner spans, the text left after the closer, and how many
/// queued spans the match swallowed.
fn close_emphasis(
    tail: &str,
    queue: &VecDeque<Span>,
    delim: &str,
) -> Option<(Vec<Span>, String, usize)> {
    if let Some(pos) = tail.find('*') {
        if pos == 0 || !tail[pos..].starts_with(delim) {
            return None;
        }
        let inner = vec![Span::Text(tail[..pos].to_string())];
        return Some((inner, tail[pos + delim.len()..].to_string(), 0));
    }

    let mut inner: Vec<Span> = Vec::new();
    if !tail.is_empty() {
        inner.push(Span::Text(tail.to_string()));
    }
    for (index, span) in queue.iter().enumerate() {
        match span {
            Span::Text(text) => {
                let pos = text.find('*')?;
                if !text[pos..].starts_with(delim) {
                    return None;
                }
                if pos > 0 {
                    inner.push(Span::Text(text[..pos].to_string()));
                }
                if inner.is_empty() {
                    return None;
                }
                return Some((inner, text[pos + delim.len()..].to_string(), index + 1));
            }
            Span::Break => return None,
            other => inner.push(other.clone()),
        }
    }
    None
}

/// Replaces every newline with an explicit break marker, recursing into
/// emphasis children. Code span contents are left untouched.
fn line_breaks(spans: Vec<Span>) -> Vec<Span> {
    let mut out = Vec::new();
    for span in spans {
        match span {
            Span::Text(text) => {
                let mut first = true;
                for part in text.split('\n') {
                    if !first {
                        out.push(Span::Break);
                    }
                    first = false;
                    if !part.is_empty() {
                        out.push(Span::Text(part.to_string()));
                    }
                }
            }
            Span::Strong(inner) => out.push(Span::Strong(line_breaks(inner))),
            Span::Em(inner) => out.push(Span::Em(line_breaks(inner))),
            other => out.push(other),
        }
    }
    out
}

fn push_text(out: &mut Vec<Span>, text: String) {
    if text.is_empty() {
        return;
    }
    if let Some(Span::Text(last)) = out.last_mut() {
        last.push_str(&text);
    } else {
        out.push(Span::Text(text));
    }
}
