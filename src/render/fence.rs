//! Fenced code block extraction.
//!
//! Splits escaped text into code and text segments. Code interiors are
//! opaque to every later stage, so backticks, asterisks, and list markers
//! inside a fence stay literal.

const FENCE: &str = "```";

/// One top-level region of a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    /// Triple-backtick region with its language tag and trimmed body.
    Code { language: String, body: String },
    /// Everything else, handed to the inline stages.
    Text(String),
}

/// Splits the escaped text on well-formed fences. An opening fence with no
/// closing counterpart, or with no line break after its language tag, stays
/// in the text as literal characters.
pub(crate) fn split_fences(escaped: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut rest = escaped;

    while let Some(open) = rest.find(FENCE) {
        let after = &rest[open + FENCE.len()..];
        match parse_block(after) {
            Some((language, body, consumed)) => {
                text.push_str(&rest[..open]);
                if !text.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut text)));
                }
                segments.push(Segment::Code { language, body });
                rest = &after[consumed..];
            }
            None => {
                text.push_str(&rest[..open + FENCE.len()]);
                rest = after;
            }
        }
    }

    text.push_str(rest);
    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }
    segments
}

/// Parses `lang?\n … ``` ` following an opening fence. Returns the language
/// tag (default `text`), the trimmed body, and the bytes consumed.
fn parse_block(after: &str) -> Option<(String, String, usize)> {
    let lang_len = after
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .map(char::len_utf8)
        .sum::<usize>();
    let (lang, past_lang) = after.split_at(lang_len);
    if !past_lang.starts_with('\n') {
        return None;
    }

    let close = past_lang[1..].find(FENCE)?;
    let body = past_lang[1..1 + close].trim().to_string();
    let language = if lang.is_empty() {
        "text".to_string()
    } else {
        lang.to_string()
    };
    Some((language, body, lang_len + 1 + close + FENCE.len()))
}
