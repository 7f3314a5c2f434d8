//! Entity escaping, the first pipeline stage.
//!
//! Every later stage operates on already-escaped text, so nothing a user or
//! model types can smuggle live markup into the output.

/// Replaces the five XSS-relevant characters with their entity equivalents.
///
/// Applied exactly once per reply, before any other stage. Escaping an
/// already-escaped string escapes its ampersands again; [`unescape_html`] is
/// the exact inverse, so the escape/unescape round-trip is lossless.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Exact inverse of [`escape_html`] for the five entities it produces.
///
/// Used when escaped markup content has to be shown as plain terminal text.
pub fn unescape_html(text: &str) -> String {
    const ENTITIES: [(&str, char); 5] = [
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&#039;", '\''),
    ];

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];
        match ENTITIES
            .iter()
            .find_map(|(entity, c)| rest.strip_prefix(entity).map(|r| (r, *c)))
        {
            Some((remaining, c)) => {
                out.push(c);
                rest = remaining;
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
