//! Escape stage tests

use mentor_chat::render::{escape_html, render, unescape_html};

#[test]
fn escapes_the_five_target_characters() {
    assert_eq!(escape_html(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#039;");
}

#[test]
fn leaves_plain_text_untouched() {
    assert_eq!(escape_html("hello, world 123 éß"), "hello, world 123 éß");
}

#[test]
fn round_trip_is_lossless() {
    for raw in [
        "plain",
        "<script>alert('x')</script>",
        "a & b & c",
        "already &amp; escaped",
        "\"quotes\" and 'apostrophes'",
    ] {
        assert_eq!(unescape_html(&escape_html(raw)), raw);
    }
}

#[test]
fn unescape_leaves_unknown_entities_alone() {
    assert_eq!(unescape_html("&copy; &unknown"), "&copy; &unknown");
}

// Escaping is applied exactly once per render. The escape function itself is
// deliberately not idempotent: run over already-escaped text it escapes the
// ampersands again, matching the rendering pipeline it reproduces. The
// lossless round-trip above is the invariant that actually matters.
#[test]
fn escape_applied_twice_double_escapes() {
    assert_eq!(escape_html("&lt;"), "&amp;lt;");
    assert_eq!(escape_html(&escape_html("<")), "&amp;lt;");
}

#[test]
fn script_tag_is_neutralized() {
    let markup = render("<script>alert('pwn')</script>").to_string();
    assert!(markup.contains("&lt;script&gt;"));
    assert!(!markup.contains("<script>"));
}

#[test]
fn render_never_double_escapes() {
    // One escape pass only: the ampersand of a user-typed entity is escaped
    // once, and nothing later re-escapes it.
    assert_eq!(render("&").to_string(), "&amp;");
    assert_eq!(render("&amp;").to_string(), "&amp;amp;");
}
