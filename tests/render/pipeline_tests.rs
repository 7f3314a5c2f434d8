//! Renderer pipeline tests, one construct at a time and in combination.

use mentor_chat::render::render;

fn markup(raw: &str) -> String {
    render(raw).to_string()
}

// ---------------------------------------------------------------------------
// Fenced code blocks
// ---------------------------------------------------------------------------

#[test]
fn tagged_fence_becomes_code_block() {
    assert_eq!(
        markup("```js\nlet x=1;\n```"),
        "<pre><code class=\"language-js\">let x=1;</code></pre>"
    );
}

#[test]
fn untagged_fence_defaults_to_text() {
    assert_eq!(
        markup("```\nplain\n```"),
        "<pre><code class=\"language-text\">plain</code></pre>"
    );
}

#[test]
fn block_interior_is_trimmed() {
    assert_eq!(
        markup("```py\n\n  x = 1\n\n```"),
        "<pre><code class=\"language-py\">x = 1</code></pre>"
    );
}

#[test]
fn block_interior_is_opaque_to_later_stages() {
    let out = markup("```\n**not bold** and 1. not a list\n```");
    assert_eq!(
        out,
        "<pre><code class=\"language-text\">**not bold** and 1. not a list</code></pre>"
    );
}

#[test]
fn unmatched_fence_stays_literal() {
    assert_eq!(markup("```js incomplete"), "```js incomplete");
}

#[test]
fn text_around_block_is_still_formatted() {
    assert_eq!(
        markup("see:\n```rs\nlet y;\n```\n**done**"),
        "see:<br><pre><code class=\"language-rs\">let y;</code></pre><br><strong>done</strong>"
    );
}

// ---------------------------------------------------------------------------
// Inline code
// ---------------------------------------------------------------------------

#[test]
fn inline_code_span() {
    assert_eq!(markup("`code`"), "<code>code</code>");
}

#[test]
fn inline_code_keeps_escaped_markup() {
    assert_eq!(markup("`<b>`"), "<code>&lt;b&gt;</code>");
}

#[test]
fn unmatched_backtick_stays_literal() {
    assert_eq!(markup("a ` b"), "a ` b");
}

#[test]
fn empty_code_span_stays_literal() {
    assert_eq!(markup("``"), "``");
}

// ---------------------------------------------------------------------------
// Emphasis
// ---------------------------------------------------------------------------

#[test]
fn bold_has_no_residual_asterisks() {
    let out = markup("**bold**");
    assert_eq!(out, "<strong>bold</strong>");
    assert!(!out.contains('*'));
}

#[test]
fn italic_wraps_single_asterisks() {
    assert_eq!(markup("*ital*"), "<em>ital</em>");
}

#[test]
fn bold_then_italic_in_one_line() {
    assert_eq!(
        markup("**bold** *em*"),
        "<strong>bold</strong> <em>em</em>"
    );
}

#[test]
fn triple_asterisks_nest_strong_inside_em() {
    assert_eq!(markup("***x***"), "<em><strong>x</strong></em>");
}

#[test]
fn bold_may_contain_a_code_span() {
    assert_eq!(
        markup("**a `b` c**"),
        "<strong>a <code>b</code> c</strong>"
    );
}

#[test]
fn unmatched_delimiters_stay_literal() {
    assert_eq!(markup("**open"), "**open");
    assert_eq!(markup("*open"), "*open");
    assert_eq!(markup("****"), "****");
}

// ---------------------------------------------------------------------------
// Line breaks
// ---------------------------------------------------------------------------

#[test]
fn newlines_become_break_markers() {
    assert_eq!(markup("a\nb\nc"), "a<br>b<br>c");
}

#[test]
fn empty_input_renders_empty() {
    assert_eq!(markup(""), "");
}

// ---------------------------------------------------------------------------
// Ordered lists
// ---------------------------------------------------------------------------

#[test]
fn consecutive_items_are_wrapped_once() {
    assert_eq!(
        markup("1. first\n2. second"),
        "<ol><li>first</li><li>second</li></ol>"
    );
}

#[test]
fn breaks_between_items_are_removed() {
    let out = markup("1. a\n2. b\n3. c");
    assert_eq!(out, "<ol><li>a</li><li>b</li><li>c</li></ol>");
    assert!(!out.contains("<br>"));
}

#[test]
fn surrounding_text_keeps_its_breaks() {
    assert_eq!(
        markup("Steps:\n1. a\n2. b\ndone"),
        "Steps:<br><ol><li>a</li><li>b</li></ol><br>done"
    );
}

#[test]
fn blank_line_splits_runs_into_adjacent_containers() {
    assert_eq!(
        markup("1. a\n\n2. b"),
        "<ol><li>a</li></ol><br><br><ol><li>b</li></ol>"
    );
}

#[test]
fn item_content_may_hold_emphasis() {
    assert_eq!(
        markup("1. **a**\n2. b"),
        "<ol><li><strong>a</strong></li><li>b</li></ol>"
    );
}

#[test]
fn number_without_text_is_not_an_item() {
    assert_eq!(markup("1. "), "1. ");
    assert_eq!(markup("1.x"), "1.x");
}

// ---------------------------------------------------------------------------
// Bullet items
// ---------------------------------------------------------------------------

// Accepted behavior, reproduced deliberately: bullet lines become bare list
// items and are never wrapped in a container, so the breaks between them
// stay.
#[test]
fn bullets_are_bare_items_without_a_container() {
    let out = markup("- a\n• b");
    assert_eq!(out, "<li>a</li><br><li>b</li>");
    assert!(!out.contains("<ul>"));
}

#[test]
fn dash_without_space_is_not_an_item() {
    assert_eq!(markup("-x"), "-x");
}

// Accepted behavior: mixed ordered/bullet content is wrapped independently,
// yielding adjacent structures rather than one merged list.
#[test]
fn mixed_kinds_are_not_merged() {
    assert_eq!(
        markup("1. a\n- b\n2. c"),
        "<ol><li>a</li></ol><br><li>b</li><br><ol><li>c</li></ol>"
    );
}

// ---------------------------------------------------------------------------
// Whole replies
// ---------------------------------------------------------------------------

#[test]
fn full_reply_composes_all_constructs() {
    let raw = "**Hint:** think about `HashMap`.\n\
               Approach:\n\
               1. scan once\n\
               2. store seen values\n\
               ```rust\nuse std::collections::HashMap;\n```";
    let out = markup(raw);
    assert_eq!(
        out,
        "<strong>Hint:</strong> think about <code>HashMap</code>.<br>\
         Approach:<br>\
         <ol><li>scan once</li><li>store seen values</li></ol><br>\
         <pre><code class=\"language-rust\">use std::collections::HashMap;</code></pre>"
    );
}
