//! HTML fragment helpers.
//!
//! Content and attribute values are inserted verbatim. Escaping is the
//! responsibility of whoever produced the message text.

use std::sync::LazyLock;

use regex::Regex;

/// Build `<tag attr="value" ...>content</tag>`, attributes in the given order.
pub fn element(tag: &str, content: &str, attrs: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(tag.len() * 2 + content.len() + 5);
    out.push('<');
    out.push_str(tag);
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');
    out.push_str(content);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    out
}

// Candidate pairs only: the closing name must also be a prefix of the opening
// name, which is checked after the match. An attribute containing `/` keeps
// its element alive.
static EMPTY_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<([A-Za-z0-9_]*)[^/>]*>\s*</([A-Za-z0-9_]*)>").expect("empty element pattern")
});

/// Remove element pairs whose body is empty or whitespace.
///
/// A pair is removed when its closing name is a prefix of the opening name
/// (`<span class="x"></span>`, but also `<strong></s>`). A candidate that
/// fails the name check is retried from the next byte, so `<a <b></b>` drops
/// only `<b></b>`.
pub fn strip_empty_elements(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut copied = 0;
    let mut pos = 0;
    while let Some(caps) = EMPTY_PAIR.captures_at(html, pos) {
        let pair = caps.get_match();
        if caps[1].starts_with(&caps[2]) {
            out.push_str(&html[copied..pair.start()]);
            copied = pair.end();
            pos = pair.end();
        } else {
            // `<` is one byte, so this stays on a char boundary.
            pos = pair.start() + 1;
        }
    }
    out.push_str(&html[copied..]);
    out
}
