//! Character escaping for the serializer.
//!
//! Every function here is a single left-to-right pass. Conditions that look at
//! neighbouring characters look at the input, not at the escaped output.

use std::borrow::Cow;

/// Replace each character for which `replace` returns `Some`.
///
/// `replace` receives the whole input, the byte offset of the character and the
/// character itself.
fn escape_by<'a>(
    text: &'a str,
    replace: impl Fn(&str, usize, char) -> Option<&'static str>,
) -> Cow<'a, str> {
    let mut out = String::new();
    let mut copied = 0;
    for (i, c) in text.char_indices() {
        if let Some(rep) = replace(text, i, c) {
            if out.is_empty() {
                out.reserve(text.len() + rep.len());
            }
            out.push_str(&text[copied..i]);
            out.push_str(rep);
            copied = i + c.len_utf8();
        }
    }
    if copied == 0 {
        return Cow::Borrowed(text);
    }
    out.push_str(&text[copied..]);
    Cow::Owned(out)
}

/// Check if the two characters before `index` are `]]`.
fn follows_cdata_end(text: &str, index: usize) -> bool {
    text[..index].ends_with("]]")
}

/// Escape a string for use inside a double-quoted attribute value.
///
/// | input | output |
/// | :---- | :----- |
/// | `&` | `&amp;` |
/// | `<` | `&lt;` |
/// | `>` after `]]` | `&gt;` |
/// | `"` | `&quot;` |
/// | TAB | `&#x9;` |
/// | CR | `&#xd;` |
/// | LF | `&#xa;` |
///
/// Any other `>` and `'` are written as is.
pub fn encode_attribute_value(text: &str) -> Cow<'_, str> {
    escape_by(text, |text, i, c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' if follows_cdata_end(text, i) => Some("&gt;"),
        '"' => Some("&quot;"),
        '\t' => Some("&#x9;"),
        '\r' => Some("&#xd;"),
        '\n' => Some("&#xa;"),
        _ => None,
    })
}

/// Escape the content of a text node.
///
/// `"` is escaped only if `encode_quotes` is `true`, which is the case for text
/// that is not the child of an element.
pub fn encode_text(text: &str, encode_quotes: bool) -> Cow<'_, str> {
    escape_by(text, |text, i, c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' if follows_cdata_end(text, i) => Some("&gt;"),
        '"' if encode_quotes => Some("&quot;"),
        '\r' => Some("&#xd;"),
        _ => None,
    })
}

/// Escape the replacement text of an internal entity for `<!ENTITY name "...">`.
///
/// Only an `&` that starts a character reference is escaped. Entity references
/// such as `&lt;` are left as they are.
pub fn encode_entity_value(text: &str) -> Cow<'_, str> {
    escape_by(text, |text, i, c| match c {
        '%' => Some("&#37;"),
        '"' => Some("&#34;"),
        '&' if text[i..].starts_with("&#") => Some("&#38;"),
        _ => None,
    })
}

/// Quote a system or public literal.
///
/// Single quotes are used unless `text` contains one.
pub fn quoted_literal(text: &str) -> String {
    let quote = if text.contains('\'') { '"' } else { '\'' };
    format!("{quote}{text}{quote}")
}
