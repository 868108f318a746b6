//! Decoding of custom-tag attribute values.
//!
//! Rich-text editors store component arguments as JSON, HTML-escaped once
//! more on top of regular attribute escaping:
//!
//! ```text
//! filepath-with-value="&amp;quot;cat.png&amp;quot;"
//! ```
//!
//! The tokenizer undoes the outer layer (`&quot;cat.png&quot;`); the
//! functions here undo the inner layer and parse the JSON.

use std::borrow::Cow;

use serde_json::Value;

/// Undo one layer of attribute escaping.
///
/// Replacements are applied in a fixed order, `&amp;` last, so that
/// `&amp;quot;` becomes `&quot;` rather than `"`. Nested rich text relies
/// on exactly one layer being removed per level.
///
/// # Examples
///
/// ```
/// use contentrefs::rich_text::unescape_html_attr;
///
/// assert_eq!(unescape_html_attr("&quot;a.png&quot;"), "\"a.png\"");
/// assert_eq!(unescape_html_attr("&amp;quot;"), "&quot;");
/// assert_eq!(unescape_html_attr("plain"), "plain");
/// ```
pub fn unescape_html_attr(value: &str) -> Cow<'_, str> {
    if !value.contains('&') {
        return Cow::Borrowed(value);
    }

    Cow::Owned(
        value
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&"),
    )
}

/// Unescape an attribute value and parse it as JSON.
///
/// Returns `None` when the value is not valid JSON.
pub fn decode_escaped_json(value: &str) -> Option<Value> {
    serde_json::from_str(&unescape_html_attr(value)).ok()
}

/// Decode a filename-valued attribute.
///
/// Accepts a JSON string (the normal encoding) and falls back to a directly
/// quoted or bare filename. Empty names yield `None`.
///
/// # Examples
///
/// ```
/// use contentrefs::rich_text::decode_filename;
///
/// assert_eq!(decode_filename("&quot;a.png&quot;").as_deref(), Some("a.png"));
/// assert_eq!(decode_filename("\\&quot;b.png&quot;\\").as_deref(), Some("b.png"));
/// assert_eq!(decode_filename("c.png").as_deref(), Some("c.png"));
/// assert_eq!(decode_filename("&quot;&quot;"), None);
/// ```
pub fn decode_filename(value: &str) -> Option<String> {
    let unescaped = unescape_html_attr(value);

    match serde_json::from_str::<Value>(&unescaped) {
        Ok(Value::String(name)) => non_empty(name.trim()),
        Ok(_) => None,
        Err(_) => strip_quotes(&unescaped),
    }
}

fn strip_quotes(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('\\');

    let inner = ['"', '\'']
        .iter()
        .find_map(|&q| {
            trimmed
                .strip_prefix(q)
                .and_then(|rest| rest.strip_suffix(q))
        })
        .unwrap_or(trimmed)
        .trim();

    let plausible = !inner.chars().any(|c| {
        c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '{' | '}' | '[' | ']')
    });

    if plausible { non_empty(inner) } else { None }
}

fn non_empty(name: &str) -> Option<String> {
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
