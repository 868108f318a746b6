//! Rich-text scanning.
//!
//! Rich text is HTML with custom component tags. Component arguments live in
//! `*-with-value` attributes as escaped JSON (see [`escape`]). Some
//! components (collapsibles, tabs) carry further rich text in those
//! arguments, escaped once more per level; the scanner descends into them.
//!
//! Markup is tokenized with html5ever's HTML5 tokenizer, so malformed input
//! is handled the way a browser would handle it: missing whitespace between
//! attributes, unclosed tags and stray quotes never abort a scan.

mod escape;
mod tags;

pub use escape::{decode_escaped_json, decode_filename, unescape_html_attr};
pub use tags::{ComponentTag, ImageRef, ImageSource};

use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use serde_json::Value;
use tracing::{debug, trace};

use crate::config::DEFAULT_MAX_DEPTH;

/// A component start tag with its payload attribute, if present.
#[derive(Debug)]
struct ComponentOccurrence {
    tag: ComponentTag,
    payload: Option<String>,
}

/// Token sink that keeps only component start tags.
///
/// Uses interior mutability because html5ever's TokenSink trait takes
/// `&self`.
#[derive(Default)]
struct ComponentSink {
    found: RefCell<Vec<ComponentOccurrence>>,
}

impl TokenSink for ComponentSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        if let Token::TagToken(tag) = token
            && tag.kind == TagKind::StartTag
            && let Some(component) = ComponentTag::from_tag_name(&tag.name)
        {
            let wanted = component.payload_attr();
            let payload = tag
                .attrs
                .iter()
                .find(|attr| &*attr.name.local == wanted)
                .map(|attr| attr.value.to_string());

            self.found.borrow_mut().push(ComponentOccurrence {
                tag: component,
                payload,
            });
        }
        TokenSinkResult::Continue
    }
}

/// Tokenize `html` and return its component tags in document order.
fn component_tags(html: &str) -> Vec<ComponentOccurrence> {
    let tokenizer = Tokenizer::new(ComponentSink::default(), TokenizerOpts::default());
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));
    let _ = tokenizer.feed(&input);
    tokenizer.end();
    tokenizer.sink.found.take()
}

/// Finds image references in rich text, descending into nested rich text
/// up to a fixed depth.
#[derive(Debug, Clone, Copy)]
pub struct RichTextScanner {
    max_depth: usize,
}

impl Default for RichTextScanner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl RichTextScanner {
    /// `max_depth` bounds how many container levels are entered; 0 scans
    /// only the top level.
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// All image references in `html`, in document order, duplicates kept.
    pub fn scan(&self, html: &str) -> Vec<ImageRef> {
        let mut refs = Vec::new();
        self.scan_into(html, &mut refs);
        refs
    }

    /// Append the image references in `html` to `out`.
    pub fn scan_into(&self, html: &str, out: &mut Vec<ImageRef>) {
        self.scan_level(html, 0, out);
    }

    fn scan_level(&self, html: &str, depth: usize, out: &mut Vec<ImageRef>) {
        if memchr::memchr(b'<', html.as_bytes()).is_none() {
            return;
        }

        for occurrence in component_tags(html) {
            let Some(payload) = occurrence.payload else {
                debug!(tag = occurrence.tag.tag_name(), "component without payload attribute");
                continue;
            };

            match occurrence.tag {
                ComponentTag::Image => push_filename(&payload, ImageSource::Image, out),
                ComponentTag::SvgDiagram => push_filename(&payload, ImageSource::SvgDiagram, out),
                ComponentTag::Math => push_math_svg(&payload, out),
                ComponentTag::Collapsible | ComponentTag::Tabs => {
                    if depth >= self.max_depth {
                        debug!(depth, tag = occurrence.tag.tag_name(), "nesting too deep, skipped");
                        continue;
                    }
                    for nested in nested_rich_text(occurrence.tag, &payload) {
                        self.scan_level(&nested, depth + 1, out);
                    }
                }
            }
        }
    }
}

fn push_filename(payload: &str, source: ImageSource, out: &mut Vec<ImageRef>) {
    match decode_filename(payload) {
        Some(filename) => {
            trace!(%filename, ?source, "image reference");
            out.push(ImageRef::new(filename, source));
        }
        None => debug!(payload, "undecodable filename attribute"),
    }
}

fn push_math_svg(payload: &str, out: &mut Vec<ImageRef>) {
    let filename = decode_escaped_json(payload).and_then(|value| match value {
        Value::Object(mut map) => match map.remove("svg_filename") {
            Some(Value::String(name)) if !name.trim().is_empty() => Some(name.trim().to_string()),
            _ => None,
        },
        _ => None,
    });

    match filename {
        Some(filename) => out.push(ImageRef::new(filename, ImageSource::Math)),
        None => debug!(payload, "math component without svg filename"),
    }
}

/// Rich-text fragments carried by a container component's payload.
fn nested_rich_text(tag: ComponentTag, payload: &str) -> Vec<String> {
    let Some(value) = decode_escaped_json(payload) else {
        debug!(tag = tag.tag_name(), "undecodable container payload");
        return Vec::new();
    };

    match (tag, value) {
        (ComponentTag::Collapsible, Value::String(html)) => vec![html],
        (ComponentTag::Tabs, Value::Array(tabs)) => tabs
            .into_iter()
            .filter_map(|tab| match tab {
                Value::Object(mut map) => match map.remove("content") {
                    Some(Value::String(html)) => Some(html),
                    _ => None,
                },
                _ => None,
            })
            .collect(),
        (tag, _) => {
            debug!(tag = tag.tag_name(), "unexpected container payload shape");
            Vec::new()
        }
    }
}

/// Image references in `html`, scanned with the default depth.
///
/// # Examples
///
/// ```
/// use contentrefs::rich_text::scan_rich_text;
///
/// let html = r#"<p><oppia-noninteractive-image filepath-with-value="&amp;quot;cat.png&amp;quot;"></oppia-noninteractive-image></p>"#;
/// let refs = scan_rich_text(html);
/// assert_eq!(refs.len(), 1);
/// assert_eq!(refs[0].filename, "cat.png");
/// ```
pub fn scan_rich_text(html: &str) -> Vec<ImageRef> {
    RichTextScanner::default().scan(html)
}
