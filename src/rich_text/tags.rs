//! Custom rich-text component tags and the attributes that carry their data.

/// A rich-text component that can reference images, directly or through
/// nested rich text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentTag {
    /// Inline image. `filepath-with-value` holds a JSON string.
    Image,
    /// Rendered formula. `math_content-with-value` holds
    /// `{ "raw_latex": ..., "svg_filename": ... }`.
    Math,
    /// Legacy drawn diagram. `svg_filename-with-value` holds a JSON string.
    SvgDiagram,
    /// Expandable block. `content-with-value` holds a JSON string of rich text.
    Collapsible,
    /// Tab container. `tab_contents-with-value` holds
    /// `[{ "title": ..., "content": <rich text> }, ...]`.
    Tabs,
}

impl ComponentTag {
    pub const ALL: [ComponentTag; 5] = [
        ComponentTag::Image,
        ComponentTag::Math,
        ComponentTag::SvgDiagram,
        ComponentTag::Collapsible,
        ComponentTag::Tabs,
    ];

    /// Element name, as the tokenizer reports it (lowercase).
    pub fn tag_name(self) -> &'static str {
        match self {
            ComponentTag::Image => "oppia-noninteractive-image",
            ComponentTag::Math => "oppia-noninteractive-math",
            ComponentTag::SvgDiagram => "oppia-noninteractive-svgdiagram",
            ComponentTag::Collapsible => "oppia-noninteractive-collapsible",
            ComponentTag::Tabs => "oppia-noninteractive-tabs",
        }
    }

    /// The attribute holding this component's payload.
    pub fn payload_attr(self) -> &'static str {
        match self {
            ComponentTag::Image => "filepath-with-value",
            ComponentTag::Math => "math_content-with-value",
            ComponentTag::SvgDiagram => "svg_filename-with-value",
            ComponentTag::Collapsible => "content-with-value",
            ComponentTag::Tabs => "tab_contents-with-value",
        }
    }

    pub fn from_tag_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.tag_name() == name)
    }
}

/// Where a filename was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSource {
    Image,
    Math,
    SvgDiagram,
}

/// A single image reference found in rich text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef {
    pub filename: String,
    pub source: ImageSource,
}

impl ImageRef {
    pub fn new(filename: impl Into<String>, source: ImageSource) -> Self {
        Self {
            filename: filename.into(),
            source,
        }
    }
}
