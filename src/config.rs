//! Extraction settings.

/// Default bound on how deeply collapsible/tab content may nest.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Settings for an [`Extractor`](crate::Extractor).
///
/// ```
/// use contentrefs::ExtractorConfig;
///
/// let config = ExtractorConfig::new().with_language("hi").with_max_depth(4);
/// assert_eq!(config.language_code.as_deref(), Some("hi"));
/// assert_eq!(config.max_depth, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Scan html translations in this language instead of the original
    /// html, where a translation exists.
    pub language_code: Option<String>,
    /// Maximum nesting of rich text inside custom tags. Fragments nested
    /// deeper are skipped.
    pub max_depth: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            language_code: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ExtractorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, code: impl Into<String>) -> Self {
        self.language_code = Some(code.into());
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractorConfig::default();
        assert_eq!(config.language_code, None);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }
}
