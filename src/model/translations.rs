use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Translations of a state's content, keyed by content id, then language code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WrittenTranslations {
    pub translations_mapping: BTreeMap<String, BTreeMap<String, WrittenTranslation>>,
}

impl WrittenTranslations {
    /// The html translation of `content_id` in `language_code`, if one exists.
    pub fn translated_html(&self, content_id: &str, language_code: &str) -> Option<&str> {
        self.translations_mapping
            .get(content_id)?
            .get(language_code)?
            .html()
    }
}

fn html_format() -> String {
    "html".to_string()
}

/// A single translation.
///
/// Older dicts store `{ "html": ..., "needs_update": ... }`; newer ones add a
/// `data_format` and store the payload under `translation`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrittenTranslation {
    #[serde(default = "html_format")]
    pub data_format: String,
    #[serde(default, alias = "html")]
    pub translation: Value,
    #[serde(default)]
    pub needs_update: bool,
}

impl WrittenTranslation {
    /// The translation as html, when it is an html-format string.
    pub fn html(&self) -> Option<&str> {
        if self.data_format != "html" {
            return None;
        }
        self.translation.as_str().filter(|s| !s.is_empty())
    }
}

/// Audio voiceovers keyed by content id, then language code.
///
/// Voiceovers reference audio files, not images; they are never scanned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordedVoiceovers {
    pub voiceovers_mapping: BTreeMap<String, BTreeMap<String, Voiceover>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Voiceover {
    pub filename: String,
    pub file_size_bytes: u64,
    pub needs_update: bool,
    pub duration_secs: f64,
}
