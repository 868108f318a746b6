use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    Interaction, RecordedVoiceovers, SubtitledHtml, WrittenTranslations, id_string, null_default,
};

/// An exploration: a graph of named states.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Exploration {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub title: String,
    pub category: String,
    pub objective: String,
    pub language_code: String,
    #[serde(deserialize_with = "null_default")]
    pub tags: Vec<String>,
    pub blurb: String,
    pub author_notes: String,
    pub init_state_name: String,
    pub states_schema_version: Option<u32>,
    pub states: BTreeMap<String, State>,
    #[serde(deserialize_with = "null_default")]
    pub param_changes: Vec<Value>,
    pub version: Option<u32>,
}

impl Exploration {
    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.get(name)
    }
}

/// A node in an exploration graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    #[serde(deserialize_with = "null_default")]
    pub content: SubtitledHtml,
    #[serde(deserialize_with = "null_default")]
    pub interaction: Interaction,
    #[serde(deserialize_with = "null_default")]
    pub param_changes: Vec<Value>,
    #[serde(deserialize_with = "null_default")]
    pub recorded_voiceovers: RecordedVoiceovers,
    #[serde(deserialize_with = "null_default")]
    pub written_translations: WrittenTranslations,
    pub linked_skill_id: Option<String>,
    pub classifier_model_id: Option<String>,
    pub next_content_id_index: Option<u32>,
    pub solicit_answer_details: bool,
    pub card_is_checkpoint: bool,
}

impl State {
    /// A state with the given content html and no interaction.
    pub fn with_content(html: impl Into<String>) -> Self {
        Self {
            content: SubtitledHtml::new("content", html),
            ..Self::default()
        }
    }
}
