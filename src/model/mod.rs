//! Content data model, deserialized from backend JSON dicts.
//!
//! This module contains:
//! - Explorations and their states
//! - Interactions, outcomes, hints and solutions
//! - Interaction kinds and their customization-argument schemas
//! - Written translations and recorded voiceovers
//! - Skills, misconceptions and rubrics
//!
//! Unknown JSON fields are ignored and absent fields take their defaults, so
//! dicts from any schema version deserialize as long as the fields the
//! extractor reads keep their shape.

mod exploration;
mod interaction;
mod skill;
mod translations;

pub use exploration::{Exploration, State};
pub use interaction::{
    AnswerGroup, ArgSchema, CustomizationArg, Hint, Interaction, InteractionKind, Outcome,
    RuleSpec, Solution,
};
pub use skill::{Misconception, Rubric, Skill, SkillContents, WorkedExample};
pub use translations::{RecordedVoiceovers, Voiceover, WrittenTranslation, WrittenTranslations};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A rich-text field together with the content id its translations and
/// voiceovers are keyed by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubtitledHtml {
    #[serde(deserialize_with = "id_string")]
    pub content_id: String,
    pub html: String,
}

impl SubtitledHtml {
    pub fn new(content_id: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            content_id: content_id.into(),
            html: html.into(),
        }
    }
}

/// Ids arrive as strings in most dicts but as numbers in some fixtures.
pub(crate) fn id_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Treat an explicit `null` like an absent field.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
