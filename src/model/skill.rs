use serde::{Deserialize, Serialize};

use super::{RecordedVoiceovers, SubtitledHtml, WrittenTranslations, id_string, null_default};

/// A reusable competency: concept card contents plus the misconceptions
/// and rubrics associated with it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub misconceptions: Vec<Misconception>,
    #[serde(deserialize_with = "null_default")]
    pub rubrics: Vec<Rubric>,
    #[serde(deserialize_with = "null_default")]
    pub skill_contents: SkillContents,
    pub language_code: String,
    pub version: Option<u32>,
    #[serde(deserialize_with = "null_default")]
    pub prerequisite_skill_ids: Vec<String>,
    pub next_misconception_id: Option<u32>,
    pub superseding_skill_id: Option<String>,
    pub all_questions_merged: bool,
}

/// The concept card: explanation and worked examples.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillContents {
    #[serde(deserialize_with = "null_default")]
    pub explanation: SubtitledHtml,
    #[serde(deserialize_with = "null_default")]
    pub worked_examples: Vec<WorkedExample>,
    #[serde(deserialize_with = "null_default")]
    pub recorded_voiceovers: RecordedVoiceovers,
    #[serde(deserialize_with = "null_default")]
    pub written_translations: WrittenTranslations,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkedExample {
    #[serde(deserialize_with = "null_default")]
    pub question: SubtitledHtml,
    #[serde(deserialize_with = "null_default")]
    pub explanation: SubtitledHtml,
}

/// A common learner mistake. `notes` and `feedback` are raw rich text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Misconception {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub notes: String,
    #[serde(deserialize_with = "null_default")]
    pub feedback: String,
    pub must_be_addressed: bool,
}

/// Difficulty-level guidance. Each explanation is raw rich text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rubric {
    pub difficulty: String,
    #[serde(deserialize_with = "null_default")]
    pub explanations: Vec<String>,
}
