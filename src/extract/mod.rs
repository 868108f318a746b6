//! Image filename extraction from explorations, states and skills.
//!
//! The extractor walks every rich-text field of a domain object, plus the
//! customization arguments whose schema can hold images, and collects the
//! filenames it finds. It never fails: absent fields, unknown interaction
//! kinds and values that do not match their schema are skipped.

mod filenames;

pub use filenames::ImageFilenames;

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use crate::config::ExtractorConfig;
use crate::model::{
    ArgSchema, Exploration, Interaction, Misconception, Rubric, Skill, SkillContents, State,
    SubtitledHtml, WrittenTranslations,
};
use crate::rich_text::RichTextScanner;

/// Collects image filenames from content objects.
///
/// ```
/// use contentrefs::{Extractor, State};
///
/// let state = State::with_content(
///     r#"<oppia-noninteractive-image filepath-with-value="&amp;quot;foo.png&amp;quot;"></oppia-noninteractive-image>"#,
/// );
/// let names = Extractor::default().image_filenames_in_state(&state);
/// assert_eq!(names.as_slice(), ["foo.png"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    fn scanner(&self) -> RichTextScanner {
        RichTextScanner::new(self.config.max_depth)
    }

    /// Filenames referenced by a single state.
    pub fn image_filenames_in_state(&self, state: &State) -> ImageFilenames {
        let mut walk = Walk::new(self, Some(&state.written_translations));
        walk.subtitled(&state.content);
        walk.interaction(&state.interaction);
        walk.names
    }

    /// Filenames referenced anywhere in an exploration.
    pub fn image_filenames_in_exploration(&self, exploration: &Exploration) -> ImageFilenames {
        let mut names = ImageFilenames::new();
        for state in exploration.states.values() {
            names.merge(self.image_filenames_in_state(state));
        }
        names
    }

    /// Filenames referenced by each state of an exploration, keyed by state name.
    pub fn image_filenames_by_state(
        &self,
        exploration: &Exploration,
    ) -> BTreeMap<String, ImageFilenames> {
        exploration
            .states
            .iter()
            .map(|(name, state)| (name.clone(), self.image_filenames_in_state(state)))
            .collect()
    }

    /// Filenames in a skill's explanation and worked examples.
    pub fn image_filenames_in_skill_contents(&self, contents: &SkillContents) -> ImageFilenames {
        let mut walk = Walk::new(self, Some(&contents.written_translations));
        walk.subtitled(&contents.explanation);
        for example in &contents.worked_examples {
            walk.subtitled(&example.question);
            walk.subtitled(&example.explanation);
        }
        walk.names
    }

    /// Filenames in a skill's misconceptions and rubrics, supplied as
    /// parallel lists.
    pub fn image_filenames_in_misconceptions_and_rubrics(
        &self,
        misconceptions: &[Misconception],
        rubrics: &[Rubric],
    ) -> ImageFilenames {
        let mut walk = Walk::new(self, None);
        for misconception in misconceptions {
            walk.html(&misconception.notes);
            walk.html(&misconception.feedback);
        }
        for rubric in rubrics {
            for explanation in &rubric.explanations {
                walk.html(explanation);
            }
        }
        walk.names
    }

    /// Filenames referenced anywhere in a skill.
    pub fn image_filenames_in_skill(&self, skill: &Skill) -> ImageFilenames {
        let mut names = self.image_filenames_in_skill_contents(&skill.skill_contents);
        names.merge(
            self.image_filenames_in_misconceptions_and_rubrics(
                &skill.misconceptions,
                &skill.rubrics,
            ),
        );
        names
    }
}

/// One traversal: accumulates filenames and resolves translations.
struct Walk<'a> {
    scanner: RichTextScanner,
    language_code: Option<&'a str>,
    translations: Option<&'a WrittenTranslations>,
    names: ImageFilenames,
}

impl<'a> Walk<'a> {
    fn new(extractor: &'a Extractor, translations: Option<&'a WrittenTranslations>) -> Self {
        Self {
            scanner: extractor.scanner(),
            language_code: extractor.config.language_code.as_deref(),
            translations,
            names: ImageFilenames::new(),
        }
    }

    fn html(&mut self, html: &str) {
        let refs = self.scanner.scan(html);
        self.names.extend(refs.into_iter().map(|r| r.filename));
    }

    fn subtitled(&mut self, field: &SubtitledHtml) {
        self.translatable(&field.content_id, &field.html);
    }

    /// Scan a content-id'd field, preferring its translation when a
    /// language is configured.
    fn translatable(&mut self, content_id: &str, html: &str) {
        let translated = match (self.language_code, self.translations) {
            (Some(language), Some(translations)) if !content_id.is_empty() => {
                translations.translated_html(content_id, language)
            }
            _ => None,
        };
        self.html(translated.unwrap_or(html));
    }

    fn interaction(&mut self, interaction: &Interaction) {
        for group in &interaction.answer_groups {
            self.subtitled(&group.outcome.feedback);
        }
        if let Some(outcome) = &interaction.default_outcome {
            self.subtitled(&outcome.feedback);
        }
        for hint in &interaction.hints {
            self.subtitled(&hint.hint_content);
        }
        if let Some(solution) = &interaction.solution {
            self.subtitled(&solution.explanation);
        }
        self.customization_args(interaction);
    }

    fn customization_args(&mut self, interaction: &Interaction) {
        let Some(kind) = interaction.kind() else {
            return;
        };

        for (name, arg) in &interaction.customization_args {
            let Some(schema) = kind.arg_schema(name) else {
                debug!(interaction = %kind, arg = %name, "undeclared customization arg skipped");
                continue;
            };
            if !schema.can_hold_images() {
                continue;
            }
            if !self.customization_value(schema, &arg.value) {
                debug!(interaction = %kind, arg = %name, ?schema, "value does not match schema");
            }
        }
    }

    /// Scan one argument value. Returns `false` if its shape does not match
    /// `schema`.
    fn customization_value(&mut self, schema: ArgSchema, value: &Value) -> bool {
        match schema {
            ArgSchema::RichText => self.subtitled_value(value),
            ArgSchema::RichTextList => match value {
                Value::Array(items) => items
                    .iter()
                    .fold(true, |ok, item| self.subtitled_value(item) && ok),
                _ => false,
            },
            ArgSchema::ImageWithRegions => match value.get("imagePath") {
                Some(Value::String(path)) => {
                    let path = path.trim();
                    if !path.is_empty() {
                        self.names.insert(path);
                    }
                    true
                }
                _ => false,
            },
            _ => true,
        }
    }

    fn subtitled_value(&mut self, value: &Value) -> bool {
        match value {
            Value::Object(field) => match field.get("html") {
                Some(Value::String(html)) => {
                    let content_id = field.get("content_id").and_then(Value::as_str);
                    self.translatable(content_id.unwrap_or_default(), html);
                    true
                }
                _ => false,
            },
            // Pre-SubtitledHtml dicts stored choices as bare html strings.
            Value::String(html) => {
                self.html(html);
                true
            }
            _ => false,
        }
    }
}

/// Filenames referenced by `state`, with the default configuration.
pub fn image_filenames_in_state(state: &State) -> ImageFilenames {
    Extractor::default().image_filenames_in_state(state)
}

/// Filenames referenced anywhere in `exploration`, with the default configuration.
pub fn image_filenames_in_exploration(exploration: &Exploration) -> ImageFilenames {
    Extractor::default().image_filenames_in_exploration(exploration)
}

/// Filenames referenced anywhere in `skill`, with the default configuration.
pub fn image_filenames_in_skill(skill: &Skill) -> ImageFilenames {
    Extractor::default().image_filenames_in_skill(skill)
}
