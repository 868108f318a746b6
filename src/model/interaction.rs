use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{SubtitledHtml, null_default};

/// The interaction attached to a state.
///
/// `id` is `None` for states with no interaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Interaction {
    pub id: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub customization_args: BTreeMap<String, CustomizationArg>,
    #[serde(deserialize_with = "null_default")]
    pub answer_groups: Vec<AnswerGroup>,
    pub default_outcome: Option<Outcome>,
    #[serde(deserialize_with = "null_default")]
    pub confirmed_unclassified_answers: Vec<Value>,
    #[serde(deserialize_with = "null_default")]
    pub hints: Vec<Hint>,
    pub solution: Option<Solution>,
}

impl Interaction {
    /// The kind of this interaction, or `None` when there is none.
    pub fn kind(&self) -> Option<InteractionKind> {
        self.id.as_deref().map(InteractionKind::from_id)
    }
}

/// A customization argument as stored in the dict: `{ "value": ... }`.
///
/// The value's shape depends on the argument's [`ArgSchema`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomizationArg {
    pub value: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Outcome {
    pub dest: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub feedback: SubtitledHtml,
    pub labelled_as_correct: bool,
    #[serde(deserialize_with = "null_default")]
    pub param_changes: Vec<Value>,
    pub refresher_exploration_id: Option<String>,
    pub missing_prerequisite_skill_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerGroup {
    #[serde(deserialize_with = "null_default")]
    pub outcome: Outcome,
    #[serde(deserialize_with = "null_default")]
    pub rule_specs: Vec<RuleSpec>,
    #[serde(deserialize_with = "null_default")]
    pub training_data: Vec<Value>,
    pub tagged_skill_misconception_id: Option<String>,
}

/// A classification rule. Inputs mirror the interaction's choices and are
/// not scanned for images.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSpec {
    pub rule_type: String,
    pub inputs: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Hint {
    #[serde(deserialize_with = "null_default")]
    pub hint_content: SubtitledHtml,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Solution {
    pub answer_is_exclusive: bool,
    pub correct_answer: Value,
    #[serde(deserialize_with = "null_default")]
    pub explanation: SubtitledHtml,
}

/// Declared schema type of a customization argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgSchema {
    /// A `SubtitledHtml` object.
    RichText,
    /// A list of `SubtitledHtml` objects.
    RichTextList,
    /// An image with labeled click regions: `{ imagePath, labeledRegions }`.
    ImageWithRegions,
    /// A `SubtitledUnicode` object.
    UnicodeText,
    UnicodeList,
    Int,
    Bool,
    /// Anything else (graphs, maps, code). Never carries images.
    Opaque,
}

impl ArgSchema {
    /// Whether values of this schema can reference images.
    pub fn can_hold_images(self) -> bool {
        matches!(
            self,
            ArgSchema::RichText | ArgSchema::RichTextList | ArgSchema::ImageWithRegions
        )
    }
}

/// Known interaction kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    AlgebraicExpressionInput,
    CodeRepl,
    Continue,
    DragAndDropSortInput,
    EndExploration,
    FractionInput,
    GraphInput,
    ImageClickInput,
    InteractiveMap,
    ItemSelectionInput,
    MathEquationInput,
    MultipleChoiceInput,
    MusicNotesInput,
    NumberWithUnits,
    NumericExpressionInput,
    NumericInput,
    PencilCodeEditor,
    RatioExpressionInput,
    SetInput,
    TextInput,
    /// An id this crate has no schema for.
    Unknown(String),
}

impl InteractionKind {
    pub fn from_id(id: &str) -> Self {
        match id {
            "AlgebraicExpressionInput" => Self::AlgebraicExpressionInput,
            "CodeRepl" => Self::CodeRepl,
            "Continue" => Self::Continue,
            "DragAndDropSortInput" => Self::DragAndDropSortInput,
            "EndExploration" => Self::EndExploration,
            "FractionInput" => Self::FractionInput,
            "GraphInput" => Self::GraphInput,
            "ImageClickInput" => Self::ImageClickInput,
            "InteractiveMap" => Self::InteractiveMap,
            "ItemSelectionInput" => Self::ItemSelectionInput,
            "MathEquationInput" => Self::MathEquationInput,
            "MultipleChoiceInput" => Self::MultipleChoiceInput,
            "MusicNotesInput" => Self::MusicNotesInput,
            "NumberWithUnits" => Self::NumberWithUnits,
            "NumericExpressionInput" => Self::NumericExpressionInput,
            "NumericInput" => Self::NumericInput,
            "PencilCodeEditor" => Self::PencilCodeEditor,
            "RatioExpressionInput" => Self::RatioExpressionInput,
            "SetInput" => Self::SetInput,
            "TextInput" => Self::TextInput,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::AlgebraicExpressionInput => "AlgebraicExpressionInput",
            Self::CodeRepl => "CodeRepl",
            Self::Continue => "Continue",
            Self::DragAndDropSortInput => "DragAndDropSortInput",
            Self::EndExploration => "EndExploration",
            Self::FractionInput => "FractionInput",
            Self::GraphInput => "GraphInput",
            Self::ImageClickInput => "ImageClickInput",
            Self::InteractiveMap => "InteractiveMap",
            Self::ItemSelectionInput => "ItemSelectionInput",
            Self::MathEquationInput => "MathEquationInput",
            Self::MultipleChoiceInput => "MultipleChoiceInput",
            Self::MusicNotesInput => "MusicNotesInput",
            Self::NumberWithUnits => "NumberWithUnits",
            Self::NumericExpressionInput => "NumericExpressionInput",
            Self::NumericInput => "NumericInput",
            Self::PencilCodeEditor => "PencilCodeEditor",
            Self::RatioExpressionInput => "RatioExpressionInput",
            Self::SetInput => "SetInput",
            Self::TextInput => "TextInput",
            Self::Unknown(id) => id.as_str(),
        }
    }

    /// Customization arguments this kind declares, with their schemas.
    ///
    /// Empty for [`InteractionKind::Unknown`].
    pub fn arg_specs(&self) -> &'static [(&'static str, ArgSchema)] {
        use ArgSchema::*;

        match self {
            Self::AlgebraicExpressionInput | Self::MathEquationInput => &[
                ("customOskLetters", UnicodeList),
                ("useFractionForDivision", Bool),
            ],
            Self::CodeRepl => &[
                ("language", Opaque),
                ("placeholder", Opaque),
                ("preCode", Opaque),
                ("postCode", Opaque),
            ],
            Self::Continue => &[("buttonText", UnicodeText)],
            Self::DragAndDropSortInput => &[
                ("choices", RichTextList),
                ("allowMultipleItemsInSamePosition", Bool),
            ],
            Self::EndExploration => &[("recommendedExplorationIds", UnicodeList)],
            Self::FractionInput => &[
                ("requireSimplestForm", Bool),
                ("allowImproperFraction", Bool),
                ("allowNonzeroIntegerPart", Bool),
                ("customPlaceholder", UnicodeText),
            ],
            Self::GraphInput => &[
                ("graph", Opaque),
                ("canAddVertex", Bool),
                ("canDeleteVertex", Bool),
                ("canMoveVertex", Bool),
                ("canEditVertexLabel", Bool),
                ("canAddEdge", Bool),
                ("canDeleteEdge", Bool),
                ("canEditEdgeWeight", Bool),
            ],
            Self::ImageClickInput => &[
                ("imageAndRegions", ImageWithRegions),
                ("highlightRegionsOnHover", Bool),
            ],
            Self::InteractiveMap => &[
                ("latitude", Opaque),
                ("longitude", Opaque),
                ("zoom", Opaque),
            ],
            Self::ItemSelectionInput => &[
                ("minAllowableSelectionCount", Int),
                ("maxAllowableSelectionCount", Int),
                ("choices", RichTextList),
            ],
            Self::MultipleChoiceInput => &[
                ("choices", RichTextList),
                ("showChoicesInShuffledOrder", Bool),
            ],
            Self::MusicNotesInput => &[("sequenceToGuess", Opaque), ("initialSequence", Opaque)],
            Self::NumberWithUnits => &[],
            Self::NumericExpressionInput => &[
                ("placeholder", UnicodeText),
                ("useFractionForDivision", Bool),
            ],
            Self::NumericInput => &[("requireNonnegativeInput", Bool)],
            Self::PencilCodeEditor => &[("initialCode", Opaque)],
            Self::RatioExpressionInput => &[("placeholder", UnicodeText), ("numberOfTerms", Int)],
            Self::SetInput => &[("buttonText", UnicodeText)],
            Self::TextInput => &[("placeholder", UnicodeText), ("rows", Int)],
            Self::Unknown(_) => &[],
        }
    }

    /// Schema of the named argument, if this kind declares it.
    pub fn arg_schema(&self, name: &str) -> Option<ArgSchema> {
        self.arg_specs()
            .iter()
            .find(|(arg, _)| *arg == name)
            .map(|(_, schema)| *schema)
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_roundtrips_through_id() {
        for id in ["MultipleChoiceInput", "ImageClickInput", "TextInput", "EndExploration"] {
            assert_eq!(InteractionKind::from_id(id).id(), id);
        }
        let unknown = InteractionKind::from_id("HologramInput");
        assert_eq!(unknown, InteractionKind::Unknown("HologramInput".to_string()));
        assert_eq!(unknown.to_string(), "HologramInput");
    }

    #[test]
    fn test_image_bearing_schemas() {
        assert_eq!(
            InteractionKind::MultipleChoiceInput.arg_schema("choices"),
            Some(ArgSchema::RichTextList)
        );
        assert_eq!(
            InteractionKind::ImageClickInput.arg_schema("imageAndRegions"),
            Some(ArgSchema::ImageWithRegions)
        );
        assert_eq!(InteractionKind::TextInput.arg_schema("choices"), None);
        assert!(
            !InteractionKind::Continue
                .arg_specs()
                .iter()
                .any(|(_, schema)| schema.can_hold_images())
        );
        assert!(InteractionKind::Unknown("X".into()).arg_specs().is_empty());
    }

    #[test]
    fn test_interaction_kind_from_dict() {
        let interaction: Interaction = serde_json::from_value(json!({
            "id": "ItemSelectionInput",
            "customization_args": {
                "minAllowableSelectionCount": { "value": 1 },
                "choices": { "value": [{ "content_id": "ca_choices_3", "html": "<p>a</p>" }] }
            },
            "default_outcome": null,
            "answer_groups": [],
            "hints": [],
            "solution": null
        }))
        .unwrap();

        assert_eq!(interaction.kind(), Some(InteractionKind::ItemSelectionInput));
        assert!(interaction.customization_args["choices"].value.is_array());

        assert_eq!(Interaction::default().kind(), None);
    }
}
