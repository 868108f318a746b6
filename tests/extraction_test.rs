//! Extraction tests over full exploration and skill dicts.
//!
//! The fixtures mirror what the backend sends: unused fields are present,
//! some optional fields are null, and a few html strings are malformed.

#![recursion_limit = "256"]

use serde_json::{Value, json};

use contentrefs::{
    Exploration, Extractor, ExtractorConfig, ImageFilenames, Skill, State,
    image_filenames_in_exploration, image_filenames_in_skill, image_filenames_in_state,
};

fn image(name: &str) -> String {
    format!(
        r#"<oppia-noninteractive-image filepath-with-value="&amp;quot;{name}&amp;quot;"></oppia-noninteractive-image>"#
    )
}

/// Image tag with alt and caption attributes and no whitespace before the
/// filepath attribute.
fn captioned_image(name: &str) -> String {
    format!(
        concat!(
            r#"<p><oppia-noninteractive-image alt-with-value="&amp;quot;f&amp;quot;" "#,
            r#"caption-with-value="&amp;quot;&amp;quot;"filepath-with-value="&amp;quot;{}"#,
            r#"&amp;quot;"></oppia-noninteractive-image>This is a text input.</p>"#
        ),
        name
    )
}

fn sorted(names: &ImageFilenames) -> Vec<String> {
    names.sorted()
}

fn sorted_strs(names: &[&str]) -> Vec<String> {
    let mut v: Vec<String> = names.iter().map(|s| s.to_string()).collect();
    v.sort();
    v
}

const STATE_7_CONTENT: &str = concat!(
    r#"<p><oppia-noninteractive-image filepath-with-value="&amp;quot;s7Image.png&amp;quot;">"#,
    r#"</oppia-noninteractive-image>"#,
    r#"<oppia-noninteractive-collapsible content-with-value="&amp;quot;&amp;lt;p&amp;gt;Content."#,
    r#"&amp;lt;/p&amp;gt;&amp;lt;oppia-noninteractive-image filepath-with-value=\&amp;quot;"#,
    r#"&amp;amp;amp;quot;s7CollapsibleImage.png&amp;amp;amp;quot;\&amp;quot;&amp;gt;&amp;lt;"#,
    r#"/oppia-noninteractive-image&amp;gt;&amp;quot;"></oppia-noninteractive-collapsible>"#,
    r#"<oppia-noninteractive-tabs tab_contents-with-value="[{&amp;quot;title&amp;quot;:"#,
    r#"&amp;quot;Title1&amp;quot;,&amp;quot;content&amp;quot;:&amp;quot;&amp;lt;p&amp;gt;"#,
    r#"Content1&amp;lt;/p&amp;gt;&amp;quot;},{&amp;quot;title&amp;quot;:&amp;quot;Title2"#,
    r#"&amp;quot;,&amp;quot;content&amp;quot;:&amp;quot;&amp;lt;p&amp;gt;Content2&amp;lt;/p"#,
    r#"&amp;gt;&amp;lt;oppia-noninteractive-image filepath-with-value=\&amp;quot;&amp;amp;"#,
    r#"amp;quot;s7TabImage.png&amp;amp;amp;quot;\&amp;quot;&amp;gt;&amp;lt;/oppia-"#,
    r#"noninteractive-image&amp;gt;&amp;quot;}]"></oppia-noninteractive-tabs></p>"#
);

const MATH_FEEDBACK: &str = concat!(
    r#"<p>Let's go to State 1</p><oppia-noninteractive-math math_content-with-value="{&amp;quot;"#,
    r#"raw_latex&amp;quot;: &amp;quot;+,-,-,+&amp;quot;, &amp;quot;svg_filename&amp;quot;: "#,
    r#"&amp;quot;mathImg_20207261338jhi1j6rvob_height_1d345_width_3d124_vertical_0d124.svg"#,
    r#"&amp;quot;}"></oppia-noninteractive-math>"#
);

fn outcome(dest: &str, content_id: &str, html: &str) -> Value {
    json!({
        "dest": dest,
        "feedback": { "content_id": content_id, "html": html },
        "param_changes": [],
        "refresher_exploration_id": null
    })
}

fn exploration_dict() -> Value {
    json!({
        "id": 1,
        "title": "My Title",
        "category": "Art",
        "objective": "Your objective",
        "tags": [],
        "blurb": "",
        "author_notes": "",
        "states_schema_version": 15,
        "init_state_name": "Introduction",
        "states": {
            "State 1": {
                "param_changes": [],
                "content": { "content_id": "content", "html": "" },
                "recorded_voiceovers": { "voiceovers_mapping": { "content": {}, "default_outcome": {} } },
                "interaction": {
                    "id": "Continue",
                    "default_outcome": outcome("State 3", "default_outcome", ""),
                    "confirmed_unclassified_answers": [],
                    "customization_args": {
                        "buttonText": { "value": { "content_id": "ca_buttonText_0", "unicode_str": "Continue" } }
                    },
                    "solution": null,
                    "answer_groups": [],
                    "hints": []
                },
                "linked_skill_id": null,
                "next_content_id_index": 1,
                "solicit_answer_details": false,
                "written_translations": {
                    "translations_mapping": { "content": {}, "ca_buttonText_0": {}, "default_outcome": {} }
                },
                "classifier_model_id": null
            },
            "State 3": {
                "param_changes": [],
                "content": { "content_id": "content", "html": "Congratulations, you have finished!" },
                "interaction": {
                    "id": "EndExploration",
                    "default_outcome": null,
                    "confirmed_unclassified_answers": [],
                    "customization_args": { "recommendedExplorationIds": { "value": [] } },
                    "solution": null,
                    "answer_groups": [],
                    "hints": []
                },
                "linked_skill_id": null,
                "classifier_model_id": null
            },
            "Introduction": {
                "content": { "content_id": "content", "html": "Multiple Choice" },
                "interaction": {
                    "id": "MultipleChoiceInput",
                    "default_outcome": { "dest": "Introduction", "feedback": { "content_id": "default_outcome", "html": "Try Again!" } },
                    "customization_args": {
                        "choices": { "value": [
                            { "content_id": "ca_choices_3", "html": format!("<p> Go to ItemSelection {}</p>", image("sIMultipleChoice1.png")) },
                            { "content_id": "ca_choices_4", "html": format!("<p> Go to ImageAndRegion{}</p>", image("sIMultipleChoice2.png")) }
                        ] },
                        "showChoicesInShuffledOrder": { "value": false }
                    },
                    "answer_groups": [
                        {
                            "labelled_as_correct": false,
                            "outcome": outcome("State 4", "feedback_1", &format!("<p>We are going to ItemSelection{}</p>", image("sIOutcomeFeedback.png"))),
                            "rule_specs": [{ "rule_type": "Equals", "inputs": { "x": 0 } }]
                        },
                        {
                            "labelled_as_correct": false,
                            "outcome": outcome("State 5", "feedback_2", "Let's go to state 5 ImageAndRegion"),
                            "rule_specs": [{ "rule_type": "Equals", "inputs": { "x": 1 } }]
                        }
                    ],
                    "hints": [],
                    "solution": null
                }
            },
            "State 4": {
                "content": { "content_id": "content", "html": format!("<p>{}</p>", image("s4Content.png")) },
                "interaction": {
                    "id": "ItemSelectionInput",
                    "default_outcome": outcome("State 4", "content", &format!("<p>Try Again! {}</p>", image("s4DefaultOutcomeFeedback.png"))),
                    "customization_args": {
                        "minAllowableSelectionCount": { "value": 1 },
                        "maxAllowableSelectionCount": { "value": 2 },
                        "choices": { "value": [
                            { "content_id": "ca_choices_3", "html": format!("<p>{}</p>", image("s4Choice1.png")) },
                            { "content_id": "ca_choices_4", "html": format!("<p>{}</p>", image("s4Choice2.png")) }
                        ] }
                    },
                    "hints": [],
                    "solution": null,
                    "answer_groups": [
                        {
                            "outcome": outcome("State 6", "feedback_1", "It is choice number 1. Let's go to the Text Input"),
                            "rule_specs": [{
                                "rule_type": "Equals",
                                "inputs": { "x": [r#"<p><oppia-noninteractive-image filepath-with-value=\&amp;quot;ruleOnly.png&amp;quot;\></oppia-noninteractive-image></p>"#] }
                            }]
                        },
                        {
                            "outcome": outcome("State 1", "feedback_2", "It is choice number 2"),
                            "rule_specs": [{
                                "rule_type": "Equals",
                                "inputs": { "x": [format!("<p>{}</p>", image("s4Choice2.png"))] }
                            }]
                        }
                    ]
                }
            },
            "State 5": {
                "content": { "content_id": "content", "html": "" },
                "interaction": {
                    "id": "ImageClickInput",
                    "default_outcome": outcome("State 5", "content", "Try Again!"),
                    "answer_groups": [
                        {
                            "outcome": outcome("State 5", "feedback_1", "<p>That is the class definition. Try again.</p>"),
                            "rule_specs": [{ "rule_type": "IsInRegion", "inputs": { "x": "classdef" } }]
                        },
                        {
                            "outcome": outcome("State 1", "feedback_5", "<p>You found it!</p>"),
                            "rule_specs": [{ "rule_type": "IsInRegion", "inputs": { "x": "ctor" } }]
                        }
                    ],
                    "customization_args": {
                        "highlightRegionsOnHover": { "value": true },
                        "imageAndRegions": { "value": {
                            "imagePath": "s5ImagePath.png",
                            "labeledRegions": [{
                                "label": "classdef",
                                "region": {
                                    "area": [[0.004291845493562232, 0.004692192192192192], [0.40987124463519314, 0.05874624624624625]],
                                    "regionType": "Rectangle"
                                }
                            }]
                        } }
                    },
                    "hints": [],
                    "solution": null
                }
            },
            "State 6": {
                "content": { "content_id": "content", "html": "<p>Text Input Content</p>" },
                "interaction": {
                    "id": "TextInput",
                    "default_outcome": outcome("State 6", "default_outcome", "<p>Try again.</p>"),
                    "customization_args": {
                        "rows": { "value": 1 },
                        "placeholder": { "value": { "content_id": "ca_placeholder_3", "unicode_str": "" } }
                    },
                    "answer_groups": [
                        {
                            "rule_specs": [{ "rule_type": "Contains", "inputs": { "x": { "contentId": "rule_input", "normalizedStrSet": ["1"] } } }],
                            "outcome": outcome("State 1", "feedback_1", "<p>Let's go to State 1</p>")
                        },
                        {
                            "rule_specs": [{ "rule_type": "Contains", "inputs": { "x": { "contentId": "rule_input", "normalizedStrSet": ["2"] } } }],
                            "outcome": outcome("State 1", "feedback_2", MATH_FEEDBACK)
                        }
                    ],
                    "hints": [{ "hint_content": { "content_id": "hint_1", "html": format!("<p>{}</p>", image("s6Hint1.png")) } }],
                    "solution": {
                        "answer_is_exclusive": false,
                        "correct_answer": "cat",
                        "explanation": { "content_id": "solution", "html": format!("<p>{}</p>", image("s6SolutionExplanation.png")) }
                    }
                }
            },
            "State 7": {
                "content": { "content_id": "content", "html": STATE_7_CONTENT },
                "interaction": {
                    "id": "ItemSelectionInput",
                    "default_outcome": outcome("State 4", "content", "<p>Try again!</p>"),
                    "customization_args": {
                        "minAllowableSelectionCount": { "value": 1 },
                        "maxAllowableSelectionCount": { "value": 2 },
                        "choices": { "value": [
                            { "content_id": "ca_choices_3", "html": "<p>Choice 1</p>" },
                            { "content_id": "ca_choices_4", "html": "<p>Choice 2</p>" }
                        ] }
                    },
                    "hints": [],
                    "solution": null,
                    "answer_groups": []
                }
            }
        },
        "param_specs": {},
        "param_changes": [],
        "version": 1
    })
}

fn exploration() -> Exploration {
    serde_json::from_value(exploration_dict()).expect("exploration dict should deserialize")
}

fn expected_by_state() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        ("State 1", vec![]),
        ("State 3", vec![]),
        (
            "State 4",
            vec![
                "s4Content.png",
                "s4Choice1.png",
                "s4Choice2.png",
                "s4DefaultOutcomeFeedback.png",
            ],
        ),
        ("State 5", vec!["s5ImagePath.png"]),
        (
            "State 6",
            vec![
                "s6Hint1.png",
                "s6SolutionExplanation.png",
                "mathImg_20207261338jhi1j6rvob_height_1d345_width_3d124_vertical_0d124.svg",
            ],
        ),
        (
            "State 7",
            vec!["s7Image.png", "s7CollapsibleImage.png", "s7TabImage.png"],
        ),
        (
            "Introduction",
            vec![
                "sIMultipleChoice1.png",
                "sIMultipleChoice2.png",
                "sIOutcomeFeedback.png",
            ],
        ),
    ]
}

#[test]
fn test_every_state_yields_exactly_its_images() {
    let exploration = exploration();
    let extractor = Extractor::default();

    for (state_name, expected) in expected_by_state() {
        let state = exploration.state(state_name).expect("state should exist");
        let names = extractor.image_filenames_in_state(state);
        assert_eq!(
            sorted(&names),
            sorted_strs(&expected),
            "unexpected filenames in {state_name}"
        );
    }
}

#[test]
fn test_rule_inputs_are_not_scanned() {
    let names = image_filenames_in_exploration(&exploration());
    assert!(!names.contains("ruleOnly.png"));
}

#[test]
fn test_exploration_union_and_by_state() {
    let exploration = exploration();
    let union = image_filenames_in_exploration(&exploration);

    let all: Vec<&str> = expected_by_state()
        .into_iter()
        .flat_map(|(_, names)| names)
        .collect();
    assert_eq!(sorted(&union), sorted_strs(&all));

    let by_state = Extractor::default().image_filenames_by_state(&exploration);
    assert_eq!(by_state.len(), 7);
    assert!(by_state["State 1"].is_empty());
    assert_eq!(by_state["State 5"].as_slice(), ["s5ImagePath.png"]);
}

#[test]
fn test_empty_state_has_no_images() {
    let state: State = serde_json::from_value(json!({
        "content": { "content_id": "content", "html": "" },
        "interaction": { "id": null, "answer_groups": [], "default_outcome": null, "hints": [], "solution": null }
    }))
    .unwrap();
    assert!(image_filenames_in_state(&state).is_empty());
}

#[test]
fn test_single_inline_image() {
    let state = State::with_content(format!("<p>{}</p>", image("foo.png")));
    assert_eq!(image_filenames_in_state(&state).as_slice(), ["foo.png"]);
}

#[test]
fn test_collapsible_inner_and_outer_images() {
    let state = State::with_content(STATE_7_CONTENT);
    let names = image_filenames_in_state(&state);
    assert!(names.contains("s7Image.png"));
    assert!(names.contains("s7CollapsibleImage.png"));
    assert!(names.contains("s7TabImage.png"));
}

#[test]
fn test_item_selection_choices_and_default_feedback() {
    let state: State = serde_json::from_value(json!({
        "content": { "content_id": "content", "html": "<p>Pick</p>" },
        "interaction": {
            "id": "ItemSelectionInput",
            "default_outcome": outcome("X", "default_outcome", &image("feedback.png")),
            "customization_args": {
                "minAllowableSelectionCount": { "value": 1 },
                "maxAllowableSelectionCount": { "value": 2 },
                "choices": { "value": [
                    { "content_id": "ca_choices_0", "html": image("choice1.png") },
                    { "content_id": "ca_choices_1", "html": image("choice2.png") }
                ] }
            },
            "answer_groups": [],
            "hints": [],
            "solution": null
        }
    }))
    .unwrap();

    let names = image_filenames_in_state(&state);
    assert_eq!(
        sorted(&names),
        sorted_strs(&["choice1.png", "choice2.png", "feedback.png"])
    );
}

fn skill_dict() -> Value {
    json!({
        "id": "1",
        "description": "test description",
        "misconceptions": [
            {
                "id": "2",
                "name": "test name 1",
                "notes": captioned_image("misconception-dict-1-notes.png"),
                "feedback": captioned_image("misconception-dict-1-feedback.png"),
                "must_be_addressed": true
            },
            {
                "id": "4",
                "name": "test name 2",
                "notes": captioned_image("misconception-dict-2-notes.png"),
                "feedback": captioned_image("misconception-dict-2-feedback.png"),
                "must_be_addressed": true
            }
        ],
        "rubrics": [{
            "difficulty": "Easy",
            "explanations": [captioned_image("rubric-dict-easy-explanation.png")]
        }],
        "skill_contents": {
            "explanation": { "html": captioned_image("skill-concept-card-explanation.png"), "content_id": "explanation" },
            "worked_examples": [
                {
                    "question": { "html": captioned_image("worked-example-1-question.png"), "content_id": "worked_example_q_1" },
                    "explanation": { "html": captioned_image("worked-example-1-explanation.png"), "content_id": "worked_example_e_1" }
                },
                {
                    "question": { "html": captioned_image("worked-example-2-question.png"), "content_id": "worked_example_q_2" },
                    "explanation": { "html": captioned_image("worked-example-2-explanation.png"), "content_id": "worked_example_e_2" }
                }
            ],
            "recorded_voiceovers": {
                "voiceovers_mapping": {
                    "explanation": {},
                    "worked_example_q_1": {},
                    "worked_example_e_1": {},
                    "worked_example_q_2": {},
                    "worked_example_e_2": {}
                }
            }
        },
        "language_code": "en",
        "version": 3,
        "prerequisite_skill_ids": ["skill_1"]
    })
}

#[test]
fn test_skill_union_of_all_parts() {
    let skill: Skill = serde_json::from_value(skill_dict()).unwrap();
    let names = image_filenames_in_skill(&skill);

    assert_eq!(
        sorted(&names),
        sorted_strs(&[
            "misconception-dict-1-notes.png",
            "misconception-dict-1-feedback.png",
            "misconception-dict-2-notes.png",
            "misconception-dict-2-feedback.png",
            "rubric-dict-easy-explanation.png",
            "worked-example-1-question.png",
            "worked-example-1-explanation.png",
            "worked-example-2-question.png",
            "worked-example-2-explanation.png",
            "skill-concept-card-explanation.png",
        ])
    );
}

#[test]
fn test_skill_parts_separately() {
    let skill: Skill = serde_json::from_value(skill_dict()).unwrap();
    let extractor = Extractor::default();

    let contents = extractor.image_filenames_in_skill_contents(&skill.skill_contents);
    assert_eq!(contents.len(), 5);
    assert!(contents.contains("skill-concept-card-explanation.png"));

    let aux = extractor
        .image_filenames_in_misconceptions_and_rubrics(&skill.misconceptions, &skill.rubrics);
    assert_eq!(aux.len(), 5);
    assert!(aux.contains("rubric-dict-easy-explanation.png"));
    assert!(!aux.contains("worked-example-1-question.png"));
}

#[test]
fn test_duplicates_reported_once() {
    let state = State::with_content(format!(
        "{}{}<p>again</p>{}",
        image("same.png"),
        image("other.png"),
        image("same.png")
    ));
    assert_eq!(
        image_filenames_in_state(&state).as_slice(),
        ["same.png", "other.png"]
    );
}

#[test]
fn test_extraction_is_idempotent() {
    let exploration = exploration();
    let skill: Skill = serde_json::from_value(skill_dict()).unwrap();

    assert_eq!(
        image_filenames_in_exploration(&exploration),
        image_filenames_in_exploration(&exploration)
    );
    assert_eq!(image_filenames_in_skill(&skill), image_filenames_in_skill(&skill));
}

#[test]
fn test_depth_zero_skips_nested_content() {
    let state = State::with_content(STATE_7_CONTENT);
    let extractor = Extractor::new(ExtractorConfig::new().with_max_depth(0));
    assert_eq!(
        extractor.image_filenames_in_state(&state).as_slice(),
        ["s7Image.png"]
    );
}
