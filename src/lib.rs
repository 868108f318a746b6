//! # contentrefs
//!
//! Find the image files referenced by lesson content.
//!
//! Explorations, states and skills store their text as rich-text HTML in
//! which images appear as custom component tags carrying escaped-JSON
//! arguments. Interactions add images through their customization
//! arguments (choice lists, click-region images). This crate walks those
//! structures and returns every referenced filename once.
//!
//! ## Features
//!
//! - Deserializes backend exploration, state and skill dicts with serde
//! - Lenient HTML5 tokenization of rich text (html5ever)
//! - Descends into collapsible and tab components, which nest rich text
//! - Inline images, math formula SVGs and legacy SVG diagrams
//! - Optional translation-aware scanning for a given language
//!
//! ## Quick Start
//!
//! ```no_run
//! use contentrefs::{image_filenames_in_exploration, load_exploration};
//!
//! let exploration = load_exploration("exploration.json").unwrap();
//! for filename in &image_filenames_in_exploration(&exploration) {
//!     println!("{filename}");
//! }
//! ```
//!
//! ## Configuring the extractor
//!
//! ```
//! use contentrefs::{Extractor, ExtractorConfig, Skill};
//!
//! let extractor = Extractor::new(ExtractorConfig::new().with_max_depth(2));
//! let names = extractor.image_filenames_in_skill(&Skill::default());
//! assert!(names.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod load;
pub mod model;
pub mod rich_text;

pub use config::ExtractorConfig;
pub use error::{Error, Result};
pub use extract::{
    Extractor, ImageFilenames, image_filenames_in_exploration, image_filenames_in_skill,
    image_filenames_in_state,
};
pub use load::{Document, DocumentKind, load_exploration, load_skill, load_state};
pub use model::{
    Exploration, Interaction, InteractionKind, Misconception, Rubric, Skill, SkillContents, State,
    SubtitledHtml,
};
pub use rich_text::{ImageRef, ImageSource, RichTextScanner, scan_rich_text};
