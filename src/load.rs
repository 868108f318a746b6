//! Loading content documents from backend JSON.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{Exploration, Skill, State};

/// The kind of content a JSON document holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Exploration,
    State,
    Skill,
}

impl DocumentKind {
    /// Guess the kind from top-level keys.
    ///
    /// ```
    /// use contentrefs::DocumentKind;
    /// use serde_json::json;
    ///
    /// assert_eq!(DocumentKind::detect(&json!({ "states": {} })), Some(DocumentKind::Exploration));
    /// assert_eq!(DocumentKind::detect(&json!({ "skill_contents": {} })), Some(DocumentKind::Skill));
    /// assert_eq!(DocumentKind::detect(&json!({ "interaction": {} })), Some(DocumentKind::State));
    /// assert_eq!(DocumentKind::detect(&json!([])), None);
    /// ```
    pub fn detect(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        if object.contains_key("states") {
            Some(Self::Exploration)
        } else if object.contains_key("skill_contents") || object.contains_key("misconceptions") {
            Some(Self::Skill)
        } else if object.contains_key("interaction") || object.contains_key("content") {
            Some(Self::State)
        } else {
            None
        }
    }
}

impl FromStr for DocumentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "exploration" => Ok(Self::Exploration),
            "state" => Ok(Self::State),
            "skill" => Ok(Self::Skill),
            other => Err(Error::UnknownKind(other.to_string())),
        }
    }
}

/// A loaded document of any supported kind.
#[derive(Debug, Clone)]
pub enum Document {
    Exploration(Exploration),
    State(State),
    Skill(Skill),
}

impl Document {
    /// Parse `json`, detecting its kind unless `kind` is given.
    pub fn parse(json: &str, kind: Option<DocumentKind>) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value, kind)
    }

    pub fn from_value(value: Value, kind: Option<DocumentKind>) -> Result<Self> {
        let kind = match kind.or_else(|| DocumentKind::detect(&value)) {
            Some(kind) => kind,
            None => return Err(Error::UnknownKind("no recognizable top-level keys".to_string())),
        };

        Ok(match kind {
            DocumentKind::Exploration => Self::Exploration(serde_json::from_value(value)?),
            DocumentKind::State => Self::State(serde_json::from_value(value)?),
            DocumentKind::Skill => Self::Skill(serde_json::from_value(value)?),
        })
    }

    /// Read and parse the file at `path`.
    pub fn open(path: impl AsRef<Path>, kind: Option<DocumentKind>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::parse(&json, kind)
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Exploration(_) => DocumentKind::Exploration,
            Self::State(_) => DocumentKind::State,
            Self::Skill(_) => DocumentKind::Skill,
        }
    }
}

fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(bytes)?)
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    from_slice(&fs::read(path)?)
}

macro_rules! json_constructors {
    ($($ty:ident),+) => {
        $(
            impl $ty {
                /// Parse from JSON bytes.
                pub fn from_slice(bytes: &[u8]) -> Result<Self> {
                    from_slice(bytes)
                }
            }

            impl FromStr for $ty {
                type Err = Error;

                fn from_str(s: &str) -> Result<Self> {
                    from_slice(s.as_bytes())
                }
            }
        )+
    };
}

json_constructors!(Exploration, State, Skill);

/// Read an exploration dict from a JSON file.
pub fn load_exploration(path: impl AsRef<Path>) -> Result<Exploration> {
    load(path.as_ref())
}

/// Read a state dict from a JSON file.
pub fn load_state(path: impl AsRef<Path>) -> Result<State> {
    load(path.as_ref())
}

/// Read a skill dict from a JSON file.
pub fn load_skill(path: impl AsRef<Path>) -> Result<Skill> {
    load(path.as_ref())
}
