//! Error types for loading content documents.
//!
//! Extraction itself never fails; only reading and decoding input can.

use thiserror::Error;

/// Errors that can occur while loading an exploration, state or skill.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unrecognized document kind: {0}")]
    UnknownKind(String),
}

pub type Result<T> = std::result::Result<T, Error>;
