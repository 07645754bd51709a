// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::exercise::Difficulty;

#[derive(Debug, Error)]
pub enum CoachError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Input is not valid UTF-8 text: {path}")]
    InvalidInput { path: PathBuf },

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid exercise catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("Catalog lists '{title}' under {bucket} but it declares {declared}")]
    MisfiledExercise {
        title: String,
        bucket: Difficulty,
        declared: Difficulty,
    },

    #[error("No exercises available for difficulty '{0}'")]
    EmptyCatalog(Difficulty),

    #[error("Unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, CoachError>;

// Allow `?` on std::io::Error by converting to CoachError::Io with unknown path.
impl From<std::io::Error> for CoachError {
    fn from(source: std::io::Error) -> Self {
        CoachError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
