//! Error types for model loading, configuration and token conversion

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the language identification core
#[derive(Error, Debug)]
pub enum LangIdError {
    #[error("cannot read any files matching {pattern} in {}", dir.display())]
    NoModels { dir: PathBuf, pattern: String },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid model file pattern: {0}")]
    InvalidPattern(#[from] globset::Error),

    #[error("cannot parse file {}: {source}", path.display())]
    ModelParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("file {} has no 'freq' key", path.display())]
    MissingFreq { path: PathBuf },

    #[error("cannot convert token to unicode: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LangIdError>;
