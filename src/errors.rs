//! Error types for argrt

use thiserror::Error;

/// Main error type for argrt
#[derive(Error, Debug)]
pub enum ArgError {
    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("last argument without value: {0}")]
    MissingValue(String),

    #[error("invalid value '{value}' for {flag}: {reason}")]
    ValueParse {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("duplicate flag: {0}")]
    DuplicateFlag(String),

    #[error("invalid flag: {0:?}")]
    InvalidFlag(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ArgError {
    /// The flag or token this error is about, when there is one
    pub fn flag(&self) -> Option<&str> {
        match self {
            ArgError::UnknownArgument(flag)
            | ArgError::MissingValue(flag)
            | ArgError::DuplicateFlag(flag)
            | ArgError::InvalidFlag(flag) => Some(flag.as_str()),
            ArgError::ValueParse { flag, .. } => Some(flag.as_str()),
            ArgError::Config(_) | ArgError::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ArgError>;
