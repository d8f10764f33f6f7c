//! Error types for everything around the (infallible) transliteration core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LipiError {
    /// Filesystem failure while reading or writing state
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Library file could not be encoded or decoded
    #[error("Encoding error: {0}")]
    Encode(#[from] bincode::Error),

    /// Configuration file is not valid TOML for [`crate::config::AppConfig`]
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("A stored text with id '{0}' already exists")]
    DuplicateId(String),

    #[error("No stored text with id '{0}'")]
    NotFound(String),

    /// Selection targeted a whitespace token
    #[error("Token {0} is whitespace, not a word")]
    NotAWord(usize),

    #[error("Token index {index} out of range (have {len})")]
    OutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, LipiError>;
