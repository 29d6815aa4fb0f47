use thiserror::Error;

/// Crate-level error type.
///
/// Matching itself is infallible; these surface only while building a
/// matcher (configuration, custom vocabularies) or serializing a report.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
