//! Error types for careerfit
//!
//! Navigation and scoring never fail on their own; these variants cover the
//! session preconditions, catalog construction, and the terminal boundary.

use thiserror::Error;

/// Main error type for the assessment system
#[derive(Error, Debug)]
pub enum AssessmentError {
    /// Advancing without an answer for the current question
    #[error("No answer recorded for question '{question_id}'")]
    NoAnswerRecorded { question_id: String },

    /// Answer submitted for an id that is not in the catalog
    #[error("Unknown question id: {0}")]
    UnknownQuestion(String),

    /// Answer submitted after the result was produced
    #[error("Assessment already completed; restart to answer again")]
    SessionCompleted,

    /// Catalog construction errors
    #[error("Invalid question catalog: {0}")]
    InvalidCatalog(String),

    /// Boundary input that does not fit the question's answer type
    #[error("Invalid answer {value:?} for '{question_id}': {reason}")]
    InvalidAnswer {
        question_id: String,
        value: String,
        reason: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for assessment operations
pub type Result<T> = std::result::Result<T, AssessmentError>;
