//! Error types for Raku Core

use thiserror::Error;

/// Result type alias using RakuError
pub type Result<T> = std::result::Result<T, RakuError>;

/// Top-level error type for all Raku operations
#[derive(Debug, Error)]
pub enum RakuError {
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Quiz error: {0}")]
    Quiz(#[from] QuizError),
}

/// Data-quality problems in individual story records.
///
/// Apart from `NotFound`, none of these abort browsing: callers render an
/// empty body, an opaque level label or an always-incorrect quiz instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("Story {0} has no body text")]
    ContentMissing(String),

    #[error("Malformed level: {0:?}")]
    MalformedLevel(String),

    #[error("Quiz {quiz} of story {story} points at choice {index} but has {choices} choices")]
    QuizIndexOutOfRange {
        story: String,
        quiz: usize,
        index: i64,
        choices: usize,
    },

    #[error("Quiz {quiz} of story {story} has no choices")]
    QuizWithoutChoices { story: String, quiz: usize },

    #[error("Quiz {quiz} of story {story} has no usable answer index")]
    QuizAnswerUnreadable { story: String, quiz: usize },

    #[error("Duplicate story id {0:?}; only the first record is kept")]
    DuplicateId(String),

    #[error("Story not found: {0}")]
    NotFound(String),
}

/// Errors raised by quiz interaction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("No quiz at position {0}")]
    UnknownQuiz(usize),

    #[error("Choice {index} is out of range ({choices} choices)")]
    ChoiceOutOfRange { index: usize, choices: usize },
}

/// Errors that occur while reading a data file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Expected a JSON array of records, found {0}")]
    NotAnArray(&'static str),
}
