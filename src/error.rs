//! Error handling for the career matcher application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareerMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Empty questionnaire: every raw score is zero, no trait vector can be built")]
    EmptyInput,

    #[error("Profession '{job}' ({id}) has neither trait weights nor general requirements")]
    UnscoreableRecord { id: String, job: String },

    #[error("Degenerate trait vector reached scoring")]
    DegenerateVector,

    #[error("Scoring error: {0}")]
    Scoring(String),
}

pub type Result<T> = std::result::Result<T, CareerMatcherError>;
