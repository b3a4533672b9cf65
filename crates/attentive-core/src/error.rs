use thiserror::Error;

use crate::models::response::ImpactCategory;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error("missing required field: {0}")]
    MissingField(String),
}

/// Malformed or out-of-range screening responses.
///
/// This is the only error the outcome calculator raises. The computation is
/// deterministic, so a caller that receives one must correct the input
/// before trying again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("expected at most {max} answers, got {len}")]
    TooManyAnswers { len: usize, max: usize },

    #[error("question {question_id}: answer {value} is outside the 0-4 scale")]
    AnswerOutOfRange { question_id: u8, value: u8 },

    #[error("question {question_id} has not been answered")]
    MissingAnswer { question_id: u8 },

    #[error("{category} impact entry {position}: rating {value} is outside the 0-3 scale")]
    ImpactOutOfRange {
        category: ImpactCategory,
        position: usize,
        value: u8,
    },

    #[error(
        "impact follow-ups must be answered together: work has {work}, social has {social}, home has {home}"
    )]
    MismatchedSubAnswers {
        work: usize,
        social: usize,
        home: usize,
    },

    /// Every answer that meets its question's threshold carries exactly one
    /// set of follow-up ratings.
    #[error("{triggered} answers triggered impact follow-ups but {sets} follow-up sets were recorded")]
    SubAnswerCountMismatch { sets: usize, triggered: usize },
}
