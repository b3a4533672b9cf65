use thiserror::Error;

use attentive_core::error::{CoreError, InvalidInputError};

use crate::session::Step;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("invalid responses: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("cannot {action} at step '{}'", .step.name())]
    UnexpectedAction { action: &'static str, step: Step },

    #[error("Part A showed no signs of ADHD, so Part B is not offered")]
    ScreenedOut,

    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error(transparent)]
    Core(#[from] CoreError),
}
