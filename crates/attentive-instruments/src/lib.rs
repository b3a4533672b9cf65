//! attentive-instruments
//!
//! Screening instrument definitions, the outcome calculator and the
//! questionnaire session. Pure logic with no I/O: callers own persistence
//! and presentation.

pub mod error;
pub mod instruments;
pub mod scoring;
pub mod session;

use attentive_core::error::InvalidInputError;
use attentive_core::models::input::ScreeningInput;
use attentive_core::models::outcome::OutcomeReport;
use attentive_core::models::question::{Part, Question, SubQuestion};
use attentive_core::models::response::Frequency;

use error::InstrumentError;

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "asrs_v1_1").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "ASRS v1.1").
    fn name(&self) -> &str;

    /// All questions, in the order they are asked.
    fn questions(&self) -> &[Question];

    /// Impact follow-ups asked after a question crosses its threshold.
    fn sub_questions(&self) -> &[SubQuestion];

    /// Every problem with `input`. Empty when it can be scored.
    fn check_responses(&self, input: &ScreeningInput) -> Vec<InvalidInputError>;

    /// Compute the outcome report for `input`.
    fn score(&self, input: &ScreeningInput) -> Result<OutcomeReport, InvalidInputError>;

    fn question(&self, id: u8) -> Option<&Question> {
        self.questions().iter().find(|q| q.id == id)
    }

    fn questions_in(&self, part: Part) -> Vec<&Question> {
        self.questions().iter().filter(|q| q.part == part).collect()
    }

    /// Whether answering `value` to question `id` opens the impact follow-ups.
    fn triggers_follow_up(&self, id: u8, value: u8) -> bool {
        match (self.question(id), Frequency::from_value(value)) {
            (Some(question), Some(answer)) => question.rule.is_met(answer),
            _ => false,
        }
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::asrs::AsrsV11)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Like [`get_instrument`], but an unknown ID is an error.
pub fn require_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
