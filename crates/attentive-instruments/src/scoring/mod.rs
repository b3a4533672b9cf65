//! The outcome calculator.
//!
//! Pure functions from validated responses to an [`OutcomeReport`]. Nothing
//! here performs I/O or keeps state between calls.

pub mod distribution;
pub mod impact;
pub mod likelihood;
pub mod responses;
pub mod subtype;
pub mod tables;

use attentive_core::error::InvalidInputError;
use attentive_core::models::input::SubAnswers;
use attentive_core::models::outcome::{OutcomeReport, SubtypeScores};

use responses::Responses;
use tables::{HYPERACTIVE_ITEMS, HYPERACTIVE_MAX, INATTENTIVE_ITEMS, INATTENTIVE_MAX};

/// Compute the full report for one respondent.
///
/// `answers[i]` is the raw 0-4 answer to question `i + 1` (`None` while
/// unanswered). Part A answers are required; Part B answers may be missing.
pub fn compute_outcomes(
    answers: &[Option<u8>],
    sub_answers: &SubAnswers,
) -> Result<OutcomeReport, InvalidInputError> {
    let responses = Responses::parse(answers, sub_answers)?;

    let report = OutcomeReport {
        likelihood: likelihood::likelihood(&responses),
        types: SubtypeScores {
            inattentive: subtype::subtype_score(&responses, &INATTENTIVE_ITEMS, INATTENTIVE_MAX),
            hyperactive: subtype::subtype_score(&responses, &HYPERACTIVE_ITEMS, HYPERACTIVE_MAX),
        },
        impact: impact::impact_scores(&responses),
        answer_tracking: distribution::answer_tracking(&responses),
        part_b_scoring: distribution::part_b_scoring(&responses),
    };

    tracing::debug!(
        likelihood = report.likelihood.score,
        inattentive = report.types.inattentive.score,
        hyperactive = report.types.hyperactive.score,
        impact = report.impact.overall.score,
        "computed screening outcomes"
    );

    Ok(report)
}
