use attentive_core::models::outcome::{Likelihood, LikelihoodBand};
use attentive_core::models::response::Frequency;

use super::responses::Responses;
use super::tables::PART_A_RULES;

/// Number of Part A answers that meet their threshold, 0-6.
///
/// `answer` looks up the answer to a 1-based question id.
pub fn count_part_a(answer: impl Fn(u8) -> Option<Frequency>) -> u8 {
    (1u8..)
        .zip(PART_A_RULES)
        .filter(|&(question_id, rule)| answer(question_id).is_some_and(|a| rule.is_met(a)))
        .count() as u8
}

pub fn part_a_score(responses: &Responses) -> u8 {
    count_part_a(|question_id| responses.answer(question_id))
}

pub fn likelihood_band(score: u8) -> LikelihoodBand {
    match score {
        0 => LikelihoodBand::NoSigns,
        1..=3 => LikelihoodBand::SomeSymptoms,
        _ => LikelihoodBand::HighlyConsistent,
    }
}

pub fn likelihood(responses: &Responses) -> Likelihood {
    let score = part_a_score(responses);
    let band = likelihood_band(score);
    Likelihood {
        score,
        band,
        interpretation: band.interpretation(score),
    }
}
