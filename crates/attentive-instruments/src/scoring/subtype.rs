use attentive_core::models::outcome::SubtypeScore;

use super::responses::Responses;
use super::tables::SubtypeItem;

/// One point per item whose answer meets the item's own threshold.
/// The percentage is taken against the fixed `max`, not the item count.
pub fn subtype_score(responses: &Responses, items: &[SubtypeItem], max: u8) -> SubtypeScore {
    let score = items
        .iter()
        .filter(|item| {
            responses
                .answer(item.question_id)
                .is_some_and(|answer| item.rule.is_met(answer))
        })
        .count() as u8;

    SubtypeScore {
        score,
        max,
        percentage: f64::from(score) / f64::from(max) * 100.0,
    }
}
