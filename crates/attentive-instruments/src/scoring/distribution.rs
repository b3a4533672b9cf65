use attentive_core::models::outcome::{AnswerTracking, PartBScoring};

use super::responses::Responses;
use super::tables::{PART_A_LEN, part_b_points};

/// Question numbers grouped by the answer given. Unanswered questions are left out.
pub fn answer_tracking(responses: &Responses) -> AnswerTracking {
    let mut tracking = AnswerTracking::default();
    for (question_id, answer) in responses.answered() {
        tracking.bucket_mut(answer).push(question_id);
    }
    tracking
}

/// Part B question numbers grouped by points earned.
pub fn part_b_scoring(responses: &Responses) -> PartBScoring {
    let mut scoring = PartBScoring::default();
    for (question_id, answer) in responses
        .answered()
        .filter(|&(question_id, _)| usize::from(question_id) > PART_A_LEN)
    {
        let bucket = match part_b_points(answer) {
            0 => &mut scoring.no_points,
            1 => &mut scoring.one_point,
            2 => &mut scoring.two_points,
            _ => &mut scoring.three_points,
        };
        bucket.push(question_id);
    }
    scoring
}
