use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::input::ScreeningInput;
use super::outcome::OutcomeReport;
use super::respondent::PersonalInfo;

/// A completed screening: the raw responses alongside the report computed
/// from them.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningResult {
    pub id: Uuid,
    pub instrument_id: String,
    pub input: ScreeningInput,
    pub part_a_score: u8,
    pub part_b_points: u32,
    pub outcomes: OutcomeReport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent: Option<PersonalInfo>,
    pub completed_at: jiff::Timestamp,
}

impl ScreeningResult {
    pub fn new(
        instrument_id: impl Into<String>,
        input: ScreeningInput,
        outcomes: OutcomeReport,
        respondent: Option<PersonalInfo>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            instrument_id: instrument_id.into(),
            part_a_score: outcomes.likelihood.score,
            part_b_points: outcomes.part_b_scoring.total_points(),
            input,
            outcomes,
            respondent,
            completed_at: jiff::Timestamp::now(),
        }
    }
}
