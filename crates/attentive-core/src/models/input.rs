use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::response::ImpactCategory;

/// Raw impact follow-up ratings, one sequence per category.
///
/// A respondent answers all three follow-ups for every question whose
/// answer met its threshold, so the sequences grow in lock step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubAnswers {
    #[serde(default)]
    pub work: Vec<u8>,
    #[serde(default)]
    pub social: Vec<u8>,
    #[serde(default)]
    pub home: Vec<u8>,
}

impl SubAnswers {
    pub fn get(&self, category: ImpactCategory) -> &[u8] {
        match category {
            ImpactCategory::Work => &self.work,
            ImpactCategory::Social => &self.social,
            ImpactCategory::Home => &self.home,
        }
    }

    pub fn push(&mut self, category: ImpactCategory, value: u8) {
        match category {
            ImpactCategory::Work => self.work.push(value),
            ImpactCategory::Social => self.social.push(value),
            ImpactCategory::Home => self.home.push(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.work.is_empty() && self.social.is_empty() && self.home.is_empty()
    }
}

/// Everything the outcome calculator needs, as collected from a respondent.
///
/// `answers[i]` holds the raw 0-4 answer to question `i + 1`, or `None`
/// while that question is unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningInput {
    pub answers: Vec<Option<u8>>,
    #[serde(default)]
    pub sub_answers: SubAnswers,
}

impl ScreeningInput {
    pub fn new(answers: Vec<Option<u8>>, sub_answers: SubAnswers) -> Self {
        Self {
            answers,
            sub_answers,
        }
    }

    /// Build an input where every listed question has been answered.
    pub fn answered(answers: &[u8], sub_answers: SubAnswers) -> Self {
        Self::new(answers.iter().copied().map(Some).collect(), sub_answers)
    }
}
