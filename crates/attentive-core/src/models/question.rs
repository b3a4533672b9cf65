use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::response::{Frequency, ImpactCategory};

/// Sub-scale a question belongs to. Part A is the six-item gate,
/// Part B the twelve items that complete the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Part {
    A,
    B,
}

impl Part {
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "Part A",
            Self::B => "Part B",
        }
    }
}

/// Which answers count as clinically significant for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ThresholdRule {
    /// Sometimes (2) or above.
    SometimesOrAbove,
    /// Often (3) or above.
    OftenOrAbove,
}

impl ThresholdRule {
    pub const fn threshold(self) -> Frequency {
        match self {
            Self::SometimesOrAbove => Frequency::Sometimes,
            Self::OftenOrAbove => Frequency::Often,
        }
    }

    pub fn is_met(self, answer: Frequency) -> bool {
        answer >= self.threshold()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    /// 1-based position in the questionnaire.
    pub id: u8,
    pub part: Part,
    pub text: String,
    pub options: Vec<String>,
    pub rule: ThresholdRule,
}

impl Question {
    /// 0-based slot of this question in an answer sequence.
    pub fn index(&self) -> usize {
        usize::from(self.id) - 1
    }
}

/// Follow-up asked once per category after an answer crosses its threshold.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubQuestion {
    pub category: ImpactCategory,
    pub text: String,
    pub options: Vec<String>,
}
