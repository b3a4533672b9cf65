use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::response::{Frequency, ImpactCategory};

/// The structured report computed from one set of screening responses.
/// Built once by the outcome calculator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OutcomeReport {
    pub likelihood: Likelihood,
    pub types: SubtypeScores,
    pub impact: ImpactScores,
    pub answer_tracking: AnswerTracking,
    pub part_b_scoring: PartBScoring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LikelihoodBand {
    /// Part A score of 0.
    NoSigns,
    /// Part A score of 1-3.
    SomeSymptoms,
    /// Part A score of 4 or more.
    HighlyConsistent,
}

impl LikelihoodBand {
    pub fn interpretation(self, score: u8) -> String {
        match self {
            Self::NoSigns => "Questionnaire complete. You scored zero (0). \
                Your answers didn't show signs of ADHD."
                .to_string(),
            Self::SomeSymptoms => format!(
                "Your result {score} does not meet the formal criteria for high likelihood \
                 of ADHD. Your answers suggest you do experience some of the symptoms. \
                 We recommend you complete the rest of the questionnaire."
            ),
            Self::HighlyConsistent => format!(
                "Your symptoms are highly consistent with ADHD. Your score {score} shows \
                 symptoms highly consistent with ADHD in adults, and further investigation \
                 is warranted."
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Likelihood {
    /// Number of Part A answers meeting their threshold, 0-6.
    pub score: u8,
    pub band: LikelihoodBand,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubtypeScore {
    pub score: u8,
    pub max: u8,
    /// `score / max * 100`.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubtypeScores {
    pub inattentive: SubtypeScore,
    pub hyperactive: SubtypeScore,
}

/// Five equal-width severity bands over an impact score's fixed maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ImpactBand {
    Minimal,
    Mild,
    Moderate,
    Severe,
    VerySevere,
}

impl ImpactBand {
    pub const ALL: [ImpactBand; 5] = [
        ImpactBand::Minimal,
        ImpactBand::Mild,
        ImpactBand::Moderate,
        ImpactBand::Severe,
        ImpactBand::VerySevere,
    ];

    pub const fn interpretation(self) -> &'static str {
        match self {
            Self::Minimal => "No or Minimal Impact: Little to no impact of symptoms on daily life.",
            Self::Mild => "Mild Impact: Symptoms have a modest impact on the patient's life.",
            Self::Moderate => {
                "Moderate Impact: Symptoms are affecting daily activities to a moderate degree."
            }
            Self::Severe => "Severe Impact: Symptoms significantly affect daily functioning.",
            Self::VerySevere => {
                "Very Severe Impact: Symptoms have a profound and pervasive impact on the patient's life."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImpactScore {
    pub score: u32,
    pub max: u32,
    pub band: ImpactBand,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImpactCategories {
    pub work: ImpactScore,
    pub social: ImpactScore,
    pub home: ImpactScore,
}

impl ImpactCategories {
    pub fn get(&self, category: ImpactCategory) -> &ImpactScore {
        match category {
            ImpactCategory::Work => &self.work,
            ImpactCategory::Social => &self.social,
            ImpactCategory::Home => &self.home,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImpactScores {
    pub overall: ImpactScore,
    pub categories: ImpactCategories,
}

/// 1-based question numbers grouped by the raw answer given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerTracking {
    pub never: Vec<u8>,
    pub rarely: Vec<u8>,
    pub sometimes: Vec<u8>,
    pub often: Vec<u8>,
    pub very_often: Vec<u8>,
}

impl AnswerTracking {
    pub fn bucket(&self, answer: Frequency) -> &[u8] {
        match answer {
            Frequency::Never => &self.never,
            Frequency::Rarely => &self.rarely,
            Frequency::Sometimes => &self.sometimes,
            Frequency::Often => &self.often,
            Frequency::VeryOften => &self.very_often,
        }
    }

    pub fn bucket_mut(&mut self, answer: Frequency) -> &mut Vec<u8> {
        match answer {
            Frequency::Never => &mut self.never,
            Frequency::Rarely => &mut self.rarely,
            Frequency::Sometimes => &mut self.sometimes,
            Frequency::Often => &mut self.often,
            Frequency::VeryOften => &mut self.very_often,
        }
    }
}

/// Part B question numbers (7-18) grouped by the points their answer earns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PartBScoring {
    pub no_points: Vec<u8>,
    pub one_point: Vec<u8>,
    pub two_points: Vec<u8>,
    pub three_points: Vec<u8>,
}

impl PartBScoring {
    pub fn bucket(&self, points: u8) -> Option<&[u8]> {
        match points {
            0 => Some(&self.no_points),
            1 => Some(&self.one_point),
            2 => Some(&self.two_points),
            3 => Some(&self.three_points),
            _ => None,
        }
    }

    pub fn total_points(&self) -> u32 {
        let count = |bucket: &Vec<u8>| bucket.len() as u32;
        count(&self.one_point) + 2 * count(&self.two_points) + 3 * count(&self.three_points)
    }
}
