use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How often a symptom occurred over the last six months.
/// Raw answer values run from 0 (Never) to 4 (Very Often).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Frequency {
    Never = 0,
    Rarely = 1,
    Sometimes = 2,
    Often = 3,
    VeryOften = 4,
}

impl Frequency {
    pub const ALL: [Frequency; 5] = [
        Frequency::Never,
        Frequency::Rarely,
        Frequency::Sometimes,
        Frequency::Often,
        Frequency::VeryOften,
    ];

    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Never),
            1 => Some(Self::Rarely),
            2 => Some(Self::Sometimes),
            3 => Some(Self::Often),
            4 => Some(Self::VeryOften),
            _ => None,
        }
    }

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::Rarely => "Rarely",
            Self::Sometimes => "Sometimes",
            Self::Often => "Often",
            Self::VeryOften => "Very Often",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rating given on an impact follow-up, 0 (No impact) to 3 (Extremely Difficult).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ImpactRating {
    NoImpact = 0,
    SomewhatDifficult = 1,
    VeryDifficult = 2,
    ExtremelyDifficult = 3,
}

impl ImpactRating {
    pub const ALL: [ImpactRating; 4] = [
        ImpactRating::NoImpact,
        ImpactRating::SomewhatDifficult,
        ImpactRating::VeryDifficult,
        ImpactRating::ExtremelyDifficult,
    ];

    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::NoImpact),
            1 => Some(Self::SomewhatDifficult),
            2 => Some(Self::VeryDifficult),
            3 => Some(Self::ExtremelyDifficult),
            _ => None,
        }
    }

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NoImpact => "No impact",
            Self::SomewhatDifficult => "Somewhat Difficult",
            Self::VeryDifficult => "Very Difficult",
            Self::ExtremelyDifficult => "Extremely Difficult",
        }
    }
}

/// Area of life an impact follow-up asks about.
///
/// Declaration order is the order the follow-ups are asked in, and the
/// order entries are appended to [`SubAnswers`](crate::models::input::SubAnswers).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ImpactCategory {
    Work,
    Social,
    Home,
}

impl ImpactCategory {
    pub const ALL: [ImpactCategory; 3] = [
        ImpactCategory::Work,
        ImpactCategory::Social,
        ImpactCategory::Home,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Social => "social",
            Self::Home => "home",
        }
    }

    /// The category asked after this one, if any.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Work => Some(Self::Social),
            Self::Social => Some(Self::Home),
            Self::Home => None,
        }
    }
}

impl fmt::Display for ImpactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
