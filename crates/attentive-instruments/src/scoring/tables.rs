//! Fixed scoring rules for the ASRS v1.1.
//!
//! Every id list, per-item threshold and maximum used by the calculator is
//! declared here so the rules can be audited without reading the
//! arithmetic.

use attentive_core::models::question::ThresholdRule::{self, OftenOrAbove, SometimesOrAbove};
use attentive_core::models::response::Frequency;

pub const QUESTION_COUNT: usize = 18;

/// Questions 1-6 form Part A; 7-18 form Part B.
pub const PART_A_LEN: usize = 6;

/// Threshold of each question, indexed by `question_id - 1`. Decides when the
/// impact follow-ups are asked.
pub const QUESTION_RULES: [ThresholdRule; QUESTION_COUNT] = [
    SometimesOrAbove, // 1
    SometimesOrAbove, // 2
    SometimesOrAbove, // 3
    OftenOrAbove,     // 4
    OftenOrAbove,     // 5
    OftenOrAbove,     // 6
    OftenOrAbove,     // 7
    OftenOrAbove,     // 8
    SometimesOrAbove, // 9
    OftenOrAbove,     // 10
    OftenOrAbove,     // 11
    SometimesOrAbove, // 12
    OftenOrAbove,     // 13
    OftenOrAbove,     // 14
    OftenOrAbove,     // 15
    SometimesOrAbove, // 16
    OftenOrAbove,     // 17
    SometimesOrAbove, // 18
];

/// Part A likelihood thresholds by answer position.
pub const PART_A_RULES: [ThresholdRule; PART_A_LEN] = [
    SometimesOrAbove,
    SometimesOrAbove,
    SometimesOrAbove,
    OftenOrAbove,
    OftenOrAbove,
    OftenOrAbove,
];

/// A question counted toward a subtype, with the threshold it must meet
/// for that subtype. These thresholds are independent of
/// [`QUESTION_RULES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtypeItem {
    pub question_id: u8,
    pub rule: ThresholdRule,
}

const fn item(question_id: u8, rule: ThresholdRule) -> SubtypeItem {
    SubtypeItem { question_id, rule }
}

pub const INATTENTIVE_ITEMS: [SubtypeItem; 10] = [
    item(1, SometimesOrAbove),
    item(2, SometimesOrAbove),
    item(3, SometimesOrAbove),
    item(4, OftenOrAbove),
    item(7, OftenOrAbove),
    item(8, OftenOrAbove),
    item(9, SometimesOrAbove),
    item(10, OftenOrAbove),
    item(11, OftenOrAbove),
    item(14, OftenOrAbove),
];

pub const HYPERACTIVE_ITEMS: [SubtypeItem; 14] = [
    item(1, SometimesOrAbove),
    item(2, SometimesOrAbove),
    item(3, SometimesOrAbove),
    item(4, OftenOrAbove),
    item(5, OftenOrAbove),
    item(6, OftenOrAbove),
    item(8, OftenOrAbove),
    item(12, SometimesOrAbove),
    item(13, OftenOrAbove),
    item(14, OftenOrAbove),
    item(15, SometimesOrAbove),
    item(16, SometimesOrAbove),
    item(17, OftenOrAbove),
    item(18, SometimesOrAbove),
];

pub const INATTENTIVE_MAX: u8 = 10;
pub const HYPERACTIVE_MAX: u8 = 14;

/// Maximum impact score of one category: 18 follow-ups rated at most 3.
/// Percent bands are taken against this even when fewer follow-ups were asked.
pub const CATEGORY_IMPACT_MAX: u32 = 54;
pub const OVERALL_IMPACT_MAX: u32 = 162;

/// Points a Part B answer earns.
pub const fn part_b_points(answer: Frequency) -> u8 {
    match answer {
        Frequency::Never | Frequency::Rarely => 0,
        Frequency::Sometimes => 1,
        Frequency::Often => 2,
        Frequency::VeryOften => 3,
    }
}
