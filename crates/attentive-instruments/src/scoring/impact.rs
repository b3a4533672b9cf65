use attentive_core::models::outcome::{ImpactBand, ImpactCategories, ImpactScore, ImpactScores};
use attentive_core::models::response::ImpactCategory;

use super::responses::Responses;
use super::tables::{CATEGORY_IMPACT_MAX, OVERALL_IMPACT_MAX};

/// Band `score` into five equal-width ranges of `max`.
///
/// Each range includes its upper bound (`score <= max * k / 5`); anything
/// above `max` falls into the last band.
pub fn impact_band(score: u32, max: u32) -> ImpactBand {
    let score = u64::from(score) * 5;
    (1u64..)
        .zip(ImpactBand::ALL)
        .find(|&(step, _)| score <= u64::from(max) * step)
        .map_or(ImpactBand::VerySevere, |(_, band)| band)
}

pub fn impact_score(score: u32, max: u32) -> ImpactScore {
    let band = impact_band(score, max);
    ImpactScore {
        score,
        max,
        band,
        interpretation: band.interpretation().to_string(),
    }
}

pub fn category_total(responses: &Responses, category: ImpactCategory) -> u32 {
    responses
        .impact(category)
        .iter()
        .map(|rating| u32::from(rating.value()))
        .sum()
}

pub fn impact_scores(responses: &Responses) -> ImpactScores {
    let work = category_total(responses, ImpactCategory::Work);
    let social = category_total(responses, ImpactCategory::Social);
    let home = category_total(responses, ImpactCategory::Home);

    ImpactScores {
        overall: impact_score(work + social + home, OVERALL_IMPACT_MAX),
        categories: ImpactCategories {
            work: impact_score(work, CATEGORY_IMPACT_MAX),
            social: impact_score(social, CATEGORY_IMPACT_MAX),
            home: impact_score(home, CATEGORY_IMPACT_MAX),
        },
    }
}
