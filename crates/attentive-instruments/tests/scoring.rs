use attentive_core::error::InvalidInputError;
use attentive_core::models::input::SubAnswers;
use attentive_core::models::outcome::{ImpactBand, LikelihoodBand};
use attentive_core::models::question::ThresholdRule;
use attentive_core::models::response::ImpactCategory;
use attentive_instruments::scoring::compute_outcomes;
use attentive_instruments::scoring::impact::impact_band;
use attentive_instruments::scoring::tables::{
    HYPERACTIVE_ITEMS, HYPERACTIVE_MAX, INATTENTIVE_ITEMS, INATTENTIVE_MAX, PART_A_LEN,
    PART_A_RULES, QUESTION_RULES,
};

fn answered(values: &[u8]) -> Vec<Option<u8>> {
    values.iter().copied().map(Some).collect()
}

fn sub(work: &[u8], social: &[u8], home: &[u8]) -> SubAnswers {
    SubAnswers {
        work: work.to_vec(),
        social: social.to_vec(),
        home: home.to_vec(),
    }
}

#[test]
fn all_never_scores_zero_everywhere() {
    let report = compute_outcomes(&answered(&[0; 18]), &SubAnswers::default()).unwrap();

    assert_eq!(report.likelihood.score, 0);
    assert_eq!(report.likelihood.band, LikelihoodBand::NoSigns);
    assert!(report.likelihood.interpretation.contains("didn't show signs"));
    assert_eq!(report.types.inattentive.score, 0);
    assert_eq!(report.types.hyperactive.score, 0);
    assert_eq!(report.types.inattentive.percentage, 0.0);
    assert_eq!(report.answer_tracking.never, (1..=18).collect::<Vec<u8>>());
    assert!(report.answer_tracking.very_often.is_empty());
    assert_eq!(report.part_b_scoring.no_points, (7..=18).collect::<Vec<u8>>());
    assert_eq!(report.part_b_scoring.total_points(), 0);
    assert_eq!(report.impact.overall.score, 0);
    assert_eq!(report.impact.overall.band, ImpactBand::Minimal);
}

#[test]
fn part_a_at_thresholds_is_highly_consistent() {
    let mut answers = vec![2, 2, 2, 3, 3, 3];
    answers.extend([0; 12]);
    let sets = 6;
    let impact = vec![0; sets];
    let report = compute_outcomes(&answered(&answers), &sub(&impact, &impact, &impact)).unwrap();

    assert_eq!(report.likelihood.score, 6);
    assert_eq!(report.likelihood.band, LikelihoodBand::HighlyConsistent);
    assert!(report.likelihood.interpretation.contains("highly consistent"));
    assert!(report.likelihood.interpretation.contains("Your score 6"));
}

#[test]
fn part_a_just_below_thresholds_scores_zero() {
    let mut answers = vec![1, 1, 1, 2, 2, 2];
    answers.extend([4; 12]);
    // Only the twelve Part B answers open follow-ups.
    let impact = vec![0; 12];
    let report = compute_outcomes(&answered(&answers), &sub(&impact, &impact, &impact)).unwrap();
    assert_eq!(report.likelihood.score, 0);
}

#[test]
fn middle_likelihood_band_recommends_completing() {
    let mut answers = vec![4, 0, 0, 0, 0, 3];
    answers.extend([0; 12]);
    let impact = [1, 2];
    let report = compute_outcomes(&answered(&answers), &sub(&impact, &impact, &impact)).unwrap();

    assert_eq!(report.likelihood.score, 2);
    assert_eq!(report.likelihood.band, LikelihoodBand::SomeSymptoms);
    assert!(report.likelihood.interpretation.contains("recommend you complete"));
}

#[test]
fn work_impact_of_nine_is_minimal() {
    let mut answers = vec![4, 4, 4, 0, 0, 0];
    answers.extend([0; 12]);
    let report =
        compute_outcomes(&answered(&answers), &sub(&[3, 3, 3], &[0, 0, 0], &[0, 0, 0])).unwrap();

    let work = &report.impact.categories.work;
    assert_eq!(work.score, 9);
    assert_eq!(work.max, 54);
    assert_eq!(work.band, ImpactBand::Minimal);
    assert!(work.interpretation.starts_with("No or Minimal Impact"));
    assert_eq!(report.impact.overall.score, 9);
    assert_eq!(report.impact.overall.max, 162);

    let categories = &report.impact.categories;
    assert_eq!(categories.get(ImpactCategory::Work), work);
    for category in [ImpactCategory::Social, ImpactCategory::Home] {
        assert_eq!(categories.get(category).score, 0);
        assert_eq!(categories.get(category).max, 54);
    }
}

#[test]
fn impact_bands_include_their_upper_bound() {
    // 54 * 0.2 = 10.8, 54 * 0.4 = 21.6, 54 * 0.6 = 32.4, 54 * 0.8 = 43.2
    assert_eq!(impact_band(10, 54), ImpactBand::Minimal);
    assert_eq!(impact_band(11, 54), ImpactBand::Mild);
    assert_eq!(impact_band(21, 54), ImpactBand::Mild);
    assert_eq!(impact_band(22, 54), ImpactBand::Moderate);
    assert_eq!(impact_band(32, 54), ImpactBand::Moderate);
    assert_eq!(impact_band(33, 54), ImpactBand::Severe);
    assert_eq!(impact_band(43, 54), ImpactBand::Severe);
    assert_eq!(impact_band(44, 54), ImpactBand::VerySevere);
    assert_eq!(impact_band(54, 54), ImpactBand::VerySevere);
    assert_eq!(impact_band(500, 54), ImpactBand::VerySevere);

    // Overall: 162 * 0.2 = 32.4, 64.8, 97.2, 129.6
    assert_eq!(impact_band(32, 162), ImpactBand::Minimal);
    assert_eq!(impact_band(33, 162), ImpactBand::Mild);
    assert_eq!(impact_band(64, 162), ImpactBand::Mild);
    assert_eq!(impact_band(65, 162), ImpactBand::Moderate);
    assert_eq!(impact_band(97, 162), ImpactBand::Moderate);
    assert_eq!(impact_band(98, 162), ImpactBand::Severe);
    assert_eq!(impact_band(129, 162), ImpactBand::Severe);
    assert_eq!(impact_band(130, 162), ImpactBand::VerySevere);
    assert_eq!(impact_band(162, 162), ImpactBand::VerySevere);

    // Exact fifths stay in the lower band.
    assert_eq!(impact_band(20, 100), ImpactBand::Minimal);
    assert_eq!(impact_band(21, 100), ImpactBand::Mild);
}

#[test]
fn subtype_thresholds_follow_their_own_tables() {
    // Question 15 needs "often" to trigger follow-ups, but only "sometimes"
    // to count toward the hyperactive subtype.
    let mut answers = vec![0; 18];
    answers[14] = 2;
    let report = compute_outcomes(&answered(&answers), &SubAnswers::default()).unwrap();
    assert_eq!(report.types.hyperactive.score, 1);
    assert_eq!(report.types.inattentive.score, 0);

    // Question 7 at "sometimes" is below its inattentive threshold.
    let mut answers = vec![0; 18];
    answers[6] = 2;
    let report = compute_outcomes(&answered(&answers), &SubAnswers::default()).unwrap();
    assert_eq!(report.types.inattentive.score, 0);
}

#[test]
fn all_very_often_maxes_both_subtypes() {
    let sets = 18;
    let impact = vec![3; sets];
    let report =
        compute_outcomes(&answered(&[4; 18]), &sub(&impact, &impact, &impact)).unwrap();

    assert_eq!(report.types.inattentive.score, INATTENTIVE_MAX);
    assert_eq!(report.types.inattentive.percentage, 100.0);
    assert_eq!(report.types.hyperactive.score, HYPERACTIVE_MAX);
    assert_eq!(report.types.hyperactive.percentage, 100.0);
    assert_eq!(report.impact.categories.home.score, 54);
    assert_eq!(report.impact.overall.score, 162);
    assert_eq!(report.impact.overall.band, ImpactBand::VerySevere);
    assert_eq!(report.part_b_scoring.three_points, (7..=18).collect::<Vec<u8>>());
    assert_eq!(report.part_b_scoring.total_points(), 36);
}

#[test]
fn percentages_use_fixed_maxima() {
    let mut answers = vec![0; 18];
    // Question 1 counts for both subtypes.
    answers[0] = 2;
    let impact = [0];
    let report = compute_outcomes(&answered(&answers), &sub(&impact, &impact, &impact)).unwrap();
    assert_eq!(report.types.inattentive.percentage, 1.0 / 10.0 * 100.0);
    assert_eq!(report.types.hyperactive.percentage, 1.0 / 14.0 * 100.0);
}

#[test]
fn part_b_points_map_from_raw_answers() {
    let mut answers = vec![0; 6];
    answers.extend([0, 1, 2, 3, 4, 4, 3, 2, 1, 0, 2, 4]);
    let triggered = answers
        .iter()
        .zip(QUESTION_RULES)
        .filter(|&(&value, rule)| value >= rule.threshold().value())
        .count();
    let impact = vec![1; triggered];
    let report = compute_outcomes(&answered(&answers), &sub(&impact, &impact, &impact)).unwrap();

    let scoring = &report.part_b_scoring;
    assert_eq!(scoring.no_points, vec![7, 8, 15, 16]);
    assert_eq!(scoring.one_point, vec![9, 14, 17]);
    assert_eq!(scoring.two_points, vec![10, 13]);
    assert_eq!(scoring.three_points, vec![11, 12, 18]);
}

#[test]
fn unanswered_part_b_questions_are_left_out() {
    let mut answers: Vec<Option<u8>> = answered(&[0, 0, 0, 0, 0, 0, 1]);
    answers.push(None);
    answers.push(Some(4));
    let impact = [2];
    let report = compute_outcomes(&answers, &sub(&impact, &impact, &impact)).unwrap();

    assert_eq!(report.answer_tracking.never, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(report.answer_tracking.rarely, vec![7]);
    assert_eq!(report.answer_tracking.very_often, vec![9]);
    assert_eq!(report.part_b_scoring.no_points, vec![7]);
    assert_eq!(report.part_b_scoring.three_points, vec![9]);
}

#[test]
fn out_of_range_answer_is_rejected() {
    let mut answers = answered(&[0; 18]);
    answers[3] = Some(5);
    let err = compute_outcomes(&answers, &SubAnswers::default()).unwrap_err();
    assert_eq!(
        err,
        InvalidInputError::AnswerOutOfRange {
            question_id: 4,
            value: 5
        }
    );
}

#[test]
fn too_many_answers_is_rejected() {
    let err = compute_outcomes(&answered(&[0; 19]), &SubAnswers::default()).unwrap_err();
    assert_eq!(err, InvalidInputError::TooManyAnswers { len: 19, max: 18 });
}

#[test]
fn missing_part_a_answer_is_rejected() {
    let mut answers = answered(&[0; 18]);
    answers[2] = None;
    let err = compute_outcomes(&answers, &SubAnswers::default()).unwrap_err();
    assert_eq!(err, InvalidInputError::MissingAnswer { question_id: 3 });

    let err = compute_outcomes(&answered(&[0; 4]), &SubAnswers::default()).unwrap_err();
    assert_eq!(err, InvalidInputError::MissingAnswer { question_id: 5 });
}

#[test]
fn impact_rating_above_three_is_rejected() {
    let err = compute_outcomes(&answered(&[4; 6]), &sub(&[1], &[4], &[0])).unwrap_err();
    assert_eq!(
        err,
        InvalidInputError::ImpactOutOfRange {
            category: ImpactCategory::Social,
            position: 0,
            value: 4
        }
    );
}

#[test]
fn uneven_sub_answers_are_rejected() {
    let err = compute_outcomes(&answered(&[4; 6]), &sub(&[1, 2], &[1], &[1])).unwrap_err();
    assert_eq!(
        err,
        InvalidInputError::MismatchedSubAnswers {
            work: 2,
            social: 1,
            home: 1
        }
    );
}

#[test]
fn more_follow_ups_than_triggers_is_rejected() {
    let err = compute_outcomes(&answered(&[0; 18]), &sub(&[1], &[1], &[1])).unwrap_err();
    assert_eq!(
        err,
        InvalidInputError::SubAnswerCountMismatch {
            sets: 1,
            triggered: 0
        }
    );
}

#[test]
fn triggered_answers_without_follow_ups_are_rejected() {
    let err = compute_outcomes(&answered(&[4; 18]), &SubAnswers::default()).unwrap_err();
    assert_eq!(
        err,
        InvalidInputError::SubAnswerCountMismatch {
            sets: 0,
            triggered: 18
        }
    );

    // One follow-up set short.
    let mut answers = vec![4, 0, 0, 3, 0, 0];
    answers.extend([0; 12]);
    let err = compute_outcomes(&answered(&answers), &sub(&[3], &[3], &[3])).unwrap_err();
    assert_eq!(
        err,
        InvalidInputError::SubAnswerCountMismatch {
            sets: 1,
            triggered: 2
        }
    );
}

#[test]
fn part_a_table_agrees_with_question_rules() {
    assert_eq!(PART_A_RULES[..], QUESTION_RULES[..PART_A_LEN]);
    assert_eq!(
        PART_A_RULES,
        [
            ThresholdRule::SometimesOrAbove,
            ThresholdRule::SometimesOrAbove,
            ThresholdRule::SometimesOrAbove,
            ThresholdRule::OftenOrAbove,
            ThresholdRule::OftenOrAbove,
            ThresholdRule::OftenOrAbove,
        ]
    );
}

#[test]
fn subtype_tables_match_published_lists() {
    let ids = |items: &[attentive_instruments::scoring::tables::SubtypeItem]| {
        items.iter().map(|i| i.question_id).collect::<Vec<_>>()
    };
    let often = |items: &[attentive_instruments::scoring::tables::SubtypeItem]| {
        items
            .iter()
            .filter(|i| i.rule == ThresholdRule::OftenOrAbove)
            .map(|i| i.question_id)
            .collect::<Vec<_>>()
    };

    assert_eq!(ids(&INATTENTIVE_ITEMS), vec![1, 2, 3, 4, 7, 8, 9, 10, 11, 14]);
    assert_eq!(often(&INATTENTIVE_ITEMS), vec![4, 7, 8, 10, 11, 14]);
    assert_eq!(
        ids(&HYPERACTIVE_ITEMS),
        vec![1, 2, 3, 4, 5, 6, 8, 12, 13, 14, 15, 16, 17, 18]
    );
    assert_eq!(often(&HYPERACTIVE_ITEMS), vec![4, 5, 6, 8, 13, 14, 17]);
    assert_eq!(INATTENTIVE_ITEMS.len(), usize::from(INATTENTIVE_MAX));
    assert_eq!(HYPERACTIVE_ITEMS.len(), usize::from(HYPERACTIVE_MAX));
}
