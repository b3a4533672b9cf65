use attentive_core::error::InvalidInputError;
use attentive_core::models::input::SubAnswers;
use attentive_core::models::response::{Frequency, ImpactCategory, ImpactRating};

use super::tables::{PART_A_LEN, QUESTION_COUNT, QUESTION_RULES};

/// Screening responses that passed validation, in typed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Responses {
    answers: Vec<Option<Frequency>>,
    work: Vec<ImpactRating>,
    social: Vec<ImpactRating>,
    home: Vec<ImpactRating>,
}

impl Responses {
    /// Validate raw responses, failing on the first problem found.
    pub fn parse(
        answers: &[Option<u8>],
        sub_answers: &SubAnswers,
    ) -> Result<Self, InvalidInputError> {
        if let Some(problem) = check(answers, sub_answers).into_iter().next() {
            return Err(problem);
        }

        let ratings = |category: ImpactCategory| -> Vec<ImpactRating> {
            sub_answers
                .get(category)
                .iter()
                .filter_map(|&value| ImpactRating::from_value(value))
                .collect()
        };

        Ok(Self {
            answers: answers
                .iter()
                .map(|answer| answer.and_then(Frequency::from_value))
                .collect(),
            work: ratings(ImpactCategory::Work),
            social: ratings(ImpactCategory::Social),
            home: ratings(ImpactCategory::Home),
        })
    }

    /// Answer to the 1-based `question_id`, if given.
    pub fn answer(&self, question_id: u8) -> Option<Frequency> {
        let index = usize::from(question_id).checked_sub(1)?;
        self.answers.get(index).copied().flatten()
    }

    /// `(question_id, answer)` for every answered question, in question order.
    pub fn answered(&self) -> impl Iterator<Item = (u8, Frequency)> + '_ {
        (1u8..)
            .zip(&self.answers)
            .filter_map(|(question_id, answer)| answer.map(|a| (question_id, a)))
    }

    pub fn impact(&self, category: ImpactCategory) -> &[ImpactRating] {
        match category {
            ImpactCategory::Work => &self.work,
            ImpactCategory::Social => &self.social,
            ImpactCategory::Home => &self.home,
        }
    }
}

/// Every problem with a set of raw responses. Empty means they are valid.
pub fn check(answers: &[Option<u8>], sub_answers: &SubAnswers) -> Vec<InvalidInputError> {
    let mut problems = Vec::new();

    if answers.len() > QUESTION_COUNT {
        problems.push(InvalidInputError::TooManyAnswers {
            len: answers.len(),
            max: QUESTION_COUNT,
        });
    }

    let mut triggered = 0;
    for ((question_id, answer), rule) in (1u8..).zip(answers).zip(QUESTION_RULES) {
        let Some(value) = *answer else {
            continue;
        };
        match Frequency::from_value(value) {
            Some(frequency) if rule.is_met(frequency) => triggered += 1,
            Some(_) => {}
            None => problems.push(InvalidInputError::AnswerOutOfRange { question_id, value }),
        }
    }

    for question_id in 1..=PART_A_LEN as u8 {
        let given = answers.get(usize::from(question_id) - 1).copied().flatten();
        if given.is_none() {
            problems.push(InvalidInputError::MissingAnswer { question_id });
        }
    }

    for category in ImpactCategory::ALL {
        for (position, &value) in sub_answers.get(category).iter().enumerate() {
            if ImpactRating::from_value(value).is_none() {
                problems.push(InvalidInputError::ImpactOutOfRange {
                    category,
                    position,
                    value,
                });
            }
        }
    }

    let (work, social, home) = (
        sub_answers.work.len(),
        sub_answers.social.len(),
        sub_answers.home.len(),
    );
    if work != social || social != home {
        problems.push(InvalidInputError::MismatchedSubAnswers { work, social, home });
    }

    let sets = work.max(social).max(home);
    if sets != triggered {
        problems.push(InvalidInputError::SubAnswerCountMismatch { sets, triggered });
    }

    problems
}
