//! The questionnaire flow as an explicit state machine.
//!
//! A [`Session`] walks one respondent through the age gate, Part A, the
//! Part A summary, Part B and the contact/GP forms. Each question whose
//! answer meets its threshold is followed by the three impact follow-ups.
//! Actions that do not fit the current [`Step`] are rejected and leave the
//! session untouched.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use attentive_core::error::InvalidInputError;
use attentive_core::models::input::{ScreeningInput, SubAnswers};
use attentive_core::models::question::{Part, Question, SubQuestion};
use attentive_core::models::respondent::{AgeGroup, BasicInfo, GpInfo, PersonalInfo};
use attentive_core::models::response::{Frequency, ImpactCategory, ImpactRating};
use attentive_core::models::result::ScreeningResult;

use crate::Instrument;
use crate::error::SessionError;
use crate::scoring::likelihood::count_part_a;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "step", rename_all = "snake_case")]
#[ts(export)]
pub enum Step {
    AgeGate,
    /// The respondent is not an adult answering for themselves.
    Redirected { age_group: AgeGroup },
    PartAQuestion { question_id: u8 },
    FollowUp { question_id: u8, category: ImpactCategory },
    PartASummary { score: u8 },
    PartBQuestion { question_id: u8 },
    BasicInfo,
    GpInfo,
    Submitted,
}

impl Step {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AgeGate => "age_gate",
            Self::Redirected { .. } => "redirected",
            Self::PartAQuestion { .. } => "part_a_question",
            Self::FollowUp { .. } => "follow_up",
            Self::PartASummary { .. } => "part_a_summary",
            Self::PartBQuestion { .. } => "part_b_question",
            Self::BasicInfo => "basic_info",
            Self::GpInfo => "gp_info",
            Self::Submitted => "submitted",
        }
    }

    /// Whether the flow has ended.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Redirected { .. } | Self::Submitted)
    }
}

/// "Question `position` of `total`" within the current part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Progress {
    pub part: Part,
    pub position: usize,
    pub total: usize,
}

impl Progress {
    pub fn percent(&self) -> f64 {
        self.position as f64 / self.total as f64 * 100.0
    }
}

pub struct Session<'a> {
    instrument: &'a dyn Instrument,
    step: Step,
    age_group: Option<AgeGroup>,
    answers: Vec<Option<u8>>,
    sub_answers: SubAnswers,
    basic_info: Option<BasicInfo>,
    result: Option<ScreeningResult>,
}

impl<'a> Session<'a> {
    pub fn new(instrument: &'a dyn Instrument) -> Self {
        Self {
            instrument,
            step: Step::AgeGate,
            age_group: None,
            answers: vec![None; instrument.questions().len()],
            sub_answers: SubAnswers::default(),
            basic_info: None,
            result: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn age_group(&self) -> Option<AgeGroup> {
        self.age_group
    }

    /// Raw answers collected so far, indexed by `question_id - 1`.
    pub fn answers(&self) -> &[Option<u8>] {
        &self.answers
    }

    pub fn sub_answers(&self) -> &SubAnswers {
        &self.sub_answers
    }

    pub fn result(&self) -> Option<&ScreeningResult> {
        self.result.as_ref()
    }

    /// Part A score from the answers recorded so far.
    pub fn part_a_score(&self) -> u8 {
        count_part_a(|question_id| {
            let index = usize::from(question_id).checked_sub(1)?;
            self.answers
                .get(index)
                .copied()
                .flatten()
                .and_then(Frequency::from_value)
        })
    }

    /// The question being asked, or whose follow-ups are being asked.
    pub fn current_question(&self) -> Option<&'a Question> {
        let instrument = self.instrument;
        match self.step {
            Step::PartAQuestion { question_id }
            | Step::PartBQuestion { question_id }
            | Step::FollowUp { question_id, .. } => instrument.question(question_id),
            _ => None,
        }
    }

    pub fn current_sub_question(&self) -> Option<&'a SubQuestion> {
        let Step::FollowUp { category, .. } = self.step else {
            return None;
        };
        let instrument = self.instrument;
        instrument
            .sub_questions()
            .iter()
            .find(|sub| sub.category == category)
    }

    pub fn progress(&self) -> Option<Progress> {
        let question = self.current_question()?;
        let in_part = self.instrument.questions_in(question.part);
        let position = in_part.iter().position(|q| q.id == question.id)? + 1;
        Some(Progress {
            part: question.part,
            position,
            total: in_part.len(),
        })
    }

    pub fn select_age_group(&mut self, age_group: AgeGroup) -> Result<Step, SessionError> {
        self.require_step("select an age group", |step| matches!(step, Step::AgeGate))?;

        self.age_group = Some(age_group);
        let next = match age_group {
            AgeGroup::Adult => self.step_for_question(1),
            other => Step::Redirected { age_group: other },
        };
        Ok(self.transition(next))
    }

    /// Record the answer to the current question.
    pub fn answer(&mut self, value: u8) -> Result<Step, SessionError> {
        let question_id = match self.step {
            Step::PartAQuestion { question_id } | Step::PartBQuestion { question_id } => {
                question_id
            }
            step => return Err(self.reject("answer a question", step)),
        };
        if Frequency::from_value(value).is_none() {
            return Err(InvalidInputError::AnswerOutOfRange { question_id, value }.into());
        }

        if let Some(slot) = self.answers.get_mut(usize::from(question_id) - 1) {
            *slot = Some(value);
        }

        let next = if self.instrument.triggers_follow_up(question_id, value) {
            Step::FollowUp {
                question_id,
                category: ImpactCategory::Work,
            }
        } else {
            self.step_after(question_id)
        };
        Ok(self.transition(next))
    }

    /// Record the rating for the current impact follow-up.
    pub fn answer_impact(&mut self, value: u8) -> Result<Step, SessionError> {
        let (question_id, category) = match self.step {
            Step::FollowUp {
                question_id,
                category,
            } => (question_id, category),
            step => return Err(self.reject("answer an impact follow-up", step)),
        };
        if ImpactRating::from_value(value).is_none() {
            return Err(InvalidInputError::ImpactOutOfRange {
                category,
                position: self.sub_answers.get(category).len(),
                value,
            }
            .into());
        }

        self.sub_answers.push(category, value);

        let next = match category.next() {
            Some(category) => Step::FollowUp {
                question_id,
                category,
            },
            None => self.step_after(question_id),
        };
        Ok(self.transition(next))
    }

    pub fn continue_to_part_b(&mut self) -> Result<Step, SessionError> {
        let score = match self.step {
            Step::PartASummary { score } => score,
            step => return Err(self.reject("continue to Part B", step)),
        };
        if score == 0 {
            tracing::info!("part A score is zero; part B not offered");
            return Err(SessionError::ScreenedOut);
        }

        let first_b = self
            .instrument
            .questions_in(Part::B)
            .first()
            .map_or(Step::BasicInfo, |q| self.step_for_question(q.id));
        Ok(self.transition(first_b))
    }

    pub fn submit_basic_info(&mut self, info: BasicInfo) -> Result<Step, SessionError> {
        self.require_step("submit contact details", |step| {
            matches!(step, Step::BasicInfo)
        })?;
        info.validate()?;

        self.basic_info = Some(info);
        Ok(self.transition(Step::GpInfo))
    }

    /// Submit the GP details, compute the outcome report and finish.
    pub fn submit_gp_info(&mut self, gp: GpInfo) -> Result<&ScreeningResult, SessionError> {
        self.require_step("submit GP details", |step| matches!(step, Step::GpInfo))?;
        gp.validate()?;

        let input = ScreeningInput::new(self.answers.clone(), self.sub_answers.clone());
        let outcomes = self.instrument.score(&input)?;
        let respondent = self
            .basic_info
            .clone()
            .map(|basic| PersonalInfo { basic, gp });

        let result = ScreeningResult::new(self.instrument.id(), input, outcomes, respondent);
        tracing::info!(
            result_id = %result.id,
            instrument = self.instrument.id(),
            likelihood = result.part_a_score,
            "screening submitted"
        );

        self.transition(Step::Submitted);
        Ok(self.result.insert(result))
    }

    fn require_step(
        &self,
        action: &'static str,
        allowed: impl Fn(&Step) -> bool,
    ) -> Result<(), SessionError> {
        if allowed(&self.step) {
            Ok(())
        } else {
            Err(self.reject(action, self.step))
        }
    }

    fn reject(&self, action: &'static str, step: Step) -> SessionError {
        tracing::warn!(action, step = step.name(), "rejected session action");
        SessionError::UnexpectedAction { action, step }
    }

    fn transition(&mut self, next: Step) -> Step {
        tracing::debug!(from = self.step.name(), to = next.name(), "session step");
        self.step = next;
        next
    }

    fn step_for_question(&self, question_id: u8) -> Step {
        match self.instrument.question(question_id).map(|q| q.part) {
            Some(Part::A) => Step::PartAQuestion { question_id },
            Some(Part::B) => Step::PartBQuestion { question_id },
            None => Step::BasicInfo,
        }
    }

    /// Where the flow goes once `question_id` and its follow-ups are done.
    fn step_after(&self, question_id: u8) -> Step {
        let current = self.instrument.question(question_id).map(|q| q.part);
        let next = question_id
            .checked_add(1)
            .and_then(|id| self.instrument.question(id));

        match (current, next) {
            (Some(Part::A), Some(next)) if next.part == Part::B => Step::PartASummary {
                score: self.part_a_score(),
            },
            (_, Some(next)) => self.step_for_question(next.id),
            (_, None) => Step::BasicInfo,
        }
    }
}
