use attentive_core::error::InvalidInputError;
use attentive_core::models::input::ScreeningInput;
use attentive_core::models::outcome::OutcomeReport;
use attentive_core::models::question::{Part, Question, SubQuestion};
use attentive_core::models::response::{Frequency, ImpactCategory, ImpactRating};

use crate::Instrument;
use crate::scoring::{self, responses, tables};

/// ASRS v1.1: Adult ADHD Self-Report Scale.
/// 18 frequency items over the last six months. Items 1-6 are the Part A
/// screener, items 7-18 complete the symptom profile.
pub struct AsrsV11;

const QUESTION_TEXT: [&str; tables::QUESTION_COUNT] = [
    "In the last 6 months, how often do you have trouble wrapping up the final details of a project, once the challenging parts have been done?",
    "In the last 6 months, how often do you have difficulty getting things in order when you have to do a task that requires organization?",
    "In the last 6 months, how often do you have problems remembering appointments or obligations?",
    "In the last 6 months, when you have a task that requires a lot of thought, how often do you avoid or delay getting started?",
    "In the last 6 months, how often do you fidget or squirm with your hands or feet when you have to sit down for a long time?",
    "In the last 6 months, how often do you feel overly active and compelled to do things, like you were driven by a motor?",
    "In the last 6 months, how often do you make careless mistakes when you have to work on a boring or a difficult project?",
    "In the last 6 months, how often do you have difficulty keeping your attention when you are doing boring or repetitive work?",
    "In the last 6 months, how often do you have difficulty concentrating on what people say to you, even when they are speaking to you directly?",
    "In the last 6 months, how often do you misplace or have difficulty finding things at home or at work?",
    "In the last 6 months, how often are you distracted by activity or noise around you?",
    "In the last 6 months, how often do you leave your seat in meetings or other situations in which you are expected to remain seated?",
    "In the last 6 months, how often do you feel restless or fidgety?",
    "In the last 6 months, how often do you have difficulty unwinding and relaxing when you have time to yourself?",
    "In the last 6 months, how often do you find yourself talking too much when you are in social situations?",
    "In the last 6 months, when you're in a conversation, how often do you find yourself finishing the sentences of the people you are talking to, before they can finish them themselves?",
    "In the last 6 months, how often do you have difficulty waiting your turn in situations when turn taking is required?",
    "In the last 6 months, how often do you interrupt others when they are busy?",
];

impl Instrument for AsrsV11 {
    fn id(&self) -> &str {
        "asrs_v1_1"
    }

    fn name(&self) -> &str {
        "ASRS v1.1"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let options: Vec<String> = Frequency::ALL
                .iter()
                .map(|f| f.label().to_string())
                .collect();

            (1u8..)
                .zip(QUESTION_TEXT)
                .zip(tables::QUESTION_RULES)
                .map(|((id, text), rule)| Question {
                    id,
                    part: if usize::from(id) <= tables::PART_A_LEN {
                        Part::A
                    } else {
                        Part::B
                    },
                    text: text.to_string(),
                    options: options.clone(),
                    rule,
                })
                .collect()
        });
        &QUESTIONS
    }

    fn sub_questions(&self) -> &[SubQuestion] {
        static SUB_QUESTIONS: std::sync::LazyLock<Vec<SubQuestion>> =
            std::sync::LazyLock::new(|| {
                let options: Vec<String> = ImpactRating::ALL
                    .iter()
                    .map(|r| r.label().to_string())
                    .collect();

                let prompts = [
                    (ImpactCategory::Work, "How much has this impacted your work/school life?"),
                    (
                        ImpactCategory::Social,
                        "How much has this impacted your Social/Family/Love life?",
                    ),
                    (
                        ImpactCategory::Home,
                        "How much has this impacted your ability to take care of things at home?",
                    ),
                ];

                prompts
                    .into_iter()
                    .map(|(category, text)| SubQuestion {
                        category,
                        text: format!("(If at all) {text}"),
                        options: options.clone(),
                    })
                    .collect()
            });
        &SUB_QUESTIONS
    }

    fn check_responses(&self, input: &ScreeningInput) -> Vec<InvalidInputError> {
        responses::check(&input.answers, &input.sub_answers)
    }

    fn score(&self, input: &ScreeningInput) -> Result<OutcomeReport, InvalidInputError> {
        scoring::compute_outcomes(&input.answers, &input.sub_answers)
    }
}
