use attentive_core::models::respondent::{
    AgeGroup, BasicInfo, EmploymentStatus, GpInfo, Region,
};
use attentive_core::models::result::ScreeningResult;
use attentive_instruments::Instrument;
use attentive_instruments::error::SessionError;
use attentive_instruments::session::{Session, Step};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

const REDIRECT_MESSAGE: &str = "We have other questionnaires more suitable for your situation. \
Links to appropriate questionnaires will be available soon.";

const SCREENED_OUT_MESSAGE: &str = "Based on your responses, your answers didn't show signs of \
ADHD. However, you might be interested in exploring other areas of neurodiversity and mental \
health.";

const SUBMITTED_MESSAGE: &str = "Your responses have been recorded. We will review your \
screening results and contact your GP practice. You should hear back from them within the next \
few weeks.";

/// Walk the respondent through `instrument` on the terminal. Returns `None`
/// when the flow ends without a result (redirected or screened out).
pub fn run(instrument: &dyn Instrument) -> eyre::Result<Option<ScreeningResult>> {
    let theme = ColorfulTheme::default();
    let mut session = Session::new(instrument);

    loop {
        match session.step() {
            Step::AgeGate => {
                let labels: Vec<&str> = AgeGroup::ALL.iter().map(|g| g.label()).collect();
                let choice = select(&theme, "Who is completing this questionnaire?", &labels)?;
                session.select_age_group(AgeGroup::ALL[choice])?;
            }
            Step::Redirected { .. } => {
                eprintln!("{REDIRECT_MESSAGE}");
                return Ok(None);
            }
            Step::PartAQuestion { .. } | Step::PartBQuestion { .. } => {
                let question = session
                    .current_question()
                    .ok_or_else(|| eyre::eyre!("no question at step {:?}", session.step()))?;
                let prompt = match session.progress() {
                    Some(p) => format!(
                        "[{} {}/{}, {:.0}%] {}",
                        p.part.label(),
                        p.position,
                        p.total,
                        p.percent(),
                        question.text
                    ),
                    None => question.text.clone(),
                };
                let choice = select(&theme, &prompt, &question.options)?;
                session.answer(choice as u8)?;
            }
            Step::FollowUp { .. } => {
                let sub = session
                    .current_sub_question()
                    .ok_or_else(|| eyre::eyre!("no follow-up at step {:?}", session.step()))?;
                let choice = select(&theme, &sub.text, &sub.options)?;
                session.answer_impact(choice as u8)?;
            }
            Step::PartASummary { .. } => match session.continue_to_part_b() {
                Ok(_) => eprintln!(
                    "Thank you for completing Part A of the questionnaire. \
                     Let's continue with Part B to get a complete assessment."
                ),
                Err(SessionError::ScreenedOut) => {
                    eprintln!("{SCREENED_OUT_MESSAGE}");
                    return Ok(None);
                }
                Err(e) => return Err(e.into()),
            },
            Step::BasicInfo => {
                let info = prompt_basic_info(&theme)?;
                session.submit_basic_info(info)?;
            }
            Step::GpInfo => {
                let gp = prompt_gp_info(&theme)?;
                let result = session.submit_gp_info(gp)?.clone();
                eprintln!("{SUBMITTED_MESSAGE}");
                return Ok(Some(result));
            }
            Step::Submitted => return Ok(session.result().cloned()),
        }
    }
}

fn select<T: ToString>(theme: &ColorfulTheme, prompt: &str, items: &[T]) -> eyre::Result<usize> {
    let choice = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?;
    Ok(choice)
}

fn required_text(theme: &ColorfulTheme, prompt: &str) -> eyre::Result<String> {
    let text = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("this field is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(text.trim().to_string())
}

fn prompt_basic_info(theme: &ColorfulTheme) -> eyre::Result<BasicInfo> {
    let full_name = required_text(theme, "Full name")?;
    let email = required_text(theme, "Email")?;

    let regions: Vec<&str> = Region::ALL.iter().map(|r| r.label()).collect();
    let region = Region::ALL[select(theme, "Region", &regions)?];

    let statuses: Vec<&str> = EmploymentStatus::ALL.iter().map(|s| s.label()).collect();
    let employment_status = EmploymentStatus::ALL[select(theme, "Employment status", &statuses)?];

    Ok(BasicInfo {
        full_name,
        email,
        region,
        employment_status,
    })
}

fn prompt_gp_info(theme: &ColorfulTheme) -> eyre::Result<GpInfo> {
    let date_of_birth = Input::<String>::with_theme(theme)
        .with_prompt("Date of birth (YYYY-MM-DD)")
        .validate_with(|input: &String| -> Result<(), String> {
            input
                .trim()
                .parse::<jiff::civil::Date>()
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?
        .trim()
        .parse::<jiff::civil::Date>()?;

    Ok(GpInfo {
        date_of_birth,
        gp_name: required_text(theme, "GP practice name")?,
        gp_address: required_text(theme, "GP practice address")?,
    })
}
