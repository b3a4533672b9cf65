use std::io::Read;
use std::path::Path;

use attentive_core::models::input::ScreeningInput;
use attentive_core::models::result::ScreeningResult;
use attentive_instruments::Instrument;

/// Read a [`ScreeningInput`] JSON document from `path`, or stdin for `-`.
pub fn read_input(path: &Path) -> eyre::Result<ScreeningInput> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read input at {}: {e}", path.display()))?
    };
    parse_input(&contents)
}

pub fn parse_input(contents: &str) -> eyre::Result<ScreeningInput> {
    serde_json::from_str(contents).map_err(|e| eyre::eyre!("invalid screening input: {e}"))
}

/// Score `input` without collecting respondent details.
pub fn score_input(
    instrument: &dyn Instrument,
    input: ScreeningInput,
) -> eyre::Result<ScreeningResult> {
    let problems = instrument.check_responses(&input);
    if !problems.is_empty() {
        for problem in &problems {
            tracing::warn!(%problem, "rejected screening input");
        }
        let summary: Vec<String> = problems.iter().map(|p| p.to_string()).collect();
        return Err(eyre::eyre!(
            "{} problem(s) with screening input: {}",
            problems.len(),
            summary.join("; ")
        ));
    }

    let outcomes = instrument.score(&input)?;
    Ok(ScreeningResult::new(instrument.id(), input, outcomes, None))
}
