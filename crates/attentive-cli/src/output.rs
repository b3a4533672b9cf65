use std::io::Write;
use std::path::Path;

use attentive_core::models::result::ScreeningResult;
use attentive_export::docx::generate_docx;
use attentive_export::render::{render_default_report, render_report};
use serde::{Deserialize, Serialize};

use crate::config::AttentiveConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Markdown,
    Docx,
}

impl ReportFormat {
    pub const fn is_binary(self) -> bool {
        matches!(self, Self::Docx)
    }
}

/// Report text for `result`, using the configured template when there is one.
pub fn render_markdown(
    result: &ScreeningResult,
    config: &AttentiveConfig,
    config_path: &Path,
) -> eyre::Result<String> {
    let Some(template_path) = config.template_path(config_path) else {
        return Ok(render_default_report(result)?);
    };

    let content = std::fs::read_to_string(&template_path).map_err(|e| {
        eyre::eyre!(
            "failed to read report template at {}: {e}",
            template_path.display()
        )
    })?;
    let name = template_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("report.md");
    Ok(render_report(name, &content, result)?)
}

pub fn render(
    result: &ScreeningResult,
    format: ReportFormat,
    config: &AttentiveConfig,
    config_path: &Path,
) -> eyre::Result<Vec<u8>> {
    let bytes = match format {
        ReportFormat::Json => {
            let mut json = serde_json::to_vec_pretty(result)?;
            json.push(b'\n');
            json
        }
        ReportFormat::Markdown => render_markdown(result, config, config_path)?.into_bytes(),
        ReportFormat::Docx => {
            let rendered = render_markdown(result, config, config_path)?;
            generate_docx(&rendered, &config.styles)?
        }
    };
    Ok(bytes)
}

/// Write to `output`, or stdout when `None`. DOCX is never written to stdout.
pub fn write_output(bytes: &[u8], format: ReportFormat, output: Option<&Path>) -> eyre::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, bytes)
                .map_err(|e| eyre::eyre!("failed to write {}: {e}", path.display()))?;
            tracing::info!(path = %path.display(), ?format, "report written");
        }
        None if format.is_binary() => {
            return Err(eyre::eyre!("{format:?} output needs --output FILE"));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
