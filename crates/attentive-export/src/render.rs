use tera::{Context, Tera};

use attentive_core::models::result::ScreeningResult;

use crate::error::ExportError;

pub const DEFAULT_TEMPLATE_NAME: &str = "report.md";

/// Report layout used when no custom template is configured.
///
/// The context is the serialized [`ScreeningResult`] plus `completed_on`
/// (the completion date as `YYYY-MM-DD`).
pub const DEFAULT_REPORT_TEMPLATE: &str = r#"# ADHD Assessment Report

Completed on {{ completed_on }}

## ADHD Likelihood Assessment

{{ outcomes.likelihood.interpretation }}

## ADHD Type Analysis

- **Inattentive Type:** Score {{ outcomes.types.inattentive.score }}/{{ outcomes.types.inattentive.max }} ({{ outcomes.types.inattentive.percentage | round(precision=1) }}%)
- **Hyperactive Type:** Score {{ outcomes.types.hyperactive.score }}/{{ outcomes.types.hyperactive.max }} ({{ outcomes.types.hyperactive.percentage | round(precision=1) }}%)

## Impact Assessment

{{ outcomes.impact.overall.interpretation }}

- **Work Impact:** {{ outcomes.impact.categories.work.interpretation }}
- **Social Impact:** {{ outcomes.impact.categories.social.interpretation }}
- **Home Impact:** {{ outcomes.impact.categories.home.interpretation }}

## Response Distribution

- **Never:** Questions: {{ outcomes.answer_tracking.never | join(sep=", ") }}
- **Rarely:** Questions: {{ outcomes.answer_tracking.rarely | join(sep=", ") }}
- **Sometimes:** Questions: {{ outcomes.answer_tracking.sometimes | join(sep=", ") }}
- **Often:** Questions: {{ outcomes.answer_tracking.often | join(sep=", ") }}
- **Very Often:** Questions: {{ outcomes.answer_tracking.very_often | join(sep=", ") }}

## Part B Scoring Analysis

- **No Points (Never/Rarely):** Questions: {{ outcomes.part_b_scoring.no_points | join(sep=", ") }}
- **One Point (Sometimes):** Questions: {{ outcomes.part_b_scoring.one_point | join(sep=", ") }}
- **Two Points (Often):** Questions: {{ outcomes.part_b_scoring.two_points | join(sep=", ") }}
- **Three Points (Very Often):** Questions: {{ outcomes.part_b_scoring.three_points | join(sep=", ") }}
{% if respondent is defined %}
---

## Respondent

- **Name:** {{ respondent.basic.full_name }}
- **Email:** {{ respondent.basic.email }}
- **Region:** {{ respondent.basic.region }}
- **Employment status:** {{ respondent.basic.employment_status }}
- **Date of birth:** {{ respondent.gp.date_of_birth }}
- **GP practice:** {{ respondent.gp.gp_name }}
{% endif %}"#;

/// Render a Tera template with a [`ScreeningResult`].
///
/// `template_content` is the raw template string (Jinja2 syntax).
pub fn render_report(
    template_name: &str,
    template_content: &str,
    result: &ScreeningResult,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(result)?;
    let mut context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;
    context.insert(
        "completed_on",
        &result.completed_at.strftime("%Y-%m-%d").to_string(),
    );

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, result_id = %result.id, "rendered report");
    Ok(rendered)
}

pub fn render_default_report(result: &ScreeningResult) -> Result<String, ExportError> {
    render_report(DEFAULT_TEMPLATE_NAME, DEFAULT_REPORT_TEMPLATE, result)
}
