use attentive_core::models::input::{ScreeningInput, SubAnswers};
use attentive_core::models::respondent::{
    BasicInfo, EmploymentStatus, GpInfo, PersonalInfo, Region,
};
use attentive_core::models::result::ScreeningResult;
use attentive_export::docx::{Block, Inline, generate_docx, parse_inline};
use attentive_export::error::ExportError;
use attentive_export::render::{render_default_report, render_report};
use attentive_export::styles::DocumentStyles;
use attentive_instruments::{Instrument, require_instrument};

fn screening(respondent: Option<PersonalInfo>) -> ScreeningResult {
    let asrs = require_instrument("asrs_v1_1").unwrap();
    // Q1 (sometimes-or-above) and Q7 (often-or-above) meet their thresholds.
    let mut answers = vec![0u8; 18];
    answers[0] = 2;
    answers[6] = 4;
    let input = ScreeningInput::answered(
        &answers,
        SubAnswers {
            work: vec![1, 2],
            social: vec![0, 0],
            home: vec![3, 3],
        },
    );
    let outcomes = asrs.score(&input).unwrap();
    ScreeningResult::new(asrs.id(), input, outcomes, respondent)
}

fn respondent() -> PersonalInfo {
    PersonalInfo {
        basic: BasicInfo {
            full_name: "Alex Morgan".to_string(),
            email: "alex@example.com".to_string(),
            region: Region::Wales,
            employment_status: EmploymentStatus::Retired,
        },
        gp: GpInfo {
            date_of_birth: jiff::civil::date(1995, 4, 12),
            gp_name: "Riverside Surgery".to_string(),
            gp_address: "22 Bridge Road".to_string(),
        },
    }
}

#[test]
fn default_report_includes_every_section() {
    let result = screening(None);
    let rendered = render_default_report(&result).unwrap();

    assert!(rendered.starts_with("# ADHD Assessment Report"));
    for heading in [
        "## ADHD Likelihood Assessment",
        "## ADHD Type Analysis",
        "## Impact Assessment",
        "## Response Distribution",
        "## Part B Scoring Analysis",
    ] {
        assert!(rendered.contains(heading), "missing {heading}");
    }
    assert!(rendered.contains(&result.outcomes.likelihood.interpretation));
    assert!(rendered.contains("Score 2/10"));
    assert!(rendered.contains("Score 1/14"));
    assert!(rendered.contains("**Three Points (Very Often):** Questions: 7"));
    assert!(!rendered.contains("## Respondent"));

    let date = result.completed_at.strftime("%Y-%m-%d").to_string();
    assert!(rendered.contains(&format!("Completed on {date}")));
}

#[test]
fn respondent_section_is_rendered_when_present() {
    let rendered = render_default_report(&screening(Some(respondent()))).unwrap();
    assert!(rendered.contains("## Respondent"));
    assert!(rendered.contains("**Name:** Alex Morgan"));
    assert!(rendered.contains("**Date of birth:** 1995-04-12"));
    assert!(rendered.contains("**GP practice:** Riverside Surgery"));
}

#[test]
fn custom_template_sees_result_fields() {
    let result = screening(None);
    let rendered = render_report(
        "summary.md",
        "{{ instrument_id }}: {{ part_a_score }} / {{ part_b_points }}",
        &result,
    )
    .unwrap();
    assert_eq!(rendered, "asrs_v1_1: 1 / 3");
}

#[test]
fn broken_templates_are_reported() {
    let result = screening(None);
    assert!(matches!(
        render_report("bad.md", "{% if %}", &result),
        Err(ExportError::TemplateParse(_))
    ));
    assert!(matches!(
        render_report("missing.md", "{{ nothing.here }}", &result),
        Err(ExportError::TemplateRender(_))
    ));
}

#[test]
fn blocks_are_classified_per_line() {
    assert_eq!(Block::parse("   "), Block::Blank);
    assert_eq!(
        Block::parse("# Title"),
        Block::Heading {
            level: 1,
            text: "Title"
        }
    );
    assert_eq!(
        Block::parse("### Sub"),
        Block::Heading {
            level: 3,
            text: "Sub"
        }
    );
    assert_eq!(Block::parse("#### Deep"), Block::Paragraph("#### Deep"));
    assert_eq!(Block::parse("#hashtag"), Block::Paragraph("#hashtag"));
    assert_eq!(Block::parse("- **Work:** fine"), Block::Bullet("**Work:** fine"));
    assert_eq!(Block::parse("---"), Block::PageBreak);
    assert_eq!(Block::parse("***"), Block::PageBreak);
}

#[test]
fn bold_markers_split_inline_text() {
    assert_eq!(
        parse_inline("**Work Impact:** moderate"),
        vec![Inline::Bold("Work Impact:"), Inline::Plain(" moderate")]
    );
    assert_eq!(
        parse_inline("a **b** c **d**"),
        vec![
            Inline::Plain("a "),
            Inline::Bold("b"),
            Inline::Plain(" c "),
            Inline::Bold("d")
        ]
    );
    assert_eq!(parse_inline("plain"), vec![Inline::Plain("plain")]);
    assert!(parse_inline("").is_empty());
}

#[test]
fn unclosed_bold_marker_is_kept_literally() {
    assert_eq!(parse_inline("Note **"), vec![Inline::Plain("Note **")]);
    assert_eq!(
        parse_inline("**Name:** Sam **unfinished"),
        vec![Inline::Bold("Name:"), Inline::Plain(" Sam **unfinished")]
    );
}

#[test]
fn docx_is_a_zip_archive() {
    let rendered = render_default_report(&screening(Some(respondent()))).unwrap();
    let bytes = generate_docx(&rendered, &DocumentStyles::default()).unwrap();
    assert!(bytes.len() > 100);
    assert_eq!(&bytes[..2], b"PK");

    let styles = DocumentStyles {
        body_font: "Arial".to_string(),
        heading1_size: 24,
        ..DocumentStyles::default()
    };
    let bytes = generate_docx("# Title\n\nunclosed **bold", &styles).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn styles_fill_missing_fields_with_defaults() {
    let styles: DocumentStyles = serde_json::from_str(r#"{"body_size": 12}"#).unwrap();
    assert_eq!(styles.body_size, 12);
    assert_eq!(styles.body_font, "Calibri");
    assert_eq!(styles.heading_size(1), 18);
    assert_eq!(styles.heading_size(2), 14);
    assert_eq!(styles.heading_size(3), 12);
}
