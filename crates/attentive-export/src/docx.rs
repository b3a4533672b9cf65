use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// One line of rendered report text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    Blank,
    Heading { level: u8, text: &'a str },
    Bullet(&'a str),
    PageBreak,
    Paragraph(&'a str),
}

impl<'a> Block<'a> {
    /// Classify a line of the Markdown-ish subset the report templates use:
    /// `#`/`##`/`###` headings, `- ` bullets, `---` page breaks.
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Blank;
        }
        if line == "---" || line == "***" {
            return Self::PageBreak;
        }
        if let Some(text) = line.strip_prefix("- ") {
            return Self::Bullet(text);
        }

        let hashes = line.bytes().take_while(|&b| b == b'#').count();
        match line[hashes..].strip_prefix(' ') {
            Some(text) if (1..=3).contains(&hashes) => Self::Heading {
                level: hashes as u8,
                text,
            },
            _ => Self::Paragraph(line),
        }
    }
}

/// Build a DOCX document from rendered report text. `**bold**` spans inside
/// bullets and paragraphs become bold runs.
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = (1..=3).fold(Docx::new(), |docx, level| {
        docx.add_style(
            Style::new(&format!("Heading{level}"), StyleType::Paragraph)
                .name(format!("heading {level}"))
                .size(styles.heading_size(level) * 2), // half-points
        )
    });

    for block in rendered.lines().map(Block::parse) {
        let paragraph = match block {
            Block::Blank => Paragraph::new(),
            Block::PageBreak => Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
            Block::Heading { level, text } => Paragraph::new()
                .style(&format!("Heading{level}"))
                .add_run(
                    Run::new()
                        .add_text(text)
                        .fonts(RunFonts::new().ascii(&styles.heading_font)),
                ),
            Block::Bullet(text) => {
                let bullet = body_run("\u{2022} ", styles);
                inline_runs(text, styles)
                    .into_iter()
                    .fold(Paragraph::new().add_run(bullet), Paragraph::add_run)
                    .align(AlignmentType::Left)
            }
            Block::Paragraph(text) => inline_runs(text, styles)
                .into_iter()
                .fold(Paragraph::new(), Paragraph::add_run)
                .align(AlignmentType::Left),
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    let bytes = buf.into_inner();
    tracing::debug!(bytes = bytes.len(), "generated docx");
    Ok(bytes)
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// A run of inline text inside a paragraph or bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inline<'a> {
    Plain(&'a str),
    Bold(&'a str),
}

/// Split `text` into plain and `**bold**` spans. A `**` with no closing
/// marker stays in the text as written.
pub fn parse_inline(text: &str) -> Vec<Inline<'_>> {
    let mut spans = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find("**") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("**") else {
            break;
        };
        if start > 0 {
            spans.push(Inline::Plain(&rest[..start]));
        }
        if end > 0 {
            spans.push(Inline::Bold(&after[..end]));
        }
        rest = &after[end + 2..];
    }
    if !rest.is_empty() {
        spans.push(Inline::Plain(rest));
    }
    spans
}

fn inline_runs(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    parse_inline(text)
        .into_iter()
        .map(|span| match span {
            Inline::Plain(text) => body_run(text, styles),
            Inline::Bold(text) => body_run(text, styles).bold(),
        })
        .collect()
}
