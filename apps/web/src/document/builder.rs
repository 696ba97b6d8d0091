//! Assembles the fixed résumé story and hands it to the PDF renderer.

use chrono::{DateTime, Utc};
use genpdf::fonts::{FontData, FontFamily};

use crate::document::pdf::{render_pdf, Block, DocumentInfo, TextStyle};
use crate::document::sanitize::{clean_text, escape_markup, format_skills, paragraph};
use crate::document::DocumentError;
use crate::models::submission::ResumeSubmission;

pub const DOCUMENT_TITLE: &str = "GeneratorCV";
pub const NAME_PLACEHOLDER: &str = "Seu nome";
/// Vertical gap emitted in place of an empty contact line, in points.
pub const CONTACT_SPACER: f64 = 12.0;

/// The four labeled sections, in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Summary,
    Experience,
    Education,
    Skills,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Summary,
        Section::Experience,
        Section::Education,
        Section::Skills,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            Section::Summary => "Resumo",
            Section::Experience => "Experiencia",
            Section::Education => "Educacao",
            Section::Skills => "Habilidades",
        }
    }

    pub fn fallback(self) -> &'static str {
        match self {
            Section::Summary => "Sem resumo informado.",
            Section::Experience => "Sem experiencia informada.",
            Section::Education => "Sem educacao informada.",
            Section::Skills => "Sem habilidades informadas.",
        }
    }

    /// Paragraph markup for this section's body.
    pub fn body(self, submission: &ResumeSubmission) -> String {
        match self {
            Section::Summary => paragraph(Some(submission.summary.as_str()), self.fallback()),
            Section::Experience => paragraph(Some(submission.experience.as_str()), self.fallback()),
            Section::Education => paragraph(Some(submission.education.as_str()), self.fallback()),
            Section::Skills => {
                let skills = format_skills(Some(submission.skills.as_str()));
                paragraph(Some(skills.as_str()), self.fallback())
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Styles
// ────────────────────────────────────────────────────────────────────────────

fn name_style() -> TextStyle {
    TextStyle {
        bold: true,
        font_size: 24,
        line_spacing: 1.0,
        color: (0x0f, 0x17, 0x2a),
        space_before: 0.0,
        space_after: 6.0,
    }
}

fn title_style() -> TextStyle {
    TextStyle {
        bold: false,
        font_size: 12,
        line_spacing: 1.0,
        color: (0x47, 0x55, 0x69),
        space_before: 0.0,
        space_after: 6.0,
    }
}

fn contact_style() -> TextStyle {
    TextStyle {
        bold: false,
        font_size: 10,
        line_spacing: 1.0,
        color: (0x47, 0x55, 0x69),
        space_before: 0.0,
        space_after: 16.0,
    }
}

fn section_style() -> TextStyle {
    TextStyle {
        bold: true,
        font_size: 12,
        line_spacing: 1.0,
        color: (0xf5, 0x9e, 0x0b),
        space_before: 10.0,
        space_after: 6.0,
    }
}

/// 10pt at 1.2 spacing gives the 14pt body leading.
fn body_style() -> TextStyle {
    TextStyle {
        bold: false,
        font_size: 10,
        line_spacing: 1.2,
        color: (0x1f, 0x29, 0x37),
        space_before: 0.0,
        space_after: 0.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Story
// ────────────────────────────────────────────────────────────────────────────

/// Name, optional title, contact line (or spacer), then the four sections.
pub fn build_story(submission: &ResumeSubmission) -> Vec<Block> {
    let mut story = Vec::with_capacity(11);

    let full_name = clean_text(Some(submission.full_name.as_str()));
    let full_name = if full_name.is_empty() {
        NAME_PLACEHOLDER.to_string()
    } else {
        full_name
    };
    story.push(text_block(&full_name, name_style()));

    let title = clean_text(Some(submission.title.as_str()));
    if !title.is_empty() {
        story.push(text_block(&title, title_style()));
    }

    let contact_line = contact_line(submission);
    if contact_line.is_empty() {
        story.push(Block::Spacer(CONTACT_SPACER));
    } else {
        story.push(text_block(&contact_line, contact_style()));
    }

    for section in Section::ALL {
        story.push(Block::Paragraph {
            markup: section.heading().to_string(),
            style: section_style(),
        });
        story.push(Block::Paragraph {
            markup: section.body(submission),
            style: body_style(),
        });
    }

    story
}

/// Non-empty email, phone and location joined with `" | "`.
pub fn contact_line(submission: &ResumeSubmission) -> String {
    [&submission.email, &submission.phone, &submission.location]
        .into_iter()
        .map(|part| clean_text(Some(part.as_str())))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Name, title and contact are plain text, so `<` and `&` must stay literal.
fn text_block(text: &str, style: TextStyle) -> Block {
    Block::Paragraph {
        markup: escape_markup(text),
        style,
    }
}

/// Renders a submission into PDF bytes on A4 with 48pt margins.
pub fn build_pdf(
    submission: &ResumeSubmission,
    fonts: FontFamily<FontData>,
    created: DateTime<Utc>,
) -> Result<Vec<u8>, DocumentError> {
    let author = clean_text(Some(submission.full_name.as_str()));
    let info = DocumentInfo {
        title: DOCUMENT_TITLE.to_string(),
        author: if author.is_empty() {
            DOCUMENT_TITLE.to_string()
        } else {
            author
        },
        created,
    };

    render_pdf(&build_story(submission), fonts, &info)
}
