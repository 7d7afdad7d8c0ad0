//! Document Builder — turns a parsed [`ResumeRecord`] into styled DOCX bytes.
//!
//! All OOXML assembly goes through docx-rs. The `|`-delimited table-row
//! convention of template-2 fields is interpreted here and nowhere else.

pub mod template1;
pub mod template2;

use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, Result};
use docx_rs::{
    AbstractNumbering, BreakType, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat,
    Numbering, NumberingId, Paragraph, Pic, Run, RunFonts, Start,
};
use tracing::debug;

use crate::format::template::TemplateKind;
use crate::models::resume::ResumeRecord;

/// Brand red used for headings and names in both templates.
pub const BRAND_COLOR: &str = "CC1F20";

/// Numbering id registered by [`base_docx`] for bullet lists.
const BULLET_NUM_ID: usize = 1;

const EMU_PER_INCH: u32 = 914_400;

/// Optional branding images, loaded once at startup. A missing file simply
/// means the corresponding element is not emitted.
#[derive(Debug, Clone, Default)]
pub struct Assets {
    pub logo: Option<Vec<u8>>,
    pub page_header: Option<Vec<u8>>,
    pub page_footer: Option<Vec<u8>>,
}

impl Assets {
    pub fn load(dir: &str) -> Self {
        Self {
            logo: read_asset(dir, "logo.png"),
            page_header: read_asset(dir, "header.png"),
            page_footer: read_asset(dir, "footer.png"),
        }
    }
}

fn read_asset(dir: &str, name: &str) -> Option<Vec<u8>> {
    let path = Path::new(dir).join(name);
    match std::fs::read(&path) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            debug!("asset {} not loaded: {e}", path.display());
            None
        }
    }
}

/// Renders the record with the requested template's layout.
pub fn render(record: &ResumeRecord, kind: TemplateKind, assets: &Assets) -> Result<Vec<u8>> {
    let docx = match kind {
        TemplateKind::Template1 => template1::build(record, assets),
        TemplateKind::Template2 => template2::build(record, assets),
    };
    pack(docx)
}

/// A new document with the bullet numbering definition registered.
pub(crate) fn base_docx() -> Docx {
    Docx::new()
        .add_abstract_numbering(
            AbstractNumbering::new(BULLET_NUM_ID).add_level(Level::new(
                0,
                Start::new(1),
                NumberFormat::new("bullet"),
                LevelText::new("•"),
                LevelJc::new("left"),
            )),
        )
        .add_numbering(Numbering::new(BULLET_NUM_ID, BULLET_NUM_ID))
}

pub(crate) fn pack(docx: Docx) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| anyhow!("failed to pack DOCX: {e}"))?;
    Ok(cursor.into_inner())
}

/// A text run in the template's body font. Size is in points.
pub(crate) fn run(text: &str, font: &'static str, size_pt: usize) -> Run {
    Run::new()
        .add_text(text)
        .fonts(RunFonts::new().ascii(font))
        .size(size_pt * 2)
}

/// One bullet-list paragraph.
pub(crate) fn bullet(text: &str, font: &'static str, size_pt: usize) -> Paragraph {
    Paragraph::new()
        .add_run(run(text, font, size_pt))
        .numbering(NumberingId::new(BULLET_NUM_ID), IndentLevel::new(0))
}

/// A `Label: value` paragraph with the label bolded.
pub(crate) fn labeled(label: &str, value: &str, font: &'static str, size_pt: usize) -> Paragraph {
    Paragraph::new()
        .add_run(run(label, font, size_pt).bold())
        .add_run(run(value, font, size_pt))
}

pub(crate) fn page_break() -> Paragraph {
    Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
}

pub(crate) fn spacer() -> Paragraph {
    Paragraph::new()
}

/// An image run sized in inches, for header/footer branding.
pub(crate) fn image_run(bytes: &[u8], width_in: f32, height_in: f32) -> Run {
    let pic = Pic::new(bytes).size(
        (width_in * EMU_PER_INCH as f32) as u32,
        (height_in * EMU_PER_INCH as f32) as u32,
    );
    Run::new().add_image(pic)
}

/// Collapses a multi-line field value into one paragraph's worth of text.
pub(crate) fn single_paragraph_text(value: &str) -> String {
    value
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::JobRecord;

    fn sample_record() -> ResumeRecord {
        let mut record = ResumeRecord::default();
        record
            .fields
            .insert("FullName".to_string(), "Jane Doe".to_string());
        record.fields.insert(
            "Education".to_string(),
            "BSc Computer Science\nState University, 2015".to_string(),
        );
        record.jobs.push(JobRecord {
            fields: [
                ("CompanyName".to_string(), "Acme".to_string()),
                ("Role".to_string(), "Engineer".to_string()),
            ]
            .into_iter()
            .collect(),
            responsibilities: vec!["Built stuff".to_string(), "Fixed bugs".to_string()],
        });
        record
    }

    #[test]
    fn test_render_template1_produces_zip_bytes() {
        let bytes = render(&sample_record(), TemplateKind::Template1, &Assets::default()).unwrap();
        // DOCX is a ZIP archive: PK magic.
        assert_eq!(&bytes[..2], b"PK".as_slice());
    }

    #[test]
    fn test_render_template2_produces_zip_bytes() {
        let mut record = sample_record();
        record.fields.insert(
            "ProfessionalOverviewTable".to_string(),
            "Roles | Architect, Engineer\nTechnologies | Rust, Postgres".to_string(),
        );
        record.fields.insert(
            "KeyEngagementsTable".to_string(),
            "Client | Role | Description\nAcme | Lead | Rebuilt checkout".to_string(),
        );
        let bytes = render(&record, TemplateKind::Template2, &Assets::default()).unwrap();
        assert_eq!(&bytes[..2], b"PK".as_slice());
    }

    #[test]
    fn test_render_empty_record_still_produces_document() {
        let record = ResumeRecord::default();
        for kind in [TemplateKind::Template1, TemplateKind::Template2] {
            let bytes = render(&record, kind, &Assets::default()).unwrap();
            assert!(!bytes.is_empty());
        }
    }

    #[test]
    fn test_single_paragraph_text_joins_lines() {
        assert_eq!(
            single_paragraph_text("one\n two \n\nthree"),
            "one two three"
        );
    }

    #[test]
    fn test_assets_load_missing_dir_is_all_none() {
        let assets = Assets::load("/nonexistent/assets");
        assert!(assets.logo.is_none());
        assert!(assets.page_header.is_none());
        assert!(assets.page_footer.is_none());
    }
}
