//! Template 2 layout: Lato, page header/footer artwork, overview and key
//! engagement tables built from `|`-delimited rows, 2x2 info grid.

use docx_rs::{
    AlignmentType, Docx, Footer, Header, Paragraph, Run, Table, TableCell, TableRow,
};

use super::{
    base_docx, bullet, image_run, page_break, run, single_paragraph_text, spacer, Assets,
    BRAND_COLOR,
};
use crate::models::resume::{JobRecord, ResumeRecord};
use crate::render::template1::text_cell;

const FONT: &str = "Lato";
const BODY_PT: usize = 11;

pub(crate) fn build(record: &ResumeRecord, assets: &Assets) -> Docx {
    let mut docx = base_docx()
        .header(build_header(assets))
        .footer(build_footer(assets));

    let name = record.get("FullName").unwrap_or("Candidate Name");
    docx = docx.add_paragraph(
        Paragraph::new()
            .add_run(run(name, FONT, 18).bold().color(BRAND_COLOR))
            .align(AlignmentType::Right),
    );
    if !record.is_blank("Designation") {
        docx = docx.add_paragraph(
            Paragraph::new()
                .add_run(run(record.get("Designation").unwrap_or_default(), FONT, 12))
                .align(AlignmentType::Right),
        );
    }
    docx = docx.add_paragraph(spacer());

    docx = docx.add_paragraph(heading("Professional Overview:"));
    if !record.is_blank("ProfessionalOverviewSummary") {
        let text =
            single_paragraph_text(record.get("ProfessionalOverviewSummary").unwrap_or_default());
        docx = docx.add_paragraph(Paragraph::new().add_run(run(&text, FONT, BODY_PT)));
    }

    if let Some(table) = overview_table(record.get("ProfessionalOverviewTable").unwrap_or_default())
    {
        docx = docx.add_table(table).add_paragraph(spacer());
    }

    docx = docx
        .add_paragraph(Paragraph::new().add_run(run("Key Engagements", FONT, BODY_PT).italic()));
    if let Some(table) = engagements_table(record.get("KeyEngagementsTable").unwrap_or_default()) {
        docx = docx.add_table(table);
    }
    docx = docx.add_paragraph(spacer());

    docx = docx.add_table(info_grid(record)).add_paragraph(spacer());

    docx = docx
        .add_paragraph(page_break())
        .add_paragraph(heading("Professional and Business Experience:"));

    for job in &record.jobs {
        docx = add_job(docx, job);
    }

    docx
}

fn build_header(assets: &Assets) -> Header {
    let mut header = Header::new();
    if let Some(wave) = &assets.page_header {
        header = header.add_paragraph(Paragraph::new().add_run(image_run(wave, 8.5, 1.0)));
    }
    if let Some(logo) = &assets.logo {
        header = header.add_paragraph(Paragraph::new().add_run(image_run(logo, 1.5, 0.5)));
    }
    header
}

fn build_footer(assets: &Assets) -> Footer {
    let mut footer = Footer::new();
    if let Some(border) = &assets.page_footer {
        footer = footer.add_paragraph(
            Paragraph::new()
                .add_run(image_run(border, 8.5, 0.5))
                .align(AlignmentType::Center),
        );
    }
    footer
}

fn heading(text: &str) -> Paragraph {
    Paragraph::new().add_run(run(text, FONT, 13).bold().color(BRAND_COLOR))
}

/// `Heading | content` rows. The Roles row expands its comma-separated
/// content into red-bulleted lines; everything else is plain text.
fn overview_table(content: &str) -> Option<Table> {
    let mut rows = Vec::new();
    for line in content.lines() {
        let Some((label, cell_text)) = line.split_once('|') else {
            continue;
        };
        let (label, cell_text) = (label.trim(), cell_text.trim());

        let content_cell = if label.eq_ignore_ascii_case("roles") {
            let mut cell = TableCell::new();
            for role in cell_text.split(',').map(str::trim).filter(|r| !r.is_empty()) {
                cell = cell.add_paragraph(
                    Paragraph::new()
                        .add_run(run("•", FONT, BODY_PT).color(BRAND_COLOR))
                        .add_run(Run::new().add_tab())
                        .add_run(run(role, FONT, BODY_PT)),
                );
            }
            cell
        } else {
            text_cell(cell_text)
        };

        rows.push(TableRow::new(vec![
            TableCell::new()
                .add_paragraph(Paragraph::new().add_run(run(label, FONT, BODY_PT).bold())),
            content_cell,
        ]));
    }
    if rows.is_empty() {
        None
    } else {
        Some(Table::new(rows).set_grid(vec![2000, 6500]))
    }
}

/// N-column table from `|`-delimited rows. The first row fixes the column
/// count and is styled as a bold header; rows of a different width are
/// dropped rather than misaligned.
fn engagements_table(content: &str) -> Option<Table> {
    let parsed: Vec<Vec<&str>> = content
        .lines()
        .map(|line| line.split('|').map(str::trim).collect::<Vec<_>>())
        .filter(|cells| cells.len() > 1)
        .collect();
    let num_cols = parsed.first()?.len();

    let rows: Vec<TableRow> = parsed
        .iter()
        .filter(|cells| cells.len() == num_cols)
        .enumerate()
        .map(|(i, cells)| {
            TableRow::new(
                cells
                    .iter()
                    .map(|text| {
                        if i == 0 {
                            TableCell::new().add_paragraph(
                                Paragraph::new().add_run(run(text, FONT, BODY_PT).bold()),
                            )
                        } else {
                            text_cell(text)
                        }
                    })
                    .collect(),
            )
        })
        .collect();

    Some(Table::new(rows).set_grid(vec![8500 / num_cols; num_cols]))
}

/// 2x2 grid of the remaining overview sections.
fn info_grid(record: &ResumeRecord) -> Table {
    let cell = |title: &str, key: &str| {
        let mut cell = TableCell::new()
            .add_paragraph(Paragraph::new().add_run(run(title, FONT, 10).bold()));
        if !record.is_blank(key) {
            for line in record
                .get(key)
                .unwrap_or_default()
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
            {
                cell = cell.add_paragraph(Paragraph::new().add_run(run(line, FONT, BODY_PT)));
            }
        }
        cell
    };

    Table::new(vec![
        TableRow::new(vec![
            cell("Education", "Education"),
            cell(
                "Professional Training/Certifications",
                "ProfessionalTrainingCertifications",
            ),
        ]),
        TableRow::new(vec![
            cell("Publications", "Publications"),
            cell("Geographic locale", "GeographicLocale"),
        ]),
    ])
    .set_grid(vec![4250, 4250])
    .clear_all_border()
}

fn add_job(mut docx: Docx, job: &JobRecord) -> Docx {
    docx = docx.add_paragraph(
        Paragraph::new()
            .add_run(
                run(job.get("CompanyName").unwrap_or_default(), FONT, BODY_PT)
                    .bold()
                    .color(BRAND_COLOR),
            )
            .add_run(Run::new().add_tab())
            .add_run(run(job.get("Duration").unwrap_or_default(), FONT, BODY_PT)),
    );
    if !job.is_blank("Role") {
        docx = docx.add_paragraph(
            Paragraph::new().add_run(run(job.get("Role").unwrap_or_default(), FONT, BODY_PT).bold()),
        );
    }
    docx = docx.add_paragraph(spacer());
    docx = docx.add_paragraph(
        Paragraph::new()
            .add_run(run("CLIENT: ", FONT, BODY_PT).bold())
            .add_run(run(job.get("Client").unwrap_or("N/A"), FONT, BODY_PT)),
    );
    docx = docx.add_paragraph(spacer());
    docx = docx.add_paragraph(
        Paragraph::new().add_run(run("Responsibilities:", FONT, BODY_PT).underline("single")),
    );
    for item in &job.responsibilities {
        let item = item.trim();
        if !item.is_empty() {
            docx = docx.add_paragraph(bullet(item, FONT, BODY_PT));
        }
    }
    docx.add_paragraph(spacer())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_table_none_without_pipe_rows() {
        assert!(overview_table("no pipes here").is_none());
        assert!(overview_table("").is_none());
    }

    #[test]
    fn test_overview_table_builds_from_pipe_rows() {
        assert!(overview_table("Roles | Architect, Engineer\nIndustries | Fintech").is_some());
    }

    #[test]
    fn test_engagements_table_requires_multi_column_rows() {
        assert!(engagements_table("only one column").is_none());
        assert!(engagements_table("Client | Role | Description\nAcme | Lead | Checkout").is_some());
    }

    #[test]
    fn test_engagements_table_first_pipe_row_sets_width() {
        // Mismatched rows are dropped, not misaligned; still renders.
        let table = engagements_table("A | B | C\nonly | two\nX | Y | Z");
        assert!(table.is_some());
    }

    #[test]
    fn test_info_grid_has_no_borders() {
        use std::io::{Cursor, Read};

        // An empty record renders the info grid and no other table.
        let bytes =
            crate::render::pack(build(&ResumeRecord::default(), &Assets::default())).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        assert!(xml.contains(r#"w:val="nil""#));
        assert!(!xml.contains(r#"w:val="single""#));
    }
}
