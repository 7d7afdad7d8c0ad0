//! Template 1 layout: Calibri, red section headings, technology grid table,
//! per-project experience sections.

use docx_rs::{AlignmentType, Docx, Header, Paragraph, Table, TableCell, TableRow};

use super::{
    base_docx, bullet, image_run, labeled, page_break, run, single_paragraph_text, spacer, Assets,
    BRAND_COLOR,
};
use crate::models::resume::ResumeRecord;

const FONT: &str = "Calibri";
const BODY_PT: usize = 11;

pub(crate) fn build(record: &ResumeRecord, assets: &Assets) -> Docx {
    let mut docx = base_docx().header(build_header(record, assets));

    docx = docx.add_paragraph(section_heading("PROFESSIONAL OVERVIEW"));
    if !record.is_blank("Professional Summary") {
        let text = single_paragraph_text(record.get("Professional Summary").unwrap_or_default());
        docx = docx.add_paragraph(
            Paragraph::new()
                .add_run(run(&text, FONT, BODY_PT))
                .align(AlignmentType::Both),
        );
    }
    docx = docx.add_paragraph(spacer());

    for heading in [
        "Roles",
        "Technologies",
        "Education",
        "Certifications",
        "Geographic locale",
    ] {
        if record.is_blank(heading) {
            continue;
        }
        let content = record.get(heading).unwrap_or_default();
        docx = docx.add_paragraph(field_label(heading));
        docx = match heading {
            "Roles" => add_role_bullets(docx, content),
            "Technologies" => docx.add_table(tech_table(content)).add_paragraph(spacer()),
            "Certifications" => add_line_bullets(docx, content),
            _ => add_plain_lines(docx, content),
        };
    }
    docx = docx.add_paragraph(spacer());

    docx = docx
        .add_paragraph(page_break())
        .add_paragraph(section_heading("PROFESSIONAL AND EXPERIENCE SUMMARY"));

    for (i, job) in record.jobs.iter().enumerate() {
        docx = docx.add_paragraph(project_heading(&format!("Project {}", i + 1)));
        for label in ["Client", "Duration", "Role"] {
            if !job.is_blank(label) {
                docx = docx.add_paragraph(labeled(
                    &format!("{label}: "),
                    job.get(label).unwrap_or_default(),
                    FONT,
                    BODY_PT,
                ));
            }
        }
        if !job.is_blank("Description") {
            let text = single_paragraph_text(job.get("Description").unwrap_or_default());
            docx = docx.add_paragraph(
                Paragraph::new()
                    .add_run(run("Description: ", FONT, BODY_PT).bold())
                    .add_run(run(&text, FONT, BODY_PT))
                    .align(AlignmentType::Both),
            );
        }
        if !job.responsibilities.is_empty() {
            docx = docx.add_paragraph(
                Paragraph::new().add_run(run("Roles and Responsibilities:", FONT, BODY_PT).bold()),
            );
            for item in &job.responsibilities {
                let item = item.trim();
                if !item.is_empty() {
                    docx = docx.add_paragraph(bullet(item, FONT, BODY_PT));
                }
            }
        }
        docx = docx.add_paragraph(spacer());
    }

    docx
}

/// Logo on the left, candidate name in brand red on the right.
fn build_header(record: &ResumeRecord, assets: &Assets) -> Header {
    let mut header = Header::new();
    if let Some(logo) = &assets.logo {
        header = header.add_paragraph(Paragraph::new().add_run(image_run(logo, 1.5, 0.5)));
    }
    let name = record.get("FullName").unwrap_or("Candidate Name");
    header.add_paragraph(
        Paragraph::new()
            .add_run(run(name, FONT, 12).bold().color(BRAND_COLOR))
            .align(AlignmentType::Right),
    )
}

fn section_heading(text: &str) -> Paragraph {
    Paragraph::new().add_run(run(text, FONT, 14).bold().color(BRAND_COLOR))
}

fn project_heading(text: &str) -> Paragraph {
    Paragraph::new().add_run(run(text, FONT, 12).bold().color(BRAND_COLOR))
}

fn field_label(name: &str) -> Paragraph {
    Paragraph::new().add_run(run(&format!("{name}:"), FONT, BODY_PT).bold().color(BRAND_COLOR))
}

/// Roles are listed comma-separated and/or one per line; both become bullets.
fn add_role_bullets(mut docx: Docx, content: &str) -> Docx {
    for role in content
        .lines()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|r| !r.is_empty())
    {
        docx = docx.add_paragraph(bullet(role, FONT, BODY_PT));
    }
    docx
}

fn add_line_bullets(mut docx: Docx, content: &str) -> Docx {
    for line in content.lines() {
        let line = line.trim().trim_start_matches(|c: char| c == '-' || c == ' ');
        if !line.is_empty() {
            docx = docx.add_paragraph(bullet(line, FONT, BODY_PT));
        }
    }
    docx
}

fn add_plain_lines(mut docx: Docx, content: &str) -> Docx {
    for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
        docx = docx.add_paragraph(
            Paragraph::new()
                .add_run(run(line, FONT, BODY_PT))
                .align(AlignmentType::Both),
        );
    }
    docx
}

/// Groups `Category: skills` lines by category, first-seen order preserved.
fn tech_groups(content: &str) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    for line in content.lines() {
        if let Some((category, skill)) = line.split_once(':') {
            let (category, skill) = (category.trim(), skill.trim());
            match groups.iter_mut().find(|(c, _)| c == category) {
                Some((_, skills)) => skills.push(skill.to_string()),
                None => groups.push((category.to_string(), vec![skill.to_string()])),
            }
        }
    }
    groups
}

/// Two-column Category/Skills grid with a bold header row.
fn tech_table(content: &str) -> Table {
    let mut rows = vec![TableRow::new(vec![
        header_cell("Category"),
        header_cell("Skills"),
    ])];
    for (category, skills) in tech_groups(content) {
        rows.push(TableRow::new(vec![
            text_cell(&category),
            text_cell(&skills.join(", ")),
        ]));
    }
    Table::new(rows).set_grid(vec![2000, 6500])
}

fn header_cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(run(text, FONT, BODY_PT).bold()))
}

pub(crate) fn text_cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(run(text, FONT, BODY_PT)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tech_groups_merge_by_category() {
        let groups = tech_groups("Languages: Rust\nDatabases: Postgres\nLanguages: Go");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Languages");
        assert_eq!(groups[0].1, vec!["Rust", "Go"]);
        assert_eq!(groups[1].1, vec!["Postgres"]);
    }

    #[test]
    fn test_tech_groups_skip_lines_without_colon() {
        let groups = tech_groups("no colon here\nTools: Docker");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "Tools");
    }

    #[test]
    fn test_tech_groups_split_on_first_colon_only() {
        let groups = tech_groups("Cloud: AWS: Lambda");
        assert_eq!(groups[0].1, vec!["AWS: Lambda"]);
    }
}
