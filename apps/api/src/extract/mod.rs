//! Text extraction from uploaded résumés.
//!
//! PDF goes through `pdf-extract`. DOCX is parsed by hand: a .docx is a ZIP
//! archive whose `word/document.xml` carries the text in `w:t` runs, one
//! `w:p` element per paragraph (docx-rs is writer-only, so reading streams
//! the XML directly).

use std::io::{Cursor, Read};

use anyhow::{anyhow, Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Pdf,
    Docx,
}

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

impl SourceKind {
    /// Detects the source format from the multipart content type, falling
    /// back to the uploaded file name's extension.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        match content_type {
            Some(PDF_MIME) => return Some(SourceKind::Pdf),
            Some(DOCX_MIME) => return Some(SourceKind::Docx),
            _ => {}
        }
        let name = file_name?.to_ascii_lowercase();
        if name.ends_with(".pdf") {
            Some(SourceKind::Pdf)
        } else if name.ends_with(".docx") {
            Some(SourceKind::Docx)
        } else {
            None
        }
    }
}

/// Extracts plain text from an uploaded document.
pub fn extract_text(bytes: &[u8], kind: SourceKind) -> Result<String> {
    match kind {
        SourceKind::Pdf => extract_pdf(bytes),
        SourceKind::Docx => extract_docx(bytes),
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes).context("failed to extract text from PDF")
}

/// Streams `word/document.xml`, collecting `w:t` text and emitting a newline
/// at the close of each `w:p` paragraph.
fn extract_docx(bytes: &[u8]) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).context("not a valid DOCX archive")?;
    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| anyhow!("DOCX has no word/document.xml: {e}"))?
        .read_to_string(&mut document_xml)
        .context("failed to read word/document.xml")?;

    let mut reader = Reader::from_str(&document_xml);
    reader.trim_text(false);

    let mut text = String::new();
    let mut in_text_run = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            // Self-closing <w:p/> is an empty paragraph, kept as a blank line.
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:p" => text.push('\n'),
            Ok(Event::Text(t)) if in_text_run => {
                text.push_str(&t.unescape().context("malformed XML text")?);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(anyhow!("malformed document.xml: {e}")),
        }
        buf.clear();
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    /// Builds a minimal in-memory .docx with the given paragraphs.
    fn docx_fixture(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
            .collect();
        docx_fixture_with_body(&body)
    }

    fn docx_fixture_with_body(body: &str) -> Vec<u8> {
        let document = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
        );

        let mut cursor = Cursor::new(Vec::new());
        {
            let mut zip = ZipWriter::new(&mut cursor);
            zip.start_file("word/document.xml", FileOptions::default())
                .unwrap();
            zip.write_all(document.as_bytes()).unwrap();
            zip.finish().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_detect_by_content_type() {
        assert_eq!(
            SourceKind::detect(Some(PDF_MIME), None),
            Some(SourceKind::Pdf)
        );
        assert_eq!(
            SourceKind::detect(Some(DOCX_MIME), None),
            Some(SourceKind::Docx)
        );
    }

    #[test]
    fn test_detect_by_extension_fallback() {
        assert_eq!(
            SourceKind::detect(Some("application/octet-stream"), Some("Resume.PDF")),
            Some(SourceKind::Pdf)
        );
        assert_eq!(
            SourceKind::detect(None, Some("cv.docx")),
            Some(SourceKind::Docx)
        );
        assert_eq!(SourceKind::detect(None, Some("cv.txt")), None);
        assert_eq!(SourceKind::detect(None, None), None);
    }

    #[test]
    fn test_extract_docx_paragraphs_newline_joined() {
        let bytes = docx_fixture(&["Jane Doe", "Senior Engineer", "Acme Corp 2019-2024"]);
        let text = extract_text(&bytes, SourceKind::Docx).unwrap();
        assert_eq!(text, "Jane Doe\nSenior Engineer\nAcme Corp 2019-2024\n");
    }

    #[test]
    fn test_extract_docx_keeps_empty_paragraphs_as_blank_lines() {
        let bytes = docx_fixture_with_body(
            "<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p><w:p/><w:p><w:r><w:t>Acme Corp</w:t></w:r></w:p>",
        );
        let text = extract_text(&bytes, SourceKind::Docx).unwrap();
        assert_eq!(text, "Jane Doe\n\nAcme Corp\n");
    }

    #[test]
    fn test_extract_docx_unescapes_entities() {
        let bytes = docx_fixture(&["R&amp;D lead"]);
        let text = extract_text(&bytes, SourceKind::Docx).unwrap();
        assert_eq!(text, "R&D lead\n");
    }

    #[test]
    fn test_extract_docx_rejects_garbage() {
        assert!(extract_text(b"not a zip archive", SourceKind::Docx).is_err());
    }

    #[test]
    fn test_extract_pdf_rejects_garbage() {
        assert!(extract_text(b"not a pdf", SourceKind::Pdf).is_err());
    }
}
