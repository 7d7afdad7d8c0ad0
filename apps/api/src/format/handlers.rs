//! Axum route handlers for the formatting API.

use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::extract::{extract_text, SourceKind};
use crate::format::prompts::build_prompt;
use crate::format::template::TemplateKind;
use crate::models::resume::ResumeRecord;
use crate::parser::parse_tagged;
use crate::render::render;

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub template: TemplateKind,
    pub extracted_chars: usize,
    pub tagged_text: String,
    pub skipped_lines: usize,
    pub record: ResumeRecord,
}

/// POST /api/v1/format/:template
///
/// Multipart upload (`file` field, PDF or DOCX). Runs the full pipeline and
/// responds with the styled document as a download.
pub async fn handle_format(
    State(state): State<crate::state::AppState>,
    Path(template): Path<String>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let kind = parse_template(&template)?;
    let pipeline = run_pipeline(&state, kind, multipart).await?;

    let bytes = render(&pipeline.record, kind, &state.assets)
        .map_err(|e| AppError::Render(e.to_string()))?;

    info!(
        template = kind.slug(),
        jobs = pipeline.record.jobs.len(),
        bytes = bytes.len(),
        "formatted resume rendered"
    );

    let filename = format!("formatted_resume_{}.docx", kind.slug());
    Ok((
        [
            (header::CONTENT_TYPE, DOCX_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}

/// POST /api/v1/format/:template/preview
///
/// Same pipeline minus rendering: returns the extracted/tagged text and the
/// parsed record so callers can inspect what would be formatted.
pub async fn handle_preview(
    State(state): State<crate::state::AppState>,
    Path(template): Path<String>,
    multipart: Multipart,
) -> Result<Json<PreviewResponse>, AppError> {
    let kind = parse_template(&template)?;
    let pipeline = run_pipeline(&state, kind, multipart).await?;

    Ok(Json(PreviewResponse {
        template: kind,
        extracted_chars: pipeline.extracted_chars,
        tagged_text: pipeline.tagged_text,
        skipped_lines: pipeline.skipped_lines,
        record: pipeline.record,
    }))
}

struct PipelineOutput {
    extracted_chars: usize,
    tagged_text: String,
    skipped_lines: usize,
    record: ResumeRecord,
}

fn parse_template(segment: &str) -> Result<TemplateKind, AppError> {
    TemplateKind::from_slug(segment)
        .ok_or_else(|| AppError::Validation(format!("unknown template '{segment}'")))
}

/// Upload → extract → prompt → generate → parse.
async fn run_pipeline(
    state: &crate::state::AppState,
    kind: TemplateKind,
    multipart: Multipart,
) -> Result<PipelineOutput, AppError> {
    let upload = read_upload(multipart).await?;

    let source_kind = SourceKind::detect(upload.content_type.as_deref(), upload.file_name.as_deref())
        .ok_or_else(|| {
            AppError::UnsupportedMedia("upload must be a PDF or DOCX file".to_string())
        })?;

    let resume_text = extract_text(&upload.bytes, source_kind)
        .map_err(|e| AppError::Extraction(e.to_string()))?;
    if resume_text.trim().is_empty() {
        return Err(AppError::Extraction(
            "no text could be extracted from the uploaded document".to_string(),
        ));
    }
    debug!(chars = resume_text.len(), "resume text extracted");

    let prompt = build_prompt(&resume_text, kind);
    let tagged_text = state.llm.generate(&prompt).await?;

    let parsed = parse_tagged(&tagged_text, kind.schema());
    if parsed.skipped_lines > 0 {
        debug!(
            skipped = parsed.skipped_lines,
            template = kind.slug(),
            "parser dropped unclassifiable lines"
        );
    }

    Ok(PipelineOutput {
        extracted_chars: resume_text.len(),
        tagged_text,
        skipped_lines: parsed.skipped_lines,
        record: parsed.record,
    })
}

struct Upload {
    bytes: bytes::Bytes,
    file_name: Option<String>,
    content_type: Option<String>,
}

/// Reads the `file` field from the multipart body.
async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
        if bytes.is_empty() {
            return Err(AppError::Validation("uploaded file is empty".to_string()));
        }
        return Ok(Upload {
            bytes,
            file_name,
            content_type,
        });
    }

    Err(AppError::Validation(
        "multipart body must contain a 'file' field".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_template_accepts_known_slugs() {
        assert!(parse_template("template1").is_ok());
        assert!(parse_template("template2").is_ok());
    }

    #[test]
    fn test_parse_template_rejects_unknown_slug() {
        let err = parse_template("classic").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
