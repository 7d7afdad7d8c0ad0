//! Tagged-text parser — converts the generation model's semi-structured
//! output into a [`ResumeRecord`].
//!
//! One shared line-classification engine driven by a declarative
//! [`FieldSchema`] per template. The machine never fails: lines it cannot
//! classify are dropped (and counted), and the result is always a record,
//! possibly with fields missing.

pub mod schema;

use crate::models::resume::{JobRecord, ResumeRecord};
use schema::{FieldKind, FieldSchema, UnknownKeyPolicy};

/// The active accumulation target. Exactly one state at a time, mutated
/// line-by-line, discarded when the scan completes.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseState {
    Idle,
    /// A flat field was just written. Bare lines are never appended to it.
    Flat,
    /// Accumulating a multi-line free-text field under this top-level key.
    FreeText(String),
    /// Inside a job block, filling flat job fields.
    InsideJob,
    /// Inside a job block, appending to its responsibilities list.
    Responsibilities,
}

impl ParseState {
    fn in_job(&self) -> bool {
        matches!(self, ParseState::InsideJob | ParseState::Responsibilities)
    }
}

/// Result of a parse: the record plus a diagnostic count of non-blank lines
/// that were silently dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    pub record: ResumeRecord,
    pub skipped_lines: usize,
}

/// Strips a leading bullet-dash prefix (`- `, `-- `, etc.) from a list item.
fn strip_bullet(s: &str) -> &str {
    s.trim_start_matches(|c: char| c == '-' || c == ' ')
}

/// Parses tagged text in a single left-to-right pass over its lines.
///
/// Key matching is exact and case-sensitive against the schema tables.
/// A line is a key/value candidate when it contains a colon and does not
/// start with a bullet dash; only the first colon splits, so values keep
/// embedded colons intact.
pub fn parse_tagged(raw_text: &str, schema: &FieldSchema) -> ParseOutput {
    let mut record = ResumeRecord::default();
    let mut state = ParseState::Idle;
    let mut skipped_lines = 0usize;

    for line in raw_text.lines() {
        let stripped = line.trim();

        // Job markers are matched before anything else.
        if stripped == schema.job_start {
            record.jobs.push(JobRecord::default());
            state = ParseState::InsideJob;
            continue;
        }
        if stripped == schema.job_end {
            // An unmatched end marker is a no-op, not an error.
            state = ParseState::Idle;
            continue;
        }

        // Blank lines never change state and are never appended.
        if stripped.is_empty() {
            continue;
        }

        // Key/value candidate: has a colon, not a bullet line.
        if line.contains(':') && !stripped.starts_with('-') {
            let (key, value) = line.split_once(':').unwrap_or((line, ""));
            let (key, value) = (key.trim(), value.trim());

            if let Some(kind) = schema.top_field(key) {
                record.fields.insert(key.to_string(), value.to_string());
                state = match kind {
                    FieldKind::Flat => ParseState::Flat,
                    FieldKind::FreeText => ParseState::FreeText(key.to_string()),
                };
                continue;
            }

            if state.in_job() {
                if let Some(job) = record.jobs.last_mut() {
                    if schema.is_job_field(key) {
                        job.fields.insert(key.to_string(), value.to_string());
                        state = ParseState::InsideJob;
                        continue;
                    }
                    if key == schema.job_list_key {
                        state = ParseState::Responsibilities;
                        if !value.is_empty() {
                            job.responsibilities.push(strip_bullet(value).to_string());
                        }
                        continue;
                    }
                }
            } else if schema.unknown_keys == UnknownKeyPolicy::CaptureAdHoc {
                record.fields.insert(key.to_string(), value.to_string());
                state = ParseState::Idle;
                continue;
            }
            // Unresolved candidates fall through to bare-text handling.
        }

        // Bare text, routed by the active state.
        match &state {
            ParseState::Responsibilities => {
                if let Some(job) = record.jobs.last_mut() {
                    job.responsibilities.push(strip_bullet(stripped).to_string());
                }
            }
            ParseState::FreeText(key) => {
                let entry = record.fields.entry(key.clone()).or_default();
                if entry.is_empty() {
                    entry.push_str(stripped);
                } else {
                    entry.push('\n');
                    entry.push_str(stripped);
                }
            }
            ParseState::Idle | ParseState::Flat | ParseState::InsideJob => {
                skipped_lines += 1;
            }
        }
    }

    ParseOutput {
        record,
        skipped_lines,
    }
}
