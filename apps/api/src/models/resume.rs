//! The structured record produced by the tagged-text parser and consumed by
//! the document renderer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::parser::schema::FieldSchema;

/// Parsed résumé: named string fields (single- or multi-line) plus the
/// ordered list of job blocks. Built in one pass and handed to the renderer
/// complete; never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub fields: BTreeMap<String, String>,
    pub jobs: Vec<JobRecord>,
}

/// One work-experience entry: flat fields plus ordered responsibility
/// bullets (duplicates allowed).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub fields: BTreeMap<String, String>,
    pub responsibilities: Vec<String>,
}

impl ResumeRecord {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// True when the field is absent, blank, or the generator's literal
    /// "None" placeholder. Such fields render nothing.
    pub fn is_blank(&self, key: &str) -> bool {
        match self.get(key) {
            Some(v) => {
                let v = v.trim();
                v.is_empty() || v.eq_ignore_ascii_case("none")
            }
            None => true,
        }
    }

    /// Serializes the record back into the tagged-text convention it was
    /// parsed from: schema fields in table order, then ad-hoc fields, then
    /// one marker-delimited block per job. Re-parsing the output with the
    /// same schema reproduces this record.
    pub fn to_tagged_text(&self, schema: &FieldSchema) -> String {
        let mut out = String::new();

        for (key, _) in schema.top_fields {
            if let Some(value) = self.fields.get(*key) {
                push_field(&mut out, key, value);
            }
        }
        for (key, value) in &self.fields {
            if schema.top_field(key).is_none() {
                push_field(&mut out, key, value);
            }
        }

        for job in &self.jobs {
            out.push_str(schema.job_start);
            out.push('\n');
            for key in schema.job_fields {
                if let Some(value) = job.fields.get(*key) {
                    push_field(&mut out, key, value);
                }
            }
            out.push_str(schema.job_list_key);
            out.push_str(":\n");
            for item in &job.responsibilities {
                out.push_str("- ");
                out.push_str(item);
                out.push('\n');
            }
            out.push_str(schema.job_end);
            out.push('\n');
        }

        out
    }
}

impl JobRecord {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn is_blank(&self, key: &str) -> bool {
        match self.get(key) {
            Some(v) => {
                let v = v.trim();
                v.is_empty() || v.eq_ignore_ascii_case("none")
            }
            None => true,
        }
    }
}

fn push_field(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push(':');
    if !value.is_empty() {
        out.push(' ');
        out.push_str(value);
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::TEMPLATE1;

    fn record_with(fields: &[(&str, &str)]) -> ResumeRecord {
        ResumeRecord {
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            jobs: vec![],
        }
    }

    #[test]
    fn test_is_blank_for_missing_empty_and_none() {
        let r = record_with(&[("Education", ""), ("Roles", "None"), ("FullName", "Jane")]);
        assert!(r.is_blank("Education"));
        assert!(r.is_blank("Roles"));
        assert!(r.is_blank("Certifications"));
        assert!(!r.is_blank("FullName"));
    }

    #[test]
    fn test_tagged_text_emits_schema_order_and_job_blocks() {
        let mut r = record_with(&[("FullName", "Jane Doe"), ("Education", "BSc\nMSc")]);
        r.jobs.push(JobRecord {
            fields: [("CompanyName".to_string(), "Acme".to_string())]
                .into_iter()
                .collect(),
            responsibilities: vec!["Built stuff".to_string()],
        });

        let text = r.to_tagged_text(&TEMPLATE1);
        assert!(text.starts_with("FullName: Jane Doe\n"));
        assert!(text.contains("Education: BSc\nMSc\n"));
        assert!(text.contains("---JOB START---\nCompanyName: Acme\nResponsibilities:\n- Built stuff\n---JOB END---\n"));
    }

    #[test]
    fn test_tagged_text_empty_value_emits_bare_key() {
        let r = record_with(&[("FullName", "")]);
        assert_eq!(r.to_tagged_text(&TEMPLATE1), "FullName:\n");
    }

    #[test]
    fn test_serde_round_trip() {
        let r = record_with(&[("FullName", "Jane Doe")]);
        let json = serde_json::to_string(&r).unwrap();
        let back: ResumeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
