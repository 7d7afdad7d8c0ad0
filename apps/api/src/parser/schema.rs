//! Declarative field schemas — the only thing that differs between the two
//! template parsers. One shared engine in `parser` consumes these tables.

/// How a recognized top-level field stores its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line, overwrite-on-write. Later bare lines are not appended.
    Flat,
    /// Multi-line: the `Key: value` line seeds the field, subsequent bare
    /// lines append newline-joined until the next recognized key or marker.
    FreeText,
}

/// What to do with a `key: value` line whose key is not in any table,
/// encountered outside a job block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownKeyPolicy {
    /// Drop the line (template 1).
    Ignore,
    /// Store it as a new ad-hoc flat field (template 2).
    CaptureAdHoc,
}

/// Per-template parsing configuration: recognized keys, markers, policies.
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    /// Recognized top-level fields and their storage kind.
    pub top_fields: &'static [(&'static str, FieldKind)],
    /// Flat keys recognized inside a job block.
    pub job_fields: &'static [&'static str],
    /// The job-level list key ("Responsibilities").
    pub job_list_key: &'static str,
    /// Literal line opening a job block.
    pub job_start: &'static str,
    /// Literal line closing a job block.
    pub job_end: &'static str,
    pub unknown_keys: UnknownKeyPolicy,
}

impl FieldSchema {
    pub fn top_field(&self, key: &str) -> Option<FieldKind> {
        self.top_fields
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, kind)| *kind)
    }

    pub fn is_job_field(&self, key: &str) -> bool {
        self.job_fields.contains(&key)
    }
}

/// Schema for the template-1 tagged convention.
pub const TEMPLATE1: FieldSchema = FieldSchema {
    top_fields: &[
        ("FullName", FieldKind::Flat),
        ("Professional Summary", FieldKind::FreeText),
        ("Roles", FieldKind::FreeText),
        ("Technologies", FieldKind::FreeText),
        ("Education", FieldKind::FreeText),
        ("Certifications", FieldKind::FreeText),
        ("Geographic locale", FieldKind::FreeText),
        ("Professional and Experience Summary", FieldKind::FreeText),
    ],
    job_fields: &[
        "CompanyName",
        "Role",
        "Duration",
        "Client",
        "BusinessValue",
        "Description",
    ],
    job_list_key: "Responsibilities",
    job_start: "---JOB START---",
    job_end: "---JOB END---",
    unknown_keys: UnknownKeyPolicy::Ignore,
};

/// Schema for the template-2 tagged convention. The table-shaped fields
/// (`ProfessionalOverviewTable`, `KeyEngagementsTable`) are plain free-text
/// here; their `|`-row convention is interpreted by the renderer only.
pub const TEMPLATE2: FieldSchema = FieldSchema {
    top_fields: &[
        ("FullName", FieldKind::Flat),
        ("Designation", FieldKind::Flat),
        ("ProfessionalOverviewSummary", FieldKind::FreeText),
        ("ProfessionalOverviewTable", FieldKind::FreeText),
        ("KeyEngagementsTable", FieldKind::FreeText),
        ("Education", FieldKind::FreeText),
        ("Publications", FieldKind::FreeText),
        ("ProfessionalTrainingCertifications", FieldKind::FreeText),
        ("GeographicLocale", FieldKind::FreeText),
    ],
    job_fields: &["CompanyName", "Role", "Duration", "Client"],
    job_list_key: "Responsibilities",
    job_start: "---JOB START---",
    job_end: "---JOB END---",
    unknown_keys: UnknownKeyPolicy::CaptureAdHoc,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template1_fullname_is_flat() {
        assert_eq!(TEMPLATE1.top_field("FullName"), Some(FieldKind::Flat));
    }

    #[test]
    fn test_template1_education_is_free_text() {
        assert_eq!(TEMPLATE1.top_field("Education"), Some(FieldKind::FreeText));
    }

    #[test]
    fn test_template1_ignores_unknown_keys() {
        assert_eq!(TEMPLATE1.unknown_keys, UnknownKeyPolicy::Ignore);
    }

    #[test]
    fn test_template2_captures_unknown_keys() {
        assert_eq!(TEMPLATE2.unknown_keys, UnknownKeyPolicy::CaptureAdHoc);
    }

    #[test]
    fn test_key_match_is_case_sensitive() {
        assert_eq!(TEMPLATE1.top_field("fullname"), None);
        assert!(!TEMPLATE1.is_job_field("companyname"));
    }

    #[test]
    fn test_template2_has_no_description_job_field() {
        assert!(TEMPLATE1.is_job_field("Description"));
        assert!(!TEMPLATE2.is_job_field("Description"));
    }

    #[test]
    fn test_markers_shared_across_templates() {
        assert_eq!(TEMPLATE1.job_start, TEMPLATE2.job_start);
        assert_eq!(TEMPLATE1.job_end, TEMPLATE2.job_end);
    }
}
