//! The two fixed layout templates and their parsing/prompting configuration.

use serde::{Deserialize, Serialize};

use crate::format::prompts::{TEMPLATE1_INSTRUCTION, TEMPLATE2_INSTRUCTION};
use crate::parser::schema::{FieldSchema, TEMPLATE1, TEMPLATE2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Template1,
    Template2,
}

impl TemplateKind {
    /// Parses the URL path segment ("template1" / "template2").
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "template1" => Some(TemplateKind::Template1),
            "template2" => Some(TemplateKind::Template2),
            _ => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            TemplateKind::Template1 => "template1",
            TemplateKind::Template2 => "template2",
        }
    }

    /// The tagged-text schema this template's generated output follows.
    pub fn schema(&self) -> &'static FieldSchema {
        match self {
            TemplateKind::Template1 => &TEMPLATE1,
            TemplateKind::Template2 => &TEMPLATE2,
        }
    }

    /// The extraction instruction appended to the résumé text.
    pub fn instruction(&self) -> &'static str {
        match self {
            TemplateKind::Template1 => TEMPLATE1_INSTRUCTION,
            TemplateKind::Template2 => TEMPLATE2_INSTRUCTION,
        }
    }
}
