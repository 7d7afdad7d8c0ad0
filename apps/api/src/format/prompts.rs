// Extraction-instruction prompts, one per template. The instruction pins the
// tagged plain-text convention the parser expects; styling is entirely the
// renderer's job, so the model is told not to format anything.

use crate::format::template::TemplateKind;

/// Template-1 tagged-output instruction.
pub const TEMPLATE1_INSTRUCTION: &str = r#"You are a resume data extractor. Your task is to extract information from the provided resume and format it as clean, tagged, plain text.

DO NOT add any special formatting. The formatting service handles all styling.

---

FullName: [Full Name]
Professional Summary:
[Extract and summarize the resume's professional overview in 3-4 sentences.]
Roles:
[Extract all roles listed, comma separated.]
Technologies:
[Extract the technologies, one per line, in 'Category: Skills' format.]
Education:
[Extract content for the education section. You MUST NOT extract any GPAs or grades.]
Certifications:
[Extract certifications, one per line.]
Geographic locale:
[Extract geographic locale.]

---JOB START---
CompanyName: [Company Name]
Role: [Your Role/Job Title]
Duration: [Start Date - End Date]
Client: [Client Name for the project. If not applicable, write N/A]
BusinessValue: [Business value delivered by the project]
Description: [Extract the project description]
Responsibilities:
- [Responsibility point 1]
- [Responsibility point 2]
---JOB END---

Repeat the ---JOB START--- to ---JOB END--- block for each job. If a section is empty, write "None"."#;

/// Template-2 tagged-output instruction.
pub const TEMPLATE2_INSTRUCTION: &str = r#"You are a resume data extractor. Your task is to extract information from the provided resume and format it as clean, tagged, plain text.

DO NOT add any special formatting. The formatting service handles all styling.

---

FullName: [Full Name]
Designation: [Designation]

ProfessionalOverviewSummary:
[A 2-3 sentence summary of the professional profile, extracted from the resume. Generate based on the resume if not explicitly mentioned.]

ProfessionalOverviewTable:
Roles | [Summarize key roles held, comma separated]
Solutions | [Summarize solutions delivered]
Industries | [List relevant industries]
Technologies | [List key technologies used]

KeyEngagementsTable:
Client | Role | Description
[Client Name 1] | [Role at Client 1] | [Brief description of engagement 1]
[Client Name 2] | [Role at Client 2] | [Brief description of engagement 2]

Education:
[Content for the education section]

Publications:
[Content for the publications section]

ProfessionalTrainingCertifications:
[Content for certifications section]

GeographicLocale:
[Content for geographic locale section]

---JOB START---
CompanyName: [Company Name]
Role: [Your Role/Job Title]
Duration: [Start Date - End Date]
Client: [Client Name for the project. If not applicable, write N/A]
Responsibilities:
- [Responsibility point 1]
---JOB END---

Repeat the ---JOB START--- to ---JOB END--- block for each job. If a section is empty, write "None"."#;

/// Wraps extracted résumé text with the template's extraction instruction.
pub fn build_prompt(resume_text: &str, kind: TemplateKind) -> String {
    format!("Resume Text:\n{resume_text}\n\n{}", kind.instruction())
}
