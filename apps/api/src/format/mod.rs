// Formatting pipeline: upload → extract → prompt → generate → parse → render.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod handlers;
pub mod prompts;
pub mod template;
