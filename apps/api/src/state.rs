use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::render::Assets;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    /// Branding images loaded once at startup.
    pub assets: Assets,
}
