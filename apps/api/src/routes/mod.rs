pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::format::handlers;
use crate::state::AppState;

/// Uploads are whole résumés, not bulk documents. 20 MiB is generous.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/format/:template", post(handlers::handle_format))
        .route(
            "/api/v1/format/:template/preview",
            post(handlers::handle_preview),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
