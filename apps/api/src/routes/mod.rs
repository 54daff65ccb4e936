pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::resume::handlers as resume;
use crate::skill_gap::handlers as skill_gap;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/skill-gap", post(skill_gap::handle_skill_gap))
        .route("/api/v1/resume/compare", post(resume::handle_compare))
        .route(
            "/api/v1/resume/compare/upload",
            post(resume::handle_compare_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .fallback(not_found)
        .with_state(state)
}
