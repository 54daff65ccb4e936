//! Axum route handlers for the Skill Gap API.

use axum::{extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::skill_gap::models::{SkillGapReport, SkillGapRequest};
use crate::state::AppState;

/// POST /api/v1/skill-gap
///
/// Classifies each required skill as strong / partial / missing against the
/// user's skills and returns priorities, readiness, and insights.
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    Json(request): Json<SkillGapRequest>,
) -> Result<Json<SkillGapReport>, AppError> {
    request.validate()?;

    let report = state.analyzer.analyze_gap(&request).await?;

    info!(
        "Skill gap analyzed: {} required, {} held, readiness={} ({:?})",
        request.required_skills.len(),
        request.user_skills.len(),
        report.job_readiness_estimate,
        report.analysis_source
    );

    Ok(Json(report))
}
