//! Axum route handlers for the Resume Comparison API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::resume::comparator::resolve_input;
use crate::resume::models::{ResumeCompareRequest, ResumeComparison};
use crate::resume::pdf::extract_pdf_text;
use crate::state::AppState;

/// POST /api/v1/resume/compare
///
/// Compares resume text against a job posting. Skill lists are optional and
/// are extracted from the texts when absent.
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<ResumeCompareRequest>,
) -> Result<Json<ResumeComparison>, AppError> {
    request.validate()?;
    compare(&state, request).await.map(Json)
}

/// POST /api/v1/resume/compare/upload
///
/// Multipart form: `resume` (PDF file) and `job_description` (text).
pub async fn handle_compare_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeComparison>, AppError> {
    let mut resume_pdf: Option<Bytes> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read resume file: {e}")))?;
                resume_pdf = Some(data);
            }
            Some("job_description") => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Could not read job_description: {e}"))
                })?;
                job_description = Some(text);
            }
            _ => {}
        }
    }

    let resume_pdf =
        resume_pdf.ok_or_else(|| AppError::Validation("Missing 'resume' file field".to_string()))?;
    let job_description = job_description
        .ok_or_else(|| AppError::Validation("Missing 'job_description' field".to_string()))?;

    let resume_text = extract_pdf_text(resume_pdf).await?;

    let request = ResumeCompareRequest {
        resume_text,
        job_description,
        required_skills: None,
        resume_skills: None,
    };
    request.validate()?;
    compare(&state, request).await.map(Json)
}

async fn compare(
    state: &AppState,
    request: ResumeCompareRequest,
) -> Result<ResumeComparison, AppError> {
    let input = resolve_input(request)?;
    let comparison = state.analyzer.compare_resume(&input).await?;

    info!(
        "Resume compared: {}/{} required skills matched, score={}, coverage={}% ({:?})",
        comparison.match_summary.matched_skills.len(),
        input.required_skills.len(),
        comparison.resume_match_score,
        comparison.keyword_coverage,
        comparison.analysis_source
    );

    Ok(comparison)
}
