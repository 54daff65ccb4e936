//! Skill analyzers — pluggable, trait-based backends behind both endpoints.
//!
//! `HeuristicAnalyzer` runs the deterministic matcher. `LlmAnalyzer` asks
//! Claude and falls back to the heuristic on any LLM failure, so callers never
//! see an LLM error. `AppState` holds an `Arc<dyn SkillAnalyzer>` chosen at
//! startup from whether an API key is configured.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::json_system;
use crate::llm_client::{LlmClient, LlmError};
use crate::matching::{match_skills, AnalysisSource};
use crate::resume::comparator::{compare_heuristic, coverage_for};
use crate::resume::models::{ResumeComparison, ResumeComparisonInput};
use crate::skill_gap::insights::build_gap_insights;
use crate::skill_gap::models::{SkillGapReport, SkillGapRequest, SkillGapSummary};

pub mod prompts;

use prompts::{render_resume_prompt, render_skill_gap_prompt, RESUME_PERSONA, SKILL_GAP_PERSONA};

/// Implement this to swap analysis backends without touching handlers.
#[async_trait]
pub trait SkillAnalyzer: Send + Sync {
    async fn analyze_gap(&self, request: &SkillGapRequest) -> Result<SkillGapReport, AppError>;

    async fn compare_resume(
        &self,
        input: &ResumeComparisonInput,
    ) -> Result<ResumeComparison, AppError>;

    /// "heuristic" | "llm" — reported by the health endpoint.
    fn backend_name(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicAnalyzer
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic keyword/level matcher. No network access.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {
    pub fn gap_report(&self, request: &SkillGapRequest) -> SkillGapReport {
        let outcome = match_skills(&request.required_skills, &request.user_skills);
        SkillGapReport {
            skill_gap_summary: SkillGapSummary::from(&outcome),
            priority_classification: outcome.priorities(),
            job_readiness_estimate: outcome.readiness,
            gap_insights: build_gap_insights(&outcome, request.job_title.as_deref()),
            analysis_source: AnalysisSource::Heuristic,
        }
    }
}

#[async_trait]
impl SkillAnalyzer for HeuristicAnalyzer {
    async fn analyze_gap(&self, request: &SkillGapRequest) -> Result<SkillGapReport, AppError> {
        Ok(self.gap_report(request))
    }

    async fn compare_resume(
        &self,
        input: &ResumeComparisonInput,
    ) -> Result<ResumeComparison, AppError> {
        Ok(compare_heuristic(input))
    }

    fn backend_name(&self) -> &'static str {
        "heuristic"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmAnalyzer
// ────────────────────────────────────────────────────────────────────────────

/// Semantic analysis via Claude with transparent heuristic fallback.
pub struct LlmAnalyzer {
    llm: LlmClient,
    fallback: HeuristicAnalyzer,
}

impl LlmAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            fallback: HeuristicAnalyzer,
        }
    }

    async fn try_gap(&self, request: &SkillGapRequest) -> Result<SkillGapReport, LlmError> {
        let prompt = render_skill_gap_prompt(request)?;
        let mut report: SkillGapReport = self
            .llm
            .call_json(&prompt, &json_system(SKILL_GAP_PERSONA))
            .await?;

        report.job_readiness_estimate = report.job_readiness_estimate.min(100);
        if report.gap_insights.is_empty() {
            report.gap_insights = self.fallback.gap_report(request).gap_insights;
        }
        report.analysis_source = AnalysisSource::Llm;
        Ok(report)
    }

    async fn try_resume(
        &self,
        input: &ResumeComparisonInput,
    ) -> Result<ResumeComparison, LlmError> {
        let prompt = render_resume_prompt(input)?;
        let mut comparison: ResumeComparison = self
            .llm
            .call_json(&prompt, &json_system(RESUME_PERSONA))
            .await?;

        comparison.resume_match_score = comparison.resume_match_score.min(100);
        // Coverage is a literal text measure; never trust the model for it.
        comparison.keyword_coverage = coverage_for(input);
        comparison.analysis_source = AnalysisSource::Llm;
        Ok(comparison)
    }
}

#[async_trait]
impl SkillAnalyzer for LlmAnalyzer {
    async fn analyze_gap(&self, request: &SkillGapRequest) -> Result<SkillGapReport, AppError> {
        match self.try_gap(request).await {
            Ok(report) => {
                info!(
                    "LLM skill-gap analysis complete: readiness={}",
                    report.job_readiness_estimate
                );
                Ok(report)
            }
            Err(e) => {
                warn!("LLM skill-gap analysis failed, using heuristic fallback: {e}");
                self.fallback.analyze_gap(request).await
            }
        }
    }

    async fn compare_resume(
        &self,
        input: &ResumeComparisonInput,
    ) -> Result<ResumeComparison, AppError> {
        match self.try_resume(input).await {
            Ok(comparison) => {
                info!(
                    "LLM resume comparison complete: score={}",
                    comparison.resume_match_score
                );
                Ok(comparison)
            }
            Err(e) => {
                warn!("LLM resume comparison failed, using heuristic fallback: {e}");
                self.fallback.compare_resume(input).await
            }
        }
    }

    fn backend_name(&self) -> &'static str {
        "llm"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
