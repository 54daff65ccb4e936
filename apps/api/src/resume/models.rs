use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::{
    AnalysisSource, MatchOutcome, MatchStrength, PriorityClassification, RequiredSkill, UserSkill,
};

/// Request body for `POST /api/v1/resume/compare`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeCompareRequest {
    pub resume_text: String,
    pub job_description: String,
    #[serde(default)]
    pub required_skills: Option<Vec<RequiredSkill>>,
    #[serde(default)]
    pub resume_skills: Option<Vec<UserSkill>>,
}

impl ResumeCompareRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.resume_text.trim().is_empty() {
            return Err(AppError::Validation(
                "resume_text cannot be empty".to_string(),
            ));
        }
        if self.job_description.trim().is_empty() {
            return Err(AppError::Validation(
                "job_description cannot be empty".to_string(),
            ));
        }
        if let Some(skills) = &self.required_skills {
            if skills.iter().any(|s| s.name.trim().is_empty()) {
                return Err(AppError::Validation(
                    "required_skills entries need a name".to_string(),
                ));
            }
        }
        if let Some(skills) = &self.resume_skills {
            if skills.iter().any(|s| s.name.trim().is_empty()) {
                return Err(AppError::Validation(
                    "resume_skills entries need a name".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// A comparison request with both skill lists resolved (supplied or extracted).
#[derive(Debug, Clone, Serialize)]
pub struct ResumeComparisonInput {
    pub resume_text: String,
    pub job_description: String,
    pub required_skills: Vec<RequiredSkill>,
    pub resume_skills: Vec<UserSkill>,
    /// Lexicon terms found in the job description, used for keyword coverage.
    pub job_keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeMatchSummary {
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub partial_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
}

impl From<&MatchOutcome> for ResumeMatchSummary {
    fn from(outcome: &MatchOutcome) -> Self {
        Self {
            matched_skills: outcome.names_with(MatchStrength::Strong),
            partial_skills: outcome.names_with(MatchStrength::Partial),
            missing_skills: outcome.names_with(MatchStrength::Missing),
        }
    }
}

/// Response body for both resume comparison endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeComparison {
    pub match_summary: ResumeMatchSummary,
    pub improvement_priorities: PriorityClassification,
    pub resume_match_score: u32, // 0 – 100
    /// Share of job-posting keywords that appear in the resume text (0 – 100).
    #[serde(default)]
    pub keyword_coverage: u32,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub analysis_source: AnalysisSource,
}
