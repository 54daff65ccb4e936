use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::{
    AnalysisSource, MatchOutcome, MatchStrength, PriorityClassification, RequiredSkill, UserSkill,
};

/// Request body for `POST /api/v1/skill-gap`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGapRequest {
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<RequiredSkill>,
    #[serde(default)]
    pub user_skills: Vec<UserSkill>,
}

impl SkillGapRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.required_skills.is_empty() {
            return Err(AppError::Validation(
                "required_skills must contain at least one skill".to_string(),
            ));
        }
        if let Some(i) = self
            .required_skills
            .iter()
            .position(|s| s.name.trim().is_empty())
        {
            return Err(AppError::Validation(format!(
                "required_skills[{i}].name cannot be empty"
            )));
        }
        if let Some(i) = self.user_skills.iter().position(|s| s.name.trim().is_empty()) {
            return Err(AppError::Validation(format!(
                "user_skills[{i}].name cannot be empty"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGapSummary {
    #[serde(default)]
    pub strong_matches: Vec<String>,
    #[serde(default)]
    pub partial_matches: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
}

impl From<&MatchOutcome> for SkillGapSummary {
    fn from(outcome: &MatchOutcome) -> Self {
        Self {
            strong_matches: outcome.names_with(MatchStrength::Strong),
            partial_matches: outcome.names_with(MatchStrength::Partial),
            missing_skills: outcome.names_with(MatchStrength::Missing),
        }
    }
}

/// Response body for `POST /api/v1/skill-gap`. Also the JSON shape the LLM is asked to return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGapReport {
    pub skill_gap_summary: SkillGapSummary,
    pub priority_classification: PriorityClassification,
    pub job_readiness_estimate: u32, // 0 – 100
    #[serde(default)]
    pub gap_insights: Vec<String>,
    #[serde(default)]
    pub analysis_source: AnalysisSource,
}
