use serde::{Deserialize, Serialize};

use crate::matching::proficiency::ProficiencyInput;

/// A skill demanded by a job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredSkill {
    pub name: String,
    #[serde(default)]
    pub level: Option<ProficiencyInput>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub required: Option<bool>,
}

/// A skill the user (or their resume) claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSkill {
    pub name: String,
    #[serde(default)]
    pub level: Option<ProficiencyInput>,
}

/// Classification of one required skill against the user's skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrength {
    Strong,
    Partial,
    Missing,
}

/// Priority of closing a gap. Mirrors `MatchStrength` one-to-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl MatchStrength {
    pub fn priority(self) -> Priority {
        match self {
            MatchStrength::Missing => Priority::High,
            MatchStrength::Partial => Priority::Medium,
            MatchStrength::Strong => Priority::Low,
        }
    }
}

/// Per-skill result of the matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatch {
    pub skill: String,
    pub strength: MatchStrength,
    /// Name of the held skill that produced the match, if any.
    pub matched_with: Option<String>,
    pub category: Option<String>,
    pub is_required: bool,
}

/// Skill names grouped by priority.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriorityClassification {
    #[serde(default)]
    pub high: Vec<String>,
    #[serde(default)]
    pub medium: Vec<String>,
    #[serde(default)]
    pub low: Vec<String>,
}

/// Where an analysis came from, surfaced to clients for transparency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    Llm,
    #[default]
    Heuristic,
}
