// Skill matching heuristic shared by the skill-gap and resume endpoints.
// Pure functions only: no I/O, no LLM calls.

pub mod matcher;
pub mod models;
pub mod proficiency;
pub mod tokens;

pub use matcher::{match_skills, MatchOutcome};
pub use models::{
    AnalysisSource, MatchStrength, PriorityClassification, RequiredSkill, SkillMatch, UserSkill,
};
pub use proficiency::{Proficiency, ProficiencyInput};
