// Skill-gap analysis: user skill profile vs a job's required skills.
// Matching lives in crate::matching; LLM access goes through crate::analyzer.

pub mod handlers;
pub mod insights;
pub mod models;
