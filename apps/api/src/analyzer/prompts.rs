// LLM prompt constants for skill-gap and resume analyses.
// Reuses cross-cutting fragments from llm_client::prompts.

use serde::Serialize;

use crate::llm_client::prompts::EVIDENCE_INSTRUCTION;
use crate::resume::models::ResumeComparisonInput;
use crate::skill_gap::models::SkillGapRequest;

/// Persona line for skill-gap analysis; combined with the JSON-only rules.
pub const SKILL_GAP_PERSONA: &str = "You are an experienced career coach who assesses \
    how ready a candidate is for a specific job based on their skill profile.";

/// Persona line for resume comparison; combined with the JSON-only rules.
pub const RESUME_PERSONA: &str = "You are a technical recruiter who compares resumes \
    against job postings the way an applicant tracking system and a hiring manager would.";

/// Skill-gap prompt. Replace `{job_title}`, `{job_description}`, `{required_skills}`,
/// `{user_skills}` and `{evidence_instruction}` before sending.
pub const SKILL_GAP_PROMPT_TEMPLATE: &str = r#"Assess the candidate's readiness for the job below.

Job title: {job_title}
Job description:
{job_description}

Required skills (JSON; level is beginner|intermediate|advanced|expert or 1-4):
{required_skills}

Candidate skills (JSON):
{user_skills}

Return a JSON object with this EXACT schema (no extra fields):
{
  "skill_gap_summary": {
    "strong_matches": ["skills the candidate meets at the required level"],
    "partial_matches": ["skills held at a lower level or only adjacently"],
    "missing_skills": ["skills with no evidence"]
  },
  "priority_classification": {
    "high": ["missing skills"],
    "medium": ["partial matches"],
    "low": ["strong matches"]
  },
  "job_readiness_estimate": 0,
  "gap_insights": ["2-5 short, actionable sentences"]
}

Rules:
- Every required skill appears in exactly one of strong_matches / partial_matches / missing_skills.
- job_readiness_estimate is an integer from 0 to 100.
- {evidence_instruction}"#;

/// Resume comparison prompt. Replace `{job_description}`, `{resume_text}`,
/// `{required_skills}`, `{resume_skills}` and `{evidence_instruction}` before sending.
pub const RESUME_COMPARE_PROMPT_TEMPLATE: &str = r#"Compare the resume below against the job posting.

Job posting:
{job_description}

Resume:
{resume_text}

Required skills (JSON):
{required_skills}

Skills detected on the resume (JSON):
{resume_skills}

Return a JSON object with this EXACT schema (no extra fields):
{
  "match_summary": {
    "matched_skills": ["required skills clearly demonstrated"],
    "partial_skills": ["required skills weakly or indirectly demonstrated"],
    "missing_skills": ["required skills absent from the resume"]
  },
  "improvement_priorities": {
    "high": ["missing skills"],
    "medium": ["partial skills"],
    "low": ["matched skills"]
  },
  "resume_match_score": 0,
  "recommendations": ["2-5 concrete resume edits"]
}

Rules:
- Every required skill appears in exactly one of matched_skills / partial_skills / missing_skills.
- resume_match_score is an integer from 0 to 100.
- {evidence_instruction}"#;

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Substitutes `{name}` placeholders in one pass. Substituted text is never
/// rescanned, so user input containing a placeholder stays literal.
fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

pub fn render_skill_gap_prompt(request: &SkillGapRequest) -> Result<String, serde_json::Error> {
    let required_skills = to_json(&request.required_skills)?;
    let user_skills = to_json(&request.user_skills)?;
    Ok(render(
        SKILL_GAP_PROMPT_TEMPLATE,
        &[
            ("job_title", request.job_title.as_deref().unwrap_or("(not provided)")),
            (
                "job_description",
                request.job_description.as_deref().unwrap_or("(not provided)"),
            ),
            ("required_skills", required_skills.as_str()),
            ("user_skills", user_skills.as_str()),
            ("evidence_instruction", EVIDENCE_INSTRUCTION),
        ],
    ))
}

pub fn render_resume_prompt(input: &ResumeComparisonInput) -> Result<String, serde_json::Error> {
    let required_skills = to_json(&input.required_skills)?;
    let resume_skills = to_json(&input.resume_skills)?;
    Ok(render(
        RESUME_COMPARE_PROMPT_TEMPLATE,
        &[
            ("job_description", input.job_description.as_str()),
            ("resume_text", input.resume_text.as_str()),
            ("required_skills", required_skills.as_str()),
            ("resume_skills", resume_skills.as_str()),
            ("evidence_instruction", EVIDENCE_INSTRUCTION),
        ],
    ))
}
