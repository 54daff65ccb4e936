//! Resume vs job posting comparison built on the shared skill matcher.
//!
//! Skill lists not supplied by the client are extracted from the texts with the
//! lexicon. Extracted skills get an `Intermediate` level on both sides, so a
//! skill mentioned in both texts counts as a strong match.

use std::collections::HashSet;

use tracing::debug;

use crate::errors::AppError;
use crate::matching::{match_skills, AnalysisSource, Proficiency, RequiredSkill, UserSkill};
use crate::resume::lexicon::{extract_skills, extract_skills_with_signals, mentions};
use crate::resume::models::{
    ResumeCompareRequest, ResumeComparison, ResumeComparisonInput, ResumeMatchSummary,
};

const TOP_N: usize = 3;

/// Fills in missing skill lists from the resume and job description texts.
pub fn resolve_input(request: ResumeCompareRequest) -> Result<ResumeComparisonInput, AppError> {
    let extracted_job = extract_skills_with_signals(&request.job_description);
    let job_keywords: Vec<String> = extracted_job.iter().map(|s| s.name.clone()).collect();

    let required_skills = match request.required_skills {
        Some(skills) => skills,
        None => extracted_job
            .into_iter()
            .map(|s| RequiredSkill {
                name: s.name,
                level: Some(Proficiency::Intermediate.into()),
                category: None,
                required: s.required,
            })
            .collect(),
    };

    if required_skills.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "No recognizable skills found in job_description; provide required_skills explicitly"
                .to_string(),
        ));
    }

    let resume_skills = match request.resume_skills {
        Some(skills) => skills,
        None => extract_skills(&request.resume_text)
            .into_iter()
            .map(|name| UserSkill {
                name,
                level: Some(Proficiency::Intermediate.into()),
            })
            .collect(),
    };

    debug!(
        "Resolved resume comparison: {} required, {} resume skills, {} job keywords",
        required_skills.len(),
        resume_skills.len(),
        job_keywords.len()
    );

    Ok(ResumeComparisonInput {
        resume_text: request.resume_text,
        job_description: request.job_description,
        required_skills,
        resume_skills,
        job_keywords,
    })
}

/// Percentage of job keywords mentioned anywhere in the resume, by name or
/// by any lexicon alias; 0 when there are none.
pub fn keyword_coverage(job_keywords: &[String], resume_text: &str) -> u32 {
    if job_keywords.is_empty() {
        return 0;
    }
    let resume_lower = resume_text.to_lowercase();
    let resume_terms: HashSet<String> = extract_skills(resume_text)
        .into_iter()
        .map(|s| s.to_lowercase())
        .collect();
    let covered = job_keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| resume_terms.contains(k) || mentions(&resume_lower, k))
        .count();
    let total = job_keywords.len();
    ((200 * covered + total) / (2 * total)) as u32
}

/// Keyword coverage for an input, falling back to the required skill names
/// when the job description holds no lexicon terms.
pub fn coverage_for(input: &ResumeComparisonInput) -> u32 {
    if input.job_keywords.is_empty() {
        let names: Vec<String> = input
            .required_skills
            .iter()
            .map(|s| s.name.trim().to_string())
            .collect();
        keyword_coverage(&names, &input.resume_text)
    } else {
        keyword_coverage(&input.job_keywords, &input.resume_text)
    }
}

/// Heuristic comparison: shared matcher plus coverage and recommendations.
pub fn compare_heuristic(input: &ResumeComparisonInput) -> ResumeComparison {
    let outcome = match_skills(&input.required_skills, &input.resume_skills);
    let summary = ResumeMatchSummary::from(&outcome);
    let coverage = coverage_for(input);
    let recommendations = build_recommendations(outcome.readiness, coverage, &summary);

    ResumeComparison {
        improvement_priorities: outcome.priorities(),
        match_summary: summary,
        resume_match_score: outcome.readiness,
        keyword_coverage: coverage,
        recommendations,
        analysis_source: AnalysisSource::Heuristic,
    }
}

/// Builds resume-editing advice from score, keyword coverage, and the match summary.
pub fn build_recommendations(score: u32, coverage: u32, summary: &ResumeMatchSummary) -> Vec<String> {
    let mut recs = Vec::new();

    recs.push(if score >= 80 {
        format!("Strong match ({score}/100). Tailor the summary section to this role and apply.")
    } else if score >= 50 {
        format!("Moderate match ({score}/100). Address the gaps below before applying.")
    } else {
        format!("Low match ({score}/100). This posting needs significant resume work or upskilling.")
    });

    if !summary.missing_skills.is_empty() {
        recs.push(format!(
            "Add evidence for missing skills if you have them: {}.",
            join_top(&summary.missing_skills)
        ));
    }

    if !summary.partial_skills.is_empty() {
        recs.push(format!(
            "Make these skills explicit with concrete projects or metrics: {}.",
            join_top(&summary.partial_skills)
        ));
    }

    if coverage < 50 {
        recs.push(format!(
            "Only {coverage}% of the posting's keywords appear in your resume. Mirror its terminology where accurate."
        ));
    }

    recs
}

fn join_top(names: &[String]) -> String {
    let mut out: Vec<&str> = names.iter().take(TOP_N).map(String::as_str).collect();
    if names.len() > TOP_N {
        out.push("and more");
    }
    out.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::ProficiencyInput;

    const JD: &str = "Senior Backend Engineer\n\
        Required: Rust, PostgreSQL and Docker\n\
        Nice to have: Kafka";

    const RESUME: &str = "Backend engineer. Built payment services in Rust on Postgres;\n\
        containerized everything with Docker.";

    fn request(required: Option<Vec<RequiredSkill>>, resume: Option<Vec<UserSkill>>) -> ResumeCompareRequest {
        ResumeCompareRequest {
            resume_text: RESUME.to_string(),
            job_description: JD.to_string(),
            required_skills: required,
            resume_skills: resume,
        }
    }

    #[test]
    fn test_resolve_extracts_both_sides() {
        let input = resolve_input(request(None, None)).unwrap();
        let required: Vec<&str> = input.required_skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(required, vec!["Rust", "PostgreSQL", "Docker", "Kafka"]);
        assert_eq!(input.required_skills[0].required, Some(true));
        assert_eq!(input.required_skills[3].required, Some(false));

        let resume: Vec<&str> = input.resume_skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(resume, vec!["Rust", "PostgreSQL", "Docker"]);
    }

    #[test]
    fn test_resolve_keeps_supplied_lists() {
        let supplied = vec![RequiredSkill {
            name: "Haskell".to_string(),
            level: None,
            category: None,
            required: Some(true),
        }];
        let input = resolve_input(request(Some(supplied), None)).unwrap();
        assert_eq!(input.required_skills.len(), 1);
        assert_eq!(input.required_skills[0].name, "Haskell");
        // Keywords still come from the posting text.
        assert_eq!(input.job_keywords.len(), 4);
    }

    #[test]
    fn test_resolve_rejects_posting_without_skills() {
        let req = ResumeCompareRequest {
            resume_text: RESUME.to_string(),
            job_description: "We are hiring a great person.".to_string(),
            required_skills: None,
            resume_skills: None,
        };
        assert!(matches!(
            resolve_input(req),
            Err(AppError::UnprocessableEntity(_))
        ));
    }

    #[test]
    fn test_extracted_mentions_on_both_sides_are_strong() {
        let input = resolve_input(request(None, None)).unwrap();
        let comparison = compare_heuristic(&input);

        assert_eq!(
            comparison.match_summary.matched_skills,
            vec!["Rust", "PostgreSQL", "Docker"]
        );
        assert_eq!(comparison.match_summary.missing_skills, vec!["Kafka"]);
        assert_eq!(comparison.improvement_priorities.high, vec!["Kafka"]);
        // 3 strong of 4 → 75
        assert_eq!(comparison.resume_match_score, 75);
        assert_eq!(comparison.keyword_coverage, 75);
        assert_eq!(comparison.analysis_source, AnalysisSource::Heuristic);
    }

    #[test]
    fn test_framework_posting_does_not_require_bare_language() {
        let req = ResumeCompareRequest {
            resume_text: "Ten years of Ruby scripting".to_string(),
            job_description: "Required: Ruby on Rails".to_string(),
            required_skills: None,
            resume_skills: None,
        };
        let input = resolve_input(req).unwrap();
        let required: Vec<&str> = input.required_skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(required, vec!["Ruby on Rails"]);

        // "ruby" covers half of the requirement's tokens.
        let comparison = compare_heuristic(&input);
        assert_eq!(comparison.match_summary.partial_skills, vec!["Ruby on Rails"]);
        assert!(comparison.match_summary.matched_skills.is_empty());
        assert_eq!(comparison.resume_match_score, 50);
    }

    #[test]
    fn test_supplied_resume_levels_are_respected() {
        let resume = vec![UserSkill {
            name: "rust".to_string(),
            level: Some(ProficiencyInput::Label("beginner".to_string())),
        }];
        let input = resolve_input(request(None, Some(resume))).unwrap();
        let comparison = compare_heuristic(&input);
        assert_eq!(comparison.match_summary.partial_skills, vec!["Rust"]);
    }

    #[test]
    fn test_keyword_coverage() {
        let keywords = vec!["Rust".to_string(), "Kafka".to_string()];
        assert_eq!(keyword_coverage(&keywords, "I write rust"), 50);
        assert_eq!(keyword_coverage(&[], "anything"), 0);

        let eight: Vec<String> = ["Rust", "Go", "Java", "Kafka", "Redis", "Linux", "Git", "AWS"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        // 1 of 8 = 12.5
        assert_eq!(keyword_coverage(&eight, "rust only"), 13);
    }

    #[test]
    fn test_recommendations_flag_low_coverage() {
        let summary = ResumeMatchSummary {
            matched_skills: vec![],
            partial_skills: vec!["SQL".to_string()],
            missing_skills: vec!["Rust".to_string()],
        };
        let recs = build_recommendations(25, 20, &summary);
        assert!(recs[0].starts_with("Low match (25/100)"));
        assert!(recs.iter().any(|r| r.contains("missing skills if you have them: Rust")));
        assert!(recs.iter().any(|r| r.contains("metrics: SQL")));
        assert!(recs.iter().any(|r| r.starts_with("Only 20%")));
    }

    #[test]
    fn test_recommendations_strong_match_is_short() {
        let recs = build_recommendations(90, 100, &ResumeMatchSummary::default());
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("Strong match"));
    }
}
