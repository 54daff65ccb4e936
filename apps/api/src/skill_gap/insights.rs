use std::collections::BTreeMap;

use crate::matching::{MatchOutcome, MatchStrength, SkillMatch};

/// How many skills to name in a single insight line.
const TOP_N: usize = 3;

/// Builds human-readable insights from a match outcome.
///
/// Explicitly required skills are listed before optional ones within each group.
pub fn build_gap_insights(outcome: &MatchOutcome, job_title: Option<&str>) -> Vec<String> {
    let total = outcome.matches.len();
    if total == 0 {
        return vec!["No required skills were provided, so readiness cannot be estimated."
            .to_string()];
    }

    let mut insights = vec![readiness_line(outcome.readiness, job_title)];

    let strong = outcome.count(MatchStrength::Strong);
    insights.push(format!("You fully meet {strong} of {total} required skills."));

    let missing = ranked(outcome, MatchStrength::Missing);
    if !missing.is_empty() {
        insights.push(format!("Highest-priority gaps: {}.", top_names(&missing)));
    }

    let required_missing: Vec<&SkillMatch> =
        missing.iter().copied().filter(|m| m.is_required).collect();
    if !required_missing.is_empty() {
        insights.push(format!(
            "{} skill(s) marked as required are missing: {}.",
            required_missing.len(),
            top_names(&required_missing)
        ));
    }

    let partial = ranked(outcome, MatchStrength::Partial);
    if !partial.is_empty() {
        insights.push(format!(
            "Deepen or document these partial matches: {}.",
            top_names(&partial)
        ));
    }

    if let Some((category, count)) = dominant_gap_category(&missing) {
        insights.push(format!(
            "Most gaps fall under '{category}' ({count} skill(s))."
        ));
    }

    insights
}

fn readiness_line(readiness: u32, job_title: Option<&str>) -> String {
    let role = job_title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!(" for {t}"))
        .unwrap_or_default();

    if readiness >= 80 {
        format!("Strong readiness{role} ({readiness}%). Focus on polishing the remaining gaps.")
    } else if readiness >= 50 {
        format!("Moderate readiness{role} ({readiness}%). Targeted upskilling should close the gap.")
    } else {
        format!("Early readiness{role} ({readiness}%). Build foundations in the high-priority skills first.")
    }
}

/// Matches of one strength, required ones first, otherwise in input order.
fn ranked(outcome: &MatchOutcome, strength: MatchStrength) -> Vec<&SkillMatch> {
    let mut out: Vec<&SkillMatch> = outcome
        .matches
        .iter()
        .filter(|m| m.strength == strength)
        .collect();
    out.sort_by_key(|m| !m.is_required);
    out
}

fn top_names(matches: &[&SkillMatch]) -> String {
    let mut names: Vec<&str> = matches.iter().take(TOP_N).map(|m| m.skill.as_str()).collect();
    if matches.len() > TOP_N {
        names.push("and more");
    }
    names.join(", ")
}

/// Category with the most missing skills; ties resolve alphabetically.
fn dominant_gap_category(missing: &[&SkillMatch]) -> Option<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for m in missing {
        if let Some(cat) = m.category.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            *counts.entry(cat.to_string()).or_default() += 1;
        }
    }

    let mut best: Option<(String, usize)> = None;
    for (cat, count) in counts {
        if best.as_ref().map_or(true, |(_, b)| count > *b) {
            best = Some((cat, count));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{match_skills, ProficiencyInput, RequiredSkill, UserSkill};

    fn req(name: &str, required: bool, category: Option<&str>) -> RequiredSkill {
        RequiredSkill {
            name: name.to_string(),
            level: Some(ProficiencyInput::Label("intermediate".to_string())),
            category: category.map(str::to_string),
            required: Some(required),
        }
    }

    fn held(name: &str) -> UserSkill {
        UserSkill {
            name: name.to_string(),
            level: Some(ProficiencyInput::Label("advanced".to_string())),
        }
    }

    #[test]
    fn test_empty_outcome_has_single_insight() {
        let outcome = match_skills(&[], &[]);
        let insights = build_gap_insights(&outcome, None);
        assert_eq!(insights.len(), 1);
    }

    #[test]
    fn test_strong_readiness_mentions_role() {
        let outcome = match_skills(&[req("Rust", true, None)], &[held("rust")]);
        let insights = build_gap_insights(&outcome, Some("Backend Engineer"));
        assert!(insights[0].starts_with("Strong readiness for Backend Engineer (100%)"));
        assert!(insights.iter().any(|i| i.contains("1 of 1")));
    }

    #[test]
    fn test_required_gaps_listed_first() {
        let required = vec![
            req("Kafka", false, None),
            req("Terraform", true, None),
            req("Rust", true, None),
        ];
        let outcome = match_skills(&required, &[held("Rust")]);
        let insights = build_gap_insights(&outcome, None);

        let gaps = insights
            .iter()
            .find(|i| i.starts_with("Highest-priority gaps"))
            .unwrap();
        assert_eq!(gaps, "Highest-priority gaps: Terraform, Kafka.");
        assert!(insights
            .iter()
            .any(|i| i == "1 skill(s) marked as required are missing: Terraform."));
    }

    #[test]
    fn test_long_gap_list_is_truncated() {
        let required: Vec<_> = ["Aaa", "Bbb", "Ccc", "Ddd"]
            .iter()
            .map(|n| req(n, false, None))
            .collect();
        let outcome = match_skills(&required, &[]);
        let insights = build_gap_insights(&outcome, None);
        assert!(insights.iter().any(|i| i == "Highest-priority gaps: Aaa, Bbb, Ccc, and more."));
        assert!(insights[0].starts_with("Early readiness (0%)"));
    }

    #[test]
    fn test_dominant_category_reported() {
        let required = vec![
            req("Terraform", false, Some("DevOps")),
            req("Helm", false, Some("DevOps")),
            req("Figma", false, Some("Design")),
        ];
        let outcome = match_skills(&required, &[]);
        let insights = build_gap_insights(&outcome, None);
        assert!(insights
            .iter()
            .any(|i| i == "Most gaps fall under 'DevOps' (2 skill(s))."));
    }

    #[test]
    fn test_partial_matches_get_their_own_line() {
        let outcome = match_skills(
            &[req("Distributed Systems", false, None)],
            &[held("Embedded Systems")],
        );
        let insights = build_gap_insights(&outcome, None);
        assert!(insights[0].starts_with("Moderate readiness (50%)"));
        assert!(insights
            .iter()
            .any(|i| i.contains("partial matches: Distributed Systems")));
    }
}
