//! Fallback skill matcher — classifies each required skill as strong, partial,
//! or missing against the user's skills and derives a readiness percentage.
//!
//! Algorithm, per required skill:
//! 1. Exact normalized-name match → strong if the user's ordinal meets the
//!    requirement's (both non-zero), else partial.
//! 2. Otherwise partial if ≥ 50% of the requirement's tokens appear in any
//!    held skill's tokens.
//! 3. Otherwise missing.
//!
//! readiness = round(100 × (strong + 0.5 × partial) / total), 0 for no requirements.

use std::collections::HashSet;

use tracing::debug;

use crate::matching::models::{
    MatchStrength, Priority, PriorityClassification, RequiredSkill, SkillMatch, UserSkill,
};
use crate::matching::proficiency::ordinal_of;
use crate::matching::tokens::{normalize_skill_name, token_overlap, tokenize};

/// Minimum share of requirement tokens that must be held for a partial match.
pub const PARTIAL_OVERLAP_THRESHOLD: f64 = 0.5;

/// Result of matching a full requirement list.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// One entry per required skill, in input order.
    pub matches: Vec<SkillMatch>,
    pub readiness: u32,
}

impl MatchOutcome {
    pub fn names_with(&self, strength: MatchStrength) -> Vec<String> {
        self.matches
            .iter()
            .filter(|m| m.strength == strength)
            .map(|m| m.skill.clone())
            .collect()
    }

    pub fn count(&self, strength: MatchStrength) -> usize {
        self.matches.iter().filter(|m| m.strength == strength).count()
    }

    pub fn priorities(&self) -> PriorityClassification {
        let mut out = PriorityClassification::default();
        for m in &self.matches {
            let bucket = match m.strength.priority() {
                Priority::High => &mut out.high,
                Priority::Medium => &mut out.medium,
                Priority::Low => &mut out.low,
            };
            bucket.push(m.skill.clone());
        }
        out
    }
}

/// Pre-normalized view of a held skill so each one is processed once per request.
struct HeldSkill<'a> {
    name: &'a str,
    normalized: String,
    tokens: HashSet<String>,
    ordinal: u8,
}

fn prepare(user_skills: &[UserSkill]) -> Vec<HeldSkill<'_>> {
    user_skills
        .iter()
        .filter_map(|s| {
            let normalized = normalize_skill_name(&s.name);
            if normalized.is_empty() {
                return None;
            }
            Some(HeldSkill {
                name: s.name.trim(),
                tokens: tokenize(&normalized),
                normalized,
                ordinal: ordinal_of(s.level.as_ref()),
            })
        })
        .collect()
}

/// Classifies a single required skill against the prepared held skills.
fn classify_skill(required: &RequiredSkill, held: &[HeldSkill<'_>]) -> SkillMatch {
    let normalized = normalize_skill_name(&required.name);
    let required_ordinal = ordinal_of(required.level.as_ref());

    let result = |strength: MatchStrength, matched_with: Option<&str>| SkillMatch {
        skill: required.name.trim().to_string(),
        strength,
        matched_with: matched_with.map(str::to_string),
        category: required.category.clone(),
        is_required: required.required.unwrap_or(false),
    };

    // Duplicate held names: the highest level wins.
    let exact = held
        .iter()
        .filter(|h| h.normalized == normalized)
        .max_by_key(|h| h.ordinal);

    if let Some(h) = exact {
        let strength = if required_ordinal > 0 && h.ordinal > 0 && h.ordinal >= required_ordinal {
            MatchStrength::Strong
        } else {
            MatchStrength::Partial
        };
        return result(strength, Some(h.name));
    }

    let required_tokens = tokenize(&normalized);
    let mut best: Option<(&HeldSkill<'_>, f64)> = None;
    for h in held {
        let overlap = token_overlap(&required_tokens, &h.tokens);
        if overlap >= PARTIAL_OVERLAP_THRESHOLD && best.map_or(true, |(_, b)| overlap > b) {
            best = Some((h, overlap));
        }
    }

    match best {
        Some((h, _)) => result(MatchStrength::Partial, Some(h.name)),
        None => result(MatchStrength::Missing, None),
    }
}

/// Runs the matcher over every required skill.
pub fn match_skills(required: &[RequiredSkill], user_skills: &[UserSkill]) -> MatchOutcome {
    let held = prepare(user_skills);
    let matches: Vec<SkillMatch> = required
        .iter()
        .map(|r| classify_skill(r, &held))
        .collect();

    let strong = matches
        .iter()
        .filter(|m| m.strength == MatchStrength::Strong)
        .count();
    let partial = matches
        .iter()
        .filter(|m| m.strength == MatchStrength::Partial)
        .count();
    let readiness = readiness_percentage(strong, partial, matches.len());

    debug!(
        "Matched {} required skills: strong={}, partial={}, readiness={}",
        matches.len(),
        strong,
        partial,
        readiness
    );

    MatchOutcome { matches, readiness }
}

/// round(100 × (strong + 0.5 × partial) / total); 0 when there is nothing to match.
/// Integer arithmetic so halves round up exactly.
pub fn readiness_percentage(strong: usize, partial: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let score = (200 * strong + 100 * partial + total) / (2 * total);
    score.min(100) as u32
}
