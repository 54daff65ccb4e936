// Shared prompt fragments.
// Each analysis that needs LLM calls defines its own prompts alongside it;
// this file holds the cross-cutting pieces.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Keeps the model from inventing skills the user never listed.
pub const EVIDENCE_INSTRUCTION: &str = "\
    CRITICAL: Only treat a skill as held if it appears in the provided user skills \
    or resume text. Do NOT assume adjacent skills. Every skill name you return must \
    be copied verbatim from the required skills list.";

/// Builds a system prompt from a persona line plus the JSON-only rules.
pub fn json_system(persona: &str) -> String {
    format!("{persona} {JSON_ONLY_SYSTEM}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_system_appends_rules() {
        let system = json_system("You are a career coach.");
        assert!(system.starts_with("You are a career coach. "));
        assert!(system.ends_with(JSON_ONLY_SYSTEM));
    }
}
