use std::collections::HashSet;

/// Tokens shorter than this are ignored during fuzzy matching.
pub const MIN_TOKEN_LEN: usize = 3;

/// Trims and lowercases a skill name for exact comparison.
pub fn normalize_skill_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Splits a skill name on non-alphanumeric characters, keeping tokens of 3+ chars.
pub fn tokenize(name: &str) -> HashSet<String> {
    name.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

/// Fraction of `required` tokens present in `held`. Zero when `required` is empty.
pub fn token_overlap(required: &HashSet<String>, held: &HashSet<String>) -> f64 {
    if required.is_empty() {
        return 0.0;
    }
    let shared = required.iter().filter(|t| held.contains(*t)).count();
    shared as f64 / required.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_skill_name("  PostgreSQL "), "postgresql");
    }

    #[test]
    fn test_tokenize_splits_on_separators() {
        assert_eq!(
            tokenize("Machine-Learning / Data_Science"),
            set(&["machine", "learning", "data", "science"])
        );
    }

    #[test]
    fn test_tokenize_drops_short_tokens() {
        assert_eq!(tokenize("CI/CD on AWS"), set(&["aws"]));
        assert!(tokenize("Go").is_empty());
    }

    #[test]
    fn test_overlap_is_relative_to_requirement() {
        let required = set(&["distributed", "systems"]);
        let held = set(&["systems", "programming", "embedded"]);
        assert!((token_overlap(&required, &held) - 0.5).abs() < f64::EPSILON);
        // Reverse direction: 1 of 3 held tokens.
        assert!((token_overlap(&held, &required) - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_overlap_with_empty_requirement_is_zero() {
        assert_eq!(token_overlap(&HashSet::new(), &set(&["rust"])), 0.0);
    }
}
