//! Proficiency levels and their ordinal scale.
//!
//! Levels arrive either as labels (`"Advanced"`) or numbers (`3`, `"3"`).
//! Both collapse onto the same 0–4 ordinal; 0 means "unknown" and never
//! satisfies a level comparison.

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Proficiency {
    #[default]
    Unknown,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    pub fn ordinal(self) -> u8 {
        match self {
            Proficiency::Unknown => 0,
            Proficiency::Beginner => 1,
            Proficiency::Intermediate => 2,
            Proficiency::Advanced => 3,
            Proficiency::Expert => 4,
        }
    }

    /// Parses a label case-insensitively. Digit strings go through `from_numeric`.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();
        match label.as_str() {
            "beginner" => Proficiency::Beginner,
            "intermediate" => Proficiency::Intermediate,
            "advanced" => Proficiency::Advanced,
            "expert" => Proficiency::Expert,
            other => other
                .parse::<f64>()
                .map(Proficiency::from_numeric)
                .unwrap_or_default(),
        }
    }

    /// Rounds to the nearest integer; only 1–4 are meaningful.
    pub fn from_numeric(value: f64) -> Self {
        if !value.is_finite() {
            return Proficiency::Unknown;
        }
        match value.round() as i64 {
            1 => Proficiency::Beginner,
            2 => Proficiency::Intermediate,
            3 => Proficiency::Advanced,
            4 => Proficiency::Expert,
            _ => Proficiency::Unknown,
        }
    }
}

/// A proficiency level as sent by clients: either a number or a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProficiencyInput {
    Numeric(f64),
    Label(String),
}

impl ProficiencyInput {
    pub fn proficiency(&self) -> Proficiency {
        match self {
            ProficiencyInput::Numeric(n) => Proficiency::from_numeric(*n),
            ProficiencyInput::Label(s) => Proficiency::from_label(s),
        }
    }
}

impl From<Proficiency> for ProficiencyInput {
    fn from(p: Proficiency) -> Self {
        ProficiencyInput::Numeric(p.ordinal() as f64)
    }
}

/// Ordinal for an optional level; missing levels are 0.
pub fn ordinal_of(level: Option<&ProficiencyInput>) -> u8 {
    level.map(|l| l.proficiency().ordinal()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_map_to_ordinals() {
        assert_eq!(Proficiency::from_label("beginner").ordinal(), 1);
        assert_eq!(Proficiency::from_label("Intermediate").ordinal(), 2);
        assert_eq!(Proficiency::from_label("  ADVANCED ").ordinal(), 3);
        assert_eq!(Proficiency::from_label("expert").ordinal(), 4);
    }

    #[test]
    fn test_unrecognized_label_is_zero() {
        assert_eq!(Proficiency::from_label("guru").ordinal(), 0);
        assert_eq!(Proficiency::from_label("").ordinal(), 0);
    }

    #[test]
    fn test_numeric_values_round_into_scale() {
        assert_eq!(Proficiency::from_numeric(3.0), Proficiency::Advanced);
        assert_eq!(Proficiency::from_numeric(1.4), Proficiency::Beginner);
        assert_eq!(Proficiency::from_numeric(3.6), Proficiency::Expert);
        assert_eq!(Proficiency::from_numeric(0.0), Proficiency::Unknown);
        assert_eq!(Proficiency::from_numeric(7.0), Proficiency::Unknown);
        assert_eq!(Proficiency::from_numeric(f64::NAN), Proficiency::Unknown);
    }

    #[test]
    fn test_digit_string_is_numeric() {
        assert_eq!(Proficiency::from_label("2"), Proficiency::Intermediate);
    }

    #[test]
    fn test_input_deserializes_from_number_or_string() {
        let n: ProficiencyInput = serde_json::from_str("4").unwrap();
        let s: ProficiencyInput = serde_json::from_str(r#""beginner""#).unwrap();
        assert_eq!(n.proficiency(), Proficiency::Expert);
        assert_eq!(s.proficiency(), Proficiency::Beginner);
    }

    #[test]
    fn test_missing_level_ordinal_is_zero() {
        assert_eq!(ordinal_of(None), 0);
        let level = ProficiencyInput::Label("advanced".to_string());
        assert_eq!(ordinal_of(Some(&level)), 3);
    }
}
