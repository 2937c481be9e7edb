//! Skill difficulty - a closed three-value classification

use serde::{Deserialize, Serialize};

/// How hard a skill is to raise or use.
///
/// The set is closed. Model output carrying anything else is coerced to
/// `Medium` by [`Difficulty::from_wire`] rather than rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Coerce a loosely-typed wire value into the closed set.
    ///
    /// Unknown strings and `None` both map to `Medium`.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value.map(str::trim).map(str::to_ascii_lowercase).as_deref() {
            Some("easy") => Self::Easy,
            Some("hard") => Self::Hard,
            _ => Self::Medium,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(Difficulty::from_wire(Some("easy")), Difficulty::Easy);
        assert_eq!(Difficulty::from_wire(Some("medium")), Difficulty::Medium);
        assert_eq!(Difficulty::from_wire(Some("hard")), Difficulty::Hard);
    }

    #[test]
    fn test_case_and_whitespace_tolerance() {
        assert_eq!(Difficulty::from_wire(Some(" Hard ")), Difficulty::Hard);
        assert_eq!(Difficulty::from_wire(Some("EASY")), Difficulty::Easy);
    }

    #[test]
    fn test_unknown_coerces_to_medium() {
        assert_eq!(Difficulty::from_wire(Some("brutal")), Difficulty::Medium);
        assert_eq!(Difficulty::from_wire(Some("")), Difficulty::Medium);
        assert_eq!(Difficulty::from_wire(None), Difficulty::Medium);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Difficulty::Easy).expect("serialize");
        assert_eq!(json, "\"easy\"");
    }
}
