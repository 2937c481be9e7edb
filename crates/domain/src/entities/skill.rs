//! Generated skill - a learnable capability produced by the pipeline
//!
//! Skills may reference attributes by display name. Those references are
//! soft: resolution into attribute identifiers is the responsibility of the
//! consumer that owns the identifier space, never of this crate.

use serde::{Deserialize, Serialize};

use crate::value_objects::Difficulty;

/// A skill produced by world generation or description analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSkill {
    pub name: String,
    pub description: String,
    /// How hard the skill is to raise or use.
    pub difficulty: Difficulty,
    /// Category for UI grouping (e.g., "Combat", "Social")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Display names of attributes this skill derives from.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub linked_attribute_names: Vec<String>,
    pub min_value: i32,
    pub max_value: i32,
    pub base_value: i32,
}

impl GeneratedSkill {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        min_value: i32,
        max_value: i32,
        base_value: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            difficulty: Difficulty::default(),
            category: None,
            linked_attribute_names: Vec::new(),
            min_value,
            max_value,
            base_value,
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_linked_attribute(mut self, attribute_name: impl Into<String>) -> Self {
        self.linked_attribute_names.push(attribute_name.into());
        self
    }

    /// Whether the numeric range invariants hold.
    pub fn range_is_valid(&self) -> bool {
        self.min_value < self.max_value
            && self.min_value <= self.base_value
            && self.base_value <= self.max_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_medium_difficulty() {
        let skill = GeneratedSkill::new("Stealth", "Moving unseen", 1, 10, 5);
        assert_eq!(skill.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_linked_attributes_are_plain_names() {
        let skill = GeneratedSkill::new("Athletics", "Climbing and swimming", 1, 10, 5)
            .with_linked_attribute("Strength")
            .with_linked_attribute("Endurance");
        assert_eq!(skill.linked_attribute_names, vec!["Strength", "Endurance"]);
    }

    #[test]
    fn test_wire_shape() {
        let skill = GeneratedSkill::new("Stealth", "Moving unseen", 1, 10, 5)
            .with_difficulty(Difficulty::Hard)
            .with_linked_attribute("Agility");
        let json = serde_json::to_value(&skill).expect("serialize");
        assert_eq!(json["difficulty"], "hard");
        assert_eq!(json["linkedAttributeNames"][0], "Agility");
    }
}
