//! Generated attribute - a numeric character trait produced by the pipeline

use serde::{Deserialize, Serialize};

/// An attribute produced by world generation or description analysis.
///
/// Range invariants (`min_value < max_value`,
/// `min_value <= base_value <= max_value`) are enforced by the engine's
/// normalizer before a value of this type is ever constructed from model
/// output. Hand-authored instances (fallback catalog, tests) must satisfy
/// them directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedAttribute {
    pub name: String,
    pub description: String,
    pub min_value: i32,
    pub max_value: i32,
    pub base_value: i32,
    /// Category for UI grouping (e.g., "Physical", "Mental", "Social")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl GeneratedAttribute {
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
            min_value,
            max_value,
            base_value,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
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
    fn test_range_is_valid() {
        let attr = GeneratedAttribute::new("Strength", "Raw power", 1, 10, 5);
        assert!(attr.range_is_valid());
    }

    #[test]
    fn test_inverted_range_is_invalid() {
        let attr = GeneratedAttribute::new("Strength", "Raw power", 10, 1, 5);
        assert!(!attr.range_is_valid());
    }

    #[test]
    fn test_base_outside_range_is_invalid() {
        let attr = GeneratedAttribute::new("Strength", "Raw power", 1, 10, 12);
        assert!(!attr.range_is_valid());
    }

    #[test]
    fn test_camel_case_wire_shape() {
        let attr = GeneratedAttribute::new("Agility", "Speed and grace", 1, 10, 5)
            .with_category("Physical");
        let json = serde_json::to_value(&attr).expect("serialize");
        assert_eq!(json["minValue"], 1);
        assert_eq!(json["maxValue"], 10);
        assert_eq!(json["baseValue"], 5);
        assert_eq!(json["category"], "Physical");
    }
}
