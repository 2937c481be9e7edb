//! Suggestion set - advisory content awaiting reviewer approval
//!
//! Suggestions are never persisted by the pipeline. The `accepted` flag is
//! always initialized to `false`; flipping it is a human decision made
//! downstream, never inferred from model output.

use serde::{Deserialize, Serialize};

use super::{GeneratedAttribute, GeneratedSkill};

/// An attribute suggestion pending reviewer approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedAttribute {
    #[serde(flatten)]
    pub attribute: GeneratedAttribute,
    pub accepted: bool,
}

impl SuggestedAttribute {
    /// Wrap an attribute as a pending suggestion. `accepted` is always false.
    pub fn pending(attribute: GeneratedAttribute) -> Self {
        Self {
            attribute,
            accepted: false,
        }
    }
}

/// A skill suggestion pending reviewer approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedSkill {
    #[serde(flatten)]
    pub skill: GeneratedSkill,
    pub accepted: bool,
}

impl SuggestedSkill {
    /// Wrap a skill as a pending suggestion. `accepted` is always false.
    pub fn pending(skill: GeneratedSkill) -> Self {
        Self {
            skill,
            accepted: false,
        }
    }
}

/// Advisory attributes and skills derived from a free-text description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionSet {
    pub attributes: Vec<SuggestedAttribute>,
    pub skills: Vec<SuggestedSkill>,
}

impl SuggestionSet {
    pub fn new(attributes: Vec<SuggestedAttribute>, skills: Vec<SuggestedSkill>) -> Self {
        Self { attributes, skills }
    }

    /// True when every suggestion in the set is still pending approval.
    pub fn all_pending(&self) -> bool {
        self.attributes.iter().all(|a| !a.accepted) && self.skills.iter().all(|s| !s.accepted)
    }
}
