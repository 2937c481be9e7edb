//! Generated world - the top-level record produced by world generation

use serde::{Deserialize, Serialize};

use super::{GeneratedAttribute, GeneratedSkill};

/// Default attribute point pool for a freshly generated world.
pub const DEFAULT_ATTRIBUTE_POINTS: i32 = 27;

/// Default skill point pool for a freshly generated world.
pub const DEFAULT_SKILL_POINTS: i32 = 20;

/// Structural limits and point pools derived from generated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldSettings {
    /// Capped to the number of generated attributes.
    pub max_attributes: usize,
    /// Capped to the number of generated skills.
    pub max_skills: usize,
    pub attribute_points: i32,
    pub skill_points: i32,
}

/// A complete world definition produced by the generation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedWorld {
    pub name: String,
    pub theme: String,
    pub description: String,
    pub attributes: Vec<GeneratedAttribute>,
    pub skills: Vec<GeneratedSkill>,
    pub settings: WorldSettings,
}

impl GeneratedWorld {
    /// Assemble a world, deriving settings from the content lists.
    pub fn assemble(
        name: impl Into<String>,
        theme: impl Into<String>,
        description: impl Into<String>,
        attributes: Vec<GeneratedAttribute>,
        skills: Vec<GeneratedSkill>,
    ) -> Self {
        let settings = WorldSettings {
            max_attributes: attributes.len(),
            max_skills: skills.len(),
            attribute_points: DEFAULT_ATTRIBUTE_POINTS,
            skill_points: DEFAULT_SKILL_POINTS,
        };
        Self {
            name: name.into(),
            theme: theme.into(),
            description: description.into(),
            attributes,
            skills,
            settings,
        }
    }
}
