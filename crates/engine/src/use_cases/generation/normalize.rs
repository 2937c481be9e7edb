//! Schema normalization - loose model output onto strict domain records
//!
//! The extracted JSON value is never trusted. Missing numeric bounds get
//! conventional defaults, base values get derived defaults, difficulty is
//! coerced into its closed set, unknown fields are dropped, and the
//! `accepted` flag on suggestions is forced to false. A payload missing its
//! `attributes` or `skills` list is rejected outright: a response without
//! either list cannot be trusted as structurally valid.

use serde::Deserialize;

use worldgen_domain::{
    Difficulty, GeneratedAttribute, GeneratedSkill, GeneratedWorld, GenerationRequest,
    SuggestedAttribute, SuggestedSkill, SuggestionSet,
};

use super::GenerationError;

/// Fallback display name for a world the model left unnamed.
const UNNAMED_WORLD: &str = "Unnamed World";

/// Fallback theme for a world the model left without one.
const DEFAULT_THEME: &str = "Adventure";

/// Default value ranges and base-value rules per entity class.
///
/// World entities and suggested attributes take the floor midpoint of the
/// resolved range as their base; suggested skills take a fixed constant.
/// The two defaults are intentionally independent and must not be unified.
#[derive(Debug, Clone, Copy)]
enum EntityClass {
    WorldAttribute,
    WorldSkill,
    SuggestedAttribute,
    SuggestedSkill,
}

impl EntityClass {
    fn default_range(self) -> (i32, i32) {
        match self {
            Self::WorldAttribute | Self::WorldSkill | Self::SuggestedAttribute => (1, 10),
            Self::SuggestedSkill => (1, 5),
        }
    }

    fn default_base(self, min: i32, max: i32) -> i32 {
        match self {
            Self::WorldAttribute | Self::WorldSkill | Self::SuggestedAttribute => {
                midpoint(min, max)
            }
            Self::SuggestedSkill => 5,
        }
    }
}

/// Floor of `(min + max) / 2`, correct for negative bounds too.
///
/// Widened to i64: bounds saturated to the i32 limits would overflow the
/// sum otherwise.
fn midpoint(min: i32, max: i32) -> i32 {
    (i64::from(min) + i64::from(max)).div_euclid(2) as i32
}

/// Resolve a raw min/max pair, repairing inverted or missing bounds.
fn resolve_range(min: Option<i32>, max: Option<i32>, class: EntityClass) -> (i32, i32) {
    let (default_min, default_max) = class.default_range();
    let min = min.unwrap_or(default_min);
    let max = max.unwrap_or(default_max);
    if min >= max {
        (default_min, default_max)
    } else {
        (min, max)
    }
}

/// Resolve a base value: derived default when absent, clamped into range.
fn resolve_base(base: Option<i32>, min: i32, max: i32, class: EntityClass) -> i32 {
    base.unwrap_or_else(|| class.default_base(min, max))
        .clamp(min, max)
}

// =============================================================================
// Wire types (the model-facing JSON contract)
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWorld {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    theme: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    attributes: Option<Vec<RawAttribute>>,
    #[serde(default)]
    skills: Option<Vec<RawSkill>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSuggestions {
    #[serde(default)]
    attributes: Option<Vec<RawAttribute>>,
    #[serde(default)]
    skills: Option<Vec<RawSkill>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAttribute {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    min_value: Option<f64>,
    #[serde(default)]
    max_value: Option<f64>,
    #[serde(default)]
    default_value: Option<f64>,
    #[serde(default)]
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSkill {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    linked_attribute_names: Option<Vec<String>>,
    #[serde(default)]
    min_value: Option<f64>,
    #[serde(default)]
    max_value: Option<f64>,
    #[serde(default)]
    default_value: Option<f64>,
}

fn to_i32(value: Option<f64>) -> Option<i32> {
    value.filter(|v| v.is_finite()).map(|v| v.floor() as i32)
}

// =============================================================================
// Normalization
// =============================================================================

/// Normalize an extracted world payload against the originating request.
pub fn normalize_world(
    value: serde_json::Value,
    request: &GenerationRequest,
) -> Result<GeneratedWorld, GenerationError> {
    let raw: RawWorld = serde_json::from_value(value)
        .map_err(|e| GenerationError::Schema(format!("world payload: {e}")))?;

    let raw_attributes = raw
        .attributes
        .ok_or_else(|| GenerationError::Schema("missing attributes list".to_string()))?;
    let raw_skills = raw
        .skills
        .ok_or_else(|| GenerationError::Schema("missing skills list".to_string()))?;

    let attributes: Vec<GeneratedAttribute> = raw_attributes
        .into_iter()
        .map(|a| normalize_attribute(a, EntityClass::WorldAttribute))
        .collect();
    let skills: Vec<GeneratedSkill> = raw_skills
        .into_iter()
        .map(|s| normalize_skill(s, EntityClass::WorldSkill))
        .collect();

    let name = non_empty(raw.name)
        .or_else(|| request.suggested_name.clone())
        .unwrap_or_else(|| UNNAMED_WORLD.to_string());
    let theme = non_empty(raw.theme).unwrap_or_else(|| DEFAULT_THEME.to_string());
    let description = non_empty(raw.description).unwrap_or_default();

    Ok(GeneratedWorld::assemble(
        name,
        theme,
        description,
        attributes,
        skills,
    ))
}

/// Normalize an extracted suggestion payload. Every suggestion comes out
/// with `accepted == false` regardless of what the raw object carried.
pub fn normalize_suggestions(value: serde_json::Value) -> Result<SuggestionSet, GenerationError> {
    let raw: RawSuggestions = serde_json::from_value(value)
        .map_err(|e| GenerationError::Schema(format!("suggestion payload: {e}")))?;

    let raw_attributes = raw
        .attributes
        .ok_or_else(|| GenerationError::Schema("missing attributes list".to_string()))?;
    let raw_skills = raw
        .skills
        .ok_or_else(|| GenerationError::Schema("missing skills list".to_string()))?;

    let attributes = raw_attributes
        .into_iter()
        .map(|a| SuggestedAttribute::pending(normalize_attribute(a, EntityClass::SuggestedAttribute)))
        .collect();
    let skills = raw_skills
        .into_iter()
        .map(|s| SuggestedSkill::pending(normalize_skill(s, EntityClass::SuggestedSkill)))
        .collect();

    Ok(SuggestionSet::new(attributes, skills))
}

fn normalize_attribute(raw: RawAttribute, class: EntityClass) -> GeneratedAttribute {
    let (min, max) = resolve_range(to_i32(raw.min_value), to_i32(raw.max_value), class);
    let base = resolve_base(to_i32(raw.default_value), min, max, class);

    let mut attribute = GeneratedAttribute::new(
        non_empty(raw.name).unwrap_or_default(),
        non_empty(raw.description).unwrap_or_default(),
        min,
        max,
        base,
    );
    if let Some(category) = non_empty(raw.category) {
        attribute = attribute.with_category(category);
    }
    attribute
}

fn normalize_skill(raw: RawSkill, class: EntityClass) -> GeneratedSkill {
    let (min, max) = resolve_range(to_i32(raw.min_value), to_i32(raw.max_value), class);
    let base = resolve_base(to_i32(raw.default_value), min, max, class);

    let mut skill = GeneratedSkill::new(
        non_empty(raw.name).unwrap_or_default(),
        non_empty(raw.description).unwrap_or_default(),
        min,
        max,
        base,
    )
    .with_difficulty(Difficulty::from_wire(raw.difficulty.as_deref()));

    if let Some(category) = non_empty(raw.category) {
        skill = skill.with_category(category);
    }
    for name in raw.linked_attribute_names.unwrap_or_default() {
        if !name.trim().is_empty() {
            skill = skill.with_linked_attribute(name);
        }
    }
    skill
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
