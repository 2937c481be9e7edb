//! Fallback catalog - hand-authored substitute content
//!
//! Returned whole whenever any pipeline stage fails. Substitution is always
//! the complete catalog entry, never a merge with partial model output:
//! partial results can violate cross-entity invariants (a skill linked to an
//! attribute that no longer exists), while the catalog is valid by
//! construction. Content is fixed and identical across calls.

use worldgen_domain::{
    Difficulty, GeneratedAttribute, GeneratedSkill, GeneratedWorld, SuggestedAttribute,
    SuggestedSkill, SuggestionSet,
};

/// The default world returned when world generation fails.
pub fn fallback_world() -> GeneratedWorld {
    GeneratedWorld::assemble(
        "New World",
        "Adventure",
        "A frontier land of ruined keeps, wild borderlands, and small towns \
         holding out against the dark.",
        fallback_world_attributes(),
        fallback_world_skills(),
    )
}

/// The default suggestion set returned when description analysis fails.
pub fn fallback_suggestions() -> SuggestionSet {
    let attributes = fallback_suggested_attributes()
        .into_iter()
        .map(SuggestedAttribute::pending)
        .collect();
    let skills = fallback_suggested_skills()
        .into_iter()
        .map(SuggestedSkill::pending)
        .collect();
    SuggestionSet::new(attributes, skills)
}

fn fallback_world_attributes() -> Vec<GeneratedAttribute> {
    core_attributes(1, 10, 5)
}

fn fallback_suggested_attributes() -> Vec<GeneratedAttribute> {
    core_attributes(1, 10, 5)
}

// The six-attribute spread shared by both catalog entries.
fn core_attributes(min: i32, max: i32, base: i32) -> Vec<GeneratedAttribute> {
    vec![
        GeneratedAttribute::new("Strength", "Raw physical power and carrying capacity", min, max, base)
            .with_category("Physical"),
        GeneratedAttribute::new("Agility", "Speed, reflexes, and coordination", min, max, base)
            .with_category("Physical"),
        GeneratedAttribute::new("Endurance", "Stamina, toughness, and resistance to harm", min, max, base)
            .with_category("Physical"),
        GeneratedAttribute::new("Intellect", "Reasoning, memory, and learned knowledge", min, max, base)
            .with_category("Mental"),
        GeneratedAttribute::new("Willpower", "Mental fortitude and force of personality", min, max, base)
            .with_category("Mental"),
        GeneratedAttribute::new("Charisma", "Charm, presence, and social influence", min, max, base)
            .with_category("Social"),
    ]
}

fn fallback_world_skills() -> Vec<GeneratedSkill> {
    fallback_skills(1, 10, 5)
}

fn fallback_suggested_skills() -> Vec<GeneratedSkill> {
    // Suggested skills use the narrow range with the fixed base.
    fallback_skills(1, 5, 5)
}

fn fallback_skills(min: i32, max: i32, base: i32) -> Vec<GeneratedSkill> {
    vec![
        GeneratedSkill::new("Combat", "Fighting with weapons or bare hands", min, max, base)
            .with_category("Combat")
            .with_linked_attribute("Strength"),
        GeneratedSkill::new("Stealth", "Moving silently and staying hidden", min, max, base)
            .with_category("Physical")
            .with_linked_attribute("Agility"),
        GeneratedSkill::new("Perception", "Noticing threats and hidden details", min, max, base)
            .with_category("Mental")
            .with_linked_attribute("Intellect"),
        GeneratedSkill::new("Athletics", "Climbing, swimming, and physical exertion", min, max, base)
            .with_category("Physical")
            .with_linked_attribute("Strength"),
        GeneratedSkill::new("Survival", "Tracking, foraging, and enduring the wilds", min, max, base)
            .with_category("Practical")
            .with_linked_attribute("Endurance"),
        GeneratedSkill::new("Persuasion", "Convincing others through reason or tact", min, max, base)
            .with_category("Social")
            .with_linked_attribute("Charisma"),
        GeneratedSkill::new("Intimidation", "Coercing others through fear", min, max, base)
            .with_category("Social")
            .with_difficulty(Difficulty::Hard)
            .with_linked_attribute("Willpower"),
        GeneratedSkill::new("Medicine", "Treating wounds and illness", min, max, base)
            .with_category("Practical")
            .with_difficulty(Difficulty::Hard)
            .with_linked_attribute("Intellect"),
        GeneratedSkill::new("Crafting", "Making and repairing equipment", min, max, base)
            .with_category("Practical")
            .with_linked_attribute("Intellect"),
        GeneratedSkill::new("Investigation", "Searching for clues and making deductions", min, max, base)
            .with_category("Mental")
            .with_linked_attribute("Intellect"),
        GeneratedSkill::new("Lore", "Knowledge of history, legends, and the arcane", min, max, base)
            .with_category("Mental")
            .with_difficulty(Difficulty::Hard)
            .with_linked_attribute("Intellect"),
        GeneratedSkill::new("Leadership", "Inspiring and directing others", min, max, base)
            .with_category("Social")
            .with_difficulty(Difficulty::Easy)
            .with_linked_attribute("Charisma"),
    ]
}
