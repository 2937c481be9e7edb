//! Worldgen domain types.
//!
//! Everything the generation pipeline hands to its callers lives here:
//! generated worlds, attributes, skills, suggestion sets, and the static
//! universe context table. These types carry no behavior beyond invariant
//! helpers; normalization and generation logic belong to the engine crate.

pub mod entities;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    GeneratedAttribute, GeneratedSkill, GeneratedWorld, SuggestedAttribute, SuggestedSkill,
    SuggestionSet, WorldSettings,
};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    universe_context_for, Difficulty, GenerationKind, GenerationRequest, ReferenceRelationship,
    UniverseContext,
};
