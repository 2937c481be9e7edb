//! Entity modules for generated content.

pub mod attribute;
pub mod skill;
pub mod suggestion;
pub mod world;

pub use attribute::GeneratedAttribute;
pub use skill::GeneratedSkill;
pub use suggestion::{SuggestedAttribute, SuggestedSkill, SuggestionSet};
pub use world::{GeneratedWorld, WorldSettings};
