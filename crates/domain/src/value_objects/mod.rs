//! Value objects for the generation pipeline.

pub mod difficulty;
pub mod request;
pub mod universe;

pub use difficulty::Difficulty;
pub use request::{GenerationKind, GenerationRequest, ReferenceRelationship};
pub use universe::{universe_context_for, UniverseContext};
