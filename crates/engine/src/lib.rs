//! Worldgen Engine library.
//!
//! This crate contains the structured-content generation pipeline:
//! prompt building, the LLM boundary and its adapters, response extraction,
//! schema normalization, and the orchestrating use cases.
//!
//! ## Structure
//!
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `use_cases/` - Generation orchestration

pub mod infrastructure;
pub mod use_cases;

pub use use_cases::generation::GenerationUseCases;
