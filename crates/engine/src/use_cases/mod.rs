//! Use cases - generation orchestration.

pub mod generation;

pub use generation::GenerationUseCases;
