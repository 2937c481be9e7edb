//! Generation request - the immutable input to a pipeline call

use std::collections::HashSet;

/// Which kind of record a generation call produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    World,
    SuggestionSet,
}

/// How generated content relates to its reference universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceRelationship {
    /// Content exists literally inside the reference's continuity.
    SetIn,
    /// Content is original, merely inspired by the reference.
    BasedOn,
}

impl ReferenceRelationship {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SetIn => "set in",
            Self::BasedOn => "based on",
        }
    }
}

/// Immutable input to a single generation call.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub kind: GenerationKind,
    /// Name of the source universe, when generation is grounded in one.
    pub reference: Option<String>,
    pub relationship: Option<ReferenceRelationship>,
    /// Names the generated world must not collide with.
    pub existing_names: HashSet<String>,
    /// A name to adopt verbatim when feasible.
    pub suggested_name: Option<String>,
    /// Free-text world description. Required for the suggestion-set kind.
    pub description: Option<String>,
}

impl GenerationRequest {
    /// Build a world-generation request.
    pub fn world(
        reference: impl Into<String>,
        relationship: ReferenceRelationship,
        existing_names: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            kind: GenerationKind::World,
            reference: Some(reference.into()),
            relationship: Some(relationship),
            existing_names: existing_names.into_iter().collect(),
            suggested_name: None,
            description: None,
        }
    }

    /// Build a suggestion-set request from a free-text description.
    pub fn suggestion_set(description: impl Into<String>) -> Self {
        Self {
            kind: GenerationKind::SuggestionSet,
            reference: None,
            relationship: None,
            existing_names: HashSet::new(),
            suggested_name: None,
            description: Some(description.into()),
        }
    }

    pub fn with_suggested_name(mut self, name: impl Into<String>) -> Self {
        self.suggested_name = Some(name.into());
        self
    }
}
