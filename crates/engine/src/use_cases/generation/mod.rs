//! Generation use cases - the single public entry point per generation kind.
//!
//! The orchestrator sequences prompt building, the LLM call, JSON
//! extraction, schema normalization, and (for worlds) name uniqueness. Every
//! stage failure is caught here and replaced with the fallback catalog
//! entry: callers always receive a structurally valid record, never an
//! error.

pub mod extract;
pub mod fallback;
pub mod names;
pub mod normalize;
pub mod prompts;

use std::sync::Arc;

use worldgen_domain::{GeneratedWorld, GenerationRequest, ReferenceRelationship, SuggestionSet};

use crate::infrastructure::ports::{ChatMessage, LlmError, LlmPort, LlmRequest};

/// Sampling temperature for generation requests.
const GENERATION_TEMPERATURE: f32 = 0.7;

/// Token ceiling for a single generation response.
const GENERATION_MAX_TOKENS: u32 = 2048;

/// Failure taxonomy for the pipeline. Fully recovered inside the
/// orchestrator; callers never see these.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation transport failed: {0}")]
    Transport(#[from] LlmError),
    #[error("no JSON value could be recovered from the model output")]
    Extraction,
    #[error("response failed schema normalization: {0}")]
    Schema(String),
}

/// Orchestrates the generation pipeline over an LLM boundary.
///
/// Holds no mutable state; a single instance can serve concurrent calls.
pub struct GenerationUseCases {
    llm: Arc<dyn LlmPort>,
}

impl GenerationUseCases {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self { llm }
    }

    /// Generate a world grounded in a reference universe.
    ///
    /// Never fails: any pipeline error yields the fallback world, with its
    /// name resolved against `existing_names` like any generated name.
    pub async fn generate_world(
        &self,
        reference: &str,
        relationship: ReferenceRelationship,
        existing_names: &[String],
        suggested_name: Option<&str>,
    ) -> GeneratedWorld {
        let mut request =
            GenerationRequest::world(reference, relationship, existing_names.iter().cloned());
        if let Some(name) = suggested_name {
            request = request.with_suggested_name(name);
        }

        match self.try_generate_world(&request).await {
            Ok(world) => world,
            Err(error) => {
                tracing::warn!(%error, reference, "world generation failed, substituting fallback");
                let mut world = fallback::fallback_world();
                world.name = names::resolve_unique_name(&world.name, &request.existing_names);
                world
            }
        }
    }

    /// Derive advisory attribute/skill suggestions from a free-text world
    /// description. Never fails: any pipeline error yields the fallback
    /// suggestion set.
    pub async fn analyze_description(&self, description: &str) -> SuggestionSet {
        let request = GenerationRequest::suggestion_set(description);

        match self.try_analyze(&request).await {
            Ok(set) => set,
            Err(error) => {
                tracing::warn!(%error, "description analysis failed, substituting fallback");
                fallback::fallback_suggestions()
            }
        }
    }

    async fn try_generate_world(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedWorld, GenerationError> {
        let prompt = prompts::build_world_prompt(request);
        let response = self.llm.generate(self.llm_request(prompt)).await?;

        let value =
            extract::extract_json(&response.content).ok_or(GenerationError::Extraction)?;
        let mut world = normalize::normalize_world(value, request)?;
        world.name = names::resolve_unique_name(&world.name, &request.existing_names);

        tracing::debug!(
            world = %world.name,
            attributes = world.attributes.len(),
            skills = world.skills.len(),
            "world generated"
        );
        Ok(world)
    }

    async fn try_analyze(
        &self,
        request: &GenerationRequest,
    ) -> Result<SuggestionSet, GenerationError> {
        let description = request.description.as_deref().unwrap_or_default();
        let prompt = prompts::build_suggestion_prompt(description);
        let response = self.llm.generate(self.llm_request(prompt)).await?;

        let value =
            extract::extract_json(&response.content).ok_or(GenerationError::Extraction)?;
        let set = normalize::normalize_suggestions(value)?;

        tracing::debug!(
            attributes = set.attributes.len(),
            skills = set.skills.len(),
            "description analyzed"
        );
        Ok(set)
    }

    fn llm_request(&self, prompt: String) -> LlmRequest {
        LlmRequest::new(vec![ChatMessage::user(prompt)])
            .with_system_prompt(prompts::GENERATION_SYSTEM_PROMPT)
            .with_temperature(GENERATION_TEMPERATURE)
            .with_max_tokens(GENERATION_MAX_TOKENS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    use crate::infrastructure::ports::{LlmResponse, MockLlmPort};

    /// Mock LLM that always returns the same text.
    struct ScriptedLlm {
        content: String,
    }

    impl ScriptedLlm {
        fn new(content: impl Into<String>) -> Self {
            Self {
                content: content.into(),
            }
        }

        fn json(value: serde_json::Value) -> Self {
            Self::new(value.to_string())
        }
    }

    #[async_trait]
    impl LlmPort for ScriptedLlm {
        async fn generate(&self, _request: LlmRequest) -> Result<LlmResponse, LlmError> {
            Ok(LlmResponse::text(self.content.clone()))
        }
    }

    /// Mock LLM that always rejects with a transport error.
    struct FailingLlm;

    #[async_trait]
    impl LlmPort for FailingLlm {
        async fn generate(&self, _request: LlmRequest) -> Result<LlmResponse, LlmError> {
            Err(LlmError::RequestFailed("connection refused".to_string()))
        }
    }

    fn use_cases(llm: impl LlmPort + 'static) -> GenerationUseCases {
        GenerationUseCases::new(Arc::new(llm))
    }

    fn valid_world_payload() -> serde_json::Value {
        json!({
            "name": "Atlantis",
            "theme": "Mythic",
            "description": "A drowned empire beneath the waves.",
            "attributes": [
                {"name": "Strength", "description": "Raw power"},
                {"name": "Lorecraft", "description": "Knowledge of the deep", "minValue": 2, "maxValue": 8}
            ],
            "skills": [
                {"name": "Swimming", "description": "Moving through water", "linkedAttributeNames": ["Strength"]},
                {"name": "Tide Reading", "description": "Predicting currents", "difficulty": "hard"}
            ]
        })
    }

    // ------------------------------------------------------------------
    // Total-function guarantee
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_generate_world_resolves_when_client_always_fails() {
        let pipeline = use_cases(FailingLlm);
        let world = pipeline
            .generate_world("Dune", ReferenceRelationship::BasedOn, &[], None)
            .await;

        assert!(!world.name.is_empty());
        assert!(!world.attributes.is_empty());
        assert!(!world.skills.is_empty());
        assert!(world.attributes.iter().all(|a| a.range_is_valid()));
        assert!(world.skills.iter().all(|s| s.range_is_valid()));
    }

    #[tokio::test]
    async fn test_analyze_description_resolves_when_client_always_fails() {
        let pipeline = use_cases(FailingLlm);
        let set = pipeline.analyze_description("A quiet village").await;

        assert!(!set.attributes.is_empty());
        assert!(!set.skills.is_empty());
        assert!(set.all_pending());
    }

    #[tokio::test]
    async fn test_garbage_text_routes_to_fallback() {
        let pipeline = use_cases(ScriptedLlm::new("I'm sorry, I cannot help with that."));
        let set = pipeline.analyze_description("A quiet village").await;
        assert_eq!(set, fallback::fallback_suggestions());
    }

    #[tokio::test]
    async fn test_empty_response_routes_to_fallback() {
        let pipeline = use_cases(ScriptedLlm::new(""));
        let set = pipeline.analyze_description("A quiet village").await;
        assert_eq!(set, fallback::fallback_suggestions());
    }

    #[tokio::test]
    async fn test_payload_missing_skills_routes_to_fallback() {
        let pipeline = use_cases(ScriptedLlm::json(json!({
            "name": "Halfmade", "attributes": []
        })));
        let world = pipeline
            .generate_world("Dune", ReferenceRelationship::BasedOn, &[], None)
            .await;
        assert_eq!(world.name, fallback::fallback_world().name);
    }

    // ------------------------------------------------------------------
    // Range invariants on the generated path
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_generated_records_always_satisfy_range_invariants() {
        let pipeline = use_cases(ScriptedLlm::json(json!({
            "name": "Brokenia",
            "attributes": [
                {"name": "Inverted", "minValue": 9, "maxValue": 2, "defaultValue": 50},
                {"name": "Missing"},
                {"name": "Saturated", "minValue": 2, "maxValue": 3000000000.0}
            ],
            "skills": [
                {"name": "Overflow", "minValue": 1, "maxValue": 4, "defaultValue": 99},
                {"name": "Bottomless", "minValue": -3000000000.0, "maxValue": 3000000000.0}
            ]
        })));
        let world = pipeline
            .generate_world("Dune", ReferenceRelationship::BasedOn, &[], None)
            .await;

        assert!(world.attributes.iter().all(|a| a.range_is_valid()));
        assert!(world.skills.iter().all(|s| s.range_is_valid()));
    }

    // ------------------------------------------------------------------
    // Name uniqueness
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_colliding_world_name_gets_numeric_suffix() {
        let pipeline = use_cases(ScriptedLlm::json(valid_world_payload()));
        let existing = vec!["Atlantis".to_string()];
        let world = pipeline
            .generate_world("Dune", ReferenceRelationship::BasedOn, &existing, None)
            .await;
        assert_eq!(world.name, "Atlantis 1");
    }

    #[tokio::test]
    async fn test_suffix_increments_until_free() {
        let pipeline = use_cases(ScriptedLlm::json(valid_world_payload()));
        let existing = vec!["Atlantis".to_string(), "Atlantis 1".to_string()];
        let world = pipeline
            .generate_world("Dune", ReferenceRelationship::BasedOn, &existing, None)
            .await;
        assert_eq!(world.name, "Atlantis 2");
    }

    #[tokio::test]
    async fn test_fallback_world_name_also_respects_existing_names() {
        let pipeline = use_cases(FailingLlm);
        let fallback_name = fallback::fallback_world().name;
        let existing = vec![fallback_name.clone()];
        let world = pipeline
            .generate_world("Dune", ReferenceRelationship::BasedOn, &existing, None)
            .await;
        assert_eq!(world.name, format!("{fallback_name} 1"));
    }

    // ------------------------------------------------------------------
    // Fallback determinism and acceptance defaults
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_fallback_content_is_identical_across_calls() {
        let pipeline = use_cases(FailingLlm);
        let first = pipeline.analyze_description("anything").await;
        let second = pipeline.analyze_description("anything").await;

        assert_eq!(first, second);
        let first_json = serde_json::to_string(&first).expect("serialize");
        let second_json = serde_json::to_string(&second).expect("serialize");
        assert_eq!(first_json, second_json);
    }

    #[tokio::test]
    async fn test_suggestions_are_pending_even_when_model_claims_acceptance() {
        let pipeline = use_cases(ScriptedLlm::json(json!({
            "attributes": [{"name": "Wits", "accepted": true}],
            "skills": [{"name": "Haggling", "accepted": true}]
        })));
        let set = pipeline.analyze_description("A merchant republic").await;
        assert!(set.all_pending());
    }

    // ------------------------------------------------------------------
    // Scenarios
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_valid_payload_yields_exactly_its_suggestions() {
        let pipeline = use_cases(ScriptedLlm::json(json!({
            "attributes": [
                {"name": "Arcana", "description": "Command of magic"},
                {"name": "Valor", "description": "Courage under fire"}
            ],
            "skills": [
                {"name": "Spellcraft", "description": "Shaping spells"},
                {"name": "Dragon Lore", "description": "Knowledge of wyrms"}
            ]
        })));
        let set = pipeline
            .analyze_description("A fantasy world with magic and dragons")
            .await;

        assert_eq!(set.attributes.len(), 2);
        assert_eq!(set.skills.len(), 2);
        assert_eq!(set.attributes[0].attribute.name, "Arcana");
        assert_eq!(set.skills[1].skill.name, "Dragon Lore");
        assert!(set.all_pending());
    }

    #[tokio::test]
    async fn test_network_failure_yields_catalog_suggestion_set() {
        let pipeline = use_cases(FailingLlm);
        let set = pipeline.analyze_description("A fantasy world").await;

        assert_eq!(set.attributes.len(), 6);
        assert_eq!(set.skills.len(), 12);
        assert_eq!(set.attributes[0].attribute.name, "Strength");
        assert_eq!(set.skills[0].skill.name, "Combat");
    }

    #[tokio::test]
    async fn test_set_in_world_keeps_the_references_genre() {
        let pipeline = use_cases(ScriptedLlm::json(json!({
            "name": "Scranton Branch",
            "theme": "Modern",
            "description": "A paper company office where every day is a quiet battle.",
            "attributes": [
                {"name": "Diligence", "description": "Sustained focus on tedious work"},
                {"name": "Tact", "description": "Navigating office politics"}
            ],
            "skills": [
                {"name": "Sales Calls", "description": "Closing paper deals", "linkedAttributeNames": ["Tact"]},
                {"name": "Spreadsheets", "description": "Taming accounting software", "linkedAttributeNames": ["Diligence"]}
            ]
        })));
        let world = pipeline
            .generate_world("The Office", ReferenceRelationship::SetIn, &[], None)
            .await;

        assert_eq!(world.theme, "Modern");
        let fantasy_terms = ["magic", "dragon", "wizard", "sword"];
        for skill in &world.skills {
            let lowered = format!("{} {}", skill.name, skill.description).to_lowercase();
            assert!(
                fantasy_terms.iter().all(|t| !lowered.contains(t)),
                "fantasy vocabulary leaked into skill '{}'",
                skill.name
            );
        }
    }

    // ------------------------------------------------------------------
    // Request plumbing
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_prompt_sent_to_client_embeds_avoid_list_and_system_prompt() {
        let mut mock = MockLlmPort::new();
        mock.expect_generate()
            .withf(|request: &LlmRequest| {
                let prompt = &request.messages[0].content;
                prompt.contains("Atlantis")
                    && request
                        .system_prompt
                        .as_deref()
                        .is_some_and(|s| s.contains("single JSON object"))
            })
            .returning(|_| Ok(LlmResponse::text(valid_world_payload().to_string())));

        let pipeline = GenerationUseCases::new(Arc::new(mock));
        let existing = vec!["Atlantis".to_string()];
        let world = pipeline
            .generate_world("Dune", ReferenceRelationship::BasedOn, &existing, None)
            .await;
        assert_eq!(world.name, "Atlantis 1");
    }

    #[tokio::test]
    async fn test_fenced_response_is_accepted() {
        let payload = valid_world_payload().to_string();
        let pipeline = use_cases(ScriptedLlm::new(format!(
            "Here you go!\n```json\n{payload}\n```\nLet me know if you need changes."
        )));
        let world = pipeline
            .generate_world("Dune", ReferenceRelationship::BasedOn, &[], None)
            .await;
        assert_eq!(world.name, "Atlantis");
        assert_eq!(world.theme, "Mythic");
        assert_eq!(world.settings.max_attributes, 2);
        assert_eq!(world.settings.max_skills, 2);
    }
}
