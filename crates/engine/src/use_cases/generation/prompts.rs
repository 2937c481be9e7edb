//! Prompt building for generation requests
//!
//! Pure string construction: no network and no parsing. Output is fully
//! deterministic given the request and the universe context table.

use worldgen_domain::{
    universe_context_for, GenerationRequest, ReferenceRelationship, UniverseContext,
};

/// How many attributes a suggestion request asks for.
pub const SUGGESTED_ATTRIBUTE_COUNT: usize = 6;

/// How many skills a suggestion request asks for.
pub const SUGGESTED_SKILL_COUNT: usize = 12;

/// System prompt shared by both generation kinds.
pub const GENERATION_SYSTEM_PROMPT: &str = "You are a content generator for a tabletop \
    world-building tool. You respond with a single JSON object and nothing else: no greetings, \
    no commentary, no markdown outside the JSON.";

/// Build the instruction string for a world-generation request.
pub fn build_world_prompt(request: &GenerationRequest) -> String {
    let reference = request.reference.as_deref().unwrap_or("an original setting");
    let context = universe_context_for(reference);

    let mut prompt = String::new();

    prompt.push_str("Generate a complete world definition for a tabletop campaign.\n\n");

    match request.relationship {
        Some(ReferenceRelationship::SetIn) => {
            push_set_in_constraints(&mut prompt, reference, &context);
        }
        Some(ReferenceRelationship::BasedOn) => {
            prompt.push_str(&format!(
                "The world is ORIGINAL but inspired by \"{reference}\". Draw on its genre \
                 ({}) and tone, but the world must be distinct from the source in name, places, \
                 and specifics. Do not reuse names or locations from \"{reference}\".\n\n",
                context.genre
            ));
        }
        None => {
            prompt.push_str("Invent an original setting with a coherent genre and tone.\n\n");
        }
    }

    push_avoid_list(&mut prompt, request);

    if let Some(suggested) = &request.suggested_name {
        prompt.push_str(&format!(
            "Name the world \"{suggested}\" verbatim if it fits the setting.\n\n"
        ));
    }

    prompt.push_str(
        "Include a name, a one-word or short theme, a two-to-three sentence description, \
         4 to 8 attributes, and 8 to 16 skills. Every skill may reference the attributes it \
         derives from by their display names.\n",
    );
    prompt.push_str(WORLD_FORMAT_INSTRUCTIONS);

    prompt
}

/// Build the instruction string for a description-analysis request.
pub fn build_suggestion_prompt(description: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(&format!(
        "Analyze the following world description and propose exactly \
         {SUGGESTED_ATTRIBUTE_COUNT} attributes and {SUGGESTED_SKILL_COUNT} skills that fit it.\n\n"
    ));
    prompt.push_str(&format!("WORLD DESCRIPTION:\n{description}\n\n"));
    prompt.push_str(
        "Attributes are innate numeric traits; skills are learnable capabilities. Keep both \
         lists consistent with the description's genre and technology level. Every skill may \
         reference the attributes it derives from by their display names.\n",
    );
    prompt.push_str(SUGGESTION_FORMAT_INSTRUCTIONS);

    prompt
}

fn push_set_in_constraints(prompt: &mut String, reference: &str, context: &UniverseContext) {
    prompt.push_str(&format!(
        "The world is SET IN the universe of \"{reference}\" and must stay inside its \
         established continuity.\n"
    ));
    prompt.push_str(&format!("GENRE: {}\n", context.genre));
    prompt.push_str(&format!("TECHNOLOGY LEVEL: {}\n", context.tech_level));
    prompt.push_str(&format!("SETTING: {}\n", context.setting));
    prompt.push_str(&format!("TONE: {}\n\n", context.description));

    // Unconstrained models drift toward fantasy tropes no matter what the
    // reference is. The prohibition has to be explicit.
    prompt.push_str(
        "Stay strictly within this genre and technology level. Do NOT default to fantasy: \
         no magic, wizards, dragons, or medieval elements unless the source material itself \
         has them. A contemporary or science-fiction reference must produce contemporary or \
         science-fiction content.\n\n",
    );
}

fn push_avoid_list(prompt: &mut String, request: &GenerationRequest) {
    if request.existing_names.is_empty() {
        prompt.push_str("EXISTING WORLD NAMES TO AVOID: (none)\n\n");
        return;
    }
    // Sorted so the prompt is deterministic for a given request.
    let mut names: Vec<&str> = request.existing_names.iter().map(String::as_str).collect();
    names.sort_unstable();
    prompt.push_str(&format!(
        "EXISTING WORLD NAMES TO AVOID: {}\n\n",
        names.join(", ")
    ));
}

const WORLD_FORMAT_INSTRUCTIONS: &str = r#"
RESPONSE FORMAT:
Respond with exactly one JSON object in this shape:

{
  "name": "string",
  "theme": "string",
  "description": "string",
  "attributes": [
    { "name": "string", "description": "string",
      "minValue": 1, "maxValue": 10, "defaultValue": 5, "category": "string" }
  ],
  "skills": [
    { "name": "string", "description": "string",
      "difficulty": "easy|medium|hard", "category": "string",
      "linkedAttributeNames": ["attribute name"] }
  ]
}
"#;

const SUGGESTION_FORMAT_INSTRUCTIONS: &str = r#"
RESPONSE FORMAT:
Respond with exactly one JSON object in this shape:

{
  "attributes": [
    { "name": "string", "description": "string",
      "minValue": 1, "maxValue": 10, "defaultValue": 5, "category": "string" }
  ],
  "skills": [
    { "name": "string", "description": "string",
      "difficulty": "easy|medium|hard", "category": "string",
      "linkedAttributeNames": ["attribute name"] }
  ]
}
"#;
