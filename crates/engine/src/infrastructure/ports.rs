//! The LLM boundary.
//!
//! `LlmPort` is the only process boundary in the pipeline: one prompt in,
//! one completion out. Everything on the caller side of this trait is pure
//! and deterministic, which is what makes the generation use cases testable
//! without a network.

use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmError {
    /// The request never produced a usable HTTP response.
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    /// The backend answered, but not with anything we can use.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A single completion request.
///
/// Generation is one-shot: there is no conversation to replay, so a request
/// is at most a system prompt plus one user prompt.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    pub messages: Vec<ChatMessage>,
    pub system_prompt: Option<String>,
    /// Sampling temperature, backend default when unset.
    pub temperature: Option<f32>,
    /// Completion token ceiling, backend default when unset.
    pub max_tokens: Option<u32>,
}

impl LlmRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            system_prompt: None,
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    System,
}

/// A completion as handed back to the pipeline.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
    pub finish_reason: FinishReason,
    pub usage: Option<TokenUsage>,
}

impl LlmResponse {
    /// A plain completed response. Used by tests and fixtures.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            finish_reason: FinishReason::Stop,
            usage: None,
        }
    }
}

/// Why the backend stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    /// Hit the token ceiling; the content is probably truncated JSON.
    Length,
    ContentFilter,
    Unknown,
}

#[derive(Debug, Clone)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmPort: Send + Sync {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError>;
}
