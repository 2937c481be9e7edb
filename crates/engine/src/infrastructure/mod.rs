//! Infrastructure - ports and adapters for external services.

pub mod ollama;
pub mod ports;
pub mod resilient_llm;

pub use ollama::OllamaClient;
pub use ports::{ChatMessage, LlmError, LlmPort, LlmRequest, LlmResponse, MessageRole};
pub use resilient_llm::{ResilientLlmClient, RetryConfig};
