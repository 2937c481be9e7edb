//! Retrying decorator for the LLM port.
//!
//! Transient backend failures get exponential backoff with jitter. Retry
//! policy lives entirely at this boundary: the generation orchestrator makes
//! exactly one logical call and falls back if that call fails.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use crate::infrastructure::ports::{LlmError, LlmPort, LlmRequest, LlmResponse};

#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the initial attempt. Zero disables retrying.
    pub max_retries: u32,
    pub base_delay_ms: u64,
    /// Cap on the exponentially growing delay.
    pub max_delay_ms: u64,
    /// Fraction of the delay randomized away in either direction, 0.0 to 1.0.
    pub jitter_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 1000,
            max_delay_ms: 30_000,
            jitter_factor: 0.2,
        }
    }
}

/// Wraps any `LlmPort` with retry-on-transient-failure behavior.
pub struct ResilientLlmClient {
    inner: Arc<dyn LlmPort>,
    config: RetryConfig,
}

impl ResilientLlmClient {
    pub fn new(inner: Arc<dyn LlmPort>, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    /// Delay before retry `attempt` (1-based): exponential with jitter.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let exponential = self
            .config
            .base_delay_ms
            .saturating_mul(2u64.saturating_pow(attempt.saturating_sub(1)));
        let capped = exponential.min(self.config.max_delay_ms);

        let spread = (capped as f64 * self.config.jitter_factor) as i64;
        let millis = if spread > 0 {
            let jitter = rand::thread_rng().gen_range(-spread..=spread);
            (capped as i64 + jitter).max(0) as u64
        } else {
            capped
        };
        Duration::from_millis(millis)
    }

    fn is_transient(error: &LlmError) -> bool {
        match error {
            // Auth failures and rejected requests will not heal on retry.
            LlmError::RequestFailed(msg) => {
                !msg.contains("401")
                    && !msg.contains("403")
                    && !msg.contains("400")
                    && !msg.contains("Invalid")
            }
            // A garbled body can be a dropped connection mid-response.
            LlmError::InvalidResponse(_) => true,
        }
    }
}

#[async_trait]
impl LlmPort for ResilientLlmClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let mut attempt = 0u32;
        loop {
            match self.inner.generate(request.clone()).await {
                Ok(response) => {
                    if attempt > 0 {
                        tracing::info!(attempt = attempt + 1, "LLM request recovered on retry");
                    }
                    return Ok(response);
                }
                Err(error) if !Self::is_transient(&error) => {
                    tracing::error!(%error, "LLM request failed, not retryable");
                    return Err(error);
                }
                Err(error) if attempt >= self.config.max_retries => {
                    tracing::error!(
                        attempts = attempt + 1,
                        %error,
                        "LLM request exhausted its retries"
                    );
                    return Err(error);
                }
                Err(error) => {
                    attempt += 1;
                    let delay = self.backoff_delay(attempt);
                    tracing::warn!(
                        attempt,
                        max_retries = self.config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        %error,
                        "LLM request failed, backing off before retry"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
