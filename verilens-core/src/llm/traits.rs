//! Traits for LLM provider implementations
//!
//! The provider seam the orchestrator talks through: one call in, one raw
//! text response out. Everything downstream of this trait is offline and
//! deterministic.

use super::errors::LLMResult;
use super::types::{ContentPart, GenerationConfig, ModelInfo};
use async_trait::async_trait;

#[cfg(test)]
use super::errors::LLMError;

/// Core trait for LLM providers
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Get the name of this provider
    fn name(&self) -> &str;

    /// Get the model ID being used
    fn model(&self) -> &str;

    /// Check if the provider is available and configured
    async fn is_available(&self) -> bool;

    /// Get information about the model
    async fn model_info(&self) -> LLMResult<ModelInfo>;

    /// Produce one raw text response for an ordered sequence of content
    /// parts. `use_grounding` requests live web-search augmentation where
    /// the provider supports it.
    async fn generate(
        &self,
        parts: Vec<ContentPart>,
        config: GenerationConfig,
        use_grounding: bool,
    ) -> LLMResult<String>;
}

/// Trait for mock providers used in testing
#[cfg(test)]
#[async_trait]
pub trait MockProvider: LLMProvider {
    /// Queue a response to return, in FIFO order with queued errors
    async fn push_response(&self, response: &str);

    /// Queue an error to return, in FIFO order with queued responses
    async fn push_error(&self, error: LLMError);

    /// Get the history of calls made to this provider
    async fn call_history(&self) -> Vec<(Vec<ContentPart>, GenerationConfig, bool)>;

    /// Clear queued outcomes and the call history
    async fn clear(&self);
}
