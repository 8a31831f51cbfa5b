//! Mock LLM provider for testing
//!
//! Mock implementation of the LLMProvider trait for use in unit tests
//! only. It is not available in production builds.

#![cfg(test)]

use super::errors::{LLMError, LLMResult};
use super::traits::{LLMProvider, MockProvider};
use super::types::{ContentPart, GenerationConfig, ModelInfo};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock LLM provider with scripted outcomes
#[derive(Clone)]
pub struct MockLLMProvider {
    name: String,
    model: String,
    // One queue keeps responses and errors in submission order, so
    // multi-call pipelines can script a failure mid-sequence.
    script: Arc<Mutex<VecDeque<LLMResult<String>>>>,
    calls: Arc<Mutex<Vec<(Vec<ContentPart>, GenerationConfig, bool)>>>,
    available: bool,
}

impl MockLLMProvider {
    pub fn new() -> Self {
        Self {
            name: "mock".to_string(),
            model: "mock-model".to_string(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            available: true,
        }
    }

    pub fn with_model(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self { name: name.into(), model: model.into(), ..Self::new() }
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

impl Default for MockLLMProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LLMProvider for MockLLMProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn is_available(&self) -> bool {
        self.available
    }

    async fn model_info(&self) -> LLMResult<ModelInfo> {
        if !self.available {
            return Err(LLMError::model_not_found(&self.model));
        }

        Ok(ModelInfo {
            name: self.model.clone(),
            provider: self.name.clone(),
            capabilities: vec!["mock".to_string()],
            max_output_tokens: 2048,
            supports_grounding: true,
            supports_multimodal: true,
        })
    }

    async fn generate(
        &self,
        parts: Vec<ContentPart>,
        config: GenerationConfig,
        use_grounding: bool,
    ) -> LLMResult<String> {
        self.calls.lock().unwrap().push((parts, config, use_grounding));

        match self.script.lock().unwrap().pop_front() {
            Some(outcome) => outcome,
            None => Ok("Mock response".to_string()),
        }
    }
}

#[async_trait]
impl MockProvider for MockLLMProvider {
    async fn push_response(&self, response: &str) {
        self.script.lock().unwrap().push_back(Ok(response.to_string()));
    }

    async fn push_error(&self, error: LLMError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    async fn call_history(&self) -> Vec<(Vec<ContentPart>, GenerationConfig, bool)> {
        self.calls.lock().unwrap().clone()
    }

    async fn clear(&self) {
        self.script.lock().unwrap().clear();
        self.calls.lock().unwrap().clear();
    }
}
