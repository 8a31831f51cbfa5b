//! Gemini provider over the hosted generateContent API
//!
//! Implements [`LLMProvider`] against Google's generative language
//! endpoint: text and inline-image parts, per-call generation settings,
//! and optional search grounding. The API key is read from an environment
//! variable named in the config so deployments never write keys to disk.

use super::errors::{LLMError, LLMResult};
use super::traits::LLMProvider;
use super::types::{ContentPart, GenerationConfig, ModelInfo};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Configuration for the Gemini provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub model: String,
    pub base_url: String,
    pub api_key_env: String,
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash-exp".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            timeout_secs: 60,
        }
    }
}

/// Provider backed by the hosted Gemini API
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> LLMResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LLMError::config(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Provider with the default model and endpoint.
    pub fn from_env() -> LLMResult<Self> {
        Self::new(GeminiConfig::default())
    }

    fn api_key(&self) -> LLMResult<String> {
        std::env::var(&self.config.api_key_env)
            .map_err(|_| LLMError::auth(format!("{} is not set", self.config.api_key_env)))
    }

    fn build_request(
        &self,
        parts: Vec<ContentPart>,
        config: GenerationConfig,
        use_grounding: bool,
    ) -> GenerateContentRequest {
        let parts = parts
            .into_iter()
            .map(|part| match part {
                ContentPart::Text(text) => PartBody { text: Some(text), inline_data: None },
                ContentPart::InlineImage { mime_type, data } => PartBody {
                    text: None,
                    inline_data: Some(InlineData { mime_type, data: BASE64.encode(data) }),
                },
            })
            .collect();

        GenerateContentRequest {
            contents: vec![ContentBody { parts }],
            generation_config: GenerationConfigBody {
                temperature: config.temperature,
                max_output_tokens: config.max_output_tokens,
                top_p: config.top_p,
                top_k: config.top_k,
            },
            tools: use_grounding
                .then(|| vec![ToolBody { google_search: serde_json::json!({}) }]),
        }
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn is_available(&self) -> bool {
        std::env::var(&self.config.api_key_env).is_ok()
    }

    async fn model_info(&self) -> LLMResult<ModelInfo> {
        Ok(ModelInfo {
            name: self.config.model.clone(),
            provider: self.name().to_string(),
            capabilities: vec![
                "Advanced text analysis".to_string(),
                "Image forensics".to_string(),
                "Multimodal reasoning".to_string(),
                "Real-time grounding".to_string(),
                "OCR text extraction".to_string(),
                "Reverse image search analysis".to_string(),
            ],
            max_output_tokens: 3500,
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
        let api_key = self.api_key()?;
        let request = self.build_request(parts, config, use_grounding);
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        debug!(model = %self.config.model, grounding = use_grounding, "sending generate request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => LLMError::auth(message),
                404 => LLMError::model_not_found(&self.config.model),
                429 => LLMError::rate_limit(message, None),
                code => LLMError::api(code, message),
            });
        }

        let body: GenerateContentResponse = response.json().await?;

        let candidate = body
            .candidates
            .and_then(|mut candidates| {
                if candidates.is_empty() { None } else { Some(candidates.remove(0)) }
            })
            .ok_or_else(|| LLMError::provider(self.name(), "response carried no candidates"))?;

        if candidate.finish_reason.as_deref() == Some("SAFETY") {
            return Err(LLMError::content_filtered("candidate blocked by safety settings"));
        }

        let text: String = candidate
            .content
            .map(|content| {
                content.parts.into_iter().filter_map(|part| part.text).collect::<Vec<_>>().join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(LLMError::provider(self.name(), "candidate carried no text"));
        }

        Ok(text)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<ContentBody>,
    generation_config: GenerationConfigBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<ToolBody>>,
}

#[derive(Debug, Serialize)]
struct ContentBody {
    parts: Vec<PartBody>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PartBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfigBody {
    temperature: f32,
    max_output_tokens: usize,
    top_p: f32,
    top_k: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolBody {
    google_search: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<CandidateBody>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CandidateBody {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<PartBody>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization_with_grounding() {
        let provider = GeminiProvider::new(GeminiConfig::default()).unwrap();
        let request = provider.build_request(
            vec![ContentPart::text("check this"), ContentPart::image("image/png", vec![0, 1])],
            GenerationConfig::multimodal(),
            true,
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "check this");
        assert_eq!(json["contents"][0]["parts"][1]["inlineData"]["mimeType"], "image/png");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 3500);
        assert!(json["tools"][0]["googleSearch"].is_object());
    }

    #[test]
    fn test_request_omits_tools_without_grounding() {
        let provider = GeminiProvider::new(GeminiConfig::default()).unwrap();
        let request =
            provider.build_request(vec![ContentPart::text("hi")], GenerationConfig::default(), false);

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("tools").is_none());
    }

    #[test]
    fn test_response_text_extraction_shape() {
        let body: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"AUTHENTICITY SCORE: 80"}]},"finishReason":"STOP"}]}"#,
        )
        .unwrap();
        let candidate = &body.candidates.unwrap()[0];
        assert_eq!(
            candidate.content.as_ref().unwrap().parts[0].text.as_deref(),
            Some("AUTHENTICITY SCORE: 80")
        );
    }
}
