//! Common types for LLM providers
//!
//! Core types shared by provider implementations: the content parts of a
//! multimodal request, per-call generation settings, and model metadata.

use serde::{Deserialize, Serialize};

/// One piece of request content. A request is an ordered sequence of
/// parts; multimodal requests interleave text and inline image data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ContentPart {
    Text(String),
    InlineImage { mime_type: String, data: Vec<u8> },
}

impl ContentPart {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn image(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self::InlineImage { mime_type: mime_type.into(), data }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::InlineImage { .. })
    }
}

/// Options for a single generation request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: usize,
    pub top_p: f32,
    pub top_k: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { temperature: 0.2, max_output_tokens: 2048, top_p: 0.8, top_k: 40 }
    }
}

impl GenerationConfig {
    /// Near-deterministic settings for text fact-checking.
    pub fn text_analysis() -> Self {
        Self { temperature: 0.05, max_output_tokens: 2500, ..Self::default() }
    }

    /// Settings for reverse-image-search assessment.
    pub fn reverse_search() -> Self {
        Self { temperature: 0.05, max_output_tokens: 2000, ..Self::default() }
    }

    /// Settings for OCR text extraction.
    pub fn ocr() -> Self {
        Self { temperature: 0.1, max_output_tokens: 1500, ..Self::default() }
    }

    /// Settings for the final image-forensics pass.
    pub fn image_forensics() -> Self {
        Self { max_output_tokens: 3000, ..Self::default() }
    }

    /// Settings for the combined text+image assessment.
    pub fn multimodal() -> Self {
        Self { temperature: 0.05, max_output_tokens: 3500, ..Self::default() }
    }
}

/// Model information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub provider: String,
    pub capabilities: Vec<String>,
    pub max_output_tokens: usize,
    pub supports_grounding: bool,
    pub supports_multimodal: bool,
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: usize,
    pub completion_tokens: usize,
    pub total_tokens: usize,
}
