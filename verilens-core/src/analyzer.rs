//! Analysis orchestrator
//!
//! Builds mode-specific prompts, invokes the provider, and threads every
//! raw response through the response parser. A provider failure is
//! captured as an error-shaped string and parsed like any other response,
//! so callers always receive a complete (if uninformative) result — the
//! parse path never fails.

use crate::analysis::{AnalysisResult, ResponseParser};
use crate::llm::prompts::PromptTemplates;
use crate::llm::traits::LLMProvider;
use crate::llm::types::{ContentPart, GenerationConfig};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Caller-supplied image payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageInput {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl ImageInput {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self { mime_type: mime_type.into(), data }
    }

    fn part(&self) -> ContentPart {
        ContentPart::image(self.mime_type.clone(), self.data.clone())
    }
}

/// One item of a batch request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BatchItem {
    Text { content: String },
    Image { image: ImageInput, context: String },
    Multimodal { content: String, image: ImageInput },
}

/// Result of the OCR extraction stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrExtraction {
    pub success: bool,
    pub analysis: String,
}

/// Orchestrates prompt assembly, provider calls, and response parsing.
pub struct ContentAnalyzer {
    provider: Arc<dyn LLMProvider>,
    parser: ResponseParser,
}

impl ContentAnalyzer {
    pub fn new(provider: Arc<dyn LLMProvider>) -> Self {
        Self { provider, parser: ResponseParser::new() }
    }

    pub fn with_parser(provider: Arc<dyn LLMProvider>, parser: ResponseParser) -> Self {
        Self { provider, parser }
    }

    pub fn parser(&self) -> &ResponseParser {
        &self.parser
    }

    /// One provider call with failure captured as an error-shaped string.
    async fn generate_or_error(
        &self,
        stage: &str,
        parts: Vec<ContentPart>,
        config: GenerationConfig,
        use_grounding: bool,
    ) -> String {
        match self.provider.generate(parts, config, use_grounding).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(stage, error = %e, "provider call failed");
                format!("Error in {stage}: {e}")
            }
        }
    }

    /// Analyze text content for authenticity.
    pub async fn analyze_text(&self, text: &str, use_grounding: bool) -> AnalysisResult {
        let raw = self
            .generate_or_error(
                "text analysis",
                vec![ContentPart::text(PromptTemplates::text_analysis(text))],
                GenerationConfig::text_analysis(),
                use_grounding,
            )
            .await;
        self.parser.parse(&raw)
    }

    /// Reverse-image-search assessment, returned raw for the forensics
    /// stage to embed.
    pub async fn reverse_search_analysis(&self, image: &ImageInput, context: &str) -> String {
        self.generate_or_error(
            "reverse image search analysis",
            vec![ContentPart::text(PromptTemplates::reverse_search(context)), image.part()],
            GenerationConfig::reverse_search(),
            false,
        )
        .await
    }

    /// Extract visible text and key topics from an image.
    pub async fn extract_text_from_image(&self, image: &ImageInput) -> OcrExtraction {
        match self
            .provider
            .generate(
                vec![ContentPart::text(PromptTemplates::ocr_extraction()), image.part()],
                GenerationConfig::ocr(),
                false,
            )
            .await
        {
            Ok(analysis) => OcrExtraction { success: true, analysis },
            Err(e) => {
                warn!(error = %e, "OCR extraction failed");
                OcrExtraction { success: false, analysis: e.to_string() }
            }
        }
    }

    /// Analyze an image for authenticity and manipulation.
    ///
    /// Three-stage pipeline: reverse-search assessment, OCR extraction,
    /// then a forensics pass that embeds both intermediate raw texts.
    /// Only the final response is parsed; the intermediates ride inside
    /// its prompt.
    pub async fn analyze_image(&self, image: &ImageInput, context: &str) -> AnalysisResult {
        let reverse = self.reverse_search_analysis(image, context).await;
        let ocr = self.extract_text_from_image(image).await;
        let ocr_text = if ocr.success { ocr.analysis } else { "No text detected".to_string() };

        debug!(reverse_len = reverse.len(), ocr_len = ocr_text.len(), "image pipeline complete");

        let raw = self
            .generate_or_error(
                "image analysis",
                vec![
                    ContentPart::text(PromptTemplates::image_forensics(context, &reverse, &ocr_text)),
                    image.part(),
                ],
                GenerationConfig::image_forensics(),
                false,
            )
            .await;
        self.parser.parse(&raw)
    }

    /// Combined text+image assessment over all gathered evidence.
    pub async fn analyze_multimodal(
        &self,
        text: &str,
        image: &ImageInput,
        use_grounding: bool,
    ) -> AnalysisResult {
        let image_analysis = self.analyze_image(image, text).await;
        let ocr = self.extract_text_from_image(image).await;
        let extracted_text = if ocr.success { ocr.analysis } else { String::new() };

        let raw = self
            .generate_or_error(
                "multimodal analysis",
                vec![
                    ContentPart::text(PromptTemplates::multimodal(
                        text,
                        &image_analysis.raw_analysis,
                        &extracted_text,
                    )),
                    image.part(),
                ],
                GenerationConfig::multimodal(),
                use_grounding,
            )
            .await;
        self.parser.parse(&raw)
    }

    /// Analyze a sequence of items, preserving input order.
    ///
    /// Items are processed sequentially; one item's failure surfaces as
    /// that item's error-shaped result and never aborts the rest.
    pub async fn batch_analyze(
        &self,
        items: Vec<BatchItem>,
        use_grounding: bool,
    ) -> Vec<AnalysisResult> {
        let mut results = Vec::with_capacity(items.len());

        for item in items {
            let result = match item {
                BatchItem::Text { content } => self.analyze_text(&content, use_grounding).await,
                BatchItem::Image { image, context } => self.analyze_image(&image, &context).await,
                BatchItem::Multimodal { content, image } => {
                    self.analyze_multimodal(&content, &image, use_grounding).await
                }
            };
            results.push(result);
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Classification, ClearCategory, ConfidenceLevel};
    use crate::llm::errors::LLMError;
    use crate::llm::mock::MockLLMProvider;
    use crate::llm::traits::MockProvider;

    fn analyzer(provider: &MockLLMProvider) -> ContentAnalyzer {
        ContentAnalyzer::new(Arc::new(provider.clone()))
    }

    fn png() -> ImageInput {
        ImageInput::new("image/png", vec![0x89, 0x50, 0x4e, 0x47])
    }

    #[tokio::test]
    async fn test_analyze_text_parses_response() {
        let provider = MockLLMProvider::new();
        provider
            .push_response("AUTHENTICITY SCORE: 85\nCLASSIFICATION: AUTHENTIC\nCONFIDENCE LEVEL: HIGH")
            .await;

        let result = analyzer(&provider).analyze_text("a claim", true).await;
        assert_eq!(result.score, 85);
        assert_eq!(result.classification, Classification::Authentic);
        assert_eq!(result.clear_category, ClearCategory::Real);
        assert_eq!(result.confidence_level, ConfidenceLevel::High);

        // The prompt embedded the content and grounding was requested.
        let history = provider.call_history().await;
        assert_eq!(history.len(), 1);
        let ContentPart::Text(prompt) = &history[0].0[0] else {
            panic!("expected text part");
        };
        assert!(prompt.contains("a claim"));
        assert!(history[0].2);
    }

    #[tokio::test]
    async fn test_analyze_text_provider_failure_degrades() {
        let provider = MockLLMProvider::new();
        provider.push_error(LLMError::network("connection refused")).await;

        let result = analyzer(&provider).analyze_text("a claim", false).await;
        assert!(result.raw_analysis.starts_with("Error in text analysis:"));
        assert!(result.raw_analysis.contains("connection refused"));
        assert_eq!(result.classification, Classification::Uncertain);
        assert_eq!(result.score, 50);
    }

    #[tokio::test]
    async fn test_analyze_image_runs_three_stages() {
        let provider = MockLLMProvider::new();
        provider.push_response("REVERSE SEARCH ASSESSMENT: no prior matches").await;
        provider.push_response("EXTRACTED_TEXT: BREAKING NEWS").await;
        provider
            .push_response("IMAGE AUTHENTICITY SCORE: 20\nMANIPULATION DETECTED: YES\nfabricated composite")
            .await;

        let result = analyzer(&provider).analyze_image(&png(), "protest photo").await;
        assert_eq!(result.score, 20);
        assert_eq!(result.clear_category, ClearCategory::Fake);

        let history = provider.call_history().await;
        assert_eq!(history.len(), 3);
        // Every stage carries the image part.
        assert!(history.iter().all(|(parts, _, _)| parts.iter().any(ContentPart::is_image)));
        // The forensics prompt embeds both intermediate results.
        let ContentPart::Text(final_prompt) = &history[2].0[0] else {
            panic!("expected text part");
        };
        assert!(final_prompt.contains("no prior matches"));
        assert!(final_prompt.contains("BREAKING NEWS"));
    }

    #[tokio::test]
    async fn test_analyze_image_ocr_failure_reports_no_text() {
        let provider = MockLLMProvider::new();
        provider.push_response("REVERSE SEARCH ASSESSMENT: recycled stock photo").await;
        provider.push_error(LLMError::timeout(std::time::Duration::from_secs(30))).await;
        provider.push_response("IMAGE AUTHENTICITY SCORE: 40").await;

        let result = analyzer(&provider).analyze_image(&png(), "").await;
        assert_eq!(result.score, 40);

        let history = provider.call_history().await;
        let ContentPart::Text(final_prompt) = &history[2].0[0] else {
            panic!("expected text part");
        };
        assert!(final_prompt.contains("No text detected"));
    }

    #[tokio::test]
    async fn test_analyze_multimodal_reports_consistency() {
        let provider = MockLLMProvider::new();
        // Image pipeline: reverse search, OCR, forensics.
        provider.push_response("REVERSE SEARCH ASSESSMENT: matches 2019 coverage").await;
        provider.push_response("EXTRACTED_TEXT: old caption").await;
        provider.push_response("IMAGE AUTHENTICITY SCORE: 55").await;
        // Multimodal: second OCR pass, then the combined call.
        provider.push_response("EXTRACTED_TEXT: old caption").await;
        provider
            .push_response(
                "OVERALL AUTHENTICITY SCORE: 45\nFINAL CLASSIFICATION: SUSPICIOUS\nCROSS_MODAL_CONSISTENCY: INCONSISTENT",
            )
            .await;

        let result = analyzer(&provider).analyze_multimodal("article text", &png(), true).await;
        assert_eq!(result.score, 45);
        assert_eq!(result.classification, Classification::Suspicious);
        assert_eq!(
            result.cross_modal_consistency,
            crate::analysis::CrossModalConsistency::Inconsistent
        );

        let history = provider.call_history().await;
        assert_eq!(history.len(), 5);
        // Only the final combined call carries the grounding flag.
        assert!(history[4].2);
        assert!(!history[0].2);
    }

    #[tokio::test]
    async fn test_batch_preserves_order_through_failures() {
        let provider = MockLLMProvider::new();
        provider.push_response("AUTHENTICITY SCORE: 90\nCLASSIFICATION: AUTHENTIC").await;
        provider.push_error(LLMError::api(500, "backend unavailable")).await;
        provider.push_response("AUTHENTICITY SCORE: 10\nCLASSIFICATION: FAKE").await;

        let items = vec![
            BatchItem::Text { content: "first".to_string() },
            BatchItem::Text { content: "second".to_string() },
            BatchItem::Text { content: "third".to_string() },
        ];
        let results = analyzer(&provider).batch_analyze(items, false).await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].classification, Classification::Authentic);
        assert!(results[1].raw_analysis.starts_with("Error in text analysis:"));
        assert_eq!(results[1].score, 50);
        assert_eq!(results[1].classification, Classification::Uncertain);
        assert_eq!(results[2].classification, Classification::Fake);
    }

    #[tokio::test]
    async fn test_batch_item_json_shape() {
        let item: BatchItem =
            serde_json::from_str(r#"{"type":"text","content":"check this claim"}"#).unwrap();
        assert!(matches!(item, BatchItem::Text { ref content } if content == "check this claim"));
    }
}
