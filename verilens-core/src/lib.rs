//! Core functionality for verilens
//!
//! This crate contains the core business logic for the verilens content
//! authenticity tool: the response-parsing engine, the LLM provider
//! layer, and the analysis orchestrator that connects them.

pub mod analysis;
pub mod analyzer;
pub mod llm;

pub use analysis::{
    AnalysisResult, Classification, ClearCategory, ConfidenceLevel, CrossModalConsistency,
    ParserConfig, ResponseParser, confidence_label, risk_label,
};
pub use analyzer::{BatchItem, ContentAnalyzer, ImageInput};
pub use llm::{GeminiConfig, GeminiProvider, LLMError, LLMProvider};
