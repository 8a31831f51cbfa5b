//! LLM provider integration
//!
//! The orchestrator talks to hosted models through the [`LLMProvider`]
//! trait: content parts in, one raw text response out. The response text
//! is opaque here; structuring it is the analysis module's job.

pub mod errors;
pub mod gemini;
pub mod mock;
pub mod prompts;
pub mod traits;
pub mod types;

pub use errors::{LLMError, LLMResult};
pub use gemini::{GeminiConfig, GeminiProvider};
pub use prompts::PromptTemplates;
pub use traits::LLMProvider;
pub use types::{ContentPart, GenerationConfig, ModelInfo};
