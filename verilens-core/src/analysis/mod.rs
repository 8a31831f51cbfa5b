//! Response parsing and verdict modeling
//!
//! The parsing engine is a pure function from one raw model-response
//! string to an [`AnalysisResult`]; everything it consults is exposed as
//! [`ParserConfig`]. Presentation helpers derive user-facing labels from
//! the parsed fields.

pub mod config;
pub mod labels;
pub mod parser;
pub mod result;

pub use config::ParserConfig;
pub use labels::{RiskLabel, RiskTier, confidence_label, risk_label};
pub use parser::ResponseParser;
pub use result::{
    AnalysisResult, Classification, ClearCategory, ConfidenceLevel, CrossModalConsistency,
};
