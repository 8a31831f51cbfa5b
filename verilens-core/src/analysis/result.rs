//! Structured analysis records
//!
//! The `AnalysisResult` is the sole output entity of the parsing engine.
//! Its serialized field names and enum spellings are a contract with the
//! rendering layer and must not be renamed unilaterally.

use super::config::CategoryThresholds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse model-reported verdict.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Classification {
    Authentic,
    Suspicious,
    Fake,
    Uncertain,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authentic => "AUTHENTIC",
            Self::Suspicious => "SUSPICIOUS",
            Self::Fake => "FAKE",
            Self::Uncertain => "UNCERTAIN",
        }
    }

    /// Parse an upper-cased verdict token from an explicit label.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "AUTHENTIC" => Some(Self::Authentic),
            "SUSPICIOUS" => Some(Self::Suspicious),
            "FAKE" => Some(Self::Fake),
            "UNCERTAIN" => Some(Self::Uncertain),
            _ => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Simplified three-way user-facing verdict.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ClearCategory {
    #[serde(rename = "REAL")]
    Real,
    #[serde(rename = "FAKE")]
    Fake,
    #[serde(rename = "PARTIALLY MANIPULATED")]
    PartiallyManipulated,
}

impl ClearCategory {
    /// Pure function of `(classification, score)`; reads no other field.
    ///
    /// A sub-threshold score forces FAKE regardless of the classification,
    /// and only an AUTHENTIC classification can reach REAL.
    pub fn derive(
        classification: Classification,
        score: u8,
        thresholds: &CategoryThresholds,
    ) -> Self {
        if classification == Classification::Fake || score < thresholds.fake_below {
            Self::Fake
        } else if classification == Classification::Authentic && score >= thresholds.real_min {
            Self::Real
        } else {
            Self::PartiallyManipulated
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Real => "REAL",
            Self::Fake => "FAKE",
            Self::PartiallyManipulated => "PARTIALLY MANIPULATED",
        }
    }
}

impl fmt::Display for ClearCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported model confidence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "HIGH" => Some(Self::High),
            "MEDIUM" => Some(Self::Medium),
            "LOW" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Agreement between text-derived and image-derived assessments.
///
/// Only meaningful for combined text+image analysis; every other mode
/// reports `NotAssessed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CrossModalConsistency {
    #[serde(rename = "CONSISTENT")]
    Consistent,
    #[serde(rename = "PARTIALLY CONSISTENT")]
    PartiallyConsistent,
    #[serde(rename = "INCONSISTENT")]
    Inconsistent,
    #[serde(rename = "Not Assessed")]
    NotAssessed,
}

impl CrossModalConsistency {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "CONSISTENT" => Some(Self::Consistent),
            "PARTIALLY CONSISTENT" => Some(Self::PartiallyConsistent),
            "INCONSISTENT" => Some(Self::Inconsistent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Consistent => "CONSISTENT",
            Self::PartiallyConsistent => "PARTIALLY CONSISTENT",
            Self::Inconsistent => "INCONSISTENT",
            Self::NotAssessed => "Not Assessed",
        }
    }
}

impl fmt::Display for CrossModalConsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured verdict derived from one raw model response.
///
/// Constructed fresh per response and immutable once returned. Every field
/// except `raw_analysis` is a lossy derivative of `raw_analysis`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    /// Extracted authenticity score, clamped to 0-100.
    pub score: u8,
    pub classification: Classification,
    pub clear_category: ClearCategory,
    pub confidence_level: ConfidenceLevel,
    pub key_findings: Vec<String>,
    pub evidence: Vec<String>,
    pub red_flags: Vec<String>,
    pub recommendation: String,
    pub reasoning_chain: String,
    pub cross_modal_consistency: CrossModalConsistency,
    /// The untouched original model response, retained for audit/display.
    pub raw_analysis: String,
}
