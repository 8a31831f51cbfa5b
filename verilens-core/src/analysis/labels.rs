//! Derived presentation helpers
//!
//! Two small pure functions callable independently of the parser: a
//! confidence label for a score, and a sharing-risk assessment for a
//! (classification, score) pair. Breakpoints are part of the rendering
//! contract and pinned by tests.

use super::result::Classification;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable confidence step for an authenticity score.
pub fn confidence_label(score: u8) -> &'static str {
    if score >= 85 {
        "Very High Confidence"
    } else if score >= 70 {
        "High Confidence"
    } else if score >= 55 {
        "Medium Confidence"
    } else if score >= 40 {
        "Low Confidence"
    } else {
        "Very Low Confidence"
    }
}

/// Severity tier for sharing or believing content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RiskTier {
    Critical,
    High,
    Medium,
    Low,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tier = match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        };
        f.write_str(tier)
    }
}

/// Risk tier plus the advice sentence rendered next to a verdict.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskLabel {
    pub tier: RiskTier,
    pub advice: &'static str,
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Risk - {}", self.tier, self.advice)
    }
}

/// Risk of sharing/believing content with this verdict.
pub fn risk_label(classification: Classification, score: u8) -> RiskLabel {
    if classification == Classification::Fake || score < 25 {
        RiskLabel { tier: RiskTier::Critical, advice: "Do Not Share or Believe" }
    } else if classification == Classification::Suspicious || score < 50 {
        RiskLabel { tier: RiskTier::High, advice: "Verify Through Multiple Sources" }
    } else if score < 70 {
        RiskLabel { tier: RiskTier::Medium, advice: "Additional Verification Recommended" }
    } else if classification == Classification::Authentic && score >= 85 {
        RiskLabel { tier: RiskTier::Low, advice: "Content Appears Reliable" }
    } else {
        RiskLabel { tier: RiskTier::Medium, advice: "Consider Additional Verification" }
    }
}
