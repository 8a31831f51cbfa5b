//! Configuration for the response-parsing heuristics
//!
//! Every knob the parser consults lives here as named configuration rather
//! than hidden literals: keyword sets, voting weights, the tie margin, the
//! default score, list caps, narrative budgets, and category thresholds.
//! Tests substitute custom keyword sets without touching extraction logic.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for the response parser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParserConfig {
    /// Keyword sets for the classification voting fallback.
    pub keywords: KeywordSets,

    /// Weights applied to each keyword set's occurrence count.
    pub weights: VoteWeights,

    /// A winner must beat the runner-up by at least this much (after
    /// weighting); anything closer resolves to SUSPICIOUS.
    pub tie_margin: usize,

    /// Score reported when no extraction pattern matches.
    pub default_score: u8,

    /// Per-field caps on extracted list items.
    pub caps: ListCaps,

    /// Character budgets for the narrative fields.
    pub budgets: NarrativeBudgets,

    /// Thresholds for the clear-category mapping.
    pub thresholds: CategoryThresholds,

    /// Sentences reported when a narrative section is absent.
    pub fallbacks: NarrativeFallbacks,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            keywords: KeywordSets::default(),
            weights: VoteWeights::default(),
            tie_margin: 2,
            default_score: 50,
            caps: ListCaps::default(),
            budgets: NarrativeBudgets::default(),
            thresholds: CategoryThresholds::default(),
            fallbacks: NarrativeFallbacks::default(),
        }
    }
}

impl ParserConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read parser config")?;

        let config: Self = toml::from_str(&content).context("Failed to parse parser config")?;

        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize parser config")?;

        std::fs::write(path, content).context("Failed to write parser config")?;

        Ok(())
    }
}

/// Classification keyword sets, matched as lower-case substrings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordSets {
    pub authentic: Vec<String>,
    pub fake: Vec<String>,
    pub suspicious: Vec<String>,
}

impl Default for KeywordSets {
    fn default() -> Self {
        let list = |terms: &[&str]| terms.iter().map(|t| t.to_string()).collect();
        Self {
            authentic: list(&["authentic", "genuine", "real", "credible", "trustworthy", "verified"]),
            fake: list(&["fake", "false", "fabricated", "misleading", "deceptive", "manipulated"]),
            suspicious: list(&[
                "suspicious",
                "questionable",
                "uncertain",
                "dubious",
                "requires verification",
            ]),
        }
    }
}

/// Voting weights. Fakeness and authenticity indicators outweigh the
/// softer suspicion terms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct VoteWeights {
    pub authentic: usize,
    pub fake: usize,
    pub suspicious: usize,
}

impl Default for VoteWeights {
    fn default() -> Self {
        Self { authentic: 2, fake: 2, suspicious: 1 }
    }
}

/// Maximum retained items per list field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ListCaps {
    pub key_findings: usize,
    pub evidence: usize,
    pub red_flags: usize,
}

impl Default for ListCaps {
    fn default() -> Self {
        Self { key_findings: 8, evidence: 5, red_flags: 4 }
    }
}

/// Character budgets for the consolidated narrative fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NarrativeBudgets {
    pub recommendation: usize,
    pub reasoning_chain: usize,
}

impl Default for NarrativeBudgets {
    fn default() -> Self {
        Self { recommendation: 300, reasoning_chain: 400 }
    }
}

/// Clear-category boundaries: AUTHENTIC at or above `real_min` maps to
/// REAL; any score below `fake_below` maps to FAKE.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CategoryThresholds {
    pub real_min: u8,
    pub fake_below: u8,
}

impl Default for CategoryThresholds {
    fn default() -> Self {
        Self { real_min: 80, fake_below: 30 }
    }
}

/// Fixed sentences used when a narrative section is missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NarrativeFallbacks {
    pub recommendation: String,
    pub reasoning_chain: String,
}

impl Default for NarrativeFallbacks {
    fn default() -> Self {
        Self {
            recommendation: "Further verification recommended through multiple sources".to_string(),
            reasoning_chain: "Analysis completed using model-reported reasoning".to_string(),
        }
    }
}
