//! Response-parsing engine
//!
//! Turns one raw model response into a structured [`AnalysisResult`] using
//! layered pattern matching and keyword scoring. Pure function of its
//! input: no I/O, no external state, no failure path — every extractor
//! has a defined default, so malformed, empty, and error-shaped input all
//! degrade to a fully-populated low-information result.

use super::config::ParserConfig;
use super::result::{
    AnalysisResult, Classification, ClearCategory, ConfidenceLevel, CrossModalConsistency,
};
use regex::Regex;
use regex_utils::{classification, confidence, consistency, labels, score, section};
use std::collections::HashSet;
use tracing::debug;

/// Stateless parser over one raw response string.
#[derive(Debug, Clone, Default)]
pub struct ResponseParser {
    config: ParserConfig,
}

impl ResponseParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Derive every field of an [`AnalysisResult`] from one raw string.
    pub fn parse(&self, text: &str) -> AnalysisResult {
        let score = self.extract_score(text);
        let classification = self.extract_classification(text);

        AnalysisResult {
            score,
            classification,
            clear_category: ClearCategory::derive(classification, score, &self.config.thresholds),
            confidence_level: self.extract_confidence_level(text),
            key_findings: self.extract_key_findings(text),
            evidence: self.extract_evidence(text),
            red_flags: self.extract_red_flags(text),
            recommendation: self.extract_recommendation(text),
            reasoning_chain: self.extract_reasoning_chain(text),
            cross_modal_consistency: self.extract_cross_modal_consistency(text),
            raw_analysis: text.to_string(),
        }
    }

    /// First match across the ordered score patterns, clamped to 0-100.
    pub fn extract_score(&self, text: &str) -> u8 {
        match score::extract(text) {
            Some(value) => value.min(100) as u8,
            None => {
                debug!("no score pattern matched, using default");
                self.config.default_score
            }
        }
    }

    /// Explicit classification label when present, otherwise weighted
    /// keyword voting over the configured keyword sets.
    pub fn extract_classification(&self, text: &str) -> Classification {
        if let Some(token) = classification::extract_label(text) {
            if let Some(parsed) = Classification::from_token(&token) {
                return parsed;
            }
        }

        let lower = text.to_lowercase();
        let occurrences = |terms: &[String]| -> usize {
            terms.iter().map(|term| lower.matches(term.as_str()).count()).sum()
        };

        let authentic = occurrences(&self.config.keywords.authentic);
        let fake = occurrences(&self.config.keywords.fake);
        let suspicious = occurrences(&self.config.keywords.suspicious);

        if authentic == 0 && fake == 0 && suspicious == 0 {
            return Classification::Uncertain;
        }

        let weights = &self.config.weights;
        let mut votes = [
            (Classification::Fake, fake * weights.fake),
            (Classification::Authentic, authentic * weights.authentic),
            (Classification::Suspicious, suspicious * weights.suspicious),
        ];
        votes.sort_by(|a, b| b.1.cmp(&a.1));

        // Near-tie between the top sets reads as a conflicted response.
        if votes[0].1 - votes[1].1 < self.config.tie_margin {
            return Classification::Suspicious;
        }
        votes[0].0
    }

    /// Self-reported confidence; defaults to MEDIUM.
    pub fn extract_confidence_level(&self, text: &str) -> ConfidenceLevel {
        confidence::extract_label(text)
            .and_then(|token| ConfidenceLevel::from_token(&token))
            .unwrap_or(ConfidenceLevel::Medium)
    }

    pub fn extract_key_findings(&self, text: &str) -> Vec<String> {
        self.extract_list(text, &labels::FINDINGS, self.config.caps.key_findings)
    }

    pub fn extract_evidence(&self, text: &str) -> Vec<String> {
        self.extract_list(text, &labels::EVIDENCE, self.config.caps.evidence)
    }

    pub fn extract_red_flags(&self, text: &str) -> Vec<String> {
        self.extract_list(text, &labels::RED_FLAGS, self.config.caps.red_flags)
    }

    pub fn extract_recommendation(&self, text: &str) -> String {
        self.extract_narrative(
            text,
            &labels::RECOMMENDATION,
            self.config.budgets.recommendation,
            &self.config.fallbacks.recommendation,
        )
    }

    pub fn extract_reasoning_chain(&self, text: &str) -> String {
        self.extract_narrative(
            text,
            &labels::REASONING,
            self.config.budgets.reasoning_chain,
            &self.config.fallbacks.reasoning_chain,
        )
    }

    /// Only meaningful for combined text+image analysis; defaults to
    /// "Not Assessed" everywhere else.
    pub fn extract_cross_modal_consistency(&self, text: &str) -> CrossModalConsistency {
        consistency::extract_label(text)
            .and_then(|token| CrossModalConsistency::from_token(&token))
            .unwrap_or(CrossModalConsistency::NotAssessed)
    }

    /// Bulleted items concatenated across every matching section label,
    /// deduplicated case-insensitively in first-seen order, capped.
    fn extract_list(&self, text: &str, section_labels: &[Regex], cap: usize) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut items = Vec::new();

        for label in section_labels {
            let Some(body) = section::body(text, label) else {
                continue;
            };
            for item in section::bullets(body) {
                if items.len() == cap {
                    return items;
                }
                if seen.insert(item.to_lowercase()) {
                    items.push(item);
                }
            }
        }

        items
    }

    /// Whole section body with whitespace runs collapsed, truncated to the
    /// field's character budget. Labels are tried in precedence order.
    fn extract_narrative(
        &self,
        text: &str,
        section_labels: &[Regex],
        budget: usize,
        fallback: &str,
    ) -> String {
        for label in section_labels {
            if let Some(body) = section::body(text, label) {
                return truncate_chars(&section::collapse(body), budget);
            }
        }
        fallback.to_string()
    }
}

/// Truncate to at most `budget` characters on a char boundary.
fn truncate_chars(text: &str, budget: usize) -> String {
    match text.char_indices().nth(budget) {
        Some((index, _)) => text[..index].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::config::KeywordSets;

    fn parser() -> ResponseParser {
        ResponseParser::new()
    }

    #[test]
    fn test_extract_score_labeled() {
        assert_eq!(parser().extract_score("AUTHENTICITY SCORE: 85"), 85);
        assert_eq!(parser().extract_score("OVERALL AUTHENTICITY SCORE: 12"), 12);
        assert_eq!(parser().extract_score("IMAGE AUTHENTICITY SCORE: 77"), 77);
    }

    #[test]
    fn test_extract_score_bare_forms() {
        assert_eq!(parser().extract_score("I'd put this at 72/100"), 72);
        assert_eq!(parser().extract_score("confidence around 64%"), 64);
        assert_eq!(parser().extract_score("about 55 out of 100"), 55);
    }

    #[test]
    fn test_extract_score_default_and_clamp() {
        assert_eq!(parser().extract_score("no score here"), 50);
        // A matched out-of-range literal is clamped, not rejected.
        assert_eq!(parser().extract_score("SCORE: 450"), 100);
        assert_eq!(parser().extract_score("999/100"), 100);
    }

    #[test]
    fn test_classification_explicit_label_wins() {
        let text = "This looks genuine and credible overall.\nCLASSIFICATION: FAKE";
        assert_eq!(parser().extract_classification(text), Classification::Fake);
    }

    #[test]
    fn test_classification_keyword_voting() {
        let text = "fabricated quotes, a deceptive headline, and manipulated imagery";
        assert_eq!(parser().extract_classification(text), Classification::Fake);

        let text = "sources are credible, the report is genuine and verified";
        assert_eq!(parser().extract_classification(text), Classification::Authentic);
    }

    #[test]
    fn test_classification_occurrences_count_independently() {
        // "fake" twice outweighs one authenticity term by more than the margin.
        let text = "fake headline over a fake byline, though the outlet is credible";
        assert_eq!(parser().extract_classification(text), Classification::Fake);
    }

    #[test]
    fn test_classification_near_tie_resolves_suspicious() {
        // One fake term vs one authentic term: weighted 2 vs 2.
        let text = "a genuine photo paired with a false caption";
        assert_eq!(parser().extract_classification(text), Classification::Suspicious);
    }

    #[test]
    fn test_classification_no_keywords_is_uncertain() {
        assert_eq!(
            parser().extract_classification("nothing here speaks to veracity"),
            Classification::Uncertain
        );
        assert_eq!(parser().extract_classification(""), Classification::Uncertain);
    }

    #[test]
    fn test_classification_custom_keywords() {
        let mut config = ParserConfig::default();
        config.keywords = KeywordSets {
            authentic: vec!["legit".to_string()],
            fake: vec!["bogus".to_string()],
            suspicious: vec!["iffy".to_string()],
        };
        let parser = ResponseParser::with_config(config);
        assert_eq!(parser.extract_classification("totally bogus"), Classification::Fake);
        assert_eq!(parser.extract_classification("looks legit"), Classification::Authentic);
        // The default keyword sets no longer apply.
        assert_eq!(parser.extract_classification("fabricated"), Classification::Uncertain);
    }

    #[test]
    fn test_extract_red_flags_in_order() {
        let text = "RED FLAGS:\n- Doctored timestamp\n- Unverified source\n- Recycled imagery\nRECOMMENDATION: check archives";
        assert_eq!(
            parser().extract_red_flags(text),
            vec!["Doctored timestamp", "Unverified source", "Recycled imagery"]
        );
    }

    #[test]
    fn test_list_dedup_across_sections() {
        // The same line under two matching labels appears once.
        let text =
            "RED_FLAGS_DETECTED:\n- Doctored timestamp\nWARNING SIGNS:\n- doctored timestamp\n- Stock photo reuse";
        assert_eq!(
            parser().extract_red_flags(text),
            vec!["Doctored timestamp", "Stock photo reuse"]
        );
    }

    #[test]
    fn test_list_cap_applies() {
        let bullets: String = (0..10).map(|i| format!("- flag number {i}\n")).collect();
        let text = format!("RED FLAGS:\n{bullets}");
        assert_eq!(parser().extract_red_flags(&text).len(), 4);
    }

    #[test]
    fn test_bullet_markers_and_trim() {
        let text = "KEY FINDINGS:\n-  spaced dash\n• bullet point\n* asterisk item\nplain line ignored";
        assert_eq!(
            parser().extract_key_findings(text),
            vec!["spaced dash", "bullet point", "asterisk item"]
        );
    }

    #[test]
    fn test_recommendation_collapses_whitespace() {
        let text = "RECOMMENDATION:\nCross-check the\n\nclaim   against\nwire services.";
        assert_eq!(
            parser().extract_recommendation(text),
            "Cross-check the claim against wire services."
        );
    }

    #[test]
    fn test_recommendation_precedence_and_budget() {
        let long = "x".repeat(500);
        let text = format!("FINAL_RECOMMENDATION: {long}\nRECOMMENDATION: short one");
        let extracted = parser().extract_recommendation(&text);
        assert_eq!(extracted.chars().count(), 300);
        assert!(extracted.starts_with('x'));
    }

    #[test]
    fn test_narrative_fallbacks() {
        assert_eq!(
            parser().extract_recommendation("no sections at all"),
            "Further verification recommended through multiple sources"
        );
        assert_eq!(
            parser().extract_reasoning_chain("no sections at all"),
            "Analysis completed using model-reported reasoning"
        );
    }

    #[test]
    fn test_confidence_and_consistency_labels() {
        assert_eq!(
            parser().extract_confidence_level("CONFIDENCE LEVEL: HIGH"),
            ConfidenceLevel::High
        );
        assert_eq!(parser().extract_confidence_level("Confidence: low"), ConfidenceLevel::Low);
        assert_eq!(parser().extract_confidence_level(""), ConfidenceLevel::Medium);

        assert_eq!(
            parser().extract_cross_modal_consistency("CROSS_MODAL_CONSISTENCY: INCONSISTENT"),
            CrossModalConsistency::Inconsistent
        );
        assert_eq!(
            parser().extract_cross_modal_consistency("CROSS_MODAL_CONSISTENCY: PARTIALLY_CONSISTENT"),
            CrossModalConsistency::PartiallyConsistent
        );
        assert_eq!(
            parser().extract_cross_modal_consistency("text-only analysis"),
            CrossModalConsistency::NotAssessed
        );
    }

    #[test]
    fn test_empty_input_yields_defaults() {
        let result = parser().parse("");
        assert_eq!(result.score, 50);
        assert_eq!(result.classification, Classification::Uncertain);
        assert_eq!(result.clear_category, ClearCategory::PartiallyManipulated);
        assert_eq!(result.confidence_level, ConfidenceLevel::Medium);
        assert!(result.key_findings.is_empty());
        assert!(result.evidence.is_empty());
        assert!(result.red_flags.is_empty());
        assert_eq!(
            result.recommendation,
            "Further verification recommended through multiple sources"
        );
        assert_eq!(result.cross_modal_consistency, CrossModalConsistency::NotAssessed);
        assert_eq!(result.raw_analysis, "");
    }

    #[test]
    fn test_error_shaped_input_degrades() {
        let text = "Error in text analysis: connection timed out";
        let result = parser().parse(text);
        assert_eq!(result.classification, Classification::Uncertain);
        assert_eq!(result.score, 50);
        assert_eq!(result.raw_analysis, text);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = "AUTHENTICITY SCORE: 61\nKEY FINDINGS:\n- finding one\n- finding two\nCONFIDENCE: HIGH";
        assert_eq!(parser().parse(text), parser().parse(text));
    }

    #[test]
    fn test_parse_is_idempotent_on_derived_text() {
        // Re-feeding a rendered summary must not panic, only degrade.
        let first = parser().parse("CLASSIFICATION: AUTHENTIC\nAUTHENTICITY SCORE: 90");
        let summary = format!("{} ({})", first.clear_category, first.score);
        let second = parser().parse(&summary);
        assert_eq!(second.raw_analysis, summary);
    }

    #[test]
    fn test_end_to_end_fake_scenario() {
        let text = "AUTHENTICITY SCORE: 15\nCLASSIFICATION: FAKE\nRED FLAGS:\n- Doctored timestamp\n- Unverified source";
        let result = parser().parse(text);
        assert_eq!(result.score, 15);
        assert_eq!(result.classification, Classification::Fake);
        assert_eq!(result.clear_category, ClearCategory::Fake);
        assert_eq!(result.red_flags, vec!["Doctored timestamp", "Unverified source"]);
        assert_eq!(result.raw_analysis, text);
    }

    #[test]
    fn test_multimodal_report_parses_fully() {
        let text = "\
OVERALL AUTHENTICITY SCORE: 35
FINAL CLASSIFICATION: SUSPICIOUS
CONFIDENCE LEVEL: MEDIUM
CROSS_MODAL_CONSISTENCY: PARTIALLY_CONSISTENT

TEXT_ANALYSIS_SUMMARY:
- Headline overstates the study's findings
- No named sources

IMAGE_ANALYSIS_SUMMARY:
- Photo predates the described event

EVIDENCE_COMPILATION:
- Reverse search places the image in 2019 coverage

RED_FLAGS_DETECTED:
- Recycled photo presented as current

REASONING_CHAIN:
The image is authentic but miscontextualized, and the
text exaggerates a real study.

FINAL_RECOMMENDATION:
Treat as misleading until the outlet issues a correction.";

        let result = parser().parse(text);
        assert_eq!(result.score, 35);
        assert_eq!(result.classification, Classification::Suspicious);
        assert_eq!(result.clear_category, ClearCategory::PartiallyManipulated);
        assert_eq!(result.cross_modal_consistency, CrossModalConsistency::PartiallyConsistent);
        assert_eq!(
            result.key_findings,
            vec![
                "Headline overstates the study's findings",
                "No named sources",
                "Photo predates the described event"
            ]
        );
        assert_eq!(result.evidence, vec!["Reverse search places the image in 2019 coverage"]);
        assert_eq!(result.red_flags, vec!["Recycled photo presented as current"]);
        assert!(result.reasoning_chain.starts_with("The image is authentic"));
        assert!(result.recommendation.starts_with("Treat as misleading"));
    }

    #[test]
    fn test_result_serializes_with_contract_field_names() {
        let result = parser().parse("AUTHENTICITY SCORE: 90\nCLASSIFICATION: AUTHENTIC");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["score"], 90);
        assert_eq!(json["classification"], "AUTHENTIC");
        assert_eq!(json["clear_category"], "REAL");
        assert_eq!(json["confidence_level"], "MEDIUM");
        assert_eq!(json["cross_modal_consistency"], "Not Assessed");
        assert!(json["raw_analysis"].as_str().unwrap().contains("AUTHENTICITY SCORE"));
    }
}
