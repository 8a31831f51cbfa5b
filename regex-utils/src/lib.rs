//! Regex utilities for verilens
//! Extracted to a separate crate for compilation optimization
//!
//! The response parser's precedence rules live here as explicit ordered
//! pattern tables so the fallback order stays auditable and testable in
//! isolation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Compiled regex patterns for authenticity-score extraction
pub mod score {
    use super::*;

    /// Ordered by precedence: labeled scores win over bare "NN/100" forms.
    pub static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
        [
            r"(?i)(?:AUTHENTICITY SCORE|OVERALL.*SCORE|IMAGE.*SCORE):\s*(\d{1,3})",
            r"(?i)SCORE:\s*(\d{1,3})",
            r"(\d{1,3})/100",
            r"(\d{1,3})%",
            r"(?i)(\d{1,3})\s*(?:out of 100|/ 100)",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("Invalid regex pattern"))
        .collect()
    });

    /// First captured integer across the ordered table. The caller clamps.
    pub fn extract(text: &str) -> Option<u32> {
        for pattern in PATTERNS.iter() {
            if let Some(caps) = pattern.captures(text) {
                if let Ok(value) = caps[1].parse() {
                    return Some(value);
                }
            }
        }
        None
    }
}

/// Explicit classification labels emitted by the model
pub mod classification {
    use super::*;

    pub static LABEL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
        [
            r"(?i)(?:CLASSIFICATION|FINAL CLASSIFICATION):\s*(AUTHENTIC|SUSPICIOUS|FAKE)",
            r"(?i)(?:ASSESSMENT|FINAL ASSESSMENT):\s*(AUTHENTIC|SUSPICIOUS|FAKE)",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("Invalid regex pattern"))
        .collect()
    });

    /// Extract an explicitly labeled verdict token, upper-cased.
    pub fn extract_label(text: &str) -> Option<String> {
        for pattern in LABEL_PATTERNS.iter() {
            if let Some(caps) = pattern.captures(text) {
                return Some(caps[1].to_uppercase());
            }
        }
        None
    }
}

/// Self-reported confidence level labels
pub mod confidence {
    use super::*;

    pub static LABEL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
        [
            r"(?i)CONFIDENCE LEVEL:\s*(HIGH|MEDIUM|LOW)",
            r"(?i)CONFIDENCE:\s*(HIGH|MEDIUM|LOW)",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("Invalid regex pattern"))
        .collect()
    });

    pub fn extract_label(text: &str) -> Option<String> {
        for pattern in LABEL_PATTERNS.iter() {
            if let Some(caps) = pattern.captures(text) {
                return Some(caps[1].to_uppercase());
            }
        }
        None
    }
}

/// Cross-modal consistency labels from combined text+image analysis
pub mod consistency {
    use super::*;

    pub static LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)CROSS_MODAL_CONSISTENCY:\s*(CONSISTENT|PARTIALLY_CONSISTENT|INCONSISTENT)")
            .expect("Invalid regex pattern")
    });

    /// Extract the consistency token with underscores mapped to spaces.
    pub fn extract_label(text: &str) -> Option<String> {
        LABEL_PATTERN
            .captures(text)
            .map(|caps| caps[1].to_uppercase().replace('_', " "))
    }
}

/// Section scanning: a section runs from its label to the next all-caps
/// label token or end of text
pub mod section {
    use super::*;

    /// Terminates a section body. Multi-word labels ("RED FLAGS:") do not
    /// terminate the preceding section; only contiguous `[A-Z_]+:` tokens do.
    pub static TERMINATOR: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\n[A-Z_]+:").expect("Invalid regex pattern"));

    /// One bulleted item within a section body.
    pub static BULLET: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"[-•*]\s*([^\n]+)").expect("Invalid regex pattern"));

    pub static WHITESPACE_RUN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\s+").expect("Invalid regex pattern"));

    /// Body of the first section introduced by `label`, or None if the
    /// label never occurs.
    pub fn body<'a>(text: &'a str, label: &Regex) -> Option<&'a str> {
        let found = label.find(text)?;
        let rest = &text[found.end()..];
        let end = TERMINATOR.find(rest).map(|t| t.start()).unwrap_or(rest.len());
        Some(&rest[..end])
    }

    /// Every bulleted line in a section body, trimmed.
    pub fn bullets(body: &str) -> Vec<String> {
        BULLET
            .captures_iter(body)
            .map(|caps| caps[1].trim().to_string())
            .collect()
    }

    /// Collapse whitespace runs (including newlines) to single spaces.
    pub fn collapse(body: &str) -> String {
        WHITESPACE_RUN.replace_all(body.trim(), " ").into_owned()
    }
}

/// Per-field section label tables consumed by the response parser
pub mod labels {
    use super::*;

    fn compile(patterns: &[&str]) -> Vec<Regex> {
        patterns
            .iter()
            .map(|pattern| Regex::new(pattern).expect("Invalid regex pattern"))
            .collect()
    }

    /// Sections that contribute key findings.
    pub static FINDINGS: Lazy<Vec<Regex>> = Lazy::new(|| {
        compile(&[
            r"(?i)KEY_TOPICS_EXTRACTED:",
            r"(?i)KEY FINDINGS:",
            r"(?i)VISUAL EVIDENCE:",
            r"(?i)TECHNICAL_ANALYSIS:",
            r"(?i)TEXT_ANALYSIS_SUMMARY:",
            r"(?i)IMAGE_ANALYSIS_SUMMARY:",
        ])
    });

    /// Sections that contribute supporting evidence.
    pub static EVIDENCE: Lazy<Vec<Regex>> = Lazy::new(|| {
        compile(&[
            r"(?i)SUPPORTING_EVIDENCE:",
            r"(?i)FACT_CHECK_RESULTS:",
            r"(?i)EVIDENCE_COMPILATION:",
            r"(?i)VERIFICATION:",
        ])
    });

    /// Sections that contribute red flags.
    pub static RED_FLAGS: Lazy<Vec<Regex>> = Lazy::new(|| {
        compile(&[
            r"(?i)RED_FLAGS_DETECTED:",
            r"(?i)RED FLAGS:",
            r"(?i)WARNING SIGNS:",
            r"(?i)CONCERNS:",
        ])
    });

    /// Sections holding the consolidated recommendation, by precedence.
    pub static RECOMMENDATION: Lazy<Vec<Regex>> = Lazy::new(|| {
        compile(&[
            r"(?i)FINAL_RECOMMENDATION:",
            r"(?i)RECOMMENDATION:",
            r"(?i)CONCLUSION:",
        ])
    });

    /// Sections holding the reasoning chain, by precedence.
    pub static REASONING: Lazy<Vec<Regex>> = Lazy::new(|| {
        compile(&[
            r"(?i)REASONING_CHAIN:",
            r"(?i)COMPREHENSIVE_REASONING:",
            r"(?i)FINAL_ASSESSMENT:",
        ])
    });
}
