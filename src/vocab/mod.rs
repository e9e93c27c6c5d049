//! Immutable lexical data for the detectors.
//!
//! All tables are fixed at compile time and exposed through a constructed
//! [`Lexicon`], built once into process-wide read-only state. Detectors take
//! `&Lexicon`, so tests can construct their own instance instead of reaching
//! into globals.

pub mod ambiguity;
pub mod assumptions;

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

pub use ambiguity::{resolve_term_category, ContextFamily, TermCategory};
pub use assumptions::{describe_key, resolve_key_category};

static SHARED: Lazy<Lexicon> = Lazy::new(Lexicon::new);

/// Compiled, read-only view of the detection vocabulary.
pub struct Lexicon {
    subjective_terms: HashSet<&'static str>,
    weak_modality_terms: HashSet<&'static str>,
    undefined_reference_terms: HashSet<&'static str>,
    non_testable: Vec<Regex>,
    quantitative_context: Vec<Regex>,
    performance_context: Vec<Regex>,
    security_context: Vec<Regex>,
    usability_context: Vec<Regex>,
    reliability_context: Vec<Regex>,
    scalability_context: Vec<Regex>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            subjective_terms: ambiguity::SUBJECTIVE_TERMS.iter().copied().collect(),
            weak_modality_terms: ambiguity::WEAK_MODALITY_TERMS.iter().copied().collect(),
            undefined_reference_terms: ambiguity::UNDEFINED_REFERENCE_TERMS
                .iter()
                .copied()
                .collect(),
            non_testable: compile(ambiguity::NON_TESTABLE_PATTERNS),
            quantitative_context: compile(ambiguity::QUANTITATIVE_CONTEXT),
            performance_context: compile(ambiguity::PERFORMANCE_CONTEXT),
            security_context: compile(ambiguity::SECURITY_CONTEXT),
            usability_context: compile(ambiguity::USABILITY_CONTEXT),
            reliability_context: compile(ambiguity::RELIABILITY_CONTEXT),
            scalability_context: compile(ambiguity::SCALABILITY_CONTEXT),
        }
    }

    /// The process-wide default instance.
    pub fn shared() -> &'static Lexicon {
        &SHARED
    }

    pub fn is_subjective_term(&self, term: &str) -> bool {
        self.subjective_terms.contains(term)
    }

    pub fn is_weak_modality(&self, term: &str) -> bool {
        self.weak_modality_terms.contains(term)
    }

    pub fn is_undefined_reference(&self, term: &str) -> bool {
        self.undefined_reference_terms.contains(term)
    }

    pub fn non_testable_patterns(&self) -> &[Regex] {
        &self.non_testable
    }

    /// Corroboration patterns for one context family.
    pub fn context_patterns(&self, family: ContextFamily) -> &[Regex] {
        match family {
            ContextFamily::Performance => &self.performance_context,
            ContextFamily::Security => &self.security_context,
            ContextFamily::Usability => &self.usability_context,
            ContextFamily::Reliability => &self.reliability_context,
            ContextFamily::Scalability => &self.scalability_context,
            ContextFamily::Quantitative => &self.quantitative_context,
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.non_testable_patterns().len(), 6);
    }

    #[test]
    fn test_term_category_resolution() {
        assert_eq!(resolve_term_category("fast"), TermCategory::Performance);
        assert_eq!(resolve_term_category("secure"), TermCategory::Security);
        assert_eq!(resolve_term_category("accurate"), TermCategory::Accuracy);
        // Unmapped terms default to the quality category.
        assert_eq!(resolve_term_category("frobnious"), TermCategory::Quality);
    }

    #[test]
    fn test_overlapping_terms_resolve_to_first_listed_category() {
        // "smooth" is both a performance and a usability word in prose; the
        // table lists performance first.
        assert_eq!(resolve_term_category("smooth"), TermCategory::Performance);
    }

    #[test]
    fn test_key_category_fallback_is_unknown() {
        assert_eq!(
            resolve_key_category("no_such_key"),
            crate::core::AssumptionCategory::Unknown
        );
    }

    #[test]
    fn test_every_action_key_has_a_category() {
        for (_, keys) in assumptions::ACTION_PATTERNS {
            for key in *keys {
                assert_ne!(
                    resolve_key_category(key),
                    crate::core::AssumptionCategory::Unknown,
                    "action key '{key}' should map to a concrete category"
                );
            }
        }
    }
}
