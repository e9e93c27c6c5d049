//! Multi-component ambiguity scoring.
//!
//! Issues are partitioned into lexical, testability, and reference
//! components via a declared kind→components mapping (weak modality feeds
//! two components at once). Each component gets a weight sum plus a capped
//! density term, then a diminishing-returns compression above 80.

use std::collections::HashSet;

use super::{effective_word_count, round1};
use crate::core::{
    AmbiguityAnalysis, AmbiguityComponents, AmbiguityIssue, AmbiguityKind, Confidence,
};
use crate::vocab::{resolve_term_category, TermCategory};

/// The three ambiguity score components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AmbiguityComponent {
    Lexical,
    Testability,
    References,
}

/// Which components each issue kind contributes weight to. Weak modality
/// deliberately counts twice: hedged wording is both a lexical problem and a
/// testability problem.
pub fn kind_components(kind: AmbiguityKind) -> &'static [AmbiguityComponent] {
    match kind {
        AmbiguityKind::SubjectiveTerm => &[AmbiguityComponent::Lexical],
        AmbiguityKind::WeakModality => {
            &[AmbiguityComponent::Lexical, AmbiguityComponent::Testability]
        }
        AmbiguityKind::NonTestableStatement => &[AmbiguityComponent::Testability],
        AmbiguityKind::UndefinedReference => &[AmbiguityComponent::References],
    }
}

const WEAK_MODALITY_WEIGHT: f64 = 8.0;
const UNDEFINED_REFERENCE_WEIGHT: f64 = 9.0;
const NON_TESTABLE_WEIGHT: f64 = 15.0;

/// Per-category weights for subjective terms.
static SUBJECTIVE_WEIGHTS: &[(TermCategory, f64)] = &[
    (TermCategory::Performance, 6.0),
    (TermCategory::Quality, 5.0),
    (TermCategory::Usability, 8.0),
    (TermCategory::Reliability, 8.0),
    (TermCategory::Security, 9.0),
    (TermCategory::Scalability, 7.0),
    (TermCategory::Efficiency, 6.0),
    (TermCategory::Accuracy, 10.0),
    (TermCategory::Compatibility, 7.0),
    (TermCategory::Maintainability, 6.0),
];

const SUBJECTIVE_DEFAULT_WEIGHT: f64 = 8.0;

fn issue_weight(issue: &AmbiguityIssue) -> f64 {
    match issue.kind {
        AmbiguityKind::SubjectiveTerm => {
            let category = resolve_term_category(&issue.text.to_lowercase());
            SUBJECTIVE_WEIGHTS
                .iter()
                .find(|(c, _)| *c == category)
                .map(|(_, w)| *w)
                .unwrap_or(SUBJECTIVE_DEFAULT_WEIGHT)
        }
        AmbiguityKind::WeakModality => WEAK_MODALITY_WEIGHT,
        AmbiguityKind::UndefinedReference => UNDEFINED_REFERENCE_WEIGHT,
        AmbiguityKind::NonTestableStatement => NON_TESTABLE_WEIGHT,
    }
}

/// Density cap and scaling coefficient per component. Testability is the
/// most sensitive: untestable phrasing saturates fastest.
fn density_params(component: AmbiguityComponent) -> (f64, f64) {
    match component {
        AmbiguityComponent::Lexical => (30.0, 60.0),
        AmbiguityComponent::Testability => (40.0, 80.0),
        AmbiguityComponent::References => (35.0, 70.0),
    }
}

fn component_score(issues: &[&AmbiguityIssue], text: &str, component: AmbiguityComponent) -> f64 {
    if issues.is_empty() {
        return 0.0;
    }

    let base: f64 = issues.iter().copied().map(issue_weight).sum();

    let word_count = effective_word_count(text);
    let density = issues.len() as f64 / word_count.max(5) as f64;
    let (cap, coefficient) = density_params(component);
    let raw = base + (density * coefficient).min(cap);

    let compressed = if raw > 80.0 {
        80.0 + (raw - 80.0) * 0.3
    } else {
        raw
    };
    compressed.min(100.0)
}

fn confidence(text: &str, issues: &[AmbiguityIssue]) -> Confidence {
    let word_count = text.split_whitespace().count();
    let issue_count = issues.len();
    let kind_count = issues
        .iter()
        .map(|issue| issue.kind)
        .collect::<HashSet<_>>()
        .len();

    let density = issue_count as f64 / word_count.max(1) as f64;
    if word_count >= 10 && kind_count >= 2 && density <= 0.5 {
        Confidence::High
    } else if word_count >= 5 && issue_count > 0 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Score a set of detected ambiguity issues against the text they came from.
/// Pure; identical inputs always produce identical output.
pub fn score_ambiguity(issues: &[AmbiguityIssue], text: &str) -> AmbiguityAnalysis {
    let partition = |component: AmbiguityComponent| -> Vec<&AmbiguityIssue> {
        issues
            .iter()
            .filter(|issue| kind_components(issue.kind).contains(&component))
            .collect()
    };

    let lexical = component_score(
        &partition(AmbiguityComponent::Lexical),
        text,
        AmbiguityComponent::Lexical,
    );
    let testability = component_score(
        &partition(AmbiguityComponent::Testability),
        text,
        AmbiguityComponent::Testability,
    );
    let references = component_score(
        &partition(AmbiguityComponent::References),
        text,
        AmbiguityComponent::References,
    );

    let overall = lexical * 0.3 + testability * 0.5 + references * 0.2;

    AmbiguityAnalysis {
        score: round1(overall),
        confidence: confidence(text, issues),
        components: AmbiguityComponents {
            lexical: round1(lexical),
            testability: round1(testability),
            references: round1(references),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(kind: AmbiguityKind, text: &str) -> AmbiguityIssue {
        AmbiguityIssue {
            kind,
            text: text.to_string(),
            message: String::new(),
            start_char: None,
            end_char: None,
        }
    }

    #[test]
    fn test_no_issues_scores_zero() {
        let analysis = score_ambiguity(&[], "a perfectly precise requirement statement here");
        assert_eq!(analysis.score, 0.0);
        assert_eq!(analysis.components.lexical, 0.0);
        assert_eq!(analysis.components.testability, 0.0);
        assert_eq!(analysis.components.references, 0.0);
    }

    #[test]
    fn test_empty_text_confidence_is_low() {
        let analysis = score_ambiguity(&[], "");
        assert_eq!(analysis.confidence, Confidence::Low);
    }

    #[test]
    fn test_weak_modality_feeds_lexical_and_testability() {
        let issues = vec![issue(AmbiguityKind::WeakModality, "should")];
        let analysis = score_ambiguity(&issues, "the system should log errors");
        assert!(analysis.components.lexical > 0.0);
        assert!(analysis.components.testability > 0.0);
        assert_eq!(analysis.components.references, 0.0);
    }

    #[test]
    fn test_subjective_weights_follow_term_category() {
        // "accurate" (accuracy, 10) outweighs "fast" (performance, 6) on the
        // same text.
        let text = "one two three four five six seven eight nine ten";
        let fast = score_ambiguity(&[issue(AmbiguityKind::SubjectiveTerm, "fast")], text);
        let accurate = score_ambiguity(&[issue(AmbiguityKind::SubjectiveTerm, "accurate")], text);
        assert!(accurate.components.lexical > fast.components.lexical);
    }

    #[test]
    fn test_component_scores_are_bounded() {
        let issues: Vec<AmbiguityIssue> = (0..200)
            .map(|_| issue(AmbiguityKind::NonTestableStatement, "work correctly"))
            .collect();
        let analysis = score_ambiguity(&issues, "short text");
        assert!(analysis.components.testability <= 100.0);
        assert!(analysis.score <= 100.0);
    }

    #[test]
    fn test_compression_kicks_in_above_eighty() {
        // 6 non-testable issues: base 90, density capped at 40 -> raw 130,
        // compressed to 80 + 50*0.3 = 95.
        let issues: Vec<AmbiguityIssue> = (0..6)
            .map(|_| issue(AmbiguityKind::NonTestableStatement, "work correctly"))
            .collect();
        let analysis = score_ambiguity(&issues, "tiny");
        assert_eq!(analysis.components.testability, 95.0);
    }

    #[test]
    fn test_confidence_tiers() {
        let text = "the quick brown fox jumps over the lazy sleeping dog";
        let diverse = vec![
            issue(AmbiguityKind::SubjectiveTerm, "fast"),
            issue(AmbiguityKind::WeakModality, "should"),
        ];
        assert_eq!(score_ambiguity(&diverse, text).confidence, Confidence::High);

        let single = vec![issue(AmbiguityKind::SubjectiveTerm, "fast")];
        assert_eq!(
            score_ambiguity(&single, "five words of text here").confidence,
            Confidence::Medium
        );

        assert_eq!(score_ambiguity(&single, "too short").confidence, Confidence::Low);
    }

    #[test]
    fn test_adding_a_subjective_term_never_lowers_lexical() {
        let text = "the interface must be clean and fast for all users";
        let mut issues = vec![issue(AmbiguityKind::SubjectiveTerm, "clean")];
        let before = score_ambiguity(&issues, text).components.lexical;
        issues.push(issue(AmbiguityKind::SubjectiveTerm, "fast"));
        let after = score_ambiguity(&issues, text).components.lexical;
        assert!(after >= before);
    }
}
