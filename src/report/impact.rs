//! Impact explanations: why each detected issue matters for automation.

use crate::core::{AmbiguityIssue, AmbiguityKind, AssumptionCategory, AssumptionIssue};

static SUBJECTIVE_IMPACTS: &[(&str, &str)] = &[
    (
        "fast",
        "May cause inconsistent test expectations and flaky performance tests",
    ),
    (
        "slow",
        "May lead to unclear acceptance criteria for response times",
    ),
    (
        "secure",
        "May result in inadequate security testing coverage",
    ),
    (
        "user-friendly",
        "May cause subjective interpretation of usability requirements",
    ),
    (
        "reliable",
        "May lead to undefined reliability and stability expectations",
    ),
    (
        "scalable",
        "May result in unclear performance scaling requirements",
    ),
    (
        "optimal",
        "May cause ambiguous optimization goals and success criteria",
    ),
];

const SUBJECTIVE_DEFAULT_IMPACT: &str =
    "May lead to subjective interpretation and inconsistent testing";

static MODALITY_IMPACTS: &[(&str, &str)] = &[
    (
        "should",
        "Creates uncertainty about whether this is a requirement or suggestion",
    ),
    (
        "could",
        "May result in optional implementation and inconsistent behavior",
    ),
    (
        "might",
        "Creates ambiguity about expected behavior under different conditions",
    ),
    (
        "may",
        "May lead to inconsistent implementation across different scenarios",
    ),
];

const MODALITY_DEFAULT_IMPACT: &str =
    "Creates uncertainty about requirement priority and implementation";

const REFERENCE_IMPACT: &str =
    "May cause confusion about what specific element or condition is being referenced";

const NON_TESTABLE_IMPACT: &str =
    "Makes it impossible to create objective test cases and acceptance criteria";

/// Impact explanation for an ambiguity issue; per-word tables for subjective
/// terms and modality, fixed strings for the other kinds.
pub fn ambiguity_impact(issue: &AmbiguityIssue) -> &'static str {
    let word = issue.text.to_lowercase();
    match issue.kind {
        AmbiguityKind::SubjectiveTerm => SUBJECTIVE_IMPACTS
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, impact)| *impact)
            .unwrap_or(SUBJECTIVE_DEFAULT_IMPACT),
        AmbiguityKind::WeakModality => MODALITY_IMPACTS
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, impact)| *impact)
            .unwrap_or(MODALITY_DEFAULT_IMPACT),
        AmbiguityKind::UndefinedReference => REFERENCE_IMPACT,
        AmbiguityKind::NonTestableStatement => NON_TESTABLE_IMPACT,
    }
}

/// Assumption phrases that reliably break automation when unstated. Checked
/// in order; first hit wins.
static CRITICAL_PATTERNS: &[&str] = &[
    "user exists",
    "credentials exist",
    "user logged in",
    "permissions granted",
    "browser",
    "database",
    "api",
    "server",
    "environment",
];

static CATEGORY_IMPACTS: &[(AssumptionCategory, &str)] = &[
    (
        AssumptionCategory::Environment,
        "May cause test failures in different environments or platforms",
    ),
    (
        AssumptionCategory::State,
        "May lead to flaky tests due to unpredictable system state",
    ),
    (
        AssumptionCategory::Data,
        "May result in test data inconsistencies and unreliable test execution",
    ),
];

const ASSUMPTION_DEFAULT_IMPACT: &str =
    "May lead to unexpected test behavior and automation failures";

/// Impact explanation for an assumption issue: critical-pattern scan first,
/// then moderate patterns, then the per-category default.
pub fn assumption_impact(issue: &AssumptionIssue) -> String {
    let assumption = issue.assumption.to_lowercase();

    for pattern in CRITICAL_PATTERNS {
        if assumption.contains(pattern) {
            return format!(
                "Critical assumption - missing {pattern} will cause test automation to fail"
            );
        }
    }

    if assumption.contains("data") || assumption.contains("record") {
        return "May cause test data setup issues and inconsistent test results".to_string();
    }

    if assumption.contains("configuration") || assumption.contains("setup") {
        return "May lead to environment-specific test failures and deployment issues".to_string();
    }

    CATEGORY_IMPACTS
        .iter()
        .find(|(category, _)| *category == issue.category)
        .map(|(_, impact)| (*impact).to_string())
        .unwrap_or_else(|| ASSUMPTION_DEFAULT_IMPACT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AssumptionKind;

    #[test]
    fn test_subjective_word_specific_impact() {
        let issue = AmbiguityIssue {
            kind: AmbiguityKind::SubjectiveTerm,
            text: "fast".to_string(),
            message: String::new(),
            start_char: None,
            end_char: None,
        };
        assert!(ambiguity_impact(&issue).contains("flaky performance tests"));
    }

    #[test]
    fn test_unmapped_subjective_word_uses_default() {
        let issue = AmbiguityIssue {
            kind: AmbiguityKind::SubjectiveTerm,
            text: "robust".to_string(),
            message: String::new(),
            start_char: None,
            end_char: None,
        };
        assert_eq!(ambiguity_impact(&issue), SUBJECTIVE_DEFAULT_IMPACT);
    }

    #[test]
    fn test_critical_assumption_impact() {
        let issue = AssumptionIssue {
            kind: AssumptionKind::Environment,
            category: AssumptionCategory::Environment,
            text: "UI interaction".to_string(),
            message: String::new(),
            assumption: "Browser, device, or platform is specified".to_string(),
        };
        assert_eq!(
            assumption_impact(&issue),
            "Critical assumption - missing browser will cause test automation to fail"
        );
    }

    #[test]
    fn test_category_default_impact() {
        let issue = AssumptionIssue {
            kind: AssumptionKind::Context,
            category: AssumptionCategory::State,
            text: "User-specific action".to_string(),
            message: String::new(),
            assumption: "User is logged in and authenticated".to_string(),
        };
        // No critical pattern is a substring here, so the State category
        // default applies.
        assert_eq!(
            assumption_impact(&issue),
            "May lead to flaky tests due to unpredictable system state"
        );
    }
}
