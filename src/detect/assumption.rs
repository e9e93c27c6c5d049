//! Rule-based detection of implicit assumptions: preconditions implied by
//! action phrases, missing environment specifications, and missing user or
//! data context.

use crate::core::{AssumptionCategory, AssumptionIssue, AssumptionKind};
use crate::vocab::assumptions::{
    ACTION_PATTERNS, DATA_CONTEXT_INDICATORS, DATA_OPERATION_VERBS, ENVIRONMENT_INDICATORS,
    EXPLICIT_INDICATORS, UI_ACTIONS, USER_CONTEXT_INDICATORS, USER_SCOPED_NOUNS,
};
use crate::vocab::{describe_key, resolve_key_category};

/// Detect every implicit assumption in `text`. Pure and deterministic;
/// issues come out in fixed rule order (actions in table order, then
/// environment, then context).
pub fn detect_assumptions(text: &str) -> Vec<AssumptionIssue> {
    let text_lower = text.to_lowercase();
    let mut issues = Vec::new();

    issues.extend(detect_action_assumptions(&text_lower));
    issues.extend(detect_environment_assumptions(&text_lower));
    issues.extend(detect_context_assumptions(&text_lower));

    issues
}

/// One issue per (matched action phrase, implied key) pair, unless the key
/// is already explicit in the text.
fn detect_action_assumptions(text_lower: &str) -> Vec<AssumptionIssue> {
    let mut issues = Vec::new();

    for (action, keys) in ACTION_PATTERNS {
        if !text_lower.contains(action) {
            continue;
        }
        for key in *keys {
            if is_assumption_explicit(text_lower, key) {
                continue;
            }
            issues.push(AssumptionIssue {
                kind: AssumptionKind::Action,
                category: resolve_key_category(key),
                text: (*action).to_string(),
                message: format!("Action '{action}' implies assumption"),
                assumption: describe_key(key),
            });
        }
    }

    issues
}

/// A UI interaction with no environment word anywhere in the text assumes a
/// browser/device/platform.
fn detect_environment_assumptions(text_lower: &str) -> Vec<AssumptionIssue> {
    let has_ui_action = UI_ACTIONS.iter().any(|action| text_lower.contains(action));
    if !has_ui_action {
        return Vec::new();
    }

    let has_environment = ENVIRONMENT_INDICATORS
        .iter()
        .any(|env| text_lower.contains(env));
    if has_environment {
        return Vec::new();
    }

    vec![AssumptionIssue {
        kind: AssumptionKind::Environment,
        category: AssumptionCategory::Environment,
        text: "UI interaction".to_string(),
        message: "UI interaction without environment specification".to_string(),
        assumption: "Browser, device, or platform is specified".to_string(),
    }]
}

/// User-scoped nouns without user context assume an authenticated session;
/// data operations without data context assume pre-existing data.
fn detect_context_assumptions(text_lower: &str) -> Vec<AssumptionIssue> {
    let mut issues = Vec::new();

    let user_scoped = USER_SCOPED_NOUNS
        .iter()
        .any(|noun| text_lower.contains(noun));
    if user_scoped && !has_user_context(text_lower) {
        issues.push(AssumptionIssue {
            kind: AssumptionKind::Context,
            category: AssumptionCategory::State,
            text: "User-specific action".to_string(),
            message: "User-specific action without user context".to_string(),
            assumption: "User is logged in and authenticated".to_string(),
        });
    }

    let data_operation = DATA_OPERATION_VERBS
        .iter()
        .any(|verb| text_lower.contains(verb));
    if data_operation && !has_data_context(text_lower) {
        issues.push(AssumptionIssue {
            kind: AssumptionKind::Context,
            category: AssumptionCategory::Data,
            text: "Data operation".to_string(),
            message: "Data operation without data context".to_string(),
            assumption: "Required data exists in the system".to_string(),
        });
    }

    issues
}

fn is_assumption_explicit(text_lower: &str, key: &str) -> bool {
    EXPLICIT_INDICATORS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, indicators)| {
            indicators
                .iter()
                .any(|indicator| text_lower.contains(indicator))
        })
        .unwrap_or(false)
}

fn has_user_context(text_lower: &str) -> bool {
    USER_CONTEXT_INDICATORS
        .iter()
        .any(|indicator| text_lower.contains(indicator))
}

fn has_data_context(text_lower: &str) -> bool {
    DATA_CONTEXT_INDICATORS
        .iter()
        .any(|indicator| text_lower.contains(indicator))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Vec<AssumptionIssue> {
        detect_assumptions(text)
    }

    #[test]
    fn test_delete_implies_record_and_permissions() {
        let issues = detect("Admin deletes the user record");
        assert!(issues.iter().any(|i| i.category == AssumptionCategory::Data
            && i.assumption == "Target record exists in the system"));
        assert!(issues
            .iter()
            .any(|i| i.category == AssumptionCategory::State
                && i.assumption == "User has necessary permissions for the action"));
    }

    #[test]
    fn test_explicit_indicator_suppresses_key() {
        // "logged in" makes user_logged_in explicit; permissions stay implied.
        let issues = detect("A logged in user deletes the record");
        assert!(!issues
            .iter()
            .any(|i| i.assumption == "User is already authenticated/logged in"));
        assert!(issues
            .iter()
            .any(|i| i.assumption == "User has necessary permissions for the action"));
    }

    #[test]
    fn test_ui_interaction_without_environment() {
        let issues = detect("Click the save button");
        assert!(issues
            .iter()
            .any(|i| i.kind == AssumptionKind::Environment && i.text == "UI interaction"));
    }

    #[test]
    fn test_ui_interaction_with_environment_is_silent() {
        let issues = detect("Click the save button in Chrome");
        assert!(!issues.iter().any(|i| i.kind == AssumptionKind::Environment));
    }

    #[test]
    fn test_data_operation_without_data_context() {
        let issues = detect("Export the quarterly report as CSV");
        assert!(issues.iter().any(|i| i.kind == AssumptionKind::Context
            && i.category == AssumptionCategory::Data));
    }

    #[test]
    fn test_empty_text_has_no_assumptions() {
        assert!(detect("").is_empty());
    }
}
