use indoc::indoc;
use pretty_assertions::assert_eq;
use reqlint::*;

#[test]
fn test_empty_string_is_valid_and_ready() {
    let analyzer = RequirementAnalyzer::new();
    let result = analyzer.analyze("").unwrap();

    assert!(result.issues.is_empty());
    assert_eq!(result.ambiguity.score, 0.0);
    assert_eq!(result.ambiguity.confidence, Confidence::Low);
    assert_eq!(result.assumptions.score, 0.0);
    assert_eq!(result.assumptions.components.environment.strength, Strength::None);
    assert_eq!(result.assumptions.components.data.strength, Strength::None);
    assert_eq!(result.assumptions.components.state.strength, Strength::None);
    assert!(result.readiness_score > 0.0);
    assert_eq!(result.readiness_level, ReadinessLevel::Ready);
}

#[test]
fn test_idempotence() {
    let analyzer = RequirementAnalyzer::new();
    let text = "The admin should quickly delete the user record and click save";
    let first = analyzer.analyze(text).unwrap();
    let second = analyzer.analyze(text).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_fast_is_flagged_without_timing_context() {
    let analyzer = RequirementAnalyzer::new();
    let result = analyzer.analyze("The API should be fast").unwrap();

    assert!(result
        .issues
        .iter()
        .any(|i| i.issue_type == IssueType::Ambiguity && i.message.contains("'fast'")));
}

#[test]
fn test_fast_is_suppressed_with_timing_context() {
    let analyzer = RequirementAnalyzer::new();
    let result = analyzer
        .analyze("The API must respond in under 200ms, which is fast enough")
        .unwrap();

    assert!(!result.issues.iter().any(|i| i.message.contains("'fast'")));
}

#[test]
fn test_timing_requirement_is_clean_of_subjective_terms() {
    let analyzer = RequirementAnalyzer::new();
    let result = analyzer
        .analyze("The system must respond within 200ms")
        .unwrap();

    assert!(!result
        .issues
        .iter()
        .any(|i| i.message.contains("Subjective term")));
}

#[test]
fn test_admin_delete_produces_state_and_data_assumptions() {
    let analyzer = RequirementAnalyzer::new();
    let result = analyzer.analyze("Admin deletes the user record").unwrap();

    assert!(result.issues.iter().any(|i| {
        i.issue_type == IssueType::Assumption
            && i.category == Some(AssumptionCategory::State)
            && i.assumption.as_deref() == Some("User has necessary permissions for the action")
    }));
    assert!(result.issues.iter().any(|i| {
        i.issue_type == IssueType::Assumption
            && i.category == Some(AssumptionCategory::Data)
            && i.assumption.as_deref() == Some("Target record exists in the system")
    }));
}

#[test]
fn test_should_contributes_to_both_lexical_and_testability() {
    let analyzer = RequirementAnalyzer::new();
    let result = analyzer.analyze("The system should log errors").unwrap();

    let modality_issues: Vec<_> = result
        .issues
        .iter()
        .filter(|i| i.message.contains("Optional/weak requirement term"))
        .collect();
    assert_eq!(modality_issues.len(), 1);
    assert!(modality_issues[0].message.contains("'should'"));

    assert!(result.ambiguity.components.lexical > 0.0);
    assert!(result.ambiguity.components.testability > 0.0);
    assert_eq!(result.ambiguity.components.references, 0.0);
}

#[test]
fn test_question_list_is_capped_and_distinct() {
    let analyzer = RequirementAnalyzer::new();
    let text = "The system should be fast, secure, reliable and scalable; \
                click submit to delete the record and upload the file";
    let result = analyzer.analyze(text).unwrap();

    assert!(result.clarifying_questions.len() <= 8);
    let unique: std::collections::HashSet<&String> =
        result.clarifying_questions.iter().collect();
    assert_eq!(unique.len(), result.clarifying_questions.len());

    // The two standard questions always lead.
    assert_eq!(
        result.clarifying_questions[0],
        "What are the exact preconditions required for this test?"
    );
    assert_eq!(
        result.clarifying_questions[1],
        "What is the expected result and how should it be verified?"
    );
}

#[test]
fn test_every_issue_carries_impact_text() {
    let analyzer = RequirementAnalyzer::new();
    let text = "The user should click the profile page and delete the record";
    let result = analyzer.analyze(text).unwrap();

    assert!(!result.issues.is_empty());
    assert!(result.issues.iter().all(|i| !i.impact.is_empty()));
}

#[test]
fn test_issue_order_is_ambiguity_then_assumptions() {
    let analyzer = RequirementAnalyzer::new();
    let result = analyzer
        .analyze("The report should be fast to export")
        .unwrap();

    let first_assumption = result
        .issues
        .iter()
        .position(|i| i.issue_type == IssueType::Assumption);
    let last_ambiguity = result
        .issues
        .iter()
        .rposition(|i| i.issue_type == IssueType::Ambiguity);
    if let (Some(first_assumption), Some(last_ambiguity)) = (first_assumption, last_ambiguity) {
        assert!(last_ambiguity < first_assumption);
    }
}

#[test]
fn test_serialized_shape() {
    let analyzer = RequirementAnalyzer::new();
    let result = analyzer.analyze("The API should be fast").unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert!(value["ambiguity"]["score"].is_number());
    assert!(value["ambiguity"]["components"]["lexical"].is_number());
    assert!(value["ambiguity"]["components"]["testability"].is_number());
    assert!(value["ambiguity"]["components"]["references"].is_number());
    assert_eq!(value["ambiguity"]["confidence"], "MEDIUM");
    assert!(value["assumptions"]["components"]["environment"]["count"].is_number());
    assert!(value["readiness_score"].is_number());
    assert!(value["readiness_level"].is_string());
    assert_eq!(value["issues"][0]["type"], "Ambiguity");
    assert!(value["clarifying_questions"].is_array());
}

#[test]
fn test_multi_line_requirement() {
    let analyzer = RequirementAnalyzer::new();
    let text = indoc! {"
        The operator opens the dashboard in Chrome.
        The export should finish quickly.
        The system must handle network errors properly.
    "};
    let result = analyzer.analyze(text).unwrap();

    assert!(result
        .issues
        .iter()
        .any(|i| i.message.contains("Non-testable requirement")));
    assert!(result.assumptions.components.state.count >= 3);
    assert_eq!(result.assumptions.components.state.strength, Strength::Strong);
    assert_ne!(result.readiness_level, ReadinessLevel::Ready);
}

#[test]
fn test_cached_analyzer_returns_identical_results() {
    let analyzer = CachedAnalyzer::new();
    let text = "Users should upload files from the dashboard";
    let first = analyzer.analyze(text).unwrap();
    let second = analyzer.analyze(text).unwrap();
    assert_eq!(first, second);
    assert_eq!(analyzer.cache().stats().0, 1);
}
