use proptest::prelude::*;
use reqlint::*;

#[test]
fn test_readiness_boundaries() {
    assert_eq!(classify_readiness(readiness_score(0.0, 0.0, "")), ReadinessLevel::Ready);

    let text = "a requirement text long enough to avoid the short text multiplier entirely";
    for (ambiguity, assumption) in [(80.0, 80.0), (90.0, 85.0), (100.0, 100.0)] {
        assert_eq!(
            classify_readiness(readiness_score(ambiguity, assumption, text)),
            ReadinessLevel::HighRisk,
            "({ambiguity}, {assumption}) must classify high risk"
        );
    }
}

#[test]
fn test_appending_subjective_term_does_not_lower_lexical() {
    let analyzer = RequirementAnalyzer::new();
    let base = "The dashboard layout must be clean for operators";
    let extended = "The dashboard layout must be clean for operators and robust";

    let before = analyzer.analyze(base).unwrap();
    let after = analyzer.analyze(extended).unwrap();
    assert!(after.ambiguity.components.lexical >= before.ambiguity.components.lexical);
}

proptest! {
    #[test]
    fn prop_scores_stay_in_bounds(text in "[a-zA-Z0-9 .,?!']{0,240}") {
        let analyzer = RequirementAnalyzer::new();
        let result = analyzer.analyze(&text).unwrap();

        prop_assert!((0.0..=100.0).contains(&result.ambiguity.score));
        prop_assert!((0.0..=100.0).contains(&result.ambiguity.components.lexical));
        prop_assert!((0.0..=100.0).contains(&result.ambiguity.components.testability));
        prop_assert!((0.0..=100.0).contains(&result.ambiguity.components.references));
        prop_assert!((0.0..=100.0).contains(&result.assumptions.score));
        prop_assert!((0.0..=95.0).contains(&result.readiness_score));
    }

    #[test]
    fn prop_analysis_is_deterministic(text in "[a-zA-Z ]{0,160}") {
        let analyzer = RequirementAnalyzer::new();
        let first = analyzer.analyze(&text).unwrap();
        let second = analyzer.analyze(&text).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_question_cap_holds(text in "[a-z ]{0,240}") {
        let analyzer = RequirementAnalyzer::new();
        let result = analyzer.analyze(&text).unwrap();

        prop_assert!(result.clarifying_questions.len() <= 8);
        let unique: std::collections::HashSet<&String> =
            result.clarifying_questions.iter().collect();
        prop_assert_eq!(unique.len(), result.clarifying_questions.len());
    }

    #[test]
    fn prop_readiness_bounded_for_arbitrary_scores(
        ambiguity in 0.0f64..=100.0,
        assumption in 0.0f64..=100.0,
        text in "[a-z ]{0,120}",
    ) {
        let readiness = readiness_score(ambiguity, assumption, &text);
        prop_assert!((0.0..=95.0).contains(&readiness));
    }
}
