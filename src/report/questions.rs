//! Clarifying-question generation.
//!
//! Two standard questions always lead, then one question per detected issue
//! from the fixed template tables (first template in a matched list wins),
//! de-duplicated by exact string equality and capped at 8 entries total.

use crate::core::{
    AmbiguityIssue, AmbiguityKind, AssumptionCategory, AssumptionIssue,
};

/// Hard cap on the returned question list.
pub const MAX_QUESTIONS: usize = 8;

/// Questions worth asking about every test case, issues or not.
static STANDARD_QUESTIONS: &[&str] = &[
    "What are the exact preconditions required for this test?",
    "What is the expected result and how should it be verified?",
];

static SUBJECTIVE_QUESTIONS: &[(&str, &[&str])] = &[
    (
        "fast",
        &[
            "What is the acceptable response time in seconds?",
            "What is the maximum latency threshold?",
            "How does this compare to industry standards?",
        ],
    ),
    (
        "slow",
        &[
            "What is the maximum acceptable response time?",
            "What performance degradation is tolerable?",
            "How does this impact user experience?",
        ],
    ),
    (
        "quick",
        &[
            "What is the expected response time in milliseconds?",
            "What constitutes 'quick' for this operation?",
            "How does this compare to similar operations?",
        ],
    ),
    (
        "rapid",
        &[
            "What is the required speed in operations per second?",
            "What is the acceptable throughput rate?",
            "How does this impact system resources?",
        ],
    ),
    (
        "smooth",
        &[
            "What performance characteristics define smoothness?",
            "What is the acceptable jitter or variance?",
            "How does this impact user experience quality?",
        ],
    ),
    (
        "responsive",
        &[
            "What is the required response time for user interactions?",
            "What responsiveness metrics are expected?",
            "How does this compare to similar applications?",
        ],
    ),
    (
        "seamless",
        &[
            "What defines seamless operation?",
            "What integration smoothness is expected?",
            "How does this impact user workflow?",
        ],
    ),
];

static SUBJECTIVE_DEFAULT_QUESTIONS: &[&str] = &[
    "What specific, measurable criteria define this subjective term?",
    "What quantitative metrics should be used?",
    "How should this be measured in testing?",
];

static MODALITY_QUESTIONS: &[(&str, &[&str])] = &[
    (
        "should",
        &[
            "Is this a mandatory requirement or optional?",
            "Under what conditions must this occur?",
            "What happens if this requirement is not met?",
        ],
    ),
    (
        "could",
        &[
            "Under what specific conditions should this behavior occur?",
            "What factors determine when this is appropriate?",
            "What is the alternative when this cannot occur?",
        ],
    ),
    (
        "might",
        &[
            "When and under what conditions should this occur?",
            "What probability threshold triggers this behavior?",
            "What is the expected behavior when conditions are not met?",
        ],
    ),
    (
        "may",
        &[
            "What specific conditions determine when this behavior occurs?",
            "What permissions or states enable this functionality?",
            "What happens in the default case?",
        ],
    ),
    (
        "can",
        &[
            "What specific capabilities enable this functionality?",
            "What conditions must be met for this to be possible?",
            "What limitations prevent this from occurring?",
        ],
    ),
    (
        "ideally",
        &[
            "What is the minimum acceptable behavior if ideal is not achieved?",
            "What are the priority levels?",
            "What trade-offs are acceptable?",
        ],
    ),
    (
        "preferably",
        &[
            "What is the alternative if preference cannot be satisfied?",
            "What are the acceptable fallbacks?",
            "What determines preference priority?",
        ],
    ),
];

static MODALITY_DEFAULT_QUESTIONS: &[&str] = &[
    "What specific conditions determine when this occurs?",
    "What are the exact requirements?",
    "How should this be implemented?",
];

static REFERENCE_QUESTIONS: &[(&str, &[&str])] = &[
    (
        "it",
        &[
            "What specific element, component, or data does 'it' refer to?",
            "Can you identify the exact referent?",
            "What should replace this pronoun?",
        ],
    ),
    (
        "this",
        &[
            "What specific element, component, or data does 'this' refer to?",
            "Can you clarify the exact referent?",
            "What specific item is being referenced?",
        ],
    ),
    (
        "that",
        &[
            "What specific element, component, or data does 'that' refer to?",
            "Can you identify the exact referent?",
            "What should replace this reference?",
        ],
    ),
    (
        "these",
        &[
            "What specific elements or components do 'these' refer to?",
            "Can you list the exact referents?",
            "What specific items are being referenced?",
        ],
    ),
    (
        "those",
        &[
            "What specific elements or components do 'those' refer to?",
            "Can you identify the exact referents?",
            "What specific items should be referenced?",
        ],
    ),
    (
        "the system",
        &[
            "Which specific system or subsystem is being referenced?",
            "Can you identify the exact system?",
            "What specific system components are involved?",
        ],
    ),
    (
        "the component",
        &[
            "Which specific component is being referenced?",
            "Can you identify the exact component?",
            "What specific component functionality is involved?",
        ],
    ),
    (
        "the application",
        &[
            "Which specific application is being referenced?",
            "Can you identify the exact application?",
            "What specific application features are involved?",
        ],
    ),
    (
        "the user",
        &[
            "What type of user or user role is being referenced?",
            "Can you identify the specific user characteristics?",
            "What specific user permissions are involved?",
        ],
    ),
];

static REFERENCE_DEFAULT_QUESTIONS: &[&str] = &[
    "What specific element or component is being referenced?",
    "Can you identify the exact referent?",
    "What specific item should replace this reference?",
];

static NON_TESTABLE_DEFAULT_QUESTIONS: &[&str] = &[
    "What specific, measurable criteria define success?",
    "What quantitative metrics can be used to verify this?",
    "How should this be tested in practice?",
    "What specific acceptance criteria apply?",
    "What observable behavior confirms this requirement?",
];

static ENVIRONMENT_QUESTIONS: &[(&str, &[&str])] = &[
    (
        "browsers",
        &[
            "Which specific browsers and versions must be supported?",
            "What are the browser compatibility requirements?",
            "Which browser features are required?",
        ],
    ),
    (
        "devices",
        &[
            "Which specific devices and screen sizes must be supported?",
            "What are the device compatibility requirements?",
            "What device capabilities are required?",
        ],
    ),
    (
        "operating_systems",
        &[
            "Which specific operating systems and versions must be supported?",
            "What are the OS compatibility requirements?",
            "What OS features are required?",
        ],
    ),
    (
        "network",
        &[
            "What network conditions must be supported?",
            "What are the connectivity requirements?",
            "What network speeds and reliability are expected?",
        ],
    ),
    (
        "databases",
        &[
            "Which specific database systems must be supported?",
            "What are the database compatibility requirements?",
            "What database features are required?",
        ],
    ),
    (
        "apis",
        &[
            "Which specific APIs and protocols must be supported?",
            "What are the API compatibility requirements?",
            "What authentication methods are required?",
        ],
    ),
];

static ENVIRONMENT_DEFAULT_QUESTIONS: &[&str] = &[
    "What is the target environment for this requirement?",
    "What environmental conditions must be met?",
    "What infrastructure is required?",
];

static DATA_QUESTIONS: &[(&str, &[&str])] = &[
    (
        "user_exists",
        &[
            "What specific test user accounts should be available?",
            "What user profiles are needed for testing?",
            "What user data should be pre-populated?",
        ],
    ),
    (
        "credentials_exist",
        &[
            "What specific user credentials should be prepared?",
            "What authentication data is required?",
            "What login information should be available?",
        ],
    ),
    (
        "form_filled",
        &[
            "What specific data should be pre-filled in forms?",
            "What test data scenarios are needed?",
            "What form data combinations should be tested?",
        ],
    ),
    (
        "data_entered",
        &[
            "What specific input data should be prepared?",
            "What test data sets are required?",
            "What data entry scenarios should be tested?",
        ],
    ),
    (
        "record_exists",
        &[
            "What specific database records should exist?",
            "What test data should be in the database?",
            "What record states should be available?",
        ],
    ),
    (
        "data_exists",
        &[
            "What specific test data should be available?",
            "What data sets are required for testing?",
            "What data conditions should exist?",
        ],
    ),
    (
        "file_exists",
        &[
            "What specific files should be available?",
            "What file types and sizes should exist?",
            "What file content should be prepared?",
        ],
    ),
    (
        "recipient_exists",
        &[
            "What specific message recipients should exist?",
            "What recipient data should be available?",
            "What recipient scenarios should be tested?",
        ],
    ),
    (
        "sender_exists",
        &[
            "What specific message senders should exist?",
            "What sender data should be available?",
            "What sender scenarios should be tested?",
        ],
    ),
];

static DATA_DEFAULT_QUESTIONS: &[&str] = &[
    "What test data or records need to be prepared?",
    "What data preconditions are required?",
    "What data states should exist?",
];

static STATE_QUESTIONS: &[(&str, &[&str])] = &[
    (
        "user_logged_in",
        &[
            "Should the user be pre-authenticated for testing?",
            "What authentication state is required?",
            "What login session should exist?",
        ],
    ),
    (
        "permissions_granted",
        &[
            "What specific user role and permissions are required?",
            "What authorization level is needed?",
            "What access rights should be configured?",
        ],
    ),
    (
        "condition_exists",
        &[
            "What specific preconditions must be met?",
            "What system state is required?",
            "What conditions should trigger this behavior?",
        ],
    ),
    (
        "error_trigger",
        &[
            "How can specific error conditions be reliably reproduced?",
            "What error states should be testable?",
            "What failure scenarios need to be triggered?",
        ],
    ),
    (
        "failure_condition",
        &[
            "What conditions will cause failure scenarios?",
            "What error states should exist?",
            "What failure paths should be tested?",
        ],
    ),
    (
        "admin_role",
        &[
            "What admin user roles should be available?",
            "What administrative permissions are needed?",
            "What admin access levels should exist?",
        ],
    ),
    (
        "manager_role",
        &[
            "What manager user roles should be available?",
            "What management permissions are needed?",
            "What manager access levels should exist?",
        ],
    ),
    (
        "user_role",
        &[
            "What regular user roles should be available?",
            "What user permissions are needed?",
            "What user access levels should exist?",
        ],
    ),
];

static STATE_DEFAULT_QUESTIONS: &[&str] = &[
    "What system state or user context is required?",
    "What preconditions must be met?",
    "What state conditions should exist?",
];

/// Ordered phrase→key map resolving an assumption description to a template
/// key; first containing phrase wins, "default" when nothing matches.
static QUESTION_KEY_PHRASES: &[(&str, &str)] = &[
    ("user exists", "user_exists"),
    ("credentials", "credentials_exist"),
    ("logged in", "user_logged_in"),
    ("permissions", "permissions_granted"),
    ("form filled", "form_filled"),
    ("data entered", "data_entered"),
    ("record exists", "record_exists"),
    ("condition exists", "condition_exists"),
    ("data exists", "data_exists"),
    ("error", "error_trigger"),
    ("failure", "failure_condition"),
    ("admin", "admin_role"),
    ("manager", "manager_role"),
    ("user", "user_role"),
    ("file exists", "file_exists"),
    ("recipient exists", "recipient_exists"),
    ("sender exists", "sender_exists"),
];

/// Build the capped, de-duplicated question list for an analysis. Issue
/// order is the detection order: ambiguity first, then assumptions.
pub fn clarifying_questions(
    ambiguity: &[AmbiguityIssue],
    assumptions: &[AssumptionIssue],
) -> Vec<String> {
    let mut questions: Vec<String> = STANDARD_QUESTIONS
        .iter()
        .map(|q| (*q).to_string())
        .collect();

    fn push_unique(questions: &mut Vec<String>, question: String) {
        if !questions.contains(&question) {
            questions.push(question);
        }
    }

    for issue in ambiguity {
        push_unique(&mut questions, ambiguity_question(issue));
    }
    for issue in assumptions {
        push_unique(&mut questions, assumption_question(issue));
    }

    questions.truncate(MAX_QUESTIONS);
    questions
}

fn first_template(templates: &[(&str, &[&str])], key: &str) -> Option<String> {
    templates
        .iter()
        .find(|(k, _)| *k == key)
        .and_then(|(_, list)| list.first())
        .map(|q| (*q).to_string())
}

fn ambiguity_question(issue: &AmbiguityIssue) -> String {
    let word = issue.text.to_lowercase();

    let (table, defaults): (&[(&str, &[&str])], &[&str]) = match issue.kind {
        AmbiguityKind::SubjectiveTerm => (SUBJECTIVE_QUESTIONS, SUBJECTIVE_DEFAULT_QUESTIONS),
        AmbiguityKind::WeakModality => (MODALITY_QUESTIONS, MODALITY_DEFAULT_QUESTIONS),
        AmbiguityKind::UndefinedReference => (REFERENCE_QUESTIONS, REFERENCE_DEFAULT_QUESTIONS),
        AmbiguityKind::NonTestableStatement => (&[], NON_TESTABLE_DEFAULT_QUESTIONS),
    };

    first_template(table, &word)
        .or_else(|| defaults.first().map(|q| (*q).to_string()))
        .unwrap_or_else(|| format!("What specific criteria define '{}'?", issue.text))
}

fn assumption_question(issue: &AssumptionIssue) -> String {
    let assumption = issue.assumption.to_lowercase();
    let key = QUESTION_KEY_PHRASES
        .iter()
        .find(|(phrase, _)| assumption.contains(phrase))
        .map(|(_, key)| *key)
        .unwrap_or("default");

    let (table, defaults): (&[(&str, &[&str])], &[&str]) = match issue.category {
        AssumptionCategory::Environment => (ENVIRONMENT_QUESTIONS, ENVIRONMENT_DEFAULT_QUESTIONS),
        AssumptionCategory::Data => (DATA_QUESTIONS, DATA_DEFAULT_QUESTIONS),
        AssumptionCategory::State => (STATE_QUESTIONS, STATE_DEFAULT_QUESTIONS),
        AssumptionCategory::Unknown => (&[], &[]),
    };

    first_template(table, key)
        .or_else(|| defaults.first().map(|q| (*q).to_string()))
        .unwrap_or_else(|| {
            format!(
                "What specific {} requirements are needed?",
                issue.category.to_string().to_lowercase()
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AssumptionKind;

    fn ambiguity_issue(kind: AmbiguityKind, text: &str) -> AmbiguityIssue {
        AmbiguityIssue {
            kind,
            text: text.to_string(),
            message: String::new(),
            start_char: None,
            end_char: None,
        }
    }

    fn assumption_issue(category: AssumptionCategory, assumption: &str) -> AssumptionIssue {
        AssumptionIssue {
            kind: AssumptionKind::Action,
            category,
            text: "action".to_string(),
            message: String::new(),
            assumption: assumption.to_string(),
        }
    }

    #[test]
    fn test_standard_questions_always_lead() {
        let questions = clarifying_questions(&[], &[]);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0], STANDARD_QUESTIONS[0]);
        assert_eq!(questions[1], STANDARD_QUESTIONS[1]);
    }

    #[test]
    fn test_first_template_wins() {
        let issue = ambiguity_issue(AmbiguityKind::SubjectiveTerm, "fast");
        let questions = clarifying_questions(&[issue], &[]);
        assert_eq!(
            questions[2],
            "What is the acceptable response time in seconds?"
        );
    }

    #[test]
    fn test_unmapped_word_falls_back_to_kind_default() {
        let issue = ambiguity_issue(AmbiguityKind::SubjectiveTerm, "robust");
        let questions = clarifying_questions(&[issue], &[]);
        assert_eq!(questions[2], SUBJECTIVE_DEFAULT_QUESTIONS[0]);
    }

    #[test]
    fn test_assumption_key_resolution() {
        let issue = assumption_issue(
            AssumptionCategory::State,
            "User is already authenticated/logged in",
        );
        let questions = clarifying_questions(&[], &[issue]);
        assert_eq!(
            questions[2],
            "Should the user be pre-authenticated for testing?"
        );
    }

    #[test]
    fn test_duplicate_questions_collapse() {
        let issues = vec![
            ambiguity_issue(AmbiguityKind::WeakModality, "should"),
            ambiguity_issue(AmbiguityKind::WeakModality, "should"),
        ];
        let questions = clarifying_questions(&issues, &[]);
        assert_eq!(questions.len(), 3);
    }

    #[test]
    fn test_cap_at_eight() {
        let issues: Vec<AmbiguityIssue> = [
            "fast", "slow", "quick", "rapid", "smooth", "responsive", "seamless", "robust",
        ]
        .iter()
        .map(|w| ambiguity_issue(AmbiguityKind::SubjectiveTerm, w))
        .collect();
        let assumption = assumption_issue(
            AssumptionCategory::Data,
            "Target record exists in the system",
        );
        let questions = clarifying_questions(&issues, &[assumption]);
        assert_eq!(questions.len(), MAX_QUESTIONS);
        let unique: std::collections::HashSet<&String> = questions.iter().collect();
        assert_eq!(unique.len(), questions.len());
    }
}
