//! Assumption scoring with per-category strength classification.
//!
//! Each category (Environment/Data/State) gets a weight sum with cascading
//! key resolution, a stacking bonus for multiple assumptions, a capped
//! density term, and a diminishing-returns compression above 70. Strength
//! labels are independent of the numeric score.

use super::round1;
use crate::core::{
    AssumptionAnalysis, AssumptionCategory, AssumptionComponents, AssumptionIssue,
    CategoryBreakdown, Strength,
};

/// Per-key weights, grouped by category. The family keys (browsers, devices,
/// ...) are hit through the keyword fallback in [`issue_weight`].
static ENVIRONMENT_WEIGHTS: &[(&str, f64)] = &[
    ("ui_interaction", 14.0),
    ("browsers", 12.0),
    ("devices", 12.0),
    ("operating_systems", 11.0),
    ("network", 10.0),
    ("display", 9.0),
    ("databases", 15.0),
    ("apis", 12.0),
    ("cloud_providers", 11.0),
];

static DATA_WEIGHTS: &[(&str, f64)] = &[
    ("user_exists", 10.0),
    ("credentials_exist", 11.0),
    ("form_filled", 8.0),
    ("data_entered", 9.0),
    ("record_exists", 9.0),
    ("data_exists", 8.0),
    ("file_exists", 9.0),
    ("recipient_exists", 8.0),
    ("sender_exists", 8.0),
    ("task_exists", 8.0),
    ("item_exists", 7.0),
    ("issue_exists", 8.0),
];

static STATE_WEIGHTS: &[(&str, f64)] = &[
    ("user_logged_in", 13.0),
    ("permissions_granted", 14.0),
    ("condition_exists", 9.0),
    ("error_trigger", 10.0),
    ("failure_condition", 9.0),
    ("admin_role", 11.0),
    ("manager_role", 10.0),
    ("user_role", 10.0),
    ("account_active", 12.0),
    ("form_valid", 8.0),
    ("space_available", 8.0),
];

/// Ordered phrase→key map used to resolve an assumption description back to
/// its weight key. First containing phrase wins.
static WEIGHT_KEY_PHRASES: &[(&str, &str)] = &[
    ("user exists", "user_exists"),
    ("credentials exist", "credentials_exist"),
    ("user logged in", "user_logged_in"),
    ("permissions granted", "permissions_granted"),
    ("form filled", "form_filled"),
    ("data entered", "data_entered"),
    ("record exists", "record_exists"),
    ("data exists", "data_exists"),
    ("condition exists", "condition_exists"),
    ("file exists", "file_exists"),
    ("recipient exists", "recipient_exists"),
    ("sender exists", "sender_exists"),
    ("task exists", "task_exists"),
    ("item exists", "item_exists"),
    ("issue exists", "issue_exists"),
    ("error trigger", "error_trigger"),
    ("failure condition", "failure_condition"),
    ("admin role", "admin_role"),
    ("manager role", "manager_role"),
    ("user role", "user_role"),
    ("account active", "account_active"),
    ("form valid", "form_valid"),
    ("space available", "space_available"),
];

/// Keyword families used when no exact phrase resolves, with their fallback
/// weights for categories that lack the family key.
static KEYWORD_FAMILIES: &[(&[&str], &str, f64)] = &[
    (
        &["browser", "chrome", "firefox", "safari", "edge"],
        "browsers",
        20.0,
    ),
    (&["mobile", "desktop", "tablet", "phone"], "devices", 20.0),
    (
        &["ios", "android", "windows", "mac", "linux"],
        "operating_systems",
        18.0,
    ),
    (
        &["network", "wifi", "cellular", "broadband"],
        "network",
        16.0,
    ),
    (
        &["database", "mysql", "postgresql", "mongodb"],
        "databases",
        24.0,
    ),
    (&["api", "endpoint", "rest", "graphql"], "apis", 20.0),
];

const FLAT_DEFAULT_WEIGHT: f64 = 15.0;

/// Phrases marking an assumption as very likely to break automation.
static STRONG_PHRASES: &[(AssumptionCategory, &[&str])] = &[
    (
        AssumptionCategory::Environment,
        &[
            "browser",
            "device",
            "operating system",
            "database",
            "api",
            "network",
            "server",
            "infrastructure",
            "platform",
            "environment",
        ],
    ),
    (
        AssumptionCategory::State,
        &[
            "user logged in",
            "authenticated",
            "authorized",
            "permissions granted",
            "admin role",
            "session active",
            "account active",
            "system configured",
        ],
    ),
    (
        AssumptionCategory::Data,
        &[
            "user exists",
            "credentials exist",
            "test data prepared",
            "database populated",
            "external service available",
            "api endpoint configured",
        ],
    ),
];

/// Phrases marking an assumption as contextual or optional.
static WEAK_PHRASES: &[(AssumptionCategory, &[&str])] = &[
    (
        AssumptionCategory::Environment,
        &["internet connection", "power available", "display resolution"],
    ),
    (
        AssumptionCategory::State,
        &["user preferences set", "notifications enabled", "theme selected"],
    ),
    (
        AssumptionCategory::Data,
        &["sample data", "demo content", "placeholder text", "optional fields"],
    ),
];

fn category_weights(category: AssumptionCategory) -> &'static [(&'static str, f64)] {
    match category {
        AssumptionCategory::Environment => ENVIRONMENT_WEIGHTS,
        AssumptionCategory::Data => DATA_WEIGHTS,
        AssumptionCategory::State => STATE_WEIGHTS,
        AssumptionCategory::Unknown => &[],
    }
}

fn weight_for_key(weights: &[(&str, f64)], key: &str, default: f64) -> f64 {
    weights
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, w)| *w)
        .unwrap_or(default)
}

/// Resolve a per-issue weight from the assumption description: exact phrase
/// match first, then keyword family, then the flat default. Every branch is
/// total; the default is reachable for free-form descriptions.
fn issue_weight(issue: &AssumptionIssue, category: AssumptionCategory) -> f64 {
    let assumption = issue.assumption.to_lowercase();
    let weights = category_weights(category);

    for (phrase, key) in WEIGHT_KEY_PHRASES {
        if assumption.contains(phrase) {
            return weight_for_key(weights, key, FLAT_DEFAULT_WEIGHT);
        }
    }

    for (keywords, family_key, family_default) in KEYWORD_FAMILIES {
        if keywords.iter().any(|word| assumption.contains(word)) {
            return weight_for_key(weights, family_key, *family_default);
        }
    }

    FLAT_DEFAULT_WEIGHT
}

/// STRONG/WEAK classification for a single assumption. Defaults depend on
/// the category: environment and state assumptions are usually critical,
/// data assumptions are more flexible.
fn classify_strength(issue: &AssumptionIssue, category: AssumptionCategory) -> Strength {
    let assumption = issue.assumption.to_lowercase();

    if let Some((_, phrases)) = STRONG_PHRASES.iter().find(|(c, _)| *c == category) {
        if phrases.iter().any(|phrase| assumption.contains(phrase)) {
            return Strength::Strong;
        }
    }

    if let Some((_, phrases)) = WEAK_PHRASES.iter().find(|(c, _)| *c == category) {
        if phrases.iter().any(|phrase| assumption.contains(phrase)) {
            return Strength::Weak;
        }
    }

    match category {
        AssumptionCategory::Environment | AssumptionCategory::State => Strength::Strong,
        _ => Strength::Weak,
    }
}

/// Density cap and coefficient per category: state assumptions are the most
/// critical, data the least.
fn density_params(category: AssumptionCategory) -> (f64, f64) {
    match category {
        AssumptionCategory::State => (30.0, 60.0),
        AssumptionCategory::Environment => (25.0, 50.0),
        _ => (20.0, 40.0),
    }
}

/// Nominal text length for assumption density. Deliberately fixed rather
/// than measured; the calibration constants below assume it.
const NOMINAL_WORD_COUNT: f64 = 50.0;

fn category_score(issues: &[&AssumptionIssue], category: AssumptionCategory) -> (f64, Strength) {
    if issues.is_empty() {
        return (0.0, Strength::None);
    }

    let mut has_strong = false;
    let mut has_weak = false;
    let mut base = 0.0;

    for issue in issues {
        match classify_strength(issue, category) {
            Strength::Strong => has_strong = true,
            _ => has_weak = true,
        }
        base += issue_weight(issue, category);
    }

    // Each assumption beyond the first stacks.
    if issues.len() > 1 {
        base += (issues.len() - 1) as f64 * 5.0;
    }

    let density = issues.len() as f64 / NOMINAL_WORD_COUNT;
    let (cap, coefficient) = density_params(category);
    let raw = base + (density * coefficient).min(cap);

    let compressed = if raw > 70.0 {
        70.0 + (raw - 70.0) * 0.4
    } else {
        raw
    };
    let score = compressed.min(100.0);

    let strength = if has_strong {
        Strength::Strong
    } else if has_weak {
        Strength::Weak
    } else {
        Strength::Unknown
    };

    (score, strength)
}

/// Score a set of detected assumption issues. Pure; the `text` parameter is
/// part of the contract but density uses the nominal length above.
pub fn score_assumptions(issues: &[AssumptionIssue], _text: &str) -> AssumptionAnalysis {
    if issues.is_empty() {
        return AssumptionAnalysis {
            score: 0.0,
            components: AssumptionComponents::default(),
        };
    }

    let partition = |category: AssumptionCategory| -> Vec<&AssumptionIssue> {
        issues
            .iter()
            .filter(|issue| issue.category == category)
            .collect()
    };

    let environment_issues = partition(AssumptionCategory::Environment);
    let data_issues = partition(AssumptionCategory::Data);
    let state_issues = partition(AssumptionCategory::State);

    let (environment_score, environment_strength) =
        category_score(&environment_issues, AssumptionCategory::Environment);
    let (data_score, data_strength) = category_score(&data_issues, AssumptionCategory::Data);
    let (state_score, state_strength) = category_score(&state_issues, AssumptionCategory::State);

    // State weighs heaviest, then environment, then data.
    let overall = environment_score * 0.35 + data_score * 0.25 + state_score * 0.4;

    AssumptionAnalysis {
        score: round1(overall),
        components: AssumptionComponents {
            environment: CategoryBreakdown {
                count: environment_issues.len(),
                strength: environment_strength,
            },
            data: CategoryBreakdown {
                count: data_issues.len(),
                strength: data_strength,
            },
            state: CategoryBreakdown {
                count: state_issues.len(),
                strength: state_strength,
            },
        },
    }
}
