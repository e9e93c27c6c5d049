//! Fixed vocabulary backing the assumption detector: the action-phrase map,
//! assumption-key metadata, and the indicator word lists used to decide
//! whether a precondition is already explicit in the text.

use crate::core::AssumptionCategory;

/// Action phrases and the assumption keys each one implies. Order matters:
/// issues are emitted in table order, so detection output is reproducible.
pub static ACTION_PATTERNS: &[(&str, &[&str])] = &[
    // Authentication actions
    ("login", &["user_exists", "credentials_exist"]),
    ("log in", &["user_exists", "credentials_exist"]),
    ("sign in", &["user_exists", "credentials_exist"]),
    ("authenticate", &["user_exists", "credentials_exist"]),
    ("logout", &["user_logged_in"]),
    ("log out", &["user_logged_in"]),
    ("sign out", &["user_logged_in"]),
    // Navigation and access actions
    ("navigate", &["user_logged_in"]),
    ("access", &["user_logged_in", "permissions_granted"]),
    ("view", &["user_logged_in", "permissions_granted"]),
    ("see", &["user_logged_in", "permissions_granted"]),
    ("visit", &["user_logged_in"]),
    ("go to", &["user_logged_in"]),
    ("open", &["user_logged_in"]),
    ("enter", &["user_logged_in"]),
    ("browse", &["user_logged_in"]),
    // Data manipulation actions
    ("submit", &["form_filled", "user_logged_in"]),
    ("save", &["data_entered", "user_logged_in"]),
    (
        "update",
        &["record_exists", "user_logged_in", "permissions_granted"],
    ),
    (
        "delete",
        &["record_exists", "user_logged_in", "permissions_granted"],
    ),
    (
        "edit",
        &["record_exists", "user_logged_in", "permissions_granted"],
    ),
    (
        "modify",
        &["record_exists", "user_logged_in", "permissions_granted"],
    ),
    ("create", &["user_logged_in", "permissions_granted"]),
    ("add", &["user_logged_in", "permissions_granted"]),
    ("insert", &["user_logged_in", "permissions_granted"]),
    // Search and filter actions
    ("search", &["user_logged_in"]),
    ("filter", &["user_logged_in"]),
    ("sort", &["user_logged_in"]),
    ("find", &["user_logged_in"]),
    ("query", &["user_logged_in"]),
    ("lookup", &["user_logged_in"]),
    // Verification and validation actions
    ("verify", &["condition_exists", "user_logged_in"]),
    ("check", &["condition_exists", "user_logged_in"]),
    ("validate", &["data_exists", "user_logged_in"]),
    ("confirm", &["condition_exists", "user_logged_in"]),
    ("ensure", &["condition_exists", "user_logged_in"]),
    ("assert", &["condition_exists", "user_logged_in"]),
    ("test", &["condition_exists", "user_logged_in"]),
    // File operations
    ("upload", &["file_exists", "user_logged_in"]),
    (
        "download",
        &["file_exists", "user_logged_in", "permissions_granted"],
    ),
    ("export", &["data_exists", "user_logged_in"]),
    (
        "import",
        &["file_exists", "user_logged_in", "permissions_granted"],
    ),
    ("attach", &["file_exists", "user_logged_in"]),
    (
        "share",
        &["file_exists", "user_logged_in", "permissions_granted"],
    ),
    // Communication actions
    ("send", &["recipient_exists", "user_logged_in"]),
    ("receive", &["sender_exists"]),
    ("message", &["communication_setup"]),
    ("email", &["recipient_exists", "user_logged_in"]),
    ("notify", &["recipient_exists", "user_logged_in"]),
    ("contact", &["recipient_exists", "user_logged_in"]),
    ("communicate", &["communication_setup"]),
    // User role specific actions
    ("admin", &["admin_role", "user_logged_in"]),
    ("manager", &["manager_role", "user_logged_in"]),
    ("administrator", &["admin_role", "user_logged_in"]),
    ("supervisor", &["manager_role", "user_logged_in"]),
    // Error and failure handling
    ("error", &["error_trigger"]),
    ("fail", &["failure_condition"]),
    ("crash", &["error_trigger"]),
    ("break", &["error_trigger"]),
    ("handle", &["error_trigger"]),
    ("recover", &["failure_condition"]),
    // Configuration and settings
    ("configure", &["admin_role", "user_logged_in"]),
    ("setup", &["admin_role", "user_logged_in"]),
    ("customize", &["user_logged_in"]),
    ("personalize", &["user_logged_in"]),
    ("settings", &["user_logged_in"]),
    ("preferences", &["user_logged_in"]),
    // Reporting and analytics
    (
        "report",
        &["data_exists", "user_logged_in", "permissions_granted"],
    ),
    (
        "analytics",
        &["data_exists", "user_logged_in", "permissions_granted"],
    ),
    ("dashboard", &["user_logged_in"]),
    (
        "metrics",
        &["data_exists", "user_logged_in", "permissions_granted"],
    ),
    (
        "statistics",
        &["data_exists", "user_logged_in", "permissions_granted"],
    ),
    // Integration and API actions
    ("integrate", &["external_service_exists"]),
    ("connect", &["external_service_exists"]),
    ("sync", &["external_service_exists"]),
    ("api", &["api_access_configured"]),
    ("webhook", &["webhook_configured"]),
    ("callback", &["callback_configured"]),
];

/// Human-readable description for each assumption key. Unmapped keys fall
/// back to the raw key string.
pub static ASSUMPTION_DESCRIPTIONS: &[(&str, &str)] = &[
    ("user_exists", "Valid test user exists in the system"),
    ("credentials_exist", "User credentials are available and valid"),
    ("user_logged_in", "User is already authenticated/logged in"),
    (
        "permissions_granted",
        "User has necessary permissions for the action",
    ),
    ("form_filled", "Form is already filled with valid data"),
    ("data_entered", "Required data has been entered"),
    ("record_exists", "Target record exists in the system"),
    ("condition_exists", "Condition to verify is present"),
    ("data_exists", "Required data exists for validation"),
    ("error_trigger", "Error condition can be triggered"),
    ("failure_condition", "Failure scenario can be reproduced"),
    ("admin_role", "Admin user role is available"),
    ("manager_role", "Manager user role is available"),
    ("user_role", "Regular user role is available"),
    ("file_exists", "Required file exists for the operation"),
    ("recipient_exists", "Message recipient exists"),
    ("sender_exists", "Message sender exists"),
    ("communication_setup", "Communication channel is configured"),
    (
        "external_service_exists",
        "External service or API is available and accessible",
    ),
    (
        "api_access_configured",
        "API access credentials and endpoints are configured",
    ),
    (
        "webhook_configured",
        "Webhook endpoints are set up and accessible",
    ),
    (
        "callback_configured",
        "Callback mechanisms are properly configured",
    ),
];

/// Category of each assumption key. Total over the keys the action map can
/// produce; anything else resolves to `Unknown`.
pub static KEY_CATEGORIES: &[(&str, AssumptionCategory)] = &[
    ("user_exists", AssumptionCategory::Data),
    ("credentials_exist", AssumptionCategory::Data),
    ("user_logged_in", AssumptionCategory::State),
    ("permissions_granted", AssumptionCategory::State),
    ("form_filled", AssumptionCategory::Data),
    ("data_entered", AssumptionCategory::Data),
    ("record_exists", AssumptionCategory::Data),
    ("condition_exists", AssumptionCategory::State),
    ("data_exists", AssumptionCategory::Data),
    ("error_trigger", AssumptionCategory::State),
    ("failure_condition", AssumptionCategory::State),
    ("admin_role", AssumptionCategory::State),
    ("manager_role", AssumptionCategory::State),
    ("user_role", AssumptionCategory::State),
    ("file_exists", AssumptionCategory::Data),
    ("recipient_exists", AssumptionCategory::Data),
    ("sender_exists", AssumptionCategory::Data),
    ("communication_setup", AssumptionCategory::Environment),
    ("external_service_exists", AssumptionCategory::Environment),
    ("api_access_configured", AssumptionCategory::Environment),
    ("webhook_configured", AssumptionCategory::Environment),
    ("callback_configured", AssumptionCategory::Environment),
];

/// Phrases that make an assumption explicit in the text; a key with any of
/// its indicators present is not reported.
pub static EXPLICIT_INDICATORS: &[(&str, &[&str])] = &[
    ("user_exists", &["user exists", "test user", "valid user"]),
    (
        "credentials_exist",
        &["credentials", "password", "login details"],
    ),
    (
        "user_logged_in",
        &["logged in", "authenticated", "signed in"],
    ),
    (
        "permissions_granted",
        &["permission", "authorized", "access granted"],
    ),
    ("form_filled", &["filled", "entered", "completed"]),
    ("data_entered", &["entered", "provided", "input"]),
    ("record_exists", &["exists", "available", "present"]),
    ("condition_exists", &["condition", "scenario", "case"]),
    ("data_exists", &["data exists", "available data"]),
    ("error_trigger", &["error occurs", "error condition"]),
    ("failure_condition", &["failure", "error case"]),
];

/// Environment words whose presence satisfies a UI-interaction requirement.
pub static ENVIRONMENT_INDICATORS: &[&str] = &[
    "browser", "chrome", "firefox", "safari", "edge", "mobile", "desktop", "tablet", "ios",
    "android", "windows", "mac", "linux", "device", "network",
];

/// UI-interaction verbs that imply an environment.
pub static UI_ACTIONS: &[&str] = &["click", "type", "select", "scroll", "hover", "tap"];

/// User-scoped nouns that imply an authenticated user context.
pub static USER_SCOPED_NOUNS: &[&str] = &["profile", "settings", "account", "dashboard"];

/// Words that count as explicit user context.
pub static USER_CONTEXT_INDICATORS: &[&str] = &[
    "user",
    "login",
    "authenticate",
    "sign in",
    "logged in",
    "account",
    "profile",
    "session",
];

/// Data-operation verbs that imply pre-existing data.
pub static DATA_OPERATION_VERBS: &[&str] = &["search", "filter", "sort", "export"];

/// Words that count as explicit data context.
pub static DATA_CONTEXT_INDICATORS: &[&str] = &[
    "data",
    "record",
    "entry",
    "information",
    "content",
    "database",
    "exists",
    "available",
    "present",
];

/// Resolve an assumption key to its category, with the documented `Unknown`
/// fallback for unmapped keys.
pub fn resolve_key_category(key: &str) -> AssumptionCategory {
    KEY_CATEGORIES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, category)| *category)
        .unwrap_or(AssumptionCategory::Unknown)
}

/// Resolve an assumption key to its human-readable description, falling back
/// to the raw key when unmapped.
pub fn describe_key(key: &str) -> String {
    ASSUMPTION_DESCRIPTIONS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, description)| (*description).to_string())
        .unwrap_or_else(|| key.to_string())
}
