pub mod cache;
pub mod errors;

use serde::{Deserialize, Serialize};

/// A single token produced by a [`Tokenizer`](crate::analyzers::Tokenizer).
///
/// `pos` and `dep` are `None` when the backing tokenizer cannot supply
/// part-of-speech or dependency tags; detection degrades gracefully in that
/// case (the grammatical filters simply never fire).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub lower: String,
    /// Universal POS tag, e.g. "PRON", when available.
    pub pos: Option<String>,
    /// Dependency label, e.g. "det" or "poss", when available.
    pub dep: Option<String>,
    /// Byte offset of the token in the (lowercased) analyzed text.
    pub offset: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, offset: usize) -> Self {
        let text = text.into();
        let lower = text.to_lowercase();
        Self {
            text,
            lower,
            pos: None,
            dep: None,
            offset,
        }
    }

    pub fn with_tags(mut self, pos: Option<String>, dep: Option<String>) -> Self {
        self.pos = pos;
        self.dep = dep;
        self
    }

    pub fn is_pronoun(&self) -> bool {
        self.pos.as_deref() == Some("PRON")
    }

    pub fn is_determiner_or_possessive(&self) -> bool {
        matches!(self.dep.as_deref(), Some("det") | Some("poss"))
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AmbiguityKind {
    SubjectiveTerm,
    WeakModality,
    UndefinedReference,
    NonTestableStatement,
}

impl std::fmt::Display for AmbiguityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(AmbiguityKind, &str)] = &[
            (AmbiguityKind::SubjectiveTerm, "Subjective term"),
            (AmbiguityKind::WeakModality, "Weak modality"),
            (AmbiguityKind::UndefinedReference, "Undefined reference"),
            (AmbiguityKind::NonTestableStatement, "Non-testable statement"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(k, _)| k == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

/// A detected ambiguity problem. Immutable once created.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AmbiguityIssue {
    pub kind: AmbiguityKind,
    /// The matched term or phrase, as it appeared in the text.
    pub text: String,
    pub message: String,
    /// Best-effort byte span into the analyzed text; `None` when the match
    /// could not be located ("position unknown", not a missing issue).
    pub start_char: Option<usize>,
    pub end_char: Option<usize>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AssumptionKind {
    Action,
    Environment,
    Context,
}

impl std::fmt::Display for AssumptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(AssumptionKind, &str)] = &[
            (AssumptionKind::Action, "Action assumption"),
            (AssumptionKind::Environment, "Environment assumption"),
            (AssumptionKind::Context, "Context assumption"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(k, _)| k == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AssumptionCategory {
    Environment,
    Data,
    State,
    Unknown,
}

impl std::fmt::Display for AssumptionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(AssumptionCategory, &str)] = &[
            (AssumptionCategory::Environment, "Environment"),
            (AssumptionCategory::Data, "Data"),
            (AssumptionCategory::State, "State"),
            (AssumptionCategory::Unknown, "Unknown"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(c, _)| c == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

/// A detected implicit assumption. Immutable once created.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AssumptionIssue {
    pub kind: AssumptionKind,
    pub category: AssumptionCategory,
    /// The action or trigger that implied the assumption.
    pub text: String,
    pub message: String,
    /// Human-readable description of the unstated precondition.
    pub assumption: String,
}

/// Reliability label for the ambiguity score, based on text length and
/// issue diversity.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Confidence {
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "LOW")]
    Low,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Confidence::High => "HIGH",
            Confidence::Medium => "MEDIUM",
            Confidence::Low => "LOW",
        };
        write!(f, "{s}")
    }
}

/// Qualitative severity label for an assumption category, independent of its
/// numeric score.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Strength {
    #[serde(rename = "STRONG")]
    Strong,
    #[serde(rename = "WEAK")]
    Weak,
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Strength::Strong => "STRONG",
            Strength::Weak => "WEAK",
            Strength::None => "NONE",
            Strength::Unknown => "UNKNOWN",
        };
        write!(f, "{s}")
    }
}

/// Classification levels for requirement readiness.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReadinessLevel {
    #[serde(rename = "Ready")]
    Ready,
    #[serde(rename = "Needs clarification")]
    NeedsClarification,
    #[serde(rename = "High risk for automation")]
    HighRisk,
}

impl std::fmt::Display for ReadinessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(ReadinessLevel, &str)] = &[
            (ReadinessLevel::Ready, "Ready"),
            (ReadinessLevel::NeedsClarification, "Needs clarification"),
            (ReadinessLevel::HighRisk, "High risk for automation"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(l, _)| l == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

/// Per-component breakdown of the ambiguity score.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct AmbiguityComponents {
    pub lexical: f64,
    pub testability: f64,
    pub references: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AmbiguityAnalysis {
    pub score: f64,
    pub confidence: Confidence,
    pub components: AmbiguityComponents,
}

/// Count and strength for one assumption category.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryBreakdown {
    pub count: usize,
    pub strength: Strength,
}

impl Default for CategoryBreakdown {
    fn default() -> Self {
        Self {
            count: 0,
            strength: Strength::None,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct AssumptionComponents {
    pub environment: CategoryBreakdown,
    pub data: CategoryBreakdown,
    pub state: CategoryBreakdown,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AssumptionAnalysis {
    pub score: f64,
    pub components: AssumptionComponents,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum IssueType {
    Ambiguity,
    Assumption,
}

/// An issue formatted for reporting: message plus an explanation of why it
/// matters for test automation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ReportedIssue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<AssumptionCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assumption: Option<String>,
    pub impact: String,
}

/// Complete analysis output for one text. Transient; serialized by callers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub ambiguity: AmbiguityAnalysis,
    pub assumptions: AssumptionAnalysis,
    pub readiness_score: f64,
    pub readiness_level: ReadinessLevel,
    /// Formatted issues in detection order: ambiguity first, then assumptions.
    pub issues: Vec<ReportedIssue>,
    /// At most 8 distinct clarifying questions, order-preserving.
    pub clarifying_questions: Vec<String>,
}
