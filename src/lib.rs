// Export modules for library usage
pub mod analysis;
pub mod analyzers;
pub mod core;
pub mod detect;
pub mod report;
pub mod scoring;
pub mod vocab;

// Re-export commonly used types
pub use crate::core::{
    AmbiguityAnalysis, AmbiguityComponents, AmbiguityIssue, AmbiguityKind, AnalysisResult,
    AssumptionAnalysis, AssumptionCategory, AssumptionComponents, AssumptionIssue, AssumptionKind,
    CategoryBreakdown, Confidence, IssueType, ReadinessLevel, ReportedIssue, Strength, Token,
};

pub use crate::analysis::{CachedAnalyzer, RequirementAnalyzer};

pub use crate::analyzers::{get_tokenizer, BasicTokenizer, Tokenizer};

pub use crate::core::cache::AnalysisCache;

pub use crate::core::errors::AnalysisError;

pub use crate::detect::{detect_ambiguities, detect_assumptions};

pub use crate::scoring::{
    classify_readiness, readiness_score, score_ambiguity, score_assumptions,
};

pub use crate::vocab::Lexicon;
