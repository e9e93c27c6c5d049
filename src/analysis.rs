//! Top-level analysis orchestration: tokenize, detect, score, aggregate,
//! report.

use crate::analyzers::{BasicTokenizer, Tokenizer};
use crate::core::cache::AnalysisCache;
use crate::core::errors::AnalysisError;
use crate::core::AnalysisResult;
use crate::detect::{detect_ambiguities, detect_assumptions};
use crate::report::{clarifying_questions, format_issues};
use crate::scoring::{
    classify_readiness, readiness_score, round1, score_ambiguity, score_assumptions,
};
use crate::vocab::Lexicon;

/// Analyzes requirement text end to end. Stateless; every call is a pure
/// function of the input text (given a deterministic tokenizer).
pub struct RequirementAnalyzer<T: Tokenizer = BasicTokenizer> {
    tokenizer: T,
    lexicon: &'static Lexicon,
}

impl RequirementAnalyzer<BasicTokenizer> {
    /// Analyzer over the degraded built-in tokenizer and the shared lexicon.
    pub fn new() -> Self {
        Self::with_tokenizer(BasicTokenizer)
    }
}

impl Default for RequirementAnalyzer<BasicTokenizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tokenizer> RequirementAnalyzer<T> {
    /// Analyzer over a caller-supplied tokenizer (e.g. a real POS tagger).
    pub fn with_tokenizer(tokenizer: T) -> Self {
        Self {
            tokenizer,
            lexicon: Lexicon::shared(),
        }
    }

    pub fn with_lexicon(tokenizer: T, lexicon: &'static Lexicon) -> Self {
        Self { tokenizer, lexicon }
    }

    /// Run the full pipeline on one text. The only failure is a tokenizer
    /// invocation error, surfaced as [`AnalysisError::AnalysisUnavailable`].
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let tokens = self
            .tokenizer
            .tokenize(text)
            .map_err(AnalysisError::unavailable)?;

        let ambiguity_issues = detect_ambiguities(&tokens, text, self.lexicon);
        let assumption_issues = detect_assumptions(text);

        let ambiguity = score_ambiguity(&ambiguity_issues, text);
        let assumptions = score_assumptions(&assumption_issues, text);

        let readiness = readiness_score(ambiguity.score, assumptions.score, text);
        let readiness_level = classify_readiness(readiness);

        log::debug!(
            "analyzed {} words: {} ambiguity / {} assumption issues, readiness {:.1} ({})",
            text.split_whitespace().count(),
            ambiguity_issues.len(),
            assumption_issues.len(),
            readiness,
            readiness_level,
        );

        let issues = format_issues(&ambiguity_issues, &assumption_issues);
        let questions = clarifying_questions(&ambiguity_issues, &assumption_issues);

        Ok(AnalysisResult {
            ambiguity,
            assumptions,
            readiness_score: round1(readiness),
            readiness_level,
            issues,
            clarifying_questions: questions,
        })
    }
}

/// [`RequirementAnalyzer`] with a memoizing result cache in front.
pub struct CachedAnalyzer<T: Tokenizer = BasicTokenizer> {
    analyzer: RequirementAnalyzer<T>,
    cache: AnalysisCache,
}

impl CachedAnalyzer<BasicTokenizer> {
    pub fn new() -> Self {
        Self::with_analyzer(RequirementAnalyzer::new())
    }
}

impl Default for CachedAnalyzer<BasicTokenizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tokenizer> CachedAnalyzer<T> {
    pub fn with_analyzer(analyzer: RequirementAnalyzer<T>) -> Self {
        Self {
            analyzer,
            cache: AnalysisCache::new(),
        }
    }

    /// Return the cached result for `text` or analyze and cache it. Errors
    /// are never cached.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        if let Some(result) = self.cache.get(text) {
            return Ok(result);
        }

        let result = self.analyzer.analyze(text)?;
        self.cache.insert(text, result.clone());
        Ok(result)
    }

    pub fn cache(&self) -> &AnalysisCache {
        &self.cache
    }
}
