use thiserror::Error;

/// Failures that can reach a caller of the analysis API.
///
/// Scoring and aggregation never fail: every numeric path is clamped and
/// every table lookup has a default branch. The only propagated error is a
/// tokenizer invocation failure.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The tokenizer itself failed; no analysis could be produced.
    #[error("analysis unavailable: {source}")]
    AnalysisUnavailable {
        #[source]
        source: anyhow::Error,
    },
}

impl AnalysisError {
    pub fn unavailable(source: anyhow::Error) -> Self {
        Self::AnalysisUnavailable { source }
    }
}
