//! The scoring and classification engine.
//!
//! Detectors hand over heterogeneous issue lists; these modules turn them
//! into calibrated, bounded component scores, qualitative labels, and the
//! combined readiness verdict. All thresholds and coefficients here are
//! calibration constants — changing any of them changes historical scores.

pub mod ambiguity;
pub mod assumption;
pub mod readiness;

pub use ambiguity::score_ambiguity;
pub use assumption::score_assumptions;
pub use readiness::{classify_readiness, readiness_score};

/// Word count used by density and complexity formulas. Empty text counts as
/// a nominal 50 words so density terms stay finite.
pub(crate) fn effective_word_count(text: &str) -> usize {
    if text.is_empty() {
        50
    } else {
        text.split_whitespace().count()
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
