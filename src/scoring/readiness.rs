//! Readiness aggregation: adaptive weighting of the two top-level scores,
//! bounded non-linear impacts, and a compressive normalization curve.

use super::effective_word_count;
use crate::core::ReadinessLevel;

/// Combine ambiguity and assumption scores into a readiness score in
/// [0, 95]. Higher means safer to automate. The ceiling is 95 on purpose:
/// some uncertainty always remains.
pub fn readiness_score(ambiguity_score: f64, assumption_score: f64, text: &str) -> f64 {
    // Adaptive base weights: assumptions dominate when they outscore
    // ambiguity; high ambiguity pulls weight back.
    let (mut ambiguity_weight, mut assumption_weight) = if assumption_score > ambiguity_score {
        (0.2, 0.8)
    } else if ambiguity_score > 60.0 {
        (0.7, 0.3)
    } else {
        (0.4, 0.6)
    };

    // Severity multipliers once either side crosses critical territory.
    if assumption_score > 70.0 {
        assumption_weight *= 1.5;
    }
    if ambiguity_score > 70.0 {
        ambiguity_weight *= 1.3;
    }

    let word_count = effective_word_count(text);
    let complexity_factor = if word_count < 10 {
        1.2
    } else if word_count > 100 {
        0.9
    } else {
        1.0
    };

    // Bounded non-linear impacts.
    let ambiguity_impact = ambiguity_score.powf(0.8).min(80.0) * ambiguity_weight;
    let assumption_impact = assumption_score.powf(0.9).min(85.0) * assumption_weight;
    let total_impact = ambiguity_impact + assumption_impact;

    let mut readiness = 100.0 / (1.0 + total_impact / 10.0);
    readiness *= complexity_factor;

    // Safeguards against extreme combined impact.
    if total_impact > 120.0 {
        readiness = (readiness * 0.8).max(10.0);
    } else if total_impact > 100.0 {
        readiness = (readiness * 0.9).max(15.0);
    }

    readiness.clamp(0.0, 95.0)
}

/// Three-level verdict over the readiness score.
pub fn classify_readiness(readiness: f64) -> ReadinessLevel {
    if readiness >= 70.0 {
        ReadinessLevel::Ready
    } else if readiness >= 40.0 {
        ReadinessLevel::NeedsClarification
    } else {
        ReadinessLevel::HighRisk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_scores_classify_ready() {
        let readiness = readiness_score(0.0, 0.0, "");
        assert_eq!(readiness, 95.0);
        assert_eq!(classify_readiness(readiness), ReadinessLevel::Ready);
    }

    #[test]
    fn test_both_scores_high_classify_high_risk() {
        let text = "a requirement text that is long enough to avoid the short-text multiplier";
        for (a, s) in [(80.0, 80.0), (85.0, 90.0), (100.0, 100.0)] {
            let readiness = readiness_score(a, s, text);
            assert_eq!(
                classify_readiness(readiness),
                ReadinessLevel::HighRisk,
                "scores ({a}, {s}) must be high risk"
            );
        }
    }

    #[test]
    fn test_readiness_never_exceeds_95() {
        for a in [0.0, 10.0, 50.0, 100.0] {
            for s in [0.0, 10.0, 50.0, 100.0] {
                let readiness = readiness_score(a, s, "short");
                assert!((0.0..=95.0).contains(&readiness), "({a}, {s}) -> {readiness}");
            }
        }
    }

    #[test]
    fn test_short_text_is_more_critical() {
        // The 1.2 multiplier lifts readiness for terse texts with the same
        // scores, so terse but clean text is not punished.
        let short = readiness_score(20.0, 20.0, "few words");
        let normal = readiness_score(
            20.0,
            20.0,
            "this text easily clears the ten word threshold for the neutral factor",
        );
        assert!(short > normal);
    }

    #[test]
    fn test_assumption_dominant_weighting() {
        // When assumptions outscore ambiguity they carry 0.8 of the weight,
        // so raising assumptions hurts more than raising ambiguity from the
        // same starting point.
        let text = "a text with exactly enough words to stay in neutral territory now";
        let assumption_heavy = readiness_score(10.0, 40.0, text);
        let ambiguity_heavy = readiness_score(40.0, 10.0, text);
        assert!(assumption_heavy < ambiguity_heavy);
    }

    #[test]
    fn test_boundary_classifications() {
        assert_eq!(classify_readiness(70.0), ReadinessLevel::Ready);
        assert_eq!(classify_readiness(69.9), ReadinessLevel::NeedsClarification);
        assert_eq!(classify_readiness(40.0), ReadinessLevel::NeedsClarification);
        assert_eq!(classify_readiness(39.9), ReadinessLevel::HighRisk);
    }
}
