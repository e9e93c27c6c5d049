//! Rule-based ambiguity detection: subjective terms with context-sensitive
//! suppression, weak modality, undefined references, and non-testable
//! phrasing.

use crate::core::{AmbiguityIssue, AmbiguityKind, Token};
use crate::vocab::{ContextFamily, Lexicon};

/// Detect every kind of ambiguity in `text`. Pure and deterministic; issue
/// order is fixed (subjective, modality, references, non-testable; each in
/// token/pattern order).
pub fn detect_ambiguities(tokens: &[Token], text: &str, lexicon: &Lexicon) -> Vec<AmbiguityIssue> {
    let text_lower = text.to_lowercase();
    let mut issues = Vec::new();

    issues.extend(detect_subjective_terms(tokens, text, &text_lower, lexicon));
    issues.extend(detect_weak_modality(tokens, &text_lower, lexicon));
    issues.extend(detect_undefined_references(tokens, &text_lower, lexicon));
    issues.extend(detect_non_testable_statements(&text_lower, lexicon));

    issues
}

/// Flag subjective terms unless corroborating context appears in a window
/// around the token (timing vocabulary near "fast", protocol/auth vocabulary
/// near "secure", numeric evidence near generic terms, and so on).
fn detect_subjective_terms(
    tokens: &[Token],
    text: &str,
    text_lower: &str,
    lexicon: &Lexicon,
) -> Vec<AmbiguityIssue> {
    tokens
        .iter()
        .filter(|token| lexicon.is_subjective_term(&token.lower))
        .filter(|token| !has_corroborating_context(token, text, lexicon))
        .map(|token| {
            let span = resolve_span(text_lower, token);
            AmbiguityIssue {
                kind: AmbiguityKind::SubjectiveTerm,
                text: token.text.clone(),
                message: format!(
                    "Subjective term '{}' lacks specific, measurable criteria",
                    token.text
                ),
                start_char: span.map(|(s, _)| s),
                end_char: span.map(|(_, e)| e),
            }
        })
        .collect()
}

fn detect_weak_modality(
    tokens: &[Token],
    text_lower: &str,
    lexicon: &Lexicon,
) -> Vec<AmbiguityIssue> {
    tokens
        .iter()
        .filter(|token| lexicon.is_weak_modality(&token.lower))
        .map(|token| {
            let span = resolve_span(text_lower, token);
            AmbiguityIssue {
                kind: AmbiguityKind::WeakModality,
                text: token.text.clone(),
                message: format!("Optional/weak requirement term: '{}'", token.text),
                start_char: span.map(|(s, _)| s),
                end_char: span.map(|(_, e)| e),
            }
        })
        .collect()
}

/// Flag pronouns/demonstratives from the fixed list when the tagger marks
/// them as a pronoun or a determiner/possessive dependent.
///
/// Known limitation: this is a heuristic, not coreference resolution — it
/// also flags pronouns with a perfectly clear antecedent. Downstream score
/// calibration depends on that behavior, so it is preserved as documented.
fn detect_undefined_references(
    tokens: &[Token],
    text_lower: &str,
    lexicon: &Lexicon,
) -> Vec<AmbiguityIssue> {
    tokens
        .iter()
        .filter(|token| lexicon.is_undefined_reference(&token.lower))
        .filter(|token| token.is_pronoun() || token.is_determiner_or_possessive())
        .map(|token| {
            let span = resolve_span(text_lower, token);
            AmbiguityIssue {
                kind: AmbiguityKind::UndefinedReference,
                text: token.text.clone(),
                message: format!("Potentially undefined reference: '{}'", token.text),
                start_char: span.map(|(s, _)| s),
                end_char: span.map(|(_, e)| e),
            }
        })
        .collect()
}

/// Run the non-testable regexes over the lowercased full text, independent
/// of tokenization.
fn detect_non_testable_statements(text_lower: &str, lexicon: &Lexicon) -> Vec<AmbiguityIssue> {
    let mut issues = Vec::new();

    for pattern in lexicon.non_testable_patterns() {
        for m in pattern.find_iter(text_lower) {
            issues.push(AmbiguityIssue {
                kind: AmbiguityKind::NonTestableStatement,
                text: m.as_str().to_string(),
                message: format!("Non-testable requirement: '{}'", m.as_str()),
                start_char: Some(m.start()),
                end_char: Some(m.end()),
            });
        }
    }

    issues
}

fn has_corroborating_context(token: &Token, text: &str, lexicon: &Lexicon) -> bool {
    let family = ContextFamily::for_term(&token.lower);
    let window = context_window(text, token.offset, token.text.len(), family.window());
    let window = window.to_lowercase();

    lexicon
        .context_patterns(family)
        .iter()
        .any(|pattern| pattern.is_match(&window))
}

/// Slice a window of `size` bytes on each side of the token, clamped to char
/// boundaries. Token offsets come from the tokenizer and may not line up
/// with the analyzed text exactly; the window is best-effort.
fn context_window(text: &str, offset: usize, token_len: usize, size: usize) -> &str {
    let start = floor_boundary(text, offset.saturating_sub(size));
    let end = ceil_boundary(text, (offset + token_len + size).min(text.len()));
    &text[start..end]
}

/// Best-effort span of the token in the lowercased text, searching forward
/// from the reported offset. `None` means "position unknown", never a crash.
fn resolve_span(text_lower: &str, token: &Token) -> Option<(usize, usize)> {
    let from = floor_boundary(text_lower, token.offset.min(text_lower.len()));
    text_lower[from..].find(token.lower.as_str()).map(|i| {
        let start = from + i;
        (start, start + token.lower.len())
    })
}

fn floor_boundary(text: &str, mut index: usize) -> usize {
    index = index.min(text.len());
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_boundary(text: &str, mut index: usize) -> usize {
    index = index.min(text.len());
    while index < text.len() && !text.is_char_boundary(index) {
        index += 1;
    }
    index
}
