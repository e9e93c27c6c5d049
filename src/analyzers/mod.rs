//! The tokenizer seam.
//!
//! Real part-of-speech and dependency tagging is a collaborator concern; the
//! core only consumes the [`Tokenizer`] trait. [`BasicTokenizer`] is the
//! shipped fallback: it splits on unicode word bounds and supplies no tags,
//! which disables the grammatical filters but keeps every lexical and regex
//! detector working.

use crate::core::Token;
use anyhow::Result;
use unicode_segmentation::UnicodeSegmentation;

/// Produces the token stream the detectors consume. Implementations must be
/// deterministic for identical input.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>>;
}

/// Degraded tokenizer: lowercases the text, keeps word tokens, supplies no
/// POS or dependency tags.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicTokenizer;

impl Tokenizer for BasicTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        let lowered = text.to_lowercase();
        let tokens = lowered
            .split_word_bound_indices()
            .filter(|(_, word)| word.chars().any(|c| c.is_alphanumeric()))
            .map(|(offset, word)| Token::new(word, offset))
            .collect();
        Ok(tokens)
    }
}

/// Default tokenizer for callers that do not bring their own tagger.
pub fn get_tokenizer() -> BasicTokenizer {
    BasicTokenizer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenizer_lowercases_and_offsets() {
        let tokens = BasicTokenizer.tokenize("The API responds").unwrap();
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["the", "api", "responds"]);
        assert_eq!(tokens[1].offset, 4);
        assert!(tokens.iter().all(|t| t.pos.is_none() && t.dep.is_none()));
    }

    #[test]
    fn test_basic_tokenizer_skips_punctuation() {
        let tokens = BasicTokenizer.tokenize("well, ok - done.").unwrap();
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["well", "ok", "done"]);
    }

    #[test]
    fn test_empty_text_yields_no_tokens() {
        assert!(BasicTokenizer.tokenize("").unwrap().is_empty());
    }
}
