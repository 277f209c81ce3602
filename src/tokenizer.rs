//! Text normalization into candidate word tokens.

/// Tokens shorter than this (in characters) are dropped by default.
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Splits a text into word tokens.
///
/// ASCII punctuation is deleted *before* splitting, without being replaced by whitespace, so
/// `"good-bye"` yields the single token `"goodbye"`. The remaining text is split on runs of
/// whitespace and tokens with fewer than `min_length` characters are discarded. Case is left
/// untouched: `"Word"` and `"word"` are different tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    min_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH)
    }
}

impl Tokenizer {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let stripped: String = text
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect();
        stripped
            .split_whitespace()
            .filter(|word| word.chars().count() >= self.min_length)
            .map(str::to_owned)
            .collect()
    }
}

/// Shorthand for `Tokenizer::new(min_length).tokenize(text)`.
pub fn tokenize(text: &str, min_length: usize) -> Vec<String> {
    Tokenizer::new(min_length).tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_is_deleted_not_replaced() {
        assert_eq!(tokenize("good-bye good-bye", 4), vec!["goodbye", "goodbye"]);
        assert_eq!(tokenize("end.Start", 4), vec!["endStart"]);
    }

    #[test]
    fn splits_on_whitespace_runs() {
        assert_eq!(
            tokenize("  alpha\t\tbravo\n\ncharlie  ", 1),
            vec!["alpha", "bravo", "charlie"]
        );
    }

    #[test]
    fn minimum_length_is_inclusive() {
        // four letter words are kept, three letter ones dropped
        assert_eq!(tokenize("the cats sat quietly", 4), vec!["cats", "quietly"]);
        assert!(tokenize("The cat sat. The cat ran!", 4).is_empty());
    }

    #[test]
    fn default_min_length_is_four() {
        assert_eq!(Tokenizer::default().min_length(), 4);
        assert_eq!(Tokenizer::default().tokenize("abc abcd"), vec!["abcd"]);
    }

    #[test]
    fn length_counts_characters() {
        // 4 chars, 8 bytes
        assert_eq!(tokenize("тест ab", 4), vec!["тест"]);
        // non-ascii punctuation is not part of the stripped set
        assert_eq!(tokenize("«word»", 1), vec!["«word»"]);
    }

    #[test]
    fn case_is_preserved() {
        assert_eq!(tokenize("Word word WORD", 4), vec!["Word", "word", "WORD"]);
    }

    #[test]
    fn empty_and_punctuation_only() {
        assert!(tokenize("", 0).is_empty());
        assert!(tokenize("... !!! ---", 0).is_empty());
    }
}
