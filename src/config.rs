//! Fixed parameters for word generation.

/// Fewest syllables in a word.
pub const MIN_SYLLABLES: usize = 2;

/// Most syllables in a word.
pub const MAX_SYLLABLES: usize = 3;

/// A capitalization roll strictly above this uppercases the first letter.
pub const CAPITALIZE_THRESHOLD: f64 = 0.5;

/// Number of words the binary prints.
pub const WORD_COUNT: usize = 15;

/// Parameters for word generation.
#[derive(Clone, Debug, PartialEq)]
pub struct WordConfig {
    /// Min and max syllable count, inclusive.
    pub syllable_range: (usize, usize),

    /// Capitalization probability cutoff (roll > threshold capitalizes).
    pub capitalize_threshold: f64,

    /// Words printed per run.
    pub word_count: usize,
}

impl Default for WordConfig {
    fn default() -> Self {
        Self {
            syllable_range: (MIN_SYLLABLES, MAX_SYLLABLES),
            capitalize_threshold: CAPITALIZE_THRESHOLD,
            word_count: WORD_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = WordConfig::default();
        assert_eq!(config.syllable_range, (2, 3));
        assert_eq!(config.capitalize_threshold, 0.5);
        assert_eq!(config.word_count, 15);
    }
}
