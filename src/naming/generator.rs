//! Word generation from the syllable table.
//!
//! `generate` makes the random draws (syllable count, syllable picks,
//! capitalization roll) and hands them to `compose`, which is pure. Tests
//! can pin exact output through `compose` or reproduce runs with a seeded RNG.

use rand::Rng;

use super::syllables::SYLLABLES;
use crate::config::WordConfig;

/// Produces pseudo-random words from a syllable table.
#[derive(Clone, Debug)]
pub struct WordGenerator {
    syllables: &'static [&'static str],
    config: WordConfig,
}

impl WordGenerator {
    /// Generator over the built-in syllable table.
    pub fn new() -> Self {
        Self::with_table(SYLLABLES)
    }

    /// Generator over a custom table.
    ///
    /// # Panics
    /// If `syllables` is empty.
    pub fn with_table(syllables: &'static [&'static str]) -> Self {
        Self::with_config(syllables, WordConfig::default())
    }

    /// Generator over a custom table with explicit parameters.
    ///
    /// # Panics
    /// If `syllables` is empty or the syllable range is inverted.
    pub fn with_config(syllables: &'static [&'static str], config: WordConfig) -> Self {
        assert!(!syllables.is_empty(), "syllable table must not be empty");
        let (min, max) = config.syllable_range;
        assert!(min <= max, "syllable range {}..={} is inverted", min, max);
        Self { syllables, config }
    }

    /// Parameters in use.
    pub fn config(&self) -> &WordConfig {
        &self.config
    }

    /// The table this generator draws from.
    pub fn syllables(&self) -> &'static [&'static str] {
        self.syllables
    }

    /// Generate one word (e.g., "abze", "Quilo", "tamiro").
    pub fn generate(&self, rng: &mut impl Rng) -> String {
        let (min, max) = self.config.syllable_range;
        let count = rng.gen_range(min..=max);
        let picks: Vec<usize> = (0..count)
            .map(|_| rng.gen_range(0..self.syllables.len()))
            .collect();
        let roll: f64 = rng.gen();

        self.compose(&picks, roll)
    }

    /// Build a word from table indices and a capitalization roll in [0, 1).
    ///
    /// # Panics
    /// If an index is out of range for the table.
    pub fn compose(&self, picks: &[usize], capitalize_roll: f64) -> String {
        let word: String = picks.iter().map(|&i| self.syllables[i]).collect();

        if capitalize_roll > self.config.capitalize_threshold {
            capitalize(&word)
        } else {
            word
        }
    }
}

impl Default for WordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_uppercase().next().unwrap_or(first));
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
