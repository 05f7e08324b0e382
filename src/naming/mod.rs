//! Syllable-based word generation.
//!
//! Words are built by concatenating two or three syllables picked from a
//! fixed table, with a coin-flip capitalization of the first letter.

pub mod syllables;
pub mod generator;

pub use syllables::SYLLABLES;
pub use generator::WordGenerator;
