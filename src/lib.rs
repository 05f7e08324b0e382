//! Pronounceable word generation library
//!
//! Re-exports modules for use by the binary and tests.

pub mod config;
pub mod naming;

use std::io::Write;

use rand::Rng;

pub use config::WordConfig;
pub use naming::WordGenerator;

/// Write `count` generated words to `out`, one per line, in generation order.
pub fn write_words(
    out: &mut impl Write,
    generator: &WordGenerator,
    rng: &mut impl Rng,
    count: usize,
) -> std::io::Result<()> {
    for _ in 0..count {
        writeln!(out, "{}", generator.generate(rng))?;
    }
    out.flush()
}
