use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use wordgen::{write_words, WordConfig, WordGenerator};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Initialize RNG
    let seed: u64 = rand::random();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    debug!("Using seed {}", seed);

    let config = WordConfig::default();
    let generator = WordGenerator::new();
    info!("Generating {} words", config.word_count);

    let stdout = std::io::stdout();
    write_words(&mut stdout.lock(), &generator, &mut rng, config.word_count)?;

    Ok(())
}
