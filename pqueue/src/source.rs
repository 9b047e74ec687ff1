use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lazy stream of `count` floats in [0, 1). A seed makes the stream
/// reproducible across runs; without one the values come from OS entropy.
pub fn values(count: usize, seed: Option<u64>) -> impl Iterator<Item = f64> {
    let mut rng = match seed {
        Some(s) => {
            debug!("--> value source seeded with {}", s);
            StdRng::seed_from_u64(s)
        }
        None => StdRng::from_entropy(),
    };
    (0..count).map(move |_| rng.gen::<f64>())
}
