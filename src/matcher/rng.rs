// file: src/matcher/rng.rs
// description: Random source for quote sampling, seeded or entropy backed
// reference: https://docs.rs/rand

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

/// Produces the generator used to shuffle matched quotes.
///
/// - **Random mode**: seeds from the operating system on every call
/// - **Seeded mode**: the same seed always yields the same sequence, which
///   makes sampling reproducible for tests and demos
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RngProvider {
    seed: Option<u64>,
}

impl RngProvider {
    #[must_use]
    pub const fn new_random() -> Self {
        Self { seed: None }
    }

    #[must_use]
    pub const fn new_seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub const fn from_seed(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                debug!(seed = seed, "Using deterministic RNG");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        }
    }
}
