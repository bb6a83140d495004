use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Reproducible source of selection draws.
///
/// Two sources built from the same seed produce identical draw sequences,
/// independent of wall-clock time or process identity. The planner consumes
/// exactly one draw per selection attempt, including redraws after a
/// rejection, so a seed plus a response transcript pins down the whole run.
#[derive(Debug)]
pub struct DrawSource {
    rng: StdRng,
}

impl DrawSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Entropy-seeded source for runs where reproducibility was not asked for.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn for_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn draw(&mut self) -> u64 {
        self.rng.next_u64()
    }
}
