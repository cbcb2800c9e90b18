use rand::seq::index;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::NodeId;

/// Engine-local random source for pool sampling.
///
/// Each campaign owns its own generator, so independent campaigns never
/// share random state and a fixed seed reproduces the full draw sequence.
#[derive(Debug)]
pub struct PoolSampler {
    rng: ChaCha20Rng,
}

impl PoolSampler {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };
        Self { rng }
    }

    /// Draw `amount` distinct elements from `pool`, uniformly without
    /// replacement. Clamped to the pool size.
    pub fn draw(&mut self, pool: &[NodeId], amount: usize) -> Vec<NodeId> {
        let amount = amount.min(pool.len());
        index::sample(&mut self.rng, pool.len(), amount)
            .into_iter()
            .map(|i| pool[i])
            .collect()
    }
}
