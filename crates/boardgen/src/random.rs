//! Injectable randomness for board generation.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

/// Uniform integer source consumed by the generation pipeline.
///
/// Holding the source fixed makes every stage reproducible, so tests and
/// tools always construct one from a known seed.
pub trait RandomSource {
    /// Uniform value in `[0, bound)`. `bound` must be at least 1.
    fn below(&mut self, bound: usize) -> usize;

    /// Uniform value in `[low, high)`.
    fn range(&mut self, low: usize, high: usize) -> usize {
        debug_assert!(low < high);
        low + self.below(high - low)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}

/// ChaCha8-backed source with unbiased range reduction.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Source for the `board_index`-th board of a run, independent of earlier boards.
    pub fn for_board(run_seed: u64, board_index: u32) -> Self {
        Self::new(derive_board_seed(run_seed, board_index))
    }
}

impl RandomSource for SeededRandom {
    fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        if bound <= 1 {
            return 0;
        }
        // Lemire's widening multiply; rejecting the low zone removes modulo bias.
        let bound = bound as u64;
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let wide = u128::from(self.rng.next_u64()) * u128::from(bound);
            if (wide as u64) >= threshold {
                return (wide >> 64) as usize;
            }
        }
    }
}

pub fn derive_board_seed(run_seed: u64, board_index: u32) -> u64 {
    let mut mixed = run_seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= u64::from(board_index).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}
