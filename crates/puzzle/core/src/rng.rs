//! Deterministic random number generation for tile spawning.
//!
//! Spawn placement is the only source of randomness in the engine. It is
//! injected through a stateless oracle trait so that replays with the same
//! seed and move sequence reproduce the same boards, and so tests can
//! script placements exactly instead of relying on a global generator.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be pure functions of the seed: the same seed always
/// produces the same output.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Pick a uniform index into a collection of `len` elements.
    ///
    /// `len` must be non-zero; callers check for an empty candidate list
    /// first.
    fn pick_index(&self, seed: u64, len: usize) -> usize {
        self.next_u32(seed) as usize % len
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 32-bit output permuted out of 64-bit LCG
/// state. Small, fast, and statistically solid, which is all a tile spawner
/// needs.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the LCG state by one step.
    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation: xorshift high bits, then rotate by the
    /// topmost bits.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Mix a grid's base seed with a per-spawn nonce into the seed for one roll.
///
/// The nonce increments on every spawn, so each placement draws from an
/// independent seed while the whole sequence stays reproducible from
/// `game_seed` alone.
pub fn compute_seed(game_seed: u64, nonce: u64) -> u64 {
    let mut hash = game_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_output() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_eq!(rng.pick_index(42, 7), rng.pick_index(42, 7));
    }

    #[test]
    fn outputs_vary_across_seeds() {
        let rng = PcgRng;
        let outputs: std::collections::BTreeSet<u32> =
            (0..16).map(|seed| rng.next_u32(seed)).collect();
        assert!(outputs.len() > 1);
    }

    #[test]
    fn pick_index_stays_in_range() {
        let rng = PcgRng;
        for seed in 0..64 {
            assert!(rng.pick_index(seed, 5) < 5);
            assert_eq!(rng.pick_index(seed, 1), 0);
        }
    }

    #[test]
    fn nonces_decorrelate_rolls() {
        assert_ne!(compute_seed(0, 0), compute_seed(0, 1));
        assert_ne!(compute_seed(7, 3), compute_seed(8, 3));
    }
}
