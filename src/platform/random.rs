//! Seeded random source

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::RandomSource;
use crate::consts::RANDOM_MAX;

/// PCG-backed `RandomSource`, reproducible from its seed
#[derive(Debug, Clone)]
pub struct PcgRandom {
    seed: u64,
    rng: Pcg32,
}

impl PcgRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for PcgRandom {
    fn next_int(&mut self) -> u32 {
        self.rng.random_range(0..=RANDOM_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PcgRandom::new(42);
        let mut b = PcgRandom::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_int(), b.next_int());
        }
    }

    #[test]
    fn test_values_in_range() {
        let mut rng = PcgRandom::new(7);
        for _ in 0..10_000 {
            let v = rng.next_int();
            assert!(v <= RANDOM_MAX);
            let u = rng.next_unit();
            assert!((0.0..=1.0).contains(&u));
        }
    }
}
