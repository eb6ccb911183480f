//! Deterministic RNG hierarchy for synthetic data.
//!
//! A master seed expands into one sub-seed per `(stream, iteration)` pair via
//! BLAKE3. Streams never share state, and the derivation does not depend on
//! the order in which streams are requested.

use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngHierarchy {
    master_seed: u64,
}

impl RngHierarchy {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Sub-seed for one named stream at one regeneration step.
    pub fn sub_seed(&self, stream: &str, iteration: u64) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(stream.as_bytes());
        hasher.update(&iteration.to_le_bytes());
        let hash = hasher.finalize();
        let mut head = [0u8; 8];
        head.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(head)
    }

    pub fn rng_for(&self, stream: &str, iteration: u64) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(stream, iteration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn sub_seeds_are_deterministic() {
        let hierarchy = RngHierarchy::new(42);
        assert_eq!(hierarchy.sub_seed("equity", 0), hierarchy.sub_seed("equity", 0));
    }

    #[test]
    fn different_streams_different_seeds() {
        let hierarchy = RngHierarchy::new(42);
        assert_ne!(hierarchy.sub_seed("equity", 0), hierarchy.sub_seed("drawdown", 0));
    }

    #[test]
    fn different_iterations_different_seeds() {
        let hierarchy = RngHierarchy::new(42);
        assert_ne!(hierarchy.sub_seed("equity", 0), hierarchy.sub_seed("equity", 1));
    }

    #[test]
    fn derivation_order_independent() {
        let hierarchy = RngHierarchy::new(42);
        let a_first = hierarchy.sub_seed("equity", 0);
        let b_second = hierarchy.sub_seed("drawdown", 0);
        let b_first = hierarchy.sub_seed("drawdown", 0);
        let a_second = hierarchy.sub_seed("equity", 0);
        assert_eq!(a_first, a_second);
        assert_eq!(b_first, b_second);
    }

    #[test]
    fn seeded_rngs_replay() {
        let hierarchy = RngHierarchy::new(7);
        let mut r1 = hierarchy.rng_for("equity", 0);
        let mut r2 = hierarchy.rng_for("equity", 0);
        let a: Vec<f64> = (0..4).map(|_| r1.gen()).collect();
        let b: Vec<f64> = (0..4).map(|_| r2.gen()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn different_master_seeds_different_output() {
        assert_ne!(
            RngHierarchy::new(42).sub_seed("equity", 0),
            RngHierarchy::new(43).sub_seed("equity", 0)
        );
    }
}
