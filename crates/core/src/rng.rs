//! RNG module - seeded randomness for tile spawning
//!
//! A small LCG is enough for picking spawn cells and the 2-or-4 coin flip,
//! and it keeps games reproducible: the same seed and the same moves always
//! produce the same boards.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Maps through the high bits; the low bits of an LCG cycle with a short
    /// period, so a plain `% max` would skew small ranges.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Returns true with probability `numerator / denominator`
    pub fn chance(&mut self, numerator: u32, denominator: u32) -> bool {
        self.next_range(denominator) < numerator
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0), SimpleRng::new(1));
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..=16 {
            for _ in 0..200 {
                assert!(rng.next_range(max) < max);
            }
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_next_range_covers_all_slots() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 16];
        for _ in 0..1000 {
            seen[rng.next_range(16) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every slot should be hit: {:?}", seen);
    }

    #[test]
    fn test_chance_is_roughly_one_in_ten() {
        let mut rng = SimpleRng::new(2024);
        let hits = (0..10_000).filter(|_| rng.chance(1, 10)).count();
        assert!((700..1300).contains(&hits), "got {} hits", hits);
    }
}
