//! RNG module - deterministic random selection
//!
//! Provides a simple LCG used for the motivational-message pick on level
//! completion. Level content itself is generated deterministically per id and
//! never goes through this RNG, so two runs with the same seed produce the
//! same session transcript.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Pick one element uniformly from a non-empty slice
    ///
    /// Returns `None` only for an empty slice.
    pub fn pick<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        let idx = self.next_range(slice.len() as u32) as usize;
        slice.get(idx)
    }

    /// Get the current RNG state (for reseeding a follow-up session)
    pub fn seed(&self) -> u32 {
        self.state
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

        // Different seeds should eventually diverge
        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut rng = SimpleRng::new(0);
        // Must not get stuck at zero
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_pick_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        let items = ["a", "b", "c"];

        for _ in 0..50 {
            let picked = rng.pick(&items).unwrap();
            assert!(items.contains(picked));
        }
    }

    #[test]
    fn test_pick_empty_slice() {
        let mut rng = SimpleRng::new(7);
        let items: [u32; 0] = [];
        assert!(rng.pick(&items).is_none());
    }

    #[test]
    fn test_pick_covers_all_elements() {
        let mut rng = SimpleRng::new(42);
        let items = [0usize, 1, 2, 3];
        let mut seen = [false; 4];

        for _ in 0..200 {
            seen[*rng.pick(&items).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
