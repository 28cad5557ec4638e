//! RNG module - deterministic random numbers for food placement
//!
//! A small LCG keeps the core free of platform entropy: the same seed always
//! produces the same food sequence, which keeps sessions reproducible in tests
//! and benchmarks. The binary seeds it from the wall clock.

use crate::types::{GridSize, Position};

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
    ///
    /// Scales the full 32-bit output instead of taking `% max`; the low bits of
    /// an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniform cell off the border ring: x in `[1, cols-2]`, y in `[1, rows-2]`.
    pub fn interior_position(&mut self, grid: GridSize) -> Position {
        let x = 1 + self.next_range(grid.cols() as u32 - 2);
        let y = 1 + self.next_range(grid.rows() as u32 - 2);
        Position::new(x as i16, y as i16)
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
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in [1u32, 2, 3, 10, 97] {
            for _ in 0..500 {
                assert!(rng.next_range(max) < max);
            }
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_next_range_hits_every_value() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 8];
        for _ in 0..1000 {
            seen[rng.next_range(8) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "{seen:?}");
    }

    #[test]
    fn test_interior_position_stays_off_border() {
        let grid = GridSize::new(7, 5).unwrap();
        let mut rng = SimpleRng::new(3);
        for _ in 0..1000 {
            let p = rng.interior_position(grid);
            assert!(grid.is_interior(p), "{p:?}");
        }
    }
}
