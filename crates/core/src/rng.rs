//! RNG module - seeded piece selection
//!
//! A small LCG keeps piece selection deterministic under a fixed seed, so
//! whole games replay identically in tests. Kinds are drawn uniformly from
//! the 7 variants; the generator is owned by the engine rather than being
//! ambient global state.

use crate::types::PieceKind;

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
}

/// Uniform piece dealer over an owned seeded generator
#[derive(Debug, Clone)]
pub struct PieceDealer {
    rng: SimpleRng,
}

impl PieceDealer {
    /// Create a new dealer with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind, uniform over the 7 kinds
    pub fn draw(&mut self) -> PieceKind {
        let index = self.rng.next_range(PieceKind::ALL.len() as u32);
        PieceKind::ALL[index as usize]
    }
}
