//! RNG module - random piece generation with sequential identities
//!
//! Every piece gets a kind drawn uniformly from the seven labels and the next
//! value of the generator's identity counter. The counter lives in the
//! generator itself, so two sessions never share identity state.
//!
//! Also provides a simple LCG for deterministic testing.

use crate::piece::Piece;
use crate::types::{PieceKind, FIRST_PIECE_ID};

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
    /// Uses the high half of the state; the low bits of a power-of-two LCG
    /// cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

/// Produces pieces with a uniformly random kind and a monotonically
/// increasing identity starting at [`FIRST_PIECE_ID`].
///
/// Identities are `u64` and are never reset or reused.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    next_id: u64,
}

impl PieceGenerator {
    /// Create a new generator with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id: FIRST_PIECE_ID,
        }
    }

    /// Create the next piece. Never fails; advances the identity counter.
    pub fn generate(&mut self) -> Piece {
        let index = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        let id = self.next_id;
        self.next_id += 1;
        Piece::new(PieceKind::ALL[index], id)
    }

    /// Identity the next generated piece will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
