//! Deterministic seeded random number generator.
//!
//! Xorshift32, the only randomness source in the core. Used for the fire
//! particle scatter so a replay with the same seed reproduces the same
//! bursts.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Deterministic xorshift32 generator.
#[derive(Debug, Clone, Serialize, Deserialize, Encode, Decode)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Seed of 0 would lock the sequence at 0, so it is bumped to 1.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Random float in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() as f32) / (u32::MAX as f32)
    }

    /// Random float in [min, max).
    pub fn next_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }
}

impl Default for SeededRng {
    fn default() -> Self {
        Self::new(1)
    }
}
