//! Lag-4 multiply-with-carry generator.

use crate::hash::wang_hash;
use crate::traits::Generator;

/// Multiplier `a` of the recurrence `x_n = (a * x_{n-4} + c) mod 2^32`.
pub const MWC_MULTIPLIER: u64 = 41_305_945;

/// Lag of the recurrence.
const LAG: usize = 4;

/// Marsaglia multiply-with-carry generator with lag 4 and base `2^32`.
///
/// Each draw computes `t = a * x[i] + c` in 64 bits, stores the low word back
/// into `x[i]` and keeps the high word as the next carry.
///
/// The four state words are seeded with `wang_hash(seed + i)` and the carry
/// with `wang_hash(seed + 4) % a`, so the carry starts below the multiplier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MwcRng {
    state: [u32; LAG],
    carry: u32,
    index: usize,
}

impl MwcRng {
    /// Creates a generator from `seed`.
    pub fn new(seed: u32) -> Self {
        let mut state = [0u32; LAG];
        for (i, word) in state.iter_mut().enumerate() {
            *word = wang_hash(seed.wrapping_add(i as u32));
        }
        let carry = (u64::from(wang_hash(seed.wrapping_add(LAG as u32))) % MWC_MULTIPLIER) as u32;
        Self {
            state,
            carry,
            index: 0,
        }
    }

    /// Returns the current carry.
    #[inline]
    pub fn carry(&self) -> u32 {
        self.carry
    }
}

impl Generator for MwcRng {
    #[inline]
    fn produce(&mut self) -> u32 {
        let t = MWC_MULTIPLIER * u64::from(self.state[self.index]) + u64::from(self.carry);
        self.carry = (t >> 32) as u32;
        let value = t as u32;
        self.state[self.index] = value;
        self.index = (self.index + 1) & (LAG - 1);
        value
    }
}
