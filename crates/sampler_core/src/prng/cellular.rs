//! Rule-30 cellular automaton generator.

use crate::hash::splitmix64;
use crate::traits::Generator;

/// Fixed substitution for the all-zero ring, a fixed point of rule 30.
const ZERO_STATE_REPAIR: u128 = 0x9e37_79b9_7f4a_7c15_f39c_c060_5ced_c834;

/// Decorrelates the low register's seed from the high register's.
const LOW_REGISTER_SALT: u64 = 0x5851_f42d_4c95_7f2d;

/// Wolfram's rule-30 automaton over a 128-cell ring.
///
/// The ring is held in two 64-bit shift registers. Every draw updates all
/// cells at once (`new = left ^ (centre | right)`) and returns 32 cells taken
/// from the middle of the ring.
///
/// If the ring ever becomes all-zero it is replaced by a fixed non-zero
/// pattern before the next output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellularRng {
    high: u64,
    low: u64,
}

impl CellularRng {
    /// Creates a generator whose registers are derived from `seed` through
    /// [`splitmix64`].
    pub fn new(seed: u32) -> Self {
        let seed = u64::from(seed);
        let mut rng = Self {
            high: splitmix64(seed),
            low: splitmix64(seed ^ LOW_REGISTER_SALT),
        };
        if rng.ring() == 0 {
            rng.set_ring(ZERO_STATE_REPAIR);
        }
        rng
    }

    /// Creates a generator from raw register contents.
    ///
    /// An all-zero state is repaired immediately.
    pub fn from_registers(high: u64, low: u64) -> Self {
        let mut rng = Self { high, low };
        if rng.ring() == 0 {
            tracing::trace!("cellular: zero state repaired at construction");
            rng.set_ring(ZERO_STATE_REPAIR);
        }
        rng
    }

    /// Returns the two registers as `(high, low)`.
    #[inline]
    pub fn registers(&self) -> (u64, u64) {
        (self.high, self.low)
    }

    #[inline]
    fn ring(&self) -> u128 {
        (u128::from(self.high) << 64) | u128::from(self.low)
    }

    #[inline]
    fn set_ring(&mut self, ring: u128) {
        self.high = (ring >> 64) as u64;
        self.low = ring as u64;
    }
}

impl Generator for CellularRng {
    #[inline]
    fn produce(&mut self) -> u32 {
        let cells = self.ring();
        let left = cells.rotate_left(1);
        let right = cells.rotate_right(1);
        let mut next = left ^ (cells | right);
        if next == 0 {
            tracing::trace!("cellular: zero state repaired");
            next = ZERO_STATE_REPAIR;
        }
        self.set_ring(next);
        (next >> 48) as u32
    }
}
