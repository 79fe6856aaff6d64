//! Marsaglia's 32-bit xorshift generator.

use crate::traits::{Generator, HashFunction};

/// Substitute for the all-zero seed, which xorshift can never leave.
const ZERO_SEED_SUBSTITUTE: u32 = 0x92d6_8ca2;

/// Xorshift generator with a single 32-bit register.
///
/// Applies the shift triple `<<13, >>17, <<5`. Period `2^32 - 1`; the value 0
/// is never produced.
///
/// Besides being a [`Generator`], the type is a [`HashFunction`]: `map(x)`
/// applies the same triple to `x` and XORs the current state, without
/// advancing anything. This makes a seeded instance usable for lattice
/// hashing.
///
/// # Examples
///
/// ```rust
/// use sampler_core::prng::Xorshift32;
/// use sampler_core::Generator;
///
/// let mut a = Xorshift32::new(12345);
/// let mut b = Xorshift32::new(12345);
/// assert_eq!(a.produce(), b.produce());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Creates a generator from `seed`.
    ///
    /// A zero seed is replaced by a fixed non-zero constant.
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 {
            tracing::trace!("xorshift32: zero seed substituted");
            ZERO_SEED_SUBSTITUTE
        } else {
            seed
        };
        Self { state }
    }

    /// Returns the current register value.
    #[inline]
    pub fn state(&self) -> u32 {
        self.state
    }

    #[inline]
    fn shift(mut x: u32) -> u32 {
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        x
    }
}

impl Generator for Xorshift32 {
    #[inline]
    fn produce(&mut self) -> u32 {
        self.state = Self::shift(self.state);
        self.state
    }
}

impl HashFunction for Xorshift32 {
    #[inline]
    fn map(&self, x: u32) -> u32 {
        Self::shift(x) ^ self.state
    }
}
