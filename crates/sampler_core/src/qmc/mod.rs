//! # Quasi-Random (Low-Discrepancy) Sequences
//!
//! Low-discrepancy sequences cover the unit hypercube more evenly than
//! independent draws, which often speeds up convergence of numerical
//! integration.
//!
//! All sequences here are pure formulas over a monotonically increasing draw
//! counter and implement [`Generator`]. A sequence with `num_bases`
//! dimensions interleaves them: draw `k` belongs to dimension
//! `k % num_bases` of point `k / num_bases`. Dimensions must therefore be
//! consumed round-robin, otherwise the drawn values no longer form a valid
//! low-discrepancy point set.
//!
//! ## Module Structure
//!
//! - [`halton`]: Halton and digit-reversed Halton sequences
//! - [`hammersley`]: Hammersley point sets of a fixed size
//! - [`additive`]: additive recurrence (Kronecker) sequences
//!
//! [`Generator`]: crate::Generator

pub mod additive;
pub mod halton;
pub mod hammersley;

pub use additive::AdditiveRecurrenceRng;
pub use halton::{HaltonRng, HaltonReversedRng};
pub use hammersley::HammersleyRng;

use crate::traits::Generator;

/// The first 33 primes, used as radical-inverse bases.
pub const PRIME_BASES: [u32; 33] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137,
];

/// Maximum number of interleaved dimensions for Halton-type sequences.
pub const MAX_HALTON_BASES: usize = 32;

/// Common interface of the counter-based sequences.
///
/// Adapted from the low-discrepancy interface of Monte Carlo engines: every
/// sequence can be rewound or advanced without generating the skipped
/// values.
pub trait QuasiRandomSequence: Generator {
    /// Returns the number of interleaved dimensions.
    fn num_bases(&self) -> usize;

    /// Returns the number of values drawn so far.
    fn index(&self) -> u64;

    /// Rewinds the sequence to its initial state.
    ///
    /// After calling this method the sequence produces the same values as a
    /// newly constructed instance.
    fn reset(&mut self);

    /// Skips `n` draws (not points).
    ///
    /// Useful for parallel computation where different workers process
    /// non-overlapping portions of the sequence.
    fn skip(&mut self, n: u64);
}

/// Scales a value in `[0, 1)` to the full 32-bit range.
#[inline]
pub(crate) fn to_fixed_point(value: f64) -> u32 {
    (value * 4_294_967_296.0) as u32
}

/// Radical inverse of `index` in `base`, with each digit passed through
/// `permute`.
#[inline]
pub(crate) fn radical_inverse(base: u32, mut index: u64, permute: impl Fn(u64) -> u64) -> f64 {
    let base = u64::from(base);
    let inv_base = 1.0 / base as f64;
    let mut factor = inv_base;
    let mut result = 0.0;
    while index > 0 {
        let digit = permute(index % base);
        result += digit as f64 * factor;
        index /= base;
        factor *= inv_base;
    }
    result
}
