//! Additive recurrence (Kronecker) sequences.

use super::{QuasiRandomSequence, MAX_HALTON_BASES};
use crate::traits::Generator;

/// Fractional parts of `sqrt(p)` for the first 32 primes, as 32-bit fixed point.
const SQRT_PRIME_FRACTIONS: [u32; MAX_HALTON_BASES] = [
    0x6a09_e667,
    0xbb67_ae85,
    0x3c6e_f372,
    0xa54f_f53a,
    0x510e_527f,
    0x9b05_688c,
    0x1f83_d9ab,
    0x5be0_cd19,
    0xcbbb_9d5d,
    0x629a_292a,
    0x9159_015a,
    0x152f_ecd8,
    0x6733_2667,
    0x8eb4_4a87,
    0xdb0c_2e0d,
    0x47b5_481d,
    0xae5f_9156,
    0xcf6c_85d3,
    0x2f73_477d,
    0x6d18_26ca,
    0x8b43_d457,
    0xe360_b596,
    0x1c45_6002,
    0x6f19_6331,
    0xd94e_beb1,
    0x0cc4_a611,
    0x261d_c1f2,
    0x5815_a7be,
    0x70b7_ed67,
    0xa151_3c69,
    0x44f9_3635,
    0x720d_cdfd,
];

/// Additive recurrence `x_n = frac(n * alpha_d)` with `alpha_d = sqrt(p_d)`.
///
/// The product is evaluated modulo `2^32` on the fixed-point fraction, so
/// `frac` comes for free from wrapping multiplication and the sequence is
/// exact and reproducible on every platform. Point index `n` starts at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdditiveRecurrenceRng {
    num_bases: usize,
    counter: u64,
}

impl AdditiveRecurrenceRng {
    /// Creates a sequence with `num_bases` interleaved dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `num_bases` is 0 or larger than [`MAX_HALTON_BASES`].
    pub fn new(num_bases: usize) -> Self {
        assert!(
            (1..=MAX_HALTON_BASES).contains(&num_bases),
            "num_bases must be in [1, {}], got {}",
            MAX_HALTON_BASES,
            num_bases
        );
        Self {
            num_bases,
            counter: 0,
        }
    }
}

impl Generator for AdditiveRecurrenceRng {
    #[inline]
    fn produce(&mut self) -> u32 {
        let nb = self.num_bases as u64;
        let alpha = SQRT_PRIME_FRACTIONS[(self.counter % nb) as usize];
        let n = (self.counter / nb + 1) as u32;
        self.counter += 1;
        n.wrapping_mul(alpha)
    }
}

impl QuasiRandomSequence for AdditiveRecurrenceRng {
    fn num_bases(&self) -> usize {
        self.num_bases
    }

    fn index(&self) -> u64 {
        self.counter
    }

    fn reset(&mut self) {
        self.counter = 0;
    }

    fn skip(&mut self, n: u64) {
        self.counter += n;
    }
}
