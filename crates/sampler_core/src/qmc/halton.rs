//! Halton sequences.

use super::{radical_inverse, to_fixed_point, QuasiRandomSequence, MAX_HALTON_BASES, PRIME_BASES};
use crate::traits::Generator;

fn check_bases(num_bases: usize) {
    assert!(
        (1..=MAX_HALTON_BASES).contains(&num_bases),
        "num_bases must be in [1, {}], got {}",
        MAX_HALTON_BASES,
        num_bases
    );
}

/// Halton sequence over the first `num_bases` primes.
///
/// Draw `k` returns the radical inverse of point index `k / num_bases + 1`
/// in the base `PRIME_BASES[k % num_bases]`, scaled to 32 bits. With one base
/// this is the base-2 van der Corput sequence `1/2, 1/4, 3/4, 1/8, ...`.
///
/// # Examples
///
/// ```rust
/// use sampler_core::qmc::HaltonRng;
/// use sampler_core::Generator;
///
/// let mut halton = HaltonRng::new(1);
/// assert_eq!(halton.produce(), 0x8000_0000); // 0.5
/// assert_eq!(halton.produce(), 0x4000_0000); // 0.25
/// assert_eq!(halton.produce(), 0xc000_0000); // 0.75
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HaltonRng {
    num_bases: usize,
    counter: u64,
}

impl HaltonRng {
    /// Creates a sequence with `num_bases` interleaved dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `num_bases` is 0 or larger than [`MAX_HALTON_BASES`].
    pub fn new(num_bases: usize) -> Self {
        check_bases(num_bases);
        Self {
            num_bases,
            counter: 0,
        }
    }
}

impl Default for HaltonRng {
    /// A one-dimensional (base 2) sequence.
    fn default() -> Self {
        Self::new(1)
    }
}

impl Generator for HaltonRng {
    #[inline]
    fn produce(&mut self) -> u32 {
        let nb = self.num_bases as u64;
        let base = PRIME_BASES[(self.counter % nb) as usize];
        let index = self.counter / nb + 1;
        self.counter += 1;
        to_fixed_point(radical_inverse(base, index, |d| d))
    }
}

impl QuasiRandomSequence for HaltonRng {
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

/// Halton sequence with reversed digits.
///
/// Every digit `d` of the radical inverse in base `b` is replaced by
/// `(b - d) mod b`. The permutation breaks the linear correlations that plain
/// Halton shows between high prime bases, while base 2 is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HaltonReversedRng {
    num_bases: usize,
    counter: u64,
}

impl HaltonReversedRng {
    /// Creates a sequence with `num_bases` interleaved dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `num_bases` is 0 or larger than [`MAX_HALTON_BASES`].
    pub fn new(num_bases: usize) -> Self {
        check_bases(num_bases);
        Self {
            num_bases,
            counter: 0,
        }
    }
}

impl Generator for HaltonReversedRng {
    #[inline]
    fn produce(&mut self) -> u32 {
        let nb = self.num_bases as u64;
        let base = PRIME_BASES[(self.counter % nb) as usize];
        let b = u64::from(base);
        let index = self.counter / nb + 1;
        self.counter += 1;
        to_fixed_point(radical_inverse(base, index, |d| (b - d) % b))
    }
}

impl QuasiRandomSequence for HaltonReversedRng {
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

#[cfg(test)]
mod tests {
    use super::*;

    const HALF: u32 = 0x8000_0000;
    const QUARTER: u32 = 0x4000_0000;

    #[test]
    fn test_van_der_corput() {
        let mut halton = HaltonRng::default();
        assert_eq!(halton.produce(), HALF);
        assert_eq!(halton.produce(), QUARTER);
        assert_eq!(halton.produce(), 3 * QUARTER);
        assert_eq!(halton.produce(), 0x2000_0000);
        assert_eq!(halton.produce(), 0xa000_0000);
    }

    #[test]
    fn test_two_bases_interleave() {
        let mut halton = HaltonRng::new(2);
        assert_eq!(halton.produce(), HALF);
        assert_eq!(halton.produce(), 1_431_655_765); // 1/3
        assert_eq!(halton.produce(), QUARTER);
        assert_eq!(halton.produce(), 2_863_311_530); // 2/3
        assert_eq!(halton.produce(), 3 * QUARTER);
        assert_eq!(halton.produce(), 477_218_588); // 1/9
    }

    #[test]
    fn test_reset_and_skip() {
        let mut halton = HaltonRng::new(3);
        let first: Vec<u32> = (0..9).map(|_| halton.produce()).collect();
        assert_eq!(halton.index(), 9);

        halton.reset();
        assert_eq!(halton.produce(), first[0]);

        halton.reset();
        halton.skip(5);
        assert_eq!(halton.produce(), first[5]);
    }

    #[test]
    fn test_reversed_keeps_base_two() {
        let mut plain = HaltonRng::new(1);
        let mut reversed = HaltonReversedRng::new(1);
        for _ in 0..64 {
            assert_eq!(plain.produce(), reversed.produce());
        }
    }

    #[test]
    fn test_reversed_permutes_base_three() {
        let mut reversed = HaltonReversedRng::new(2);
        reversed.skip(1);
        // index 1 in base 3 has digit 1 -> (3 - 1) % 3 = 2 -> 2/3
        assert_eq!(reversed.produce(), 2_863_311_530);
        reversed.skip(1);
        // index 2 has digit 2 -> 1 -> 1/3
        assert_eq!(reversed.produce(), 1_431_655_765);
    }

    #[test]
    #[should_panic(expected = "num_bases must be in")]
    fn test_too_many_bases_panics() {
        let _ = HaltonRng::new(MAX_HALTON_BASES + 1);
    }

    #[test]
    #[should_panic(expected = "num_bases must be in")]
    fn test_zero_bases_panics() {
        let _ = HaltonReversedRng::new(0);
    }
}
