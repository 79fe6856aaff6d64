//! Hammersley point sets.

use super::{radical_inverse, to_fixed_point, QuasiRandomSequence, PRIME_BASES};
use crate::traits::Generator;

/// Maximum number of interleaved dimensions (the first one is `i / n`).
pub const MAX_HAMMERSLEY_BASES: usize = PRIME_BASES.len();

/// Hammersley point set of a size fixed at construction.
///
/// Point `i` has first coordinate `i / num_samples`; coordinate `d > 0` is the
/// radical inverse of `i` in `PRIME_BASES[d - 1]`. As with Halton, dimensions
/// are interleaved and must be drawn round-robin.
///
/// # Overrun
///
/// The first coordinate is only defined for `i < num_samples`. Drawing more
/// points wraps the point index modulo `num_samples`, i.e. the set repeats
/// from its first point and every value stays in `[0, 1)`. Each wrap is
/// reported through `tracing::warn!`.
///
/// # Examples
///
/// ```rust
/// use sampler_core::qmc::HammersleyRng;
/// use sampler_core::Generator;
///
/// let mut set = HammersleyRng::new(2, 4);
/// assert_eq!(set.produce(), 0);           // x0 = 0/4
/// assert_eq!(set.produce(), 0);           // y0 = phi_2(0)
/// assert_eq!(set.produce(), 0x4000_0000); // x1 = 1/4
/// assert_eq!(set.produce(), 0x8000_0000); // y1 = phi_2(1)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HammersleyRng {
    num_bases: usize,
    num_samples: u64,
    counter: u64,
}

impl HammersleyRng {
    /// Creates a set of `num_samples` points with `num_bases` dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `num_bases` is 0 or larger than [`MAX_HAMMERSLEY_BASES`], or
    /// if `num_samples` is 0.
    pub fn new(num_bases: usize, num_samples: u64) -> Self {
        assert!(
            (1..=MAX_HAMMERSLEY_BASES).contains(&num_bases),
            "num_bases must be in [1, {}], got {}",
            MAX_HAMMERSLEY_BASES,
            num_bases
        );
        assert!(num_samples > 0, "num_samples must be positive");
        Self {
            num_bases,
            num_samples,
            counter: 0,
        }
    }

    /// Returns the declared number of points.
    #[inline]
    pub fn num_samples(&self) -> u64 {
        self.num_samples
    }
}

impl Generator for HammersleyRng {
    fn produce(&mut self) -> u32 {
        let nb = self.num_bases as u64;
        let dimension = (self.counter % nb) as usize;
        let point = self.counter / nb;
        self.counter += 1;

        if dimension == 0 && point > 0 && point % self.num_samples == 0 {
            tracing::warn!(
                num_samples = self.num_samples,
                drawn_points = point,
                "hammersley: point set exhausted, wrapping to first point"
            );
        }
        let i = point % self.num_samples;

        if dimension == 0 {
            to_fixed_point(i as f64 / self.num_samples as f64)
        } else {
            to_fixed_point(radical_inverse(PRIME_BASES[dimension - 1], i, |d| d))
        }
    }
}

impl QuasiRandomSequence for HammersleyRng {
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
