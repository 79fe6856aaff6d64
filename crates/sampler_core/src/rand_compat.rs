//! Interoperability with the `rand` ecosystem.
//!
//! - [`RngAdapter`] lets any [`Generator`] drive `rand` / `rand_distr`
//!   distributions.
//! - [`RandSource`] lets any `rand::RngCore` feed the samplers of this
//!   workspace.

use rand::RngCore;

use crate::traits::Generator;

/// Exposes a [`Generator`] as a `rand::RngCore`.
///
/// `next_u64` concatenates two draws (high word first).
///
/// # Examples
///
/// ```rust
/// use rand::Rng;
/// use sampler_core::prng::Xorshift32;
/// use sampler_core::rand_compat::RngAdapter;
///
/// let mut rng = RngAdapter::new(Xorshift32::new(42));
/// let x: f64 = rng.gen();
/// assert!((0.0..1.0).contains(&x));
/// ```
#[derive(Debug, Clone)]
pub struct RngAdapter<G> {
    inner: G,
}

impl<G: Generator> RngAdapter<G> {
    /// Wraps `generator`.
    pub fn new(generator: G) -> Self {
        Self { inner: generator }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: Generator> RngCore for RngAdapter<G> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.produce()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.inner.produce());
        let low = u64::from(self.inner.produce());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.inner.produce().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Exposes a `rand::RngCore` as a [`Generator`].
///
/// # Examples
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use sampler_core::rand_compat::RandSource;
/// use sampler_core::Generator;
///
/// let mut a = RandSource::new(StdRng::seed_from_u64(7));
/// let mut b = RandSource::new(StdRng::seed_from_u64(7));
/// assert_eq!(a.produce(), b.produce());
/// ```
#[derive(Debug, Clone)]
pub struct RandSource<R> {
    inner: R,
}

impl<R: RngCore> RandSource<R> {
    /// Wraps `rng`.
    pub fn new(rng: R) -> Self {
        Self { inner: rng }
    }
}

impl<R: RngCore> Generator for RandSource<R> {
    #[inline]
    fn produce(&mut self) -> u32 {
        self.inner.next_u32()
    }
}
