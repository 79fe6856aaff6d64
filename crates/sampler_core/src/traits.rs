//! Capability traits shared by every engine and sampler.
//!
//! - [`Generator`]: a stateful sequence that advances on each draw
//! - [`HashFunction`]: a pure integer mapping, usable for lattice hashing
//! - [`HashSequence`]: adapter turning a hash into a counter-driven generator

/// A source of uniformly distributed 32-bit integers.
///
/// Implementations advance their internal state on every call. Samplers in
/// the upper layers are generic over this trait, so dispatch is static and
/// monomorphised.
///
/// # Examples
///
/// ```rust
/// use sampler_core::Generator;
///
/// struct Counter(u32);
///
/// impl Generator for Counter {
///     fn produce(&mut self) -> u32 {
///         self.0 = self.0.wrapping_add(1);
///         self.0
///     }
/// }
///
/// let mut counter = Counter(0);
/// assert_eq!(counter.produce(), 1);
/// assert_eq!(counter.produce(), 2);
/// ```
pub trait Generator {
    /// Advances the state and returns the next value.
    fn produce(&mut self) -> u32;
}

impl<G: Generator + ?Sized> Generator for &mut G {
    #[inline]
    fn produce(&mut self) -> u32 {
        (**self).produce()
    }
}

/// A stateless integer-to-integer mapping.
///
/// Hashes never mutate anything, so the same input always yields a
/// bit-identical output. Noise fields use them to attach a deterministic
/// value to every integer lattice point.
pub trait HashFunction {
    /// Maps `x` to a pseudo-random 32-bit value.
    fn map(&self, x: u32) -> u32;
}

impl<H: HashFunction + ?Sized> HashFunction for &H {
    #[inline]
    fn map(&self, x: u32) -> u32 {
        (**self).map(x)
    }
}

/// Counter-driven generator built on top of a hash function.
///
/// The `n`-th draw returns `hash.map(start + n)`. This lets any hash act as a
/// short-lived generator, e.g. to derive several values from one lattice
/// corner.
///
/// # Examples
///
/// ```rust
/// use sampler_core::hash::WangHash;
/// use sampler_core::{Generator, HashFunction, HashSequence};
///
/// let mut seq = HashSequence::new(WangHash, 7);
/// assert_eq!(seq.produce(), WangHash.map(7));
/// assert_eq!(seq.produce(), WangHash.map(8));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HashSequence<H> {
    hash: H,
    counter: u32,
}

impl<H: HashFunction> HashSequence<H> {
    /// Creates a sequence whose first draw is `hash.map(start)`.
    #[inline]
    pub fn new(hash: H, start: u32) -> Self {
        Self {
            hash,
            counter: start,
        }
    }
}

impl<H: HashFunction> Generator for HashSequence<H> {
    #[inline]
    fn produce(&mut self) -> u32 {
        let value = self.hash.map(self.counter);
        self.counter = self.counter.wrapping_add(1);
        value
    }
}
