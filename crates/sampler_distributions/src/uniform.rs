//! Uniform samplers.
//!
//! - [`uniform`]: `[0, 1]`, the largest generator value maps to exactly `1.0`
//! - [`uniform_ex`]: `[0, 1)`, built from the top 24 bits so `1.0` is never
//!   reached and dyadic sequences (e.g. Halton base 2) come out exact
//! - [`uniform_range`]: floats and integers between two bounds, both inclusive
//!
//! Each call consumes exactly one draw.

use sampler_core::Generator;

const INV_2_32: f32 = 1.0 / 4_294_967_296.0;
const INV_2_24: f32 = 1.0 / 16_777_216.0;

/// Uniform float in `[0, 1]`.
///
/// The conversion rounds to `f32`, so `u32::MAX` lands on exactly `1.0` and
/// `0` on exactly `0.0`.
#[inline]
pub fn uniform<G: Generator + ?Sized>(g: &mut G) -> f32 {
    g.produce() as f32 * INV_2_32
}

/// Uniform float in `[0, 1)`.
#[inline]
pub fn uniform_ex<G: Generator + ?Sized>(g: &mut G) -> f32 {
    (g.produce() >> 8) as f32 * INV_2_24
}

/// Types that can be drawn uniformly between two inclusive bounds.
pub trait UniformRange: Copy {
    /// Draws a value in `[lo, hi]` using exactly one generator draw.
    fn sample_range<G: Generator + ?Sized>(g: &mut G, lo: Self, hi: Self) -> Self;
}

/// Uniform value in `[lo, hi]`.
///
/// Floats interpolate as `lo * (1 - u) + hi * u`, so the generator extremes
/// return exactly `lo` and `hi`. Integers scale the raw 32-bit draw into the
/// range without rejection: ranges whose size does not divide `2^32` carry a
/// bias of at most `span / 2^32`, and spans wider than `2^32` use only 32
/// random bits. Reversed integer bounds are swapped.
///
/// # Examples
///
/// ```rust
/// use sampler_core::prng::Xorshift32;
/// use sampler_distributions::uniform::uniform_range;
///
/// let mut rng = Xorshift32::new(3);
/// let die: i32 = uniform_range(&mut rng, 1, 6);
/// assert!((1..=6).contains(&die));
///
/// let x: f64 = uniform_range(&mut rng, -2.0, 2.0);
/// assert!((-2.0..=2.0).contains(&x));
/// ```
#[inline]
pub fn uniform_range<T: UniformRange, G: Generator + ?Sized>(g: &mut G, lo: T, hi: T) -> T {
    T::sample_range(g, lo, hi)
}

impl UniformRange for f32 {
    #[inline]
    fn sample_range<G: Generator + ?Sized>(g: &mut G, lo: f32, hi: f32) -> f32 {
        let u = uniform(g);
        let value = lo * (1.0 - u) + hi * u;
        value.clamp(lo.min(hi), lo.max(hi))
    }
}

impl UniformRange for f64 {
    #[inline]
    fn sample_range<G: Generator + ?Sized>(g: &mut G, lo: f64, hi: f64) -> f64 {
        let u = f64::from(g.produce()) / f64::from(u32::MAX);
        let value = lo * (1.0 - u) + hi * u;
        value.clamp(lo.min(hi), lo.max(hi))
    }
}

macro_rules! integer_range {
    ($($t:ty),* $(,)?) => {
        $(
            impl UniformRange for $t {
                #[inline]
                fn sample_range<G: Generator + ?Sized>(g: &mut G, lo: $t, hi: $t) -> $t {
                    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
                    let span = (hi as i128 - lo as i128 + 1) as u128;
                    let offset = (u128::from(g.produce()) * span) >> 32;
                    (lo as i128 + offset as i128) as $t
                }
            }
        )*
    };
}

integer_range!(i32, u32, i64, u64, usize);
