//! Continuous distributions: Gaussian (scalar and multivariate) and
//! exponential.
//!
//! All transforms draw through [`uniform_ex`], whose values stay strictly
//! below `1.0`, so `ln(1 - u)` is always finite.
//!
//! ## Draw counts
//!
//! | Sampler | Draws |
//! |---------|-------|
//! | [`gaussian`], [`gaussian_scaled`], [`gaussian_pair`] | 2 |
//! | [`gaussian_multivariate`] | `2 * ceil(N / 2)` |
//! | [`exponential`] | 1 |

use std::f32::consts::TAU;

use sampler_core::Generator;

use crate::linalg::CholeskyFactor;
use crate::uniform::uniform_ex;

/// Two independent standard normal variates from one Box–Muller transform.
#[inline]
pub fn gaussian_pair<G: Generator + ?Sized>(g: &mut G) -> (f32, f32) {
    let u0 = uniform_ex(g);
    let u1 = uniform_ex(g);
    let radius = (-2.0 * (1.0 - u0).ln()).sqrt();
    let (sin, cos) = (TAU * u1).sin_cos();
    (radius * cos, radius * sin)
}

/// Standard normal variate (mean 0, standard deviation 1).
///
/// # Examples
///
/// ```rust
/// use sampler_core::prng::Xorshift32;
/// use sampler_distributions::continuous::gaussian;
///
/// let mut rng = Xorshift32::new(801_638_479);
/// let x = gaussian(&mut rng);
/// assert!(x.is_finite());
/// ```
#[inline]
pub fn gaussian<G: Generator + ?Sized>(g: &mut G) -> f32 {
    gaussian_pair(g).0
}

/// Normal variate with standard deviation `sigma` and mean `mu`.
#[inline]
pub fn gaussian_scaled<G: Generator + ?Sized>(g: &mut G, sigma: f32, mu: f32) -> f32 {
    mu + sigma * gaussian(g)
}

/// Multivariate normal variate `mu + L·z`.
///
/// `factor` is the Cholesky factor of the target covariance and `z` holds `N`
/// independent standard normals built from pairs of draws.
///
/// # Examples
///
/// ```rust
/// use sampler_core::prng::Xorshift32;
/// use sampler_distributions::continuous::gaussian_multivariate;
/// use sampler_distributions::CholeskyFactor;
///
/// let factor = CholeskyFactor::decompose(&[[8.0, 2.0], [2.0, 1.0]]).unwrap();
/// let mut rng = Xorshift32::new(1);
/// let [x, y] = gaussian_multivariate(&mut rng, &factor, [-1.0, 2.0]);
/// assert!(x.is_finite() && y.is_finite());
/// ```
pub fn gaussian_multivariate<G: Generator + ?Sized, const N: usize>(
    g: &mut G,
    factor: &CholeskyFactor<N>,
    mu: [f32; N],
) -> [f32; N] {
    let mut z = [0.0f32; N];
    for pair in z.chunks_mut(2) {
        let (first, second) = gaussian_pair(g);
        pair[0] = first;
        if let Some(slot) = pair.get_mut(1) {
            *slot = second;
        }
    }

    let mut out = factor.transform(&z);
    for (o, m) in out.iter_mut().zip(mu) {
        *o += m;
    }
    out
}

/// Exponential variate with rate `lambda` (mean `1 / lambda`).
#[inline]
pub fn exponential<G: Generator + ?Sized>(g: &mut G, lambda: f32) -> f32 {
    debug_assert!(lambda > 0.0, "lambda must be positive");
    -(1.0 - uniform_ex(g)).ln() / lambda
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sampler_core::prng::Xorshift32;

    struct Constant(u32);

    impl Generator for Constant {
        fn produce(&mut self) -> u32 {
            self.0
        }
    }

    struct Counting<G> {
        inner: G,
        draws: usize,
    }

    impl<G: Generator> Generator for Counting<G> {
        fn produce(&mut self) -> u32 {
            self.draws += 1;
            self.inner.produce()
        }
    }

    #[test]
    fn test_zero_draws_give_origin() {
        assert_eq!(gaussian(&mut Constant(0)), 0.0);
        assert_eq!(exponential(&mut Constant(0), 2.0), 0.0);
    }

    #[test]
    fn test_max_draws_stay_finite() {
        let x = gaussian(&mut Constant(u32::MAX));
        assert!(x.is_finite());
        let e = exponential(&mut Constant(u32::MAX), 1.0);
        // -ln(2^-24)
        assert_relative_eq!(e, 24.0 * std::f32::consts::LN_2, epsilon = 1e-4);
    }

    #[test]
    fn test_scaled_gaussian_matches_manual_scaling() {
        let mut a = Xorshift32::new(5);
        let mut b = Xorshift32::new(5);
        let scaled = gaussian_scaled(&mut a, 3.0, -1.0);
        assert_relative_eq!(scaled, -1.0 + 3.0 * gaussian(&mut b), epsilon = 1e-6);
    }

    #[test]
    fn test_draw_counts() {
        let mut rng = Counting {
            inner: Xorshift32::new(1),
            draws: 0,
        };
        gaussian(&mut rng);
        assert_eq!(rng.draws, 2);
        exponential(&mut rng, 1.0);
        assert_eq!(rng.draws, 3);

        let factor = CholeskyFactor::<3>::identity();
        gaussian_multivariate(&mut rng, &factor, [0.0; 3]);
        assert_eq!(rng.draws, 7);
    }

    #[test]
    fn test_multivariate_identity_uses_pair_components() {
        let mut a = Xorshift32::new(11);
        let mut b = Xorshift32::new(11);
        let out = gaussian_multivariate(&mut a, &CholeskyFactor::<2>::identity(), [1.0, -1.0]);
        let (z0, z1) = gaussian_pair(&mut b);
        assert_relative_eq!(out[0], 1.0 + z0, epsilon = 1e-6);
        assert_relative_eq!(out[1], -1.0 + z1, epsilon = 1e-6);
    }
}
