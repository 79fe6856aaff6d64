//! N-dimensional gradient noise.
//!
//! Each lattice corner is hashed to a pseudo-random unit gradient: the corner
//! hash seeds a [`HashSequence`] that drives
//! [`dir_uniform_nd`], so the construction works in any dimension without a
//! permutation table. The field value is the blend of each corner's gradient
//! dotted with the offset from that corner to the sample point.
//!
//! ## Bounds
//!
//! With unit gradients and any two-tap kernel the field satisfies
//! `|v| ≤ √N / 2`. [`gradient_noise_unit`] uses that bound to remap the field
//! into `[0, 1]`.
//!
//! ## Derivatives
//!
//! [`gradient_noise_with_gradient`] differentiates the kernel weights by the
//! chain rule and returns `∂v/∂x` for every axis, including the factor
//! `frequency[a]` from the lattice scaling.

use sampler_core::{HashFunction, HashSequence};
use sampler_distributions::direction::dir_uniform_nd;

use crate::interpolation::Interpolation;
use crate::lattice::Footprint;

/// Unit gradient attached to the corner with hash `corner`.
#[inline]
pub fn corner_gradient<H: HashFunction + ?Sized, const N: usize>(hash: &H, corner: u32) -> [f32; N] {
    dir_uniform_nd(&mut HashSequence::new(hash, corner))
}

#[inline]
fn corner_offsets<const N: usize>(corner: usize) -> [i64; N] {
    std::array::from_fn(|a| ((corner >> a) & 1) as i64)
}

#[inline]
fn check_kernel(interpolation: Interpolation) {
    debug_assert!(
        interpolation.is_two_tap(),
        "gradient noise needs a two-tap kernel, got {interpolation:?}"
    );
}

/// Gradient noise at `x`, signed and bounded by `√N / 2`.
///
/// `interpolation` must be a two-tap kernel; `Cubic` is rejected in debug
/// builds and otherwise evaluated as `Smootherstep`.
///
/// # Examples
///
/// ```rust
/// use sampler_core::hash::WangHash;
/// use sampler_noise::gradient::gradient_noise;
/// use sampler_noise::interpolation::Interpolation;
///
/// let v = gradient_noise(&WangHash, [0.3, 0.6, 0.1], [4, 4, 4], Interpolation::Smootherstep, 0);
/// assert!(v.abs() <= 3.0f32.sqrt() / 2.0);
///
/// // zero at every lattice point
/// let at_corner = gradient_noise(&WangHash, [0.25, 0.5], [4, 4], Interpolation::Linear, 0);
/// assert_eq!(at_corner, 0.0);
/// ```
pub fn gradient_noise<H: HashFunction + ?Sized, const N: usize>(
    hash: &H,
    x: [f32; N],
    frequency: [u32; N],
    interpolation: Interpolation,
    seed: u32,
) -> f32 {
    check_kernel(interpolation);
    let footprint = Footprint::new(x, frequency);
    let t = footprint.fractions;
    let s = t.map(|t| interpolation.blend(t));

    let mut value = 0.0f32;
    for corner in 0..(1usize << N) {
        let offsets = corner_offsets::<N>(corner);
        let weight: f32 = offsets
            .iter()
            .zip(&s)
            .map(|(&o, &s)| if o == 1 { s } else { 1.0 - s })
            .product();
        if weight == 0.0 {
            continue;
        }

        let gradient: [f32; N] =
            corner_gradient(hash, footprint.corner_hash(hash, &offsets, seed));
        let dot: f32 = (0..N).map(|a| gradient[a] * (t[a] - offsets[a] as f32)).sum();
        value += weight * dot;
    }
    value
}

/// Gradient noise together with its partial derivatives `∂v/∂x`.
pub fn gradient_noise_with_gradient<H: HashFunction + ?Sized, const N: usize>(
    hash: &H,
    x: [f32; N],
    frequency: [u32; N],
    interpolation: Interpolation,
    seed: u32,
) -> (f32, [f32; N]) {
    check_kernel(interpolation);
    let footprint = Footprint::new(x, frequency);
    let t = footprint.fractions;
    let s = t.map(|t| interpolation.blend(t));
    let ds = t.map(|t| interpolation.blend_derivative(t));

    let mut value = 0.0f32;
    let mut derivative = [0.0f32; N];
    for corner in 0..(1usize << N) {
        let offsets = corner_offsets::<N>(corner);
        let weights: [f32; N] = std::array::from_fn(|a| {
            if offsets[a] == 1 {
                s[a]
            } else {
                1.0 - s[a]
            }
        });
        let gradient: [f32; N] =
            corner_gradient(hash, footprint.corner_hash(hash, &offsets, seed));
        let dot: f32 = (0..N).map(|a| gradient[a] * (t[a] - offsets[a] as f32)).sum();
        let weight: f32 = weights.iter().product();
        value += weight * dot;

        for (k, d) in derivative.iter_mut().enumerate() {
            let others: f32 = (0..N).filter(|&a| a != k).map(|a| weights[a]).product();
            let dw = if offsets[k] == 1 { ds[k] } else { -ds[k] };
            *d += dw * others * dot + weight * gradient[k];
        }
    }

    for (d, &f) in derivative.iter_mut().zip(&frequency) {
        *d *= f as f32;
    }
    (value, derivative)
}

/// [`gradient_noise`] remapped to `[0, 1]` through `0.5 + v / √N`.
#[inline]
pub fn gradient_noise_unit<H: HashFunction + ?Sized, const N: usize>(
    hash: &H,
    x: [f32; N],
    frequency: [u32; N],
    interpolation: Interpolation,
    seed: u32,
) -> f32 {
    let v = gradient_noise(hash, x, frequency, interpolation, seed);
    (0.5 + v / (N.max(1) as f32).sqrt()).clamp(0.0, 1.0)
}

/// Classic two-dimensional Perlin-style noise (`Smootherstep` kernel).
#[inline]
pub fn perlin_2d<H: HashFunction + ?Sized>(
    hash: &H,
    x: [f32; 2],
    frequency: [u32; 2],
    seed: u32,
) -> f32 {
    gradient_noise(hash, x, frequency, Interpolation::Smootherstep, seed)
}

/// Classic three-dimensional Perlin-style noise (`Smootherstep` kernel).
#[inline]
pub fn perlin_3d<H: HashFunction + ?Sized>(
    hash: &H,
    x: [f32; 3],
    frequency: [u32; 3],
    seed: u32,
) -> f32 {
    gradient_noise(hash, x, frequency, Interpolation::Smootherstep, seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::corner_hash;
    use approx::assert_relative_eq;
    use sampler_core::hash::{JenkinsHash, WangHash};

    #[test]
    fn test_corner_gradients_are_unit_vectors() {
        for corner in [0u32, 1, 77, 0xdead_beef] {
            let g: [f32; 3] = corner_gradient(&WangHash, corner);
            let n2: f32 = g.iter().map(|x| x * x).sum();
            assert_relative_eq!(n2, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_lattice_points_are_zero() {
        for interpolation in [
            Interpolation::Point,
            Interpolation::Linear,
            Interpolation::Smoothstep,
            Interpolation::Smootherstep,
        ] {
            let v = gradient_noise(&JenkinsHash, [0.5, 0.25, 0.75], [4, 8, 4], interpolation, 3);
            assert_eq!(v, 0.0, "{interpolation:?}");
        }
    }

    #[test]
    fn test_one_dimensional_linear_matches_hand_blend() {
        let g0: [f32; 1] = corner_gradient(&WangHash, corner_hash(&WangHash, &[1], 5));
        let g1: [f32; 1] = corner_gradient(&WangHash, corner_hash(&WangHash, &[2], 5));
        // x = 1.25 cells: t = 0.25
        let v = gradient_noise(&WangHash, [1.25 / 4.0], [4], Interpolation::Linear, 5);
        let expected = 0.75 * g0[0] * 0.25 + 0.25 * g1[0] * (0.25 - 1.0);
        assert_relative_eq!(v, expected, epsilon = 1e-6);
    }

    #[test]
    fn test_value_agrees_with_derivative_variant() {
        let x = [0.13, 0.71];
        let plain = gradient_noise(&WangHash, x, [5, 3], Interpolation::Smoothstep, 8);
        let (value, _) =
            gradient_noise_with_gradient(&WangHash, x, [5, 3], Interpolation::Smoothstep, 8);
        assert_relative_eq!(plain, value, epsilon = 1e-6);
    }

    #[test]
    fn test_point_derivative_is_nearest_gradient() {
        let x = [0.3 / 4.0, 2.8 / 4.0];
        let (_, d) = gradient_noise_with_gradient(&WangHash, x, [4, 4], Interpolation::Point, 1);
        let g: [f32; 2] = corner_gradient(&WangHash, corner_hash(&WangHash, &[0, 3], 1));
        assert_relative_eq!(d[0], 4.0 * g[0], epsilon = 1e-5);
        assert_relative_eq!(d[1], 4.0 * g[1], epsilon = 1e-5);
    }

    #[test]
    fn test_unit_remap_centres_lattice_points() {
        let v = gradient_noise_unit(&WangHash, [0.5, 0.5], [2, 2], Interpolation::Linear, 0);
        assert_eq!(v, 0.5);
        let p = perlin_3d(&WangHash, [0.1, 0.2, 0.3], [2, 2, 2], 0);
        assert!(p.abs() <= 3.0f32.sqrt() / 2.0);
        let q = perlin_2d(&WangHash, [0.1, 0.2], [2, 2], 0);
        assert!(q.abs() <= std::f32::consts::FRAC_1_SQRT_2);
    }
}
