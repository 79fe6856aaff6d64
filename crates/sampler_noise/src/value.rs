//! N-dimensional value noise.
//!
//! Each lattice corner carries a pseudo-random scalar in `[0, 1)` derived
//! from its hash; the field blends the corners of the kernel footprint with
//! the tensor product of the per-axis weights. Every kernel, including the
//! four-tap `Cubic`, has non-negative weights summing to one, so the field
//! stays inside `[0, 1]`.

use sampler_core::HashFunction;

use crate::interpolation::Interpolation;
use crate::lattice::{hash_to_unit, tap_indices, Footprint};

/// Value noise at `x`, periodic with period one on every axis.
///
/// `frequency[a]` is the number of lattice cells along axis `a` and must be
/// positive.
///
/// # Examples
///
/// ```rust
/// use sampler_core::hash::ProspectorHash;
/// use sampler_noise::interpolation::Interpolation;
/// use sampler_noise::value::value_noise;
///
/// let v = value_noise(&ProspectorHash, [0.3, 0.7], [8, 8], Interpolation::Smoothstep, 1);
/// assert!((0.0..=1.0).contains(&v));
///
/// let wrapped = value_noise(&ProspectorHash, [1.25, 0.5], [8, 8], Interpolation::Linear, 1);
/// let inside = value_noise(&ProspectorHash, [0.25, 0.5], [8, 8], Interpolation::Linear, 1);
/// assert_eq!(wrapped, inside);
/// ```
pub fn value_noise<H: HashFunction + ?Sized, const N: usize>(
    hash: &H,
    x: [f32; N],
    frequency: [u32; N],
    interpolation: Interpolation,
    seed: u32,
) -> f32 {
    let footprint = Footprint::new(x, frequency);
    let weights: [[f32; 4]; N] = footprint.fractions.map(|t| interpolation.weights(t));
    let taps = interpolation.taps();
    let first = interpolation.first_offset();

    let mut value = 0.0f32;
    for combo in 0..taps.pow(N as u32) {
        let tap = tap_indices::<N>(combo, taps);
        let weight: f32 = weights.iter().zip(&tap).map(|(w, &k)| w[k]).product();
        if weight == 0.0 {
            continue;
        }
        let offsets = tap.map(|k| first + k as i64);
        value += weight * hash_to_unit(footprint.corner_hash(hash, &offsets, seed));
    }
    value.clamp(0.0, 1.0)
}

/// One-dimensional [`value_noise`].
#[inline]
pub fn value_1d<H: HashFunction + ?Sized>(
    hash: &H,
    x: f32,
    frequency: u32,
    interpolation: Interpolation,
    seed: u32,
) -> f32 {
    value_noise(hash, [x], [frequency], interpolation, seed)
}

/// Two-dimensional [`value_noise`].
#[inline]
pub fn value_2d<H: HashFunction + ?Sized>(
    hash: &H,
    x: [f32; 2],
    frequency: [u32; 2],
    interpolation: Interpolation,
    seed: u32,
) -> f32 {
    value_noise(hash, x, frequency, interpolation, seed)
}

/// Three-dimensional [`value_noise`].
#[inline]
pub fn value_3d<H: HashFunction + ?Sized>(
    hash: &H,
    x: [f32; 3],
    frequency: [u32; 3],
    interpolation: Interpolation,
    seed: u32,
) -> f32 {
    value_noise(hash, x, frequency, interpolation, seed)
}
