//! Importance-sampled directions and their densities.
//!
//! Every sampler consumes exactly two draws. Each comes in three forms:
//! - `dir_*(g, ..)`: the sample alone
//! - `dir_*_with_pdf(g, ..)`: the sample and its density
//! - `dir_*_pdf(dir, ..)`: the density at an arbitrary direction
//!
//! The sample and the density are two views of the same distribution. All
//! direction densities are per unit solid angle, with `+Z` as the surface
//! normal; [`disc`] uses area density and [`barycentric`] density over the
//! unit parameter triangle.
//!
//! ## Module Structure
//!
//! | Sampler | Support | Density |
//! |---------|---------|---------|
//! | [`dir_uniform`] | sphere | `1 / 4π` |
//! | [`dir_cosine`] | hemisphere | `cos θ / π` |
//! | [`dir_cosine_pow`] | hemisphere | `(n + 1) cosⁿ θ / 2π` |
//! | [`dir_ggx`], [`dir_ggx_aniso`] | hemisphere | `D(h) cos θ` |
//! | [`dir_beckmann`], [`dir_beckmann_aniso`] | hemisphere | `D(h) cos θ` |
//! | [`dir_henyey_greenstein`] | sphere | `(1 - g²) / 4π(1 + g² - 2g cos θ)^1.5` |
//! | [`disc`] | unit disc | `1 / π` |
//! | [`barycentric`] | unit triangle | `2` |
//!
//! [`dir_uniform_nd`] extends the uniform sphere to any dimension and feeds
//! gradient noise.

use std::f32::consts::{FRAC_1_PI, PI, TAU};

use glam::{Vec2, Vec3};
use sampler_core::Generator;

use crate::continuous::gaussian_pair;
use crate::uniform::{uniform, uniform_ex};

const INV_4PI: f32 = 0.25 * FRAC_1_PI;

/// Below this `|g|` Henyey–Greenstein is sampled as the isotropic limit.
const HG_ISOTROPIC_EPSILON: f32 = 1e-3;

#[inline]
fn spherical(cos_theta: f32, phi: f32) -> Vec3 {
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
    let (sin_phi, cos_phi) = phi.sin_cos();
    Vec3::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta)
}

/// Azimuth and anisotropy term `cos²φ/αx² + sin²φ/αy²` shared by the
/// anisotropic microfacet samplers.
#[inline]
fn anisotropic_azimuth(u: f32, alpha_x: f32, alpha_y: f32) -> (f32, f32) {
    let (sin, cos) = (TAU * u).sin_cos();
    let phi = (alpha_y * sin).atan2(alpha_x * cos);
    let (sin_phi, cos_phi) = phi.sin_cos();
    let inv_alpha2 =
        cos_phi * cos_phi / (alpha_x * alpha_x) + sin_phi * sin_phi / (alpha_y * alpha_y);
    (phi, inv_alpha2)
}

// ============================================================================
// Sphere and cosine lobes
// ============================================================================

/// Uniform direction on the unit sphere.
#[inline]
pub fn dir_uniform<G: Generator + ?Sized>(g: &mut G) -> Vec3 {
    let cos_theta = 1.0 - 2.0 * uniform(g);
    spherical(cos_theta, TAU * uniform(g))
}

/// [`dir_uniform`] with its density.
#[inline]
pub fn dir_uniform_with_pdf<G: Generator + ?Sized>(g: &mut G) -> (Vec3, f32) {
    (dir_uniform(g), INV_4PI)
}

/// Density of [`dir_uniform`]; constant over the sphere.
#[inline]
pub fn dir_uniform_pdf(_dir: Vec3) -> f32 {
    INV_4PI
}

/// Cosine-weighted direction on the `+Z` hemisphere.
#[inline]
pub fn dir_cosine<G: Generator + ?Sized>(g: &mut G) -> Vec3 {
    let cos_theta = uniform(g).sqrt();
    spherical(cos_theta, TAU * uniform(g))
}

/// [`dir_cosine`] with its density.
#[inline]
pub fn dir_cosine_with_pdf<G: Generator + ?Sized>(g: &mut G) -> (Vec3, f32) {
    let dir = dir_cosine(g);
    (dir, dir_cosine_pdf(dir))
}

/// Density of [`dir_cosine`].
#[inline]
pub fn dir_cosine_pdf(dir: Vec3) -> f32 {
    dir.z.max(0.0) * FRAC_1_PI
}

/// Direction on the `+Z` hemisphere with density proportional to
/// `cosⁿ θ`.
///
/// `exponent = 1` reproduces [`dir_cosine`], `exponent = 0` the uniform
/// hemisphere.
#[inline]
pub fn dir_cosine_pow<G: Generator + ?Sized>(g: &mut G, exponent: f32) -> Vec3 {
    debug_assert!(exponent >= 0.0, "exponent must be non-negative");
    let cos_theta = uniform(g).powf(1.0 / (exponent + 1.0));
    spherical(cos_theta, TAU * uniform(g))
}

/// [`dir_cosine_pow`] with its density.
#[inline]
pub fn dir_cosine_pow_with_pdf<G: Generator + ?Sized>(g: &mut G, exponent: f32) -> (Vec3, f32) {
    let dir = dir_cosine_pow(g, exponent);
    (dir, dir_cosine_pow_pdf(dir, exponent))
}

/// Density of [`dir_cosine_pow`].
#[inline]
pub fn dir_cosine_pow_pdf(dir: Vec3, exponent: f32) -> f32 {
    if dir.z <= 0.0 {
        return 0.0;
    }
    (exponent + 1.0) * dir.z.powf(exponent) / TAU
}

// ============================================================================
// Planar domains
// ============================================================================

/// Uniform point in the unit disc.
#[inline]
pub fn disc<G: Generator + ?Sized>(g: &mut G) -> Vec2 {
    let radius = uniform(g).sqrt();
    let (sin, cos) = (TAU * uniform(g)).sin_cos();
    Vec2::new(radius * cos, radius * sin)
}

/// [`disc`] with its area density `1 / π`.
#[inline]
pub fn disc_with_pdf<G: Generator + ?Sized>(g: &mut G) -> (Vec2, f32) {
    (disc(g), FRAC_1_PI)
}

/// Area density of [`disc`]; zero outside the unit disc.
#[inline]
pub fn disc_pdf(point: Vec2) -> f32 {
    if point.length_squared() <= 1.0 {
        FRAC_1_PI
    } else {
        0.0
    }
}

/// Uniform barycentric coordinates over a triangle.
///
/// The components are non-negative and sum to one.
#[inline]
pub fn barycentric<G: Generator + ?Sized>(g: &mut G) -> Vec3 {
    let su = uniform(g).sqrt();
    let b0 = 1.0 - su;
    let b1 = uniform(g) * su;
    Vec3::new(b0, b1, (1.0 - b0 - b1).max(0.0))
}

/// [`barycentric`] with its density.
#[inline]
pub fn barycentric_with_pdf<G: Generator + ?Sized>(g: &mut G) -> (Vec3, f32) {
    (barycentric(g), 2.0)
}

/// Density of [`barycentric`] over the unit parameter triangle
/// `{(b0, b1) : b0, b1 ≥ 0, b0 + b1 ≤ 1}`.
#[inline]
pub fn barycentric_pdf(coords: Vec3) -> f32 {
    if coords.x >= 0.0 && coords.y >= 0.0 && coords.x + coords.y <= 1.0 + f32::EPSILON {
        2.0
    } else {
        0.0
    }
}

// ============================================================================
// Microfacet distributions
// ============================================================================

/// Half-vector drawn from the isotropic GGX (Trowbridge–Reitz) distribution
/// with roughness `alpha`, weighted by `cos θ`.
#[inline]
pub fn dir_ggx<G: Generator + ?Sized>(g: &mut G, alpha: f32) -> Vec3 {
    let u0 = uniform_ex(g);
    let tan2 = alpha * alpha * u0 / (1.0 - u0);
    spherical((1.0 + tan2).sqrt().recip(), TAU * uniform(g))
}

/// [`dir_ggx`] with its density.
#[inline]
pub fn dir_ggx_with_pdf<G: Generator + ?Sized>(g: &mut G, alpha: f32) -> (Vec3, f32) {
    let dir = dir_ggx(g, alpha);
    (dir, dir_ggx_pdf(dir, alpha))
}

/// Density of [`dir_ggx`]: `D(h) cos θ`.
#[inline]
pub fn dir_ggx_pdf(dir: Vec3, alpha: f32) -> f32 {
    debug_assert!(alpha > 0.0, "roughness must be positive");
    let cos_theta = dir.z;
    if cos_theta <= 0.0 {
        return 0.0;
    }
    let alpha2 = alpha * alpha;
    let denom = (alpha2 - 1.0) * cos_theta * cos_theta + 1.0;
    alpha2 * cos_theta / (PI * denom * denom)
}

/// Half-vector drawn from the anisotropic GGX distribution with roughness
/// `alpha_x` along X and `alpha_y` along Y.
#[inline]
pub fn dir_ggx_aniso<G: Generator + ?Sized>(g: &mut G, alpha_x: f32, alpha_y: f32) -> Vec3 {
    let u0 = uniform_ex(g);
    let (phi, inv_alpha2) = anisotropic_azimuth(uniform(g), alpha_x, alpha_y);
    let tan2 = u0 / ((1.0 - u0) * inv_alpha2);
    spherical((1.0 + tan2).sqrt().recip(), phi)
}

/// [`dir_ggx_aniso`] with its density.
#[inline]
pub fn dir_ggx_aniso_with_pdf<G: Generator + ?Sized>(
    g: &mut G,
    alpha_x: f32,
    alpha_y: f32,
) -> (Vec3, f32) {
    let dir = dir_ggx_aniso(g, alpha_x, alpha_y);
    (dir, dir_ggx_aniso_pdf(dir, alpha_x, alpha_y))
}

/// Density of [`dir_ggx_aniso`].
#[inline]
pub fn dir_ggx_aniso_pdf(dir: Vec3, alpha_x: f32, alpha_y: f32) -> f32 {
    debug_assert!(alpha_x > 0.0 && alpha_y > 0.0, "roughness must be positive");
    if dir.z <= 0.0 {
        return 0.0;
    }
    let sx = dir.x / alpha_x;
    let sy = dir.y / alpha_y;
    let denom = sx * sx + sy * sy + dir.z * dir.z;
    dir.z / (PI * alpha_x * alpha_y * denom * denom)
}

/// Half-vector drawn from the isotropic Beckmann–Spizzichino distribution
/// with roughness `alpha`, weighted by `cos θ`.
#[inline]
pub fn dir_beckmann<G: Generator + ?Sized>(g: &mut G, alpha: f32) -> Vec3 {
    let u0 = uniform_ex(g);
    let tan2 = -alpha * alpha * (1.0 - u0).ln();
    spherical((1.0 + tan2).sqrt().recip(), TAU * uniform(g))
}

/// [`dir_beckmann`] with its density.
#[inline]
pub fn dir_beckmann_with_pdf<G: Generator + ?Sized>(g: &mut G, alpha: f32) -> (Vec3, f32) {
    let dir = dir_beckmann(g, alpha);
    (dir, dir_beckmann_pdf(dir, alpha))
}

/// Density of [`dir_beckmann`]: `D(h) cos θ`.
#[inline]
pub fn dir_beckmann_pdf(dir: Vec3, alpha: f32) -> f32 {
    debug_assert!(alpha > 0.0, "roughness must be positive");
    let cos_theta = dir.z;
    if cos_theta <= 0.0 {
        return 0.0;
    }
    let cos2 = cos_theta * cos_theta;
    let alpha2 = alpha * alpha;
    let tan2 = (1.0 - cos2) / cos2;
    (-tan2 / alpha2).exp() / (PI * alpha2 * cos2 * cos_theta)
}

/// Half-vector drawn from the anisotropic Beckmann–Spizzichino distribution.
#[inline]
pub fn dir_beckmann_aniso<G: Generator + ?Sized>(g: &mut G, alpha_x: f32, alpha_y: f32) -> Vec3 {
    let u0 = uniform_ex(g);
    let (phi, inv_alpha2) = anisotropic_azimuth(uniform(g), alpha_x, alpha_y);
    let tan2 = -(1.0 - u0).ln() / inv_alpha2;
    spherical((1.0 + tan2).sqrt().recip(), phi)
}

/// [`dir_beckmann_aniso`] with its density.
#[inline]
pub fn dir_beckmann_aniso_with_pdf<G: Generator + ?Sized>(
    g: &mut G,
    alpha_x: f32,
    alpha_y: f32,
) -> (Vec3, f32) {
    let dir = dir_beckmann_aniso(g, alpha_x, alpha_y);
    (dir, dir_beckmann_aniso_pdf(dir, alpha_x, alpha_y))
}

/// Density of [`dir_beckmann_aniso`].
#[inline]
pub fn dir_beckmann_aniso_pdf(dir: Vec3, alpha_x: f32, alpha_y: f32) -> f32 {
    debug_assert!(alpha_x > 0.0 && alpha_y > 0.0, "roughness must be positive");
    if dir.z <= 0.0 {
        return 0.0;
    }
    let sx = dir.x / alpha_x;
    let sy = dir.y / alpha_y;
    let cos2 = dir.z * dir.z;
    (-(sx * sx + sy * sy) / cos2).exp() / (PI * alpha_x * alpha_y * cos2 * dir.z)
}

// ============================================================================
// Phase function
// ============================================================================

#[inline]
fn henyey_greenstein_phase(cos_theta: f32, asymmetry: f32) -> f32 {
    // matches the isotropic branch of the sampler
    if asymmetry.abs() < HG_ISOTROPIC_EPSILON {
        return INV_4PI;
    }
    let g2 = asymmetry * asymmetry;
    let denom = 1.0 + g2 - 2.0 * asymmetry * cos_theta;
    INV_4PI * (1.0 - g2) / (denom * denom.sqrt())
}

/// Direction scattered by the Henyey–Greenstein phase function.
///
/// `asymmetry` lies in `(-1, 1)`: positive values scatter forward along
/// `incident`, negative values back towards its origin, zero is isotropic.
/// `incident` need not be normalised; a zero vector falls back to `+Z`.
///
/// # Examples
///
/// ```rust
/// use glam::Vec3;
/// use sampler_core::prng::Xorshift32;
/// use sampler_distributions::direction::dir_henyey_greenstein_with_pdf;
///
/// let mut rng = Xorshift32::new(7);
/// let (dir, pdf) = dir_henyey_greenstein_with_pdf(&mut rng, Vec3::X, 0.8);
/// assert!((dir.length() - 1.0).abs() < 1e-5);
/// assert!(pdf > 0.0);
/// ```
pub fn dir_henyey_greenstein<G: Generator + ?Sized>(
    g: &mut G,
    incident: Vec3,
    asymmetry: f32,
) -> Vec3 {
    debug_assert!(asymmetry.abs() < 1.0, "asymmetry must lie in (-1, 1)");
    let u0 = uniform(g);
    let cos_theta = if asymmetry.abs() < HG_ISOTROPIC_EPSILON {
        1.0 - 2.0 * u0
    } else {
        let g2 = asymmetry * asymmetry;
        let s = (1.0 - g2) / (1.0 - asymmetry + 2.0 * asymmetry * u0);
        ((1.0 + g2 - s * s) / (2.0 * asymmetry)).clamp(-1.0, 1.0)
    };
    let local = spherical(cos_theta, TAU * uniform(g));

    let axis = incident.try_normalize().unwrap_or(Vec3::Z);
    let (tangent, bitangent) = axis.any_orthonormal_pair();
    tangent * local.x + bitangent * local.y + axis * local.z
}

/// [`dir_henyey_greenstein`] with its density.
pub fn dir_henyey_greenstein_with_pdf<G: Generator + ?Sized>(
    g: &mut G,
    incident: Vec3,
    asymmetry: f32,
) -> (Vec3, f32) {
    let dir = dir_henyey_greenstein(g, incident, asymmetry);
    (dir, dir_henyey_greenstein_pdf(dir, incident, asymmetry))
}

/// Density of [`dir_henyey_greenstein`].
#[inline]
pub fn dir_henyey_greenstein_pdf(dir: Vec3, incident: Vec3, asymmetry: f32) -> f32 {
    let axis = incident.try_normalize().unwrap_or(Vec3::Z);
    henyey_greenstein_phase(dir.dot(axis).clamp(-1.0, 1.0), asymmetry)
}

// ============================================================================
// N-dimensional sphere
// ============================================================================

/// Uniform direction on the unit `(N-1)`-sphere from `N` normalised Gaussians.
///
/// Consumes `2 * ceil(N / 2)` draws. A degenerate all-zero draw returns the
/// first axis.
///
/// # Examples
///
/// ```rust
/// use sampler_core::prng::Xorshift32;
/// use sampler_distributions::direction::dir_uniform_nd;
///
/// let mut rng = Xorshift32::new(3);
/// let v: [f32; 4] = dir_uniform_nd(&mut rng);
/// let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
/// assert!((norm - 1.0).abs() < 1e-5);
/// ```
pub fn dir_uniform_nd<G: Generator + ?Sized, const N: usize>(g: &mut G) -> [f32; N] {
    let mut v = [0.0f32; N];
    for pair in v.chunks_mut(2) {
        let (first, second) = gaussian_pair(g);
        pair[0] = first;
        if let Some(slot) = pair.get_mut(1) {
            *slot = second;
        }
    }

    let norm2: f32 = v.iter().map(|x| x * x).sum();
    if norm2 > f32::MIN_POSITIVE {
        let inv = norm2.sqrt().recip();
        v.iter_mut().for_each(|x| *x *= inv);
    } else if let Some(first) = v.first_mut() {
        *first = 1.0;
    }
    v
}
