//! Fractal turbulence: sums of noise octaves.
//!
//! Octave `k` evaluates the supplied field at frequency
//! `round(frequency · m_f^k)` and scales it by `m_a^k`, where `m_f` and
//! `m_a` are the frequency and amplitude multipliers. Every octave gets its
//! own seed, so octaves never repeat the same structure.
//!
//! | Kind | Octave contribution for field value `n ∈ [0, 1]` |
//! |------|---------------------------------------------------|
//! | `Standard` | `n` |
//! | `Billowy` | `abs(2n - 1)` |
//! | `Ridged` | `(1 - abs(2n - 1))²` |
//!
//! Rounded integer frequencies keep every octave periodic on `[0, 1)`, so
//! the sum is periodic too.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::NoiseError;

/// Seed increment between octaves (odd, so seeds never collide).
const OCTAVE_SEED_STRIDE: u32 = 0x9e37_79b9;

/// How each octave is shaped before it is summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TurbulenceKind {
    /// Plain fractal sum.
    #[default]
    Standard,
    /// Folded octaves with rounded features.
    Billowy,
    /// Inverted, squared folds with sharp ridges.
    Ridged,
}

impl TurbulenceKind {
    /// Shapes one octave value `n ∈ [0, 1]`.
    #[inline]
    pub fn shape(self, n: f32) -> f32 {
        match self {
            Self::Standard => n,
            Self::Billowy => (2.0 * n - 1.0).abs(),
            Self::Ridged => {
                let r = 1.0 - (2.0 * n - 1.0).abs();
                r * r
            }
        }
    }
}

/// Turbulence parameters.
///
/// # Examples
///
/// ```rust
/// use sampler_noise::turbulence::{TurbulenceConfig, TurbulenceKind};
///
/// let config = TurbulenceConfig::default()
///     .with_octaves(4)
///     .with_kind(TurbulenceKind::Ridged);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.frequency_multiplier, 1.92);
/// assert_eq!(config.max_amplitude(), 1.875);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TurbulenceConfig {
    /// Number of octaves summed.
    pub octaves: u32,
    /// Frequency growth per octave.
    pub frequency_multiplier: f32,
    /// Amplitude decay per octave.
    pub amplitude_multiplier: f32,
    /// Octave shaping.
    pub kind: TurbulenceKind,
}

impl Default for TurbulenceConfig {
    fn default() -> Self {
        Self {
            octaves: 6,
            frequency_multiplier: 1.92,
            amplitude_multiplier: 0.5,
            kind: TurbulenceKind::Standard,
        }
    }
}

impl TurbulenceConfig {
    /// Sets the number of octaves.
    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    /// Sets the frequency multiplier.
    pub fn with_frequency_multiplier(mut self, multiplier: f32) -> Self {
        self.frequency_multiplier = multiplier;
        self
    }

    /// Sets the amplitude multiplier.
    pub fn with_amplitude_multiplier(mut self, multiplier: f32) -> Self {
        self.amplitude_multiplier = multiplier;
        self
    }

    /// Sets the octave shaping.
    pub fn with_kind(mut self, kind: TurbulenceKind) -> Self {
        self.kind = kind;
        self
    }

    /// Checks that both multipliers are positive and finite.
    pub fn validate(&self) -> Result<(), NoiseError> {
        for (name, value) in [
            ("frequency_multiplier", self.frequency_multiplier),
            ("amplitude_multiplier", self.amplitude_multiplier),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(NoiseError::InvalidMultiplier { name, value });
            }
        }
        Ok(())
    }

    /// Upper bound of [`turbulence`] for fields in `[0, 1]`: the sum of the
    /// octave amplitudes.
    pub fn max_amplitude(&self) -> f32 {
        (0..self.octaves)
            .map(|k| self.amplitude_multiplier.powi(k as i32))
            .sum()
    }

    /// Seed of octave `k`.
    #[inline]
    pub fn octave_seed(seed: u32, k: u32) -> u32 {
        seed.wrapping_add(k.wrapping_mul(OCTAVE_SEED_STRIDE))
    }

    /// Integer frequencies of octave `k`, never below one.
    #[inline]
    pub fn octave_frequency<const N: usize>(&self, frequency: [u32; N], k: u32) -> [u32; N] {
        let scale = self.frequency_multiplier.powi(k as i32);
        frequency.map(|f| ((f as f32 * scale).round() as u32).max(1))
    }
}

/// Sums `config.octaves` octaves of `field` at `x`.
///
/// `field(x, frequency, seed)` must return values in `[0, 1]`; the result
/// then lies in `[0, config.max_amplitude()]`.
///
/// # Examples
///
/// ```rust
/// use sampler_core::hash::WangHash;
/// use sampler_noise::interpolation::Interpolation;
/// use sampler_noise::turbulence::{turbulence, TurbulenceConfig};
/// use sampler_noise::value::value_noise;
///
/// let config = TurbulenceConfig::default();
/// let field = |x: [f32; 2], f: [u32; 2], s: u32| {
///     value_noise(&WangHash, x, f, Interpolation::Smoothstep, s)
/// };
/// let v = turbulence(field, [0.2, 0.4], [4, 4], &config, 7);
/// assert!((0.0..=config.max_amplitude()).contains(&v));
/// ```
pub fn turbulence<F, const N: usize>(
    field: F,
    x: [f32; N],
    frequency: [u32; N],
    config: &TurbulenceConfig,
    seed: u32,
) -> f32
where
    F: Fn([f32; N], [u32; N], u32) -> f32,
{
    let mut sum = 0.0f32;
    let mut amplitude = 1.0f32;
    for k in 0..config.octaves {
        let n = field(
            x,
            config.octave_frequency(frequency, k),
            TurbulenceConfig::octave_seed(seed, k),
        );
        sum += amplitude * config.kind.shape(n);
        amplitude *= config.amplitude_multiplier;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let config = TurbulenceConfig::default();
        assert_eq!(config.octaves, 6);
        assert_eq!(config.frequency_multiplier, 1.92);
        assert_eq!(config.amplitude_multiplier, 0.5);
        assert_eq!(config.kind, TurbulenceKind::Standard);
        assert_relative_eq!(config.max_amplitude(), 1.968_75, epsilon = 1e-6);
    }

    #[test]
    fn test_shapes() {
        assert_eq!(TurbulenceKind::Standard.shape(0.3), 0.3);
        assert_eq!(TurbulenceKind::Billowy.shape(0.5), 0.0);
        assert_eq!(TurbulenceKind::Billowy.shape(0.0), 1.0);
        assert_eq!(TurbulenceKind::Ridged.shape(0.5), 1.0);
        assert_eq!(TurbulenceKind::Ridged.shape(1.0), 0.0);
        assert_relative_eq!(TurbulenceKind::Ridged.shape(0.25), 0.25, epsilon = 1e-7);
    }

    #[test]
    fn test_octave_frequencies_round() {
        let config = TurbulenceConfig::default();
        assert_eq!(config.octave_frequency([3, 1], 0), [3, 1]);
        // 3 * 1.92 = 5.76, 1 * 1.92 = 1.92
        assert_eq!(config.octave_frequency([3, 1], 1), [6, 2]);
        // 1.92^2 = 3.6864
        assert_eq!(config.octave_frequency([1], 2), [4]);
        let shrinking = config.with_frequency_multiplier(0.1);
        assert_eq!(shrinking.octave_frequency([2], 3), [1]);
    }

    #[test]
    fn test_octave_seeds_are_distinct() {
        let seeds: Vec<u32> = (0..64).map(|k| TurbulenceConfig::octave_seed(11, k)).collect();
        let mut sorted = seeds.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), seeds.len());
        assert_eq!(seeds[0], 11);
    }

    #[test]
    fn test_constant_field_sums_amplitudes() {
        let config = TurbulenceConfig::default().with_octaves(3);
        let v = turbulence(|_, _, _| 1.0, [0.5], [2], &config, 0);
        assert_relative_eq!(v, 1.75, epsilon = 1e-6);

        let ridged = config.with_kind(TurbulenceKind::Ridged);
        assert_relative_eq!(turbulence(|_, _, _| 0.5, [0.5], [2], &ridged, 0), 1.75);
        assert_eq!(turbulence(|_, _, _| 0.5, [0.5], [2], &ridged.with_octaves(0), 0), 0.0);
    }

    #[test]
    fn test_octaves_see_scaled_frequency_and_seed() {
        let config = TurbulenceConfig::default().with_octaves(2);
        let seen = std::cell::RefCell::new(Vec::new());
        turbulence(
            |_, f: [u32; 1], s| {
                seen.borrow_mut().push((f[0], s));
                0.0
            },
            [0.1],
            [10],
            &config,
            5,
        );
        assert_eq!(
            seen.into_inner(),
            vec![(10, 5), (19, 5u32.wrapping_add(OCTAVE_SEED_STRIDE))]
        );
    }

    #[test]
    fn test_validate_rejects_bad_multipliers() {
        let err = TurbulenceConfig::default()
            .with_amplitude_multiplier(0.0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            NoiseError::InvalidMultiplier {
                name: "amplitude_multiplier",
                value: 0.0
            }
        );
        assert!(TurbulenceConfig::default()
            .with_frequency_multiplier(f32::NAN)
            .validate()
            .is_err());
    }
}
