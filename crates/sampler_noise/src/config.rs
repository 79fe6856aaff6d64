//! Runtime noise configuration.
//!
//! The free functions in [`value`](crate::value) and
//! [`gradient`](crate::gradient) take their dimension from const generics and
//! trust their arguments. [`NoiseConfig`] is the checked entry point for
//! settings that arrive at runtime (for example deserialised with the `serde`
//! feature): it validates the frequency vector and kernel, then dispatches to
//! the same functions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use sampler_core::HashFunction;

use crate::error::NoiseError;
use crate::gradient::{gradient_noise, gradient_noise_with_gradient};
use crate::interpolation::Interpolation;
use crate::turbulence::{turbulence, TurbulenceConfig};
use crate::value::value_noise;

/// Lattice frequency, kernel and seed of a noise field.
///
/// # Examples
///
/// ```rust
/// use sampler_core::hash::WangHash;
/// use sampler_noise::config::NoiseConfig;
/// use sampler_noise::interpolation::Interpolation;
///
/// let config = NoiseConfig::new(vec![8, 8, 4]).with_seed(3);
/// let v = config.value(&WangHash, [0.1, 0.5, 0.9]).unwrap();
/// assert!((0.0..=1.0).contains(&v));
///
/// // dimension must match the frequency vector
/// assert!(config.value(&WangHash, [0.1, 0.5]).is_err());
///
/// // gradient noise has no four-tap kernel
/// let cubic = config.with_interpolation(Interpolation::Cubic);
/// assert!(cubic.gradient(&WangHash, [0.1, 0.5, 0.9]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NoiseConfig {
    /// Lattice cells per axis; one entry per dimension.
    pub frequency: Vec<u32>,
    /// Kernel used to blend lattice corners.
    #[cfg_attr(feature = "serde", serde(default))]
    pub interpolation: Interpolation,
    /// Field seed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: u32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            frequency: vec![4, 4],
            interpolation: Interpolation::default(),
            seed: 0,
        }
    }
}

impl NoiseConfig {
    /// A configuration with the given per-axis frequencies, the default
    /// kernel and seed zero.
    pub fn new(frequency: Vec<u32>) -> Self {
        Self {
            frequency,
            ..Self::default()
        }
    }

    /// Sets the interpolation kernel.
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Number of axes.
    pub fn dimension(&self) -> usize {
        self.frequency.len()
    }

    /// Checks that at least one axis is configured and that every frequency
    /// is positive.
    pub fn validate(&self) -> Result<(), NoiseError> {
        self.check_frequency()?;
        tracing::debug!(
            dimension = self.dimension(),
            interpolation = ?self.interpolation,
            seed = self.seed,
            "noise configuration validated"
        );
        Ok(())
    }

    fn check_frequency(&self) -> Result<(), NoiseError> {
        if self.frequency.is_empty() {
            return Err(NoiseError::EmptyFrequency);
        }
        match self.frequency.iter().position(|&f| f == 0) {
            Some(axis) => Err(NoiseError::ZeroFrequency { axis }),
            None => Ok(()),
        }
    }

    /// The frequency vector as a fixed-size array of `N` axes.
    pub fn frequency_array<const N: usize>(&self) -> Result<[u32; N], NoiseError> {
        self.check_frequency()?;
        self.frequency
            .as_slice()
            .try_into()
            .map_err(|_| NoiseError::DimensionMismatch {
                expected: self.dimension(),
                got: N,
            })
    }

    fn gradient_frequency<const N: usize>(&self) -> Result<[u32; N], NoiseError> {
        if !self.interpolation.is_two_tap() {
            return Err(NoiseError::UnsupportedInterpolation {
                interpolation: self.interpolation,
                field: "gradient",
            });
        }
        self.frequency_array()
    }

    /// Value noise at `x`, in `[0, 1]`.
    pub fn value<H: HashFunction + ?Sized, const N: usize>(
        &self,
        hash: &H,
        x: [f32; N],
    ) -> Result<f32, NoiseError> {
        let frequency = self.frequency_array()?;
        Ok(value_noise(hash, x, frequency, self.interpolation, self.seed))
    }

    /// Gradient noise at `x`, bounded by `√N / 2`.
    pub fn gradient<H: HashFunction + ?Sized, const N: usize>(
        &self,
        hash: &H,
        x: [f32; N],
    ) -> Result<f32, NoiseError> {
        let frequency = self.gradient_frequency()?;
        Ok(gradient_noise(hash, x, frequency, self.interpolation, self.seed))
    }

    /// Gradient noise at `x` with its partial derivatives.
    pub fn gradient_with_derivatives<H: HashFunction + ?Sized, const N: usize>(
        &self,
        hash: &H,
        x: [f32; N],
    ) -> Result<(f32, [f32; N]), NoiseError> {
        let frequency = self.gradient_frequency()?;
        Ok(gradient_noise_with_gradient(
            hash,
            x,
            frequency,
            self.interpolation,
            self.seed,
        ))
    }

    /// Fractal sum of value-noise octaves at `x`.
    pub fn value_turbulence<H: HashFunction + ?Sized, const N: usize>(
        &self,
        hash: &H,
        x: [f32; N],
        octaves: &TurbulenceConfig,
    ) -> Result<f32, NoiseError> {
        octaves.validate()?;
        let frequency = self.frequency_array()?;
        let interpolation = self.interpolation;
        Ok(turbulence(
            |p, f, s| value_noise(hash, p, f, interpolation, s),
            x,
            frequency,
            octaves,
            self.seed,
        ))
    }
}
