//! Error types for noise and turbulence configuration.
//!
//! Evaluating a noise field never fails. These errors come from validating
//! [`NoiseConfig`](crate::config::NoiseConfig) and
//! [`TurbulenceConfig`](crate::turbulence::TurbulenceConfig).

use thiserror::Error;

use crate::interpolation::Interpolation;

/// Noise configuration errors.
///
/// # Variants
/// - `EmptyFrequency`: No axes configured
/// - `ZeroFrequency`: An axis has frequency zero
/// - `DimensionMismatch`: Sample point and configuration disagree on `N`
/// - `UnsupportedInterpolation`: Kernel not available for the requested field
/// - `InvalidMultiplier`: Non-positive or non-finite turbulence multiplier
///
/// # Examples
/// ```
/// use sampler_noise::NoiseError;
///
/// let err = NoiseError::ZeroFrequency { axis: 1 };
/// assert_eq!(format!("{}", err), "Invalid frequency on axis 1: must be positive");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NoiseError {
    /// The frequency vector is empty.
    #[error("Empty frequency vector")]
    EmptyFrequency,

    /// An axis has frequency zero.
    #[error("Invalid frequency on axis {axis}: must be positive")]
    ZeroFrequency {
        /// Offending axis
        axis: usize,
    },

    /// The sample point has a different dimension from the configuration.
    #[error("Dimension mismatch: configured for {expected} axes, got {got}")]
    DimensionMismatch {
        /// Number of configured axes
        expected: usize,
        /// Dimension of the sample point
        got: usize,
    },

    /// The interpolation kernel cannot be used for this field.
    #[error("Unsupported interpolation {interpolation:?} for {field} noise")]
    UnsupportedInterpolation {
        /// The rejected kernel
        interpolation: Interpolation,
        /// Field kind, e.g. `"gradient"`
        field: &'static str,
    },

    /// A turbulence multiplier is not a positive finite number.
    #[error("Invalid {name}: {value} (must be positive and finite)")]
    InvalidMultiplier {
        /// Name of the parameter
        name: &'static str,
        /// The rejected value
        value: f32,
    },
}
