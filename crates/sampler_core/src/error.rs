//! Error types for generator configuration.
//!
//! Sampling itself never fails; only validating constructors return these.

use thiserror::Error;

/// Generator configuration errors.
///
/// # Variants
/// - `InvalidBaseCount`: Interleaved dimension count outside the supported range
/// - `InvalidSampleCount`: Hammersley point-set size of zero
///
/// # Examples
/// ```
/// use sampler_core::ConfigError;
///
/// let err = ConfigError::InvalidBaseCount { generator: "halton", got: 40, max: 32 };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid base count for halton: 40 (must be in [1, 32])"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Interleaved dimension count outside `[1, max]`.
    #[error("Invalid base count for {generator}: {got} (must be in [1, {max}])")]
    InvalidBaseCount {
        /// Name of the generator being configured
        generator: &'static str,
        /// The requested number of bases
        got: usize,
        /// The largest supported number of bases
        max: usize,
    },

    /// Hammersley point set declared with zero points.
    #[error("Invalid sample count: {got} (must be positive)")]
    InvalidSampleCount {
        /// The requested number of samples
        got: u64,
    },
}
