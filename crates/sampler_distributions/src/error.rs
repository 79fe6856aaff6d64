//! Error types for validating sampler constructors.
//!
//! This module provides:
//! - `SamplingError`: Rejected weight tables and covariance matrices

use thiserror::Error;

/// Sampler construction errors.
///
/// Drawing from a constructed sampler never fails; only the constructors of
/// [`DiscreteFunction1D`](crate::discrete::DiscreteFunction1D),
/// [`DiscreteFunction2D`](crate::discrete::DiscreteFunction2D) and
/// [`CholeskyFactor`](crate::linalg::CholeskyFactor) return these.
///
/// # Variants
/// - `EmptyWeights`: No weights (or no rows) supplied
/// - `InvalidWeight`: Negative, NaN or infinite weight
/// - `TotalOverflow`: Finite weights whose sum is not representable
/// - `ZeroTotal`: Every weight is zero
/// - `InvalidRow`: A row of a 2D table was rejected
/// - `NotPositiveDefinite`: Covariance matrix has a non-positive pivot
///
/// # Examples
/// ```
/// use sampler_distributions::SamplingError;
///
/// let err = SamplingError::InvalidWeight { index: 2, value: -1.0 };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid weight at index 2: -1 (must be finite and non-negative)"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SamplingError {
    /// The weight table is empty.
    #[error("Empty weight table")]
    EmptyWeights,

    /// A weight is negative or not finite.
    #[error("Invalid weight at index {index}: {value} (must be finite and non-negative)")]
    InvalidWeight {
        /// Position of the offending weight
        index: usize,
        /// The offending weight
        value: f32,
    },

    /// The running sum of the weights overflows `f32`.
    #[error("Weight total overflows at index {index}")]
    TotalOverflow {
        /// Position where the running sum became infinite
        index: usize,
    },

    /// No weight is strictly positive.
    #[error("Weight table has no strictly positive entry")]
    ZeroTotal,

    /// A row of a 2D table was rejected.
    #[error("Invalid row {row}: {source}")]
    InvalidRow {
        /// Index of the rejected row
        row: usize,
        /// Why the row was rejected
        source: Box<SamplingError>,
    },

    /// The covariance matrix is not symmetric positive definite.
    #[error("Matrix is not positive definite: pivot {pivot} is {value}")]
    NotPositiveDefinite {
        /// Diagonal position where the factorisation broke down
        pivot: usize,
        /// The non-positive pivot value
        value: f64,
    },
}
