//! Lower-triangular Cholesky factor for fixed-size covariance matrices.
//!
//! Multivariate Gaussian sampling needs exactly one matrix operation: the
//! factorisation `Σ = L·Lᵀ` and the product `L·z`. [`CholeskyFactor`] holds
//! `L` for a compile-time dimension `N`.

use crate::error::SamplingError;

/// Lower-triangular factor `L` of a symmetric positive-definite matrix.
///
/// # Examples
///
/// ```rust
/// use sampler_distributions::CholeskyFactor;
///
/// let factor = CholeskyFactor::decompose(&[[4.0, 2.0], [2.0, 2.0]]).unwrap();
/// assert_eq!(factor.lower(), &[[2.0, 0.0], [1.0, 1.0]]);
/// assert_eq!(factor.transform(&[1.0, 1.0]), [2.0, 2.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CholeskyFactor<const N: usize> {
    lower: [[f32; N]; N],
}

impl<const N: usize> CholeskyFactor<N> {
    /// Factorises `covariance` with the Cholesky–Banachiewicz scheme.
    ///
    /// Only the lower triangle of `covariance` is read. Accumulation runs in
    /// `f64`.
    ///
    /// # Errors
    /// Returns [`SamplingError::NotPositiveDefinite`] when a pivot is zero,
    /// negative or NaN.
    pub fn decompose(covariance: &[[f32; N]; N]) -> Result<Self, SamplingError> {
        let mut lower = [[0.0f64; N]; N];

        for i in 0..N {
            for j in 0..=i {
                let mut sum = f64::from(covariance[i][j]);
                for k in 0..j {
                    sum -= lower[i][k] * lower[j][k];
                }

                if i == j {
                    if sum.is_nan() || sum <= 0.0 {
                        return Err(SamplingError::NotPositiveDefinite {
                            pivot: i,
                            value: sum,
                        });
                    }
                    lower[i][i] = sum.sqrt();
                } else {
                    lower[i][j] = sum / lower[j][j];
                }
            }
        }

        tracing::debug!(dimension = N, "covariance factorised");
        Ok(Self {
            lower: lower.map(|row| row.map(|v| v as f32)),
        })
    }

    /// Wraps an existing lower-triangular factor; the strict upper triangle is
    /// zeroed.
    pub fn from_lower(mut lower: [[f32; N]; N]) -> Self {
        for (i, row) in lower.iter_mut().enumerate() {
            for v in row.iter_mut().skip(i + 1) {
                *v = 0.0;
            }
        }
        Self { lower }
    }

    /// The identity factor (independent unit-variance components).
    pub fn identity() -> Self {
        let mut lower = [[0.0; N]; N];
        for (i, row) in lower.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self { lower }
    }

    /// Returns `L`.
    pub fn lower(&self) -> &[[f32; N]; N] {
        &self.lower
    }

    /// Computes `L·z`.
    #[inline]
    pub fn transform(&self, z: &[f32; N]) -> [f32; N] {
        let mut out = [0.0f32; N];
        for (i, (o, row)) in out.iter_mut().zip(&self.lower).enumerate() {
            *o = row[..=i].iter().zip(z).map(|(l, z)| l * z).sum();
        }
        out
    }

    /// Reconstructs `L·Lᵀ`.
    pub fn covariance(&self) -> [[f32; N]; N] {
        let mut out = [[0.0f32; N]; N];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                let k_max = i.min(j);
                *v = (0..=k_max).map(|k| self.lower[i][k] * self.lower[j][k]).sum();
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_decompose_known_matrix() {
        let factor = CholeskyFactor::decompose(&[[8.0, 2.0], [2.0, 1.0]]).unwrap();
        let l = factor.lower();
        assert_relative_eq!(l[0][0], 8.0f32.sqrt(), epsilon = 1e-6);
        assert_relative_eq!(l[1][0], 2.0 / 8.0f32.sqrt(), epsilon = 1e-6);
        assert_relative_eq!(l[1][1], 0.5f32.sqrt(), epsilon = 1e-6);
        assert_eq!(l[0][1], 0.0);
    }

    #[test]
    fn test_round_trip_3x3() {
        let sigma = [[4.0, 1.2, -0.8], [1.2, 2.0, 0.3], [-0.8, 0.3, 1.5]];
        let factor = CholeskyFactor::decompose(&sigma).unwrap();
        let back = factor.covariance();
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(back[i][j], sigma[i][j], epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_rejects_indefinite_matrix() {
        let err = CholeskyFactor::decompose(&[[1.0, 2.0], [2.0, 1.0]]).unwrap_err();
        match err {
            SamplingError::NotPositiveDefinite { pivot, value } => {
                assert_eq!(pivot, 1);
                assert_relative_eq!(value, -3.0, epsilon = 1e-12);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_rejects_nan_entry() {
        assert!(CholeskyFactor::decompose(&[[f32::NAN]]).is_err());
        assert!(CholeskyFactor::decompose(&[[0.0]]).is_err());
    }

    #[test]
    fn test_from_lower_zeroes_upper_triangle() {
        let factor = CholeskyFactor::from_lower([[1.0, 9.0], [2.0, 3.0]]);
        assert_eq!(factor.lower(), &[[1.0, 0.0], [2.0, 3.0]]);
        assert_eq!(factor.transform(&[1.0, 2.0]), [1.0, 8.0]);
    }

    #[test]
    fn test_identity_transform_is_noop() {
        let z = [0.5, -1.5, 2.0, 3.0];
        assert_eq!(CholeskyFactor::<4>::identity().transform(&z), z);
    }
}
