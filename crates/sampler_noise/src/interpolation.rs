//! Interpolation kernels for lattice noise.
//!
//! Each kernel maps the fractional position `t ∈ [0, 1]` inside a lattice
//! cell to per-tap blend weights. Two-tap kernels blend the corners at
//! offsets `0` and `1` with weights `(1 - s(t), s(t))`:
//!
//! | Kernel | `s(t)` | Continuity |
//! |--------|--------|------------|
//! | `Point` | `0` below `t = 1/2`, `1` from it | none |
//! | `Linear` | `t` | C0 |
//! | `Smoothstep` | `3t² - 2t³` | C1 |
//! | `Smootherstep` | `6t⁵ - 15t⁴ + 10t³` | C2 |
//!
//! `Cubic` is the uniform cubic B-spline over the four corners at offsets
//! `-1, 0, 1, 2`. Its weights are non-negative and sum to one, so blended
//! values stay inside the range of the corner values.
//!
//! All kernels are generic over `T: num_traits::Float`.

use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Converts an `f64` literal into `T`.
#[inline]
fn lit<T: Float>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}

/// Blend kernel used between lattice corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Interpolation {
    /// Nearest lattice corner, no blending.
    Point,
    /// Linear blend.
    Linear,
    /// Cubic Hermite blend `3t² - 2t³`.
    Smoothstep,
    /// Quintic blend `6t⁵ - 15t⁴ + 10t³`.
    #[default]
    Smootherstep,
    /// Four-tap uniform cubic B-spline (value noise only).
    Cubic,
}

impl Interpolation {
    /// Every kernel, in declaration order.
    pub const ALL: [Interpolation; 5] = [
        Self::Point,
        Self::Linear,
        Self::Smoothstep,
        Self::Smootherstep,
        Self::Cubic,
    ];

    /// Number of corners blended along one axis.
    #[inline]
    pub fn taps(self) -> usize {
        match self {
            Self::Cubic => 4,
            _ => 2,
        }
    }

    /// Lattice offset of the first tap relative to the containing cell.
    #[inline]
    pub fn first_offset(self) -> i64 {
        match self {
            Self::Cubic => -1,
            _ => 0,
        }
    }

    /// True if the kernel only blends the two corners of the cell, which
    /// gradient noise requires.
    #[inline]
    pub fn is_two_tap(self) -> bool {
        self.taps() == 2
    }

    /// Blend factor `s(t)` of a two-tap kernel.
    ///
    /// `Cubic` has no two-tap form and evaluates as `Smootherstep`.
    #[inline]
    pub fn blend<T: Float>(self, t: T) -> T {
        match self {
            Self::Point => {
                if t < lit(0.5) {
                    T::zero()
                } else {
                    T::one()
                }
            }
            Self::Linear => t,
            Self::Smoothstep => t * t * (lit::<T>(3.0) - lit::<T>(2.0) * t),
            Self::Smootherstep | Self::Cubic => {
                t * t * t * (t * (t * lit(6.0) - lit(15.0)) + lit(10.0))
            }
        }
    }

    /// Derivative `s'(t)` of [`blend`](Self::blend).
    #[inline]
    pub fn blend_derivative<T: Float>(self, t: T) -> T {
        match self {
            Self::Point => T::zero(),
            Self::Linear => T::one(),
            Self::Smoothstep => lit::<T>(6.0) * t * (T::one() - t),
            Self::Smootherstep | Self::Cubic => {
                let w = t * (T::one() - t);
                lit::<T>(30.0) * w * w
            }
        }
    }

    /// Per-tap weights at `t`; entries past [`taps`](Self::taps) are zero.
    #[inline]
    pub fn weights<T: Float>(self, t: T) -> [T; 4] {
        match self {
            Self::Cubic => cubic_bspline_weights(t),
            _ => {
                let s = self.blend(t);
                [T::one() - s, s, T::zero(), T::zero()]
            }
        }
    }

    /// Derivatives of [`weights`](Self::weights) with respect to `t`.
    #[inline]
    pub fn weight_derivatives<T: Float>(self, t: T) -> [T; 4] {
        match self {
            Self::Cubic => cubic_bspline_derivatives(t),
            _ => {
                let ds = self.blend_derivative(t);
                [-ds, ds, T::zero(), T::zero()]
            }
        }
    }
}

/// Uniform cubic B-spline weights for the corners at offsets `-1, 0, 1, 2`.
#[inline]
pub fn cubic_bspline_weights<T: Float>(t: T) -> [T; 4] {
    let sixth = lit::<T>(1.0 / 6.0);
    let one = T::one();
    let three = lit::<T>(3.0);
    let t2 = t * t;
    let t3 = t2 * t;
    let u = one - t;
    [
        u * u * u * sixth,
        (three * t3 - lit::<T>(6.0) * t2 + lit(4.0)) * sixth,
        (-three * t3 + three * t2 + three * t + one) * sixth,
        t3 * sixth,
    ]
}

/// Derivatives of [`cubic_bspline_weights`].
#[inline]
pub fn cubic_bspline_derivatives<T: Float>(t: T) -> [T; 4] {
    let half = lit::<T>(0.5);
    let three = lit::<T>(3.0);
    let two = lit::<T>(2.0);
    let u = T::one() - t;
    [
        -u * u * half,
        (three * t * t - lit::<T>(4.0) * t) * half,
        (-three * t * t + two * t + T::one()) * half,
        t * t * half,
    ]
}
