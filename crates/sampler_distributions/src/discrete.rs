//! Tabulated densities sampled by CDF inversion.
//!
//! [`DiscreteFunction1D`] takes ownership of a weight table and turns it into
//! a running prefix sum. Sampling draws `u·total` and binary-searches the
//! prefix sums in `O(log n)`. [`DiscreteFunction2D`] stacks one conditional
//! table per row under a marginal table over the row integrals.
//!
//! Both types are immutable after construction, so they are `Send + Sync`
//! and can be shared read-only between threads.
//!
//! ## Search convention
//!
//! A draw selects the first bucket whose prefix sum is strictly greater than
//! the draw. Zero-weight buckets therefore have zero width and are never
//! selected.

use sampler_core::Generator;

use crate::error::SamplingError;
use crate::uniform::uniform_ex;

/// Piecewise-constant density over `[0, 1)` built from tabulated weights.
///
/// # Examples
///
/// ```rust
/// use sampler_core::prng::Xorshift32;
/// use sampler_distributions::discrete::DiscreteFunction1D;
///
/// let f = DiscreteFunction1D::new(vec![0.0, 2.0, 6.0]).unwrap();
/// assert_eq!(f.total(), 8.0);
/// assert_eq!(f.integral(), 8.0 / 3.0);
///
/// let mut rng = Xorshift32::new(1);
/// let (x, pdf) = f.sample_with_pdf(&mut rng);
/// assert!(x >= 1.0 / 3.0);
/// assert!(pdf == 0.75 || pdf == 2.25);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteFunction1D {
    prefix: Vec<f32>,
}

impl DiscreteFunction1D {
    /// Consumes `weights` and builds the prefix-sum table.
    ///
    /// # Errors
    /// - [`SamplingError::EmptyWeights`] for an empty table
    /// - [`SamplingError::InvalidWeight`] for a negative or non-finite weight
    /// - [`SamplingError::TotalOverflow`] when the running sum leaves `f32`
    /// - [`SamplingError::ZeroTotal`] when no weight is strictly positive
    pub fn new(weights: Vec<f32>) -> Result<Self, SamplingError> {
        let function = Self::build(weights)?;
        if function.total() <= 0.0 {
            return Err(SamplingError::ZeroTotal);
        }
        tracing::debug!(
            buckets = function.len(),
            total = function.total(),
            "discrete function built"
        );
        Ok(function)
    }

    /// Validates and prefix-sums in place; accepts an all-zero table.
    fn build(mut weights: Vec<f32>) -> Result<Self, SamplingError> {
        if weights.is_empty() {
            return Err(SamplingError::EmptyWeights);
        }

        let mut running = 0.0f32;
        for (index, w) in weights.iter_mut().enumerate() {
            if !w.is_finite() || *w < 0.0 {
                return Err(SamplingError::InvalidWeight { index, value: *w });
            }
            running += *w;
            if !running.is_finite() {
                return Err(SamplingError::TotalOverflow { index });
            }
            *w = running;
        }

        Ok(Self { prefix: weights })
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.prefix.len()
    }

    /// Always false; construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }

    /// Sum of all weights.
    pub fn total(&self) -> f32 {
        self.prefix.last().copied().unwrap_or(0.0)
    }

    /// Integral of the tabulated function over `[0, 1)`: `total / len`.
    pub fn integral(&self) -> f32 {
        self.total() / self.len() as f32
    }

    /// The prefix-sum table; the last entry equals [`total`](Self::total).
    pub fn prefix_sums(&self) -> &[f32] {
        &self.prefix
    }

    fn bucket_bounds(&self, index: usize) -> (f32, f32) {
        let lower = if index == 0 { 0.0 } else { self.prefix[index - 1] };
        (lower, self.prefix[index])
    }

    /// Bucket covering position `x ∈ [0, 1)`.
    #[inline]
    fn bucket_of(&self, x: f32) -> usize {
        ((x * self.len() as f32) as usize).min(self.len() - 1)
    }

    /// Bucket holding `draw`, a value in `[0, total]`.
    fn find(&self, draw: f32) -> usize {
        let index = self.prefix.partition_point(|&c| c <= draw);
        if index < self.prefix.len() {
            index
        } else {
            // `draw` rounded up to the total: take the last non-empty bucket
            let total = self.total();
            self.prefix.partition_point(|&c| c < total)
        }
    }

    /// Draws a bucket index; index `i` has probability `weight[i] / total`.
    pub fn sample_discrete<G: Generator + ?Sized>(&self, g: &mut G) -> usize {
        self.find(uniform_ex(g) * self.total())
    }

    /// Draws a continuous position in `[0, 1)`.
    pub fn sample<G: Generator + ?Sized>(&self, g: &mut G) -> f32 {
        self.sample_bucket(g).1
    }

    /// Draws a continuous position together with its density.
    pub fn sample_with_pdf<G: Generator + ?Sized>(&self, g: &mut G) -> (f32, f32) {
        let (_, x, pdf) = self.sample_bucket(g);
        (x, pdf)
    }

    /// Bucket index, continuous position and density from one draw.
    fn sample_bucket<G: Generator + ?Sized>(&self, g: &mut G) -> (usize, f32, f32) {
        let total = self.total();
        let draw = uniform_ex(g) * total;
        let index = self.find(draw);
        let (v0, v1) = self.bucket_bounds(index);
        let width = v1 - v0;

        let fraction = if width > 0.0 {
            ((draw - v0) / width).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let n = self.len() as f32;
        let mut x = ((index as f32 + fraction) / n).min(1.0 - f32::EPSILON / 2.0);
        // keep `x` inside the bucket it was drawn from after rounding
        while self.bucket_of(x) > index {
            x = f32::from_bits(x.to_bits() - 1);
        }
        while self.bucket_of(x) < index {
            x = f32::from_bits(x.to_bits() + 1);
        }
        (index, x, width * n / total)
    }

    /// Normalised cumulative distribution at `x`, the inverse of
    /// [`sample`](Self::sample).
    pub fn cdf(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let pos = x * self.len() as f32;
        let index = (pos as usize).min(self.len() - 1);
        let (v0, v1) = self.bucket_bounds(index);
        let fraction = pos - index as f32;
        (v0 + fraction * (v1 - v0)) / self.total()
    }

    /// Density at `x`; zero outside `[0, 1)`.
    pub fn pdf(&self, x: f32) -> f32 {
        let total = self.total();
        if !(0.0..1.0).contains(&x) || total <= 0.0 {
            return 0.0;
        }
        let (v0, v1) = self.bucket_bounds(self.bucket_of(x));
        (v1 - v0) * self.len() as f32 / total
    }
}

/// Piecewise-constant density over `[0, 1)²` built from tabulated rows.
///
/// Rows may differ in length: the marginal only sees each row's integral.
/// A row that sums to zero is allowed and simply never selected.
///
/// # Examples
///
/// ```rust
/// use sampler_core::prng::Xorshift32;
/// use sampler_distributions::discrete::DiscreteFunction2D;
///
/// let f = DiscreteFunction2D::new(vec![vec![1.0, 1.0], vec![4.0]]).unwrap();
/// assert_eq!(f.integral(), 2.5);
///
/// let mut rng = Xorshift32::new(5);
/// let ([x, y], pdf) = f.sample_with_pdf(&mut rng);
/// assert!((0.0..1.0).contains(&x) && (0.0..1.0).contains(&y));
/// assert_eq!(pdf, f.pdf([x, y]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteFunction2D {
    rows: Vec<DiscreteFunction1D>,
    marginal: DiscreteFunction1D,
}

impl DiscreteFunction2D {
    /// Consumes `rows` and builds the conditional and marginal tables.
    ///
    /// # Errors
    /// - [`SamplingError::EmptyWeights`] when there are no rows
    /// - [`SamplingError::InvalidRow`] when a row is empty or holds an invalid
    ///   weight
    /// - [`SamplingError::ZeroTotal`] when every row sums to zero
    pub fn new(rows: Vec<Vec<f32>>) -> Result<Self, SamplingError> {
        if rows.is_empty() {
            return Err(SamplingError::EmptyWeights);
        }

        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(row, weights)| {
                DiscreteFunction1D::build(weights).map_err(|source| SamplingError::InvalidRow {
                    row,
                    source: Box::new(source),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let marginal = DiscreteFunction1D::new(rows.iter().map(|r| r.integral()).collect())?;
        Ok(Self { rows, marginal })
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Conditional table of row `index`.
    pub fn row(&self, index: usize) -> Option<&DiscreteFunction1D> {
        self.rows.get(index)
    }

    /// Marginal table over row integrals.
    pub fn marginal(&self) -> &DiscreteFunction1D {
        &self.marginal
    }

    /// Integral over `[0, 1)²`: the mean of the row integrals.
    pub fn integral(&self) -> f32 {
        self.marginal.integral()
    }

    /// Draws `[x, y]`, where `y` selects the row.
    pub fn sample<G: Generator + ?Sized>(&self, g: &mut G) -> [f32; 2] {
        self.sample_with_pdf(g).0
    }

    /// Draws `[x, y]` together with the joint density `pdf_x · pdf_y`.
    pub fn sample_with_pdf<G: Generator + ?Sized>(&self, g: &mut G) -> ([f32; 2], f32) {
        let (row, y, pdf_y) = self.marginal.sample_bucket(g);
        let (_, x, pdf_x) = self.rows[row].sample_bucket(g);
        ([x, y], pdf_x * pdf_y)
    }

    /// Joint density at `[x, y]`; zero outside `[0, 1)²`.
    pub fn pdf(&self, point: [f32; 2]) -> f32 {
        let [x, y] = point;
        if !(0.0..1.0).contains(&y) {
            return 0.0;
        }
        let row = self.marginal.bucket_of(y);
        self.marginal.pdf(y) * self.rows[row].pdf(x)
    }
}
