//! # sampler_distributions: Samplers over the Generator Contract
//!
//! ## Layer 2 Role
//!
//! sampler_distributions turns the raw 32-bit stream of any
//! [`sampler_core::Generator`] into useful random quantities:
//! - Uniform floats and integer ranges (`uniform`)
//! - Gaussian (scalar and multivariate) and exponential variates (`continuous`)
//! - A small lower-triangular Cholesky factor for multivariate Gaussians (`linalg`)
//! - Importance-sampled directions with matching densities (`direction`)
//! - Tabulated 1D/2D densities sampled by CDF inversion (`discrete`)
//!
//! ## Draw Accounting
//!
//! Every sampler consumes a fixed number of draws: one per uniform,
//! two per Gaussian, two per direction. Quasi-random sequences therefore stay
//! aligned with their interleaved dimensions.
//!
//! ## Usage Examples
//!
//! ```rust
//! use sampler_core::prng::Xorshift32;
//! use sampler_distributions::direction::dir_cosine_with_pdf;
//! use sampler_distributions::discrete::DiscreteFunction1D;
//! use sampler_distributions::uniform::uniform;
//!
//! let mut rng = Xorshift32::new(801_638_479);
//! let u = uniform(&mut rng);
//! assert!((0.0..=1.0).contains(&u));
//!
//! let (dir, pdf) = dir_cosine_with_pdf(&mut rng);
//! assert!(dir.z >= 0.0 && pdf >= 0.0);
//!
//! let table = DiscreteFunction1D::new(vec![1.0, 3.0]).expect("positive weights");
//! assert!(table.sample_discrete(&mut rng) < 2);
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod continuous;
pub mod direction;
pub mod discrete;
pub mod error;
pub mod linalg;
pub mod uniform;

pub use error::SamplingError;
pub use linalg::CholeskyFactor;
