//! # sampler_noise: Coherent Noise over Hashed Lattices
//!
//! ## Layer 3 Role
//!
//! sampler_noise builds N-dimensional procedural fields on top of the hash
//! contract of [`sampler_core`] and the direction samplers of
//! [`sampler_distributions`]:
//! - Interpolation kernels, generic over `num_traits::Float` (`interpolation`)
//! - The implicit periodic lattice and its corner hashing (`lattice`)
//! - Value noise in `[0, 1]` (`value`)
//! - Gradient noise with analytic derivatives (`gradient`)
//! - Fractal turbulence: standard, billowy and ridged (`turbulence`)
//! - Validated runtime configuration (`config`)
//!
//! ## Module Structure
//!
//! Fields are generic over the dimension `N` through `[f32; N]` points and
//! `[u32; N]` frequencies. Frequencies count lattice cells per axis, so every
//! field is periodic with period one along each axis. Evaluation never
//! allocates and never fails; [`config::NoiseConfig`] adds checked
//! construction for settings known only at runtime.
//!
//! ## Usage Examples
//!
//! ```rust
//! use sampler_core::hash::WangHash;
//! use sampler_noise::gradient::gradient_noise;
//! use sampler_noise::interpolation::Interpolation;
//! use sampler_noise::value::value_noise;
//!
//! let v = value_noise(&WangHash, [0.25, 0.4], [8, 8], Interpolation::Smoothstep, 0);
//! assert!((0.0..=1.0).contains(&v));
//!
//! let g = gradient_noise(&WangHash, [0.25, 0.4, 0.9], [8, 8, 8], Interpolation::Smootherstep, 0);
//! assert!(g.abs() <= 3.0f32.sqrt() / 2.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`config::NoiseConfig`],
//!   [`turbulence::TurbulenceConfig`] and [`interpolation::Interpolation`]

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod gradient;
pub mod interpolation;
pub mod lattice;
pub mod turbulence;
pub mod value;

pub use config::NoiseConfig;
pub use error::NoiseError;
pub use interpolation::Interpolation;
pub use turbulence::{TurbulenceConfig, TurbulenceKind};
