//! # sampler_core: Generator Foundation for the Sampling Workspace
//!
//! ## Layer 1 (Foundation) Role
//!
//! sampler_core is the bottom layer of the 3-layer architecture, providing:
//! - The generator contract [`Generator`] and the hash contract [`HashFunction`] (`traits`)
//! - Integer hash functions with measured avalanche quality (`hash`)
//! - A non-deterministic seed constructor (`seed`)
//! - Stateful pseudo-random engines (`prng`)
//! - Counter-based quasi-random sequences (`qmc`)
//! - Configuration-driven engine selection (`config`)
//! - Interoperability with the `rand` ecosystem (`rand_compat`)
//!
//! ## Static Dispatch
//!
//! Every sampler in the upper layers is generic over [`Generator`] or
//! [`HashFunction`]. No `Box<dyn Trait>` appears in hot paths; where an engine
//! has to be chosen at runtime, [`config::AnyGenerator`] dispatches through a
//! `match`.
//!
//! ## Ownership
//!
//! A generator is mutated only by its single owner. There is no internal
//! synchronisation: concurrent use requires one instance per thread.
//!
//! ## Usage Examples
//!
//! ```rust
//! use sampler_core::prng::Xorshift32;
//! use sampler_core::hash::WangHash;
//! use sampler_core::{Generator, HashFunction};
//!
//! let mut rng = Xorshift32::new(801_638_479);
//! let a = rng.produce();
//! let b = rng.produce();
//! assert_ne!(a, b);
//!
//! // Hashes are pure: the same input always yields the same output
//! let hash = WangHash;
//! assert_eq!(hash.map(42), hash.map(42));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`config::GeneratorConfig`]

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod hash;
pub mod prng;
pub mod qmc;
pub mod rand_compat;
pub mod seed;
pub mod traits;

pub use error::ConfigError;
pub use traits::{Generator, HashFunction, HashSequence};
