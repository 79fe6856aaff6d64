//! # Pseudo-Random Engines
//!
//! Stateful sequence generators. Every engine implements [`Generator`] and is
//! created from an explicit 32-bit seed; the same seed always reproduces the
//! same stream bit-for-bit.
//!
//! ## Module Structure
//!
//! - [`xorshift`]: Marsaglia xorshift32 (4 bytes of state)
//! - [`cellular`]: rule-30 cellular automaton over a 128-bit ring (16 bytes)
//! - [`mwc`]: lag-4 multiply-with-carry (20 bytes)
//! - [`lfsr`]: L'Ecuyer's combined LFSR113 (16 bytes)
//! - [`well`]: WELL512a (68 bytes)
//!
//! ## Degenerate States
//!
//! States from which an engine can never leave (e.g. all-zero shift
//! registers) are repaired in place with a fixed, engine-specific
//! substitution. They are never reported as errors.
//!
//! [`Generator`]: crate::Generator

pub mod cellular;
pub mod lfsr;
pub mod mwc;
pub mod well;
pub mod xorshift;

pub use cellular::CellularRng;
pub use lfsr::Lfsr113Rng;
pub use mwc::MwcRng;
pub use well::Well512Rng;
pub use xorshift::Xorshift32;
