//! Configuration-driven generator selection.
//!
//! [`GeneratorConfig`] names an engine together with its construction
//! parameters. It can be validated without panicking and, with the `serde`
//! feature, loaded from any serde format. [`AnyGenerator`] is the built
//! engine; it dispatches statically through a `match`, never through a
//! trait object.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::prng::{CellularRng, Lfsr113Rng, MwcRng, Well512Rng, Xorshift32};
use crate::qmc::hammersley::MAX_HAMMERSLEY_BASES;
use crate::qmc::{
    AdditiveRecurrenceRng, HaltonRng, HaltonReversedRng, HammersleyRng, MAX_HALTON_BASES,
};
use crate::seed::generate_seed;
use crate::traits::Generator;

/// Engine choice plus construction parameters.
///
/// # Examples
///
/// ```rust
/// use sampler_core::config::GeneratorConfig;
/// use sampler_core::Generator;
///
/// let config = GeneratorConfig::Halton { num_bases: 2 };
/// let mut rng = config.build().expect("valid configuration");
/// assert_eq!(rng.produce(), 0x8000_0000);
///
/// let invalid = GeneratorConfig::Hammersley { num_bases: 2, num_samples: 0 };
/// assert!(invalid.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum GeneratorConfig {
    /// [`Xorshift32`] seeded with `seed`.
    Xorshift {
        /// Initial seed
        seed: u32,
    },
    /// [`CellularRng`] seeded with `seed`.
    Cellular {
        /// Initial seed
        seed: u32,
    },
    /// [`MwcRng`] seeded with `seed`.
    Mwc {
        /// Initial seed
        seed: u32,
    },
    /// [`Lfsr113Rng`] seeded with `seed`.
    Lfsr113 {
        /// Initial seed
        seed: u32,
    },
    /// [`Well512Rng`] seeded with `seed`.
    Well512 {
        /// Initial seed
        seed: u32,
    },
    /// [`HaltonRng`] with `num_bases` dimensions.
    Halton {
        /// Number of interleaved dimensions
        num_bases: usize,
    },
    /// [`HaltonReversedRng`] with `num_bases` dimensions.
    HaltonReversed {
        /// Number of interleaved dimensions
        num_bases: usize,
    },
    /// [`HammersleyRng`] with `num_bases` dimensions and `num_samples` points.
    Hammersley {
        /// Number of interleaved dimensions
        num_bases: usize,
        /// Size of the point set
        num_samples: u64,
    },
    /// [`AdditiveRecurrenceRng`] with `num_bases` dimensions.
    AdditiveRecurrence {
        /// Number of interleaved dimensions
        num_bases: usize,
    },
}

impl Default for GeneratorConfig {
    /// A xorshift generator with a fixed seed.
    fn default() -> Self {
        Self::Xorshift { seed: 801_638_479 }
    }
}

impl GeneratorConfig {
    /// A xorshift configuration seeded from [`generate_seed`].
    pub fn xorshift_from_entropy() -> Self {
        Self::Xorshift {
            seed: generate_seed(),
        }
    }

    /// Returns the engine's short name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Xorshift { .. } => "xorshift",
            Self::Cellular { .. } => "cellular",
            Self::Mwc { .. } => "mwc",
            Self::Lfsr113 { .. } => "lfsr113",
            Self::Well512 { .. } => "well512",
            Self::Halton { .. } => "halton",
            Self::HaltonReversed { .. } => "halton_reversed",
            Self::Hammersley { .. } => "hammersley",
            Self::AdditiveRecurrence { .. } => "additive_recurrence",
        }
    }

    /// Checks the construction parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let check_bases = |num_bases: usize, max: usize| {
            if (1..=max).contains(&num_bases) {
                Ok(())
            } else {
                Err(ConfigError::InvalidBaseCount {
                    generator: self.name(),
                    got: num_bases,
                    max,
                })
            }
        };

        match *self {
            Self::Xorshift { .. }
            | Self::Cellular { .. }
            | Self::Mwc { .. }
            | Self::Lfsr113 { .. }
            | Self::Well512 { .. } => Ok(()),
            Self::Halton { num_bases }
            | Self::HaltonReversed { num_bases }
            | Self::AdditiveRecurrence { num_bases } => check_bases(num_bases, MAX_HALTON_BASES),
            Self::Hammersley {
                num_bases,
                num_samples,
            } => {
                check_bases(num_bases, MAX_HAMMERSLEY_BASES)?;
                if num_samples == 0 {
                    return Err(ConfigError::InvalidSampleCount { got: num_samples });
                }
                Ok(())
            }
        }
    }

    /// Validates the configuration and builds the engine.
    pub fn build(&self) -> Result<AnyGenerator, ConfigError> {
        self.validate()?;
        tracing::debug!(generator = self.name(), "building generator");

        Ok(match *self {
            Self::Xorshift { seed } => AnyGenerator::Xorshift(Xorshift32::new(seed)),
            Self::Cellular { seed } => AnyGenerator::Cellular(CellularRng::new(seed)),
            Self::Mwc { seed } => AnyGenerator::Mwc(MwcRng::new(seed)),
            Self::Lfsr113 { seed } => AnyGenerator::Lfsr113(Lfsr113Rng::new(seed)),
            Self::Well512 { seed } => AnyGenerator::Well512(Well512Rng::new(seed)),
            Self::Halton { num_bases } => AnyGenerator::Halton(HaltonRng::new(num_bases)),
            Self::HaltonReversed { num_bases } => {
                AnyGenerator::HaltonReversed(HaltonReversedRng::new(num_bases))
            }
            Self::Hammersley {
                num_bases,
                num_samples,
            } => AnyGenerator::Hammersley(HammersleyRng::new(num_bases, num_samples)),
            Self::AdditiveRecurrence { num_bases } => {
                AnyGenerator::AdditiveRecurrence(AdditiveRecurrenceRng::new(num_bases))
            }
        })
    }
}

/// Any engine of this crate, chosen at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyGenerator {
    /// See [`Xorshift32`].
    Xorshift(Xorshift32),
    /// See [`CellularRng`].
    Cellular(CellularRng),
    /// See [`MwcRng`].
    Mwc(MwcRng),
    /// See [`Lfsr113Rng`].
    Lfsr113(Lfsr113Rng),
    /// See [`Well512Rng`].
    Well512(Well512Rng),
    /// See [`HaltonRng`].
    Halton(HaltonRng),
    /// See [`HaltonReversedRng`].
    HaltonReversed(HaltonReversedRng),
    /// See [`HammersleyRng`].
    Hammersley(HammersleyRng),
    /// See [`AdditiveRecurrenceRng`].
    AdditiveRecurrence(AdditiveRecurrenceRng),
}

impl AnyGenerator {
    /// Returns true for the counter-based low-discrepancy sequences.
    pub fn is_quasi_random(&self) -> bool {
        matches!(
            self,
            Self::Halton(_)
                | Self::HaltonReversed(_)
                | Self::Hammersley(_)
                | Self::AdditiveRecurrence(_)
        )
    }
}

impl Generator for AnyGenerator {
    #[inline]
    fn produce(&mut self) -> u32 {
        match self {
            Self::Xorshift(g) => g.produce(),
            Self::Cellular(g) => g.produce(),
            Self::Mwc(g) => g.produce(),
            Self::Lfsr113(g) => g.produce(),
            Self::Well512(g) => g.produce(),
            Self::Halton(g) => g.produce(),
            Self::HaltonReversed(g) => g.produce(),
            Self::Hammersley(g) => g.produce(),
            Self::AdditiveRecurrence(g) => g.produce(),
        }
    }
}
