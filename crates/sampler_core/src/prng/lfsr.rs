//! L'Ecuyer's combined LFSR113 generator.

use crate::hash::wang_hash;
use crate::traits::Generator;

/// Lowest admissible value of each component register.
const MINIMUMS: [u32; 4] = [2, 8, 16, 128];

/// Combined Tausworthe generator with four component LFSRs.
///
/// Period approximately `2^113`. Each register must stay at or above its
/// minimum (2, 8, 16 and 128); seeds below that are reseeded by adding the
/// minimum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lfsr113Rng {
    z: [u32; 4],
}

impl Lfsr113Rng {
    /// Creates a generator whose registers are `wang_hash(seed + i)`.
    pub fn new(seed: u32) -> Self {
        let mut z = [0u32; 4];
        for (i, register) in z.iter_mut().enumerate() {
            *register = wang_hash(seed.wrapping_add(i as u32));
        }
        Self::from_registers(z)
    }

    /// Creates a generator from raw register values, reseeding any register
    /// below its minimum.
    pub fn from_registers(mut z: [u32; 4]) -> Self {
        for (register, &minimum) in z.iter_mut().zip(MINIMUMS.iter()) {
            if *register < minimum {
                tracing::trace!(register = *register, minimum, "lfsr113: register reseeded");
                *register += minimum;
            }
        }
        Self { z }
    }

    /// Returns the four component registers.
    #[inline]
    pub fn registers(&self) -> [u32; 4] {
        self.z
    }
}

impl Generator for Lfsr113Rng {
    #[inline]
    fn produce(&mut self) -> u32 {
        let [z1, z2, z3, z4] = &mut self.z;

        let b = ((*z1 << 6) ^ *z1) >> 13;
        *z1 = ((*z1 & 0xffff_fffe) << 18) ^ b;
        let b = ((*z2 << 2) ^ *z2) >> 27;
        *z2 = ((*z2 & 0xffff_fff8) << 2) ^ b;
        let b = ((*z3 << 13) ^ *z3) >> 21;
        *z3 = ((*z3 & 0xffff_fff0) << 7) ^ b;
        let b = ((*z4 << 3) ^ *z4) >> 12;
        *z4 = ((*z4 & 0xffff_ff80) << 13) ^ b;

        *z1 ^ *z2 ^ *z3 ^ *z4
    }
}
