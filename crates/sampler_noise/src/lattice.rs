//! The implicit periodic integer lattice underneath every noise field.
//!
//! A sample point `x ∈ [0, 1)^N` is scaled by an integer frequency per axis,
//! so each axis holds `frequency` cells and the field repeats with period one.
//! Corner coordinates wrap modulo the frequency before hashing:
//!
//! ```text
//! h = seed
//! for each axis a: h = hash(h ^ wrap(coord[a]))
//! ```
//!
//! The lattice is never materialised; a corner's value exists only as its
//! hash.

use sampler_core::HashFunction;

const INV_2_24: f32 = 1.0 / 16_777_216.0;

/// Splits `x · frequency` into its integer cell and the fraction inside it.
#[inline]
pub fn locate(x: f32, frequency: u32) -> (i64, f32) {
    let p = x * frequency as f32;
    let cell = p.floor();
    (cell as i64, p - cell)
}

/// Wraps a lattice coordinate into `[0, frequency)`.
#[inline]
pub fn wrap(coord: i64, frequency: u32) -> u32 {
    coord.rem_euclid(i64::from(frequency.max(1))) as u32
}

/// Hash of the corner with wrapped coordinates `coords`.
#[inline]
pub fn corner_hash<H: HashFunction + ?Sized>(hash: &H, coords: &[u32], seed: u32) -> u32 {
    coords.iter().fold(seed, |h, &c| hash.map(h ^ c))
}

/// Maps a corner hash to `[0, 1)` from its top 24 bits.
#[inline]
pub fn hash_to_unit(h: u32) -> f32 {
    (h >> 8) as f32 * INV_2_24
}

/// The cell containing a sample point, with the per-axis fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Footprint<const N: usize> {
    pub cells: [i64; N],
    pub fractions: [f32; N],
    pub frequency: [u32; N],
}

impl<const N: usize> Footprint<N> {
    #[inline]
    pub fn new(x: [f32; N], frequency: [u32; N]) -> Self {
        debug_assert!(
            frequency.iter().all(|&f| f > 0),
            "frequency must be positive on every axis"
        );
        let located: [(i64, f32); N] = std::array::from_fn(|a| locate(x[a], frequency[a]));
        Self {
            cells: located.map(|(cell, _)| cell),
            fractions: located.map(|(_, t)| t),
            frequency,
        }
    }

    /// Hash of the corner at `offsets` from the containing cell.
    #[inline]
    pub fn corner_hash<H: HashFunction + ?Sized>(
        &self,
        hash: &H,
        offsets: &[i64; N],
        seed: u32,
    ) -> u32 {
        let coords: [u32; N] =
            std::array::from_fn(|a| wrap(self.cells[a] + offsets[a], self.frequency[a]));
        corner_hash(hash, &coords, seed)
    }
}

/// Decomposes `combo` into `N` base-`taps` digits, least significant axis
/// first.
#[inline]
pub(crate) fn tap_indices<const N: usize>(mut combo: usize, taps: usize) -> [usize; N] {
    std::array::from_fn(|_| {
        let digit = combo % taps;
        combo /= taps;
        digit
    })
}
