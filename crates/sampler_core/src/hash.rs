//! Integer hash functions.
//!
//! All formulas are fixed bit-manipulation sequences reproduced bit-for-bit
//! with wrapping 32/64-bit arithmetic. Their value lies in the measured
//! avalanche quality (see [`avalanche_score`]), so none of them may be
//! "simplified".
//!
//! | Hash | Avalanche (1024 samples) |
//! |------|--------------------------|
//! | [`MultiplicativeHash`] | ~0.25 |
//! | [`WangHash`] | ~0.96 |
//! | [`JenkinsHash`] | ~0.94 |
//! | [`MurmurHash`] | ~0.97 |
//! | [`ProspectorHash`] | ~0.97 |
//! | [`ProspectorTripleHash`] | ~0.97 |
//! | [`SplitMixHash`] | ~0.97 |
//!
//! None of these hashes is cryptographically secure.

use crate::traits::HashFunction;

/// Knuth's multiplicative hash: `x * 2654435761 mod 2^32`.
///
/// Very fast, but low input bits never reach low output bits.
#[inline]
pub fn multiplicative_hash(x: u32) -> u32 {
    x.wrapping_mul(2_654_435_761)
}

/// Thomas Wang's 32-bit integer hash.
#[inline]
pub fn wang_hash(mut x: u32) -> u32 {
    x = (x ^ 61) ^ (x >> 16);
    x = x.wrapping_mul(9);
    x ^= x >> 4;
    x = x.wrapping_mul(0x27d4_eb2d);
    x ^= x >> 15;
    x
}

/// Robert Jenkins' 32-bit integer hash (six add/xor-shift rounds).
#[inline]
pub fn jenkins_hash(mut a: u32) -> u32 {
    a = a.wrapping_add(0x7ed5_5d16).wrapping_add(a << 12);
    a = (a ^ 0xc761_c23c) ^ (a >> 19);
    a = a.wrapping_add(0x1656_67b1).wrapping_add(a << 5);
    a = a.wrapping_add(0xd3a2_646c) ^ (a << 9);
    a = a.wrapping_add(0xfd70_46c5).wrapping_add(a << 3);
    a = (a ^ 0xb55a_4f09) ^ (a >> 16);
    a
}

/// MurmurHash3 `fmix32` finaliser.
#[inline]
pub fn murmur_fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// Two-round hash found by hash-prospector (`lowbias32`).
#[inline]
pub fn prospector_hash(mut x: u32) -> u32 {
    x ^= x >> 16;
    x = x.wrapping_mul(0x7feb_352d);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846c_a68b);
    x ^= x >> 16;
    x
}

/// Three-round hash found by hash-prospector (`triple32`).
#[inline]
pub fn prospector_triple_hash(mut x: u32) -> u32 {
    x ^= x >> 17;
    x = x.wrapping_mul(0xed5a_d4bb);
    x ^= x >> 11;
    x = x.wrapping_mul(0xac4c_1b51);
    x ^= x >> 15;
    x = x.wrapping_mul(0x3184_8bab);
    x ^= x >> 14;
    x
}

/// The `splitmix64` output function applied to a single 64-bit value.
#[inline]
pub fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

macro_rules! hash_type {
    ($(#[$doc:meta])* $name:ident => $func:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl HashFunction for $name {
            #[inline]
            fn map(&self, x: u32) -> u32 {
                $func(x)
            }
        }
    };
}

hash_type!(
    /// [`HashFunction`] wrapper around [`multiplicative_hash`].
    MultiplicativeHash => multiplicative_hash
);
hash_type!(
    /// [`HashFunction`] wrapper around [`wang_hash`].
    WangHash => wang_hash
);
hash_type!(
    /// [`HashFunction`] wrapper around [`jenkins_hash`].
    JenkinsHash => jenkins_hash
);
hash_type!(
    /// [`HashFunction`] wrapper around [`murmur_fmix32`].
    MurmurHash => murmur_fmix32
);
hash_type!(
    /// [`HashFunction`] wrapper around [`prospector_hash`].
    ProspectorHash => prospector_hash
);
hash_type!(
    /// [`HashFunction`] wrapper around [`prospector_triple_hash`].
    ProspectorTripleHash => prospector_triple_hash
);
hash_type!(
    /// [`HashFunction`] using the high word of [`splitmix64`] over the widened input.
    SplitMixHash => |x: u32| (splitmix64(u64::from(x)) >> 32) as u32
);

/// Measures how well `hash` spreads single-bit input changes.
///
/// For every pair of input bit `i` and output bit `j`, the probability `p`
/// that flipping `i` flips `j` is estimated over `samples`. Each pair scores
/// `1 - |2p - 1|`; the result is the mean over all 1024 pairs.
///
/// A perfect hash approaches 1.0 as the sample count grows. A hash in which
/// some input bit never reaches some output bit (or always flips it) loses
/// that pair's contribution entirely.
///
/// Returns 0.0 for an empty sample set.
///
/// # Examples
///
/// ```rust
/// use sampler_core::hash::{avalanche_score, MultiplicativeHash, MurmurHash};
///
/// let samples: Vec<u32> = (0..256u32).map(|i| i.wrapping_mul(0x9E37_79B9)).collect();
/// assert!(avalanche_score(&MurmurHash, &samples) > avalanche_score(&MultiplicativeHash, &samples));
/// ```
pub fn avalanche_score<H: HashFunction + ?Sized>(hash: &H, samples: &[u32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let mut flips = [[0u32; 32]; 32];
    for &sample in samples {
        let base = hash.map(sample);
        for (i, row) in flips.iter_mut().enumerate() {
            let diff = base ^ hash.map(sample ^ (1 << i));
            for (j, count) in row.iter_mut().enumerate() {
                *count += (diff >> j) & 1;
            }
        }
    }

    let n = samples.len() as f64;
    let total: f64 = flips
        .iter()
        .flatten()
        .map(|&count| {
            let p = f64::from(count) / n;
            1.0 - (2.0 * p - 1.0).abs()
        })
        .sum();
    total / 1024.0
}
