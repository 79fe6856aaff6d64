//! Non-deterministic seed construction.
//!
//! [`generate_seed`] is the only non-deterministic entry point of the
//! workspace. Everything else is a pure function of an explicit seed.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use crate::hash::{murmur_fmix32, splitmix64};

/// Returned instead of zero, which several engines treat as degenerate.
const NON_ZERO_FALLBACK: u32 = 0x6d2b_79f5;

/// Builds a fresh seed from ambient entropy.
///
/// Mixes the wall-clock time, a monotonic clock sample, a hash of the current
/// thread identity and the address of a freshly allocated (and immediately
/// freed) heap block. The combination is finalised through [`splitmix64`] and
/// [`murmur_fmix32`]. The result is never zero.
///
/// This is not a source of cryptographic randomness.
///
/// # Examples
///
/// ```rust
/// use sampler_core::seed::generate_seed;
///
/// let seed = generate_seed();
/// assert_ne!(seed, 0);
/// ```
pub fn generate_seed() -> u32 {
    let wall_nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let mut hasher = DefaultHasher::new();
    Instant::now().hash(&mut hasher);
    let monotonic = hasher.finish();

    let mut hasher = DefaultHasher::new();
    std::thread::current().id().hash(&mut hasher);
    let thread = hasher.finish();

    let heap = {
        let probe = Box::new(0u8);
        &*probe as *const u8 as usize as u64
    };

    let mut state = splitmix64(wall_nanos);
    state = splitmix64(state ^ monotonic);
    state = splitmix64(state ^ thread);
    state = splitmix64(state ^ heap);

    let seed = murmur_fmix32((state as u32) ^ ((state >> 32) as u32));
    tracing::trace!(seed, "generated entropy seed");

    if seed == 0 {
        NON_ZERO_FALLBACK
    } else {
        seed
    }
}
