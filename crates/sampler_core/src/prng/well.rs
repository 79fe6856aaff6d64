//! WELL512a generator.

use crate::hash::splitmix64;
use crate::traits::Generator;

const WORDS: usize = 16;
const MASK: usize = WORDS - 1;

/// Well Equidistributed Long-period Linear generator, 512-bit variant.
///
/// Sixteen 32-bit words plus a rotating index (68 bytes of state), period
/// `2^512 - 1`. The recurrence follows Lomont's compact formulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Well512Rng {
    state: [u32; WORDS],
    index: usize,
}

impl Well512Rng {
    /// Creates a generator whose words are the high halves of
    /// `splitmix64(seed + i)`.
    pub fn new(seed: u32) -> Self {
        let mut state = [0u32; WORDS];
        for (i, word) in state.iter_mut().enumerate() {
            *word = (splitmix64(u64::from(seed) + i as u64) >> 32) as u32;
        }
        Self { state, index: 0 }
    }
}

impl Generator for Well512Rng {
    fn produce(&mut self) -> u32 {
        let s = &mut self.state;
        let i = self.index;

        let a = s[i];
        let c = s[(i + 13) & MASK];
        let b = a ^ c ^ (a << 16) ^ (c << 15);
        let mut c = s[(i + 9) & MASK];
        c ^= c >> 11;
        let a = b ^ c;
        s[i] = a;
        let d = a ^ ((a << 5) & 0xda44_2d24);

        let i = (i + 15) & MASK;
        let a = s[i];
        s[i] = a ^ b ^ d ^ (a << 2) ^ (b << 18) ^ (c << 28);
        self.index = i;
        s[i]
    }
}
