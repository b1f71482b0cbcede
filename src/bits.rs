//! Sources of unbiased random bits.
//!
//! The sampler in [`crate::sampler`] only ever asks for "a uniform `k`-bit
//! word" and does not care where the bits come from. The original system got
//! them from measuring `k` qubits in equal superposition; here the seam is the
//! [`BitSource`] trait, so production code can plug in any [`rand`] generator
//! and tests can replay a recorded sequence.
use rand::{rngs::StdRng, RngCore, SeedableRng};

/// A producer of uniform `k`-bit words.
///
/// The contract: for `1 <= k <= 64`, `next_bits(k)` is uniformly distributed
/// over `[0, 2^k - 1]`, every value equally likely.
pub trait BitSource {
    fn next_bits(&mut self, k: u32) -> u64;
}

/// keep only the low `k` bits of a word
#[inline]
pub(crate) fn mask(word: u64, k: u32) -> u64 {
    debug_assert!((1..=64).contains(&k), "bit width must be in [1, 64]");
    if k == 64 {
        word
    } else {
        word & ((1 << k) - 1)
    }
}

/// A [`BitSource`] backed by any [`RngCore`] generator.
///
/// A fair generator word has unbiased, independent bits, so masking
/// `next_u64()` down to `k` bits satisfies the contract.
pub struct RngSource<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Builds a reproducible source: the same seed always yields the same
    /// sequence of words, hence the same draws.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: RngCore> BitSource for RngSource<R> {
    fn next_bits(&mut self, k: u32) -> u64 {
        mask(self.rng.next_u64(), k)
    }
}

/// A deterministic [`BitSource`] replaying a recorded word sequence.
///
/// Words are yielded in order, masked to the requested width. Once the
/// recording runs out every call returns 0, which the sampler always rejects,
/// so an exhausted replay surfaces as
/// [`TirageError::ExhaustedRetries`](crate::error::TirageError::ExhaustedRetries)
/// instead of silently producing bogus draws.
pub struct ReplaySource {
    words: Vec<u64>,
    cursor: usize,
}

impl ReplaySource {
    pub fn new(words: Vec<u64>) -> Self {
        Self { words, cursor: 0 }
    }
}

impl BitSource for ReplaySource {
    fn next_bits(&mut self, k: u32) -> u64 {
        let word = match self.words.get(self.cursor) {
            Some(&w) => w,
            None => return 0,
        };
        self.cursor += 1;
        mask(word, k)
    }
}
