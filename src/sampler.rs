//! Uniform sampling of a bounded range by rejection.
//!
//! Reducing a random word modulo `max_number` skews the distribution whenever
//! `max_number + 1` does not divide `2^k`. Instead, [`sample`] draws words of
//! the minimal width `k = bit_length(max_number)` and rejects anything outside
//! `[1, max_number]`: every accepted value is exactly as likely as any other,
//! and since `max_number >= 2^(k - 1)` more than half of the words are
//! accepted, so the expected number of rejections stays below one.
use tracing::{debug, trace};

use crate::bits::BitSource;
use crate::error::TirageError;

/// How many words we are willing to reject before declaring the bit source
/// broken. A fair source rejects each word with probability < 1/2, so hitting
/// this bound by chance has probability < 2^-1024.
pub const MAX_REJECTIONS: usize = 1024;

/// Minimal number of bits needed to represent `n`, i.e. the smallest `k` with
/// `2^k - 1 >= n`.
///
/// # Example
/// ```
/// # use tirage::sampler::bit_length;
/// assert_eq!(bit_length(45), 6); // 45 = 0b101101
/// ```
pub fn bit_length(n: u64) -> u32 {
    u64::BITS - n.leading_zeros()
}

/// Draws a uniform value in `[1, max_number]` from `source`.
///
/// `max_number` must be at least 1; [`crate::draw::collect`] guarantees this
/// through [`DrawParams::validate`](crate::draw::DrawParams::validate).
///
/// Words of `bit_length(max_number)` bits are requested until one lands in
/// range; 0 is always rejected since draws are 1-indexed. When `max_number`
/// has all its bits set (e.g. 63), every nonzero word is accepted.
///
/// Fails with [`TirageError::ExhaustedRetries`] if [`MAX_REJECTIONS`] words in
/// a row are rejected, which a fair source almost surely never does.
pub fn sample(max_number: u64, source: &mut impl BitSource) -> Result<u64, TirageError> {
    let k = bit_length(max_number);

    for attempt in 0..MAX_REJECTIONS {
        let v = source.next_bits(k);
        if (1..=max_number).contains(&v) {
            debug!("accepted {} after {} rejections", v, attempt);
            return Ok(v);
        }
        trace!("rejected {} (out of [1, {}])", v, max_number);
    }

    Err(TirageError::ExhaustedRetries {
        max_number,
        attempts: MAX_REJECTIONS,
    })
}

#[cfg(test)]
mod tests {
    use crate::bits::{BitSource, ReplaySource, RngSource};
    use crate::error::TirageError;

    use super::{bit_length, sample, MAX_REJECTIONS};

    #[test]
    fn bit_lengths() {
        assert_eq!(bit_length(1), 1);
        assert_eq!(bit_length(2), 2);
        assert_eq!(bit_length(45), 6);
        assert_eq!(bit_length(63), 6);
        assert_eq!(bit_length(64), 7);
    }

    #[test]
    fn samples_stay_in_range() {
        let mut source = RngSource::from_seed(0);
        for max in [1, 2, 5, 45, 63, 64, 1000] {
            for _ in 0..1_000 {
                let v = sample(max, &mut source).unwrap();
                assert!(
                    (1..=max).contains(&v),
                    "sampled {} out of [1, {}]",
                    v,
                    max,
                );
            }
        }
    }

    #[test]
    fn zero_is_rejected_and_out_of_range_is_skipped() {
        // 0 and 46..=63 must be discarded, the first in-range word wins
        let mut source = ReplaySource::new(vec![0, 63, 46, 45]);
        assert_eq!(sample(45, &mut source).unwrap(), 45);
    }

    #[test]
    fn all_bits_set_accepts_every_nonzero_word() {
        let mut source = ReplaySource::new(vec![0, 63]);
        assert_eq!(sample(63, &mut source).unwrap(), 63);

        for word in 1..=63 {
            let mut source = ReplaySource::new(vec![word]);
            assert_eq!(sample(63, &mut source).unwrap(), word);
        }
    }

    #[test]
    fn broken_source_exhausts_retries() {
        // an exhausted replay yields only zeroes, which are always rejected
        let mut source = ReplaySource::new(vec![]);
        assert_eq!(
            sample(45, &mut source),
            Err(TirageError::ExhaustedRetries {
                max_number: 45,
                attempts: MAX_REJECTIONS,
            }),
        );
    }

    // Pearson's chi-square statistic against the uniform distribution over
    // [1, max]; with df = max - 1 = 44 degrees of freedom, the 0.999 quantile
    // is about 78.7, so a fair sampler stays below 80 essentially always (and
    // deterministically so with a fixed seed).
    fn chi_square(counts: &[u64], expected: f64) -> f64 {
        counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum()
    }

    #[test]
    fn distribution_is_uniform() {
        const MAX: u64 = 45;
        const TRIALS: usize = 45_000;

        let mut source = RngSource::from_seed(1);
        let mut counts = [0u64; MAX as usize];
        for _ in 0..TRIALS {
            let v = sample(MAX, &mut source).unwrap();
            counts[(v - 1) as usize] += 1;
        }

        let statistic = chi_square(&counts, TRIALS as f64 / MAX as f64);
        assert!(
            statistic < 80.0,
            "chi-square statistic {} too high for uniform [1, {}]",
            statistic,
            MAX,
        );
    }

    #[test]
    fn biased_source_fails_chi_square() {
        // sanity check of the statistic itself: a source stuck on one word
        // must blow way past the threshold
        struct Stuck;
        impl BitSource for Stuck {
            fn next_bits(&mut self, _k: u32) -> u64 {
                7
            }
        }

        let mut counts = [0u64; 45];
        for _ in 0..45_000 {
            let v = sample(45, &mut Stuck).unwrap();
            counts[(v - 1) as usize] += 1;
        }

        assert!(chi_square(&counts, 1_000.0) > 80.0);
    }
}
