//! Collecting a full draw of distinct values.
//!
//! A draw repeatedly invokes [`crate::sampler::sample`] and throws the results
//! into an ordered set: duplicates are absorbed, so distinctness is enforced
//! simply by sampling until the set is full. The set iterates in ascending
//! order, which is exactly the order the result is presented in.
use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::bits::BitSource;
use crate::error::TirageError;
use crate::sampler::sample;

/// Parameters of a draw: pick `count` distinct values in `[1, max_number]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawParams {
    pub max_number: u64,
    pub count: usize,
}

impl Default for DrawParams {
    /// The classic 6-out-of-45 draw.
    fn default() -> Self {
        Self {
            max_number: crate::MAX_NUMBER,
            count: crate::COUNT,
        }
    }
}

impl DrawParams {
    pub fn new(max_number: u64, count: usize) -> Self {
        Self { max_number, count }
    }

    /// Rejects parameters for which the sampling loop could never terminate:
    /// a zero bound, a zero count or more values requested than the range
    /// holds.
    pub fn validate(&self) -> Result<(), TirageError> {
        if self.max_number == 0 || self.count == 0 || self.count as u64 > self.max_number {
            return Err(TirageError::InvalidParameters {
                max_number: self.max_number,
                count: self.count,
            });
        }
        Ok(())
    }
}

/// The result of a draw: exactly `count` distinct values in
/// `[1, max_number]`, ascending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draw(Vec<u64>);

impl Draw {
    pub fn numbers(&self) -> &[u64] {
        &self.0
    }
}

impl std::fmt::Display for Draw {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", n)?;
        }
        write!(f, "]")?;

        Ok(())
    }
}

/// Samples until `params.count` distinct values have been seen and returns
/// them in ascending order.
///
/// Parameters are validated eagerly, so an impossible draw fails with
/// [`TirageError::InvalidParameters`] before touching the bit source. Each
/// call starts from an empty set: successive draws are independent.
///
/// The number of samples is capped at `64 * count` so that a biased source
/// stalling on an almost-full set fails with
/// [`TirageError::ExhaustedRetries`] instead of looping forever.
pub fn collect(params: DrawParams, source: &mut impl BitSource) -> Result<Draw, TirageError> {
    params.validate()?;

    info!(
        "drawing {} distinct values in [1, {}]",
        params.count, params.max_number
    );

    let max_samples = 64 * params.count;
    let mut seen = BTreeSet::new();

    for attempt in 0..max_samples {
        if seen.len() == params.count {
            break;
        }
        let v = sample(params.max_number, source)?;
        if !seen.insert(v) {
            debug!("duplicate {} on sample {}, resampling", v, attempt);
        }
    }

    if seen.len() < params.count {
        return Err(TirageError::ExhaustedRetries {
            max_number: params.max_number,
            attempts: max_samples,
        });
    }

    Ok(Draw(seen.into_iter().collect()))
}
