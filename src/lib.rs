//! Tirage: Bias-Free Distinct Draws From A Stream Of Random Bits
//!
//! The crate turns any source of unbiased random bits into a lottery-style
//! draw: `count` distinct integers picked uniformly in `[1, max_number]`,
//! returned in ascending order. Uniformity comes from rejection sampling over
//! the minimal bit-width (see [`sampler`]), never from modulo reduction.
//!
//! The bit source is an injected capability (see [`bits::BitSource`]): the
//! original system measured qubits in superposition, production code here
//! plugs in a [`rand`] generator, and tests replay recorded sequences.
use tracing::info;

pub mod bits;
pub mod draw;
pub mod error;
pub mod sampler;

use crate::{
    bits::BitSource,
    draw::{Draw, DrawParams},
    error::TirageError,
};

/// Inclusive upper bound of the classic draw.
pub const MAX_NUMBER: u64 = 45;
/// Number of distinct values in the classic draw.
pub const COUNT: usize = 6;

/// Runs the classic 6-out-of-45 draw against `source`.
///
/// > **Note**
/// > this is a wrapper around [`draw_with`] with [`DrawParams::default`].
pub fn draw(source: &mut impl BitSource) -> Result<Draw, TirageError> {
    draw_with(DrawParams::default(), source)
}

/// Runs a draw with explicit parameters against `source`.
///
/// Fails with [`TirageError::InvalidParameters`] when `count` distinct values
/// cannot be picked in `[1, max_number]`, before consuming any bits.
pub fn draw_with(params: DrawParams, source: &mut impl BitSource) -> Result<Draw, TirageError> {
    let result = draw::collect(params, source)?;
    info!("drew {}", result);

    Ok(result)
}
