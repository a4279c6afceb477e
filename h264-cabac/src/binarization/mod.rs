// h264-cabac
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Binarization schemes shared across syntax elements: fixed-length,
//! (truncated) unary, and UEGk. Each scheme sequences `decision`/
//! `bypass` calls against the [`Engine`] and assembles the resulting
//! bins into an integer.
//!
//! Per-element `ctxIdxInc` derivation (which consults the neighbor
//! provider) lives in [`crate::binarization::mb_type`],
//! [`crate::binarization::cbp`], and [`crate::binarization::residual`];
//! this module only knows how to turn a sequence of bins, each with its
//! own already-computed `ctxIdx`, into a value.

pub mod cbp;
pub mod mb_type;
pub mod residual;

use entropy_core::{BitSource, Result};

use crate::context::ContextTable;
use crate::engine::Engine;

/// Engineering safety cap on unary-coded bins (spec-mandated, not part
/// of the H.264 standard itself): a well-formed `ref_idx_lX` or
/// `mb_qp_delta` code never needs this many bins, so exceeding it means
/// the stream is malformed.
pub const UNARY_SAFETY_CAP: u32 = 24;

/// `FL(cMax)` read entirely through `bypass` (no context), e.g.
/// `coeff_sign_flag`.
pub fn decode_fl_bypass<B: BitSource>(engine: &mut Engine<'_, B>, num_bins: u32) -> Result<u32> {
    let mut value = 0;
    for _ in 0..num_bins {
        value = (value << 1) | engine.bypass()? as u32;
    }
    Ok(value)
}

/// `FL(cMax)` where every bin shares the same context index, e.g.
/// `rem_intra_4x4_pred_mode` (3 bins, all at ctxIdxOffset 69).
pub fn decode_fl_decision<B: BitSource>(
    engine: &mut Engine<'_, B>,
    contexts: &mut ContextTable,
    ctx_idx: usize,
    num_bins: u32,
) -> Result<u32> {
    let mut value = 0;
    for _ in 0..num_bins {
        let bin = engine.decision(contexts.get_mut(ctx_idx))?;
        value = (value << 1) | bin as u32;
    }
    Ok(value)
}

/// Unary binarization, terminated by a `0` bin, with a per-bin context
/// computed by `ctx_idx_for_bin`. Safety-capped per [`UNARY_SAFETY_CAP`].
pub fn decode_unary<B: BitSource>(
    engine: &mut Engine<'_, B>,
    contexts: &mut ContextTable,
    mut ctx_idx_for_bin: impl FnMut(u32) -> usize,
) -> Result<u32> {
    let mut value = 0;
    loop {
        let ctx_idx = ctx_idx_for_bin(value);
        let bin = engine.decision(contexts.get_mut(ctx_idx))?;
        if !bin {
            return Ok(value);
        }
        value += 1;
        if value >= UNARY_SAFETY_CAP {
            log::warn!("cabac: unary code exceeded {UNARY_SAFETY_CAP} bins, stream is malformed");
            return entropy_core::error::malformed_stream_error("unary code exceeded safety cap");
        }
    }
}

/// Truncated unary binarization: behaves like [`decode_unary`] but stops
/// (without reading a terminating `0`) once `c_max` consecutive `1`
/// bins have been read.
pub fn decode_truncated_unary<B: BitSource>(
    engine: &mut Engine<'_, B>,
    contexts: &mut ContextTable,
    c_max: u32,
    mut ctx_idx_for_bin: impl FnMut(u32) -> usize,
) -> Result<u32> {
    if c_max == 0 {
        return Ok(0);
    }

    let mut value = 0;
    while value < c_max {
        let ctx_idx = ctx_idx_for_bin(value);
        let bin = engine.decision(contexts.get_mut(ctx_idx))?;
        if !bin {
            return Ok(value);
        }
        value += 1;
    }
    Ok(value)
}

/// Exp-Golomb order-`k` suffix, read entirely through `bypass` (used
/// once a UEGk prefix saturates its truncated-unary cap).
pub fn exp_golomb_bypass_suffix<B: BitSource>(engine: &mut Engine<'_, B>, mut k: u32) -> Result<u32> {
    let mut x = 0u32;
    while engine.bypass()? {
        x += 1 << k;
        k += 1;
    }

    let mut suffix = 0u32;
    for _ in 0..k {
        suffix = (suffix << 1) | engine.bypass()? as u32;
    }

    Ok(x + suffix)
}

/// `UEGk(uCoff, k)`: a context-coded truncated-unary prefix capped at
/// `u_coff`, followed by an Exp-Golomb order-`k` bypass suffix if the
/// prefix saturates. Returns the unsigned magnitude only; callers apply
/// sign handling themselves (see [`mod@self`] docs and `DESIGN.md`).
pub fn decode_uegk<B: BitSource>(
    engine: &mut Engine<'_, B>,
    contexts: &mut ContextTable,
    u_coff: u32,
    k: u32,
    ctx_idx_for_bin: impl FnMut(u32) -> usize,
) -> Result<u32> {
    let prefix = decode_truncated_unary(engine, contexts, u_coff, ctx_idx_for_bin)?;
    if prefix < u_coff {
        return Ok(prefix);
    }
    let suffix = exp_golomb_bypass_suffix(engine, k)?;
    Ok(u_coff + suffix)
}

/// The generic signed-value mapping referenced by spec for UEGk-coded
/// signed syntax elements: `map(x) = (-1)^(x+1) * ceil(x/2)`.
pub fn map(x: u32) -> i32 {
    let half = (x + 1) / 2;
    if x % 2 == 1 {
        half as i32
    }
    else {
        -(half as i32)
    }
}

/// Inverse of [`map`].
pub fn unmap(v: i32) -> u32 {
    if v > 0 {
        (2 * v - 1) as u32
    }
    else {
        (-2 * v) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_unmap_round_trip_is_identity() {
        for v in -500i32..=500 {
            assert_eq!(map(unmap(v)), v);
        }
    }

    #[test]
    fn unmap_map_round_trip_is_identity() {
        for x in 0u32..=1000 {
            assert_eq!(unmap(map(x)), x);
        }
    }

    proptest::proptest! {
        #[test]
        fn prop_map_unmap_round_trips(v in -100_000i32..=100_000) {
            proptest::prop_assert_eq!(map(unmap(v)), v);
        }
    }
}
