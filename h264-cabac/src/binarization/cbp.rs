// h264-cabac
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `coded_block_pattern` (H.264 §9.3.2.6, binarization §9.3.2.6 + Table
//! 9-34): a luma prefix `TU(cMax=15)` over the four 8x8 luma blocks,
//! followed by a chroma suffix `TU(cMax=2)`.
//!
//! `ctxIdxInc` for both parts depends on whether the left/top neighbor's
//! corresponding block is already coded. A neighbor that is unavailable,
//! or that is `I_PCM` (whose coded_block_pattern is implicitly "fully
//! coded"), counts as coded.

use entropy_core::{BitSource, Result};

use crate::binarization::decode_truncated_unary;
use crate::context::ContextTable;
use crate::engine::Engine;
use crate::provider::{MacroblockDescriptor, MbTypeTag};
use crate::tables::offsets::{CBP_CHROMA_SUFFIX, CBP_LUMA_PREFIX};

fn block_is_coded(neighbor: Option<MacroblockDescriptor>, bit: u8) -> bool {
    match neighbor {
        None => true,
        Some(desc) if desc.mb_type == MbTypeTag::IPcm => true,
        Some(desc) => desc.cbp_luma() & (1 << bit) != 0,
    }
}

fn luma_ctx_inc(
    neighbor_a: Option<MacroblockDescriptor>,
    neighbor_b: Option<MacroblockDescriptor>,
    already_decoded: u8,
    blk_idx: u32,
) -> usize {
    // Within the current macroblock, the left/top neighbor for blocks 1
    // and 2/3 is another 8x8 block already decoded this call.
    let (a_coded, b_coded) = match blk_idx {
        0 => (block_is_coded(neighbor_a, 1), block_is_coded(neighbor_b, 2)),
        1 => (already_decoded & 0b01 != 0, block_is_coded(neighbor_b, 3)),
        2 => (block_is_coded(neighbor_a, 3), already_decoded & 0b01 != 0),
        _ => (already_decoded & 0b100 != 0, already_decoded & 0b010 != 0),
    };

    let term_a = if a_coded { 0 } else { 1 };
    let term_b = if b_coded { 0 } else { 1 };
    (term_a + 2 * term_b) as usize
}

/// Decodes the 4-bin luma prefix, returning the coded 8x8 luma block
/// mask (bit `i` set means 8x8 block `i` carries nonzero coefficients).
pub fn decode_luma_prefix<B: BitSource>(
    engine: &mut Engine<'_, B>,
    contexts: &mut ContextTable,
    neighbor_a: Option<MacroblockDescriptor>,
    neighbor_b: Option<MacroblockDescriptor>,
) -> Result<u8> {
    let mut mask = 0u8;
    for blk_idx in 0..4 {
        let inc = luma_ctx_inc(neighbor_a, neighbor_b, mask, blk_idx);
        let ctx_idx = CBP_LUMA_PREFIX as usize + inc;
        let bin = engine.decision(contexts.get_mut(ctx_idx))?;
        if bin {
            mask |= 1 << blk_idx;
        }
    }
    Ok(mask)
}

fn chroma_ctx_inc(
    neighbor_a: Option<MacroblockDescriptor>,
    neighbor_b: Option<MacroblockDescriptor>,
    bin_idx: u32,
) -> usize {
    let chroma_coded = |n: Option<MacroblockDescriptor>| match n {
        None => true,
        Some(desc) if desc.mb_type == MbTypeTag::IPcm => true,
        Some(desc) => desc.cbp_chroma() != 0,
    };
    let chroma_high = |n: Option<MacroblockDescriptor>| match n {
        None => true,
        Some(desc) if desc.mb_type == MbTypeTag::IPcm => true,
        Some(desc) => desc.cbp_chroma() == 2,
    };

    let (a, b) = if bin_idx == 0 {
        (chroma_coded(neighbor_a), chroma_coded(neighbor_b))
    }
    else {
        (chroma_high(neighbor_a), chroma_high(neighbor_b))
    };

    let term_a = if a { 0 } else { 1 };
    let term_b = if b { 0 } else { 1 };
    let base = if bin_idx == 0 { 0 } else { 4 };
    base + term_a + 2 * term_b
}

/// Decodes the 1-or-2-bin chroma suffix, returning a value in `0..=2`.
pub fn decode_chroma_suffix<B: BitSource>(
    engine: &mut Engine<'_, B>,
    contexts: &mut ContextTable,
    neighbor_a: Option<MacroblockDescriptor>,
    neighbor_b: Option<MacroblockDescriptor>,
) -> Result<u32> {
    decode_truncated_unary(engine, contexts, 2, |bin_idx| {
        CBP_CHROMA_SUFFIX as usize + chroma_ctx_inc(neighbor_a, neighbor_b, bin_idx)
    })
}

/// Combines the luma mask and chroma value into the final
/// `coded_block_pattern`: `luma + 16 * chroma`, per H.264 §7.4.5 (not
/// the `(luma + 16) * chroma` product that a naive transcription of the
/// formula can produce).
pub fn combine(luma_mask: u8, chroma: u32) -> u32 {
    luma_mask as u32 + 16 * chroma
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_uses_additive_not_multiplicative_formula() {
        assert_eq!(combine(0b1111, 2), 15 + 32);
        assert_eq!(combine(0, 0), 0);
        assert_ne!(combine(0b1111, 2), (15 + 16) * 2);
    }

    #[test]
    fn unavailable_neighbors_count_as_coded() {
        assert_eq!(luma_ctx_inc(None, None, 0, 0), 0);
    }
}
