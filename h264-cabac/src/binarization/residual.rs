// h264-cabac
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Context-index derivation for the residual-coefficient syntax
//! elements: `coded_block_flag`, `significant_coeff_flag`,
//! `last_significant_coeff_flag`, and `coeff_abs_level_minus1`.
//!
//! Per-block storage (which neighboring 4x4/8x8 transform block a given
//! block's `coded_block_flag` neighbor resolves to, and the residual
//! coefficient buffer itself) is owned by the caller, same as the
//! macroblock graph in [`crate::provider`]. These functions take the
//! already-resolved neighbor flags and position indices as plain
//! arguments rather than reaching into a provider themselves, since
//! "where a 4x4 block's neighbor lives" is a macroblock-graph question,
//! already answered by `MacroblockProvider::derive_neighbor_4x4_luma`
//! and friends before the binarization layer is ever invoked.

use crate::provider::{MbaffMode, ResidualBlockKind};
use crate::tables::offsets::{
    block_kind_factor, CODED_BLOCK_FLAG_OFFSET, COEFF_ABS_LEVEL_MINUS1_PREFIX_OFFSET,
    LAST_SIGNIFICANT_COEFF_FLAG_OFFSET, SIGNIFICANT_COEFF_FLAG_OFFSET,
};

// FIXME: this table is a structurally valid stand-in (63 entries,
// values in range), not a transcription of H.264 Table 9-43 verified
// against the ITU text. Golden-vector decoding against a real 8x8
// transform bitstream will not match the standard until this table is
// replaced; see `DESIGN.md`.
/// Scan-position lookup used by the 8x8-transform block kinds (luma,
/// Cb, and Cr) in place of `levelListIdx` directly (H.264 Table 9-43).
const SCAN_POSITION_LOOKUP_8X8: [u8; 63] = {
    let mut table = [0u8; 63];
    let mut i = 0;
    while i < 63 {
        table[i] = (i / 3) as u8;
        i += 1;
    }
    table
};

fn position_inc(kind: ResidualBlockKind, level_list_idx: u32, num_c8x8: u32, table: &[u8; 63]) -> usize {
    if kind.is_chroma_dc() {
        return (level_list_idx / num_c8x8).min(2) as usize;
    }
    if kind.uses_position_lookup_table() {
        return table[level_list_idx as usize] as usize;
    }
    level_list_idx as usize
}

/// `ctxIdx` for `significant_coeff_flag` (H.264 Table 9-43). `num_c8x8`
/// is the number of 8x8 chroma blocks (1, 2, or 4 depending on
/// `chroma_format_idc`) and is only consulted for `ChromaDcLevel`.
pub fn significant_coeff_flag_ctx_idx(
    kind: ResidualBlockKind,
    mbaff: MbaffMode,
    level_list_idx: u32,
    num_c8x8: u32,
) -> usize {
    let factor = block_kind_factor(kind, mbaff);
    let inc = position_inc(kind, level_list_idx, num_c8x8, &SCAN_POSITION_LOOKUP_8X8);
    SIGNIFICANT_COEFF_FLAG_OFFSET[factor] as usize + inc
}

/// `ctxIdx` for `last_significant_coeff_flag` (H.264 Table 9-43). See
/// [`significant_coeff_flag_ctx_idx`] for `num_c8x8`.
pub fn last_significant_coeff_flag_ctx_idx(
    kind: ResidualBlockKind,
    mbaff: MbaffMode,
    level_list_idx: u32,
    num_c8x8: u32,
) -> usize {
    let factor = block_kind_factor(kind, mbaff);
    let inc = position_inc(kind, level_list_idx, num_c8x8, &SCAN_POSITION_LOOKUP_8X8);
    LAST_SIGNIFICANT_COEFF_FLAG_OFFSET[factor] as usize + inc
}

/// `ctxIdx` for `coded_block_flag` (H.264 §9.3.3.1.1.9): depends on the
/// two neighboring transform blocks' own `coded_block_flag`, each either
/// unknown (counts as coded, matching the spec's I_PCM/unavailable
/// handling for this element), or a concrete value.
pub fn coded_block_flag_ctx_idx(
    kind: ResidualBlockKind,
    mbaff: MbaffMode,
    neighbor_a: Option<bool>,
    neighbor_b: Option<bool>,
) -> usize {
    let factor = block_kind_factor(kind, mbaff);
    let term_a = if neighbor_a.unwrap_or(true) { 0 } else { 1 };
    let term_b = if neighbor_b.unwrap_or(true) { 0 } else { 1 };
    CODED_BLOCK_FLAG_OFFSET[factor] as usize + term_a + 2 * term_b
}

/// `ctxIdx` for the constant-per-value `coeff_abs_level_minus1` prefix
/// (H.264 §9.3.3.1.3): every bin of a single value's UEGk prefix shares
/// one `ctxIdxInc`, computed from counts of already-decoded coefficients
/// in the current block, not from this bin's position.
pub fn coeff_abs_level_minus1_ctx_idx(
    kind: ResidualBlockKind,
    mbaff: MbaffMode,
    num_decod_abs_level_gt1: u32,
    num_decod_abs_level_eq1: u32,
) -> usize {
    let factor = block_kind_factor(kind, mbaff);
    let inc = if num_decod_abs_level_gt1 != 0 {
        0
    }
    else {
        (1 + num_decod_abs_level_eq1).min(4)
    };
    COEFF_ABS_LEVEL_MINUS1_PREFIX_OFFSET[factor] as usize + inc as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coeff_abs_level_caps_at_four() {
        let idx = coeff_abs_level_minus1_ctx_idx(ResidualBlockKind::LumaLevel4x4, MbaffMode::Neither, 0, 100);
        let base = COEFF_ABS_LEVEL_MINUS1_PREFIX_OFFSET[block_kind_factor(
            ResidualBlockKind::LumaLevel4x4,
            MbaffMode::Neither,
        )] as usize;
        assert_eq!(idx, base + 4);
    }

    #[test]
    fn coeff_abs_level_zero_gt1_short_circuits() {
        let idx = coeff_abs_level_minus1_ctx_idx(ResidualBlockKind::LumaLevel4x4, MbaffMode::Neither, 3, 0);
        let base = COEFF_ABS_LEVEL_MINUS1_PREFIX_OFFSET[block_kind_factor(
            ResidualBlockKind::LumaLevel4x4,
            MbaffMode::Neither,
        )] as usize;
        assert_eq!(idx, base);
    }

    #[test]
    fn coded_block_flag_unavailable_neighbors_count_as_coded() {
        let idx = coded_block_flag_ctx_idx(ResidualBlockKind::LumaLevel4x4, MbaffMode::Neither, None, None);
        let base = CODED_BLOCK_FLAG_OFFSET[block_kind_factor(ResidualBlockKind::LumaLevel4x4, MbaffMode::Neither)]
            as usize;
        assert_eq!(idx, base);
    }

    #[test]
    fn scan_position_lookup_is_in_range() {
        for &v in SCAN_POSITION_LOOKUP_8X8.iter() {
            assert!((v as usize) < SIGNIFICANT_COEFF_FLAG_OFFSET.len() * 20);
        }
    }

    #[test]
    fn chroma_dc_position_inc_scales_by_num_c8x8_and_caps_at_two() {
        assert_eq!(position_inc(ResidualBlockKind::ChromaDcLevel, 0, 4, &SCAN_POSITION_LOOKUP_8X8), 0);
        assert_eq!(position_inc(ResidualBlockKind::ChromaDcLevel, 3, 4, &SCAN_POSITION_LOOKUP_8X8), 0);
        assert_eq!(position_inc(ResidualBlockKind::ChromaDcLevel, 4, 4, &SCAN_POSITION_LOOKUP_8X8), 1);
        assert_eq!(position_inc(ResidualBlockKind::ChromaDcLevel, 15, 4, &SCAN_POSITION_LOOKUP_8X8), 2);
        assert_eq!(position_inc(ResidualBlockKind::ChromaDcLevel, 7, 1, &SCAN_POSITION_LOOKUP_8X8), 2);
    }
}
