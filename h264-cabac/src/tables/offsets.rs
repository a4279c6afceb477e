// h264-cabac
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ctxIdxOffset` constants for every syntax element, plus the
//! "block-kind factor" tables used by the residual-coefficient elements.
//!
//! The factor derivation here is a direct table keyed by
//! [`crate::provider::ResidualBlockKind`], which sidesteps the branch-
//! ordering defect noted for `GetBlockKindFactor` in the source this
//! decoder is modelled on (the `ctxBlockCat == 9` case was unreachable
//! there because an earlier range check already matched).

use crate::provider::{MbaffMode, ResidualBlockKind};

pub(crate) const MB_SKIP_FLAG_P: u16 = 11;
pub(crate) const MB_SKIP_FLAG_B: u16 = 24;
pub(crate) const MB_TYPE_SI_SELECTOR: u16 = 0;
pub(crate) const MB_TYPE_I: u16 = 3;
pub(crate) const MB_TYPE_SI_SUFFIX: u16 = 3; // SI slices fall through to the I-slice tree at offset 3.
pub(crate) const MB_TYPE_P: u16 = 14;
pub(crate) const MB_TYPE_P_I_SUFFIX: u16 = 17;
pub(crate) const MB_TYPE_B: u16 = 27;
pub(crate) const MB_TYPE_B_I_SUFFIX: u16 = 32;
pub(crate) const SUB_MB_TYPE: u16 = 36;
pub(crate) const MVD_L0: u16 = 40;
pub(crate) const MVD_L1: u16 = 47;
pub(crate) const REF_IDX: u16 = 54;
pub(crate) const MB_QP_DELTA: u16 = 60;
pub(crate) const INTRA_CHROMA_PRED_MODE: u16 = 64;
pub(crate) const PREV_INTRA_PRED_MODE_FLAG: u16 = 68;
pub(crate) const REM_INTRA_PRED_MODE: u16 = 69;
pub(crate) const MB_FIELD_DECODING_FLAG: u16 = 70;
pub(crate) const CBP_LUMA_PREFIX: u16 = 73;
pub(crate) const CBP_CHROMA_SUFFIX: u16 = 77;
pub(crate) const TRANSFORM_SIZE_8X8_FLAG: u16 = 399;

/// Per-bin context-increment table for bins >= 1 of `ref_idx_lX`.
pub(crate) const REF_IDX_HIGH_BIN_INC: [u16; 7] = [0, 4, 5, 5, 5, 5, 5];

/// Per-bin context-increment table for bins >= 1 of `mvd_lX`.
pub(crate) const MVD_HIGH_BIN_INC: [u16; 7] = [0, 3, 4, 5, 6, 6, 6];

fn block_kind_base(kind: ResidualBlockKind) -> u16 {
    use ResidualBlockKind::*;
    match kind {
        Intra16x16DcLevel | Intra16x16AcLevel | LumaLevel4x4 | ChromaDcLevel | ChromaAcLevel => 1,
        LumaLevel8x8 => 2,
        CbIntra16x16DcLevel | CbIntra16x16AcLevel | CbLevel4x4 => 3,
        CrIntra16x16DcLevel | CrIntra16x16AcLevel | CrLevel4x4 => 4,
        CbLevel8x8 => 5,
        CrLevel8x8 => 6,
    }
}

/// Combines a residual block kind with the current macroblock's MBAFF
/// mode into the `0..=18` index used by the tables below.
pub(crate) fn block_kind_factor(kind: ResidualBlockKind, mbaff: MbaffMode) -> usize {
    let base = block_kind_base(kind);
    let shift = match mbaff {
        MbaffMode::Neither => 0,
        MbaffMode::Frame => 6,
        MbaffMode::Field => 12,
    };
    (base + shift) as usize
}

#[rustfmt::skip]
pub(crate) const SIGNIFICANT_COEFF_FLAG_OFFSET: [u16; 19] = [
    0, 105, 402, 484, 528, 660, 718, 105, 402, 484, 528, 660, 718, 277, 436, 776, 820, 675, 733,
];

#[rustfmt::skip]
pub(crate) const LAST_SIGNIFICANT_COEFF_FLAG_OFFSET: [u16; 19] = [
    0, 166, 417, 572, 616, 690, 748, 166, 417, 572, 616, 690, 748, 338, 451, 864, 908, 699, 757,
];

#[rustfmt::skip]
pub(crate) const CODED_BLOCK_FLAG_OFFSET: [u16; 19] = [
    0, 85, 1012, 460, 472, 1012, 1012, 85, 1012, 460, 472, 1012, 1012, 85, 1012, 460, 472, 1012, 1012,
];

#[rustfmt::skip]
pub(crate) const COEFF_ABS_LEVEL_MINUS1_PREFIX_OFFSET: [u16; 19] = [
    0, 227, 426, 952, 982, 708, 766, 227, 426, 952, 982, 708, 766, 227, 426, 952, 982, 708, 766,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_kind_factor_covers_every_ctx_block_cat() {
        // Every variant must produce a factor in 1..=6 for non-MBAFF macroblocks,
        // and the table lookups above must never be called with index 0.
        for kind in ResidualBlockKind::ALL {
            let factor = block_kind_factor(kind, MbaffMode::Neither);
            assert!((1..=6).contains(&factor));
        }
    }

    #[test]
    fn mbaff_frame_and_field_shift_the_factor() {
        let kind = ResidualBlockKind::LumaLevel4x4;
        let base = block_kind_factor(kind, MbaffMode::Neither);
        assert_eq!(block_kind_factor(kind, MbaffMode::Frame), base + 6);
        assert_eq!(block_kind_factor(kind, MbaffMode::Field), base + 12);
    }
}
