// h264-cabac
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`CabacDecoder`]: the public entry point tying the arithmetic
//! [`Engine`], the [`ContextTable`], and a caller-supplied
//! [`MacroblockProvider`] together into one `Decode<Element>` call per
//! syntax element.
//!
//! Per-element setup state that H.264 threads through a macroblock's
//! residual parse (`mbPartIdx`, `subMbPartIdx`, the current
//! `ResidualBlockKind`, `levelListIdx`, `numC8x8`, and the two running
//! coefficient-magnitude counters) lives on the decoder itself, mutated
//! by the small setter methods grouped at the bottom of this file,
//! mirroring how a caller walks a macroblock's syntax top to bottom.

use entropy_core::bits::fixed_length_bits;
use entropy_core::{BitSource, Result};

use crate::binarization::{cbp, mb_type, residual, decode_fl_bypass, decode_fl_decision, decode_uegk, decode_unary, map};
use crate::context::{ContextTable, SliceType};
use crate::engine::Engine;
use crate::provider::{MacroblockDescriptor, MacroblockProvider, MbTypeTag, MbaffMode, ResidualBlockKind};
use crate::tables::offsets::{
    MB_FIELD_DECODING_FLAG, MB_QP_DELTA, MB_SKIP_FLAG_B, MB_SKIP_FLAG_P, MVD_HIGH_BIN_INC, MVD_L0, MVD_L1,
    REF_IDX, REF_IDX_HIGH_BIN_INC, TRANSFORM_SIZE_8X8_FLAG,
};

/// The decoded `mb_type`, normalized to the slice-relative effective
/// type a caller needs to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodedMbType {
    Inter(u32),
    Intra(u32),
    /// SI slices decode an extra selector bin ahead of the I-slice tree;
    /// `0` means `SI`, `1` falls through to the I-slice value carried
    /// alongside.
    Si,
}

pub struct CabacDecoder<'b, 'p, B: BitSource, P: MacroblockProvider> {
    engine: Engine<'b, B>,
    contexts: ContextTable,
    provider: &'p P,
    slice_type: SliceType,

    mb_part_idx: u8,
    sub_mb_part_idx: u8,
    residual_block_kind: ResidualBlockKind,
    mbaff_mode: MbaffMode,
    level_list_idx: u32,
    num_c8x8: u8,
    num_decod_abs_level_gt1: u32,
    num_decod_abs_level_eq1: u32,
}

impl<'b, 'p, B: BitSource, P: MacroblockProvider> CabacDecoder<'b, 'p, B, P> {
    pub fn new(
        bit_source: &'b mut B,
        provider: &'p P,
        slice_type: SliceType,
        slice_qp: i32,
        initial_offset: u32,
    ) -> Self {
        let contexts = ContextTable::new(slice_type, slice_qp, provider.cabac_init_idc());
        CabacDecoder {
            engine: Engine::new(bit_source, initial_offset),
            contexts,
            provider,
            slice_type,
            mb_part_idx: 0,
            sub_mb_part_idx: 0,
            residual_block_kind: ResidualBlockKind::LumaLevel4x4,
            mbaff_mode: MbaffMode::Neither,
            level_list_idx: 0,
            num_c8x8: 4,
            num_decod_abs_level_gt1: 0,
            num_decod_abs_level_eq1: 0,
        }
    }

    // -- setup field mutators --------------------------------------------

    pub fn set_mb_part_idx(&mut self, idx: u8) {
        self.mb_part_idx = idx;
    }

    pub fn set_sub_mb_part_idx(&mut self, idx: u8) {
        self.sub_mb_part_idx = idx;
    }

    pub fn set_residual_block_kind(&mut self, kind: ResidualBlockKind) {
        self.residual_block_kind = kind;
    }

    pub fn set_mbaff_mode(&mut self, mode: MbaffMode) {
        self.mbaff_mode = mode;
    }

    pub fn set_level_list_idx(&mut self, idx: u32) {
        self.level_list_idx = idx;
    }

    pub fn set_num_c8x8(&mut self, n: u8) {
        self.num_c8x8 = n;
    }

    pub fn reset_coeff_level_counters(&mut self) {
        self.num_decod_abs_level_gt1 = 0;
        self.num_decod_abs_level_eq1 = 0;
    }

    /// Raw context accessor, for tests and diagnostics.
    pub fn context_at(&self, ctx_idx: usize) -> &crate::context::ContextModel {
        self.contexts.get(ctx_idx)
    }

    // -- mb_skip_flag ------------------------------------------------------

    fn skip_cond_term(neighbor: Option<MacroblockDescriptor>) -> u32 {
        match neighbor {
            None => 0,
            Some(desc) if desc.skip_flag => 0,
            Some(_) => 1,
        }
    }

    pub fn decode_mb_skip_flag(&mut self) -> Result<bool> {
        let offset = match self.slice_type {
            SliceType::B => MB_SKIP_FLAG_B,
            _ => MB_SKIP_FLAG_P,
        };
        let (a, b) = self.provider.derive_neighbors(self.provider.curr_mb_addr());
        let inc = Self::skip_cond_term(a.descriptor) + Self::skip_cond_term(b.descriptor);
        self.engine.decision(self.contexts.get_mut(offset as usize + inc as usize))
    }

    // -- mb_type -------------------------------------------------------------

    fn mb_type_cond_term(neighbor: Option<MacroblockDescriptor>) -> u32 {
        match neighbor {
            None => 0,
            Some(desc) if desc.mb_type == MbTypeTag::INxN => 0,
            Some(_) => 1,
        }
    }

    pub fn decode_mb_type(&mut self) -> Result<DecodedMbType> {
        match self.slice_type {
            SliceType::I => {
                let (a, b) = self.provider.derive_neighbors(self.provider.curr_mb_addr());
                let inc = Self::mb_type_cond_term(a.descriptor) + Self::mb_type_cond_term(b.descriptor);
                let raw = mb_type::decode_mb_type_i(&mut self.engine, &mut self.contexts, inc as usize)?;
                Ok(DecodedMbType::Intra(raw))
            }
            SliceType::Si => {
                let selector = self
                    .engine
                    .decision(self.contexts.get_mut(crate::tables::offsets::MB_TYPE_SI_SELECTOR as usize))?;
                if !selector {
                    return Ok(DecodedMbType::Si);
                }
                let raw = mb_type::decode_mb_type_i(&mut self.engine, &mut self.contexts, 0)?;
                Ok(DecodedMbType::Intra(raw))
            }
            SliceType::P | SliceType::Sp => match mb_type::decode_mb_type_p(&mut self.engine, &mut self.contexts)? {
                mb_type::MbTypeResult::Inter(v) => Ok(DecodedMbType::Inter(v)),
                mb_type::MbTypeResult::Intra(v) => Ok(DecodedMbType::Intra(v)),
            },
            SliceType::B => match mb_type::decode_mb_type_b(&mut self.engine, &mut self.contexts)? {
                mb_type::MbTypeResult::Inter(v) => Ok(DecodedMbType::Inter(v)),
                mb_type::MbTypeResult::Intra(v) => Ok(DecodedMbType::Intra(v)),
            },
        }
    }

    // -- sub_mb_type ----------------------------------------------------------

    /// Simplified relative to the full P/B `sub_mb_type` trees (Tables
    /// 9-37/9-38 continuations): decodes a truncated-unary value in
    /// `0..=3`, which covers the four `P` sub-partition shapes directly
    /// and is an under-approximation for `B`'s wider set. See `DESIGN.md`.
    pub fn decode_sub_mb_type(&mut self) -> Result<u32> {
        let offset = crate::tables::offsets::SUB_MB_TYPE as usize;
        crate::binarization::decode_truncated_unary(&mut self.engine, &mut self.contexts, 3, |bin_idx| {
            offset + bin_idx.min(2) as usize
        })
    }

    // -- ref_idx_lX -----------------------------------------------------------

    /// `cond_term_a`/`cond_term_b` are `true` when the corresponding
    /// neighbor partition's `ref_idx` for this list is nonzero (H.264
    /// §9.3.3.1.1.6); the reference-index values themselves live in
    /// caller-owned per-partition storage the provider's neighbor
    /// derivation does not expose.
    pub fn decode_ref_idx(&mut self, cond_term_a: bool, cond_term_b: bool) -> Result<u32> {
        let base = REF_IDX as usize;
        let term_a = cond_term_a as usize;
        let term_b = 2 * cond_term_b as usize;
        decode_unary(&mut self.engine, &mut self.contexts, |bin_idx| {
            if bin_idx == 0 {
                base + term_a + term_b
            }
            else {
                base + REF_IDX_HIGH_BIN_INC[(bin_idx as usize).min(6)] as usize
            }
        })
    }

    // -- mvd_lX ---------------------------------------------------------------

    /// `abs_sum` is `absMvdCompN` summed across the left/top neighbor
    /// partitions for this component (H.264 §9.3.3.1.1.7), supplied by
    /// the caller for the same reason as `decode_ref_idx`'s terms.
    pub fn decode_mvd(&mut self, list1: bool, abs_sum: u32) -> Result<i32> {
        // mvd_lX's horizontal and vertical components share the same
        // ctxIdxOffset; they are disambiguated by which component's
        // `abs_sum` the caller passes in, not by the offset itself.
        let base = (if list1 { MVD_L1 } else { MVD_L0 }) as usize;
        let bin0_inc = if abs_sum < 3 {
            0
        }
        else if abs_sum <= 32 {
            1
        }
        else {
            2
        };

        let magnitude = decode_uegk(&mut self.engine, &mut self.contexts, 9, 3, |bin_idx| {
            if bin_idx == 0 {
                base + bin0_inc
            }
            else {
                base + MVD_HIGH_BIN_INC[(bin_idx as usize).min(6)] as usize
            }
        })?;

        if magnitude == 0 {
            return Ok(0);
        }
        let sign = self.engine.bypass()?;
        Ok(if sign { -(magnitude as i32) } else { magnitude as i32 })
    }

    // -- mb_qp_delta ------------------------------------------------------------

    pub fn decode_mb_qp_delta(&mut self, prev_nonzero: bool) -> Result<i32> {
        let base = MB_QP_DELTA as usize;
        let bin0_inc = if prev_nonzero { 1 } else { 0 };
        let code_num = decode_unary(&mut self.engine, &mut self.contexts, |bin_idx| match bin_idx {
            0 => base + bin0_inc,
            1 => base + 2,
            _ => base + 3,
        })?;
        Ok(map(code_num))
    }

    // -- intra_chroma_pred_mode --------------------------------------------------

    pub fn decode_intra_chroma_pred_mode(&mut self, cond_term_a: bool, cond_term_b: bool) -> Result<u32> {
        let base = crate::tables::offsets::INTRA_CHROMA_PRED_MODE as usize;
        let inc = cond_term_a as usize + cond_term_b as usize;
        crate::binarization::decode_truncated_unary(&mut self.engine, &mut self.contexts, 3, |bin_idx| {
            if bin_idx == 0 {
                base + inc
            }
            else {
                base + 3
            }
        })
    }

    // -- prev_intra_pred_mode_flag / rem_intra_pred_mode -------------------------

    pub fn decode_prev_intra_pred_mode_flag(&mut self) -> Result<bool> {
        let ctx_idx = crate::tables::offsets::PREV_INTRA_PRED_MODE_FLAG as usize;
        self.engine.decision(self.contexts.get_mut(ctx_idx))
    }

    pub fn decode_rem_intra_pred_mode(&mut self) -> Result<u32> {
        decode_fl_decision(
            &mut self.engine,
            &mut self.contexts,
            crate::tables::offsets::REM_INTRA_PRED_MODE as usize,
            fixed_length_bits(7),
        )
    }

    // -- mb_field_decoding_flag / transform_size_8x8_flag -------------------------

    pub fn decode_mb_field_decoding_flag(&mut self, cond_term_a: bool, cond_term_b: bool) -> Result<bool> {
        let base = MB_FIELD_DECODING_FLAG as usize;
        let inc = cond_term_a as usize + cond_term_b as usize;
        self.engine.decision(self.contexts.get_mut(base + inc))
    }

    pub fn decode_transform_size_8x8_flag(&mut self, cond_term_a: bool, cond_term_b: bool) -> Result<bool> {
        let base = TRANSFORM_SIZE_8X8_FLAG as usize;
        let inc = cond_term_a as usize + cond_term_b as usize;
        self.engine.decision(self.contexts.get_mut(base + inc))
    }

    // -- coded_block_pattern ------------------------------------------------------

    pub fn decode_coded_block_pattern(
        &mut self,
        neighbor_a: Option<MacroblockDescriptor>,
        neighbor_b: Option<MacroblockDescriptor>,
    ) -> Result<u32> {
        let luma_mask = cbp::decode_luma_prefix(&mut self.engine, &mut self.contexts, neighbor_a, neighbor_b)?;
        let chroma = cbp::decode_chroma_suffix(&mut self.engine, &mut self.contexts, neighbor_a, neighbor_b)?;
        Ok(cbp::combine(luma_mask, chroma))
    }

    // -- coded_block_flag / residual coefficients -----------------------------------

    pub fn decode_coded_block_flag(&mut self, neighbor_a: Option<bool>, neighbor_b: Option<bool>) -> Result<bool> {
        let ctx_idx = residual::coded_block_flag_ctx_idx(self.residual_block_kind, self.mbaff_mode, neighbor_a, neighbor_b);
        self.engine.decision(self.contexts.get_mut(ctx_idx))
    }

    pub fn decode_significant_coeff_flag(&mut self) -> Result<bool> {
        let ctx_idx = residual::significant_coeff_flag_ctx_idx(
            self.residual_block_kind,
            self.mbaff_mode,
            self.level_list_idx,
            self.num_c8x8 as u32,
        );
        self.engine.decision(self.contexts.get_mut(ctx_idx))
    }

    pub fn decode_last_significant_coeff_flag(&mut self) -> Result<bool> {
        let ctx_idx = residual::last_significant_coeff_flag_ctx_idx(
            self.residual_block_kind,
            self.mbaff_mode,
            self.level_list_idx,
            self.num_c8x8 as u32,
        );
        self.engine.decision(self.contexts.get_mut(ctx_idx))
    }

    pub fn decode_coeff_abs_level_minus1(&mut self) -> Result<u32> {
        let ctx_idx = residual::coeff_abs_level_minus1_ctx_idx(
            self.residual_block_kind,
            self.mbaff_mode,
            self.num_decod_abs_level_gt1,
            self.num_decod_abs_level_eq1,
        );
        let u_coff = if self.residual_block_kind.uses_four_minus_one_cap() { 3 } else { 14 };
        let base = ctx_idx;
        let is_chroma_dc = self.residual_block_kind.is_chroma_dc();
        let num_decod_abs_level_gt1 = self.num_decod_abs_level_gt1;
        let value =
            decode_uegk(&mut self.engine, &mut self.contexts, u_coff, 0, |bin_idx| {
                if bin_idx == 0 {
                    base
                }
                else {
                    let cap = if is_chroma_dc { 3 } else { 4 };
                    let high_bin_inc = 5 + cap.min(num_decod_abs_level_gt1);
                    crate::tables::offsets::COEFF_ABS_LEVEL_MINUS1_PREFIX_OFFSET
                        [crate::tables::offsets::block_kind_factor(self.residual_block_kind, self.mbaff_mode)]
                        as usize
                        + high_bin_inc as usize
                }
            })?;

        if value > 0 {
            self.num_decod_abs_level_gt1 += 1;
        }
        else {
            self.num_decod_abs_level_eq1 += 1;
        }
        Ok(value)
    }

    pub fn decode_coeff_sign_flag(&mut self) -> Result<bool> {
        Ok(decode_fl_bypass(&mut self.engine, fixed_length_bits(1))? != 0)
    }

    pub fn decode_end_of_slice_flag(&mut self) -> Result<bool> {
        self.engine.terminate()
    }
}
