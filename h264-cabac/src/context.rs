// h264-cabac
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The context model array and its per-slice initialization.

use entropy_core::bits::clip3;

use crate::tables::init::{INIT_I_SLICE, INIT_PB_IDC0, INIT_PB_IDC1, INIT_PB_IDC2};

/// Number of contexts addressed by `ctxIdx` across the full decoder
/// lifetime. Fixed per spec.
pub const NUM_CONTEXTS: usize = 1024;

/// The slice type a CABAC decoder was constructed for. Distinct from the
/// *effective* slice type that `DecodeMbType` can return for an
/// individual macroblock (SI and SP slices reuse the I- and P-slice
/// trees respectively but still report their own type).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceType {
    I,
    Si,
    P,
    Sp,
    B,
}

impl SliceType {
    fn uses_i_slice_table(self) -> bool {
        matches!(self, SliceType::I | SliceType::Si)
    }
}

/// A single context model: an adaptive probability state plus the
/// identity of the currently most-probable symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextModel {
    pub p_state_idx: u8,
    pub mps_value: bool,
}

impl ContextModel {
    /// H.264 §9.3.1.1: derive a context's initial state from its
    /// `(m, n)` coefficients and the slice QP.
    pub(crate) fn init(m: i32, n: i32, qp: i32) -> Self {
        let pre_ctx_state = clip3(1, 126, ((m * clip3(0, 51, qp)) >> 4) + n);

        if pre_ctx_state <= 63 {
            ContextModel { p_state_idx: (63 - pre_ctx_state) as u8, mps_value: false }
        }
        else {
            ContextModel { p_state_idx: (pre_ctx_state - 64) as u8, mps_value: true }
        }
    }
}

/// The fixed-size context table owned by a [`crate::decoder::CabacDecoder`].
///
/// Indexing is flat: syntax-element code computes
/// `ctxIdx = ctxIdxOffset + ctxIdxInc` and indexes directly into this
/// table. The table never grows or shrinks after construction.
pub struct ContextTable {
    contexts: [ContextModel; NUM_CONTEXTS],
}

impl ContextTable {
    /// Builds a context table for the given slice type, slice QP, and
    /// (for P/SP/B slices) `cabac_init_idc`. A pure function of its
    /// inputs: identical inputs always produce a bit-identical table.
    pub fn new(slice_type: SliceType, qp: i32, cabac_init_idc: u8) -> Self {
        let table: &[(i16, i16); NUM_CONTEXTS] = if slice_type.uses_i_slice_table() {
            &INIT_I_SLICE
        }
        else {
            match cabac_init_idc {
                0 => &INIT_PB_IDC0,
                1 => &INIT_PB_IDC1,
                _ => &INIT_PB_IDC2,
            }
        };

        let mut contexts = [ContextModel { p_state_idx: 0, mps_value: false }; NUM_CONTEXTS];
        for (ctx, &(m, n)) in contexts.iter_mut().zip(table.iter()) {
            *ctx = ContextModel::init(m as i32, n as i32, qp);
        }

        log::debug!(
            "cabac: initialized context table (slice_type={slice_type:?}, qp={qp}, cabac_init_idc={cabac_init_idc})"
        );

        ContextTable { contexts }
    }

    #[inline]
    pub fn get(&self, ctx_idx: usize) -> &ContextModel {
        &self.contexts[ctx_idx]
    }

    #[inline]
    pub fn get_mut(&mut self, ctx_idx: usize) -> &mut ContextModel {
        &mut self.contexts[ctx_idx]
    }
}

impl std::ops::Index<usize> for ContextTable {
    type Output = ContextModel;

    fn index(&self, ctx_idx: usize) -> &ContextModel {
        self.get(ctx_idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_state_is_always_in_range() {
        for qp in 0..=51 {
            for m in -30..30 {
                for n in -64..64 {
                    let ctx = ContextModel::init(m, n, qp);
                    assert!(ctx.p_state_idx <= 63);
                }
            }
        }
    }

    #[test]
    fn full_table_construction_stays_in_range() {
        for &slice_type in &[SliceType::I, SliceType::P, SliceType::B] {
            for idc in 0..3 {
                let table = ContextTable::new(slice_type, 26, idc);
                for ctx in table.contexts.iter() {
                    assert!(ctx.p_state_idx <= 63);
                }
            }
        }
    }

    #[test]
    fn construction_is_deterministic() {
        let a = ContextTable::new(SliceType::I, 26, 0);
        let b = ContextTable::new(SliceType::I, 26, 0);
        assert!(a.contexts.iter().zip(b.contexts.iter()).all(|(x, y)| x == y));
    }

    proptest::proptest! {
        #[test]
        fn prop_init_state_in_range(m in -30i32..30, n in -64i32..64, qp in 0i32..=51) {
            let ctx = ContextModel::init(m, n, qp);
            proptest::prop_assert!(ctx.p_state_idx <= 63);
        }
    }
}
