// h264-cabac
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The binary arithmetic decoding engine (H.264 §9.3.3.2).
//!
//! Three primitives are exposed: [`Engine::decision`] (context-adaptive),
//! [`Engine::bypass`] (equiprobable), and [`Engine::terminate`] (the
//! end-of-slice probe). All three may renormalize the range register by
//! pulling fresh bits from the [`BitSource`].

use entropy_core::{BitSource, Result};

use crate::context::ContextModel;
use crate::tables::range_lps::RANGE_TAB_LPS;
use crate::tables::transitions::{TRANS_IDX_LPS, TRANS_IDX_MPS};

/// Owns the two arithmetic registers and drives them against a caller's
/// [`BitSource`]. Does not own the context table: callers pass the
/// context model for each `decision` call, which keeps the engine
/// reusable for contexts that live in different tables (e.g. the
/// decoder's single 1024-entry table, sliced by `ctxIdx`).
pub struct Engine<'b, B: BitSource> {
    bit_source: &'b mut B,
    cod_i_range: u32,
    cod_i_offset: u32,
}

impl<'b, B: BitSource> Engine<'b, B> {
    /// Initializes `codIRange` to 510 and `codIOffset` to the value the
    /// caller already read from the first 9 raw bits of the slice data
    /// (H.264 §9.3.1.2). The 9-bit read itself is external to the
    /// engine; use [`read_initial_offset`] to perform it against the
    /// same bit source.
    pub fn new(bit_source: &'b mut B, initial_offset: u32) -> Self {
        Engine { bit_source, cod_i_range: 510, cod_i_offset: initial_offset }
    }

    #[cfg(test)]
    fn with_state(bit_source: &'b mut B, cod_i_range: u32, cod_i_offset: u32) -> Self {
        Engine { bit_source, cod_i_range, cod_i_offset }
    }

    /// `DecodeDecision` (H.264 §9.3.3.2.1): decodes one context-adaptive
    /// bin, mutating `ctx` in place.
    pub fn decision(&mut self, ctx: &mut ContextModel) -> Result<bool> {
        let q_code_idx = ((self.cod_i_range >> 6) & 3) as usize;
        let cod_i_range_lps = RANGE_TAB_LPS[ctx.p_state_idx as usize][q_code_idx] as u32;

        self.cod_i_range -= cod_i_range_lps;

        let bin = if self.cod_i_offset >= self.cod_i_range {
            let bin = !ctx.mps_value;
            self.cod_i_offset -= self.cod_i_range;
            self.cod_i_range = cod_i_range_lps;

            if ctx.p_state_idx == 0 {
                ctx.mps_value = !ctx.mps_value;
            }
            ctx.p_state_idx = TRANS_IDX_LPS[ctx.p_state_idx as usize];

            bin
        }
        else {
            ctx.p_state_idx = TRANS_IDX_MPS[ctx.p_state_idx as usize];
            ctx.mps_value
        };

        self.renormalize()?;

        Ok(bin)
    }

    /// `DecodeBypass` (H.264 §9.3.3.2.3): decodes one equiprobable bin.
    /// Never renormalizes, since `codIRange` does not change.
    pub fn bypass(&mut self) -> Result<bool> {
        self.cod_i_offset = (self.cod_i_offset << 1) | self.bit_source.read_bit()? as u32;

        if self.cod_i_offset >= self.cod_i_range {
            self.cod_i_offset -= self.cod_i_range;
            Ok(true)
        }
        else {
            Ok(false)
        }
    }

    /// `DecodeTerminate` (H.264 §9.3.3.2.4): probes for the end of the
    /// slice. Returns `true` when the stream signals termination.
    pub fn terminate(&mut self) -> Result<bool> {
        self.cod_i_range -= 2;

        if self.cod_i_offset >= self.cod_i_range {
            Ok(true)
        }
        else {
            self.renormalize()?;
            Ok(false)
        }
    }

    /// `RenormD` (H.264 §9.3.3.2.2).
    fn renormalize(&mut self) -> Result<()> {
        while self.cod_i_range < 256 {
            self.cod_i_range <<= 1;
            self.cod_i_offset = (self.cod_i_offset << 1) | self.bit_source.read_bit()? as u32;
        }

        Ok(())
    }

    #[cfg(test)]
    fn invariant_holds(&self) -> bool {
        (256..=1023).contains(&self.cod_i_range) && self.cod_i_offset < self.cod_i_range
    }
}

/// Reads the 9 raw bits `codIOffset` is initialized from, immediately
/// before constructing the engine (H.264 §9.3.1.2).
pub fn read_initial_offset<B: BitSource>(bit_source: &mut B) -> Result<u32> {
    let mut offset = 0u32;
    for _ in 0..9 {
        offset = (offset << 1) | bit_source.read_bit()? as u32;
    }
    Ok(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entropy_core::Error;

    struct VecBitSource {
        bits: Vec<bool>,
        pos: usize,
    }

    impl VecBitSource {
        fn from_bytes(bytes: &[u8]) -> Self {
            let mut bits = Vec::with_capacity(bytes.len() * 8);
            for byte in bytes {
                for i in (0..8).rev() {
                    bits.push((byte >> i) & 1 != 0);
                }
            }
            VecBitSource { bits, pos: 0 }
        }
    }

    impl BitSource for VecBitSource {
        fn read_bit(&mut self) -> Result<bool> {
            let bit = *self.bits.get(self.pos).ok_or(Error::BitstreamExhausted)?;
            self.pos += 1;
            Ok(bit)
        }
    }

    fn ctx(p_state_idx: u8, mps_value: bool) -> ContextModel {
        ContextModel { p_state_idx, mps_value }
    }

    #[test]
    fn read_initial_offset_consumes_nine_bits() {
        let mut src = VecBitSource::from_bytes(&[0xFF, 0xFF]);
        let offset = read_initial_offset(&mut src).unwrap();
        assert_eq!(offset, 0b1_1111_1111);
        assert_eq!(src.pos, 9);
    }

    #[test]
    fn engine_construction_sets_initial_range() {
        let mut src = VecBitSource::from_bytes(&[0xFF, 0xFF]);
        let offset = read_initial_offset(&mut src).unwrap();
        let engine = Engine::new(&mut src, offset);
        assert_eq!(engine.cod_i_range, 510);
        assert!(engine.invariant_holds());
    }

    #[test]
    fn terminate_detects_end_of_slice() {
        let mut src = VecBitSource::from_bytes(&[0xFF, 0xFF, 0xFF]);
        let mut engine = Engine::with_state(&mut src, 256, 255);
        assert!(engine.terminate().unwrap());
    }

    #[test]
    fn terminate_renormalizes_when_not_at_end() {
        let mut src = VecBitSource::from_bytes(&[0x00, 0x00, 0x00]);
        let mut engine = Engine::with_state(&mut src, 1000, 0);
        assert!(!engine.terminate().unwrap());
        assert!(engine.invariant_holds());
    }

    #[test]
    fn decision_keeps_range_and_offset_in_bounds() {
        let mut src = VecBitSource::from_bytes(&[0x5A; 16]);
        let offset = read_initial_offset(&mut src).unwrap();
        let mut engine = Engine::new(&mut src, offset);
        let mut model = ctx(30, true);

        for _ in 0..20 {
            let _ = engine.decision(&mut model).unwrap();
            assert!(engine.invariant_holds());
            assert!(model.p_state_idx <= 63);
        }
    }

    #[test]
    fn bypass_never_changes_range() {
        let mut src = VecBitSource::from_bytes(&[0xA5; 4]);
        let offset = read_initial_offset(&mut src).unwrap();
        let mut engine = Engine::new(&mut src, offset);
        let range_before = engine.cod_i_range;
        let _ = engine.bypass().unwrap();
        assert_eq!(engine.cod_i_range, range_before);
    }

    #[test]
    fn exhausted_source_surfaces_bitstream_exhausted() {
        let mut src = VecBitSource::from_bytes(&[0xFF]);
        let err = read_initial_offset(&mut src).unwrap_err();
        assert!(matches!(err, Error::BitstreamExhausted));
    }

    proptest::proptest! {
        #[test]
        fn prop_decision_sequence_preserves_invariants(
            bits in proptest::collection::vec(proptest::bool::ANY, 1..500),
            p_state_idx in 0u8..64,
            mps in proptest::bool::ANY,
        ) {
            let bytes: Vec<u8> = bits
                .chunks(8)
                .map(|chunk| {
                    chunk.iter().enumerate().fold(0u8, |acc, (i, &b)| acc | ((b as u8) << (7 - i)))
                })
                .collect();
            let mut src = VecBitSource::from_bytes(&bytes);
            if let Ok(offset) = read_initial_offset(&mut src) {
                let mut engine = Engine::new(&mut src, offset);
                let mut model = ctx(p_state_idx, mps);
                for _ in 0..10 {
                    if engine.decision(&mut model).is_err() {
                        break;
                    }
                    proptest::prop_assert!(model.p_state_idx <= 63);
                    proptest::prop_assert!(engine.invariant_holds());
                }
            }
        }
    }
}
