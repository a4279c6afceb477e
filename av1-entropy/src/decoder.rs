// av1-entropy
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The AV1 symbol decoder: a 15-bit range coder over caller-owned CDFs
//! (AOM AV1 spec §8.2). Independent of the H.264 CABAC stack in
//! `h264-cabac` — this decoder owns its own byte buffer rather than
//! pulling one bit at a time from a [`entropy_core::BitSource`], since
//! the AV1 spec's `init_symbol`/`read_symbol` operate on a window
//! refilled from a byte slice directly.

use entropy_core::Result;

/// Smallest probability mass any CDF entry is allowed to represent
/// (AOM AV1 §8.2.6, `EC_MIN_PROB`).
const EC_MIN_PROB: u32 = 4;

/// `symbolRange`'s fixed width: 15 bits.
const WINDOW_BITS: u32 = 15;
const WINDOW_SIZE: u32 = 1 << WINDOW_BITS;
const WINDOW_MASK: u32 = WINDOW_SIZE - 1;

/// Decodes AV1 symbols against caller-supplied CDFs, adapting each CDF
/// in place after every decode unless `disable_cdf_update` was set at
/// construction.
///
/// Holds no heap allocation: `buf` is borrowed from the caller for the
/// decoder's lifetime.
pub struct Av1Decoder<'b> {
    buf: &'b [u8],
    bit_pos: usize,
    symbol_value: u32,
    symbol_range: u32,
    symbol_max_bits: i64,
    disable_cdf_update: bool,
}

impl<'b> Av1Decoder<'b> {
    /// `init_symbol` (AOM AV1 §8.2.2): reads `min(sz*8, 15)` bits from
    /// `buf` to prime the window.
    pub fn new(buf: &'b [u8], disable_cdf_update: bool) -> Self {
        let sz = buf.len();
        let num_bits = (sz as u32 * 8).min(WINDOW_BITS);

        let mut raw = 0u32;
        let mut bit_pos = 0usize;
        for _ in 0..num_bits {
            raw = (raw << 1) | read_bit_at(buf, bit_pos) as u32;
            bit_pos += 1;
        }
        let padded_buf = raw << (WINDOW_BITS - num_bits);
        let symbol_value = WINDOW_MASK ^ padded_buf;

        log::debug!("av1-entropy: init_symbol sz={sz} num_bits={num_bits}");

        Av1Decoder {
            buf,
            bit_pos,
            symbol_value,
            symbol_range: WINDOW_SIZE,
            symbol_max_bits: 8 * sz as i64 - WINDOW_BITS as i64,
            disable_cdf_update,
        }
    }

    fn next_bit(&mut self) -> bool {
        let bit = read_bit_at(self.buf, self.bit_pos);
        self.bit_pos += 1;
        bit
    }

    /// `read_symbol` (AOM AV1 §8.2.6): decodes one symbol against `cdf`,
    /// an ascending array of `n + 1` entries: `cdf[0..n]` are cumulative
    /// frequencies out of `1 << 15` (`cdf[n - 1] == 1 << 15`), and the
    /// trailing `cdf[n]` is an adaptation-rate counter owned by this
    /// function, not a probability. Adapts `cdf` in place unless
    /// `disable_cdf_update` was set at construction.
    pub fn read_symbol(&mut self, cdf: &mut [u16], n: usize) -> Result<usize> {
        let mut prev_cur = self.symbol_range;
        let mut symbol = 0usize;
        let cur = loop {
            let cur = (((self.symbol_range >> 8) * (((1u32 << WINDOW_BITS) - cdf[symbol] as u32) >> 6)) >> 1)
                + EC_MIN_PROB * (n - symbol - 1) as u32;

            if self.symbol_value < cur {
                prev_cur = cur;
                symbol += 1;
            }
            else {
                break cur;
            }
        };

        self.symbol_range = prev_cur - cur;
        self.symbol_value -= cur;
        self.normalize()?;

        if !self.disable_cdf_update {
            self.adapt_cdf(cdf, n, symbol);
        }

        Ok(symbol)
    }

    fn adapt_cdf(&self, cdf: &mut [u16], n: usize, symbol: usize) {
        let count = cdf[n];
        let rate = 3 + (count > 15) as u16 + (count > 31) as u16 + (31 - (n as u32).leading_zeros()).min(2) as u16;

        for i in 0..n - 1 {
            if i < symbol {
                cdf[i] += (WINDOW_SIZE as u16 - cdf[i]) >> rate;
            }
            else {
                cdf[i] -= cdf[i] >> rate;
            }
        }
        if count < 32 {
            cdf[n] += 1;
        }
    }

    /// Renormalizes `symbolRange` back into `[1 << 14, 1 << 15)`,
    /// pulling fresh bits (zero-padded once the buffer is exhausted).
    fn normalize(&mut self) -> Result<()> {
        let floor_log2 = 31 - self.symbol_range.leading_zeros();
        let bits = WINDOW_BITS.saturating_sub(floor_log2);
        if bits == 0 {
            return Ok(());
        }

        let to_read = bits.min(self.symbol_max_bits.max(0) as u32);
        let mut new_bits = 0u32;
        for _ in 0..to_read {
            new_bits = (new_bits << 1) | self.next_bit() as u32;
        }
        new_bits <<= bits - to_read;

        self.symbol_range <<= bits;
        self.symbol_value = ((self.symbol_value << bits) | new_bits) & WINDOW_MASK;
        self.symbol_max_bits -= bits as i64;

        Ok(())
    }

    /// `read_bool` (AOM AV1 §8.2.4): a fixed 50/50 split that never
    /// adapts, used both directly and as the building block for
    /// [`Self::read_literal`].
    pub fn read_boolean(&mut self) -> Result<bool> {
        let mut cdf = [1u16 << 14, 1u16 << 15, 0];
        let was_disabled = self.disable_cdf_update;
        self.disable_cdf_update = true;
        let symbol = self.read_symbol(&mut cdf, 2)?;
        self.disable_cdf_update = was_disabled;
        Ok(symbol == 0)
    }

    /// `read_literal(n)` (AOM AV1 §8.2.5): `n` equiprobable bits, MSB
    /// first.
    pub fn read_literal(&mut self, n: u32) -> Result<u32> {
        let mut value = 0;
        for _ in 0..n {
            value = (value << 1) | self.read_boolean()? as u32;
        }
        Ok(value)
    }
}

fn read_bit_at(buf: &[u8], bit_pos: usize) -> bool {
    let byte_idx = bit_pos / 8;
    if byte_idx >= buf.len() {
        return false;
    }
    let bit_idx = 7 - (bit_pos % 8);
    (buf[byte_idx] >> bit_idx) & 1 != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_never_panics_on_empty_buffer() {
        let decoder = Av1Decoder::new(&[], true);
        assert_eq!(decoder.symbol_range, WINDOW_SIZE);
    }

    #[test]
    fn symbol_range_stays_in_window() {
        let mut decoder = Av1Decoder::new(&[0xA5, 0x3C, 0xFF, 0x00], false);
        let mut cdf = [8000u16, 20000, 1u16 << 15, 0];
        for _ in 0..8 {
            let symbol = decoder.read_symbol(&mut cdf, 3).unwrap();
            assert!(symbol < 3);
            assert!(decoder.symbol_range <= WINDOW_SIZE);
            assert!(decoder.symbol_value < WINDOW_SIZE);
        }
    }

    #[test]
    fn disabled_cdf_update_leaves_cdf_untouched() {
        let mut decoder = Av1Decoder::new(&[0x5A, 0xA5], true);
        let mut cdf = [16384u16, 1u16 << 15, 0];
        let before = cdf;
        let _ = decoder.read_symbol(&mut cdf, 2).unwrap();
        assert_eq!(cdf, before);
    }

    #[test]
    fn read_literal_consumes_n_booleans_worth_of_state() {
        let mut decoder = Av1Decoder::new(&[0xFF, 0x00, 0xFF, 0x00], true);
        let value = decoder.read_literal(4).unwrap();
        assert!(value <= 0b1111);
    }

    proptest::proptest! {
        #[test]
        fn prop_read_symbol_never_panics(bytes in proptest::collection::vec(proptest::num::u8::ANY, 0..32)) {
            let mut decoder = Av1Decoder::new(&bytes, true);
            let mut cdf = [10000u16, 20000, 1u16 << 15, 0];
            for _ in 0..16 {
                let symbol = decoder.read_symbol(&mut cdf, 3).unwrap();
                proptest::prop_assert!(symbol < 3);
                proptest::prop_assert!(decoder.symbol_range <= WINDOW_SIZE);
            }
        }
    }
}
