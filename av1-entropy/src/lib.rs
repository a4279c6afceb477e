// av1-entropy
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

//! The AV1 symbol decoder (AOM AV1 spec §8.2): a 15-bit range coder
//! decoding multi-symbol values against caller-owned CDFs, with
//! in-place CDF adaptation. Independent of `h264-cabac`; the two crates
//! share only `entropy-core`'s error type.

mod decoder;

pub use decoder::Av1Decoder;
