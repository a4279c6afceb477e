// h264-cabac
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

//! H.264 context-adaptive binary arithmetic coding (CABAC), as specified
//! by ITU-T H.264 §9.3: the binary arithmetic engine, the 1024-entry
//! context model table and its per-slice initialization, and the
//! binarization schemes and `ctxIdxInc` derivations for every CABAC
//! syntax element.
//!
//! The decoder is generic over two external collaborators supplied by
//! the caller: [`entropy_core::BitSource`] (where the coded bits come
//! from) and [`provider::MacroblockProvider`] (the macroblock graph:
//! neighbor derivation, prediction modes, and already-parsed
//! macroblocks). This crate owns only the entropy-coding math; it does
//! not parse NAL units, build a macroblock graph, or perform
//! reconstruction.
//!
//! ```no_run
//! use h264_cabac::context::SliceType;
//! use h264_cabac::decoder::CabacDecoder;
//! use h264_cabac::engine::read_initial_offset;
//!
//! # fn example<B: entropy_core::BitSource, P: h264_cabac::provider::MacroblockProvider>(
//! #     mut bit_source: B,
//! #     provider: &P,
//! # ) -> entropy_core::Result<()> {
//! let initial_offset = read_initial_offset(&mut bit_source)?;
//! let mut decoder = CabacDecoder::new(&mut bit_source, provider, SliceType::I, 26, initial_offset);
//! let _mb_type = decoder.decode_mb_type()?;
//! # Ok(())
//! # }
//! ```

pub mod binarization;
pub mod context;
pub mod decoder;
pub mod engine;
pub mod provider;
mod tables;

pub use context::{ContextModel, ContextTable, SliceType};
pub use decoder::{CabacDecoder, DecodedMbType};
pub use engine::{read_initial_offset, Engine};
pub use provider::{MacroblockDescriptor, MacroblockProvider, MbaffMode, Neighbor, NeighborPartition, ResidualBlockKind};
