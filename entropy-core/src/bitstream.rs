// entropy-core
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The bit source collaborator.
//!
//! Neither coder in this workspace owns bitstream I/O: both the CABAC
//! engine and the AV1 symbol decoder pull single bits from an abstract
//! source supplied by the caller. This module only defines the contract;
//! a real source (reading from a NAL unit, an OBU, a network socket, ...)
//! lives outside this workspace.

use crate::error::Result;

/// A one-bit-at-a-time bitstream reader, consumed by both entropy coders.
///
/// Implementations read bits most-significant-bit first within each
/// underlying byte, which is what both H.264 and AV1 assume of their
/// input. Reading past the end of the underlying stream returns
/// [`crate::Error::BitstreamExhausted`].
pub trait BitSource {
    fn read_bit(&mut self) -> Result<bool>;
}

/// Asynchronous counterpart to [`BitSource`] for I/O-bound sources.
///
/// The engine itself is synchronous; this trait exists so a caller can
/// build an async bit source and drive the synchronous engine from an
/// executor that prefetches bits ahead of the decode loop. Gated behind
/// the `futures` feature since most callers read from an in-memory NAL
/// unit or OBU and never need it.
#[cfg(feature = "futures")]
#[async_trait::async_trait]
pub trait AsyncBitSource {
    async fn read_bit(&mut self) -> Result<bool>;
}
