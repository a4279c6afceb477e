// entropy-core
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The crate-wide error type.
//!
//! Every fallible operation in this workspace returns [`Result`]. Errors
//! are never retried and never recovered from locally: once a decoder
//! returns an `Err`, its internal state is undefined and the caller must
//! discard it.

use thiserror::Error as ThisError;

/// All errors that can be raised while decoding a CABAC or AV1 entropy
/// stream.
#[derive(ThisError, Debug)]
pub enum Error {
    /// The bit source ran out of bits before the decoder was done with it.
    #[error("bitstream exhausted")]
    BitstreamExhausted,

    /// The stream violates an invariant a well-formed stream must satisfy
    /// (e.g. a unary code ran past its cap).
    #[error("malformed stream: {0}")]
    MalformedStream(&'static str),

    /// The macroblock provider was asked for a macroblock that must exist
    /// (usually the macroblock currently being parsed) and returned
    /// nothing.
    #[error("missing neighbor macroblock at address {0}")]
    MissingNeighbor(u32),

    /// `DecodeMbType` was invoked against a slice type it has no tree for.
    #[error("invalid slice type for operation: {0}")]
    InvalidSliceTypeForOperation(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;

/// Convenience constructor mirroring the `decode_error` helpers in
/// established entropy/bitstream codec crates.
pub fn malformed_stream_error<T>(desc: &'static str) -> Result<T> {
    Err(Error::MalformedStream(desc))
}
