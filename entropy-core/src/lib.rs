// entropy-core
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

//! Shared primitives consumed by both of the entropy coders in this
//! workspace: a single [`Error`]/[`Result`] pair, the [`BitSource`]
//! collaborator trait that every decoder reads bits through, and a
//! handful of bit-twiddling helpers used on both sides of the workspace.

pub mod bits;
pub mod bitstream;
pub mod error;

pub use bitstream::BitSource;
#[cfg(feature = "futures")]
pub use bitstream::AsyncBitSource;
pub use error::{Error, Result};
