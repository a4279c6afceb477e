// h264-cabac
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static tables from H.264 Annex 9: context initialization coefficients,
//! the LPS range/transition tables, and per-element `ctxIdxOffset`s.

pub(crate) mod init;
pub(crate) mod offsets;
pub(crate) mod range_lps;
pub(crate) mod transitions;
