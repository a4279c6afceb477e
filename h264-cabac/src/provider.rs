// h264-cabac
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The macroblock graph collaborator.
//!
//! Neighbor derivation (H.264 §§6.4.9, 6.4.11.x), prediction-mode
//! computation (§§7.4.5, 7.4.5.2), and macroblock storage are owned by
//! the caller. This module only defines what the binarization layer
//! needs to read from that graph.

use entropy_core::Result;

/// Which of the 14 residual transform-coefficient block kinds
/// (`ctxBlockCat`, H.264 Table 9-42) is currently being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidualBlockKind {
    Intra16x16DcLevel,
    Intra16x16AcLevel,
    LumaLevel4x4,
    ChromaDcLevel,
    ChromaAcLevel,
    LumaLevel8x8,
    CbIntra16x16DcLevel,
    CbIntra16x16AcLevel,
    CbLevel4x4,
    CbLevel8x8,
    CrIntra16x16DcLevel,
    CrIntra16x16AcLevel,
    CrLevel4x4,
    CrLevel8x8,
}

impl ResidualBlockKind {
    pub const ALL: [ResidualBlockKind; 14] = [
        ResidualBlockKind::Intra16x16DcLevel,
        ResidualBlockKind::Intra16x16AcLevel,
        ResidualBlockKind::LumaLevel4x4,
        ResidualBlockKind::ChromaDcLevel,
        ResidualBlockKind::ChromaAcLevel,
        ResidualBlockKind::LumaLevel8x8,
        ResidualBlockKind::CbIntra16x16DcLevel,
        ResidualBlockKind::CbIntra16x16AcLevel,
        ResidualBlockKind::CbLevel4x4,
        ResidualBlockKind::CbLevel8x8,
        ResidualBlockKind::CrIntra16x16DcLevel,
        ResidualBlockKind::CrIntra16x16AcLevel,
        ResidualBlockKind::CrLevel4x4,
        ResidualBlockKind::CrLevel8x8,
    ];

    /// `ctxBlockCat` as used by the per-position significant-coefficient
    /// tables: categories 3, 5, 9, and 13 (the chroma-DC and 8x8 luma/Cb/Cr
    /// categories) use a lookup table instead of `levelListIdx` directly.
    pub(crate) fn uses_position_lookup_table(self) -> bool {
        matches!(
            self,
            ResidualBlockKind::ChromaDcLevel
                | ResidualBlockKind::LumaLevel8x8
                | ResidualBlockKind::CbLevel8x8
                | ResidualBlockKind::CrLevel8x8
        )
    }

    pub(crate) fn is_chroma_dc(self) -> bool {
        matches!(self, ResidualBlockKind::ChromaDcLevel)
    }

    pub(crate) fn uses_four_minus_one_cap(self) -> bool {
        matches!(self, ResidualBlockKind::ChromaDcLevel)
    }
}

/// Whether a macroblock is coded in frame, field, or neither (non-MBAFF)
/// mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MbaffMode {
    Neither,
    Frame,
    Field,
}

/// A macroblock's prediction coding, independent of its exact type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredCoding {
    Intra,
    Inter,
    Pcm,
    Other,
}

/// Exact macroblock type tag, as far as the binarization layer needs to
/// distinguish them for `ctxIdxInc` derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MbTypeTag {
    BDirect16x16,
    BSkip,
    P8x8,
    B8x8,
    PSkip,
    IPcm,
    Si,
    INxN,
    Other,
}

/// A macroblock's prediction mode for a given partition, as returned by
/// the provider's `mb_part_pred_mode`/`sub_mb_pred_mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredMode {
    IntraOther,
    Intra4x4,
    Intra8x8,
    Intra16x16,
    PredL0,
    PredL1,
    BiPred,
    Direct,
    NotAvailable,
}

impl PredMode {
    /// Whether this prediction mode references list X's reference index
    /// (needed by `ref_idx_lX`'s `predModeEqualFlag`).
    pub fn includes_list(self, list1: bool) -> bool {
        match self {
            PredMode::PredL0 => !list1,
            PredMode::PredL1 => list1,
            PredMode::BiPred => true,
            _ => false,
        }
    }
}

/// A read-only snapshot of a macroblock, as owned by the caller's
/// macroblock graph. All fields the binarization layer consults are
/// plain `Copy` data so the decoder never has to allocate or hold a
/// borrow across a `Decode<Element>` call.
#[derive(Debug, Clone, Copy)]
pub struct MacroblockDescriptor {
    pub address: u32,
    pub mb_type: MbTypeTag,
    pub pred_coding: PredCoding,
    pub mbaff_mode: MbaffMode,
    pub transform_size_8x8_flag: bool,
    pub skip_flag: bool,
    pub mbaff_frame_flag: bool,
    /// Coded block pattern; `cbp % 16` is the luma part, `cbp / 16` the
    /// chroma part.
    pub cbp: u8,
}

impl MacroblockDescriptor {
    pub fn cbp_luma(&self) -> u8 {
        self.cbp % 16
    }

    pub fn cbp_chroma(&self) -> u8 {
        self.cbp / 16
    }
}

/// A neighbor lookup result: the descriptor, if the neighbor exists and
/// is available for prediction purposes.
#[derive(Debug, Clone, Copy)]
pub struct Neighbor {
    pub descriptor: Option<MacroblockDescriptor>,
}

impl Neighbor {
    pub fn is_available(&self) -> bool {
        self.descriptor.is_some()
    }
}

/// A neighbor partition lookup result (H.264 §6.4.11.7).
#[derive(Debug, Clone, Copy)]
pub struct NeighborPartition {
    pub descriptor: Option<MacroblockDescriptor>,
    pub mb_part_idx: u8,
    pub sub_mb_part_idx: u8,
}

/// External collaborator that owns the macroblock graph: neighbor
/// derivation, partitioning, prediction modes, and already-parsed
/// macroblock descriptors. The CABAC decoder consults this on every
/// syntax element whose `ctxIdxInc` depends on neighboring state.
pub trait MacroblockProvider {
    /// Returns the macroblock at `address`, if present. Per spec, the
    /// macroblock currently being parsed must be returned as present
    /// even while its syntax elements are still being filled in
    /// (absent-field defaults are acceptable for fields not yet known).
    fn try_get_macroblock(&self, address: u32) -> Option<MacroblockDescriptor>;

    /// Like [`Self::try_get_macroblock`] but for addresses that must
    /// exist (typically the current macroblock). Absence is a logic
    /// error, not a malformed-stream condition.
    fn force_get_macroblock(&self, address: u32) -> Result<MacroblockDescriptor> {
        self.try_get_macroblock(address)
            .ok_or(entropy_core::Error::MissingNeighbor(address))
    }

    fn derive_neighbors(&self, address: u32) -> (Neighbor, Neighbor);

    fn derive_neighbor_partitions(
        &self,
        mb_part_idx: u8,
        curr_sub_mb_type: u8,
        sub_mb_part_idx: u8,
    ) -> (NeighborPartition, NeighborPartition, NeighborPartition, NeighborPartition);

    fn derive_neighbor_4x4_luma(&self, address: u32, blk_idx: u8) -> (Neighbor, Neighbor);
    fn derive_neighbor_4x4_chroma(&self, address: u32, blk_idx: u8) -> (Neighbor, Neighbor);
    fn derive_neighbor_8x8_luma(&self, address: u32, blk_idx: u8) -> (Neighbor, Neighbor);
    fn derive_neighbor_8x8_luma_chroma_array_type3(
        &self,
        address: u32,
        blk_idx: u8,
    ) -> (Neighbor, Neighbor);
    fn derive_neighbor_8x8_chroma_array_type3(
        &self,
        address: u32,
        blk_idx: u8,
    ) -> (Neighbor, Neighbor);

    fn mb_part_pred_mode(&self, descriptor: MacroblockDescriptor, mb_part_idx: u8) -> PredMode;
    fn sub_mb_pred_mode(&self, address: u32, sub_mb_type: u8) -> PredMode;

    fn curr_mb_addr(&self) -> u32;
    fn cabac_init_idc(&self) -> u8;
    fn pps_constrained_intra_pred_flag(&self) -> bool;
    fn current_nal_unit_type(&self) -> u8;
}
