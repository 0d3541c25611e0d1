//! Rx descriptor write-back decoding and packet trace records.

use serde::{Deserialize, Serialize};

/// Second quadword of a written-back AVF Rx descriptor.
///
/// Layout: status in bits 0-18, error in bits 19-26, packet type in bits
/// 30-37 and packet length from bit 38 upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RxDescQw1(u64);

impl RxDescQw1 {
    pub const STATUS_DD: u64 = 1 << 0;
    pub const STATUS_EOP: u64 = 1 << 1;
    pub const STATUS_BITS: u32 = 19;
    pub const ERROR_SHIFT: u32 = 19;
    pub const PTYPE_SHIFT: u32 = 30;
    pub const LEN_SHIFT: u32 = 38;

    pub const fn new(raw: u64) -> Self {
        RxDescQw1(raw)
    }

    /// Builds a descriptor word from its subfields.
    pub const fn from_fields(status: u32, error: u8, ptype: u8, len: u32) -> Self {
        RxDescQw1(
            (status as u64 & ((1 << Self::STATUS_BITS) - 1))
                | (error as u64) << Self::ERROR_SHIFT
                | (ptype as u64) << Self::PTYPE_SHIFT
                | (len as u64) << Self::LEN_SHIFT,
        )
    }

    pub const fn raw(&self) -> u64 {
        self.0
    }

    pub const fn status(&self) -> u32 {
        (self.0 & ((1 << Self::STATUS_BITS) - 1)) as u32
    }

    pub const fn error(&self) -> u8 {
        ((self.0 >> Self::ERROR_SHIFT) & 0xff) as u8
    }

    pub const fn ptype(&self) -> u8 {
        ((self.0 >> Self::PTYPE_SHIFT) & 0xff) as u8
    }

    pub const fn pkt_len(&self) -> u32 {
        (self.0 >> Self::LEN_SHIFT) as u32
    }

    pub const fn is_eop(&self) -> bool {
        self.0 & Self::STATUS_EOP != 0
    }
}

impl From<u64> for RxDescQw1 {
    fn from(raw: u64) -> Self {
        RxDescQw1(raw)
    }
}

/// A captured trace of one received packet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DescriptorTrace {
    /// Hardware interface index the packet arrived on.
    pub hw_if_index: u32,
    /// Rx queue id.
    pub qid: u16,
    /// Index into the input node's next-node table.
    pub next_index: u32,
    pub flow_id: u32,
    /// Descriptor words of the chain, in ring order.
    #[serde(default)]
    pub qw1s: Vec<RxDescQw1>,
}

impl DescriptorTrace {
    /// Maximum number of descriptors a single packet may span.
    pub const MAX_DESC_IN_CHAIN: usize = 5;

    /// Returns the words that make up the packet: up to and including the
    /// first EOP word, capped at [`Self::MAX_DESC_IN_CHAIN`].
    pub fn chain(&self) -> &[RxDescQw1] {
        let bounded = &self.qw1s[..self.qw1s.len().min(Self::MAX_DESC_IN_CHAIN)];
        match bounded.iter().position(RxDescQw1::is_eop) {
            Some(eop) => &bounded[..=eop],
            None => bounded,
        }
    }

    /// Returns true if the chain ends with an EOP word within the bound.
    pub fn is_complete(&self) -> bool {
        self.chain().last().is_some_and(RxDescQw1::is_eop)
    }
}
