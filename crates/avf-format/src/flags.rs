//! Bitmask to label list decoding.

use crate::sink::{Render, TextSink};
use avf_types::LabelTable;
use std::fmt;

/// Returns the indices of the set bits in `mask`, lowest first.
pub fn set_bits(mask: u32) -> impl Iterator<Item = u32> {
    (0..32).filter(move |bit| mask & (1u32 << *bit) != 0)
}

/// One decoded bit: its table label, or the raw index if unmapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagLabel {
    Known(&'static str),
    Unknown(u32),
}

impl fmt::Display for FlagLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagLabel::Known(label) => f.write_str(label),
            FlagLabel::Unknown(bit) => write!(f, "unknown({})", bit),
        }
    }
}

/// Decodes every set bit of `mask` against `table`, in ascending bit order.
pub fn decode(mask: u32, table: &LabelTable) -> impl Iterator<Item = FlagLabel> + '_ {
    set_bits(mask).map(move |bit| match table.get(bit) {
        Some(label) => FlagLabel::Known(label),
        None => FlagLabel::Unknown(bit),
    })
}

/// Bits of `mask` that `table` has no label for.
pub fn unmapped_bits(mask: u32, table: &LabelTable) -> u32 {
    mask & !table.known_mask()
}

/// Renders a bitmask as space-separated labels.
///
/// A zero mask renders nothing.
#[derive(Debug, Clone, Copy)]
pub struct Flags<'a> {
    mask: u32,
    table: &'a LabelTable,
}

impl<'a> Flags<'a> {
    pub fn new(mask: u32, table: &'a LabelTable) -> Self {
        Flags { mask, table }
    }
}

impl Render for Flags<'_> {
    fn render(&self, out: &mut TextSink) {
        let unknown = unmapped_bits(self.mask, self.table);
        if unknown != 0 {
            tracing::debug!(table = self.table.name(), unknown, "unmapped bits set");
        }

        for (i, label) in decode(self.mask, self.table).enumerate() {
            if i > 0 {
                out.push(' ');
            }
            write!(out, "{}", label);
        }
    }
}
