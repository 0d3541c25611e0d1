//! VLAN capability rendering.

use crate::flags::Flags;
use crate::sink::{Render, TextSink};
use avf_types::{LabelTable, VlanCaps, VlanSupport, VlanSupportedCaps, VLAN_SUPPORT_LABELS};

/// Renders one VLAN support mask.
///
/// `0` renders as `unsupported`; anything else is decoded bit by bit.
#[derive(Debug, Clone, Copy)]
pub struct VlanSupportView<'a> {
    support: VlanSupport,
    table: &'a LabelTable,
}

impl VlanSupportView<'static> {
    pub fn new(support: VlanSupport) -> Self {
        Self::with_table(support, &VLAN_SUPPORT_LABELS)
    }
}

impl<'a> VlanSupportView<'a> {
    pub fn with_table(support: VlanSupport, table: &'a LabelTable) -> Self {
        VlanSupportView { support, table }
    }
}

impl Render for VlanSupportView<'_> {
    fn render(&self, out: &mut TextSink) {
        if !self.support.is_supported() {
            out.push_str("unsupported");
            return;
        }
        out.put(&Flags::new(self.support.bits(), self.table));
    }
}

/// Renders the outer/inner pair, one per line.
#[derive(Debug, Clone, Copy)]
pub struct VlanSupportedCapsView<'a>(pub &'a VlanSupportedCaps);

impl Render for VlanSupportedCapsView<'_> {
    fn render(&self, out: &mut TextSink) {
        let indent = out.indent();
        out.push_str("outer: ");
        out.put(&VlanSupportView::new(self.0.outer));
        out.newline(indent);
        out.push_str("inner: ");
        out.put(&VlanSupportView::new(self.0.inner));
    }
}

/// Renders the full negotiated VLAN capability tree.
#[derive(Debug, Clone, Copy)]
pub struct VlanCapsView<'a>(pub &'a VlanCaps);

impl Render for VlanCapsView<'_> {
    fn render(&self, out: &mut TextSink) {
        let indent = out.indent();
        let filtering = &self.0.filtering;
        let offloads = &self.0.offloads;

        out.push_str("filtering:");
        out.newline(indent + 2);
        out.push_str("support:");
        out.newline(indent + 4);
        out.put(&VlanSupportedCapsView(&filtering.filtering_support));
        out.newline(indent + 4);
        write!(out, "max-filters: {}", filtering.max_filters);
        out.newline(indent + 4);
        write!(out, "ethertype-init: 0x{:x}", filtering.ethertype_init);

        out.newline(indent);
        out.push_str("offloads:");
        out.newline(indent + 2);
        out.push_str("stripping support:");
        out.newline(indent + 4);
        out.put(&VlanSupportedCapsView(&offloads.stripping_support));
        out.newline(indent + 2);
        out.push_str("insertion support:");
        out.newline(indent + 4);
        out.put(&VlanSupportedCapsView(&offloads.insertion_support));
        out.newline(indent + 4);
        write!(out, "ethertype-init: 0x{:x}", offloads.ethertype_init);
        out.newline(indent + 4);
        write!(out, "ethertype-match: 0x{:x}", offloads.ethertype_match);
    }
}
