//! Static label tables for bitmask and enumerant decoding.
//!
//! Each table is a sparse, ordered list of `(key, label)` pairs. For the
//! flag tables the key is a bit index (0-31); for the link speed table it
//! is the enumerant value itself.

/// A static mapping from a bit index or enumerant value to a display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelTable {
    name: &'static str,
    entries: &'static [(u32, &'static str)],
}

impl LabelTable {
    /// Creates a table from a static list of `(key, label)` entries.
    pub const fn new(name: &'static str, entries: &'static [(u32, &'static str)]) -> Self {
        LabelTable { name, entries }
    }

    /// Returns the table name (used in log output only).
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the label for `key`, if the table has one.
    pub fn get(&self, key: u32) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, label)| *label)
    }

    /// Returns the raw entries in declaration order.
    pub const fn entries(&self) -> &'static [(u32, &'static str)] {
        self.entries
    }

    /// Returns the mask of every bit index present in the table.
    ///
    /// Only meaningful for bit-indexed tables.
    pub fn known_mask(&self) -> u32 {
        self.entries
            .iter()
            .filter(|(k, _)| *k < 32)
            .fold(0u32, |mask, (k, _)| mask | (1u32 << *k))
    }
}

/// Driver-side device state flags, keyed by bit index.
pub static DEVICE_FLAG_LABELS: LabelTable = LabelTable::new(
    "device-flags",
    &[
        (0, "initialized"),
        (1, "error"),
        (2, "admin-up"),
        (3, "vaddr-dma"),
        (4, "link-up"),
        (5, "shared-txq-lock"),
        (6, "elog"),
        (7, "promisc"),
        (8, "rx-interrupts"),
        (9, "rx-flow-offload"),
    ],
);

/// Negotiated virtchnl VF capability (offload) flags, keyed by bit index.
pub static VF_CAP_FLAG_LABELS: LabelTable = LabelTable::new(
    "vf-cap-flags",
    &[
        (0, "l2"),
        (1, "iwarp"),
        (2, "rsvd"),
        (3, "rss-aq"),
        (4, "rss-reg"),
        (5, "wb-on-itr"),
        (6, "req-queues"),
        (7, "adv-link-speed"),
        (9, "large-num-qpairs"),
        (15, "vlan-v2"),
        (16, "vlan"),
        (17, "rx-polling"),
        (18, "rss-pctype-v2"),
        (19, "rss-pf"),
        (20, "encap"),
        (21, "encap-csum"),
        (22, "rx-encap-csum"),
        (23, "offload-adq"),
        (24, "offload-adq-v2"),
        (25, "offload-uso"),
        (26, "offload-rx-flex-desc"),
        (27, "offload-adv-rss-pf"),
        (28, "offload-fdir-pf"),
        (30, "dcf"),
    ],
);

/// virtchnl VLAN support bits (ethertypes, tag locations, modifiers).
pub static VLAN_SUPPORT_LABELS: LabelTable = LabelTable::new(
    "vlan-support",
    &[
        (0, "dot1Q"),
        (1, "dot1AD"),
        (2, "QinQ"),
        (8, "l2tag1"),
        (9, "l2tag2"),
        (10, "l2tag2_2"),
        (24, "prio"),
        (28, "filter-mask"),
        (29, "etype-and"),
        (30, "etype-xor"),
        (31, "toggle"),
    ],
);

/// virtchnl link speed enumerants, keyed by value.
pub static LINK_SPEED_LABELS: LabelTable = LabelTable::new(
    "link-speed",
    &[
        (1 << 0, "2.5 Gbps"),
        (1 << 1, "100 Mbps"),
        (1 << 2, "1 Gbps"),
        (1 << 3, "10 Gbps"),
        (1 << 4, "40 Gbps"),
        (1 << 5, "20 Gbps"),
        (1 << 6, "25 Gbps"),
        (1 << 7, "5 Gbps"),
    ],
);
