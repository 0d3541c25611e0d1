//! Negotiated VLAN (virtchnl VLAN v2) capabilities.

use serde::{Deserialize, Serialize};

/// A virtchnl VLAN support bitmask.
///
/// `0` is a sentinel meaning the feature is not supported at all; any
/// other value is a set of ethertype, tag-location and modifier bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VlanSupport(u32);

impl VlanSupport {
    pub const UNSUPPORTED: VlanSupport = VlanSupport(0);
    pub const ETHERTYPE_8100: VlanSupport = VlanSupport(1 << 0);
    pub const ETHERTYPE_88A8: VlanSupport = VlanSupport(1 << 1);
    pub const ETHERTYPE_9100: VlanSupport = VlanSupport(1 << 2);
    pub const TAG_LOCATION_L2TAG1: VlanSupport = VlanSupport(1 << 8);
    pub const TAG_LOCATION_L2TAG2: VlanSupport = VlanSupport(1 << 9);
    pub const TAG_LOCATION_L2TAG2_2: VlanSupport = VlanSupport(1 << 10);
    pub const PRIO: VlanSupport = VlanSupport(1 << 24);
    pub const FILTER_MASK: VlanSupport = VlanSupport(1 << 28);
    pub const ETHERTYPE_AND: VlanSupport = VlanSupport(1 << 29);
    pub const ETHERTYPE_XOR: VlanSupport = VlanSupport(1 << 30);
    pub const TOGGLE: VlanSupport = VlanSupport(1 << 31);

    pub const fn from_bits(bits: u32) -> Self {
        VlanSupport(bits)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub const fn is_supported(&self) -> bool {
        self.0 != 0
    }

    pub const fn contains(&self, other: VlanSupport) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for VlanSupport {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

/// Support for outer and inner tags of one VLAN feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VlanSupportedCaps {
    pub outer: VlanSupport,
    pub inner: VlanSupport,
}

/// VLAN filtering capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VlanFilteringCaps {
    pub filtering_support: VlanSupportedCaps,
    pub max_filters: u32,
    pub ethertype_init: u32,
}

/// VLAN stripping and insertion offload capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VlanOffloadCaps {
    pub stripping_support: VlanSupportedCaps,
    pub insertion_support: VlanSupportedCaps,
    pub ethertype_init: u32,
    pub ethertype_match: u8,
}

/// Complete negotiated VLAN capability set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VlanCaps {
    pub filtering: VlanFilteringCaps,
    pub offloads: VlanOffloadCaps,
}
