//! AVF device and queue snapshots.

use crate::{EthStats, LinkSpeed, PciAddress, VlanCaps};
use serde::{Deserialize, Serialize};

/// Driver-side device state flag bit indices.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceFlag {
    Initialized = 0,
    Error = 1,
    AdminUp = 2,
    VaDma = 3,
    LinkUp = 4,
    SharedTxqLock = 5,
    Elog = 6,
    Promisc = 7,
    RxInt = 8,
    RxFlowOffload = 9,
}

impl DeviceFlag {
    pub const fn mask(self) -> u32 {
        1 << self as u32
    }
}

/// Negotiated VF capability flag bit indices.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VfCapFlag {
    OffloadL2 = 0,
    OffloadIwarp = 1,
    OffloadRsvd = 2,
    OffloadRssAq = 3,
    OffloadRssReg = 4,
    OffloadWbOnItr = 5,
    OffloadReqQueues = 6,
    AdvLinkSpeed = 7,
    LargeNumQpairs = 9,
    OffloadVlanV2 = 15,
    OffloadVlan = 16,
    OffloadRxPolling = 17,
    OffloadRssPctypeV2 = 18,
    OffloadRssPf = 19,
    OffloadEncap = 20,
    OffloadEncapCsum = 21,
    OffloadRxEncapCsum = 22,
    OffloadAdq = 23,
    OffloadAdqV2 = 24,
    OffloadUso = 25,
    OffloadRxFlexDesc = 26,
    OffloadAdvRssPf = 27,
    OffloadFdirPf = 28,
    Dcf = 30,
}

impl VfCapFlag {
    pub const fn mask(self) -> u32 {
        1 << self as u32
    }
}

/// Rx queue snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RxQueue {
    /// Descriptor ring size.
    pub size: u16,
    pub total_packets: u64,
}

/// Tx queue snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TxQueue {
    /// Descriptor ring size.
    pub size: u16,
    pub total_packets: u64,
    /// Packets dropped because no free descriptor was available.
    pub no_free_tx_count: u64,
}

/// Read-only snapshot of one AVF device.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    /// Device instance index in the driver.
    pub dev_instance: u32,
    /// Operator-assigned name; the PCI address is shown when unset.
    pub name: Option<String>,
    pub pci_addr: Option<PciAddress>,
    pub rxqs: Vec<RxQueue>,
    pub txqs: Vec<TxQueue>,
    /// [`DeviceFlag`] bitmask.
    pub flags: u32,
    /// [`VfCapFlag`] bitmask negotiated with the PF.
    pub cap_flags: u32,
    pub link_speed: LinkSpeed,
    pub num_queue_pairs: u16,
    pub max_vectors: u16,
    pub max_mtu: u16,
    pub rss_key_size: u16,
    pub rss_lut_size: u16,
    /// Last error recorded by the driver, if any.
    pub error: Option<String>,
    pub eth_stats: EthStats,
    /// Statistics at the time counters were last cleared.
    pub last_cleared_eth_stats: EthStats,
    /// VLAN v2 capabilities, present only if negotiated.
    pub vlan_caps: Option<VlanCaps>,
}

impl Device {
    /// Minimum descriptor ring size supported by the driver.
    pub const QUEUE_SZ_MIN: u16 = 64;

    /// Maximum descriptor ring size supported by the driver.
    pub const QUEUE_SZ_MAX: u16 = 4096;

    pub fn n_rx_queues(&self) -> usize {
        self.rxqs.len()
    }

    pub fn n_tx_queues(&self) -> usize {
        self.txqs.len()
    }

    pub fn has_flag(&self, flag: DeviceFlag) -> bool {
        self.flags & flag.mask() != 0
    }

    pub fn has_cap(&self, cap: VfCapFlag) -> bool {
        self.cap_flags & cap.mask() != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flag_masks() {
        assert_eq!(DeviceFlag::Initialized.mask(), 0x1);
        assert_eq!(DeviceFlag::RxFlowOffload.mask(), 0x200);
        assert_eq!(VfCapFlag::Dcf.mask(), 0x4000_0000);
    }

    #[test]
    fn test_has_flag() {
        let dev = Device {
            flags: DeviceFlag::AdminUp.mask() | DeviceFlag::LinkUp.mask(),
            cap_flags: VfCapFlag::OffloadVlanV2.mask(),
            ..Default::default()
        };
        assert!(dev.has_flag(DeviceFlag::AdminUp));
        assert!(dev.has_flag(DeviceFlag::LinkUp));
        assert!(!dev.has_flag(DeviceFlag::Error));
        assert!(dev.has_cap(VfCapFlag::OffloadVlanV2));
        assert!(!dev.has_cap(VfCapFlag::OffloadVlan));
    }

    #[test]
    fn test_deserialize_snapshot() {
        let json = r#"{
            "dev_instance": 2,
            "pci_addr": "0000:3b:02.1",
            "rxqs": [{"size": 512, "total_packets": 10}],
            "txqs": [{"size": 256, "total_packets": 4, "no_free_tx_count": 1}],
            "link_speed": 64,
            "error": "virtchnl timeout"
        }"#;
        let dev: Device = serde_json::from_str(json).unwrap();
        assert_eq!(dev.dev_instance, 2);
        assert_eq!(dev.name, None);
        assert_eq!(dev.n_rx_queues(), 1);
        assert_eq!(dev.txqs[0].no_free_tx_count, 1);
        assert_eq!(dev.link_speed, LinkSpeed::SPEED_25GB);
        assert_eq!(dev.error.as_deref(), Some("virtchnl timeout"));
        assert!(dev.vlan_caps.is_none());
    }
}
