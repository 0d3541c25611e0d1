//! Snapshot types for AVF (Intel Adaptive Virtual Function) devices.
//!
//! This crate provides read-only representations of the driver state that
//! the diagnostics renderers consume:
//!
//! - [`Device`]: negotiated resources, queues, flags and statistics of one VF
//! - [`PciAddress`]: PCI domain/bus/slot/function of the underlying function
//! - [`LinkSpeed`]: virtchnl link speed enumerant
//! - [`VlanCaps`]: negotiated VLAN filtering and offload capabilities
//! - [`EthStats`]: virtchnl ethernet statistics snapshot
//! - [`DescriptorTrace`]: one traced packet's Rx descriptor chain
//! - [`LabelTable`]: static bit-index (or value) to label mapping

mod desc;
mod device;
mod labels;
mod link;
mod pci;
mod stats;
mod vlan;

pub use desc::{DescriptorTrace, RxDescQw1};
pub use device::{Device, DeviceFlag, RxQueue, TxQueue, VfCapFlag};
pub use labels::{
    LabelTable, DEVICE_FLAG_LABELS, LINK_SPEED_LABELS, VF_CAP_FLAG_LABELS, VLAN_SUPPORT_LABELS,
};
pub use link::LinkSpeed;
pub use pci::PciAddress;
pub use stats::{EthStats, StatField, ETH_STATS_FIELDS};
pub use vlan::{VlanCaps, VlanFilteringCaps, VlanOffloadCaps, VlanSupport, VlanSupportedCaps};

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid PCI address format: {0}")]
    InvalidPciAddress(String),

    #[error("invalid link speed: {0}")]
    InvalidLinkSpeed(String),
}
