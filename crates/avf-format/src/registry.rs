//! Read-only collaborators the renderers consult.
//!
//! Renderers never reach for process-wide state; callers pass these in.

use avf_types::{Device, PciAddress};

/// Lookup of device snapshots by driver instance id.
pub trait DeviceRegistry {
    fn device(&self, dev_instance: u32) -> Option<&Device>;
}

/// Resolves the PCI address backing a device.
pub trait BusAddressResolver {
    fn pci_addr(&self, dev: &Device) -> Option<PciAddress>;
}

/// Hardware interface index to interface name.
pub trait InterfaceNames {
    fn hw_if_name(&self, hw_if_index: u32) -> Option<&str>;
}

/// Processing graph introspection.
pub trait NodeGraph {
    /// Name of the node reached through slot `next_index` of `node_index`.
    fn next_node_name(&self, node_index: u32, next_index: u32) -> Option<&str>;
}

impl DeviceRegistry for [Device] {
    fn device(&self, dev_instance: u32) -> Option<&Device> {
        self.iter().find(|dev| dev.dev_instance == dev_instance)
    }
}

impl DeviceRegistry for Vec<Device> {
    fn device(&self, dev_instance: u32) -> Option<&Device> {
        self.as_slice().device(dev_instance)
    }
}

/// Uses the address recorded in the snapshot itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordedPciAddress;

impl BusAddressResolver for RecordedPciAddress {
    fn pci_addr(&self, dev: &Device) -> Option<PciAddress> {
        dev.pci_addr
    }
}
