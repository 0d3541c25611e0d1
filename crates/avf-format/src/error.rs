//! Error types for report lookups.
//!
//! Rendering itself never fails; only resolving a device id to a snapshot
//! can.

use thiserror::Error;

/// Result type alias for report lookups.
pub type FormatResult<T> = Result<T, FormatError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No device is registered under the given instance id.
    #[error("Device {dev_instance} not found")]
    DeviceNotFound {
        /// The requested device instance.
        dev_instance: u32,
    },

    /// The device exists but never negotiated VLAN v2 capabilities.
    #[error("Device {dev_instance} has no VLAN capabilities")]
    NoVlanCaps {
        /// The requested device instance.
        dev_instance: u32,
    },
}

impl FormatError {
    pub fn device_not_found(dev_instance: u32) -> Self {
        Self::DeviceNotFound { dev_instance }
    }

    pub fn no_vlan_caps(dev_instance: u32) -> Self {
        Self::NoVlanCaps { dev_instance }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(FormatError::device_not_found(3).to_string(), "Device 3 not found");
        assert_eq!(
            FormatError::no_vlan_caps(1).to_string(),
            "Device 1 has no VLAN capabilities"
        );
    }
}
