//! Diagnostic text renderers for AVF virtual function devices.
//!
//! Every renderer implements [`Render`]: it appends to a [`TextSink`],
//! starting at the sink's current column, and aligns its continuation
//! lines to that column. Renderers can therefore be embedded in one
//! another at any depth:
//!
//! - [`Flags`]: bitmask to space-separated labels, `unknown(N)` for unmapped bits
//! - [`StatDeltas`] / [`StatValues`]: statistic deltas and plain values
//! - [`VlanCapsView`]: negotiated VLAN filtering and offload capabilities
//! - [`InputTrace`]: one traced packet's bounded Rx descriptor chain
//! - [`DeviceReport`]: the full device status report
//! - [`DeviceName`]: configured name or PCI-derived name
//!
//! Renderers only read the snapshots they are given. Lookups go through
//! the collaborator traits in [`registry`].
//!
//! # Example
//!
//! ```
//! use avf_format::{DeviceReport, Render};
//! use avf_types::{Device, RxQueue, TxQueue};
//!
//! let devices = vec![Device {
//!     rxqs: vec![RxQueue { size: 512, total_packets: 0 }],
//!     txqs: vec![TxQueue { size: 512, total_packets: 0, no_free_tx_count: 0 }],
//!     ..Default::default()
//! }];
//! let report = DeviceReport::lookup(&devices, 0).unwrap().to_text();
//! assert!(report.starts_with("rx: queues 1, desc 512 (min 64 max 4096)"));
//! ```

pub mod device;
pub mod error;
pub mod flags;
pub mod registry;
pub mod sink;
pub mod stats;
pub mod trace;
pub mod vlan;

pub use device::{DeviceName, DeviceReport, LinkSpeedView};
pub use error::{FormatError, FormatResult};
pub use flags::{decode, set_bits, unmapped_bits, FlagLabel, Flags};
pub use registry::{BusAddressResolver, DeviceRegistry, InterfaceNames, NodeGraph, RecordedPciAddress};
pub use sink::{Render, TextSink};
pub use stats::{StatDeltas, StatValues};
pub use trace::InputTrace;
pub use vlan::{VlanCapsView, VlanSupportView, VlanSupportedCapsView};
