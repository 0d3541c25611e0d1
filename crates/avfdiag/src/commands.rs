//! Report commands.
//!
//! Each command renders into a [`TextSink`] and returns the text; the
//! caller decides where it goes.

use clap::Subcommand;

use crate::config::DiagConfig;
use crate::error::{DiagError, DiagResult};
use crate::snapshot::Snapshot;
use avf_format::{
    DeviceName, DeviceRegistry, DeviceReport, FormatError, InputTrace, RecordedPciAddress,
    StatDeltas, StatValues, TextSink, VlanCapsView,
};
use avf_types::Device;

/// Indentation of report bodies under their device header.
const BODY_INDENT: usize = 2;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the status report of one device, or of every device
    Device {
        /// Device instance id
        id: Option<u32>,
    },

    /// Show the display name of a device
    Name {
        /// Device instance id
        id: u32,
    },

    /// Show negotiated VLAN capabilities of a device
    Vlan {
        /// Device instance id
        id: u32,
    },

    /// Show ethernet statistics of a device
    Stats {
        /// Device instance id
        id: u32,

        /// Only show counters changed since they were last cleared
        #[arg(short = 'd', long)]
        delta: bool,
    },

    /// Show captured packet traces
    Trace {
        /// Only show traces from this hardware interface index
        #[arg(long)]
        hw_if_index: Option<u32>,
    },
}

impl Command {
    /// Short operator-facing name used in error messages.
    pub fn label(&self) -> String {
        match self {
            Command::Device { id: Some(id) } => format!("device {}", id),
            Command::Device { id: None } => "device".to_string(),
            Command::Name { id } => format!("name {}", id),
            Command::Vlan { id } => format!("vlan {}", id),
            Command::Stats { id, .. } => format!("stats {}", id),
            Command::Trace { .. } => "trace".to_string(),
        }
    }

    /// Runs the command against a loaded snapshot.
    pub fn run(&self, snapshot: &Snapshot, config: &DiagConfig) -> DiagResult<String> {
        let mut out = TextSink::new();

        match self {
            Command::Device { id: Some(id) } => {
                let report = DeviceReport::lookup(snapshot, *id)?;
                device_section(&mut out, report);
            }
            Command::Device { id: None } => {
                for (i, dev) in snapshot.devices.iter().enumerate() {
                    if i > 0 {
                        out.newline(0);
                    }
                    device_section(&mut out, DeviceReport::new(dev));
                }
            }
            Command::Name { id } => {
                let dev = lookup(snapshot, *id)?;
                out.put(&DeviceName::new(dev, &RecordedPciAddress));
            }
            Command::Vlan { id } => {
                let dev = lookup(snapshot, *id)?;
                let caps = dev
                    .vlan_caps
                    .as_ref()
                    .ok_or_else(|| FormatError::no_vlan_caps(*id))?;
                header(&mut out, dev);
                out.put(&VlanCapsView(caps));
            }
            Command::Stats { id, delta } => {
                let dev = lookup(snapshot, *id)?;
                header(&mut out, dev);
                if *delta {
                    let deltas = StatDeltas::eth(&dev.eth_stats, &dev.last_cleared_eth_stats);
                    if deltas.deltas().is_empty() {
                        out.push_str("no counters changed");
                    } else {
                        out.put(&deltas);
                    }
                } else {
                    out.put(&StatValues::eth(&dev.eth_stats));
                }
            }
            Command::Trace { hw_if_index } => {
                for (i, trace) in snapshot.traces_for(*hw_if_index).enumerate() {
                    if i > 0 {
                        out.newline(0);
                    }
                    write!(out, "Packet {}", i + 1);
                    out.newline(BODY_INDENT);
                    out.put(&InputTrace::resolve(
                        trace,
                        config.trace_node_index,
                        snapshot,
                        snapshot,
                    ));
                }
            }
        }

        Ok(out.into_string())
    }
}

fn lookup(snapshot: &Snapshot, id: u32) -> DiagResult<&Device> {
    snapshot
        .device(id)
        .ok_or_else(|| DiagError::from(FormatError::device_not_found(id)))
}

/// Writes the device name and moves to an indented body line.
fn header(out: &mut TextSink, dev: &Device) {
    out.put(&DeviceName::new(dev, &RecordedPciAddress));
    out.newline(BODY_INDENT);
}

fn device_section(out: &mut TextSink, report: DeviceReport<'_>) {
    header(out, report.device());
    out.put(&report);
}
