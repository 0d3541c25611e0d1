//! Device status report and device naming.

use crate::error::{FormatError, FormatResult};
use crate::flags::Flags;
use crate::registry::{BusAddressResolver, DeviceRegistry};
use crate::sink::{Render, TextSink};
use crate::stats::StatDeltas;
use avf_types::{Device, LinkSpeed, DEVICE_FLAG_LABELS, VF_CAP_FLAG_LABELS};
use tracing::debug;

/// Renders a link speed: `unknown` for 0, the table label for known
/// enumerants, `unknown(0x..)` for anything else.
#[derive(Debug, Clone, Copy)]
pub struct LinkSpeedView(pub LinkSpeed);

impl Render for LinkSpeedView {
    fn render(&self, out: &mut TextSink) {
        if !self.0.is_unknown() && self.0.label().is_none() {
            debug!(raw = self.0.as_u32(), "unrecognized link speed");
        }
        write!(out, "{}", self.0);
    }
}

/// Renders the device's display name.
///
/// The configured name wins; otherwise `avf-<domain>/<bus>/<slot>/<func>`
/// in hex, or `avf-<instance>` if the bus address cannot be resolved.
pub struct DeviceName<'a, B: ?Sized> {
    dev: &'a Device,
    resolver: &'a B,
}

impl<'a, B: BusAddressResolver + ?Sized> DeviceName<'a, B> {
    pub fn new(dev: &'a Device, resolver: &'a B) -> Self {
        DeviceName { dev, resolver }
    }
}

impl<B: BusAddressResolver + ?Sized> Render for DeviceName<'_, B> {
    fn render(&self, out: &mut TextSink) {
        if let Some(name) = &self.dev.name {
            out.push_str(name);
            return;
        }
        match self.resolver.pci_addr(self.dev) {
            Some(addr) => write!(
                out,
                "avf-{:x}/{:x}/{:x}/{:x}",
                addr.domain(),
                addr.bus(),
                addr.slot(),
                addr.function()
            ),
            None => write!(out, "avf-{}", self.dev.dev_instance),
        }
    }
}

/// Full hierarchical status report of one device.
#[derive(Debug, Clone, Copy)]
pub struct DeviceReport<'a> {
    dev: &'a Device,
}

impl<'a> DeviceReport<'a> {
    pub fn new(dev: &'a Device) -> Self {
        DeviceReport { dev }
    }

    /// Looks the device up by instance id.
    pub fn lookup<R>(registry: &'a R, dev_instance: u32) -> FormatResult<Self>
    where
        R: DeviceRegistry + ?Sized,
    {
        registry
            .device(dev_instance)
            .map(Self::new)
            .ok_or_else(|| FormatError::device_not_found(dev_instance))
    }

    /// The device being reported on.
    pub fn device(&self) -> &'a Device {
        self.dev
    }

    fn render_queues(&self, out: &mut TextSink, indent: usize) {
        let dev = self.dev;
        let rx_size = dev.rxqs.first().map_or(0, |q| q.size);
        let tx_size = dev.txqs.first().map_or(0, |q| q.size);

        write!(
            out,
            "rx: queues {}, desc {} (min {} max {})",
            dev.n_rx_queues(),
            rx_size,
            Device::QUEUE_SZ_MIN,
            Device::QUEUE_SZ_MAX
        );
        out.newline(indent);
        write!(
            out,
            "tx: queues {}, desc {} (min {} max {})",
            dev.n_tx_queues(),
            tx_size,
            Device::QUEUE_SZ_MIN,
            Device::QUEUE_SZ_MAX
        );
    }

    fn render_queue_counters(&self, out: &mut TextSink, indent: usize) {
        out.newline(indent + 4);
        out.push_str(" Rx Queue: Total Packets");
        for (idx, rxq) in self.dev.rxqs.iter().enumerate() {
            out.newline(indent + 4);
            write!(out, " {:>8} : {}", idx, rxq.total_packets);
        }

        out.newline(indent + 4);
        out.push_str(" Tx Queue: Total Packets\t Total Drops");
        for (idx, txq) in self.dev.txqs.iter().enumerate() {
            out.newline(indent + 4);
            write!(
                out,
                " {:>8} : {}\t {}",
                idx, txq.total_packets, txq.no_free_tx_count
            );
        }
    }
}

impl Render for DeviceReport<'_> {
    fn render(&self, out: &mut TextSink) {
        let dev = self.dev;
        let indent = out.indent();

        self.render_queues(out, indent);

        out.newline(indent);
        out.push_str("flags: ");
        out.put(&Flags::new(dev.flags, &DEVICE_FLAG_LABELS));
        out.newline(indent);
        out.push_str("capability flags: ");
        out.put(&Flags::new(dev.cap_flags, &VF_CAP_FLAG_LABELS));

        self.render_queue_counters(out, indent);

        out.newline(indent);
        write!(
            out,
            "num-queue-pairs {} max-vectors {} max-mtu {} rss-key-size {} rss-lut-size {}",
            dev.num_queue_pairs, dev.max_vectors, dev.max_mtu, dev.rss_key_size, dev.rss_lut_size
        );
        out.newline(indent);
        out.push_str("speed ");
        out.put(&LinkSpeedView(dev.link_speed));

        if let Some(error) = &dev.error {
            out.newline(indent);
            write!(out, "error {}", error);
        }

        let deltas = StatDeltas::eth(&dev.eth_stats, &dev.last_cleared_eth_stats);
        if !deltas.deltas().is_empty() {
            out.newline(indent);
            out.put(&deltas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RecordedPciAddress;
    use avf_types::{DeviceFlag, EthStats, RxQueue, TxQueue, VfCapFlag};
    use pretty_assertions::assert_eq;

    fn two_rx_one_tx() -> Device {
        Device {
            dev_instance: 0,
            rxqs: vec![
                RxQueue {
                    size: 512,
                    total_packets: 0,
                },
                RxQueue {
                    size: 512,
                    total_packets: 0,
                },
            ],
            txqs: vec![TxQueue {
                size: 256,
                total_packets: 100,
                no_free_tx_count: 3,
            }],
            flags: 1 << 20,
            ..Default::default()
        }
    }

    #[test]
    fn test_link_speed() {
        assert_eq!(LinkSpeedView(LinkSpeed::UNKNOWN).to_text(), "unknown");
        assert_eq!(LinkSpeedView(LinkSpeed::SPEED_40GB).to_text(), "40 Gbps");
        assert_eq!(LinkSpeedView(LinkSpeed::from_raw(0x100)).to_text(), "unknown(0x100)");
    }

    #[test]
    fn test_device_name_prefers_configured_name() {
        let dev = Device {
            name: Some("uplink0".to_string()),
            pci_addr: Some("0000:18:01.0".parse().unwrap()),
            ..Default::default()
        };
        assert_eq!(DeviceName::new(&dev, &RecordedPciAddress).to_text(), "uplink0");
    }

    #[test]
    fn test_device_name_from_pci_address() {
        let dev = Device {
            pci_addr: Some("0001:3b:0a.7".parse().unwrap()),
            ..Default::default()
        };
        assert_eq!(DeviceName::new(&dev, &RecordedPciAddress).to_text(), "avf-1/3b/a/7");
    }

    #[test]
    fn test_device_name_without_address() {
        let dev = Device {
            dev_instance: 5,
            ..Default::default()
        };
        assert_eq!(DeviceName::new(&dev, &RecordedPciAddress).to_text(), "avf-5");
    }

    #[test]
    fn test_report_end_to_end() {
        let dev = two_rx_one_tx();
        let expected = [
            "rx: queues 2, desc 512 (min 64 max 4096)",
            "tx: queues 1, desc 256 (min 64 max 4096)",
            "flags: unknown(20)",
            "capability flags: ",
            "     Rx Queue: Total Packets",
            "            0 : 0",
            "            1 : 0",
            "     Tx Queue: Total Packets\t Total Drops",
            "            0 : 100\t 3",
            "num-queue-pairs 0 max-vectors 0 max-mtu 0 rss-key-size 0 rss-lut-size 0",
            "speed unknown",
        ]
        .join("\n");
        let text = DeviceReport::new(&dev).to_text();
        assert_eq!(text, expected);
        assert!(!text.contains("stats:"));
    }

    #[test]
    fn test_report_nested_indent() {
        let mut dev = two_rx_one_tx();
        dev.flags = DeviceFlag::Initialized.mask() | DeviceFlag::AdminUp.mask();
        dev.cap_flags = VfCapFlag::OffloadL2.mask() | VfCapFlag::OffloadVlanV2.mask();
        dev.num_queue_pairs = 4;
        dev.max_vectors = 5;
        dev.max_mtu = 9706;
        dev.rss_key_size = 52;
        dev.rss_lut_size = 64;
        dev.link_speed = LinkSpeed::SPEED_25GB;
        dev.error = Some("virtchnl op 3 timed out".to_string());
        dev.eth_stats = EthStats {
            rx_bytes: 1500,
            rx_unicast: 1,
            tx_discards: 2,
            ..Default::default()
        };
        dev.last_cleared_eth_stats = EthStats {
            rx_unicast: 1,
            tx_discards: 4,
            ..Default::default()
        };

        let mut out = TextSink::new();
        out.pad(2);
        out.put(&DeviceReport::new(&dev));
        let text = out.into_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "  rx: queues 2, desc 512 (min 64 max 4096)");
        assert_eq!(lines[2], "  flags: initialized admin-up");
        assert_eq!(lines[3], "  capability flags: l2 vlan-v2");
        assert_eq!(lines[4], "       Rx Queue: Total Packets");
        assert_eq!(
            lines[9],
            "  num-queue-pairs 4 max-vectors 5 max-mtu 9706 rss-key-size 52 rss-lut-size 64"
        );
        assert_eq!(lines[10], "  speed 25 Gbps");
        assert_eq!(lines[11], "  error virtchnl op 3 timed out");
        assert_eq!(lines[12], "  stats:");
        assert_eq!(lines[13], "    rx_bytes             = 1500");
        assert_eq!(lines[14], "    tx_discards          = -2");
        assert_eq!(lines.len(), 15);
    }

    #[test]
    fn test_lookup() {
        let devices = vec![two_rx_one_tx()];
        let report = DeviceReport::lookup(&devices, 0).unwrap();
        assert_eq!(report.device(), &devices[0]);
        assert_eq!(
            DeviceReport::lookup(&devices, 9).unwrap_err(),
            FormatError::device_not_found(9)
        );
    }
}
