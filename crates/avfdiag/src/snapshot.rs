//! Driver state snapshot loaded from a JSON export.
//!
//! The snapshot stands in for the live driver: it carries the device
//! table, the interface names, the input node's next-node table and any
//! captured packet traces.

use crate::error::{DiagError, DiagResult};
use avf_format::{DeviceRegistry, InterfaceNames, NodeGraph};
use avf_types::{DescriptorTrace, Device};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub devices: Vec<Device>,
    /// hw_if_index -> interface name.
    pub interfaces: BTreeMap<u32, String>,
    /// node index -> next-node names, indexed by next slot.
    pub next_nodes: BTreeMap<u32, Vec<String>>,
    pub traces: Vec<DescriptorTrace>,
}

impl Snapshot {
    pub fn from_file(path: &Path) -> DiagResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| DiagError::io(path, e))?;
        let snapshot: Snapshot =
            serde_json::from_str(&contents).map_err(|source| DiagError::Snapshot {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(
            devices = snapshot.devices.len(),
            traces = snapshot.traces.len(),
            "loaded snapshot from {}",
            path.display()
        );
        snapshot.check_unique_instances();
        Ok(snapshot)
    }

    fn check_unique_instances(&self) {
        let mut seen = BTreeSet::new();
        for dev in &self.devices {
            if !seen.insert(dev.dev_instance) {
                warn!(
                    dev_instance = dev.dev_instance,
                    "duplicate device instance in snapshot, first entry wins"
                );
            }
        }
    }

    /// Traces captured on `hw_if_index`, or all traces.
    pub fn traces_for(&self, hw_if_index: Option<u32>) -> impl Iterator<Item = &DescriptorTrace> {
        self.traces
            .iter()
            .filter(move |t| hw_if_index.map_or(true, |idx| t.hw_if_index == idx))
    }
}

impl DeviceRegistry for Snapshot {
    fn device(&self, dev_instance: u32) -> Option<&Device> {
        self.devices.device(dev_instance)
    }
}

impl InterfaceNames for Snapshot {
    fn hw_if_name(&self, hw_if_index: u32) -> Option<&str> {
        self.interfaces.get(&hw_if_index).map(String::as_str)
    }
}

impl NodeGraph for Snapshot {
    fn next_node_name(&self, node_index: u32, next_index: u32) -> Option<&str> {
        self.next_nodes
            .get(&node_index)?
            .get(next_index as usize)
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SNAPSHOT: &str = r#"{
        "devices": [
            {"dev_instance": 0, "name": "uplink0"},
            {"dev_instance": 3, "pci_addr": "0000:18:02.1"}
        ],
        "interfaces": {"1": "uplink0", "2": "avf-0/18/2/1"},
        "next_nodes": {"7": ["ethernet-input", "error-drop"]},
        "traces": [
            {"hw_if_index": 1, "qid": 0, "next_index": 0, "flow_id": 0, "qw1s": [3]},
            {"hw_if_index": 2, "qid": 1, "next_index": 1, "flow_id": 0, "qw1s": [1, 3]}
        ]
    }"#;

    fn load(contents: &str) -> DiagResult<Snapshot> {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        Snapshot::from_file(file.path())
    }

    #[test]
    fn test_load_and_lookup() {
        let snapshot = load(SNAPSHOT).unwrap();
        assert_eq!(snapshot.devices.len(), 2);
        assert!(snapshot.device(3).is_some());
        assert!(snapshot.device(1).is_none());
        assert_eq!(snapshot.hw_if_name(2), Some("avf-0/18/2/1"));
        assert_eq!(snapshot.next_node_name(7, 1), Some("error-drop"));
        assert_eq!(snapshot.next_node_name(7, 2), None);
        assert_eq!(snapshot.next_node_name(8, 0), None);
    }

    #[test]
    fn test_trace_filter() {
        let snapshot = load(SNAPSHOT).unwrap();
        assert_eq!(snapshot.traces_for(None).count(), 2);
        assert_eq!(snapshot.traces_for(Some(2)).count(), 1);
        assert_eq!(snapshot.traces_for(Some(9)).count(), 0);
    }

    #[test]
    fn test_empty_object_is_empty_snapshot() {
        let snapshot = load("{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn test_invalid_json() {
        let err = load("{\"devices\": 5}").unwrap_err();
        assert!(matches!(err, DiagError::Snapshot { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Snapshot::from_file(Path::new("/nonexistent/snapshot.json")).unwrap_err();
        assert!(matches!(err, DiagError::Io { .. }));
    }
}
