//! avfdiag: offline diagnostics for AVF virtual function devices.
//!
//! Loads a driver state snapshot and renders the device, VLAN, statistics
//! and packet trace reports produced by the `avf-format` renderers.

pub mod commands;
pub mod config;
pub mod error;
pub mod snapshot;

pub use commands::Command;
pub use config::{DiagConfig, DEFAULT_CONFIG_PATH};
pub use error::{DiagError, DiagResult};
pub use snapshot::Snapshot;
