//! virtchnl ethernet statistics.

use serde::{Deserialize, Serialize};

/// Ethernet statistics reported by the PF for one VF.
///
/// All counters are monotonic on the PF side, but a PF reset can make a
/// later snapshot smaller than an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EthStats {
    pub rx_bytes: u64,
    pub rx_unicast: u64,
    pub rx_multicast: u64,
    pub rx_broadcast: u64,
    pub rx_discards: u64,
    pub rx_unknown_protocol: u64,
    pub tx_bytes: u64,
    pub tx_unicast: u64,
    pub tx_multicast: u64,
    pub tx_broadcast: u64,
    pub tx_discards: u64,
    pub tx_errors: u64,
}

/// A named statistic field with its accessor.
pub struct StatField<S = EthStats> {
    pub name: &'static str,
    pub get: fn(&S) -> u64,
}

impl<S> Clone for StatField<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for StatField<S> {}

impl<S> std::fmt::Debug for StatField<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatField").field("name", &self.name).finish()
    }
}

macro_rules! eth_stat_fields {
    ($($field:ident),* $(,)?) => {
        &[$(StatField { name: stringify!($field), get: |s: &EthStats| s.$field }),*]
    };
}

/// Every [`EthStats`] field, in report order.
pub static ETH_STATS_FIELDS: &[StatField] = eth_stat_fields![
    rx_bytes,
    rx_unicast,
    rx_multicast,
    rx_broadcast,
    rx_discards,
    rx_unknown_protocol,
    tx_bytes,
    tx_unicast,
    tx_multicast,
    tx_broadcast,
    tx_discards,
    tx_errors,
];
