//! virtchnl link speed enumerant.

use crate::labels::LINK_SPEED_LABELS;
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Link speed as reported by the PF over virtchnl.
///
/// The legacy encoding is one bit per speed; `0` means the PF did not
/// report a speed. Values outside the known set are preserved so they can
/// be shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkSpeed(u32);

impl LinkSpeed {
    pub const UNKNOWN: LinkSpeed = LinkSpeed(0);
    pub const SPEED_2_5GB: LinkSpeed = LinkSpeed(1 << 0);
    pub const SPEED_100MB: LinkSpeed = LinkSpeed(1 << 1);
    pub const SPEED_1GB: LinkSpeed = LinkSpeed(1 << 2);
    pub const SPEED_10GB: LinkSpeed = LinkSpeed(1 << 3);
    pub const SPEED_40GB: LinkSpeed = LinkSpeed(1 << 4);
    pub const SPEED_20GB: LinkSpeed = LinkSpeed(1 << 5);
    pub const SPEED_25GB: LinkSpeed = LinkSpeed(1 << 6);
    pub const SPEED_5GB: LinkSpeed = LinkSpeed(1 << 7);

    pub const fn from_raw(raw: u32) -> Self {
        LinkSpeed(raw)
    }

    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Returns true if the PF reported no speed.
    pub const fn is_unknown(&self) -> bool {
        self.0 == 0
    }

    /// Returns the display label for a recognized enumerant.
    ///
    /// Returns `None` both for `0` and for unrecognized values.
    pub fn label(&self) -> Option<&'static str> {
        LINK_SPEED_LABELS.get(self.0)
    }
}

impl From<u32> for LinkSpeed {
    fn from(raw: u32) -> Self {
        LinkSpeed(raw)
    }
}

impl fmt::Display for LinkSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            return write!(f, "unknown");
        }
        match self.label() {
            Some(label) => write!(f, "{}", label),
            None => write!(f, "unknown(0x{:x})", self.0),
        }
    }
}

impl FromStr for LinkSpeed {
    type Err = ParseError;

    /// Parses either a label ("25 Gbps") or a raw value ("0x40", "64").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("unknown") {
            return Ok(LinkSpeed::UNKNOWN);
        }
        if let Some((value, _)) = LINK_SPEED_LABELS
            .entries()
            .iter()
            .find(|(_, label)| label.eq_ignore_ascii_case(s))
        {
            return Ok(LinkSpeed(*value));
        }

        let raw = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => s.parse(),
        };
        raw.map(LinkSpeed)
            .map_err(|_| ParseError::InvalidLinkSpeed(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zero_is_unknown() {
        assert!(LinkSpeed::UNKNOWN.is_unknown());
        assert_eq!(LinkSpeed::UNKNOWN.label(), None);
        assert_eq!(LinkSpeed::UNKNOWN.to_string(), "unknown");
    }

    #[test]
    fn test_recognized_label() {
        assert_eq!(LinkSpeed::SPEED_40GB.label(), Some("40 Gbps"));
        assert_eq!(LinkSpeed::SPEED_40GB.to_string(), "40 Gbps");
        assert_eq!(LinkSpeed::SPEED_100MB.to_string(), "100 Mbps");
    }

    #[test]
    fn test_unrecognized_value_is_visible() {
        let speed = LinkSpeed::from_raw(0x300);
        assert_eq!(speed.label(), None);
        assert_eq!(speed.to_string(), "unknown(0x300)");
    }

    #[test]
    fn test_parse() {
        assert_eq!("25 Gbps".parse::<LinkSpeed>().unwrap(), LinkSpeed::SPEED_25GB);
        assert_eq!("0x8".parse::<LinkSpeed>().unwrap(), LinkSpeed::SPEED_10GB);
        assert_eq!("16".parse::<LinkSpeed>().unwrap(), LinkSpeed::SPEED_40GB);
        assert_eq!("unknown".parse::<LinkSpeed>().unwrap(), LinkSpeed::UNKNOWN);
        assert!("fast".parse::<LinkSpeed>().is_err());
    }
}
