//! PCI address type with parsing and formatting.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// PCI bus address of a virtual function.
///
/// # Examples
///
/// ```
/// use avf_types::PciAddress;
///
/// let addr: PciAddress = "0000:3b:02.1".parse().unwrap();
/// assert_eq!(addr.bus(), 0x3b);
/// assert_eq!(addr.to_string(), "0000:3b:02.1");
///
/// // Domain may be omitted
/// let short: PciAddress = "3b:02.1".parse().unwrap();
/// assert_eq!(addr, short);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PciAddress {
    domain: u16,
    bus: u8,
    slot: u8,
    function: u8,
}

impl PciAddress {
    /// Maximum slot (device) number.
    pub const MAX_SLOT: u8 = 0x1f;

    /// Maximum function number.
    pub const MAX_FUNCTION: u8 = 0x7;

    /// Creates a new PCI address.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot or function is out of range.
    pub fn new(domain: u16, bus: u8, slot: u8, function: u8) -> Result<Self, ParseError> {
        if slot > Self::MAX_SLOT || function > Self::MAX_FUNCTION {
            return Err(ParseError::InvalidPciAddress(format!(
                "{:04x}:{:02x}:{:02x}.{:x}",
                domain, bus, slot, function
            )));
        }
        Ok(PciAddress {
            domain,
            bus,
            slot,
            function,
        })
    }

    pub const fn domain(&self) -> u16 {
        self.domain
    }

    pub const fn bus(&self) -> u8 {
        self.bus
    }

    pub const fn slot(&self) -> u8 {
        self.slot
    }

    pub const fn function(&self) -> u8 {
        self.function
    }
}

impl fmt::Display for PciAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04x}:{:02x}:{:02x}.{:x}",
            self.domain, self.bus, self.slot, self.function
        )
    }
}

impl FromStr for PciAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidPciAddress(s.to_string());

        let (head, function) = s.rsplit_once('.').ok_or_else(invalid)?;
        let parts: Vec<&str> = head.split(':').collect();
        let (domain, bus, slot) = match parts.as_slice() {
            [domain, bus, slot] => (*domain, *bus, *slot),
            [bus, slot] => ("0", *bus, *slot),
            _ => return Err(invalid()),
        };

        let domain = u16::from_str_radix(domain, 16).map_err(|_| invalid())?;
        let bus = u8::from_str_radix(bus, 16).map_err(|_| invalid())?;
        let slot = u8::from_str_radix(slot, 16).map_err(|_| invalid())?;
        let function = u8::from_str_radix(function, 16).map_err(|_| invalid())?;

        PciAddress::new(domain, bus, slot, function).map_err(|_| invalid())
    }
}

impl TryFrom<String> for PciAddress {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PciAddress> for String {
    fn from(addr: PciAddress) -> String {
        addr.to_string()
    }
}
