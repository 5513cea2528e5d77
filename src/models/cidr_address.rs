//! IPv4 CIDR block: an [`Address`] plus a prefix length.
//!
//! Netmask, wildcard, network, broadcast and block size are computed from
//! `(address, prefix)` on every call. Nothing derived is stored.

use super::address::{format_value, offset_value};
use super::address_part::{octet_parts, push_prefix_part, AddressPart};
use super::{Address, Base, CidrParser};
use crate::error::{CidrError, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum prefix length for IPv4 (32 bits).
pub const MAX_PREFIX: u8 = 32;

/// Selects which of the block's addresses to format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    Cidr,
    Netmask,
    Wildcard,
    NetworkAddress,
    BroadcastAddress,
}

impl AddressType {
    pub const ALL: [AddressType; 5] = [
        AddressType::Cidr,
        AddressType::Netmask,
        AddressType::Wildcard,
        AddressType::NetworkAddress,
        AddressType::BroadcastAddress,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressType::Cidr => "cidr",
            AddressType::Netmask => "netmask",
            AddressType::Wildcard => "wildcard",
            AddressType::NetworkAddress => "networkAddress",
            AddressType::BroadcastAddress => "broadcastAddress",
        }
    }
}

impl FromStr for AddressType {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cidr" => Ok(AddressType::Cidr),
            "netmask" => Ok(AddressType::Netmask),
            "wildcard" => Ok(AddressType::Wildcard),
            "network" | "networkaddress" => Ok(AddressType::NetworkAddress),
            "broadcast" | "broadcastaddress" => Ok(AddressType::BroadcastAddress),
            _ => Err(CidrError::InvalidAddressType(s.to_string())),
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn checked_prefix(prefix: i64) -> Result<u8> {
    if prefix < 0 {
        Err(CidrError::PrefixNegative(prefix))
    } else if prefix > i64::from(MAX_PREFIX) {
        Err(CidrError::PrefixTooLarge(prefix))
    } else {
        Ok(prefix as u8)
    }
}

/// IPv4 address with a prefix length in `0..=32`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CidrAddress {
    address: Address,
    prefix: u8,
}

impl CidrAddress {
    /// Create a block from a raw value and prefix length.
    ///
    /// # Examples
    /// ```
    /// use cidr_calc::models::CidrAddress;
    /// let cidr = CidrAddress::new(0xC0A80101, 24).unwrap();
    /// assert_eq!(cidr.network_address().to_string(), "192.168.1.0");
    /// assert!(CidrAddress::new(0, 33).is_err());
    /// ```
    pub fn new(value: u32, prefix: i32) -> Result<CidrAddress> {
        Ok(CidrAddress {
            address: Address::new(value),
            prefix: checked_prefix(i64::from(prefix))?,
        })
    }

    /// Single-address block (`/32`).
    pub fn host(value: u32) -> CidrAddress {
        CidrAddress {
            address: Address::new(value),
            prefix: MAX_PREFIX,
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Top `prefix` bits set. `/0` is special-cased to avoid a 32-bit shift.
    pub fn netmask(&self) -> Address {
        let mask = if self.prefix == 0 {
            Address::new(0)
        } else {
            Address::new(u32::MAX << (MAX_PREFIX - self.prefix))
        };
        log::trace!("netmask(/{}) = {mask}", self.prefix);
        mask
    }

    pub fn wildcard(&self) -> Address {
        Address::new(!self.netmask().value())
    }

    /// Lowest address in the block.
    pub fn network_address(&self) -> Address {
        let network = Address::new(self.address.value() & self.netmask().value());
        log::trace!("network_address({self}) = {network}");
        network
    }

    /// Highest address in the block.
    pub fn broadcast_address(&self) -> Address {
        let broadcast =
            Address::new(self.network_address().value() | self.wildcard().value());
        log::trace!("broadcast_address({self}) = {broadcast}");
        broadcast
    }

    /// Number of addresses in the block, `2^(32 - prefix)`. `/0` yields 4294967296.
    pub fn block_size(&self) -> u64 {
        let size = 1u64 << (MAX_PREFIX - self.prefix);
        log::trace!("block_size(/{}) = {size}", self.prefix);
        size
    }

    /// The address selected by `kind`.
    pub fn select(&self, kind: AddressType) -> Address {
        match kind {
            AddressType::Cidr => self.address,
            AddressType::Netmask => self.netmask(),
            AddressType::Wildcard => self.wildcard(),
            AddressType::NetworkAddress => self.network_address(),
            AddressType::BroadcastAddress => self.broadcast_address(),
        }
    }

    pub fn format(&self, base: u32, kind: AddressType) -> Result<String> {
        let value = self.select(kind).value();
        Ok(format_value(value, Base::try_from(base)?))
    }

    /// Like [`CidrAddress::format`] with the kind given by name.
    pub fn format_kind(&self, base: u32, kind: &str) -> Result<String> {
        let kind = AddressType::from_str(kind)?;
        self.format(base, kind)
    }

    /// `a.b.c.d/p` with the address part rendered in `base`.
    pub fn cidr_string(&self, base: u32) -> Result<String> {
        Ok(self.cidr_string_base(Base::try_from(base)?))
    }

    pub fn cidr_string_base(&self, base: Base) -> String {
        format!("{}/{}", format_value(self.address.value(), base), self.prefix)
    }

    /// Move the address by `delta`, keeping the prefix.
    pub fn add_value(&self, delta: i64) -> Result<CidrAddress> {
        let value = offset_value(self.address.value(), delta)?;
        Ok(CidrAddress {
            address: Address::new(value),
            prefix: self.prefix,
        })
    }

    /// Change the prefix by `delta`, keeping the address.
    pub fn add_prefix(&self, delta: i32) -> Result<CidrAddress> {
        let prefix = checked_prefix(i64::from(self.prefix) + i64::from(delta))?;
        Ok(CidrAddress {
            address: self.address,
            prefix,
        })
    }

    pub fn next_host(&self) -> Result<CidrAddress> {
        self.add_value(1)
    }

    pub fn prev_host(&self) -> Result<CidrAddress> {
        self.add_value(-1)
    }

    /// Step forward by one block size from the current address.
    pub fn next_subnet(&self) -> Result<CidrAddress> {
        self.add_value(self.block_size() as i64)
    }

    /// Step back by one block size from the current address.
    pub fn prev_subnet(&self) -> Result<CidrAddress> {
        self.add_value(-(self.block_size() as i64))
    }

    pub fn grow_prefix(&self) -> Result<CidrAddress> {
        self.add_prefix(1)
    }

    pub fn shrink_prefix(&self) -> Result<CidrAddress> {
        self.add_prefix(-1)
    }

    /// Tokenize as 7 octet/dot parts followed by one `/<prefix>` part.
    pub fn to_parts(&self, base: u32) -> Result<Vec<AddressPart>> {
        Ok(self.to_parts_base(Base::try_from(base)?))
    }

    pub fn to_parts_base(&self, base: Base) -> Vec<AddressPart> {
        let mut parts = octet_parts(self.address.value(), base);
        push_prefix_part(&mut parts, self.prefix);
        parts
    }
}

impl fmt::Display for CidrAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix)
    }
}

impl FromStr for CidrAddress {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self> {
        CidrParser::parse(s)
    }
}

impl Serialize for CidrAddress {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CidrAddress {
    fn deserialize<D>(deserializer: D) -> std::result::Result<CidrAddress, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CidrParser::parse(&s).map_err(de::Error::custom)
    }
}
