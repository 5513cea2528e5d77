//! 32-bit IPv4 address value with dotted formatting and bounded arithmetic.
//!
//! [`Address`] is an immutable value: [`Address::add_value`] returns a new
//! address and leaves the receiver untouched.

use super::address_part::{octet_parts, AddressPart};
use super::Base;
use crate::error::{CidrError, Result};
use itertools::Itertools;
use std::fmt;
use std::net::Ipv4Addr;

/// Largest representable address value.
pub const MAX_VALUE: u32 = u32::MAX;

/// IPv4 address held as a 32-bit unsigned value.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    value: u32,
}

/// Render `value` as four dotted octets in `base`.
pub(crate) fn format_value(value: u32, base: Base) -> String {
    value
        .to_be_bytes()
        .into_iter()
        .map(|octet| base.format_octet(octet))
        .join(".")
}

/// Add a signed delta to `value`, rejecting results outside `0..=0xFFFFFFFF`.
pub(crate) fn offset_value(value: u32, delta: i64) -> Result<u32> {
    let sum = i64::from(value).saturating_add(delta);
    if sum < 0 {
        return Err(CidrError::Underflow(sum));
    }
    u32::try_from(sum).map_err(|_| CidrError::Overflow(sum))
}

impl Address {
    pub const fn new(value: u32) -> Address {
        Address { value }
    }

    /// Normalize an arbitrary integer into the 32-bit range by truncation,
    /// the way unsigned 32-bit host arithmetic does (`-1` becomes `0xFFFFFFFF`).
    pub fn wrapping(value: i64) -> Address {
        Address {
            value: value as u32,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// The four octets, most-significant first.
    pub fn octets(&self) -> [u8; 4] {
        self.value.to_be_bytes()
    }

    /// Dotted representation in base 2 or 10.
    ///
    /// # Examples
    /// ```
    /// use cidr_calc::models::Address;
    /// let addr = Address::new(0xC0A80101);
    /// assert_eq!(addr.format(10).unwrap(), "192.168.1.1");
    /// assert_eq!(
    ///     addr.format(2).unwrap(),
    ///     "11000000.10101000.00000001.00000001"
    /// );
    /// assert!(addr.format(16).is_err());
    /// ```
    pub fn format(&self, base: u32) -> Result<String> {
        Ok(self.format_base(Base::try_from(base)?))
    }

    pub fn format_base(&self, base: Base) -> String {
        format_value(self.value, base)
    }

    /// Return a new address `delta` away from this one.
    pub fn add_value(&self, delta: i64) -> Result<Address> {
        let value = offset_value(self.value, delta)?;
        log::trace!("add_value({delta}) {} -> {}", self, Address::new(value));
        Ok(Address::new(value))
    }

    /// Tokenize into four octet parts and three dot parts.
    pub fn to_parts(&self, base: u32) -> Result<Vec<AddressPart>> {
        Ok(self.to_parts_base(Base::try_from(base)?))
    }

    pub fn to_parts_base(&self, base: Base) -> Vec<AddressPart> {
        octet_parts(self.value, base)
    }
}

impl From<u32> for Address {
    fn from(value: u32) -> Self {
        Address::new(value)
    }
}

impl From<Address> for u32 {
    fn from(addr: Address) -> Self {
        addr.value
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Address::new(u32::from(addr))
    }
}

impl From<Address> for Ipv4Addr {
    fn from(addr: Address) -> Self {
        Ipv4Addr::from(addr.value)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.format_base(Base::Decimal))
    }
}
