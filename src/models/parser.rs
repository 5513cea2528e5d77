//! Parse `a.b.c.d/p` text into a [`CidrAddress`].

use super::CidrAddress;
use crate::error::{CidrError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // ASCII digits only; `\d` would also accept other Unicode digits.
    static ref CIDR_RE: Regex = Regex::new(
        r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})/([0-9]{1,2})$"
    )
    .expect("Invalid Regex?");
}

/// Entry point for building a [`CidrAddress`] from untrusted text.
pub struct CidrParser;

impl CidrParser {
    /// Parse a CIDR string such as `"192.168.1.1/24"`.
    ///
    /// No whitespace or sign characters are accepted. Prefix range errors come
    /// from [`CidrAddress::new`].
    ///
    /// # Examples
    /// ```
    /// use cidr_calc::models::CidrParser;
    /// let cidr = CidrParser::parse("192.168.1.1/24").unwrap();
    /// assert_eq!(cidr.address().value(), 0xC0A80101);
    /// assert!(CidrParser::parse("1.1.1.1").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<CidrAddress> {
        log::debug!("parse({text})");
        let caps = CIDR_RE.captures(text).ok_or_else(|| {
            log::warn!("Rejected malformed CIDR: {text:?}");
            CidrError::MalformedCidr(text.to_string())
        })?;

        let mut value: u32 = 0;
        for i in 1..=4usize {
            // at most 3 digits, always fits
            let octet: u32 = caps[i]
                .parse()
                .map_err(|_| CidrError::MalformedCidr(text.to_string()))?;
            if octet > 255 {
                log::warn!("Rejected octet {octet} in {text:?}");
                return Err(CidrError::OctetOutOfRange(text.to_string()));
            }
            value = (value << 8) | octet;
        }

        let prefix: i32 = caps[5]
            .parse()
            .map_err(|_| CidrError::MalformedCidr(text.to_string()))?;

        CidrAddress::new(value, prefix)
    }
}
