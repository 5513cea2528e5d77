//! Value types for IPv4 CIDR calculations.
//!
//! - [`Address`] - 32-bit address with dotted formatting
//! - [`CidrAddress`] - address plus prefix with derived netmask/network/broadcast
//! - [`AddressPart`] - display tokens for octet-level rendering
//! - [`CidrParser`] - validated construction from `a.b.c.d/p` text

mod address;
mod address_part;
mod base;
mod cidr_address;
mod parser;

// Re-export public types
pub use address::{Address, MAX_VALUE};
pub use address_part::{join_parts, AddressPart, AddressPartKind};
pub use base::Base;
pub use cidr_address::{AddressType, CidrAddress, MAX_PREFIX};
pub use parser::CidrParser;
