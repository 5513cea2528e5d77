//! Display radix for dotted addresses.

use crate::error::{CidrError, Result};
use std::fmt;

/// Radix used when rendering an address as dotted octets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    /// Eight zero-padded binary digits per octet.
    Binary,
    /// Unpadded decimal per octet.
    #[default]
    Decimal,
}

impl Base {
    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Decimal => 10,
        }
    }

    /// Render one octet in this radix.
    pub fn format_octet(self, octet: u8) -> String {
        match self {
            Base::Binary => format!("{octet:08b}"),
            Base::Decimal => octet.to_string(),
        }
    }
}

impl TryFrom<u32> for Base {
    type Error = CidrError;

    fn try_from(radix: u32) -> Result<Base> {
        match radix {
            2 => Ok(Base::Binary),
            10 => Ok(Base::Decimal),
            other => Err(CidrError::InvalidBase(other)),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.radix())
    }
}
