//! Error type shared by the address models and the CIDR parser.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CidrError>;

/// Validation failures raised by the model. None of these are transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    #[error("Base must be either 2 or 10, got {0}")]
    InvalidBase(u32),
    #[error("Address value cannot be negative ({0})")]
    Underflow(i64),
    #[error("Address value cannot be greater than 0xffffffff ({0})")]
    Overflow(i64),
    #[error("Prefix cannot be negative ({0})")]
    PrefixNegative(i64),
    #[error("Prefix cannot be greater than 32 ({0})")]
    PrefixTooLarge(i64),
    #[error("Invalid address type '{0}'")]
    InvalidAddressType(String),
    #[error("Invalid IPv4 CIDR format '{0}'")]
    MalformedCidr(String),
    #[error("Invalid IPv4 address values in '{0}'")]
    OctetOutOfRange(String),
}
