//! Display tokens for rendering addresses octet by octet.

use super::Base;
use serde::Serialize;

/// What a single display token represents.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AddressPartKind {
    Dot,
    Prefix,
    Decimal,
    Binary,
}

impl From<Base> for AddressPartKind {
    fn from(base: Base) -> Self {
        match base {
            Base::Binary => AddressPartKind::Binary,
            Base::Decimal => AddressPartKind::Decimal,
        }
    }
}

/// One token of a formatted address or CIDR string.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AddressPart {
    /// Zero-based position in the token sequence.
    pub key: usize,
    /// Token text, e.g. `"192"`, `"."` or `"/24"`.
    pub value: String,
    pub kind: AddressPartKind,
}

/// Concatenate token values back into the formatted string.
pub fn join_parts(parts: &[AddressPart]) -> String {
    parts.iter().map(|p| p.value.as_str()).collect()
}

/// Build the 7 octet/dot tokens for `value`, most-significant octet first.
pub(crate) fn octet_parts(value: u32, base: Base) -> Vec<AddressPart> {
    let kind = AddressPartKind::from(base);
    let mut parts = Vec::with_capacity(8);
    for (i, octet) in value.to_be_bytes().into_iter().enumerate() {
        if i > 0 {
            parts.push(AddressPart {
                key: parts.len(),
                value: ".".to_string(),
                kind: AddressPartKind::Dot,
            });
        }
        parts.push(AddressPart {
            key: parts.len(),
            value: base.format_octet(octet),
            kind,
        });
    }
    parts
}

/// Append the `/<prefix>` token.
pub(crate) fn push_prefix_part(parts: &mut Vec<AddressPart>, prefix: u8) {
    parts.push(AddressPart {
        key: parts.len(),
        value: format!("/{prefix}"),
        kind: AddressPartKind::Prefix,
    });
}
