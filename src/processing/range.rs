//! Address ranges covered by CIDR blocks.
//!
//! Each block maps to the inclusive `[network, broadcast]` range; a list of
//! ranges shares one axis from the lowest start to one past the highest end.

use crate::models::{Address, CidrAddress};
use itertools::Itertools;
use serde::Serialize;

/// Inclusive address range of a single CIDR block.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRange {
    pub cidr: CidrAddress,
    pub start: u32,
    pub end: u32,
}

impl From<&CidrAddress> for AddressRange {
    fn from(cidr: &CidrAddress) -> Self {
        AddressRange {
            cidr: *cidr,
            start: cidr.network_address().value(),
            end: cidr.broadcast_address().value(),
        }
    }
}

impl AddressRange {
    /// Number of addresses covered; equals the block size.
    pub fn len(&self) -> u64 {
        u64::from(self.end) - u64::from(self.start) + 1
    }

    /// Ranges always cover at least one address.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, addr: Address) -> bool {
        (self.start..=self.end).contains(&addr.value())
    }

    pub fn overlaps(&self, other: &AddressRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// Shared axis `[min start, max end + 1)` for a set of ranges.
///
/// The end bound is exclusive and held as `u64` so a range ending at
/// `255.255.255.255` still fits.
///
/// # Returns
/// `None` for an empty slice, otherwise `(start, end)`
pub fn span(ranges: &[AddressRange]) -> Option<(u32, u64)> {
    let start = ranges.iter().map(|r| r.start).min()?;
    let end = ranges.iter().map(|r| r.end).max()?;
    Some((start, u64::from(end) + 1))
}

/// Find ranges that share at least one address.
///
/// # Arguments
/// * `ranges` - The ranges to compare pairwise
///
/// # Returns
/// Each overlapping pair once, in input order
pub fn overlapping_pairs(ranges: &[AddressRange]) -> Vec<(AddressRange, AddressRange)> {
    let pairs: Vec<(AddressRange, AddressRange)> = ranges
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| a.overlaps(b))
        .map(|(a, b)| (*a, *b))
        .collect();
    if !pairs.is_empty() {
        log::info!("Found {} overlapping CIDR pair(s)", pairs.len());
    }
    pairs
}
