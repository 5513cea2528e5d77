//! Summary rows for a CIDR block: the values a user typically copies.

use crate::models::{join_parts, AddressPart, Base, CidrAddress};
use serde::Serialize;

/// One labeled line of a CIDR summary.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    /// Plain text value, ready for copy/paste.
    pub value: String,
    /// Display tokens of `value`. Empty for the block-size row.
    pub parts: Vec<AddressPart>,
}

impl SummaryRow {
    fn from_parts(label: &'static str, parts: Vec<AddressPart>) -> SummaryRow {
        SummaryRow {
            label,
            value: join_parts(&parts),
            parts,
        }
    }
}

/// A CIDR block together with its summary rows.
#[derive(Serialize, Debug, Clone)]
pub struct CidrReport {
    pub cidr: CidrAddress,
    pub rows: Vec<SummaryRow>,
}

impl CidrReport {
    pub fn new(cidr: CidrAddress, base: Base) -> CidrReport {
        CidrReport {
            cidr,
            rows: summary(&cidr, base),
        }
    }
}

/// Build the summary of a CIDR block.
///
/// # Arguments
/// * `cidr` - The block to summarize
/// * `base` - Radix for the address rows
///
/// # Returns
/// Rows in display order: CIDR, network, netmask, wildcard, broadcast, block size
pub fn summary(cidr: &CidrAddress, base: Base) -> Vec<SummaryRow> {
    log::trace!("summary({cidr}, base {base})");
    vec![
        SummaryRow::from_parts("CIDR", cidr.to_parts_base(base)),
        SummaryRow::from_parts("Network", cidr.network_address().to_parts_base(base)),
        SummaryRow::from_parts("Netmask", cidr.netmask().to_parts_base(base)),
        SummaryRow::from_parts("Wildcard", cidr.wildcard().to_parts_base(base)),
        SummaryRow::from_parts("Broadcast", cidr.broadcast_address().to_parts_base(base)),
        SummaryRow {
            label: "Block size",
            value: cidr.block_size().to_string(),
            parts: vec![],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CidrParser;

    #[test]
    fn test_summary_decimal() {
        let cidr = CidrParser::parse("192.168.1.1/24").unwrap();
        let rows = summary(&cidr, Base::Decimal);
        let labels: Vec<&str> = rows.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec!["CIDR", "Network", "Netmask", "Wildcard", "Broadcast", "Block size"]
        );
        let values: Vec<&str> = rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(
            values,
            vec![
                "192.168.1.1/24",
                "192.168.1.0",
                "255.255.255.0",
                "0.0.0.255",
                "192.168.1.255",
                "256"
            ]
        );
        assert_eq!(rows[0].parts.len(), 8);
        assert_eq!(rows[1].parts.len(), 7);
        assert!(rows[5].parts.is_empty());
    }

    #[test]
    fn test_row_values_match_joined_parts() {
        let cidr = CidrParser::parse("10.1.2.3/15").unwrap();
        for row in summary(&cidr, Base::Binary).iter().filter(|r| !r.parts.is_empty()) {
            assert_eq!(row.value, join_parts(&row.parts), "{}", row.label);
        }
    }

    #[test]
    fn test_summary_binary() {
        let cidr = CidrParser::parse("0.0.0.0/0").unwrap();
        let rows = summary(&cidr, Base::Binary);
        assert_eq!(rows[0].value, "00000000.00000000.00000000.00000000/0");
        assert_eq!(rows[3].value, "11111111.11111111.11111111.11111111");
        assert_eq!(rows[5].value, "4294967296");
    }
}
