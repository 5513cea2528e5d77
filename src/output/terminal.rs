//! Terminal rendering with per-token colors.

use super::summary::CidrReport;
use crate::models::{Address, AddressPart, AddressPartKind};
use crate::processing::AddressRange;
use colored::Colorize;

/// Format a value as a right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// The value padded on the left to `width`, or unchanged if already wider
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:>width$}")
}

/// Join tokens, coloring octets, dots and the prefix differently.
pub fn color_parts(parts: &[AddressPart], color: bool) -> String {
    parts
        .iter()
        .map(|part| {
            if !color {
                return part.value.clone();
            }
            match part.kind {
                AddressPartKind::Decimal | AddressPartKind::Binary => {
                    part.value.cyan().to_string()
                }
                AddressPartKind::Dot => part.value.dimmed().to_string(),
                AddressPartKind::Prefix => part.value.yellow().to_string(),
            }
        })
        .collect()
}

/// Render one block's summary.
///
/// # Arguments
/// * `report` - The block and its summary rows
/// * `color` - Color tokens by kind when true
///
/// # Returns
/// One `label: value` line per row, labels right-aligned
pub fn render_report(report: &CidrReport, color: bool) -> String {
    let mut out = String::new();
    for row in &report.rows {
        let value = if row.parts.is_empty() {
            if color {
                row.value.bold().to_string()
            } else {
                row.value.clone()
            }
        } else {
            color_parts(&row.parts, color)
        };
        out.push_str(&format!("{}: {value}\n", format_field(row.label, 10)));
    }
    out
}

/// Render a start/end/size table for several ranges, followed by any overlaps.
///
/// # Arguments
/// * `ranges` - Ranges in input order
/// * `overlaps` - Overlapping pairs, as from [`crate::processing::overlapping_pairs`]
/// * `color` - Highlight overlap lines when true
pub fn render_ranges(
    ranges: &[AddressRange],
    overlaps: &[(AddressRange, AddressRange)],
    color: bool,
) -> String {
    let mut out = format!(
        "{} {} {} {}\n",
        format_field("cidr", 18),
        format_field("start", 15),
        format_field("end", 15),
        format_field("size", 10)
    );
    for r in ranges {
        out.push_str(&format!(
            "{} {} {} {}\n",
            format_field(r.cidr, 18),
            format_field(Address::new(r.start), 15),
            format_field(Address::new(r.end), 15),
            format_field(r.len(), 10)
        ));
    }
    for (a, b) in overlaps {
        let label = if color {
            "overlap".on_red().to_string()
        } else {
            "overlap".to_string()
        };
        out.push_str(&format!("{label}: {} <-> {}\n", a.cidr, b.cidr));
    }
    out
}
