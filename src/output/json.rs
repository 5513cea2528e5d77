//! JSON rendering of summaries and ranges.

use super::summary::CidrReport;
use crate::processing::{span, AddressRange};
use serde::Serialize;

#[derive(Serialize, Debug)]
struct Span {
    start: u32,
    /// Exclusive.
    end: u64,
}

#[derive(Serialize, Debug)]
struct JsonOutput<'a> {
    cidrs: &'a [CidrReport],
    ranges: &'a [AddressRange],
    span: Option<Span>,
    overlaps: Vec<[String; 2]>,
}

/// Render reports and ranges as JSON.
///
/// # Arguments
/// * `reports` - Summary per block
/// * `ranges` - Address range per block, used for the shared span
/// * `overlaps` - Overlapping pairs, rendered as CIDR strings
///
/// # Returns
/// * `Ok(String)` - Pretty-printed JSON with one entry per block plus the shared span
/// * `Err` - If serialization fails
pub fn render_json(
    reports: &[CidrReport],
    ranges: &[AddressRange],
    overlaps: &[(AddressRange, AddressRange)],
) -> Result<String, serde_json::Error> {
    let output = JsonOutput {
        cidrs: reports,
        ranges,
        span: span(ranges).map(|(start, end)| Span { start, end }),
        overlaps: overlaps
            .iter()
            .map(|(a, b)| [a.cidr.to_string(), b.cidr.to_string()])
            .collect(),
    };
    serde_json::to_string_pretty(&output)
}
