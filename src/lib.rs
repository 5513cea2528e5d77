//! IPv4 CIDR block calculator.
//!
//! The [`models`] module holds the value types; [`processing`] and [`output`]
//! build on them for the `cidr-calc` binary.

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{CidrError, Result};
pub use models::{
    Address, AddressPart, AddressPartKind, AddressType, Base, CidrAddress, CidrParser,
};

use output::CidrReport;
use processing::{apply_steps, overlapping_pairs, AddressRange, Step};

/// Result of parsing and stepping a batch of CIDR inputs.
#[derive(Debug, Default)]
pub struct Evaluation {
    pub reports: Vec<CidrReport>,
    pub ranges: Vec<AddressRange>,
    pub overlaps: Vec<(AddressRange, AddressRange)>,
    /// Inputs that failed to parse or step, with the reason.
    pub failures: Vec<(String, CidrError)>,
}

/// Parse every input, apply `steps` to each, and collect reports for the valid ones.
///
/// An invalid input does not stop the others.
///
/// # Arguments
/// * `inputs` - CIDR strings such as `"10.0.0.0/8"`
/// * `steps` - Stepping operations applied to each parsed block
/// * `base` - Radix for the summary rows
pub fn evaluate(inputs: &[String], steps: &[Step], base: Base) -> Evaluation {
    log::info!("#Start evaluate() inputs={} steps={}", inputs.len(), steps.len());
    let mut evaluation = Evaluation::default();
    let mut cidrs = Vec::new();

    for input in inputs {
        match CidrParser::parse(input).and_then(|cidr| apply_steps(cidr, steps)) {
            Ok(cidr) => cidrs.push(cidr),
            Err(e) => {
                log::warn!("Skipping '{input}': {e}");
                evaluation.failures.push((input.clone(), e));
            }
        }
    }

    evaluation.ranges = cidrs.iter().map(AddressRange::from).collect();
    evaluation.overlaps = overlapping_pairs(&evaluation.ranges);
    evaluation.reports = cidrs
        .into_iter()
        .map(|cidr| CidrReport::new(cidr, base))
        .collect();
    evaluation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_evaluate_mixed_inputs() {
        let eval = evaluate(
            &inputs(&["192.168.0.0/23", "300.1.1.1/24", "192.168.1.0/24", "1.1.1.1"]),
            &[],
            Base::Decimal,
        );
        assert_eq!(eval.reports.len(), 2);
        assert_eq!(eval.ranges.len(), 2);
        assert_eq!(eval.overlaps.len(), 1);
        assert_eq!(eval.failures.len(), 2);
        assert!(matches!(eval.failures[0].1, CidrError::OctetOutOfRange(_)));
        assert!(matches!(eval.failures[1].1, CidrError::MalformedCidr(_)));
    }

    #[test]
    fn test_evaluate_with_steps() {
        let eval = evaluate(
            &inputs(&["10.0.0.0/24", "255.255.255.0/24"]),
            &[Step::NextSubnet],
            Base::Decimal,
        );
        assert_eq!(eval.reports.len(), 1);
        assert_eq!(eval.reports[0].cidr.to_string(), "10.0.1.0/24");
        assert_eq!(eval.failures.len(), 1);
        assert!(matches!(eval.failures[0].1, CidrError::Overflow(_)));
    }
}
