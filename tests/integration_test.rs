//! Integration tests for cidr-calc
//!
//! These tests exercise the public API from parsing through derived values,
//! stepping, tokenization and output.

use cidr_calc::models::{
    join_parts, Address, AddressPartKind, AddressType, CidrAddress, CidrParser,
};
use cidr_calc::output::{render_json, summary, CidrReport};
use cidr_calc::processing::{span, AddressRange, Step};
use cidr_calc::{evaluate, Base, CidrError};

const SAMPLES: [u32; 8] = [
    0x00000000, 0x00000001, 0x0A000001, 0x7FFFFFFF, 0x80000000, 0xC0A80101, 0xDEADBEEF,
    0xFFFFFFFF,
];

#[test]
fn test_private_block_scenario() {
    let cidr = CidrParser::parse("192.168.1.1/24").expect("Failed to parse CIDR");
    assert_eq!(cidr.address().value(), 0xC0A80101);
    assert_eq!(cidr.network_address().format(10).unwrap(), "192.168.1.0");
    assert_eq!(cidr.broadcast_address().format(10).unwrap(), "192.168.1.255");
    assert_eq!(cidr.block_size(), 256);
    assert_eq!(cidr.cidr_string(10).unwrap(), "192.168.1.1/24");
}

#[test]
fn test_whole_space_scenario() {
    let cidr = CidrParser::parse("0.0.0.0/0").unwrap();
    assert_eq!(cidr.format(10, AddressType::Netmask).unwrap(), "0.0.0.0");
    assert_eq!(cidr.format(10, AddressType::Wildcard).unwrap(), "255.255.255.255");
    assert_eq!(cidr.block_size(), 4294967296);
}

#[test]
fn test_single_host_scenario() {
    let cidr = CidrParser::parse("255.255.255.255/32").unwrap();
    assert_eq!(cidr.network_address(), cidr.broadcast_address());
    assert_eq!(cidr.broadcast_address().to_string(), "255.255.255.255");
    assert_eq!(cidr.block_size(), 1);
}

#[test]
fn test_parse_failures() {
    assert!(matches!(
        CidrParser::parse("300.1.1.1/24"),
        Err(CidrError::OctetOutOfRange(_))
    ));
    assert!(matches!(
        CidrParser::parse("1.1.1.1"),
        Err(CidrError::MalformedCidr(_))
    ));
}

#[test]
fn test_mask_properties_for_every_prefix() {
    for v in SAMPLES {
        for p in 0..=32 {
            let cidr = CidrAddress::new(v, p).unwrap();
            let mask = cidr.netmask().value();
            let wild = cidr.wildcard().value();
            assert_eq!(mask & wild, 0);
            assert_eq!(mask | wild, 0xFFFFFFFF);
            assert_eq!(cidr.block_size(), 1u64 << (32 - p));
            assert!(cidr.network_address().value() <= v);
            assert!(v <= cidr.broadcast_address().value());
        }
    }
}

#[test]
fn test_format_round_trips_through_parser() {
    for v in SAMPLES {
        let text = format!("{}/32", Address::new(v).format(10).unwrap());
        let cidr = CidrParser::parse(&text).unwrap();
        assert_eq!(cidr.address().value(), v, "{text}");
    }
}

#[test]
fn test_identity_steps() {
    let cidr = CidrParser::parse("172.16.5.4/20").unwrap();
    assert_eq!(cidr.add_value(0).unwrap(), cidr);
    assert_eq!(cidr.add_prefix(0).unwrap(), cidr);
    let addr = Address::new(0x01020304);
    assert_eq!(addr.add_value(0).unwrap(), addr);
}

#[test]
fn test_boundary_errors() {
    assert!(matches!(
        Address::new(0xFFFFFFFF).add_value(1),
        Err(CidrError::Overflow(_))
    ));
    assert!(matches!(
        Address::new(0).add_value(-1),
        Err(CidrError::Underflow(_))
    ));
    assert!(matches!(
        CidrAddress::new(0x0A000000, 32).unwrap().add_prefix(1),
        Err(CidrError::PrefixTooLarge(33))
    ));
    assert!(matches!(
        CidrAddress::new(0x0A000000, 0).unwrap().add_prefix(-1),
        Err(CidrError::PrefixNegative(-1))
    ));
}

#[test]
fn test_cidr_parts() {
    let cidr = CidrParser::parse("192.168.1.1/24").unwrap();
    let parts = cidr.to_parts(10).unwrap();
    assert_eq!(parts.len(), 8);
    let count = |kind: AddressPartKind| parts.iter().filter(|p| p.kind == kind).count();
    assert_eq!(count(AddressPartKind::Decimal), 4);
    assert_eq!(count(AddressPartKind::Dot), 3);
    assert_eq!(count(AddressPartKind::Prefix), 1);
    assert_eq!(parts.last().unwrap().value, "/24");
    assert_eq!(join_parts(&parts), "192.168.1.1/24");

    let binary = cidr.to_parts(2).unwrap();
    assert_eq!(join_parts(&binary), cidr.cidr_string(2).unwrap());
    assert!(cidr.to_parts(8).is_err());
}

#[test]
fn test_stepping_walk() {
    let mut cidr = CidrParser::parse("10.0.0.0/30").unwrap();
    for _ in 0..3 {
        cidr = Step::NextSubnet.apply(&cidr).unwrap();
    }
    assert_eq!(cidr.to_string(), "10.0.0.12/30");
    cidr = Step::ShrinkPrefix.apply(&cidr).unwrap();
    assert_eq!(cidr.network_address().to_string(), "10.0.0.8");
    cidr = Step::PrevHost.apply(&cidr).unwrap();
    assert_eq!(cidr.to_string(), "10.0.0.11/29");
}

#[test]
fn test_default_example_ranges() {
    let cidrs: Vec<CidrAddress> = ["192.168.0.0/23", "192.168.0.0/24", "192.168.1.0/24"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let ranges: Vec<AddressRange> = cidrs.iter().map(AddressRange::from).collect();
    assert_eq!(span(&ranges), Some((0xC0A80000, 0xC0A80200)));
}

#[test]
fn test_evaluate_and_render_json() {
    let inputs: Vec<String> = vec!["10.0.0.0/8".to_string(), "10.1.0.0/16".to_string()];
    let eval = evaluate(&inputs, &[], Base::Decimal);
    assert!(eval.failures.is_empty());
    assert_eq!(eval.overlaps.len(), 1);

    let json = render_json(&eval.reports, &eval.ranges, &eval.overlaps).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["cidrs"][1]["rows"][1]["value"], "10.1.0.0");
    assert_eq!(value["overlaps"][0][0], "10.0.0.0/8");
}

#[test]
fn test_summary_matches_report() {
    let cidr = CidrParser::parse("172.16.0.9/12").unwrap();
    let report = CidrReport::new(cidr, Base::Decimal);
    assert_eq!(report.rows, summary(&cidr, Base::Decimal));
    assert_eq!(report.rows[2].value, "255.240.0.0");
    assert_eq!(report.rows[4].value, "172.31.255.255");
}
