extern crate crisplan;

use crisplan::errors::ErrorKind;
use crisplan::normalize::{normalize_literal, MIN_GENE_LEN};

fn assert_invalid(result: crisplan::errors::Result<Vec<u8>>) {
    match result.unwrap_err().kind() {
        ErrorKind::InvalidSequence(_) => (),
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[test]
fn test_valid_sequence_is_uppercased() {
    let raw = "acgt".repeat(10);
    let seq = normalize_literal(&raw).unwrap();

    assert_eq!(seq, "ACGT".repeat(10).into_bytes());
}

#[test]
fn test_whitespace_is_trimmed() {
    let raw = format!("  {}\n", "ACGT".repeat(10));

    assert_eq!(normalize_literal(&raw).unwrap(), "ACGT".repeat(10).into_bytes());
}

#[test]
fn test_empty_sequence_is_rejected() {
    assert_invalid(normalize_literal(""));
    assert_invalid(normalize_literal("   "));
}

#[test]
fn test_sequence_below_length_floor_is_rejected() {
    // 29 nt, one short of the floor
    let raw = "A".repeat(MIN_GENE_LEN - 1);
    assert_invalid(normalize_literal(&raw));

    assert!(normalize_literal(&"A".repeat(MIN_GENE_LEN)).is_ok());
}

#[test]
fn test_ambiguity_codes_are_rejected() {
    // N is a valid IUPAC code but not a valid input base
    let raw = format!("{}n{}", "ACGT".repeat(5), "ACGT".repeat(5));
    assert_invalid(normalize_literal(&raw));

    let raw = format!("{}N{}", "ACGT".repeat(5), "ACGT".repeat(5));
    assert_invalid(normalize_literal(&raw));
}

#[test]
fn test_non_nucleotide_characters_are_rejected() {
    assert_invalid(normalize_literal(&format!("{}x", "ACGT".repeat(10))));
    assert_invalid(normalize_literal(&format!("{}-", "ACGT".repeat(10))));
    assert_invalid(normalize_literal(&"ACGU".repeat(10)));
}
