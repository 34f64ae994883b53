extern crate crisplan;

use crisplan::iupac::{complement, matches};

#[test]
fn test_basic_nucleotides() {
    // first
    assert!(matches(b'A', b'A'));
    assert!(!matches(b'A', b'C'));
    assert!(!matches(b'A', b'G'));
    assert!(!matches(b'A', b'T'));
    // last
    assert!(!matches(b'T', b'A'));
    assert!(!matches(b'T', b'C'));
    assert!(!matches(b'T', b'G'));
    assert!(matches(b'T', b'T'));
}

#[test]
fn test_degenerate_codes() {
    assert!(matches(b'N', b'A'));
    assert!(matches(b'N', b'C'));
    assert!(matches(b'N', b'G'));
    assert!(matches(b'N', b'T'));
    assert!(matches(b'N', b'B')); // C, G, T is a subset of N
    assert!(matches(b'N', b'D')); // A, G, T likewise
    assert!(!matches(b'N', b'@'));
    assert!(!matches(b'N', b'E'));

    assert!(matches(b'V', b'A'));
    assert!(matches(b'V', b'C'));
    assert!(matches(b'V', b'G'));
    assert!(!matches(b'V', b'T'));

    assert!(matches(b'R', b'A'));
    assert!(matches(b'R', b'G'));
    assert!(!matches(b'R', b'C'));
    assert!(!matches(b'R', b'T'));
}

#[test]
fn test_subset_direction() {
    // a concrete base never matches a broader code as the query side
    assert!(!matches(b'A', b'N'));
    assert!(!matches(b'G', b'R'));
    // equal degenerate codes match themselves
    assert!(matches(b'R', b'R'));
    assert!(matches(b'B', b'B'));
}

#[test]
fn test_non_nucleotide_values() {
    assert!(matches(b'!', b'!'));
    assert!(!matches(b'!', b'?'));
    assert!(matches(b'I', b'I'));
    assert!(!matches(b'I', b'J'));
}

#[test]
fn test_complement() {
    assert_eq!(complement(b'A'), b'T');
    assert_eq!(complement(b'T'), b'A');
    assert_eq!(complement(b'C'), b'G');
    assert_eq!(complement(b'G'), b'C');

    assert_eq!(complement(b'N'), b'N');
    assert_eq!(complement(b'V'), b'B');
    assert_eq!(complement(b'B'), b'V');
    assert_eq!(complement(b'R'), b'Y');
    assert_eq!(complement(b'Y'), b'R');
    assert_eq!(complement(b'S'), b'S');
    assert_eq!(complement(b'W'), b'W');

    // non-IUPAC bytes pass through
    assert_eq!(complement(b'@'), b'@');
}
