extern crate crisplan;

use crisplan::score::hairpin_score;

#[test]
fn test_short_sequences_score_zero() {
    assert_eq!(hairpin_score(b""), 0.0);
    assert_eq!(hairpin_score(b"ACGTACGT"), 0.0);
    // too short for any loop plus two stem arms
    assert_eq!(hairpin_score(b"ACGTACGTACGTACG"), 0.0);
}

#[test]
fn test_unstructured_sequences_score_zero() {
    assert_eq!(hairpin_score(b"AAAAAAAAAAAAAAAAAAAAAAAA"), 0.0);
    assert_eq!(hairpin_score(b"ACACACACACACACACACACACAC"), 0.0);
}

#[test]
fn test_stem_loop_scores_positive() {
    // GC stem with an A-rich loop folds back on itself
    let score = hairpin_score(b"GGGGGGGGAAAACCCCCCCCATCG");
    assert!(score > 0.0, "score was {}", score);
}

#[test]
fn test_stronger_stems_score_higher() {
    let weak = hairpin_score(b"GGGAAAATTTAAAACCCAAAATTT");
    let strong = hairpin_score(b"GGGGGGGGAAAACCCCCCCCAAAA");

    assert!(strong > weak, "strong {} <= weak {}", strong, weak);
}

#[test]
fn test_score_is_deterministic() {
    let seq = b"GCGCGCATATATGCGCGCTTTTGG";

    assert_eq!(hairpin_score(seq), hairpin_score(seq));
}
