extern crate bio;
extern crate bio_types;
extern crate crisplan;

use bio::alphabets::dna;
use bio_types::strand::Strand;

use crisplan::cas::CasProfile;
use crisplan::scan::{scan, tile, GuideCandidate};

// A 60-nt sequence with several NGG sites on both strands.
const RICH: &[u8] = b"ATGGCCATTGTAATGGGCCGCTGAAAGGGTGCCCGATAGCTAGCTAGGATCCAAGGTACG";

#[test]
fn test_scenario_single_forward_spcas9_site() {
    let seq = format!("ATG{}CGG{}", "A".repeat(20), "ATG".repeat(3));
    let candidates = scan("demo", seq.as_bytes(), &CasProfile::sp_cas9());

    assert_eq!(candidates.len(), 1);
    let hit = &candidates[0];
    assert_eq!(hit.strand, Strand::Forward);
    assert_eq!(hit.guide, "A".repeat(20));
    assert_eq!(hit.pam, "CGG");
    assert_eq!(hit.start, 3);
    assert_eq!(hit.end, 23);
    assert_eq!(hit.cutsite, Some(20));
}

#[test]
fn test_sequence_shorter_than_window_yields_nothing() {
    let profile = CasProfile::sp_cas9();

    assert!(scan("g", b"ACGTACGTACGTACGTACGTAG", &profile).is_empty());
    assert!(scan("g", b"", &profile).is_empty());
}

#[test]
fn test_no_pam_occurrence_yields_nothing() {
    // A/C alternation carries no G or T at all; its reverse complement
    // alternates G/T, so it has no GG or TT dinucleotide and every G is
    // followed by a pyrimidine. Neither strand holds an NGG, NNGRR, TTN or
    // TTTV site.
    let seq = "AC".repeat(20);

    for name in &["SpCas9", "SaCas9", "FnCas12a", "LbCas12a"] {
        let profile = CasProfile::get(name).unwrap();
        assert!(
            scan("g", seq.as_bytes(), &profile).is_empty(),
            "unexpected candidates for {}",
            name
        );
    }
}

#[test]
fn test_forward_count_matches_brute_force() {
    let profile = CasProfile::sp_cas9();
    let window = profile.window_len();

    let mut expected = 0;
    for start in 0..=RICH.len() - window {
        let w = &RICH[start..start + window];
        if w[window - 2] == b'G' && w[window - 1] == b'G' {
            expected += 1;
        }
    }
    assert!(expected > 0);

    let forward = scan("g", RICH, &profile)
        .into_iter()
        .filter(|c| c.strand == Strand::Forward)
        .count();
    assert_eq!(forward, expected);
}

#[test]
fn test_reverse_candidates_mirror_forward_scan_of_revcomp() {
    let profile = CasProfile::sp_cas9();
    let len = RICH.len() as i64;
    let revcomp = dna::revcomp(RICH);

    let reverse: Vec<GuideCandidate> = scan("g", RICH, &profile)
        .into_iter()
        .filter(|c| c.strand == Strand::Reverse)
        .collect();
    let mirrored: Vec<GuideCandidate> = scan("g", &revcomp, &profile)
        .into_iter()
        .filter(|c| c.strand == Strand::Forward)
        .collect();

    assert!(!reverse.is_empty());
    assert_eq!(reverse.len(), mirrored.len());
    for rev in &reverse {
        let mirror = mirrored
            .iter()
            .find(|c| c.start == RICH.len() - rev.end)
            .expect("no mirrored candidate");

        assert_eq!(mirror.guide, rev.guide);
        assert_eq!(mirror.pam, rev.pam);
        assert_eq!(mirror.cutsite, rev.cutsite.map(|cut| len - cut));
    }
}

#[test]
fn test_candidates_are_ordered_and_deterministic() {
    let profile = CasProfile::sp_cas9();
    let first = scan("g", RICH, &profile);
    let second = scan("g", RICH, &profile);

    assert_eq!(first, second);
    for pair in first.windows(2) {
        assert!(pair[0].start <= pair[1].start);
        if pair[0].start == pair[1].start {
            // forward sorts before reverse at equal offsets
            assert_eq!(pair[0].strand, Strand::Forward);
        }
    }
}

#[test]
fn test_head_pam_splits_window() {
    let profile = CasProfile::lb_cas12a();
    let seq = format!("TTTA{}", "ACGTG".repeat(5));
    let forward: Vec<GuideCandidate> = scan("g", seq.as_bytes(), &profile)
        .into_iter()
        .filter(|c| c.strand == Strand::Forward)
        .collect();

    let hit = forward.iter().find(|c| c.start == 4).expect("no TTTA hit");
    assert_eq!(hit.pam, "TTTA");
    assert_eq!(hit.end, 27);
    assert_eq!(hit.guide.as_bytes(), &seq.as_bytes()[4..27]);
    // staggered cut downstream of the PAM boundary
    assert_eq!(hit.cutsite, Some(4 + 18));
}

#[test]
fn test_pamless_scan_emits_every_window_forward_only() {
    let profile = CasProfile::lsh_cas13a();
    let seq = "A".repeat(40);
    let candidates = scan("g", seq.as_bytes(), &profile);

    assert_eq!(candidates.len(), 40 - profile.spacer_len + 1);
    for (idx, candidate) in candidates.iter().enumerate() {
        assert_eq!(candidate.strand, Strand::Forward);
        assert_eq!(candidate.start, idx);
        assert!(candidate.pam.is_empty());
        assert_eq!(candidate.cutsite, None);
    }
}

#[test]
fn test_tile_spacing() {
    let profile = CasProfile::sp_cas9();
    let seq = "A".repeat(30);
    let tiles = tile("g", seq.as_bytes(), &profile, 5);

    assert_eq!(tiles.len(), 3);
    for (idx, candidate) in tiles.iter().enumerate() {
        assert_eq!(candidate.start, idx * 5);
        assert_eq!(candidate.end, idx * 5 + 20);
        assert_eq!(candidate.strand, Strand::Forward);
        assert!(candidate.pam.is_empty());
    }
}
