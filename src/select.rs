use std::cmp::Ordering;

use bio::alphabets::dna;
use serde::{Deserialize, Serialize};

use crate::cas::CasProfile;
use crate::dna::{contains_motif, count_occurrences, motif_revcomp};
use crate::scan::GuideCandidate;
use crate::score::hairpin_score;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RestrictionEnzyme {
    pub name: String,
    pub motif: String,
}

impl RestrictionEnzyme {
    pub fn new(name: &str, motif: &str) -> RestrictionEnzyme {
        RestrictionEnzyme {
            name: name.to_owned(),
            motif: motif.to_owned(),
        }
    }

    /// True if the recognition site occurs in `seq` in either orientation.
    pub fn cuts(&self, seq: &[u8]) -> bool {
        let motif = self.motif.as_bytes();

        contains_motif(seq, motif) || contains_motif(seq, &motif_revcomp(motif))
    }
}

#[derive(Clone, Debug)]
pub struct SelectPolicy {
    pub max_per_gene: usize,
    pub allow_overlap: bool,
}

impl Default for SelectPolicy {
    fn default() -> SelectPolicy {
        SelectPolicy {
            max_per_gene: 3,
            allow_overlap: false,
        }
    }
}

/// Drops candidates whose spacer would be re-cut by any of the cloning
/// enzymes; run on every candidate set before construction planning.
pub fn filter_restricted(
    candidates: Vec<GuideCandidate>,
    constraints: &[RestrictionEnzyme],
) -> Vec<GuideCandidate> {
    candidates
        .into_iter()
        .filter(|candidate| {
            let guide = candidate.guide.as_bytes();

            !constraints.iter().any(|enzyme| enzyme.cuts(guide))
        })
        .collect()
}

/// A spacer occurring more than once across the two strands of its own gene
/// cannot target a unique site. This is a local substring-count heuristic,
/// not genome-wide off-target alignment.
fn is_unique(candidate: &GuideCandidate, sequence: &[u8]) -> bool {
    let guide = candidate.guide.as_bytes();
    let hits = count_occurrences(sequence, guide)
        + count_occurrences(&dna::revcomp(sequence), guide);

    hits == 1
}

fn overlaps(a: &GuideCandidate, b: &GuideCandidate) -> bool {
    a.start < b.end && b.start < a.end
}

/// Applies the cloning constraints and the retention policy to a scanned
/// candidate set, in order: restriction-site exclusion, within-gene
/// uniqueness, non-overlap (unless the policy allows it), and the per-gene
/// cap with earliest-start tie-breaking. For the RNA-targeting systems the
/// surviving candidates are ranked by ascending hairpin score first, so the
/// cap keeps the most structure-free target windows.
///
/// An empty result is a normal outcome ("no guide found"), not an error.
pub fn select(
    candidates: Vec<GuideCandidate>,
    sequence: &[u8],
    profile: &CasProfile,
    constraints: &[RestrictionEnzyme],
    policy: &SelectPolicy,
) -> Vec<GuideCandidate> {
    let mut survivors: Vec<GuideCandidate> = filter_restricted(candidates, constraints)
        .into_iter()
        .filter(|candidate| is_unique(candidate, sequence))
        .collect();

    if profile.targets_rna() {
        let mut scored: Vec<(f64, GuideCandidate)> = survivors
            .into_iter()
            .map(|candidate| (hairpin_score(candidate.guide.as_bytes()), candidate))
            .collect();
        // Stable sort keeps the positional order among equal scores
        scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        survivors = scored.into_iter().map(|(_, candidate)| candidate).collect();
    }

    let mut retained: Vec<GuideCandidate> = Vec::new();
    for candidate in survivors {
        if retained.len() == policy.max_per_gene {
            break;
        }

        if policy.allow_overlap || !retained.iter().any(|kept| overlaps(kept, &candidate)) {
            retained.push(candidate);
        }
    }

    retained
}
