use bio::alphabets::dna;
use bio_types::strand::Strand;
use serde::{Deserialize, Serialize};

use crate::cas::CasProfile;
use crate::pam::Position;

/// Serde adapter for bio-types' `Strand`, which carries no serde impls of
/// its own; encoded as the conventional "+"/"-"/"." symbol.
pub mod strand_symbol {
    use bio_types::strand::Strand;
    use serde::de::{self, Deserialize, Deserializer};
    use serde::Serializer;

    pub fn serialize<S: Serializer>(strand: &Strand, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(strand.strand_symbol())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Strand, D::Error> {
        match String::deserialize(deserializer)?.as_ref() {
            "+" => Ok(Strand::Forward),
            "-" => Ok(Strand::Reverse),
            "." => Ok(Strand::Unknown),
            other => Err(de::Error::custom(format!("invalid strand symbol {:?}", other))),
        }
    }
}

/// One possible target site. `start`/`end` delimit the spacer itself in
/// forward coordinates of the resolved gene sequence; `guide` and `pam` are
/// given in the orientation of the matched strand. Derived data only, never
/// mutated after the scan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuideCandidate {
    pub gene: String,
    pub start: usize,
    pub end: usize,
    #[serde(with = "strand_symbol")]
    pub strand: Strand,
    pub guide: String,
    pub pam: String,
    pub cutsite: Option<i64>,
}

fn forward_candidates(gene: &str, sequence: &[u8], profile: &CasProfile) -> Vec<GuideCandidate> {
    let window_len = profile.window_len();
    if sequence.len() < window_len {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for (idx, window) in sequence.windows(window_len).enumerate() {
        let (spacer, motif, spacer_start) = match &profile.pam {
            Some(pam) => match pam.split(window) {
                Some((spacer, motif)) => {
                    let spacer_start = match pam.position() {
                        Position::Head => idx + pam.len(),
                        Position::Tail => idx,
                    };

                    (spacer, motif, spacer_start)
                }
                None => continue,
            },
            None => (window, &b""[..], idx),
        };

        let cutsite = profile.cutsite.map(|offset| match profile.pam.as_ref().map(|p| p.position()) {
            // Offset is relative to the PAM boundary nearest the spacer
            Some(Position::Tail) => (spacer_start + profile.spacer_len) as i64 + offset as i64,
            _ => spacer_start as i64 + offset as i64,
        });

        candidates.push(GuideCandidate {
            gene: gene.to_owned(),
            start: spacer_start,
            end: spacer_start + profile.spacer_len,
            strand: Strand::Forward,
            guide: String::from_utf8_lossy(spacer).into_owned(),
            pam: String::from_utf8_lossy(motif).into_owned(),
            cutsite,
        });
    }

    candidates
}

fn reverse_candidates(gene: &str, sequence: &[u8], profile: &CasProfile) -> Vec<GuideCandidate> {
    let revcomp = dna::revcomp(sequence);
    let mut candidates = forward_candidates(gene, &revcomp, profile);

    let len = revcomp.len();
    for candidate in &mut candidates {
        let start = len - candidate.end;
        let end = len - candidate.start;

        candidate.start = start;
        candidate.end = end;
        candidate.cutsite = candidate.cutsite.map(|cut| len as i64 - cut);
        candidate.strand = Strand::Reverse;
    }

    candidates
}

/// Finds all candidate sites for a profile on both strands. Candidates are
/// ordered by ascending start offset, forward strand first at equal starts;
/// identical inputs always yield the identical ordered output. A sequence
/// shorter than the scan window yields an empty result, not an error.
pub fn scan(gene: &str, sequence: &[u8], profile: &CasProfile) -> Vec<GuideCandidate> {
    let mut candidates = forward_candidates(gene, sequence, profile);
    if profile.both_strands {
        candidates.append(&mut reverse_candidates(gene, sequence, profile));
    }
    candidates.sort_by_key(|c| (c.start, c.strand != Strand::Forward));

    candidates
}

/// Forward-strand spacers every `spacing` nucleotides, with no motif test;
/// used for tiled screens where coverage matters more than PAM placement.
pub fn tile(gene: &str, sequence: &[u8], profile: &CasProfile, spacing: usize) -> Vec<GuideCandidate> {
    assert!(spacing > 0, "tile spacing must be positive");

    let mut candidates = Vec::new();
    let mut start = 0;
    while start + profile.spacer_len <= sequence.len() {
        let spacer = &sequence[start..start + profile.spacer_len];

        candidates.push(GuideCandidate {
            gene: gene.to_owned(),
            start,
            end: start + profile.spacer_len,
            strand: Strand::Forward,
            guide: String::from_utf8_lossy(spacer).into_owned(),
            pam: String::new(),
            cutsite: None,
        });

        start += spacing;
    }

    candidates
}
