use crate::iupac;

/// Tests whether `motif` (IUPAC) occurs at `pos` in `seq`.
fn matches_at(seq: &[u8], pos: usize, motif: &[u8]) -> bool {
    pos + motif.len() <= seq.len()
        && motif
            .iter()
            .zip(seq[pos..].iter())
            .all(|(&query, &candidate)| iupac::matches(query, candidate))
}

pub fn find_motif(seq: &[u8], motif: &[u8]) -> Option<usize> {
    if motif.is_empty() || motif.len() > seq.len() {
        return None;
    }

    (0..=seq.len() - motif.len()).find(|&pos| matches_at(seq, pos, motif))
}

pub fn contains_motif(seq: &[u8], motif: &[u8]) -> bool {
    find_motif(seq, motif).is_some()
}

/// Reverse complement of an IUPAC motif (e.g. TTTV -> BAAA).
pub fn motif_revcomp(motif: &[u8]) -> Vec<u8> {
    motif.iter().rev().map(|&s| iupac::complement(s)).collect()
}

/// Number of (possibly overlapping) exact occurrences of `sub` in `seq`.
pub fn count_occurrences(seq: &[u8], sub: &[u8]) -> usize {
    if sub.is_empty() || sub.len() > seq.len() {
        return 0;
    }

    seq.windows(sub.len()).filter(|window| *window == sub).count()
}
