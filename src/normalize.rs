use crate::errors::*;
use crate::genome::{Coordinate, GenomeBuild, GenomeLookup};

/// Inputs below this length cannot hold a spacer plus usable flanking
/// context for any supported system.
pub const MIN_GENE_LEN: usize = 30;

fn invalid<T, S: Into<String>>(reason: S) -> Result<T> {
    Err(ErrorKind::InvalidSequence(reason.into()).into())
}

fn check_alphabet(seq: &[u8]) -> Result<()> {
    match seq.iter().find(|&&nuc| !b"ACGT".contains(&nuc)) {
        Some(&nuc) => invalid(format!("invalid nucleotide {:?}", char::from(nuc))),
        None => Ok(()),
    }
}

fn check_length(seq: &[u8]) -> Result<()> {
    if seq.len() < MIN_GENE_LEN {
        invalid(format!(
            "sequence is {} nt long; at least {} nt are required",
            seq.len(),
            MIN_GENE_LEN
        ))
    } else {
        Ok(())
    }
}

/// Canonicalizes a literal input sequence: uppercase, strict ACGT alphabet,
/// hard length floor. Pure and offline.
pub fn normalize_literal(raw: &str) -> Result<Vec<u8>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return invalid("sequence is empty");
    }

    let seq = trimmed.to_ascii_uppercase().into_bytes();
    check_alphabet(&seq)?;
    check_length(&seq)?;

    Ok(seq)
}

/// Resolves a raw gene input into an uppercase ACGT sequence; `chr...`
/// inputs are parsed as coordinates and resolved through the (network
/// backed) genome lookup, everything else is normalized in place.
pub fn normalize(raw: &str, build: GenomeBuild, lookup: &dyn GenomeLookup) -> Result<Vec<u8>> {
    if Coordinate::looks_like(raw) {
        let coord = Coordinate::parse(raw, build)?;
        let seq = lookup.fetch(build, &coord)?;
        check_alphabet(&seq)?;
        check_length(&seq)?;

        Ok(seq)
    } else {
        normalize_literal(raw)
    }
}
