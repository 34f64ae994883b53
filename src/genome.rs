use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::errors::*;

const LETTER_CHROMOSOMES: [&str; 3] = ["X", "Y", "M"];
const LOOKUP_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenomeBuild {
    Mm10,
    Mm39,
    Hg19,
    Hg38,
}

impl GenomeBuild {
    pub fn get(name: &str) -> Option<GenomeBuild> {
        match name.to_ascii_lowercase().as_ref() {
            "mm10" => Some(GenomeBuild::Mm10),
            "mm39" => Some(GenomeBuild::Mm39),
            "hg19" => Some(GenomeBuild::Hg19),
            "hg38" => Some(GenomeBuild::Hg38),
            _ => None,
        }
    }

    pub fn names() -> [&'static str; 4] {
        ["mm10", "mm39", "hg19", "hg38"]
    }

    pub fn id(&self) -> &'static str {
        match self {
            GenomeBuild::Mm10 => "mm10",
            GenomeBuild::Mm39 => "mm39",
            GenomeBuild::Hg19 => "hg19",
            GenomeBuild::Hg38 => "hg38",
        }
    }

    /// Largest numbered chromosome for the build's organism.
    fn autosomes(&self) -> u64 {
        match self {
            GenomeBuild::Mm10 | GenomeBuild::Mm39 => 19,
            GenomeBuild::Hg19 | GenomeBuild::Hg38 => 22,
        }
    }
}

impl fmt::Display for GenomeBuild {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Registry lookup for the configuration surface; unknown identifiers are a
/// fatal configuration error.
pub fn build_for(name: &str) -> Result<GenomeBuild> {
    GenomeBuild::get(name).ok_or_else(|| ErrorKind::UnsupportedGenomeBuild(name.to_owned()).into())
}

fn lookup_err<T, S: Into<String>>(reason: S) -> Result<T> {
    Err(ErrorKind::GenomeLookupError(reason.into()).into())
}

/// A half-open genomic interval such as `chr7:1000-2000`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coordinate {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
}

impl Coordinate {
    /// A raw gene input is treated as a coordinate exactly when it carries
    /// the `chr` prefix; anything else is assumed to be a literal sequence.
    /// Compared as bytes, so arbitrary (non-UTF-8-boundary-aligned) input
    /// is safe.
    pub fn looks_like(raw: &str) -> bool {
        let bytes = raw.as_bytes();

        bytes.len() >= 3 && bytes[..3].eq_ignore_ascii_case(b"chr")
    }

    pub fn parse(raw: &str, build: GenomeBuild) -> Result<Coordinate> {
        if !Self::looks_like(raw) {
            return lookup_err(format!("coordinate {:?} lacks the chr prefix", raw));
        }

        // The prefix is three ASCII bytes, so index 3 is a char boundary
        let body = &raw[3..];
        let (chrom, span) = match body.find(':') {
            Some(colon) => (&body[..colon], &body[colon + 1..]),
            None => return lookup_err(format!("coordinate {:?} lacks ':'", raw)),
        };

        let (start, end) = match span.find('-') {
            Some(dash) => (&span[..dash], &span[dash + 1..]),
            None => return lookup_err(format!("coordinate {:?} lacks a start-end range", raw)),
        };

        let start = match start.parse::<u64>() {
            Ok(value) => value,
            Err(_) => return lookup_err(format!("coordinate start {:?} is not an integer", start)),
        };
        let end = match end.parse::<u64>() {
            Ok(value) => value,
            Err(_) => return lookup_err(format!("coordinate end {:?} is not an integer", end)),
        };

        if start >= end {
            return lookup_err(format!("coordinate {:?} has an empty or inverted range", raw));
        }

        let chrom = chrom.to_ascii_uppercase();
        let valid = match chrom.parse::<u64>() {
            Ok(number) => number >= 1 && number <= build.autosomes(),
            Err(_) => LETTER_CHROMOSOMES.contains(&chrom.as_ref()),
        };
        if !valid {
            return lookup_err(format!("chromosome {:?} does not exist in {}", chrom, build));
        }

        Ok(Coordinate { chrom, start, end })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "chr{}:{}-{}", self.chrom, self.start, self.end)
    }
}

/// External collaborator resolving a coordinate into a nucleotide sequence.
/// The production impl talks to UCSC; tests substitute canned lookups.
pub trait GenomeLookup: Sync {
    fn fetch(&self, build: GenomeBuild, coord: &Coordinate) -> Result<Vec<u8>>;
}

#[derive(Deserialize)]
struct UcscSequence {
    dna: String,
}

pub struct UcscLookup {
    client: reqwest::blocking::Client,
}

impl UcscLookup {
    pub fn new() -> Result<UcscLookup> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(LOOKUP_TIMEOUT_SECS))
            .build()
            .chain_err(|| "failed to initialize HTTP client")?;

        Ok(UcscLookup { client })
    }
}

impl GenomeLookup for UcscLookup {
    fn fetch(&self, build: GenomeBuild, coord: &Coordinate) -> Result<Vec<u8>> {
        let url = format!(
            "https://api.genome.ucsc.edu/getData/sequence?genome={};chrom=chr{};start={};end={}",
            build.id(),
            coord.chrom,
            coord.start,
            coord.end
        );

        let response = match self.client.get(&url).send() {
            Ok(response) => response,
            Err(err) => return lookup_err(format!("request for {} failed: {}", coord, err)),
        };

        if !response.status().is_success() {
            return lookup_err(format!(
                "request for {} failed with status {}",
                coord,
                response.status()
            ));
        }

        let body: UcscSequence = match response.json() {
            Ok(body) => body,
            Err(err) => return lookup_err(format!("invalid response for {}: {}", coord, err)),
        };

        Ok(body.dna.to_ascii_uppercase().into_bytes())
    }
}
