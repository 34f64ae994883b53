use bio::alphabets::dna;

use crate::errors::*;
use crate::pam::{Pam, Position};

/// Targeting rules for one Cas system. Profiles are immutable data; the
/// scanner and builder are generic over them, so adding a system means
/// adding a constructor here and nothing else.
///
/// Scaffold sequences follow the published designs: Hsu NBT (SpCas9),
/// Ran Nature 2015 (SaCas9), Zetsche Cell 2015 (FnCas12a), Vu Front Plant
/// Sci 2021 (LbCas12a), Bandaru Sci Rep 2020 (LshCas13a) and Gootenberg
/// Science 2017 (LwCas13a).
#[derive(Clone, Debug, PartialEq)]
pub struct CasProfile {
    pub name: &'static str,

    /// None for the RNA-targeting systems, which have no DNA PAM.
    pub pam: Option<Pam>,
    pub spacer_len: usize,

    /// The double-strand cutters are scanned on both strands; the RNA
    /// targeting systems only see the transcribed strand.
    pub both_strands: bool,

    /// Cut position relative to the PAM boundary; None when the cut is not
    /// a defined DNA position (RNA-targeting systems).
    pub cutsite: Option<isize>,

    pub scaffold: &'static str,
    pub termination: Option<&'static str>,
}

impl CasProfile {
    pub fn get(name: &str) -> Option<CasProfile> {
        match name.to_ascii_lowercase().as_ref() {
            "spcas9" => Some(Self::sp_cas9()),
            "sacas9" => Some(Self::sa_cas9()),
            "fncas12a" => Some(Self::fn_cas12a()),
            "lbcas12a" => Some(Self::lb_cas12a()),
            "lshcas13a" => Some(Self::lsh_cas13a()),
            "lwcas13a" => Some(Self::lw_cas13a()),
            _ => None,
        }
    }

    pub fn names() -> [&'static str; 6] {
        [
            "SpCas9",
            "SaCas9",
            "FnCas12a",
            "LbCas12a",
            "LshCas13a",
            "LwCas13a",
        ]
    }

    pub fn sp_cas9() -> CasProfile {
        CasProfile {
            name: "SpCas9",
            pam: Some(Pam::tail(b"NGG")),
            spacer_len: 20,
            both_strands: true,
            cutsite: Some(-3),
            scaffold:
                "GTTTTAGAGCTAGAAATAGCAAGTTAAAATAAGGCTAGTCCGTTATCAACTTGAAAAAGTGGCACCGAGTCGGTGCTTTTTTT",
            termination: None,
        }
    }

    pub fn sa_cas9() -> CasProfile {
        CasProfile {
            name: "SaCas9",
            pam: Some(Pam::tail(b"NNGRR")),
            spacer_len: 22,
            both_strands: true,
            cutsite: Some(-3),
            scaffold:
                "GTTTTAGAGCTAGAAATAGCAAGTTAAAATAAGGCTAGTCCGTTATCAACTTGAAAAAGTGGCACCGAGTCGGTGCTTTT",
            termination: None,
        }
    }

    pub fn fn_cas12a() -> CasProfile {
        CasProfile {
            name: "FnCas12a",
            pam: Some(Pam::head(b"TTN")),
            spacer_len: 18,
            both_strands: true,
            cutsite: Some(18),
            scaffold: "AATTTCTACTGTTGTAGAT",
            termination: Some("TTTTTT"),
        }
    }

    pub fn lb_cas12a() -> CasProfile {
        CasProfile {
            name: "LbCas12a",
            pam: Some(Pam::head(b"TTTV")),
            spacer_len: 23,
            both_strands: true,
            cutsite: Some(18),
            scaffold: "TAATTTCTACTAAGTGTAGAT",
            termination: Some("TTTTTT"),
        }
    }

    pub fn lsh_cas13a() -> CasProfile {
        CasProfile {
            name: "LshCas13a",
            pam: None,
            spacer_len: 24,
            both_strands: false,
            cutsite: None,
            scaffold:
                "GTTTTAGAGCTAGAAATAGCAAGTTAAAATAAGGCTAGTCCGTTATCAACTTGAAAAAGTGGCACCGAGTCGGTG",
            termination: None,
        }
    }

    pub fn lw_cas13a() -> CasProfile {
        CasProfile {
            name: "LwCas13a",
            pam: None,
            spacer_len: 28,
            both_strands: false,
            cutsite: None,
            scaffold: "GGGGATTTAGACTACCCCAAAAACGAAGGGGACTAAAAC",
            termination: None,
        }
    }

    pub fn pam_len(&self) -> usize {
        self.pam.as_ref().map_or(0, |pam| pam.len())
    }

    /// Length of the scan window: spacer plus PAM (if any).
    pub fn window_len(&self) -> usize {
        self.spacer_len + self.pam_len()
    }

    /// True for the RNA-targeting systems (no DNA PAM, no DNA cut).
    pub fn targets_rna(&self) -> bool {
        self.pam.is_none()
    }

    /// Full gRNA expression cassette for a spacer: Cas9 systems append the
    /// scaffold 3' of the spacer; Cas12a systems lead with the scaffold and
    /// end on a poly-T terminator; RNA-targeting systems lead with the
    /// scaffold followed by the reverse complement of the target window.
    pub fn expression_cassette(&self, spacer: &[u8]) -> Vec<u8> {
        let mut cassette = Vec::new();

        match self.pam.as_ref().map(|pam| pam.position()) {
            Some(Position::Tail) => {
                cassette.extend_from_slice(spacer);
                cassette.extend_from_slice(self.scaffold.as_bytes());
            }
            Some(Position::Head) => {
                cassette.extend_from_slice(self.scaffold.as_bytes());
                cassette.extend_from_slice(spacer);
            }
            None => {
                cassette.extend_from_slice(self.scaffold.as_bytes());
                cassette.append(&mut dna::revcomp(spacer));
            }
        }

        if let Some(termination) = self.termination {
            cassette.extend_from_slice(termination.as_bytes());
        }

        cassette
    }
}

/// Registry lookup for the configuration surface; unknown identifiers are a
/// fatal configuration error.
pub fn profile_for(name: &str) -> Result<CasProfile> {
    CasProfile::get(name).ok_or_else(|| ErrorKind::UnsupportedSystem(name.to_owned()).into())
}
