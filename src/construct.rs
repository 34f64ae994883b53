use bio::alphabets::dna;
use serde::{Deserialize, Serialize};

use crate::cas::CasProfile;
use crate::errors::*;
use crate::scan::GuideCandidate;
use crate::select::RestrictionEnzyme;

/// Bases of the expression cassette covered by each primer's annealing arm.
pub const PRIMER_ANNEAL_LEN: usize = 15;

/// The fixed expression backbone: the two enzymes that linearize it, the
/// primer tails carrying their recognition sites, and the primers used to
/// open the backbone itself. The enzymes and tails are configuration, not
/// constants; the default mirrors the SpeI/EcoRI vector the tool was
/// written for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackboneSpec {
    pub name: String,
    pub enzymes: Vec<RestrictionEnzyme>,
    pub fwd_tail: String,
    pub rev_tail: String,
    pub fwd_primer: String,
    pub rev_primer: String,
}

impl Default for BackboneSpec {
    fn default() -> BackboneSpec {
        BackboneSpec {
            name: "pGuideExp".to_owned(),
            enzymes: vec![
                RestrictionEnzyme::new("SpeI", "ACTAGT"),
                RestrictionEnzyme::new("EcoRI", "GAATTC"),
            ],
            // 5' hang plus SpeI site / 5' hang plus EcoRI site
            fwd_tail: "CCATAACTAGT".to_owned(),
            rev_tail: "CTCAGGAATTC".to_owned(),
            fwd_primer: "TTTTTGAATTCTCTAGAGTCGACCTGCAGA".to_owned(),
            rev_primer: "CGATGACTAGTATTATACCTAGGACT".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrimerPair {
    pub fwd: String,
    pub rev: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepKind {
    OrderSsdna,
    Pcr,
    Digest,
    Ligate,
    Transform,
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            StepKind::OrderSsdna => "ORDER_SSDNA",
            StepKind::Pcr => "PCR",
            StepKind::Digest => "DIGEST",
            StepKind::Ligate => "LIGATE",
            StepKind::Transform => "TRANSFORM",
        };

        write!(f, "{}", name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstructionStep {
    pub index: usize,
    pub kind: StepKind,
    pub operands: Vec<String>,
    pub description: String,
}

/// Complete cloning protocol for one selected guide. Built once, immutable
/// afterwards; the render layer consumes it without further computation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstructionFile {
    pub label: String,
    pub guide: GuideCandidate,
    pub backbone: String,
    pub cassette: String,
    pub amplicon: String,
    pub primers: PrimerPair,
    pub steps: Vec<ConstructionStep>,
    pub product: String,
}

fn step(index: usize, kind: StepKind, operands: Vec<String>, description: String) -> ConstructionStep {
    ConstructionStep {
        index,
        kind,
        operands,
        description,
    }
}

/// Derives primers and the ordered cloning protocol for one selected guide.
/// Guides containing a backbone enzyme's site must already have been dropped
/// by the selector; finding one here means the upstream filtering is broken
/// and the whole run is aborted.
pub fn build(
    candidate: &GuideCandidate,
    number: usize,
    profile: &CasProfile,
    backbone: &BackboneSpec,
) -> Result<ConstructionFile> {
    for enzyme in &backbone.enzymes {
        if enzyme.cuts(candidate.guide.as_bytes()) {
            return Err(ErrorKind::InternalInvariantViolation(format!(
                "guide {} of gene {:?} contains a {} site",
                number, candidate.gene, enzyme.name
            ))
            .into());
        }
    }

    let label = format!("{}_gRNA{}", candidate.gene, number);
    let cassette = profile.expression_cassette(candidate.guide.as_bytes());
    let cassette_rc = dna::revcomp(&cassette);

    let fwd = format!(
        "{}{}",
        backbone.fwd_tail,
        String::from_utf8_lossy(&cassette[..PRIMER_ANNEAL_LEN])
    );
    let rev = format!(
        "{}{}",
        backbone.rev_tail,
        String::from_utf8_lossy(&cassette_rc[..PRIMER_ANNEAL_LEN])
    );

    let mut amplicon = backbone.fwd_tail.clone().into_bytes();
    amplicon.extend_from_slice(&cassette);
    amplicon.append(&mut dna::revcomp(backbone.rev_tail.as_bytes()));

    let enzyme_names: Vec<String> = backbone.enzymes.iter().map(|e| e.name.clone()).collect();
    let mut digest_operands = vec![format!("{}_amplicon", label), backbone.name.clone()];
    digest_operands.extend(enzyme_names.iter().cloned());

    let steps = vec![
        step(
            1,
            StepKind::OrderSsdna,
            vec![format!("{}_cassette", label)],
            format!(
                "Order the {} expression cassette ({} nt) as a single-stranded DNA oligo",
                profile.name,
                cassette.len()
            ),
        ),
        step(
            2,
            StepKind::Pcr,
            vec![
                format!("{}_fwd", label),
                format!("{}_rev", label),
                format!("{}_cassette", label),
            ],
            format!(
                "Amplify the cassette with primers {0}_fwd and {0}_rev to yield {0}_amplicon",
                label
            ),
        ),
        step(
            3,
            StepKind::Digest,
            digest_operands,
            format!(
                "Digest {}_amplicon and {} with {}",
                label,
                backbone.name,
                enzyme_names.join(" and ")
            ),
        ),
        step(
            4,
            StepKind::Ligate,
            vec![format!("{}_digest", label), format!("{}_digest", backbone.name)],
            format!("Ligate the digested amplicon into the digested {}", backbone.name),
        ),
        step(
            5,
            StepKind::Transform,
            vec![format!("{}_ligation", label), "DH5alpha".to_owned()],
            "Transform the ligation into competent E. coli and select on antibiotic plates"
                .to_owned(),
        ),
    ];

    Ok(ConstructionFile {
        product: format!("{} guide expression construct in {}", label, backbone.name),
        label,
        guide: candidate.clone(),
        backbone: backbone.name.clone(),
        cassette: String::from_utf8_lossy(&cassette).into_owned(),
        amplicon: String::from_utf8_lossy(&amplicon).into_owned(),
        primers: PrimerPair { fwd, rev },
        steps,
    })
}
