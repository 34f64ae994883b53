use std::collections::HashSet;

use rayon::prelude::*;

use crate::cas::{self, CasProfile};
use crate::construct::{self, BackboneSpec, ConstructionFile};
use crate::errors::*;
use crate::genome::{self, GenomeBuild, GenomeLookup};
use crate::normalize;
use crate::progress;
use crate::scan;
use crate::scan::GuideCandidate;
use crate::select::{self, SelectPolicy};
use crate::table::GeneRecord;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlanMode {
    /// PAM scan plus policy selection, capped per gene.
    Knockout,
    /// Spacers every `spacing` nt without a motif test.
    TiledScreen { spacing: usize },
}

/// The full configuration surface of a batch run, passed explicitly into
/// the entry point; pipelines read no ambient state.
#[derive(Clone, Debug)]
pub struct DesignConfig {
    pub profile: CasProfile,
    pub build: GenomeBuild,
    pub mode: PlanMode,
    pub policy: SelectPolicy,
    pub backbone: BackboneSpec,
}

impl DesignConfig {
    /// Resolves the system and build identifiers up front, so configuration
    /// errors surface before any gene pipeline starts.
    pub fn new(system: &str, build: &str, mode: PlanMode, policy: SelectPolicy) -> Result<DesignConfig> {
        if let PlanMode::TiledScreen { spacing: 0 } = mode {
            return Err("tile spacing must be at least 1".into());
        }

        Ok(DesignConfig {
            profile: cas::profile_for(system)?,
            build: genome::build_for(build)?,
            mode,
            policy,
            backbone: BackboneSpec::default(),
        })
    }
}

#[derive(Clone, Debug)]
pub enum GeneOutcome {
    Designed {
        candidates: Vec<GuideCandidate>,
        files: Vec<ConstructionFile>,
    },
    /// No candidate survived scanning and selection; reportable, not an error.
    NoGuideFound,
    /// This gene's pipeline failed (bad input or lookup failure); siblings
    /// are unaffected.
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct GeneReport {
    pub gene: String,
    pub outcome: GeneOutcome,
}

#[derive(Clone, Debug)]
pub struct BatchReport {
    pub genes: Vec<GeneReport>,
}

impl BatchReport {
    pub fn files(&self) -> impl Iterator<Item = &ConstructionFile> {
        self.genes.iter().flat_map(|report| match &report.outcome {
            GeneOutcome::Designed { files, .. } => files.iter(),
            _ => (&[] as &[ConstructionFile]).iter(),
        })
    }

    pub fn candidates(&self) -> impl Iterator<Item = &GuideCandidate> {
        self.genes.iter().flat_map(|report| match &report.outcome {
            GeneOutcome::Designed { candidates, .. } => candidates.iter(),
            _ => (&[] as &[GuideCandidate]).iter(),
        })
    }
}

fn is_per_gene_failure(err: &Error) -> bool {
    match err.kind() {
        ErrorKind::InvalidSequence(_) | ErrorKind::GenomeLookupError(_) => true,
        _ => false,
    }
}

fn run_gene(record: &GeneRecord, config: &DesignConfig, lookup: &dyn GenomeLookup) -> Result<GeneOutcome> {
    let sequence = normalize::normalize(&record.raw, config.build, lookup)?;

    let candidates = match config.mode {
        PlanMode::Knockout => {
            let scanned = scan::scan(&record.name, &sequence, &config.profile);

            select::select(
                scanned,
                &sequence,
                &config.profile,
                &config.backbone.enzymes,
                &config.policy,
            )
        }
        PlanMode::TiledScreen { spacing } => {
            let tiles = scan::tile(&record.name, &sequence, &config.profile, spacing);

            // Tiles skip selection, but spacers the cloning enzymes would
            // re-cut still cannot be built
            select::filter_restricted(tiles, &config.backbone.enzymes)
        }
    };

    if candidates.is_empty() {
        return Ok(GeneOutcome::NoGuideFound);
    }

    let mut files = Vec::with_capacity(candidates.len());
    for (idx, candidate) in candidates.iter().enumerate() {
        files.push(construct::build(candidate, idx + 1, &config.profile, &config.backbone)?);
    }

    Ok(GeneOutcome::Designed { candidates, files })
}

fn check_records(records: &[GeneRecord]) -> Result<()> {
    let mut seen = HashSet::new();
    for record in records {
        if record.name.is_empty() || record.raw.is_empty() {
            return Err("gene records must have a non-empty name and sequence/coordinate".into());
        }

        if !seen.insert(&record.name) {
            return Err(format!("duplicate gene name {:?} in batch", record.name).into());
        }
    }

    Ok(())
}

/// Runs one pipeline per gene record, in parallel, with partial-failure
/// semantics: a failing gene is reported in place and never aborts its
/// siblings. Only configuration errors and selector/builder logic bugs
/// (`InternalInvariantViolation`) abort the whole batch. Reports follow the
/// input order.
pub fn run_batch(
    records: &[GeneRecord],
    config: &DesignConfig,
    lookup: &dyn GenomeLookup,
) -> Result<BatchReport> {
    check_records(records)?;

    let bar = progress::batch(records.len());
    let outcomes: Vec<Result<GeneOutcome>> = records
        .par_iter()
        .map(|record| {
            let outcome = run_gene(record, config, lookup);
            bar.inc(1);

            outcome
        })
        .collect();
    bar.finish();

    let mut genes = Vec::with_capacity(records.len());
    for (record, outcome) in records.iter().zip(outcomes) {
        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(ref err) if is_per_gene_failure(err) => GeneOutcome::Failed(err.to_string()),
            Err(err) => return Err(err),
        };

        genes.push(GeneReport {
            gene: record.name.clone(),
            outcome,
        });
    }

    Ok(BatchReport { genes })
}
