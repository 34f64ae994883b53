pub mod design;
pub mod tile;

use std::fs;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufWriter;
use std::path::Path;

use crate::construct::BackboneSpec;
use crate::errors::*;
use crate::pipeline::{BatchReport, GeneOutcome};
use crate::render;

pub fn init_threads(threads: usize) -> Result<()> {
    ::rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .chain_err(|| "failed to build thread pool")
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let handle = File::create(path).chain_err(|| format!("failed to create {:?}", path))?;

    Ok(BufWriter::new(handle))
}

fn write_guide_table(report: &BatchReport, dir: &Path) -> Result<()> {
    let mut out = create(&dir.join("grnas.tsv"))?;

    writeln!(out, "Gene\tGuide\tStrand\tStart\tEnd\tPAM\tCutsite")
        .chain_err(|| "failed to write gRNA table header")?;
    for candidate in report.candidates() {
        let cutsite = candidate
            .cutsite
            .map_or_else(String::new, |cut| cut.to_string());

        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            candidate.gene,
            candidate.guide,
            candidate.strand.strand_symbol(),
            candidate.start,
            candidate.end,
            candidate.pam,
            cutsite,
        )
        .chain_err(|| "failed to write gRNA table row")?;
    }

    Ok(())
}

fn write_primer_table(report: &BatchReport, backbone: &BackboneSpec, dir: &Path) -> Result<()> {
    let mut out = create(&dir.join("primers.tsv"))?;

    writeln!(out, "Name\tSequence").chain_err(|| "failed to write primer table header")?;
    writeln!(out, "backbone_fwd\t{}", backbone.fwd_primer)
        .chain_err(|| "failed to write primer table row")?;
    writeln!(out, "backbone_rev\t{}", backbone.rev_primer)
        .chain_err(|| "failed to write primer table row")?;

    for file in report.files() {
        writeln!(out, "{}_fwd\t{}", file.label, file.primers.fwd)
            .chain_err(|| "failed to write primer table row")?;
        writeln!(out, "{}_rev\t{}", file.label, file.primers.rev)
            .chain_err(|| "failed to write primer table row")?;
    }

    Ok(())
}

fn write_construction_files(report: &BatchReport, dir: &Path) -> Result<()> {
    for file in report.files() {
        let mut text = create(&dir.join(format!("{}_construction.txt", file.label)))?;
        text.write_all(render::render_human(file).as_bytes())
            .chain_err(|| "failed to write construction file")?;

        let structured = render::render_structured(file)?;
        let mut json = create(&dir.join(format!("{}_construction.json", file.label)))?;
        serde_json::to_writer_pretty(&mut json, &structured)
            .chain_err(|| "failed to write structured construction file")?;
        writeln!(json).chain_err(|| "failed to write structured construction file")?;
    }

    Ok(())
}

/// Writes the gRNA table, the primer table and the per-guide construction
/// files (text and JSON) into the output directory.
pub fn write_outputs(report: &BatchReport, backbone: &BackboneSpec, dir: &str) -> Result<()> {
    let dir = Path::new(dir);
    fs::create_dir_all(dir).chain_err(|| format!("failed to create output directory {:?}", dir))?;

    write_guide_table(report, dir)?;
    write_primer_table(report, backbone, dir)?;
    write_construction_files(report, dir)
}

/// Per-gene summary on stderr: selected guide counts and failure reasons.
pub fn print_summary(report: &BatchReport) {
    for gene in &report.genes {
        match &gene.outcome {
            GeneOutcome::Designed { candidates, .. } => {
                eprintln!("  {}: {} guide(s) planned", gene.gene, candidates.len())
            }
            GeneOutcome::NoGuideFound => eprintln!("  {}: no guide found", gene.gene),
            GeneOutcome::Failed(reason) => eprintln!("  {}: FAILED ({})", gene.gene, reason),
        }
    }
}
