use crate::args::DesignArgs;
use crate::commands;
use crate::errors::*;
use crate::genome::UcscLookup;
use crate::pipeline::{self, DesignConfig, PlanMode};
use crate::select::SelectPolicy;
use crate::table;

pub fn main(args: &DesignArgs) -> Result<()> {
    commands::init_threads(args.threads)?;

    let policy = SelectPolicy {
        max_per_gene: args.guides,
        allow_overlap: args.allow_overlap,
    };
    let config = DesignConfig::new(&args.system, &args.genome, PlanMode::Knockout, policy)?;

    eprintln!("Reading gene table {:?}", args.table);
    let records = table::read(&args.table)?;

    eprintln!(
        "Planning knockout constructions for {} gene(s) with {} against {}",
        records.len(),
        config.profile.name,
        config.build
    );
    let lookup = UcscLookup::new()?;
    let report = pipeline::run_batch(&records, &config, &lookup)?;

    commands::write_outputs(&report, &config.backbone, &args.output)?;
    commands::print_summary(&report);

    Ok(())
}
