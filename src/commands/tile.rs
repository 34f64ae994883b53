use crate::args::TileArgs;
use crate::commands;
use crate::errors::*;
use crate::genome::UcscLookup;
use crate::pipeline::{self, DesignConfig, PlanMode};
use crate::select::SelectPolicy;
use crate::table;

pub fn main(args: &TileArgs) -> Result<()> {
    commands::init_threads(args.threads)?;

    let mode = PlanMode::TiledScreen {
        spacing: args.spacing,
    };
    let config = DesignConfig::new(&args.system, &args.genome, mode, SelectPolicy::default())?;

    eprintln!("Reading gene table {:?}", args.table);
    let records = table::read(&args.table)?;

    eprintln!(
        "Planning a tiled screen ({} nt spacing) for {} gene(s) with {} against {}",
        args.spacing,
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
