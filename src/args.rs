use clap::{App, Arg, ArgMatches, SubCommand};

use crate::errors::*;

#[derive(Debug)]
pub struct DesignArgs {
    pub table: String,
    pub system: String,
    pub genome: String,
    pub output: String,
    pub guides: usize,
    pub allow_overlap: bool,
    pub threads: usize,
}

#[derive(Debug)]
pub struct TileArgs {
    pub table: String,
    pub system: String,
    pub genome: String,
    pub output: String,
    pub spacing: usize,
    pub threads: usize,
}

pub enum Args {
    Design(DesignArgs),
    Tile(TileArgs),
    None,
}

fn common_args<'a, 'b>(command: App<'a, 'b>) -> App<'a, 'b> {
    command
        .arg(
            Arg::with_name("table")
                .help("Two-column table (header row; gene name, sequence or chrN:start-end).")
                .required(true),
        )
        .arg(
            Arg::with_name("system")
                .long("system")
                .takes_value(true)
                .default_value("SpCas9")
                .help("Cas system; one of SpCas9, SaCas9, FnCas12a, LbCas12a, LshCas13a, LwCas13a."),
        )
        .arg(
            Arg::with_name("genome")
                .long("genome")
                .takes_value(true)
                .default_value("hg38")
                .help("Genome build for coordinate inputs; one of mm10, mm39, hg19, hg38."),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .takes_value(true)
                .required(true)
                .help("Directory for gRNA/primer tables and construction files."),
        )
        .arg(
            Arg::with_name("threads")
                .long("threads")
                .takes_value(true)
                .allow_hyphen_values(true)
                .number_of_values(1)
                .default_value("0")
                .help("Number of threads used for computation (0 for automatic)."),
        )
}

fn design_command<'a, 'b>() -> App<'a, 'b> {
    common_args(SubCommand::with_name("design").about("Plan knockout guide constructions per gene"))
        .arg(
            Arg::with_name("guides")
                .long("guides")
                .takes_value(true)
                .default_value("3")
                .help("Maximum number of guides retained per gene."),
        )
        .arg(
            Arg::with_name("allow-overlap")
                .long("allow-overlap")
                .help("Permit overlapping guides for the same gene."),
        )
}

fn tile_command<'a, 'b>() -> App<'a, 'b> {
    common_args(SubCommand::with_name("tile").about("Plan a tiled CRISPR screen over each sequence"))
        .arg(
            Arg::with_name("spacing")
                .long("spacing")
                .takes_value(true)
                .required(true)
                .help("Nucleotides between consecutive tiled guides."),
        )
}

fn get_str<'a>(matches: &'a ArgMatches, key: &str) -> Result<&'a str> {
    match matches.value_of(key) {
        Some(value) => Ok(value),
        None => Err(format!("Required option {:?} not set", key).into()),
    }
}

fn get_string(matches: &ArgMatches, key: &str) -> Result<String> {
    get_str(matches, key).map(|v| v.into())
}

fn get_usize(matches: &ArgMatches, key: &str) -> Result<usize> {
    let s = get_str(matches, key)?;

    match s.parse::<usize>() {
        Ok(v) => Ok(v),
        Err(err) => Err(format!("Invalid --{} ({:?}) value: {}", key, s, err).into()),
    }
}

pub fn parse_args() -> Result<Args> {
    let matches = App::new("crisplan")
        .version("0.2.0")
        .about("Guide-RNA discovery and cloning-protocol planning")
        .subcommand(design_command())
        .subcommand(tile_command())
        .get_matches();

    if let Some(matches) = matches.subcommand_matches("design") {
        Ok(Args::Design(DesignArgs {
            table: get_string(matches, "table")?,
            system: get_string(matches, "system")?,
            genome: get_string(matches, "genome")?,
            output: get_string(matches, "output")?,
            guides: get_usize(matches, "guides")?,
            allow_overlap: matches.is_present("allow-overlap"),
            threads: get_usize(matches, "threads")?,
        }))
    } else if let Some(matches) = matches.subcommand_matches("tile") {
        let spacing = get_usize(matches, "spacing")?;
        if spacing == 0 {
            return Err("--spacing must be at least 1".into());
        }

        Ok(Args::Tile(TileArgs {
            table: get_string(matches, "table")?,
            system: get_string(matches, "system")?,
            genome: get_string(matches, "genome")?,
            output: get_string(matches, "output")?,
            spacing,
            threads: get_usize(matches, "threads")?,
        }))
    } else {
        eprintln!("{}", matches.usage());

        Ok(Args::None)
    }
}
