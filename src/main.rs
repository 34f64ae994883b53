// error_chain macro can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use(lazy_static)]
extern crate lazy_static;

mod args;
mod cas;
mod commands;
mod construct;
mod dna;
mod errors;
mod genome;
mod iupac;
mod normalize;
mod pam;
mod pipeline;
mod progress;
mod render;
mod scan;
mod score;
mod select;
mod table;

fn print_err(e: &errors::Error) {
    use error_chain::ChainedError;
    use std::io::Write; // trait which holds `display_chain`
    let stderr = &mut ::std::io::stderr();
    let errmsg = "Error writing to stderr";

    writeln!(stderr, "{}", e.display_chain()).expect(errmsg);
}

fn inner_main() -> errors::Result<()> {
    match args::parse_args()? {
        args::Args::Design(args) => commands::design::main(&args),
        args::Args::Tile(args) => commands::tile::main(&args),
        args::Args::None => Ok(()),
    }
}

fn main() {
    if let Err(e) = inner_main() {
        print_err(&e);

        ::std::process::exit(1);
    } else {
        ::std::process::exit(0);
    }
}
