// error_chain macro can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use(lazy_static)]
extern crate lazy_static;

pub mod args;
pub mod cas;
pub mod commands;
pub mod construct;
pub mod dna;
pub mod errors;
pub mod genome;
pub mod iupac;
pub mod normalize;
pub mod pam;
pub mod pipeline;
pub mod progress;
pub mod render;
pub mod scan;
pub mod score;
pub mod select;
pub mod table;
