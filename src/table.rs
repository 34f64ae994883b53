use std::fmt::Debug;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use crate::errors::*;

/// One row of the input gene table; `raw` is either a literal sequence or a
/// `chrN:start-end` coordinate, resolved later by the normalizer.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneRecord {
    pub name: String,
    pub raw: String,
}

/// Reads a two-column (name, sequence-or-coordinate) table with a header
/// row; tab-separated, with a comma fallback for csv exports.
pub fn read<P: AsRef<Path> + Debug>(path: &P) -> Result<Vec<GeneRecord>> {
    let file = File::open(path).chain_err(|| format!("failed to open gene table {:?}", path))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.chain_err(|| "error reading line from gene table")?;
        if line.trim().is_empty() || idx == 0 {
            continue;
        }

        let sep = if line.contains('\t') { '\t' } else { ',' };
        let fields: Vec<&str> = line.split(sep).map(|v| v.trim()).collect();
        if fields.len() < 2 || fields[0].is_empty() || fields[1].is_empty() {
            return Err(format!(
                "gene table row {} must have a non-empty name and sequence/coordinate",
                idx + 1
            )
            .into());
        }

        records.push(GeneRecord {
            name: fields[0].to_owned(),
            raw: fields[1].to_owned(),
        });
    }

    Ok(records)
}
