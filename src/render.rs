use serde_json::Value;

use crate::construct::ConstructionFile;
use crate::errors::*;

/// Renders a built protocol as a stepwise, human-readable document. Pure;
/// writing the result anywhere is the caller's concern.
pub fn render_human(file: &ConstructionFile) -> String {
    let mut out = String::new();

    out.push_str(&format!("Construction of {}\n", file.label));
    out.push_str(&format!(
        "  Gene:     {} ({} strand, {}..{})\n",
        file.guide.gene,
        file.guide.strand.strand_symbol(),
        file.guide.start,
        file.guide.end
    ));
    out.push_str(&format!("  Guide:    {}\n", file.guide.guide));
    if !file.guide.pam.is_empty() {
        out.push_str(&format!("  PAM:      {}\n", file.guide.pam));
    }
    if let Some(cutsite) = file.guide.cutsite {
        out.push_str(&format!("  Cut site: {}\n", cutsite));
    }
    out.push_str(&format!("  Backbone: {}\n", file.backbone));
    out.push_str(&format!("  Cassette: {}\n", file.cassette));
    out.push_str(&format!("  Amplicon: {}\n", file.amplicon));
    out.push_str("  Primers:\n");
    out.push_str(&format!("    fwd: {}\n", file.primers.fwd));
    out.push_str(&format!("    rev: {}\n", file.primers.rev));

    out.push_str("\nProtocol:\n");
    for step in &file.steps {
        out.push_str(&format!("  {}. [{}] {}\n", step.index, step.kind, step.description));
        out.push_str(&format!("     operands: {}\n", step.operands.join(", ")));
    }

    out.push_str(&format!("\nFinal product: {}\n", file.product));

    out
}

/// Structured (JSON) form of a protocol, for downstream automation; the
/// inverse of `read_structured`.
pub fn render_structured(file: &ConstructionFile) -> Result<Value> {
    serde_json::to_value(file).chain_err(|| "failed to serialize construction file")
}

/// Reconstructs a protocol from its structured form; round-trips exactly
/// with `render_structured`.
pub fn read_structured(value: Value) -> Result<ConstructionFile> {
    serde_json::from_value(value).chain_err(|| "failed to deserialize construction file")
}
