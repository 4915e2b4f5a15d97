//! Tree commit and inspection commands

use eyre::{bail, WrapErr};
use std::io::Write;
use std::path::Path;
use txproof_core::hash_to_hex;
use txproof_ledger::MerkleLedger;

pub async fn build(
    ledger: &MerkleLedger,
    tree_id: u64,
    file: Option<&Path>,
    identifiers: Vec<String>,
    out: &mut dyn Write,
) -> eyre::Result<()> {
    let identifiers = match file {
        Some(path) => read_identifiers(path)?,
        None => identifiers,
    };

    let committed = ledger.build_merkle_tree(&identifiers, tree_id).await?;
    tracing::info!(
        "Committed tree {} with {} leaves ({} after padding)",
        committed.tree_id,
        committed.leaf_count,
        committed.padded_leaf_count
    );
    writeln!(out, "{}", hash_to_hex(&committed.root))?;
    Ok(())
}

pub async fn root(ledger: &MerkleLedger, tree_id: u64, out: &mut dyn Write) -> eyre::Result<()> {
    let root = ledger.root(tree_id).await?;
    writeln!(out, "{}", hash_to_hex(&root))?;
    Ok(())
}

pub async fn check(ledger: &MerkleLedger, tree_id: u64, out: &mut dyn Write) -> eyre::Result<()> {
    let report = ledger.check_integrity(tree_id).await?;
    writeln!(
        out,
        "tree {tree_id}: {} leaves, root {}",
        report.total_leaves,
        hash_to_hex(&report.root_hash)
    )?;

    if !report.tree_valid {
        for (level, position) in &report.mismatched_nodes {
            writeln!(out, "  mismatch at level {level}, position {position}")?;
        }
        bail!(
            "tree {tree_id} is inconsistent: {} mismatched nodes",
            report.mismatched_nodes.len()
        );
    }

    writeln!(out, "ok")?;
    Ok(())
}

fn read_identifiers(path: &Path) -> eyre::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("cannot read identifiers from {}", path.display()))?;
    serde_json::from_str(&content)
        .wrap_err_with(|| format!("{} is not a JSON array of strings", path.display()))
}
