//! Block ingestion command

use eyre::WrapErr;
use std::io::Write;
use std::path::PathBuf;
use txproof_ledger::{Block, MerkleLedger};

pub async fn ingest(
    ledger: &MerkleLedger,
    blocks: &[PathBuf],
    out: &mut dyn Write,
) -> eyre::Result<()> {
    for path in blocks {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("cannot read block from {}", path.display()))?;
        let block: Block = serde_json::from_str(&content)
            .wrap_err_with(|| format!("{} is not a block", path.display()))?;

        let report = ledger.ingest_block(&block).await?;
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
    }
    Ok(())
}
