//! Generic key access

use eyre::eyre;
use std::io::Write;
use txproof_core::is_tree_key;
use txproof_ledger::MerkleLedger;

pub async fn get(ledger: &MerkleLedger, key: &str, out: &mut dyn Write) -> eyre::Result<()> {
    let value = ledger
        .get(key)
        .await?
        .ok_or_else(|| eyre!("no value stored under '{key}'"))?;

    if is_tree_key(key) {
        let record: serde_json::Value = serde_json::from_slice(&value)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
    } else {
        writeln!(out, "{}", String::from_utf8_lossy(&value))?;
    }
    Ok(())
}

pub async fn put(ledger: &MerkleLedger, key: &str, value: &str) -> eyre::Result<()> {
    ledger.put(key, value.as_bytes()).await?;
    tracing::info!("Stored {} bytes under '{}'", value.len(), key);
    Ok(())
}
