//! Proof generation and offline verification commands

use super::ProofFormat;
use eyre::WrapErr;
use std::io::Write;
use std::path::Path;
use txproof_core::{hash_to_hex, hex_to_hash};
use txproof_ledger::MerkleLedger;
use txproof_merkle::{verify_proof, MerkleProof};

pub async fn prove(
    ledger: &MerkleLedger,
    identifier: &str,
    tree_id: u64,
    format: ProofFormat,
    root: Option<&str>,
    out: &mut dyn Write,
) -> eyre::Result<()> {
    // Parse the root first so a typo fails before any storage access.
    let root = root.map(hex_to_hash).transpose()?;
    let proof = ledger.get_merkle_proof(identifier, tree_id).await?;

    match format {
        ProofFormat::Json => writeln!(out, "{}", proof.to_json()?)?,
        ProofFormat::Hex => writeln!(out, "{}", hex::encode(proof.to_bytes()))?,
        ProofFormat::Raw => out.write_all(&proof.to_bytes())?,
    }

    if let Some(root) = root {
        let verified = verify_proof(identifier, &proof, &root)?;
        eprintln!("verified against {}: {verified}", hash_to_hex(&root));
    }
    Ok(())
}

pub fn verify(
    identifier: &str,
    proof_path: &Path,
    root: &str,
    out: &mut dyn Write,
) -> eyre::Result<()> {
    let root = hex_to_hash(root)?;
    let bytes = std::fs::read(proof_path)
        .wrap_err_with(|| format!("cannot read proof from {}", proof_path.display()))?;
    let proof = decode_proof(&bytes)?;

    let verified = verify_proof(identifier, &proof, &root)?;
    writeln!(out, "{verified}")?;
    Ok(())
}

/// Accept any of the encodings `proof --format` emits
pub fn decode_proof(bytes: &[u8]) -> txproof_core::Result<MerkleProof> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        let text = text.trim();
        if text.starts_with('{') {
            return MerkleProof::from_json(text);
        }
        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_hexdigit()) {
            let raw = hex::decode(text)
                .map_err(|e| txproof_core::Error::malformed_proof(format!("bad hex: {e}")))?;
            return MerkleProof::from_bytes(&raw);
        }
    }
    MerkleProof::from_bytes(bytes)
}
