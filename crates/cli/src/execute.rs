use crate::commands::{ingest, proof, store, tree, Commands};
use std::io::Write;
use txproof_ledger::MerkleLedger;

/// Run one command, writing its result to `out`
pub async fn execute_command(
    command: Commands,
    ledger: &MerkleLedger,
    out: &mut dyn Write,
) -> eyre::Result<()> {
    match command {
        Commands::Build {
            tree_id,
            file,
            identifiers,
        } => tree::build(ledger, tree_id, file.as_deref(), identifiers, out).await,
        Commands::Root { tree_id } => tree::root(ledger, tree_id, out).await,
        Commands::Check { tree_id } => tree::check(ledger, tree_id, out).await,
        Commands::Proof {
            identifier,
            tree_id,
            format,
            root,
        } => proof::prove(ledger, &identifier, tree_id, format, root.as_deref(), out).await,
        Commands::Verify {
            identifier,
            proof,
            root,
        } => proof::verify(&identifier, &proof, &root, out),
        Commands::Get { key } => store::get(ledger, &key, out).await,
        Commands::Put { key, value } => store::put(ledger, &key, &value).await,
        Commands::Ingest { blocks } => ingest::ingest(ledger, &blocks, out).await,
    }
}
