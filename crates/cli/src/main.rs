use clap::Parser;
use txproof::{execute, logging, Cli};
use txproof_ledger::MerkleLedger;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = cli.config_loader().load()?;
    logging::init(&config.log_level)?;

    tracing::debug!(
        "Using {} store (configured by {:?})",
        config.store,
        config.source
    );

    let ledger = MerkleLedger::from_config(&config).await?;
    let mut stdout = std::io::stdout().lock();
    execute::execute_command(cli.command, &ledger, &mut stdout).await
}
