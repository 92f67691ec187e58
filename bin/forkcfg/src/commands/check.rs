use anyhow::Result;
use clap::Args;
use fork_config::HardhatConfig;
use tracing::trace;

#[derive(Debug, Args)]
pub struct CheckArgs {}

impl CheckArgs {
    pub fn run(self, config: &HardhatConfig) -> Result<()> {
        trace!(args = ?self);

        for line in summary(config) {
            println!("{line}");
        }

        Ok(())
    }
}

fn summary(config: &HardhatConfig) -> Vec<String> {
    let network = config.network();

    let mut lines = vec![
        format!("Chain ID: {}", network.chain_id()),
        format!("Fork URL: {}", network.forking().url()),
        format!("Fork block: {}", network.forking().block_number()),
    ];

    for account in network.accounts().accounts_to_impersonate() {
        lines.push(format!("Impersonated account: {}", account.to_checksum(None)));
    }

    lines
}
