use anyhow::{Context, Result};
use clap::Args;
use fork_config::HardhatConfig;
use tracing::trace;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[arg(long)]
    #[arg(help = "Print the JSON on a single line.")]
    pub compact: bool,
}

impl ConfigArgs {
    pub fn run(self, config: &HardhatConfig) -> Result<()> {
        trace!(args = ?self);

        let json = if self.compact { config.to_json() } else { config.to_json_pretty() };
        let json = json.context("Failed to serialize the network configuration.")?;

        println!("{json}");
        Ok(())
    }
}
