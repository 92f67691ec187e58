use core::fmt;

use anyhow::Result;
use clap::Subcommand;
use fork_config::HardhatConfig;
use tracing::info_span;

pub(crate) mod check;
pub(crate) mod config;

use check::CheckArgs;
use config::ConfigArgs;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Print the forked network configuration as JSON")]
    Config(ConfigArgs),
    #[command(about = "Validate the environment and summarize the forked network")]
    Check(CheckArgs),
}

impl fmt::Display for Commands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Commands::Config(_) => write!(f, "Config"),
            Commands::Check(_) => write!(f, "Check"),
        }
    }
}

pub fn run(command: Commands, config: &HardhatConfig) -> Result<()> {
    let name = command.to_string();
    let span = info_span!("Subcommand", name);
    let _span = span.enter();

    match command {
        Commands::Config(args) => args.run(config),
        Commands::Check(args) => args.run(config),
    }
}
