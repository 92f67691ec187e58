use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_log::{AsTrace, LogTracer};
use tracing_subscriber::FmtSubscriber;

use crate::commands::Commands;

/// Name of the flag overriding the fork URL, as reported in validation errors.
pub const FORK_URL_FLAG: &str = "--fork-url";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct ForkCfgArgs {
    #[arg(long, value_name = "URL")]
    #[arg(global = true)]
    #[arg(help = "URL of the node to fork from. Takes precedence over the MAINNET_URL \
                  environment variable.")]
    pub fork_url: Option<String>,

    #[arg(long)]
    #[arg(global = true)]
    #[arg(help = "Do not load variables from a .env file.")]
    pub no_dotenv: bool,

    #[clap(help = "Logging verbosity.")]
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    #[command(subcommand)]
    pub command: Commands,
}

impl ForkCfgArgs {
    pub fn init_logging(
        &self,
        clap_verbosity: &clap_verbosity_flag::Verbosity,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let verbose = clap_verbosity.log_level_filter().as_trace() >= LevelFilter::DEBUG;

        let default_log_filter = default_log_filter(verbose);

        LogTracer::init()?;

        let subscriber = FmtSubscriber::builder()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_log_filter)),
            )
            .finish();

        Ok(tracing::subscriber::set_global_default(subscriber)?)
    }
}

fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "none,forkcfg=trace,fork_config=trace"
    } else {
        "none,forkcfg=info,fork_config=info"
    }
}
