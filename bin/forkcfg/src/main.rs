#![cfg_attr(not(test), warn(unused_crate_dependencies))]

use std::process::exit;

use anyhow::Result;
use args::{ForkCfgArgs, FORK_URL_FLAG};
use clap::Parser;
use colored::Colorize;
use fork_config::{load_fork_config, ForkConfigLoader};
use tracing::{debug, trace};

mod args;
mod commands;

fn main() {
    let args = ForkCfgArgs::parse();
    let _ = args.init_logging(&args.verbose);

    if let Err(err) = cli_main(args) {
        eprintln!("{} {err:#}", "error:".red().bold());
        exit(1);
    }
}

fn cli_main(args: ForkCfgArgs) -> Result<()> {
    if !args.no_dotenv {
        match dotenv::dotenv() {
            Ok(path) => debug!(path = %path.display(), "Loaded environment file."),
            Err(err) => trace!(%err, "No environment file loaded."),
        }
    }

    let config = match &args.fork_url {
        Some(url) => {
            trace!(%url, "Using fork URL from command line.");
            load_fork_config(FORK_URL_FLAG, Some(url))?
        }
        None => ForkConfigLoader::from_env().load()?,
    };

    commands::run(args.command, &config)
}
