#![cfg_attr(not(test), warn(unused_crate_dependencies))]

//! Configuration for a local network forked from Ethereum mainnet.
//!
//! The [`HardhatConfig`] record is built once by [`ForkConfigLoader`] from the fork URL found
//! in the environment, and is then handed to the simulation node as JSON.

pub mod config;
pub mod env;
pub mod error;
pub mod loader;

pub use config::{AccountsConfig, ForkingConfig, HardhatConfig, NetworkConfig, Networks};
pub use error::ConfigurationError;
pub use loader::{load_fork_config, validate_fork_url, ForkConfigLoader};
