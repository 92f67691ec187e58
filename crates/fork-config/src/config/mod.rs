mod hardhat_config;
mod network_config;

pub use hardhat_config::{HardhatConfig, Networks};
pub use network_config::{
    AccountsConfig, ForkingConfig, NetworkConfig, CHAIN_ID, FORK_BLOCK_NUMBER,
    IMPERSONATED_ACCOUNT,
};
