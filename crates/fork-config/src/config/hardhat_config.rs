use serde::Serialize;

use super::network_config::NetworkConfig;

/// Configuration record consumed by the simulation node.
///
/// Serializes to `{ "networks": { "hardhat": { ... } } }`. The only way to obtain one is
/// through [`crate::ForkConfigLoader`], so a built record always carries a validated fork URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HardhatConfig {
    networks: Networks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Networks {
    hardhat: NetworkConfig,
}

impl HardhatConfig {
    pub(crate) fn new(hardhat: NetworkConfig) -> Self {
        Self { networks: Networks { hardhat } }
    }

    pub fn networks(&self) -> &Networks {
        &self.networks
    }

    /// Shorthand for `networks().hardhat()`.
    pub fn network(&self) -> &NetworkConfig {
        &self.networks.hardhat
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Networks {
    pub fn hardhat(&self) -> &NetworkConfig {
        &self.hardhat
    }
}
