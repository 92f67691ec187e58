use std::collections::BTreeSet;

use alloy_primitives::{address, Address};
use serde::{Serialize, Serializer};

/// Chain id of the local forked network.
pub const CHAIN_ID: u64 = 1337;

/// Mainnet block at which the fork snapshot is taken.
pub const FORK_BLOCK_NUMBER: u64 = 22_026_011;

/// Multisig the simulated network is allowed to sign for.
pub const IMPERSONATED_ACCOUNT: Address = address!("39E419bA25196794B595B2a595Ea8E527ddC9856");

/// Settings of the `hardhat` network entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    chain_id: u64,
    forking: ForkingConfig,
    accounts: AccountsConfig,
}

impl NetworkConfig {
    /// A network forked from `url` at [`FORK_BLOCK_NUMBER`].
    ///
    /// The url is expected to be validated already.
    pub(crate) fn forked(url: String) -> Self {
        Self {
            chain_id: CHAIN_ID,
            forking: ForkingConfig { url, block_number: FORK_BLOCK_NUMBER },
            accounts: AccountsConfig {
                accounts_to_impersonate: BTreeSet::from([IMPERSONATED_ACCOUNT]),
            },
        }
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn forking(&self) -> &ForkingConfig {
        &self.forking
    }

    pub fn accounts(&self) -> &AccountsConfig {
        &self.accounts
    }
}

/// Where the forked state comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForkingConfig {
    /// The JSON-RPC URL of the upstream node, exactly as it was provided.
    url: String,
    /// The block height the fork is pinned to.
    block_number: u64,
}

impl ForkingConfig {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn block_number(&self) -> u64 {
        self.block_number
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsConfig {
    #[serde(serialize_with = "serialize_checksummed")]
    accounts_to_impersonate: BTreeSet<Address>,
}

impl AccountsConfig {
    pub fn accounts_to_impersonate(&self) -> impl Iterator<Item = &Address> {
        self.accounts_to_impersonate.iter()
    }

    pub fn is_impersonated(&self, address: &Address) -> bool {
        self.accounts_to_impersonate.contains(address)
    }
}

// EIP-55 form, the default serde impl writes lowercase hex.
fn serialize_checksummed<S>(
    addresses: &BTreeSet<Address>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(addresses.iter().map(|address| address.to_checksum(None)))
}
