/// Environment variable holding the JSON-RPC URL of the upstream node to fork from.
pub const MAINNET_URL_ENV_VAR: &str = "MAINNET_URL";
