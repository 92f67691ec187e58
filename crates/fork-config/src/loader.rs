use std::env::{self, VarError};
use std::fmt;

use tracing::trace;

use crate::config::{HardhatConfig, NetworkConfig};
use crate::env::MAINNET_URL_ENV_VAR;
use crate::error::ConfigurationError;

pub const LOG_TARGET: &str = "fork_config::loader";

const SUPPORTED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Resolves an environment variable the way [`std::env::var`] does.
pub type EnvLookup = fn(&str) -> Result<String, VarError>;

/// Builds the [`HardhatConfig`] from the fork URL found in the environment.
pub struct ForkConfigLoader<F> {
    lookup: F,
}

impl ForkConfigLoader<EnvLookup> {
    /// Reads the fork URL from the process environment.
    pub fn from_env() -> Self {
        Self { lookup: process_env }
    }
}

impl<F> ForkConfigLoader<F>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    /// Reads the fork URL through `lookup` instead of the process environment.
    pub fn with_lookup(lookup: F) -> Self {
        Self { lookup }
    }

    /// Load the configuration from the `MAINNET_URL` variable.
    pub fn load(&self) -> Result<HardhatConfig, ConfigurationError> {
        let var = MAINNET_URL_ENV_VAR;

        let fork_url = match (self.lookup)(var) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => return Err(ConfigurationError::NotUnicode { var }),
        };

        trace!(target: LOG_TARGET, var, "Using fork URL from environment.");
        load_fork_config(var, fork_url.as_deref())
    }
}

impl<F> fmt::Debug for ForkConfigLoader<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForkConfigLoader").finish_non_exhaustive()
    }
}

fn process_env(key: &str) -> Result<String, VarError> {
    env::var(key)
}

/// Validates `fork_url` and builds the configuration record around it.
///
/// `input` names where the url came from (a variable or a flag) and is reported in errors.
pub fn load_fork_config(
    input: &'static str,
    fork_url: Option<&str>,
) -> Result<HardhatConfig, ConfigurationError> {
    let url = validate_fork_url(input, fork_url)?;
    trace!(target: LOG_TARGET, input, url, "Fork URL accepted.");
    Ok(HardhatConfig::new(NetworkConfig::forked(url.to_string())))
}

/// Checks that the fork URL is present, non empty and starts with `http://` or `https://`.
///
/// The url is returned untouched, no trimming or normalization is done.
pub fn validate_fork_url<'a>(
    input: &'static str,
    fork_url: Option<&'a str>,
) -> Result<&'a str, ConfigurationError> {
    match fork_url {
        None => Err(ConfigurationError::Missing { var: input }),
        Some("") => Err(ConfigurationError::Empty { var: input }),
        Some(url) if SUPPORTED_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) => Ok(url),
        Some(url) => {
            Err(ConfigurationError::UnsupportedScheme { var: input, value: url.to_string() })
        }
    }
}
