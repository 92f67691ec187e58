use thiserror::Error;

/// The fork URL could not be turned into a usable configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("`{var}` is not set. It must hold the http(s) URL of the node to fork from.")]
    Missing { var: &'static str },

    #[error("`{var}` is empty. It must hold the http(s) URL of the node to fork from.")]
    Empty { var: &'static str },

    #[error("`{var}` must start with `http://` or `https://`, got `{value}`.")]
    UnsupportedScheme { var: &'static str, value: String },

    #[error("`{var}` contains invalid unicode.")]
    NotUnicode { var: &'static str },
}
