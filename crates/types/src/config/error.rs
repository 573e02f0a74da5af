use crate::TemplateError;

/// Error type for [`crate::config`]. Captures everything that can go wrong
/// while loading the bidder's configuration from the environment. All
/// variants are fatal at startup: the process reports the diagnostic and
/// exits non-zero rather than polling with a broken configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Missing or non-unicode environment variable.
    #[error("missing or non-unicode environment variable: {0}")]
    Var(String),
    /// Error parsing an integer environment variable.
    #[error("failed to parse environment variable: {0}")]
    Parse(#[from] std::num::ParseIntError),
    /// Error parsing a 256-bit unsigned integer environment variable.
    #[error("failed to parse uint environment variable: {0}")]
    Uint(#[from] alloy::primitives::ruint::ParseError),
    /// Error parsing an address environment variable.
    #[error("failed to parse address: {0}")]
    Address(#[from] alloy::hex::FromHexError),
    /// Error parsing the signing key.
    #[error("failed to parse signing key: {0}")]
    Signer(#[from] alloy::signers::local::LocalSignerError),
    /// Malformed call signature or argument list.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl ConfigError {
    /// Missing or non-unicode env var.
    pub fn missing(s: &str) -> Self {
        ConfigError::Var(s.to_string())
    }
}
