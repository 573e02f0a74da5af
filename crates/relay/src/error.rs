use crate::types::RpcErrorObject;

/// Result type for [`RelayClient`] operations.
///
/// [`RelayClient`]: crate::client::RelayClient
pub type Result<T> = std::result::Result<T, RelayError>;

/// Errors returned by the [`RelayClient`].
///
/// Every variant is transient from the caller's perspective: the bid is
/// retried on the next event delivery rather than crashing the reactor.
/// None of them ever yields a usable bundle identifier.
///
/// [`RelayClient`]: crate::client::RelayClient
#[derive(thiserror::Error, Debug)]
pub enum RelayError {
    /// The relay URL failed to parse.
    #[error(transparent)]
    Url(#[from] url::ParseError),

    /// HTTP transport failure, non-2xx status, or an unparseable body.
    #[error("error contacting bundle relay: {0}")]
    Http(#[from] reqwest::Error),

    /// The relay answered with a JSON-RPC error object.
    #[error("relay rejected bundle: {} (code {})", .0.message, .0.code)]
    Rpc(RpcErrorObject),

    /// The response carried neither `result` nor `error`.
    #[error("relay response missing result")]
    MissingResult,

    /// `result` was present but is not a usable 32-byte bundle hash.
    #[error("relay returned an unusable bundle hash: {0:?}")]
    InvalidBundleHash(String),
}
