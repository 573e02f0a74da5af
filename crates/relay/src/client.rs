use crate::{
    error::{RelayError, Result},
    types::{BundleParams, BundleRequest, BundleResponse},
};
use alloy::primitives::{Bytes, B256, U256};
use tracing::{debug, instrument, warn};

/// Client for the beta bundle relay.
///
/// Posts fixed-shape `mev_sendBetaBundle` requests to the relay endpoint
/// and returns the opaque bundle hash from the response. The relay is
/// stateless from this side: resubmitting the same bundle for the same slot
/// is harmless, which is what makes redelivered `AuctionOpened` events safe
/// to handle by resubmission.
#[derive(Debug, Clone)]
pub struct RelayClient {
    /// The relay endpoint.
    url: reqwest::Url,
    /// The reqwest client used to send requests.
    client: reqwest::Client,
}

impl RelayClient {
    /// Create a new client with the given URL and client.
    pub const fn new_with_client(url: reqwest::Url, client: reqwest::Client) -> Self {
        Self { url, client }
    }

    /// Instantiate a new client with the given URL and a new reqwest client.
    pub fn new(url: reqwest::Url) -> Self {
        Self { url, client: reqwest::Client::new() }
    }

    /// Create a new client given a string URL.
    pub fn new_from_string(url: &str) -> Result<Self> {
        let url = reqwest::Url::parse(url)?;
        Ok(Self::new(url))
    }

    /// Get the client used to send requests.
    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// The relay endpoint.
    pub const fn url(&self) -> &reqwest::Url {
        &self.url
    }

    /// Submit the signed transactions as a bundle bidding for `slot`.
    ///
    /// Returns the relay's bundle hash on acceptance. Any other outcome is
    /// a [`RelayError`]; in particular a response without `result` never
    /// produces a bundle identifier for the settlement path.
    #[instrument(skip_all, fields(%slot, txs = txs.len()))]
    pub async fn send_beta_bundle(&self, slot: U256, txs: Vec<Bytes>) -> Result<B256> {
        let request = BundleRequest::new(BundleParams::new(slot, txs));

        let response = self
            .client
            .post(self.url.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<BundleResponse>()
            .await
            .inspect_err(|e| warn!(%e, "failed to parse relay response"))?;

        let hash = extract_bundle_hash(response)?;
        debug!(%hash, "bundle accepted by relay");
        Ok(hash)
    }
}

/// Pull a genuine bundle hash out of a relay response.
///
/// A declared JSON-RPC error, a missing `result`, a non-hash `result`, and
/// the all-zero hash are each submission failures.
fn extract_bundle_hash(response: BundleResponse) -> Result<B256> {
    if let Some(error) = response.error {
        return Err(RelayError::Rpc(error));
    }
    let result = response.result.ok_or(RelayError::MissingResult)?;
    let hash: B256 =
        result.parse().map_err(|_| RelayError::InvalidBundleHash(result.clone()))?;
    if hash.is_zero() {
        return Err(RelayError::InvalidBundleHash(result));
    }
    Ok(hash)
}
