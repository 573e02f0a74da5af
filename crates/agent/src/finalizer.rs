//! On-chain call wrappers for bid settlement.

use crate::tracker::Settlement;
use alloy::{
    primitives::{Address, B256, U256},
    providers::Provider,
};
use bidder_auction::{Auctioneer, OpenBidder};
use tracing::{debug, instrument};

/// Errors from settlement-chain calls.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// Building or submitting the contract call failed.
    #[error(transparent)]
    Contract(#[from] alloy::contract::Error),
    /// The transaction was sent but its receipt never arrived.
    #[error(transparent)]
    Receipt(#[from] alloy::providers::PendingTransactionError),
}

/// Call wrappers over the Auctioneer and OpenBidder contracts.
///
/// Every write sends through the wallet-filling provider (which draws a
/// fresh nonce from the chain per call) and blocks until the receipt is
/// observed. Calls are strictly sequential per account: the reactor runs
/// one settlement action to completion before starting the next, so the
/// shared nonce counter is never raced.
#[derive(Debug, Clone)]
pub struct Finalizer<P> {
    auctioneer: Auctioneer::AuctioneerInstance<P>,
    bidder: OpenBidder::OpenBidderInstance<P>,
    wei_per_gas: U256,
}

impl<P: Provider + Clone> Finalizer<P> {
    /// Wrappers over the contracts at `auctioneer` and `bidder`.
    pub fn new(provider: P, auctioneer: Address, bidder: Address, wei_per_gas: u128) -> Self {
        Self {
            auctioneer: Auctioneer::new(auctioneer, provider.clone()),
            bidder: OpenBidder::new(bidder, provider),
            wei_per_gas: U256::from(wei_per_gas),
        }
    }

    /// The bidder contract's remaining claim against `slot`.
    pub async fn balance_of(&self, slot: U256) -> Result<U256, ChainError> {
        Ok(self.auctioneer.balanceOf(*self.bidder.address(), slot).call().await?)
    }

    /// Open a bid backed by the relay's bundle hash. The call is payable:
    /// the escrowed value is `wei_per_gas * gas_used`.
    #[instrument(skip(self))]
    pub async fn open_bid(&self, gas_used: u64, bundle_hash: B256) -> Result<(), ChainError> {
        let gas = U256::from(gas_used);
        let receipt = self
            .bidder
            .openBid(self.wei_per_gas, gas, bundle_hash)
            .value(self.wei_per_gas * gas)
            .send()
            .await?
            .get_receipt()
            .await?;
        debug!(tx = %receipt.transaction_hash, "openBid confirmed");
        Ok(())
    }

    /// Finalize bundle submission for a settled slot.
    #[instrument(skip(self))]
    pub async fn submit_bundles(&self, slot: U256) -> Result<(), ChainError> {
        let receipt =
            self.bidder.submitBundles(slot).send().await?.get_receipt().await?;
        debug!(tx = %receipt.transaction_hash, "submitBundles confirmed");
        Ok(())
    }

    /// Sweep pending bid accounting for a slot.
    #[instrument(skip(self))]
    pub async fn check_pending_bids(&self, slot: U256) -> Result<(), ChainError> {
        let receipt =
            self.bidder.checkPendingBids(slot).send().await?.get_receipt().await?;
        debug!(tx = %receipt.transaction_hash, "checkPendingBids confirmed");
        Ok(())
    }
}

impl<P: Provider + Clone> Settlement for Finalizer<P> {
    async fn balance_of(&self, slot: U256) -> Result<U256, ChainError> {
        Finalizer::balance_of(self, slot).await
    }

    async fn open_bid(&self, gas_used: u64, bundle_hash: B256) -> Result<(), ChainError> {
        Finalizer::open_bid(self, gas_used, bundle_hash).await
    }

    async fn submit_bundles(&self, slot: U256) -> Result<(), ChainError> {
        Finalizer::submit_bundles(self, slot).await
    }

    async fn check_pending_bids(&self, slot: U256) -> Result<(), ChainError> {
        Finalizer::check_pending_bids(self, slot).await
    }
}
