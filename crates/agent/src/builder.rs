//! Builds and signs the private-chain transaction that rides in the bundle.

use crate::tracker::BidBuilder;
use alloy::{
    eips::{eip2718::Encodable2718, BlockNumberOrTag},
    network::{Ethereum, EthereumWallet, TransactionBuilder, TransactionBuilderError},
    primitives::{Address, Bytes, U256},
    providers::Provider,
    rpc::types::TransactionRequest,
};
use bidder_types::{BidderConfig, CallTemplate};
use tracing::{debug, instrument};

/// A signed private-chain transaction ready for bundle submission.
#[derive(Debug, Clone)]
pub struct SignedBid {
    /// EIP-2718 encoded signed transaction.
    pub raw: Bytes,
    /// Gas the draft was signed with, reused as the `openBid` gas term.
    pub gas_used: u64,
}

/// Errors raised while building and signing the private-chain transaction.
///
/// All of these are transient: the slot stays idle and is retried on the
/// next `AuctionOpened` delivery. Malformed signature or argument
/// configuration is rejected at startup and never reaches this path.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// RPC failure fetching the block, nonce, or gas estimate.
    #[error(transparent)]
    Rpc(#[from] alloy::transports::TransportError),
    /// The target chain returned no latest block.
    #[error("latest block unavailable on target chain")]
    MissingBlock,
    /// The latest block carries no base fee.
    #[error("latest block has no base fee")]
    MissingBaseFee,
    /// Signing the transaction failed.
    #[error(transparent)]
    Sign(#[from] TransactionBuilderError<Ethereum>),
}

/// Signs the configured call for the target chain.
///
/// Fee policy: zero priority fee, max fee twice the latest observed base
/// fee. The nonce comes from the caller's transaction count at signing
/// time, so each successful `build` consumes one nonce slot — the tracker
/// guarantees at most one call per slot per run.
#[derive(Debug, Clone)]
pub struct TxBuilder<P> {
    provider: P,
    wallet: EthereumWallet,
    caller: Address,
    to: Address,
    value: U256,
    chain_id: u64,
    template: CallTemplate,
}

impl<P: Provider> TxBuilder<P> {
    /// A builder signing with the key in `cfg` against `provider`.
    pub fn new(provider: P, cfg: &BidderConfig) -> Self {
        Self {
            provider,
            wallet: EthereumWallet::from(cfg.signer().clone()),
            caller: cfg.caller(),
            to: cfg.tx_to(),
            value: cfg.tx_value(),
            chain_id: cfg.chain_id(),
            template: cfg.template().clone(),
        }
    }

    /// Signing key address the builder draws nonces for.
    pub const fn caller(&self) -> Address {
        self.caller
    }

    /// Build, estimate, and sign the configured call.
    #[instrument(skip(self), fields(%slot))]
    pub async fn build(&self, slot: U256) -> Result<SignedBid, BuildError> {
        let block = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Latest)
            .await?
            .ok_or(BuildError::MissingBlock)?;
        let base_fee = block.header.base_fee_per_gas.ok_or(BuildError::MissingBaseFee)?;
        let nonce = self.provider.get_transaction_count(self.caller).await?;

        let mut tx = TransactionRequest::default()
            .with_to(self.to)
            .with_value(self.value)
            .with_input(self.template.calldata().clone())
            .with_chain_id(self.chain_id)
            .with_nonce(nonce)
            .with_max_priority_fee_per_gas(0)
            .with_max_fee_per_gas(2 * base_fee as u128);
        tx.from = Some(self.caller);

        let gas_used = self.provider.estimate_gas(tx.clone()).await?;
        tx.set_gas_limit(gas_used);

        let envelope = tx.build(&self.wallet).await?;
        debug!(nonce, gas_used, call = self.template.signature(), "signed bundle transaction");

        Ok(SignedBid { raw: envelope.encoded_2718().into(), gas_used })
    }
}

impl<P: Provider> BidBuilder for TxBuilder<P> {
    async fn build(&self, slot: U256) -> Result<SignedBid, BuildError> {
        TxBuilder::build(self, slot).await
    }
}
