mod error;
pub use error::ConfigError;

mod env_utils;
use env_utils::{
    load_address, load_signer, load_string, load_u128, load_u256, load_u64, load_u64_opt,
};

use crate::CallTemplate;
use alloy::{
    primitives::{Address, U256},
    signers::local::PrivateKeySigner,
};
use std::time::Duration;

/// Environment variable names making up the bidder's configuration surface.
pub mod env {
    /// Settlement-chain RPC endpoint (auction and bidder contracts).
    pub const RPC_L2: &str = "RPC_L2";
    /// Target (private) chain RPC endpoint.
    pub const RPC_L1: &str = "RPC_L1";
    /// Bundle relay JSON-RPC endpoint.
    pub const BETA_BUNDLE_RPC: &str = "BETA_BUNDLE_RPC";
    /// Auction contract address.
    pub const AUCTIONEER: &str = "AUCTIONEER";
    /// OpenBidder contract address.
    pub const BIDDER: &str = "BIDDER";
    /// Bidder EOA address.
    pub const CALLER: &str = "CALLER";
    /// Hex signing key.
    pub const PRIVATE_KEY: &str = "PRIVATE_KEY";
    /// Target call signature, e.g. `transfer(address,uint256)`.
    pub const TX_SIG: &str = "TX_SIG";
    /// JSON array of arguments for the target call.
    pub const TX_ARGS: &str = "TX_ARGS";
    /// Target call destination address.
    pub const TX_TO: &str = "TX_TO";
    /// Target call value in wei.
    pub const TX_VALUE: &str = "TX_VALUE";
    /// Target chain id.
    pub const CHAIN_ID: &str = "CHAIN_ID";
    /// Price-per-gas bid parameter in wei.
    pub const WEI_PER_GAS: &str = "WEI_PER_GAS";
    /// Optional poll interval override in milliseconds.
    pub const POLL_INTERVAL_MS: &str = "POLL_INTERVAL_MS";
}

/// Default auction log poll interval.
const DEFAULT_POLL_INTERVAL_MS: u64 = 2_000;

/// Startup configuration for the bidder, loaded from the environment and
/// validated before the reactor starts. Every entry is required except the
/// poll interval; a missing or malformed entry is a fatal [`ConfigError`].
#[derive(Debug, Clone)]
pub struct BidderConfig {
    /// Settlement-chain RPC endpoint.
    settlement_rpc: String,
    /// Target-chain RPC endpoint.
    target_rpc: String,
    /// Bundle relay endpoint.
    relay_url: String,
    /// Auction contract address.
    auctioneer: Address,
    /// OpenBidder contract address.
    bidder: Address,
    /// Bidder EOA.
    caller: Address,
    /// Signing key for both chains.
    signer: PrivateKeySigner,
    /// Pre-parsed target call template.
    template: CallTemplate,
    /// Target call destination.
    tx_to: Address,
    /// Target call value.
    tx_value: U256,
    /// Target chain id.
    chain_id: u64,
    /// Price-per-gas bid parameter.
    wei_per_gas: u128,
    /// Auction log poll interval.
    poll_interval: Duration,
}

impl BidderConfig {
    /// Load and validate the full configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let template =
            CallTemplate::parse(&load_string(env::TX_SIG)?, &load_string(env::TX_ARGS)?)?;
        let poll_ms = load_u64_opt(env::POLL_INTERVAL_MS).unwrap_or(DEFAULT_POLL_INTERVAL_MS);

        Ok(Self {
            settlement_rpc: load_string(env::RPC_L2)?,
            target_rpc: load_string(env::RPC_L1)?,
            relay_url: load_string(env::BETA_BUNDLE_RPC)?,
            auctioneer: load_address(env::AUCTIONEER)?,
            bidder: load_address(env::BIDDER)?,
            caller: load_address(env::CALLER)?,
            signer: load_signer(env::PRIVATE_KEY)?,
            template,
            tx_to: load_address(env::TX_TO)?,
            tx_value: load_u256(env::TX_VALUE)?,
            chain_id: load_u64(env::CHAIN_ID)?,
            wei_per_gas: load_u128(env::WEI_PER_GAS)?,
            poll_interval: Duration::from_millis(poll_ms),
        })
    }

    /// Settlement-chain RPC endpoint.
    pub fn settlement_rpc(&self) -> &str {
        &self.settlement_rpc
    }

    /// Target-chain RPC endpoint.
    pub fn target_rpc(&self) -> &str {
        &self.target_rpc
    }

    /// Bundle relay endpoint.
    pub fn relay_url(&self) -> &str {
        &self.relay_url
    }

    /// Auction contract address.
    pub const fn auctioneer(&self) -> Address {
        self.auctioneer
    }

    /// OpenBidder contract address.
    pub const fn bidder(&self) -> Address {
        self.bidder
    }

    /// Bidder EOA address.
    pub const fn caller(&self) -> Address {
        self.caller
    }

    /// The signing key.
    pub const fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }

    /// The pre-parsed target call template.
    pub const fn template(&self) -> &CallTemplate {
        &self.template
    }

    /// Target call destination address.
    pub const fn tx_to(&self) -> Address {
        self.tx_to
    }

    /// Target call value.
    pub const fn tx_value(&self) -> U256 {
        self.tx_value
    }

    /// Target chain id.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Price-per-gas bid parameter.
    pub const fn wei_per_gas(&self) -> u128 {
        self.wei_per_gas
    }

    /// Auction log poll interval.
    pub const fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_full_env() {
        std::env::set_var(env::RPC_L2, "http://localhost:8545");
        std::env::set_var(env::RPC_L1, "http://localhost:8546");
        std::env::set_var(env::BETA_BUNDLE_RPC, "http://localhost:8547");
        std::env::set_var(env::AUCTIONEER, "0x000000000000000000000000000000000000aaaa");
        std::env::set_var(env::BIDDER, "0x000000000000000000000000000000000000bbbb");
        std::env::set_var(env::CALLER, "0x000000000000000000000000000000000000cccc");
        std::env::set_var(
            env::PRIVATE_KEY,
            "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
        );
        std::env::set_var(env::TX_SIG, "transfer(address,uint256)");
        std::env::set_var(
            env::TX_ARGS,
            r#"["0x000000000000000000000000000000000000dead", "1000"]"#,
        );
        std::env::set_var(env::TX_TO, "0x000000000000000000000000000000000000dddd");
        std::env::set_var(env::TX_VALUE, "0");
        std::env::set_var(env::CHAIN_ID, "17001");
        std::env::set_var(env::WEI_PER_GAS, "1000000000");
    }

    #[test]
    fn full_environment_round_trips() {
        set_full_env();
        let cfg = BidderConfig::from_env().unwrap();
        assert_eq!(cfg.chain_id(), 17001);
        assert_eq!(cfg.wei_per_gas(), 1_000_000_000);
        assert_eq!(cfg.tx_value(), U256::ZERO);
        // No override set: the reference 2 second interval applies.
        assert_eq!(cfg.poll_interval(), Duration::from_secs(2));
        assert_eq!(cfg.template().selector(), [0xa9, 0x05, 0x9c, 0xbb]);
    }
}
