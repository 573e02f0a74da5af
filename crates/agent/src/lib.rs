//! Reactive agent bidding in beta bundle slot auctions.
//!
//! The agent watches the Auctioneer contract for lifecycle events and
//! drives each slot through bid, settlement, and finalization: sign the
//! configured private-chain call (once per slot), submit it as a bundle to
//! the relay, open the bid on-chain, then settle or abandon when the
//! auction closes. It exits deliberately when the tracked slot pays out.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]

pub mod builder;
pub mod finalizer;
pub mod reactor;
pub mod tracker;

mod error;
pub use error::EventError;

use crate::{builder::TxBuilder, finalizer::Finalizer, reactor::Reactor, tracker::SlotTracker};
use alloy::providers::ProviderBuilder;
use bidder_relay::RelayClient;
use bidder_types::BidderConfig;

/// Initialize process-wide tracing from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Wire the components from `cfg` and run the reactor to completion.
pub async fn run(cfg: BidderConfig) -> eyre::Result<()> {
    // Settlement chain: the log source plus the auctioneer/bidder calls.
    // The wallet and nonce fillers sign each call and draw a fresh nonce
    // from the chain for it.
    let settlement = ProviderBuilder::new()
        .wallet(cfg.signer().clone())
        .connect_http(cfg.settlement_rpc().parse()?);

    // Target chain: read-only; bundle transactions are signed locally by
    // the builder.
    let target = ProviderBuilder::new().connect_http(cfg.target_rpc().parse()?);

    let tracker = SlotTracker::new(
        TxBuilder::new(target, &cfg),
        RelayClient::new_from_string(cfg.relay_url())?,
        Finalizer::new(settlement.clone(), cfg.auctioneer(), cfg.bidder(), cfg.wei_per_gas()),
    );

    Reactor::new(settlement, cfg.auctioneer(), tracker, cfg.poll_interval()).run().await;
    Ok(())
}
