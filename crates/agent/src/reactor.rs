//! The poll loop driving the tracker.

use crate::tracker::{BidBuilder, BundleRelay, Flow, Settlement, SlotTracker};
use alloy::{
    eips::BlockNumberOrTag,
    primitives::Address,
    providers::Provider,
    rpc::types::Filter,
};
use bidder_auction::AuctionEvent;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Polls the settlement chain for new logs on a fixed interval and feeds
/// decoded auction events through the slot tracker, in log order.
///
/// The loop only ever ends on the deliberate paid-out completion signal.
/// Poll failures and per-event failures are logged and retried on the next
/// tick; the at-least-once log source redelivers whatever an errored
/// handler left unfinished.
#[derive(Debug)]
pub struct Reactor<P, B, R, S> {
    provider: P,
    auctioneer: Address,
    tracker: SlotTracker<B, R, S>,
    poll_interval: Duration,
}

impl<P, B, R, S> Reactor<P, B, R, S>
where
    P: Provider,
    B: BidBuilder,
    R: BundleRelay,
    S: Settlement,
{
    /// A reactor polling `provider` for logs from `auctioneer`.
    pub const fn new(
        provider: P,
        auctioneer: Address,
        tracker: SlotTracker<B, R, S>,
        poll_interval: Duration,
    ) -> Self {
        Self { provider, auctioneer, tracker, poll_interval }
    }

    /// Run until the tracked slot pays out.
    pub async fn run(mut self) {
        let filter = Filter::new().from_block(BlockNumberOrTag::Latest);
        let mut ticker = interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(auctioneer = %self.auctioneer, "watching for auction events");

        loop {
            ticker.tick().await;

            let logs = match self.provider.get_logs(&filter).await {
                Ok(logs) => logs,
                Err(err) => {
                    warn!(%err, "log poll failed, retrying next tick");
                    continue;
                }
            };

            for log in logs {
                let Some(event) = AuctionEvent::decode(&log, self.auctioneer) else {
                    continue;
                };
                let slot = event.slot();
                let kind = event.kind();
                debug!(%slot, kind, block = ?log.block_number, "auction event");

                match self.tracker.on_event(&event).await {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Shutdown) => {
                        info!(%slot, "auction paid out, reactor complete");
                        return;
                    }
                    Err(err) => {
                        warn!(%slot, kind, %err, "event handling failed, awaiting redelivery")
                    }
                }
            }
        }
    }
}
