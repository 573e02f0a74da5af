//! The slot state tracker: maps auction lifecycle events onto per-slot
//! actions.

use crate::{
    builder::{BuildError, SignedBid},
    error::EventError,
    finalizer::ChainError,
};
use alloy::primitives::{Bytes, B256, U256};
use bidder_auction::AuctionEvent;
use bidder_relay::{RelayClient, RelayError};
use bidder_types::{SlotPhase, SlotState};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Builds and signs the private-chain bid. Signing consumes a nonce, so
/// the tracker invokes this at most once per slot per run.
#[allow(async_fn_in_trait)]
pub trait BidBuilder {
    /// Sign the configured call for `slot`.
    async fn build(&self, slot: U256) -> Result<SignedBid, BuildError>;
}

/// Submits a bundle of signed transactions for a slot.
#[allow(async_fn_in_trait)]
pub trait BundleRelay {
    /// Submit `txs` bidding for `slot`; returns the relay's bundle hash.
    async fn submit(&self, slot: U256, txs: Vec<Bytes>) -> Result<B256, RelayError>;
}

impl BundleRelay for RelayClient {
    async fn submit(&self, slot: U256, txs: Vec<Bytes>) -> Result<B256, RelayError> {
        self.send_beta_bundle(slot, txs).await
    }
}

/// The settlement-chain surface: one read and three receipt-blocking
/// writes against the auction and bidder contracts.
#[allow(async_fn_in_trait)]
pub trait Settlement {
    /// The bidder contract's claim against `slot`.
    async fn balance_of(&self, slot: U256) -> Result<U256, ChainError>;
    /// Open a bid backed by `bundle_hash`.
    async fn open_bid(&self, gas_used: u64, bundle_hash: B256) -> Result<(), ChainError>;
    /// Finalize bundle submission for a settled slot.
    async fn submit_bundles(&self, slot: U256) -> Result<(), ChainError>;
    /// Sweep pending bid accounting for a slot.
    async fn check_pending_bids(&self, slot: U256) -> Result<(), ChainError>;
}

/// Loop directive returned by event handling.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Keep polling.
    Continue,
    /// Deliberate completion: the tracked slot paid out.
    Shutdown,
}

/// Applies auction lifecycle events to per-slot state and sequences the
/// bid, settlement, and finalization calls.
///
/// The tracker is the sole writer of slot state. The log source delivers
/// at-least-once, so every handler tolerates replayed `(slot, kind)` pairs
/// without extra side effects; the one deliberate exception is a replayed
/// `Opened` on a submitted slot, which refreshes the relay's copy of the
/// cached bundle (and nothing else).
#[derive(Debug)]
pub struct SlotTracker<B, R, S> {
    builder: B,
    relay: R,
    settlement: S,
    slots: HashMap<U256, SlotState>,
}

impl<B, R, S> SlotTracker<B, R, S>
where
    B: BidBuilder,
    R: BundleRelay,
    S: Settlement,
{
    /// A tracker with no slots yet observed.
    pub fn new(builder: B, relay: R, settlement: S) -> Self {
        Self { builder, relay, settlement, slots: HashMap::new() }
    }

    /// The tracked state for `slot`, if any event for it was seen.
    pub fn state(&self, slot: U256) -> Option<&SlotState> {
        self.slots.get(&slot)
    }

    /// Apply one event. Transient failures abort only this event's
    /// handling; the slot stays eligible for retry on redelivery.
    pub async fn on_event(&mut self, event: &AuctionEvent) -> Result<Flow, EventError> {
        let slot = event.slot();
        match event {
            AuctionEvent::Opened(_) => self.on_opened(slot).await.map(|_| Flow::Continue),
            AuctionEvent::Closed(_) => self.on_closed(slot).await.map(|_| Flow::Continue),
            AuctionEvent::PaidOut(_) => self.on_paid_out(slot).await,
            AuctionEvent::Refunded(_) => self.on_refunded(slot).await.map(|_| Flow::Continue),
        }
    }

    /// `AuctionOpened`: sign once, submit the bundle, open the bid.
    async fn on_opened(&mut self, slot: U256) -> Result<(), EventError> {
        let state = self.slots.entry(slot).or_insert_with(|| SlotState::new(slot));
        match state.phase() {
            SlotPhase::Idle | SlotPhase::Bidding => {}
            SlotPhase::Submitted => {
                // Redelivery after a completed bid: refresh the relay's
                // copy of the cached bundle, no new signature or bid.
                if let Some(raw) = state.signed_tx() {
                    let hash = self.relay.submit(slot, vec![raw.clone()]).await?;
                    debug!(%slot, %hash, "redelivered open, resubmitted cached bundle");
                }
                return Ok(());
            }
            phase => {
                debug!(%slot, ?phase, "opened redelivery for settled slot, ignoring");
                return Ok(());
            }
        }

        // Sign at most once per slot per run. A retry reuses the cached
        // bytes: re-signing would burn a fresh nonce for a bundle the
        // relay can only accept once for this slot.
        let bid = match (state.signed_tx(), state.gas_used()) {
            (Some(raw), Some(gas_used)) => SignedBid { raw: raw.clone(), gas_used },
            _ => {
                let bid = self.builder.build(slot).await?;
                state.cache_signed_tx(bid.raw.clone(), bid.gas_used);
                bid
            }
        };
        state.advance(SlotPhase::Bidding);

        let bundle_hash = self.relay.submit(slot, vec![bid.raw]).await?;
        state.set_bundle_hash(bundle_hash);

        self.settlement.open_bid(bid.gas_used, bundle_hash).await?;
        state.advance(SlotPhase::Submitted);
        info!(%slot, %bundle_hash, gas = bid.gas_used, "bid opened");
        Ok(())
    }

    /// `AuctionSettled`: check the claim and either finalize submission or
    /// abandon the slot.
    async fn on_closed(&mut self, slot: U256) -> Result<(), EventError> {
        // A tracker restarted mid-auction sees `Closed` for a slot it
        // never saw open: create the state lazily and let the balance
        // lookup decide the outcome.
        let state = self.slots.entry(slot).or_insert_with(|| SlotState::new(slot));
        if state.phase() >= SlotPhase::AwaitingSettlement {
            debug!(%slot, "settled redelivery, ignoring");
            return Ok(());
        }

        let balance = self.settlement.balance_of(slot).await?;
        state.set_balance(balance);
        if balance.is_zero() {
            warn!(%slot, "no claim on settled slot, abandoning");
            state.advance(SlotPhase::Failed);
            return Ok(());
        }

        self.settlement.submit_bundles(slot).await?;
        state.advance(SlotPhase::AwaitingSettlement);
        info!(%slot, %balance, "bundles submitted for settlement");
        Ok(())
    }

    /// `AuctionPaidOut`: sweep pending bids, then signal the deliberate
    /// shutdown (single-slot design).
    async fn on_paid_out(&mut self, slot: U256) -> Result<Flow, EventError> {
        let state = self.slots.entry(slot).or_insert_with(|| SlotState::new(slot));
        if state.phase() >= SlotPhase::Completed {
            debug!(%slot, "paid-out redelivery, ignoring");
            return Ok(Flow::Continue);
        }

        state.advance(SlotPhase::Finalizing);
        self.settlement.check_pending_bids(slot).await?;
        state.advance(SlotPhase::Completed);
        info!(%slot, "slot paid out");
        Ok(Flow::Shutdown)
    }

    /// `AuctionRefund`: sweep pending bids and keep polling for the next
    /// auction.
    async fn on_refunded(&mut self, slot: U256) -> Result<(), EventError> {
        let state = self.slots.entry(slot).or_insert_with(|| SlotState::new(slot));
        if state.phase() >= SlotPhase::Completed {
            debug!(%slot, "refund redelivery, ignoring");
            return Ok(());
        }

        state.advance(SlotPhase::Finalizing);
        self.settlement.check_pending_bids(slot).await?;
        state.advance(SlotPhase::Refunded);
        info!(%slot, "slot refunded, awaiting next auction");
        Ok(())
    }
}
