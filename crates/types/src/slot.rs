//! Per-slot auction state for the bidder.

use alloy::primitives::{Bytes, B256, U256};

/// Lifecycle phase of a tracked auction slot.
///
/// The declaration order is the machine order: a slot only ever moves to a
/// later phase. `Completed`, `Refunded`, and `Failed` are terminal.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SlotPhase {
    /// No bid activity yet (or a slot seen for the first time mid-auction).
    #[default]
    Idle,
    /// A signed transaction exists and the bid is being placed.
    Bidding,
    /// The bundle was accepted by the relay and the bid is open on-chain.
    Submitted,
    /// The auction settled with a claim; bundles are submitted and pending.
    AwaitingSettlement,
    /// A terminal on-chain sweep is in flight.
    Finalizing,
    /// The slot paid out.
    Completed,
    /// The slot was refunded.
    Refunded,
    /// The slot settled without a claim and was abandoned.
    Failed,
}

impl SlotPhase {
    /// True once the slot can see no further activity.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Refunded | Self::Failed)
    }
}

/// Mutable per-slot record, owned exclusively by the slot tracker.
///
/// `signed_tx` is first-write-wins: signing consumes a live nonce, so a
/// redelivered `AuctionOpened` must re-submit the cached bytes rather than
/// produce a second signature. Whether the cache is populated is the
/// authoritative gate for rebuild-vs-resubmit.
#[derive(Debug, Clone)]
pub struct SlotState {
    /// The auction slot id.
    slot: U256,
    /// Current lifecycle phase.
    phase: SlotPhase,
    /// EIP-2718 encoded signed transaction, cached on first build.
    signed_tx: Option<Bytes>,
    /// Gas limit the cached transaction was signed with.
    gas_used: Option<u64>,
    /// Bundle identifier returned by the relay.
    bundle_hash: Option<B256>,
    /// Claim reported by the auctioneer at settlement.
    balance: Option<U256>,
}

impl SlotState {
    /// A fresh slot record in [`SlotPhase::Idle`].
    pub const fn new(slot: U256) -> Self {
        Self {
            slot,
            phase: SlotPhase::Idle,
            signed_tx: None,
            gas_used: None,
            bundle_hash: None,
            balance: None,
        }
    }

    /// The auction slot id.
    pub const fn slot(&self) -> U256 {
        self.slot
    }

    /// Current lifecycle phase.
    pub const fn phase(&self) -> SlotPhase {
        self.phase
    }

    /// The cached signed transaction, if one was built this run.
    pub const fn signed_tx(&self) -> Option<&Bytes> {
        self.signed_tx.as_ref()
    }

    /// Gas limit of the cached transaction.
    pub const fn gas_used(&self) -> Option<u64> {
        self.gas_used
    }

    /// Bundle hash returned by the relay, if the bundle was accepted.
    pub const fn bundle_hash(&self) -> Option<B256> {
        self.bundle_hash
    }

    /// Claim reported by the auctioneer, once queried.
    pub const fn balance(&self) -> Option<U256> {
        self.balance
    }

    /// Cache the signed transaction for this slot. The first signature
    /// wins; later calls are ignored.
    pub fn cache_signed_tx(&mut self, raw: Bytes, gas_used: u64) {
        if self.signed_tx.is_none() {
            self.signed_tx = Some(raw);
            self.gas_used = Some(gas_used);
        }
    }

    /// Record the relay's bundle identifier.
    pub fn set_bundle_hash(&mut self, hash: B256) {
        self.bundle_hash = Some(hash);
    }

    /// Record the settlement balance.
    pub fn set_balance(&mut self, balance: U256) {
        self.balance = Some(balance);
    }

    /// Advance to `next`. Transitions are monotonic: moving to an earlier
    /// phase is a no-op, so replayed events cannot rewind a slot.
    pub fn advance(&mut self, next: SlotPhase) {
        if next > self.phase {
            self.phase = next;
        }
    }
}
