#![allow(missing_docs)]
use alloy::primitives::U256;

mod auctioneer {
    alloy::sol!(
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[sol(rpc)]
        contract Auctioneer {
            /// A new auction round opened for bidding.
            event AuctionOpened(uint256 indexed slot, uint120 itemsForSale);
            /// The auction for a slot closed and settled.
            event AuctionSettled(uint256 indexed slot);
            /// Auction proceeds for a slot were paid out.
            event AuctionPaidOut(uint256 indexed slot);
            /// A slot's committed funds were refunded.
            event AuctionRefund(uint256 indexed slot);

            /// Remaining claim of `bidder` against `slot`.
            function balanceOf(address bidder, uint256 slot) external view returns (uint256);
        }
    );
}

pub use auctioneer::Auctioneer;

impl Copy for Auctioneer::AuctionOpened {}
impl Copy for Auctioneer::AuctionSettled {}
impl Copy for Auctioneer::AuctionPaidOut {}
impl Copy for Auctioneer::AuctionRefund {}

impl Auctioneer::AuctionOpened {
    /// The auction slot id.
    pub const fn slot(&self) -> U256 {
        self.slot
    }

    /// Gas items offered for sale in this round (discarding high bytes).
    pub const fn items_for_sale(&self) -> u64 {
        self.itemsForSale.as_limbs()[0]
    }
}

impl Auctioneer::AuctionSettled {
    /// The auction slot id.
    pub const fn slot(&self) -> U256 {
        self.slot
    }
}

impl Auctioneer::AuctionPaidOut {
    /// The auction slot id.
    pub const fn slot(&self) -> U256 {
        self.slot
    }
}

impl Auctioneer::AuctionRefund {
    /// The auction slot id.
    pub const fn slot(&self) -> U256 {
        self.slot
    }
}

mod open_bidder {
    alloy::sol!(
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[sol(rpc)]
        contract OpenBidder {
            /// Open a bid for gas, backed by the relay's bundle hash.
            function openBid(uint256 weiPerGas, uint256 gasUsed, bytes32 bundleHash) external payable;
            /// Finalize bundle submission for a settled slot.
            function submitBundles(uint256 slot) external;
            /// Sweep pending bid accounting for a slot.
            function checkPendingBids(uint256 slot) external;
        }
    );
}

pub use open_bidder::OpenBidder;
