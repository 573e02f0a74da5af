use crate::Auctioneer::{self, AuctioneerEvents};
use alloy::{
    primitives::{Address, U256},
    rpc::types::Log,
    sol_types::SolEventInterface,
};

/// Auction lifecycle events emitted by the Auctioneer contract.
///
/// The log source redelivers (at-least-once), so consumers must treat a
/// repeated `(slot, kind)` pair as a replay, not a new occurrence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AuctionEvent {
    /// An [`Auctioneer::AuctionOpened`] event.
    Opened(Auctioneer::AuctionOpened),
    /// An [`Auctioneer::AuctionSettled`] event.
    Closed(Auctioneer::AuctionSettled),
    /// An [`Auctioneer::AuctionPaidOut`] event.
    PaidOut(Auctioneer::AuctionPaidOut),
    /// An [`Auctioneer::AuctionRefund`] event.
    Refunded(Auctioneer::AuctionRefund),
}

impl From<Auctioneer::AuctionOpened> for AuctionEvent {
    fn from(e: Auctioneer::AuctionOpened) -> Self {
        AuctionEvent::Opened(e)
    }
}

impl From<Auctioneer::AuctionSettled> for AuctionEvent {
    fn from(e: Auctioneer::AuctionSettled) -> Self {
        AuctionEvent::Closed(e)
    }
}

impl From<Auctioneer::AuctionPaidOut> for AuctionEvent {
    fn from(e: Auctioneer::AuctionPaidOut) -> Self {
        AuctionEvent::PaidOut(e)
    }
}

impl From<Auctioneer::AuctionRefund> for AuctionEvent {
    fn from(e: Auctioneer::AuctionRefund) -> Self {
        AuctionEvent::Refunded(e)
    }
}

impl AuctionEvent {
    /// Decode an auction event from a raw log.
    ///
    /// Pure and stateless. Returns `None` when the log was not emitted by
    /// `auctioneer` or its first topic matches none of the four known
    /// event signatures; neither case is an error.
    pub fn decode(log: &Log, auctioneer: Address) -> Option<Self> {
        if log.address() != auctioneer {
            return None;
        }
        let event = AuctioneerEvents::decode_log(&log.inner).ok().map(|log| log.data)?;

        match event {
            AuctioneerEvents::AuctionOpened(e) => Some(Self::Opened(e)),
            AuctioneerEvents::AuctionSettled(e) => Some(Self::Closed(e)),
            AuctioneerEvents::AuctionPaidOut(e) => Some(Self::PaidOut(e)),
            AuctioneerEvents::AuctionRefund(e) => Some(Self::Refunded(e)),
        }
    }

    /// The slot id the event refers to.
    pub const fn slot(&self) -> U256 {
        match self {
            Self::Opened(e) => e.slot,
            Self::Closed(e) => e.slot,
            Self::PaidOut(e) => e.slot,
            Self::Refunded(e) => e.slot,
        }
    }

    /// Short event kind label, for log context.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Opened(_) => "opened",
            Self::Closed(_) => "closed",
            Self::PaidOut(_) => "paid_out",
            Self::Refunded(_) => "refunded",
        }
    }

    /// True if this event is an [`Auctioneer::AuctionOpened`] event.
    pub const fn is_opened(&self) -> bool {
        matches!(self, Self::Opened(_))
    }

    /// Fallible cast to an [`Auctioneer::AuctionOpened`] event.
    pub const fn as_opened(&self) -> Option<&Auctioneer::AuctionOpened> {
        match &self {
            Self::Opened(e) => Some(e),
            _ => None,
        }
    }

    /// True if this event is an [`Auctioneer::AuctionSettled`] event.
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed(_))
    }

    /// Fallible cast to an [`Auctioneer::AuctionSettled`] event.
    pub const fn as_closed(&self) -> Option<&Auctioneer::AuctionSettled> {
        match &self {
            Self::Closed(e) => Some(e),
            _ => None,
        }
    }

    /// True if this event is an [`Auctioneer::AuctionPaidOut`] event.
    pub const fn is_paid_out(&self) -> bool {
        matches!(self, Self::PaidOut(_))
    }

    /// True if this event is an [`Auctioneer::AuctionRefund`] event.
    pub const fn is_refunded(&self) -> bool {
        matches!(self, Self::Refunded(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{
        primitives::{address, aliases::U120, Bytes, LogData, B256},
        sol_types::SolEvent,
    };

    const AUCTIONEER: Address = address!("000000000000000000000000000000000000aaaa");

    fn log_from(address: Address, data: LogData) -> Log {
        Log { inner: alloy::primitives::Log { address, data }, ..Default::default() }
    }

    fn opened(slot: u64) -> LogData {
        Auctioneer::AuctionOpened { slot: U256::from(slot), itemsForSale: U120::from(30u64) }
            .encode_log_data()
    }

    #[test]
    fn decodes_all_four_kinds() {
        let log = log_from(AUCTIONEER, opened(5));
        let event = AuctionEvent::decode(&log, AUCTIONEER).unwrap();
        assert!(event.is_opened());
        assert_eq!(event.slot(), U256::from(5));
        assert_eq!(event.as_opened().unwrap().items_for_sale(), 30);

        let log = log_from(
            AUCTIONEER,
            Auctioneer::AuctionSettled { slot: U256::from(6) }.encode_log_data(),
        );
        let event = AuctionEvent::decode(&log, AUCTIONEER).unwrap();
        assert!(event.is_closed());
        assert_eq!(event.slot(), U256::from(6));

        let log = log_from(
            AUCTIONEER,
            Auctioneer::AuctionPaidOut { slot: U256::from(7) }.encode_log_data(),
        );
        let event = AuctionEvent::decode(&log, AUCTIONEER).unwrap();
        assert!(event.is_paid_out());
        assert_eq!(event.slot(), U256::from(7));

        let log = log_from(
            AUCTIONEER,
            Auctioneer::AuctionRefund { slot: U256::from(8) }.encode_log_data(),
        );
        let event = AuctionEvent::decode(&log, AUCTIONEER).unwrap();
        assert!(event.is_refunded());
        assert_eq!(event.slot(), U256::from(8));
    }

    #[test]
    fn foreign_address_is_dropped() {
        let stranger = address!("000000000000000000000000000000000000ffff");
        let log = log_from(stranger, opened(5));
        assert!(AuctionEvent::decode(&log, AUCTIONEER).is_none());
    }

    #[test]
    fn unknown_signature_is_dropped() {
        let junk = LogData::new_unchecked(
            vec![B256::repeat_byte(0x99), B256::repeat_byte(0x05)],
            Bytes::new(),
        );
        let log = log_from(AUCTIONEER, junk);
        assert!(AuctionEvent::decode(&log, AUCTIONEER).is_none());
    }

    #[test]
    fn slot_comes_from_the_indexed_topic() {
        let data = opened(77);
        assert_eq!(data.topics()[1], B256::from(U256::from(77)));
        let log = log_from(AUCTIONEER, data);
        assert_eq!(AuctionEvent::decode(&log, AUCTIONEER).unwrap().slot(), U256::from(77));
    }

    #[test]
    fn casts_return_none_for_other_kinds() {
        let log = log_from(
            AUCTIONEER,
            Auctioneer::AuctionSettled { slot: U256::from(5) }.encode_log_data(),
        );
        let event = AuctionEvent::decode(&log, AUCTIONEER).unwrap();
        assert!(event.as_opened().is_none());
        assert!(!event.is_opened());
        assert!(event.as_closed().is_some());
    }

    #[test]
    fn from_impls_tag_the_right_variant() {
        let event: AuctionEvent =
            Auctioneer::AuctionPaidOut { slot: U256::from(9) }.into();
        assert!(event.is_paid_out());
        assert!(!event.is_refunded());
    }
}
