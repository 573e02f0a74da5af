//! Contract bindings and typed event decoding for the slot auction.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]

mod bindings;
pub use bindings::{Auctioneer, OpenBidder};

mod events;
pub use events::AuctionEvent;
