//! Beta bundle relay client and wire types.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]

/// The [`RelayClient`].
pub mod client;

/// Errors returned by the [`RelayClient`].
pub mod error;

/// Wire types for the `mev_sendBetaBundle` endpoint.
pub mod types;

pub use client::RelayClient;
pub use error::RelayError;
